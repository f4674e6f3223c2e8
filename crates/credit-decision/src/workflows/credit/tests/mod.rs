mod common;
pub(super) mod log_capture;
mod routing;
