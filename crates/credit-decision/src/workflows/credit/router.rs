use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::batch::evaluate_batch;
use super::domain::Application;
use super::engine::{Clock, CreditDecisionEngine};

/// Router builder exposing the decision engine over JSON.
pub fn decision_router<C>(engine: Arc<CreditDecisionEngine<C>>) -> Router
where
    C: Clock + 'static,
{
    Router::new()
        .route("/api/v1/credit/decisions", post(decision_handler::<C>))
        .route(
            "/api/v1/credit/decisions/batch",
            post(batch_handler::<C>),
        )
        .with_state(engine)
}

pub(crate) async fn decision_handler<C>(
    State(engine): State<Arc<CreditDecisionEngine<C>>>,
    axum::Json(application): axum::Json<Application>,
) -> Response
where
    C: Clock + 'static,
{
    match engine.run_credit_check(&application) {
        Ok(decision) => (StatusCode::OK, axum::Json(decision)).into_response(),
        Err(error) => {
            let payload = json!({
                "application_id": application.application_id,
                "kind": error.kind(),
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn batch_handler<C>(
    State(engine): State<Arc<CreditDecisionEngine<C>>>,
    axum::Json(applications): axum::Json<Vec<Application>>,
) -> Response
where
    C: Clock + 'static,
{
    let report = evaluate_batch(&*engine, &applications);
    (StatusCode::OK, axum::Json(report)).into_response()
}
