use chrono::NaiveDate;
use clap::Args;
use credit_decision::config::AppConfig;
use credit_decision::error::AppError;
use credit_decision::telemetry;
use credit_decision::workflows::credit::{
    evaluate_batch, Application, BatchEntry, BatchReport, Clock, CreditDecisionEngine,
    DecisionConfig, FixedClock, SystemClock,
};
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding one application or an array of applications
    pub(crate) input: PathBuf,
    /// Evaluation date used for the age check (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date used for the age check (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Debug)]
enum ApplicationInput {
    Batch(Vec<Application>),
    Single(Box<Application>),
}

impl ApplicationInput {
    /// A top-level array is a batch, anything else a single application.
    fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim_start().starts_with('[') {
            serde_json::from_str(raw).map(ApplicationInput::Batch)
        } else {
            serde_json::from_str(raw)
                .map(|application| ApplicationInput::Single(Box::new(application)))
        }
    }
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { input, as_of } = args;
    let decision_config = init_cli()?;

    let raw = std::fs::read_to_string(&input)?;
    let parsed = ApplicationInput::parse(&raw)?;

    match as_of {
        Some(date) => evaluate_input(
            &CreditDecisionEngine::with_clock(decision_config, FixedClock(date)),
            parsed,
        ),
        None => evaluate_input(
            &CreditDecisionEngine::with_clock(decision_config, SystemClock),
            parsed,
        ),
    }
}

fn evaluate_input<C: Clock>(
    engine: &CreditDecisionEngine<C>,
    input: ApplicationInput,
) -> Result<(), AppError> {
    match input {
        ApplicationInput::Single(application) => {
            let decision = engine.run_credit_check(&application)?;
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
        ApplicationInput::Batch(applications) => {
            let report = evaluate_batch(engine, &applications);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let decision_config = init_cli()?;
    let applications = sample_applications()?;

    println!("Credit decision demo");
    let report = match args.as_of {
        Some(date) => evaluate_batch(
            &CreditDecisionEngine::with_clock(decision_config, FixedClock(date)),
            &applications,
        ),
        None => evaluate_batch(
            &CreditDecisionEngine::with_clock(decision_config, SystemClock),
            &applications,
        ),
    };
    render_batch(&report);

    Ok(())
}

fn init_cli() -> Result<DecisionConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config.decision)
}

fn render_batch(report: &BatchReport) {
    for entry in &report.entries {
        match entry {
            BatchEntry::Decided(decision) => {
                println!("\nApplication {}", decision.application_id);
                for (check, outcome) in decision.check_outcomes.iter() {
                    let status = if outcome.failed { "FAIL" } else { "pass" };
                    println!(
                        "- {}: {} (measured {})",
                        check.label(),
                        status,
                        outcome.measured_value
                    );
                }
                println!("{}", decision.summary());
            }
            BatchEntry::Failed {
                application_id,
                error,
                ..
            } => {
                println!("\nApplication {application_id}: not evaluated ({error})");
            }
        }
    }

    println!(
        "\nSummary: {} accepted, {} rejected, {} failed",
        report.accepted, report.rejected, report.failed
    );
}

fn sample_applications() -> Result<Vec<Application>, serde_json::Error> {
    let clean = json!({
        "application_id": 123456,
        "NB36_risk_score": 600,
        "credit_bureau_report": {
            "consumerIdentity": {
                "name": [{ "firstName": "LUKE", "middleName": "PAUL", "surname": "DUVERGER" }],
                "date_of_birth": { "day": 23, "month": 11, "year": 1964 }
            },
            "riskModel": [{ "credit_score": "0787" }],
            "tradeline": [
                {
                    "accountType": "07", "amount1": "00002650", "amount1Qualifier": "L",
                    "amount2": "00002631", "amount2Qualifier": "H", "balanceAmount": "00000000",
                    "balanceDate": "06282017", "delinquencies30Days": "00",
                    "delinquencies60Days": "00", "delinquencies90to180Days": "00",
                    "openOrClosed": "C"
                },
                {
                    "accountType": "07", "amount1": "00000500", "amount1Qualifier": "L",
                    "amount2": "00000049", "amount2Qualifier": "H", "balanceDate": "09132022",
                    "delinquencies30Days": "00", "delinquencies60Days": "00",
                    "delinquencies90to180Days": "00", "openOrClosed": "O"
                },
                {
                    "accountType": "26", "amount1": "00088600", "amount1Qualifier": "O",
                    "balanceDate": "08212019", "delinquencies30Days": "00",
                    "delinquencies60Days": "00", "delinquencies90to180Days": "00",
                    "openOrClosed": "O"
                }
            ]
        }
    });

    let delinquent = json!({
        "application_id": 123457,
        "NB36_risk_score": 600,
        "credit_bureau_report": {
            "consumerIdentity": {
                "name": [{ "firstName": "LAILA", "middleName": "", "surname": "MUELLER" }],
                "date_of_birth": { "day": 23, "month": 11, "year": 1964 }
            },
            "riskModel": [{ "credit_score": "0832" }],
            "tradeline": [
                {
                    "accountType": "07", "amount1": "00002650", "amount1Qualifier": "L",
                    "balanceAmount": "00000000", "balanceDate": "06282017",
                    "delinquencies30Days": "00", "openOrClosed": "C"
                },
                {
                    "accountType": "07", "amount1": "00000500", "amount1Qualifier": "L",
                    "balanceDate": "09132022", "delinquencies30Days": "01",
                    "openOrClosed": "O"
                },
                {
                    "accountType": "19", "amount1": "00029650", "amount1Qualifier": "O",
                    "balanceDate": "07062019", "openOrClosed": "O"
                }
            ]
        }
    });

    serde_json::from_value(json!([clean, delinquent]))
}
