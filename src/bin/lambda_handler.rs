//! AWS Lambda handler for running retirement projections
//!
//! Accepts a profile in the web front-end's camelCase JSON schema and returns
//! the full year-by-year projection plus the summary.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};

use pension_strategy::{
    projection::{CalculationResult, ProjectionConfig, ProjectionEngine},
    Assumptions, UserInput,
};

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(
            serde_json::json!({ "error": message }).to_string(),
        ))
        .unwrap()
}

fn json_response(body: &CalculationResult) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => {
            return Ok(error_response(400, "Missing request body"));
        }
    };

    let input: UserInput = match serde_json::from_str(&body_str) {
        Ok(i) => i,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let engine = ProjectionEngine::new(Assumptions::default_policy(), ProjectionConfig::for_today());
    let result = match engine.project(&input) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("rejected profile: {}", e);
            return Ok(error_response(422, &e.to_string()));
        }
    };

    log::info!(
        "projected {} years across {} scenarios in {:?}",
        result.projections.len(),
        input.scenarios.len(),
        start.elapsed()
    );

    Ok(json_response(&result))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
