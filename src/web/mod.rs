// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use crate::analysis::CvAnalyzer;
use crate::environment::EnvironmentConfig;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "authorization, x-client-info, apikey, content-type",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
    }
}

#[post("/analyze-cv", data = "<body>")]
pub async fn analyze_cv(
    body: String,
    analyzer: &State<CvAnalyzer>,
) -> Result<Json<serde_json::Value>, Custom<Json<ErrorResponse>>> {
    handlers::analyze_cv_handler(body, analyzer).await
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

/// Preflight handler; the CORS fairing supplies the headers.
#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers

#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request format".to_string()))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Analysis failed".to_string()))
}

/// Assemble the Rocket instance: fairing, managed analyzer, routes, catchers.
pub fn build_server(config: EnvironmentConfig) -> Result<Rocket<Build>> {
    let analyzer = CvAnalyzer::new(config.gateway_url.clone(), config.model.clone())?;

    Ok(rocket::build()
        .attach(Cors)
        .manage(analyzer)
        .register("/", catchers![bad_request, internal_error])
        .mount("/", routes![analyze_cv, health, options]))
}

// Main server start function
pub async fn start_web_server(config: EnvironmentConfig, port: u16) -> Result<()> {
    info!("Starting CVScope analysis API server");
    info!("Gateway: {}", config.gateway_url);
    info!("Model: {}", config.model);

    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    let _rocket = build_server(config)?.configure(figment).launch().await;

    Ok(())
}
