use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize)]
struct RootResponse {
    message: &'static str,
}

/// Liveness: constant payload, never touches the database.
pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(RootResponse {
        message: "Hello World",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root));
}
