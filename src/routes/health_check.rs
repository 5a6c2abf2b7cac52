//! src/routes/health_check.rs
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder};

/// Answers every method on `/` with a fixed `OK`.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OK")
}
