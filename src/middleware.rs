//! src/middleware.rs
use crate::configuration::Settings;
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{web, Error, HttpResponse};

/// Rejects any request whose Host header does not name the configured host.
/// Runs ahead of every route to keep Host header attacks away from handlers.
pub async fn require_allowed_host(
    settings: web::Data<Settings>,
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let host = req.connection_info().host().to_owned();

    if !host_matches(&host, &settings.allowed_host) {
        tracing::warn!(host = %host, "rejected request for disallowed host");
        let response = HttpResponse::BadRequest().body(format!("Invalid Host header: {}", host));
        return Ok(req.into_response(response));
    }

    next.call(req)
        .await
        .map(ServiceResponse::map_into_boxed_body)
}

/// Ports are ignored and matching is ASCII case-insensitive. An empty host
/// never matches.
fn host_matches(header: &str, allowed: &str) -> bool {
    let name = hostname(header);
    !name.is_empty() && name.eq_ignore_ascii_case(hostname(allowed))
}

/// Drops a trailing `:port`. Bracketed IPv6 literals keep their brackets.
fn hostname(host: &str) -> &str {
    if let Some(end) = host.rfind(']') {
        return &host[..=end];
    }
    host.split(':').next().unwrap_or(host)
}
