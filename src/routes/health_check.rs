use actix_web::HttpResponse;

/// Liveness probe. It never reaches out to the member service.
#[tracing::instrument(name = "Health Check handler")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
