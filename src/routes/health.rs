use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::db::catalog::TourCatalog;
use crate::db::sessions::SessionStore;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(
    catalog: web::Data<Arc<TourCatalog>>,
    sessions: web::Data<Arc<SessionStore>>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    health.services.insert(
        "catalog".to_string(),
        ServiceStatus {
            status: if catalog.is_empty() { "error" } else { "ok" }.to_string(),
            details: Some(format!("{} tours loaded", catalog.len())),
        },
    );

    health.services.insert(
        "sessions".to_string(),
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} active booking sessions", sessions.len())),
        },
    );

    if health.services.values().any(|service| service.status != "ok") {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}
