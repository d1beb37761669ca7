// src/handlers/architecture.rs
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::services::architecture::{
    self, DataFlow, SystemArchitecture, SystemHealth, SystemTopology,
};

pub fn architecture_routes() -> Router {
    Router::new()
        .route("/api/architecture/steps", get(get_steps))
        .route("/api/architecture/health", get(get_health))
        .route("/api/architecture/topology", get(get_topology))
        .route("/api/architecture/dataflow", get(get_dataflow))
        .route("/api/architecture/full", get(get_full))
}

async fn get_steps() -> Json<Value> {
    Json(json!({ "steps": architecture::architecture_steps() }))
}

async fn get_health() -> Json<SystemHealth> {
    Json(architecture::system_health())
}

async fn get_topology() -> Json<SystemTopology> {
    Json(architecture::system_topology())
}

async fn get_dataflow() -> Json<DataFlow> {
    Json(architecture::data_flow())
}

async fn get_full() -> Json<SystemArchitecture> {
    Json(architecture::full_architecture())
}
