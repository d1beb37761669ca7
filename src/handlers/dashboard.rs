// src/handlers/dashboard.rs
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::services::dashboard::{self, DashboardMetrics, PerformanceMetrics, RealtimeMetrics};

pub fn dashboard_routes() -> Router {
    Router::new()
        .route("/api/dashboard/metrics", get(get_metrics))
        .route("/api/dashboard/analytics", get(get_analytics))
        .route("/api/dashboard/distribution", get(get_distribution))
        .route("/api/dashboard/stats", get(get_stats))
        .route("/api/dashboard/realtime", get(get_realtime))
        .route("/api/dashboard/performance", get(get_performance))
}

async fn get_metrics() -> Json<DashboardMetrics> {
    Json(dashboard::all_metrics())
}

async fn get_analytics() -> Json<Value> {
    Json(json!({ "analyticsData": dashboard::analytics_data() }))
}

async fn get_distribution() -> Json<Value> {
    Json(json!({ "distributionData": dashboard::lead_distribution() }))
}

async fn get_stats() -> Json<Value> {
    Json(json!({ "stats": dashboard::stats() }))
}

async fn get_realtime() -> Json<RealtimeMetrics> {
    Json(dashboard::realtime_metrics())
}

async fn get_performance() -> Json<PerformanceMetrics> {
    Json(dashboard::performance_metrics())
}
