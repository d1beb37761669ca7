// src/services/dashboard.rs
//! Mock dashboard data for the marketing site. The weekly series and the
//! distribution are fixed; the "realtime" and "performance" numbers are
//! sampled fresh on every request and carry no operational meaning.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils;

#[derive(Debug, Clone, Serialize)]
pub struct DayAnalytics {
    pub name: &'static str,
    pub leads: u32,
    pub conv: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadBucket {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub analytics_data: Vec<DayAnalytics>,
    pub distribution_data: Vec<LeadBucket>,
    pub stats: Vec<StatCard>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeMetrics {
    pub active_leads: i64,
    pub conversion_rate: String,
    pub avg_response_time: String,
    pub quality_score: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub cpu_usage: i64,
    pub memory_usage: i64,
    pub requests_per_second: i64,
    pub error_rate: String,
    pub uptime: f64,
}

/// Weekly lead/conversion counts shown in the area chart.
pub fn analytics_data() -> Vec<DayAnalytics> {
    vec![
        DayAnalytics { name: "Mon", leads: 400, conv: 240 },
        DayAnalytics { name: "Tue", leads: 300, conv: 139 },
        DayAnalytics { name: "Wed", leads: 600, conv: 380 },
        DayAnalytics { name: "Thu", leads: 800, conv: 490 },
        DayAnalytics { name: "Fri", leads: 500, conv: 390 },
        DayAnalytics { name: "Sat", leads: 400, conv: 200 },
        DayAnalytics { name: "Sun", leads: 300, conv: 150 },
    ]
}

/// Lead temperature split shown in the donut chart.
pub fn lead_distribution() -> Vec<LeadBucket> {
    vec![
        LeadBucket { name: "Hot", value: 45, color: "#ff00e5" },
        LeadBucket { name: "Warm", value: 30, color: "#ff8a00" },
        LeadBucket { name: "Cold", value: 25, color: "#0066ff" },
    ]
}

pub fn stats() -> Vec<StatCard> {
    vec![
        StatCard { label: "AI Response Quality", value: "98.4%", color: "text-primary" },
        StatCard { label: "Lead Capture Rate", value: "+215%", color: "text-accent" },
        StatCard { label: "Avg. Latency", value: "0.12s", color: "text-secondary" },
    ]
}

pub fn all_metrics() -> DashboardMetrics {
    DashboardMetrics {
        analytics_data: analytics_data(),
        distribution_data: lead_distribution(),
        stats: stats(),
    }
}

pub fn realtime_metrics() -> RealtimeMetrics {
    RealtimeMetrics {
        active_leads: utils::rand_int(50, 200),
        conversion_rate: format!("{:.2}", utils::rand_float(15.0, 50.0)),
        avg_response_time: format!("{}ms", utils::rand_int(12, 112)),
        quality_score: format!("{:.1}", utils::rand_float(90.0, 98.0)),
        timestamp: Utc::now(),
    }
}

pub fn performance_metrics() -> PerformanceMetrics {
    PerformanceMetrics {
        cpu_usage: utils::rand_int(20, 60),
        memory_usage: utils::rand_int(30, 80),
        requests_per_second: utils::rand_int(100, 300),
        error_rate: format!("{:.3}", utils::rand_float(0.0, 0.5)),
        uptime: 99.98,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_series_is_fixed() {
        let data = analytics_data();
        assert_eq!(data.len(), 7);
        assert_eq!(data[0].name, "Mon");
        assert_eq!(data[0].leads, 400);
        assert_eq!(data[0].conv, 240);
        assert_eq!(data[6].name, "Sun");
        assert_eq!(data[6].conv, 150);
    }

    #[test]
    fn test_distribution_sums_to_hundred() {
        let buckets = lead_distribution();
        assert_eq!(buckets.iter().map(|b| b.value).sum::<u32>(), 100);
        assert_eq!(buckets[0].name, "Hot");
        assert_eq!(buckets[0].color, "#ff00e5");
    }

    #[test]
    fn test_realtime_metrics_stay_in_bounds() {
        for _ in 0..100 {
            let metrics = realtime_metrics();
            assert!((50..200).contains(&metrics.active_leads));

            let rate: f64 = metrics.conversion_rate.parse().unwrap();
            assert!((15.0..50.01).contains(&rate));

            let ms: i64 = metrics.avg_response_time.trim_end_matches("ms").parse().unwrap();
            assert!((12..112).contains(&ms));

            let score: f64 = metrics.quality_score.parse().unwrap();
            assert!((90.0..98.01).contains(&score));
        }
    }

    #[test]
    fn test_performance_metrics_stay_in_bounds() {
        for _ in 0..100 {
            let metrics = performance_metrics();
            assert!((20..60).contains(&metrics.cpu_usage));
            assert!((30..80).contains(&metrics.memory_usage));
            assert!((100..300).contains(&metrics.requests_per_second));

            let error_rate: f64 = metrics.error_rate.parse().unwrap();
            assert!((0.0..0.501).contains(&error_rate));
            assert_eq!(metrics.uptime, 99.98);
        }
    }
}
