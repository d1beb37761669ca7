// src/services/architecture.rs
//! Mock system architecture shown in the animated diagram: a fixed
//! pipeline of components plus per-request random traffic figures.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArchitectureStep {
    pub id: u32,
    pub label: &'static str,
    pub description: &'static str,
    pub component: &'static str,
    pub status: ComponentStatus,
    pub latency: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealth {
    pub overall: ComponentStatus,
    pub components: usize,
    pub online: usize,
    pub uptime: f64,
    pub last_check: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeConnection {
    pub from: u32,
    pub to: u32,
    pub bandwidth: &'static str,
    pub latency: u32,
}

#[derive(Debug, Serialize)]
pub struct SystemTopology {
    pub name: &'static str,
    pub version: &'static str,
    pub nodes: Vec<ArchitectureStep>,
    pub connections: Vec<NodeConnection>,
    pub regions: Vec<&'static str>,
    pub redundancy: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundFlow {
    pub requests: i64,
    pub data_size: String,
    pub throughput: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingFlow {
    pub active_jobs: i64,
    pub avg_duration: String,
    pub success_rate: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundFlow {
    pub responses: i64,
    pub data_size: String,
    pub throughput: String,
}

#[derive(Debug, Serialize)]
pub struct DataFlow {
    pub inbound: InboundFlow,
    pub processing: ProcessingFlow,
    pub outbound: OutboundFlow,
}

#[derive(Debug, Serialize)]
pub struct SystemArchitecture {
    pub steps: Vec<ArchitectureStep>,
    pub health: SystemHealth,
}

pub fn architecture_steps() -> Vec<ArchitectureStep> {
    vec![
        ArchitectureStep {
            id: 1,
            label: "Edge Web Layer",
            description: "Custom widget injection & client-side rendering",
            component: "Globe",
            status: ComponentStatus::Healthy,
            latency: 2,
        },
        ArchitectureStep {
            id: 2,
            label: "Interface Core",
            description: "WebSocket transmission & real-time sync",
            component: "MessageSquare",
            status: ComponentStatus::Healthy,
            latency: 4,
        },
        ArchitectureStep {
            id: 3,
            label: "Neural Nexus",
            description: "GPT-4o + Vector RAG embeddings",
            component: "BrainCircuit",
            status: ComponentStatus::Healthy,
            latency: 145,
        },
        ArchitectureStep {
            id: 4,
            label: "Orchestrator",
            description: "Node.js compute cluster & load balancing",
            component: "Server",
            status: ComponentStatus::Healthy,
            latency: 8,
        },
        ArchitectureStep {
            id: 5,
            label: "Persistence",
            description: "MongoDB Atlas & distributed database",
            component: "Database",
            status: ComponentStatus::Healthy,
            latency: 15,
        },
    ]
}

pub fn system_health() -> SystemHealth {
    let steps = architecture_steps();
    let components = steps.len();
    let online = steps
        .iter()
        .filter(|s| s.status == ComponentStatus::Healthy)
        .count();

    let overall = if online < components {
        if online < components / 2 {
            ComponentStatus::Critical
        } else {
            ComponentStatus::Warning
        }
    } else {
        ComponentStatus::Healthy
    };

    SystemHealth {
        overall,
        components,
        online,
        uptime: 99.98,
        last_check: Utc::now(),
    }
}

pub fn system_topology() -> SystemTopology {
    SystemTopology {
        name: "NextGen AI Neural Network",
        version: "4.0",
        nodes: architecture_steps(),
        connections: vec![
            NodeConnection { from: 0, to: 1, bandwidth: "10Gbps", latency: 2 },
            NodeConnection { from: 1, to: 2, bandwidth: "5Gbps", latency: 4 },
            NodeConnection { from: 2, to: 3, bandwidth: "8Gbps", latency: 8 },
            NodeConnection { from: 3, to: 4, bandwidth: "15Gbps", latency: 15 },
        ],
        regions: vec!["us-east-1", "eu-west-1", "ap-southeast-1"],
        redundancy: "multi-region active-active",
    }
}

pub fn data_flow() -> DataFlow {
    DataFlow {
        inbound: InboundFlow {
            requests: utils::rand_int(500, 1500),
            data_size: format!("{}MB", utils::rand_int(10, 60)),
            throughput: format!("{}Mbps", utils::rand_int(50, 150)),
        },
        processing: ProcessingFlow {
            active_jobs: utils::rand_int(10, 60),
            avg_duration: format!("{}ms", utils::rand_int(50, 250)),
            success_rate: format!("{:.2}%", utils::rand_float(95.0, 100.0)),
        },
        outbound: OutboundFlow {
            responses: utils::rand_int(500, 1500),
            data_size: format!("{}MB", utils::rand_int(5, 45)),
            throughput: format!("{}Mbps", utils::rand_int(40, 120)),
        },
    }
}

pub fn full_architecture() -> SystemArchitecture {
    SystemArchitecture {
        steps: architecture_steps(),
        health: system_health(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_is_fixed() {
        let steps = architecture_steps();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0].label, "Edge Web Layer");
        assert_eq!(steps[2].label, "Neural Nexus");
        assert_eq!(steps[2].latency, 145);
        assert_eq!(steps[4].component, "Database");
    }

    #[test]
    fn test_health_reports_all_components_online() {
        let health = system_health();
        assert_eq!(health.overall, ComponentStatus::Healthy);
        assert_eq!(health.components, 5);
        assert_eq!(health.online, 5);
        assert_eq!(health.uptime, 99.98);
    }

    #[test]
    fn test_topology_links_every_adjacent_node() {
        let topology = system_topology();
        assert_eq!(topology.name, "NextGen AI Neural Network");
        assert_eq!(topology.connections.len(), topology.nodes.len() - 1);
        for (i, connection) in topology.connections.iter().enumerate() {
            assert_eq!(connection.from, i as u32);
            assert_eq!(connection.to, i as u32 + 1);
        }
    }

    #[test]
    fn test_data_flow_stays_in_bounds() {
        for _ in 0..100 {
            let flow = data_flow();
            assert!((500..1500).contains(&flow.inbound.requests));
            assert!((10..60).contains(
                &flow.inbound.data_size.trim_end_matches("MB").parse::<i64>().unwrap()
            ));
            assert!((10..60).contains(&flow.processing.active_jobs));

            let rate: f64 = flow
                .processing
                .success_rate
                .trim_end_matches('%')
                .parse()
                .unwrap();
            assert!((95.0..100.01).contains(&rate));

            assert!((500..1500).contains(&flow.outbound.responses));
            assert!((40..120).contains(
                &flow.outbound.throughput.trim_end_matches("Mbps").parse::<i64>().unwrap()
            ));
        }
    }
}
