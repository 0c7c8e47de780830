//! Handlers for the dashboard overview and automation widgets.

use axum::Json;
use serde::Serialize;

use tubeagent_core::dashboard::{self, Metric, ScheduledWorkflow, Workflow};

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: Vec<Metric>,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct WorkflowsResponse {
    pub workflows: Vec<Workflow>,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct AutomationsResponse {
    pub automations: Vec<ScheduledWorkflow>,
    pub success: bool,
}

/// GET /dashboard/metrics
pub async fn metrics() -> Json<MetricsResponse> {
    Json(MetricsResponse {
        metrics: dashboard::metrics(),
        success: true,
    })
}

/// GET /dashboard/workflows
pub async fn workflows() -> Json<WorkflowsResponse> {
    Json(WorkflowsResponse {
        workflows: dashboard::workflows(),
        success: true,
    })
}

/// GET /dashboard/automations
pub async fn automations() -> Json<AutomationsResponse> {
    Json(AutomationsResponse {
        automations: dashboard::scheduled_workflows(),
        success: true,
    })
}
