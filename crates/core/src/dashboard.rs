//! Static dashboard data.
//!
//! The overview page shows automation metrics and workflow status, and the
//! automation page lists the scheduled workflows. None of it is backed by a
//! real pipeline; the values below are what the dashboard renders.

use serde::Serialize;

/// How a metric value should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricFormat {
    Number,
    Percentage,
    Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: f64,
    /// Percentage change since the previous period.
    pub change: i32,
    pub color: &'static str,
    pub format: MetricFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Running,
    Completed,
    Paused,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: &'static str,
    pub name: &'static str,
    pub status: WorkflowStatus,
    /// Completion percentage, `0..=100`.
    pub progress: u8,
    pub eta: &'static str,
    pub last_run: &'static str,
    pub total_runs: u32,
    pub success_rate: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Active,
    Paused,
}

/// An automation configured on the automation page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledWorkflow {
    pub name: &'static str,
    pub description: &'static str,
    pub status: ScheduleStatus,
    /// Human-readable trigger, e.g. "Daily at 9:00 AM".
    pub frequency: &'static str,
    pub color: &'static str,
}

fn metric(label: &'static str, value: f64, change: i32, color: &'static str, format: MetricFormat) -> Metric {
    Metric {
        label,
        value,
        change,
        color,
        format,
    }
}

pub fn metrics() -> Vec<Metric> {
    use MetricFormat::*;

    vec![
        metric("Content Ideas Generated", 127.0, 23, "blue", Number),
        metric("Scripts Created", 45.0, 12, "purple", Number),
        metric("Thumbnails Generated", 89.0, 34, "green", Number),
        metric("SEO Optimization Rate", 92.0, 5, "orange", Percentage),
        metric("Avg. Processing Time", 2.3, -15, "red", Duration),
        metric("Workflow Efficiency", 87.0, 8, "indigo", Percentage),
    ]
}

pub fn workflows() -> Vec<Workflow> {
    vec![
        Workflow {
            id: "1",
            name: "Daily Content Ideas Generation",
            status: WorkflowStatus::Running,
            progress: 67,
            eta: "5 minutes",
            last_run: "2 hours ago",
            total_runs: 89,
            success_rate: 98,
        },
        Workflow {
            id: "2",
            name: "Weekly Script Batch Creation",
            status: WorkflowStatus::Completed,
            progress: 100,
            eta: "Completed",
            last_run: "1 day ago",
            total_runs: 12,
            success_rate: 92,
        },
        Workflow {
            id: "3",
            name: "Thumbnail A/B Test Generator",
            status: WorkflowStatus::Paused,
            progress: 0,
            eta: "Paused",
            last_run: "3 days ago",
            total_runs: 45,
            success_rate: 87,
        },
        Workflow {
            id: "4",
            name: "SEO Optimization Pipeline",
            status: WorkflowStatus::Running,
            progress: 34,
            eta: "12 minutes",
            last_run: "30 minutes ago",
            total_runs: 156,
            success_rate: 94,
        },
        Workflow {
            id: "5",
            name: "Performance Analytics Sync",
            status: WorkflowStatus::Error,
            progress: 0,
            eta: "Failed",
            last_run: "1 hour ago",
            total_runs: 234,
            success_rate: 89,
        },
    ]
}

pub fn scheduled_workflows() -> Vec<ScheduledWorkflow> {
    use ScheduleStatus::*;

    let scheduled = |name: &'static str,
                     description: &'static str,
                     status: ScheduleStatus,
                     frequency: &'static str,
                     color: &'static str| ScheduledWorkflow {
        name,
        description,
        status,
        frequency,
        color,
    };

    vec![
        scheduled(
            "Daily Content Ideas",
            "Generate fresh content ideas every morning",
            Active,
            "Daily at 9:00 AM",
            "blue",
        ),
        scheduled(
            "Weekly Script Generation",
            "Create scripts for upcoming videos",
            Active,
            "Sundays at 6:00 PM",
            "purple",
        ),
        scheduled(
            "Thumbnail A/B Testing",
            "Auto-generate and test thumbnail variants",
            Paused,
            "On new video upload",
            "green",
        ),
        scheduled(
            "SEO Optimization",
            "Optimize titles, descriptions, and tags",
            Active,
            "After content creation",
            "orange",
        ),
    ]
}
