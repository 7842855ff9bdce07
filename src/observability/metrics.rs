//! Metrics for the todo service
//!
//! Metric names follow the Prometheus naming conventions. Recording is a
//! no-op until [`init`] installs the Prometheus recorder.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// Enum representing all metric names used in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    TodosCreated,
    TodosUpdated,
    TodosDeleted,
    TodosToggled,
    BulkItemFailures,
    ValidationFailures,
    TodosStored,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::TodosCreated => "todo_bff_todos_created_total",
            MetricName::TodosUpdated => "todo_bff_todos_updated_total",
            MetricName::TodosDeleted => "todo_bff_todos_deleted_total",
            MetricName::TodosToggled => "todo_bff_todos_toggled_total",
            MetricName::BulkItemFailures => "todo_bff_bulk_item_failures_total",
            MetricName::ValidationFailures => "todo_bff_validation_failures_total",
            MetricName::TodosStored => "todo_bff_todos_stored",
        }
    }

    /// Human-readable description registered with the exporter
    pub fn description(&self) -> &'static str {
        match self {
            MetricName::TodosCreated => "Todos created",
            MetricName::TodosUpdated => "Todo updates applied, including toggles and bulk completion",
            MetricName::TodosDeleted => "Todos deleted",
            MetricName::TodosToggled => "Completion toggles",
            MetricName::BulkItemFailures => "Items skipped by bulk operations",
            MetricName::ValidationFailures => "Requests rejected by input validation",
            MetricName::TodosStored => "Todos currently held in memory",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            TodosCreated,
            TodosUpdated,
            TodosDeleted,
            TodosToggled,
            BulkItemFailures,
            ValidationFailures,
            TodosStored,
        ]
        .into_iter()
    }
}

/// Installs the global Prometheus recorder and returns the handle used to
/// render `/metrics`. Can only succeed once per process.
pub fn init() -> Result<PrometheusHandle, Box<dyn std::error::Error + Send + Sync>> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))?;

    for metric in MetricName::all_metrics() {
        match metric {
            MetricName::TodosStored => {
                ::metrics::describe_gauge!(metric.as_str(), metric.description());
            }
            _ => {
                ::metrics::describe_counter!(metric.as_str(), metric.description());
            }
        }
    }

    info!("Metrics system initialized");
    Ok(handle)
}

pub fn increment(metric: MetricName) {
    ::metrics::counter!(metric.as_str()).increment(1);
}

pub fn increment_by(metric: MetricName, value: u64) {
    ::metrics::counter!(metric.as_str()).increment(value);
}

pub fn set_gauge(metric: MetricName, value: f64) {
    ::metrics::gauge!(metric.as_str()).set(value);
}
