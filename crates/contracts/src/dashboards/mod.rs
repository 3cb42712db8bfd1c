use serde::{Deserialize, Serialize};

/// Aggregate counts shown on the dashboard landing tab.
///
/// `projects` and `generations` are scoped to the requesting user;
/// `datasets` is a whole-table count (shared catalog semantics).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardSummary {
    pub projects: u64,
    pub datasets: u64,
    pub generations: u64,
}
