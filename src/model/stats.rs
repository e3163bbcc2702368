use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dashboard counters, recomputed on every request.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct StatsDto {
    pub total_students: u64,
    pub total_staff: u64,
    pub total_events: u64,
    pub pending_admissions: u64,
    pub total_alumni: u64,
    pub active_routes: u64,
}
