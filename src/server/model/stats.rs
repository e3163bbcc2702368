use crate::model::stats::StatsDto;

/// Row counts shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total_students: u64,
    pub total_staff: u64,
    pub total_events: u64,
    pub pending_admissions: u64,
    pub total_alumni: u64,
    /// Every bus route counts as active; routes have no active flag.
    pub active_routes: u64,
}

impl Stats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            total_students: self.total_students,
            total_staff: self.total_staff,
            total_events: self.total_events,
            pending_admissions: self.pending_admissions,
            total_alumni: self.total_alumni,
            active_routes: self.active_routes,
        }
    }
}
