//! Stats service aggregating dashboard counters.

use sea_orm::DatabaseConnection;

use crate::{
    model::admission::AdmissionStatus,
    server::{
        data::{
            admission::AdmissionRepository, alumni::AlumniRepository,
            bus_route::BusRouteRepository, event::EventRepository, staff::StaffRepository,
            student::StudentRepository,
        },
        error::AppError,
        model::stats::Stats,
    },
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts rows across the school tables.
    ///
    /// Nothing is cached; each call runs six independent count queries, so the
    /// figures are not a consistent snapshot under concurrent writes.
    ///
    /// # Returns
    /// - `Ok(Stats)` - Current totals
    /// - `Err(AppError::DbErr)` - Database error during any count
    pub async fn get(&self) -> Result<Stats, AppError> {
        Ok(Stats {
            total_students: StudentRepository::new(self.db).count().await?,
            total_staff: StaffRepository::new(self.db).count().await?,
            total_events: EventRepository::new(self.db).count().await?,
            pending_admissions: AdmissionRepository::new(self.db)
                .count_by_status(AdmissionStatus::Pending)
                .await?,
            total_alumni: AlumniRepository::new(self.db).count().await?,
            active_routes: BusRouteRepository::new(self.db).count().await?,
        })
    }
}
