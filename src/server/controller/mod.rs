//! HTTP request handlers.
//!
//! Controllers convert request DTOs into parameter models, call a service, and
//! convert the returned domain models back into response DTOs. Every JSON handler
//! carries a `utoipa::path` annotation so the router can assemble the OpenAPI
//! document from the same definitions it routes.

pub mod admission;
pub mod alumni;
pub mod bus;
pub mod event;
pub mod fee;
pub mod library;
pub mod notice;
pub mod page;
pub mod stats;

#[cfg(test)]
mod test;

use serde::Deserialize;
use utoipa::IntoParams;

/// Optional `?category=` filter shared by the list endpoints.
#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct CategoryParam {
    /// Exact category to match; empty or missing returns everything
    pub category: Option<String>,
}

impl CategoryParam {
    /// Returns the category to filter by, treating an empty value as no filter.
    pub fn into_filter(self) -> Option<String> {
        self.category.filter(|category| !category.is_empty())
    }
}
