//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! school records and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod admission;
pub mod alumni;
pub mod bus_route;
pub mod event;
pub mod fee;
pub mod library;
pub mod notice;
pub mod stats;
