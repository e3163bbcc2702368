//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Turning missing records into not-found errors and enforcing circulation rules
//! - **Orchestration**: Coordinating repository calls such as the six counts behind the stats endpoint
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Issuing and returning library books atomically

pub mod admission;
pub mod alumni;
pub mod bus;
pub mod event;
pub mod fee;
pub mod library;
pub mod notice;
pub mod stats;
