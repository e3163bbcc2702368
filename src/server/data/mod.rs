//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! record type of the school. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. All database
//! queries, inserts and updates are performed through these repositories.
//!
//! Repositories that take part in multi-step writes (library circulation) are generic
//! over `ConnectionTrait` so they can run against a transaction as well as the pool.

pub mod admission;
pub mod alumni;
pub mod bus_route;
pub mod event;
pub mod fee;
pub mod library;
pub mod notice;
pub mod staff;
pub mod student;

#[cfg(test)]
mod test;
