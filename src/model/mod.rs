//! Request and response DTOs for the JSON API.
//!
//! DTOs are the wire shapes only. Controllers convert them into server-side
//! parameter models on the way in and build them from domain models on the way out.

pub mod admission;
pub mod alumni;
pub mod api;
pub mod bus;
pub mod event;
pub mod fee;
pub mod library;
pub mod notice;
pub mod stats;
