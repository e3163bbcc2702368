//! SeaORM entity definitions for the school database.
//!
//! One module per table. Status columns are plain strings here; the server maps
//! them onto typed enums at the repository boundary.

pub mod prelude;

pub mod admission;
pub mod alumni;
pub mod book_issue;
pub mod bus_route;
pub mod event;
pub mod fee;
pub mod library_book;
pub mod notice;
pub mod staff;
pub mod student;
pub mod user;
