//! Core entity definitions for the appointment scheduler.
//!
//! This crate defines the records shared by the data stores and the HTTP
//! service: appointments and the users they reference.

mod appointment;
mod user;

pub use appointment::*;
pub use user::*;
