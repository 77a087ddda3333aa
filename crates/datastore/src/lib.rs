//! Storage contracts for the appointment scheduler.
//!
//! This crate defines the appointment and user store traits consumed by the
//! request layer, along with volatile in-memory implementations of both.
//! A durable backend can be substituted by implementing the same traits.

mod error;
mod memory;
mod traits;

pub use error::*;
pub use memory::*;
pub use traits::*;
