//! Domain models for pet health records.

mod appointment;
mod medication;
mod note;
mod pet;
mod weight;

pub use appointment::*;
pub use medication::*;
pub use note::*;
pub use pet::*;
pub use weight::*;
