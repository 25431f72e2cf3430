//! Core contact model for Rolo.
//!
//! This crate owns the field invariants of an address-book entry and the only
//! legal ways to construct and mutate one. It is deliberately free of I/O:
//! the flat-file codec (`rolo-codec`) and any storage or UI layer sit on top
//! of it and reuse its validators.

pub mod contact;
pub mod error;
pub mod phone;
pub mod stats;
pub mod validate;

pub use contact::Contact;
pub use error::{Error, Result};
pub use phone::{Phone, PhoneType};
pub use stats::{ContactStats, StatsHandle};
