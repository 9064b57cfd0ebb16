//! Core entity definitions for the profile manager.
//!
//! This crate defines the data types shared by the validation, store and
//! application crates: profiles, departments, activity log entries, the
//! role catalog and the profile form record.

mod activity;
mod department;
mod draft;
mod profile;
mod role;

pub use activity::*;
pub use department::*;
pub use draft::*;
pub use profile::*;
pub use role::*;
