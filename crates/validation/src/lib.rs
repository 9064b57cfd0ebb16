//! Profile validation for the profile manager.
//!
//! Field predicates are pure and return booleans. The [`Validator`] binds
//! them to a [`Locale`] and is the boundary where a [`entities::ProfileDraft`]
//! becomes a [`entities::Profile`].

mod error;
mod locale;
mod rules;
mod validator;

pub use error::*;
pub use locale::*;
pub use rules::*;
pub use validator::*;
