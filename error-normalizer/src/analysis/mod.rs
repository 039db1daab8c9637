//! Failure classification - pure business logic only
//!
//! This module decides how a failure becomes an `ErrorMap`: canned messages
//! for failures without a response, extracted field messages or a status
//! message for failures with one.

pub mod classifier;

pub use classifier::ErrorNormalizer;
