pub mod failure_converter;

pub use failure_converter::FailureConverter;
