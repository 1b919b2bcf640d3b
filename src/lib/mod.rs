//! Shared library modules providing error types, path normalization, and telemetry initialization.

pub mod errors;
pub mod nvim;
pub mod paths;
pub mod telemetry;
