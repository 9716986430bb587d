//! Core building blocks: the invocation request, the command-vector builder,
//! and path validation. These are internal primitives consumed by the
//! high-level `api` module.
pub mod command;
pub mod params;
pub mod validate;
