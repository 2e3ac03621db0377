/// Built-in function implementations.
///
/// Thin adapters from evaluated argument lists onto the routines in
/// [`crate::math`].
pub mod builtin;

/// The builtin table and call dispatch.
pub mod core;
