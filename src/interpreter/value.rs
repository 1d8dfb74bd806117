/// User-defined function values.
///
/// Defines `UserFunction`, the record produced by `defFunction`: a name, the
/// parameter names, and the body statements executed on each call.
pub mod function;

/// Core value representation.
///
/// Declares the `Value` enum, truthiness, type names used in error messages,
/// and the canonical display form used by `print`.
pub mod core;
