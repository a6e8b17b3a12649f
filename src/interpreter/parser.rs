/// Parser entry point.
///
/// Checks the token stream as a whole, then builds exactly one top-level
/// expression from it.
pub mod core;

/// Recursive construction of operands and parenthesized groups.
///
/// Resolves names against the registry, enforces that every group starts
/// with an operator and tracks the nesting depth.
pub mod group;
