/// Core evaluation logic.
///
/// Contains the tree walker and the operand view handed to operator
/// implementations.
pub mod core;

/// Builtin operators.
///
/// Defines the operand count rules and the arithmetic and math functions the
/// default registry is populated with.
pub mod function;
