/// Operand count rules and the builtin operator table.
pub mod core;

/// The arithmetic operators `+ - * / ^ %`.
///
/// These fold over any number of operands where that makes sense.
pub mod arithmetic;

/// Builtin math functions such as `ln`, `sin` or `min`.
pub mod builtin;
