/// Numeric output formatting.
///
/// This module renders results the way a C style `%g` conversion does: a
/// fixed number of significant digits, switching to scientific notation for
/// very large or very small magnitudes, without trailing zeros.
pub mod num;
