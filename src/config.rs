/// Default number of significant digits used when printing results.
pub const DEFAULT_PRECISION: usize = 9;
/// Default maximum nesting depth of parenthesized groups.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings that apply to every evaluated expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of nested groups. Deeper expressions are rejected
    /// before evaluation.
    pub max_depth: usize,
    /// Significant digits shown when a result is printed.
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH,
               precision: DEFAULT_PRECISION, }
    }
}

impl Config {
    /// Returns this configuration with a different nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns this configuration with a different printed precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}
