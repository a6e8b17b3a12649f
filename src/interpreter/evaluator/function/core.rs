use crate::interpreter::evaluator::function::{arithmetic, builtin};

/// Type alias for builtin operator handlers.
///
/// A builtin receives the already evaluated operands, whose count has been
/// checked against the builtin's [`Arity`].
pub type BuiltinFn = fn(&[f64]) -> f64;

/// Specifies the allowed number of operands for an operator.
///
/// - `Exact(n)` means the operator must receive exactly `n` operands.
/// - `AtLeast(n)` means the operator accepts `n` or more operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given operand count satisfies this arity constraint.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }

    /// Describes the constraint for error messages, e.g. `at least one
    /// parameter required`.
    #[must_use]
    pub fn describe(self) -> String {
        let (quantifier, n) = match self {
            Self::Exact(n) => ("exactly", n),
            Self::AtLeast(n) => ("at least", n),
        };
        let noun = if n == 1 { "parameter" } else { "parameters" };
        format!("{quantifier} {} {noun} required", count_word(n))
    }
}

fn count_word(n: usize) -> String {
    const WORDS: [&str; 11] =
        ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"];
    WORDS.get(n).map_or_else(|| n.to_string(), |w| (*w).to_string())
}

/// Defines builtin operators by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (table entry),
/// - `BUILTIN_TABLE` (static table the default registry is filled from).
macro_rules! builtin_operators {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub struct BuiltinDef {
            pub name:  &'static str,
            pub arity: Arity,
            pub func:  BuiltinFn,
        }
        pub static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_operators! {
    "+"     => { arity: Arity::AtLeast(1), func: arithmetic::sum },
    "-"     => { arity: Arity::AtLeast(1), func: arithmetic::difference },
    "*"     => { arity: Arity::AtLeast(2), func: arithmetic::product },
    "/"     => { arity: Arity::AtLeast(1), func: arithmetic::quotient },
    "^"     => { arity: Arity::Exact(2), func: arithmetic::power },
    "%"     => { arity: Arity::Exact(2), func: arithmetic::remainder },
    "ln"    => { arity: Arity::Exact(1), func: builtin::ln },
    "sin"   => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"   => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"   => { arity: Arity::Exact(1), func: builtin::tan },
    "exp"   => { arity: Arity::Exact(1), func: builtin::exp },
    "sqrt"  => { arity: Arity::Exact(1), func: builtin::sqrt },
    "abs"   => { arity: Arity::Exact(1), func: builtin::abs },
    "floor" => { arity: Arity::Exact(1), func: builtin::floor },
    "ceil"  => { arity: Arity::Exact(1), func: builtin::ceil },
    "log"   => { arity: Arity::Exact(2), func: builtin::log },
    "min"   => { arity: Arity::AtLeast(1), func: builtin::min },
    "max"   => { arity: Arity::AtLeast(1), func: builtin::max },
}

/// Constants the default registry starts with.
pub const BUILTIN_CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI),
                                                 ("e", std::f64::consts::E),
                                                 ("tau", std::f64::consts::TAU)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_accepts_only_its_count() {
        assert!(Arity::Exact(2).check(2));
        assert!(!Arity::Exact(2).check(1));
        assert!(!Arity::Exact(2).check(3));
    }

    #[test]
    fn at_least_accepts_larger_counts() {
        assert!(Arity::AtLeast(1).check(1));
        assert!(Arity::AtLeast(1).check(10));
        assert!(!Arity::AtLeast(1).check(0));
    }

    #[test]
    fn descriptions_spell_out_small_counts() {
        assert_eq!(Arity::AtLeast(1).describe(), "at least one parameter required");
        assert_eq!(Arity::AtLeast(2).describe(), "at least two parameters required");
        assert_eq!(Arity::Exact(1).describe(), "exactly one parameter required");
        assert_eq!(Arity::Exact(12).describe(), "exactly 12 parameters required");
    }

    #[test]
    fn builtin_names_are_unique() {
        let mut names: Vec<&str> = BUILTIN_TABLE.iter().map(|def| def.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_TABLE.len());
    }
}
