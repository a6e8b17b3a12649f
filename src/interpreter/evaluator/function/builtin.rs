/// Generates a builtin that applies an `f64` method to its only operand.
///
/// The generated functions expect exactly one operand and yield NaN for any
/// other count.
///
/// # Example
/// ```
/// use prefixa::interpreter::evaluator::function::builtin::cos;
///
/// assert_eq!(cos(&[0.0]), 1.0);
/// ```
macro_rules! unary_builtin {
    ($($fname:ident => $method:ident),* $(,)?) => {
        $(
            #[must_use]
            pub fn $fname(args: &[f64]) -> f64 {
                match args {
                    [x] => x.$method(),
                    _ => f64::NAN,
                }
            }
        )*
    };
}

unary_builtin! {
    ln => ln,
    sin => sin,
    cos => cos,
    tan => tan,
    exp => exp,
    sqrt => sqrt,
    abs => abs,
    floor => floor,
    ceil => ceil,
}

/// Computes the logarithm of the first operand in the base given by the
/// second.
///
/// # Example
/// ```
/// use prefixa::interpreter::evaluator::function::builtin::log;
///
/// assert!((log(&[8.0, 2.0]) - 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn log(args: &[f64]) -> f64 {
    match args {
        [value, base] => value.log(*base),
        _ => f64::NAN,
    }
}

/// The smallest operand. NaN operands are ignored unless all are NaN.
#[must_use]
pub fn min(args: &[f64]) -> f64 {
    args.iter().copied().fold(f64::NAN, f64::min)
}

/// The largest operand. NaN operands are ignored unless all are NaN.
#[must_use]
pub fn max(args: &[f64]) -> f64 {
    args.iter().copied().fold(f64::NAN, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unary_functions_apply_to_first_operand() {
        assert_eq!(sin(&[0.0]), 0.0);
        assert_eq!(ln(&[1.0]), 0.0);
        assert_eq!(sqrt(&[9.0]), 3.0);
        assert_eq!(abs(&[-4.5]), 4.5);
        assert_eq!(floor(&[-1.5]), -2.0);
        assert_eq!(ceil(&[-1.5]), -1.0);
    }

    #[test]
    fn min_and_max_pick_extremes() {
        assert_eq!(min(&[3.0, -1.0, 2.0]), -1.0);
        assert_eq!(max(&[3.0, -1.0, 2.0]), 3.0);
        assert_eq!(max(&[7.0]), 7.0);
    }

    #[test]
    fn wrong_operand_counts_yield_nan() {
        assert!(sin(&[]).is_nan());
        assert!(sqrt(&[4.0, 9.0]).is_nan());
        assert!(log(&[8.0]).is_nan());
    }

    #[test]
    fn logarithm_of_negative_is_nan() {
        assert!(ln(&[-1.0]).is_nan());
    }
}
