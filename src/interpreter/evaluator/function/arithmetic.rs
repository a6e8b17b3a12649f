/// Adds all operands.
///
/// # Example
/// ```
/// use prefixa::interpreter::evaluator::function::arithmetic::sum;
///
/// assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
/// ```
#[must_use]
pub fn sum(args: &[f64]) -> f64 {
    args.iter().sum()
}

/// Negates a single operand, otherwise subtracts the remaining operands from
/// the first one in order.
///
/// # Example
/// ```
/// use prefixa::interpreter::evaluator::function::arithmetic::difference;
///
/// assert_eq!(difference(&[5.0]), -5.0);
/// assert_eq!(difference(&[10.0, 3.0, 2.0]), 5.0);
/// ```
#[must_use]
pub fn difference(args: &[f64]) -> f64 {
    match args {
        [x] => -x,
        [first, rest @ ..] => rest.iter().fold(*first, |acc, x| acc - x),
        [] => 0.0,
    }
}

/// Multiplies all operands.
#[must_use]
pub fn product(args: &[f64]) -> f64 {
    args.iter().product()
}

/// Takes the reciprocal of a single operand, otherwise divides the first
/// operand by each remaining one in order.
///
/// Division by zero follows IEEE 754 and yields an infinity or NaN.
///
/// # Example
/// ```
/// use prefixa::interpreter::evaluator::function::arithmetic::quotient;
///
/// assert_eq!(quotient(&[2.0]), 0.5);
/// assert_eq!(quotient(&[8.0, 2.0, 2.0]), 2.0);
/// ```
#[must_use]
pub fn quotient(args: &[f64]) -> f64 {
    match args {
        [x] => x.recip(),
        [first, rest @ ..] => rest.iter().fold(*first, |acc, x| acc / x),
        [] => f64::NAN,
    }
}

/// Raises the first operand to the power of the second.
///
/// Any other operand count yields NaN.
#[must_use]
pub fn power(args: &[f64]) -> f64 {
    match args {
        [base, exponent] => base.powf(*exponent),
        _ => f64::NAN,
    }
}

/// The remainder of dividing the first operand by the second, with the sign
/// of the first.
///
/// Any other operand count yields NaN.
#[must_use]
pub fn remainder(args: &[f64]) -> f64 {
    match args {
        [dividend, divisor] => dividend % divisor,
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_of_one_is_itself() {
        assert_eq!(sum(&[1.0]), 1.0);
    }

    #[test]
    fn difference_folds_left() {
        assert_eq!(difference(&[1.0, 2.0]), -1.0);
        assert_eq!(difference(&[10.0, 3.0, 2.0]), 5.0);
    }

    #[test]
    fn product_multiplies_everything() {
        assert_eq!(product(&[2.0, 3.0, 4.0]), 24.0);
    }

    #[test]
    fn quotient_by_zero_is_infinite() {
        assert_eq!(quotient(&[1.0, 0.0]), f64::INFINITY);
        assert_eq!(quotient(&[0.0]), f64::INFINITY);
        assert!(quotient(&[0.0, 0.0]).is_nan());
    }

    #[test]
    fn power_and_remainder() {
        assert_eq!(power(&[2.0, 10.0]), 1024.0);
        assert_eq!(remainder(&[7.0, 3.0]), 1.0);
        assert_eq!(remainder(&[-7.0, 3.0]), -1.0);
    }

    #[test]
    fn binary_operators_tolerate_wrong_operand_counts() {
        assert!(power(&[2.0]).is_nan());
        assert!(power(&[]).is_nan());
        assert!(remainder(&[7.0, 3.0, 1.0]).is_nan());
    }
}
