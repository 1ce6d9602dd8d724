/// Computes the remainder of two numbers the way integer `%` does.
///
/// Both operands are truncated toward zero before the remainder is taken, so
/// `7.9 % 2` is `7 % 2`, which is `1`. The sign of the result follows the
/// left operand, matching integer remainder semantics. Operands beyond the
/// `i64` range saturate to its bounds before the remainder is taken.
///
/// The cases integer `%` cannot answer all yield NaN: a non-finite operand,
/// a zero divisor, and the `i64::MIN % -1` overflow.
///
/// ## Parameters
/// - `left`: The dividend.
/// - `right`: The divisor.
///
/// ## Returns
/// The truncated remainder, or NaN for the cases listed above.
///
/// ## Example
/// ```
/// use fcalc::util::num::truncated_rem;
///
/// assert_eq!(truncated_rem(10.0, 3.0), 1.0);
/// assert_eq!(truncated_rem(7.9, 2.0), 1.0);
/// assert_eq!(truncated_rem(-7.0, 3.0), -1.0);
/// assert!(truncated_rem(5.0, 0.0).is_nan());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn truncated_rem(left: f64, right: f64) -> f64 {
    if !left.is_finite() || !right.is_finite() {
        return f64::NAN;
    }

    let left = left.trunc() as i64;
    let right = right.trunc() as i64;

    left.checked_rem(right).map_or(f64::NAN, |rem| rem as f64)
}
