/*!
Validation of the floating point numbers that flow into a duration.

Every numeric input in this crate goes through one of these routines. The
checks are always done in the same order: first finiteness, then sign. So
negative infinity is reported as non-finite rather than negative.
*/

use crate::error::{value::Error as E, Error};

/// Returns the given value if it's finite and not negative.
///
/// `what` names the parameter in the error message.
#[inline]
pub(crate) fn non_negative(what: &'static str, given: f64) -> Result<f64, Error> {
    if !given.is_finite() {
        return Err(E::NonFinite { what, given }.into());
    }
    if given < 0.0 {
        return Err(E::Negative { what, given }.into());
    }
    Ok(given)
}

/// Returns the given value if it's finite and strictly greater than zero.
///
/// This is used for divisors.
#[inline]
pub(crate) fn positive(what: &'static str, given: f64) -> Result<f64, Error> {
    if !given.is_finite() {
        return Err(E::NonFinite { what, given }.into());
    }
    if given <= 0.0 {
        return Err(E::NotPositive { what, given }.into());
    }
    Ok(given)
}

/// Checks that the result of combining finite inputs is still finite.
///
/// Negative zero is folded into positive zero so that equal durations are
/// bitwise equal.
#[inline]
pub(crate) fn finite_result(
    what: &'static str,
    millis: f64,
) -> Result<f64, Error> {
    if !millis.is_finite() {
        return Err(E::Overflow { what }.into());
    }
    Ok(if millis == 0.0 { 0.0 } else { millis })
}
