use crate::{error::Error, util::number, Unit};

#[cfg(not(feature = "std"))]
use crate::util::libm::Float;

/// The mode for dealing with the remainder when rounding durations.
///
/// This is used with [`DurationRound::mode`]. In the documentation for each
/// variant, the "increment" is the size of the smallest unit multiplied by
/// the rounding increment. For example, rounding to the nearest 15 minutes
/// uses an increment of 15 minutes.
///
/// Since durations are never negative, there is no distinction between
/// rounding toward zero and rounding toward negative infinity.
///
/// # Example
///
/// ```
/// use timebox::{DurationRound, RoundMode, ToDuration, Unit};
///
/// // The default rounds like how you were taught in school:
/// assert_eq!(1.hour().minutes(30).round(Unit::Hour)?, 2.hours());
/// // But we can change the mode, e.g., truncation:
/// let options = DurationRound::new().smallest(Unit::Hour).mode(RoundMode::Trunc);
/// assert_eq!(1.hour().minutes(59).round(options)?, 1.hour());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RoundMode {
    /// Rounds up to the next multiple of the increment.
    Ceil,
    /// Rounds down to the previous multiple of the increment.
    Floor,
    /// Chops off any remainder. For durations, this is the same as `Floor`.
    Trunc,
    /// Rounds to the nearest multiple of the increment. When there is a tie,
    /// round up.
    ///
    /// This corresponds to how rounding is often taught in school, and is
    /// the default.
    HalfExpand,
    /// Rounds to the nearest multiple of the increment like `HalfExpand`,
    /// but when there is a tie, round toward the value that is an even
    /// multiple of the increment. For example, with an increment of `3`, the
    /// number `10.5` would round up to `12` instead of down to `9`, because
    /// `12` is an even multiple of `3`, where as `9` is an odd multiple.
    HalfEven,
}

impl RoundMode {
    /// Rounds a non-negative `quantity` to a multiple of `increment`.
    ///
    /// Both values are in milliseconds. Quantities that are already a
    /// multiple of the increment are returned unchanged.
    pub(crate) fn round(self, quantity: f64, increment: f64) -> f64 {
        debug_assert!(quantity >= 0.0 && increment > 0.0);
        let remainder = quantity % increment;
        if remainder == 0.0 {
            return quantity;
        }
        let mut quotient = ((quantity - remainder) / increment).round();
        let tiebreaker = remainder * 2.0;
        let tie = tiebreaker == increment;
        let up_is_nearer = tiebreaker > increment;
        match self {
            RoundMode::Ceil => {
                quotient += 1.0;
            }
            RoundMode::Floor | RoundMode::Trunc => {}
            RoundMode::HalfExpand => {
                if up_is_nearer || tie {
                    quotient += 1.0;
                }
            }
            RoundMode::HalfEven => {
                if up_is_nearer || (tie && quotient % 2.0 == 1.0) {
                    quotient += 1.0;
                }
            }
        }
        quotient * increment
    }
}

impl Default for RoundMode {
    fn default() -> RoundMode {
        RoundMode::HalfExpand
    }
}

/// Options for [`Duration::round`](crate::Duration::round).
///
/// This type provides a way to configure the rounding of a duration. This
/// includes setting the smallest unit (i.e., the unit to round to), the
/// rounding increment and the rounding mode (e.g., "ceil" or "truncate").
///
/// `Duration::round` accepts anything that implements
/// `Into<DurationRound>`. There are a few key trait implementations that
/// make this convenient:
///
/// * `From<Unit> for DurationRound` will construct a rounding
/// configuration where the smallest unit is set to the one given.
/// * `From<(Unit, i64)> for DurationRound` will construct a rounding
/// configuration where the smallest unit and the rounding increment are set
/// to the ones given.
///
/// # Example
///
/// This example shows how to round to the nearest quarter hour:
///
/// ```
/// use timebox::{ToDuration, Unit};
///
/// let dur = 1.hour().minutes(8);
/// assert_eq!(dur.round((Unit::Minute, 15))?, 1.hour().minutes(15));
/// let dur = 1.hour().minutes(7);
/// assert_eq!(dur.round((Unit::Minute, 15))?, 1.hour());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DurationRound {
    smallest: Unit,
    mode: RoundMode,
    increment: i64,
}

impl DurationRound {
    /// Create a new default configuration for rounding a duration via
    /// [`Duration::round`](crate::Duration::round).
    ///
    /// The default configuration rounds half up to a whole number of
    /// milliseconds.
    #[inline]
    pub const fn new() -> DurationRound {
        DurationRound {
            smallest: Unit::Millisecond,
            mode: RoundMode::HalfExpand,
            increment: 1,
        }
    }

    /// Set the smallest unit allowed in the duration returned. This is the
    /// unit that the duration is rounded to.
    ///
    /// The default is [`Unit::Millisecond`].
    #[inline]
    pub const fn smallest(self, unit: Unit) -> DurationRound {
        DurationRound { smallest: unit, ..self }
    }

    /// Set the rounding mode.
    ///
    /// The default is [`RoundMode::HalfExpand`].
    #[inline]
    pub const fn mode(self, mode: RoundMode) -> DurationRound {
        DurationRound { mode, ..self }
    }

    /// Set the rounding increment for the smallest unit.
    ///
    /// The default is `1`. Other values permit rounding the smallest unit to
    /// the nearest integer increment specified. For example, with the
    /// smallest unit set to [`Unit::Minute`], a rounding increment of `30`
    /// rounds to the nearest half hour.
    ///
    /// # Errors
    ///
    /// The increment must be greater than zero. Otherwise, rounding fails.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::{DurationRound, ToDuration, Unit};
    ///
    /// let options = DurationRound::new().smallest(Unit::Minute).increment(30);
    /// assert_eq!(1.hour().minutes(20).round(options)?, 1.hour().minutes(30));
    ///
    /// let options = options.increment(0);
    /// assert!(1.hour().round(options).unwrap_err().is_invalid_value());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub const fn increment(self, increment: i64) -> DurationRound {
        DurationRound { increment, ..self }
    }

    /// Returns the configured smallest unit.
    pub fn get_smallest(&self) -> Unit {
        self.smallest
    }

    /// Returns the configured rounding mode.
    pub fn get_mode(&self) -> RoundMode {
        self.mode
    }

    /// Returns the configured rounding increment.
    pub fn get_increment(&self) -> i64 {
        self.increment
    }

    /// Rounds the given number of milliseconds according to this
    /// configuration.
    pub(crate) fn round(&self, millis: f64) -> Result<f64, Error> {
        let increment = number::positive("increment", self.increment as f64)?;
        let increment = number::finite_result(
            "increment",
            increment * self.smallest.milliseconds(),
        )?;
        let rounded = self.mode.round(millis, increment);
        trace!(
            "rounded {millis}ms to {rounded}ms \
             (smallest unit {:?}, increment {}, mode {:?})",
            self.smallest,
            self.increment,
            self.mode,
        );
        number::finite_result("rounding", rounded)
    }
}

impl Default for DurationRound {
    fn default() -> DurationRound {
        DurationRound::new()
    }
}

impl From<Unit> for DurationRound {
    fn from(unit: Unit) -> DurationRound {
        DurationRound::new().smallest(unit)
    }
}

impl From<(Unit, i64)> for DurationRound {
    fn from((unit, increment): (Unit, i64)) -> DurationRound {
        DurationRound::new().smallest(unit).increment(increment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_expand_ad_hoc() {
        let round = |quantity: f64, increment: f64| -> f64 {
            RoundMode::HalfExpand.round(quantity, increment)
        };
        assert_eq!(26.0, round(20.0, 13.0));

        assert_eq!(0.0, round(29.0, 60.0));
        assert_eq!(60.0, round(30.0, 60.0));
        assert_eq!(60.0, round(31.0, 60.0));

        assert_eq!(0.0, round(3.0, 7.0));
        assert_eq!(7.0, round(4.0, 7.0));
        assert_eq!(0.0, round(0.0, 7.0));
    }

    #[test]
    fn round_table() {
        let cases = [
            (RoundMode::Ceil, [10.0, 10.0, 10.0, 20.0]),
            (RoundMode::Floor, [0.0, 0.0, 0.0, 10.0]),
            (RoundMode::Trunc, [0.0, 0.0, 0.0, 10.0]),
            (RoundMode::HalfExpand, [0.0, 10.0, 10.0, 20.0]),
            (RoundMode::HalfEven, [0.0, 0.0, 10.0, 20.0]),
        ];
        for (mode, expected) in cases {
            let got = [4.0, 5.0, 6.0, 15.0].map(|q| mode.round(q, 10.0));
            assert_eq!(got, expected, "mode {mode:?}");
        }
    }

    #[test]
    fn round_exact_multiples_unchanged() {
        for mode in [
            RoundMode::Ceil,
            RoundMode::Floor,
            RoundMode::Trunc,
            RoundMode::HalfExpand,
            RoundMode::HalfEven,
        ] {
            assert_eq!(mode.round(7_200_000.0, 3_600_000.0), 7_200_000.0);
        }
    }

    #[test]
    fn round_fractional_quantity() {
        assert_eq!(RoundMode::HalfExpand.round(0.5, 1.0), 1.0);
        assert_eq!(RoundMode::HalfEven.round(0.5, 1.0), 0.0);
        assert_eq!(RoundMode::HalfEven.round(1.5, 1.0), 2.0);
        assert_eq!(RoundMode::Ceil.round(0.001, 1_000.0), 1_000.0);
    }

    #[test]
    fn invalid_increment() {
        let options = DurationRound::new().smallest(Unit::Minute).increment(0);
        insta::assert_snapshot!(
            options.round(1.0).unwrap_err(),
            @"parameter 'increment' must be greater than zero, but got 0",
        );
        let options = options.increment(-15);
        insta::assert_snapshot!(
            options.round(1.0).unwrap_err(),
            @"parameter 'increment' must be greater than zero, but got -15",
        );
    }
}
