use core::time::Duration as UnsignedDuration;

use alloc::string::String;

use crate::{
    error::{value::Error as ValueError, Error},
    fmt::{
        friendly::{FriendlyParser, FriendlyPrinter},
        iso8601::{Iso8601Parser, Iso8601Printer},
    },
    round::{DurationRound, RoundMode},
    util::number,
    Unit,
};

#[cfg(not(feature = "std"))]
use crate::util::libm::Float;

/// The printer used for `Duration`'s `Display` impl.
const DEFAULT_FRIENDLY_PRINTER: FriendlyPrinter<'static> =
    FriendlyPrinter::new();
/// The printer used for `Duration`'s `Debug` impl.
const DEFAULT_ISO8601_PRINTER: Iso8601Printer = Iso8601Printer::new();
const DEFAULT_FRIENDLY_PARSER: FriendlyParser = FriendlyParser::new();
const DEFAULT_ISO8601_PARSER: Iso8601Parser = Iso8601Parser::new();

/// A non-negative span of elapsed time with millisecond resolution.
///
/// A `Duration` is a single floating point number of milliseconds. It is
/// always finite and never negative. Fractional milliseconds are allowed,
/// which is how a value like `PT0.0005S` survives a round trip.
///
/// Every operation on a `Duration` returns a new value. Since the type is
/// `Copy`, there is no way to mutate a duration that someone else holds.
///
/// # Construction
///
/// The most readable way to build a duration is to chain unit additions:
///
/// ```
/// use timebox::Duration;
///
/// let dur = Duration::new().hours(1).minutes(30);
/// assert_eq!(dur.to_minutes(), 90.0);
///
/// // Calling the same unit twice adds to it.
/// let dur = Duration::new().minutes(30).minutes(30);
/// assert_eq!(dur.to_hours(), 1.0);
/// ```
///
/// The [`ToDuration`] trait provides the same additions on numbers:
///
/// ```
/// use timebox::ToDuration;
///
/// let dur = 1.week() + 2.5.days();
/// assert_eq!(dur.to_days(), 9.5);
/// ```
///
/// # Totals versus components
///
/// The `to_*` methods return the *whole* duration in a single unit,
/// including any fractional part. The `get_*` methods return clock-like
/// components after all bigger units have been taken out:
///
/// ```
/// use timebox::Duration;
///
/// let dur = Duration::new().days(1).hours(2).minutes(30);
/// assert_eq!(dur.to_hours(), 26.5);
/// assert_eq!(dur.get_days(), 1.0);
/// assert_eq!(dur.get_hours(), 2.0);
/// assert_eq!(dur.get_minutes(), 30.0);
/// ```
///
/// # Parsing and printing
///
/// `Display` prints the human friendly long format, while `Debug` prints
/// the ISO 8601 format. `FromStr` accepts either format: input starting with
/// `P` is parsed as ISO 8601, and everything else as the friendly format.
///
/// ```
/// use timebox::Duration;
///
/// let dur: Duration = "P1DT2H30M".parse()?;
/// assert_eq!(dur.to_string(), "1 day, 2 hours, 30 minutes");
/// assert_eq!(format!("{dur:?}"), "P1DT2H30M");
///
/// let dur: Duration = "1d 2h 30m".parse()?;
/// assert_eq!(dur.build(), 95_400.0);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// For more control, such as short unit names or translations, use the
/// printers and parsers in [`fmt`](crate::fmt).
#[derive(Clone, Copy, Default)]
pub struct Duration {
    millis: f64,
}

/// Routines for creating durations.
impl Duration {
    /// A duration of zero length.
    pub const ZERO: Duration = Duration { millis: 0.0 };

    /// Creates a new duration of zero length.
    ///
    /// Unit additions can be chained on the value returned.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::Duration;
    ///
    /// assert!(Duration::new().is_zero());
    /// assert_eq!(Duration::new().seconds(5).to_milliseconds(), 5_000.0);
    /// ```
    #[inline]
    pub fn new() -> Duration {
        Duration::ZERO
    }

    /// Creates a duration from the given number of milliseconds.
    ///
    /// The fallible version of this method is [`Duration::try_from_millis`].
    ///
    /// # Panics
    ///
    /// When `millis` is negative, NaN or infinite.
    #[inline]
    pub fn from_millis(millis: f64) -> Duration {
        Duration::try_from_millis(millis)
            .expect("value for milliseconds is invalid")
    }

    /// Creates a duration from the given number of milliseconds.
    ///
    /// # Errors
    ///
    /// When `millis` is negative, NaN or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::Duration;
    ///
    /// assert_eq!(Duration::try_from_millis(1_500.0)?.to_seconds(), 1.5);
    /// assert!(Duration::try_from_millis(-1.0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn try_from_millis(millis: f64) -> Result<Duration, Error> {
        let millis = number::non_negative("milliseconds", millis)?;
        Ok(Duration::from_valid_millis(millis))
    }

    /// Creates a duration from an initialization of one or more units.
    ///
    /// Anything that converts into a [`DurationInit`] is accepted. In
    /// particular, a plain `f64` is interpreted as a number of
    /// milliseconds.
    ///
    /// # Errors
    ///
    /// When any of the amounts is negative, NaN or infinite. The error names
    /// the offending field. Also when the sum overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::{Duration, DurationInit};
    ///
    /// let dur = Duration::try_init(DurationInit::new().weeks(1.0).days(1.0))?;
    /// assert_eq!(dur.to_days(), 8.0);
    ///
    /// let dur = Duration::try_init(250.0)?;
    /// assert_eq!(dur.to_milliseconds(), 250.0);
    ///
    /// let err = Duration::try_init(DurationInit::new().hours(-2.0)).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "parameter 'hours' must be non-negative, but got -2",
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_init<I: Into<DurationInit>>(init: I) -> Result<Duration, Error> {
        init.into().to_duration()
    }

    /// Builds a duration from a value that is already known to be finite
    /// and non-negative.
    #[inline]
    fn from_valid_millis(millis: f64) -> Duration {
        debug_assert!(millis.is_finite() && millis >= 0.0);
        // Fold -0.0 into 0.0 so that equal durations are bitwise equal.
        Duration { millis: if millis == 0.0 { 0.0 } else { millis } }
    }
}

/// Infallible routines for adding units to a `Duration`.
///
/// These are useful when the amounts are determined by the programmer. In
/// general, use these routines when an invalid amount should be considered
/// a bug in the program. Each returns a new duration equal to this one plus
/// the given amount of the unit.
///
/// There is no separate method for adding a single unit. Pass `1` inside a
/// chain, or use the singular methods of [`ToDuration`] to start one:
///
/// ```
/// use timebox::{Duration, ToDuration};
///
/// let dur = Duration::new().days(2).hours(1);
/// assert_eq!(dur, 2.days() + 1.hour());
/// assert_eq!(1.hour(), Duration::new().hours(1));
/// ```
impl Duration {
    /// Adds the given number of weeks to this duration.
    ///
    /// The fallible version of this method is [`Duration::try_weeks`].
    ///
    /// # Panics
    ///
    /// When the amount is negative, NaN or infinite, or when the result
    /// overflows.
    #[inline]
    pub fn weeks<I: Into<f64>>(self, weeks: I) -> Duration {
        self.try_weeks(weeks).expect("value for weeks is invalid")
    }

    /// Adds the given number of days to this duration.
    ///
    /// The fallible version of this method is [`Duration::try_days`].
    ///
    /// # Panics
    ///
    /// When the amount is negative, NaN or infinite, or when the result
    /// overflows.
    #[inline]
    pub fn days<I: Into<f64>>(self, days: I) -> Duration {
        self.try_days(days).expect("value for days is invalid")
    }

    /// Adds the given number of hours to this duration.
    ///
    /// The fallible version of this method is [`Duration::try_hours`].
    ///
    /// # Panics
    ///
    /// When the amount is negative, NaN or infinite, or when the result
    /// overflows.
    #[inline]
    pub fn hours<I: Into<f64>>(self, hours: I) -> Duration {
        self.try_hours(hours).expect("value for hours is invalid")
    }

    /// Adds the given number of minutes to this duration.
    ///
    /// The fallible version of this method is [`Duration::try_minutes`].
    ///
    /// # Panics
    ///
    /// When the amount is negative, NaN or infinite, or when the result
    /// overflows.
    #[inline]
    pub fn minutes<I: Into<f64>>(self, minutes: I) -> Duration {
        self.try_minutes(minutes).expect("value for minutes is invalid")
    }

    /// Adds the given number of seconds to this duration.
    ///
    /// The fallible version of this method is [`Duration::try_seconds`].
    ///
    /// # Panics
    ///
    /// When the amount is negative, NaN or infinite, or when the result
    /// overflows.
    #[inline]
    pub fn seconds<I: Into<f64>>(self, seconds: I) -> Duration {
        self.try_seconds(seconds).expect("value for seconds is invalid")
    }

    /// Adds the given number of milliseconds to this duration.
    ///
    /// The fallible version of this method is
    /// [`Duration::try_milliseconds`].
    ///
    /// # Panics
    ///
    /// When the amount is negative, NaN or infinite, or when the result
    /// overflows.
    #[inline]
    pub fn milliseconds<I: Into<f64>>(self, milliseconds: I) -> Duration {
        self.try_milliseconds(milliseconds)
            .expect("value for milliseconds is invalid")
    }
}

/// Fallible routines for adding units to a `Duration`.
///
/// These are useful when the amounts come from user input.
///
/// # Errors
///
/// Every routine returns an error when the amount given is negative
/// ([`Error::is_invalid_value`]), NaN or infinite
/// ([`Error::is_non_finite`]), or when the result is too big to represent
/// ([`Error::is_range`]).
impl Duration {
    /// Adds the given number of weeks to this duration.
    ///
    /// The panicking version of this method is [`Duration::weeks`].
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::Duration;
    ///
    /// assert_eq!(Duration::new().try_weeks(2)?.to_days(), 14.0);
    /// assert!(Duration::new().try_weeks(-2).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn try_weeks<I: Into<f64>>(self, weeks: I) -> Result<Duration, Error> {
        self.try_add_unit(Unit::Week, weeks.into())
    }

    /// Adds the given number of days to this duration.
    ///
    /// The panicking version of this method is [`Duration::days`].
    #[inline]
    pub fn try_days<I: Into<f64>>(self, days: I) -> Result<Duration, Error> {
        self.try_add_unit(Unit::Day, days.into())
    }

    /// Adds the given number of hours to this duration.
    ///
    /// The panicking version of this method is [`Duration::hours`].
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::Duration;
    ///
    /// let err = Duration::new().try_hours(-1).unwrap_err();
    /// assert!(err.is_invalid_value());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "parameter 'hours' must be non-negative, but got -1",
    /// );
    /// ```
    #[inline]
    pub fn try_hours<I: Into<f64>>(self, hours: I) -> Result<Duration, Error> {
        self.try_add_unit(Unit::Hour, hours.into())
    }

    /// Adds the given number of minutes to this duration.
    ///
    /// The panicking version of this method is [`Duration::minutes`].
    #[inline]
    pub fn try_minutes<I: Into<f64>>(
        self,
        minutes: I,
    ) -> Result<Duration, Error> {
        self.try_add_unit(Unit::Minute, minutes.into())
    }

    /// Adds the given number of seconds to this duration.
    ///
    /// The panicking version of this method is [`Duration::seconds`].
    #[inline]
    pub fn try_seconds<I: Into<f64>>(
        self,
        seconds: I,
    ) -> Result<Duration, Error> {
        self.try_add_unit(Unit::Second, seconds.into())
    }

    /// Adds the given number of milliseconds to this duration.
    ///
    /// The panicking version of this method is [`Duration::milliseconds`].
    #[inline]
    pub fn try_milliseconds<I: Into<f64>>(
        self,
        milliseconds: I,
    ) -> Result<Duration, Error> {
        self.try_add_unit(Unit::Millisecond, milliseconds.into())
    }

    /// Equivalent to [`Duration::try_weeks`].
    #[inline]
    pub fn add_weeks<I: Into<f64>>(self, weeks: I) -> Result<Duration, Error> {
        self.try_weeks(weeks)
    }

    /// Equivalent to [`Duration::try_days`].
    #[inline]
    pub fn add_days<I: Into<f64>>(self, days: I) -> Result<Duration, Error> {
        self.try_days(days)
    }

    /// Equivalent to [`Duration::try_hours`].
    #[inline]
    pub fn add_hours<I: Into<f64>>(self, hours: I) -> Result<Duration, Error> {
        self.try_hours(hours)
    }

    /// Equivalent to [`Duration::try_minutes`].
    #[inline]
    pub fn add_minutes<I: Into<f64>>(
        self,
        minutes: I,
    ) -> Result<Duration, Error> {
        self.try_minutes(minutes)
    }

    /// Equivalent to [`Duration::try_seconds`].
    #[inline]
    pub fn add_seconds<I: Into<f64>>(
        self,
        seconds: I,
    ) -> Result<Duration, Error> {
        self.try_seconds(seconds)
    }

    /// Equivalent to [`Duration::try_milliseconds`].
    #[inline]
    pub fn add_milliseconds<I: Into<f64>>(
        self,
        milliseconds: I,
    ) -> Result<Duration, Error> {
        self.try_milliseconds(milliseconds)
    }

    /// Adds `amount` of `unit` to this duration, validating the amount
    /// first.
    fn try_add_unit(self, unit: Unit, amount: f64) -> Result<Duration, Error> {
        let what = unit.plural();
        let amount = number::non_negative(what, amount)?;
        let millis = number::finite_result(
            what,
            self.millis + amount * unit.milliseconds(),
        )?;
        Ok(Duration::from_valid_millis(millis))
    }
}

/// Arithmetic on durations.
impl Duration {
    /// Adds the given duration to this one.
    ///
    /// # Errors
    ///
    /// When the sum is too big to represent.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::ToDuration;
    ///
    /// let dur = 1.hour().checked_add(30.minutes())?;
    /// assert_eq!(dur.to_minutes(), 90.0);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn checked_add(self, other: Duration) -> Result<Duration, Error> {
        let millis =
            number::finite_result("addition", self.millis + other.millis)?;
        Ok(Duration::from_valid_millis(millis))
    }

    /// Subtracts the given duration from this one, stopping at zero.
    ///
    /// A duration can never be negative, so subtracting a bigger duration
    /// from a smaller one returns [`Duration::ZERO`].
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::{Duration, ToDuration};
    ///
    /// assert_eq!(1.hour().saturating_sub(15.minutes()).to_minutes(), 45.0);
    /// assert_eq!(1.minute().saturating_sub(1.hour()), Duration::ZERO);
    /// ```
    #[inline]
    pub fn saturating_sub(self, other: Duration) -> Duration {
        let millis = self.millis - other.millis;
        Duration::from_valid_millis(if millis > 0.0 { millis } else { 0.0 })
    }

    /// Multiplies this duration by the given factor.
    ///
    /// # Errors
    ///
    /// When the factor is negative, NaN or infinite, or when the product is
    /// too big to represent.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::ToDuration;
    ///
    /// assert_eq!(90.seconds().checked_mul(2.0)?.to_minutes(), 3.0);
    /// assert!(90.seconds().checked_mul(-2.0).unwrap_err().is_invalid_value());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn checked_mul(self, factor: f64) -> Result<Duration, Error> {
        let factor = number::non_negative("factor", factor)?;
        let millis =
            number::finite_result("multiplication", self.millis * factor)?;
        Ok(Duration::from_valid_millis(millis))
    }

    /// Divides this duration by the given divisor.
    ///
    /// # Errors
    ///
    /// When the divisor is zero, negative, NaN or infinite, or when the
    /// quotient is too big to represent.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::ToDuration;
    ///
    /// assert_eq!(1.hour().checked_div(4.0)?.to_minutes(), 15.0);
    /// assert!(1.hour().checked_div(0.0).unwrap_err().is_invalid_value());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn checked_div(self, divisor: f64) -> Result<Duration, Error> {
        let divisor = number::positive("divisor", divisor)?;
        let millis =
            number::finite_result("division", self.millis / divisor)?;
        Ok(Duration::from_valid_millis(millis))
    }

    /// Rounds this duration according to the given configuration.
    ///
    /// A [`Unit`] converts into a [`DurationRound`] that rounds half up to
    /// the nearest multiple of that unit. Use a `DurationRound` directly to
    /// pick a different [`RoundMode`] or an increment.
    ///
    /// # Errors
    ///
    /// When the increment is not positive, or when rounding up overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::{DurationRound, RoundMode, ToDuration, Unit};
    ///
    /// let dur = 1.hour().minutes(30);
    /// assert_eq!(dur.round(Unit::Hour)?, 2.hours());
    ///
    /// let dur = 7.minutes().seconds(31);
    /// let options = DurationRound::new().smallest(Unit::Minute).increment(5);
    /// assert_eq!(dur.round(options)?, 10.minutes());
    /// let options = options.mode(RoundMode::Floor);
    /// assert_eq!(dur.round(options)?, 5.minutes());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn round<R: Into<DurationRound>>(
        self,
        options: R,
    ) -> Result<Duration, Error> {
        let millis = options.into().round(self.millis)?;
        Ok(Duration::from_valid_millis(millis))
    }

    /// Rounds this duration down to a multiple of the given unit.
    ///
    /// A duration that is already a multiple of the unit is unchanged.
    ///
    /// # Errors
    ///
    /// This never fails in practice. It returns a `Result` for symmetry
    /// with [`Duration::round`] and [`Duration::ceil`].
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::{ToDuration, Unit};
    ///
    /// assert_eq!(1.hour().minutes(59).floor(Unit::Hour)?, 1.hour());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn floor(self, unit: Unit) -> Result<Duration, Error> {
        self.round(DurationRound::new().smallest(unit).mode(RoundMode::Floor))
    }

    /// Rounds this duration up to a multiple of the given unit.
    ///
    /// A duration that is already a multiple of the unit is unchanged.
    ///
    /// # Errors
    ///
    /// When rounding up overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::{ToDuration, Unit};
    ///
    /// assert_eq!(1.hour().minutes(1).ceil(Unit::Hour)?, 2.hours());
    /// assert_eq!(2.hours().ceil(Unit::Hour)?, 2.hours());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn ceil(self, unit: Unit) -> Result<Duration, Error> {
        self.round(DurationRound::new().smallest(unit).mode(RoundMode::Ceil))
    }
}

/// Comparisons between durations.
///
/// These are equivalent to the `PartialOrd` and `PartialEq` operators, and
/// exist for readability in chained expressions.
impl Duration {
    /// Returns true if this duration is shorter than `other`.
    #[inline]
    pub fn is_less_than(self, other: Duration) -> bool {
        self < other
    }

    /// Returns true if this duration is shorter than or equal to `other`.
    #[inline]
    pub fn is_less_than_or_equal(self, other: Duration) -> bool {
        self <= other
    }

    /// Returns true if this duration is longer than `other`.
    #[inline]
    pub fn is_greater_than(self, other: Duration) -> bool {
        self > other
    }

    /// Returns true if this duration is longer than or equal to `other`.
    #[inline]
    pub fn is_greater_than_or_equal(self, other: Duration) -> bool {
        self >= other
    }

    /// Returns true if this duration is exactly as long as `other`.
    ///
    /// Durations built from different units are equal when their totals in
    /// milliseconds are equal.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::ToDuration;
    ///
    /// assert!(1.hour().equals(60.minutes()));
    /// ```
    #[inline]
    pub fn equals(self, other: Duration) -> bool {
        self == other
    }

    /// Returns true if `min <= self <= max`.
    ///
    /// The bounds are not reordered. When `min > max`, no duration is
    /// between them and this always returns `false`.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::ToDuration;
    ///
    /// let dur = 90.seconds();
    /// assert!(dur.is_between(1.minute(), 2.minutes()));
    /// assert!(dur.is_between(90.seconds(), 90.seconds()));
    /// assert!(!dur.is_between(2.minutes(), 1.minute()));
    /// ```
    #[inline]
    pub fn is_between(self, min: Duration, max: Duration) -> bool {
        if min > max {
            debug!(
                "checking whether {self:?} is between an inverted range \
                 of {min:?} and {max:?}, which is always false",
            );
        }
        min <= self && self <= max
    }

    /// Returns true if this duration has zero length.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.millis == 0.0
    }
}

/// Conversion of the whole duration into a single unit.
///
/// Each of these returns the total length of the duration expressed in the
/// unit, including any fractional part.
impl Duration {
    /// Returns the total number of weeks in this duration.
    #[inline]
    pub fn to_weeks(self) -> f64 {
        self.total(Unit::Week)
    }

    /// Returns the total number of days in this duration.
    #[inline]
    pub fn to_days(self) -> f64 {
        self.total(Unit::Day)
    }

    /// Returns the total number of hours in this duration.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::ToDuration;
    ///
    /// assert_eq!(90.minutes().to_hours(), 1.5);
    /// ```
    #[inline]
    pub fn to_hours(self) -> f64 {
        self.total(Unit::Hour)
    }

    /// Returns the total number of minutes in this duration.
    #[inline]
    pub fn to_minutes(self) -> f64 {
        self.total(Unit::Minute)
    }

    /// Returns the total number of seconds in this duration.
    #[inline]
    pub fn to_seconds(self) -> f64 {
        self.total(Unit::Second)
    }

    /// Returns the total number of milliseconds in this duration.
    #[inline]
    pub fn to_milliseconds(self) -> f64 {
        self.millis
    }

    /// Returns the total length of this duration in the given unit.
    ///
    /// Months and years use their fixed approximations of 30 and 365 days.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::{ToDuration, Unit};
    ///
    /// assert_eq!(36.hours().total(Unit::Day), 1.5);
    /// assert_eq!(73.days().total(Unit::Year), 0.2);
    /// ```
    #[inline]
    pub fn total(self, unit: Unit) -> f64 {
        self.millis / unit.milliseconds()
    }

    /// Returns the total number of seconds in this duration.
    ///
    /// This is the terminal step of a chain of unit additions. Use
    /// [`Duration::total`] to build a value in a different unit.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::Duration;
    ///
    /// assert_eq!(Duration::new().minutes(2).seconds(30).build(), 150.0);
    /// ```
    #[inline]
    pub fn build(self) -> f64 {
        self.total(Unit::Second)
    }

    /// Returns the total length of this duration in the given unit.
    ///
    /// This is equivalent to [`Duration::total`], and reads better at the
    /// end of a chain of unit additions.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::{Duration, Unit};
    ///
    /// assert_eq!(Duration::new().hours(1).minutes(30).build_in(Unit::Minute), 90.0);
    /// ```
    #[inline]
    pub fn build_in(self, unit: Unit) -> f64 {
        self.total(unit)
    }
}

/// Clock-like components of a duration.
///
/// Each component is what remains after every bigger unit (from weeks down)
/// has been taken out. Weeks are unbounded, days are always less than `7`,
/// hours less than `24`, minutes and seconds less than `60` and
/// milliseconds less than `1000`.
///
/// Every component but milliseconds is a whole number. The milliseconds
/// component keeps any fractional part, so the components always add back
/// up to the total.
impl Duration {
    /// Returns the number of whole weeks in this duration.
    #[inline]
    pub fn get_weeks(self) -> f64 {
        self.component(Unit::Week)
    }

    /// Returns the number of whole days left after taking out weeks.
    #[inline]
    pub fn get_days(self) -> f64 {
        self.component(Unit::Day)
    }

    /// Returns the number of whole hours left after taking out days.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::ToDuration;
    ///
    /// assert_eq!(26.hours().get_hours(), 2.0);
    /// assert_eq!(26.hours().get_days(), 1.0);
    /// ```
    #[inline]
    pub fn get_hours(self) -> f64 {
        self.component(Unit::Hour)
    }

    /// Returns the number of whole minutes left after taking out hours.
    #[inline]
    pub fn get_minutes(self) -> f64 {
        self.component(Unit::Minute)
    }

    /// Returns the number of whole seconds left after taking out minutes.
    #[inline]
    pub fn get_seconds(self) -> f64 {
        self.component(Unit::Second)
    }

    /// Returns the milliseconds left after taking out seconds.
    #[inline]
    pub fn get_milliseconds(self) -> f64 {
        self.component(Unit::Millisecond)
    }

    fn component(self, target: Unit) -> f64 {
        let mut remaining = self.millis;
        for &unit in Unit::FRIENDLY.iter() {
            let size = unit.milliseconds();
            if unit == Unit::Millisecond {
                return remaining;
            }
            let value = (remaining / size).floor();
            if unit == target {
                return value;
            }
            remaining %= size;
        }
        unreachable!("{target:?} is not a component of a duration")
    }
}

/// Parsing and printing.
impl Duration {
    /// Parses a human friendly duration like `1d 2h 30m`.
    ///
    /// This is a convenience for [`FriendlyParser::parse_duration`].
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::Duration;
    ///
    /// let dur = Duration::parse_friendly("1hour 30minutes")?;
    /// assert_eq!(dur, Duration::parse_friendly("1h 30m")?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse_friendly<I: AsRef<str>>(input: I) -> Result<Duration, Error> {
        DEFAULT_FRIENDLY_PARSER.parse_duration(input)
    }

    /// Parses an ISO 8601 duration like `P1DT2H30M`.
    ///
    /// This is a convenience for [`Iso8601Parser::parse_duration`].
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::Duration;
    ///
    /// assert_eq!(Duration::parse_iso8601("PT0.5S")?.build(), 0.5);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse_iso8601<I: AsRef<str>>(input: I) -> Result<Duration, Error> {
        DEFAULT_ISO8601_PARSER.parse_duration(input)
    }

    /// Prints this duration in the short ISO 8601 format.
    ///
    /// Use [`Iso8601Printer`] to print the long format, which includes
    /// zero-valued units.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::ToDuration;
    ///
    /// assert_eq!(1.day().hours(2).to_iso8601_string(), "P1DT2H");
    /// assert_eq!(1_500.milliseconds().to_iso8601_string(), "PT1.5S");
    /// ```
    #[inline]
    pub fn to_iso8601_string(&self) -> String {
        DEFAULT_ISO8601_PRINTER.duration_to_string(self)
    }
}

impl PartialEq for Duration {
    #[inline]
    fn eq(&self, other: &Duration) -> bool {
        self.millis == other.millis
    }
}

// Durations are never NaN, so equality is reflexive.
impl Eq for Duration {}

impl PartialOrd for Duration {
    #[inline]
    fn partial_cmp(&self, other: &Duration) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    #[inline]
    fn cmp(&self, other: &Duration) -> core::cmp::Ordering {
        // There's no NaN and no negative zero, so the total order agrees
        // with numeric order.
        self.millis.total_cmp(&other.millis)
    }
}

impl core::hash::Hash for Duration {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.millis.to_bits().hash(state);
    }
}

impl core::fmt::Debug for Duration {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_ISO8601_PRINTER.print_duration(self, f)
    }
}

impl core::fmt::Display for Duration {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_FRIENDLY_PRINTER.print_duration(self, f)
    }
}

impl core::str::FromStr for Duration {
    type Err = Error;

    #[inline]
    fn from_str(string: &str) -> Result<Duration, Error> {
        if string.starts_with('P') {
            DEFAULT_ISO8601_PARSER.parse_duration(string)
        } else {
            DEFAULT_FRIENDLY_PARSER.parse_duration(string)
        }
    }
}

/// Adds two durations.
///
/// This panics on overflow. For checked arithmetic, use
/// [`Duration::checked_add`].
impl core::ops::Add for Duration {
    type Output = Duration;

    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        self.checked_add(rhs).expect("adding durations overflowed")
    }
}

impl core::ops::AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

/// Subtracts two durations, stopping at zero.
///
/// This is equivalent to [`Duration::saturating_sub`].
impl core::ops::Sub for Duration {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Duration) -> Duration {
        self.saturating_sub(rhs)
    }
}

impl core::ops::SubAssign for Duration {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

/// Multiplies a duration by a factor.
///
/// This panics when the factor is invalid or the product overflows. For
/// checked arithmetic, use [`Duration::checked_mul`].
impl core::ops::Mul<f64> for Duration {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: f64) -> Duration {
        self.checked_mul(rhs).expect("multiplying duration by factor failed")
    }
}

/// Multiplies a duration by a factor.
///
/// This panics when the factor is invalid or the product overflows. For
/// checked arithmetic, use [`Duration::checked_mul`].
impl core::ops::Mul<Duration> for f64 {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: Duration) -> Duration {
        rhs * self
    }
}

/// Divides a duration by a divisor.
///
/// This panics when the divisor is not strictly positive and finite. For
/// checked arithmetic, use [`Duration::checked_div`].
impl core::ops::Div<f64> for Duration {
    type Output = Duration;

    #[inline]
    fn div(self, rhs: f64) -> Duration {
        self.checked_div(rhs).expect("dividing duration by divisor failed")
    }
}

/// Converts an unsigned standard library duration.
///
/// Precision below a millisecond is kept as a fractional number of
/// milliseconds, up to the precision of an `f64`.
impl From<UnsignedDuration> for Duration {
    #[inline]
    fn from(d: UnsignedDuration) -> Duration {
        let millis = (d.as_secs() as f64) * Unit::Second.milliseconds()
            + f64::from(d.subsec_nanos()) / 1_000_000.0;
        Duration::from_valid_millis(millis)
    }
}

/// Converts to an unsigned standard library duration.
///
/// # Errors
///
/// When the duration is longer than `u64::MAX` seconds.
///
/// # Example
///
/// ```
/// use timebox::ToDuration;
///
/// let std = std::time::Duration::try_from(1_500.milliseconds())?;
/// assert_eq!(std, std::time::Duration::from_millis(1_500));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
impl TryFrom<Duration> for UnsignedDuration {
    type Error = Error;

    #[inline]
    fn try_from(d: Duration) -> Result<UnsignedDuration, Error> {
        UnsignedDuration::try_from_secs_f64(d.to_seconds()).map_err(|_| {
            ValueError::Overflow { what: "conversion to std duration" }
                .into()
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Duration {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Duration {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        use serde::de::{self, Visitor};

        struct DurationVisitor;

        impl<'de> Visitor<'de> for DurationVisitor {
            type Value = Duration;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str(
                    "an ISO 8601 or friendly duration string, \
                     or a number of milliseconds",
                )
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<Duration, E> {
                value.parse().map_err(de::Error::custom)
            }

            #[inline]
            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Duration, E> {
                Duration::try_from_millis(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Duration, E> {
                self.visit_f64(value as f64)
            }

            #[inline]
            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Duration, E> {
                self.visit_f64(value as f64)
            }
        }

        deserializer.deserialize_any(DurationVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        // Whole milliseconds up to about a thousand years. Fractional
        // milliseconds are tested explicitly, since they make exact
        // comparisons in properties meaningless.
        let millis = u64::arbitrary(g) % 31_536_000_000_000;
        Duration::from_valid_millis(millis as f64)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(
            (self.millis as u64)
                .shrink()
                .map(|millis| Duration::from_valid_millis(millis as f64)),
        )
    }
}

/// Options for initializing a [`Duration`] from several units at once.
///
/// Every field defaults to zero. When converted into a duration with
/// [`Duration::try_init`], each field is validated (it must be finite and
/// non-negative) and the fields are summed.
///
/// A plain `f64` converts into a `DurationInit` of that many milliseconds.
///
/// # Example
///
/// ```
/// use timebox::{Duration, DurationInit};
///
/// let init = DurationInit::new().days(1.0).hours(12.0);
/// assert_eq!(Duration::try_init(init)?.to_days(), 1.5);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DurationInit {
    weeks: f64,
    days: f64,
    hours: f64,
    minutes: f64,
    seconds: f64,
    milliseconds: f64,
}

impl DurationInit {
    /// Creates a new initialization with every unit set to zero.
    #[inline]
    pub fn new() -> DurationInit {
        DurationInit::default()
    }

    /// Sets the number of weeks.
    #[inline]
    pub fn weeks(self, weeks: f64) -> DurationInit {
        DurationInit { weeks, ..self }
    }

    /// Sets the number of days.
    #[inline]
    pub fn days(self, days: f64) -> DurationInit {
        DurationInit { days, ..self }
    }

    /// Sets the number of hours.
    #[inline]
    pub fn hours(self, hours: f64) -> DurationInit {
        DurationInit { hours, ..self }
    }

    /// Sets the number of minutes.
    #[inline]
    pub fn minutes(self, minutes: f64) -> DurationInit {
        DurationInit { minutes, ..self }
    }

    /// Sets the number of seconds.
    #[inline]
    pub fn seconds(self, seconds: f64) -> DurationInit {
        DurationInit { seconds, ..self }
    }

    /// Sets the number of milliseconds.
    #[inline]
    pub fn milliseconds(self, milliseconds: f64) -> DurationInit {
        DurationInit { milliseconds, ..self }
    }

    fn to_duration(self) -> Result<Duration, Error> {
        let fields = [
            (Unit::Week, self.weeks),
            (Unit::Day, self.days),
            (Unit::Hour, self.hours),
            (Unit::Minute, self.minutes),
            (Unit::Second, self.seconds),
            (Unit::Millisecond, self.milliseconds),
        ];
        let mut dur = Duration::ZERO;
        for (unit, amount) in fields {
            dur = dur.try_add_unit(unit, amount)?;
        }
        Ok(dur)
    }
}

impl From<f64> for DurationInit {
    #[inline]
    fn from(milliseconds: f64) -> DurationInit {
        DurationInit::new().milliseconds(milliseconds)
    }
}

/// A trait for creating durations from numbers.
///
/// This is implemented for all of Rust's primitive integer and floating
/// point types. Each method is equivalent to the corresponding unit
/// addition on [`Duration::new`], and so panics under the same conditions.
/// The singular methods read better when the amount is `1`.
///
/// Integers wider than 53 bits are converted to `f64` with the usual loss
/// of precision.
///
/// # Example
///
/// ```
/// use timebox::ToDuration;
///
/// let timeout = 1.minute() + 30.seconds();
/// assert_eq!(timeout.to_seconds(), 90.0);
///
/// let ttl = 0.5.days();
/// assert_eq!(ttl.to_hours(), 12.0);
/// ```
pub trait ToDuration: Sized {
    /// Create a new duration from this number in units of weeks.
    ///
    /// # Panics
    ///
    /// When `Duration::new().weeks(self)` would panic.
    fn weeks(self) -> Duration;

    /// Create a new duration from this number in units of days.
    ///
    /// # Panics
    ///
    /// When `Duration::new().days(self)` would panic.
    fn days(self) -> Duration;

    /// Create a new duration from this number in units of hours.
    ///
    /// # Panics
    ///
    /// When `Duration::new().hours(self)` would panic.
    fn hours(self) -> Duration;

    /// Create a new duration from this number in units of minutes.
    ///
    /// # Panics
    ///
    /// When `Duration::new().minutes(self)` would panic.
    fn minutes(self) -> Duration;

    /// Create a new duration from this number in units of seconds.
    ///
    /// # Panics
    ///
    /// When `Duration::new().seconds(self)` would panic.
    fn seconds(self) -> Duration;

    /// Create a new duration from this number in units of milliseconds.
    ///
    /// # Panics
    ///
    /// When `Duration::new().milliseconds(self)` would panic.
    fn milliseconds(self) -> Duration;

    /// Equivalent to `weeks()`, but reads better for singular units.
    #[inline]
    fn week(self) -> Duration {
        self.weeks()
    }

    /// Equivalent to `days()`, but reads better for singular units.
    #[inline]
    fn day(self) -> Duration {
        self.days()
    }

    /// Equivalent to `hours()`, but reads better for singular units.
    #[inline]
    fn hour(self) -> Duration {
        self.hours()
    }

    /// Equivalent to `minutes()`, but reads better for singular units.
    #[inline]
    fn minute(self) -> Duration {
        self.minutes()
    }

    /// Equivalent to `seconds()`, but reads better for singular units.
    #[inline]
    fn second(self) -> Duration {
        self.seconds()
    }

    /// Equivalent to `milliseconds()`, but reads better for singular units.
    #[inline]
    fn millisecond(self) -> Duration {
        self.milliseconds()
    }
}

macro_rules! impl_to_duration {
    ($ty:ty) => {
        impl ToDuration for $ty {
            #[inline]
            fn weeks(self) -> Duration {
                Duration::new().weeks(self as f64)
            }
            #[inline]
            fn days(self) -> Duration {
                Duration::new().days(self as f64)
            }
            #[inline]
            fn hours(self) -> Duration {
                Duration::new().hours(self as f64)
            }
            #[inline]
            fn minutes(self) -> Duration {
                Duration::new().minutes(self as f64)
            }
            #[inline]
            fn seconds(self) -> Duration {
                Duration::new().seconds(self as f64)
            }
            #[inline]
            fn milliseconds(self) -> Duration {
                Duration::new().milliseconds(self as f64)
            }
        }
    };
}

impl_to_duration!(i8);
impl_to_duration!(i16);
impl_to_duration!(i32);
impl_to_duration!(i64);
impl_to_duration!(u8);
impl_to_duration!(u16);
impl_to_duration!(u32);
impl_to_duration!(u64);
impl_to_duration!(f32);
impl_to_duration!(f64);
