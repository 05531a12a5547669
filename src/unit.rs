const MILLIS_PER_SECOND: f64 = 1_000.0;
const MILLIS_PER_MINUTE: f64 = 60.0 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: f64 = 60.0 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: f64 = 24.0 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: f64 = 7.0 * MILLIS_PER_DAY;
const MILLIS_PER_MONTH: f64 = 30.0 * MILLIS_PER_DAY;
const MILLIS_PER_YEAR: f64 = 365.0 * MILLIS_PER_DAY;

/// A unit of time that a [`Duration`](crate::Duration) can be expressed in.
///
/// Every unit has a fixed size in milliseconds. In particular, a month is
/// always 30 days and a year is always 365 days. These two units are only
/// approximations and exist to support the ISO 8601 duration format. The
/// human friendly format never uses them.
///
/// Units are ordered by their size:
///
/// ```
/// use timebox::Unit;
///
/// assert!(Unit::Year > Unit::Month);
/// assert!(Unit::Second > Unit::Millisecond);
/// ```
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Unit {
    /// A millisecond, the smallest unit.
    Millisecond = 0,
    /// A second is always 1,000 milliseconds.
    Second = 1,
    /// A minute is always 60 seconds.
    Minute = 2,
    /// An hour is always 60 minutes.
    Hour = 3,
    /// A day is always 24 hours.
    Day = 4,
    /// A week is always 7 days.
    Week = 5,
    /// A month is always 30 days. Only the ISO 8601 format uses it.
    Month = 6,
    /// A year is always 365 days. Only the ISO 8601 format uses it.
    Year = 7,
}

impl Unit {
    /// The units used by the human friendly format, from biggest to
    /// smallest.
    pub(crate) const FRIENDLY: [Unit; 6] = [
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ];

    /// Returns the number of milliseconds in this unit.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::Unit;
    ///
    /// assert_eq!(Unit::Hour.milliseconds(), 3_600_000.0);
    /// assert_eq!(Unit::Month.milliseconds(), 30.0 * Unit::Day.milliseconds());
    /// ```
    pub const fn milliseconds(self) -> f64 {
        match self {
            Unit::Millisecond => 1.0,
            Unit::Second => MILLIS_PER_SECOND,
            Unit::Minute => MILLIS_PER_MINUTE,
            Unit::Hour => MILLIS_PER_HOUR,
            Unit::Day => MILLIS_PER_DAY,
            Unit::Week => MILLIS_PER_WEEK,
            Unit::Month => MILLIS_PER_MONTH,
            Unit::Year => MILLIS_PER_YEAR,
        }
    }

    /// Returns the position of this unit in a translation table, if the
    /// human friendly format supports it at all.
    pub(crate) fn friendly_index(self) -> Option<usize> {
        match self {
            Unit::Week => Some(0),
            Unit::Day => Some(1),
            Unit::Hour => Some(2),
            Unit::Minute => Some(3),
            Unit::Second => Some(4),
            Unit::Millisecond => Some(5),
            Unit::Month | Unit::Year => None,
        }
    }

    /// A human readable plural description of this unit of time.
    pub(crate) fn plural(self) -> &'static str {
        match self {
            Unit::Year => "years",
            Unit::Month => "months",
            Unit::Week => "weeks",
            Unit::Day => "days",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
            Unit::Millisecond => "milliseconds",
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
        *g.choose(&[
            Unit::Year,
            Unit::Month,
            Unit::Week,
            Unit::Day,
            Unit::Hour,
            Unit::Minute,
            Unit::Second,
            Unit::Millisecond,
        ])
        .unwrap()
    }
}
