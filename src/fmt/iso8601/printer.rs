use alloc::string::String;

use crate::{
    fmt::{
        iso8601::{DATE_DESIGNATORS, TIME_DESIGNATORS},
        Format,
    },
    Duration, Unit,
};

#[cfg(not(feature = "std"))]
use crate::util::libm::Float;

/// A printer for the ISO 8601 duration format.
///
/// See the [module documentation](super) for a description of the format.
/// The `Debug` impl on [`Duration`] uses a printer with the default
/// configuration.
///
/// # Example
///
/// ```
/// use timebox::{fmt::iso8601::Iso8601Printer, Duration, ToDuration};
///
/// let printer = Iso8601Printer::new();
/// assert_eq!(printer.duration_to_string(&1.week().days(1)), "P1W1DT");
/// assert_eq!(printer.duration_to_string(&Duration::from_millis(500.0)), "PT0.5S");
/// assert_eq!(printer.duration_to_string(&400.days()), "P1Y1M5DT");
/// ```
#[derive(Clone, Debug)]
pub struct Iso8601Printer {
    format: Format,
}

impl Iso8601Printer {
    /// Create a new printer with the default configuration.
    ///
    /// The default only prints units with a non-zero amount.
    #[inline]
    pub const fn new() -> Iso8601Printer {
        Iso8601Printer { format: Format::Short }
    }

    /// Set whether to print every unit, or only those with a non-zero
    /// amount.
    ///
    /// The default is [`Format::Short`], which leaves out zero units.
    #[inline]
    pub const fn format(self, format: Format) -> Iso8601Printer {
        Iso8601Printer { format }
    }

    /// Format a `Duration` into a string.
    ///
    /// This is a convenience routine for [`Iso8601Printer::print_duration`]
    /// with a `String`.
    pub fn duration_to_string(&self, duration: &Duration) -> String {
        let mut buf = String::new();
        // OK because writing to a `String` never fails.
        self.print_duration(duration, &mut buf).unwrap();
        buf
    }

    /// Print a `Duration` to the given writer.
    ///
    /// # Errors
    ///
    /// This only returns an error when writing to the given writer fails.
    pub fn print_duration<W: core::fmt::Write>(
        &self,
        duration: &Duration,
        mut wtr: W,
    ) -> core::fmt::Result {
        let long = self.format == Format::Long;
        let mut remaining = duration.to_milliseconds();

        wtr.write_str("P")?;
        for &(designator, unit) in DATE_DESIGNATORS {
            self.print_integer_unit(&mut wtr, &mut remaining, designator, unit)?;
        }
        wtr.write_str("T")?;
        for &(designator, unit) in TIME_DESIGNATORS {
            if unit == Unit::Second {
                continue;
            }
            self.print_integer_unit(&mut wtr, &mut remaining, designator, unit)?;
        }
        let seconds = remaining / Unit::Second.milliseconds();
        if seconds > 0.0 || long {
            write!(wtr, "{seconds}S")?;
        }
        Ok(())
    }

    /// Prints the whole number of `unit` in `remaining`, and takes it out.
    fn print_integer_unit<W: core::fmt::Write>(
        &self,
        wtr: &mut W,
        remaining: &mut f64,
        designator: u8,
        unit: Unit,
    ) -> core::fmt::Result {
        let size = unit.milliseconds();
        let amount = (*remaining / size).floor();
        if amount > 0.0 || self.format == Format::Long {
            write!(wtr, "{amount}{}", char::from(designator))?;
        }
        *remaining %= size;
        Ok(())
    }
}

impl Default for Iso8601Printer {
    fn default() -> Iso8601Printer {
        Iso8601Printer::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::ToDuration;

    use super::*;

    fn short(dur: Duration) -> String {
        Iso8601Printer::new().duration_to_string(&dur)
    }

    fn long(dur: Duration) -> String {
        Iso8601Printer::new().format(Format::Long).duration_to_string(&dur)
    }

    #[test]
    fn print_short() {
        insta::assert_snapshot!(short(1.day().hours(2)), @"P1DT2H");
        insta::assert_snapshot!(short(1.day().hours(2).minutes(30)), @"P1DT2H30M");
        insta::assert_snapshot!(short(Duration::ZERO), @"PT");
        insta::assert_snapshot!(short(90.seconds()), @"PT1M30S");
        insta::assert_snapshot!(short(1_500.milliseconds()), @"PT1.5S");
        insta::assert_snapshot!(short(1.milliseconds()), @"PT0.001S");
        insta::assert_snapshot!(short(2.weeks()), @"P2WT");
        insta::assert_snapshot!(short(365.days()), @"P1YT");
        insta::assert_snapshot!(short(30.days()), @"P1MT");
    }

    #[test]
    fn print_long() {
        insta::assert_snapshot!(long(1.day().hours(2)), @"P0Y0M0W1DT2H0M0S");
        insta::assert_snapshot!(long(Duration::ZERO), @"P0Y0M0W0DT0H0M0S");
        insta::assert_snapshot!(
            long(366.days().hours(1).seconds(2.5)),
            @"P1Y0M0W1DT1H0M2.5S",
        );
    }

    #[test]
    fn print_to_formatter() {
        let dur = 3.hours();
        assert_eq!(alloc::format!("{dur:?}"), "PT3H");
    }
}
