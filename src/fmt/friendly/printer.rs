use alloc::string::String;

use crate::{
    fmt::{friendly::translation::Translations, Format},
    Duration, Unit,
};

#[cfg(not(feature = "std"))]
use crate::util::libm::Float;

/// The default English table, promoted to a `'static` reference.
const ENGLISH: &Translations<'static> = &Translations::english();

/// A printer for the human friendly duration format.
///
/// This printer converts a [`Duration`] into a string like
/// `1 day, 2 hours, 30 minutes` or `1d, 2h, 30m`. See the
/// [module documentation](super) for a description of the format.
///
/// A printer is cheap to construct and can be shared freely. The
/// `Display` impl on `Duration` uses a printer with the default
/// configuration.
///
/// # Example
///
/// ```
/// use timebox::{fmt::{friendly::FriendlyPrinter, Format}, ToDuration};
///
/// let dur = 1.week().days(2).seconds(1);
///
/// let printer = FriendlyPrinter::new();
/// assert_eq!(printer.duration_to_string(&dur), "1 week, 2 days, 1 second");
///
/// let printer = printer.format(Format::Short).separator(" ");
/// assert_eq!(printer.duration_to_string(&dur), "1w 2d 1s");
/// ```
#[derive(Clone, Debug)]
pub struct FriendlyPrinter<'t> {
    format: Format,
    separator: &'t str,
    translations: &'t Translations<'t>,
}

impl FriendlyPrinter<'static> {
    /// Create a new printer with the default configuration.
    ///
    /// The default uses the long format, a separator of `", "` and English
    /// unit names.
    #[inline]
    pub const fn new() -> FriendlyPrinter<'static> {
        FriendlyPrinter {
            format: Format::Long,
            separator: ", ",
            translations: ENGLISH,
        }
    }
}

impl<'t> FriendlyPrinter<'t> {
    /// Set whether to print long unit names (`2 hours`) or short ones
    /// (`2h`).
    ///
    /// The default is [`Format::Long`].
    #[inline]
    pub const fn format(self, format: Format) -> FriendlyPrinter<'t> {
        FriendlyPrinter { format, ..self }
    }

    /// Set the string printed between units.
    ///
    /// The default is `", "`.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::{fmt::friendly::FriendlyPrinter, ToDuration};
    ///
    /// let printer = FriendlyPrinter::new().separator(" and ");
    /// assert_eq!(
    ///     printer.duration_to_string(&1.hour().minutes(1)),
    ///     "1 hour and 1 minute",
    /// );
    /// ```
    #[inline]
    pub const fn separator(self, separator: &'t str) -> FriendlyPrinter<'t> {
        FriendlyPrinter { separator, ..self }
    }

    /// Set the unit names to print.
    ///
    /// Units missing from the table given use their English names.
    ///
    /// The default is [`Translations::english`].
    #[inline]
    pub const fn translations(
        self,
        translations: &'t Translations<'t>,
    ) -> FriendlyPrinter<'t> {
        FriendlyPrinter { translations, ..self }
    }

    /// Format a `Duration` into a string.
    ///
    /// This is a convenience routine for [`FriendlyPrinter::print_duration`]
    /// with a `String`.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::{fmt::friendly::FriendlyPrinter, Duration, ToDuration};
    ///
    /// let printer = FriendlyPrinter::new();
    /// assert_eq!(printer.duration_to_string(&1.day().hours(2)), "1 day, 2 hours");
    /// assert_eq!(printer.duration_to_string(&Duration::ZERO), "");
    /// ```
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
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::{fmt::friendly::FriendlyPrinter, ToDuration};
    ///
    /// let mut buf = String::new();
    /// FriendlyPrinter::new().print_duration(&90.minutes(), &mut buf)?;
    /// assert_eq!(buf, "1 hour, 30 minutes");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn print_duration<W: core::fmt::Write>(
        &self,
        duration: &Duration,
        mut wtr: W,
    ) -> core::fmt::Result {
        let mut remaining = duration.to_milliseconds();
        let mut first = true;
        for unit in Unit::FRIENDLY {
            let size = unit.milliseconds();
            let amount = (remaining / size).floor();
            if amount <= 0.0 {
                continue;
            }
            remaining %= size;

            if !first {
                wtr.write_str(self.separator)?;
            }
            first = false;

            let translation = self.translations.resolve(unit);
            match self.format {
                Format::Long => {
                    let name = translation.long().for_amount(amount);
                    write!(wtr, "{amount} {name}")?;
                }
                Format::Short => {
                    let name = translation.short().for_amount(amount);
                    write!(wtr, "{amount}{name}")?;
                }
            }
        }
        Ok(())
    }
}

impl Default for FriendlyPrinter<'static> {
    fn default() -> FriendlyPrinter<'static> {
        FriendlyPrinter::new()
    }
}
