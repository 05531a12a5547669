use crate::Unit;

/// The English unit names used when a translation is missing.
const ENGLISH: Translations<'static> = Translations {
    units: [
        Some(UnitTranslation::new(
            UnitNames::new("week", "weeks"),
            UnitNames::new("w", "w"),
        )),
        Some(UnitTranslation::new(
            UnitNames::new("day", "days"),
            UnitNames::new("d", "d"),
        )),
        Some(UnitTranslation::new(
            UnitNames::new("hour", "hours"),
            UnitNames::new("h", "h"),
        )),
        Some(UnitTranslation::new(
            UnitNames::new("minute", "minutes"),
            UnitNames::new("m", "m"),
        )),
        Some(UnitTranslation::new(
            UnitNames::new("second", "seconds"),
            UnitNames::new("s", "s"),
        )),
        Some(UnitTranslation::new(
            UnitNames::new("millisecond", "milliseconds"),
            UnitNames::new("ms", "ms"),
        )),
    ],
};

/// A table of unit names used by a
/// [`FriendlyPrinter`](super::FriendlyPrinter).
///
/// A table has an optional entry for each of weeks, days, hours, minutes,
/// seconds and milliseconds. When the printer needs a unit without an
/// entry, it falls back to the English names for that unit.
///
/// # Example
///
/// This shows a partial German translation. Milliseconds aren't translated,
/// so they use the English names:
///
/// ```
/// use timebox::{
///     fmt::friendly::{FriendlyPrinter, Translations, UnitNames, UnitTranslation},
///     ToDuration, Unit,
/// };
///
/// let german = Translations::empty()
///     .unit(Unit::Day, UnitTranslation::new(
///         UnitNames::new("Tag", "Tage"),
///         UnitNames::new("T", "T"),
///     ))
///     .unit(Unit::Hour, UnitTranslation::new(
///         UnitNames::new("Stunde", "Stunden"),
///         UnitNames::new("Std", "Std"),
///     ));
/// let printer = FriendlyPrinter::new().translations(&german);
///
/// let dur = 1.day().hours(2).milliseconds(5);
/// assert_eq!(
///     printer.duration_to_string(&dur),
///     "1 Tag, 2 Stunden, 5 milliseconds",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Translations<'a> {
    /// Indexed by `Unit::friendly_index`.
    units: [Option<UnitTranslation<'a>>; 6],
}

impl<'a> Translations<'a> {
    /// Returns a table with no entries.
    ///
    /// A printer using this table prints English names for every unit.
    #[inline]
    pub const fn empty() -> Translations<'a> {
        Translations { units: [None; 6] }
    }

    /// Returns the built-in English table.
    #[inline]
    pub const fn english() -> Translations<'static> {
        ENGLISH
    }

    /// Sets the names for the given unit.
    ///
    /// # Panics
    ///
    /// When `unit` is [`Unit::Year`] or [`Unit::Month`]. The friendly
    /// format doesn't use these units.
    #[inline]
    pub fn unit(
        mut self,
        unit: Unit,
        translation: UnitTranslation<'a>,
    ) -> Translations<'a> {
        let Some(index) = unit.friendly_index() else {
            panic!("{unit:?} is not a unit of the friendly duration format")
        };
        self.units[index] = Some(translation);
        self
    }

    /// Returns the names for the given unit, if this table has them.
    ///
    /// This returns `None` for years and months.
    #[inline]
    pub fn get(&self, unit: Unit) -> Option<&UnitTranslation<'a>> {
        self.units[unit.friendly_index()?].as_ref()
    }

    /// Returns the names for the given unit, falling back to English.
    pub(crate) fn resolve(&self, unit: Unit) -> UnitTranslation<'a> {
        let index = match unit.friendly_index() {
            Some(index) => index,
            // Only the friendly units are ever printed.
            None => unreachable!("no friendly translation for {unit:?}"),
        };
        match self.units[index] {
            Some(translation) => translation,
            None => match ENGLISH.units[index] {
                Some(translation) => translation,
                None => unreachable!("English table is complete"),
            },
        }
    }
}

impl Default for Translations<'static> {
    fn default() -> Translations<'static> {
        Translations::english()
    }
}

/// The long and short names of a single unit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct UnitTranslation<'a> {
    long: UnitNames<'a>,
    short: UnitNames<'a>,
}

impl<'a> UnitTranslation<'a> {
    /// Creates a new translation from long names (used with
    /// [`Format::Long`](crate::fmt::Format::Long)) and short names (used
    /// with [`Format::Short`](crate::fmt::Format::Short)).
    #[inline]
    pub const fn new(
        long: UnitNames<'a>,
        short: UnitNames<'a>,
    ) -> UnitTranslation<'a> {
        UnitTranslation { long, short }
    }

    /// Returns the long names.
    #[inline]
    pub fn long(&self) -> UnitNames<'a> {
        self.long
    }

    /// Returns the short names.
    #[inline]
    pub fn short(&self) -> UnitNames<'a> {
        self.short
    }
}

/// The singular and plural name of a unit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct UnitNames<'a> {
    singular: &'a str,
    plural: &'a str,
}

impl<'a> UnitNames<'a> {
    /// Creates a new pair of names.
    #[inline]
    pub const fn new(singular: &'a str, plural: &'a str) -> UnitNames<'a> {
        UnitNames { singular, plural }
    }

    /// Returns the name used when the amount is exactly `1`.
    #[inline]
    pub fn singular(&self) -> &'a str {
        self.singular
    }

    /// Returns the name used for every amount other than `1`.
    #[inline]
    pub fn plural(&self) -> &'a str {
        self.plural
    }

    /// Returns the name to use for the given amount.
    pub(crate) fn for_amount(&self, amount: f64) -> &'a str {
        if amount == 1.0 {
            self.singular
        } else {
            self.plural
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_complete() {
        let english = Translations::english();
        for unit in Unit::FRIENDLY {
            let translation = english.get(unit).unwrap();
            assert_eq!(translation.long().plural(), unit.plural());
            assert!(unit.plural().starts_with(translation.long().singular()));
        }
        assert_eq!(english.get(Unit::Year), None);
    }

    #[test]
    fn missing_units_fall_back_to_english() {
        let names = UnitNames::new("jour", "jours");
        let french = Translations::empty()
            .unit(Unit::Day, UnitTranslation::new(names, names));
        assert_eq!(french.resolve(Unit::Day).long().plural(), "jours");
        assert_eq!(french.resolve(Unit::Hour).long().plural(), "hours");
        assert_eq!(french.resolve(Unit::Millisecond).short().singular(), "ms");
        assert_eq!(french.get(Unit::Hour), None);
    }

    #[test]
    fn singular_only_for_one() {
        let names = UnitNames::new("day", "days");
        assert_eq!(names.for_amount(1.0), "day");
        assert_eq!(names.for_amount(0.0), "days");
        assert_eq!(names.for_amount(2.0), "days");
    }

    #[test]
    #[should_panic(expected = "Year is not a unit of the friendly")]
    fn year_has_no_translation() {
        let names = UnitNames::new("an", "ans");
        let _ = Translations::empty()
            .unit(Unit::Year, UnitTranslation::new(names, names));
    }
}
