/*!
Configurable support for printing and parsing durations.

This module contains two duration formats:

* [`friendly`] is a human readable format like `1 day, 2 hours` or
`1d 2h 30m`. The printer supports long and short unit names, a custom
separator and translated unit names.
* [`iso8601`] is the ISO 8601 duration format like `P1DT2H30M`. The printer
emits either only the non-zero units or every unit.

For the common cases, the `Display`, `Debug` and `FromStr` impls on
[`Duration`](crate::Duration) are more convenient: `Display` uses the
friendly printer, `Debug` uses the ISO 8601 printer and `FromStr` picks a
parser based on whether the input starts with `P`.

# Example

```
use timebox::{fmt::{friendly::FriendlyPrinter, Format}, Duration};

let dur: Duration = "P1DT2H".parse()?;
let printer = FriendlyPrinter::new().format(Format::Short);
assert_eq!(printer.duration_to_string(&dur), "1d, 2h");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub mod friendly;
pub mod iso8601;
#[cfg(feature = "serde")]
pub mod serde;

/// The verbosity of a printed duration.
///
/// Both printers in this module accept a `Format`, but interpret it
/// slightly differently:
///
/// * The [friendly printer](friendly::FriendlyPrinter) uses long unit names
/// (`2 hours`) in `Long` mode and short ones (`2h`) in `Short` mode. It
/// defaults to `Long`.
/// * The [ISO 8601 printer](iso8601::Iso8601Printer) emits every unit,
/// including those that are zero, in `Long` mode and only non-zero units in
/// `Short` mode. It defaults to `Short`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Format {
    /// Long unit names, or every unit.
    Long,
    /// Short unit names, or only non-zero units.
    Short,
}
