/*!
The ISO 8601 duration format.

This is the format of strings like `P1DT2H30M` or `PT0.5S`.

# Printing

The [`Iso8601Printer`] always emits a leading `P` and a `T` between the
date and time units, even when there are no time units. Years and months
are the fixed approximations of 365 and 30 days. Every unit down to
minutes is printed as an integer. Seconds are printed as a decimal number
and carry any fractional part of the duration.

In [`Format::Short`](crate::fmt::Format::Short), which is the default,
units with a zero amount are left out. So a zero length duration prints as
`PT`. In [`Format::Long`](crate::fmt::Format::Long), every unit is
printed:

```
use timebox::{fmt::{iso8601::Iso8601Printer, Format}, ToDuration};

let dur = 1.day().hours(2);
assert_eq!(Iso8601Printer::new().duration_to_string(&dur), "P1DT2H");
assert_eq!(
    Iso8601Printer::new().format(Format::Long).duration_to_string(&dur),
    "P0Y0M0W1DT2H0M0S",
);
```

# Parsing

The [`Iso8601Parser`] is lenient. After the required leading `P`, the
input is split at the first `T`. The part before it is scanned for
components of the form `<number><designator>` with a designator of `Y`,
`M`, `W` or `D`. The part after it is scanned the same way with a
designator of `H`, `M` or `S`. A number is one or more ASCII digits,
optionally followed by a `.` and one or more ASCII digits.

Anything in between components that doesn't form a component is skipped.
Components may repeat, in which case their amounts add up.

```text
duration  = "P" date-part [ "T" time-part ]
date-part = { skipped | number ( "Y" | "M" | "W" | "D" ) }
time-part = { skipped | number ( "H" | "M" | "S" ) }
number    = digit { digit } [ "." digit { digit } ]
```

# Example

```
use timebox::{fmt::iso8601::Iso8601Parser, ToDuration};

let parser = Iso8601Parser::new();
assert_eq!(parser.parse_duration("P1DT2H30M")?.build(), 95_400.0);
assert_eq!(parser.parse_duration("PT0.5S")?.build(), 0.5);
assert_eq!(parser.parse_duration("P1Y")?, 365.days());

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub use self::{parser::Iso8601Parser, printer::Iso8601Printer};

use crate::Unit;

mod parser;
mod printer;

/// The designators of the units before the `T`, from biggest to smallest.
static DATE_DESIGNATORS: &[(u8, Unit)] = &[
    (b'Y', Unit::Year),
    (b'M', Unit::Month),
    (b'W', Unit::Week),
    (b'D', Unit::Day),
];

/// The designators of the units after the `T`, from biggest to smallest.
///
/// The printer handles seconds separately since they may be fractional.
static TIME_DESIGNATORS: &[(u8, Unit)] = &[
    (b'H', Unit::Hour),
    (b'M', Unit::Minute),
    (b'S', Unit::Second),
];
