/*!
A human friendly format for durations.

This format is meant for showing durations to people, and for accepting
durations typed by people. For example, `1 day, 2 hours, 30 minutes` or
`1d 2h 30m`.

# Printing

The [`FriendlyPrinter`] walks the units from weeks down to milliseconds.
For each unit, it takes out as many whole units as possible. Units with a
zero amount are skipped entirely, so a zero length duration prints as the
empty string. Any fractional millisecond is dropped.

Each printed unit uses its singular name when the amount is exactly `1` and
its plural name otherwise. In [`Format::Long`](crate::fmt::Format::Long),
the amount and name are separated by a space (`2 hours`). In
[`Format::Short`](crate::fmt::Format::Short), they're adjacent (`2h`).
Units are joined with a configurable separator, which defaults to `", "`.

The unit names come from [`Translations`]. The default translations are
English. A translation table may leave out any unit, in which case the
English names are used for that unit.

# Parsing

The [`FriendlyParser`] accepts a sequence of tokens separated by runs of
whitespace. Each token must be a non-empty sequence of ASCII digits
immediately followed by a unit designator. The designators are matched
case insensitively:

```text
weeks        = "w" | "week" | "weeks"
days         = "d" | "day" | "days"
hours        = "h" | "hour" | "hours"
minutes      = "m" | "minute" | "minutes"
seconds      = "s" | "second" | "seconds"
milliseconds = "ms" | "millisecond" | "milliseconds"
```

The amounts of all tokens are summed. Units may repeat and may appear in
any order. Parsing is all or nothing: if any token is malformed, an error
naming that token is returned. This includes the empty token at either end
of an input with leading or trailing whitespace, and the empty input.

Note that the parser doesn't accept everything the printer emits. In
particular, the default separator `", "` leaves a trailing comma on tokens.
To round trip, print with the short format and a separator of `" "`.

# Example

```
use timebox::{
    fmt::{friendly::{FriendlyParser, FriendlyPrinter}, Format},
    Duration,
};

let dur = FriendlyParser::new().parse_duration("1d 2H 30minutes")?;
assert_eq!(dur.build(), 95_400.0);

let printer = FriendlyPrinter::new().format(Format::Short).separator(" ");
let string = printer.duration_to_string(&dur);
assert_eq!(string, "1d 2h 30m");
assert_eq!(FriendlyParser::new().parse_duration(&string)?, dur);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub use self::{
    parser::FriendlyParser,
    printer::FriendlyPrinter,
    translation::{Translations, UnitNames, UnitTranslation},
};

mod parser;
mod printer;
mod translation;
