/*!
timebox is a small library for working with spans of elapsed time.

A [`Duration`] is a single non-negative number of milliseconds. It can be
built up by chaining unit additions, initialized from several units at
once, parsed from a human friendly string like `1d 2h 30m` or from an ISO
8601 duration like `P1DT2H30M`, and printed back out in either form.

The intended use is application code that needs readable durations:
timeouts, TTLs, rate limits and SLA math. It is deliberately *not* a
calendar library. There are no time zones and no instants in time. When the
ISO 8601 format requires years and months, a year is always 365 days and a
month is always 30 days.

# Example

```
use timebox::{Duration, ToDuration};

let dur = Duration::new().days(1).hours(2);
assert_eq!(dur.to_string(), "1 day, 2 hours");
assert_eq!(dur.to_iso8601_string(), "P1DT2H");
assert_eq!(dur.to_minutes(), 1_560.0);

let parsed: Duration = "1d 2h".parse()?;
assert_eq!(parsed, dur);
assert_eq!(1.day() + 2.hours(), dur);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Construction

Unit additions come in two flavors. The infallible ones, like
[`Duration::hours`], panic when given a negative or non-finite amount. The
fallible ones, like [`Duration::try_hours`], return an [`Error`] instead.
Use the latter whenever the amount comes from user input:

```
use timebox::Duration;

assert!(Duration::new().try_hours(-1.0).unwrap_err().is_invalid_value());
assert!(Duration::new().try_minutes(f64::INFINITY).unwrap_err().is_non_finite());
```

Several units can also be given at once with a [`DurationInit`]:

```
use timebox::{Duration, DurationInit};

let dur = Duration::try_init(DurationInit::new().hours(1.0).minutes(30.0))?;
assert_eq!(dur.to_seconds(), 5_400.0);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Formats

The two textual formats live in the [`fmt`] module:

* [`fmt::friendly`] prints durations like `1 day, 2 hours` (or `1d, 2h`) with
optional translations, and parses whitespace separated tokens like `1d 2h`.
* [`fmt::iso8601`] prints and parses the `P[nY][nM][nW][nD]T[nH][nM][nS]`
duration grammar, including fractional seconds.

# Crate features

* **std** (enabled by default) - Adds `std::error::Error` for [`Error`].
* **alloc** (enabled by `std`) - Forwards `alloc` to optional dependencies.
This crate always needs a global allocator, since error messages and
printed strings are heap allocated.
* **logging** - Emits diagnostics through the [`log`] crate. The most
useful of these is a debug message whenever the ISO 8601 parser skips input
it doesn't recognize.
* **serde** - Adds `Serialize` and `Deserialize` for [`Duration`] and the
helpers in `fmt::serde`.

[`log`]: https://docs.rs/log
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use crate::{
    duration::{Duration, DurationInit, ToDuration},
    error::Error,
    round::{DurationRound, RoundMode},
    unit::Unit,
};

#[macro_use]
mod logging;

mod duration;
mod error;
pub mod fmt;
mod round;
mod unit;
mod util;
