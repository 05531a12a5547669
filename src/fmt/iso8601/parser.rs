use crate::{
    error::{fmt::iso8601::Error as E, Error, ErrorContext},
    fmt::iso8601::{DATE_DESIGNATORS, TIME_DESIGNATORS},
    util::number,
    Duration, Unit,
};

/// A parser for the ISO 8601 duration format.
///
/// See the [module documentation](super) for the grammar. In short, the
/// input must start with `P`, and is otherwise scanned leniently for
/// `<number><designator>` components.
///
/// # Example
///
/// ```
/// use timebox::{fmt::iso8601::Iso8601Parser, ToDuration};
///
/// let parser = Iso8601Parser::new();
/// assert_eq!(parser.parse_duration("P1W2D")?, 9.days());
/// assert_eq!(parser.parse_duration("PT1.5H")?, 90.minutes());
/// // Unrecognized text is skipped.
/// assert_eq!(parser.parse_duration("P1D2X3H")?, 1.day());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Iso8601Parser {
    /// There are currently no configuration options for this parser.
    _priv: (),
}

impl Iso8601Parser {
    /// Create a new parser with the default configuration.
    #[inline]
    pub const fn new() -> Iso8601Parser {
        Iso8601Parser { _priv: () }
    }

    /// Parse an ISO 8601 duration string into a `Duration` value.
    ///
    /// # Errors
    ///
    /// This returns an error when the input doesn't start with `P`
    /// ([`Error::is_format`](crate::Error::is_format)), or when the total
    /// is too big to represent.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::fmt::iso8601::Iso8601Parser;
    ///
    /// let err = Iso8601Parser::new().parse_duration("1DT2H").unwrap_err();
    /// assert!(err.is_format());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "failed to parse \"1DT2H\" as an ISO 8601 duration: \
    ///      an ISO 8601 duration must start with 'P'",
    /// );
    /// ```
    pub fn parse_duration<I: AsRef<str>>(
        &self,
        input: I,
    ) -> Result<Duration, Error> {
        let input = input.as_ref();
        trace!("parsing {input:?} as an ISO 8601 duration");
        self.parse(input)
            .with_context(|| E::Failed { input: input.into() })
    }

    fn parse(&self, input: &str) -> Result<Duration, Error> {
        let Some(rest) = input.strip_prefix('P') else {
            return Err(E::MissingPrefix.into());
        };
        let (date, time) = match rest.split_once('T') {
            Some((date, time)) => (date, time),
            None => (rest, ""),
        };
        let millis = scan(date, DATE_DESIGNATORS)?
            + scan(time, TIME_DESIGNATORS)?;
        let millis = number::finite_result("total", millis)?;
        Duration::try_from_millis(millis)
    }
}

/// Scans `part` for components with one of the given designators, and
/// returns the sum of their amounts in milliseconds.
///
/// Text that doesn't form a component is skipped one byte at a time.
fn scan(part: &str, designators: &[(u8, Unit)]) -> Result<f64, Error> {
    let bytes = part.as_bytes();
    let mut millis = 0.0;
    let mut at = 0;
    let mut skipped_from = None;
    while at < bytes.len() {
        let Some(component) = Component::find(bytes, at, designators) else {
            skipped_from.get_or_insert(at);
            at += 1;
            continue;
        };
        if let Some(start) = skipped_from.take() {
            log_skipped(&part[start..at]);
        }
        // OK because the number is ASCII digits with an optional fraction.
        let amount: f64 = part[at..component.number_end].parse().unwrap();
        let what = component.unit.plural();
        let amount = number::non_negative(what, amount)?;
        millis += amount * component.unit.milliseconds();
        at = component.number_end + 1;
    }
    if let Some(start) = skipped_from {
        log_skipped(&part[start..]);
    }
    Ok(millis)
}

fn log_skipped(_text: &str) {
    debug!("skipping unrecognized ISO 8601 duration text {_text:?}");
}

/// A `<number><designator>` component found at some position.
#[derive(Debug)]
struct Component {
    /// The exclusive end of the number. The designator is the byte at this
    /// position.
    number_end: usize,
    unit: Unit,
}

impl Component {
    /// Returns the component starting at `start`, if there is one.
    fn find(
        bytes: &[u8],
        start: usize,
        designators: &[(u8, Unit)],
    ) -> Option<Component> {
        let digits_end = skip_digits(bytes, start);
        if digits_end == start {
            return None;
        }
        let mut number_end = digits_end;
        if bytes.get(digits_end) == Some(&b'.') {
            let fraction_end = skip_digits(bytes, digits_end + 1);
            if fraction_end > digits_end + 1 {
                number_end = fraction_end;
            }
        }
        let designator = *bytes.get(number_end)?;
        let unit = designators
            .iter()
            .find(|&&(d, _)| d == designator)
            .map(|&(_, unit)| unit)?;
        Some(Component { number_end, unit })
    }
}

/// Returns the position of the first non-digit at or after `at`.
fn skip_digits(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at).map_or(false, |b| b.is_ascii_digit()) {
        at += 1;
    }
    at
}
