use crate::{
    error::{fmt::friendly::Error as E, Error, ErrorContext},
    util::number,
    Duration, Unit,
};

/// The unit designators accepted by the parser, matched case
/// insensitively.
static DESIGNATORS: &[(&str, Unit)] = &[
    ("w", Unit::Week),
    ("week", Unit::Week),
    ("weeks", Unit::Week),
    ("d", Unit::Day),
    ("day", Unit::Day),
    ("days", Unit::Day),
    ("h", Unit::Hour),
    ("hour", Unit::Hour),
    ("hours", Unit::Hour),
    ("m", Unit::Minute),
    ("minute", Unit::Minute),
    ("minutes", Unit::Minute),
    ("s", Unit::Second),
    ("second", Unit::Second),
    ("seconds", Unit::Second),
    ("ms", Unit::Millisecond),
    ("millisecond", Unit::Millisecond),
    ("milliseconds", Unit::Millisecond),
];

/// A parser for the human friendly duration format.
///
/// This parser converts strings like `1d 2h 30m` or `2hours 5Minutes` into
/// a [`Duration`]. See the [module documentation](super) for the grammar.
///
/// # Example
///
/// ```
/// use timebox::{fmt::friendly::FriendlyParser, ToDuration};
///
/// let parser = FriendlyParser::new();
/// assert_eq!(parser.parse_duration("1d 2h 30m")?, 1.day().hours(2).minutes(30));
/// assert_eq!(parser.parse_duration("1w")?, 7.days());
/// assert_eq!(parser.parse_duration("30m 30m")?, 1.hour());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct FriendlyParser {
    /// There are currently no configuration options for this parser.
    _priv: (),
}

impl FriendlyParser {
    /// Create a new parser with the default configuration.
    #[inline]
    pub const fn new() -> FriendlyParser {
        FriendlyParser { _priv: () }
    }

    /// Parse a duration string into a `Duration` value.
    ///
    /// # Errors
    ///
    /// This returns an error when any whitespace separated token isn't a
    /// sequence of digits followed by a known unit designator
    /// ([`Error::is_parse`](crate::Error::is_parse)), or when the total is
    /// too big to represent. The error names both the whole input and the
    /// offending token.
    ///
    /// # Example
    ///
    /// ```
    /// use timebox::fmt::friendly::FriendlyParser;
    ///
    /// let parser = FriendlyParser::new();
    /// let err = parser.parse_duration("1h 1.5m").unwrap_err();
    /// assert!(err.is_parse());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "failed to parse \"1h 1.5m\" as a friendly duration: \
    ///      invalid duration token \"1.5m\" \
    ///      (expected an integer followed by a unit like `5m` or `2hours`)",
    /// );
    /// ```
    pub fn parse_duration<I: AsRef<str>>(
        &self,
        input: I,
    ) -> Result<Duration, Error> {
        let input = input.as_ref();
        trace!("parsing {input:?} as a friendly duration");
        self.parse(input)
            .with_context(|| E::Failed { input: input.into() })
    }

    fn parse(&self, input: &str) -> Result<Duration, Error> {
        let mut millis = 0.0;
        for token in Tokens::new(input) {
            millis += self.parse_token(token)?;
        }
        let millis = number::finite_result("total", millis)?;
        Duration::try_from_millis(millis)
    }

    /// Parses a single `<digits><designator>` token into milliseconds.
    fn parse_token(&self, token: &str) -> Result<f64, Error> {
        let invalid = || Error::from(E::InvalidToken { token: token.into() });

        let digits_end = token
            .bytes()
            .position(|byte| !byte.is_ascii_digit())
            .unwrap_or(token.len());
        if digits_end == 0 {
            return Err(invalid());
        }
        let (digits, designator) = token.split_at(digits_end);
        let unit = DESIGNATORS
            .iter()
            .find(|&&(name, _)| name.eq_ignore_ascii_case(designator))
            .map(|&(_, unit)| unit)
            .ok_or_else(invalid)?;
        // A run of ASCII digits always parses, but may be infinite when it's
        // very long. That's caught by validation below.
        let amount: f64 = digits.parse().map_err(|_| invalid())?;
        let amount = number::non_negative(unit.plural(), amount)?;
        Ok(amount * unit.milliseconds())
    }
}

/// An iterator over the tokens of a friendly duration string.
///
/// Tokens are separated by runs of whitespace. Leading or trailing
/// whitespace produces an empty token at that end, and an empty input is a
/// single empty token.
struct Tokens<'i> {
    rest: Option<&'i str>,
}

impl<'i> Tokens<'i> {
    fn new(input: &'i str) -> Tokens<'i> {
        Tokens { rest: Some(input) }
    }
}

impl<'i> Iterator for Tokens<'i> {
    type Item = &'i str;

    fn next(&mut self) -> Option<&'i str> {
        let rest = self.rest?;
        match rest.find(char::is_whitespace) {
            None => {
                self.rest = None;
                Some(rest)
            }
            Some(end) => {
                self.rest =
                    Some(rest[end..].trim_start_matches(char::is_whitespace));
                Some(&rest[..end])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::ToDuration;

    use super::*;

    fn parse(input: &str) -> Duration {
        FriendlyParser::new().parse_duration(input).unwrap()
    }

    fn parse_err(input: &str) -> Error {
        FriendlyParser::new().parse_duration(input).unwrap_err()
    }

    #[test]
    fn tokens() {
        fn tokens(input: &str) -> Vec<&str> {
            Tokens::new(input).collect()
        }

        assert_eq!(tokens("1d 2h"), ["1d", "2h"]);
        assert_eq!(tokens("1d \t\n 2h"), ["1d", "2h"]);
        assert_eq!(tokens("1d"), ["1d"]);
        assert_eq!(tokens(""), [""]);
        assert_eq!(tokens(" 1d"), ["", "1d"]);
        assert_eq!(tokens("1d "), ["1d", ""]);
        assert_eq!(tokens("   "), ["", ""]);
    }

    #[test]
    fn parse_basic() {
        assert_eq!(parse("1d 2h 30m").build(), 95_400.0);
        assert_eq!(parse("1d 2h 30m"), 1.day().hours(2).minutes(30));
        assert_eq!(parse("1w"), 1.week());
        assert_eq!(parse("5s"), 5.seconds());
        assert_eq!(parse("250ms"), 250.milliseconds());
        assert_eq!(parse("0s"), Duration::ZERO);
        assert_eq!(parse("007m"), 7.minutes());
    }

    #[test]
    fn parse_long_designators() {
        assert_eq!(parse("2weeks 1week"), 3.weeks());
        assert_eq!(parse("1day 2days"), 3.days());
        assert_eq!(parse("1hour 2hours"), 3.hours());
        assert_eq!(parse("1minute 2minutes"), 3.minutes());
        assert_eq!(parse("1second 2seconds"), 3.seconds());
        assert_eq!(parse("1millisecond 2milliseconds"), 3.milliseconds());
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(parse("1D 2H 3M"), 1.day().hours(2).minutes(3));
        assert_eq!(
            parse("1Hour 5MINUTES 10Ms"),
            1.hour().minutes(5).milliseconds(10),
        );
    }

    #[test]
    fn parse_order_and_repeats() {
        assert_eq!(parse("30m 1h"), 1.hour().minutes(30));
        assert_eq!(parse("1h 1h 1h"), 3.hours());
    }

    #[test]
    fn parse_errors() {
        let err = parse_err("1d 2x");
        assert!(err.is_parse());
        insta::assert_snapshot!(
            err,
            @r###"failed to parse "1d 2x" as a friendly duration: invalid duration token "2x" (expected an integer followed by a unit like `5m` or `2hours`)"###,
        );

        insta::assert_snapshot!(
            parse_err(""),
            @r###"failed to parse "" as a friendly duration: invalid duration token "" (expected an integer followed by a unit like `5m` or `2hours`)"###,
        );
        insta::assert_snapshot!(
            parse_err("1d, 2h"),
            @r###"failed to parse "1d, 2h" as a friendly duration: invalid duration token "1d," (expected an integer followed by a unit like `5m` or `2hours`)"###,
        );
        insta::assert_snapshot!(
            parse_err("-1h"),
            @r###"failed to parse "-1h" as a friendly duration: invalid duration token "-1h" (expected an integer followed by a unit like `5m` or `2hours`)"###,
        );

        for input in [
            " 1h", "1h ", "h", "1", "1.5h", "1 h", "1hh", "1y", "1mo", "1µs",
        ] {
            assert!(parse_err(input).is_parse(), "{input:?}");
        }
    }

    #[test]
    fn parse_overflow() {
        let digits = "9".repeat(400);
        let err = parse_err(&alloc::format!("{digits}ms"));
        assert!(err.is_non_finite());

        let err = parse_err(&alloc::format!("{}w", "9".repeat(300)));
        assert!(err.is_range());
    }

    #[test]
    fn parse_then_print_short() {
        use crate::fmt::{friendly::FriendlyPrinter, Format};

        let printer = FriendlyPrinter::new().format(Format::Short).separator(" ");
        for input in ["1w 2d 3h 4m 5s 6ms", "1d", "59s 999ms"] {
            let dur = parse(input);
            assert_eq!(printer.duration_to_string(&dur), input);
        }
    }

    quickcheck::quickcheck! {
        fn prop_parse_single_hour_token(hours: u16) -> bool {
            let input = alloc::format!("{hours}h");
            parse(&input).to_hours() == f64::from(hours)
        }
    }
}
