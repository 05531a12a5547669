use timebox::{
    fmt::{
        friendly::{FriendlyParser, FriendlyPrinter, Translations, UnitNames, UnitTranslation},
        Format,
    },
    Duration, ToDuration, Unit,
};

use crate::Result;

#[test]
fn to_string_literals() {
    let dur = Duration::new().days(1).hours(2);
    assert_eq!(dur.to_string(), "1 day, 2 hours");
    let short = FriendlyPrinter::new().format(Format::Short);
    assert_eq!(short.duration_to_string(&dur), "1d, 2h");
}

#[test]
fn parse_literals() -> Result {
    let _ = crate::Logger::init();

    let dur: Duration = "1d 2h 30m".parse()?;
    assert_eq!(dur.build(), 95_400.0);
    assert_eq!(
        Duration::parse_friendly("1h 30m")?.build(),
        Duration::parse_friendly("1hour 30minutes")?.build(),
    );
    Ok(())
}

#[test]
fn parse_errors() {
    let parser = FriendlyParser::new();
    for input in ["1x", "", "1d,2h", "one hour", "1h  ", "1.5h", "+1h"] {
        let err = parser.parse_duration(input).unwrap_err();
        assert!(err.is_parse(), "expected parse error for {input:?}");
    }
    let err = "1x".parse::<Duration>().unwrap_err();
    insta::assert_snapshot!(
        err,
        @r###"failed to parse "1x" as a friendly duration: invalid duration token "1x" (expected an integer followed by a unit like `5m` or `2hours`)"###,
    );
}

#[test]
fn translated_printer() {
    let dutch = Translations::empty()
        .unit(
            Unit::Day,
            UnitTranslation::new(
                UnitNames::new("dag", "dagen"),
                UnitNames::new("d", "d"),
            ),
        )
        .unit(
            Unit::Hour,
            UnitTranslation::new(
                UnitNames::new("uur", "uur"),
                UnitNames::new("u", "u"),
            ),
        );
    let printer = FriendlyPrinter::new().translations(&dutch).separator(" en ");
    let dur = 2.days().hours(3).minutes(1);
    assert_eq!(
        printer.duration_to_string(&dur),
        "2 dagen en 3 uur en 1 minute",
    );
}

#[test]
fn short_plural_names() {
    let names = Translations::empty().unit(
        Unit::Minute,
        UnitTranslation::new(
            UnitNames::new("minute", "minutes"),
            UnitNames::new("min", "mins"),
        ),
    );
    let printer =
        FriendlyPrinter::new().translations(&names).format(Format::Short);
    assert_eq!(printer.duration_to_string(&1.minute()), "1min");
    assert_eq!(printer.duration_to_string(&2.minutes()), "2mins");
    assert_eq!(
        printer.duration_to_string(&1.hour().minutes(5).seconds(1)),
        "1h, 5mins, 1s",
    );
}

#[test]
fn display_matches_default_printer() {
    let dur = 3.weeks().seconds(1).milliseconds(1);
    assert_eq!(
        dur.to_string(),
        FriendlyPrinter::new().duration_to_string(&dur),
    );
    assert_eq!(dur.to_string(), "3 weeks, 1 second, 1 millisecond");
}
