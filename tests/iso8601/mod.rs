use timebox::{
    fmt::{
        iso8601::{Iso8601Parser, Iso8601Printer},
        Format,
    },
    Duration, ToDuration,
};

use crate::Result;

#[test]
fn parse_literals() -> Result {
    let _ = crate::Logger::init();

    assert_eq!(Duration::parse_iso8601("P1DT2H30M")?.build(), 95_400.0);
    assert_eq!(Duration::parse_iso8601("PT0.5S")?.build(), 0.5);
    Ok(())
}

#[test]
fn long_format_includes_zeros() {
    let dur = Duration::new().days(1).hours(2);
    let printer = Iso8601Printer::new().format(Format::Long);
    assert_eq!(printer.duration_to_string(&dur), "P0Y0M0W1DT2H0M0S");
    assert_eq!(dur.to_iso8601_string(), "P1DT2H");
}

#[test]
fn missing_prefix_is_format_error() {
    let err = Iso8601Parser::new().parse_duration("1DT2H").unwrap_err();
    assert!(err.is_format());
    assert!(!err.is_parse());
}

#[test]
fn unrecognized_text_is_skipped() -> Result {
    let _ = crate::Logger::init();

    assert_eq!(Duration::parse_iso8601("P1D2X3H")?, 1.day());
    assert_eq!(Duration::parse_iso8601("P1D and T 2H please")?, 1.day().hours(2));
    Ok(())
}

#[test]
fn print_then_parse() -> Result {
    let printers = [
        Iso8601Printer::new(),
        Iso8601Printer::new().format(Format::Long),
    ];
    let durations = [
        Duration::ZERO,
        1.millisecond(),
        400.days().hours(23).minutes(59).seconds(59),
        3.weeks().milliseconds(250),
    ];
    for printer in &printers {
        for dur in durations {
            let string = printer.duration_to_string(&dur);
            let parsed: Duration = string.parse()?;
            assert_eq!(parsed, dur, "round trip through {string:?}");
        }
    }
    Ok(())
}
