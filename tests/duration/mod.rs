use timebox::{
    Duration, DurationInit, DurationRound, RoundMode, ToDuration, Unit,
};

use crate::Result;

const HOUR: f64 = 3_600_000.0;

#[test]
fn hour_round_trip() {
    for hours in [0.0, 0.25, 1.0, 1.5, 24.0, 1_000.0, 123_456.0] {
        let dur = Duration::new().hours(hours);
        assert_eq!(dur.to_hours(), hours);
        assert_eq!(dur.to_milliseconds(), hours * HOUR);
    }
}

#[test]
fn add_commutes() -> Result {
    let a = 1.day().hours(3);
    let b = 45.minutes().milliseconds(12);
    assert_eq!((a + b).to_milliseconds(), (b + a).to_milliseconds());
    assert_eq!(a.checked_add(b)?, b.checked_add(a)?);
    Ok(())
}

#[test]
fn subtract_floors_at_zero() {
    let a = 10.minutes();
    let b = 1.hour();
    assert_eq!((b - a).to_minutes(), 50.0);
    assert_eq!((a - b).to_milliseconds(), 0.0);
    assert_eq!(a.saturating_sub(a), Duration::ZERO);
}

#[test]
fn component_decomposition() {
    let dur = Duration::new()
        .weeks(2)
        .days(3)
        .hours(4)
        .minutes(5)
        .seconds(6)
        .milliseconds(7);
    assert_eq!(
        [
            dur.get_weeks(),
            dur.get_days(),
            dur.get_hours(),
            dur.get_minutes(),
            dur.get_seconds(),
            dur.get_milliseconds(),
        ],
        [2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
    );

    // Carries happen in every unit.
    let dur = 61.minutes().seconds(61);
    assert_eq!(dur.get_hours(), 1.0);
    assert_eq!(dur.get_minutes(), 2.0);
    assert_eq!(dur.get_seconds(), 1.0);
}

#[test]
fn validation_errors() {
    let err = Duration::new().try_hours(-1).unwrap_err();
    assert!(err.is_invalid_value());
    let err = Duration::new().try_minutes(f64::INFINITY).unwrap_err();
    assert!(err.is_non_finite());
    let err = 1.hour().checked_div(0.0).unwrap_err();
    assert!(err.is_invalid_value());
    let err = Duration::try_init(DurationInit::new().seconds(f64::NAN))
        .unwrap_err();
    assert!(err.is_non_finite());
    insta::assert_snapshot!(
        err,
        @"parameter 'seconds' must be a finite number, but got NaN",
    );
}

#[test]
#[should_panic]
fn infallible_addition_panics() {
    let _ = Duration::new().minutes(f64::INFINITY);
}

#[test]
fn clone_is_independent() {
    let a = 1.hour().minutes(30);
    let b = a.clone();
    assert!(b.equals(a));
    let c = b.hours(5).minutes(5);
    assert_eq!(a.to_minutes(), 90.0);
    assert_eq!(b.to_minutes(), 90.0);
    assert_eq!(c.to_minutes(), 395.0);
}

#[test]
fn comparisons() {
    let durations = [1.second(), 1.minute(), 1.hour(), 1.day(), 1.week()];
    for pair in durations.windows(2) {
        assert!(pair[0].is_less_than(pair[1]));
        assert!(pair[1].is_greater_than(pair[0]));
    }
    let mut shuffled = [1.day(), 1.second(), 1.week(), 1.hour(), 1.minute()];
    shuffled.sort();
    assert_eq!(shuffled, durations);

    assert!(1.hour().is_between(1.minute(), 1.day()));
    assert!(!1.hour().is_between(1.day(), 1.minute()));
}

#[test]
fn inverted_range_is_never_between() {
    let _ = crate::Logger::init();

    for dur in [Duration::ZERO, 1.hour(), 1.day(), 1.week()] {
        assert!(!dur.is_between(1.week(), Duration::ZERO));
    }
}

#[test]
fn rounding() -> Result {
    let _ = crate::Logger::init();

    let dur = 7.minutes().seconds(30);
    assert_eq!(dur.round(Unit::Minute)?, 8.minutes());
    assert_eq!(dur.floor(Unit::Minute)?, 7.minutes());
    assert_eq!(dur.ceil(Unit::Minute)?, 8.minutes());

    let options = DurationRound::new()
        .smallest(Unit::Minute)
        .increment(15)
        .mode(RoundMode::HalfEven);
    assert_eq!(7.minutes().seconds(30).round(options)?, Duration::ZERO);
    assert_eq!(22.minutes().seconds(30).round(options)?, 30.minutes());
    assert_eq!(23.minutes().round(options)?, 30.minutes());
    Ok(())
}

#[test]
fn totals_in_any_unit() {
    let dur = 1.day().hours(12);
    assert_eq!(dur.build(), 129_600.0);
    assert_eq!(dur.build_in(Unit::Hour), 36.0);
    assert_eq!(dur.total(Unit::Week), 1.5 / 7.0);
    assert_eq!(730.days().total(Unit::Year), 2.0);
}

#[test]
fn std_duration_round_trip() -> Result {
    let dur = 1.hour().minutes(2).milliseconds(3);
    let std = std::time::Duration::try_from(dur)?;
    assert_eq!(std, std::time::Duration::from_millis(3_720_003));
    assert_eq!(Duration::from(std), dur);
    Ok(())
}

#[test]
fn single_unit_in_a_chain() {
    let dur = Duration::new().weeks(1).days(1).hours(1).minutes(1);
    assert_eq!(dur, 1.week() + 1.day() + 1.hour() + 1.minute());
    assert_eq!(Duration::new().seconds(1), 1.second());
    assert_eq!(Duration::new().milliseconds(1), 1.millisecond());
}
