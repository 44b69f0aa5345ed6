use super::*;

fn at(hour: u32, minute: u32) -> ClockParts {
    ClockParts { year: 2026, month: 9, day: 19, weekday: 1, hour, minute }
}

#[test]
fn clock_uses_twelve_hour_padding() {
    assert_eq!(format_clock(at(14, 5)), "02:05 pm");
    assert_eq!(format_clock(at(9, 30)), "09:30 am");
}

#[test]
fn midnight_and_noon_read_twelve() {
    assert_eq!(format_clock(at(0, 0)), "12:00 am");
    assert_eq!(format_clock(at(12, 0)), "12:00 pm");
}

#[test]
fn date_is_day_month_year() {
    assert_eq!(format_date(at(0, 0)), "19 Oct 2026");
    let early = ClockParts { day: 3, month: 0, ..at(0, 0) };
    assert_eq!(format_date(early), "03 Jan 2026");
}

#[test]
fn long_date_names_weekday_and_month() {
    assert_eq!(format_long_date(at(0, 0)), "Monday, 19 October");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn no_clock_outside_browser() {
    assert_eq!(now(), None);
}
