//! Wall-clock labels for the navbar and dashboard header.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const MONTHS_SHORT: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
const MONTHS_LONG: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const WEEKDAYS: [&str; 7] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// Local date/time broken into calendar fields.
///
/// `month` is 0-based and `weekday` counts from Sunday = 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockParts {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
}

/// `hh:mm am` in 12-hour form.
pub fn format_clock(parts: ClockParts) -> String {
    let suffix = if parts.hour < 12 { "am" } else { "pm" };
    let hour = match parts.hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour:02}:{:02} {suffix}", parts.minute)
}

/// `dd Mon yyyy`.
pub fn format_date(parts: ClockParts) -> String {
    let month = MONTHS_SHORT.get(parts.month as usize).copied().unwrap_or("");
    format!("{:02} {month} {}", parts.day, parts.year)
}

/// `Weekday, d Month`.
pub fn format_long_date(parts: ClockParts) -> String {
    let weekday = WEEKDAYS.get(parts.weekday as usize).copied().unwrap_or("");
    let month = MONTHS_LONG.get(parts.month as usize).copied().unwrap_or("");
    format!("{weekday}, {} {month}", parts.day)
}

/// Current local time, browser only.
pub fn now() -> Option<ClockParts> {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new_0();
        Some(ClockParts {
            year: date.get_full_year(),
            month: date.get_month(),
            day: date.get_date(),
            weekday: date.get_day(),
            hour: date.get_hours(),
            minute: date.get_minutes(),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
