//! Pure text rendering helpers.

/// Renders fractional hours as `HH:MM` (`22.5` -> `"22:30"`, `24.0` -> `"24:00"`).
///
/// Minutes were stored rounded to two decimals, so they are recovered by rounding
/// back to the nearest whole minute (`0.98` -> `"00:59"`).
pub fn format_hours(hours: f64) -> String {
    let mut whole = hours.trunc() as u32;
    let mut minutes = ((hours - hours.trunc()) * 60.0).round() as u32;
    if minutes == 60 {
        whole += 1;
        minutes = 0;
    }
    format!("{whole:02}:{minutes:02}")
}

/// `"3 restaurants open"`, `"1 restaurant open"`.
pub fn format_open_count(count: usize) -> String {
    match count {
        1 => "1 restaurant open".to_string(),
        n => format!("{n} restaurants open"),
    }
}
