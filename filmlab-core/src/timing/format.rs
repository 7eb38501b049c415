/// Formats decimal minutes as `"{minutes}m {seconds}s"`.
///
/// Seconds are the rounded fractional part of the value, so `1.5` becomes `"1m 30s"`.
pub fn format_minutes(value: f64) -> String {
    let whole = value.floor();
    let seconds = ((value - whole) * 60.0).round();
    format!("{}m {}s", whole as i64, seconds as i64)
}

#[cfg(test)]
mod tests {
    use super::format_minutes;

    #[test]
    fn formats_fractional_minutes_as_seconds() {
        assert_eq!(format_minutes(1.5), "1m 30s");
        assert_eq!(format_minutes(0.25), "0m 15s");
        assert_eq!(format_minutes(3.75), "3m 45s");
        assert_eq!(format_minutes(0.0), "0m 0s");
    }

    #[test]
    fn whole_minutes_have_no_seconds() {
        assert_eq!(format_minutes(12.0), "12m 0s");
    }
}
