//! Percentage change shared by every month-over-month figure.

/// Rounds half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Change from `previous` to `current` in percent, rounded to two decimals.
///
/// With no previous value the result is `100` when there is current data and
/// `0` otherwise, never infinite or NaN.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    round_to((current - previous) / previous * 100.0, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(percentage_change(4.0, 3.0), 33.33);
        assert_eq!(percentage_change(2.0, 3.0), -33.33);
        assert_eq!(round_to(33.33333, 2), 33.33);
        assert_eq!(round_to(1.005_1, 2), 1.01);
    }

    #[test]
    fn zero_previous_is_special_cased() {
        assert_eq!(percentage_change(12.5, 0.0), 100.0);
        assert_eq!(percentage_change(0.0, 0.0), 0.0);
        assert!(percentage_change(0.0, 10.0).is_finite());
        assert_eq!(percentage_change(0.0, 10.0), -100.0);
    }
}
