//! Rounding helpers shared by the controllers

/// Round to the nearest integer, with halves rounding toward positive
/// infinity
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Round to two decimal places
pub fn round2(value: f32) -> f32 {
    round_half_up(value * 100.0) / 100.0
}

/// Inclusive range check that tolerates reversed bounds
pub fn in_range(value: f32, min: f32, max: f32) -> bool {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    value >= lo && value <= hi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halves_round_up() {
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-1.6), -2.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(26.666_666), 26.67);
        assert_eq!(round2(-3.333_333), -3.33);
    }

    #[test]
    fn test_in_range() {
        assert!(in_range(-10.0, -400.0, 0.0));
        assert!(in_range(0.0, -400.0, 0.0));
        assert!(!in_range(1.0, -400.0, 0.0));
        assert!(in_range(-10.0, 0.0, -400.0));
    }
}
