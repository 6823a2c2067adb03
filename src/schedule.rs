use crate::error::ConfigError;

/// Upper bound on frames in one animation; every trail holds this many points.
pub(crate) const MAX_FRAMES: usize = 1_000_000;

/// One frame per whole simulated day.
pub(crate) fn frame_count(duration_days: f64) -> Result<usize, ConfigError> {
    if !(duration_days.is_finite() && duration_days > 0.0) {
        return Err(ConfigError::NonPositiveDuration(duration_days));
    }
    if duration_days.floor() > MAX_FRAMES as f64 {
        return Err(ConfigError::TooLong { days: duration_days, max: MAX_FRAMES });
    }
    let n = duration_days.floor() as usize;
    if n == 0 {
        return Err(ConfigError::TooShort(duration_days));
    }
    Ok(n)
}

/// `count` evenly spaced elapsed-day values covering `[0, duration]`, both ends
/// included. A single frame sits at `duration`.
pub(crate) fn frame_times(duration_days: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![duration_days],
        _ => {
            let step = duration_days / (count - 1) as f64;
            let mut times: Vec<f64> = (0..count).map(|i| i as f64 * step).collect();
            // pin the end so accumulated rounding never overshoots
            times[count - 1] = duration_days;
            times
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_whole_duration() {
        let t = frame_times(687.0, 687);
        assert_eq!(t.len(), 687);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[686], 687.0);
        assert!(t.windows(2).all(|w| w[1] > w[0]));
        let step = 687.0 / 686.0;
        assert!((t[1] - step).abs() < 1e-12);
    }

    #[test]
    fn single_frame_is_the_duration() {
        assert_eq!(frame_times(1.5, 1), vec![1.5]);
    }

    #[test]
    fn count_is_floor_of_duration() {
        assert_eq!(frame_count(687.0), Ok(687));
        assert_eq!(frame_count(2.5 * 365.0), Ok(912));
        assert_eq!(frame_count(1.0), Ok(1));
    }

    #[test]
    fn degenerate_durations_are_rejected() {
        assert_eq!(frame_count(0.0), Err(ConfigError::NonPositiveDuration(0.0)));
        assert_eq!(frame_count(-4.0), Err(ConfigError::NonPositiveDuration(-4.0)));
        assert!(matches!(frame_count(f64::NAN), Err(ConfigError::NonPositiveDuration(_))));
        assert!(matches!(frame_count(f64::INFINITY), Err(ConfigError::NonPositiveDuration(_))));
        assert_eq!(frame_count(0.5), Err(ConfigError::TooShort(0.5)));
    }

    #[test]
    fn huge_durations_are_rejected() {
        let cap = MAX_FRAMES as f64;
        assert_eq!(frame_count(cap), Ok(MAX_FRAMES));
        assert_eq!(frame_count(cap + 0.9), Ok(MAX_FRAMES));
        assert_eq!(frame_count(cap + 1.0), Err(ConfigError::TooLong { days: cap + 1.0, max: MAX_FRAMES }));
        assert_eq!(frame_count(1e300), Err(ConfigError::TooLong { days: 1e300, max: MAX_FRAMES }));
    }
}
