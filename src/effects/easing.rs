//! Counter animation for stat numbers
//!
//! A stat such as "3+" counts up from zero to its target over a fixed
//! duration, easing out so it settles gently.

/// Counter animation duration in seconds
pub const COUNTER_SECS: f64 = 1.5;

/// Cubic ease-out: fast start, slow finish
///
/// `p` is clamped to [0, 1].
pub fn ease_out_cubic(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// A stat counting up from zero
#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    target: f32,
    suffix: String,
    fractional: bool,
    started_at: f64,
}

impl Counter {
    /// Parse a stat label like "3+", "100%" or "4.5"
    ///
    /// The number is the leading run of digits and dots; every other
    /// character becomes the suffix. Returns `None` for labels without a
    /// leading number (such as "∞"), which are shown as-is.
    pub fn parse(raw: &str, started_at: f64) -> Option<Self> {
        let raw = raw.trim();
        let numeric: String = raw
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let target: f32 = numeric.parse().ok()?;
        let suffix = raw
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != '.')
            .collect();

        Some(Self {
            target,
            suffix,
            fractional: target.fract() != 0.0,
            started_at,
        })
    }

    /// Progress through the animation at `now`, in [0, 1]
    pub fn progress(&self, now: f64) -> f32 {
        (((now - self.started_at) / COUNTER_SECS) as f32).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Label to display at `now`
    pub fn label(&self, now: f64) -> String {
        let current = ease_out_cubic(self.progress(now)) * self.target;
        if self.fractional {
            format!("{:.1}{}", current, self.suffix)
        } else {
            format!("{}{}", current.floor() as i64, self.suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
    }

    #[test]
    fn test_parse() {
        let c = Counter::parse("3+", 0.0).unwrap();
        assert_eq!(c.target, 3.0);
        assert_eq!(c.suffix, "+");
        assert!(!c.fractional);

        let c = Counter::parse("8.5", 0.0).unwrap();
        assert!(c.fractional);
        assert!(c.suffix.is_empty());

        assert!(Counter::parse("∞", 0.0).is_none());
        assert!(Counter::parse("", 0.0).is_none());
    }

    #[test]
    fn test_label_over_time() {
        let c = Counter::parse("100%", 10.0).unwrap();
        assert_eq!(c.label(10.0), "0%");
        // Halfway through the duration the eased value is 87.5
        assert_eq!(c.label(10.75), "87%");
        assert_eq!(c.label(11.5), "100%");
        assert!(c.is_finished(12.0));
        assert!(!c.is_finished(11.0));
    }

    #[test]
    fn test_fractional_label() {
        let c = Counter::parse("4.5", 0.0).unwrap();
        assert_eq!(c.label(COUNTER_SECS), "4.5");
        assert_eq!(c.label(0.0), "0.0");
    }
}
