//! Zakat estimate shown on the settings screen and in assistant replies.
//! Display-only arithmetic: a Nisab threshold comparison and a flat 2.5%
//! levy on the eligible total. No compliance rule engine exists here.

use crate::config::ZAKAT_RATE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZakatEstimate {
    pub eligible_usd: f64,
    pub nisab_usd: f64,
    pub nisab_met: bool,
    pub due_usd: f64,
}

pub fn estimate(eligible_usd: f64, nisab_usd: f64) -> ZakatEstimate {
    let nisab_met = eligible_usd >= nisab_usd;
    let due_usd = if nisab_met {
        eligible_usd * ZAKAT_RATE
    } else {
        0.0
    };
    ZakatEstimate {
        eligible_usd,
        nisab_usd,
        nisab_met,
        due_usd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levy_applies_above_nisab() {
        let z = estimate(150_000.0, 5000.0);
        assert!(z.nisab_met);
        assert!((z.due_usd - 3750.0).abs() < 1e-9);
    }

    #[test]
    fn no_levy_below_nisab() {
        let z = estimate(4999.99, 5000.0);
        assert!(!z.nisab_met);
        assert_eq!(z.due_usd, 0.0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let z = estimate(5000.0, 5000.0);
        assert!(z.nisab_met);
        assert!((z.due_usd - 125.0).abs() < 1e-9);
    }
}
