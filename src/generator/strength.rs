//! Strength scoring.

use crate::config::Config;

/// Highest attainable score: one point per class plus two length bonuses.
pub const MAX_SCORE: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Weak,
    Medium,
    Strong,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Weak => "Weak",
            Tier::Medium => "Medium",
            Tier::Strong => "Strong",
        }
    }
}

/// Strength estimate for a configuration: a raw score out of [`MAX_SCORE`]
/// and its coarse tier. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub tier: Tier,
}

/// Score a configuration: one point per enabled class, one more at
/// length 20, one more at length 30. Tiers split at 2 and 4.
pub fn score(config: &Config) -> Strength {
    let mut score = config.enabled_count() as u8;

    if config.length >= 20 {
        score += 1;
    }
    if config.length >= 30 {
        score += 1;
    }

    let tier = match score {
        0..=2 => Tier::Weak,
        3..=4 => Tier::Medium,
        _ => Tier::Strong,
    };

    Strength { score, tier }
}

/// Theoretical entropy of a draw, in bits.
pub fn entropy_bits(length: usize, alphabet_len: usize) -> f64 {
    if alphabet_len == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_len as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::charset::CharClass::{self, Digit, Lower, Symbol, Upper};

    fn config(classes: &[CharClass], length: usize) -> Config {
        let mut config = Config {
            length,
            upper: false,
            lower: false,
            digit: false,
            symbol: false,
        };
        for &class in classes {
            config.set_class(class, true);
        }
        config
    }

    #[test]
    fn nothing_enabled_scores_zero() {
        let strength = score(&config(&[], 4));
        assert_eq!(strength.score, 0);
        assert_eq!(strength.tier, Tier::Weak);
    }

    #[test]
    fn everything_at_thirty_hits_the_maximum() {
        let strength = score(&config(&[Upper, Lower, Digit, Symbol], 30));
        assert_eq!(strength.score, MAX_SCORE);
        assert_eq!(strength.tier, Tier::Strong);
    }

    #[test]
    fn three_classes_under_twenty_is_medium() {
        let strength = score(&config(&[Upper, Lower, Digit], 16));
        assert_eq!(strength.score, 3);
        assert_eq!(strength.tier, Tier::Medium);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(score(&config(&[Upper, Lower], 16)).tier, Tier::Weak);
        assert_eq!(score(&config(&[Upper, Lower, Digit], 16)).tier, Tier::Medium);
        assert_eq!(
            score(&config(&[Upper, Lower, Digit, Symbol], 16)).tier,
            Tier::Medium
        );
        assert_eq!(
            score(&config(&[Upper, Lower, Digit, Symbol], 20)).tier,
            Tier::Strong
        );
    }

    #[test]
    fn score_grows_with_each_class() {
        let mut prev = 0;
        for classes in [
            &[][..],
            &[Upper][..],
            &[Upper, Lower][..],
            &[Upper, Lower, Digit][..],
            &[Upper, Lower, Digit, Symbol][..],
        ] {
            let s = score(&config(classes, 16)).score;
            assert!(s >= prev);
            prev = s;
        }
    }

    #[test]
    fn score_grows_at_length_thresholds() {
        let classes = [Upper, Lower];
        assert_eq!(score(&config(&classes, 19)).score, 2);
        assert_eq!(score(&config(&classes, 20)).score, 3);
        assert_eq!(score(&config(&classes, 29)).score, 3);
        assert_eq!(score(&config(&classes, 30)).score, 4);
    }

    #[test]
    fn entropy_bits_tracks_length_and_alphabet() {
        assert_eq!(entropy_bits(0, 26), 0.0);
        assert_eq!(entropy_bits(8, 0), 0.0);
        let bits = entropy_bits(16, 62);
        assert!((bits - 16.0 * 62f64.log2()).abs() < 1e-9);
    }
}
