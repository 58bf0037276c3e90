//! Generation session: single owner of configuration, current value,
//! and history.

use zeroize::Zeroize;

use crate::config::{self, Config, ConfigError};
use crate::generator::charset::{self, CharClass};
use crate::generator::history::History;
use crate::generator::sample;
use crate::generator::strength::{self, Strength};

pub struct Session {
    config: Config,
    current: String,
    history: History,
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// A session always holds a value: construction generates once.
    pub fn with_config(config: Config) -> Self {
        let mut session = Self {
            config,
            current: String::new(),
            history: History::new(),
        };
        session.regenerate();
        session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Strength of the live configuration, recomputed on demand.
    pub fn strength(&self) -> Strength {
        strength::score(&self.config)
    }

    /// Theoretical entropy of one draw under the live configuration.
    pub fn entropy_bits(&self) -> f64 {
        let alphabet = charset::build(&self.config);
        strength::entropy_bits(self.config.length, alphabet.chars().count())
    }

    /// Rebuild the alphabet from the live configuration, draw a fresh
    /// string, and record it in the history. Returns the new value.
    pub fn regenerate(&mut self) -> &str {
        let alphabet = charset::build(&self.config);
        let value = sample::sample(&alphabet, self.config.length);
        self.history.record(value.clone());
        self.current.zeroize();
        self.current = value;
        &self.current
    }

    /// Set the requested length. Out-of-range values are rejected and
    /// leave the configuration untouched.
    pub fn set_length(&mut self, length: usize) -> Result<(), ConfigError> {
        config::validate_length(length)?;
        self.config.length = length;
        Ok(())
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        self.config.set_class(class, enabled);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.current.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::history::CAPACITY;

    #[test]
    fn new_session_already_holds_a_value() {
        let session = Session::new();
        assert_eq!(session.current().len(), 16);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().get(0), Some(session.current()));
    }

    #[test]
    fn default_configuration_end_to_end() {
        // Three classes, length 16: alphanumeric output, score 3, Medium.
        let mut session = Session::new();
        let value = session.regenerate().to_string();
        assert_eq!(value.len(), 16);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));

        let strength = session.strength();
        assert_eq!(strength.score, 3);
        assert_eq!(strength.tier, strength::Tier::Medium);
    }

    #[test]
    fn all_classes_at_thirty_is_strong() {
        let mut session = Session::new();
        session.set_class(CharClass::Symbol, true);
        session.set_length(30).unwrap();
        session.regenerate();

        let strength = session.strength();
        assert_eq!(strength.score, 6);
        assert_eq!(strength.tier, strength::Tier::Strong);
        assert_eq!(session.current().len(), 30);
    }

    #[test]
    fn regeneration_tracks_the_latest_configuration() {
        let mut session = Session::new();
        session.set_class(CharClass::Upper, false);
        session.set_class(CharClass::Digit, false);
        let value = session.regenerate().to_string();
        assert!(value.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn eleven_regenerations_evict_the_first() {
        let mut session = Session::new();
        let mut produced = vec![session.current().to_string()];
        for _ in 0..CAPACITY {
            produced.push(session.regenerate().to_string());
        }

        assert_eq!(session.history().len(), CAPACITY);
        // Most recent first; the construction-time value fell off the end.
        let expected: Vec<&str> = produced[1..].iter().rev().map(String::as_str).collect();
        let actual: Vec<&str> = session.history().iter().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn rejected_length_leaves_state_unchanged() {
        let mut session = Session::new();
        let before = session.config().clone();
        assert!(session.set_length(3).is_err());
        assert!(session.set_length(65).is_err());
        assert_eq!(session.config(), &before);
        assert!(session.set_length(4).is_ok());
        assert!(session.set_length(64).is_ok());
    }

    #[test]
    fn two_regenerations_share_length_and_alphabet() {
        let mut session = Session::new();
        let a = session.regenerate().to_string();
        let b = session.regenerate().to_string();
        assert_eq!(a.len(), b.len());
        for value in [&a, &b] {
            assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
