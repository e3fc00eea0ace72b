//! Configuration
//!
//! Everything the advisor needs besides the dataset: scoring weights,
//! persona text, keyword rules and exit words. Built from defaults and
//! validated once at startup; never changed while the session runs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{BuddyError, Result};
use crate::router::Intent;

/// Points awarded by the profitability ranking
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitPoints {
    pub rising: Decimal,
    pub stable: Decimal,
    pub falling: Decimal,
    pub cap_high: Decimal,
    pub cap_medium: Decimal,
    pub cap_low: Decimal,
}

impl Default for ProfitPoints {
    fn default() -> Self {
        Self {
            rising: dec!(50),
            stable: dec!(20),
            falling: dec!(0),
            cap_high: dec!(30),
            cap_medium: dec!(15),
            cap_low: dec!(5),
        }
    }
}

/// Weights and normalized lookups for the balanced ranking
///
/// `score = profit * (trend * t + market * m) + sustainability * (s / scale)`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancedWeights {
    pub profit: Decimal,
    pub sustainability: Decimal,
    pub trend: Decimal,
    pub market: Decimal,
    pub rising: Decimal,
    pub stable: Decimal,
    pub falling: Decimal,
    pub cap_high: Decimal,
    pub cap_medium: Decimal,
    pub cap_low: Decimal,
    pub sustainability_scale: Decimal,
}

impl Default for BalancedWeights {
    fn default() -> Self {
        Self {
            profit: dec!(0.5),
            sustainability: dec!(0.5),
            trend: dec!(0.6),
            market: dec!(0.4),
            rising: dec!(1.0),
            stable: dec!(0.6),
            falling: dec!(0.0),
            cap_high: dec!(1.0),
            cap_medium: dec!(0.6),
            cap_low: dec!(0.2),
            sustainability_scale: dec!(10),
        }
    }
}

impl BalancedWeights {
    fn validate(&self) -> Result<()> {
        let weights = [
            ("profit", self.profit),
            ("sustainability", self.sustainability),
            ("trend", self.trend),
            ("market", self.market),
            ("rising", self.rising),
            ("stable", self.stable),
            ("falling", self.falling),
            ("cap_high", self.cap_high),
            ("cap_medium", self.cap_medium),
            ("cap_low", self.cap_low),
        ];
        if let Some((name, value)) = weights.iter().find(|(_, w)| *w < Decimal::ZERO) {
            return Err(BuddyError::Config(format!(
                "balanced weight '{name}' must not be negative (got {value})"
            )));
        }
        if self.sustainability_scale <= Decimal::ZERO {
            return Err(BuddyError::Config(
                "sustainability scale must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// All fixed numeric weights used by the rankings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub profit: ProfitPoints,
    pub balanced: BalancedWeights,
}

/// Bot personality and the static text it speaks
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub tone: String,
    pub disclaimer: String,
    pub farewell: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: "CryptoBuddy".into(),
            tone: "Friendly, slightly-professional".into(),
            disclaimer: "⚠️ Disclaimer: Crypto is risky. This bot gives simple, rule-based \
                         suggestions for learning purposes only, not financial advice. \
                         Always do your own research (DYOR)."
                .into(),
            farewell: "Bye! Good luck and DYOR. 👋".into(),
        }
    }
}

/// Keywords that select one intent
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeywordRule {
    pub intent: Intent,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new(intent: Intent, keywords: &[&str]) -> Self {
        Self {
            intent,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// Default keyword table, in priority order
pub fn default_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(Intent::Sustainability, &["sustain", "eco", "energy", "green"]),
        KeywordRule::new(Intent::Trend, &["trend", "trending", "rising", "up"]),
        KeywordRule::new(Intent::Growth, &["buy", "invest", "long-term", "growth"]),
        KeywordRule::new(Intent::List, &["list", "show", "all coins", "database"]),
        KeywordRule::new(Intent::Help, &["help", "commands", "what can you do"]),
    ]
}

/// Complete advisor configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuddyConfig {
    pub persona: Persona,
    pub weights: ScoringWeights,
    pub rules: Vec<KeywordRule>,
    pub exit_words: Vec<String>,
}

impl Default for BuddyConfig {
    fn default() -> Self {
        Self {
            persona: Persona::default(),
            weights: ScoringWeights::default(),
            rules: default_rules(),
            exit_words: vec!["exit".into(), "quit".into(), "bye".into()],
        }
    }
}

impl BuddyConfig {
    /// Check the configuration before the session starts
    pub fn validate(&self) -> Result<()> {
        self.weights.balanced.validate()?;

        if self.rules.is_empty() {
            return Err(BuddyError::Config("no keyword rules configured".into()));
        }
        for rule in &self.rules {
            if rule.intent == Intent::Fallback {
                return Err(BuddyError::Config(
                    "the fallback intent cannot have keywords".into(),
                ));
            }
            if rule.keywords.is_empty() || rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(BuddyError::Config(format!(
                    "keyword rule for {} needs non-empty keywords",
                    rule.intent
                )));
            }
        }

        if self.exit_words.is_empty() || self.exit_words.iter().any(|w| w.trim().is_empty()) {
            return Err(BuddyError::Config("exit words must be non-empty".into()));
        }

        Ok(())
    }
}
