//! Domain Models
//!
//! Entity records and the fixed, order-preserving dataset they live in.
//! Scores use `rust_decimal` so that equal scores compare equal and
//! tie-breaks stay reproducible.

use std::collections::HashSet;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{BuddyError, Result};

/// Embedded reference dataset.
const REFERENCE_DATASET: &str = include_str!("../data/coins.json");

/// Upper bound of the sustainability scale.
pub const MAX_SUSTAINABILITY_SCORE: Decimal = dec!(10);

/// Direction of recent price movement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    Stable,
    Falling,
}

impl PriceTrend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Stable => "stable",
            Self::Falling => "falling",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "rising" => Some(Self::Rising),
            "stable" => Some(Self::Stable),
            "falling" => Some(Self::Falling),
            _ => None,
        }
    }
}

/// Coarse market capitalization bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCap {
    High,
    Medium,
    Low,
}

impl MarketCap {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// Coarse energy consumption bucket
///
/// Deliberately has no `Ord`: the sustainability ranking compares the
/// labels as strings (so `medium` > `low` > `high`), see
/// [`crate::strategy::SustainabilityScorer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUse {
    High,
    Medium,
    Low,
}

impl EnergyUse {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for MarketCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for EnergyUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated crypto asset record
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// Ticker symbol (e.g., "BTC", "ETH")
    pub symbol: String,

    pub price_trend: PriceTrend,

    pub market_cap: MarketCap,

    pub energy_use: EnergyUse,

    /// Sustainability rating on a 0-10 scale
    pub sustainability_score: Decimal,
}

/// An unvalidated record as it appears in the dataset source
///
/// Categorical fields stay strings here; [`Dataset::from_records`] is the
/// only place they are turned into typed values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawEntity {
    pub name: String,
    pub symbol: String,
    pub price_trend: String,
    pub market_cap: String,
    pub energy_use: String,
    pub sustainability_score: Decimal,
}

impl RawEntity {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        price_trend: impl Into<String>,
        market_cap: impl Into<String>,
        energy_use: impl Into<String>,
        sustainability_score: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            price_trend: price_trend.into(),
            market_cap: market_cap.into(),
            energy_use: energy_use.into(),
            sustainability_score,
        }
    }

    fn validate(self) -> Result<(String, Entity)> {
        let invalid = |field: &'static str, value: &str| BuddyError::InvalidCategory {
            entity: self.name.clone(),
            field,
            value: value.to_string(),
        };

        let price_trend = PriceTrend::from_label(&self.price_trend)
            .ok_or_else(|| invalid("price_trend", &self.price_trend))?;
        let market_cap = MarketCap::from_label(&self.market_cap)
            .ok_or_else(|| invalid("market_cap", &self.market_cap))?;
        let energy_use = EnergyUse::from_label(&self.energy_use)
            .ok_or_else(|| invalid("energy_use", &self.energy_use))?;

        let score = self.sustainability_score;
        if score < Decimal::ZERO || score > MAX_SUSTAINABILITY_SCORE {
            return Err(BuddyError::ScoreOutOfRange {
                entity: self.name,
                score,
            });
        }

        let entity = Entity {
            symbol: self.symbol.to_uppercase(),
            price_trend,
            market_cap,
            energy_use,
            sustainability_score: score,
        };
        Ok((self.name, entity))
    }
}

/// The fixed set of known assets, in insertion order
///
/// Always non-empty with unique names. Never mutated after construction.
#[derive(Clone, Debug)]
pub struct Dataset {
    entries: Vec<(String, Entity)>,
}

impl Dataset {
    /// Validate raw records into a dataset, preserving their order
    pub fn from_records(records: impl IntoIterator<Item = RawEntity>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for record in records {
            let (name, entity) = record.validate()?;
            if name.trim().is_empty() {
                return Err(BuddyError::Config("entity name must not be empty".into()));
            }
            if !seen.insert(name.clone()) {
                return Err(BuddyError::DuplicateEntity(name));
            }
            entries.push((name, entity));
        }

        if entries.is_empty() {
            return Err(BuddyError::EmptyDataset);
        }

        tracing::debug!(entities = entries.len(), "dataset validated");
        Ok(Self { entries })
    }

    /// Parse a JSON array of raw records
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<RawEntity> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// The embedded five-coin dataset
    pub fn reference() -> Result<Self> {
        Self::from_json(REFERENCE_DATASET)
    }

    /// Iterate `(name, entity)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entity)> {
        self.entries.iter().map(|(name, entity)| (name.as_str(), entity))
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.iter().find(|(n, _)| *n == name).map(|(_, e)| e)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(name, _)| name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
