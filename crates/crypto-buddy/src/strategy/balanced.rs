//! Balanced Ranking
//!
//! Weighted blend of normalized profit signals and sustainability:
//!
//! ```text
//! score = 0.5 * (0.6 * trend + 0.4 * market) + 0.5 * (sustainability / 10)
//!
//! trend:  rising 1.0 | stable 0.6 | falling 0.0
//! market: high   1.0 | medium 0.6 | low     0.2
//! ```
//!
//! Categories are typed, so an unknown trend or market cap never reaches
//! this code; it is rejected when the dataset is built.

use rust_decimal::Decimal;

use super::{Policy, Scorer, Selection, first_max_by_key};
use crate::config::BalancedWeights;
use crate::model::{Dataset, Entity, MarketCap, PriceTrend};

pub struct BalancedScorer {
    weights: BalancedWeights,
}

impl BalancedScorer {
    pub const fn new(weights: BalancedWeights) -> Self {
        Self { weights }
    }

    pub const fn trend_value(&self, trend: PriceTrend) -> Decimal {
        match trend {
            PriceTrend::Rising => self.weights.rising,
            PriceTrend::Stable => self.weights.stable,
            PriceTrend::Falling => self.weights.falling,
        }
    }

    pub const fn market_value(&self, cap: MarketCap) -> Decimal {
        match cap {
            MarketCap::High => self.weights.cap_high,
            MarketCap::Medium => self.weights.cap_medium,
            MarketCap::Low => self.weights.cap_low,
        }
    }

    pub fn score(&self, entity: &Entity) -> Decimal {
        let w = &self.weights;
        let profit = w.trend * self.trend_value(entity.price_trend)
            + w.market * self.market_value(entity.market_cap);
        let sustainability = entity.sustainability_score / w.sustainability_scale;
        w.profit * profit + w.sustainability * sustainability
    }
}

impl Scorer for BalancedScorer {
    fn policy(&self) -> Policy {
        Policy::Balanced
    }

    fn best<'a>(&self, dataset: &'a Dataset) -> Option<Selection<'a>> {
        first_max_by_key(dataset, |entity| self.score(entity))
    }
}
