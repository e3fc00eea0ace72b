//! Profitability Ranking
//!
//! Favors rising prices and large market caps. The sustainability score is
//! added unweighted as a minor tiebreak.

use rust_decimal::Decimal;

use super::{Policy, Scorer, Selection, first_max_by_key};
use crate::config::ProfitPoints;
use crate::model::{Dataset, Entity, MarketCap, PriceTrend};

pub struct ProfitabilityScorer {
    points: ProfitPoints,
}

impl ProfitabilityScorer {
    pub const fn new(points: ProfitPoints) -> Self {
        Self { points }
    }

    pub fn score(&self, entity: &Entity) -> Decimal {
        let trend = match entity.price_trend {
            PriceTrend::Rising => self.points.rising,
            PriceTrend::Stable => self.points.stable,
            PriceTrend::Falling => self.points.falling,
        };
        let cap = match entity.market_cap {
            MarketCap::High => self.points.cap_high,
            MarketCap::Medium => self.points.cap_medium,
            MarketCap::Low => self.points.cap_low,
        };
        trend + cap + entity.sustainability_score
    }
}

impl Scorer for ProfitabilityScorer {
    fn policy(&self) -> Policy {
        Policy::Profit
    }

    fn best<'a>(&self, dataset: &'a Dataset) -> Option<Selection<'a>> {
        first_max_by_key(dataset, |entity| self.score(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawEntity;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reference_scores() {
        let dataset = Dataset::reference().unwrap();
        let scorer = ProfitabilityScorer::new(ProfitPoints::default());

        let scores: Vec<_> = dataset.iter().map(|(n, e)| (n, scorer.score(e))).collect();
        assert_eq!(
            scores,
            vec![
                ("Bitcoin", dec!(83)),
                ("Ethereum", dec!(56)),
                ("Cardano", dec!(73)),
                ("Solana", dec!(22)),
                ("Algorand", dec!(34)),
            ]
        );

        let best = scorer.best(&dataset).unwrap();
        assert_eq!(best.name, "Bitcoin");
        assert_eq!(best.entity.symbol, "BTC");
    }

    #[test]
    fn test_sustainability_breaks_close_calls() {
        let dataset = Dataset::from_records(vec![
            RawEntity::new("Dirty", "DRT", "rising", "high", "high", dec!(1.0)),
            RawEntity::new("Clean", "CLN", "rising", "high", "low", dec!(1.5)),
        ])
        .unwrap();
        let scorer = ProfitabilityScorer::new(ProfitPoints::default());
        assert_eq!(scorer.best(&dataset).unwrap().name, "Clean");
    }

    #[test]
    fn test_exact_tie_keeps_dataset_order() {
        let dataset = Dataset::from_records(vec![
            RawEntity::new("First", "FST", "stable", "medium", "high", dec!(4)),
            RawEntity::new("Second", "SND", "stable", "medium", "low", dec!(4)),
        ])
        .unwrap();
        let scorer = ProfitabilityScorer::new(ProfitPoints::default());
        assert_eq!(scorer.best(&dataset).unwrap().name, "First");
    }
}
