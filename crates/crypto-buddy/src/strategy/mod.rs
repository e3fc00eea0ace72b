//! Ranking Strategies
//!
//! Each policy picks a single "best" entity from the dataset. The
//! [`Selector`] owns one scorer per policy and dispatches to it.

mod balanced;
mod profitability;
mod sustainability;

pub use balanced::BalancedScorer;
pub use profitability::ProfitabilityScorer;
pub use sustainability::SustainabilityScorer;

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ScoringWeights;
use crate::model::{Dataset, Entity};

/// Named ranking strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Profit,
    Sustain,
    #[default]
    Balanced,
}

impl Policy {
    pub const ALL: [Self; 3] = [Self::Profit, Self::Sustain, Self::Balanced];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profit => "profit",
            Self::Sustain => "sustain",
            Self::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The entity a policy picked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection<'a> {
    pub name: &'a str,
    pub entity: &'a Entity,
}

/// A ranking policy over a dataset (Strategy pattern)
pub trait Scorer: Send + Sync {
    fn policy(&self) -> Policy;

    /// Pick the best entity, or `None` for an empty dataset
    fn best<'a>(&self, dataset: &'a Dataset) -> Option<Selection<'a>>;
}

/// Return the entity with the greatest key.
///
/// Only a strictly greater key replaces the current best, so among equal
/// keys the earliest entity in dataset order wins.
pub(crate) fn first_max_by_key<'a, K, F>(dataset: &'a Dataset, mut key: F) -> Option<Selection<'a>>
where
    K: Ord,
    F: FnMut(&Entity) -> K,
{
    let mut best: Option<(K, Selection<'a>)> = None;

    for (name, entity) in dataset.iter() {
        let candidate = key(entity);
        if best.as_ref().is_none_or(|(current, _)| candidate > *current) {
            best = Some((candidate, Selection { name, entity }));
        }
    }

    best.map(|(_, selection)| selection)
}

/// Policy dispatch over a shared dataset
pub struct Selector {
    dataset: Arc<Dataset>,
    profit: ProfitabilityScorer,
    sustain: SustainabilityScorer,
    balanced: BalancedScorer,
}

impl Selector {
    pub fn new(dataset: Arc<Dataset>, weights: &ScoringWeights) -> Self {
        Self {
            dataset,
            profit: ProfitabilityScorer::new(weights.profit.clone()),
            sustain: SustainabilityScorer,
            balanced: BalancedScorer::new(weights.balanced.clone()),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn scorer(&self, policy: Policy) -> &dyn Scorer {
        match policy {
            Policy::Profit => &self.profit,
            Policy::Sustain => &self.sustain,
            Policy::Balanced => &self.balanced,
        }
    }

    /// Best entity under `policy`
    pub fn select(&self, policy: Policy) -> Option<Selection<'_>> {
        let selection = self.scorer(policy).best(&self.dataset);
        if let Some(s) = &selection {
            tracing::debug!(%policy, entity = s.name, "policy selected entity");
        }
        selection
    }

    /// Primary ranking key of one entity under `policy`.
    ///
    /// For `sustain` this is the raw sustainability score; the energy-label
    /// tie-break is not numeric.
    pub fn score(&self, policy: Policy, name: &str) -> Option<Decimal> {
        let entity = self.dataset.get(name)?;
        Some(match policy {
            Policy::Profit => self.profit.score(entity),
            Policy::Sustain => entity.sustainability_score,
            Policy::Balanced => self.balanced.score(entity),
        })
    }
}
