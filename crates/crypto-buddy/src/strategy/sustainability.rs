//! Sustainability Ranking
//!
//! Orders by sustainability score, then by energy-use label, both
//! descending. The label is compared as a string, so `medium` > `low` >
//! `high`: a low-energy coin loses a score tie to a medium-energy one.
//! Kept as-is; changing it changes recommendations.

use super::{Policy, Scorer, Selection, first_max_by_key};
use crate::model::Dataset;

pub struct SustainabilityScorer;

impl Scorer for SustainabilityScorer {
    fn policy(&self) -> Policy {
        Policy::Sustain
    }

    fn best<'a>(&self, dataset: &'a Dataset) -> Option<Selection<'a>> {
        first_max_by_key(dataset, |entity| {
            (entity.sustainability_score, entity.energy_use.label())
        })
    }
}
