//! Intent Router
//!
//! Maps a free-text query to an intent by substring keyword tests and
//! renders the reply. Rules are an ordered list of (keywords, handler)
//! pairs: the first rule with any keyword contained in the query wins,
//! even if a later rule would match more keywords.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{BuddyConfig, KeywordRule, Persona};
use crate::error::Result;
use crate::model::Dataset;
use crate::render;
use crate::strategy::{Policy, Selection, Selector};

/// What the user is asking for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Sustainability,
    Trend,
    Growth,
    List,
    Help,
    Fallback,
}

impl Intent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sustainability => "sustainability",
            Self::Trend => "trend",
            Self::Growth => "growth",
            Self::List => "list",
            Self::Help => "help",
            Self::Fallback => "fallback",
        }
    }

    /// Ranking policy behind a recommendation intent
    pub const fn policy(self) -> Option<Policy> {
        match self {
            Self::Sustainability => Some(Policy::Sustain),
            Self::Trend => Some(Policy::Profit),
            Self::Growth => Some(Policy::Balanced),
            Self::List | Self::Help | Self::Fallback => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Handler = fn(&Router) -> String;

/// A keyword predicate paired with the handler it triggers
struct Route {
    intent: Intent,
    keywords: Vec<String>,
    handler: Handler,
}

impl Route {
    fn new(rule: &KeywordRule) -> Self {
        Self {
            intent: rule.intent,
            keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
            handler: handler_for(rule.intent),
        }
    }

    /// `query` must already be lower-cased and trimmed
    fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|k| query.contains(k.as_str()))
    }
}

fn handler_for(intent: Intent) -> Handler {
    match intent {
        Intent::Sustainability => Router::recommend_sustainable,
        Intent::Trend => Router::recommend_momentum,
        Intent::Growth => Router::recommend_growth,
        Intent::List => Router::list_all,
        Intent::Help => Router::help,
        Intent::Fallback => Router::fallback,
    }
}

/// Stateless query router over a fixed dataset
pub struct Router {
    selector: Selector,
    persona: Persona,
    routes: Vec<Route>,
}

impl Router {
    /// Build a router, rejecting an invalid configuration
    pub fn new(dataset: Arc<Dataset>, config: &BuddyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            selector: Selector::new(dataset, &config.weights),
            persona: config.persona.clone(),
            routes: config.rules.iter().map(Route::new).collect(),
        })
    }

    pub const fn persona(&self) -> &Persona {
        &self.persona
    }

    /// First route whose keywords occur in the query
    fn matched(&self, query: &str) -> Option<&Route> {
        let q = query.trim().to_lowercase();
        self.routes.iter().find(|route| route.matches(&q))
    }

    /// Intent of a raw query, first matching rule wins
    pub fn classify(&self, query: &str) -> Intent {
        self.matched(query).map_or(Intent::Fallback, |route| route.intent)
    }

    /// Answer a raw query. Never fails: unmatched input gets the fallback.
    pub fn route(&self, query: &str) -> String {
        let (intent, handler) = self
            .matched(query)
            .map_or((Intent::Fallback, handler_for(Intent::Fallback)), |r| (r.intent, r.handler));

        tracing::debug!(%intent, query = query.trim(), "routed query");
        handler(self)
    }

    /// Run the policy behind `intent` and render its winner
    fn recommend(&self, intent: Intent, template: fn(&Persona, &Selection<'_>) -> String) -> String {
        intent
            .policy()
            .and_then(|policy| self.selector.select(policy))
            .map_or_else(|| self.fallback(), |pick| template(&self.persona, &pick))
    }

    fn recommend_sustainable(&self) -> String {
        self.recommend(Intent::Sustainability, render::sustainability)
    }

    fn recommend_momentum(&self) -> String {
        self.recommend(Intent::Trend, render::momentum)
    }

    fn recommend_growth(&self) -> String {
        self.recommend(Intent::Growth, render::growth)
    }

    fn list_all(&self) -> String {
        render::listing(&self.persona, self.selector.dataset())
    }

    fn help(&self) -> String {
        render::help(&self.persona)
    }

    fn fallback(&self) -> String {
        render::fallback(&self.persona)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        let dataset = Arc::new(Dataset::reference().unwrap());
        Router::new(dataset, &BuddyConfig::default()).unwrap()
    }

    #[test]
    fn test_classify_priority_order() {
        let router = router();
        assert_eq!(router.classify("Which coin is the most sustainable?"), Intent::Sustainability);
        assert_eq!(router.classify("What's trending up?"), Intent::Trend);
        assert_eq!(router.classify("Good for long-term growth?"), Intent::Growth);
        assert_eq!(router.classify("list"), Intent::List);
        assert_eq!(router.classify("  HELP  "), Intent::Help);
        assert_eq!(router.classify("what can you do"), Intent::Help);
        assert_eq!(router.classify("qwertyzzz"), Intent::Fallback);

        // Both sustainability and trend keywords: the earlier rule wins
        assert_eq!(router.classify("green coins trending up"), Intent::Sustainability);
        // "buy" and "show" both present: growth outranks list
        assert_eq!(router.classify("show me what to buy"), Intent::Growth);
    }

    #[test]
    fn test_substring_matching() {
        let router = router();
        // "up" is a plain substring, so it fires inside other words
        assert_eq!(router.classify("any support?"), Intent::Trend);
        assert_eq!(router.classify("ECOLOGICAL"), Intent::Sustainability);
    }

    #[test]
    fn test_sustainable_scenario() {
        let router = router();
        let reply = router.route("Which coin is the most sustainable?");
        assert!(reply.starts_with("CryptoBuddy: 🌱"));
        assert!(reply.contains("Algorand (ALGO)"));
        assert!(reply.contains("Sustainability score: 9.0/10"));
        assert!(reply.contains("Energy use: low"));
        assert!(reply.ends_with(&router.persona().disclaimer));
    }

    #[test]
    fn test_trending_scenario() {
        let router = router();
        let reply = router.route("What's trending up?");
        assert!(reply.contains("Bitcoin (BTC)"));
        assert!(reply.contains("looks strongest, trend: rising, market cap: high."));
        assert!(reply.ends_with(&router.persona().disclaimer));
    }

    #[test]
    fn test_growth_scenario() {
        let router = router();
        let reply = router.route("Good for long-term growth?");
        assert!(reply.contains("consider Cardano (ADA)"));
        assert!(reply.contains("Trend: rising, Market cap: medium, Sustainability: 8.0/10"));
        assert!(reply.ends_with(&router.persona().disclaimer));
    }

    #[test]
    fn test_list_scenario() {
        let router = router();
        let reply = router.route("list");
        let mut lines = reply.lines();
        assert_eq!(lines.next(), Some("CryptoBuddy: Here's what I know:"));

        let entities: Vec<&str> = lines.collect();
        assert_eq!(entities.len(), 5);
        let names: Vec<&str> = entities
            .iter()
            .filter_map(|line| line.split(' ').next())
            .collect();
        assert_eq!(names, vec!["Bitcoin", "Ethereum", "Cardano", "Solana", "Algorand"]);
        assert!(!reply.contains(&router.persona().disclaimer));
    }

    #[test]
    fn test_route_is_total() {
        let router = router();
        for query in ["", "   ", "\t\n", "qwertyzzz", "!!!", "💎🙌", "ÅÄÖ"] {
            let reply = router.route(query);
            assert!(reply.starts_with("CryptoBuddy:"), "{query:?}");
            assert!(!reply.is_empty());
        }
        assert!(router.route("").contains("Sorry, I didn't catch that"));
    }

    #[test]
    fn test_route_and_classify_agree() {
        let router = router();
        let queries = [
            ("green coins trending up", "🌱"),
            ("show me what to buy", "long-term growth with balance"),
            ("rising", "🚀"),
            ("database", "Here's what I know"),
            ("commands", "I can:"),
            ("nothing here", "Sorry, I didn't catch that"),
        ];
        for (query, marker) in queries {
            assert!(router.route(query).contains(marker), "{query} ({})", router.classify(query));
        }
    }

    #[test]
    fn test_custom_rules_reorder_priority() {
        let dataset = Arc::new(Dataset::reference().unwrap());
        let config = BuddyConfig {
            rules: vec![
                KeywordRule::new(Intent::Trend, &["Trend"]),
                KeywordRule::new(Intent::Sustainability, &["green"]),
            ],
            ..BuddyConfig::default()
        };
        let router = Router::new(dataset, &config).unwrap();
        assert_eq!(router.classify("green trend"), Intent::Trend);
        assert_eq!(router.classify("list"), Intent::Fallback);
    }

    #[test]
    fn test_intent_policy_mapping() {
        assert_eq!(Intent::Sustainability.policy(), Some(Policy::Sustain));
        assert_eq!(Intent::Trend.policy(), Some(Policy::Profit));
        assert_eq!(Intent::Growth.policy(), Some(Policy::Balanced));
        assert_eq!(Intent::List.policy(), None);
    }
}
