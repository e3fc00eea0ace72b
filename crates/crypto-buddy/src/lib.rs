//! # crypto-buddy
//!
//! Rule-based crypto asset recommender. A fixed dataset of coins is ranked
//! under one of three policies and the winner is rendered as a short,
//! friendly reply.
//!
//! ## Flow
//!
//! ```text
//! ┌───────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌─────────┐
//! │  Session  │──▶│  Router  │──▶│ Selector │──▶│ Scorers  │──▶│ Dataset │
//! │ (stdin)   │◀──│ (intent) │   │ (policy) │   │ (ranking)│   │ (fixed) │
//! └───────────┘   └──────────┘   └──────────┘   └──────────┘   └─────────┘
//! ```
//!
//! ## Policies
//!
//! - **profit** - rising trend and large market cap first
//! - **sustain** - highest sustainability score first
//! - **balanced** (default) - weighted blend of both
//!
//! Every reply is a pure function of the dataset, the weights and the
//! query. Nothing is persisted and nothing is fetched.

pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod router;
pub mod session;
pub mod strategy;

pub use config::{BuddyConfig, Persona, ScoringWeights};
pub use error::{BuddyError, Result};
pub use model::{Dataset, EnergyUse, Entity, MarketCap, PriceTrend, RawEntity};
pub use router::{Intent, Router};
pub use session::{EndReason, Session, SessionSummary};
pub use strategy::{Policy, Selection, Selector};
