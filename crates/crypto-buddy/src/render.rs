//! Response Templates
//!
//! Every reply starts with the bot name. All replies carry the disclaimer
//! except the coin listing, which has never included it.

use crate::config::Persona;
use crate::model::Dataset;
use crate::strategy::Selection;

pub fn sustainability(persona: &Persona, pick: &Selection<'_>) -> String {
    format!(
        "{}: 🌱 If you're prioritizing sustainability, consider {} ({}). \
         Sustainability score: {}/10. Energy use: {}. {}",
        persona.name,
        pick.name,
        pick.entity.symbol,
        pick.entity.sustainability_score,
        pick.entity.energy_use,
        persona.disclaimer,
    )
}

pub fn momentum(persona: &Persona, pick: &Selection<'_>) -> String {
    format!(
        "{}: 🚀 For price momentum, {} ({}) looks strongest, trend: {}, market cap: {}. {}",
        persona.name,
        pick.name,
        pick.entity.symbol,
        pick.entity.price_trend,
        pick.entity.market_cap,
        persona.disclaimer,
    )
}

pub fn growth(persona: &Persona, pick: &Selection<'_>) -> String {
    format!(
        "{}: For long-term growth with balance between returns and sustainability, \
         consider {} ({}). Trend: {}, Market cap: {}, Sustainability: {}/10. {}",
        persona.name,
        pick.name,
        pick.entity.symbol,
        pick.entity.price_trend,
        pick.entity.market_cap,
        pick.entity.sustainability_score,
        persona.disclaimer,
    )
}

/// One line per entity, in dataset order
pub fn entity_lines(dataset: &Dataset) -> Vec<String> {
    dataset
        .iter()
        .map(|(name, e)| {
            format!(
                "{name} ({}): trend={}, market={}, energy={}, score={}/10",
                e.symbol, e.price_trend, e.market_cap, e.energy_use, e.sustainability_score
            )
        })
        .collect()
}

/// Header line followed by [`entity_lines`]. No disclaimer.
pub fn listing(persona: &Persona, dataset: &Dataset) -> String {
    let mut out = format!("{}: Here's what I know:", persona.name);
    for line in entity_lines(dataset) {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

pub fn help(persona: &Persona) -> String {
    format!(
        "{}: I can: \n\
         - recommend by sustainability (ask about 'sustainable')\n\
         - recommend by trend/profitability (ask 'trending up' or 'rising')\n\
         - suggest for long-term growth (ask 'long-term' or 'growth')\n\
         - list all known coins (ask 'list')\n\
         {}",
        persona.name, persona.disclaimer,
    )
}

pub fn fallback(persona: &Persona) -> String {
    format!(
        "{}: Sorry, I didn't catch that. Try asking 'Which crypto is trending up?', \
         'What's the most sustainable coin?', or 'Which should I buy for long-term growth?'.\n\
         {}",
        persona.name, persona.disclaimer,
    )
}

pub fn greeting(persona: &Persona) -> String {
    format!(
        "Hi! I am {}, your first AI-powered financial sidekick! ({})\n{}\n\
         Type 'exit' to quit. Type 'help' to see commands.\n",
        persona.name, persona.tone, persona.disclaimer,
    )
}

pub fn farewell(persona: &Persona) -> String {
    format!("{}: {}", persona.name, persona.farewell)
}
