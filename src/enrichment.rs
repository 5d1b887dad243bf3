//! Legendary item enrichment.
//!
//! Legendaries are revealed with placeholder text and get their real
//! name and flavor from an external service. The engine only emits an
//! `EnrichmentRequested` event; the driver owns the network call and
//! feeds the result back through `Command::ApplyEnrichment`, so the
//! engine stays deterministic and offline-safe.

use crate::items::{ItemType, Rarity};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;

/// Flavor text produced by the enrichment service or the fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub name: String,
    pub description: String,
}

pub trait ItemEnricher {
    fn enrich(
        &self,
        level: u32,
        item_type: ItemType,
        rarity: Rarity,
    ) -> Result<ItemDetails, Box<dyn Error>>;
}

/// Calls a JSON endpoint for flavor text. Any failure falls back to
/// canned text at the call site, never into the engine.
pub struct HttpEnricher {
    endpoint: String,
    agent: ureq::Agent,
}

#[derive(Serialize)]
struct EnrichRequest<'a> {
    level: u32,
    item_type: &'a str,
    rarity: &'a str,
}

impl HttpEnricher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(5))
            .build();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }
}

impl ItemEnricher for HttpEnricher {
    fn enrich(
        &self,
        level: u32,
        item_type: ItemType,
        rarity: Rarity,
    ) -> Result<ItemDetails, Box<dyn Error>> {
        let response: ItemDetails = self
            .agent
            .post(&self.endpoint)
            .set("User-Agent", "loot-lord")
            .send_json(EnrichRequest {
                level,
                item_type: item_type.name(),
                rarity: rarity.name(),
            })?
            .into_json()?;

        if response.name.trim().is_empty() {
            return Err("enrichment service returned an empty name".into());
        }
        Ok(response)
    }
}

/// Canned details used when the service is unreachable or answers
/// nonsense. Stamped with the level so two fallbacks still differ.
pub fn fallback_details(level: u32) -> ItemDetails {
    ItemDetails {
        name: format!("Nameless Relic (Lv.{})", level),
        description: "Its true name was lost to time.".to_string(),
    }
}

/// Runs the enricher and swallows failures into the fallback.
pub fn enrich_or_fallback(
    enricher: &dyn ItemEnricher,
    level: u32,
    item_type: ItemType,
    rarity: Rarity,
) -> ItemDetails {
    enricher
        .enrich(level, item_type, rarity)
        .unwrap_or_else(|_| fallback_details(level))
}
