use casino_core::model::{Card, Deck};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Shown for the dealer's hole card and for any card without art.
pub const CARD_BACK: &str = "cards/back.png";
pub const MANIFEST_ENV: &str = "CASINO_CARD_MANIFEST";

fn default_back() -> String {
    CARD_BACK.to_string()
}

/// Maps `"{rank}_of_{suit}"` keys to image paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardArtManifest {
    #[serde(default = "default_back")]
    pub back: String,
    #[serde(default)]
    pub cards: BTreeMap<String, String>,
}

static MANIFEST: Lazy<CardArtManifest> = Lazy::new(load_manifest);

fn load_manifest() -> CardArtManifest {
    match std::env::var(MANIFEST_ENV) {
        Ok(path) => CardArtManifest::load(&path).unwrap_or_else(CardArtManifest::standard),
        Err(_) => CardArtManifest::standard(),
    }
}

impl CardArtManifest {
    /// One `cards/<key>.png` entry per card of a standard deck.
    pub fn standard() -> Self {
        let cards = Deck::standard_order()
            .into_iter()
            .map(|card| {
                let key = card.asset_key();
                let path = format!("cards/{key}.png");
                (key, path)
            })
            .collect();
        Self {
            back: default_back(),
            cards,
        }
    }

    /// Reads a JSON manifest, or `None` when it cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(
                    target: "casino_ui::resource",
                    path = %path.display(),
                    error = %err,
                    "failed to read card manifest; using standard art"
                );
                return None;
            }
        };
        match serde_json::from_str::<CardArtManifest>(&content) {
            Ok(manifest) => Some(manifest),
            Err(err) => {
                tracing::warn!(
                    target: "casino_ui::resource",
                    path = %path.display(),
                    error = %err,
                    "failed to parse card manifest; using standard art"
                );
                None
            }
        }
    }

    pub fn current() -> &'static CardArtManifest {
        &MANIFEST
    }
}

/// Resolves cards to art paths, falling back to the card back.
#[derive(Debug, Clone, Copy)]
pub struct CardArt<'a> {
    manifest: &'a CardArtManifest,
}

impl CardArt<'static> {
    pub fn current() -> Self {
        Self::new(CardArtManifest::current())
    }
}

impl<'a> CardArt<'a> {
    pub fn new(manifest: &'a CardArtManifest) -> Self {
        Self { manifest }
    }

    pub fn resolve(&self, card: Card) -> &'a str {
        self.resolve_key(&card.asset_key())
    }

    pub fn resolve_key(&self, key: &str) -> &'a str {
        match self.manifest.cards.get(key) {
            Some(path) => path,
            None => {
                tracing::debug!(target: "casino_ui::resource", key, "no art for card; showing back");
                self.card_back()
            }
        }
    }

    /// `None` stands for a face-down card.
    pub fn resolve_slot(&self, card: Option<Card>) -> &'a str {
        card.map_or_else(|| self.card_back(), |card| self.resolve(card))
    }

    pub fn card_back(&self) -> &'a str {
        &self.manifest.back
    }
}
