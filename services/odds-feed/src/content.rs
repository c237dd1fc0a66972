//! Aggregator batches and tagged content records
//!
//! The transport delivers batches of heterogeneous records, each tagged by
//! a `_type` discriminator. `Content` is the closed sum of every record
//! kind the engine understands; anything else decodes to `Unknown` and is
//! ignored by ingest. Decoding is the only fallible operation in the
//! engine — everything downstream of a decoded batch is infallible.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::{BettingOfferId, MarketId};
use types::raw;

/// A single tagged record inside an aggregator batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Content {
    #[serde(rename = "TOURNAMENT")]
    Tournament(raw::Tournament),

    #[serde(rename = "MATCH")]
    Match(raw::Match),

    #[serde(rename = "MARKET")]
    Market(raw::Market),

    #[serde(rename = "OUTCOME")]
    BetOutcome(raw::Outcome),

    #[serde(rename = "BETTING_OFFER")]
    BettingOffer(raw::BettingOffer),

    #[serde(rename = "MAIN_MARKET")]
    MainMarket(raw::MainMarket),

    #[serde(rename = "MARKET_OUTCOME_RELATION")]
    MarketOutcomeRelation(raw::MarketOutcomeRelation),

    #[serde(rename = "LOCATION")]
    Location(raw::Location),

    /// Received but intentionally unprocessed.
    #[serde(rename = "EVENT")]
    Event,

    /// Catch-all for tags this engine does not understand.
    #[serde(other)]
    Unknown,
}

impl Content {
    /// Record kind as a string label for logging.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Content::Tournament(_) => "Tournament",
            Content::Match(_) => "Match",
            Content::Market(_) => "Market",
            Content::BetOutcome(_) => "BetOutcome",
            Content::BettingOffer(_) => "BettingOffer",
            Content::MainMarket(_) => "MainMarket",
            Content::MarketOutcomeRelation(_) => "MarketOutcomeRelation",
            Content::Location(_) => "Location",
            Content::Event => "Event",
            Content::Unknown => "Unknown",
        }
    }
}

/// An in-place update to an already stored record, delivered on the same
/// subscription as full batches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum ContentUpdate {
    /// New odds and/or status for a betting offer already in the store.
    #[serde(rename = "BETTING_OFFER_UPDATE", rename_all = "camelCase")]
    BettingOffer {
        id: BettingOfferId,
        odds_value: Option<Decimal>,
        status_id: Option<String>,
        is_live: Option<bool>,
        is_available: Option<bool>,
    },

    /// Availability change for a market already in the store.
    #[serde(rename = "MARKET_UPDATE", rename_all = "camelCase")]
    Market {
        id: MarketId,
        is_available: Option<bool>,
        is_closed: Option<bool>,
    },

    #[serde(other)]
    Unknown,
}

/// One aggregator delivery: an ordered sequence of tagged records plus
/// optional in-place updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregator {
    #[serde(default)]
    pub content: Vec<Content>,
    #[serde(default)]
    pub content_updates: Vec<ContentUpdate>,
}

impl Aggregator {
    /// Batch with the given records and no updates.
    pub fn with_content(content: Vec<Content>) -> Self {
        Self {
            content,
            content_updates: Vec::new(),
        }
    }
}

/// Errors that can occur while decoding a raw aggregator payload.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed aggregator payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode an aggregator batch from its JSON wire form.
///
/// Individual records with unrecognized `_type` tags decode to
/// `Content::Unknown` rather than failing the batch.
pub fn parse_aggregator(json: &str) -> Result<Aggregator, DecodeError> {
    Ok(serde_json::from_str(json)?)
}
