//! Denormalized view entities produced by the assembler
//!
//! These are built at read time by joining the entity store, the relation
//! indexes, and the ordering registers; they are never stored. Missing raw
//! fields degrade to the documented defaults (empty string, epoch date,
//! zero odds), never to an error.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{
    BettingOfferId, BettingTypeId, LocationId, MarketId, MatchId, OutcomeId, ParticipantId,
    TournamentId,
};

/// The price attached to an assembled outcome.
///
/// Defaults when the raw offer omits a field: value `0`, status `"1"`,
/// not live, available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingOffer {
    pub id: BettingOfferId,
    pub value: Decimal,
    pub status_id: String,
    pub is_live: bool,
    pub is_available: bool,
}

/// An outcome with its price. Outcomes whose betting offer has not arrived
/// are dropped entirely from the market; a price-less outcome has no
/// meaning for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub id: OutcomeId,
    pub code_name: String,
    pub translated_name: String,
    pub name_digit1: Option<Decimal>,
    pub name_digit2: Option<Decimal>,
    pub name_digit3: Option<Decimal>,
    pub betting_offer: BettingOffer,
}

/// A market with its outcomes, already sorted by the outcome rank table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub id: MarketId,
    pub type_id: BettingTypeId,
    pub name: String,
    pub outcomes: Vec<Outcome>,
}

/// Projected location subset used as a match venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub iso_code: String,
}

/// One side of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

/// A fully assembled match, ready for rendering.
///
/// `number_total_of_markets` is the server-side market count from the raw
/// match record; it may legitimately exceed `markets.len()` while markets
/// are still being delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub competition_id: TournamentId,
    pub competition_name: String,
    pub home_participant: Participant,
    pub away_participant: Participant,
    pub date: DateTime<Utc>,
    pub sport_type: String,
    pub venue: Option<Location>,
    pub number_total_of_markets: u32,
    pub markets: Vec<Market>,
}
