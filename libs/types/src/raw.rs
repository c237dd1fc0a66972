//! Raw feed records as delivered by the aggregator transport
//!
//! The backend pushes partial, denormalized records in arbitrary order, so
//! every non-id field is optional: decoding is best-effort and defaulting
//! happens at assembly time, not here. A later record with the same id
//! overwrites the stored one outright (last-write-wins, no field merge).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{
    BettingOfferId, BettingTypeId, LocationId, MarketId, MatchId, OutcomeId, ParticipantId,
    TournamentId,
};

/// A tournament (competition) under a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub venue_id: Option<LocationId>,
    pub category_id: Option<String>,
}

/// A location (country or venue) that owns tournaments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: Option<String>,
    pub iso_code: Option<String>,
}

/// A match header record. `parent_*` is the owning tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub parent_id: Option<TournamentId>,
    pub parent_name: Option<String>,
    pub home_participant_id: Option<ParticipantId>,
    pub home_participant_name: Option<String>,
    pub away_participant_id: Option<ParticipantId>,
    pub away_participant_name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub sport_id: Option<String>,
    pub venue_id: Option<LocationId>,
    pub number_of_markets: Option<u32>,
}

/// A market record. `event_id` references the owning match, which may not
/// have arrived yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: MarketId,
    pub event_id: Option<MatchId>,
    pub betting_type_id: Option<BettingTypeId>,
    pub short_name: Option<String>,
    pub is_available: Option<bool>,
    pub is_closed: Option<bool>,
}

/// A bet outcome. Linked to its market by `MarketOutcomeRelation` records,
/// never directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub id: OutcomeId,
    pub header_name_key: Option<String>,
    pub header_name: Option<String>,
    pub translated_name: Option<String>,
    pub param_float1: Option<Decimal>,
    pub param_float2: Option<Decimal>,
    pub param_float3: Option<Decimal>,
}

/// The price on an outcome. Stored keyed by `outcome_id`; an offer that
/// references no outcome is dropped at ingest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BettingOffer {
    pub id: BettingOfferId,
    pub outcome_id: Option<OutcomeId>,
    pub odds_value: Option<Decimal>,
    pub status_id: Option<String>,
    pub is_live: Option<bool>,
    pub is_available: Option<bool>,
}

/// Announces the display priority of a market type: the arrival order of
/// main-market records is the order markets sort in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainMarket {
    pub id: MarketId,
    pub betting_type_id: Option<BettingTypeId>,
}

/// Join record linking a market to one of its outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOutcomeRelation {
    pub id: String,
    pub market_id: Option<MarketId>,
    pub outcome_id: Option<OutcomeId>,
}
