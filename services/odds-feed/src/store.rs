//! Keyed entity maps and derived relation indexes
//!
//! The store holds the latest version of every raw record, keyed by its
//! provider id; a later upsert of the same id overwrites the prior value
//! outright (last-write-wins, no field merge). Relation indexes are
//! adjacency lists grown incrementally as records arrive and consulted
//! only at read time — a dangling id in an index simply fails to resolve
//! until the missing record shows up.

use std::collections::HashMap;

use types::ids::{BettingOfferId, LocationId, MarketId, MatchId, OutcomeId, TournamentId};
use types::raw;

use crate::ordering::OrderedMap;

/// Per-type keyed maps for every raw record kind.
///
/// Locations and main markets keep arrival order because the feed uses it
/// as display order. Betting offers are keyed by the outcome they price,
/// not by their own id; a side index from offer id to outcome id supports
/// the in-place update path.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    tournaments: HashMap<TournamentId, raw::Tournament>,
    locations: OrderedMap<LocationId, raw::Location>,
    matches: HashMap<MatchId, raw::Match>,
    markets: HashMap<MarketId, raw::Market>,
    outcomes: HashMap<OutcomeId, raw::Outcome>,
    offers_by_outcome: HashMap<OutcomeId, raw::BettingOffer>,
    outcome_for_offer: HashMap<BettingOfferId, OutcomeId>,
    outcome_relations: HashMap<String, raw::MarketOutcomeRelation>,
    main_markets: OrderedMap<MarketId, raw::MainMarket>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert_tournament(&mut self, tournament: raw::Tournament) {
        self.tournaments.insert(tournament.id.clone(), tournament);
    }

    pub fn upsert_location(&mut self, location: raw::Location) {
        self.locations.insert(location.id.clone(), location);
    }

    pub fn upsert_match(&mut self, record: raw::Match) {
        self.matches.insert(record.id.clone(), record);
    }

    pub fn upsert_market(&mut self, market: raw::Market) {
        self.markets.insert(market.id.clone(), market);
    }

    pub fn upsert_outcome(&mut self, outcome: raw::Outcome) {
        self.outcomes.insert(outcome.id.clone(), outcome);
    }

    /// Store a betting offer under the outcome it prices. Offers without
    /// an outcome reference are the caller's to drop.
    pub fn upsert_betting_offer(&mut self, outcome_id: OutcomeId, offer: raw::BettingOffer) {
        self.outcome_for_offer
            .insert(offer.id.clone(), outcome_id.clone());
        self.offers_by_outcome.insert(outcome_id, offer);
    }

    pub fn upsert_outcome_relation(&mut self, relation: raw::MarketOutcomeRelation) {
        self.outcome_relations.insert(relation.id.clone(), relation);
    }

    pub fn upsert_main_market(&mut self, main_market: raw::MainMarket) {
        self.main_markets
            .insert(main_market.id.clone(), main_market);
    }

    pub fn tournament(&self, id: &TournamentId) -> Option<&raw::Tournament> {
        self.tournaments.get(id)
    }

    pub fn location(&self, id: &LocationId) -> Option<&raw::Location> {
        self.locations.get(id)
    }

    pub fn match_by_id(&self, id: &MatchId) -> Option<&raw::Match> {
        self.matches.get(id)
    }

    pub fn market(&self, id: &MarketId) -> Option<&raw::Market> {
        self.markets.get(id)
    }

    pub fn market_mut(&mut self, id: &MarketId) -> Option<&mut raw::Market> {
        self.markets.get_mut(id)
    }

    pub fn outcome(&self, id: &OutcomeId) -> Option<&raw::Outcome> {
        self.outcomes.get(id)
    }

    pub fn betting_offer_for(&self, outcome_id: &OutcomeId) -> Option<&raw::BettingOffer> {
        self.offers_by_outcome.get(outcome_id)
    }

    /// Resolve a betting offer by its own id via the offer → outcome index.
    pub fn betting_offer_mut(&mut self, id: &BettingOfferId) -> Option<&mut raw::BettingOffer> {
        let outcome_id = self.outcome_for_offer.get(id)?.clone();
        self.offers_by_outcome.get_mut(&outcome_id)
    }

    /// Locations in arrival (popularity) order.
    pub fn locations(&self) -> impl Iterator<Item = &raw::Location> {
        self.locations.values()
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn clear_tournaments(&mut self) {
        self.tournaments.clear();
    }

    pub fn clear_locations(&mut self) {
        self.locations.clear();
    }

    pub fn clear(&mut self) {
        self.tournaments.clear();
        self.locations.clear();
        self.matches.clear();
        self.markets.clear();
        self.outcomes.clear();
        self.offers_by_outcome.clear();
        self.outcome_for_offer.clear();
        self.outcome_relations.clear();
        self.main_markets.clear();
    }
}

/// Adjacency lists derived from foreign keys in incoming records.
///
/// Lists keep first-seen order and de-duplicate by id, so re-delivered
/// records (retries, overlapping pages) do not grow them.
#[derive(Debug, Clone, Default)]
pub struct RelationIndexes {
    markets_for_match: HashMap<MatchId, Vec<MarketId>>,
    outcomes_for_market: HashMap<MarketId, Vec<OutcomeId>>,
    tournaments_for_location: HashMap<LocationId, Vec<TournamentId>>,
    tournaments_for_category: HashMap<String, Vec<TournamentId>>,
}

impl RelationIndexes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link_market(&mut self, match_id: MatchId, market_id: MarketId) {
        let markets = self.markets_for_match.entry(match_id).or_default();
        if !markets.contains(&market_id) {
            markets.push(market_id);
        }
    }

    pub fn link_outcome(&mut self, market_id: MarketId, outcome_id: OutcomeId) {
        let outcomes = self.outcomes_for_market.entry(market_id).or_default();
        if !outcomes.contains(&outcome_id) {
            outcomes.push(outcome_id);
        }
    }

    pub fn link_tournament_to_location(
        &mut self,
        location_id: LocationId,
        tournament_id: TournamentId,
    ) {
        let tournaments = self.tournaments_for_location.entry(location_id).or_default();
        if !tournaments.contains(&tournament_id) {
            tournaments.push(tournament_id);
        }
    }

    pub fn link_tournament_to_category(&mut self, category_id: String, tournament_id: TournamentId) {
        let tournaments = self.tournaments_for_category.entry(category_id).or_default();
        if !tournaments.contains(&tournament_id) {
            tournaments.push(tournament_id);
        }
    }

    pub fn market_ids(&self, match_id: &MatchId) -> &[MarketId] {
        self.markets_for_match
            .get(match_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn outcome_ids(&self, market_id: &MarketId) -> &[OutcomeId] {
        self.outcomes_for_market
            .get(market_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn tournament_ids_for_location(&self, location_id: &LocationId) -> &[TournamentId] {
        self.tournaments_for_location
            .get(location_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn tournament_ids_for_category(&self, category_id: &str) -> &[TournamentId] {
        self.tournaments_for_category
            .get(category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.markets_for_match.clear();
        self.outcomes_for_market.clear();
        self.tournaments_for_location.clear();
        self.tournaments_for_category.clear();
    }
}
