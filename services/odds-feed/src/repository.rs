//! Repository state and aggregator ingest
//!
//! `OddsRepository` owns the entity store, the relation indexes, the
//! ordering registers, and the list registry, and routes each tagged
//! record of an aggregator batch to them. Ingest never fails: records
//! with missing references are stored as-is and resolve (or not) at
//! read time.
//!
//! The repository has no internal locking. Callers confine it to one
//! thread or wrap it in their own lock; ingest and assembly must not run
//! concurrently.

use tracing::{debug, trace};

use types::ids::{LocationId, TournamentId};
use types::raw;

use crate::content::{Aggregator, Content, ContentUpdate};
use crate::ordering::{OrderedMap, PriorityRegister};
use crate::registry::{ListContext, ListRegistry};
use crate::store::{EntityStore, RelationIndexes};

/// In-memory odds-feed state for one subscription scope.
///
/// Lives until the consumer drops or [`clear`](Self::clear)s it when
/// switching sport or filters.
#[derive(Debug, Clone, Default)]
pub struct OddsRepository {
    pub(crate) entities: EntityStore,
    pub(crate) indexes: RelationIndexes,
    pub(crate) lists: ListRegistry,
    pub(crate) market_priority: PriorityRegister,
    pub(crate) popular_tournaments: OrderedMap<TournamentId, raw::Tournament>,
    pub(crate) outright_tournaments: OrderedMap<TournamentId, raw::Tournament>,
    records_applied: u64,
    records_ignored: u64,
    offers_dropped: u64,
}

impl OddsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one aggregator batch under a list context.
    ///
    /// `should_clear` resets the list-context membership map first (hard
    /// refresh); entity maps and ordering registers always accumulate.
    pub fn apply_aggregator(
        &mut self,
        aggregator: &Aggregator,
        context: ListContext,
        should_clear: bool,
    ) {
        if should_clear {
            self.lists.clear();
        }

        for record in &aggregator.content {
            self.apply_content(record, context);
        }

        if !aggregator.content_updates.is_empty() {
            self.apply_content_updates(&aggregator.content_updates);
        }

        debug!(
            context = ?context,
            records = aggregator.content.len(),
            updates = aggregator.content_updates.len(),
            cleared = should_clear,
            "aggregator applied"
        );
    }

    fn apply_content(&mut self, record: &Content, context: ListContext) {
        match record {
            Content::Tournament(tournament) => {
                self.entities.upsert_tournament(tournament.clone());
                self.records_applied += 1;
            }

            Content::Match(record) => {
                self.lists.push(context, record.id.clone());
                self.entities.upsert_match(record.clone());
                self.records_applied += 1;
            }

            Content::Market(market) => {
                if let Some(match_id) = &market.event_id {
                    self.indexes.link_market(match_id.clone(), market.id.clone());
                }
                self.entities.upsert_market(market.clone());
                self.records_applied += 1;
            }

            Content::BetOutcome(outcome) => {
                self.entities.upsert_outcome(outcome.clone());
                self.records_applied += 1;
            }

            Content::BettingOffer(offer) => match &offer.outcome_id {
                Some(outcome_id) => {
                    self.entities
                        .upsert_betting_offer(outcome_id.clone(), offer.clone());
                    self.records_applied += 1;
                }
                None => {
                    // An offer that prices nothing cannot be joined later
                    trace!(offer = %offer.id, "dropping betting offer without outcome reference");
                    self.offers_dropped += 1;
                }
            },

            Content::MainMarket(main_market) => {
                self.market_priority
                    .record(main_market.betting_type_id.clone().unwrap_or_default());
                self.entities.upsert_main_market(main_market.clone());
                self.records_applied += 1;
            }

            Content::MarketOutcomeRelation(relation) => {
                if let (Some(market_id), Some(outcome_id)) =
                    (&relation.market_id, &relation.outcome_id)
                {
                    self.indexes
                        .link_outcome(market_id.clone(), outcome_id.clone());
                }
                self.entities.upsert_outcome_relation(relation.clone());
                self.records_applied += 1;
            }

            Content::Location(location) => {
                self.entities.upsert_location(location.clone());
                self.records_applied += 1;
            }

            Content::Event => {
                self.records_ignored += 1;
            }

            Content::Unknown => {
                trace!("ignoring unrecognized record");
                self.records_ignored += 1;
            }
        }
    }

    /// Apply in-place updates to already stored records. Updates for ids
    /// never seen are no-ops.
    pub fn apply_content_updates(&mut self, updates: &[ContentUpdate]) {
        for update in updates {
            match update {
                ContentUpdate::BettingOffer {
                    id,
                    odds_value,
                    status_id,
                    is_live,
                    is_available,
                } => {
                    if let Some(offer) = self.entities.betting_offer_mut(id) {
                        if odds_value.is_some() {
                            offer.odds_value = *odds_value;
                        }
                        if status_id.is_some() {
                            offer.status_id = status_id.clone();
                        }
                        if is_live.is_some() {
                            offer.is_live = *is_live;
                        }
                        if is_available.is_some() {
                            offer.is_available = *is_available;
                        }
                    }
                }

                ContentUpdate::Market {
                    id,
                    is_available,
                    is_closed,
                } => {
                    if let Some(market) = self.entities.market_mut(id) {
                        if is_available.is_some() {
                            market.is_available = *is_available;
                        }
                        if is_closed.is_some() {
                            market.is_closed = *is_closed;
                        }
                    }
                }

                ContentUpdate::Unknown => {
                    trace!("ignoring unrecognized content update");
                }
            }
        }
    }

    /// Refill the outright-tournament register from a dedicated batch.
    /// Non-tournament records in the batch are ignored.
    pub fn ingest_outright_tournaments(&mut self, aggregator: &Aggregator) {
        self.outright_tournaments.clear();
        for record in &aggregator.content {
            if let Content::Tournament(tournament) = record {
                self.outright_tournaments
                    .insert(tournament.id.clone(), tournament.clone());
            }
        }
    }

    /// Bulk reset-and-load of the location register, arrival order kept.
    pub fn store_locations(&mut self, locations: Vec<raw::Location>) {
        self.entities.clear_locations();
        for location in locations {
            self.entities.upsert_location(location);
        }
    }

    /// Bulk reset-and-load of the tournament map. Location and category
    /// indexes grow from the loaded records; ids of tournaments no longer
    /// present compact away at read time.
    pub fn store_tournaments(&mut self, tournaments: Vec<raw::Tournament>) {
        self.entities.clear_tournaments();
        for tournament in tournaments {
            if let Some(venue_id) = &tournament.venue_id {
                self.indexes
                    .link_tournament_to_location(venue_id.clone(), tournament.id.clone());
            }
            if let Some(category_id) = &tournament.category_id {
                self.indexes
                    .link_tournament_to_category(category_id.clone(), tournament.id.clone());
            }
            self.entities.upsert_tournament(tournament);
        }
    }

    /// Reset-and-load of the popularity register, arrival order preserved
    /// as display order.
    pub fn store_popular_tournaments(&mut self, tournaments: Vec<raw::Tournament>) {
        self.popular_tournaments.clear();
        for tournament in tournaments {
            self.popular_tournaments
                .insert(tournament.id.clone(), tournament);
        }
    }

    /// Latest stored location, if it has arrived.
    pub fn location(&self, id: &LocationId) -> Option<&raw::Location> {
        self.entities.location(id)
    }

    /// Raw matches of a context, dangling ids compacted away.
    pub fn raw_matches(&self, context: ListContext) -> Vec<&raw::Match> {
        self.lists
            .ids(context)
            .iter()
            .filter_map(|id| self.entities.match_by_id(id))
            .collect()
    }

    /// Popular tournaments in arrival order.
    pub fn popular_tournaments(&self) -> impl Iterator<Item = &raw::Tournament> {
        self.popular_tournaments.values()
    }

    /// Outright tournaments in arrival order.
    pub fn outright_tournaments(&self) -> impl Iterator<Item = &raw::Tournament> {
        self.outright_tournaments.values()
    }

    /// Tournaments of a location, dangling ids compacted away.
    pub fn tournaments_for_location(&self, location_id: &LocationId) -> Vec<&raw::Tournament> {
        self.indexes
            .tournament_ids_for_location(location_id)
            .iter()
            .filter_map(|id| self.entities.tournament(id))
            .collect()
    }

    /// Tournaments of a category, dangling ids compacted away.
    pub fn tournaments_for_category(&self, category_id: &str) -> Vec<&raw::Tournament> {
        self.indexes
            .tournament_ids_for_category(category_id)
            .iter()
            .filter_map(|id| self.entities.tournament(id))
            .collect()
    }

    /// Full reset, used when the consumer switches sport or filters.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.indexes.clear();
        self.lists.clear();
        self.market_priority.clear();
        self.popular_tournaments.clear();
        self.outright_tournaments.clear();
        self.records_applied = 0;
        self.records_ignored = 0;
        self.offers_dropped = 0;
    }

    /// Total records routed into the store since creation (or last clear).
    pub fn records_applied(&self) -> u64 {
        self.records_applied
    }

    /// Total records ignored (event/unknown tags).
    pub fn records_ignored(&self) -> u64 {
        self.records_ignored
    }

    /// Total betting offers dropped for lack of an outcome reference.
    pub fn offers_dropped(&self) -> u64 {
        self.offers_dropped
    }
}
