//! Read-time view assembly
//!
//! Pure joins over the repository snapshot: no mutation, no error path.
//! Every missing reference either omits the dependent item or substitutes
//! a documented default, so assembly is safe to call at any point during
//! incremental delivery — output under-populates and self-heals as later
//! batches fill the graph in. Repeated calls against the same snapshot
//! return identical output.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use types::raw;
use types::view;

use crate::rank::outcome_sort_rank;
use crate::registry::ListContext;
use crate::repository::OddsRepository;

/// Materialize the denormalized matches of a list context, in membership
/// order. Matches whose raw record has not arrived are skipped.
pub fn assemble_matches(repo: &OddsRepository, context: ListContext) -> Vec<view::Match> {
    repo.raw_matches(context)
        .into_iter()
        .map(|record| assemble_match(repo, record))
        .collect()
}

fn assemble_match(repo: &OddsRepository, record: &raw::Match) -> view::Match {
    let markets = assemble_markets(repo, &record.id);

    let venue = record
        .venue_id
        .as_ref()
        .and_then(|id| repo.entities.location(id))
        .map(|location| view::Location {
            id: location.id.clone(),
            name: location.name.clone().unwrap_or_default(),
            iso_code: location.iso_code.clone().unwrap_or_default(),
        });

    view::Match {
        id: record.id.clone(),
        competition_id: record.parent_id.clone().unwrap_or_default(),
        competition_name: record.parent_name.clone().unwrap_or_default(),
        home_participant: view::Participant {
            id: record.home_participant_id.clone().unwrap_or_default(),
            name: record.home_participant_name.clone().unwrap_or_default(),
        },
        away_participant: view::Participant {
            id: record.away_participant_id.clone().unwrap_or_default(),
            name: record.away_participant_name.clone().unwrap_or_default(),
        },
        date: record
            .start_date
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        sport_type: record.sport_id.clone().unwrap_or_default(),
        venue,
        number_total_of_markets: record.number_of_markets.unwrap_or(0),
        markets,
    }
}

/// Join and sort the markets of one match. Markets whose raw record is
/// missing are skipped; the remainder sort by main-market priority with
/// ties keeping join order.
fn assemble_markets(repo: &OddsRepository, match_id: &types::ids::MatchId) -> Vec<view::Market> {
    let mut markets: Vec<view::Market> = repo
        .indexes
        .market_ids(match_id)
        .iter()
        .filter_map(|id| repo.entities.market(id))
        .map(|market| assemble_market(repo, market))
        .collect();

    // sort_by_key is stable, so unresolved type ids keep join order
    markets.sort_by_key(|market| repo.market_priority.position_of(&market.type_id));
    markets
}

fn assemble_market(repo: &OddsRepository, market: &raw::Market) -> view::Market {
    let mut outcomes: Vec<view::Outcome> = repo
        .indexes
        .outcome_ids(&market.id)
        .iter()
        .filter_map(|id| repo.entities.outcome(id))
        .filter_map(|outcome| assemble_outcome(repo, outcome))
        .collect();

    outcomes.sort_by_key(|outcome| outcome_sort_rank(&outcome.code_name));

    view::Market {
        id: market.id.clone(),
        type_id: market.betting_type_id.clone().unwrap_or_default(),
        name: market.short_name.clone().unwrap_or_default(),
        outcomes,
    }
}

/// An outcome materializes only when a betting offer prices it; an
/// unpriced outcome is dropped from its market.
fn assemble_outcome(repo: &OddsRepository, outcome: &raw::Outcome) -> Option<view::Outcome> {
    let offer = repo.entities.betting_offer_for(&outcome.id)?;

    Some(view::Outcome {
        id: outcome.id.clone(),
        code_name: outcome.header_name_key.clone().unwrap_or_default(),
        translated_name: outcome
            .translated_name
            .clone()
            .or_else(|| outcome.header_name.clone())
            .unwrap_or_default(),
        name_digit1: outcome.param_float1,
        name_digit2: outcome.param_float2,
        name_digit3: outcome.param_float3,
        betting_offer: view::BettingOffer {
            id: offer.id.clone(),
            value: offer.odds_value.unwrap_or(Decimal::ZERO),
            status_id: offer.status_id.clone().unwrap_or_else(|| "1".to_string()),
            is_live: offer.is_live.unwrap_or(false),
            is_available: offer.is_available.unwrap_or(true),
        },
    })
}
