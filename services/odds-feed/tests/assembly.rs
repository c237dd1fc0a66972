//! End-to-end assembly tests for the odds-feed engine
//!
//! Drives the public API only: decode or construct aggregator batches,
//! apply them to a repository, assemble a list context, and check the
//! denormalized output.
//!
//! Covers:
//! - Read idempotence and last-write-wins overwrite
//! - Dangling-reference tolerance and default substitution
//! - Outcome and market sort contracts
//! - Membership dedup and hard-refresh semantics
//! - In-place content updates and bulk side-channel loaders

use odds_feed::content::parse_aggregator;
use odds_feed::{assemble_matches, Aggregator, Content, ContentUpdate, ListContext, OddsRepository};
use rust_decimal::Decimal;
use types::ids::{
    BettingOfferId, BettingTypeId, LocationId, MarketId, MatchId, OutcomeId, TournamentId,
};
use types::raw;

fn match_record(id: &str, home: &str, away: &str) -> Content {
    Content::Match(raw::Match {
        id: MatchId::new(id),
        home_participant_name: Some(home.to_string()),
        away_participant_name: Some(away.to_string()),
        ..Default::default()
    })
}

fn market_record(id: &str, event_id: &str, type_id: &str, name: &str) -> Content {
    Content::Market(raw::Market {
        id: MarketId::new(id),
        event_id: Some(MatchId::new(event_id)),
        betting_type_id: Some(BettingTypeId::new(type_id)),
        short_name: Some(name.to_string()),
        ..Default::default()
    })
}

fn outcome_record(id: &str, code_name: &str) -> Content {
    Content::BetOutcome(raw::Outcome {
        id: OutcomeId::new(id),
        header_name_key: Some(code_name.to_string()),
        ..Default::default()
    })
}

fn offer_record(id: &str, outcome_id: &str, odds: Decimal) -> Content {
    Content::BettingOffer(raw::BettingOffer {
        id: BettingOfferId::new(id),
        outcome_id: Some(OutcomeId::new(outcome_id)),
        odds_value: Some(odds),
        ..Default::default()
    })
}

fn relation_record(id: &str, market_id: &str, outcome_id: &str) -> Content {
    Content::MarketOutcomeRelation(raw::MarketOutcomeRelation {
        id: id.to_string(),
        market_id: Some(MarketId::new(market_id)),
        outcome_id: Some(OutcomeId::new(outcome_id)),
    })
}

fn main_market_record(id: &str, type_id: &str) -> Content {
    Content::MainMarket(raw::MainMarket {
        id: MarketId::new(id),
        betting_type_id: Some(BettingTypeId::new(type_id)),
    })
}

/// One complete match: 1x2 market with home/away priced outcomes.
fn standard_batch() -> Aggregator {
    Aggregator::with_content(vec![
        match_record("m1", "A", "B"),
        market_record("mk1", "m1", "1x2", "Match Result"),
        outcome_record("o1", "home"),
        outcome_record("o2", "away"),
        offer_record("bo1", "o1", Decimal::new(15, 1)),
        offer_record("bo2", "o2", Decimal::new(25, 1)),
        relation_record("r1", "mk1", "o1"),
        relation_record("r2", "mk1", "o2"),
    ])
}

/// Test 1: the end-to-end scenario — one batch, one fully joined match.
#[test]
fn test_end_to_end_single_match_assembly() {
    let mut repo = OddsRepository::new();
    repo.apply_aggregator(&standard_batch(), ListContext::PopularEvents, false);

    let matches = assemble_matches(&repo, ListContext::PopularEvents);
    assert_eq!(matches.len(), 1);

    let assembled = &matches[0];
    assert_eq!(assembled.id, MatchId::new("m1"));
    assert_eq!(assembled.home_participant.name, "A");
    assert_eq!(assembled.away_participant.name, "B");
    assert_eq!(assembled.markets.len(), 1);

    let market = &assembled.markets[0];
    assert_eq!(market.name, "Match Result");
    assert_eq!(market.outcomes.len(), 2);
    assert_eq!(market.outcomes[0].code_name, "home");
    assert_eq!(market.outcomes[0].betting_offer.value, Decimal::new(15, 1));
    assert_eq!(market.outcomes[1].code_name, "away");
    assert_eq!(market.outcomes[1].betting_offer.value, Decimal::new(25, 1));
}

/// Test 2: assembly is a pure read — repeated calls yield identical output.
#[test]
fn test_read_idempotence() {
    let mut repo = OddsRepository::new();
    repo.apply_aggregator(&standard_batch(), ListContext::PopularEvents, false);

    let first = assemble_matches(&repo, ListContext::PopularEvents);
    let second = assemble_matches(&repo, ListContext::PopularEvents);
    assert_eq!(first, second);

    // Contexts never ingested assemble to empty, also repeatably
    assert!(assemble_matches(&repo, ListContext::Cashouts).is_empty());
    assert!(assemble_matches(&repo, ListContext::Cashouts).is_empty());
}

/// Test 3: re-ingesting an entity overwrites it outright, no field merge.
#[test]
fn test_last_write_wins() {
    let mut repo = OddsRepository::new();
    repo.apply_aggregator(&standard_batch(), ListContext::PopularEvents, false);
    repo.apply_aggregator(
        &Aggregator::with_content(vec![market_record(
            "mk1",
            "m1",
            "1x2",
            "Full Time Result",
        )]),
        ListContext::PopularEvents,
        false,
    );

    let matches = assemble_matches(&repo, ListContext::PopularEvents);
    assert_eq!(matches[0].markets.len(), 1);
    assert_eq!(matches[0].markets[0].name, "Full Time Result");
}

/// Test 4: a relation to an outcome never ingested is silently absent;
/// sibling outcomes still materialize.
#[test]
fn test_dangling_outcome_reference_is_tolerated() {
    let mut repo = OddsRepository::new();
    let mut batch = standard_batch();
    batch
        .content
        .push(relation_record("r3", "mk1", "o-never-arrives"));
    repo.apply_aggregator(&batch, ListContext::PopularEvents, false);

    let matches = assemble_matches(&repo, ListContext::PopularEvents);
    let outcomes = &matches[0].markets[0].outcomes;
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.id != OutcomeId::new("o-never-arrives")));
}

/// Test 5: outcome sort contract — home, draw, away regardless of ingest order.
#[test]
fn test_outcome_sort_contract() {
    let mut repo = OddsRepository::new();
    repo.apply_aggregator(
        &Aggregator::with_content(vec![
            match_record("m1", "A", "B"),
            market_record("mk1", "m1", "1x2", "Match Result"),
            outcome_record("o-away", "away"),
            outcome_record("o-home", "home"),
            outcome_record("o-draw", "draw"),
            offer_record("bo1", "o-away", Decimal::new(30, 1)),
            offer_record("bo2", "o-home", Decimal::new(15, 1)),
            offer_record("bo3", "o-draw", Decimal::new(32, 1)),
            relation_record("r1", "mk1", "o-away"),
            relation_record("r2", "mk1", "o-home"),
            relation_record("r3", "mk1", "o-draw"),
        ]),
        ListContext::TodayEvents,
        false,
    );

    let matches = assemble_matches(&repo, ListContext::TodayEvents);
    let codes: Vec<_> = matches[0].markets[0]
        .outcomes
        .iter()
        .map(|o| o.code_name.as_str())
        .collect();
    assert_eq!(codes, vec!["home", "draw", "away"]);
}

/// Test 6: unrecognized code names sort after every recognized one.
#[test]
fn test_unknown_outcome_sorts_last() {
    let mut repo = OddsRepository::new();
    repo.apply_aggregator(
        &Aggregator::with_content(vec![
            match_record("m1", "A", "B"),
            market_record("mk1", "m1", "spec1", "Specials"),
            outcome_record("o-special", "special_bet"),
            outcome_record("o-home", "home"),
            offer_record("bo1", "o-special", Decimal::new(50, 1)),
            offer_record("bo2", "o-home", Decimal::new(15, 1)),
            relation_record("r1", "mk1", "o-special"),
            relation_record("r2", "mk1", "o-home"),
        ]),
        ListContext::TodayEvents,
        false,
    );

    let matches = assemble_matches(&repo, ListContext::TodayEvents);
    let codes: Vec<_> = matches[0].markets[0]
        .outcomes
        .iter()
        .map(|o| o.code_name.as_str())
        .collect();
    assert_eq!(codes, vec!["home", "special_bet"]);
}

/// Test 7: markets sort by main-market announcement order, unknown types
/// after known ones, ties keeping join order.
#[test]
fn test_market_ordering_follows_main_market_registry() {
    let mut repo = OddsRepository::new();
    repo.apply_aggregator(
        &Aggregator::with_content(vec![
            main_market_record("mm1", "1x2"),
            main_market_record("mm2", "ou25"),
            match_record("m1", "A", "B"),
            // Ingested in reverse of announced priority, plus one unknown type
            market_record("mk-btts", "m1", "btts", "Both Teams To Score"),
            market_record("mk-ou", "m1", "ou25", "Over/Under 2.5"),
            market_record("mk-1x2", "m1", "1x2", "Match Result"),
        ]),
        ListContext::PopularEvents,
        false,
    );

    let matches = assemble_matches(&repo, ListContext::PopularEvents);
    let types: Vec<_> = matches[0]
        .markets
        .iter()
        .map(|m| m.type_id.as_str())
        .collect();
    assert_eq!(types, vec!["1x2", "ou25", "btts"]);
}

/// Test 8: an outcome without a betting offer never materializes.
#[test]
fn test_missing_betting_offer_drops_outcome() {
    let mut repo = OddsRepository::new();
    repo.apply_aggregator(
        &Aggregator::with_content(vec![
            match_record("m1", "A", "B"),
            market_record("mk1", "m1", "1x2", "Match Result"),
            outcome_record("o1", "home"),
            outcome_record("o2", "away"),
            offer_record("bo1", "o1", Decimal::new(15, 1)),
            // no offer for o2
            relation_record("r1", "mk1", "o1"),
            relation_record("r2", "mk1", "o2"),
        ]),
        ListContext::PopularEvents,
        false,
    );

    let matches = assemble_matches(&repo, ListContext::PopularEvents);
    let outcomes = &matches[0].markets[0].outcomes;
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].id, OutcomeId::new("o1"));
}

/// Test 9: re-applying the same batch (transport retry) does not duplicate
/// matches in the assembled output.
#[test]
fn test_reingest_does_not_duplicate_membership() {
    let mut repo = OddsRepository::new();
    let batch = standard_batch();
    repo.apply_aggregator(&batch, ListContext::PopularEvents, false);
    repo.apply_aggregator(&batch, ListContext::PopularEvents, false);

    let matches = assemble_matches(&repo, ListContext::PopularEvents);
    assert_eq!(matches.len(), 1);
    // Relation lists did not grow either
    assert_eq!(matches[0].markets.len(), 1);
    assert_eq!(matches[0].markets[0].outcomes.len(), 2);
}

/// Test 10: a hard refresh clears membership but keeps entities and
/// ordering registers, so surviving matches re-assemble fully joined.
#[test]
fn test_hard_refresh_clears_membership_only() {
    let mut repo = OddsRepository::new();
    repo.apply_aggregator(&standard_batch(), ListContext::PopularEvents, false);

    // Refresh delivers only the match record again
    repo.apply_aggregator(
        &Aggregator::with_content(vec![match_record("m1", "A", "B")]),
        ListContext::PopularEvents,
        true,
    );

    let matches = assemble_matches(&repo, ListContext::PopularEvents);
    assert_eq!(matches.len(), 1);
    // Markets and outcomes survived the refresh
    assert_eq!(matches[0].markets.len(), 1);
    assert_eq!(matches[0].markets[0].outcomes.len(), 2);
}

/// Test 11: markets arriving in later batches attach to an already known
/// match (incremental delivery self-heals).
#[test]
fn test_incremental_delivery_self_heals() {
    let mut repo = OddsRepository::new();
    repo.apply_aggregator(
        &Aggregator::with_content(vec![match_record("m1", "A", "B")]),
        ListContext::TodayEvents,
        false,
    );

    assert!(assemble_matches(&repo, ListContext::TodayEvents)[0]
        .markets
        .is_empty());

    repo.apply_aggregator(
        &Aggregator::with_content(vec![
            market_record("mk1", "m1", "1x2", "Match Result"),
            outcome_record("o1", "home"),
            offer_record("bo1", "o1", Decimal::new(15, 1)),
            relation_record("r1", "mk1", "o1"),
        ]),
        ListContext::TodayEvents,
        false,
    );

    let matches = assemble_matches(&repo, ListContext::TodayEvents);
    assert_eq!(matches[0].markets.len(), 1);
    assert_eq!(matches[0].markets[0].outcomes.len(), 1);
}

/// Test 12: in-place betting-offer updates show up in the next assembly.
#[test]
fn test_content_update_flows_into_assembly() {
    let mut repo = OddsRepository::new();
    repo.apply_aggregator(&standard_batch(), ListContext::PopularEvents, false);

    repo.apply_content_updates(&[ContentUpdate::BettingOffer {
        id: BettingOfferId::new("bo1"),
        odds_value: Some(Decimal::new(18, 1)),
        status_id: None,
        is_live: None,
        is_available: Some(false),
    }]);

    let matches = assemble_matches(&repo, ListContext::PopularEvents);
    let home = &matches[0].markets[0].outcomes[0];
    assert_eq!(home.betting_offer.value, Decimal::new(18, 1));
    assert!(!home.betting_offer.is_available);
}

/// Test 13: the wire path — decode a JSON payload and assemble it.
#[test]
fn test_decode_then_assemble() {
    let json = r#"{
        "content": [
            {"_type": "MATCH", "id": "m1",
             "homeParticipantName": "A", "awayParticipantName": "B",
             "sportId": "1", "numberOfMarkets": 12},
            {"_type": "MARKET", "id": "mk1", "eventId": "m1",
             "bettingTypeId": "1x2", "shortName": "Match Result"},
            {"_type": "OUTCOME", "id": "o1", "headerNameKey": "home"},
            {"_type": "BETTING_OFFER", "id": "bo1", "outcomeId": "o1", "oddsValue": "1.85"},
            {"_type": "MARKET_OUTCOME_RELATION", "id": "r1", "marketId": "mk1", "outcomeId": "o1"},
            {"_type": "EVENT_PART_SCORE", "id": "ignored"}
        ]
    }"#;

    let batch = parse_aggregator(json).unwrap();
    let mut repo = OddsRepository::new();
    repo.apply_aggregator(&batch, ListContext::MatchDetails, false);

    let matches = assemble_matches(&repo, ListContext::MatchDetails);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].sport_type, "1");
    // Server-side total, not the number of markets actually joined
    assert_eq!(matches[0].number_total_of_markets, 12);
    assert_eq!(
        matches[0].markets[0].outcomes[0].betting_offer.value,
        Decimal::new(185, 2)
    );
    assert_eq!(repo.records_ignored(), 1);
}

/// Test 14: bulk loaders feed the sibling read paths.
#[test]
fn test_bulk_loaders_and_popularity_order() {
    let mut repo = OddsRepository::new();

    repo.store_locations(vec![
        raw::Location {
            id: LocationId::new("se"),
            name: Some("Sweden".to_string()),
            iso_code: Some("SE".to_string()),
        },
        raw::Location {
            id: LocationId::new("fr"),
            name: Some("France".to_string()),
            iso_code: Some("FR".to_string()),
        },
    ]);
    repo.store_tournaments(vec![
        raw::Tournament {
            id: TournamentId::new("t1"),
            venue_id: Some(LocationId::new("se")),
            category_id: None,
        },
        raw::Tournament {
            id: TournamentId::new("t2"),
            venue_id: Some(LocationId::new("se")),
            category_id: None,
        },
    ]);
    repo.store_popular_tournaments(vec![raw::Tournament {
        id: TournamentId::new("t2"),
        ..Default::default()
    }]);

    assert!(repo.location(&LocationId::new("se")).is_some());
    let tournaments = repo.tournaments_for_location(&LocationId::new("se"));
    assert_eq!(tournaments.len(), 2);

    let popular: Vec<_> = repo.popular_tournaments().map(|t| t.id.clone()).collect();
    assert_eq!(popular, vec![TournamentId::new("t2")]);
}

/// Test 15: venue resolution and documented defaults on a sparse match.
#[test]
fn test_sparse_match_gets_documented_defaults() {
    use chrono::{DateTime, Utc};

    let mut repo = OddsRepository::new();
    repo.apply_aggregator(
        &Aggregator::with_content(vec![Content::Match(raw::Match {
            id: MatchId::new("m1"),
            ..Default::default()
        })]),
        ListContext::SuggestedMatches,
        false,
    );

    let matches = assemble_matches(&repo, ListContext::SuggestedMatches);
    let assembled = &matches[0];
    assert_eq!(assembled.competition_id, TournamentId::default());
    assert_eq!(assembled.competition_name, "");
    assert_eq!(assembled.date, DateTime::<Utc>::UNIX_EPOCH);
    assert!(assembled.venue.is_none());
    assert_eq!(assembled.number_total_of_markets, 0);
}
