//! List-context membership registry
//!
//! Each screen of the client subscribes to one "list context" (popular
//! events, today's events, a competition page, ...). The registry records
//! which match ids currently belong to each context, in arrival order;
//! the assembler walks this list to know what to materialize.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use types::ids::MatchId;

/// The list views a match can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListContext {
    PopularEvents,
    TodayEvents,
    Competitions,
    AllLiveEvents,
    FavoriteMatchEvents,
    FavoriteCompetitionEvents,
    Cashouts,
    MatchDetails,
    SuggestedMatches,
}

/// Ordered match membership per list context.
///
/// Membership keeps first-seen order and de-duplicates by id, so
/// re-ingesting a batch (e.g. on a transport retry) does not duplicate
/// matches in the assembled output.
#[derive(Debug, Clone, Default)]
pub struct ListRegistry {
    members: HashMap<ListContext, Vec<MatchId>>,
}

impl ListRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a match id to a context's membership, keeping first-seen
    /// order.
    pub fn push(&mut self, context: ListContext, id: MatchId) {
        let members = self.members.entry(context).or_default();
        if !members.contains(&id) {
            members.push(id);
        }
    }

    /// Match ids currently belonging to a context, in membership order.
    pub fn ids(&self, context: ListContext) -> &[MatchId] {
        self.members
            .get(&context)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self, context: ListContext) -> usize {
        self.ids(context).len()
    }

    pub fn is_empty(&self, context: ListContext) -> bool {
        self.ids(context).is_empty()
    }

    /// Reset membership of every context (hard-refresh semantics).
    pub fn clear(&mut self) {
        self.members.clear();
    }
}
