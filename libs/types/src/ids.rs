//! Provider-assigned identifier types for feed entities
//!
//! The aggregator backend keys every record by an opaque string id. Each
//! entity kind gets its own newtype so relations between kinds (match →
//! market, outcome → betting offer, ...) stay well-typed in the store and
//! the relation indexes.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! provider_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create from a provider-assigned id string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the raw id string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

provider_id! {
    /// Unique identifier for a tournament (competition)
    TournamentId
}

provider_id! {
    /// Unique identifier for a location (country/venue)
    LocationId
}

provider_id! {
    /// Unique identifier for a match
    MatchId
}

provider_id! {
    /// Unique identifier for a market
    MarketId
}

provider_id! {
    /// Unique identifier for a bet outcome
    OutcomeId
}

provider_id! {
    /// Unique identifier for a betting offer (the price on an outcome)
    BettingOfferId
}

provider_id! {
    /// Identifier of a market *type* (e.g. the 1X2 family), announced by
    /// main-market records and used only for display ordering
    BettingTypeId
}

provider_id! {
    /// Unique identifier for a match participant
    ParticipantId
}
