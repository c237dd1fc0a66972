//! Odds-Feed Engine
//!
//! Ingests heterogeneous aggregator batches pushed by the subscription
//! transport and materializes consistent, sorted match views for display:
//! - Per-type entity maps holding the latest version of every raw record
//! - Relation indexes built incrementally as records arrive
//! - Insertion-ordered registers for market priority and popularity
//! - Per-list-context match membership
//! - A pure read-time assembler that joins and sorts the graph
//!
//! Records arrive partial, denormalized, and interleaved across batches;
//! a dangling foreign key is never an error, it just yields an empty join
//! result until the missing record arrives.
//!
//! # Architecture
//!
//! ```text
//! Aggregator batches (transport)
//!         │
//!     ┌───▼────┐
//!     │ Ingest │  ← tagged dispatch per record kind
//!     └───┬────┘
//!         │
//!   ┌─────┼──────────┬─────────────┐
//!   │     │          │             │
//! ┌─▼─────▼──┐  ┌────▼─────┐  ┌────▼────┐
//! │ Entities │  │ Relation │  │ Lists / │
//! │  (maps)  │  │ indexes  │  │ ordering│
//! └─────┬────┘  └────┬─────┘  └────┬────┘
//!       │            │             │
//!     ┌─▼────────────▼─────────────▼─┐
//!     │       View assembler         │  ← read-only join + sort
//!     └──────────────────────────────┘
//! ```

pub mod assembler;
pub mod content;
pub mod ordering;
pub mod rank;
pub mod registry;
pub mod repository;
pub mod store;

pub use assembler::assemble_matches;
pub use content::{Aggregator, Content, ContentUpdate, DecodeError};
pub use registry::ListContext;
pub use repository::OddsRepository;

// Library version
pub const ENGINE_VERSION: &str = "0.1.0";
