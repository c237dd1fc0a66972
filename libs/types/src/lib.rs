//! Types library for the odds-feed engine
//!
//! This library provides the type definitions shared by the feed engine and
//! its consumers:
//!
//! - `ids`: provider-assigned string identifiers, one newtype per entity kind
//! - `raw`: feed records as delivered by the aggregator transport, with
//!   best-effort optional fields
//! - `view`: fully joined, denormalized entities produced by the assembler
//!   for display
//!
//! Raw and view types deliberately share names (`Match`, `Market`, ...);
//! they are always referred to module-qualified.

pub mod ids;
pub mod raw;
pub mod view;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";
