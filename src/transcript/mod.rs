//! Transcript aggregation
//!
//! This module turns the stream of room events into the ordered list of
//! display messages shown in the transcript panel:
//! - lifecycle events become system entries
//! - speech-to-text segments and backend data-channel payloads become
//!   avatar or user entries, classified by participant identity
//!
//! The list is append-only; entries are never reordered, deduplicated, or
//! edited after the fact.

mod aggregator;
mod entry;

pub use aggregator::TranscriptAggregator;
pub use entry::{classify_identity, EntryKind, IdentityClass, TranscriptEntry};
