//! Guidance resolution.
//!
//! The resolver maps a teacher's query onto a knowledge-base entry, either by
//! exact category key or by classifying the free-text problem with the
//! keyword table. Resolution is pure: no I/O and no shared mutable state.

pub mod resolve;

pub use resolve::{MatchKind, Resolution, Resolver};
