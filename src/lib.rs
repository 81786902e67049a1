//! Frond - a recursive directory lister with quoting and type annotations

pub mod entry;
pub mod output;
pub mod policy;
pub mod walk;

pub use entry::{EntryKind, TypeLabel};
pub use output::{EntrySink, Printer};
pub use policy::{Policy, QuoteRule, SkipRule};
pub use walk::{Outcome, WalkError, WalkState, Walker};
