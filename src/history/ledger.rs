//! Bounded, newest-first log of the conversions performed in a session.
//!
//! The ledger is owned by the session that created it and passed explicitly
//! into whatever needs to read or mutate it. It never outlives the session
//! and is never shared between sessions.

use crate::gst::GstBreakdown;
use chrono::{Local, NaiveDateTime};
use std::collections::VecDeque;

/// Maximum number of entries retained; older entries are evicted from the tail.
pub const CAPACITY: usize = 10;

/// Which conversion direction produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    ExcludedToIncluded,
    IncludedToExcluded,
    GstAmountToBase,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::ExcludedToIncluded => "Excl → Incl",
            Mode::IncludedToExcluded => "Incl → Excl",
            Mode::GstAmountToBase => "Reverse (GST→Base)",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A recorded conversion. The timestamp is assigned when the entry is
/// recorded and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: NaiveDateTime,
    pub mode: Mode,
    pub breakdown: GstBreakdown,
}

/// Ordered sequence of [`HistoryEntry`], newest first, at most [`CAPACITY`]
/// entries at any time.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a conversion, stamped with the current local time.
    pub fn record(&mut self, mode: Mode, breakdown: GstBreakdown) {
        self.record_at(mode, breakdown, Local::now().naive_local());
    }

    /// Record a conversion with an explicit timestamp.
    pub fn record_at(&mut self, mode: Mode, breakdown: GstBreakdown, timestamp: NaiveDateTime) {
        self.entries.push_front(HistoryEntry {
            timestamp,
            mode,
            breakdown,
        });
        self.entries.truncate(CAPACITY);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries newest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
