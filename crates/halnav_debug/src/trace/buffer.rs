//! Bounded record storage.
//!
//! Keeps the most recent records of a session. Once full, the oldest record
//! is dropped for each new one.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use super::record::{TraceEvent, TraceRecord};

/// A ring buffer of trace records.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    records: VecDeque<TraceRecord>,
    capacity: usize,
    next_id: u64,
}

impl TraceBuffer {
    /// Records kept unless configured otherwise.
    pub const DEFAULT_CAPACITY: usize = 10_000;

    /// Creates an empty buffer holding at most `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_id: 0,
        }
    }

    /// Stores an event and returns its record id.
    pub fn push(&mut self, turn: u64, timestamp_ns: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.records.push_back(TraceRecord {
            id,
            turn,
            timestamp_ns,
            event,
        });
        if self.records.len() > self.capacity {
            self.records.pop_front();
        }

        id
    }

    /// Returns the number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns the newest record.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.back()
    }

    /// Counts what the buffer has seen.
    #[must_use]
    pub fn summary(&self) -> TraceSummary {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.event_type()).or_insert(0) += 1;
        }

        #[allow(clippy::cast_possible_truncation)]
        let dropped = self.next_id as usize - self.records.len();
        TraceSummary {
            records: self.records.len(),
            dropped,
            counts,
        }
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

/// Per-event counts over a buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceSummary {
    /// Records still held.
    pub records: usize,
    /// Records pushed out by newer ones.
    pub dropped: usize,
    /// Held records per event type.
    pub counts: BTreeMap<&'static str, usize>,
}

impl TraceSummary {
    /// Returns how many held records have the given event type.
    #[must_use]
    pub fn count(&self, event_type: &str) -> usize {
        self.counts.get(event_type).copied().unwrap_or(0)
    }
}

impl fmt::Display for TraceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} trace records", self.records)?;
        if self.dropped > 0 {
            write!(f, " ({} dropped)", self.dropped)?;
        }
        for name in TraceEvent::TYPES {
            if let Some(n) = self.counts.get(name) {
                write!(f, "\n  {name:<14} {n}")?;
            }
        }
        Ok(())
    }
}
