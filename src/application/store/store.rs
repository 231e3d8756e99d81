//! Shared statistics store with per-field request tickets.

use std::sync::{PoisonError, RwLock};

use super::state::{Commit, StatisticsState};
use crate::domain::repositories::ChartKind;

/// Store field written by a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Summary,
    OffersView,
    OffersViewChart,
    CodeGenerated,
    CodeRedeemed,
}

impl Slot {
    pub const COUNT: usize = 5;

    pub const ALL: [Slot; Self::COUNT] = [
        Slot::Summary,
        Slot::OffersView,
        Slot::OffersViewChart,
        Slot::CodeGenerated,
        Slot::CodeRedeemed,
    ];

    pub fn for_chart(kind: ChartKind) -> Self {
        match kind {
            ChartKind::OffersViews => Slot::OffersViewChart,
            ChartKind::CodesGenerated => Slot::CodeGenerated,
            ChartKind::CodesRedeemed => Slot::CodeRedeemed,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Proof that a request for `slot` was issued, ordered per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    slot: Slot,
    seq: u64,
}

#[derive(Debug, Default)]
struct Inner {
    state: StatisticsState,
    issued: [u64; Slot::COUNT],
    committed: [u64; Slot::COUNT],
}

impl Inner {
    /// Makes every ticket issued so far for `slot` stale.
    fn invalidate(&mut self, slot: Slot) {
        self.committed[slot.index()] = self.issued[slot.index()];
    }
}

/// Process-wide statistics store.
///
/// State changes only through [`Commit`]s. Fetches take a [`RequestTicket`]
/// before issuing their request and commit through it; a response is applied
/// only if no newer ticket for the same slot has been committed, so a slow
/// response can never overwrite a fresher one.
///
/// Clearing the displayed results also invalidates tickets already issued for
/// the cleared slots: responses to requests sent before the clear are dropped.
#[derive(Debug, Default)]
pub struct StatisticsStore {
    inner: RwLock<Inner>,
}

impl StatisticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> StatisticsState {
        self.read(|state| state.clone())
    }

    /// Runs `f` against the current state without copying it.
    pub fn read<T>(&self, f: impl FnOnce(&StatisticsState) -> T) -> T {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&inner.state)
    }

    /// Issues the next ticket for `slot`.
    pub fn begin(&self, slot: Slot) -> RequestTicket {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.issued[slot.index()] += 1;
        RequestTicket {
            slot,
            seq: inner.issued[slot.index()],
        }
    }

    /// Applies a commit unconditionally.
    pub fn dispatch(&self, commit: Commit) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if matches!(commit, Commit::CleanStatics | Commit::Reset) {
            for slot in Slot::ALL {
                inner.invalidate(slot);
            }
        }
        inner.state.apply(commit);
    }

    /// Applies `commits` atomically if `ticket` is newer than the last ticket
    /// committed for its slot.
    ///
    /// Returns `false`, leaving the state untouched, when the ticket is stale.
    pub fn commit(&self, ticket: RequestTicket, commits: impl IntoIterator<Item = Commit>) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let last = inner.committed[ticket.slot.index()];
        if ticket.seq <= last {
            tracing::debug!(
                slot = ?ticket.slot,
                ticket = ticket.seq,
                last_committed = last,
                "Discarding stale response"
            );
            return false;
        }

        inner.committed[ticket.slot.index()] = ticket.seq;
        for commit in commits {
            inner.state.apply(commit);
        }
        true
    }
}
