//! Last-write-wins display slots with stale-response protection.
//!
//! Every refresh takes a [`Ticket`] before its request goes out. When the
//! request completes, its result is applied only if no newer ticket has been
//! applied in the meantime. Stale requests are not cancelled; their results
//! are dropped when they arrive.

use crate::error::StatsError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Empty,
    Ready(T),
    /// The last applied request failed; holds the user-facing message.
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> ViewState<&T> {
        match self {
            ViewState::Empty => ViewState::Empty,
            ViewState::Ready(value) => ViewState::Ready(value),
            ViewState::Failed(message) => ViewState::Failed(message.clone()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            ViewState::Empty => ViewState::Empty,
            ViewState::Ready(value) => ViewState::Ready(f(value)),
            ViewState::Failed(message) => ViewState::Failed(message),
        }
    }
}

struct Slot<T> {
    applied: u64,
    state: ViewState<T>,
}

pub struct LatestWins<T> {
    issued: AtomicU64,
    slot: Mutex<Slot<T>>,
}

impl<T> Default for LatestWins<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LatestWins<T> {
    pub fn new() -> Self {
        LatestWins {
            issued: AtomicU64::new(0),
            slot: Mutex::new(Slot {
                applied: 0,
                state: ViewState::Empty,
            }),
        }
    }

    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Applies `result` unless a newer ticket already landed. Errors reset
    /// the slot to `Failed`. Returns whether the result was applied.
    pub fn complete(&self, ticket: Ticket, result: Result<T, StatsError>) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if ticket.0 <= slot.applied {
            debug!(
                ticket = ticket.0,
                applied = slot.applied,
                "discarding stale response"
            );
            return false;
        }

        slot.applied = ticket.0;
        slot.state = match result {
            Ok(value) => ViewState::Ready(value),
            Err(e) => {
                warn!(error = %e, "refresh failed, clearing view");
                ViewState::Failed(e.user_message())
            }
        };
        true
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&ViewState<T>) -> R) -> R {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        f(&slot.state)
    }
}

impl<T: Clone> LatestWins<T> {
    pub fn state(&self) -> ViewState<T> {
        self.with_state(|state| state.clone())
    }
}
