//! Timer tokens and fetch tickets.
//!
//! Every timer and fetch the engine asks for carries the session epoch at the
//! time it was issued plus a unique id. Restarting bumps the epoch, so a
//! completion from before the restart no longer matches and is dropped.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Reveal the next card after the round transition delay.
    RoundStart,
    /// The spin animation finished; show the target.
    SpinComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub epoch: u64,
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchPurpose {
    /// Fresh session: the batch replaces the pool and starts a round.
    Replace,
    /// Pool is running low: the batch is appended, play continues meanwhile.
    Refill,
    /// Pool ran dry: the batch is appended and the waiting round starts.
    Blocking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub purpose: FetchPurpose,
    pub epoch: u64,
    pub id: u64,
}

/// Issues tokens and tickets, and decides which completions are current.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    epoch: u64,
    next_id: u64,
}

impl Scheduler {
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Invalidate everything issued so far.
    pub fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    pub fn timer(&mut self, kind: TimerKind) -> TimerToken {
        TimerToken { kind, epoch: self.epoch, id: self.next() }
    }

    pub fn ticket(&mut self, purpose: FetchPurpose) -> FetchTicket {
        FetchTicket { purpose, epoch: self.epoch, id: self.next() }
    }

    #[must_use]
    pub fn is_current_epoch(&self, epoch: u64) -> bool {
        epoch == self.epoch
    }

    fn next(&mut self) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        self.next_id
    }
}

/// Host-side record of timers that are still allowed to fire.
///
/// Browser timeouts are fire-and-forget, so a cancelled timer still expires.
/// The host arms each token when it starts the timeout and asks [`fire`]
/// when it expires; a token that was cancelled in between is swallowed.
/// Each token fires at most once and leaves the ledger when it does.
///
/// [`fire`]: TimerLedger::fire
#[derive(Debug, Clone, Default)]
pub struct TimerLedger {
    armed: HashSet<TimerToken>,
}

impl TimerLedger {
    pub fn arm(&mut self, token: TimerToken) {
        self.armed.insert(token);
    }

    /// Returns whether the token was still armed.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        self.armed.remove(&token)
    }

    /// Whether an expired timer should be delivered to the engine.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        self.armed.remove(&token)
    }

    #[must_use]
    pub fn armed_len(&self) -> usize {
        self.armed.len()
    }
}
