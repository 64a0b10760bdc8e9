// SPDX-License-Identifier: MPL-2.0
//! Component-owned cancellable timers.
//!
//! Each component keeps a [`Timers`] keyed by its own timer kinds. Scheduling
//! returns an abortable [`Task`] whose handle is held here; rescheduling,
//! cancelling or dropping the component aborts the pending task. Every
//! firing carries a [`TimerToken`] so a message that was already queued when
//! its timer got cancelled is recognised as stale and ignored.

use iced::task;
use iced::Task;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Tokens are process-wide so a recreated component never mistakes a stale
/// firing for one of its own.
static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identifies one scheduling of a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

struct Armed {
    token: TimerToken,
    // Aborts the task when dropped.
    _abort: Option<task::Handle>,
}

/// Set of pending timers owned by one component.
pub struct Timers<K> {
    armed: HashMap<K, Armed>,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            armed: HashMap::new(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Timers<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.armed.keys()).finish()
    }
}

impl<K> Timers<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` to fire after `delay`, replacing any pending timer
    /// of the same kind. The returned task must be handed to the runtime.
    pub fn schedule<M, F>(&mut self, kind: K, delay: Duration, on_fire: F) -> Task<M>
    where
        M: Send + 'static,
        F: FnOnce(TimerToken) -> M + Send + 'static,
    {
        let token = TimerToken::next();
        let (task, handle) = Task::perform(
            async move {
                tokio::time::sleep(delay).await;
            },
            move |()| on_fire(token),
        )
        .abortable();
        self.insert(kind, token, Some(handle.abort_on_drop()));
        task
    }

    /// Marks `kind` as pending without spawning anything and returns its token.
    #[cfg(test)]
    fn arm(&mut self, kind: K) -> TimerToken {
        let token = TimerToken::next();
        self.insert(kind, token, None);
        token
    }

    fn insert(&mut self, kind: K, token: TimerToken, abort: Option<task::Handle>) {
        // Replacing the entry drops (and aborts) the previous handle.
        self.armed.insert(
            kind,
            Armed {
                token,
                _abort: abort,
            },
        );
    }

    /// Accepts a firing. Returns `true` only if `token` is the pending
    /// scheduling of `kind`, which is then cleared.
    pub fn fire(&mut self, kind: K, token: TimerToken) -> bool {
        match self.armed.get(&kind) {
            Some(armed) if armed.token == token => {
                self.armed.remove(&kind);
                true
            }
            _ => {
                log::trace!("Ignoring stale {kind:?} timer");
                false
            }
        }
    }

    /// Cancels the pending timer of `kind`, if any.
    pub fn cancel(&mut self, kind: K) -> bool {
        self.armed.remove(&kind).is_some()
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&mut self) {
        self.armed.clear();
    }

    #[must_use]
    pub fn is_armed(&self, kind: K) -> bool {
        self.armed.contains_key(&kind)
    }

    /// Token of the pending scheduling of `kind`.
    #[must_use]
    pub fn token(&self, kind: K) -> Option<TimerToken> {
        self.armed.get(&kind).map(|armed| armed.token)
    }
}
