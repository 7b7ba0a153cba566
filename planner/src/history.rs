//! Undo/redo history around the seating plan.
//!
//! `History` keeps three pieces: `past` (oldest first), `present`, and
//! `future` (next redo first). Every edit that changes the plan pushes the old
//! present onto `past` and clears `future`. Edits the reducer reports as
//! no-ops leave all three untouched.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use tracing::debug;

use crate::action::Action;
use crate::doc::SeatingPlan;
use crate::reducer::reduce;

/// Linear undo/redo stack over [`SeatingPlan`] snapshots.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<SeatingPlan>,
    present: SeatingPlan,
    future: VecDeque<SeatingPlan>,
}

impl History {
    /// Start from the empty plan with no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `plan` with no history.
    #[must_use]
    pub fn with_plan(plan: SeatingPlan) -> Self {
        Self { past: Vec::new(), present: plan, future: VecDeque::new() }
    }

    /// Apply an action. Returns `true` if the present plan changed.
    pub fn dispatch(&mut self, action: &Action) -> bool {
        let changed = match action {
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::Reset => {
                self.reset();
                true
            }
            _ => match reduce(&self.present, action) {
                Some(next) => {
                    self.commit(next);
                    true
                }
                None => false,
            },
        };
        debug!(action = action.kind(), changed, past = self.past.len(), future = self.future.len(), "dispatch");
        changed
    }

    /// Step back one edit. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Re-apply the most recently undone edit. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    /// Replace the present with the empty plan. The old present stays undoable.
    pub fn reset(&mut self) {
        self.commit(SeatingPlan::new());
    }

    fn commit(&mut self, next: SeatingPlan) {
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        self.future.clear();
    }

    #[must_use]
    pub fn present(&self) -> &SeatingPlan {
        &self.present
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Snapshots available to undo, oldest first.
    #[must_use]
    pub fn past(&self) -> &[SeatingPlan] {
        &self.past
    }

    /// Snapshots available to redo, next redo first.
    pub fn future(&self) -> impl Iterator<Item = &SeatingPlan> {
        self.future.iter()
    }

    #[must_use]
    pub fn future_len(&self) -> usize {
        self.future.len()
    }
}
