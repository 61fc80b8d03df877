//! Delayed task scheduler
//!
//! Holds tasks keyed by an absolute deadline in host milliseconds. The
//! owner drives it by asking for due tasks each frame; tasks come back in
//! deadline order, ties broken by scheduling order.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    pub struct TaskId;
}

struct ScheduledTask<T> {
    due_ms: f64,
    seq: u64,
    task: T,
}

/// Deadline-ordered scheduler of pending tasks
pub struct TaskScheduler<T> {
    tasks: SlotMap<TaskId, ScheduledTask<T>>,
    next_seq: u64,
}

impl<T> TaskScheduler<T> {
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            next_seq: 0,
        }
    }

    /// Schedule a task at an absolute deadline
    pub fn schedule_at(&mut self, due_ms: f64, task: T) -> TaskId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.insert(ScheduledTask { due_ms, seq, task })
    }

    /// Schedule a task `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, task: T) -> TaskId {
        self.schedule_at(now_ms + delay_ms.max(0.0), task)
    }

    /// Cancel a pending task, returning it if it had not run yet
    pub fn cancel(&mut self, id: TaskId) -> Option<T> {
        self.tasks.remove(id).map(|t| t.task)
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<f64> {
        self.tasks
            .values()
            .map(|t| t.due_ms)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Remove and return every task due at or before `now_ms`, in order
    pub fn take_due(&mut self, now_ms: f64) -> SmallVec<[(TaskId, T); 4]> {
        let mut due: SmallVec<[(TaskId, f64, u64); 4]> = self
            .tasks
            .iter()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .map(|(id, t)| (id, t.due_ms, t.seq))
            .collect();
        due.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.2.cmp(&b.2)));

        let taken: SmallVec<[(TaskId, T); 4]> = due
            .into_iter()
            .filter_map(|(id, _, _)| self.tasks.remove(id).map(|t| (id, t.task)))
            .collect();
        if !taken.is_empty() {
            tracing::trace!(
                "t={:.1}ms: {} task(s) due, {} pending",
                now_ms,
                taken.len(),
                self.tasks.len()
            );
        }
        taken
    }
}

impl<T> Default for TaskScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for TaskScheduler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("pending", &self.tasks.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}
