use std::collections::VecDeque;

/// A bounded stack of owned snapshots.
///
/// When a limit is set and the stack is full, pushing drops the oldest snapshot.
#[derive(Clone, Debug)]
pub struct History<S> {
    snapshots: VecDeque<S>,
    limit: Option<usize>,
}

impl<S> History<S> {
    /// Create an empty history keeping at most `limit` snapshots.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit,
        }
    }

    /// Push a snapshot on top of the stack.
    pub fn push(&mut self, snapshot: S) {
        if let Some(limit) = self.limit {
            while self.snapshots.len() >= limit {
                self.snapshots.pop_front();
            }
        }
        self.snapshots.push_back(snapshot);
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<S> {
        self.snapshots.pop_back()
    }

    /// Number of snapshots in the history.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the history holds no snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
