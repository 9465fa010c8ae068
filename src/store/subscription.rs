use tokio::sync::watch;

use crate::model::RecipeCollection;

/// Live view of the store's collection.
///
/// The first call to [`next`](Subscription::next) yields the current
/// collection immediately. Every later call waits for the next change and
/// yields the newest snapshot; a subscriber that falls behind skips straight
/// to the latest value instead of draining a backlog.
///
/// Dropping the subscription releases its slot in the broadcaster.
#[derive(Debug)]
pub struct Subscription {
    receiver: watch::Receiver<RecipeCollection>,
    primed: bool,
}

impl Subscription {
    pub(crate) fn new(receiver: watch::Receiver<RecipeCollection>) -> Self {
        Self {
            receiver,
            primed: false,
        }
    }

    /// Wait for the next snapshot.
    ///
    /// Returns `None` once the store has shut down and no snapshot is pending.
    pub async fn next(&mut self) -> Option<RecipeCollection> {
        if !self.primed {
            self.primed = true;
            return Some(self.receiver.borrow_and_update().clone());
        }
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
