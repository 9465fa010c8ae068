use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use crate::model::{Recipe, RecipeCollection, RecipeId};

use super::subscription::Subscription;
use super::types::{StoreCommand, StoreError};

/// Cloneable handle to the store actor.
///
/// Mutations are queued to the actor and complete once it has applied them,
/// so a returned `Ok(())` means every subscriber can already observe the
/// result.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreCommand>,
    snapshots: Arc<watch::Sender<RecipeCollection>>,
}

impl StoreClient {
    pub(crate) fn new(
        sender: mpsc::Sender<StoreCommand>,
        snapshots: Arc<watch::Sender<RecipeCollection>>,
    ) -> Self {
        Self { sender, snapshots }
    }

    /// Open a new live subscription to the collection.
    pub fn subscribe(&self) -> Subscription {
        Subscription::new(self.snapshots.subscribe())
    }

    /// Insert the recipe, or replace the stored recipe with the same id.
    pub async fn save(&self, recipe: Recipe) -> Result<(), StoreError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(StoreCommand::Save { recipe, respond_to })
            .await
            .map_err(|_| StoreError::Disconnected)?;

        receiver.await.map_err(|_| StoreError::Disconnected)
    }

    /// Remove the recipe with the given id. Unknown ids are ignored.
    pub async fn delete(&self, id: RecipeId) -> Result<(), StoreError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(StoreCommand::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::Disconnected)?;

        receiver.await.map_err(|_| StoreError::Disconnected)
    }

    /// Most recently published collection.
    pub fn snapshot(&self) -> RecipeCollection {
        self.snapshots.borrow().clone()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.snapshots.receiver_count()
    }
}
