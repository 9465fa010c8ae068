use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::model::RecipeCollection;

use super::types::StoreCommand;

/// Actor that exclusively owns the recipe collection.
///
/// Commands are applied one at a time in queue order. After each command that
/// changes the collection, exactly one snapshot is published; commands that
/// leave the value untouched publish nothing.
pub struct StoreServer {
    receiver: mpsc::Receiver<StoreCommand>,
    recipes: RecipeCollection,
    snapshots: Arc<watch::Sender<RecipeCollection>>,
}

impl StoreServer {
    pub(crate) fn new(
        receiver: mpsc::Receiver<StoreCommand>,
        recipes: RecipeCollection,
        snapshots: Arc<watch::Sender<RecipeCollection>>,
    ) -> Self {
        Self {
            receiver,
            recipes,
            snapshots,
        }
    }

    /// Serve commands until every client has been dropped.
    pub async fn run(mut self) {
        tracing::debug!(recipes = self.recipes.len(), "Store started");

        while let Some(command) = self.receiver.recv().await {
            match command {
                StoreCommand::Save { recipe, respond_to } => {
                    let id = recipe.id();
                    let changed = self.recipes.update_or_append(recipe);
                    self.publish(changed);
                    tracing::debug!(%id, changed, "Store: save applied");
                    if respond_to.send(()).is_err() {
                        tracing::trace!("Store: save completion dropped (receiver gone)");
                    }
                }
                StoreCommand::Delete { id, respond_to } => {
                    let changed = self.recipes.remove(id).is_some();
                    self.publish(changed);
                    tracing::debug!(%id, changed, "Store: delete applied");
                    if respond_to.send(()).is_err() {
                        tracing::trace!("Store: delete completion dropped (receiver gone)");
                    }
                }
            }
        }

        tracing::debug!("Store stopped: all clients dropped");
    }

    fn publish(&self, changed: bool) {
        if changed {
            self.snapshots.send_replace(self.recipes.clone());
        }
    }
}
