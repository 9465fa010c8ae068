use thiserror::Error;
use tokio::sync::oneshot;

use crate::model::{Recipe, RecipeId};

/// Errors surfaced by [`StoreClient`](super::StoreClient).
///
/// Catalog operations themselves are total; the only failure is talking to a
/// store whose actor task has already stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("recipe store is no longer running")]
    Disconnected,
}

/// Mutation requests served by the store actor, in arrival order.
#[derive(Debug)]
pub enum StoreCommand {
    Save {
        recipe: Recipe,
        respond_to: oneshot::Sender<()>,
    },
    Delete {
        id: RecipeId,
        respond_to: oneshot::Sender<()>,
    },
}
