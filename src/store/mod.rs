//! Single-writer recipe store.
//!
//! The collection is owned by one actor task ([`StoreServer`]) that applies
//! save/delete commands strictly in arrival order. Clients ([`StoreClient`])
//! queue commands and observe the collection through [`Subscription`]s, which
//! are backed by a latest-value broadcast channel.
//!
//! ```text
//! StoreClient ──save/delete──▶ StoreServer ──snapshot──▶ Subscription (×N)
//! ```

mod client;
mod server;
mod subscription;
mod types;

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::model::RecipeCollection;

pub use client::StoreClient;
pub use server::StoreServer;
pub use subscription::Subscription;
pub use types::{StoreCommand, StoreError};

/// Default depth of the command queue.
pub const DEFAULT_COMMAND_BUFFER: usize = 32;

pub struct StoreLayer;

impl StoreLayer {
    /// Build a connected client/server pair seeded with `recipes`.
    ///
    /// `buffer` is clamped to at least one slot.
    pub fn new(recipes: RecipeCollection, buffer: usize) -> (StoreClient, StoreServer) {
        let (sender, receiver) = mpsc::channel(buffer.max(1));
        let snapshots = Arc::new(watch::Sender::new(recipes.clone()));
        (
            StoreClient::new(sender, Arc::clone(&snapshots)),
            StoreServer::new(receiver, recipes, snapshots),
        )
    }

    /// Build the pair and run the server on the current tokio runtime.
    pub fn spawn(recipes: RecipeCollection, buffer: usize) -> (StoreClient, JoinHandle<()>) {
        let (client, server) = Self::new(recipes, buffer);
        (client, tokio::spawn(server.run()))
    }
}
