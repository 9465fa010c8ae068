//! Effect runtime for the catalog machine.
//!
//! All transitions of one [`CatalogState`] happen on a single task, one intent
//! at a time. Effects returned by the reducer are spawned as tokio tasks that
//! report back by sending further intents into the same queue.
//!
//! ```text
//! RuntimeHandle ──intent──▶ Runtime ──reduce──▶ CatalogState ──watch──▶ observers
//!                             ▲  │
//!                  follow-up  │  └──effect──▶ task ──▶ StoreClient
//!                             └──────────────────┘
//! ```

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::shutdown::ShutdownHandle;
use crate::store::{StoreClient, Subscription};
use crate::ui::catalog::{CatalogEffect, CatalogIntent, CatalogReducer, CatalogState, ListTag};
use crate::ui::mvi::{PresentationIntent, Reducer, Update};
use crate::ui::new_recipe::NewRecipeEffect;
use crate::ui::recipe_list::{DestinationEffect, RecipeListEffect, RecipeListIntent};

/// Default depth of the intent queue.
pub const DEFAULT_INTENT_BUFFER: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("catalog runtime is no longer running")]
    Closed,
    #[error("timed out after {0:?} waiting for catalog state")]
    Timeout(Duration),
}

/// Cloneable front end for sending intents and observing state.
#[derive(Clone)]
pub struct RuntimeHandle {
    sender: mpsc::Sender<CatalogIntent>,
    state: watch::Receiver<CatalogState>,
    shutdown: ShutdownHandle,
}

impl RuntimeHandle {
    /// Queue an intent. Resolves once the runtime has accepted it, not once
    /// its effects have finished.
    pub async fn send(&self, intent: CatalogIntent) -> Result<(), RuntimeError> {
        self.sender
            .send(intent)
            .await
            .map_err(|_| RuntimeError::Closed)
    }

    /// Queue an intent for a single list.
    pub async fn send_list(
        &self,
        tag: ListTag,
        intent: RecipeListIntent,
    ) -> Result<(), RuntimeError> {
        self.send(CatalogIntent::List(tag, intent)).await
    }

    /// Latest published state.
    pub fn state(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    /// Independent receiver that is notified on every state change.
    pub fn subscribe_state(&self) -> watch::Receiver<CatalogState> {
        self.state.clone()
    }

    /// Wait until the published state satisfies `predicate`.
    pub async fn wait_for(
        &self,
        timeout: Duration,
        predicate: impl FnMut(&CatalogState) -> bool,
    ) -> Result<CatalogState, RuntimeError> {
        let mut receiver = self.state.clone();
        let result = match tokio::time::timeout(timeout, receiver.wait_for(predicate)).await {
            Ok(Ok(state)) => Ok(state.clone()),
            Ok(Err(_)) => Err(RuntimeError::Closed),
            Err(_) => Err(RuntimeError::Timeout(timeout)),
        };
        result
    }

    /// Ask the runtime to stop and cancel its subscriptions.
    pub fn shutdown(&self) {
        self.shutdown.signal();
    }
}

/// Owner of the catalog state and of all in-flight effects.
pub struct Runtime {
    state: CatalogState,
    receiver: mpsc::Receiver<CatalogIntent>,
    feedback: mpsc::WeakSender<CatalogIntent>,
    published: watch::Sender<CatalogState>,
    store: StoreClient,
    subscriptions: HashMap<ListTag, JoinHandle<()>>,
    shutdown: ShutdownHandle,
}

impl Runtime {
    pub fn new(
        state: CatalogState,
        store: StoreClient,
        intent_buffer: usize,
        shutdown: ShutdownHandle,
    ) -> (RuntimeHandle, Runtime) {
        let (sender, receiver) = mpsc::channel(intent_buffer.max(1));
        let (published, observed) = watch::channel(state.clone());
        let handle = RuntimeHandle {
            sender: sender.clone(),
            state: observed,
            shutdown: shutdown.clone(),
        };
        let runtime = Runtime {
            state,
            receiver,
            feedback: sender.downgrade(),
            published,
            store,
            subscriptions: HashMap::new(),
            shutdown,
        };
        (handle, runtime)
    }

    /// Process intents until shutdown is signalled or every sender is gone.
    ///
    /// Store subscriptions are cancelled on the way out. Save and delete
    /// tasks already in flight are left to finish.
    pub async fn run(mut self) -> CatalogState {
        tracing::debug!("Catalog runtime started");
        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.wait() => break,
                intent = self.receiver.recv() => match intent {
                    Some(intent) => self.dispatch(intent),
                    None => break,
                },
            }
        }

        for (tag, task) in self.subscriptions.drain() {
            tracing::debug!(list = %tag, "Cancelling store subscription");
            task.abort();
        }
        tracing::debug!("Catalog runtime stopped");
        self.state
    }

    fn dispatch(&mut self, intent: CatalogIntent) {
        tracing::trace!(?intent, "Dispatching intent");
        let Update { state, effects } =
            CatalogReducer::reduce(std::mem::take(&mut self.state), intent);
        self.state = state;

        let next = &self.state;
        self.published.send_if_modified(|current| {
            if current == next {
                return false;
            }
            *current = next.clone();
            true
        });

        for effect in effects {
            self.execute(effect);
        }
    }

    fn execute(&mut self, effect: CatalogEffect) {
        let CatalogEffect::List(tag, effect) = effect;
        tracing::debug!(list = %tag, ?effect, "Executing effect");

        match effect {
            RecipeListEffect::Subscribe => {
                let Some(feedback) = self.feedback() else {
                    tracing::debug!(list = %tag, "Runtime queue closed; not subscribing");
                    return;
                };
                let task = tokio::spawn(forward_snapshots(tag, self.store.subscribe(), feedback));
                if let Some(previous) = self.subscriptions.insert(tag, task) {
                    previous.abort();
                }
            }
            RecipeListEffect::Unsubscribe => {
                if let Some(task) = self.subscriptions.remove(&tag) {
                    task.abort();
                }
            }
            RecipeListEffect::Delete { id, clear_details } => {
                let feedback = self.feedback();
                let store = self.store.clone();
                tokio::spawn(async move {
                    if let Err(err) = store.delete(id).await {
                        tracing::warn!(list = %tag, %id, error = %err, "Delete failed");
                        return;
                    }
                    if clear_details {
                        let intent = RecipeListIntent::ShowDetails(None);
                        send_feedback(feedback, CatalogIntent::List(tag, intent)).await;
                    }
                });
            }
            RecipeListEffect::Destination(DestinationEffect::NewRecipe(effect)) => {
                let feedback = self.feedback();
                tokio::spawn(run_form_effect(tag, effect, self.store.clone(), feedback));
            }
        }
    }

    /// Sender for follow-up intents. `None` once every handle is gone; store
    /// work still runs, only the follow-up is skipped.
    fn feedback(&self) -> Option<mpsc::Sender<CatalogIntent>> {
        self.feedback.upgrade()
    }
}

async fn forward_snapshots(
    tag: ListTag,
    mut subscription: Subscription,
    feedback: mpsc::Sender<CatalogIntent>,
) {
    while let Some(recipes) = subscription.next().await {
        tracing::trace!(list = %tag, recipes = recipes.len(), "Snapshot received");
        let intent = CatalogIntent::List(tag, RecipeListIntent::SetRecipes(recipes));
        if feedback.send(intent).await.is_err() {
            break;
        }
    }
}

async fn run_form_effect(
    tag: ListTag,
    effect: NewRecipeEffect,
    store: StoreClient,
    feedback: Option<mpsc::Sender<CatalogIntent>>,
) {
    if let NewRecipeEffect::SaveAndDismiss(recipe) = effect {
        let id = recipe.id();
        if let Err(err) = store.save(recipe).await {
            tracing::warn!(list = %tag, %id, error = %err, "Save failed");
            return;
        }
    }
    // The form closes only after the store has the new recipe.
    let dismiss = RecipeListIntent::Destination(PresentationIntent::Dismiss);
    send_feedback(feedback, CatalogIntent::List(tag, dismiss)).await;
}

async fn send_feedback(feedback: Option<mpsc::Sender<CatalogIntent>>, intent: CatalogIntent) {
    let Some(feedback) = feedback else {
        tracing::debug!(?intent, "Runtime queue closed; follow-up intent dropped");
        return;
    };
    if feedback.send(intent).await.is_err() {
        tracing::trace!("Runtime gone; follow-up intent dropped");
    }
}
