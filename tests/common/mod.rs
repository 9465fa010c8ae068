//! Shared test utilities: a running store and catalog runtime.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::time::Duration;

use recipe_catalog::model::{Recipe, RecipeCollection, RecipeId};
use recipe_catalog::shutdown::ShutdownCoordinator;
use recipe_catalog::store::{StoreClient, StoreLayer, DEFAULT_COMMAND_BUFFER};
use recipe_catalog::ui::catalog::{CatalogState, ListTag};
use recipe_catalog::ui::recipe_list::{RecipeListIntent, RecipeListState};
use recipe_catalog::ui::runtime::{Runtime, RuntimeHandle, DEFAULT_INTENT_BUFFER};
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// Upper bound for any single wait in these tests.
pub const SETTLE: Duration = Duration::from_secs(2);

pub struct Catalog {
    pub store: StoreClient,
    pub handle: RuntimeHandle,
    pub seed: Vec<Recipe>,
    coordinator: ShutdownCoordinator,
    runtime: JoinHandle<CatalogState>,
}

/// Spawn a store seeded with `names` and a runtime over the default catalog.
pub fn spawn_catalog(names: &[&str]) -> Catalog {
    spawn_catalog_with(names, |_, _| {})
}

/// Like [`spawn_catalog`], but lets `prepare` edit the initial catalog state
/// (given the seed recipes) before the runtime starts.
pub fn spawn_catalog_with(
    names: &[&str],
    prepare: impl FnOnce(&mut CatalogState, &[Recipe]),
) -> Catalog {
    let seed: Vec<Recipe> = names.iter().map(|name| Recipe::named(*name)).collect();
    let recipes: RecipeCollection = seed.iter().cloned().collect();
    let mut state = CatalogState::default();
    prepare(&mut state, &seed);

    let coordinator = ShutdownCoordinator::new();
    let (store, _store_task) = StoreLayer::spawn(recipes, DEFAULT_COMMAND_BUFFER);
    let (handle, runtime) = Runtime::new(
        state,
        store.clone(),
        DEFAULT_INTENT_BUFFER,
        coordinator.handle(),
    );
    let runtime = tokio::spawn(runtime.run());

    Catalog {
        store,
        handle,
        seed,
        coordinator,
        runtime,
    }
}

impl Catalog {
    pub fn id(&self, index: usize) -> RecipeId {
        self.seed[index].id()
    }

    pub async fn send(&self, tag: ListTag, intent: RecipeListIntent) {
        self.handle.send_list(tag, intent).await.expect("runtime running");
    }

    /// Start `tag` and wait until it mirrors the store.
    pub async fn start(&self, tag: ListTag) {
        self.send(tag, RecipeListIntent::Start).await;
        self.wait_list(tag, |_| true).await;
    }

    /// Wait until list `tag` mirrors the store and satisfies `done`.
    pub async fn wait_list(
        &self,
        tag: ListTag,
        mut done: impl FnMut(&RecipeListState) -> bool,
    ) -> RecipeListState {
        let store = self.store.clone();
        let state = self
            .handle
            .wait_for(SETTLE, move |state| {
                let list = state.list(tag);
                list.recipes == store.snapshot() && done(list)
            })
            .await
            .expect("list should settle");
        state.list(tag).clone()
    }

    /// Stop the runtime and return its final state.
    pub async fn shutdown(self) -> (CatalogState, StoreClient) {
        self.coordinator.signal();
        let state = self.runtime.await.expect("runtime task");
        (state, self.store)
    }
}

/// Poll `check` until it holds or `SETTLE` elapses.
pub async fn eventually(mut check: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + SETTLE;
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    check()
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
