//! End-to-end flows through the runtime, the reducers and the store.

mod common;

use std::time::Duration;

use common::{eventually, spawn_catalog, spawn_catalog_with};
use recipe_catalog::model::{Recipe, RecipeCollection};
use recipe_catalog::shutdown::ShutdownCoordinator;
use recipe_catalog::store::{StoreLayer, DEFAULT_COMMAND_BUFFER};
use recipe_catalog::ui::catalog::{CatalogIntent, CatalogState, ListTag};
use recipe_catalog::ui::mvi::PresentationIntent;
use recipe_catalog::ui::new_recipe::NewRecipeIntent;
use recipe_catalog::ui::recipe_list::{Destination, DestinationIntent, RecipeListIntent};
use recipe_catalog::ui::runtime::{Runtime, DEFAULT_INTENT_BUFFER};

const SEED: [&str; 3] = ["Model A", "Model B", "Model C"];

fn form(intent: NewRecipeIntent) -> RecipeListIntent {
    RecipeListIntent::Destination(PresentationIntent::Presented(DestinationIntent::NewRecipe(
        intent,
    )))
}

#[tokio::test]
async fn start_loads_store_snapshot() {
    let catalog = spawn_catalog(&SEED);
    catalog.start(ListTag::A).await;

    let list = catalog.handle.state().list(ListTag::A).clone();
    let names: Vec<&str> = list.recipes.iter().map(|r| r.name()).collect();
    assert_eq!(names, SEED);
}

#[tokio::test]
async fn deleting_shown_recipe_closes_details() {
    let catalog = spawn_catalog(&SEED);
    let b = catalog.id(1);
    catalog.start(ListTag::A).await;

    catalog.send(ListTag::A, RecipeListIntent::ShowDetails(Some(b))).await;
    catalog.wait_list(ListTag::A, |list| list.selected_id() == Some(b)).await;

    catalog.send(ListTag::A, RecipeListIntent::Delete(b)).await;
    let list = catalog
        .wait_list(ListTag::A, |list| !list.recipes.contains(b))
        .await;

    assert!(list.details.is_none());
    assert_eq!(list.recipes.ids(), vec![catalog.id(0), catalog.id(2)]);
    assert!(!catalog.store.snapshot().contains(b));
}

#[tokio::test]
async fn deleting_other_recipe_keeps_details() {
    let catalog = spawn_catalog(&SEED);
    let (a, c) = (catalog.id(0), catalog.id(2));
    catalog.start(ListTag::A).await;

    catalog.send(ListTag::A, RecipeListIntent::ShowDetails(Some(a))).await;
    catalog.send(ListTag::A, RecipeListIntent::Delete(c)).await;
    let list = catalog
        .wait_list(ListTag::A, |list| !list.recipes.contains(c))
        .await;

    assert_eq!(list.selected_id(), Some(a));
}

#[tokio::test]
async fn saving_new_recipe_appends_once_and_dismisses() {
    let catalog = spawn_catalog(&SEED);
    catalog.start(ListTag::A).await;

    catalog.send(ListTag::A, RecipeListIntent::NewRecipeTapped).await;
    catalog.send(ListTag::A, form(NewRecipeIntent::SetName("New".into()))).await;
    catalog.send(ListTag::A, form(NewRecipeIntent::SaveTapped)).await;

    let list = catalog
        .wait_list(ListTag::A, |list| {
            list.destination.is_none() && list.recipes.len() == 4
        })
        .await;

    let added: Vec<_> = list.recipes.iter().filter(|r| r.name() == "New").collect();
    assert_eq!(added.len(), 1);
    assert_eq!(list.recipes.at(3).map(|r| r.name()), Some("New"));
    assert_eq!(catalog.store.snapshot(), list.recipes);
}

#[tokio::test]
async fn empty_name_does_not_save_or_dismiss() {
    let catalog = spawn_catalog(&SEED);
    let a = catalog.id(0);
    catalog.start(ListTag::A).await;

    catalog.send(ListTag::A, RecipeListIntent::NewRecipeTapped).await;
    catalog.send(ListTag::A, form(NewRecipeIntent::SetName(String::new()))).await;
    catalog.send(ListTag::A, form(NewRecipeIntent::SaveTapped)).await;
    // Intents are handled in order, so once this one shows up the save tap
    // has been reduced too.
    catalog.send(ListTag::A, RecipeListIntent::ShowDetails(Some(a))).await;
    let list = catalog
        .wait_list(ListTag::A, |list| list.selected_id() == Some(a))
        .await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(matches!(list.destination, Some(Destination::NewRecipe(_))));
    assert_eq!(catalog.store.snapshot().len(), 3);
    assert!(catalog.handle.state().list(ListTag::A).destination.is_some());
}

#[tokio::test]
async fn name_is_saved_as_typed() {
    let catalog = spawn_catalog(&SEED);
    catalog.start(ListTag::A).await;

    catalog.send(ListTag::A, RecipeListIntent::NewRecipeTapped).await;
    catalog.send(ListTag::A, form(NewRecipeIntent::SetName(" Stew ".into()))).await;
    catalog.send(ListTag::A, form(NewRecipeIntent::SaveTapped)).await;

    let list = catalog
        .wait_list(ListTag::A, |list| {
            list.destination.is_none() && list.recipes.len() == 4
        })
        .await;
    assert_eq!(list.recipes.at(3).map(|r| r.name()), Some(" Stew "));
}

#[tokio::test]
async fn cancel_dismisses_without_saving() {
    let catalog = spawn_catalog(&SEED);
    catalog.start(ListTag::A).await;

    catalog.send(ListTag::A, RecipeListIntent::NewRecipeTapped).await;
    catalog.send(ListTag::A, form(NewRecipeIntent::SetName("Draft".into()))).await;
    catalog.send(ListTag::A, form(NewRecipeIntent::CancelTapped)).await;

    let list = catalog
        .wait_list(ListTag::A, |list| list.destination.is_none())
        .await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(list.recipes.len(), 3);
    assert_eq!(catalog.store.snapshot().len(), 3);
}

#[tokio::test]
async fn lists_keep_their_own_presentation_state() {
    let catalog = spawn_catalog(&SEED);
    let a = catalog.id(0);
    catalog.start(ListTag::A).await;
    catalog.start(ListTag::B).await;

    catalog.send(ListTag::A, RecipeListIntent::ShowDetails(Some(a))).await;
    catalog.send(ListTag::B, RecipeListIntent::NewRecipeTapped).await;
    let state = catalog
        .handle
        .wait_for(common::SETTLE, |state| {
            state.list(ListTag::A).details.is_some()
                && state.list(ListTag::B).destination.is_some()
        })
        .await
        .expect("both lists updated");

    assert!(state.list(ListTag::A).destination.is_none());
    assert!(state.list(ListTag::B).details.is_none());
    assert!(state.list(ListTag::C).recipes.is_empty(), "C was never started");
}

#[tokio::test]
async fn mutation_from_one_list_reaches_every_started_list() {
    let catalog = spawn_catalog(&SEED);
    let a = catalog.id(0);
    for tag in ListTag::ALL {
        catalog.start(tag).await;
    }

    catalog.send(ListTag::B, RecipeListIntent::Delete(a)).await;

    let state = catalog
        .handle
        .wait_for(common::SETTLE, |state| {
            ListTag::ALL
                .iter()
                .all(|tag| !state.list(*tag).recipes.contains(a))
        })
        .await
        .expect("all lists observe the delete");
    for tag in ListTag::ALL {
        assert_eq!(state.list(tag).recipes, catalog.store.snapshot());
    }
}

#[tokio::test]
async fn stop_releases_store_subscription() {
    let catalog = spawn_catalog(&SEED);
    catalog.start(ListTag::A).await;
    assert_eq!(catalog.store.subscriber_count(), 1);

    catalog.send(ListTag::A, RecipeListIntent::Stop).await;
    assert!(eventually(|| catalog.store.subscriber_count() == 0).await);
}

#[tokio::test]
async fn repeated_start_keeps_a_single_subscription() {
    let catalog = spawn_catalog(&SEED);
    catalog.send(ListTag::A, RecipeListIntent::Start).await;
    catalog.send(ListTag::A, RecipeListIntent::Start).await;
    catalog
        .handle
        .send(CatalogIntent::SetDestination(None))
        .await
        .expect("runtime running");
    catalog
        .handle
        .wait_for(common::SETTLE, |state| state.destination_tag.is_none())
        .await
        .expect("probe reduced");

    assert!(eventually(|| catalog.store.subscriber_count() == 1).await);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(catalog.store.subscriber_count(), 1);
}

#[tokio::test]
async fn shutdown_cancels_subscriptions() {
    let catalog = spawn_catalog(&SEED);
    catalog.start(ListTag::A).await;
    catalog.start(ListTag::C).await;
    assert_eq!(catalog.store.subscriber_count(), 2);

    let (state, store) = catalog.shutdown().await;
    assert_eq!(state.list(ListTag::A).recipes.len(), 3);
    assert!(eventually(|| store.subscriber_count() == 0).await);
}

#[tokio::test]
async fn handle_reports_closed_after_shutdown() {
    let catalog = spawn_catalog(&SEED);
    let handle = catalog.handle.clone();
    catalog.shutdown().await;

    let result = handle.send_list(ListTag::A, RecipeListIntent::Start).await;
    assert_eq!(result, Err(recipe_catalog::ui::runtime::RuntimeError::Closed));
}

#[tokio::test]
async fn delete_clears_details_once_store_confirms() {
    // List A is never started, so no snapshot can re-derive its details; only
    // the follow-up sent after the delete can close the pane.
    let catalog = spawn_catalog_with(&SEED, |state, seed| {
        state.list_a.recipes = seed.iter().cloned().collect();
        state.list_a.details = state.list_a.details_for(seed[1].id());
    });
    let b = catalog.id(1);
    assert_eq!(catalog.handle.state().list(ListTag::A).selected_id(), Some(b));

    catalog.send(ListTag::A, RecipeListIntent::Delete(b)).await;
    let state = catalog
        .handle
        .wait_for(common::SETTLE, |state| state.list(ListTag::A).details.is_none())
        .await
        .expect("details closed");

    assert!(!catalog.store.snapshot().contains(b));
    assert!(
        state.list(ListTag::A).recipes.contains(b),
        "list was not following the store"
    );
    assert_eq!(catalog.store.subscriber_count(), 0);
}

#[tokio::test]
async fn accepted_delete_runs_after_handles_are_gone() {
    let seed: RecipeCollection = SEED.into_iter().map(Recipe::named).collect();
    let a = seed.ids()[0];
    let (store, _store_task) = StoreLayer::spawn(seed, DEFAULT_COMMAND_BUFFER);
    let coordinator = ShutdownCoordinator::new();
    let (handle, runtime) = Runtime::new(
        CatalogState::default(),
        store.clone(),
        DEFAULT_INTENT_BUFFER,
        coordinator.handle(),
    );

    handle
        .send_list(ListTag::A, RecipeListIntent::Delete(a))
        .await
        .expect("accepted");
    drop(handle);
    runtime.run().await;

    assert!(eventually(|| !store.snapshot().contains(a)).await);
}

#[tokio::test]
async fn accepted_save_runs_after_handles_are_gone() {
    let (store, _store_task) =
        StoreLayer::spawn(RecipeCollection::new(), DEFAULT_COMMAND_BUFFER);
    let coordinator = ShutdownCoordinator::new();
    let (handle, runtime) = Runtime::new(
        CatalogState::default(),
        store.clone(),
        DEFAULT_INTENT_BUFFER,
        coordinator.handle(),
    );

    for intent in [
        RecipeListIntent::NewRecipeTapped,
        form(NewRecipeIntent::SetName("New".into())),
        form(NewRecipeIntent::SaveTapped),
    ] {
        handle.send_list(ListTag::A, intent).await.expect("accepted");
    }
    drop(handle);
    let state = runtime.run().await;

    // No handle is left to carry the dismiss back, so the sheet stays open.
    assert!(state.list(ListTag::A).destination.is_some());
    assert!(eventually(|| store.snapshot().len() == 1).await);
    assert_eq!(store.snapshot().at(0).map(|r| r.name()), Some("New"));
}
