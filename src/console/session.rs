use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::model::RecipeId;
use crate::store::StoreClient;
use crate::ui::catalog::{CatalogIntent, CatalogState, ListTag};
use crate::ui::mvi::PresentationIntent;
use crate::ui::new_recipe::{NewRecipeIntent, NewRecipeState};
use crate::ui::recipe_list::{Destination, DestinationIntent, RecipeListIntent, RecipeListState};
use crate::ui::runtime::{RuntimeError, RuntimeHandle};

use super::command::{Command, HELP};
use super::render::render;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Line-oriented stand-in for the graphical views.
///
/// Every command becomes one or more intents. Commands whose outcome depends
/// on an effect wait, up to `settle_timeout`, for that outcome to show up in
/// the published state before the view is printed again.
pub struct Console<W> {
    handle: RuntimeHandle,
    store: StoreClient,
    out: W,
    settle_timeout: Duration,
}

impl<W: AsyncWrite + Unpin> Console<W> {
    pub fn new(
        handle: RuntimeHandle,
        store: StoreClient,
        out: W,
        settle_timeout: Duration,
    ) -> Self {
        Self {
            handle,
            store,
            out,
            settle_timeout,
        }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands until `quit` or end of input.
    ///
    /// The focused list is started first, mirroring a view that appears on
    /// launch, and stopped again on the way out.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<(), ConsoleError> {
        if let Some(tag) = self.handle.state().destination_tag {
            self.handle.send_list(tag, RecipeListIntent::Start).await?;
            self.settle(tag, |_| true).await?;
        }
        self.print_view().await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    self.print(&format!("error: {}\n", err)).await?;
                    continue;
                }
            };
            tracing::debug!(?command, "Console command");
            if command == Command::Quit {
                break;
            }
            self.execute(command).await?;
        }

        if let Some(tag) = self.handle.state().destination_tag {
            self.handle.send_list(tag, RecipeListIntent::Stop).await?;
        }
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> Result<(), ConsoleError> {
        match command {
            Command::Help => return self.print(&format!("{}\n", HELP)).await,
            Command::List | Command::Quit => {}
            Command::Focus(tag) => self.focus(tag).await?,
            other => {
                let state = self.handle.state();
                let Some(tag) = state.destination_tag else {
                    return self.print("error: no list selected\n").await;
                };
                if let Err(message) = self.list_command(tag, state.list(tag), other).await? {
                    return self.print(&format!("error: {}\n", message)).await;
                }
            }
        }
        self.print_view().await
    }

    async fn focus(&mut self, tag: Option<ListTag>) -> Result<(), ConsoleError> {
        let previous = self.handle.state().destination_tag;
        if previous == tag {
            return Ok(());
        }
        self.handle.send(CatalogIntent::SetDestination(tag)).await?;
        if let Some(previous) = previous {
            self.handle.send_list(previous, RecipeListIntent::Stop).await?;
        }
        if let Some(tag) = tag {
            self.handle.send_list(tag, RecipeListIntent::Start).await?;
        }

        let store = self.store.clone();
        self.wait_until(move |state| {
            state.destination_tag == tag
                && tag.map_or(true, |tag| state.list(tag).recipes == store.snapshot())
        })
        .await
    }

    /// Commands addressed to the focused list. The inner `Err` is a user
    /// mistake to report, not a failure.
    async fn list_command(
        &mut self,
        tag: ListTag,
        list: &RecipeListState,
        command: Command,
    ) -> Result<Result<(), String>, ConsoleError> {
        match command {
            Command::Show(row) => {
                let id = match row.map(|row| recipe_at(list, row)).transpose() {
                    Ok(id) => id,
                    Err(message) => return Ok(Err(message)),
                };
                self.handle
                    .send_list(tag, RecipeListIntent::ShowDetails(id))
                    .await?;
                self.settle(tag, move |list| list.selected_id() == id).await?;
            }
            Command::Delete(row) => {
                let id = match recipe_at(list, row) {
                    Ok(id) => id,
                    Err(message) => return Ok(Err(message)),
                };
                self.handle.send_list(tag, RecipeListIntent::Delete(id)).await?;
                self.settle(tag, move |list| {
                    !list.recipes.contains(id) && list.selected_id() != Some(id)
                })
                .await?;
            }
            Command::New => {
                self.handle
                    .send_list(tag, RecipeListIntent::NewRecipeTapped)
                    .await?;
                // Tapping again resets an open sheet, so wait for the fresh form.
                let fresh = Some(Destination::NewRecipe(NewRecipeState::default()));
                self.settle(tag, move |list| list.destination == fresh).await?;
            }
            Command::Name(name) => {
                if list.destination.is_none() {
                    return Ok(Err("no new recipe sheet is open".to_string()));
                }
                let expected = name.clone();
                self.send_form(tag, NewRecipeIntent::SetName(name)).await?;
                self.settle(tag, move |list| match &list.destination {
                    Some(Destination::NewRecipe(form)) => form.name == expected,
                    None => false,
                })
                .await?;
            }
            Command::Save => {
                let Some(Destination::NewRecipe(form)) = &list.destination else {
                    return Ok(Err("no new recipe sheet is open".to_string()));
                };
                if !form.can_save() {
                    return Ok(Err("name must not be empty".to_string()));
                }
                self.send_form(tag, NewRecipeIntent::SaveTapped).await?;
                self.settle(tag, |list| list.destination.is_none()).await?;
            }
            Command::Cancel => {
                if list.destination.is_none() {
                    return Ok(Err("no new recipe sheet is open".to_string()));
                }
                self.send_form(tag, NewRecipeIntent::CancelTapped).await?;
                self.settle(tag, |list| list.destination.is_none()).await?;
            }
            Command::Focus(_) | Command::List | Command::Help | Command::Quit => {}
        }
        Ok(Ok(()))
    }

    async fn send_form(&self, tag: ListTag, intent: NewRecipeIntent) -> Result<(), RuntimeError> {
        let intent = PresentationIntent::Presented(DestinationIntent::NewRecipe(intent));
        self.handle
            .send_list(tag, RecipeListIntent::Destination(intent))
            .await
    }

    /// Wait until list `tag` mirrors the store and satisfies `done`.
    async fn settle(
        &self,
        tag: ListTag,
        mut done: impl FnMut(&RecipeListState) -> bool,
    ) -> Result<(), ConsoleError> {
        let store = self.store.clone();
        self.wait_until(move |state| {
            let list = state.list(tag);
            list.recipes == store.snapshot() && done(list)
        })
        .await
    }

    /// Wait for the published state to satisfy `predicate`.
    ///
    /// A timeout is not fatal: the view is printed as it stands.
    async fn wait_until(
        &self,
        predicate: impl FnMut(&CatalogState) -> bool,
    ) -> Result<(), ConsoleError> {
        match self.handle.wait_for(self.settle_timeout, predicate).await {
            Ok(_) => Ok(()),
            Err(RuntimeError::Timeout(after)) => {
                tracing::warn!(?after, "Console gave up waiting for state");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn print_view(&mut self) -> Result<(), ConsoleError> {
        let view = render(&self.handle.state());
        self.print(&view).await
    }

    async fn print(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}

fn recipe_at(list: &RecipeListState, row: usize) -> Result<RecipeId, String> {
    row.checked_sub(1)
        .and_then(|index| list.recipes.at(index))
        .map(|recipe| recipe.id())
        .ok_or_else(|| format!("no recipe at row {}", row))
}
