use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::ui::mvi::UiState;
use crate::ui::recipe_list::RecipeListState;

/// Addresses one of the three lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListTag {
    A,
    B,
    C,
}

impl ListTag {
    pub const ALL: [ListTag; 3] = [ListTag::A, ListTag::B, ListTag::C];

    /// Sidebar title.
    pub fn display_name(self) -> &'static str {
        match self {
            ListTag::A => "Recipes A",
            ListTag::B => "Recipes B",
            ListTag::C => "Recipes C",
        }
    }

    /// Short key used on the console.
    pub fn key(self) -> &'static str {
        match self {
            ListTag::A => "a",
            ListTag::B => "b",
            ListTag::C => "c",
        }
    }
}

impl fmt::Display for ListTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown list '{0}' (expected a, b or c)")]
pub struct ParseListTagError(pub String);

impl FromStr for ListTag {
    type Err = ParseListTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListTag::ALL
            .into_iter()
            .find(|tag| tag.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseListTagError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub list_a: RecipeListState,
    pub list_b: RecipeListState,
    pub list_c: RecipeListState,
    /// Which list the sidebar has selected, if any.
    pub destination_tag: Option<ListTag>,
}

impl UiState for CatalogState {}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(["A", "B", "C"])
    }
}

impl CatalogState {
    /// Build the three lists with the given labels, focused on the first.
    pub fn new<S: Into<String>>(labels: [S; 3]) -> Self {
        let [a, b, c] = labels;
        Self {
            list_a: RecipeListState::new(a),
            list_b: RecipeListState::new(b),
            list_c: RecipeListState::new(c),
            destination_tag: Some(ListTag::A),
        }
    }

    pub fn list(&self, tag: ListTag) -> &RecipeListState {
        match tag {
            ListTag::A => &self.list_a,
            ListTag::B => &self.list_b,
            ListTag::C => &self.list_c,
        }
    }

    pub fn list_mut(&mut self, tag: ListTag) -> &mut RecipeListState {
        match tag {
            ListTag::A => &mut self.list_a,
            ListTag::B => &mut self.list_b,
            ListTag::C => &mut self.list_c,
        }
    }

    /// The list currently selected in the sidebar.
    pub fn focused(&self) -> Option<&RecipeListState> {
        self.destination_tag.map(|tag| self.list(tag))
    }
}
