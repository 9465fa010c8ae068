//! Plain-text master/detail view of the catalog.

use crate::ui::catalog::{CatalogState, ListTag};
use crate::ui::recipe_list::Destination;

/// Render the sidebar, the focused list, its detail pane and any open sheet.
pub fn render(state: &CatalogState) -> String {
    let mut out = String::new();

    let sidebar: Vec<String> = ListTag::ALL
        .iter()
        .map(|tag| {
            if state.destination_tag == Some(*tag) {
                format!("[{}]", tag.display_name())
            } else {
                format!(" {} ", tag.display_name())
            }
        })
        .collect();
    out.push_str(&sidebar.join(" "));
    out.push('\n');

    let Some(list) = state.focused() else {
        out.push_str("(no list selected)\n");
        return out;
    };

    out.push_str(&format!("-- {} --\n", list.name));
    if list.recipes.is_empty() {
        out.push_str("   (empty)\n");
    }
    let selected = list.selected_id();
    for (index, recipe) in list.recipes.iter().enumerate() {
        let marker = if selected == Some(recipe.id()) { '>' } else { ' ' };
        out.push_str(&format!(" {} {}. {}\n", marker, index + 1, recipe.name()));
    }

    if let Some(details) = &list.details {
        out.push_str(&format!(
            "detail: {} (Recipe - {})\n",
            details.recipe().name(),
            details.parent_name()
        ));
    }

    if let Some(Destination::NewRecipe(form)) = &list.destination {
        out.push_str(&format!("new recipe: name = {:?}\n", form.name));
    }

    out
}
