use std::collections::BTreeSet;

use crate::model::Recipe;

/// Returns the recipes matching both the search term and every active tag.
///
/// Relative order of `recipes` is preserved. An empty search term and an
/// empty tag set both match everything.
pub fn filter<'a, I>(
    recipes: I,
    search_term: &str,
    active_tags: &BTreeSet<String>,
) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let term = search_term.to_lowercase();
    recipes
        .into_iter()
        .filter(|recipe| matches_search(recipe, &term) && matches_tags(recipe, active_tags))
        .collect()
}

/// `term` must already be lowercased.
fn matches_search(recipe: &Recipe, term: &str) -> bool {
    term.is_empty()
        || recipe.title.to_lowercase().contains(term)
        || recipe.tags.iter().any(|tag| tag.to_lowercase().contains(term))
        || recipe
            .ingredients
            .iter()
            .any(|ing| ing.name.to_lowercase().contains(term))
}

fn matches_tags(recipe: &Recipe, active_tags: &BTreeSet<String>) -> bool {
    active_tags
        .iter()
        .all(|wanted| recipe.tags.iter().any(|tag| tag == wanted))
}

/// Sorted, de-duplicated list of every tag used in `recipes`
pub fn all_tags<'a, I>(recipes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .flat_map(|recipe| recipe.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
