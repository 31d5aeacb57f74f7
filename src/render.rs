//! Plain-text views of recipes for the command line.

use crate::compose::{compose, Composition, SectionIngredient, Selections, StepEntry};
use crate::model::{Ingredient, Recipe};
use crate::scale::{scale_servings, Scale};

/// One-line summary shown in the recipe list
pub fn card(recipe: &Recipe) -> String {
    let mut meta = Vec::new();
    if let Some(servings) = recipe.yield_servings {
        meta.push(format!("{} servings", servings));
    }
    if let Some(minutes) = recipe.total_time_min {
        meta.push(format!("{} min", minutes));
    }

    let mut line = format!("{} ({})", recipe.title, recipe.id);
    if !meta.is_empty() {
        line.push_str(&format!(" - {}", meta.join(", ")));
    }
    if !recipe.tags.is_empty() {
        line.push_str(&format!(" [{}]", recipe.tags.join(", ")));
    }
    line
}

/// Full detail view at the given scale.
///
/// Modular recipes are composed from `selections`; plain recipes ignore them.
pub fn detail(recipe: &Recipe, scale: Scale, selections: &Selections) -> String {
    let mut lines = vec![format!("# {}", recipe.title)];
    if let Some(url) = &recipe.source_url {
        lines.push(format!("Source: {}", url));
    }
    if let Some(servings) = scale_servings(recipe.yield_servings, scale) {
        lines.push(format!("Servings: {}", servings));
    }

    let composition = recipe.is_modular().then(|| compose(recipe, selections));
    match &composition {
        Some(composition) if composition.estimated_time_min > 0.0 => {
            lines.push(format!("Time: ~{} minutes", composition.estimated_time_min))
        }
        Some(_) => {}
        None => {
            if let Some(minutes) = recipe.total_time_min {
                lines.push(format!("Time: {} minutes", minutes));
            }
        }
    }
    if !recipe.tags.is_empty() {
        lines.push(format!("Tags: {}", recipe.tags.join(", ")));
    }

    lines.push(String::new());
    lines.push("## Ingredients".to_string());
    match &composition {
        Some(composition) => lines.extend(section_ingredients(&composition.ingredients, scale)),
        None => lines.extend(recipe.ingredients.iter().map(|i| ingredient_line(i, scale))),
    }

    lines.push(String::new());
    lines.push("## Instructions".to_string());
    match &composition {
        Some(composition) => lines.extend(composed_steps(composition)),
        None => lines.extend(
            recipe
                .steps
                .iter()
                .enumerate()
                .map(|(n, step)| format!("{}. {}", n + 1, step)),
        ),
    }

    if !recipe.notes.is_empty() {
        lines.push(String::new());
        lines.push("## Notes".to_string());
        lines.extend(recipe.notes.iter().map(|note| format!("- {}", note)));
    }

    lines.push(String::new());
    lines.push(format!("Created: {}", recipe.created_at));
    if recipe.was_updated() {
        if let Some(updated) = &recipe.last_updated_at {
            lines.push(format!("Updated: {}", updated));
        }
    }

    lines.join("\n")
}

fn ingredient_line(ingredient: &Ingredient, scale: Scale) -> String {
    let amount = ingredient.scaled_amount(scale);
    if amount.is_empty() {
        format!("- {}", ingredient.name)
    } else {
        format!("- {} {}", amount, ingredient.name)
    }
}

fn section_ingredients(ingredients: &[SectionIngredient], scale: Scale) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<&str> = None;
    for entry in ingredients {
        if current != Some(entry.section.as_str()) {
            lines.push(format!("### {}", entry.section));
            current = Some(entry.section.as_str());
        }
        lines.push(ingredient_line(&entry.ingredient, scale));
    }
    lines
}

fn composed_steps(composition: &Composition) -> Vec<String> {
    let mut number = 0;
    composition
        .steps
        .iter()
        .map(|entry| match entry {
            StepEntry::Header(text) => format!("### {}", text),
            StepEntry::Step(text) => {
                number += 1;
                format!("{}. {}", number, text)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::initial_selections;
    use crate::model::{Component, ComponentOption};

    fn stew() -> Recipe {
        Recipe {
            id: "beef-stew".to_string(),
            title: "Beef Stew".to_string(),
            tags: vec!["dinner".to_string(), "winter".to_string()],
            ingredients: vec![
                Ingredient {
                    name: "Beef".to_string(),
                    amount_g: Some(500.0),
                    amount_oz: Some(17.6),
                },
                Ingredient {
                    name: "Salt".to_string(),
                    ..Default::default()
                },
            ],
            steps: vec!["Brown the beef.".to_string(), "Simmer.".to_string()],
            notes: vec!["Better the next day.".to_string()],
            yield_servings: Some(4.0),
            total_time_min: Some(120.0),
            created_at: "2024-01-01".to_string(),
            last_updated_at: Some("2024-03-01".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_card() {
        assert_eq!(
            card(&stew()),
            "Beef Stew (beef-stew) - 4 servings, 120 min [dinner, winter]"
        );
    }

    #[test]
    fn test_detail_scales_amounts_and_servings() {
        let text = detail(&stew(), Scale::Half, &Selections::new());
        assert!(text.contains("Servings: 2"));
        assert!(text.contains("- 250g (8.8oz) Beef"));
        assert!(text.contains("- Salt"));
        assert!(text.contains("2. Simmer."));
        assert!(text.contains("- Better the next day."));
        assert!(text.contains("Updated: 2024-03-01"));
    }

    #[test]
    fn test_detail_hides_unchanged_update_date() {
        let mut recipe = stew();
        recipe.last_updated_at = Some(recipe.created_at.clone());
        let text = detail(&recipe, Scale::One, &Selections::new());
        assert!(!text.contains("Updated:"));
    }

    #[test]
    fn test_detail_of_modular_recipe() {
        let mut recipe = Recipe {
            id: "tacos".to_string(),
            title: "Tacos".to_string(),
            modular: true,
            ..Default::default()
        };
        recipe.components.insert(
            "filling".to_string(),
            Component {
                label: "Filling".to_string(),
                required: true,
                multiple: false,
                options: vec![ComponentOption {
                    id: "beans".to_string(),
                    name: "Black Beans".to_string(),
                    time_min: Some(20.0),
                    ingredients: vec![Ingredient {
                        name: "Black beans".to_string(),
                        amount_g: Some(400.0),
                        amount_oz: None,
                    }],
                    steps: vec!["Warm the beans.".to_string()],
                }],
            },
        );

        let text = detail(&recipe, Scale::Two, &initial_selections(&recipe));
        assert!(text.contains("Time: ~20 minutes"));
        assert!(text.contains("### Black Beans\n- 800g Black beans"));
        assert!(text.contains("### Filling: Black Beans\n1. Warm the beans."));
    }
}
