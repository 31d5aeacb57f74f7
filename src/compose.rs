use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{Component, ComponentOption, Ingredient, Recipe};

pub const ASSEMBLY_HEADER: &str = "Final Assembly";
pub const ASSEMBLY_SECTION: &str = "Assembly";

/// What the user picked for one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    Single(String),
    Multiple(Vec<String>),
}

impl Selection {
    fn option_ids(&self) -> Vec<&str> {
        match self {
            Selection::Single(id) if id.is_empty() => Vec::new(),
            Selection::Single(id) => vec![id.as_str()],
            Selection::Multiple(ids) => ids.iter().map(String::as_str).collect(),
        }
    }
}

/// Component key to selection, for one open recipe
pub type Selections = HashMap<String, Selection>;

/// Entry in a composed step list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum StepEntry {
    Header(String),
    Step(String),
}

/// Ingredient tagged with the section it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionIngredient {
    pub section: String,
    #[serde(flatten)]
    pub ingredient: Ingredient,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Composition {
    pub ingredients: Vec<SectionIngredient>,
    pub steps: Vec<StepEntry>,
    /// Longest selected option; components are prepared in parallel
    pub estimated_time_min: f64,
}

impl Composition {
    fn push_section(&mut self, header: String, section: &str, ingredients: &[Ingredient], steps: &[String]) {
        self.steps.push(StepEntry::Header(header));
        self.ingredients
            .extend(ingredients.iter().cloned().map(|ingredient| SectionIngredient {
                section: section.to_string(),
                ingredient,
            }));
        self.steps.extend(steps.iter().cloned().map(StepEntry::Step));
    }
}

/// Default selections when a recipe is opened: the first option of every
/// single-select component and nothing for multi-select components.
pub fn initial_selections(recipe: &Recipe) -> Selections {
    recipe
        .components
        .iter()
        .filter_map(|(key, component)| {
            let selection = if component.multiple {
                Selection::Multiple(Vec::new())
            } else {
                Selection::Single(component.options.first()?.id.clone())
            };
            Some((key.clone(), selection))
        })
        .collect()
}

/// Applies a user pick and returns the new selections.
///
/// Single-select components switch to `option_id`; multi-select components
/// toggle it, appending new picks after existing ones. Unknown component
/// keys leave the selections unchanged.
pub fn select(recipe: &Recipe, selections: &Selections, key: &str, option_id: &str) -> Selections {
    let mut next = selections.clone();
    let Some(component) = recipe.components.get(key) else {
        debug!("Ignoring selection for unknown component '{}'", key);
        return next;
    };

    if !component.multiple {
        next.insert(key.to_string(), Selection::Single(option_id.to_string()));
        return next;
    }

    let mut ids = match next.remove(key) {
        Some(Selection::Multiple(ids)) => ids,
        Some(Selection::Single(id)) if !id.is_empty() => vec![id],
        _ => Vec::new(),
    };
    if let Some(pos) = ids.iter().position(|id| id == option_id) {
        ids.remove(pos);
    } else {
        ids.push(option_id.to_string());
    }
    next.insert(key.to_string(), Selection::Multiple(ids));
    next
}

/// Flattens a modular recipe into one ingredient list and one step list.
///
/// Components are visited in declared order. Missing selections and option
/// ids that no longer exist are skipped, including for required components.
/// The assembly block, if any, is always appended last.
pub fn compose(recipe: &Recipe, selections: &Selections) -> Composition {
    let mut composition = Composition::default();

    for (key, component) in &recipe.components {
        for option in resolve(key, component, selections.get(key)) {
            composition.push_section(
                format!("{}: {}", component.label, option.name),
                &option.name,
                &option.ingredients,
                &option.steps,
            );
            if let Some(minutes) = option.time_min {
                composition.estimated_time_min = composition.estimated_time_min.max(minutes);
            }
        }
    }

    if let Some(assembly) = &recipe.assembly {
        composition.push_section(
            ASSEMBLY_HEADER.to_string(),
            ASSEMBLY_SECTION,
            &assembly.ingredients,
            &assembly.steps,
        );
    }

    composition
}

fn resolve<'a>(
    key: &str,
    component: &'a Component,
    selection: Option<&Selection>,
) -> Vec<&'a ComponentOption> {
    let Some(selection) = selection else {
        return Vec::new();
    };
    selection
        .option_ids()
        .into_iter()
        .filter_map(|id| {
            let option = component.option(id);
            if option.is_none() {
                debug!("Skipping unknown option '{}' for component '{}'", id, key);
            }
            option
        })
        .collect()
}
