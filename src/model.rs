use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single catalog entry as stored in `recipes/<file>.json`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
    pub yield_servings: Option<f64>,
    pub total_time_min: Option<f64>,
    pub source_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
    pub last_updated_at: Option<String>,
    #[serde(default)]
    pub modular: bool,
    /// Selectable slots of a modular recipe, in declared order
    #[serde(default)]
    pub components: IndexMap<String, Component>,
    pub assembly: Option<Assembly>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount_g: Option<f64>,
    pub amount_oz: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Component {
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub options: Vec<ComponentOption>,
}

impl Component {
    pub fn option(&self, id: &str) -> Option<&ComponentOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentOption {
    pub id: String,
    pub name: String,
    pub time_min: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Fixed final block of a modular recipe
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Assembly {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn is_modular(&self) -> bool {
        self.modular
    }

    /// True when the recipe carries an update date distinct from its creation date
    pub fn was_updated(&self) -> bool {
        self.last_updated_at
            .as_deref()
            .is_some_and(|updated| updated != self.created_at)
    }
}
