use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::Recipe;

/// Orderings offered by the catalog's sort selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
    #[serde(rename = "time-asc")]
    TimeAsc,
    #[serde(rename = "time-desc")]
    TimeDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::TimeAsc => "time-asc",
            SortKey::TimeDesc => "time-desc",
        }
    }

    fn compare(&self, collator: Option<&CollatorBorrowed<'_>>, a: &Recipe, b: &Recipe) -> Ordering {
        match self {
            SortKey::NameAsc => compare_titles(collator, &a.title, &b.title),
            SortKey::NameDesc => compare_titles(collator, &b.title, &a.title),
            SortKey::TimeAsc => compare_times(a.total_time_min, b.total_time_min, false),
            SortKey::TimeDesc => compare_times(a.total_time_min, b.total_time_min, true),
        }
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-asc" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            "time-asc" => Ok(SortKey::TimeAsc),
            "time-desc" => Ok(SortKey::TimeDesc),
            other => Err(CatalogError::InvalidSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns a new ordering of `recipes`; the input is left untouched.
///
/// The sort is stable, so recipes that compare equal keep their
/// relative input order.
pub fn sort<'a, I>(recipes: I, key: SortKey) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let collator = match key {
        SortKey::NameAsc | SortKey::NameDesc => title_collator(),
        SortKey::TimeAsc | SortKey::TimeDesc => None,
    };
    let mut sorted: Vec<&Recipe> = recipes.into_iter().collect();
    sorted.sort_by(|a, b| key.compare(collator.as_ref(), a, b));
    sorted
}

/// Like [`sort`], but takes the selector's string value. Unknown keys
/// leave the order unchanged.
pub fn sort_by_name<'a, I>(recipes: I, key: &str) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    match key.parse::<SortKey>() {
        Ok(key) => sort(recipes, key),
        Err(_) => recipes.into_iter().collect(),
    }
}

/// Root-locale collator: accents and case only break ties.
fn title_collator() -> Option<CollatorBorrowed<'static>> {
    match Collator::try_new(Default::default(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("Collation data unavailable, sorting titles by code point: {}", e);
            None
        }
    }
}

fn compare_titles(collator: Option<&CollatorBorrowed<'_>>, a: &str, b: &str) -> Ordering {
    if let Some(collator) = collator {
        return collator.compare(a, b);
    }

    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}

/// Unknown times go last in both directions.
fn compare_times(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.total_cmp(&a),
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
