use std::collections::BTreeSet;

use crate::filter::filter;
use crate::model::Recipe;
use crate::scale::Scale;
use crate::sort::{sort, SortKey};

/// Browsing state for one catalog session.
///
/// Every change produces a new value; the engines only ever read it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub search: String,
    pub active_tags: BTreeSet<String>,
    /// `None` keeps catalog order
    pub sort: Option<SortKey>,
    pub scale: Scale,
}

impl SessionState {
    pub fn new(sort: Option<SortKey>, scale: Scale) -> Self {
        Self {
            sort,
            scale,
            ..Default::default()
        }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    /// Adds the tag if inactive, removes it otherwise.
    pub fn toggle_tag(&self, tag: &str) -> Self {
        let mut active_tags = self.active_tags.clone();
        if !active_tags.remove(tag) {
            active_tags.insert(tag.to_string());
        }
        Self {
            active_tags,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: Option<SortKey>) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_scale(&self, scale: Scale) -> Self {
        Self {
            scale,
            ..self.clone()
        }
    }

    /// Resets the search term and tag filters. Sort and scale are kept.
    pub fn clear_filters(&self) -> Self {
        Self {
            search: String::new(),
            active_tags: BTreeSet::new(),
            ..self.clone()
        }
    }

    /// The recipes to show: filtered first, then sorted.
    pub fn visible<'a, I>(&self, recipes: I) -> Vec<&'a Recipe>
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        let filtered = filter(recipes, &self.search, &self.active_tags);
        match self.sort {
            Some(key) => sort(filtered, key),
            None => filtered,
        }
    }
}
