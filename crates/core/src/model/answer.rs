use std::collections::BTreeSet;

use crate::model::question::{ChoiceKey, QuestionKind};

/// Non-empty set of keys chosen for a multi-select question.
///
/// There is no way to build an empty `Selection`; removing the last key yields
/// `None` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(BTreeSet<ChoiceKey>);

impl Selection {
    #[must_use]
    pub fn single(key: ChoiceKey) -> Self {
        Self(BTreeSet::from([key]))
    }

    /// Collect keys into a selection, or `None` when there are none.
    #[must_use]
    pub fn from_keys(keys: impl IntoIterator<Item = ChoiceKey>) -> Option<Self> {
        let keys: BTreeSet<_> = keys.into_iter().collect();
        if keys.is_empty() { None } else { Some(Self(keys)) }
    }

    /// Flip membership of `key`. Returns `None` once the selection is empty.
    #[must_use]
    pub fn toggled(mut self, key: &ChoiceKey) -> Option<Self> {
        if !self.0.remove(key) {
            self.0.insert(key.clone());
        }
        if self.0.is_empty() { None } else { Some(self) }
    }

    #[must_use]
    pub fn contains(&self, key: &ChoiceKey) -> bool {
        self.0.contains(key)
    }

    #[must_use]
    pub fn keys(&self) -> &BTreeSet<ChoiceKey> {
        &self.0
    }

    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// What the user has recorded for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedAnswer {
    Single(ChoiceKey),
    Multiple(Selection),
}

impl SavedAnswer {
    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self {
            SavedAnswer::Single(_) => QuestionKind::Single,
            SavedAnswer::Multiple(_) => QuestionKind::Multiple,
        }
    }

    /// Whether `key` should render as selected.
    #[must_use]
    pub fn contains(&self, key: &ChoiceKey) -> bool {
        match self {
            SavedAnswer::Single(chosen) => chosen == key,
            SavedAnswer::Multiple(selection) => selection.contains(key),
        }
    }
}
