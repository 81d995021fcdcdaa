//! Read-only views over a person's label sets.

use crate::error::{ModelError, Result};
use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;
use std::ops::Deref;

/// Borrowed, unmodifiable view of a person's tags or courses.
///
/// Dereferences to the underlying [`BTreeSet`] for every read operation.
/// The mutating operations are present on the view itself and always fail
/// with [`ModelError::UnsupportedModification`], leaving the owner untouched.
pub struct ReadOnlySet<'a, T> {
    field: &'static str,
    inner: &'a BTreeSet<T>,
}

impl<'a, T: Ord> ReadOnlySet<'a, T> {
    pub(crate) fn new(field: &'static str, inner: &'a BTreeSet<T>) -> Self {
        Self { field, inner }
    }

    /// Name of the person field this view exposes (`"tags"` or `"courses"`).
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn insert(&self, _value: T) -> Result<bool> {
        Err(ModelError::unsupported_modification(self.field))
    }

    pub fn remove(&self, _value: &T) -> Result<bool> {
        Err(ModelError::unsupported_modification(self.field))
    }

    pub fn clear(&self) -> Result<()> {
        Err(ModelError::unsupported_modification(self.field))
    }

    pub fn retain<F: FnMut(&T) -> bool>(&self, _keep: F) -> Result<()> {
        Err(ModelError::unsupported_modification(self.field))
    }

    /// Returns an owned copy that the caller is free to modify.
    pub fn to_set(&self) -> BTreeSet<T>
    where
        T: Clone,
    {
        self.inner.clone()
    }
}

impl<T> Clone for ReadOnlySet<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadOnlySet<'_, T> {}

impl<T> Deref for ReadOnlySet<'_, T> {
    type Target = BTreeSet<T>;

    fn deref(&self) -> &Self::Target {
        self.inner
    }
}

impl<'a, T> IntoIterator for ReadOnlySet<'a, T> {
    type Item = &'a T;
    type IntoIter = btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<'a, T> IntoIterator for &ReadOnlySet<'a, T> {
    type Item = &'a T;
    type IntoIter = btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: PartialEq> PartialEq<BTreeSet<T>> for ReadOnlySet<'_, T> {
    fn eq(&self, other: &BTreeSet<T>) -> bool {
        self.inner == other
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadOnlySet<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}
