//! `IdSet`: a growable, insertion-ordered sequence of vertex ids.
//!
//! Used both as the permanent adjacency list of a vertex and as the transient
//! witness accumulator built by the CD index. The container does not enforce
//! uniqueness; callers that need a set check [`IdSet::contains`] first or use
//! [`IdSet::insert_unique`].
//!
//! Growth goes through [`Vec::try_reserve`], so running out of memory surfaces
//! as [`CdIndexError::AllocationFailure`] instead of aborting, while still
//! keeping amortized doubling.

use crate::cdindex_error::CdIndexError;
use crate::graph::VertexId;

/// Ordered sequence of 64-bit vertex ids with linear membership.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdSet {
    ids: Vec<VertexId>,
}

impl IdSet {
    /// Creates an empty set without allocating.
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Creates an empty set with room for `capacity` ids.
    pub fn with_capacity(capacity: usize) -> Result<Self, CdIndexError> {
        let mut ids = Vec::new();
        ids.try_reserve(capacity)
            .map_err(|_| CdIndexError::AllocationFailure("id set"))?;
        Ok(Self { ids })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Linear membership test, O(len).
    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        self.ids.contains(&id)
    }

    /// Makes room for `additional` more ids without changing the contents.
    pub fn reserve(&mut self, additional: usize) -> Result<(), CdIndexError> {
        self.ids
            .try_reserve(additional)
            .map_err(|_| CdIndexError::AllocationFailure("id set"))
    }

    /// Appends `id` at the end, duplicates included.
    pub fn push(&mut self, id: VertexId) -> Result<(), CdIndexError> {
        self.reserve(1)?;
        self.ids.push(id);
        Ok(())
    }

    /// Appends `id` only if absent. Returns whether it was added.
    pub fn insert_unique(&mut self, id: VertexId) -> Result<bool, CdIndexError> {
        if self.contains(id) {
            return Ok(false);
        }
        self.push(id)?;
        Ok(true)
    }

    #[inline]
    pub fn as_slice(&self) -> &[VertexId] {
        &self.ids
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, VertexId>> {
        self.ids.iter().copied()
    }
}

/// `true` if the two id sequences share at least one id. O(|a| * |b|).
pub fn intersects(a: &[VertexId], b: &[VertexId]) -> bool {
    a.iter().any(|id| b.contains(id))
}

impl<'a> IntoIterator for &'a IdSet {
    type Item = VertexId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, VertexId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
