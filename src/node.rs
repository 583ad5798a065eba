//! Grid nodes tagged with a distance, and the containers that hold them.

use crate::float_types::Real;
use crate::grid::GridIndex;
use std::cmp::Ordering;

/// A grid index paired with a distance value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelSetNode<const D: usize> {
    pub index: GridIndex<D>,
    pub value: Real,
}

impl<const D: usize> LevelSetNode<D> {
    #[inline]
    pub const fn new(index: GridIndex<D>, value: Real) -> Self {
        Self { index, value }
    }

    /// Order two nodes by value alone. Uses the IEEE total order so the
    /// comparison is usable with `sort_by` even if a value is NaN.
    #[inline]
    pub fn cmp_by_value(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

/// An append-only, insertion-ordered sequence of nodes.
///
/// Used both for caller-supplied narrow-band candidates and for the inside
/// and outside sets an extraction produces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeContainer<const D: usize> {
    nodes: Vec<LevelSetNode<D>>,
}

impl<const D: usize> NodeContainer<D> {
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append at the end, after every node already stored.
    #[inline]
    pub fn push(&mut self, node: LevelSetNode<D>) {
        self.nodes.push(node);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&LevelSetNode<D>> {
        self.nodes.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LevelSetNode<D>> {
        self.nodes.iter()
    }

    pub fn as_slice(&self) -> &[LevelSetNode<D>] {
        &self.nodes
    }

    /// Whether a node with this index is stored.
    pub fn contains_index(&self, index: &GridIndex<D>) -> bool {
        self.nodes.iter().any(|node| &node.index == index)
    }
}

impl<const D: usize> From<Vec<LevelSetNode<D>>> for NodeContainer<D> {
    fn from(nodes: Vec<LevelSetNode<D>>) -> Self {
        Self { nodes }
    }
}

impl<const D: usize> FromIterator<LevelSetNode<D>> for NodeContainer<D> {
    fn from_iter<I: IntoIterator<Item = LevelSetNode<D>>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<const D: usize> Extend<LevelSetNode<D>> for NodeContainer<D> {
    fn extend<I: IntoIterator<Item = LevelSetNode<D>>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl<'a, const D: usize> IntoIterator for &'a NodeContainer<D> {
    type Item = &'a LevelSetNode<D>;
    type IntoIter = std::slice::Iter<'a, LevelSetNode<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<const D: usize> IntoIterator for NodeContainer<D> {
    type Item = LevelSetNode<D>;
    type IntoIter = std::vec::IntoIter<LevelSetNode<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
