//! Groups and partitions produced by the divider.

use serde::Serialize;

/// An ordered sub-collection of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Group<T> {
    members: Vec<T>,
}

impl<T> Group<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.members.push(item);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    pub fn into_members(self) -> Vec<T> {
        self.members
    }
}

impl<T> From<Vec<T>> for Group<T> {
    fn from(members: Vec<T>) -> Self {
        Self { members }
    }
}

impl<'a, T> IntoIterator for &'a Group<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// The complete set of groups produced from one input collection.
///
/// Empty when the input could not be divided within tolerance. A partition
/// is never partially filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Partition<T> {
    groups: Vec<Group<T>>,
}

impl<T> Partition<T> {
    pub fn empty() -> Self {
        Self { groups: Vec::new() }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group<T>> {
        self.groups.iter()
    }

    /// Size of each group, in group order.
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Group::len).collect()
    }

    /// Total number of members across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn into_groups(self) -> Vec<Group<T>> {
        self.groups
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<Group<T>>> for Partition<T> {
    fn from(groups: Vec<Group<T>>) -> Self {
        Self { groups }
    }
}

impl<'a, T> IntoIterator for &'a Partition<T> {
    type Item = &'a Group<T>;
    type IntoIter = std::slice::Iter<'a, Group<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
