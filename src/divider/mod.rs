//! Group partitioning.
//!
//! Splits an ordered collection into groups whose sizes stay within
//! `group_size ± deviation`. A collection of `count` items is dividable when
//! some number of groups `k >= 1` satisfies
//! `k * (group_size - deviation) <= count <= k * (group_size + deviation)`.
//!
//! The valid `k` form the interval `[count / (g + d), count / (g - d)]`,
//! which always contains `count / g`. If any integer lies in it, then
//! `floor(count / g)` or `ceil(count / g)` does too, so only those two
//! candidates are checked.

use thiserror::Error;

use crate::models::{Group, Partition};

/// Reasons a pair of partition parameters is unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("group size must be a positive integer")]
    ZeroGroupSize,

    #[error("deviation {deviation} must be smaller than group size {group_size}")]
    DeviationTooLarge { group_size: usize, deviation: usize },

    #[error("unable to divide {count} items into groups of {group_size}+/-{deviation}")]
    NotDividable {
        count: usize,
        group_size: usize,
        deviation: usize,
    },
}

/// Divides collections into near-equal groups around a target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPartitioner {
    group_size: usize,
    deviation: usize,
}

impl GroupPartitioner {
    /// Create a partitioner. Invalid bounds are accepted here and make every
    /// query report "not dividable"; use [`validate`](Self::validate) to get
    /// the reason.
    pub fn new(group_size: usize, deviation: usize) -> Self {
        Self {
            group_size,
            deviation,
        }
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    pub fn deviation(&self) -> usize {
        self.deviation
    }

    /// Smallest and largest permitted group size.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        self.validate().ok()?;
        Some((
            self.group_size - self.deviation,
            self.group_size.saturating_add(self.deviation),
        ))
    }

    /// Check the parameters themselves, independent of any collection.
    pub fn validate(&self) -> Result<(), PartitionError> {
        if self.group_size == 0 {
            return Err(PartitionError::ZeroGroupSize);
        }
        if self.deviation >= self.group_size {
            return Err(PartitionError::DeviationTooLarge {
                group_size: self.group_size,
                deviation: self.deviation,
            });
        }
        Ok(())
    }

    /// Check the parameters against a collection of `count` items.
    pub fn check(&self, count: usize) -> Result<(), PartitionError> {
        self.validate()?;
        if self.group_count(count).is_none() {
            return Err(PartitionError::NotDividable {
                count,
                group_size: self.group_size,
                deviation: self.deviation,
            });
        }
        Ok(())
    }

    /// Whether `count` items can be split into groups within tolerance.
    pub fn is_dividable(&self, count: usize) -> bool {
        self.group_count(count).is_some()
    }

    /// Number of groups [`divide`](Self::divide) will produce for `count`
    /// items, or `None` when the count is not dividable.
    ///
    /// Prefers `floor(count / g)`, so leftover items enlarge existing groups
    /// instead of opening a smaller extra group.
    pub fn group_count(&self, count: usize) -> Option<usize> {
        let (lower, upper) = self.bounds()?;
        if count == 0 {
            return None;
        }

        let floor = count / self.group_size;
        let ceil = count.div_ceil(self.group_size);

        [floor, ceil].into_iter().find(|&k| {
            k >= 1 && k.saturating_mul(lower) <= count && count <= k.saturating_mul(upper)
        })
    }

    /// Group sizes for `count` items, in fill order.
    ///
    /// Sizes sum to `count` and differ by at most one; larger groups come
    /// first.
    pub fn plan(&self, count: usize) -> Option<Vec<usize>> {
        let groups = self.group_count(count)?;
        let base = count / groups;
        let extra = count % groups;

        let sizes: Vec<usize> = (0..groups)
            .map(|i| if i < extra { base + 1 } else { base })
            .collect();

        tracing::debug!(
            count,
            group_size = self.group_size,
            deviation = self.deviation,
            groups,
            ?sizes,
            "planned partition"
        );
        Some(sizes)
    }

    /// Split `items` into groups, consuming them in slice order and filling
    /// each group before starting the next.
    ///
    /// Returns an empty partition when the items cannot be divided.
    pub fn divide<T: Clone>(&self, items: &[T]) -> Partition<T> {
        let Some(sizes) = self.plan(items.len()) else {
            tracing::debug!(
                count = items.len(),
                group_size = self.group_size,
                deviation = self.deviation,
                "not dividable"
            );
            return Partition::empty();
        };

        let mut rest = items.iter();
        let mut groups = Vec::with_capacity(sizes.len());
        for size in sizes {
            let mut group = Group::with_capacity(size);
            for item in rest.by_ref().take(size) {
                group.push(item.clone());
            }
            groups.push(group);
        }
        debug_assert!(rest.next().is_none());

        Partition::from(groups)
    }
}

/// Whether `count` items can be split into groups of `group_size ± deviation`.
pub fn is_dividable(count: usize, group_size: usize, deviation: usize) -> bool {
    GroupPartitioner::new(group_size, deviation).is_dividable(count)
}

/// Split `items` into groups of `group_size ± deviation`.
///
/// See [`GroupPartitioner::divide`].
pub fn divide<T: Clone>(items: &[T], group_size: usize, deviation: usize) -> Partition<T> {
    GroupPartitioner::new(group_size, deviation).divide(items)
}
