use crate::Cost;
use std::fmt::{self, Display, Formatter};

/// A single operation of an edit script between two trees.
///
/// Vertices are borrowed from the first tree for the _source_ of an operation, and from the
/// second tree for its _target_.
#[derive(Debug, Eq, PartialEq, Hash)]
pub enum Edit<'t, V1, V2 = V1> {
    /// Remove the existing vertex, its children take its place.
    Remove(&'t V1),

    /// Insert the incoming vertex.
    Insert(&'t V2),

    /// Relabel the existing vertex as the incoming one.
    Update(&'t V1, &'t V2),

    /// Keep the existing vertex, which is equivalent to the incoming one.
    Match(&'t V1, &'t V2),
}

impl<V1, V2> Clone for Edit<'_, V1, V2> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V1, V2> Copy for Edit<'_, V1, V2> {}

impl<'t, V1, V2> Edit<'t, V1, V2> {
    /// Returns the vertex of the first tree this [Edit] applies to, if any.
    pub fn source(&self) -> Option<&'t V1> {
        match *self {
            Edit::Remove(v) | Edit::Update(v, _) | Edit::Match(v, _) => Some(v),
            Edit::Insert(_) => None,
        }
    }

    /// Returns the vertex of the second tree this [Edit] applies to, if any.
    pub fn target(&self) -> Option<&'t V2> {
        match *self {
            Edit::Insert(w) | Edit::Update(_, w) | Edit::Match(_, w) => Some(w),
            Edit::Remove(_) => None,
        }
    }

    /// Returns the cost of this [Edit].
    pub fn cost<C: Cost<V1, V2>>(&self, cost: &C) -> C::Weight {
        match *self {
            Edit::Remove(v) => cost.remove(v),
            Edit::Insert(w) => cost.insert(w),
            Edit::Update(v, w) | Edit::Match(v, w) => cost.update(v, w),
        }
    }
}

impl<V1: Display, V2: Display> Display for Edit<'_, V1, V2> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Remove(v) => write!(f, "remove {v}"),
            Edit::Insert(w) => write!(f, "insert {w}"),
            Edit::Update(v, w) => write!(f, "update {v} -> {w}"),
            Edit::Match(v, w) => write!(f, "match {v} -> {w}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FnCost, UnitCost};
    use test_strategy::proptest;

    #[proptest]
    fn removals_have_no_target(v: u8) {
        let e = Edit::<_, u8>::Remove(&v);
        assert_eq!(e.source(), Some(&v));
        assert_eq!(e.target(), None);
        assert_eq!(e.cost(&UnitCost), 1);
    }

    #[proptest]
    fn insertions_have_no_source(w: u8) {
        let e = Edit::<u8, _>::Insert(&w);
        assert_eq!(e.source(), None);
        assert_eq!(e.target(), Some(&w));
        assert_eq!(e.cost(&UnitCost), 1);
    }

    #[proptest]
    fn relabeling_costs_the_update(v: u8, w: u8) {
        let cost = FnCost::from((
            |_: &u8| 7u32,
            |_: &u8| 11u32,
            |v: &u8, w: &u8| u32::from(v.abs_diff(*w)),
        ));

        assert_eq!(Edit::Update(&v, &w).cost(&cost), u32::from(v.abs_diff(w)));
        assert_eq!(Edit::Match(&v, &v).cost(&cost), 0);
        assert_eq!(Edit::Update(&v, &w).source(), Some(&v));
        assert_eq!(Edit::Match(&v, &w).target(), Some(&w));
    }

    #[test]
    fn edits_are_displayed_as_operations() {
        assert_eq!(Edit::<_, char>::Remove(&'a').to_string(), "remove a");
        assert_eq!(Edit::<char, _>::Insert(&'b').to_string(), "insert b");
        assert_eq!(Edit::Update(&'a', &'b').to_string(), "update a -> b");
        assert_eq!(Edit::Match(&'c', &'c').to_string(), "match c -> c");
    }
}
