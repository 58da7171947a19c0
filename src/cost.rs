use derive_more::From;
use std::ops::Add;

/// The cost of elementary edits between vertices of type `V1` and vertices of type `V2`.
///
/// Costs must never be negative, that is, below [Weight::default()][Cost::Weight].
///
/// Costs are summed with the plain [Add] of the weight, so the sum of the costs of editing every
/// vertex of both trees must fit in it. Otherwise the distance overflows, which panics in debug
/// builds and wraps around in release builds for primitive integers.
pub trait Cost<V1: ?Sized, V2: ?Sized = V1> {
    /// The type of the cost of an edit.
    ///
    /// The default value of this type is assumed to be the additive identity (i.e. _zero_).
    type Weight: Default + Copy + Ord + Add<Output = Self::Weight>;

    /// Returns the cost of removing `v` from the first tree.
    fn remove(&self, v: &V1) -> Self::Weight;

    /// Returns the cost of inserting `w` from the second tree.
    fn insert(&self, w: &V2) -> Self::Weight;

    /// Returns the cost of relabeling `v` as `w`.
    ///
    /// A zero cost means `v` and `w` _match_.
    fn update(&self, v: &V1, w: &V2) -> Self::Weight;
}

impl<C: Cost<V1, V2> + ?Sized, V1: ?Sized, V2: ?Sized> Cost<V1, V2> for &C {
    type Weight = C::Weight;

    #[inline]
    fn remove(&self, v: &V1) -> Self::Weight {
        <C as Cost<V1, V2>>::remove(self, v)
    }

    #[inline]
    fn insert(&self, w: &V2) -> Self::Weight {
        <C as Cost<V1, V2>>::insert(self, w)
    }

    #[inline]
    fn update(&self, v: &V1, w: &V2) -> Self::Weight {
        <C as Cost<V1, V2>>::update(self, v, w)
    }
}

/// Removing and inserting cost one, relabeling costs nothing between equal vertices and one
/// otherwise.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UnitCost;

impl<V1: PartialEq<V2> + ?Sized, V2: ?Sized> Cost<V1, V2> for UnitCost {
    type Weight = u64;

    #[inline]
    fn remove(&self, _: &V1) -> u64 {
        1
    }

    #[inline]
    fn insert(&self, _: &V2) -> u64 {
        1
    }

    #[inline]
    fn update(&self, v: &V1, w: &V2) -> u64 {
        u64::from(v != w)
    }
}

/// A [Cost] made of three functions.
///
/// # Example
///
/// ```rust
/// use zhang_shasha::{FnCost, TreeEditDistance};
/// use std::collections::HashMap;
///
/// let a: HashMap<_, _> = [("html", vec!["body"]), ("body", vec![])].into();
/// let b: HashMap<_, _> = [("html", vec!["head", "body"]), ("head", vec![]), ("body", vec![])].into();
///
/// let cost = FnCost::from((
///     |v: &&str| v.len(),
///     |w: &&str| w.len(),
///     |v: &&str, w: &&str| if v == w { 0 } else { v.len() + w.len() },
/// ));
///
/// let ted = TreeEditDistance::with_cost(&a, &"html", &b, &"html", cost);
/// assert_eq!(ted.distance(), Ok(4));
/// ```
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, From)]
pub struct FnCost<R, I, U> {
    /// The cost of removing a vertex.
    pub remove: R,

    /// The cost of inserting a vertex.
    pub insert: I,

    /// The cost of relabeling a vertex.
    pub update: U,
}

impl<V1, V2, W, R, I, U> Cost<V1, V2> for FnCost<R, I, U>
where
    V1: ?Sized,
    V2: ?Sized,
    W: Default + Copy + Ord + Add<Output = W>,
    R: Fn(&V1) -> W,
    I: Fn(&V2) -> W,
    U: Fn(&V1, &V2) -> W,
{
    type Weight = W;

    #[inline]
    fn remove(&self, v: &V1) -> W {
        (self.remove)(v)
    }

    #[inline]
    fn insert(&self, w: &V2) -> W {
        (self.insert)(w)
    }

    #[inline]
    fn update(&self, v: &V1, w: &V2) -> W {
        (self.update)(v, w)
    }
}
