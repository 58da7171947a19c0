use crate::{diff, Cost, Edit, Error, Tree, UnitCost};
use std::fmt::{self, Debug, Formatter};
use std::sync::OnceLock;

type Solution<'t, V1, V2, W> = (Box<[Edit<'t, V1, V2>]>, W);

/// The tree edit distance between two rooted [Tree]s.
///
/// Nothing is computed until either the [distance][TreeEditDistance::distance] or the
/// [edit script][TreeEditDistance::edit_script] is first requested, after which both are cached.
/// Concurrent requests wait on a single computation and observe the same result.
///
/// # Example
///
/// ```rust
/// use zhang_shasha::{Edit, TreeEditDistance};
/// use std::collections::HashMap;
///
/// let a: HashMap<_, _> = [("ul", vec!["li", "p"]), ("li", vec![]), ("p", vec![])].into();
/// let b: HashMap<_, _> = [("ul", vec!["li"]), ("li", vec![])].into();
///
/// let ted = TreeEditDistance::new(&a, &"ul", &b, &"ul");
///
/// assert_eq!(ted.distance(), Ok(1));
/// assert_eq!(
///     ted.edit_script(),
///     Ok(&[
///         Edit::Match(&"li", &"li"),
///         Edit::Remove(&"p"),
///         Edit::Match(&"ul", &"ul"),
///     ][..])
/// );
/// ```
pub struct TreeEditDistance<'t, T1, T2, C = UnitCost>
where
    T1: Tree,
    T2: Tree,
    C: Cost<T1::Vertex, T2::Vertex>,
{
    a: &'t T1,
    ra: &'t T1::Vertex,
    b: &'t T2,
    rb: &'t T2::Vertex,
    cost: C,
    solution: OnceLock<Result<Solution<'t, T1::Vertex, T2::Vertex, C::Weight>, Error>>,
}

impl<'t, T1, T2> TreeEditDistance<'t, T1, T2>
where
    T1: Tree,
    T2: Tree,
    T1::Vertex: PartialEq<T2::Vertex>,
{
    /// Measures the distance between the tree `a` read from `ra` and the tree `b` read from
    /// `rb` by the [UnitCost].
    pub fn new(a: &'t T1, ra: &'t T1::Vertex, b: &'t T2, rb: &'t T2::Vertex) -> Self {
        Self::with_cost(a, ra, b, rb, UnitCost)
    }
}

impl<'t, T1, T2, C> TreeEditDistance<'t, T1, T2, C>
where
    T1: Tree,
    T2: Tree,
    C: Cost<T1::Vertex, T2::Vertex>,
{
    /// Measures the distance between the tree `a` read from `ra` and the tree `b` read from
    /// `rb` by a custom [Cost].
    pub fn with_cost(
        a: &'t T1,
        ra: &'t T1::Vertex,
        b: &'t T2,
        rb: &'t T2::Vertex,
        cost: C,
    ) -> Self {
        TreeEditDistance {
            a,
            ra,
            b,
            rb,
            cost,
            solution: OnceLock::new(),
        }
    }

    /// Returns the [Cost] edits are measured by.
    pub fn cost(&self) -> &C {
        &self.cost
    }

    fn solution(&self) -> Result<&Solution<'t, T1::Vertex, T2::Vertex, C::Weight>, Error> {
        self.solution
            .get_or_init(|| diff(self.a, self.ra, self.b, self.rb, &self.cost))
            .as_ref()
            .map_err(|e| *e)
    }

    /// Returns the lowest cost of transforming the first tree into the second.
    pub fn distance(&self) -> Result<C::Weight, Error> {
        self.solution().map(|&(_, distance)| distance)
    }

    /// Returns a sequence of [Edit]s of lowest cost that transforms the first tree into the
    /// second.
    ///
    /// Every vertex of the first tree is either removed, updated or matched exactly once, and
    /// every vertex of the second tree is either inserted, updated or matched exactly once.
    pub fn edit_script(&self) -> Result<&[Edit<'t, T1::Vertex, T2::Vertex>], Error> {
        self.solution().map(|(edits, _)| &**edits)
    }
}

impl<T1, T2, C> Debug for TreeEditDistance<'_, T1, T2, C>
where
    T1: Tree + Debug,
    T2: Tree + Debug,
    T1::Vertex: Debug,
    T2::Vertex: Debug,
    C: Cost<T1::Vertex, T2::Vertex> + Debug,
    C::Weight: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeEditDistance")
            .field("a", &self.a)
            .field("ra", &self.ra)
            .field("b", &self.b)
            .field("rb", &self.rb)
            .field("cost", &self.cost)
            .field("solution", &self.solution.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FnCost, InvalidTree, MockTree, Side};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use test_strategy::proptest;

    #[proptest]
    fn repeated_requests_return_identical_results(a: MockTree, b: MockTree) {
        let ted = TreeEditDistance::new(&a, &MockTree::ROOT, &b, &MockTree::ROOT);

        let script = ted.edit_script().unwrap();
        assert_eq!(ted.distance(), ted.distance());
        assert_eq!(ted.edit_script(), Ok(script));
        assert!(std::ptr::eq(ted.edit_script().unwrap(), script));
    }

    #[proptest]
    fn the_distance_is_computed_at_most_once(a: MockTree, b: MockTree) {
        let calls = AtomicUsize::new(0);
        let count = |_: &usize| {
            calls.fetch_add(1, Ordering::Relaxed);
            1u32
        };

        let cost = FnCost::from((count, count, |v: &usize, w: &usize| u32::from(v != w)));
        let ted = TreeEditDistance::with_cost(&a, &MockTree::ROOT, &b, &MockTree::ROOT, cost);

        let distance = ted.distance();
        let once = calls.load(Ordering::Relaxed);
        assert!(once > 0);

        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert_eq!(ted.distance(), distance);
                    assert!(ted.edit_script().is_ok());
                });
            }
        });

        assert_eq!(calls.load(Ordering::Relaxed), once);
    }

    #[proptest]
    fn concurrent_requests_observe_the_same_result(a: MockTree, b: MockTree) {
        let ted = TreeEditDistance::new(&a, &MockTree::ROOT, &b, &MockTree::ROOT);

        let scripts: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| ted.edit_script())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for script in scripts {
            assert!(std::ptr::eq(script.unwrap(), ted.edit_script().unwrap()));
        }
    }

    #[test]
    fn failures_are_reported_on_every_request() {
        let a: Vec<Vec<usize>> = vec![vec![1], vec![], vec![]];
        let b: Vec<Vec<usize>> = vec![vec![]];
        let ted = TreeEditDistance::new(&a, &0, &b, &0);

        let error = Error::InvalidTree {
            side: Side::First,
            source: InvalidTree::Disconnected {
                reached: 2,
                total: 3,
            },
        };

        assert_eq!(ted.distance(), Err(error));
        assert_eq!(ted.edit_script(), Err(error));
        assert_eq!(ted.distance(), Err(error));
    }

    #[test]
    fn the_solution_is_shown_once_computed() {
        let a: Vec<Vec<usize>> = vec![vec![1], vec![]];
        let b: Vec<Vec<usize>> = vec![vec![]];
        let ted = TreeEditDistance::new(&a, &0, &b, &0);

        assert_eq!(
            format!("{ted:?}"),
            "TreeEditDistance { a: [[1], []], ra: 0, b: [[]], rb: 0, cost: UnitCost, solution: None }"
        );

        assert_eq!(ted.distance(), Ok(1));
        assert_eq!(
            format!("{ted:?}"),
            "TreeEditDistance { a: [[1], []], ra: 0, b: [[]], rb: 0, cost: UnitCost, \
             solution: Some(Ok(([Remove(1), Match(0, 0)], 1))) }"
        );
    }

    #[test]
    fn trees_may_have_different_kinds_of_vertices() {
        let a: Vec<Vec<usize>> = vec![vec![1, 2], vec![], vec![]];
        let b: HashMap<_, _> = [("0", vec!["2"]), ("2", vec![])].into();

        let cost = FnCost::from((
            |_: &usize| 1,
            |_: &&str| 1,
            |v: &usize, w: &&str| i32::from(v.to_string() != *w),
        ));

        let ted = TreeEditDistance::with_cost(&a, &0, &b, &"0", cost);
        assert_eq!(ted.distance(), Ok(1));
        assert_eq!(
            ted.edit_script(),
            Ok(&[
                Edit::Remove(&1),
                Edit::Match(&2, &"2"),
                Edit::Match(&0, &"0"),
            ][..])
        );
    }
}
