use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// An abstraction for a rooted, ordered tree stored as adjacency lists.
///
/// The root is not part of the tree itself, it is supplied alongside it, so the same adjacency
/// may be read from different roots.
///
/// The [neighbors][Tree::neighbors] of a vertex are its children, _in sibling order_. A neighbor
/// equal to the parent of the vertex is skipped, so undirected adjacency lists, where every edge
/// is listed at both of its endpoints, are accepted just as well.
///
/// # Example
///
/// ```rust
/// use zhang_shasha::Tree;
///
/// struct Outline {
///     sections: Vec<Vec<usize>>,
/// }
///
/// impl Tree for Outline {
///     type Vertex = usize;
///
///     type Neighbors<'n> = std::slice::Iter<'n, usize>;
///
///     fn len(&self) -> usize {
///         self.sections.len()
///     }
///
///     fn neighbors<'n>(&'n self, v: &usize) -> Option<Self::Neighbors<'n>> {
///         self.sections.get(*v).map(|s| s.iter())
///     }
/// }
///
/// let outline = Outline {
///     sections: vec![vec![1, 2], vec![], vec![3], vec![]],
/// };
///
/// assert_eq!(outline.len(), 4);
/// assert!(outline.neighbors(&2).into_iter().flatten().eq(&[3]));
/// ```
pub trait Tree {
    /// The type that identifies a vertex.
    type Vertex: Eq + Hash;

    /// A type that iterates over the neighbors of a vertex.
    type Neighbors<'n>: IntoIterator<Item = &'n Self::Vertex>
    where
        Self: 'n;

    /// Returns the number of vertices in this [Tree].
    fn len(&self) -> usize;

    /// Returns whether this [Tree] has no vertices.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the neighbors of `v` in sibling order, or `None` if `v` is not a vertex of this
    /// [Tree].
    fn neighbors<'n>(&'n self, v: &Self::Vertex) -> Option<Self::Neighbors<'n>>;
}

impl<V: Eq + Hash, S: BuildHasher> Tree for HashMap<V, Vec<V>, S> {
    type Vertex = V;
    type Neighbors<'n> = &'n [V] where Self: 'n;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn neighbors<'n>(&'n self, v: &V) -> Option<Self::Neighbors<'n>> {
        self.get(v).map(Vec::as_slice)
    }
}

impl<V: Ord + Hash> Tree for BTreeMap<V, Vec<V>> {
    type Vertex = V;
    type Neighbors<'n> = &'n [V] where Self: 'n;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn neighbors<'n>(&'n self, v: &V) -> Option<Self::Neighbors<'n>> {
        self.get(v).map(Vec::as_slice)
    }
}

/// Vertices are the indices into the outer [Vec].
impl Tree for Vec<Vec<usize>> {
    type Vertex = usize;
    type Neighbors<'n> = &'n [usize];

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn neighbors<'n>(&'n self, v: &usize) -> Option<Self::Neighbors<'n>> {
        self.get(*v).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{collection::vec, prelude::*, sample::Index};
    use test_strategy::proptest;

    /// A random tree over the vertices `0..n` rooted at `0`.
    #[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
    pub(crate) struct MockTree {
        children: Vec<Vec<usize>>,
    }

    impl MockTree {
        pub(crate) const ROOT: usize = 0;

        pub(crate) fn from_parents(parents: impl IntoIterator<Item = usize>) -> Self {
            let mut children = vec![Vec::new()];
            for (v, p) in parents.into_iter().enumerate() {
                children.push(Vec::new());
                children[p].push(v + 1);
            }

            MockTree { children }
        }

        pub(crate) fn children(&self, v: usize) -> &[usize] {
            &self.children[v]
        }
    }

    impl Arbitrary for MockTree {
        type Parameters = usize;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(size: usize) -> Self::Strategy {
            let size = if size == 0 { 12 } else { size };
            vec(any::<Index>(), ..size)
                .prop_map(|parents| {
                    MockTree::from_parents(parents.iter().enumerate().map(|(v, p)| p.index(v + 1)))
                })
                .boxed()
        }
    }

    impl Tree for MockTree {
        type Vertex = usize;
        type Neighbors<'n> = &'n [usize];

        fn len(&self) -> usize {
            self.children.len()
        }

        fn neighbors<'n>(&'n self, v: &usize) -> Option<Self::Neighbors<'n>> {
            self.children.neighbors(v)
        }
    }

    #[proptest]
    fn every_vertex_but_the_root_has_exactly_one_parent(t: MockTree) {
        let mut parents = vec![0; t.len()];
        for v in 0..t.len() {
            for &c in t.neighbors(&v).unwrap() {
                parents[c] += 1;
            }
        }

        assert_eq!(parents[MockTree::ROOT], 0);
        assert!(parents[1..].iter().all(|&p| p == 1));
    }

    #[test]
    fn unknown_vertices_have_no_neighbors() {
        let t: HashMap<_, _> = [("a", vec!["b"]), ("b", vec![])].into();
        assert_eq!(t.neighbors(&"c"), None);
        assert_eq!(t.neighbors(&"a"), Some(&["b"][..]));

        let t: BTreeMap<_, _> = [(1, vec![2]), (2, vec![])].into();
        assert_eq!(t.neighbors(&3), None);
        assert_eq!(t.len(), 2);

        let t: Vec<Vec<usize>> = vec![vec![1], vec![]];
        assert_eq!(t.neighbors(&2), None);
        assert!(!t.is_empty());
    }
}

#[cfg(test)]
pub(crate) use tests::MockTree;
