use crate::{debug, trace};
use crate::{AnnotatedTree, Cost, Edit, Error, ScriptId, Scripts, Side, Step, Tree};
use itertools::iproduct;
use pathfinding::matrix::Matrix;
use std::hash::Hash;

/// The distance between two forests along with one edit script that achieves it.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub(crate) struct Entry<W> {
    pub(crate) distance: W,
    pub(crate) script: ScriptId,
}

/// The tree edit distances between every pair of subtrees.
#[derive(Debug, Clone)]
pub(crate) struct Distances<W> {
    /// Indexed by the postorder indices of the roots of the subtrees.
    pub(crate) treedists: Matrix<Option<Entry<W>>>,
    pub(crate) scripts: Scripts,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Choice {
    Remove,
    Insert,
    Replace,
}

impl Choice {
    /// Ties go to the first candidate.
    fn cheapest<W: Ord>(remove: &W, insert: &W, replace: &W) -> Self {
        if remove <= insert && remove <= replace {
            Choice::Remove
        } else if insert <= replace {
            Choice::Insert
        } else {
            Choice::Replace
        }
    }
}

struct Engine<'a, 't, V1, V2, C: Cost<V1, V2>> {
    a: &'a AnnotatedTree<'t, V1>,
    b: &'a AnnotatedTree<'t, V2>,
    cost: &'a C,
    treedists: Matrix<Option<Entry<C::Weight>>>,
    scripts: Scripts,
}

impl<V1: Eq + Hash, V2: Eq + Hash, C: Cost<V1, V2>> Engine<'_, '_, V1, V2, C> {
    fn checked(w: C::Weight) -> Result<C::Weight, Error> {
        if w < C::Weight::default() {
            Err(Error::NegativeCost)
        } else {
            Ok(w)
        }
    }

    fn remove(&self, u: usize) -> Result<C::Weight, Error> {
        Self::checked(self.cost.remove(self.a.vertex(u)))
    }

    fn insert(&self, v: usize) -> Result<C::Weight, Error> {
        Self::checked(self.cost.insert(self.b.vertex(v)))
    }

    fn update(&self, u: usize, v: usize) -> Result<C::Weight, Error> {
        Self::checked(self.cost.update(self.a.vertex(u), self.b.vertex(v)))
    }

    /// Resolves every pair of subtrees rooted on the leftmost paths from the keyroots `i` and `j`.
    ///
    /// Every other pair of subtrees of `i` and `j` must have been resolved already.
    ///
    /// Only the scripts of the pairs of subtrees resolved here outlive the forest distances.
    fn treedist(&mut self, i: usize, j: usize) -> Result<(), Error> {
        let (a, b) = (self.a, self.b);
        let (li, lj) = (a.lmld(i), b.lmld(j));
        let (m, n) = (i - li + 2, j - lj + 2);

        trace!(i, j, m, n, "treedist");

        let mark = self.scripts.checkpoint();
        let mut resolved = Vec::new();

        // fd[(x, y)] is the distance between the first x vertices from li and the first y from lj.
        let mut fd: Matrix<Entry<C::Weight>> = Matrix::new(m, n, Entry::default());

        for x in 1..m {
            let u = li + x - 1;
            let prev = fd[(x - 1, 0)];
            fd[(x, 0)] = Entry {
                distance: prev.distance + self.remove(u)?,
                script: self.scripts.push(prev.script, Step::Remove(u)),
            };
        }

        for y in 1..n {
            let v = lj + y - 1;
            let prev = fd[(0, y - 1)];
            fd[(0, y)] = Entry {
                distance: prev.distance + self.insert(v)?,
                script: self.scripts.push(prev.script, Step::Insert(v)),
            };
        }

        for x in 1..m {
            for y in 1..n {
                let (u, v) = (li + x - 1, lj + y - 1);

                let above = fd[(x - 1, y)];
                let left = fd[(x, y - 1)];
                let remove = above.distance + self.remove(u)?;
                let insert = left.distance + self.insert(v)?;

                if a.lmld(u) == li && b.lmld(v) == lj {
                    // Both forests are whole trees, so this is also their tree distance.
                    let diagonal = fd[(x - 1, y - 1)];
                    let update = diagonal.distance + self.update(u, v)?;

                    let entry = match Choice::cheapest(&remove, &insert, &update) {
                        Choice::Remove => Entry {
                            distance: remove,
                            script: self.scripts.push(above.script, Step::Remove(u)),
                        },
                        Choice::Insert => Entry {
                            distance: insert,
                            script: self.scripts.push(left.script, Step::Insert(v)),
                        },
                        Choice::Replace => {
                            let step = if update == diagonal.distance {
                                Step::Match(u, v)
                            } else {
                                Step::Update(u, v)
                            };

                            Entry {
                                distance: update,
                                script: self.scripts.push(diagonal.script, step),
                            }
                        }
                    };

                    fd[(x, y)] = entry;
                    resolved.push((u, v, entry));
                } else {
                    let (p, q) = (a.lmld(u) - li, b.lmld(v) - lj);
                    let forest = fd[(p, q)];
                    let tree = self.treedists[(u, v)]
                        .expect("subtrees off the leftmost paths are resolved by earlier keyroots");

                    let replace = forest.distance + tree.distance;

                    fd[(x, y)] = match Choice::cheapest(&remove, &insert, &replace) {
                        Choice::Remove => Entry {
                            distance: remove,
                            script: self.scripts.push(above.script, Step::Remove(u)),
                        },
                        Choice::Insert => Entry {
                            distance: insert,
                            script: self.scripts.push(left.script, Step::Insert(v)),
                        },
                        Choice::Replace => Entry {
                            distance: replace,
                            script: self.scripts.join(forest.script, tree.script),
                        },
                    };
                }
            }
        }

        let mut roots: Vec<_> = resolved.iter().map(|&(_, _, entry)| entry.script).collect();
        self.scripts.compact(mark, &mut roots);

        for ((u, v, entry), script) in resolved.into_iter().zip(roots) {
            debug_assert!(self.treedists[(u, v)].is_none());
            self.treedists[(u, v)] = Some(Entry { script, ..entry });
        }

        trace!(links = self.scripts.len(), "compacted");

        Ok(())
    }
}

/// Computes the tree edit distance between every pair of subtrees of `a` and `b`.
pub(crate) fn zhang_shasha<V1, V2, C>(
    a: &AnnotatedTree<V1>,
    b: &AnnotatedTree<V2>,
    cost: &C,
) -> Result<Distances<C::Weight>, Error>
where
    V1: Eq + Hash,
    V2: Eq + Hash,
    C: Cost<V1, V2>,
{
    let mut engine = Engine {
        a,
        b,
        cost,
        treedists: Matrix::new(a.len(), b.len(), None),
        scripts: Scripts::default(),
    };

    // Keyroots come in increasing postorder, so every pair of subtrees is resolved before any
    // pair of their ancestors needs it.
    for (&i, &j) in iproduct!(a.keyroots(), b.keyroots()) {
        engine.treedist(i, j)?;
    }

    Ok(Distances {
        treedists: engine.treedists,
        scripts: engine.scripts,
    })
}

/// Finds the lowest cost sequence of [Edit]s that transforms one [Tree] into the other.
///
/// The sequence of [Edit]s is understood to apply to the tree `a`, read from the root `ra`, so
/// it becomes the tree `b`, read from the root `rb`.
///
/// # Example
///
/// ```rust
/// use zhang_shasha::{diff, Edit, UnitCost};
///
/// let a: Vec<Vec<usize>> = vec![vec![1, 2], vec![], vec![]];
/// let b: Vec<Vec<usize>> = vec![vec![1], vec![]];
///
/// let (edits, cost) = diff(&a, &0, &b, &0, UnitCost).unwrap();
///
/// assert_eq!(cost, 1);
/// assert_eq!(
///     &*edits,
///     &[Edit::Match(&1, &1), Edit::Remove(&2), Edit::Match(&0, &0)]
/// );
/// ```
pub fn diff<'t, T1, T2, C>(
    a: &'t T1,
    ra: &'t T1::Vertex,
    b: &'t T2,
    rb: &'t T2::Vertex,
    cost: C,
) -> Result<(Box<[Edit<'t, T1::Vertex, T2::Vertex>]>, C::Weight), Error>
where
    T1: Tree,
    T2: Tree,
    C: Cost<T1::Vertex, T2::Vertex>,
{
    let a = AnnotatedTree::new(a, ra).map_err(|source| Error::InvalidTree {
        side: Side::First,
        source,
    })?;

    let b = AnnotatedTree::new(b, rb).map_err(|source| Error::InvalidTree {
        side: Side::Second,
        source,
    })?;

    let distances = zhang_shasha(&a, &b, &cost)?;
    let entry = distances.treedists[(a.len() - 1, b.len() - 1)]
        .expect("the whole trees are resolved by the pair of roots");

    let edits: Box<[_]> = distances
        .scripts
        .unroll(entry.script)
        .into_iter()
        .map(|step| match step {
            Step::Remove(u) => Edit::Remove(a.vertex(u)),
            Step::Insert(v) => Edit::Insert(b.vertex(v)),
            Step::Update(u, v) => Edit::Update(a.vertex(u), b.vertex(v)),
            Step::Match(u, v) => Edit::Match(a.vertex(u), b.vertex(v)),
        })
        .collect();

    debug!(
        first = a.len(),
        second = b.len(),
        edits = edits.len(),
        "tree edit distance"
    );

    Ok((edits, entry.distance))
}
