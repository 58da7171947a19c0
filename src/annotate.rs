use crate::{debug, InvalidTree, Tree};
use std::{collections::HashMap, hash::Hash};

/// A [Tree] read from its root and laid out in postorder.
///
/// Vertices are addressed by their postorder index, children strictly before their parent and
/// siblings in the order they are listed, so the root always comes last.
#[derive(Debug, Clone)]
pub struct AnnotatedTree<'t, V> {
    postorder: Box<[&'t V]>,
    index: HashMap<&'t V, usize>,
    parents: Box<[Option<usize>]>,
    lmlds: Box<[usize]>,
    keyroots: Box<[usize]>,
}

#[allow(clippy::len_without_is_empty)]
impl<'t, V: Eq + Hash> AnnotatedTree<'t, V> {
    /// Reads `tree` from `root`.
    ///
    /// Fails unless every vertex of `tree` is reachable from `root` along exactly one path.
    pub fn new<T: Tree<Vertex = V>>(tree: &'t T, root: &'t V) -> Result<Self, InvalidTree> {
        if tree.neighbors(root).is_none() {
            return Err(InvalidTree::MissingRoot);
        }

        // Indexed in discovery order until the postorder is known.
        let mut vertices = vec![root];
        let mut parents = vec![None];
        let mut first_child = vec![None];
        let mut index = HashMap::with_capacity(tree.len());
        index.insert(root, 0);

        let mut stack = vec![0];
        let mut preorder = Vec::with_capacity(tree.len());

        while let Some(u) = stack.pop() {
            let parent = parents[u].map(|p: usize| vertices[p]);
            let neighbors = tree.neighbors(vertices[u]).ok_or(InvalidTree::UnknownVertex)?;

            for w in neighbors {
                if parent == Some(w) {
                    continue;
                }

                let c = vertices.len();
                if index.insert(w, c).is_some() {
                    return Err(InvalidTree::Cycle);
                }

                vertices.push(w);
                parents.push(Some(u));
                first_child.push(None);
                first_child[u].get_or_insert(c);
                stack.push(c);
            }

            preorder.push(u);
        }

        if vertices.len() < tree.len() {
            return Err(InvalidTree::Disconnected {
                reached: vertices.len(),
                total: tree.len(),
            });
        }

        let mut postorder_index = vec![0; vertices.len()];
        for (i, &u) in preorder.iter().rev().enumerate() {
            postorder_index[u] = i;
        }

        for i in index.values_mut() {
            *i = postorder_index[*i];
        }

        let postorder: Box<[_]> = preorder.iter().rev().map(|&u| vertices[u]).collect();

        let parents: Box<[_]> = preorder
            .iter()
            .rev()
            .map(|&u| parents[u].map(|p| postorder_index[p]))
            .collect();

        let mut lmlds = Vec::with_capacity(postorder.len());
        for (i, &u) in preorder.iter().rev().enumerate() {
            // The first child precedes its parent, so its lmld is already known.
            let lmld = first_child[u].map_or(i, |c| lmlds[postorder_index[c]]);
            lmlds.push(lmld);
        }

        let keyroots: Box<[_]> = (0..postorder.len())
            .filter(|&i| parents[i].map_or(true, |p| lmlds[i] != lmlds[p]))
            .collect();

        debug!(
            len = postorder.len(),
            keyroots = keyroots.len(),
            "annotated tree"
        );

        Ok(AnnotatedTree {
            postorder,
            index,
            parents,
            lmlds: lmlds.into(),
            keyroots,
        })
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.postorder.len()
    }

    /// Returns the root, which is always the last vertex in postorder.
    pub fn root(&self) -> &'t V {
        self.postorder[self.len() - 1]
    }

    /// Returns the vertices in postorder.
    pub fn postorder(&self) -> &[&'t V] {
        &self.postorder
    }

    /// Returns the vertex at postorder index `i`.
    pub fn vertex(&self, i: usize) -> &'t V {
        self.postorder[i]
    }

    /// Returns the postorder index of `v`, if it is a vertex of this tree.
    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    /// Returns the postorder index of the parent of the vertex at `i`.
    pub fn parent(&self, i: usize) -> Option<usize> {
        self.parents[i]
    }

    /// Returns the postorder index of the leftmost leaf descendant of the vertex at `i`.
    ///
    /// A leaf is its own leftmost leaf descendant.
    pub fn lmld(&self, i: usize) -> usize {
        self.lmlds[i]
    }

    /// Returns the [lmld][AnnotatedTree::lmld] of every vertex, aligned to the postorder.
    pub fn lmlds(&self) -> &[usize] {
        &self.lmlds
    }

    /// Returns the postorder indices of the keyroots in increasing order.
    ///
    /// A keyroot is either the root or a vertex that is not the first child of its parent, that
    /// is, a vertex whose lmld is not shared by any vertex that comes after it.
    pub fn keyroots(&self) -> &[usize] {
        &self.keyroots
    }

    /// Whether the vertex at `i` is a keyroot.
    pub fn is_keyroot(&self, i: usize) -> bool {
        self.keyroots.binary_search(&i).is_ok()
    }
}
