//! Composite: arena-backed tree of leaves and containers.
//!
//! Nodes are created detached and attached with [`Tree::add`]. A container owns
//! its children exclusively, so every node has at most one parent and the
//! structure can never contain a cycle.

use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Depth added per tree level when displaying.
pub const DEPTH_STEP: usize = 2;

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a node inside a [`Tree`].
///
/// Carries the owning tree's identity plus a generational index, so a handle
/// to a discarded node or to a node of another tree never resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    tree: u64,
    index: Index,
}

/// Closed set of node variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    /// Ordered children, in insertion order
    Container(Vec<NodeId>),
}

/// Tree node: a name plus its variant.
#[derive(Debug)]
pub struct Node {
    name: String,
    parent: Option<NodeId>,
    kind: NodeKind,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Container(_))
    }

    /// Children in display order; always empty for a leaf.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Leaf => &[],
            NodeKind::Container(children) => children,
        }
    }
}

/// One step of a pre-order walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<'a> {
    pub id: NodeId,
    pub depth: usize,
    pub name: &'a str,
}

/// Owner of all nodes. Detached nodes are independent roots.
#[derive(Debug)]
pub struct Tree {
    id: u64,
    arena: Arena<Node>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Self {
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            arena: Arena::new(),
        }
    }

    /// Create a detached leaf.
    pub fn leaf(&mut self, name: impl Into<String>) -> NodeId {
        self.insert(name.into(), NodeKind::Leaf)
    }

    /// Create a detached, empty container.
    pub fn container(&mut self, name: impl Into<String>) -> NodeId {
        self.insert(name.into(), NodeKind::Container(Vec::new()))
    }

    fn insert(&mut self, name: String, kind: NodeKind) -> NodeId {
        let index = self.arena.insert(Node {
            name,
            parent: None,
            kind,
        });
        let id = NodeId {
            tree: self.id,
            index,
        };
        debug!(?id, "node created");
        id
    }

    /// Arena slot of `id`, if it belongs to this tree.
    fn index(&self, id: NodeId) -> DomainResult<Index> {
        if id.tree == self.id {
            Ok(id.index)
        } else {
            Err(DomainError::NodeNotFound(id))
        }
    }

    pub fn get(&self, id: NodeId) -> DomainResult<&Node> {
        self.arena
            .get(self.index(id)?)
            .ok_or(DomainError::NodeNotFound(id))
    }

    fn get_mut(&mut self, id: NodeId) -> DomainResult<&mut Node> {
        let index = self.index(id)?;
        self.arena
            .get_mut(index)
            .ok_or(DomainError::NodeNotFound(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_ok()
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn parent(&self, id: NodeId) -> DomainResult<Option<NodeId>> {
        Ok(self.get(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> DomainResult<&[NodeId]> {
        Ok(self.get(id)?.children())
    }

    /// Append `child` to `container`'s children.
    ///
    /// Fails if either node is unknown, `container` is a leaf, `child` already
    /// has a parent, or `child` is `container` itself or one of its ancestors.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, container: NodeId, child: NodeId) -> DomainResult<()> {
        let parent_node = self.get(container)?;
        if !parent_node.is_container() {
            return Err(DomainError::NotAContainer(parent_node.name.clone()));
        }
        let child_node = self.get(child)?;
        if child_node.parent.is_some() {
            return Err(DomainError::AlreadyAttached(child_node.name.clone()));
        }
        if self.ancestors(container).any(|a| a == child) {
            return Err(DomainError::CycleDetected {
                parent: parent_node.name.clone(),
                child: child_node.name.clone(),
            });
        }

        if let NodeKind::Container(children) = &mut self.get_mut(container)?.kind {
            children.push(child);
        }
        self.get_mut(child)?.parent = Some(container);
        Ok(())
    }

    /// Detach the first occurrence of `child` from `container`.
    ///
    /// Returns `Ok(false)` when `child` is not among the children, and
    /// `NodeNotFound` when it belongs to another tree. The detached subtree
    /// stays in the tree as its own root.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, container: NodeId, child: NodeId) -> DomainResult<bool> {
        self.index(child)?;
        let node = self.get_mut(container)?;
        let NodeKind::Container(children) = &mut node.kind else {
            return Err(DomainError::NotAContainer(node.name.clone()));
        };
        let Some(pos) = children.iter().position(|&c| c == child) else {
            return Ok(false);
        };
        children.remove(pos);
        if let Ok(child_node) = self.get_mut(child) {
            child_node.parent = None;
        }
        Ok(true)
    }

    /// Drop `id` and its whole subtree, detaching it first if attached.
    ///
    /// Returns the number of nodes freed.
    #[instrument(level = "debug", skip(self))]
    pub fn discard(&mut self, id: NodeId) -> DomainResult<usize> {
        if let Some(parent) = self.parent(id)? {
            self.remove(parent, id)?;
        }
        let doomed: Vec<NodeId> = self.walk(id, 0)?.map(|v| v.id).collect();
        for node in &doomed {
            self.arena.remove(node.index);
        }
        debug!(freed = doomed.len(), "subtree discarded");
        Ok(doomed.len())
    }

    /// Walk from `id` up to the topmost root, starting with `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.contains(id).then_some(id), move |current| {
            self.arena.get(current.index).and_then(|n| n.parent)
        })
    }

    /// Lazy depth-first pre-order walk, adding [`DEPTH_STEP`] per level.
    pub fn walk(&self, root: NodeId, depth: usize) -> DomainResult<Walk<'_>> {
        self.walk_stepped(root, depth, DEPTH_STEP)
    }

    /// Like [`Tree::walk`] with a caller-chosen step.
    pub fn walk_stepped(
        &self,
        root: NodeId,
        depth: usize,
        step: usize,
    ) -> DomainResult<Walk<'_>> {
        self.get(root)?;
        Ok(Walk {
            tree: self,
            stack: vec![(root, depth)],
            step,
        })
    }

    /// Number of levels below and including `root`.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self, root: NodeId) -> DomainResult<usize> {
        let levels = self
            .walk_stepped(root, 1, 1)?
            .map(|v| v.depth)
            .max()
            .unwrap_or(0);
        Ok(levels)
    }

    /// Names of all leaf variants under `root`, in display order.
    pub fn leaf_names(&self, root: NodeId) -> DomainResult<Vec<&str>> {
        Ok(self
            .walk(root, 0)?
            .filter(|v| self.get(v.id).is_ok_and(|n| !n.is_container()))
            .map(|v| v.name)
            .collect())
    }
}

/// Pre-order iterator produced by [`Tree::walk`].
pub struct Walk<'a> {
    tree: &'a Tree,
    stack: Vec<(NodeId, usize)>,
    step: usize,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.stack.pop() {
            if let Some(node) = self.tree.arena.get(id.index) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children().iter().rev() {
                    self.stack.push((child, depth + self.step));
                }
                return Some(Visit {
                    id,
                    depth,
                    name: &node.name,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Tree, NodeId, NodeId, NodeId, NodeId) {
        let mut tree = Tree::new();
        let root = tree.container("Root");
        let a = tree.leaf("A");
        let b = tree.container("B");
        let c = tree.leaf("C");
        tree.add(root, a).unwrap();
        tree.add(root, b).unwrap();
        tree.add(b, c).unwrap();
        (tree, root, a, b, c)
    }

    #[test]
    fn given_nested_tree_when_walking_then_depth_grows_by_step() {
        let (tree, root, ..) = sample();
        let visits: Vec<(usize, &str)> = tree
            .walk(root, 1)
            .unwrap()
            .map(|v| (v.depth, v.name))
            .collect();
        assert_eq!(visits, vec![(1, "Root"), (3, "A"), (3, "B"), (5, "C")]);
    }

    #[test]
    fn given_nested_tree_when_measuring_depth_then_counts_levels() {
        let (tree, root, _, b, c) = sample();
        assert_eq!(tree.depth(root).unwrap(), 3);
        assert_eq!(tree.depth(b).unwrap(), 2);
        assert_eq!(tree.depth(c).unwrap(), 1);
    }

    #[test]
    fn given_nested_tree_when_collecting_leaves_then_skips_containers() {
        let (mut tree, root, ..) = sample();
        let empty = tree.container("Empty");
        tree.add(root, empty).unwrap();
        assert_eq!(tree.leaf_names(root).unwrap(), vec!["A", "C"]);
    }

    #[test]
    fn given_child_when_listing_ancestors_then_ends_at_root() {
        let (tree, root, _, b, c) = sample();
        assert_eq!(tree.ancestors(c).collect::<Vec<_>>(), vec![c, b, root]);
    }

    #[test]
    fn given_attached_subtree_when_discarding_then_frees_all_nodes() {
        let (mut tree, root, _, b, c) = sample();
        assert_eq!(tree.discard(b).unwrap(), 2);
        assert!(!tree.contains(c));
        assert_eq!(tree.children(root).unwrap().len(), 1);
        assert_eq!(tree.len(), 2);
    }
}
