//! Text renderers for composite trees.
//!
//! Traversal lives in [`Tree::walk`]; this module only turns visits into lines.

use termtree::Tree as TermTree;

use crate::domain::composite::{NodeId, Tree, Visit, DEPTH_STEP};
use crate::domain::error::DomainResult;

/// Indentation mark and per-level step for dash-prefixed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayStyle {
    pub indent: char,
    pub step: usize,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            indent: '-',
            step: DEPTH_STEP,
        }
    }
}

impl DisplayStyle {
    /// `depth` indentation marks followed by the node name.
    pub fn line(&self, visit: &Visit<'_>) -> String {
        let mut line: String = std::iter::repeat(self.indent).take(visit.depth).collect();
        line.push_str(visit.name);
        line
    }
}

impl Tree {
    /// Dash-prefixed display of `root` and its subtree, one line per node.
    pub fn display(&self, root: NodeId, depth: usize) -> DomainResult<Vec<String>> {
        self.display_with(root, depth, &DisplayStyle::default())
    }

    pub fn display_with(
        &self,
        root: NodeId,
        depth: usize,
        style: &DisplayStyle,
    ) -> DomainResult<Vec<String>> {
        Ok(self
            .walk_stepped(root, depth, style.step)?
            .map(|visit| style.line(&visit))
            .collect())
    }
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self, root: NodeId) -> DomainResult<TermTree<String>>;
}

impl TreeNodeConvert for Tree {
    fn to_tree_string(&self, root: NodeId) -> DomainResult<TermTree<String>> {
        let node = self.get(root)?;
        let leaves = node
            .children()
            .iter()
            .map(|&child| self.to_tree_string(child))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(TermTree::new(node.name().to_string()).with_leaves(leaves))
    }
}
