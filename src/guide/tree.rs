//! Arena-backed navigation tree.
//!
//! Nodes own their children by index; the parent link is a plain index, never a second owner.
//! Nodes are appended during a depth-first pre-order build, so arena order *is* pre-order.

use crate::model::GuideId;
use std::collections::HashMap;

/// Stable position handle of a node within one built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Wrap a raw arena position.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw arena position.
    pub fn get(&self) -> usize {
        self.0
    }
}

/// Displayable representation of one entry in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    id: GuideId,
    label: String,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
    depth: usize,
    expanded: bool,
}

impl TreeNode {
    /// Id of the entry this node represents.
    pub fn id(&self) -> &GuideId {
        &self.id
    }

    /// Resolved display name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Parent node; `None` for top-level nodes.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Children in declared order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Whether the node can be expanded.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Nesting level; top-level nodes are 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether children are shown.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// The built tree plus its id → node reverse index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideTree {
    nodes: Vec<TreeNode>,
    roots: Vec<NodeIndex>,
    index: HashMap<GuideId, NodeIndex>,
}

impl GuideTree {
    /// Empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node under `parent` (or as a root). Children must be added after their parent.
    pub(crate) fn add_node(
        &mut self,
        id: GuideId,
        label: String,
        parent: Option<NodeIndex>,
    ) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len());
        let parent = parent.filter(|p| p.0 < idx.0);
        let depth = parent
            .and_then(|p| self.nodes.get(p.0))
            .map_or(0, |p| p.depth + 1);

        match parent.and_then(|p| self.nodes.get_mut(p.0)) {
            Some(parent_node) => parent_node.children.push(idx),
            None => self.roots.push(idx),
        }

        self.index.insert(id.clone(), idx);
        self.nodes.push(TreeNode {
            id,
            label,
            parent,
            children: Vec::new(),
            depth,
            expanded: false,
        });
        idx
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no node was built.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at `idx`, if it exists.
    pub fn node(&self, idx: NodeIndex) -> Option<&TreeNode> {
        self.nodes.get(idx.0)
    }

    /// Top-level nodes in display order.
    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Constant-time lookup of the node representing an entry.
    pub fn find(&self, id: &GuideId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Whether `id` has a node.
    pub fn contains(&self, id: &GuideId) -> bool {
        self.index.contains_key(id)
    }

    /// First node in pre-order.
    pub fn first(&self) -> Option<NodeIndex> {
        (!self.nodes.is_empty()).then_some(NodeIndex(0))
    }

    /// All nodes in pre-order.
    pub fn pre_order(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.nodes.len()).map(NodeIndex)
    }

    /// Expand or collapse every node.
    pub fn set_all_expanded(&mut self, expanded: bool) {
        for node in &mut self.nodes {
            node.expanded = expanded;
        }
    }

    /// Expand or collapse one node. Unknown indices are ignored.
    pub fn set_expanded(&mut self, idx: NodeIndex, expanded: bool) {
        if let Some(node) = self.nodes.get_mut(idx.0) {
            node.expanded = expanded;
        }
    }

    /// Flip expansion of one node.
    pub fn toggle_expanded(&mut self, idx: NodeIndex) {
        if let Some(node) = self.nodes.get_mut(idx.0) {
            node.expanded = !node.expanded;
        }
    }

    /// Ancestors of `idx`, nearest first.
    pub fn ancestors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out = Vec::new();
        let mut current = self.node(idx).and_then(TreeNode::parent);
        while let Some(parent) = current {
            out.push(parent);
            current = self.node(parent).and_then(TreeNode::parent);
        }
        out
    }

    /// Expand every ancestor so `idx` becomes visible.
    pub fn expand_parent_entries(&mut self, idx: NodeIndex) {
        for ancestor in self.ancestors(idx) {
            self.set_expanded(ancestor, true);
        }
    }

    /// A node is visible when all its ancestors are expanded.
    pub fn is_visible(&self, idx: NodeIndex) -> bool {
        self.node(idx).is_some()
            && self
                .ancestors(idx)
                .into_iter()
                .all(|a| self.node(a).is_some_and(TreeNode::is_expanded))
    }

    /// Visible nodes in display order.
    pub fn visible_rows(&self) -> Vec<NodeIndex> {
        let mut rows = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeIndex> = self.roots.iter().rev().copied().collect();
        while let Some(idx) = stack.pop() {
            rows.push(idx);
            if let Some(node) = self.node(idx) {
                if node.expanded {
                    stack.extend(node.children.iter().rev().copied());
                }
            }
        }
        rows
    }

    /// Indented id outline, one node per line in pre-order.
    pub fn outline(&self) -> String {
        self.nodes
            .iter()
            .map(|n| format!("{}{}", "  ".repeat(n.depth), n.id))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> GuideId {
        GuideId::new(raw).unwrap()
    }

    /// a -> (b -> (c), d), e
    fn sample_tree() -> GuideTree {
        let mut tree = GuideTree::new();
        let a = tree.add_node(id("a"), "A".into(), None);
        let b = tree.add_node(id("b"), "B".into(), Some(a));
        tree.add_node(id("c"), "C".into(), Some(b));
        tree.add_node(id("d"), "D".into(), Some(a));
        tree.add_node(id("e"), "E".into(), None);
        tree
    }

    #[test]
    fn add_node_links_parent_and_children() {
        let tree = sample_tree();
        let a = tree.find(&id("a")).unwrap();
        let b = tree.find(&id("b")).unwrap();
        let d = tree.find(&id("d")).unwrap();

        assert_eq!(tree.node(a).unwrap().children(), &[b, d]);
        assert_eq!(tree.node(b).unwrap().parent(), Some(a));
        assert_eq!(tree.roots().len(), 2);
    }

    #[test]
    fn depth_follows_parent_chain() {
        let tree = sample_tree();
        let c = tree.find(&id("c")).unwrap();
        assert_eq!(tree.node(c).unwrap().depth(), 2);
    }

    #[test]
    fn first_is_first_pre_order_node() {
        let tree = sample_tree();
        assert_eq!(tree.first(), tree.find(&id("a")));
        assert_eq!(GuideTree::new().first(), None);
    }

    #[test]
    fn pre_order_matches_arena_order() {
        let tree = sample_tree();
        let ids: Vec<&str> = tree
            .pre_order()
            .map(|i| tree.node(i).unwrap().id().as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn visible_rows_hide_collapsed_children() {
        let mut tree = sample_tree();
        tree.set_all_expanded(true);
        let b = tree.find(&id("b")).unwrap();
        tree.set_expanded(b, false);

        let ids: Vec<&str> = tree
            .visible_rows()
            .into_iter()
            .map(|i| tree.node(i).unwrap().id().as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "d", "e"]);
    }

    #[test]
    fn collapsed_roots_show_only_roots() {
        let tree = sample_tree();
        assert_eq!(tree.visible_rows().len(), 2);
    }

    #[test]
    fn expand_parent_entries_makes_node_visible() {
        let mut tree = sample_tree();
        let c = tree.find(&id("c")).unwrap();
        assert!(!tree.is_visible(c));

        tree.expand_parent_entries(c);

        assert!(tree.is_visible(c));
        assert!(!tree.node(c).unwrap().is_expanded(), "target itself untouched");
    }

    #[test]
    fn ancestors_are_nearest_first() {
        let tree = sample_tree();
        let c = tree.find(&id("c")).unwrap();
        let names: Vec<&str> = tree
            .ancestors(c)
            .into_iter()
            .map(|i| tree.node(i).unwrap().id().as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn toggle_expanded_flips_state() {
        let mut tree = sample_tree();
        let a = tree.find(&id("a")).unwrap();
        tree.toggle_expanded(a);
        assert!(tree.node(a).unwrap().is_expanded());
        tree.toggle_expanded(a);
        assert!(!tree.node(a).unwrap().is_expanded());
    }

    #[test]
    fn outline_indents_by_depth() {
        let tree = sample_tree();
        insta::assert_snapshot!(tree.outline(), @r"
        a
          b
            c
          d
        e
        ");
    }
}
