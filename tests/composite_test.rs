//! Tests for the composite tree: structure rules and pre-order display

use patternbook::domain::{DomainError, NodeId, Tree};
use patternbook::util::testing;

// Root
// ├── A
// └── B
//     └── C
fn sample() -> (Tree, NodeId, NodeId, NodeId, NodeId) {
    testing::init_test_setup();
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

// ============================================================
// Display
// ============================================================

#[test]
fn given_nested_tree_when_displaying_then_prints_pre_order_with_step_two() {
    let (tree, root, ..) = sample();

    let lines = tree.display(root, 1).unwrap();

    assert_eq!(lines, vec!["-Root", "---A", "---B", "-----C"]);
}

#[test]
fn given_empty_container_when_displaying_then_prints_only_its_name() {
    let mut tree = Tree::new();
    let empty = tree.container("Empty");

    assert_eq!(tree.display(empty, 1).unwrap(), vec!["-Empty"]);
}

#[test]
fn given_leaf_when_displaying_then_prints_one_line_at_depth() {
    let mut tree = Tree::new();
    let leaf = tree.leaf("notes.txt");

    assert_eq!(tree.display(leaf, 3).unwrap(), vec!["---notes.txt"]);
    assert_eq!(tree.display(leaf, 0).unwrap(), vec!["notes.txt"]);
}

#[test]
fn given_children_added_in_order_when_displaying_then_keeps_insertion_order() {
    let mut tree = Tree::new();
    let root = tree.container("root");
    for name in ["z", "a", "m"] {
        let leaf = tree.leaf(name);
        tree.add(root, leaf).unwrap();
    }

    let names: Vec<&str> = tree.walk(root, 0).unwrap().map(|v| v.name).collect();

    assert_eq!(names, vec!["root", "z", "a", "m"]);
}

// ============================================================
// Remove
// ============================================================

#[test]
fn given_container_child_when_removing_then_display_omits_its_subtree() {
    let (mut tree, root, _, b, c) = sample();

    assert!(tree.remove(root, b).unwrap());

    assert_eq!(tree.display(root, 1).unwrap(), vec!["-Root", "---A"]);
    // detached subtree is still a valid root of its own
    assert_eq!(tree.display(b, 1).unwrap(), vec!["-B", "---C"]);
    assert_eq!(tree.parent(b).unwrap(), None);
    assert_eq!(tree.parent(c).unwrap(), Some(b));
}

#[test]
fn given_node_not_among_children_when_removing_then_is_noop() {
    let (mut tree, root, _, _, c) = sample();

    assert!(!tree.remove(root, c).unwrap());

    assert_eq!(tree.display(root, 1).unwrap().len(), 4);
}

#[test]
fn given_removed_child_when_adding_elsewhere_then_reattaches() {
    let (mut tree, root, a, b, _) = sample();

    tree.remove(root, a).unwrap();
    tree.add(b, a).unwrap();

    assert_eq!(
        tree.display(root, 0).unwrap(),
        vec!["Root", "--B", "----C", "----A"]
    );
}

#[test]
fn given_leaf_target_when_removing_then_errors() {
    let (mut tree, _, a, _, c) = sample();

    assert_eq!(
        tree.remove(a, c),
        Err(DomainError::NotAContainer("A".into()))
    );
}

// ============================================================
// Add preconditions
// ============================================================

#[test]
fn given_leaf_target_when_adding_then_errors() {
    let (mut tree, _, a, ..) = sample();
    let orphan = tree.leaf("orphan");

    assert_eq!(
        tree.add(a, orphan),
        Err(DomainError::NotAContainer("A".into()))
    );
}

#[test]
fn given_container_when_adding_itself_then_detects_cycle() {
    let mut tree = Tree::new();
    let dir = tree.container("dir");

    assert!(matches!(
        tree.add(dir, dir),
        Err(DomainError::CycleDetected { .. })
    ));
}

#[test]
fn given_ancestor_when_adding_to_descendant_then_detects_cycle() {
    let mut tree = Tree::new();
    let top = tree.container("top");
    let mid = tree.container("mid");
    let bottom = tree.container("bottom");
    tree.add(top, mid).unwrap();
    tree.add(mid, bottom).unwrap();

    let result = tree.add(bottom, top);

    assert_eq!(
        result,
        Err(DomainError::CycleDetected {
            parent: "bottom".into(),
            child: "top".into(),
        })
    );
    assert!(tree.children(bottom).unwrap().is_empty());
}

#[test]
fn given_attached_child_when_adding_to_second_parent_then_errors() {
    let (mut tree, _, a, ..) = sample();
    let other = tree.container("other");

    assert_eq!(
        tree.add(other, a),
        Err(DomainError::AlreadyAttached("A".into()))
    );
}

// ============================================================
// Stale handles
// ============================================================

#[test]
fn given_discarded_node_when_displaying_then_fails_fast() {
    let (mut tree, _, _, b, c) = sample();
    tree.discard(b).unwrap();

    assert_eq!(tree.display(c, 1), Err(DomainError::NodeNotFound(c)));
    assert!(matches!(tree.walk(b, 0), Err(DomainError::NodeNotFound(_))));
}

#[test]
fn given_discarded_node_when_adding_then_errors() {
    let (mut tree, root, a, ..) = sample();
    tree.discard(a).unwrap();

    assert_eq!(tree.add(root, a), Err(DomainError::NodeNotFound(a)));
}

#[test]
fn given_handle_from_populated_other_tree_when_displaying_then_errors() {
    let (_, root, ..) = sample();
    let (other, other_root, ..) = sample();

    assert_eq!(other.display(root, 1), Err(DomainError::NodeNotFound(root)));
    assert!(!other.contains(root));
    assert!(other.contains(other_root));
}

#[test]
fn given_handle_from_populated_other_tree_when_adding_then_errors_and_leaves_both_intact() {
    let (mut tree, root, a, ..) = sample();
    let (mut other, other_root, other_a, ..) = sample();
    let free = other.leaf("Free");

    assert_eq!(tree.add(root, free), Err(DomainError::NodeNotFound(free)));
    assert_eq!(other.add(other_root, a), Err(DomainError::NodeNotFound(a)));
    assert_eq!(tree.remove(root, other_a), Err(DomainError::NodeNotFound(other_a)));
    assert_eq!(other.discard(a), Err(DomainError::NodeNotFound(a)));

    assert_eq!(
        tree.display(root, 1).unwrap(),
        vec!["-Root", "---A", "---B", "-----C"]
    );
    assert_eq!(other.len(), 5);
    assert_eq!(other.parent(free), Ok(None));
}
