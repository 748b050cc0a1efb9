use super::*;
use alloc::vec;
use core::cell::Cell;

#[test]
fn leaves_and_branches() {
    let leaf = Node::leaf('a');
    assert!(leaf.is_leaf());
    assert_eq!(Traversable::children(&leaf), None);

    let empty_branch = Node::branch('b', vec![]);
    assert!(empty_branch.is_branch());
    assert_eq!(Traversable::children(&empty_branch), Some(&[][..]));

    assert_eq!(Node::from('c'), Node::leaf('c'));
}

#[test]
fn push_child_builds_nested_branches() {
    let mut root = Node::leaf(0);
    root.push_child(Node::leaf(1)).push_child(Node::leaf(2));
    root.push_child(3.into());

    assert_eq!(
        root,
        Node::branch(0, vec![
            Node::branch(1, vec![Node::leaf(2)]),
            Node::leaf(3),
        ]),
    );
    assert_eq!(root.into_value(), 0);
}

#[test]
fn traversal_shortcuts_use_default_storage() {
    let tree = Node::branch("root", vec![Node::leaf("a"), Node::leaf("b")]);
    assert_eq!(tree.depth_first().count(), 3);
    assert_eq!(tree.breadth_first().last().map(|n| n.value), Some("b"));
}

fn chain(depth: u32) -> Node<u32> {
    let mut tree = Node::leaf(depth);
    for value in (0..depth).rev() {
        tree = Node::branch(value, vec![tree]);
    }
    tree
}

#[test]
fn very_deep_trees_can_be_dropped() {
    let tree = chain(200_000);
    assert_eq!(tree.depth_first().count(), 200_001);
    drop(tree);

    assert_eq!(chain(200_000).into_value(), 0);
}

/// Counts how many times values sharing the same counter have been dropped.
struct DropCounter<'a>(&'a Cell<usize>);
impl Drop for DropCounter<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn every_payload_is_dropped_once() {
    let drops = Cell::new(0);
    let mut root = Node::leaf(DropCounter(&drops));
    for _ in 0..3 {
        let child = root.push_child(Node::leaf(DropCounter(&drops)));
        child.push_child(Node::leaf(DropCounter(&drops)));
        child.push_child(Node::branch(DropCounter(&drops), vec![]));
    }
    assert_eq!(root.depth_first().count(), 10);
    drop(root);
    assert_eq!(drops.get(), 10);

    let drops = Cell::new(0);
    let root = Node::branch(DropCounter(&drops), vec![Node::leaf(DropCounter(&drops))]);
    let value = root.into_value();
    assert_eq!(drops.get(), 1);
    drop(value);
    assert_eq!(drops.get(), 2);
}
