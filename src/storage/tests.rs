use super::*;
use crate::{tree::Traversable, traversal::DepthFirst};
use arrayvec::ArrayVec;

/// A storage which only implements the required methods, to exercise the provided ones.
#[derive(Debug, Default)]
struct Minimal(ArrayVec<[u32; 4]>);
impl ListStorage for Minimal {
    type Element = u32;

    fn new() -> Self {
        Self(ArrayVec::new())
    }
    fn push(&mut self, element: u32) {
        self.0.push(element)
    }
    fn pop(&mut self) -> Option<u32> {
        self.0.pop()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
    fn get(&self, index: usize) -> Option<&u32> {
        self.0.get(index)
    }
}

#[test]
fn provided_methods() {
    let mut storage = Minimal::new();
    assert!(storage.is_empty());
    storage.push(1);
    storage.push(2);
    storage.try_push(3).expect("room for a third element");
    assert_eq!(storage.len(), 3);
    assert_eq!(storage.get(0), Some(&1));
    assert_eq!(storage.pop(), Some(3));
    storage.clear();
    assert!(storage.is_empty());
    assert_eq!(storage.pop(), None);
}

#[test]
fn arrayvec_reports_overflow() {
    let mut storage: ArrayVec<[u16; 2]> = ListStorage::new();
    assert_eq!(ListStorage::try_push(&mut storage, 10), Ok(()));
    assert_eq!(ListStorage::try_push(&mut storage, 20), Ok(()));
    assert_eq!(
        ListStorage::try_push(&mut storage, 30),
        Err(CapacityError { capacity: 2 }),
    );
    assert_eq!(ListStorage::len(&storage), 2);
    assert_eq!(ListStorage::get(&storage, 1), Some(&20));
}

/// A tree which lives in static memory, usable without an allocator.
struct StaticNode {
    value: u8,
    children: &'static [StaticNode],
}
impl Traversable for StaticNode {
    fn children(&self) -> Option<&[Self]> {
        if self.children.is_empty() {
            None
        } else {
            Some(self.children)
        }
    }
}

static STATIC_TREE: StaticNode = StaticNode {
    value: 1,
    children: &[
        StaticNode {
            value: 2,
            children: &[StaticNode { value: 3, children: &[] }],
        },
        StaticNode { value: 4, children: &[] },
    ],
};

#[test]
fn default_storage_drives_traversals() {
    let mut order = [0; 4];
    let mut visited = 0;
    for (slot, node) in order.iter_mut().zip(STATIC_TREE.depth_first()) {
        *slot = node.value;
        visited += 1;
    }
    assert_eq!(visited, 4);
    assert_eq!(order, [1, 2, 3, 4]);

    let mut breadth_first = STATIC_TREE.breadth_first();
    assert_eq!(breadth_first.nth(1).map(|node| node.value), Some(2));
    assert_eq!(breadth_first.next().map(|node| node.value), Some(4));
}

#[cfg(not(feature = "alloc"))]
#[test]
fn default_storage_is_fixed_without_alloc() {
    let mut storage: DefaultStorage<u8> = ListStorage::new();
    for element in 0..32 {
        assert_eq!(storage.try_push(element), Ok(()));
    }
    assert_eq!(storage.try_push(32), Err(CapacityError { capacity: 32 }));

    let wide = StaticNode { value: 0, children: &[] };
    let mut traversal: DepthFirst<'_, StaticNode> = DepthFirst::new(&wide);
    assert_eq!(traversal.try_next().map(|node| node.map(|n| n.value)), Ok(Some(0)));
}

#[cfg(feature = "alloc")]
#[test]
fn default_storage_grows_with_alloc() {
    let mut storage: DefaultStorage<u8> = ListStorage::new();
    for element in 0..=32 {
        assert_eq!(storage.try_push(element), Ok(()));
    }
    assert_eq!(storage.len(), 33);

    let mut traversal: DepthFirst<'_, StaticNode> = DepthFirst::new(&STATIC_TREE);
    assert_eq!(traversal.try_next().map(|node| node.map(|n| n.value)), Ok(Some(1)));
}

#[cfg(feature = "alloc")]
#[test]
fn vec_is_a_stack() {
    let mut storage: alloc::vec::Vec<char> = ListStorage::new();
    for c in "abc".chars() {
        ListStorage::push(&mut storage, c);
    }
    assert_eq!(ListStorage::pop(&mut storage), Some('c'));
    assert_eq!(ListStorage::get(&storage, 1), Some(&'b'));
    ListStorage::clear(&mut storage);
    assert!(ListStorage::is_empty(&storage));
}

#[cfg(feature = "alloc")]
#[test]
fn deque_is_a_stack() {
    let mut storage: alloc::collections::VecDeque<u8> = ListStorage::new();
    ListStorage::push(&mut storage, 3);
    ListStorage::push(&mut storage, 4);
    ListStorage::push(&mut storage, 5);
    assert_eq!(ListStorage::get(&storage, 0), Some(&3));
    assert_eq!(ListStorage::pop(&mut storage), Some(5));
    assert_eq!(ListStorage::len(&storage), 2);
    assert_eq!(storage.back(), Some(&4));
}
