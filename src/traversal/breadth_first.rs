use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
    mem,
};
use crate::{
    storage::{ListStorage, DefaultStorage},
    tree::Traversable,
    CapacityError,
};

/// An iterator visiting every node of a tree in breadth-first level order: the root, then all of its children, then all of their children, and so on, each level from left to right.
///
/// The traversal keeps two level buffers. Every node of the current level is visited in order; once the level is exhausted, the next one is built by concatenating the children of every node in the current level, and the buffers swap roles. The traversal ends when a level turns out to be empty.
///
/// # Example
/// ```rust
/// use ember::{tree::Node, Traversable};
///
/// //        1
/// //      / | \
/// //     2  3  4
/// //    / \     \
/// //   5   6     7
/// //       |
/// //       8
/// let tree = Node::branch(1, vec![
///     Node::branch(2, vec![
///         Node::leaf(5),
///         Node::branch(6, vec![Node::leaf(8)]),
///     ]),
///     Node::leaf(3),
///     Node::branch(4, vec![Node::leaf(7)]),
/// ]);
///
/// let mut traversal = tree.breadth_first();
/// let first_level: Vec<_> = traversal.by_ref().take(4).map(|node| node.value).collect();
/// assert_eq!(first_level, [1, 2, 3, 4]);
/// assert_eq!(traversal.depth(), 1);
///
/// let rest: Vec<_> = traversal.map(|node| node.value).collect();
/// assert_eq!(rest, [5, 6, 7, 8]);
/// ```
pub struct BreadthFirst<'a, N, S = DefaultStorage<&'a N>>
where
    N: Traversable,
    S: ListStorage<Element = &'a N>,
{
    current: S,
    next: S,
    /// Index of the next node to visit within `current`.
    position: usize,
    depth: usize,
    root: Option<&'a N>,
}
impl<'a, N, S> BreadthFirst<'a, N, S>
where
    N: Traversable,
    S: ListStorage<Element = &'a N>,
{
    /// Creates a traversal starting at the specified node, with two new empty level buffers.
    #[inline(always)]
    pub fn new(root: &'a N) -> Self {
        Self::with_storage(root, S::new(), S::new())
    }
    /// Creates a traversal starting at the specified node, reusing the specified level buffers. Any elements already in them are removed.
    #[inline]
    pub fn with_storage(root: &'a N, mut current: S, mut next: S) -> Self {
        current.clear();
        next.clear();
        Self {
            current,
            next,
            position: 0,
            depth: 0,
            root: Some(root),
        }
    }
    /// Visits the next node, reporting an error if a level buffer cannot fit a whole level of the tree.
    ///
    /// Returns `Ok(None)` once every node has been visited. After an error, the traversal is finished and only returns `Ok(None)`.
    pub fn try_next(&mut self) -> Result<Option<&'a N>, CapacityError> {
        if let Some(root) = self.root.take() {
            if let Err(error) = self.current.try_push(root) {
                return Err(self.fail(error));
            }
        }
        loop {
            if let Some(&node) = self.current.get(self.position) {
                self.position += 1;
                return Ok(Some(node));
            }
            if self.current.is_empty() {
                return Ok(None);
            }
            self.descend()?;
        }
    }
    /// Replaces the exhausted current level with the children of its nodes.
    fn descend(&mut self) -> Result<(), CapacityError> {
        self.next.clear();
        for index in 0..self.current.len() {
            let node: &'a N = match self.current.get(index) {
                Some(&node) => node,
                None => break,
            };
            for child in node.children().unwrap_or(&[]) {
                if let Err(error) = self.next.try_push(child) {
                    return Err(self.fail(error));
                }
            }
        }
        mem::swap(&mut self.current, &mut self.next);
        self.position = 0;
        if self.current.is_empty() {
            self.next.clear();
        } else {
            self.depth += 1;
            tracing::trace!(
                depth = self.depth,
                width = self.current.len(),
                "breadth-first traversal descended a level"
            );
        }
        Ok(())
    }
    fn fail(&mut self, error: CapacityError) -> CapacityError {
        tracing::debug!(
            capacity = error.capacity,
            depth = self.depth,
            "breadth-first traversal storage ran out of capacity"
        );
        self.current.clear();
        self.next.clear();
        self.position = 0;
        error
    }
    /// Returns the depth of the level which the most recently visited node belongs to, the root being at depth zero.
    #[inline(always)]
    pub const fn depth(&self) -> usize {
        self.depth
    }
    /// Returns the number of nodes of the current level which have not been visited yet.
    #[inline]
    pub fn pending(&self) -> usize {
        self.current.len() - self.position + usize::from(self.root.is_some())
    }
    /// Consumes the traversal, returning the two level buffers it used so that they can be reused for another traversal.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_storage(self) -> (S, S) {
        (self.current, self.next)
    }
}
impl<'a, N, S> Iterator for BreadthFirst<'a, N, S>
where
    N: Traversable,
    S: ListStorage<Element = &'a N>,
{
    type Item = &'a N;

    /// Visits the next node.
    ///
    /// # Panics
    /// Panics if a level buffer runs out of capacity. Use [`try_next`] to handle that case.
    ///
    /// [`try_next`]: #method.try_next " "
    #[inline]
    #[track_caller]
    fn next(&mut self) -> Option<&'a N> {
        self.try_next()
            .expect("breadth-first traversal storage ran out of capacity")
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending(), None)
    }
}
impl<'a, N, S> FusedIterator for BreadthFirst<'a, N, S>
where
    N: Traversable,
    S: ListStorage<Element = &'a N>,
{
}
impl<'a, N, S> Clone for BreadthFirst<'a, N, S>
where
    N: Traversable,
    S: ListStorage<Element = &'a N> + Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            next: self.next.clone(),
            position: self.position,
            depth: self.depth,
            root: self.root,
        }
    }
}
impl<'a, N, S> Debug for BreadthFirst<'a, N, S>
where
    N: Traversable + Debug,
    S: ListStorage<Element = &'a N> + Debug,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadthFirst")
            .field("current", &self.current)
            .field("next", &self.next)
            .field("position", &self.position)
            .field("depth", &self.depth)
            .field("root", &self.root)
            .finish()
    }
}
