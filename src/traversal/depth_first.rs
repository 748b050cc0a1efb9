use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use crate::{
    storage::{ListStorage, DefaultStorage},
    tree::Traversable,
    CapacityError,
};

/// An iterator visiting every node of a tree in depth-first pre-order: the node itself first, then the subtree of each of its children, from the first child to the last.
///
/// The traversal uses an explicit stack instead of recursion. Visiting a node pops it off the stack and pushes its children in reverse order, so that the first child ends up on top and is visited next.
///
/// # Example
/// ```rust
/// use ember::{tree::Node, traversal::DepthFirst};
/// use arrayvec::ArrayVec;
///
/// let tree = Node::branch('a', vec![
///     Node::branch('b', vec![Node::leaf('c')]),
///     Node::leaf('d'),
/// ]);
///
/// // A traversal which keeps at most 4 pending nodes and never allocates:
/// let traversal = DepthFirst::<_, ArrayVec<[_; 4]>>::new(&tree);
/// let order: String = traversal.map(|node| node.value).collect();
/// assert_eq!(order, "abcd");
/// ```
pub struct DepthFirst<'a, N, S = DefaultStorage<&'a N>>
where
    N: Traversable,
    S: ListStorage<Element = &'a N>,
{
    stack: S,
    /// The root stays out of the stack until the first step, so that constructors cannot fail.
    root: Option<&'a N>,
}
impl<'a, N, S> DepthFirst<'a, N, S>
where
    N: Traversable,
    S: ListStorage<Element = &'a N>,
{
    /// Creates a traversal starting at the specified node, with a new empty storage.
    #[inline(always)]
    pub fn new(root: &'a N) -> Self {
        Self::with_storage(root, S::new())
    }
    /// Creates a traversal starting at the specified node, reusing the specified storage. Any elements already in the storage are removed.
    #[inline]
    pub fn with_storage(root: &'a N, mut storage: S) -> Self {
        storage.clear();
        Self {
            stack: storage,
            root: Some(root),
        }
    }
    /// Visits the next node, reporting an error if the storage cannot fit the children of the visited node.
    ///
    /// Returns `Ok(None)` once every node has been visited. After an error, the traversal is finished and only returns `Ok(None)`.
    ///
    /// # Example
    /// ```rust
    /// use ember::{tree::Node, traversal::DepthFirst, CapacityError};
    /// use arrayvec::ArrayVec;
    ///
    /// let tree = Node::branch(0, vec![Node::leaf(1), Node::leaf(2), Node::leaf(3)]);
    /// let mut traversal = DepthFirst::<_, ArrayVec<[_; 2]>>::new(&tree);
    ///
    /// // The root fits, but its three children don't:
    /// assert_eq!(traversal.try_next(), Err(CapacityError { capacity: 2 }));
    /// assert_eq!(traversal.try_next(), Ok(None));
    /// ```
    pub fn try_next(&mut self) -> Result<Option<&'a N>, CapacityError> {
        if let Some(root) = self.root.take() {
            self.push(root)?;
        }
        let node = match self.stack.pop() {
            Some(node) => node,
            None => return Ok(None),
        };
        if let Some(children) = node.children() {
            for child in children.iter().rev() {
                self.push(child)?;
            }
        }
        Ok(Some(node))
    }
    fn push(&mut self, node: &'a N) -> Result<(), CapacityError> {
        self.stack.try_push(node).map_err(|error| {
            tracing::debug!(
                capacity = error.capacity,
                "depth-first traversal storage ran out of capacity"
            );
            self.stack.clear();
            error
        })
    }
    /// Returns the number of nodes which are known to be visited later: the size of the stack, plus the root before the first step.
    #[inline]
    pub fn pending(&self) -> usize {
        self.stack.len() + usize::from(self.root.is_some())
    }
    /// Consumes the traversal, returning the storage it used so that it can be reused for another traversal.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_storage(self) -> S {
        self.stack
    }
}
impl<'a, N, S> Iterator for DepthFirst<'a, N, S>
where
    N: Traversable,
    S: ListStorage<Element = &'a N>,
{
    type Item = &'a N;

    /// Visits the next node.
    ///
    /// # Panics
    /// Panics if the storage runs out of capacity. Use [`try_next`] to handle that case.
    ///
    /// [`try_next`]: #method.try_next " "
    #[inline]
    #[track_caller]
    fn next(&mut self) -> Option<&'a N> {
        self.try_next()
            .expect("depth-first traversal storage ran out of capacity")
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending(), None)
    }
}
impl<'a, N, S> FusedIterator for DepthFirst<'a, N, S>
where
    N: Traversable,
    S: ListStorage<Element = &'a N>,
{
}
impl<'a, N, S> Clone for DepthFirst<'a, N, S>
where
    N: Traversable,
    S: ListStorage<Element = &'a N> + Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            root: self.root,
        }
    }
}
impl<'a, N, S> Debug for DepthFirst<'a, N, S>
where
    N: Traversable + Debug,
    S: ListStorage<Element = &'a N> + Debug,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepthFirst")
            .field("stack", &self.stack)
            .field("root", &self.root)
            .finish()
    }
}
