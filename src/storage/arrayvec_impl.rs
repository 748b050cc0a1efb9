use arrayvec::{ArrayVec, Array};
use super::ListStorage;
use crate::CapacityError;

impl<A> ListStorage for ArrayVec<A>
where A: Array,
{
    type Element = A::Item;

    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn push(&mut self, element: Self::Element) {
        self.push(element)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<Self::Element> {
        self.pop()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        self.as_slice().get(index)
    }

    #[inline]
    fn try_push(&mut self, element: Self::Element) -> Result<(), CapacityError> {
        self.try_push(element).map_err(|_| CapacityError {
            capacity: A::CAPACITY,
        })
    }
    #[inline(always)]
    fn clear(&mut self) {
        self.clear()
    }
}
