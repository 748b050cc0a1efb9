use alloc::{vec::Vec, collections::VecDeque};
use super::ListStorage;

impl<T> ListStorage for Vec<T> {
    type Element = T;

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
        (**self).get(index)
    }

    #[inline(always)]
    fn clear(&mut self) {
        self.clear()
    }
}

impl<T> ListStorage for VecDeque<T> {
    type Element = T;

    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn push(&mut self, element: Self::Element) {
        self.push_back(element)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<Self::Element> {
        self.pop_back()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        self.get(index)
    }

    #[inline(always)]
    fn clear(&mut self) {
        self.clear()
    }
}
