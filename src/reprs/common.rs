use std::ops::Range;

use crate::newtype_derive;

/// Byte offsets of a node in the source it was parsed from.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// A de Bruijn index: the number of binders between a variable and the binder
/// it refers to, so `Idx(0)` is the innermost one.
///
/// Stacks of bindings grow towards the end, so indices count from the back.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Idx(pub usize);

newtype_derive!(Idx(usize): Debug, Display);

impl Idx {
    /// Finds the innermost element of `stack` satisfying `pred`.
    pub fn find<T>(stack: &[T], pred: impl FnMut(&T) -> bool) -> Option<Self> {
        stack.iter().rev().position(pred).map(Self)
    }

    pub fn get<T>(self, stack: &[T]) -> Option<&T> {
        let position = stack.len().checked_sub(self.0.checked_add(1)?)?;
        stack.get(position)
    }

    /// `None` if the result would be negative (or overflow).
    pub fn shifted(self, d: isize) -> Option<Self> {
        self.0.checked_add_signed(d).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn indices_count_from_the_back() {
        let stack = ["a", "b", "a", "c"];

        assert_eq!(Idx::find(&stack, |n| *n == "a"), Some(Idx(1)));
        assert_eq!(Idx::find(&stack, |n| *n == "c"), Some(Idx(0)));
        assert_eq!(Idx::find(&stack, |n| *n == "d"), None);

        assert_eq!(Idx(0).get(&stack), Some(&"c"));
        assert_eq!(Idx(3).get(&stack), Some(&"a"));
        assert_eq!(Idx(4).get(&stack), None);
        assert_eq!(Idx(usize::MAX).get(&stack), None);
    }

    #[test]
    fn shifting_never_goes_negative() {
        assert_eq!(Idx(2).shifted(-2), Some(Idx(0)));
        assert_eq!(Idx(0).shifted(-1), None);
        assert_eq!(Idx(0).shifted(3), Some(Idx(3)));
    }
}
