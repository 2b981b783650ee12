use crate::SortError;

/// Fixed-capacity sequence of `i32`, mutated in place by the engine.
///
/// All indexing goes through [`Sequence::get`] and [`Sequence::swap`], which
/// report [`SortError::IndexOutOfBounds`] instead of panicking.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Sequence<const CAPACITY: usize> {
    items: [i32; CAPACITY],
}

impl<const CAPACITY: usize> Sequence<CAPACITY> {
    pub const fn new(items: [i32; CAPACITY]) -> Self {
        Self { items }
    }

    pub const fn len(&self) -> usize {
        CAPACITY
    }

    pub const fn is_empty(&self) -> bool {
        CAPACITY == 0
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.items
    }

    pub fn into_inner(self) -> [i32; CAPACITY] {
        self.items
    }

    pub fn last(&self) -> Option<i32> {
        self.items.last().copied()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Result<i32, SortError> {
        self.items
            .get(index)
            .copied()
            .ok_or(SortError::IndexOutOfBounds {
                index,
                len: CAPACITY,
            })
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), SortError> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.items.swap(a, b);
        Ok(())
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), SortError> {
        if index < CAPACITY {
            Ok(())
        } else {
            Err(SortError::IndexOutOfBounds {
                index,
                len: CAPACITY,
            })
        }
    }
}

impl<const CAPACITY: usize> From<[i32; CAPACITY]> for Sequence<CAPACITY> {
    fn from(items: [i32; CAPACITY]) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_exchanges_two_positions() {
        let mut seq = Sequence::new([1, 2, 3, 4]);
        seq.swap(0, 3).unwrap();
        assert_eq!(seq.as_slice(), &[4, 2, 3, 1]);

        seq.swap(2, 2).unwrap();
        assert_eq!(seq.as_slice(), &[4, 2, 3, 1]);
    }

    #[test]
    fn swap_out_of_bounds_leaves_contents_untouched() {
        let mut seq = Sequence::new([5, 6, 7]);
        assert_eq!(
            seq.swap(0, 3),
            Err(SortError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            seq.swap(usize::MAX, 1),
            Err(SortError::IndexOutOfBounds {
                index: usize::MAX,
                len: 3
            })
        );
        assert_eq!(seq.into_inner(), [5, 6, 7]);
    }

    #[test]
    fn reads_past_the_end_are_reported() {
        let seq = Sequence::new([1, 2, 3]);
        for index in [3, 4, usize::MAX] {
            assert_eq!(
                seq.get(index),
                Err(SortError::IndexOutOfBounds { index, len: 3 })
            );
        }
    }

    #[test]
    fn get_and_last() {
        let seq = Sequence::from([-3, 0, 8]);
        assert_eq!(seq.get(0), Ok(-3));
        assert_eq!(seq.get(3), Err(SortError::IndexOutOfBounds { index: 3, len: 3 }));
        assert_eq!(seq.last(), Some(8));
        assert_eq!(seq.get(1), Ok(0));
        assert_eq!(seq.len(), 3);

        let empty = Sequence::<0>::new([]);
        assert!(empty.is_empty());
        assert_eq!(empty.last(), None);
    }
}
