use std::iter::FusedIterator;
use std::mem;
use std::ptr;
use std::slice;

use super::DynArray;
use crate::collections::contiguous::RawArray;

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let arr = mem::take(&mut self.arr);
        let len = mem::replace(&mut self.len, 0);
        // self is now empty, dropping it does nothing.

        IntoIter {
            arr,
            start: 0,
            end: len,
        }
    }
}

/// A type for owned iteration over a [`DynArray`]. See [`DynArray::into_iter`].
pub struct IntoIter<T> {
    pub(crate) arr: RawArray<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: Slots from start to end are initialized. start is incremented straight away,
            // so the value is read exactly once.
            let value = unsafe { self.arr.as_ptr().add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end has just been decremented and still refers to an initialized slot, which
            // won't be read again.
            let value = unsafe { self.arr.as_ptr().add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Slots from start to end are initialized and haven't been read out yet.
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(
                self.arr.as_ptr().add(self.start),
                self.end - self.start,
            ));
        }
    }
}
