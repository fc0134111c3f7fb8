use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr;

use crate::collections::contiguous::RawArray;
use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The capacity allocated by the first append to an empty DynArray.
pub const DEFAULT_CAP: usize = 256;

const GROWTH_FACTOR: usize = 2;

/// An append-only, contiguous collection that doubles its capacity whenever it runs out of room.
///
/// A DynArray starts out empty, without an allocation. The first [`append`](DynArray::append)
/// allocates [`DEFAULT_CAP`] slots, and every append that finds the DynArray full doubles the
/// capacity. Allocation failures are fatal, so appending never returns an error.
///
/// Elements are read through the [`Deref<Target = [T]>`](Deref) implementation, which provides
/// indexing and borrowed iteration.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynArray.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `free` | `O(n)`** |
///
/// \* If the DynArray doesn't have enough capacity for the new element, `append` will take `O(n)`.
///
/// \** Freeing drops every element.
pub struct DynArray<T> {
    pub(crate) arr: RawArray<T>,
    pub(crate) len: usize,
}

impl<T> DynArray<T> {
    /// Creates a new, empty DynArray with length and capacity 0. Memory is allocated by the first
    /// append.
    ///
    /// # Examples
    /// ```
    /// # use cx::collections::contiguous::DynArray;
    /// let arr: DynArray<u8> = DynArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub const fn new() -> DynArray<T> {
        DynArray {
            arr: RawArray::new(),
            len: 0,
        }
    }

    /// Returns the number of elements in the DynArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements that the DynArray can hold before it has to grow.
    pub const fn cap(&self) -> usize {
        self.arr.cap()
    }

    /// Appends `value` to the end of the DynArray, growing it if required.
    ///
    /// # Fatal Errors
    /// Exits the process if memory can't be allocated, or if the new capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use cx::collections::contiguous::DynArray;
    /// let mut arr = DynArray::new();
    /// arr.append("foo");
    /// arr.append("bar");
    /// assert_eq!(&*arr, &["foo", "bar"]);
    /// assert_eq!(arr.cap(), cx::collections::contiguous::dyn_array::DEFAULT_CAP);
    /// ```
    #[track_caller]
    pub fn append(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: The capacity has just been adjusted to fit at least one more element.
        unsafe { self.arr.write(self.len, value) }
        self.len += 1;
    }

    /// Drops every element and releases the allocation, leaving the DynArray in the same state as
    /// [`DynArray::new`]. Freeing an empty DynArray does nothing.
    ///
    /// # Examples
    /// ```
    /// # use cx::collections::contiguous::DynArray;
    /// let mut arr = DynArray::new();
    /// arr.append(String::from("owned"));
    /// arr.free();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub fn free(&mut self) {
        self.drop_elements();
        self.arr.free();
    }

    /// Iterates over each element, paired with its index.
    ///
    /// The iterator borrows the DynArray, so it can't be appended to during iteration. Calling this
    /// again restarts from the first element.
    ///
    /// # Examples
    /// ```
    /// # use cx::collections::contiguous::DynArray;
    /// let arr: DynArray<_> = ["foo", "bar", "baz"].into_iter().collect();
    /// for (index, item) in arr.for_each_indexed() {
    ///     assert_eq!(&arr[index], item);
    /// }
    /// ```
    pub fn for_each_indexed(&self) -> impl ExactSizeIterator<Item = (usize, &T)> + '_ {
        self.iter().enumerate()
    }

    /// Grows the RawArray to allow for the addition of another element: to [`DEFAULT_CAP`] if
    /// nothing is allocated yet, otherwise to double the current capacity.
    ///
    /// # Fatal Errors
    /// Exits the process if memory can't be allocated, or if the new capacity would overflow.
    #[track_caller]
    pub(crate) fn grow(&mut self) {
        let new_cap = match self.cap() {
            0 => DEFAULT_CAP,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).or_fatal(),
        };

        self.arr.realloc(new_cap);
    }

    /// Drops all elements in place, setting the length to 0 without touching the allocation.
    fn drop_elements(&mut self) {
        let len = self.len;
        // Set len first, so a panicking destructor can't lead to a double drop.
        self.len = 0;

        // SAFETY: The first len elements are initialized, and are no longer reachable through self
        // because len has been reset.
        unsafe { ptr::drop_in_place(self.arr.slice_mut(len)) }
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = DynArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        self.drop_elements();
        // The RawArray deallocates itself when dropped.
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: All elements below len are initialized and within the allocation.
        unsafe { self.arr.slice(self.len) }
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: All elements below len are initialized and within the allocation, and self is
        // borrowed mutably for the lifetime of the slice.
        unsafe { self.arr.slice_mut(self.len) }
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("items", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
