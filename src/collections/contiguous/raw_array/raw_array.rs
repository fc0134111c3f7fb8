use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;
use std::slice;

use crate::process::Fatal;
use crate::util::error::{AllocError, CapacityOverflow, ReallocError};

/// A heap allocation with room for exactly `cap` values of `T`, none of which are considered
/// initialized. This is the backing storage for [`DynArray`](super::super::DynArray) and
/// [`StringBuilder`](super::super::StringBuilder); tracking which slots hold values is left to the
/// owner.
///
/// An empty RawArray never holds an allocation. Every allocation failure is fatal, so none of the
/// methods here return errors.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `cap` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
/// | `free` | `O(1)` |
///
/// \* The allocator may be able to grow the allocation in place.
pub struct RawArray<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawArray<T> {
    /// Creates a new RawArray with capacity 0, without allocating.
    ///
    /// # Examples
    /// ```
    /// # use cx::collections::contiguous::RawArray;
    /// let arr: RawArray<u8> = RawArray::new();
    /// assert_eq!(arr.cap(), 0);
    /// assert!(!arr.is_allocated());
    /// ```
    pub const fn new() -> RawArray<T> {
        RawArray {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new RawArray with capacity exactly equal to `cap`.
    ///
    /// # Fatal Errors
    /// Exits the process if the allocation fails or its size would exceed [`isize::MAX`].
    #[track_caller]
    pub fn with_cap(cap: usize) -> RawArray<T> {
        let mut arr = RawArray::new();
        arr.realloc(cap);
        arr
    }

    /// Returns the number of values that the RawArray has room for.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns true if the RawArray currently owns heap memory. This is false whenever the capacity
    /// is 0, and always false for zero-sized types.
    pub const fn is_allocated(&self) -> bool {
        self.cap != 0 && size_of::<T>() != 0
    }

    /// Returns a raw pointer to the first slot. The pointer is dangling if nothing is allocated.
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr().cast()
    }

    /// Returns the first `len` slots as a slice of `T`.
    ///
    /// # Safety
    /// `len` must be no greater than the capacity and the first `len` slots must be initialized.
    pub(crate) const unsafe fn slice(&self, len: usize) -> &[T] {
        // SAFETY: The caller guarantees that len values starting at ptr are initialized and
        // within the allocation. MaybeUninit<T> has the same layout as T.
        unsafe { slice::from_raw_parts(self.as_ptr(), len) }
    }

    /// Returns the first `len` slots as a mutable slice of `T`.
    ///
    /// # Safety
    /// `len` must be no greater than the capacity and the first `len` slots must be initialized.
    pub(crate) unsafe fn slice_mut(&mut self, len: usize) -> &mut [T] {
        // SAFETY: The same requirements as slice, and self is borrowed mutably for the lifetime of
        // the returned slice.
        unsafe { slice::from_raw_parts_mut(self.as_ptr(), len) }
    }

    /// Writes `value` into the slot at `index` without reading or dropping the previous contents.
    ///
    /// # Safety
    /// `index` must be less than the capacity.
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        // SAFETY: The caller guarantees that index is in bounds of the allocation.
        unsafe { self.ptr.add(index).write(MaybeUninit::new(value)) }
    }

    /// Reallocates the RawArray to have room for exactly `new_cap` values. The contents of the
    /// slots that remain within the new capacity are preserved, bytewise.
    ///
    /// # Fatal Errors
    /// Exits the process if the allocation fails or its size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use cx::collections::contiguous::RawArray;
    /// let mut arr: RawArray<u32> = RawArray::new();
    /// arr.realloc(4);
    /// assert_eq!(arr.cap(), 4);
    /// arr.realloc(8);
    /// assert_eq!(arr.cap(), 8);
    /// ```
    #[track_caller]
    pub fn realloc(&mut self, new_cap: usize) {
        let new_ptr = match (self.cap, new_cap) {
            (_, _) if size_of::<T>() == 0 => {
                // Zero-sized types are never allocated, the dangling pointer is valid for any
                // number of them.
                self.ptr
            },
            (old, new) if old == new => return,
            (0, _) => {
                let layout = Self::make_layout(new_cap);

                // SAFETY: Layout has a non-zero size because both 0 capacity and zero-sized types
                // are guarded against.
                let raw_ptr: *mut MaybeUninit<T> = unsafe { alloc::alloc(layout).cast() };

                match NonNull::new(raw_ptr) {
                    Some(ptr) => ptr,
                    None => AllocError { size: layout.size() }.fatal(),
                }
            },
            (_, 0) => {
                self.free();
                return;
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.cap);
                let new_layout = Self::make_layout(new_cap);

                // SAFETY: ptr was allocated in the global allocator with old_layout, and the new
                // size is non-zero and has been checked against isize::MAX by make_layout.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                match NonNull::new(raw_ptr) {
                    Some(ptr) => ptr,
                    None => ReallocError {
                        old_size: old_layout.size(),
                        new_size: new_layout.size(),
                    }.fatal(),
                }
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Releases the allocation, leaving the RawArray with capacity 0. The contents of the slots
    /// aren't dropped. Calling this on an empty RawArray does nothing.
    pub fn free(&mut self) {
        if self.is_allocated() {
            let layout = Self::make_layout(self.cap);

            // SAFETY: ptr is allocated in the global allocator with this layout, and is replaced
            // with a dangling pointer straight after.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }

        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// A helper function to create a [`Layout`] for `cap` values of `T`.
    ///
    /// # Fatal Errors
    /// Exits the process if the layout's size would exceed [`isize::MAX`].
    #[track_caller]
    pub(crate) fn make_layout(cap: usize) -> Layout {
        match Layout::array::<MaybeUninit<T>>(cap) {
            Ok(layout) => layout,
            Err(_) => CapacityOverflow.fatal(),
        }
    }
}

impl<T> Default for RawArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawArray<T> {
    fn drop(&mut self) {
        // Slots are never treated as initialized here, the owner is responsible for dropping them.
        self.free();
    }
}

// SAFETY: RawArrays rely on unique pointers and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for RawArray<T> {}
// SAFETY: RawArray provides no interior mutability, so it is Sync when T: Sync.
unsafe impl<T: Sync> Sync for RawArray<T> {}

impl<T> Debug for RawArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawArray")
            .field("ptr", &self.ptr)
            .field("cap", &self.cap)
            .finish()
    }
}
