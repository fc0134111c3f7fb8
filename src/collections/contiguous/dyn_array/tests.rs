#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_append() {
    let mut arr = DynArray::new();
    assert_eq!(arr.cap(), 0, "A new DynArray shouldn't allocate.");

    arr.append("foo");
    arr.append("bar");
    arr.append("baz");

    assert_eq!(arr.len(), 3);
    assert_eq!(arr.cap(), DEFAULT_CAP, "The first append should allocate the default capacity.");
    assert_eq!(&*arr, &["foo", "bar", "baz"]);

    for (index, item) in arr.for_each_indexed() {
        assert_eq!(&arr[index], item, "Each index should refer to the element it was paired with.");
    }

    assert_eq!(
        arr.for_each_indexed().map(|(i, _)| i).collect::<DynArray<_>>(),
        (0..3).collect::<DynArray<_>>(),
        "Indices should count up from 0 in insertion order."
    );
    assert_eq!(
        arr.for_each_indexed().count(),
        arr.for_each_indexed().count(),
        "Iteration should be restartable."
    );
}

#[test]
fn test_many_appends() {
    const N: usize = 100_000;

    let mut arr = DynArray::new();
    let mut reallocations = 0;
    let mut last_cap = arr.cap();

    for i in 0..N {
        arr.append(i);

        assert!(arr.cap() >= arr.len(), "Capacity should never be less than length.");
        if arr.cap() != last_cap {
            assert!(
                last_cap == 0 || arr.cap() == last_cap * 2,
                "Capacity should double each time it is exceeded."
            );
            reallocations += 1;
            last_cap = arr.cap();
        }
    }

    assert_eq!(arr.len(), N);
    assert!(arr.iter().copied().eq(0..N), "All elements should be stored in insertion order.");
    // 256 * 2^9 = 131072 is the first capacity >= 100000.
    assert_eq!(reallocations, 10, "Growth should need only a logarithmic number of allocations.");
}

#[test]
fn test_zst_support() {
    let mut arr = DynArray::new();
    for _ in 0..1000 {
        arr.append(ZeroSizedType);
    }

    assert_eq!(arr.len(), 1000);
    assert_eq!(arr[999], ZeroSizedType);
    assert!(!arr.arr.is_allocated(), "ZSTs shouldn't cause allocations.");
}

#[test]
fn test_free() {
    let counter = CountedDrop::new(0);
    let mut arr: DynArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    arr.free();
    assert_eq!(counter.take(), 10, "Freeing should drop every element.");
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.cap(), 0);
    assert!(!arr.arr.is_allocated(), "Freeing should release the allocation.");

    arr.free();
    assert_eq!(counter.take(), 0, "Freeing twice shouldn't drop anything again.");
    assert_eq!(arr.cap(), 0);

    arr.append(counter.clone());
    assert_eq!(arr.len(), 1, "A freed DynArray should be reusable.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr: DynArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_indexing() {
    let mut arr: DynArray<_> = (0_u32..5).collect();
    arr[2] = 20;
    assert_eq!(&*arr, &[0, 1, 20, 3, 4]);

    assert_panics!({
        let arr: DynArray<_> = (0_u32..5).collect();
        arr[5]
    });
}

#[test]
fn test_equality_and_hash() {
    let arr: DynArray<_> = (0_usize..5).collect();

    let mut appended = DynArray::new();
    for i in 0..5 {
        appended.append(i);
    }
    assert_eq!(arr, appended, "Different construction methods should produce equal results.");
    assert_ne!(arr, (0..4).collect::<DynArray<_>>());

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut arr: DynArray<_> = (0_usize..5).collect();

    for i in &mut arr {
        *i *= 2;
    }
    assert_eq!(*arr, [0, 2, 4, 6, 8], "DynArray mutated by iterator should equal this slice.");

    assert_eq!(
        arr,
        arr.clone().into_iter().collect::<DynArray<_>>(),
        "Cloned and collected DynArrays should be equal."
    );

    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let arr: DynArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Dropping a partially consumed owned iterator should drop all remaining elements."
    );
}
