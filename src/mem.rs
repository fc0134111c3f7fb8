//! Exchanging values in place.

/// Swaps the values of two assignable places of the same type, through a single temporary.
///
/// Unlike [`std::mem::swap`], the places don't need to be borrowed mutably at the same time, so
/// two elements of the same slice can be swapped, or a place can be swapped with itself. The type
/// must be [`Copy`] unless both places are plain local bindings.
///
/// # Examples
/// ```
/// # use cx::swap;
/// let mut a = 10;
/// let mut b = 20;
/// swap!(a, b);
/// assert_eq!((a, b), (20, 10));
///
/// let mut items = [1, 2, 3];
/// swap!(items[0], items[2]);
/// assert_eq!(items, [3, 2, 1]);
/// ```
#[macro_export]
macro_rules! swap {
    ($a:expr, $b:expr) => {{
        let temp = $a;
        $a = $b;
        $b = temp;
    }};
}
