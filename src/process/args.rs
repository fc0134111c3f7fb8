#[cfg(feature = "dyn-array")]
use std::mem;

#[cfg(feature = "dyn-array")]
use crate::collections::contiguous::DynArray;

/// Removes the first element from `args`, returning it and leaving the remainder in place of the
/// original slice. If one or fewer elements remain (usually only the program name), nothing is
/// shifted and `None` is returned.
///
/// # Examples
/// ```
/// # use cx::process::shift_args;
/// let argv = ["prog", "a", "b"];
/// let mut args = &argv[..];
/// assert_eq!(shift_args(&mut args), Some(&"prog"));
/// assert_eq!(args, ["a", "b"]);
/// assert_eq!(shift_args(&mut args), Some(&"a"));
/// assert_eq!(shift_args(&mut args), None);
/// assert_eq!(args, ["b"]);
/// ```
pub fn shift_args<'a, T>(args: &mut &'a [T]) -> Option<&'a T> {
    let slice: &'a [T] = *args;
    match slice {
        [] | [_] => None,
        [first, rest @ ..] => {
            *args = rest;
            Some(first)
        },
    }
}

/// An owned list of process arguments which can be consumed from the front with
/// [`shift`](Args::shift).
#[cfg(feature = "dyn-array")]
#[derive(Debug, Default)]
pub struct Args {
    argv: DynArray<String>,
    start: usize,
}

#[cfg(feature = "dyn-array")]
impl Args {
    /// Collects the arguments that this process was invoked with, including the program name.
    ///
    /// # Panics
    /// Panics if any argument isn't valid unicode, see [`std::env::args`].
    pub fn from_env() -> Args {
        std::env::args().collect()
    }

    /// Returns the number of arguments that haven't been shifted off.
    pub fn count(&self) -> usize {
        self.argv.len() - self.start
    }

    /// Returns the remaining arguments as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.argv[self.start..]
    }

    /// Removes and returns the first remaining argument, unless it is the only one left.
    ///
    /// # Examples
    /// ```
    /// # use cx::process::Args;
    /// let mut args: Args = ["prog", "file.txt"].into_iter().map(String::from).collect();
    /// assert_eq!(args.shift().as_deref(), Some("prog"));
    /// assert_eq!(args.as_slice(), ["file.txt"]);
    /// assert_eq!(args.shift(), None);
    /// assert_eq!(args.count(), 1);
    /// ```
    pub fn shift(&mut self) -> Option<String> {
        if self.count() <= 1 {
            return None;
        }

        let first = mem::take(&mut self.argv[self.start]);
        self.start += 1;
        Some(first)
    }
}

#[cfg(feature = "dyn-array")]
impl FromIterator<String> for Args {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Args {
            argv: iter.into_iter().collect(),
            start: 0,
        }
    }
}
