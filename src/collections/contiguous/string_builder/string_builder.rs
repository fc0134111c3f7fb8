use std::ffi::{CStr, FromBytesWithNulError};
use std::fmt::{self, Debug, Display, Formatter, Write};
use std::ptr;
use std::str::{self, Utf8Error};

use crate::collections::contiguous::RawArray;
use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The capacity allocated by [`StringBuilder::new`], and when appending to a freed StringBuilder.
pub const DEFAULT_CAP: usize = 64;

const GROWTH_FACTOR: usize = 2;

/// An append-only byte buffer for assembling strings, which can produce a NUL terminated view of its
/// contents at any point.
///
/// The capacity doubles as many times as required to fit each append. The terminator isn't stored
/// while appending; [`to_terminated`](StringBuilder::to_terminated) writes it, growing the buffer
/// first if the contents fill it exactly.
///
/// StringBuilder implements [`fmt::Write`], so [`write!`] can be used to append formatted text.
///
/// # Examples
/// ```
/// # use cx::collections::contiguous::StringBuilder;
/// use std::fmt::Write;
///
/// let mut sb = StringBuilder::new();
/// sb.append("foo");
/// sb.append(" ");
/// write!(sb, "bar {}", 42).unwrap();
/// assert_eq!(sb.as_str(), Ok("foo bar 42"));
/// assert_eq!(sb.to_terminated(), b"foo bar 42\0");
/// ```
pub struct StringBuilder {
    pub(crate) buf: RawArray<u8>,
    pub(crate) size: usize,
}

impl StringBuilder {
    /// Creates a new, empty StringBuilder with a capacity of [`DEFAULT_CAP`] bytes.
    ///
    /// # Fatal Errors
    /// Exits the process if memory can't be allocated.
    #[track_caller]
    pub fn new() -> StringBuilder {
        StringBuilder {
            buf: RawArray::with_cap(DEFAULT_CAP),
            size: 0,
        }
    }

    /// Returns the number of bytes that have been appended, not including any terminator.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if nothing has been appended.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of bytes allocated.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Copies `bytes` onto the end of the StringBuilder, doubling the capacity until they fit.
    ///
    /// # Fatal Errors
    /// Exits the process if memory can't be allocated, or if the new capacity would overflow.
    #[track_caller]
    pub fn append<B: AsRef<[u8]>>(&mut self, bytes: B) {
        let bytes = bytes.as_ref();
        let new_size = self.size.checked_add(bytes.len()).ok_or(CapacityOverflow).or_fatal();

        self.reserve_total(new_size);

        // SAFETY: The buffer has room for new_size bytes and bytes can't overlap a buffer that is
        // borrowed mutably.
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), self.buf.as_ptr().add(self.size), bytes.len());
        }
        self.size = new_size;
    }

    /// Writes a NUL terminator directly after the contents and returns the contents along with the
    /// terminator. If the contents fill the buffer exactly, it is grown first.
    ///
    /// # Fatal Errors
    /// Exits the process if memory can't be allocated, or if the new capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use cx::collections::contiguous::StringBuilder;
    /// let mut sb = StringBuilder::new();
    /// sb.append([b'x'; 64]);
    /// assert_eq!(sb.cap(), 64);
    /// assert_eq!(sb.to_terminated().len(), 65);
    /// assert_eq!(sb.cap(), 128);
    /// ```
    #[track_caller]
    pub fn to_terminated(&mut self) -> &[u8] {
        let with_nul = self.size.checked_add(1).ok_or(CapacityOverflow).or_fatal();
        self.reserve_total(with_nul);

        // SAFETY: The buffer has room for size + 1 bytes, so the terminator is in bounds.
        unsafe { self.buf.write(self.size, b'\0') }

        // SAFETY: size bytes have been appended and the terminator directly follows them.
        unsafe { self.buf.slice(with_nul) }
    }

    /// Returns the contents as a [`CStr`], which is only possible if no NUL bytes have been
    /// appended.
    ///
    /// # Errors
    /// Returns an error if the contents contain a NUL byte.
    #[track_caller]
    pub fn to_c_str(&mut self) -> Result<&CStr, FromBytesWithNulError> {
        CStr::from_bytes_with_nul(self.to_terminated())
    }

    /// Returns the contents, without a terminator.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: size bytes have been initialized by appends.
        unsafe { self.buf.slice(self.size) }
    }

    /// Returns the contents as a string slice.
    ///
    /// # Errors
    /// Returns an error if the contents aren't valid UTF-8.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(self.as_bytes())
    }

    /// Releases the buffer, leaving the StringBuilder with size and capacity 0. Appending
    /// afterwards allocates [`DEFAULT_CAP`] bytes again. Freeing twice does nothing.
    pub fn free(&mut self) {
        self.buf.free();
        self.size = 0;
    }

    /// Grows the buffer by repeated doubling until it can hold `total` bytes.
    #[track_caller]
    fn reserve_total(&mut self, total: usize) {
        if total <= self.cap() {
            return;
        }

        let mut new_cap = if self.cap() == 0 { DEFAULT_CAP } else { self.cap() };
        while new_cap < total {
            new_cap = new_cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).or_fatal();
        }

        self.buf.realloc(new_cap);
    }
}

impl Default for StringBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StringBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl From<&str> for StringBuilder {
    fn from(value: &str) -> Self {
        let mut sb = StringBuilder::new();
        sb.append(value);
        sb
    }
}

impl Clone for StringBuilder {
    fn clone(&self) -> Self {
        let mut sb = StringBuilder {
            buf: RawArray::with_cap(self.cap()),
            size: 0,
        };
        sb.append(self.as_bytes());
        sb
    }
}

impl PartialEq for StringBuilder {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StringBuilder {}

impl Debug for StringBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringBuilder")
            .field("contents", &String::from_utf8_lossy(self.as_bytes()))
            .field("size", &self.size)
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for StringBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
