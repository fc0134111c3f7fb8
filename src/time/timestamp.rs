use std::fmt::{self, Display, Formatter};
use std::mem::MaybeUninit;
use std::ptr;

use super::ClockError;
use crate::util::result::ResultExtension;

/// A local date and time, to the second. Displayed as `YYYY-MM-DD HH:MM:SS` on a 24-hour clock.
///
/// # Examples
/// ```
/// # use cx::time::Timestamp;
/// let stamp = Timestamp { year: 2024, month: 3, day: 9, hour: 17, minute: 5, second: 0 };
/// assert_eq!(stamp.to_string(), "2024-03-09 17:05:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub year: i32,
    /// From 1 to 12.
    pub month: u8,
    /// From 1 to 31.
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// Up to 60, to allow for leap seconds.
    pub second: u8,
}

impl Timestamp {
    /// Returns the current local time.
    ///
    /// # Fatal Errors
    /// Exits the process if the local time can't be determined, see [`Timestamp::try_now`].
    #[track_caller]
    pub fn now() -> Timestamp {
        Timestamp::try_now().or_fatal()
    }

    /// Returns the current local time.
    ///
    /// # Errors
    /// Returns an error if the system clock can't be read or can't be converted to local time.
    pub fn try_now() -> Result<Timestamp, ClockError> {
        // SAFETY: time accepts a null pointer, in which case it only returns the value.
        let now = unsafe { libc::time(ptr::null_mut()) };
        if now == -1 {
            return Err(ClockError);
        }

        let mut raw_tm: MaybeUninit<libc::tm> = MaybeUninit::uninit();
        // SAFETY: Both pointers are valid, localtime_r only writes to raw_tm and doesn't touch any
        // shared state.
        if unsafe { libc::localtime_r(&now, raw_tm.as_mut_ptr()) }.is_null() {
            return Err(ClockError);
        }
        // SAFETY: localtime_r either initializes raw_tm or returns null, which has been handled.
        let tm = unsafe { raw_tm.assume_init() };

        Ok(Timestamp::from_tm(&tm))
    }

    pub(crate) fn from_tm(tm: &libc::tm) -> Timestamp {
        Timestamp {
            year: tm.tm_year + 1900,
            month: (tm.tm_mon + 1) as u8,
            day: tm.tm_mday as u8,
            hour: tm.tm_hour as u8,
            minute: tm.tm_min as u8,
            second: tm.tm_sec as u8,
        }
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}
