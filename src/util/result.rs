use crate::process::Fatal;

pub(crate) trait ResultExtension<T, E: Fatal> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Fatal`] and, rather than panicking, reports the error and terminates the process.
    fn or_fatal(self) -> T;
}

impl<T, E: Fatal> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn or_fatal(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => error.fatal(),
        }
    }
}
