//! Macros for the CLI's exit-code paths.

/// Writes a line to `$dest`; if that fails, returns
/// [`ERROR`](crate::exit_code::ERROR) from the enclosing function.
///
/// ```ignore
/// write_or_exit!(err, "Usage: minipoker <command> [options]");
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
