/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a `Result` at the process boundary, reporting the error on stdout and
/// exiting with `$code` on failure. The report is best effort, stdout may be the thing
/// that failed.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $code:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                use std::io::Write as _;
                log::error!("ERROR: {}", e);
                let _ = writeln!(std::io::stdout(), "An unexpected error occurred: {}", e);
                std::process::exit($code);
            }
        }
    };
}
