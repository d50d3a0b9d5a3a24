/***************************************/
/*        3rd party libraries          */
/***************************************/
use env_logger::Env;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::DEFAULT_LOG_FILTER;

/***************************************/
/*             Public API              */
/***************************************/

/// Diagnostics go to stderr so stdout only ever carries the trip line or usage text.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp(None)
        .init();
}
