/***************************************/
/*            Travel model             */
/***************************************/
/// Time it takes the car to travel a single floor.
pub const UNIT_TIME: u64 = 10;

/// Start floor plus at least one destination.
pub const MIN_SEQUENCE_LEN: usize = 2;

/***************************************/
/*           Command line              */
/***************************************/
pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");
pub const COMMAND_NAME: &str = "elevator";
pub const START_KEY: &str = "start=";
pub const FLOOR_KEY: &str = "floor=";
pub const FLOOR_SEPARATOR: char = ',';

/// Program name plus the three expected tokens.
pub const EXPECTED_ARG_COUNT: usize = 4;

pub const USAGE: &str = "Usage: elevator elevator start=<floor> floor=<floor>[,<floor>...]";
pub const USAGE_EXAMPLE: &str = "e.g. elevator start=12 floor=2,9,1,32";

pub const USAGE_EXIT_CODE: i32 = 1;
pub const FAILURE_EXIT_CODE: i32 = 2;

/***************************************/
/*              Logging                */
/***************************************/
pub const DEFAULT_LOG_FILTER: &str = "warn";
