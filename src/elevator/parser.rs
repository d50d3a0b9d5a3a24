/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::{value_parser, Arg, ArgMatches, Command, ErrorKind};
use log::debug;
use num::BigUint;
use std::ffi::OsStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{
    COMMAND_NAME, EXPECTED_ARG_COUNT, FLOOR_KEY, FLOOR_SEPARATOR, PROGRAM_NAME, START_KEY,
};
use crate::shared::{Floor, FloorSequence, UsageError};

const START_ARG: &str = "start";
const FLOOR_ARG: &str = "floor";

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Turns the raw argument list (program name included) into the floors to visit.
 *
 * Expects exactly `elevator start=<N> floor=<N>[,<N>...]` after the program name. The
 * returned sequence is the start floor followed by every destination, in the order given.
 * Arguments come in as OS strings, anything that is not valid unicode is a usage error.
 */
pub fn parse_args<S: AsRef<OsStr>>(args: &[S]) -> Result<FloorSequence, UsageError> {
    if args.len() != EXPECTED_ARG_COUNT {
        return Err(UsageError::ArgumentCount(args.len().saturating_sub(1)));
    }

    // The program name is skipped by clap, it only needs to be present.
    let tokens = args[1..]
        .iter()
        .map(|arg| {
            let arg = arg.as_ref();
            arg.to_str()
                .ok_or_else(|| UsageError::NotUnicode(arg.to_string_lossy().into_owned()))
        })
        .collect::<Result<Vec<&str>, UsageError>>()?;

    let matches = command()
        .try_get_matches_from(std::iter::once(PROGRAM_NAME).chain(tokens.iter().copied()))
        .map_err(|e| {
            debug!("clap rejected arguments: {}", e);
            usage_error_from(e.kind(), tokens[0])
        })?;
    let elevator = matches
        .subcommand_matches(COMMAND_NAME)
        .ok_or_else(|| UsageError::UnknownCommand(tokens[0].to_string()))?;

    let start = parse_start(positional(elevator, START_ARG))?;
    let destinations = parse_floor_list(positional(elevator, FLOOR_ARG))?;

    // Both sides are non-empty at this point, so the sequence always has at least two floors.
    FloorSequence::new(start, destinations).map_err(|_| UsageError::EmptyValue { key: FLOOR_KEY })
}

/// Parses a `start=<N>` token.
pub fn parse_start(token: &str) -> Result<Floor, UsageError> {
    let value = strip_key(START_KEY, token)?;
    parse_floor(START_KEY, value)
}

/// Parses a `floor=<N>[,<N>...]` token. Empty entries are rejected.
pub fn parse_floor_list(token: &str) -> Result<Vec<Floor>, UsageError> {
    let value = strip_key(FLOOR_KEY, token)?;
    value
        .split(FLOOR_SEPARATOR)
        .map(|entry| parse_floor(FLOOR_KEY, entry))
        .collect()
}

/***************************************/
/*             Internals               */
/***************************************/
fn command() -> Command<'static> {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .disable_help_subcommand(true)
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_NAME)
                .disable_help_flag(true)
                .disable_version_flag(true)
                .arg(
                    Arg::new(START_ARG)
                        .index(1)
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    Arg::new(FLOOR_ARG)
                        .index(2)
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(String)),
                ),
        )
}

/// Reason line for a command line clap refused, given the token in the command position.
pub(crate) fn usage_error_from(kind: ErrorKind, command: &str) -> UsageError {
    match kind {
        ErrorKind::MissingRequiredArgument => UsageError::MissingArgument,
        _ if command != COMMAND_NAME => UsageError::UnknownCommand(command.to_string()),
        kind => UsageError::Unrecognized {
            command: command.to_string(),
            kind: format!("{:?}", kind),
        },
    }
}

fn positional<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    // Both positionals are required, clap has already rejected the call if either is missing.
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn strip_key<'a>(key: &'static str, token: &'a str) -> Result<&'a str, UsageError> {
    token.strip_prefix(key).ok_or_else(|| UsageError::MissingKey {
        key,
        token: token.to_string(),
    })
}

fn parse_floor(key: &'static str, value: &str) -> Result<Floor, UsageError> {
    if value.is_empty() {
        return Err(UsageError::EmptyValue { key });
    }

    if !is_digits(value) {
        return match value.strip_prefix('-') {
            Some(rest) if is_digits(rest) => Err(UsageError::NegativeValue {
                key,
                value: value.to_string(),
            }),
            _ => Err(UsageError::NotANumber {
                key,
                value: value.to_string(),
            }),
        };
    }

    BigUint::parse_bytes(value.as_bytes(), 10)
        .map(Floor)
        .ok_or_else(|| UsageError::NotANumber {
            key,
            value: value.to_string(),
        })
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
