/* 3rd party libraries */
use log::{debug, warn};
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process;

/* Custom libraries */
use config::{FAILURE_EXIT_CODE, USAGE, USAGE_EXAMPLE, USAGE_EXIT_CODE};
use shared::{ElevatorError, FloorSequence, Trip, UsageError};

/* Modules */
mod config;
mod elevator;
mod shared;

/* Main */
fn main() {
    shared::logger::init();

    let args: Vec<OsString> = env::args_os().collect();

    // Malformed input never reaches the calculator
    let floors = match elevator::parse_args(&args) {
        Ok(floors) => floors,
        Err(e) => {
            warn!("Rejected arguments {:?}: {}", args.iter().skip(1).collect::<Vec<_>>(), e);
            print_usage(&mut io::stdout(), &e);
            process::exit(USAGE_EXIT_CODE);
        }
    };
    debug!("Visiting {} floors starting at {}", floors.len(), floors.start());

    unwrap_or_exit!(run(&floors), FAILURE_EXIT_CODE);
}

fn run(floors: &FloorSequence) -> Result<(), ElevatorError> {
    let trip = Trip::plan(floors)?;

    match serde_json::to_string(&trip) {
        Ok(json) => debug!("Trip: {}", json),
        Err(e) => warn!("Failed to serialize trip: {}", e),
    }

    let stdout = io::stdout();
    elevator::print_output(&mut stdout.lock(), &trip.travel_time, &trip.floors)
}

// The process exits with the usage code whether or not the text got out.
fn print_usage<W: Write>(out: &mut W, error: &UsageError) {
    if let Err(e) = writeln!(out, "{}\n{}\n{}", error, USAGE, USAGE_EXAMPLE) {
        warn!("Failed to print usage: {}", e);
    }
}
