/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt::Write as _;
use std::io::Write;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::FLOOR_SEPARATOR;
use crate::shared::{ElevatorError, Floor, TravelTime, ValidationError};

/***************************************/
/*             Public API              */
/***************************************/

/// Renders `<time> <f1>,<f2>,...,<fN>` followed by a single newline.
pub fn format_output(travel_time: &TravelTime, floors: &[Floor]) -> Result<String, ValidationError> {
    if floors.is_empty() {
        return Err(ValidationError::EmptySequence);
    }

    let mut line = travel_time.to_string();
    line.push(' ');
    for (i, floor) in floors.iter().enumerate() {
        if i > 0 {
            line.push(FLOOR_SEPARATOR);
        }
        // Writing into a String cannot fail.
        let _ = write!(line, "{}", floor);
    }
    line.push('\n');

    Ok(line)
}

pub fn print_output<W: Write>(
    out: &mut W,
    travel_time: &TravelTime,
    floors: &[Floor],
) -> Result<(), ElevatorError> {
    let line = format_output(travel_time, floors)?;
    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(())
}
