/***************************************/
/*        3rd party libraries          */
/***************************************/
use num::{BigUint, Zero};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{MIN_SEQUENCE_LEN, UNIT_TIME};
use crate::shared::{Floor, TravelTime, ValidationError};

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Total time for the car to visit `floors` in order.
 *
 * Every leg costs `UNIT_TIME` per floor travelled, so repeating a floor adds nothing. The
 * check on length is made here as well as in `FloorSequence`, since callers may hand in
 * any slice.
 */
pub fn travel_time(floors: &[Floor]) -> Result<TravelTime, ValidationError> {
    if floors.len() < MIN_SEQUENCE_LEN {
        return Err(ValidationError::TooFewFloors {
            min: MIN_SEQUENCE_LEN,
            actual: floors.len(),
        });
    }

    let floors_travelled = floors
        .windows(2)
        .fold(BigUint::zero(), |total, leg| total + leg[0].distance(&leg[1]));

    Ok(TravelTime(floors_travelled * UNIT_TIME))
}
