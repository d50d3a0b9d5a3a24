/***************************************/
/*        3rd party libraries          */
/***************************************/
use num::{BigUint, ToPrimitive};
use serde::{Serialize, Serializer};
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::MIN_SEQUENCE_LEN;
use crate::elevator::travel;
use crate::shared::ValidationError;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A building level. Floor 0 is a real floor, not "no floor". Floor numbers have no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Floor(pub BigUint);

impl Floor {
    /// Number of floors between `self` and `other`, in either direction.
    pub fn distance(&self, other: &Floor) -> BigUint {
        if self.0 >= other.0 {
            &self.0 - &other.0
        } else {
            &other.0 - &self.0
        }
    }
}

impl From<u64> for Floor {
    fn from(value: u64) -> Self {
        Floor(BigUint::from(value))
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Floor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_unbounded(&self.0, serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TravelTime(pub BigUint);

impl From<u64> for TravelTime {
    fn from(value: u64) -> Self {
        TravelTime(BigUint::from(value))
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TravelTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_unbounded(&self.0, serializer)
    }
}

/**
 * The floors a car visits, in visiting order.
 *
 * Always holds the start floor plus at least one destination. Repeated floors are kept
 * as given since they are part of the visit order, they just add no travel time.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorSequence {
    floors: Vec<Floor>,
}

impl FloorSequence {
    pub fn new(start: Floor, destinations: Vec<Floor>) -> Result<FloorSequence, ValidationError> {
        let mut floors = Vec::with_capacity(destinations.len() + 1);
        floors.push(start);
        floors.extend(destinations);
        FloorSequence::try_from(floors)
    }

    pub fn start(&self) -> &Floor {
        &self.floors[0]
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn travel_time(&self) -> Result<TravelTime, ValidationError> {
        travel::travel_time(&self.floors)
    }
}

impl TryFrom<Vec<Floor>> for FloorSequence {
    type Error = ValidationError;

    fn try_from(floors: Vec<Floor>) -> Result<Self, Self::Error> {
        if floors.len() < MIN_SEQUENCE_LEN {
            return Err(ValidationError::TooFewFloors {
                min: MIN_SEQUENCE_LEN,
                actual: floors.len(),
            });
        }
        Ok(FloorSequence { floors })
    }
}

/// Result of one run: total time and every floor visited.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    #[serde(rename = "travelTime")]
    pub travel_time: TravelTime,
    pub floors: Vec<Floor>,
}

impl Trip {
    pub fn plan(sequence: &FloorSequence) -> Result<Trip, ValidationError> {
        Ok(Trip {
            travel_time: sequence.travel_time()?,
            floors: sequence.floors().to_vec(),
        })
    }
}

/***************************************/
/*             Internals               */
/***************************************/

// JSON numbers as long as they fit a u64, decimal strings beyond that.
fn serialize_unbounded<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    match value.to_u64() {
        Some(small) => serializer.serialize_u64(small),
        None => serializer.collect_str(value),
    }
}
