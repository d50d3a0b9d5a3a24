pub mod errors;
pub mod logger;
pub mod macros;
pub mod structs;

pub use errors::ElevatorError;
pub use errors::UsageError;
pub use errors::ValidationError;
pub use structs::Floor;
pub use structs::FloorSequence;
pub use structs::TravelTime;
pub use structs::Trip;
