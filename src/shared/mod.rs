pub mod error;
pub mod macros;
pub mod structs;

pub use error::ConfigError;
pub use error::DispatchError;
pub use structs::Direction;
pub use structs::ElevatorId;
pub use structs::ElevatorStatus;
pub use structs::Floor;
pub use structs::RequestDirection;
