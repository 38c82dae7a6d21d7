pub mod elevator;

pub use elevator::Elevator;
