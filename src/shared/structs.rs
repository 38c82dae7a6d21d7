/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
pub type Floor = i32;
pub type ElevatorId = usize;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
            Direction::Idle => write!(f, "Idle"),
        }
    }
}

/// Direction a caller can ask for. Never idle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestDirection {
    Up,
    Down,
}

impl From<RequestDirection> for Direction {
    fn from(item: RequestDirection) -> Self {
        match item {
            RequestDirection::Up => Direction::Up,
            RequestDirection::Down => Direction::Down,
        }
    }
}

impl fmt::Display for RequestDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Direction::from(*self), f)
    }
}

/**
 * Read-only snapshot of a single elevator.
 *
 * # Fields
 * - `id`:                  Identity of the elevator, 1-based.
 * - `current_floor`:       Floor the elevator is at.
 * - `direction`:           Current direction of travel.
 * - `next_stop`:           Next stop under the current direction, if any.
 * - `ascending_stops`:     Stops served on the way up, increasing.
 * - `descending_stops`:    Stops served on the way down, decreasing.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorStatus {
    pub id: ElevatorId,
    #[serde(rename = "currentFloor")]
    pub current_floor: Floor,
    pub direction: Direction,
    #[serde(rename = "nextStop")]
    pub next_stop: Option<Floor>,
    #[serde(rename = "ascendingStops")]
    pub ascending_stops: Vec<Floor>,
    #[serde(rename = "descendingStops")]
    pub descending_stops: Vec<Floor>,
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let next_stop = match self.next_stop {
            Some(floor) => floor.to_string(),
            None => "None".to_string(),
        };

        write!(
            f,
            "Elevator {} is at floor {}, going {}, next stop: {}, ascending: [{}], descending: [{}]",
            self.id,
            self.current_floor,
            self.direction,
            next_stop,
            join_floors(&self.ascending_stops),
            join_floors(&self.descending_stops),
        )
    }
}

fn join_floors(floors: &[Floor]) -> String {
    floors
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<String>>()
        .join(",")
}
