/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, ElevatorId, ElevatorStatus, Floor, RequestDirection};

/**
 * A single elevator car and its stop queues.
 *
 * The elevator runs a SCAN policy: it serves every pending stop in its direction of travel
 * before turning around. Stops are split in two ordered sets depending on which leg of the
 * trip they belong to.
 *
 * # Fields
 * - `id`:                  Stable identity, assigned by the dispatcher.
 * - `current_floor`:       Current floor, only changed by `advance_one_step`.
 * - `direction`:           Current direction of travel, `Idle` when nothing is queued.
 * - `ascending_stops`:     Floors to serve while moving up.
 * - `descending_stops`:    Floors to serve while moving down.
 */
#[derive(Debug, Clone)]
pub struct Elevator {
    id: ElevatorId,
    current_floor: Floor,
    direction: Direction,
    ascending_stops: BTreeSet<Floor>,
    descending_stops: BTreeSet<Floor>,
}

impl Elevator {
    pub fn new(id: ElevatorId) -> Elevator {
        Elevator {
            id,
            current_floor: 0,
            direction: Direction::Idle,
            ascending_stops: BTreeSet::new(),
            descending_stops: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn ascending_stops(&self) -> &BTreeSet<Floor> {
        &self.ascending_stops
    }

    pub fn descending_stops(&self) -> &BTreeSet<Floor> {
        &self.descending_stops
    }

    pub fn pending_stops(&self) -> usize {
        self.ascending_stops.len() + self.descending_stops.len()
    }

    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Idle
    }

    // Hall call, filed on the leg matching the requested direction
    pub fn enqueue_pickup(&mut self, floor: Floor, direction: RequestDirection) {
        match direction {
            RequestDirection::Up => self.ascending_stops.insert(floor),
            RequestDirection::Down => self.descending_stops.insert(floor),
        };

        if self.direction == Direction::Idle {
            self.direction = direction.into();
        }
    }

    // Cab call, filed relative to where the car is right now. A destination on the current
    // floor lands in the descending set.
    pub fn enqueue_destination(&mut self, floor: Floor) {
        if floor > self.current_floor {
            self.ascending_stops.insert(floor);
        } else {
            self.descending_stops.insert(floor);
        }
    }

    /// Moves at most one floor toward the next committed stop and serves the floor it lands on.
    ///
    /// Returns the floor that was served, if any.
    pub fn advance_one_step(&mut self) -> Option<Floor> {
        // Pick a direction if we have been standing still
        if self.direction == Direction::Idle {
            if !self.ascending_stops.is_empty() {
                self.direction = Direction::Up;
            } else if !self.descending_stops.is_empty() {
                self.direction = Direction::Down;
            } else {
                return None;
            }
        }

        let Some(next_stop) = self.next_commitment() else {
            self.direction = Direction::Idle;
            return None;
        };

        let previous_floor = self.current_floor;
        match next_stop.cmp(&self.current_floor) {
            Ordering::Greater => self.current_floor += 1,
            Ordering::Less => self.current_floor -= 1,
            Ordering::Equal => (),
        }
        if self.current_floor != previous_floor {
            debug!(
                "Elevator {} moved {} -> {} (heading for {})",
                self.id, previous_floor, self.current_floor, next_stop
            );
        }

        // A floor is served no matter which leg it was filed under
        let served_up = self.ascending_stops.remove(&self.current_floor);
        let served_down = self.descending_stops.remove(&self.current_floor);
        let served = served_up || served_down;
        if served {
            info!("Elevator {} stopping at floor {}", self.id, self.current_floor);
        }

        self.update_direction();

        served.then_some(self.current_floor)
    }

    pub fn status(&self) -> ElevatorStatus {
        let next_stop = match self.direction {
            Direction::Up => self.ascending_stops.first().copied(),
            Direction::Down => self.descending_stops.last().copied(),
            Direction::Idle => None,
        };

        ElevatorStatus {
            id: self.id,
            current_floor: self.current_floor,
            direction: self.direction,
            next_stop,
            ascending_stops: self.ascending_stops.iter().copied().collect(),
            descending_stops: self.descending_stops.iter().rev().copied().collect(),
        }
    }

    // Where the car is heading. Crosses over to the other leg once the current one is exhausted.
    fn next_commitment(&self) -> Option<Floor> {
        match self.direction {
            Direction::Up => self
                .ascending_stops
                .first()
                .or_else(|| self.descending_stops.last())
                .copied(),
            Direction::Down => self
                .descending_stops
                .last()
                .or_else(|| self.ascending_stops.first())
                .copied(),
            Direction::Idle => None,
        }
    }

    fn update_direction(&mut self) {
        let (current_leg_empty, other_leg_empty, other_direction) = match self.direction {
            Direction::Up => (
                self.ascending_stops.is_empty(),
                self.descending_stops.is_empty(),
                Direction::Down,
            ),
            Direction::Down => (
                self.descending_stops.is_empty(),
                self.ascending_stops.is_empty(),
                Direction::Up,
            ),
            Direction::Idle => return,
        };

        if current_leg_empty && other_leg_empty {
            debug!("Elevator {} is now idle at floor {}", self.id, self.current_floor);
            self.direction = Direction::Idle;
        } else if current_leg_empty {
            debug!("Elevator {} reversing to {}", self.id, other_direction);
            self.direction = other_direction;
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        id: ElevatorId,
        current_floor: Floor,
        direction: Direction,
        ascending_stops: &[Floor],
        descending_stops: &[Floor],
    ) -> Elevator {
        Elevator {
            id,
            current_floor,
            direction,
            ascending_stops: ascending_stops.iter().copied().collect(),
            descending_stops: descending_stops.iter().copied().collect(),
        }
    }
}
