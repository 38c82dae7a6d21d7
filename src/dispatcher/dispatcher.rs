/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::DispatcherConfig;
use crate::elevator::Elevator;
use crate::shared::{Direction, DispatchError, ElevatorId, ElevatorStatus, Floor, RequestDirection};

/**
 * Owns the elevator bank and routes requests to it.
 *
 * Elevators are stored in identity order (1..n) and never added or removed after construction.
 *
 * # Fields
 * - `elevators`:       The elevator bank, index `i` holds the elevator with identity `i + 1`.
 * - `step_on_status`:  Whether `status_report` advances the simulation before reading.
 */
#[derive(Debug, Clone)]
pub struct Dispatcher {
    elevators: Vec<Elevator>,
    step_on_status: bool,
}

/***************************************/
/*             Public API              */
/***************************************/
impl Dispatcher {
    pub fn new(n_elevators: i64) -> Result<Dispatcher, DispatchError> {
        if n_elevators < 1 {
            return Err(DispatchError::InvalidElevatorCount(n_elevators));
        }

        let elevators = (1..=n_elevators as usize).map(Elevator::new).collect();

        Ok(Dispatcher {
            elevators,
            step_on_status: true,
        })
    }

    pub fn from_config(config: &DispatcherConfig) -> Result<Dispatcher, DispatchError> {
        let mut dispatcher = Dispatcher::new(config.n_elevators)?;
        dispatcher.step_on_status = config.step_on_status;
        Ok(dispatcher)
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        id.checked_sub(1).and_then(|index| self.elevators.get(index))
    }

    // Advance every elevator one floor, in identity order
    pub fn step(&mut self) {
        for elevator in self.elevators.iter_mut() {
            elevator.advance_one_step();
        }
    }

    /// Picks the elevator that should answer a call on `request_floor` going `direction`.
    ///
    /// Idle elevators win first, then elevators already heading the same way that have not
    /// passed the floor yet, closest first. Otherwise the least busy elevator is picked. Ties
    /// go to the lowest identity.
    pub fn select_elevator(&self, request_floor: Floor, direction: RequestDirection) -> ElevatorId {
        let index = self.select_index(request_floor, direction);
        self.elevators[index].id()
    }

    /// Assigns a new request and queues its pickup and destinations on the chosen elevator.
    pub fn handle_request(
        &mut self,
        floor: Floor,
        direction: RequestDirection,
        destinations: &[Floor],
    ) -> ElevatorId {
        let index = self.select_index(floor, direction);
        let elevator = &mut self.elevators[index];

        elevator.enqueue_pickup(floor, direction);
        for destination in destinations {
            elevator.enqueue_destination(*destination);
        }

        info!(
            "Request added: floor {} going {}, assigned to elevator {}",
            floor,
            direction,
            elevator.id()
        );
        elevator.id()
    }

    // Reading the status also moves the simulation along unless disabled in the config
    pub fn status_report(&mut self) -> Vec<ElevatorStatus> {
        if self.step_on_status {
            self.step();
        }
        self.snapshots()
    }

    pub fn snapshots(&self) -> Vec<ElevatorStatus> {
        self.elevators.iter().map(Elevator::status).collect()
    }

    /***************************************/
    /*          Private helpers            */
    /***************************************/
    fn select_index(&self, request_floor: Floor, direction: RequestDirection) -> usize {
        let distance = |elevator: &Elevator| elevator.current_floor().abs_diff(request_floor);

        // min_by_key keeps the first of equal elements, so ties go to the lowest identity
        let closest_idle = self
            .elevators
            .iter()
            .enumerate()
            .filter(|(_, elevator)| elevator.is_idle())
            .min_by_key(|(_, elevator)| distance(*elevator));

        if let Some((index, elevator)) = closest_idle {
            debug!("Closest idle elevator is {}", elevator.id());
            return index;
        }

        let wanted: Direction = direction.into();
        let closest_passing = self
            .elevators
            .iter()
            .enumerate()
            .filter(|(_, elevator)| elevator.direction() == wanted)
            .filter(|(_, elevator)| match direction {
                RequestDirection::Up => elevator.current_floor() <= request_floor,
                RequestDirection::Down => elevator.current_floor() >= request_floor,
            })
            .min_by_key(|(_, elevator)| distance(*elevator));

        if let Some((index, elevator)) = closest_passing {
            debug!("Elevator {} will pass floor {}", elevator.id(), request_floor);
            return index;
        }

        // No one is free or on the way, take the least busy one
        let least_busy = self
            .elevators
            .iter()
            .enumerate()
            .min_by_key(|(_, elevator)| elevator.pending_stops())
            .map(|(index, _)| index)
            .unwrap_or(0);

        debug!(
            "No elevator on the way to floor {}, falling back to elevator {}",
            request_floor,
            least_busy + 1
        );
        least_busy
    }
}
