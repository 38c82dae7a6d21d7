/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::str::FromStr;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Floor, RequestDirection};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Destinations are prompted for separately when left out
    Request {
        floor: Floor,
        direction: RequestDirection,
        destinations: Option<Vec<Floor>>,
    },
    Status,
    Step,
    Help,
    Exit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Invalid input. Example: '3 up' or '3 up 5,7'")]
    Malformed,

    #[error("'{0}' is not a floor number")]
    InvalidFloor(String),

    #[error("'{0}' is not a direction, use 'up' or 'down'")]
    InvalidDirection(String),

    #[error("No valid destination floors entered.")]
    NoDestinations,
}

impl FromStr for RequestDirection {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(RequestDirection::Up),
            "down" => Ok(RequestDirection::Down),
            other => Err(CommandError::InvalidDirection(other.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            ["status"] => Ok(Command::Status),
            ["step"] => Ok(Command::Step),
            ["help"] => Ok(Command::Help),
            ["exit"] | ["quit"] => Ok(Command::Exit),
            [floor, direction] => Ok(Command::Request {
                floor: parse_floor(floor)?,
                direction: direction.parse()?,
                destinations: None,
            }),
            [floor, direction, rest @ ..] => Ok(Command::Request {
                floor: parse_floor(floor)?,
                direction: direction.parse()?,
                destinations: Some(parse_destinations(&rest.join(","))?),
            }),
            _ => Err(CommandError::Malformed),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/// Parses a comma separated list of destination floors.
///
/// Entries that are not numbers or are below ground floor are dropped. An empty result is an error.
pub fn parse_destinations(input: &str) -> Result<Vec<Floor>, CommandError> {
    let destinations: Vec<Floor> = input
        .split(',')
        .filter_map(|s| s.trim().parse::<Floor>().ok())
        .filter(|floor| *floor >= 0)
        .collect();

    if destinations.is_empty() {
        return Err(CommandError::NoDestinations);
    }
    Ok(destinations)
}

fn parse_floor(s: &str) -> Result<Floor, CommandError> {
    s.parse::<Floor>()
        .map_err(|_| CommandError::InvalidFloor(s.to_string()))
}
