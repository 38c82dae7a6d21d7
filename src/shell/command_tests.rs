/*
 * Unit tests for the shell command parser
 *
 * Tests:
 * - test_parse_keywords
 * - test_parse_request
 * - test_parse_request_with_destinations
 * - test_parse_errors
 * - test_parse_destinations
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod command_tests {
    use crate::shared::RequestDirection;
    use crate::shell::command::{parse_destinations, Command, CommandError};

    #[test]
    fn test_parse_keywords() {
        assert_eq!("status".parse::<Command>(), Ok(Command::Status));
        assert_eq!("  STATUS \n".parse::<Command>(), Ok(Command::Status));
        assert_eq!("step".parse::<Command>(), Ok(Command::Step));
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_request() {
        assert_eq!(
            "3 up".parse::<Command>(),
            Ok(Command::Request {
                floor: 3,
                direction: RequestDirection::Up,
                destinations: None,
            })
        );
        assert_eq!(
            "-1 Down".parse::<Command>(),
            Ok(Command::Request {
                floor: -1,
                direction: RequestDirection::Down,
                destinations: None,
            })
        );
    }

    #[test]
    fn test_parse_request_with_destinations() {
        assert_eq!(
            "3 down 1,0".parse::<Command>(),
            Ok(Command::Request {
                floor: 3,
                direction: RequestDirection::Down,
                destinations: Some(vec![1, 0]),
            })
        );
        assert_eq!(
            "2 up 5, 7 9".parse::<Command>(),
            Ok(Command::Request {
                floor: 2,
                direction: RequestDirection::Up,
                destinations: Some(vec![5, 7, 9]),
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Malformed));
        assert_eq!("hello".parse::<Command>(), Err(CommandError::Malformed));
        assert_eq!(
            "three up".parse::<Command>(),
            Err(CommandError::InvalidFloor("three".to_string()))
        );
        assert_eq!(
            "3 sideways".parse::<Command>(),
            Err(CommandError::InvalidDirection("sideways".to_string()))
        );
        assert_eq!(
            "3 idle".parse::<Command>(),
            Err(CommandError::InvalidDirection("idle".to_string()))
        );
        assert_eq!(
            "3 up -2".parse::<Command>(),
            Err(CommandError::NoDestinations)
        );
    }

    #[test]
    fn test_parse_destinations() {
        // Negative and non-numeric entries are dropped
        assert_eq!(parse_destinations("4, 2,9"), Ok(vec![4, 2, 9]));
        assert_eq!(parse_destinations("4,x,-3,0"), Ok(vec![4, 0]));
        assert_eq!(parse_destinations("7,7"), Ok(vec![7, 7]));
        assert_eq!(parse_destinations(""), Err(CommandError::NoDestinations));
        assert_eq!(parse_destinations("-1,-2"), Err(CommandError::NoDestinations));
    }
}
