/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*            Error types              */
/***************************************/
#[derive(Debug, Error, PartialEq)]
pub enum DispatchError {
    #[error("a dispatcher needs at least one elevator, got {0}")]
    InvalidElevatorCount(i64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid dispatcher configuration: {0}")]
    Dispatch(#[from] DispatchError),
}
