use thiserror::Error;

/// Everything a command against the colony can fail with.
///
/// None of these abort a running game: a failed request leaves the
/// colony untouched and the caller decides how to report it.
#[derive(Debug, Error)]
pub enum GameError {
    /// Not enough food to pay for the ant
    #[error("not enough food")]
    InsufficientResources,
    /// The target place already holds an incompatible ant
    #[error("tunnel already occupied")]
    LocationOccupied,
    /// Boost name is unknown or none are left in stock
    #[error("no such boost: {0}")]
    UnknownBoost(String),
    /// Boost target has no ant to receive it
    #[error("no Ant at location")]
    NoDefenderPresent,
    /// Coordinates are malformed or outside the colony
    #[error("illegal location: {0}")]
    InvalidLocation(String),
    /// Ant type name is not one we know how to build
    #[error("unknown ant type: {0}")]
    UnknownUnitType(String),
    /// Construction parameters describe an impossible game
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Shell input that is not a command
    #[error("invalid command: {0}")]
    InvalidCommand(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_shell_wording() {
        assert_eq!(GameError::InsufficientResources.to_string(), "not enough food");
        assert_eq!(GameError::LocationOccupied.to_string(), "tunnel already occupied");
        assert_eq!(
            GameError::InvalidLocation("9,9".to_string()).to_string(),
            "illegal location: 9,9"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let err: GameError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, GameError::Io(_)));
    }
}
