/// Error type for region construction and resizing.
#[derive(Debug, thiserror::Error)]
pub enum AreaError {
    /// Points or regions that belong to different worlds.
    #[error("Invalid world: {0}")]
    WorldMismatch(String),
    /// Plane region corners at different y levels.
    #[error("Invalid plane: {0}")]
    PlaneMismatch(String),
    /// The direction is not valid for the region, or the resize would breach a limit.
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AreaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AreaError::WorldMismatch("Blocks on separate worlds".to_string());
        assert_eq!(err.to_string(), "Invalid world: Blocks on separate worlds");

        let err: AreaError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AreaError::Config(_)));
    }
}
