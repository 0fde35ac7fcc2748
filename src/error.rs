use std::fmt;

/// Failure reasons reported by the host position sensor
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum PositionError {
    /// The host refused to share its position
    PermissionDenied,
    /// A position was configured but could not be read
    Unavailable,
    /// The sensor did not answer in time
    Timeout,
    /// The host provides no position capability at all
    Unsupported,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::PermissionDenied => write!(f, "permission denied"),
            PositionError::Unavailable => write!(f, "position unavailable"),
            PositionError::Timeout => write!(f, "position request timed out"),
            PositionError::Unsupported => write!(f, "no position capability on this host"),
        }
    }
}

impl std::error::Error for PositionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(PositionError::PermissionDenied.to_string(), "permission denied");
        assert_eq!(PositionError::Unavailable.to_string(), "position unavailable");
        assert_eq!(PositionError::Timeout.to_string(), "position request timed out");
        assert_eq!(
            PositionError::Unsupported.to_string(),
            "no position capability on this host"
        );
    }
}
