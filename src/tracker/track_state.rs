/// Lifecycle state of a tracked identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Matched in the most recent frame
    #[default]
    Active,
    /// Missed one or more consecutive frames, still within tolerance
    Missing,
    /// Exceeded the disappearance limit; identity is never reused
    Retired,
}

impl TrackState {
    /// Classify a disappearance counter against the configured limit.
    pub fn from_disappeared(disappeared: u32, max_disappeared: u32) -> Self {
        if disappeared > max_disappeared {
            TrackState::Retired
        } else if disappeared > 0 {
            TrackState::Missing
        } else {
            TrackState::Active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_disappeared() {
        assert_eq!(TrackState::from_disappeared(0, 1), TrackState::Active);
        assert_eq!(TrackState::from_disappeared(1, 1), TrackState::Missing);
        assert_eq!(TrackState::from_disappeared(2, 1), TrackState::Retired);
    }
}
