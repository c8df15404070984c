//! Precipitation occurrence states.

/// Two-state precipitation classification. A day is wet when it has
/// non-zero precipitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WetState {
    /// No precipitation.
    Dry = 0,
    /// Non-zero precipitation.
    Wet = 1,
}

impl WetState {
    /// Classifies a daily precipitation amount.
    pub fn of(amount: f64) -> Self {
        if amount > 0.0 { Self::Wet } else { Self::Dry }
    }

    /// Returns `true` for [`WetState::Wet`].
    pub fn is_wet(self) -> bool {
        self == Self::Wet
    }

    /// Returns the zero-based index of this state (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_index_values() {
        assert_eq!(WetState::Dry.as_index(), 0);
        assert_eq!(WetState::Wet.as_index(), 1);
    }

    #[test]
    fn classify_amounts() {
        assert_eq!(WetState::of(0.0), WetState::Dry);
        assert_eq!(WetState::of(0.1), WetState::Wet);
        assert_eq!(WetState::of(-1.0), WetState::Dry);
        assert_eq!(WetState::of(f64::NAN), WetState::Dry);
    }

    #[test]
    fn trait_assertions() {
        fn assert_copy<T: Copy>() {}
        fn assert_eq<T: Eq>() {}
        fn assert_hash<T: std::hash::Hash>() {}
        assert_copy::<WetState>();
        assert_eq::<WetState>();
        assert_hash::<WetState>();
    }
}
