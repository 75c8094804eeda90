use std::num::NonZero;

use crate::error::InvalidInput;
use crate::location::Dimension;
use crate::matcher::{MatchPolicy, DEFAULT_MIN_RUN_LENGTH};

/// Points awarded for a move that clears at least one run, unless configured otherwise.
pub const DEFAULT_REVENUE: u32 = 10;

/// Settings a host hands to a [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Width and height of the grid, in that order.
    pub dims: (Dimension, Dimension),
    /// The shortest run that is removed.
    pub min_run_length: usize,
    /// How runs are looked for after each change.
    pub policy: MatchPolicy,
    /// Points per move that clears anything. Clearing several runs at once still scores once; the total saturates at [`u32::MAX`].
    pub revenue: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dims: (NonZero::new(9).unwrap(), NonZero::new(9).unwrap()),
            min_run_length: DEFAULT_MIN_RUN_LENGTH,
            policy: MatchPolicy::default(),
            revenue: DEFAULT_REVENUE,
        }
    }
}

impl GameConfig {
    /// Check that a run of `min_run_length` is both meaningful and able to fit on the grid.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.min_run_length < 2 {
            return Err(InvalidInput::BadConfig { reason: "min_run_length must be at least 2" });
        }
        if self.min_run_length > self.dims.0.get().max(self.dims.1.get()) {
            return Err(InvalidInput::BadConfig { reason: "min_run_length exceeds every line of the grid" });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::GameConfig;
    use crate::error::InvalidInput;
    use crate::matcher::MatchPolicy;

    #[test]
    fn defaults_match_the_classic_game() {
        let config = GameConfig::default();
        assert_eq!((config.dims.0.get(), config.dims.1.get()), (9, 9));
        assert_eq!(config.min_run_length, 5);
        assert_eq!(config.policy, MatchPolicy::Anchored);
        assert_eq!(config.revenue, 10);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn run_length_must_fit() {
        let config = GameConfig { min_run_length: 1, ..Default::default() };
        assert!(matches!(config.validate(), Err(InvalidInput::BadConfig { .. })));

        let config = GameConfig {
            dims: (NonZero::new(3).unwrap(), NonZero::new(4).unwrap()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(InvalidInput::BadConfig { .. })));

        let config = GameConfig { min_run_length: 4, ..config };
        assert_eq!(config.validate(), Ok(()));
    }
}
