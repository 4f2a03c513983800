use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::constants::{
    DEFAULT_CURRENCY_UNIT, DEFAULT_EXTRA_TURNS, DEFAULT_SPIN_DURATION_MS, NO_WIN_LABEL,
};

/// What to do when the server reports a prize the wheel has no wedge for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPrizePolicy {
    /// Fail the spin and hand the real outcome back to the screen.
    Report,
    /// Land on wedge 0 and flag the reveal as a fallback.
    FallbackToFirstWedge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Full turns added on top of the alignment rotation.
    pub extra_turns: u32,
    pub spin_duration_ms: u32,
    pub currency_unit: String,
    pub no_win_label: String,
    pub unknown_prize: UnknownPrizePolicy,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            extra_turns: DEFAULT_EXTRA_TURNS,
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            currency_unit: DEFAULT_CURRENCY_UNIT.to_string(),
            no_win_label: NO_WIN_LABEL.to_string(),
            unknown_prize: UnknownPrizePolicy::Report,
        }
    }
}

impl WheelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Zero extra turns would let a spin end where it started.
        if self.extra_turns == 0 {
            return Err(ConfigError::ZeroExtraTurns);
        }
        if self.spin_duration_ms == 0 {
            return Err(ConfigError::ZeroSpinDuration);
        }
        if self.currency_unit.trim().is_empty() {
            return Err(ConfigError::EmptyCurrencyUnit);
        }
        if self.no_win_label.trim().is_empty() {
            return Err(ConfigError::EmptyNoWinLabel);
        }
        Ok(())
    }
}
