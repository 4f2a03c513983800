use log::{error, warn};
use rust_decimal::Decimal;

use super::catalog::PrizeCatalog;
use super::config::UnknownPrizePolicy;
use super::error::DrawError;
use super::model::DrawOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Exact(usize),
    /// No wedge held the won amount; the wheel lands on wedge 0 anyway.
    Fallback(usize),
}

impl Resolution {
    pub fn index(self) -> usize {
        match self {
            Resolution::Exact(index) | Resolution::Fallback(index) => index,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }
}

/// Finds the wedge holding `won_amount`. A zero amount maps to the no-win
/// wedge wherever it sits in the catalog.
pub fn resolve_wedge(won_amount: Decimal, catalog: &PrizeCatalog) -> Option<usize> {
    if won_amount.is_zero() {
        return catalog.no_win_index();
    }
    catalog
        .wedges()
        .iter()
        .position(|wedge| wedge.prize.matches(won_amount, catalog.unit()))
}

pub fn resolve_outcome(
    outcome: &DrawOutcome,
    catalog: &PrizeCatalog,
    policy: UnknownPrizePolicy,
) -> Result<Resolution, DrawError> {
    if let Some(index) = resolve_wedge(outcome.won_amount, catalog) {
        return Ok(Resolution::Exact(index));
    }

    match policy {
        UnknownPrizePolicy::Report => {
            error!(
                "Won amount {} has no wedge in catalog {:?}",
                outcome.won_amount,
                catalog.labels()
            );
            Err(DrawError::PrizeNotOnWheel {
                outcome: outcome.clone(),
            })
        }
        UnknownPrizePolicy::FallbackToFirstWedge => {
            warn!(
                "Won amount {} has no wedge, landing on wedge 0 instead",
                outcome.won_amount
            );
            Ok(Resolution::Fallback(0))
        }
    }
}
