use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::config::WheelConfig;
use super::error::CatalogError;
use super::spin::{self, FULL_TURN};

/// Types of prizes a wedge can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Prize {
    Amount { value: Decimal, unit: String },
    NoWin,
}

impl Prize {
    pub fn is_win(&self) -> bool {
        matches!(self, Prize::Amount { .. })
    }

    /// Compares by value, so `50`, `50.0` and `50.00` are the same prize.
    pub fn matches(&self, amount: Decimal, unit: &str) -> bool {
        match self {
            Prize::Amount { value, unit: own_unit } => *value == amount && own_unit == unit,
            Prize::NoWin => amount.is_zero(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub prize: Prize,
    pub label: String,
}

impl Wedge {
    pub fn amount(value: Decimal, unit: &str) -> Self {
        Self {
            label: format!("{}{}", value.normalize(), unit),
            prize: Prize::Amount { value, unit: unit.to_string() },
        }
    }

    pub fn no_win(label: &str) -> Self {
        Self {
            prize: Prize::NoWin,
            label: label.to_string(),
        }
    }
}

/// The wheel's wedges in angular order. Wedge `i` spans
/// `[i * span, (i + 1) * span)` degrees clockwise from the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeCatalog {
    wedges: Vec<Wedge>,
    unit: String,
}

impl PrizeCatalog {
    pub const MIN_WEDGES: usize = 2;

    pub fn new(wedges: Vec<Wedge>, unit: &str) -> Result<Self, CatalogError> {
        if wedges.len() < Self::MIN_WEDGES {
            return Err(CatalogError::TooFewWedges(wedges.len()));
        }
        Ok(Self {
            wedges,
            unit: unit.to_string(),
        })
    }

    /// Builds the wheel from the server's amounts, appending the no-win wedge last.
    pub fn from_wedge_amounts<S: AsRef<str>>(
        amounts: &[S],
        config: &WheelConfig,
    ) -> Result<Self, CatalogError> {
        let mut wedges = Vec::with_capacity(amounts.len() + 1);
        for raw in amounts {
            let raw = raw.as_ref();
            let value = Decimal::from_str(raw.trim())
                .map_err(|_| CatalogError::InvalidAmount(raw.to_string()))?;
            if value.is_zero() {
                return Err(CatalogError::ZeroAmountWedge(raw.to_string()));
            }
            wedges.push(Wedge::amount(value, &config.currency_unit));
        }
        wedges.push(Wedge::no_win(&config.no_win_label));

        let catalog = Self::new(wedges, &config.currency_unit)?;
        debug!("Prize catalog loaded: {:?}", catalog.labels());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.wedges.len()
    }

    /// Always false for a built catalog, which holds at least `MIN_WEDGES`.
    /// Kept as the companion of `len`.
    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty()
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    pub fn wedge(&self, index: usize) -> Option<&Wedge> {
        self.wedges.get(index)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.wedges.iter().map(|w| w.label.as_str()).collect()
    }

    pub fn wedge_angle_span(&self) -> f64 {
        FULL_TURN / self.wedges.len() as f64
    }

    pub fn wedge_center(&self, index: usize) -> f64 {
        spin::wedge_center(index, self.wedge_angle_span())
    }

    pub fn no_win_index(&self) -> Option<usize> {
        self.wedges.iter().position(|w| w.prize == Prize::NoWin)
    }

    /// Index of the wedge covering `angle` degrees in the wheel's own frame.
    pub fn wedge_at_angle(&self, angle: f64) -> usize {
        let angle = angle.rem_euclid(FULL_TURN);
        let index = (angle / self.wedge_angle_span()).floor() as usize;
        index.min(self.wedges.len() - 1)
    }
}
