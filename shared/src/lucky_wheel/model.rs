use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::Prize;

// === API Types ===

/// Answer of the init endpoint, fetched once when the wheel screen mounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawInit {
    pub remaining_credits: u32,
    /// Unix seconds.
    #[serde(default)]
    pub campaign_end_time: Option<i64>,
    #[serde(default)]
    pub invite_link: Option<String>,
    pub goal_amount: Decimal,
    pub cumulative_amount: Decimal,
    /// Kept as text so a malformed amount fails catalog validation instead of
    /// the whole response.
    pub wedge_amounts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub won_amount: Decimal,
    pub cumulative_amount: Decimal,
    pub goal_reached: bool,
}

impl DrawOutcome {
    pub fn is_win(&self) -> bool {
        !self.won_amount.is_zero()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub won_amount: Decimal,
    pub created_at: i64,
}

// === Screen state ===

/// The screen's mirror of the campaign, refreshed from every draw outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSession {
    pub remaining_credits: u32,
    pub campaign_end_time: Option<i64>,
    pub invite_link: Option<String>,
    pub goal_amount: Decimal,
    pub cumulative_amount: Decimal,
    pub goal_reached: bool,
}

impl DrawSession {
    pub fn from_init(init: &DrawInit) -> Self {
        Self {
            remaining_credits: init.remaining_credits,
            campaign_end_time: init.campaign_end_time,
            invite_link: init.invite_link.clone(),
            goal_amount: init.goal_amount,
            cumulative_amount: init.cumulative_amount,
            goal_reached: !init.goal_amount.is_zero() && init.cumulative_amount >= init.goal_amount,
        }
    }

    pub fn has_credits(&self) -> bool {
        self.remaining_credits > 0
    }

    pub fn consume_credit(&mut self) {
        self.remaining_credits = self.remaining_credits.saturating_sub(1);
    }

    pub fn apply_outcome(&mut self, outcome: &DrawOutcome) {
        self.cumulative_amount = outcome.cumulative_amount;
        self.goal_reached = outcome.goal_reached;
    }

    /// Share of the campaign goal reached so far, clamped to `[0, 1]`.
    pub fn goal_progress(&self) -> f64 {
        if self.goal_reached {
            return 1.0;
        }
        if self.goal_amount <= Decimal::ZERO {
            return 0.0;
        }
        let ratio = self.cumulative_amount / self.goal_amount;
        ratio.to_f64().unwrap_or(0.0).clamp(0.0, 1.0)
    }

    pub fn seconds_until_end(&self, now_secs: i64) -> Option<i64> {
        self.campaign_end_time.map(|end| (end - now_secs).max(0))
    }
}

/// What the result modal shows once the wheel has stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawReveal {
    pub wedge_index: usize,
    pub label: String,
    pub prize: Prize,
    pub outcome: DrawOutcome,
    /// The outcome had no matching wedge and the wheel landed on wedge 0.
    pub fallback: bool,
}
