use thiserror::Error;

use super::model::DrawOutcome;
use super::service::ApiErrorBody;
use crate::constants::{
    DRAW_FAILED_ERROR, LOAD_FAILED_ERROR, NETWORK_ERROR, NO_CREDITS_CODE, NO_CREDITS_MESSAGE,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("extra_turns must be at least 1")]
    ZeroExtraTurns,
    #[error("spin_duration_ms must be greater than 0")]
    ZeroSpinDuration,
    #[error("currency_unit must not be empty")]
    EmptyCurrencyUnit,
    #[error("no_win_label must not be empty")]
    EmptyNoWinLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("a wheel needs at least 2 wedges, got {0}")]
    TooFewWedges(usize),
    #[error("wedge amount {0:?} is not a number")]
    InvalidAmount(String),
    #[error("wedge amount {0:?} is zero, which is reserved for the no-win wedge")]
    ZeroAmountWedge(String),
}

/// Failures reported by the remote draw service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("no draw credits remaining")]
    NoCredits,
    #[error("network error: {0}")]
    Network(String),
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ServiceError {
    /// Classifies a non-success HTTP answer. Only the dedicated error code
    /// counts as "out of credits"; any other rejection stays generic.
    pub fn from_response(status: u16, body: Option<ApiErrorBody>) -> Self {
        let body = body.unwrap_or_default();
        if body.code.as_deref() == Some(NO_CREDITS_CODE) {
            return ServiceError::NoCredits;
        }
        ServiceError::Rejected {
            status,
            message: body.message.unwrap_or_else(|| format!("HTTP {}", status)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    #[error("a draw is already in progress")]
    Busy,
    #[error("no draw credits remaining")]
    NoCredits { invite_link: Option<String> },
    #[error(transparent)]
    Service(ServiceError),
    #[error("won amount {} has no wedge on the wheel", .outcome.won_amount)]
    PrizeNotOnWheel { outcome: DrawOutcome },
    #[error("invalid prize catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("invalid wheel config: {0}")]
    Config(#[from] ConfigError),
    #[error("the draw screen has been closed")]
    TornDown,
}

impl DrawError {
    /// Text for the screen. Busy and torn-down attempts have nothing to say.
    pub fn user_message(&self) -> Option<String> {
        match self {
            DrawError::Busy | DrawError::TornDown => None,
            DrawError::NoCredits { .. } => Some(NO_CREDITS_MESSAGE.to_string()),
            DrawError::Service(ServiceError::Network(_)) => Some(NETWORK_ERROR.to_string()),
            DrawError::Service(ServiceError::Rejected { message, .. }) => Some(message.clone()),
            DrawError::Service(_) => Some(DRAW_FAILED_ERROR.to_string()),
            DrawError::PrizeNotOnWheel { outcome } => Some(format!(
                "You won {}, but the wheel could not show this prize",
                outcome.won_amount.normalize()
            )),
            DrawError::Catalog(_) | DrawError::Config(_) => Some(LOAD_FAILED_ERROR.to_string()),
        }
    }

    pub fn is_no_credits(&self) -> bool {
        matches!(self, DrawError::NoCredits { .. })
    }
}
