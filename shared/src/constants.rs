pub const LUCKY_INIT_ENDPOINT: &str = "/api/lucky/init";
pub const LUCKY_DRAW_ENDPOINT: &str = "/api/lucky/draw";
pub const LUCKY_RECORDS_ENDPOINT: &str = "/api/lucky/records";

/// Error code the draw endpoint answers with once every draw credit is spent.
pub const NO_CREDITS_CODE: &str = "NO_DRAW_CHANCES";

pub const NO_CREDITS_MESSAGE: &str = "No draws remaining. Invite friends to earn more draws";
pub const NETWORK_ERROR: &str = "Network error. Please try again";
pub const DRAW_FAILED_ERROR: &str = "The draw could not be completed. Please try again";
pub const LOAD_FAILED_ERROR: &str = "The lucky wheel is unavailable right now";

pub const DEFAULT_CURRENCY_UNIT: &str = "U";
pub const NO_WIN_LABEL: &str = "Thank you";
pub const DEFAULT_EXTRA_TURNS: u32 = 5;
pub const DEFAULT_SPIN_DURATION_MS: u32 = 4000;
