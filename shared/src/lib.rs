pub mod constants;
pub mod lucky_wheel;

pub use rust_decimal::Decimal;
