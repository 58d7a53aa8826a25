//! Fee and conversion calculation for outbound transfers.
//!
//! The calculator is pure: it assumes its inputs already passed field
//! validation and that a complete rate snapshot is available. The gating of
//! incomplete forms (empty amount, unselected currency, missing rates) is a
//! caller concern, not an error here.

pub mod quote;
pub mod validation;

#[cfg(test)]
mod quote_props;

pub use quote::{TransferQuote, quote};
pub use validation::{
    MAX_AMOUNT_USD, MIN_AMOUNT_USD, SendMoneyInput, validate_quote, validate_send_money,
};
