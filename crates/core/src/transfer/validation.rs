//! Field validation for the send-money form.

use rust_decimal::Decimal;
use wiremit_shared::types::Currency;

use crate::validation::{ValidationContext, ValidationErrors, ValidationKind};

/// Minimum transfer amount, in USD.
pub const MIN_AMOUNT_USD: Decimal = Decimal::ONE;

/// Maximum transfer amount, in USD.
pub const MAX_AMOUNT_USD: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Raw send-money submission, before validation.
#[derive(Debug, Clone)]
pub struct SendMoneyInput {
    /// Amount in USD; `None` when the field was left empty or unparseable.
    pub amount: Option<Decimal>,
    /// Destination currency; `None` when unselected.
    pub currency: Option<Currency>,
    /// Recipient full name.
    pub recipient_name: String,
    /// Recipient email address.
    pub recipient_email: String,
}

/// Validates a send-money submission, returning the checked amount and
/// currency on success.
///
/// Amount must sit in the closed interval [1, 10000] USD, a currency must be
/// selected, the recipient name must be at least 2 characters and the
/// recipient email must be plausible. Violations surface as field errors
/// before the calculator ever runs.
///
/// # Errors
///
/// Returns the accumulated `ValidationErrors` on any violation.
pub fn validate_send_money(input: &SendMoneyInput) -> Result<(Decimal, Currency), ValidationErrors> {
    let mut ctx = ValidationContext::new();

    check_amount(&mut ctx, input.amount);
    if input.currency.is_none() {
        ctx.fail("currency", ValidationKind::Required);
    }

    ctx.require_min_len("recipient_name", &input.recipient_name, 2);
    ctx.require_email("recipient_email", &input.recipient_email);

    ctx.finish()?;
    // Both present once finish() returns Ok
    Ok((
        input.amount.unwrap_or(MIN_AMOUNT_USD),
        input.currency.unwrap_or(Currency::Gbp),
    ))
}

/// Validates the amount/currency pair alone, for quoting before the
/// recipient fields are filled in.
///
/// # Errors
///
/// Returns the accumulated `ValidationErrors` on any violation.
pub fn validate_quote(
    amount: Option<Decimal>,
    currency: Option<Currency>,
) -> Result<(Decimal, Currency), ValidationErrors> {
    let mut ctx = ValidationContext::new();

    check_amount(&mut ctx, amount);
    if currency.is_none() {
        ctx.fail("currency", ValidationKind::Required);
    }

    ctx.finish()?;
    // Both present once finish() returns Ok
    Ok((
        amount.unwrap_or(MIN_AMOUNT_USD),
        currency.unwrap_or(Currency::Gbp),
    ))
}

fn check_amount(ctx: &mut ValidationContext, amount: Option<Decimal>) {
    match amount {
        None => ctx.fail("amount", ValidationKind::Required),
        Some(amount) if amount < MIN_AMOUNT_USD => {
            ctx.fail("amount", ValidationKind::BelowMinimum);
        }
        Some(amount) if amount > MAX_AMOUNT_USD => {
            ctx.fail("amount", ValidationKind::AboveMaximum);
        }
        Some(_) => {}
    }
}
