//! Guided flows for adding an expense and setting a limit.
//!
//! Each user has at most one active dialog. The state is plain data so
//! it can be stashed in the database between messages.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::Category;

/// Where a user currently is in a guided flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub(crate) enum DialogState {
    AwaitingAmount,
    AwaitingCategory { amount: i64 },
    AwaitingDescription { amount: i64, category: Category },
    AwaitingLimitCategory,
    AwaitingLimitAmount { category: Category },
}

/// What a message did to the active dialog.
#[derive(Debug)]
pub(crate) enum DialogOutcome {
    /// The flow moved on and expects another message.
    Continue(DialogState),
    /// The message did not fit the current step; the state is unchanged.
    Invalid(LedgerError),
    /// The add-expense flow finished.
    AddExpense {
        amount: i64,
        category: Category,
        description: String,
    },
    /// The set-limit flow finished.
    SetLimit { category: Category, amount: i64 },
}

/// Feed one user message into the dialog.
pub(crate) fn advance(state: &DialogState, input: &str) -> DialogOutcome {
    match state {
        DialogState::AwaitingAmount => match parse_amount(input) {
            Ok(amount) => DialogOutcome::Continue(DialogState::AwaitingCategory { amount }),
            Err(e) => DialogOutcome::Invalid(e),
        },
        DialogState::AwaitingCategory { amount } => match parse_category(input) {
            Ok(category) => DialogOutcome::Continue(DialogState::AwaitingDescription {
                amount: *amount,
                category,
            }),
            Err(e) => DialogOutcome::Invalid(e),
        },
        DialogState::AwaitingDescription { amount, category } => DialogOutcome::AddExpense {
            amount: *amount,
            category: *category,
            description: normalize_description(input),
        },
        DialogState::AwaitingLimitCategory => match parse_category(input) {
            Ok(category) => {
                DialogOutcome::Continue(DialogState::AwaitingLimitAmount { category })
            }
            Err(e) => DialogOutcome::Invalid(e),
        },
        DialogState::AwaitingLimitAmount { category } => match parse_amount(input) {
            Ok(amount) => DialogOutcome::SetLimit {
                category: *category,
                amount,
            },
            Err(e) => DialogOutcome::Invalid(e),
        },
    }
}

/// Parse a whole positive amount, e.g. "250".
pub(crate) fn parse_amount(input: &str) -> Result<i64, LedgerError> {
    let amount: i64 = input
        .trim()
        .parse()
        .map_err(|_| LedgerError::InvalidAmount)?;
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(amount)
}

pub(crate) fn parse_category(input: &str) -> Result<Category, LedgerError> {
    Category::parse(input).ok_or_else(|| LedgerError::UnknownCategory(input.trim().to_string()))
}

/// "-" skips the description, everything else is kept trimmed.
pub(crate) fn normalize_description(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed == "-" {
        String::new()
    } else {
        trimmed.to_string()
    }
}
