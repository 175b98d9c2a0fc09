//! Plain-text reply builders. Everything here is pure so the chat and
//! CLI front ends render identical output.

use std::path::Path;

use crate::budget;
use crate::dialog::DialogState;
use crate::error::LedgerError;
use crate::models::{Category, CategoryLimit, Expense};

/// How many expenses `list` shows.
pub(crate) const RECENT_COUNT: u32 = 10;

const BAR_SEGMENTS: usize = 10;

const COMMANDS: &str = "\
add      record an expense
list     show recent expenses
stats    spending by category
limit    set a category limit
limits   show configured limits
plan     overall spending against the limits
export   write everything to a CSV file
cancel   abandon the current flow";

pub(crate) fn greeting() -> String {
    format!("Hi! I keep track of what you spend.\n\n{COMMANDS}")
}

pub(crate) fn help() -> String {
    format!("Here's what I can do:\n\n{COMMANDS}")
}

pub(crate) fn unknown() -> String {
    format!("I didn't catch that. Try one of these:\n\n{COMMANDS}")
}

pub(crate) fn prompt_for(state: &DialogState) -> String {
    match state {
        DialogState::AwaitingAmount => "How much did you spend?".into(),
        DialogState::AwaitingCategory { .. } => "Pick a category:".into(),
        DialogState::AwaitingDescription { .. } => "Add a description, or '-' to skip.".into(),
        DialogState::AwaitingLimitCategory => "Which category gets the limit?".into(),
        DialogState::AwaitingLimitAmount { category } => {
            format!("What should the {category} limit be?")
        }
    }
}

pub(crate) fn rejected(state: &DialogState, err: &LedgerError) -> String {
    format!("{err}. {}", prompt_for(state))
}

pub(crate) fn expense_recorded(expense: &Expense, spent: i64, limit: Option<i64>) -> String {
    let mut text = format!(
        "Recorded {} for {} {}.",
        fmt_amount(expense.amount),
        expense.category.icon(),
        expense.category
    );
    if budget::exceeds_limit(spent, limit) {
        if let Some(cap) = limit {
            text.push_str(&format!(
                "\n⚠️ Over the {} limit: {}/{}",
                expense.category,
                fmt_amount(spent),
                fmt_amount(cap)
            ));
        }
    }
    text
}

pub(crate) fn limit_set(category: Category, amount: i64) -> String {
    format!(
        "Limit for {} {} set to {}.",
        category.icon(),
        category,
        fmt_amount(amount)
    )
}

pub(crate) fn recent_expenses(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.".into();
    }
    let mut lines = vec![format!("Your last {} expenses:", expenses.len())];
    for e in expenses {
        let mut line = format!("{} {} {}", e.category.icon(), fmt_amount(e.amount), e.category);
        if e.has_description() {
            line.push_str(&format!(" ({})", e.description));
        }
        let date = e.recorded_at.get(..10).unwrap_or(e.recorded_at.as_str());
        line.push_str(&format!(" on {date}"));
        lines.push(line);
    }
    let sum: i64 = expenses.iter().map(|e| e.amount).sum();
    lines.push(format!("Total: {}", fmt_amount(sum)));
    lines.join("\n")
}

pub(crate) fn category_stats(rows: &[(Category, i64)]) -> String {
    if rows.is_empty() {
        return "No expenses recorded yet.".into();
    }
    let total: i64 = rows.iter().map(|(_, amount)| amount).sum();
    let mut lines = vec!["Spending by category:".to_string()];
    for (category, amount) in rows {
        lines.push(format!(
            "{} {} {} ({:.1}%)",
            category.icon(),
            fmt_amount(*amount),
            category,
            budget::percent_used(*amount, total)
        ));
    }
    lines.push(format!("Total: {}", fmt_amount(total)));
    lines.join("\n")
}

pub(crate) fn limits_overview(rows: &[(CategoryLimit, i64)]) -> String {
    if rows.is_empty() {
        return "No limits configured. Send 'limit' to add one.".into();
    }
    let mut lines = vec!["Your limits:".to_string()];
    for (limit, spent) in rows {
        let mut line = format!(
            "{} {} {} {}/{}",
            limit.category.icon(),
            limit.category,
            budget::progress_bar(*spent, limit.limit_amount, BAR_SEGMENTS),
            fmt_amount(*spent),
            fmt_amount(limit.limit_amount)
        );
        if budget::exceeds_limit(*spent, Some(limit.limit_amount)) {
            line.push_str(" ⚠️");
        }
        lines.push(line);
    }
    lines.join("\n")
}

pub(crate) fn plan(spent: i64, overall_limit: Option<i64>) -> String {
    match overall_limit {
        Some(cap) => format!(
            "Spent {} of {} ({:.1}%)\n{}",
            fmt_amount(spent),
            fmt_amount(cap),
            budget::percent_used(spent, cap),
            budget::progress_bar(spent, cap, BAR_SEGMENTS)
        ),
        None => "No limits configured yet, so there is no plan to track. Send 'limit' to add one."
            .into(),
    }
}

pub(crate) fn export_done(count: usize, path: &Path) -> String {
    format!("Saved {} expenses to {}.", count, path.display())
}

pub(crate) fn nothing_to_export() -> String {
    "Nothing to export yet.".into()
}

pub(crate) fn cancelled() -> String {
    "Cancelled.".into()
}

pub(crate) fn nothing_to_cancel() -> String {
    "No active flow to cancel.".into()
}

/// e.g. `1234567` → `"1,234,567"`
pub(crate) fn fmt_amount(val: i64) -> String {
    let digits = val.unsigned_abs().to_string();
    let with_commas: String = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");
    if val < 0 {
        format!("-{with_commas}")
    } else {
        with_commas
    }
}
