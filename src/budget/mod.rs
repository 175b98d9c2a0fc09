//! Budget arithmetic shared by the chat and CLI front ends.

/// True when spending is strictly over the cap. Spending exactly the
/// limit is still within budget, and no limit means nothing to breach.
pub(crate) fn exceeds_limit(spent: i64, limit: Option<i64>) -> bool {
    limit.is_some_and(|cap| spent > cap)
}

/// A fixed-width gauge like `███░░░░░░░`. Overspending fills the whole
/// bar; a missing or zero limit renders empty.
pub(crate) fn progress_bar(current: i64, limit: i64, segments: usize) -> String {
    if limit <= 0 {
        return "░".repeat(segments);
    }
    let ratio = current as f64 / limit as f64;
    let filled = ((ratio * segments as f64) as usize).min(segments);
    let empty = segments.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Share of the limit already spent, in percent. 0 when no limit is set.
pub(crate) fn percent_used(current: i64, limit: i64) -> f64 {
    if limit <= 0 {
        return 0.0;
    }
    current as f64 * 100.0 / limit as f64
}

#[cfg(test)]
mod tests;
