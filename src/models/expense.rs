use super::Category;

/// One recorded expense. Amounts are positive whole numbers in the
/// smallest currency unit.
#[derive(Debug, Clone)]
pub(crate) struct Expense {
    pub id: i64,
    pub amount: i64,
    pub category: Category,
    pub description: String,
    /// Local time, "YYYY-MM-DD HH:MM:SS".
    pub recorded_at: String,
}

impl Expense {
    pub(crate) fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}
