use super::Category;

/// A per-category spending cap. Setting a limit for the same category
/// again replaces the old amount. Breaches warn, they never block.
#[derive(Debug, Clone)]
pub(crate) struct CategoryLimit {
    pub category: Category,
    pub limit_amount: i64,
}
