mod category;
mod expense;
mod limit;
mod period;

pub(crate) use category::Category;
pub(crate) use expense::Expense;
pub(crate) use limit::CategoryLimit;
pub(crate) use period::Period;

#[cfg(test)]
mod tests;
