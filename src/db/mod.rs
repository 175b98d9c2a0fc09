mod schema;

use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::{debug, warn};

use crate::dialog::DialogState;
use crate::error::LedgerError;
use crate::models::{Category, CategoryLimit, Expense, Period};

type Result<T> = std::result::Result<T, LedgerError>;

pub(crate) struct Ledger {
    conn: Connection,
}

impl Ledger {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        let mut ledger = Self { conn };
        ledger.migrate()?;
        Ok(ledger)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut ledger = Self { conn };
        ledger.migrate()?;
        Ok(ledger)
    }

    fn migrate(&mut self) -> Result<()> {
        // Check if schema_version table exists
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        // Existing database - check version and apply migrations
        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Expenses ──────────────────────────────────────────────

    /// Record an expense stamped with the current local time.
    pub(crate) fn record_expense(
        &self,
        user_id: i64,
        amount: i64,
        category: Category,
        description: &str,
    ) -> Result<Expense> {
        self.record_expense_at(user_id, amount, category, description, Local::now().naive_local())
    }

    /// Record an expense with an explicit timestamp, e.g. when backfilling.
    pub(crate) fn record_expense_at(
        &self,
        user_id: i64,
        amount: i64,
        category: Category,
        description: &str,
        at: NaiveDateTime,
    ) -> Result<Expense> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }
        let recorded_at = at.format("%Y-%m-%d %H:%M:%S").to_string();
        self.conn.execute(
            "INSERT INTO expenses (user_id, amount, category, description, recorded_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![user_id, amount, category.as_str(), description, recorded_at],
        )?;
        let expense = Expense {
            id: self.conn.last_insert_rowid(),
            amount,
            category,
            description: description.to_string(),
            recorded_at,
        };
        debug!(user_id, id = expense.id, amount, category = category.as_str(), "expense recorded");
        Ok(expense)
    }

    /// Expenses for one user, most recent first.
    pub(crate) fn expenses(
        &self,
        user_id: i64,
        period: Option<&Period>,
        limit: Option<u32>,
    ) -> Result<Vec<Expense>> {
        let mut sql = String::from(
            "SELECT id, amount, category, description, recorded_at
             FROM expenses WHERE user_id = ?1",
        );
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = vec![Box::new(user_id)];

        if let Some(p) = period {
            sql.push_str(&format!(
                " AND recorded_at BETWEEN ?{} AND ?{}",
                param_values.len() + 1,
                param_values.len() + 2
            ));
            param_values.push(Box::new(p.start_bound()));
            param_values.push(Box::new(p.end_bound()));
        }

        sql.push_str(" ORDER BY recorded_at DESC, id DESC");

        if let Some(l) = limit {
            sql.push_str(&format!(" LIMIT {l}"));
        }

        let params_ref: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_ref.as_slice(), |row| {
            let raw: String = row.get(2)?;
            Ok(Expense {
                id: row.get(0)?,
                amount: row.get(1)?,
                category: Category::parse(&raw).unwrap_or(Category::Other),
                description: row.get(3)?,
                recorded_at: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Total spent, optionally narrowed to one category and/or a period.
    pub(crate) fn total(
        &self,
        user_id: i64,
        category: Option<Category>,
        period: Option<&Period>,
    ) -> Result<i64> {
        let mut sql =
            String::from("SELECT COALESCE(SUM(amount), 0) FROM expenses WHERE user_id = ?1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = vec![Box::new(user_id)];

        if let Some(c) = category {
            sql.push_str(&format!(" AND category = ?{}", param_values.len() + 1));
            param_values.push(Box::new(c.as_str().to_string()));
        }
        if let Some(p) = period {
            sql.push_str(&format!(
                " AND recorded_at BETWEEN ?{} AND ?{}",
                param_values.len() + 1,
                param_values.len() + 2
            ));
            param_values.push(Box::new(p.start_bound()));
            param_values.push(Box::new(p.end_bound()));
        }

        let params_ref: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();

        Ok(self
            .conn
            .query_row(&sql, params_ref.as_slice(), |row| row.get(0))?)
    }

    /// Per-category totals, largest first. Categories without expenses are omitted.
    pub(crate) fn totals_by_category(
        &self,
        user_id: i64,
        period: Option<&Period>,
    ) -> Result<Vec<(Category, i64)>> {
        let mut sql = String::from(
            "SELECT category, SUM(amount) FROM expenses WHERE user_id = ?1",
        );
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = vec![Box::new(user_id)];

        if let Some(p) = period {
            sql.push_str(&format!(
                " AND recorded_at BETWEEN ?{} AND ?{}",
                param_values.len() + 1,
                param_values.len() + 2
            ));
            param_values.push(Box::new(p.start_bound()));
            param_values.push(Box::new(p.end_bound()));
        }

        sql.push_str(" GROUP BY category ORDER BY SUM(amount) DESC");

        let params_ref: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_ref.as_slice(), |row| {
            let raw: String = row.get(0)?;
            Ok((Category::parse(&raw).unwrap_or(Category::Other), row.get(1)?))
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ── Limits ────────────────────────────────────────────────

    /// Set or replace the budget limit for one category.
    pub(crate) fn set_limit(&self, user_id: i64, category: Category, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }
        self.conn.execute(
            "INSERT INTO limits (user_id, category, limit_amount)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(user_id, category) DO UPDATE SET limit_amount = ?3",
            params![user_id, category.as_str(), amount],
        )?;
        debug!(user_id, category = category.as_str(), amount, "limit set");
        Ok(())
    }

    /// The configured limit, or `None` when the category has no limit.
    pub(crate) fn limit(&self, user_id: i64, category: Category) -> Result<Option<i64>> {
        let result = self.conn.query_row(
            "SELECT limit_amount FROM limits WHERE user_id = ?1 AND category = ?2",
            params![user_id, category.as_str()],
            |row| row.get(0),
        );
        match result {
            Ok(amount) => Ok(Some(amount)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn limits(&self, user_id: i64) -> Result<Vec<CategoryLimit>> {
        let mut stmt = self.conn.prepare(
            "SELECT category, limit_amount FROM limits
             WHERE user_id = ?1 ORDER BY category",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            let raw: String = row.get(0)?;
            Ok(CategoryLimit {
                category: Category::parse(&raw).unwrap_or(Category::Other),
                limit_amount: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Sum of all category limits, or `None` when no limits are configured.
    pub(crate) fn overall_limit(&self, user_id: i64) -> Result<Option<i64>> {
        Ok(self.conn.query_row(
            "SELECT SUM(limit_amount) FROM limits WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )?)
    }

    // ── Sessions ──────────────────────────────────────────────

    pub(crate) fn save_session(&self, user_id: i64, state: &DialogState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        self.conn.execute(
            "INSERT INTO sessions (user_id, state) VALUES (?1, ?2)
             ON CONFLICT(user_id) DO UPDATE SET state = ?2",
            params![user_id, json],
        )?;
        Ok(())
    }

    /// The saved dialog state, if any. Undecodable state is dropped.
    pub(crate) fn load_session(&self, user_id: i64) -> Result<Option<DialogState>> {
        let result = self.conn.query_row(
            "SELECT state FROM sessions WHERE user_id = ?1",
            params![user_id],
            |row| row.get::<_, String>(0),
        );
        let json = match result {
            Ok(j) => j,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&json) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                warn!(user_id, error = %e, "dropping undecodable session state");
                Ok(None)
            }
        }
    }

    pub(crate) fn clear_session(&self, user_id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM sessions WHERE user_id = ?1", params![user_id])?;
        Ok(())
    }
}
