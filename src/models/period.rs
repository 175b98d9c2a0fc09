use chrono::{Datelike, Days, Local, Months, NaiveDate};

/// An inclusive date range used to narrow ledger queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub(crate) fn days(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub(crate) fn today() -> Self {
        let today = Local::now().date_naive();
        Self::days(today, today)
    }

    /// The whole calendar month. `None` for an invalid year/month pair.
    pub(crate) fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())?;
        Some(Self { start, end })
    }

    /// Parse "YYYY-MM" into the matching calendar month.
    pub(crate) fn parse_month(s: &str) -> Option<Self> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
        Self::month(first.year(), first.month())
    }

    /// The `n` most recent days, today included.
    pub(crate) fn last_days(n: u32) -> Self {
        let today = Local::now().date_naive();
        let start = today
            .checked_sub_days(Days::new(u64::from(n.saturating_sub(1))))
            .unwrap_or(today);
        Self::days(start, today)
    }

    // Timestamps are stored with second precision, so an inclusive
    // "23:59:59" upper bound covers the whole end day.

    pub(crate) fn start_bound(&self) -> String {
        format!("{} 00:00:00", self.start)
    }

    pub(crate) fn end_bound(&self) -> String {
        format!("{} 23:59:59", self.end)
    }
}
