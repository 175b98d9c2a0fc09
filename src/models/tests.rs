#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::*;

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("food"), Some(Category::Food));
    assert_eq!(Category::parse("Food"), Some(Category::Food));
    assert_eq!(Category::parse("  TRANSPORT  "), Some(Category::Transport));
    assert_eq!(Category::parse("entertainment"), Some(Category::Entertainment));
    assert_eq!(Category::parse("clothing"), Some(Category::Clothing));
    assert_eq!(Category::parse("other"), Some(Category::Other));
    assert_eq!(Category::parse("groceries"), None);
    assert_eq!(Category::parse(""), None);
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::Food), "food");
    assert_eq!(Category::Clothing.as_str(), "clothing");
}

#[test]
fn test_category_all() {
    let all = Category::all();
    assert_eq!(all.len(), 5);
    assert!(all.contains(&Category::Food));
    assert!(all.contains(&Category::Other));
}

#[test]
fn test_category_roundtrip() {
    // Every category should roundtrip through as_str -> parse
    for c in Category::all() {
        let s = c.as_str();
        let back = Category::parse(s);
        assert_eq!(Some(*c), back, "Roundtrip failed for {s}");
    }
}

#[test]
fn test_category_icons_distinct() {
    let mut icons: Vec<&str> = Category::all().iter().map(|c| c.icon()).collect();
    icons.sort_unstable();
    icons.dedup();
    assert_eq!(icons.len(), Category::all().len());
}

// ── Expense ───────────────────────────────────────────────────

fn make_expense(description: &str) -> Expense {
    Expense {
        id: 1,
        amount: 250,
        category: Category::Food,
        description: description.into(),
        recorded_at: "2024-01-15 12:30:00".into(),
    }
}

#[test]
fn test_expense_description() {
    assert!(make_expense("lunch").has_description());
    assert!(!make_expense("").has_description());
}

// ── Period ────────────────────────────────────────────────────

#[test]
fn test_period_month_bounds() {
    let p = Period::month(2024, 2).unwrap();
    assert_eq!(p.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(p.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

    let p = Period::month(2023, 12).unwrap();
    assert_eq!(p.end, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
}

#[test]
fn test_period_month_invalid() {
    assert!(Period::month(2024, 0).is_none());
    assert!(Period::month(2024, 13).is_none());
}

#[test]
fn test_period_parse_month() {
    let p = Period::parse_month("2024-06").unwrap();
    assert_eq!(p.start, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(p.end, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());

    assert!(Period::parse_month("2024").is_none());
    assert!(Period::parse_month("junk").is_none());
    assert!(Period::parse_month("2024-00").is_none());
}

#[test]
fn test_period_bounds() {
    let p = Period::days(
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
    );
    assert_eq!(p.start_bound(), "2024-03-05 00:00:00");
    assert_eq!(p.end_bound(), "2024-03-09 23:59:59");
}

#[test]
fn test_period_today_single_day() {
    let p = Period::today();
    assert_eq!(p.start, p.end);
}

#[test]
fn test_period_last_days() {
    let p = Period::last_days(7);
    assert_eq!(p.end.signed_duration_since(p.start).num_days(), 6);

    let p = Period::last_days(0);
    assert_eq!(p.start, p.end);
}
