#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::tempdir;

use super::*;
use crate::models::Category;

fn sample(amount: i64, category: Category, description: &str, recorded_at: &str) -> Expense {
    Expense {
        id: 1,
        amount,
        category,
        description: description.into(),
        recorded_at: recorded_at.into(),
    }
}

#[test]
fn test_csv_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let expenses = vec![
        sample(300, Category::Transport, "bus pass", "2024-01-15 08:00:00"),
        sample(500, Category::Food, "groceries", "2024-01-10 09:15:00"),
    ];
    write_csv(&path, &expenses).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "amount,category,description,date");
    // Rows keep the order they were given in
    assert_eq!(lines[1], "300,transport,bus pass,2024-01-15 08:00:00");
    assert_eq!(lines[2], "500,food,groceries,2024-01-10 09:15:00");
}

#[test]
fn test_csv_empty_description() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_csv(&path, &[sample(42, Category::Other, "", "2024-02-01 10:00:00")]).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("42,other,,2024-02-01 10:00:00"));
}

#[test]
fn test_csv_quotes_commas() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_csv(
        &path,
        &[sample(42, Category::Other, "one, two", "2024-02-01 10:00:00")],
    )
    .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"one, two\""));
}
