#![allow(clippy::unwrap_used)]

use super::*;

// ── Limit breaches ────────────────────────────────────────────

#[test]
fn test_breach_strictly_over() {
    assert!(exceeds_limit(150, Some(100)));
    assert!(exceeds_limit(101, Some(100)));
}

#[test]
fn test_breach_exactly_at_limit() {
    assert!(!exceeds_limit(100, Some(100)));
}

#[test]
fn test_breach_under_limit() {
    assert!(!exceeds_limit(50, Some(100)));
    assert!(!exceeds_limit(0, Some(100)));
}

#[test]
fn test_breach_without_limit() {
    assert!(!exceeds_limit(50, None));
    assert!(!exceeds_limit(1_000_000, None));
}

// ── Progress bars ─────────────────────────────────────────────

#[test]
fn test_bar_overspent_is_full() {
    assert_eq!(progress_bar(120, 100, 10), "██████████");
    assert_eq!(progress_bar(100, 100, 10), "██████████");
}

#[test]
fn test_bar_half_full() {
    assert_eq!(progress_bar(50, 100, 10), "█████░░░░░");
}

#[test]
fn test_bar_rounds_down() {
    assert_eq!(progress_bar(99, 100, 10), "█████████░");
    assert_eq!(progress_bar(1, 1000, 10), "░░░░░░░░░░");
}

#[test]
fn test_bar_empty_spend() {
    assert_eq!(progress_bar(0, 100, 10), "░░░░░░░░░░");
}

#[test]
fn test_bar_no_limit_is_empty() {
    assert_eq!(progress_bar(50, 0, 10), "░░░░░░░░░░");
    assert_eq!(progress_bar(50, -10, 10), "░░░░░░░░░░");
}

#[test]
fn test_bar_width() {
    assert_eq!(progress_bar(1, 2, 4), "██░░");
    assert_eq!(progress_bar(3, 4, 0), "");
}

// ── Percentages ───────────────────────────────────────────────

#[test]
fn test_percent_used() {
    assert_eq!(percent_used(700, 1000), 70.0);
    assert_eq!(percent_used(130, 100), 130.0);
    assert_eq!(percent_used(0, 100), 0.0);
}

#[test]
fn test_percent_without_limit() {
    assert_eq!(percent_used(50, 0), 0.0);
    assert_eq!(percent_used(50, -1), 0.0);
}
