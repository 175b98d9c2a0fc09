use anyhow::Result;
use std::path::Path;

use crate::bot::replies;
use crate::db::Ledger;
use crate::dialog;
use crate::export;
use crate::models::Period;

pub(crate) fn as_cli(args: &[String], ledger: &Ledger, user_id: i64) -> Result<()> {
    match args[1].as_str() {
        "add" => cli_add(&args[2..], ledger, user_id),
        "list" => cli_list(&args[2..], ledger, user_id),
        "stats" => cli_stats(&args[2..], ledger, user_id),
        "limit" => cli_limit(&args[2..], ledger, user_id),
        "limits" => cli_limits(ledger, user_id),
        "plan" => cli_plan(ledger, user_id),
        "export" => cli_export(&args[2..], ledger, user_id),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("tallybot {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("tallybot — expense tracking with per-category budget limits");
    println!();
    println!("Usage: tallybot [command] [--user <id>]");
    println!();
    println!("Commands:");
    println!("  (none)                        Start the interactive chat");
    println!("  add <amount> <category> [description...]");
    println!("                                Record an expense");
    println!("  list [--today|--days <n>|--month <YYYY-MM>] [--limit <n>]");
    println!("                                Show expenses, most recent first");
    println!("  stats [--today|--days <n>|--month <YYYY-MM>]");
    println!("                                Spending totals by category");
    println!("  limit <category> <amount>     Set a category budget limit");
    println!("  limits                        Show configured limits");
    println!("  plan                          Overall spending against the limits");
    println!("  export [path] [--today|--days <n>|--month <YYYY-MM>]");
    println!("                                Write expenses to a CSV file");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Categories: food, transport, entertainment, clothing, other");
}

fn cli_add(args: &[String], ledger: &Ledger, user_id: i64) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("Usage: tallybot add <amount> <category> [description...]");
    }
    let amount = dialog::parse_amount(&args[0])?;
    let category = dialog::parse_category(&args[1])?;
    let description = dialog::normalize_description(&args[2..].join(" "));

    let expense = ledger.record_expense(user_id, amount, category, &description)?;
    let spent = ledger.total(user_id, Some(category), None)?;
    let cap = ledger.limit(user_id, category)?;
    println!("{}", replies::expense_recorded(&expense, spent, cap));
    Ok(())
}

fn cli_list(args: &[String], ledger: &Ledger, user_id: i64) -> Result<()> {
    let period = parse_period(args)?;
    let limit = match args.windows(2).find(|w| w[0] == "--limit") {
        Some(w) => Some(
            w[1].parse::<u32>()
                .map_err(|_| anyhow::anyhow!("--limit expects a number, got '{}'", w[1]))?,
        ),
        None => None,
    };

    let expenses = ledger.expenses(user_id, period.as_ref(), limit)?;
    println!("{}", replies::recent_expenses(&expenses));
    Ok(())
}

fn cli_stats(args: &[String], ledger: &Ledger, user_id: i64) -> Result<()> {
    let period = parse_period(args)?;
    let rows = ledger.totals_by_category(user_id, period.as_ref())?;
    println!("{}", replies::category_stats(&rows));
    Ok(())
}

fn cli_limit(args: &[String], ledger: &Ledger, user_id: i64) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("Usage: tallybot limit <category> <amount>");
    }
    let category = dialog::parse_category(&args[0])?;
    let amount = dialog::parse_amount(&args[1])?;

    ledger.set_limit(user_id, category, amount)?;
    println!("{}", replies::limit_set(category, amount));
    Ok(())
}

fn cli_limits(ledger: &Ledger, user_id: i64) -> Result<()> {
    let mut rows = Vec::new();
    for limit in ledger.limits(user_id)? {
        let spent = ledger.total(user_id, Some(limit.category), None)?;
        rows.push((limit, spent));
    }
    println!("{}", replies::limits_overview(&rows));
    Ok(())
}

fn cli_plan(ledger: &Ledger, user_id: i64) -> Result<()> {
    let spent = ledger.total(user_id, None, None)?;
    let overall = ledger.overall_limit(user_id)?;
    println!("{}", replies::plan(spent, overall));
    Ok(())
}

fn cli_export(args: &[String], ledger: &Ledger, user_id: i64) -> Result<()> {
    let period = parse_period(args)?;

    // Output path is the first non-flag argument
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/tallybot-export.csv")
        });

    let expenses = ledger.expenses(user_id, period.as_ref(), None)?;
    if expenses.is_empty() {
        println!("{}", replies::nothing_to_export());
        return Ok(());
    }

    let path = Path::new(&output_path);
    export::write_csv(path, &expenses)?;
    println!("{}", replies::export_done(expenses.len(), path));
    Ok(())
}

fn parse_period(args: &[String]) -> Result<Option<Period>> {
    if args.iter().any(|a| a == "--today") {
        return Ok(Some(Period::today()));
    }
    if let Some(w) = args.windows(2).find(|w| w[0] == "--days") {
        let days: u32 = w[1]
            .parse()
            .map_err(|_| anyhow::anyhow!("--days expects a number, got '{}'", w[1]))?;
        return Ok(Some(Period::last_days(days)));
    }
    if let Some(w) = args.windows(2).find(|w| w[0] == "--month") {
        let period = Period::parse_month(&w[1])
            .ok_or_else(|| anyhow::anyhow!("Invalid month '{}', expected YYYY-MM", w[1]))?;
        return Ok(Some(period));
    }
    Ok(None)
}

fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
