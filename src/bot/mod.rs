//! Transport-agnostic message handling: one user message in, one reply
//! out. The interactive loop and the CLI both sit on top of this.

pub(crate) mod replies;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::db::Ledger;
use crate::dialog::{self, DialogOutcome, DialogState};
use crate::export;
use crate::models::Category;

/// Which quick-reply options accompany a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyboard {
    Main,
    Categories,
    Hidden,
}

impl Keyboard {
    pub(crate) fn options(self) -> Vec<&'static str> {
        match self {
            Keyboard::Main => vec!["add", "list", "stats", "limit", "limits", "plan", "export"],
            Keyboard::Categories => Category::all().iter().map(|c| c.as_str()).collect(),
            Keyboard::Hidden => Vec::new(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Reply {
    pub text: String,
    pub keyboard: Keyboard,
}

impl Reply {
    fn main(text: String) -> Self {
        Self {
            text,
            keyboard: Keyboard::Main,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Start,
    Help,
    Add,
    List,
    Stats,
    Limit,
    Limits,
    Plan,
    Export,
    Cancel,
}

impl Command {
    /// Accepts both bare words and the slash-prefixed spelling.
    fn parse(text: &str) -> Option<Self> {
        let token = text.trim().trim_start_matches('/').to_lowercase();
        Some(match token.as_str() {
            "start" => Self::Start,
            "help" => Self::Help,
            "add" => Self::Add,
            "list" => Self::List,
            "stats" => Self::Stats,
            "limit" => Self::Limit,
            "limits" => Self::Limits,
            "plan" => Self::Plan,
            "export" => Self::Export,
            "cancel" => Self::Cancel,
            _ => return None,
        })
    }
}

pub(crate) struct Bot {
    ledger: Ledger,
    export_dir: PathBuf,
}

impl Bot {
    pub(crate) fn new(ledger: Ledger, export_dir: PathBuf) -> Self {
        Self { ledger, export_dir }
    }

    pub(crate) fn handle_message(&self, user_id: i64, text: &str) -> Result<Reply> {
        let command = Command::parse(text);

        if let Some(state) = self.ledger.load_session(user_id)? {
            debug!(user_id, "routing message to active dialog");
            // Only cancel escapes an active flow; anything else is
            // treated as an answer to the current prompt.
            if matches!(command, Some(Command::Cancel)) {
                self.ledger.clear_session(user_id)?;
                return Ok(Reply::main(replies::cancelled()));
            }
            return self.advance_dialog(user_id, &state, text);
        }

        match command {
            Some(Command::Start) => Ok(Reply::main(replies::greeting())),
            Some(Command::Help) => Ok(Reply::main(replies::help())),
            Some(Command::Add) => self.begin(user_id, DialogState::AwaitingAmount),
            Some(Command::Limit) => self.begin(user_id, DialogState::AwaitingLimitCategory),
            Some(Command::List) => {
                let expenses = self
                    .ledger
                    .expenses(user_id, None, Some(replies::RECENT_COUNT))?;
                Ok(Reply::main(replies::recent_expenses(&expenses)))
            }
            Some(Command::Stats) => {
                let rows = self.ledger.totals_by_category(user_id, None)?;
                Ok(Reply::main(replies::category_stats(&rows)))
            }
            Some(Command::Limits) => {
                let mut rows = Vec::new();
                for limit in self.ledger.limits(user_id)? {
                    let spent = self.ledger.total(user_id, Some(limit.category), None)?;
                    rows.push((limit, spent));
                }
                Ok(Reply::main(replies::limits_overview(&rows)))
            }
            Some(Command::Plan) => {
                let spent = self.ledger.total(user_id, None, None)?;
                let overall = self.ledger.overall_limit(user_id)?;
                Ok(Reply::main(replies::plan(spent, overall)))
            }
            Some(Command::Export) => self.export(user_id),
            Some(Command::Cancel) => Ok(Reply::main(replies::nothing_to_cancel())),
            None => Ok(Reply::main(replies::unknown())),
        }
    }

    /// First reply of a chat session: a greeting, or the prompt of an
    /// interrupted dialog so it picks up where it left off. No message
    /// is fed into the dialog itself.
    pub(crate) fn open_conversation(&self, user_id: i64) -> Result<Reply> {
        match self.ledger.load_session(user_id)? {
            Some(state) => {
                debug!(user_id, "resuming saved dialog");
                Ok(Reply {
                    text: replies::prompt_for(&state),
                    keyboard: keyboard_for(&state),
                })
            }
            None => Ok(Reply::main(replies::greeting())),
        }
    }

    fn begin(&self, user_id: i64, state: DialogState) -> Result<Reply> {
        self.ledger.save_session(user_id, &state)?;
        Ok(Reply {
            text: replies::prompt_for(&state),
            keyboard: keyboard_for(&state),
        })
    }

    fn advance_dialog(&self, user_id: i64, state: &DialogState, text: &str) -> Result<Reply> {
        match dialog::advance(state, text) {
            DialogOutcome::Continue(next) => {
                self.ledger.save_session(user_id, &next)?;
                Ok(Reply {
                    text: replies::prompt_for(&next),
                    keyboard: keyboard_for(&next),
                })
            }
            DialogOutcome::Invalid(err) => Ok(Reply {
                text: replies::rejected(state, &err),
                keyboard: keyboard_for(state),
            }),
            DialogOutcome::AddExpense {
                amount,
                category,
                description,
            } => {
                let expense = self
                    .ledger
                    .record_expense(user_id, amount, category, &description)?;
                self.ledger.clear_session(user_id)?;
                let spent = self.ledger.total(user_id, Some(category), None)?;
                let cap = self.ledger.limit(user_id, category)?;
                Ok(Reply::main(replies::expense_recorded(&expense, spent, cap)))
            }
            DialogOutcome::SetLimit { category, amount } => {
                self.ledger.set_limit(user_id, category, amount)?;
                self.ledger.clear_session(user_id)?;
                Ok(Reply::main(replies::limit_set(category, amount)))
            }
        }
    }

    fn export(&self, user_id: i64) -> Result<Reply> {
        let expenses = self.ledger.expenses(user_id, None, None)?;
        if expenses.is_empty() {
            return Ok(Reply::main(replies::nothing_to_export()));
        }
        fs::create_dir_all(&self.export_dir).with_context(|| {
            format!("Failed to create export dir {}", self.export_dir.display())
        })?;
        let path = self.export_dir.join(format!("expenses-{user_id}.csv"));
        export::write_csv(&path, &expenses)?;
        info!(user_id, count = expenses.len(), path = %path.display(), "exported expenses");
        Ok(Reply::main(replies::export_done(expenses.len(), &path)))
    }
}

fn keyboard_for(state: &DialogState) -> Keyboard {
    match state {
        DialogState::AwaitingCategory { .. } | DialogState::AwaitingLimitCategory => {
            Keyboard::Categories
        }
        _ => Keyboard::Hidden,
    }
}
