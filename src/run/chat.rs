use anyhow::Result;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use tracing::error;

use crate::bot::{Bot, Reply};

/// Line-oriented chat loop on stdin/stdout.
pub(crate) fn as_chat(bot: &Bot, user_id: i64) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    // Greet, or pick an interrupted dialog back up at its prompt
    let reply = bot.open_conversation(user_id)?;
    print_reply(&mut stdout, &reply)?;

    loop {
        write!(stdout, "{} ", "you ▸".green())?;
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "/quit" | "exit") {
            break;
        }

        match bot.handle_message(user_id, line) {
            Ok(reply) => print_reply(&mut stdout, &reply)?,
            Err(e) => {
                error!(error = %e, "message handling failed");
                writeln!(stdout, "{} something went wrong, try again", "bot ▸".cyan())?;
            }
        }
    }
    Ok(())
}

fn print_reply(out: &mut impl Write, reply: &Reply) -> Result<()> {
    for line in reply.text.lines() {
        writeln!(out, "{} {}", "bot ▸".cyan(), line)?;
    }
    let options = reply.keyboard.options();
    if !options.is_empty() {
        writeln!(out, "{}", format!("[{}]", options.join(" | ")).dim())?;
    }
    Ok(())
}
