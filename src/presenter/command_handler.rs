// presenter/command_handler.rs

use crate::catalog::SupplierFilter;
use crate::model::CommandError;
use crate::presenter::intent::EditIntent;
use crate::presenter::table::{render_selector, render_table};
use crate::presenter::Session;
use tracing::{info, warn};

pub const HELP: &str = "📋 Available commands:\n\
    /show — current table\n\
    /suppliers — supplier options\n\
    /filter <supplier|todos> — narrow the table\n\
    /cost <code> <value> — edit a cost\n\
    /mult <code> <2.5|3|4|5> — edit a multiplier\n\
    /export — write the spreadsheet\n\
    /status — session status\n\
    /help — command list\n\
    /quit — leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Suppliers,
    Filter(SupplierFilter),
    Edit(EditIntent),
    Export,
    Status,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match name {
        "/help" => Ok(Command::Help),
        "/show" => Ok(Command::Show),
        "/suppliers" => Ok(Command::Suppliers),
        "/export" => Ok(Command::Export),
        "/status" => Ok(Command::Status),
        "/quit" => Ok(Command::Quit),
        "/filter" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("/filter <supplier|todos>"));
            }
            Ok(Command::Filter(SupplierFilter::from_selection(rest)))
        }
        "/cost" => {
            let (code, value) = code_and_value(rest, "/cost <code> <value>")?;
            Ok(Command::Edit(EditIntent::cost(code, value)))
        }
        "/mult" => {
            let (code, value) = code_and_value(rest, "/mult <code> <2.5|3|4|5>")?;
            Ok(Command::Edit(EditIntent::multiplier(code, value)))
        }
        _ => Err(CommandError::Unknown(name.to_string())),
    }
}

/// Splits `<code> <value>`. The value may be empty, which clears a cost.
fn code_and_value<'a>(rest: &'a str, usage: &'static str) -> Result<(i64, &'a str), CommandError> {
    let (code, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    if code.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    let code = code
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidCode(code.to_string()))?;
    Ok((code, value.trim()))
}

/// Handles an incoming command line and produces what to print.
pub fn handle_command(line: &str, session: &mut Session) -> Outcome {
    info!("Handling command: {}", line.trim());
    let command = match parse_command(line) {
        Ok(c) => c,
        Err(CommandError::Unknown(_)) => {
            return Outcome::Reply("🤖 Unknown command. Type /help for a list of commands.".into())
        }
        Err(e) => return Outcome::Reply(format!("❌ {}", e)),
    };

    match command {
        Command::Help => Outcome::Reply(HELP.to_string()),
        Command::Show => Outcome::Reply(render_table(&session.sheet.visible_rows())),
        Command::Suppliers => Outcome::Reply(render_selector(
            session.sheet.suppliers(),
            session.sheet.selection(),
        )),
        Command::Filter(selection) => {
            let rows = session.sheet.set_filter(selection);
            Outcome::Reply(render_table(&rows))
        }
        Command::Edit(intent) => match session.sheet.apply(intent) {
            Ok(Some(update)) => Outcome::Reply(format!("{} → {}", update.code, update.suggested)),
            // Only codes shown in the table are expected here.
            Ok(None) => Outcome::Reply(String::new()),
            Err(e) => Outcome::Reply(format!("❌ {}", e)),
        },
        Command::Export => match session.sheet.export(&session.config.export_dir) {
            Ok(path) => Outcome::Reply(format!("✅ Exported to {}", path.display())),
            Err(e) => {
                warn!("Export failed: {}", e);
                Outcome::Reply(format!("❌ Export failed: {}", e))
            }
        },
        Command::Status => {
            let uptime = session.start_time.elapsed();
            let catalog = session.sheet.catalog();
            let loaded = if catalog.is_empty() {
                "📭 Catalog is empty (feed not loaded?)".to_string()
            } else {
                format!("📊 {} products", catalog.len())
            };
            Outcome::Reply(format!(
                "{}, {} suppliers, filter: {}\n⏱ Uptime: {:02}:{:02}:{:02}",
                loaded,
                session.sheet.suppliers().len(),
                session.sheet.selection(),
                uptime.as_secs() / 3600,
                (uptime.as_secs() % 3600) / 60,
                uptime.as_secs() % 60
            ))
        }
        Command::Quit => Outcome::Quit,
    }
}
