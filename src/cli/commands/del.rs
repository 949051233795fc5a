use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { position } = cmd {
        let index = position
            .checked_sub(1)
            .ok_or(AppError::IndexOutOfRange(*position))?;

        let mut roster = store::load(&cfg.roster)?;

        let summary = roster
            .get(index)
            .map(|r| r.summary())
            .ok_or(AppError::IndexOutOfRange(*position))?;

        if !ask_confirmation(&format!(
            "Delete record #{} ({})? This action is irreversible.",
            position, summary
        )) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = roster.remove_at(index)?;
        store::save(&cfg.roster, &roster)?;

        success(format!("Deleted: {}", removed.summary()));
    }

    Ok(())
}
