use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::RecordLogic;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages::success;

/// Replace an exam record wholesale.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        position,
        name,
        date,
        start,
        end,
    } = cmd
    {
        // positions are 1-based on the CLI
        let index = position
            .checked_sub(1)
            .ok_or(AppError::IndexOutOfRange(*position))?;

        let record = RecordLogic::build(name, date, start, end)?;

        let mut roster = store::load(&cfg.roster)?;
        roster.replace_at(index, record.clone())?;
        store::save(&cfg.roster, &roster)?;

        success(format!("Record #{} updated: {}", position, record.summary()));
    }

    Ok(())
}
