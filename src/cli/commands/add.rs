use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::RecordLogic;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;

/// Add an exam record to the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        date,
        start,
        end,
    } = cmd
    {
        //
        // 1. Validate input and build the record
        //
        let record = RecordLogic::build(name, date, start, end)?;

        //
        // 2. Load roster, append, save
        //
        let mut roster = store::load(&cfg.roster)?;
        roster.append(record.clone());
        store::save(&cfg.roster, &roster)?;

        success(format!("Added: {}", record.summary()));
    }

    Ok(())
}
