use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ensure_writable, write_document};
use crate::models::BoardHeader;
use crate::store;
use crate::utils::path::expand_tilde;

/// Export the roster as a board configuration JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        title,
        message,
        room,
        force,
    } = cmd
    {
        let path = expand_tilde(file);

        //
        // 1. Assemble the header (room falls back to the configured default)
        //
        let header = BoardHeader::new(
            title.clone().unwrap_or_default(),
            message.clone().unwrap_or_default(),
            room.clone().unwrap_or_else(|| cfg.default_room.clone()),
        );

        //
        // 2. Combine with the current roster (validates the header)
        //
        let roster = store::load(&cfg.roster)?;
        let document = roster.export_to(&header)?;

        //
        // 3. Write
        //
        ensure_writable(&path, *force)?;
        write_document(&document, &path)?;
    }
    Ok(())
}
