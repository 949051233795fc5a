use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::read_document;
use crate::store;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Replace the roster with the records of an existing board configuration.
///
/// Records are imported verbatim, without re-validation; a document with no
/// `examInfos` key loads as an empty roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Open { file } = cmd {
        let path = expand_tilde(file);

        let document = read_document(&path)?;

        let mut roster = store::load(&cfg.roster)?;
        roster.load_from(document);
        store::save(&cfg.roster, &roster)?;

        success(format!(
            "Configuration {} loaded ({} records).",
            path.display(),
            roster.len()
        ));
    }
    Ok(())
}
