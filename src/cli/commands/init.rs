use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty working roster file
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.roster {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();

    println!("⚙️  Initializing examboard…");
    println!("📄 Config file : {}", path.display());
    println!("📋 Roster file : {}", &cfg.roster);

    println!("🎉 examboard initialization completed!");
    Ok(())
}
