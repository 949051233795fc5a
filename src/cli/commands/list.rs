use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Roster;
use crate::errors::AppResult;
use crate::store;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { table } = cmd {
        let roster = store::load(&cfg.roster)?;

        if roster.is_empty() {
            println!("No exam records.");
            return Ok(());
        }

        if *table {
            print_table(&roster);
        } else {
            for (i, record) in roster.records().iter().enumerate() {
                println!("{}. {}", i + 1, record.summary());
            }
        }
    }
    Ok(())
}

fn print_table(roster: &Roster) {
    let mut table = Table::new(vec![
        "#".to_string(),
        "Subject".to_string(),
        "Date".to_string(),
        "Start".to_string(),
        "End".to_string(),
    ]);

    for (i, r) in roster.records().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            r.name.clone(),
            r.start_date().unwrap_or(&r.start).to_string(),
            r.start_time().unwrap_or(&r.start).to_string(),
            r.end_time().unwrap_or(&r.end).to_string(),
        ]);
    }

    print!("{}", table.render());
}
