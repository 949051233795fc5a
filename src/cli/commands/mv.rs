use crate::cli::parser::{Commands, MoveDirection};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages::{info, success};

/// Move an exam record up or down by one position.
///
/// Boundary moves (first record up, last record down) are a friendly
/// no-op, not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Move { position, dir } = cmd {
        let index = position
            .checked_sub(1)
            .ok_or(AppError::IndexOutOfRange(*position))?;

        let mut roster = store::load(&cfg.roster)?;

        if roster.get(index).is_none() {
            return Err(AppError::IndexOutOfRange(*position));
        }

        let moved = match dir {
            MoveDirection::Up => roster.move_up(index),
            MoveDirection::Down => roster.move_down(index),
        };

        if !moved {
            match dir {
                MoveDirection::Up => info(format!("Record #{} is already at the top.", position)),
                MoveDirection::Down => {
                    info(format!("Record #{} is already at the bottom.", position))
                }
            }
            return Ok(());
        }

        store::save(&cfg.roster, &roster)?;

        let new_position = match dir {
            MoveDirection::Up => position - 1,
            MoveDirection::Down => position + 1,
        };
        success(format!("Record #{} moved to #{}.", position, new_position));
    }

    Ok(())
}
