use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::pad_right;
use ansi_term::Colour;

/// Colour of a log row, by operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "import" | "game_add" => Colour::Green,
        "del" | "game_remove" => Colour::Red,
        "edit" | "game_move" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);

                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };

                (e.id, date, e.operation, op_target, e.message)
            })
            .collect();

        // widest op+target, capped so long targets do not push messages off screen
        let op_width = rows
            .iter()
            .map(|r| r.3.chars().count())
            .max()
            .unwrap_or(0)
            .min(40);

        for (id, date, operation, op_target, message) in rows {
            let colour = color_for_operation(&operation);
            println!(
                "{:>4}  {:<25}  {}  {}",
                id,
                date,
                colour.paint(pad_right(&op_target, op_width)),
                message
            );
        }

        Ok(())
    }
}
