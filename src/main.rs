//! BoardChamp main entrypoint.

use boardchamp::run;
use boardchamp::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
