use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no question on stdin. Anything but "y"/"yes" means no,
/// including a closed stdin.
pub fn confirm(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    io::stdout().flush().ok();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
