use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Open the config file in an editor: the requested one, then
    /// $EDITOR / $VISUAL, then a platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let ed = editor.map(str::to_string).unwrap_or(default_editor);

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::ConfigEdit(format!("{ed}: {e}")))?;

        if !status.success() {
            return Err(AppError::ConfigEdit(format!("{ed} exited with {status}")));
        }
        Ok(())
    }
}
