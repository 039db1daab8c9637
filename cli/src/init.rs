use crate::error::{Result, ResultExt};
use crate::ui;
use dialoguer::{theme::ColorfulTheme, Confirm};
use error_normalizer::config::ensure_config_file_exists;
use std::path::Path;

pub fn execute(config_path: &str, force: bool) -> Result<()> {
    let path = Path::new(config_path);

    let overwrite = if path.exists() && !force {
        ui::warning_message(&format!("{} already exists", config_path));
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Overwrite it with the default template?")
            .default(false)
            .interact()?
    } else {
        force
    };

    let written = ensure_config_file_exists(path, overwrite)
        .with_context(|| format!("Writing {config_path}"))?;

    if written {
        ui::success_message(&format!("Created configuration file: {}", config_path));
        ui::info_message("Edit [messages] and [status_messages] to customize the wording");
    } else {
        ui::info_message(&format!("Kept existing configuration file: {}", config_path));
    }

    Ok(())
}
