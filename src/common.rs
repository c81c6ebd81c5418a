use handlebars::Handlebars;
use tracing::info;

use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn create_path_if_not_exists(path: &str) -> anyhow::Result<()> {
    let Some(parent) = Path::new(path).parent() else {
        return Ok(());
    };
    if !parent.as_os_str().is_empty() && !parent.exists() {
        info!("Creating path: {:?}", parent);
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub fn write_string_to_file(filename: &str, content: &str) -> anyhow::Result<()> {
    create_path_if_not_exists(filename)?;
    let mut file = File::create(Path::new(filename))?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Formats a feed number the way a browser prints it: integral values
/// without a fractional part, everything else in shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // collapses -0
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

pub fn get_handlebars() -> Handlebars<'static> {
    Handlebars::new()
}
