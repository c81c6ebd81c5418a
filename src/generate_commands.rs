use crate::config::MapConfig;
use tracing::{error, info};

pub fn generate_template(name: String) {
    info!("Generating template: {}", name);
    match crate::export::get_template(&name) {
        Ok(template) => println!("{}", template),
        Err(err) => error!("{} - use html, legend", err),
    }
}

/// Writes the default configuration to `path`.
pub fn generate_config(path: &str) -> anyhow::Result<()> {
    info!("Initializing config: {}", path);
    let serialized = serde_yaml::to_string(&MapConfig::default())?;
    crate::common::write_string_to_file(path, &serialized)
}
