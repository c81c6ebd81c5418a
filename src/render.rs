use crate::config::MapConfig;
use crate::export;
use crate::feed::{load_feeds, DefaultFeedSource, FeedReport, FeedSource};
use crate::layers::MapComposition;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use anyhow::Result;

/// One page session: build the composition, then let both feeds fill it.
pub async fn render_session(
    config: &MapConfig,
    source: &dyn FeedSource,
) -> (MapComposition, FeedReport) {
    let mut composition = MapComposition::new(config);
    debug!(
        "Composition ready: {} base layers, legend with {} entries",
        composition.base_layers.len(),
        composition.legend.entries.len()
    );

    let report = load_feeds(&mut composition, &config.feeds, source).await;
    info!(
        "Session rendered: {} earthquakes, {} plate boundaries",
        composition.earthquakes.len(),
        composition.tectonic_plates.len()
    );
    (composition, report)
}

pub fn default_source(config: &MapConfig) -> Result<DefaultFeedSource> {
    Ok(DefaultFeedSource::new(Duration::from_secs(
        config.feeds.timeout_secs,
    ))?)
}

/// Renders every export profile of the configuration at `config_path`.
/// Relative output filenames resolve against the configuration's directory.
pub async fn execute_render(config_path: &str) -> Result<FeedReport> {
    info!("Executing render");

    let config_file_path = Path::new(config_path);
    let config = MapConfig::load(config_path)?;
    debug!("Executing config: {:?}", config);

    let source = default_source(&config)?;
    let report = execute_config(&config, config_file_path.parent(), &source).await?;
    Ok(report)
}

pub async fn execute_config(
    config: &MapConfig,
    base_dir: Option<&Path>,
    source: &dyn FeedSource,
) -> Result<FeedReport> {
    let (composition, report) = render_session(config, source).await;

    for profile in &config.export.profiles {
        let output_path = match base_dir {
            Some(dir) => dir.join(&profile.filename),
            None => Path::new(&profile.filename).to_path_buf(),
        };
        info!(
            "Exporting file: {} using exporter {:?}",
            output_path.display(),
            profile.exporter
        );
        let output = export::render(&composition, profile.exporter)?;
        crate::common::write_string_to_file(&output_path.to_string_lossy(), &output)?;
    }

    Ok(report)
}
