pub mod to_geojson;
pub mod to_html;

use crate::config::ExportFileType;
use crate::errors::{ExportError, ExportResult};
use crate::layers::MapComposition;

/// Renders a composition with the given exporter.
pub fn render(composition: &MapComposition, exporter: ExportFileType) -> ExportResult<String> {
    match exporter {
        ExportFileType::Html => to_html::render(composition),
        ExportFileType::GeoJson => to_geojson::render(composition),
    }
}

/// Built-in template source by name.
pub fn get_template(name: &str) -> ExportResult<String> {
    match name {
        "html" => Ok(to_html::get_template()),
        "legend" => Ok(crate::legend::get_template()),
        _ => Err(ExportError::TemplateNotFound(name.to_string())),
    }
}

/// Serialises `value` for embedding inside an inline `<script>`.
///
/// `<` only occurs inside JSON strings, where `<` is equivalent, so no
/// feed text can close the script element.
pub(crate) fn script_json<T: serde::Serialize>(value: &T) -> ExportResult<String> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}
