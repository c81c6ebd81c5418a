use crate::config::TileLayerConfig;
use crate::export::script_json;
use crate::errors::ExportResult;
use crate::layers::{LayerControl, LayerGroup, MapComposition, MapView};
use crate::legend::LegendPosition;
use serde::Serialize;
use serde_json::json;

/// What the page script needs; base layers and overlays as ordered lists.
#[derive(Serialize)]
struct PageModel<'a> {
    view: &'a MapView,
    base_layers: Vec<&'a TileLayerConfig>,
    active_base_layer: &'a str,
    overlays: [&'a LayerGroup; 2],
    control: &'a LayerControl,
    legend_position: LegendPosition,
}

pub fn render(composition: &MapComposition) -> ExportResult<String> {
    let model = PageModel {
        view: &composition.view,
        base_layers: composition.base_layers.values().collect(),
        active_base_layer: &composition.active_base_layer,
        overlays: composition.overlays(),
        control: &composition.control,
        legend_position: composition.legend.position,
    };
    let legend_html = composition.legend.render_html()?;

    let handlebars = crate::common::get_handlebars();
    let res = handlebars.render_template(
        &get_template(),
        &json!({
            "title": composition.title,
            "mapData": script_json(&model)?,
            "legendHtml": script_json(&legend_html)?,
        }),
    )?;
    Ok(res)
}

pub fn get_template() -> String {
    include_str!("to_html.hbs").to_string()
}
