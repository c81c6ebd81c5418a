//! Depth legend derived from the same band table the color encoder uses.

use crate::common::format_number;
use crate::encoding::{DepthBand, MarkerColor, DEPTH_BANDS};
use crate::errors::ExportResult;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const LEGEND_CSS_CLASS: &str = "info legend";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: MarkerColor,
    pub label: String,
}

/// Corner of the map the legend is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: LegendPosition,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(position: LegendPosition) -> Self {
        Self {
            position,
            entries: legend_entries(),
        }
    }

    /// Inner HTML of the legend block: a swatch and a label per band.
    pub fn render_html(&self) -> ExportResult<String> {
        let handlebars = crate::common::get_handlebars();
        let res = handlebars.render_template(
            &get_template(),
            &json!({
                "css_class": LEGEND_CSS_CLASS,
                "entries": self.entries,
            }),
        )?;
        Ok(res)
    }
}

/// One entry per band, shallowest first.
pub fn legend_entries() -> Vec<LegendEntry> {
    legend_entries_for(&DEPTH_BANDS)
}

fn legend_entries_for(bands: &[DepthBand]) -> Vec<LegendEntry> {
    bands
        .iter()
        .enumerate()
        .map(|(i, band)| LegendEntry {
            color: band.color,
            label: band_label(band, bands.get(i + 1)),
        })
        .collect()
}

/// The unbounded-below band is shown starting at 0 km.
fn band_label(band: &DepthBand, next: Option<&DepthBand>) -> String {
    let lower = if band.lower.is_finite() {
        band.lower
    } else {
        0.0
    };
    match next {
        Some(next) => format!(
            "{} – {} km",
            format_number(lower),
            format_number(next.lower)
        ),
        None => format!("{}+ km", format_number(lower)),
    }
}

pub fn get_template() -> String {
    let template = r##"<div class="{{css_class}}">
{{#each entries as |entry|}}
<i style="background:{{entry.color}}"></i> {{entry.label}}<br>
{{/each}}
</div>"##;

    template.to_string()
}
