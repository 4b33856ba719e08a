use crate::pre::read_view_pars::StylePars;
use anyhow::Context;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// from_css converts a CSS color string (e.g. a hex color) to a rgb color.
    pub fn from_css(color: &str) -> anyhow::Result<RgbColor> {
        let tmp_color = color
            .parse::<css_color_parser::Color>()
            .context(format!("Could not parse color {}!", color))?;

        Ok(RgbColor {
            r: tmp_color.r,
            g: tmp_color.g,
            b: tmp_color.b,
        })
    }
}

/// MapStyle contains the ready-to-use style information for drawing the map.
#[derive(Debug, Clone)]
pub struct MapStyle {
    pub track_color: RgbColor,
    pub telemetry_color: RgbColor,
    pub corner_color: RgbColor,
    pub marker_color: RgbColor,
    pub fit_padding: f32,
    pub corner_radius: f32,
    pub marker_radius: f32,
}

impl MapStyle {
    pub fn new(style_pars: &StylePars) -> anyhow::Result<MapStyle> {
        Ok(MapStyle {
            track_color: RgbColor::from_css(&style_pars.track_color)?,
            telemetry_color: RgbColor::from_css(&style_pars.telemetry_color)?,
            corner_color: RgbColor::from_css(&style_pars.corner_color)?,
            marker_color: RgbColor::from_css(&style_pars.marker_color)?,
            fit_padding: style_pars.fit_padding as f32,
            corner_radius: style_pars.corner_radius as f32,
            marker_radius: style_pars.marker_radius as f32,
        })
    }
}
