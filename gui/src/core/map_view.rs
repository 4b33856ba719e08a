use eframe::egui;
use helpers::geometry::{Bounds, Point2d};

/// MapView handles the transformation between the planar map space (spherical Mercator, m) and the
/// pixels of the map canvas. The y axis is inverted since screen coordinates grow downwards.
///
/// * `center` - (m) Map position shown in the center of the canvas
/// * `scale` - (px/m) Zoom level
/// * `fit_requested` - Fit the view to the track bounds on the next frame
#[derive(Debug, Clone)]
pub struct MapView {
    center: Point2d,
    scale: f64,
    fit_requested: bool,
}

impl Default for MapView {
    fn default() -> Self {
        MapView {
            center: Point2d { x: 0.0, y: 0.0 },
            scale: 1.0,
            fit_requested: true,
        }
    }
}

impl MapView {
    pub fn request_fit(&mut self) {
        self.fit_requested = true
    }

    pub fn needs_fit(&self) -> bool {
        self.fit_requested
    }

    pub fn get_scale(&self) -> f64 {
        self.scale
    }

    /// fit centers the bounds in the canvas and sets the largest zoom level that keeps the inserted
    /// padding (px) to the canvas border.
    pub fn fit(&mut self, bounds: &Bounds, rect: egui::Rect, padding: f32) {
        let avail_width = (rect.width() - 2.0 * padding).max(1.0) as f64;
        let avail_height = (rect.height() - 2.0 * padding).max(1.0) as f64;
        let scale = (avail_width / bounds.width()).min(avail_height / bounds.height());

        self.center = bounds.center();
        self.scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        self.fit_requested = false;
    }

    pub fn to_screen(&self, p: &Point2d, rect: egui::Rect) -> egui::Pos2 {
        let rect_center = rect.center();

        egui::Pos2 {
            x: rect_center.x + ((p.x - self.center.x) * self.scale) as f32,
            y: rect_center.y - ((p.y - self.center.y) * self.scale) as f32,
        }
    }

    pub fn from_screen(&self, pos: egui::Pos2, rect: egui::Rect) -> Point2d {
        let rect_center = rect.center();

        Point2d {
            x: self.center.x + (pos.x - rect_center.x) as f64 / self.scale,
            y: self.center.y - (pos.y - rect_center.y) as f64 / self.scale,
        }
    }

    /// pan moves the map content by the inserted screen distance (px).
    pub fn pan(&mut self, delta: egui::Vec2) {
        self.center.x -= delta.x as f64 / self.scale;
        self.center.y += delta.y as f64 / self.scale;
    }

    /// zoom changes the zoom level by the inserted factor while the map position below the anchor
    /// stays in place.
    pub fn zoom(&mut self, factor: f64, anchor: egui::Pos2, rect: egui::Rect) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }

        let anchor_map = self.from_screen(anchor, rect);
        let rect_center = rect.center();

        self.scale *= factor;
        self.center = Point2d {
            x: anchor_map.x - (anchor.x - rect_center.x) as f64 / self.scale,
            y: anchor_map.y + (anchor.y - rect_center.y) as f64 / self.scale,
        };
    }
}
