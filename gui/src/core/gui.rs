use crate::core::map_view::MapView;
use eframe::egui;
use helpers::geometry::{Bounds, Point2d, Vector2d};
use std::time::Instant;
use trackmap::core::playback::{Playback, PlaybackSpeed};
use trackmap::core::projection::project;
use trackmap::core::track_map::TrackMap;
use trackmap::interfaces::gui_interface::{MapStyle, RgbColor};
use trackmap::post::format::{format_time, or_missing, MetricReadout};
use trackmap::pre::read_view_pars::ViewPars;
use tracing::{debug, info};

#[derive(Debug)]
pub struct CornerGui {
    pub pos: Point2d,
    pub text: String,
}

#[derive(Debug)]
pub struct TrackMapApp {
    pub track_map: TrackMap,
    pub style: MapStyle,
    pub playback: Playback,
    pub map_view: MapView,
    pub outline_proj: Vec<Point2d>,
    pub telemetry_proj: Vec<Option<Point2d>>,
    pub corners_gui: Vec<CornerGui>,
}

fn to_color32(color: &RgbColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

impl TrackMapApp {
    pub fn new(track_map: TrackMap, view_pars: &ViewPars) -> anyhow::Result<TrackMapApp> {
        // set up style and playback
        let style = MapStyle::new(&view_pars.style)?;
        let initial_speed = PlaybackSpeed::from_factor(view_pars.initial_speed).unwrap_or_default();
        let time: &[f64] = track_map
            .telemetry
            .as_ref()
            .map(|lap| lap.time.as_slice())
            .unwrap_or(&[]);
        let playback = Playback::new(time, initial_speed);

        // project geographic coordinates onto the map plane (saved separately such that this must
        // not be repeated in each call)
        let outline_proj = track_map
            .geometry
            .as_ref()
            .map(|geometry| geometry.outline.iter().map(project).collect())
            .unwrap_or_default();
        let telemetry_proj = track_map
            .telemetry_positions
            .iter()
            .map(|pos| pos.as_ref().map(project))
            .collect();
        let corners_gui = track_map
            .corners
            .iter()
            .map(|mapped_corner| CornerGui {
                pos: project(&mapped_corner.pos),
                text: mapped_corner.corner.get_label(),
            })
            .collect();

        info!(
            "Starting GUI with playback speed {} for {} samples",
            initial_speed,
            time.len()
        );

        Ok(TrackMapApp {
            track_map,
            style,
            playback,
            map_view: MapView::default(),
            outline_proj,
            telemetry_proj,
            corners_gui,
        })
    }

    pub fn set_map_content(&mut self, ui: &mut egui::Ui) -> egui::Response {
        // PREPARATIONS ----------------------------------------------------------------------------
        // get UI handles
        let (response, painter) =
            ui.allocate_painter(ui.available_size_before_wrap(), egui::Sense::drag());
        let rect = response.rect;

        // nothing to draw without a track outline
        let bounds = match Bounds::from_points(&self.outline_proj) {
            Some(x) => x,
            None => {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "No high-resolution track outline provided.",
                    egui::FontId::proportional(16.0),
                    egui::Color32::WHITE,
                );
                return response;
            }
        };

        // update view (fit, pan, zoom)
        if self.map_view.needs_fit() {
            self.map_view.fit(&bounds, rect, self.style.fit_padding);
            debug!("Fitted map view, scale {:.4} px/m", self.map_view.get_scale());
        }

        if response.dragged() {
            self.map_view.pan(response.drag_delta());
        }

        if let Some(hover_pos) = response.hover_pos() {
            let zoom_delta = ui.input(|i| i.zoom_delta());

            if zoom_delta != 1.0 {
                self.map_view.zoom(zoom_delta as f64, hover_pos, rect);
            }
        }

        let map_view = &self.map_view;
        let to_screen = |p: &Point2d| map_view.to_screen(p, rect);

        // create vector for drawn shapes
        let mut shapes = vec![];

        // TRACK DRAWING ---------------------------------------------------------------------------
        shapes.push(egui::Shape::line(
            self.outline_proj.iter().map(to_screen).collect(),
            egui::Stroke::new(4.0, to_color32(&self.style.track_color)),
        ));

        // add driven line (interrupted at samples without a position)
        for segment in self.telemetry_proj.split(|pos| pos.is_none()) {
            if segment.len() < 2 {
                continue;
            }

            shapes.push(egui::Shape::line(
                segment.iter().flatten().map(to_screen).collect(),
                egui::Stroke::new(3.0, to_color32(&self.style.telemetry_color)),
            ));
        }

        // add corners
        let corner_color = to_color32(&self.style.corner_color);
        let text_offset = Vector2d {
            dx: 2.0 * self.style.corner_radius as f64 / map_view.get_scale(),
            dy: 2.0 * self.style.corner_radius as f64 / map_view.get_scale(),
        };

        for corner_gui in self.corners_gui.iter() {
            shapes.push(egui::Shape::circle_filled(
                to_screen(&corner_gui.pos),
                self.style.corner_radius,
                corner_color,
            ));
        }

        // MARKER DRAWING --------------------------------------------------------------------------
        if let Some(marker_pos) = self
            .telemetry_proj
            .get(self.playback.get_cur_idx())
            .and_then(|pos| pos.as_ref())
        {
            shapes.push(egui::Shape::circle_filled(
                to_screen(marker_pos),
                self.style.marker_radius,
                to_color32(&self.style.marker_color),
            ));
            shapes.push(egui::Shape::circle_stroke(
                to_screen(marker_pos),
                self.style.marker_radius,
                egui::Stroke::new(2.0, egui::Color32::BLACK),
            ));
        }

        // DRAWING ---------------------------------------------------------------------------------
        painter.extend(shapes);

        for corner_gui in self.corners_gui.iter() {
            painter.text(
                to_screen(&corner_gui.pos.shift(&text_offset)),
                egui::Align2::LEFT_BOTTOM,
                &corner_gui.text,
                egui::FontId::proportional(12.0),
                corner_color,
            );
        }

        // show general information text in the GUI
        painter.text(
            rect.left_top() + egui::vec2(8.0, 8.0),
            egui::Align2::LEFT_TOP,
            format!(
                "{}\nCorners: {}\nTelemetry: {}",
                self.track_map.name, self.track_map.corner_mapper, self.track_map.telemetry_mapper
            ),
            egui::FontId::proportional(14.0),
            egui::Color32::WHITE,
        );

        response
    }

    pub fn set_controls_content(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.heading("Track Controls");
        ui.label("Playback controls and telemetry of the recorded lap.");
        ui.separator();

        // PLAYBACK CONTROLS -----------------------------------------------------------------------
        if let (Some(last_idx), Some(lap)) =
            (self.playback.get_last_idx(), self.track_map.telemetry.as_ref())
        {
            ui.horizontal(|ui| {
                let button_text = if self.playback.is_playing() {
                    "Pause"
                } else {
                    "Play"
                };

                if ui.button(button_text).clicked() {
                    self.playback.toggle(now);
                }

                let mut speed = self.playback.get_speed();

                egui::ComboBox::from_label("Speed")
                    .selected_text(speed.to_string())
                    .show_ui(ui, |ui| {
                        for option in PlaybackSpeed::ALL.iter() {
                            ui.selectable_value(&mut speed, *option, option.to_string());
                        }
                    });

                if speed != self.playback.get_speed() {
                    self.playback.set_speed(speed, now);
                }
            });

            // scrubbing always stops the playback
            let mut idx = self.playback.get_cur_idx();

            if ui
                .add(egui::Slider::new(&mut idx, 0..=last_idx).show_value(false))
                .changed()
            {
                self.playback.scrub(idx);
            }

            let idx = self.playback.get_cur_idx();
            ui.label(format!(
                "Time: {}, Index: {}",
                or_missing(format_time(lap.time.get(idx).copied())),
                idx
            ));

            if !self.track_map.telemetry_mapper.is_available() {
                ui.label("No telemetry mapping available, the marker is hidden.");
            }

            ui.separator();

            // TELEMETRY METRICS -------------------------------------------------------------------
            let readout = MetricReadout::at(lap, idx);

            egui::Grid::new("telemetry_metrics")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (label, value) in [
                        ("Time", &readout.time),
                        ("Speed", &readout.speed),
                        ("RPM", &readout.rpm),
                        ("Gear", &readout.gear),
                        ("Distance", &readout.distance),
                        ("Position (X, Y)", &readout.position),
                    ]
                    .iter()
                    {
                        ui.label(*label);
                        ui.label(egui::RichText::new(value.as_str()).strong());
                        ui.end_row();
                    }
                });

            ui.add_space(6.0);
            ui.label("Throttle");
            ui.add(
                egui::ProgressBar::new(readout.throttle_pct.unwrap_or(0) as f32 / 100.0)
                    .fill(egui::Color32::from_rgb(40, 170, 70))
                    .text(readout.get_throttle_text()),
            );
            ui.label("Brake");
            ui.add(
                egui::ProgressBar::new(readout.brake_pct.unwrap_or(0) as f32 / 100.0)
                    .fill(egui::Color32::from_rgb(210, 50, 50))
                    .text(readout.get_brake_text()),
            );
        } else {
            ui.label("No telemetry available.");
        }

        ui.separator();

        if ui
            .button("Refit Map")
            .on_hover_text("Refit map (tight padding)")
            .clicked()
        {
            self.map_view.request_fit();
        }
    }
}

impl eframe::App for TrackMapApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // advance playback to the current wall-clock time
        let now = Instant::now();
        self.playback.tick(now);

        // update UI content
        egui::SidePanel::right("track_controls")
            .min_width(260.0)
            .show(ctx, |ui| {
                self.set_controls_content(ui, now);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::canvas(ui.style()).show(ui, |ui| {
                self.set_map_content(ui);
            });
        });

        // the frame loop only runs while playing
        if self.playback.is_playing() {
            ctx.request_repaint();
        }
    }
}
