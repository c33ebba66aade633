use crate::camera::cursor_to_screen;
use crate::config::*;
use crate::journal::FieldJournal;
use crate::species::Species;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, egui};

/// Transient feedback text shown in the top-left corner
#[derive(Resource)]
pub struct StatusMessage {
    text: String,
    timer: Timer,
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self {
            text: String::new(),
            timer: Timer::from_seconds(MESSAGE_DURATION_SECS, TimerMode::Once),
        }
    }
}

impl StatusMessage {
    /// Replace the current message and restart its display time
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.timer.reset();
    }

    /// Message to display, if one is still live
    pub fn current(&self) -> Option<&str> {
        if self.text.is_empty() || self.timer.finished() {
            None
        } else {
            Some(&self.text)
        }
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.timer.tick(delta);
    }
}

/// Toggleable UI state
#[derive(Resource, Default, Debug)]
pub struct HudState {
    /// Discovery-count overlay visible
    pub show_log: bool,
    /// Cursor in logical screen space, if inside the window
    pub cursor: Option<IVec2>,
}

/// System to handle the overlay toggle and quitting
pub fn handle_hotkeys(
    keys: Res<ButtonInput<KeyCode>>,
    mut hud: ResMut<HudState>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, quitting");
        exit.send(AppExit::Success);
    }
    if keys.just_pressed(KeyCode::KeyC) {
        hud.show_log = !hud.show_log;
    }
}

/// System to follow the cursor in logical screen coordinates
pub fn track_cursor(windows: Query<&Window, With<PrimaryWindow>>, mut hud: ResMut<HudState>) {
    hud.cursor = windows.get_single().ok().and_then(|window| {
        window
            .cursor_position()
            .map(|cursor| cursor_to_screen(cursor, window.size()))
    });
}

pub fn tick_status(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    status.tick(time.delta());
}

/// Lines of the discovery overlay, one per species
pub fn discovery_lines(journal: &FieldJournal) -> Vec<String> {
    Species::ALL
        .iter()
        .map(|species| format!("{}: {}", species.name(), journal.snaps(*species)))
        .collect()
}

/// System to draw the reticle, the status message and the discovery overlay
pub fn draw_hud(
    mut contexts: EguiContexts,
    hud: Res<HudState>,
    status: Res<StatusMessage>,
    journal: Res<FieldJournal>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    // egui points are window logical pixels; the HUD is laid out in viewport units
    let scale = window.size() / Vec2::new(VIEWPORT_WIDTH as f32, VIEWPORT_HEIGHT as f32);
    let to_window = |p: IVec2| egui::pos2(p.x as f32 * scale.x, p.y as f32 * scale.y);
    let ctx = contexts.ctx_mut();

    if let Some(cursor) = hud.cursor {
        let half = IVec2::splat(FOCUS_BOX_SIZE / 2);
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("reticle"),
        ));
        painter.rect_stroke(
            egui::Rect::from_min_max(to_window(cursor - half), to_window(cursor + half)),
            0.0,
            egui::Stroke::new(1.0, egui::Color32::WHITE),
        );
    }

    if hud.show_log {
        let panel = crate::scene::log_panel_rect();
        egui::Area::new(egui::Id::new("discovery_log"))
            .fixed_pos(to_window(panel.min))
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(egui::Color32::from_black_alpha(180))
                    .stroke(egui::Stroke::new(1.0, egui::Color32::WHITE))
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_min_width(panel.width() as f32 * scale.x - 20.0);
                        for line in discovery_lines(&journal) {
                            ui.label(egui::RichText::new(line).color(egui::Color32::WHITE));
                        }
                    });
            });
    }

    if let Some(text) = status.current() {
        egui::Area::new(egui::Id::new("status_message"))
            .fixed_pos(to_window(IVec2::new(20, 20)))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(text)
                        .color(egui::Color32::WHITE)
                        .size(20.0),
                );
            });
    }
}
