//! "Noise Grid" parameter panel and frame-rate readout.

use crate::params::NoiseGridParams;

/// Buttons pressed on the panel this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Save,
    Load,
    Reset,
    ResetCamera,
}

/// Draw the parameter panel, editing `params` in place.
///
/// Sliders are bounded by the parameter ranges, so whatever the user does
/// the snapshot stays valid.
pub fn draw_panel(
    ctx: &egui::Context,
    params: &mut NoiseGridParams,
    width: f32,
) -> Option<PanelAction> {
    let mut action = None;

    egui::Window::new("Noise Grid")
        .default_pos([10.0, 10.0])
        .default_width(width)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add(
                egui::Slider::new(&mut params.frequency, NoiseGridParams::FREQUENCY_RANGE)
                    .text("Frequency"),
            );
            ui.add(
                egui::Slider::new(
                    &mut params.time_frequency,
                    NoiseGridParams::TIME_FREQUENCY_RANGE,
                )
                .logarithmic(true)
                .text("Time Frequency"),
            );
            ui.add(
                egui::Slider::new(&mut params.magnitude, NoiseGridParams::MAGNITUDE_RANGE)
                    .text("Magnitude"),
            );
            ui.add(
                egui::Slider::new(&mut params.grid_size, NoiseGridParams::GRID_SIZE_RANGE)
                    .text("Grid Size"),
            );
            ui.add(
                egui::Slider::new(
                    &mut params.grid_resolution,
                    NoiseGridParams::GRID_RESOLUTION_RANGE,
                )
                .text("Grid Resolution"),
            );

            ui.label(format!("{} segments", params.segment_count()));
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    action = Some(PanelAction::Save);
                }
                if ui.button("Load").clicked() {
                    action = Some(PanelAction::Load);
                }
                if ui.button("Reset").clicked() {
                    action = Some(PanelAction::Reset);
                }
                if ui.button("Reset Camera").clicked() {
                    action = Some(PanelAction::ResetCamera);
                }
            });

            ui.weak("Tab: hide panel   F: fullscreen");
        });

    action
}

/// Frame rate in the bottom-right corner, drawn whether or not the panel is shown
pub fn draw_fps(ctx: &egui::Context, fps: f32) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("fps_readout"),
    ));
    let corner = ctx.screen_rect().right_bottom() - egui::vec2(5.0, 5.0);
    painter.text(
        corner,
        egui::Align2::RIGHT_BOTTOM,
        format!("{:.1}", fps),
        egui::FontId::monospace(10.0),
        egui::Color32::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_frame_leaves_params_untouched() {
        let ctx = egui::Context::default();
        let mut params = NoiseGridParams::default();
        let mut action = None;

        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                action = draw_panel(ctx, &mut params, 260.0);
                draw_fps(ctx, 59.94);
            });
        }

        assert_eq!(action, None);
        assert_eq!(params, NoiseGridParams::default());
    }
}
