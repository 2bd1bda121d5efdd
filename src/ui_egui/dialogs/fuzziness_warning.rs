//! Modal shown when a fuzziness change hits the 25% cap.

use egui::{Context, RichText};

use super::clicked_outside;
use crate::models::schedule::BlockSize;

#[derive(Debug, Default)]
pub struct FuzzinessWarningState {
    block_size: Option<BlockSize>,
    just_opened: bool,
}

impl FuzzinessWarningState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_for(&mut self, block_size: BlockSize) {
        if self.block_size.is_none() {
            self.just_opened = true;
        }
        self.block_size = Some(block_size);
    }

    pub fn is_open(&self) -> bool {
        self.block_size.is_some()
    }

    pub fn close(&mut self) {
        self.block_size = None;
    }

    pub fn message(&self) -> Option<String> {
        self.block_size.map(|block| {
            format!(
                "For {} time slots, the maximum fuzziness is limited to {} minutes (25% of slot size).",
                block.label(),
                block.max_fuzziness()
            )
        })
    }

    pub fn render(&mut self, ctx: &Context) {
        let Some(message) = self.message() else {
            return;
        };
        let mut should_close = false;

        let response = egui::Window::new("Maximum Fuzziness Reached")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(400.0);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(24.0).color(egui::Color32::from_rgb(220, 150, 50)));
                    ui.vertical(|ui| {
                        ui.label(message);
                    });
                });

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Got it").clicked() {
                        should_close = true;
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            should_close = true;
        }
        if !self.just_opened {
            if let Some(inner) = &response {
                if clicked_outside(ctx, inner.response.rect) {
                    should_close = true;
                }
            }
        }
        self.just_opened = false;

        if should_close {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_by_default() {
        let state = FuzzinessWarningState::new();
        assert!(!state.is_open());
        assert!(state.message().is_none());
    }

    #[test]
    fn test_message_names_block_and_cap() {
        let mut state = FuzzinessWarningState::new();
        state.open_for(BlockSize::OneHour);
        assert!(state.is_open());
        assert_eq!(
            state.message().unwrap(),
            "For 1 hour time slots, the maximum fuzziness is limited to 15 minutes (25% of slot size)."
        );
    }

    #[test]
    fn test_thirty_minute_cap_is_rounded_down() {
        let mut state = FuzzinessWarningState::new();
        state.open_for(BlockSize::ThirtyMinutes);
        assert!(state.message().unwrap().contains("limited to 7 minutes"));
    }

    #[test]
    fn test_close() {
        let mut state = FuzzinessWarningState::new();
        state.open_for(BlockSize::TwoHours);
        state.close();
        assert!(!state.is_open());
    }
}
