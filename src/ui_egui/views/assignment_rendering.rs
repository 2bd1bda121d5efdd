//! Painting helpers for assignment blocks and activity chips.
//!
//! Fuzziness is drawn as a fade at the top and bottom edge of a block. The
//! fade band covers `fuzziness / block` of the cell height.

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Vec2};

use crate::models::assignment::Assignment;

/// Fallback fill for colors that fail to parse.
pub const FALLBACK_COLOR: Color32 = Color32::from_rgb(100, 150, 200);

/// Number of alpha steps used to draw one fade band.
const FADE_STEPS: usize = 8;

/// Parse a hex color string to Color32.
pub fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim().trim_start_matches('#');
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        3 => {
            let short = |i: usize| {
                let digit = u8::from_str_radix(hex.get(i..i + 1)?, 16).ok()?;
                Some(digit * 17)
            };
            Some(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

/// Black or white, whichever reads better on `background`.
pub fn text_color_for(background: Color32) -> Color32 {
    let luminance = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luminance > 150.0 {
        Color32::from_rgb(20, 20, 20)
    } else {
        Color32::WHITE
    }
}

/// Fraction of the cell height covered by each fade band, at most 0.25.
pub fn fuzz_fraction(fuzziness_minutes: u32, block_minutes: u32) -> f32 {
    if block_minutes == 0 {
        return 0.0;
    }
    (fuzziness_minutes as f32 / block_minutes as f32).clamp(0.0, 0.25)
}

/// Paint an assignment filling `cell_rect`, fading its edges by its fuzziness.
pub fn render_assignment_block(
    painter: &egui::Painter,
    cell_rect: Rect,
    assignment: &Assignment,
    block_minutes: u32,
) {
    let color = parse_color(&assignment.color).unwrap_or(FALLBACK_COLOR);
    let block_rect = cell_rect.shrink2(Vec2::new(2.0, 1.0));
    let band = block_rect.height() * fuzz_fraction(assignment.fuzziness_minutes, block_minutes);

    if band < 1.0 {
        painter.rect_filled(block_rect, Rounding::same(3.0), color);
    } else {
        let core = Rect::from_min_max(
            Pos2::new(block_rect.left(), block_rect.top() + band),
            Pos2::new(block_rect.right(), block_rect.bottom() - band),
        );
        painter.rect_filled(core, 0.0, color);

        let step = band / FADE_STEPS as f32;
        for i in 0..FADE_STEPS {
            // Outermost strip is the most transparent
            let alpha = ((i + 1) as f32 / (FADE_STEPS + 1) as f32 * color.a() as f32) as u8;
            let strip_color = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha);
            let offset = i as f32 * step;
            let top = Rect::from_min_size(
                Pos2::new(block_rect.left(), block_rect.top() + offset),
                Vec2::new(block_rect.width(), step),
            );
            let bottom = Rect::from_min_size(
                Pos2::new(block_rect.left(), block_rect.bottom() - offset - step),
                Vec2::new(block_rect.width(), step),
            );
            painter.rect_filled(top, 0.0, strip_color);
            painter.rect_filled(bottom, 0.0, strip_color);
        }
    }

    painter.text(
        block_rect.center(),
        Align2::CENTER_CENTER,
        &assignment.activity_name,
        FontId::proportional(12.0),
        text_color_for(color),
    );
}

/// Paint a rounded activity chip (catalog entries and the drag ghost).
pub fn render_activity_chip(painter: &egui::Painter, rect: Rect, name: &str, color: &str) {
    let fill = parse_color(color).unwrap_or(FALLBACK_COLOR);
    painter.rect_filled(rect, Rounding::same(8.0), fill);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        name,
        FontId::proportional(13.0),
        text_color_for(fill),
    );
}
