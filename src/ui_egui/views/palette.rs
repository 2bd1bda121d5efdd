use egui::{Color32, Visuals};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct TimeGridPalette {
    pub header_bg: Color32,
    pub header_text: Color32,
    pub time_label: Color32,
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub slot_line: Color32,
    pub divider: Color32,
    pub hover_overlay: Color32,
    pub drop_fill: Color32,
    pub drop_stroke: Color32,
}

impl TimeGridPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let base = visuals.extreme_bg_color;
        let panel = visuals.panel_fill;
        let border = visuals.widgets.noninteractive.bg_stroke.color;
        let accent = visuals.selection.bg_fill;
        Self {
            header_bg: blend(panel, base, 0.5),
            header_text: visuals.strong_text_color(),
            time_label: Color32::GRAY,
            regular_bg: base,
            weekend_bg: blend(base, panel, 0.6),
            slot_line: with_alpha(border, 170),
            divider: with_alpha(border, 220),
            hover_overlay: with_alpha(accent, if visuals.dark_mode { 60 } else { 40 }),
            drop_fill: Color32::from_rgba_unmultiplied(120, 200, 120, 35),
            drop_stroke: Color32::from_rgb(120, 200, 120),
        }
    }
}
