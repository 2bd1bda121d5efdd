use egui::{Context, Id, Pos2, Rect};

use crate::models::assignment::CellKey;

/// The grid cell under the pointer this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverTarget {
    pub cell: CellKey,
    pub rect: Rect,
}

#[derive(Clone, Debug, Default)]
struct HoverState {
    hovered: Option<HoverTarget>,
    pointer_pos: Option<Pos2>,
}

/// Per-frame drop target tracking, kept in egui memory.
///
/// Widgets stop reporting hover while another widget is being dragged, so
/// cells record themselves here whenever their rect contains the pointer.
/// The hover is cleared at the start of each grid pass; a drag released
/// after the pass with no hover recorded was released outside the grid.
pub struct DragManager;

impl DragManager {
    fn storage_id() -> Id {
        Id::new("planner_drag_hover_state")
    }

    fn state(ctx: &Context) -> HoverState {
        ctx.memory(|mem| mem.data.get_temp::<HoverState>(Self::storage_id()))
            .unwrap_or_default()
    }

    /// Forget last frame's hover and remember where the pointer is now.
    pub fn begin_frame(ctx: &Context, pointer_pos: Option<Pos2>) {
        ctx.memory_mut(|mem| {
            mem.data.insert_temp(
                Self::storage_id(),
                HoverState {
                    hovered: None,
                    pointer_pos,
                },
            );
        });
    }

    pub fn update_hover(ctx: &Context, cell: CellKey, rect: Rect) {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            let mut state = mem.data.get_temp::<HoverState>(id).unwrap_or_default();
            state.hovered = Some(HoverTarget { cell, rect });
            mem.data.insert_temp(id, state);
        });
    }

    pub fn hovered(ctx: &Context) -> Option<HoverTarget> {
        Self::state(ctx).hovered
    }

    pub fn pointer_pos(ctx: &Context) -> Option<Pos2> {
        Self::state(ctx).pointer_pos
    }

    pub fn is_hovering(ctx: &Context, cell: &CellKey) -> bool {
        Self::hovered(ctx).is_some_and(|target| &target.cell == cell)
    }
}
