//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::hash::hash_i32;
use crate::nav::{InputReadMode, NavDirSourceFlags};
use crate::*;

/// Half thickness of the invisible borders that resize a window from its edges.
pub(crate) const RESIZE_FROM_EDGES_HALF_THICKNESS: f32 = 4.0;

/// Seconds an edge must be hovered before the resize cursor shows up.
const RESIZE_FROM_EDGES_FEEDBACK_TIMER: f32 = 0.04;

const NAV_RESIZE_SPEED: f32 = 600.0;

pub(crate) struct ResizeGripDef {
    pub corner_pos_n: Vec2f,
    pub inner_dir: Vec2f,
}

/// Lower-right, lower-left, upper-left, upper-right.
pub(crate) const RESIZE_GRIP_DEF: [ResizeGripDef; 4] = [
    ResizeGripDef { corner_pos_n: Vec2f { x: 1.0, y: 1.0 }, inner_dir: Vec2f { x: -1.0, y: -1.0 } },
    ResizeGripDef { corner_pos_n: Vec2f { x: 0.0, y: 1.0 }, inner_dir: Vec2f { x: 1.0, y: -1.0 } },
    ResizeGripDef { corner_pos_n: Vec2f { x: 0.0, y: 0.0 }, inner_dir: Vec2f { x: 1.0, y: 1.0 } },
    ResizeGripDef { corner_pos_n: Vec2f { x: 1.0, y: 0.0 }, inner_dir: Vec2f { x: -1.0, y: 1.0 } },
];

/// Hit rectangle of border `border_n` (top, right, bottom, left), `perp_padding` away from the corners.
pub(crate) fn get_resize_border_rect(window_rect: &Rect, border_n: usize, perp_padding: f32, thickness: f32) -> Rect {
    let mut r = *window_rect;
    if thickness == 0.0 {
        r.max.x -= 1.0;
        r.max.y -= 1.0;
    }
    match border_n {
        0 => Rect::from_coords(r.min.x + perp_padding, r.min.y - thickness, r.max.x - perp_padding, r.min.y + thickness),
        1 => Rect::from_coords(r.max.x - thickness, r.min.y + perp_padding, r.max.x + thickness, r.max.y - perp_padding),
        2 => Rect::from_coords(r.min.x + perp_padding, r.max.y - thickness, r.max.x - perp_padding, r.max.y + thickness),
        _ => Rect::from_coords(r.min.x - thickness, r.min.y + perp_padding, r.min.x + thickness, r.max.y - perp_padding),
    }
}

impl Context {
    /// ID of resize handle `n` of a window: 0..3 are the corner grips, 4..7 the borders.
    pub fn get_window_resize_id(&self, idx: WindowIdx, n: usize) -> Id {
        assert!(n <= 7);
        let id = hash_str("#RESIZE", self.windows[idx.0].id);
        hash_i32(n as i32, id)
    }

    /// Position and size that put the corner `corner_norm` of the window on `corner_target`,
    /// keeping the opposite corner in place.
    fn calc_resize_pos_size_from_any_corner(&mut self, idx: WindowIdx, corner_target: Vec2f, corner_norm: Vec2f) -> (Vec2f, Vec2f) {
        let (pos, size) = (self.windows[idx.0].pos, self.windows[idx.0].size);
        let far = vec2(pos.x + size.x, pos.y + size.y);
        let pos_min = vec2(corner_target.x + (pos.x - corner_target.x) * corner_norm.x, corner_target.y + (pos.y - corner_target.y) * corner_norm.y);
        let pos_max = vec2(far.x + (corner_target.x - far.x) * corner_norm.x, far.y + (corner_target.y - far.y) * corner_norm.y);
        let size_expected = vec2(pos_max.x - pos_min.x, pos_max.y - pos_min.y);
        let size_constrained = self.calc_window_size_after_constraint(idx, size_expected);
        let mut out_pos = pos_min;
        if corner_norm.x == 0.0 {
            out_pos.x -= size_constrained.x - size_expected.x;
        }
        if corner_norm.y == 0.0 {
            out_pos.y -= size_constrained.y - size_expected.y;
        }
        (out_pos, size_constrained)
    }

    /// Handles the resize grips and borders of a window. Returns whether the grip was
    /// double-clicked to auto-fit, and the border being held.
    pub(crate) fn update_window_manual_resize(&mut self, idx: WindowIdx, size_auto_fit: Vec2f, resize_grip_count: usize, resize_grip_col: &mut [Color; 4], visibility_rect: &Rect) -> (bool, Option<usize>) {
        {
            let w = &self.windows[idx.0];
            if w.flags.intersects(WindowFlags::NO_RESIZE | WindowFlags::ALWAYS_AUTO_RESIZE) || w.auto_fit_frames_x > 0 || w.auto_fit_frames_y > 0 {
                return (false, None);
            }
            // hidden implicit windows never get here
            if !w.was_active {
                return (false, None);
            }
        }

        let mut ret_auto_fit = false;
        let mut border_held = None;
        let resize_border_count = if self.io.config_windows_resize_from_edges { 4 } else { 0 };
        let grip_draw_size = (self.font_size * 1.35).max(self.windows[idx.0].window_rounding + 1.0 + self.font_size * 0.2).floor();
        let grip_hover_inner_size = (grip_draw_size * 0.75).floor();
        let grip_hover_outer_size = if self.io.config_windows_resize_from_edges { RESIZE_FROM_EDGES_HALF_THICKNESS } else { 0.0 };

        let mut pos_target = vec2(f32::MAX, f32::MAX);
        let mut size_target = vec2(f32::MAX, f32::MAX);

        // grips and borders live on the menu layer
        self.windows[idx.0].dc.nav_layer_current = NavLayer::Menu;

        for (n, def) in RESIZE_GRIP_DEF.iter().enumerate().take(resize_grip_count) {
            let (pos, size) = (self.windows[idx.0].pos, self.windows[idx.0].size);
            let corner = vec2(pos.x + size.x * def.corner_pos_n.x, pos.y + size.y * def.corner_pos_n.y);
            let a = vec2(corner.x - def.inner_dir.x * grip_hover_outer_size, corner.y - def.inner_dir.y * grip_hover_outer_size);
            let b = vec2(corner.x + def.inner_dir.x * grip_hover_inner_size, corner.y + def.inner_dir.y * grip_hover_inner_size);
            let resize_rect = Rect::new(vec2_min(a, b), vec2_max(a, b));

            let id = self.get_window_resize_id(idx, n);
            let (_, hovered, held) = self.button_behavior(&resize_rect, id, ButtonFlags::FLATTEN_CHILDREN | ButtonFlags::NO_NAV_FOCUS);
            if hovered || held {
                self.mouse_cursor = Some(if n & 1 == 1 { MouseCursor::ResizeNESW } else { MouseCursor::ResizeNWSE });
            }

            if held && self.io.mouse_double_clicked[0] && n == 0 {
                size_target = self.calc_window_size_after_constraint(idx, size_auto_fit);
                ret_auto_fit = true;
                self.clear_active_id();
            } else if held {
                // absolute target from the mouse, not an accumulated delta
                let clamp_min = vec2(
                    if def.corner_pos_n.x == 1.0 { visibility_rect.min.x } else { -f32::MAX },
                    if def.corner_pos_n.y == 1.0 { visibility_rect.min.y } else { -f32::MAX },
                );
                let clamp_max = vec2(
                    if def.corner_pos_n.x == 0.0 { visibility_rect.max.x } else { f32::MAX },
                    if def.corner_pos_n.y == 0.0 { visibility_rect.max.y } else { f32::MAX },
                );
                let outer = vec2_scale(def.inner_dir, grip_hover_outer_size);
                let inner = vec2_scale(def.inner_dir, -grip_hover_inner_size);
                let grip_offset = vec2(outer.x + (inner.x - outer.x) * def.corner_pos_n.x, outer.y + (inner.y - outer.y) * def.corner_pos_n.y);
                let mouse = self.io.mouse_pos;
                let click_offset = self.active_id_click_offset;
                let corner_target = vec2_clamp(vec2(mouse.x - click_offset.x + grip_offset.x, mouse.y - click_offset.y + grip_offset.y), clamp_min, clamp_max);
                let (p, s) = self.calc_resize_pos_size_from_any_corner(idx, corner_target, def.corner_pos_n);
                pos_target = p;
                size_target = s;
            }
            if n == 0 || held || hovered {
                resize_grip_col[n] = self.get_color(
                    if held {
                        StyleColor::ResizeGripActive
                    } else if hovered {
                        StyleColor::ResizeGripHovered
                    } else {
                        StyleColor::ResizeGrip
                    },
                    1.0,
                );
            }
        }

        for border_n in 0..resize_border_count {
            let window_rect = self.windows[idx.0].rect();
            let border_rect = get_resize_border_rect(&window_rect, border_n, grip_hover_inner_size, RESIZE_FROM_EDGES_HALF_THICKNESS);
            let id = self.get_window_resize_id(idx, border_n + 4);
            let (_, hovered, held) = self.button_behavior(&border_rect, id, ButtonFlags::FLATTEN_CHILDREN);
            if (hovered && self.hovered_id_timer > RESIZE_FROM_EDGES_FEEDBACK_TIMER) || held {
                self.mouse_cursor = Some(if border_n & 1 == 1 { MouseCursor::ResizeEW } else { MouseCursor::ResizeNS });
                if held {
                    border_held = Some(border_n);
                }
            }
            if held {
                let clamp_min = vec2(
                    if border_n == 1 { visibility_rect.min.x } else { -f32::MAX },
                    if border_n == 2 { visibility_rect.min.y } else { -f32::MAX },
                );
                let clamp_max = vec2(
                    if border_n == 3 { visibility_rect.max.x } else { f32::MAX },
                    if border_n == 0 { visibility_rect.max.y } else { f32::MAX },
                );
                let mouse = self.io.mouse_pos;
                let click_offset = self.active_id_click_offset;
                let mut border_target = self.windows[idx.0].pos;
                let border_posn = match border_n {
                    0 => {
                        border_target.y = mouse.y - click_offset.y + RESIZE_FROM_EDGES_HALF_THICKNESS;
                        vec2(0.0, 0.0)
                    }
                    1 => {
                        border_target.x = mouse.x - click_offset.x + RESIZE_FROM_EDGES_HALF_THICKNESS;
                        vec2(1.0, 0.0)
                    }
                    2 => {
                        border_target.y = mouse.y - click_offset.y + RESIZE_FROM_EDGES_HALF_THICKNESS;
                        vec2(0.0, 1.0)
                    }
                    _ => {
                        border_target.x = mouse.x - click_offset.x + RESIZE_FROM_EDGES_HALF_THICKNESS;
                        vec2(0.0, 0.0)
                    }
                };
                let border_target = vec2_clamp(border_target, clamp_min, clamp_max);
                let (p, s) = self.calc_resize_pos_size_from_any_corner(idx, border_target, border_posn);
                pos_target = p;
                size_target = s;
            }
        }

        self.windows[idx.0].dc.nav_layer_current = NavLayer::Main;

        // keyboard/gamepad resize while the window is targeted by CTRL+TAB
        if self.nav_windowing_target.map(|t| self.windows[t.0].root_window) == Some(idx) {
            let mut nav_resize_delta = vec2(0.0, 0.0);
            if self.nav_input_source == InputSource::NavKeyboard && self.io.key_shift {
                nav_resize_delta = self.get_nav_input_amount_2d(NavDirSourceFlags::KEYBOARD, InputReadMode::Down, 0.0, 0.0);
            }
            if self.nav_input_source == InputSource::NavGamepad {
                nav_resize_delta = self.get_nav_input_amount_2d(NavDirSourceFlags::PAD_DPAD, InputReadMode::Down, 0.0, 0.0);
            }
            if nav_resize_delta.x != 0.0 || nav_resize_delta.y != 0.0 {
                let w = &self.windows[idx.0];
                nav_resize_delta = vec2_scale(nav_resize_delta, (NAV_RESIZE_SPEED * self.io.delta_time).floor());
                let min_delta = vec2(visibility_rect.min.x - w.pos.x - w.size.x, visibility_rect.min.y - w.pos.y - w.size.y);
                nav_resize_delta = vec2_max(nav_resize_delta, min_delta);
                let wanted = vec2(w.size_full.x + nav_resize_delta.x, w.size_full.y + nav_resize_delta.y);
                self.nav_windowing_toggle_layer = false;
                self.nav_disable_mouse_hover = true;
                resize_grip_col[0] = self.get_color(StyleColor::ResizeGripActive, 1.0);
                size_target = self.calc_window_size_after_constraint(idx, wanted);
            }
        }

        if size_target.x != f32::MAX {
            self.windows[idx.0].size_full = size_target;
            self.mark_window_settings_dirty(idx);
        }
        if pos_target.x != f32::MAX {
            self.windows[idx.0].pos = vec2_floor(pos_target);
            self.mark_window_settings_dirty(idx);
        }
        let w = &mut self.windows[idx.0];
        w.size = w.size_full;
        (ret_auto_fit, border_held)
    }

    /// Keeps at least part of the window inside `visibility_rect` so it can always be grabbed back.
    pub(crate) fn clamp_window_rect(&mut self, idx: WindowIdx, visibility_rect: &Rect) {
        let title_bar_height = self.windows[idx.0].title_bar_height(self.font_size, &self.style);
        let w = &mut self.windows[idx.0];
        let mut size_for_clamping = w.size;
        if self.io.config_windows_move_from_title_bar_only && !w.flags.has_no_title_bar() {
            size_for_clamping.y = title_bar_height;
        }
        let min = vec2(visibility_rect.min.x - size_for_clamping.x, visibility_rect.min.y - size_for_clamping.y);
        w.pos = vec2_clamp(w.pos, min, visibility_rect.max);
    }

    /// Focuses `idx` and starts dragging its root window with the mouse.
    pub fn start_mouse_moving_window(&mut self, idx: WindowIdx) {
        self.focus_window(Some(idx));
        let move_id = self.windows[idx.0].move_id;
        self.set_active_id(move_id, Some(idx));
        self.nav_disable_highlight = true;
        let root = self.windows[idx.0].root_window;
        let root_pos = self.windows[root.0].pos;
        self.active_id_click_offset = vec2(self.io.mouse_pos.x - root_pos.x, self.io.mouse_pos.y - root_pos.y);

        if !(self.windows[idx.0].flags | self.windows[root.0].flags).contains(WindowFlags::NO_MOVE) {
            self.moving_window = Some(idx);
        }
    }

    pub(crate) fn update_mouse_moving_window_new_frame(&mut self) {
        match self.moving_window {
            Some(moving) => {
                // the moving window is not submitted as an item, keep its id alive
                self.keep_alive_id(self.active_id);
                let root = self.windows[moving.0].root_window;
                if self.io.mouse_buttons[0] && self.is_mouse_pos_valid(None) {
                    let pos = vec2(self.io.mouse_pos.x - self.active_id_click_offset.x, self.io.mouse_pos.y - self.active_id_click_offset.y);
                    let current = self.windows[root.0].pos;
                    if current.x != pos.x || current.y != pos.y {
                        self.mark_window_settings_dirty(root);
                        self.set_window_pos_ex(root, pos, Cond::ALWAYS);
                    }
                    self.focus_window(Some(moving));
                } else {
                    self.clear_active_id();
                    self.moving_window = None;
                }
            }
            None => {
                // windows with NO_MOVE still take the active id to block hovering others
                if let Some(active_window) = self.active_id_window {
                    if self.windows[active_window.0].move_id == self.active_id {
                        self.keep_alive_id(self.active_id);
                        if !self.io.mouse_buttons[0] {
                            self.clear_active_id();
                        }
                    }
                }
            }
        }
    }

    pub(crate) fn update_mouse_moving_window_end_frame(&mut self) {
        if self.active_id.is_some() || self.hovered_id.is_some() {
            return;
        }
        // a window that just appeared keeps the focus it took
        if let Some(nav) = self.nav_window {
            if self.windows[nav.0].appearing {
                return;
            }
        }

        if self.io.mouse_clicked[0] {
            match self.hovered_window {
                Some(hovered) => {
                    let root = self.windows[hovered.0].root_window;
                    self.start_mouse_moving_window(hovered);
                    if self.io.config_windows_move_from_title_bar_only && !self.windows[root.0].flags.has_no_title_bar() {
                        let title_bar = self.windows[root.0].title_bar_rect(self.font_size, &self.style);
                        if !title_bar.contains(self.io.mouse_clicked_pos[0]) {
                            self.moving_window = None;
                        }
                    }
                }
                None => {
                    // clicking the void clears the focus
                    if self.nav_window.is_some() && self.get_top_most_popup_modal().is_none() {
                        self.focus_window(None);
                    }
                }
            }
        }

        // the right button closes popups without moving the focus
        if self.io.mouse_clicked[1] {
            let modal = self.get_top_most_popup_modal();
            let mut hovered_window_above_modal = modal.is_none();
            for &w in self.display_order.iter().rev() {
                if hovered_window_above_modal || Some(w) == modal {
                    break;
                }
                if Some(w) == self.hovered_window {
                    hovered_window_above_modal = true;
                }
            }
            let reference = if hovered_window_above_modal { self.hovered_window } else { modal };
            self.close_popups_over_window(reference, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(ctx: &mut Context) {
        ctx.frame(|ctx| {
            ctx.set_next_window_pos(vec2(100.0, 100.0), Cond::FIRST_USE_EVER, vec2(0.0, 0.0));
            ctx.set_next_window_size(vec2(200.0, 150.0), Cond::FIRST_USE_EVER);
            ctx.window("Resizable", WindowFlags::empty(), |_| {});
        });
    }

    #[test]
    fn border_rects() {
        let r = Rect::from_coords(0.0, 0.0, 100.0, 50.0);
        let top = get_resize_border_rect(&r, 0, 10.0, 4.0);
        assert_eq!((top.min.x, top.min.y, top.max.x, top.max.y), (10.0, -4.0, 90.0, 4.0));
        let right = get_resize_border_rect(&r, 1, 10.0, 4.0);
        assert_eq!((right.min.x, right.min.y, right.max.x, right.max.y), (96.0, 10.0, 104.0, 40.0));
        let left_drawn = get_resize_border_rect(&r, 3, 0.0, 0.0);
        assert_eq!((left_drawn.min.x, left_drawn.min.y, left_drawn.max.x, left_drawn.max.y), (0.0, 0.0, 0.0, 49.0));
    }

    #[test]
    fn resize_ids_are_distinct() {
        let mut ctx = Context::new_headless();
        frame(&mut ctx);
        let w = ctx.find_window_by_name("Resizable").unwrap();
        let ids: Vec<Id> = (0..8).map(|n| ctx.get_window_resize_id(w, n)).collect();
        for i in 0..8 {
            for j in i + 1..8 {
                assert_ne!(ids[i], ids[j]);
            }
        }
    }

    #[test]
    fn drag_lower_right_grip() {
        let mut ctx = Context::new_headless();
        frame(&mut ctx);
        ctx.io.mouse_move(297.0, 247.0);
        frame(&mut ctx);
        ctx.io.mouse_down(MouseButton::Left);
        frame(&mut ctx);
        let w = ctx.find_window_by_name("Resizable").unwrap();
        assert_eq!(ctx.get_active_id(), ctx.get_window_resize_id(w, 0));
        ctx.io.mouse_move(347.0, 277.0);
        frame(&mut ctx);
        assert_eq!((ctx.get_window(w).size().x, ctx.get_window(w).size().y), (250.0, 180.0));
        assert_eq!((ctx.get_window(w).pos().x, ctx.get_window(w).pos().y), (100.0, 100.0));
        ctx.io.mouse_up(MouseButton::Left);
        frame(&mut ctx);
        assert!(ctx.get_active_id().is_none());
        assert_eq!((ctx.get_window(w).size().x, ctx.get_window(w).size().y), (250.0, 180.0));
    }

    #[test]
    fn drag_window_body_moves_it() {
        let mut ctx = Context::new_headless();
        frame(&mut ctx);
        ctx.io.mouse_move(150.0, 200.0);
        frame(&mut ctx);
        ctx.io.mouse_down(MouseButton::Left);
        frame(&mut ctx);
        let w = ctx.find_window_by_name("Resizable").unwrap();
        assert_eq!(ctx.get_moving_window(), Some(w));
        ctx.io.mouse_move(170.0, 210.0);
        frame(&mut ctx);
        assert_eq!((ctx.get_window(w).pos().x, ctx.get_window(w).pos().y), (120.0, 110.0));
        ctx.io.mouse_up(MouseButton::Left);
        frame(&mut ctx);
        assert_eq!(ctx.get_moving_window(), None);
        assert!(ctx.get_active_id().is_none());
    }

    #[test]
    fn no_move_window_keeps_its_position() {
        let mut ctx = Context::new_headless();
        let frame = |ctx: &mut Context| {
            ctx.frame(|ctx| {
                ctx.set_next_window_pos(vec2(100.0, 100.0), Cond::FIRST_USE_EVER, vec2(0.0, 0.0));
                ctx.set_next_window_size(vec2(200.0, 150.0), Cond::FIRST_USE_EVER);
                ctx.window("Pinned", WindowFlags::NO_MOVE, |_| {});
            });
        };
        frame(&mut ctx);
        ctx.io.mouse_move(150.0, 200.0);
        frame(&mut ctx);
        ctx.io.mouse_down(MouseButton::Left);
        frame(&mut ctx);
        let w = ctx.find_window_by_name("Pinned").unwrap();
        assert_eq!(ctx.get_moving_window(), None);
        assert_eq!(ctx.get_active_id(), ctx.get_window(w).move_id);
        ctx.io.mouse_move(170.0, 210.0);
        frame(&mut ctx);
        assert_eq!((ctx.get_window(w).pos().x, ctx.get_window(w).pos().y), (100.0, 100.0));
    }

    #[test]
    fn windows_are_clamped_into_the_display() {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            ctx.set_next_window_size(vec2(200.0, 150.0), Cond::ALWAYS);
            ctx.window("Stray", WindowFlags::empty(), |_| {});
        });
        let w = ctx.find_window_by_name("Stray").unwrap();
        ctx.set_window_pos_by_name("Stray", vec2(2000.0, -1000.0), Cond::ALWAYS);
        ctx.frame(|ctx| {
            ctx.set_next_window_size(vec2(200.0, 150.0), Cond::ALWAYS);
            ctx.window("Stray", WindowFlags::empty(), |_| {});
        });
        let pos = ctx.get_window(w).pos();
        assert_eq!(pos.x, 800.0 - 19.0);
        assert_eq!(pos.y, 19.0 - 150.0);
    }
}
