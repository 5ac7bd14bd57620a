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
use crate::*;

/// Seconds the wheel keeps scrolling the same window once started.
const WHEELING_WINDOW_LOCK_TIMER: f32 = 2.0;

fn calc_scroll_edge_snap(target: f32, snap_min: f32, snap_max: f32, snap_threshold: f32, center_ratio: f32) -> f32 {
    if target <= snap_min + snap_threshold {
        return snap_min + (target - snap_min) * center_ratio;
    }
    if target >= snap_max - snap_threshold {
        return target + (snap_max - target) * center_ratio;
    }
    target
}

fn saturate(f: f32) -> f32 { f.clamp(0.0, 1.0) }

impl Context {
    /// Scroll the window will have once its pending scroll target is applied, clamped to `[0, scroll_max]`.
    pub(crate) fn calc_next_scroll_from_scroll_target_and_clamp(&self, idx: WindowIdx) -> Vec2f {
        let w = &self.windows[idx.0];
        let mut scroll = w.scroll;
        if w.scroll_target.x < f32::MAX {
            let decoration_total_width = w.scrollbar_sizes.x;
            let center_ratio = w.scroll_target_center_ratio.x;
            let mut target = w.scroll_target.x;
            if w.scroll_target_edge_snap_dist.x > 0.0 {
                let snap_max = w.scroll_max.x + w.size_full.x - decoration_total_width;
                target = calc_scroll_edge_snap(target, 0.0, snap_max, w.scroll_target_edge_snap_dist.x, center_ratio);
            }
            scroll.x = target - center_ratio * (w.size_full.x - decoration_total_width);
        }
        if w.scroll_target.y < f32::MAX {
            let decoration_total_height = w.title_bar_height(self.font_size, &self.style) + w.menu_bar_height(self.font_size, &self.style) + w.scrollbar_sizes.y;
            let center_ratio = w.scroll_target_center_ratio.y;
            let mut target = w.scroll_target.y;
            if w.scroll_target_edge_snap_dist.y > 0.0 {
                let snap_max = w.scroll_max.y + w.size_full.y - decoration_total_height;
                target = calc_scroll_edge_snap(target, 0.0, snap_max, w.scroll_target_edge_snap_dist.y, center_ratio);
            }
            scroll.y = target - center_ratio * (w.size_full.y - decoration_total_height);
        }
        scroll.x = scroll.x.max(0.0).floor();
        scroll.y = scroll.y.max(0.0).floor();
        if !w.collapsed && !w.skip_items {
            scroll.x = scroll.x.min(w.scroll_max.x);
            scroll.y = scroll.y.min(w.scroll_max.y);
        }
        scroll
    }

    pub(crate) fn set_window_scroll_x(&mut self, idx: WindowIdx, scroll_x: f32) {
        let w = &mut self.windows[idx.0];
        w.scroll_target.x = scroll_x;
        w.scroll_target_center_ratio.x = 0.0;
        w.scroll_target_edge_snap_dist.x = 0.0;
    }

    pub(crate) fn set_window_scroll_y(&mut self, idx: WindowIdx, scroll_y: f32) {
        let w = &mut self.windows[idx.0];
        w.scroll_target.y = scroll_y;
        w.scroll_target_center_ratio.y = 0.0;
        w.scroll_target_edge_snap_dist.y = 0.0;
    }

    pub(crate) fn set_window_scroll_from_pos_x(&mut self, idx: WindowIdx, local_x: f32, center_x_ratio: f32) {
        assert!((0.0..=1.0).contains(&center_x_ratio), "center ratio out of range: {}", center_x_ratio);
        let w = &mut self.windows[idx.0];
        w.scroll_target.x = (local_x + w.scroll.x).floor();
        w.scroll_target_center_ratio.x = center_x_ratio;
        w.scroll_target_edge_snap_dist.x = 0.0;
    }

    pub(crate) fn set_window_scroll_from_pos_y(&mut self, idx: WindowIdx, local_y: f32, center_y_ratio: f32) {
        assert!((0.0..=1.0).contains(&center_y_ratio), "center ratio out of range: {}", center_y_ratio);
        let decoration_up_height = {
            let w = &self.windows[idx.0];
            w.title_bar_height(self.font_size, &self.style) + w.menu_bar_height(self.font_size, &self.style)
        };
        let w = &mut self.windows[idx.0];
        // positions are relative to the window, the title and menu bars are not scrolled
        let local_y = local_y - decoration_up_height;
        w.scroll_target.y = (local_y + w.scroll.y).floor();
        w.scroll_target_center_ratio.y = center_y_ratio;
        w.scroll_target_edge_snap_dist.y = 0.0;
    }

    /// Horizontal scroll of the current window.
    pub fn get_scroll_x(&self) -> f32 { self.current_window_ref().scroll.x }

    /// Vertical scroll of the current window.
    pub fn get_scroll_y(&self) -> f32 { self.current_window_ref().scroll.y }

    /// Maximum horizontal scroll of the current window.
    pub fn get_scroll_max_x(&self) -> f32 { self.current_window_ref().scroll_max.x }

    /// Maximum vertical scroll of the current window.
    pub fn get_scroll_max_y(&self) -> f32 { self.current_window_ref().scroll_max.y }

    /// Requests a horizontal scroll, applied on the next `begin` of the current window.
    pub fn set_scroll_x(&mut self, scroll_x: f32) {
        let idx = self.current_window_idx();
        self.set_window_scroll_x(idx, scroll_x);
    }

    /// Requests a vertical scroll, applied on the next `begin` of the current window.
    pub fn set_scroll_y(&mut self, scroll_y: f32) {
        let idx = self.current_window_idx();
        self.set_window_scroll_y(idx, scroll_y);
    }

    /// Scrolls so that window-local `local_x` ends up at `center_x_ratio` of the visible width.
    pub fn set_scroll_from_pos_x(&mut self, local_x: f32, center_x_ratio: f32) {
        let idx = self.current_window_idx();
        self.set_window_scroll_from_pos_x(idx, local_x, center_x_ratio);
    }

    /// Scrolls so that window-local `local_y` ends up at `center_y_ratio` of the visible height.
    pub fn set_scroll_from_pos_y(&mut self, local_y: f32, center_y_ratio: f32) {
        let idx = self.current_window_idx();
        self.set_window_scroll_from_pos_y(idx, local_y, center_y_ratio);
    }

    /// Scrolls to bring the last item into view. 0.0 is left, 0.5 center, 1.0 right.
    pub fn set_scroll_here_x(&mut self, center_x_ratio: f32) {
        let idx = self.current_window_idx();
        let (spacing_x, target_pos_x, padding_x) = {
            let w = &self.windows[idx.0];
            let spacing_x = w.window_padding.x.max(self.style.item_spacing.x);
            let r = &w.dc.last_item_rect;
            let min = r.min.x - spacing_x;
            let max = r.max.x + spacing_x;
            (spacing_x, min + (max - min) * center_x_ratio - w.pos.x, w.window_padding.x)
        };
        self.set_window_scroll_from_pos_x(idx, target_pos_x, center_x_ratio);
        // snap to the edge when the item is close to it
        self.windows[idx.0].scroll_target_edge_snap_dist.x = (padding_x - spacing_x).max(0.0);
    }

    /// Scrolls to bring the current line into view. 0.0 is top, 0.5 center, 1.0 bottom.
    pub fn set_scroll_here_y(&mut self, center_y_ratio: f32) {
        let idx = self.current_window_idx();
        let (spacing_y, target_pos_y, padding_y) = {
            let w = &self.windows[idx.0];
            let spacing_y = w.window_padding.y.max(self.style.item_spacing.y);
            let min = w.dc.cursor_pos_prev_line.y - spacing_y;
            let max = w.dc.cursor_pos_prev_line.y + w.dc.prev_line_size.y + spacing_y;
            (spacing_y, min + (max - min) * center_y_ratio - w.pos.y, w.window_padding.y)
        };
        self.set_window_scroll_from_pos_y(idx, target_pos_y, center_y_ratio);
        self.windows[idx.0].scroll_target_edge_snap_dist.y = (padding_y - spacing_y).max(0.0);
    }

    /// Sets scroll targets so `item_rect` becomes visible, walking up through parent windows.
    /// Returns the scroll delta that will be applied.
    pub(crate) fn scroll_to_bring_rect_into_view(&mut self, idx: WindowIdx, item_rect: &Rect) -> Vec2f {
        let (window_rect, scrollbar_x, pos, is_child, parent) = {
            let w = &self.windows[idx.0];
            let inner = w.inner_rect;
            (Rect::from_coords(inner.min.x - 1.0, inner.min.y - 1.0, inner.max.x + 1.0, inner.max.y + 1.0), w.scrollbar_x, w.pos, w.flags.is_child(), w.parent_window)
        };
        let spacing = self.style.item_spacing;
        let mut delta_scroll = vec2(0.0, 0.0);
        if !window_rect.contains_rect(item_rect) {
            if scrollbar_x && item_rect.min.x < window_rect.min.x {
                self.set_window_scroll_from_pos_x(idx, item_rect.min.x - pos.x - spacing.x, 0.0);
            } else if scrollbar_x && item_rect.max.x >= window_rect.max.x {
                self.set_window_scroll_from_pos_x(idx, item_rect.max.x - pos.x + spacing.x, 1.0);
            }
            if item_rect.min.y < window_rect.min.y {
                self.set_window_scroll_from_pos_y(idx, item_rect.min.y - pos.y - spacing.y, 0.0);
            } else if item_rect.max.y >= window_rect.max.y {
                self.set_window_scroll_from_pos_y(idx, item_rect.max.y - pos.y + spacing.y, 1.0);
            }
            let next_scroll = self.calc_next_scroll_from_scroll_target_and_clamp(idx);
            let scroll = self.windows[idx.0].scroll;
            delta_scroll = vec2(next_scroll.x - scroll.x, next_scroll.y - scroll.y);
        }

        if is_child {
            if let Some(parent) = parent {
                let moved = Rect::from_coords(item_rect.min.x - delta_scroll.x, item_rect.min.y - delta_scroll.y, item_rect.max.x - delta_scroll.x, item_rect.max.y - delta_scroll.y);
                let parent_delta = self.scroll_to_bring_rect_into_view(parent, &moved);
                delta_scroll.x += parent_delta.x;
                delta_scroll.y += parent_delta.y;
            }
        }
        delta_scroll
    }

    fn get_window_scrollbar_rect(&self, idx: WindowIdx, axis: usize) -> Rect {
        let w = &self.windows[idx.0];
        let outer = w.rect();
        let inner = w.inner_rect;
        let border_size = w.window_border_size;
        let scrollbar_size = vec2_axis(w.scrollbar_sizes, axis ^ 1);
        assert!(scrollbar_size > 0.0);
        if axis == 0 {
            Rect::from_coords(inner.min.x, outer.min.y.max(outer.max.y - border_size - scrollbar_size), inner.max.x, outer.max.y)
        } else {
            Rect::from_coords(outer.min.x.max(outer.max.x - border_size - scrollbar_size), inner.min.y, outer.max.x, inner.max.y)
        }
    }

    /// ID of the scrollbar of `idx` along `axis` (0 horizontal, 1 vertical).
    pub fn get_window_scrollbar_id(&self, idx: WindowIdx, axis: usize) -> Id { self.windows[idx.0].get_id(if axis == 0 { "#SCROLLX" } else { "#SCROLLY" }) }

    /// Submits the scrollbar of the current window along `axis`.
    pub(crate) fn scrollbar(&mut self, axis: usize) {
        let idx = self.current_window_idx();
        let id = self.get_window_scrollbar_id(idx, axis);
        self.keep_alive_id(id);

        let bb = self.get_window_scrollbar_rect(idx, axis);
        let (size_avail, size_contents, mut scroll_v) = {
            let w = &self.windows[idx.0];
            let size_avail = vec2_axis(w.inner_rect.max, axis) - vec2_axis(w.inner_rect.min, axis);
            let size_contents = vec2_axis(w.content_size, axis) + vec2_axis(w.window_padding, axis) * 2.0;
            (size_avail, size_contents, vec2_axis(w.scroll, axis))
        };
        self.scrollbar_ex(&bb, id, axis, &mut scroll_v, size_avail, size_contents);
        vec2_set_axis(&mut self.windows[idx.0].scroll, axis, scroll_v);
    }

    /// Scrollbar behavior and rendering inside `bb_frame`. `scroll_v` is updated while the grab is dragged.
    /// Returns `true` while held.
    pub fn scrollbar_ex(&mut self, bb_frame: &Rect, id: Id, axis: usize, scroll_v: &mut f32, size_avail_v: f32, size_contents_v: f32) -> bool {
        let idx = self.current_window_idx();
        if self.windows[idx.0].skip_items {
            return false;
        }
        let bb_frame_width = bb_frame.width();
        let bb_frame_height = bb_frame.height();
        if bb_frame_width <= 0.0 || bb_frame_height <= 0.0 {
            return false;
        }

        // fade out and disable the grab when too small
        let mut alpha = 1.0;
        if axis == 1 && bb_frame_height < self.font_size + self.style.frame_padding.y * 2.0 {
            alpha = saturate((bb_frame_height - self.font_size) / (self.style.frame_padding.y * 2.0));
        }
        if alpha <= 0.0 {
            return false;
        }
        let allow_interaction = alpha >= 1.0;

        let mut bb = *bb_frame;
        bb.expand_xy(vec2(-((bb_frame_width - 2.0) * 0.5).floor().clamp(0.0, 3.0), -((bb_frame_height - 2.0) * 0.5).floor().clamp(0.0, 3.0)));
        let scrollbar_size_v = if axis == 0 { bb.width() } else { bb.height() };

        assert!(size_contents_v.max(size_avail_v) > 0.0);
        let win_size_v = size_contents_v.max(size_avail_v).max(1.0);
        let grab_h_pixels = (scrollbar_size_v * (size_avail_v / win_size_v)).clamp(self.style.grab_min_size.min(scrollbar_size_v), scrollbar_size_v);
        let grab_h_norm = grab_h_pixels / scrollbar_size_v;

        let (_, hovered, held) = self.button_behavior(&bb, id, ButtonFlags::NO_NAV_FOCUS);

        let scroll_max = (size_contents_v - size_avail_v).max(1.0);
        let mut scroll_ratio = saturate(*scroll_v / scroll_max);
        let mut grab_v_norm = scroll_ratio * (scrollbar_size_v - grab_h_pixels) / scrollbar_size_v;
        if held && allow_interaction && grab_h_norm < 1.0 {
            let scrollbar_pos_v = vec2_axis(bb.min, axis);
            let mouse_pos_v = vec2_axis(self.io.mouse_pos, axis);
            let clicked_v_norm = saturate((mouse_pos_v - scrollbar_pos_v) / scrollbar_size_v);
            self.set_hovered_id(id);

            // clicking outside the grab jumps to that position, clicking the grab keeps the offset
            let mut seek_absolute = false;
            if self.active_id_is_just_activated {
                seek_absolute = clicked_v_norm < grab_v_norm || clicked_v_norm > grab_v_norm + grab_h_norm;
                self.scrollbar_click_delta_to_grab_center = if seek_absolute { 0.0 } else { clicked_v_norm - grab_v_norm - grab_h_norm * 0.5 };
            }

            let scroll_v_norm = saturate((clicked_v_norm - self.scrollbar_click_delta_to_grab_center - grab_h_norm * 0.5) / (1.0 - grab_h_norm));
            *scroll_v = (scroll_v_norm * scroll_max).round();

            scroll_ratio = saturate(*scroll_v / scroll_max);
            grab_v_norm = scroll_ratio * (scrollbar_size_v - grab_h_pixels) / scrollbar_size_v;
            if seek_absolute {
                self.scrollbar_click_delta_to_grab_center = clicked_v_norm - grab_v_norm - grab_h_norm * 0.5;
            }
        }

        let bg_col = self.get_color(StyleColor::ScrollbarBg, 1.0);
        let grab_col = self.get_color(
            if held {
                StyleColor::ScrollbarGrabActive
            } else if hovered {
                StyleColor::ScrollbarGrabHovered
            } else {
                StyleColor::ScrollbarGrab
            },
            alpha,
        );
        let rounding = self.style.scrollbar_rounding;
        let w = &mut self.windows[idx.0];
        let window_rounding = w.window_rounding;
        w.draw_list.add_rect_filled(bb_frame.min, bb_frame.max, bg_col, window_rounding);
        let grab_rect = if axis == 0 {
            let x = bb.min.x + (bb.max.x - bb.min.x) * grab_v_norm;
            Rect::from_coords(x, bb.min.y, x + grab_h_pixels, bb.max.y)
        } else {
            let y = bb.min.y + (bb.max.y - bb.min.y) * grab_v_norm;
            Rect::from_coords(bb.min.x, y, bb.max.x, y + grab_h_pixels)
        };
        w.draw_list.add_rect_filled(grab_rect.min, grab_rect.max, grab_col, rounding);
        held
    }

    fn start_lock_wheeling_window(&mut self, idx: WindowIdx) {
        if self.wheeling_window == Some(idx) {
            return;
        }
        self.wheeling_window = Some(idx);
        self.wheeling_window_ref_mouse_pos = self.io.mouse_pos;
        self.wheeling_window_timer = WHEELING_WINDOW_LOCK_TIMER;
    }

    /// Child windows that cannot scroll pass the wheel to their parent.
    fn wheel_target_for_axis(&self, mut idx: WindowIdx, axis: usize) -> WindowIdx {
        loop {
            let w = &self.windows[idx.0];
            let blocked = w.flags.contains(WindowFlags::NO_SCROLL_WITH_MOUSE) && !w.flags.contains(WindowFlags::NO_MOUSE_INPUTS);
            match w.parent_window {
                Some(parent) if w.flags.is_child() && (vec2_axis(w.scroll_max, axis) == 0.0 || blocked) => idx = parent,
                _ => return idx,
            }
        }
    }

    pub(crate) fn update_mouse_wheel(&mut self) {
        // the lock is released when the mouse moves or the timer elapses
        if self.wheeling_window.is_some() {
            self.wheeling_window_timer -= self.io.delta_time;
            let threshold = self.io.mouse_drag_threshold;
            if self.is_mouse_pos_valid(None) && vec2_length_sqr(self.io.mouse_pos - self.wheeling_window_ref_mouse_pos) > threshold * threshold {
                self.wheeling_window_timer = 0.0;
            }
            if self.wheeling_window_timer <= 0.0 {
                self.wheeling_window = None;
                self.wheeling_window_timer = 0.0;
            }
        }

        if self.io.mouse_wheel == 0.0 && self.io.mouse_wheel_h == 0.0 {
            return;
        }
        let window = match self.wheeling_window.or(self.hovered_window) {
            Some(w) if !self.windows[w.0].collapsed => w,
            _ => return,
        };

        let wheel_y = if self.io.mouse_wheel != 0.0 && !self.io.key_shift { self.io.mouse_wheel } else { 0.0 };
        if wheel_y != 0.0 && !self.io.key_ctrl {
            self.start_lock_wheeling_window(window);
            let target = self.wheel_target_for_axis(window, 1);
            let w = &self.windows[target.0];
            if !w.flags.intersects(WindowFlags::NO_SCROLL_WITH_MOUSE | WindowFlags::NO_MOUSE_INPUTS) {
                let max_step = w.inner_rect.height() * 0.67;
                let scroll_step = (5.0 * self.font_size).min(max_step).floor();
                let scroll_y = w.scroll.y - wheel_y * scroll_step;
                self.set_window_scroll_y(target, scroll_y);
            }
        }

        // shift turns the vertical wheel into a horizontal one
        let wheel_x = if self.io.mouse_wheel_h != 0.0 && !self.io.key_shift {
            self.io.mouse_wheel_h
        } else if self.io.mouse_wheel != 0.0 && self.io.key_shift {
            self.io.mouse_wheel
        } else {
            0.0
        };
        if wheel_x != 0.0 && !self.io.key_ctrl {
            self.start_lock_wheeling_window(window);
            let target = self.wheel_target_for_axis(window, 0);
            let w = &self.windows[target.0];
            if !w.flags.intersects(WindowFlags::NO_SCROLL_WITH_MOUSE | WindowFlags::NO_MOUSE_INPUTS) {
                let max_step = w.inner_rect.width() * 0.67;
                let scroll_step = (2.0 * self.font_size).min(max_step).floor();
                let scroll_x = w.scroll.x - wheel_x * scroll_step;
                self.set_window_scroll_x(target, scroll_x);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tall_window(ctx: &mut Context, f: impl FnOnce(&mut Context)) {
        ctx.frame(|ctx| {
            ctx.set_next_window_pos(vec2(0.0, 0.0), Cond::ALWAYS, vec2(0.0, 0.0));
            ctx.set_next_window_size(vec2(200.0, 150.0), Cond::ALWAYS);
            ctx.window("Scrolling", WindowFlags::empty(), |ctx| {
                ctx.dummy(vec2(100.0, 1000.0));
                f(ctx);
            });
        });
    }

    #[test]
    fn edge_snap() {
        assert_eq!(calc_scroll_edge_snap(5.0, 0.0, 100.0, 8.0, 0.0), 0.0);
        assert_eq!(calc_scroll_edge_snap(95.0, 0.0, 100.0, 8.0, 1.0), 100.0);
        assert_eq!(calc_scroll_edge_snap(50.0, 0.0, 100.0, 8.0, 0.5), 50.0);
    }

    #[test]
    fn scroll_max_follows_contents() {
        let mut ctx = Context::new_headless();
        tall_window(&mut ctx, |_| {});
        tall_window(&mut ctx, |_| {});
        let w = ctx.find_window_by_name("Scrolling").unwrap();
        let win = ctx.get_window(w);
        let inner_height = 150.0 - win.title_bar_height(ctx.font_size, &ctx.style);
        let expected = 1000.0 + ctx.style.window_padding.y * 2.0 - inner_height;
        assert_eq!(win.scroll_max().y, expected);
        assert_eq!(win.scroll_max().x, 0.0);
    }

    #[test]
    fn scroll_from_pos_discounts_title_bar() {
        let mut ctx = Context::new_headless();
        tall_window(&mut ctx, |_| {});
        tall_window(&mut ctx, |ctx| ctx.set_scroll_from_pos_y(500.0, 0.0));
        tall_window(&mut ctx, |_| {});
        let w = ctx.find_window_by_name("Scrolling").unwrap();
        let title = ctx.get_window(w).title_bar_height(ctx.font_size, &ctx.style);
        assert_eq!(ctx.get_window(w).scroll().y, (500.0 - title).floor());
    }

    #[test]
    fn mouse_wheel_scrolls_hovered_window() {
        let mut ctx = Context::new_headless();
        tall_window(&mut ctx, |_| {});
        ctx.io.mouse_move(100.0, 100.0);
        tall_window(&mut ctx, |_| {});
        ctx.io.scroll(0.0, -1.0);
        tall_window(&mut ctx, |_| {});
        let w = ctx.find_window_by_name("Scrolling").unwrap();
        assert_eq!(ctx.wheeling_window, Some(w));
        assert_eq!(ctx.get_window(w).scroll().y, (5.0 * ctx.font_size).floor());
    }

    #[test]
    fn wheel_is_ignored_with_no_scroll_with_mouse() {
        let mut ctx = Context::new_headless();
        let frame = |ctx: &mut Context| {
            ctx.frame(|ctx| {
                ctx.set_next_window_pos(vec2(0.0, 0.0), Cond::ALWAYS, vec2(0.0, 0.0));
                ctx.set_next_window_size(vec2(200.0, 150.0), Cond::ALWAYS);
                ctx.window("Locked", WindowFlags::NO_SCROLL_WITH_MOUSE, |ctx| ctx.dummy(vec2(100.0, 1000.0)));
            });
        };
        frame(&mut ctx);
        ctx.io.mouse_move(100.0, 100.0);
        frame(&mut ctx);
        ctx.io.scroll(0.0, -1.0);
        frame(&mut ctx);
        let w = ctx.find_window_by_name("Locked").unwrap();
        assert_eq!(ctx.get_window(w).scroll().y, 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]
        #[test]
        fn scroll_is_clamped(target_x in -1.0e6f32..1.0e6, target_y in -1.0e6f32..1.0e6) {
            let mut ctx = Context::new_headless();
            tall_window(&mut ctx, |_| {});
            tall_window(&mut ctx, |ctx| {
                ctx.set_scroll_x(target_x);
                ctx.set_scroll_y(target_y);
            });
            tall_window(&mut ctx, |_| {});
            let w = ctx.find_window_by_name("Scrolling").unwrap();
            let win = ctx.get_window(w);
            prop_assert!(win.scroll().x >= 0.0 && win.scroll().x <= win.scroll_max().x);
            prop_assert!(win.scroll().y >= 0.0 && win.scroll().y <= win.scroll_max().y);
            if target_y >= win.scroll_max().y {
                prop_assert_eq!(win.scroll().y, win.scroll_max().y);
            }
            if target_y <= 0.0 {
                prop_assert_eq!(win.scroll().y, 0.0);
            }
        }
    }
}
