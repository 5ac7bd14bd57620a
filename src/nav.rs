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
use crate::io::calc_typematic_repeat_amount;
use crate::*;

/// Delay before the CTRL+TAB highlight shows up, so a quick tap does not flash it.
const NAV_WINDOWING_HIGHLIGHT_DELAY: f32 = 0.20;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub(crate) struct NavMoveFlags : u32 {
        /// Leaving the window on the left/right comes back on the other side of the same row.
        const LOOP_X = 1 << 0;
        /// Leaving the window on the top/bottom comes back on the other side of the same column.
        const LOOP_Y = 1 << 1;
        /// Leaving on the left/right moves to the previous/next row.
        const WRAP_X = 1 << 2;
        /// Leaving on the top/bottom moves to the previous/next column.
        const WRAP_Y = 1 << 3;
        const ALLOW_CURRENT_NAV_ID = 1 << 4;
        /// Also score the items that are mostly visible (page up/down).
        const ALSO_SCORE_VISIBLE_SET = 1 << 5;
        const SCROLL_TO_EDGE = 1 << 6;
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub(crate) struct NavDirSourceFlags : u32 {
        const KEYBOARD = 1 << 0;
        const PAD_DPAD = 1 << 1;
        const PAD_LSTICK = 1 << 2;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum NavForward {
    None,
    ForwardQueued,
    ForwardActive,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum InputReadMode {
    Down,
    Pressed,
    Released,
    Repeat,
    RepeatSlow,
}

#[derive(Copy, Clone, Debug)]
/// Best navigation candidate found so far for a move or init request.
pub struct NavItemData {
    /// Window holding the candidate.
    pub window: Option<WindowIdx>,
    /// Candidate item.
    pub id: Id,
    /// Focus scope the candidate was submitted in.
    pub focus_scope_id: Id,
    /// Candidate rectangle, relative to its window.
    pub rect_rel: Rect,
    /// Box distance to the scoring rectangle.
    pub dist_box: f32,
    /// Center distance to the scoring rectangle.
    pub dist_center: f32,
    /// Axial distance, used as a fallback in menu bars.
    pub dist_axial: f32,
}

impl Default for NavItemData {
    fn default() -> Self {
        Self {
            window: None,
            id: Id::NONE,
            focus_scope_id: Id::NONE,
            rect_rel: Rect::default(),
            dist_box: f32::MAX,
            dist_center: f32::MAX,
            dist_axial: f32::MAX,
        }
    }
}

impl NavItemData {
    pub(crate) fn clear(&mut self) { *self = Self::default(); }
}

fn nav_score_item_dist_interval(a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    if a1 < b0 {
        return a1 - b0;
    }
    if b1 < a0 {
        return a0 - b1;
    }
    0.0
}

fn dir_quadrant_from_delta(dx: f32, dy: f32) -> Dir {
    if dx.abs() > dy.abs() {
        return if dx > 0.0 { Dir::Right } else { Dir::Left };
    }
    if dy > 0.0 { Dir::Down } else { Dir::Up }
}

/// Clips `r` against `clip_rect` on the axis perpendicular to the move.
fn nav_clamp_rect_to_visible_area_for_move_dir(move_dir: Option<Dir>, r: &mut Rect, clip_rect: &Rect) {
    match move_dir {
        Some(Dir::Left) | Some(Dir::Right) => {
            r.min.y = r.min.y.clamp(clip_rect.min.y, clip_rect.max.y);
            r.max.y = r.max.y.clamp(clip_rect.min.y, clip_rect.max.y);
        }
        _ => {
            r.min.x = r.min.x.clamp(clip_rect.min.x, clip_rect.max.x);
            r.max.x = r.max.x.clamp(clip_rect.min.x, clip_rect.max.x);
        }
    }
}

fn rect_rel(r: &Rect, origin: Vec2f) -> Rect { Rect::from_coords(r.min.x - origin.x, r.min.y - origin.y, r.max.x - origin.x, r.max.y - origin.y) }

impl Context {
    pub(crate) fn get_nav_input_amount(&self, n: NavInput, mode: InputReadMode) -> f32 {
        let i = n.index();
        if mode == InputReadMode::Down {
            return self.io.nav_inputs[i];
        }
        let t = self.io.nav_inputs_down_duration[i];
        if t < 0.0 && mode == InputReadMode::Released {
            return if self.io.nav_inputs_down_duration_prev[i] >= 0.0 { 1.0 } else { 0.0 };
        }
        if t < 0.0 {
            return 0.0;
        }
        let (delay, rate) = (self.io.key_repeat_delay, self.io.key_repeat_rate);
        let dt = self.io.delta_time;
        match mode {
            InputReadMode::Pressed => {
                if t == 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            InputReadMode::Repeat => calc_typematic_repeat_amount(t - dt, t, delay * 0.72, rate * 0.80) as f32,
            InputReadMode::RepeatSlow => calc_typematic_repeat_amount(t - dt, t, delay * 1.25, rate * 2.00) as f32,
            _ => 0.0,
        }
    }

    /// Directional input from the selected sources, scaled by the slow/fast tweak inputs when they are held.
    pub(crate) fn get_nav_input_amount_2d(&self, dir_sources: NavDirSourceFlags, mode: InputReadMode, slow_factor: f32, fast_factor: f32) -> Vec2f {
        let amount = |neg: NavInput, pos: NavInput| self.get_nav_input_amount(pos, mode) - self.get_nav_input_amount(neg, mode);
        let mut delta = vec2(0.0, 0.0);
        if dir_sources.contains(NavDirSourceFlags::KEYBOARD) {
            delta.x += amount(NavInput::KeyLeft, NavInput::KeyRight);
            delta.y += amount(NavInput::KeyUp, NavInput::KeyDown);
        }
        if dir_sources.contains(NavDirSourceFlags::PAD_DPAD) {
            delta.x += amount(NavInput::DpadLeft, NavInput::DpadRight);
            delta.y += amount(NavInput::DpadUp, NavInput::DpadDown);
        }
        if dir_sources.contains(NavDirSourceFlags::PAD_LSTICK) {
            delta.x += amount(NavInput::LStickLeft, NavInput::LStickRight);
            delta.y += amount(NavInput::LStickUp, NavInput::LStickDown);
        }
        if slow_factor != 0.0 && self.is_nav_input_down(NavInput::TweakSlow) {
            delta = vec2_scale(delta, slow_factor);
        }
        if fast_factor != 0.0 && self.is_nav_input_down(NavInput::TweakFast) {
            delta = vec2_scale(delta, fast_factor);
        }
        delta
    }

    pub(crate) fn is_nav_input_down(&self, n: NavInput) -> bool { self.io.nav_inputs[n.index()] > 0.0 }

    pub(crate) fn is_nav_input_test(&self, n: NavInput, mode: InputReadMode) -> bool { self.get_nav_input_amount(n, mode) > 0.0 }

    fn nav_update_any_request_flag(&mut self) {
        self.nav_any_request = self.nav_move_request || self.nav_init_request;
        if self.nav_any_request {
            assert!(self.nav_window.is_some(), "navigation request without a focused window");
        }
    }

    /// Moves the navigation cursor to `id` inside the focused window.
    pub fn set_nav_id(&mut self, id: Id, nav_layer: NavLayer, focus_scope_id: Id) {
        let nav_window = match self.nav_window {
            Some(w) => w,
            None => panic!("set_nav_id() without a focused window"),
        };
        self.nav_id = id;
        self.nav_focus_scope_id = focus_scope_id;
        self.windows[nav_window.0].nav_last_ids[nav_layer.index()] = id;
    }

    pub(crate) fn set_nav_id_with_rect_rel(&mut self, id: Id, nav_layer: NavLayer, focus_scope_id: Id, rect_rel: Rect) {
        self.set_nav_id(id, nav_layer, focus_scope_id);
        if let Some(w) = self.nav_window {
            self.windows[w.0].nav_rect_rel[nav_layer.index()] = rect_rel;
        }
        self.nav_mouse_pos_dirty = true;
        self.nav_disable_highlight = false;
        self.nav_disable_mouse_hover = true;
    }

    /// Gives the navigation focus to `id` in `window`, using the layer and focus scope the window is
    /// currently submitting into.
    pub fn set_focus_id(&mut self, id: Id, window: WindowIdx) {
        assert!(id.is_some(), "set_focus_id() needs an id");
        let (nav_layer, focus_scope) = {
            let w = &self.windows[window.0];
            (w.dc.nav_layer_current, w.dc.nav_focus_scope_id_current)
        };
        if self.nav_window != Some(window) {
            self.nav_init_request = false;
        }
        self.nav_window = Some(window);
        self.nav_id = id;
        self.nav_layer = nav_layer;
        self.nav_focus_scope_id = focus_scope;
        let w = &mut self.windows[window.0];
        w.nav_last_ids[nav_layer.index()] = id;
        if w.dc.last_item_id == id {
            w.nav_rect_rel[nav_layer.index()] = rect_rel(&w.dc.last_item_rect, w.pos);
        }
        if self.active_id_source == InputSource::Nav || self.active_id_source == InputSource::NavKeyboard || self.active_id_source == InputSource::NavGamepad {
            self.nav_disable_mouse_hover = true;
        } else {
            self.nav_disable_highlight = true;
        }
    }

    /// Starts a navigation scope: items submitted inside share the focus scope `id`.
    pub fn push_focus_scope(&mut self, id: Id) {
        let w = self.current_window_idx();
        self.focus_scope_stack.push(self.windows[w.0].dc.nav_focus_scope_id_current);
        self.windows[w.0].dc.nav_focus_scope_id_current = id;
    }

    /// Ends the scope opened by [`Context::push_focus_scope`].
    pub fn pop_focus_scope(&mut self) {
        let w = self.current_window_idx();
        let previous = match self.focus_scope_stack.pop() {
            Some(id) => id,
            None => panic!("pop_focus_scope() called too many times"),
        };
        self.windows[w.0].dc.nav_focus_scope_id_current = previous;
    }

    /// Runs `f` inside a focus scope.
    pub fn with_focus_scope<R>(&mut self, id: Id, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_focus_scope(id);
        let r = f(self);
        self.pop_focus_scope();
        r
    }

    /// Focus scope of the item holding the navigation focus.
    pub fn get_focused_focus_scope(&self) -> Id { self.nav_focus_scope_id }

    /// Focus scope items are currently submitted into.
    pub fn get_focus_scope(&self) -> Id { self.current_window_ref().dc.nav_focus_scope_id_current }

    /// Requests the keyboard focus for the next item (`offset` 0), the previous one (-1) or a later one.
    pub fn set_keyboard_focus_here(&mut self, offset: i32) {
        assert!(offset >= -1, "set_keyboard_focus_here() offset must be >= -1");
        let w = self.current_window_idx();
        self.tab_focus_request_next_window = Some(w);
        self.tab_focus_request_next_counter_regular = self.windows[w.0].dc.focus_counter_regular + 1 + offset;
        self.tab_focus_request_next_counter_tab_stop = i32::MAX;
    }

    /// Makes the last item the default navigation focus of a window that just appeared.
    pub fn set_item_default_focus(&mut self) {
        let w = self.current_window_idx();
        if !self.windows[w.0].appearing {
            return;
        }
        let nav_window = match self.nav_window {
            Some(n) => n,
            None => return,
        };
        if nav_window == self.windows[w.0].root_window_for_nav
            && (self.nav_init_request || self.nav_init_result_id.is_some())
            && self.nav_layer == self.windows[nav_window.0].dc.nav_layer_current
        {
            let nw = &self.windows[nav_window.0];
            self.nav_init_request = false;
            self.nav_init_result_id = nw.dc.last_item_id;
            self.nav_init_result_rect_rel = rect_rel(&nw.dc.last_item_rect, nw.pos);
            self.nav_update_any_request_flag();
            if !self.is_item_visible() {
                self.set_scroll_here_y(0.5);
            }
        }
    }

    /// Counts a focusable item for TAB cycling. Returns `true` when the item should take the keyboard focus.
    pub(crate) fn focusable_item_register(&mut self, window: WindowIdx, id: Id) -> bool {
        let is_tab_stop = {
            let w = &mut self.windows[window.0];
            let is_tab_stop = !w.dc.item_flags.intersects(ItemFlags::NO_TAB_STOP | ItemFlags::DISABLED);
            w.dc.focus_counter_regular += 1;
            if is_tab_stop {
                w.dc.focus_counter_tab_stop += 1;
            }
            is_tab_stop
        };

        // TAB out of the active item
        if self.active_id == id && self.tab_focus_pressed && self.tab_focus_request_next_window.is_none() {
            self.tab_focus_request_next_window = Some(window);
            let step = if self.io.key_shift {
                if is_tab_stop { -1 } else { 0 }
            } else {
                1
            };
            self.tab_focus_request_next_counter_tab_stop = self.windows[window.0].dc.focus_counter_tab_stop + step;
        }

        if self.tab_focus_request_curr_window == Some(window) {
            let w = &self.windows[window.0];
            if w.dc.focus_counter_regular == self.tab_focus_request_curr_counter_regular {
                return true;
            }
            if is_tab_stop && w.dc.focus_counter_tab_stop == self.tab_focus_request_curr_counter_tab_stop {
                self.nav_just_tabbed_id = id;
                return true;
            }
            // another item is about to take the focus
            if self.active_id == id {
                self.clear_active_id();
            }
        }
        false
    }

    pub(crate) fn update_tab_focus(&mut self) {
        self.tab_focus_pressed = match self.nav_window {
            Some(w) => {
                let w = &self.windows[w.0];
                w.active && !w.flags.contains(WindowFlags::NO_NAV_INPUTS) && !self.io.key_ctrl && self.is_key_pressed(Key::Tab, true)
            }
            None => false,
        };
        if self.active_id.is_none() && self.tab_focus_pressed {
            self.tab_focus_request_next_window = self.nav_window;
            self.tab_focus_request_next_counter_regular = i32::MAX;
            self.tab_focus_request_next_counter_tab_stop = if self.nav_id.is_some() && self.nav_id_tab_counter != i32::MAX {
                self.nav_id_tab_counter + 1 + if self.io.key_shift { -1 } else { 1 }
            } else if self.io.key_shift {
                -1
            } else {
                0
            };
        }

        // the queued request becomes the current one
        self.tab_focus_request_curr_window = None;
        self.tab_focus_request_curr_counter_regular = i32::MAX;
        self.tab_focus_request_curr_counter_tab_stop = i32::MAX;
        if let Some(window) = self.tab_focus_request_next_window {
            self.tab_focus_request_curr_window = Some(window);
            let w = &self.windows[window.0];
            if self.tab_focus_request_next_counter_regular != i32::MAX && w.dc.focus_counter_regular != -1 {
                self.tab_focus_request_curr_counter_regular = self.tab_focus_request_next_counter_regular.rem_euclid(w.dc.focus_counter_regular + 1);
            }
            if self.tab_focus_request_next_counter_tab_stop != i32::MAX && w.dc.focus_counter_tab_stop != -1 {
                self.tab_focus_request_curr_counter_tab_stop = self.tab_focus_request_next_counter_tab_stop.rem_euclid(w.dc.focus_counter_tab_stop + 1);
            }
            self.tab_focus_request_next_window = None;
            self.tab_focus_request_next_counter_regular = i32::MAX;
            self.tab_focus_request_next_counter_tab_stop = i32::MAX;
        }
        self.nav_id_tab_counter = i32::MAX;
    }

    /// Scores `cand` (absolute coordinates) against the current move request. Updates `result` and
    /// returns `true` when the candidate is the new best.
    pub(crate) fn nav_score_item(&self, window: WindowIdx, result: &mut NavItemData, mut cand: Rect) -> bool {
        let w = &self.windows[window.0];
        if self.nav_layer != w.dc.nav_layer_current {
            return false;
        }
        let curr = self.nav_score_rect;
        let move_dir = match self.nav_move_dir {
            Some(d) => d,
            None => return false,
        };

        // entering a flattened child from its parent, only its visible part counts
        if w.parent_window.is_some() && w.parent_window == self.nav_window {
            if !w.clip_rect.overlaps(&cand) {
                return false;
            }
            cand.clip_with_full(&w.clip_rect);
        }

        // clipping on the perpendicular axis keeps columns apart
        nav_clamp_rect_to_visible_area_for_move_dir(self.nav_move_clip_dir, &mut cand, &w.clip_rect);

        let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;
        let mut dbx = nav_score_item_dist_interval(cand.min.x, cand.max.x, curr.min.x, curr.max.x);
        // vertically touching items keep using box distance
        let dby = nav_score_item_dist_interval(
            lerp(cand.min.y, cand.max.y, 0.2),
            lerp(cand.min.y, cand.max.y, 0.8),
            lerp(curr.min.y, curr.max.y, 0.2),
            lerp(curr.min.y, curr.max.y, 0.8),
        );
        if dby != 0.0 && dbx != 0.0 {
            dbx = dbx / 1000.0 + if dbx > 0.0 { 1.0 } else { -1.0 };
        }
        let dist_box = dbx.abs() + dby.abs();

        // off by a factor of two, only ever compared with itself
        let dcx = (cand.min.x + cand.max.x) - (curr.min.x + curr.max.x);
        let dcy = (cand.min.y + cand.max.y) - (curr.min.y + curr.max.y);
        let dist_center = dcx.abs() + dcy.abs();

        let (quadrant, dax, day, dist_axial) = if dbx != 0.0 || dby != 0.0 {
            (dir_quadrant_from_delta(dbx, dby), dbx, dby, dist_box)
        } else if dcx != 0.0 || dcy != 0.0 {
            (dir_quadrant_from_delta(dcx, dcy), dcx, dcy, dist_center)
        } else {
            // same box and same center: order of submission decides
            (if w.dc.last_item_id.raw() < self.nav_id.raw() { Dir::Left } else { Dir::Right }, 0.0, 0.0, 0.0)
        };

        let mut new_best = false;
        if quadrant == move_dir {
            if dist_box < result.dist_box {
                result.dist_box = dist_box;
                result.dist_center = dist_center;
                return true;
            }
            if dist_box == result.dist_box {
                if dist_center < result.dist_center {
                    result.dist_center = dist_center;
                    new_best = true;
                } else if dist_center == result.dist_center {
                    // later items are moved right/down by an infinitesimal amount
                    let d = if move_dir.axis() == 1 { dby } else { dbx };
                    if d < 0.0 {
                        new_best = true;
                    }
                }
            }
        }

        // menu bars link to items roughly in the right direction when nothing better exists
        if result.dist_box == f32::MAX && dist_axial < result.dist_axial && self.nav_layer == NavLayer::Menu {
            let nav_is_child_menu = self.nav_window.map(|n| self.windows[n.0].flags.is_child_menu()).unwrap_or(false);
            let toward = match move_dir {
                Dir::Left => dax < 0.0,
                Dir::Right => dax > 0.0,
                Dir::Up => day < 0.0,
                Dir::Down => day > 0.0,
            };
            if !nav_is_child_menu && toward {
                result.dist_axial = dist_axial;
                new_best = true;
            }
        }
        new_best
    }

    /// Handles init and move requests for an item submitted in `window`, and tracks the rectangle of
    /// the item holding the navigation focus.
    pub(crate) fn nav_process_item(&mut self, window: WindowIdx, nav_bb: &Rect, id: Id) {
        let (item_flags, layer, focus_scope, pos) = {
            let w = &self.windows[window.0];
            (w.dc.item_flags, w.dc.nav_layer_current, w.dc.nav_focus_scope_id_current, w.pos)
        };
        let nav_bb_rel = rect_rel(nav_bb, pos);

        if self.nav_init_request && self.nav_layer == layer {
            // NO_NAV_DEFAULT_FOCUS items are still remembered as a fallback
            if !item_flags.contains(ItemFlags::NO_NAV_DEFAULT_FOCUS) || self.nav_init_result_id.is_none() {
                self.nav_init_result_id = id;
                self.nav_init_result_rect_rel = nav_bb_rel;
            }
            if !item_flags.contains(ItemFlags::NO_NAV_DEFAULT_FOCUS) {
                self.nav_init_request = false;
                self.nav_update_any_request_flag();
            }
        }

        if (self.nav_id != id || self.nav_move_request_flags.contains(NavMoveFlags::ALLOW_CURRENT_NAV_ID)) && !item_flags.intersects(ItemFlags::DISABLED | ItemFlags::NO_NAV) {
            let local = Some(window) == self.nav_window;
            let mut result = if local { self.nav_move_result_local } else { self.nav_move_result_other };
            let new_best = self.nav_move_request && self.nav_score_item(window, &mut result, *nav_bb);
            if new_best {
                result.window = Some(window);
                result.id = id;
                result.focus_scope_id = focus_scope;
                result.rect_rel = nav_bb_rel;
            }
            if local {
                self.nav_move_result_local = result;
            } else {
                self.nav_move_result_other = result;
            }

            // page up/down keep a separate score for the mostly visible items
            const VISIBLE_RATIO: f32 = 0.70;
            let clip = self.windows[window.0].clip_rect;
            if self.nav_move_request_flags.contains(NavMoveFlags::ALSO_SCORE_VISIBLE_SET) && clip.overlaps(nav_bb) {
                let visible = nav_bb.max.y.clamp(clip.min.y, clip.max.y) - nav_bb.min.y.clamp(clip.min.y, clip.max.y);
                if visible >= nav_bb.height() * VISIBLE_RATIO {
                    let mut result = self.nav_move_result_local_visible_set;
                    if self.nav_score_item(window, &mut result, *nav_bb) {
                        result.window = Some(window);
                        result.id = id;
                        result.focus_scope_id = focus_scope;
                        result.rect_rel = nav_bb_rel;
                    }
                    self.nav_move_result_local_visible_set = result;
                }
            }
        }

        if self.nav_id == id {
            // items focused from code have no window until they are submitted
            self.nav_window = Some(window);
            self.nav_layer = layer;
            self.nav_focus_scope_id = focus_scope;
            self.nav_id_is_alive = true;
            let w = &mut self.windows[window.0];
            self.nav_id_tab_counter = w.dc.focus_counter_tab_stop;
            w.nav_rect_rel[layer.index()] = nav_bb_rel;
        }
    }

    pub(crate) fn nav_move_request_but_no_result_yet(&self) -> bool {
        self.nav_move_request && self.nav_move_result_local.id.is_none() && self.nav_move_result_other.id.is_none()
    }

    pub(crate) fn nav_move_request_cancel(&mut self) {
        self.nav_move_request = false;
        self.nav_update_any_request_flag();
    }

    fn nav_move_request_forward(&mut self, move_dir: Dir, clip_dir: Dir, bb_rel: Rect, move_flags: NavMoveFlags) {
        assert_eq!(self.nav_move_request_forward, NavForward::None);
        self.nav_move_request_cancel();
        self.nav_move_dir = Some(move_dir);
        self.nav_move_clip_dir = Some(clip_dir);
        self.nav_move_request_forward = NavForward::ForwardQueued;
        self.nav_move_request_flags = move_flags;
        if let Some(w) = self.nav_window {
            self.windows[w.0].nav_rect_rel[self.nav_layer.index()] = bb_rel;
        }
    }

    /// Asks the navigation to wrap around inside `window` when the current move finds nothing.
    pub(crate) fn nav_move_request_try_wrapping(&mut self, window: WindowIdx, move_flags: NavMoveFlags) {
        if self.nav_window == Some(window) && self.nav_move_request_but_no_result_yet() {
            self.nav_wrap_request_window = Some(window);
            self.nav_wrap_request_flags = move_flags;
        }
    }

    fn nav_save_last_child_nav_window_into_parent(&mut self, nav_window: WindowIdx) {
        let mut parent = Some(nav_window);
        while let Some(p) = parent {
            let w = &self.windows[p.0];
            if w.root_window == p || w.flags.intersects(WindowFlags::POPUP | WindowFlags::CHILD_MENU) {
                break;
            }
            parent = w.parent_window;
        }
        if let Some(p) = parent {
            if p != nav_window {
                self.windows[p.0].nav_last_child_nav_window = Some(nav_window);
            }
        }
    }

    /// The child of `window` that last had the navigation focus, or `window` itself.
    pub(crate) fn nav_restore_last_child_nav_window(&self, window: WindowIdx) -> WindowIdx {
        match self.windows[window.0].nav_last_child_nav_window {
            Some(child) if self.windows[child.0].was_active => child,
            _ => window,
        }
    }

    fn nav_restore_layer(&mut self, layer: NavLayer) {
        self.nav_layer = layer;
        if layer == NavLayer::Main {
            self.nav_window = self.nav_window.map(|w| self.nav_restore_last_child_nav_window(w));
        }
        let window = match self.nav_window {
            Some(w) => w,
            None => return,
        };
        let last_id = self.windows[window.0].nav_last_ids[layer.index()];
        if last_id.is_some() {
            let rect = self.windows[window.0].nav_rect_rel[layer.index()];
            self.set_nav_id_with_rect_rel(last_id, layer, Id::NONE, rect);
        } else {
            self.nav_init_window(window, true);
        }
    }

    /// Starts an init request on the focused `window` so its first (or default) item gets the navigation focus.
    pub(crate) fn nav_init_window(&mut self, window: WindowIdx, force_reinit: bool) {
        assert_eq!(self.nav_window, Some(window), "nav_init_window() on a window without the focus");
        let w = &self.windows[window.0];
        let init_for_nav = !w.flags.contains(WindowFlags::NO_NAV_INPUTS) && (!w.flags.is_child() || w.flags.is_popup() || w.nav_last_ids[0].is_none() || force_reinit);
        if init_for_nav {
            self.set_nav_id(Id::NONE, self.nav_layer, Id::NONE);
            self.nav_init_request = true;
            self.nav_init_request_from_move = false;
            self.nav_init_result_id = Id::NONE;
            self.nav_init_result_rect_rel = Rect::default();
            self.nav_update_any_request_flag();
        } else {
            self.nav_id = w.nav_last_ids[0];
            self.nav_focus_scope_id = Id::NONE;
        }
    }

    pub(crate) fn nav_calc_preferred_ref_pos(&self) -> Vec2f {
        match self.nav_window {
            Some(nw) if !self.nav_disable_highlight && self.nav_disable_mouse_hover => {
                // bottom left of the navigated item
                let w = &self.windows[nw.0];
                let r = w.nav_rect_rel[self.nav_layer.index()];
                let pos = vec2(
                    w.pos.x + r.min.x + (self.style.frame_padding.x * 4.0).min(r.width()),
                    w.pos.y + r.max.y - self.style.frame_padding.y.min(r.height()),
                );
                vec2_floor(vec2_clamp(pos, vec2(0.0, 0.0), self.io.display_size))
            }
            _ => {
                if self.is_mouse_pos_valid(None) {
                    self.io.mouse_pos
                } else {
                    self.io.mouse_pos_prev
                }
            }
        }
    }

    fn nav_map_keyboard_inputs(&mut self) {
        const MAP: [(Key, NavInput); 7] = [
            (Key::Space, NavInput::Activate),
            (Key::Enter, NavInput::Input),
            (Key::Escape, NavInput::Cancel),
            (Key::LeftArrow, NavInput::KeyLeft),
            (Key::RightArrow, NavInput::KeyRight),
            (Key::UpArrow, NavInput::KeyUp),
            (Key::DownArrow, NavInput::KeyDown),
        ];
        for (key, input) in MAP {
            if self.io.keys[key.index()] {
                self.io.nav_inputs[input.index()] = 1.0;
                self.nav_input_source = InputSource::NavKeyboard;
            }
        }
        if self.io.key_ctrl {
            self.io.nav_inputs[NavInput::TweakSlow.index()] = 1.0;
        }
        if self.io.key_shift {
            self.io.nav_inputs[NavInput::TweakFast.index()] = 1.0;
        }
        if self.io.key_alt && !self.io.key_ctrl {
            self.io.nav_inputs[NavInput::KeyMenu.index()] = 1.0;
        }
    }

    /// Per-frame navigation update, run by [`Context::new_frame`] once inputs are known.
    pub(crate) fn nav_update(&mut self) {
        self.io.want_set_mouse_pos = false;
        self.nav_wrap_request_window = None;
        self.nav_wrap_request_flags = NavMoveFlags::empty();

        let nav_keyboard_active = self.io.config_flags.contains(ConfigFlags::NAV_ENABLE_KEYBOARD);
        let nav_gamepad_active = self.io.config_flags.contains(ConfigFlags::NAV_ENABLE_GAMEPAD);
        if nav_gamepad_active && self.nav_input_source != InputSource::NavGamepad {
            const PAD: [NavInput; 8] = [
                NavInput::Activate,
                NavInput::Input,
                NavInput::Cancel,
                NavInput::Menu,
                NavInput::DpadLeft,
                NavInput::DpadRight,
                NavInput::DpadUp,
                NavInput::DpadDown,
            ];
            if PAD.iter().any(|n| self.io.nav_inputs[n.index()] > 0.0) {
                self.nav_input_source = InputSource::NavGamepad;
            }
        }
        if nav_keyboard_active {
            self.nav_map_keyboard_inputs();
        }
        self.io.update_nav_input_durations();

        // apply the result of last frame's init request
        if self.nav_init_result_id.is_some() && (!self.nav_disable_highlight || self.nav_init_request_from_move) && self.nav_window.is_some() {
            let (id, layer, rect) = (self.nav_init_result_id, self.nav_layer, self.nav_init_result_rect_rel);
            if self.nav_init_request_from_move {
                self.set_nav_id_with_rect_rel(id, layer, Id::NONE, rect);
            } else {
                self.set_nav_id(id, layer, Id::NONE);
            }
            if let Some(w) = self.nav_window {
                self.windows[w.0].nav_rect_rel[layer.index()] = rect;
            }
        }
        self.nav_init_request = false;
        self.nav_init_request_from_move = false;
        self.nav_init_result_id = Id::NONE;
        self.nav_just_moved_to_id = Id::NONE;

        if self.nav_move_request {
            self.nav_update_move_result();
        }

        // a forwarded request that found nothing restores the highlight
        if self.nav_move_request_forward == NavForward::ForwardActive {
            if self.nav_move_result_local.id.is_none() && self.nav_move_result_other.id.is_none() {
                self.nav_disable_highlight = false;
            }
            self.nav_move_request_forward = NavForward::None;
        }

        if self.nav_mouse_pos_dirty && self.nav_id_is_alive {
            if !self.nav_disable_highlight && self.nav_disable_mouse_hover && self.nav_window.is_some() && self.io.config_flags.contains(ConfigFlags::NAV_ENABLE_SET_MOUSE_POS) {
                let pos = self.nav_calc_preferred_ref_pos();
                self.io.mouse_pos = pos;
                self.io.mouse_pos_prev = pos;
                self.io.want_set_mouse_pos = true;
            }
            self.nav_mouse_pos_dirty = false;
        }
        self.nav_id_is_alive = false;
        self.nav_just_tabbed_id = Id::NONE;

        // remember the child to return to when leaving the menu layer
        if let Some(nw) = self.nav_window {
            self.nav_save_last_child_nav_window_into_parent(nw);
            if self.nav_layer == NavLayer::Main {
                self.windows[nw.0].nav_last_child_nav_window = None;
            }
        }

        self.nav_update_windowing();

        let nav_window_accepts_inputs = self.nav_window.map(|w| !self.windows[w.0].flags.contains(WindowFlags::NO_NAV_INPUTS)).unwrap_or(false);
        self.io.nav_active = (nav_keyboard_active || nav_gamepad_active) && nav_window_accepts_inputs;
        self.io.nav_visible = (self.io.nav_active && self.nav_id.is_some() && !self.nav_disable_highlight) || self.nav_windowing_target.is_some();

        if self.is_nav_input_test(NavInput::Cancel, InputReadMode::Pressed) {
            self.nav_process_cancel();
        }

        // activation
        self.nav_activate_id = Id::NONE;
        self.nav_activate_down_id = Id::NONE;
        self.nav_activate_pressed_id = Id::NONE;
        self.nav_input_id = Id::NONE;
        if self.nav_id.is_some() && !self.nav_disable_highlight && self.nav_windowing_target.is_none() && nav_window_accepts_inputs {
            let activate_down = self.is_nav_input_down(NavInput::Activate);
            let activate_pressed = activate_down && self.is_nav_input_test(NavInput::Activate, InputReadMode::Pressed);
            let free = self.active_id.is_none() || self.active_id == self.nav_id;
            if self.active_id.is_none() && activate_pressed {
                self.nav_activate_id = self.nav_id;
            }
            if free && activate_down {
                self.nav_activate_down_id = self.nav_id;
            }
            if free && activate_pressed {
                self.nav_activate_pressed_id = self.nav_id;
            }
            if self.active_id.is_none() && self.is_nav_input_test(NavInput::Input, InputReadMode::Pressed) {
                self.nav_input_id = self.nav_id;
            }
        }
        if self.nav_window.is_some() && !nav_window_accepts_inputs {
            self.nav_disable_highlight = true;
        }
        self.nav_move_request = false;

        // activation requested from code
        if self.nav_next_activate_id.is_some() {
            let id = self.nav_next_activate_id;
            self.nav_activate_id = id;
            self.nav_activate_down_id = id;
            self.nav_activate_pressed_id = id;
            self.nav_input_id = id;
        }
        self.nav_next_activate_id = Id::NONE;

        // directional inputs
        if self.nav_move_request_forward == NavForward::None {
            self.nav_move_dir = None;
            self.nav_move_request_flags = NavMoveFlags::empty();
            if self.nav_window.is_some() && self.nav_windowing_target.is_none() && nav_window_accepts_inputs {
                let mode = InputReadMode::Repeat;
                let pressed = |ctx: &Self, pad: NavInput, key: NavInput| ctx.is_nav_input_test(pad, mode) || ctx.is_nav_input_test(key, mode);
                if pressed(self, NavInput::DpadLeft, NavInput::KeyLeft) {
                    self.nav_move_dir = Some(Dir::Left);
                }
                if pressed(self, NavInput::DpadRight, NavInput::KeyRight) {
                    self.nav_move_dir = Some(Dir::Right);
                }
                if pressed(self, NavInput::DpadUp, NavInput::KeyUp) {
                    self.nav_move_dir = Some(Dir::Up);
                }
                if pressed(self, NavInput::DpadDown, NavInput::KeyDown) {
                    self.nav_move_dir = Some(Dir::Down);
                }
            }
            self.nav_move_clip_dir = self.nav_move_dir;
        } else {
            // a request rewritten by wrapping is replayed this frame
            assert!(self.nav_move_dir.is_some() && self.nav_move_clip_dir.is_some());
            assert_eq!(self.nav_move_request_forward, NavForward::ForwardQueued);
            self.nav_move_request_forward = NavForward::ForwardActive;
        }

        let mut nav_scoring_rect_offset_y = 0.0;
        if nav_keyboard_active {
            nav_scoring_rect_offset_y = self.nav_update_page_up_page_down();
        }

        // moving without a nav id falls back to the init request
        if self.nav_move_dir.is_some() {
            self.nav_move_request = true;
            self.nav_move_request_key_mods = self.io.key_mods;
            self.nav_move_dir_last = self.nav_move_dir;
        }
        if self.nav_move_request && self.nav_id.is_none() {
            self.nav_init_request = true;
            self.nav_init_request_from_move = true;
            self.nav_init_result_id = Id::NONE;
            self.nav_disable_highlight = false;
        }
        self.nav_update_any_request_flag();

        // windows without navigable items scroll with the directional keys
        if let Some(nw) = self.nav_window {
            if nav_window_accepts_inputs && self.nav_windowing_target.is_none() && self.nav_move_request {
                let w = &self.windows[nw.0];
                if w.dc.nav_layers_active_mask == 0 && w.dc.nav_has_scroll {
                    let scroll_speed = (self.font_size * 100.0 * self.io.delta_time).round();
                    let scroll = w.scroll;
                    match self.nav_move_dir {
                        Some(Dir::Left) => self.set_window_scroll_x(nw, (scroll.x - scroll_speed).floor()),
                        Some(Dir::Right) => self.set_window_scroll_x(nw, (scroll.x + scroll_speed).floor()),
                        Some(Dir::Up) => self.set_window_scroll_y(nw, (scroll.y - scroll_speed).floor()),
                        Some(Dir::Down) => self.set_window_scroll_y(nw, (scroll.y + scroll_speed).floor()),
                        None => (),
                    }
                }
            }
        }

        self.nav_move_result_local.clear();
        self.nav_move_result_local_visible_set.clear();
        self.nav_move_result_other.clear();

        // gamepads move from the visible part of the window when the focused item scrolled away
        if self.nav_move_request && self.nav_input_source == InputSource::NavGamepad && self.nav_layer == NavLayer::Main {
            if let Some(nw) = self.nav_window {
                let pad = self.font_size * 0.5;
                let w = &mut self.windows[nw.0];
                let mut window_rect_rel = Rect::from_coords(w.inner_rect.min.x - w.pos.x - 1.0, w.inner_rect.min.y - w.pos.y - 1.0, w.inner_rect.max.x - w.pos.x + 1.0, w.inner_rect.max.y - w.pos.y + 1.0);
                if !window_rect_rel.contains_rect(&w.nav_rect_rel[0]) {
                    window_rect_rel.expand_xy(vec2(-window_rect_rel.width().min(pad), -window_rect_rel.height().min(pad)));
                    w.nav_rect_rel[0].clip_with_full(&window_rect_rel);
                    self.nav_id = Id::NONE;
                    self.nav_focus_scope_id = Id::NONE;
                }
            }
        }

        // scoring uses a thin segment on the left side of the current item
        self.nav_score_rect = match self.nav_window {
            Some(nw) => {
                let w = &self.windows[nw.0];
                let r = w.nav_rect_rel[self.nav_layer.index()];
                let r = if r.is_inverted() { Rect::default() } else { r };
                Rect::from_coords(w.pos.x + r.min.x, w.pos.y + r.min.y, w.pos.x + r.max.x, w.pos.y + r.max.y)
            }
            None => Rect::default(),
        };
        self.nav_score_rect.translate_y(nav_scoring_rect_offset_y);
        self.nav_score_rect.min.x = (self.nav_score_rect.min.x + 1.0).min(self.nav_score_rect.max.x);
        self.nav_score_rect.max.x = self.nav_score_rect.min.x;
        assert!(!self.nav_score_rect.is_inverted(), "navigation scoring rectangle is inverted");
    }

    fn nav_process_cancel(&mut self) {
        if self.active_id.is_some() {
            self.clear_active_id();
        } else if self.nav_layer != NavLayer::Main {
            // leave the menu layer
            self.nav_restore_layer(NavLayer::Main);
        } else if let Some(child) = self.nav_window.filter(|&w| {
            let f = self.windows[w.0].flags;
            f.is_child() && !f.is_popup() && self.windows[w.0].parent_window.is_some()
        }) {
            // back to the parent, focusing the child window itself
            let (child_id, child_pos, child_size, parent) = {
                let c = &self.windows[child.0];
                (c.child_id, c.pos, c.size, c.parent_window)
            };
            if let Some(parent) = parent {
                assert!(child_id.is_some());
                self.focus_window(Some(parent));
                self.set_nav_id(child_id, NavLayer::Main, Id::NONE);
                let parent_pos = self.windows[parent.0].pos;
                self.windows[parent.0].nav_rect_rel[0] = Rect::from_coords(child_pos.x - parent_pos.x, child_pos.y - parent_pos.y, child_pos.x + child_size.x - parent_pos.x, child_pos.y + child_size.y - parent_pos.y);
                self.nav_disable_highlight = false;
                self.nav_disable_mouse_hover = true;
                self.nav_mouse_pos_dirty = true;
            }
        } else if let Some(top) = self.open_popup_stack.last() {
            // close the top popup unless it is modal
            let modal = top.window.map(|w| self.windows[w.0].flags.is_modal()).unwrap_or(false);
            if !modal {
                self.close_popup_to_level(self.open_popup_stack.len() - 1, true);
            }
        } else {
            // clear the nav id of regular windows
            if let Some(nw) = self.nav_window {
                let f = self.windows[nw.0].flags;
                if !f.is_popup() && !f.is_child() {
                    self.windows[nw.0].nav_last_ids[0] = Id::NONE;
                }
            }
            self.nav_id = Id::NONE;
        }
    }

    fn nav_update_move_result(&mut self) {
        let mut result = if self.nav_move_result_local.id.is_some() {
            Some(self.nav_move_result_local)
        } else if self.nav_move_result_other.id.is_some() {
            Some(self.nav_move_result_other)
        } else {
            None
        };

        // page up/down first land on the last mostly visible item
        if self.nav_move_request_flags.contains(NavMoveFlags::ALSO_SCORE_VISIBLE_SET) {
            let visible = self.nav_move_result_local_visible_set;
            if visible.id.is_some() && visible.id != self.nav_id {
                result = Some(visible);
            }
        }

        // entering a flattened child from outside
        let other = self.nav_move_result_other;
        if let Some(r) = result {
            if r.id != other.id && other.id.is_some() {
                if let Some(ow) = other.window {
                    if self.windows[ow.0].parent_window == self.nav_window && (other.dist_box < r.dist_box || (other.dist_box == r.dist_box && other.dist_center < r.dist_center)) {
                        result = Some(other);
                    }
                }
            }
        }

        let mut result = match result {
            Some(r) => r,
            None => return,
        };
        let result_window = match result.window {
            Some(w) => w,
            None => return,
        };

        if self.nav_layer == NavLayer::Main {
            let delta_scroll = if self.nav_move_request_flags.contains(NavMoveFlags::SCROLL_TO_EDGE) {
                let w = &self.windows[result_window.0];
                let scroll_target = if self.nav_move_dir == Some(Dir::Up) { w.scroll_max.y } else { 0.0 };
                let delta = vec2(0.0, w.scroll.y - scroll_target);
                self.set_window_scroll_y(result_window, scroll_target);
                delta
            } else {
                let pos = self.windows[result_window.0].pos;
                let rect_abs = Rect::from_coords(result.rect_rel.min.x + pos.x, result.rect_rel.min.y + pos.y, result.rect_rel.max.x + pos.x, result.rect_rel.max.y + pos.y);
                self.scroll_to_bring_rect_into_view(result_window, &rect_abs)
            };
            // the mouse may be moved to the item right away
            result.rect_rel.translate_x(-delta_scroll.x);
            result.rect_rel.translate_y(-delta_scroll.y);
        }

        self.clear_active_id();
        self.nav_window = Some(result_window);
        if self.nav_id != result.id {
            self.nav_just_moved_to_id = result.id;
            self.nav_just_moved_to_focus_scope_id = result.focus_scope_id;
            self.nav_just_moved_to_key_mods = self.nav_move_request_key_mods;
        }
        self.set_nav_id_with_rect_rel(result.id, self.nav_layer, result.focus_scope_id, result.rect_rel);
    }

    fn nav_update_page_up_page_down(&mut self) -> f32 {
        let nw = match self.nav_window {
            Some(w) => w,
            None => return 0.0,
        };
        if self.windows[nw.0].flags.contains(WindowFlags::NO_NAV_INPUTS) || self.nav_windowing_target.is_some() || self.nav_layer != NavLayer::Main {
            return 0.0;
        }
        let page_up_held = self.is_key_down(Key::PageUp);
        let page_down_held = self.is_key_down(Key::PageDown);
        let home_pressed = self.is_key_pressed(Key::Home, true);
        let end_pressed = self.is_key_pressed(Key::End, true);
        if page_up_held == page_down_held && home_pressed == end_pressed {
            return 0.0;
        }

        let (inner_height, scroll, scroll_max, size_full_y, no_items) = {
            let w = &self.windows[nw.0];
            (w.inner_rect.height(), w.scroll, w.scroll_max, w.size_full.y, w.dc.nav_layers_active_mask == 0 && w.dc.nav_has_scroll)
        };
        if no_items {
            if self.is_key_pressed(Key::PageUp, true) {
                self.set_window_scroll_y(nw, scroll.y - inner_height);
            } else if self.is_key_pressed(Key::PageDown, true) {
                self.set_window_scroll_y(nw, scroll.y + inner_height);
            } else if home_pressed {
                self.set_window_scroll_y(nw, 0.0);
            } else if end_pressed {
                self.set_window_scroll_y(nw, scroll_max.y);
            }
            return 0.0;
        }

        let layer = self.nav_layer.index();
        let nav_rect_height = self.windows[nw.0].nav_rect_rel[layer].height();
        let page_offset_y = (inner_height - self.font_size + nav_rect_height).max(0.0);
        let mut offset_y = 0.0;
        if self.is_key_pressed(Key::PageUp, true) {
            // the scoring rect is moved up, so scoring downward always lands on an item
            offset_y = -page_offset_y;
            self.nav_move_dir = Some(Dir::Down);
            self.nav_move_clip_dir = Some(Dir::Up);
            self.nav_move_request_flags = NavMoveFlags::ALLOW_CURRENT_NAV_ID | NavMoveFlags::ALSO_SCORE_VISIBLE_SET;
        } else if self.is_key_pressed(Key::PageDown, true) {
            offset_y = page_offset_y;
            self.nav_move_dir = Some(Dir::Up);
            self.nav_move_clip_dir = Some(Dir::Down);
            self.nav_move_request_flags = NavMoveFlags::ALLOW_CURRENT_NAV_ID | NavMoveFlags::ALSO_SCORE_VISIBLE_SET;
        } else if home_pressed || end_pressed {
            let r = &mut self.windows[nw.0].nav_rect_rel[layer];
            let y = if home_pressed { -scroll.y } else { scroll_max.y + size_full_y - scroll.y };
            r.min.y = y;
            r.max.y = y;
            if r.is_inverted() {
                r.min.x = 0.0;
                r.max.x = 0.0;
            }
            self.nav_move_dir = Some(if home_pressed { Dir::Down } else { Dir::Up });
            self.nav_move_request_flags = NavMoveFlags::ALLOW_CURRENT_NAV_ID | NavMoveFlags::SCROLL_TO_EDGE;
        }
        offset_y
    }

    fn is_window_nav_focusable(&self, idx: WindowIdx) -> bool {
        let w = &self.windows[idx.0];
        w.was_active && w.root_window == idx && !w.flags.contains(WindowFlags::NO_NAV_FOCUS)
    }

    fn find_window_nav_focusable(&self, i_start: i32, i_stop: i32, dir: i32) -> Option<WindowIdx> {
        let mut i = i_start;
        while i >= 0 && (i as usize) < self.focus_order.len() && i != i_stop {
            let w = self.focus_order[i as usize];
            if self.is_window_nav_focusable(w) {
                return Some(w);
            }
            i += dir;
        }
        None
    }

    fn nav_update_windowing_highlight_window(&mut self, focus_change_dir: i32) {
        let target = match self.nav_windowing_target {
            Some(t) => t,
            None => return,
        };
        if self.windows[target.0].flags.is_modal() {
            return;
        }
        let i_current = self.focus_order.iter().position(|&w| w == target).map(|i| i as i32).unwrap_or(-1);
        let window_target = self.find_window_nav_focusable(i_current + focus_change_dir, i32::MIN, focus_change_dir).or_else(|| {
            let start = if focus_change_dir < 0 { self.focus_order.len() as i32 - 1 } else { 0 };
            self.find_window_nav_focusable(start, i_current, focus_change_dir)
        });
        if let Some(t) = window_target {
            self.nav_windowing_target = Some(t);
            self.nav_windowing_target_anim = Some(t);
            self.nav_windowing_toggle_layer = false;
        }
    }

    /// CTRL+TAB and gamepad window switching, window moving and the Alt menu layer toggle.
    fn nav_update_windowing(&mut self) {
        let mut apply_focus_window = None;
        let mut apply_toggle_layer = false;

        let allow_windowing = self.get_top_most_popup_modal().is_none();
        if !allow_windowing {
            self.nav_windowing_target = None;
        }

        // fade out
        if self.nav_windowing_target_anim.is_some() && self.nav_windowing_target.is_none() {
            self.nav_windowing_highlight_alpha = (self.nav_windowing_highlight_alpha - self.io.delta_time * 10.0).max(0.0);
            if self.dim_bg_ratio <= 0.0 && self.nav_windowing_highlight_alpha <= 0.0 {
                self.nav_windowing_target_anim = None;
            }
        }

        let start_with_gamepad = allow_windowing && self.nav_windowing_target.is_none() && self.is_nav_input_test(NavInput::Menu, InputReadMode::Pressed);
        let start_with_keyboard = allow_windowing
            && self.nav_windowing_target.is_none()
            && self.io.key_ctrl
            && self.is_key_pressed(Key::Tab, true)
            && self.io.config_flags.contains(ConfigFlags::NAV_ENABLE_KEYBOARD);
        if start_with_gamepad || start_with_keyboard {
            let start = self.nav_window.or_else(|| self.find_window_nav_focusable(self.focus_order.len() as i32 - 1, i32::MIN, -1));
            if let Some(window) = start {
                let root = self.windows[window.0].root_window;
                self.nav_windowing_target = Some(root);
                self.nav_windowing_target_anim = Some(root);
                self.nav_windowing_timer = 0.0;
                self.nav_windowing_highlight_alpha = 0.0;
                self.nav_windowing_toggle_layer = !start_with_keyboard;
                self.nav_input_source = if start_with_keyboard { InputSource::NavKeyboard } else { InputSource::NavGamepad };
                debug!("window switching started on '{}'", self.windows[root.0].name);
            }
        }

        self.nav_windowing_timer += self.io.delta_time;
        let highlight_ramp = ((self.nav_windowing_timer - NAV_WINDOWING_HIGHLIGHT_DELAY) / 0.05).clamp(0.0, 1.0);

        if self.nav_windowing_target.is_some() && self.nav_input_source == InputSource::NavGamepad {
            // a quick tap on Menu toggles the layer, a long press switches windows
            self.nav_windowing_highlight_alpha = self.nav_windowing_highlight_alpha.max(highlight_ramp);
            let focus_change_dir = self.is_nav_input_test(NavInput::FocusPrev, InputReadMode::RepeatSlow) as i32 - self.is_nav_input_test(NavInput::FocusNext, InputReadMode::RepeatSlow) as i32;
            if focus_change_dir != 0 {
                self.nav_update_windowing_highlight_window(focus_change_dir);
                self.nav_windowing_highlight_alpha = 1.0;
            }
            if !self.is_nav_input_down(NavInput::Menu) {
                self.nav_windowing_toggle_layer &= self.nav_windowing_highlight_alpha < 1.0;
                if self.nav_windowing_toggle_layer && self.nav_window.is_some() {
                    apply_toggle_layer = true;
                } else if !self.nav_windowing_toggle_layer {
                    apply_focus_window = self.nav_windowing_target;
                }
                self.nav_windowing_target = None;
            }
        }

        if self.nav_windowing_target.is_some() && self.nav_input_source == InputSource::NavKeyboard {
            self.nav_windowing_highlight_alpha = self.nav_windowing_highlight_alpha.max(highlight_ramp);
            if self.is_key_pressed(Key::Tab, true) {
                self.nav_update_windowing_highlight_window(if self.io.key_shift { 1 } else { -1 });
            }
            if !self.io.key_ctrl {
                apply_focus_window = self.nav_windowing_target;
            }
        }

        // a press and release of Alt toggles the menu layer
        if self.is_nav_input_test(NavInput::KeyMenu, InputReadMode::Pressed) {
            self.nav_windowing_toggle_layer = true;
        }
        if (self.active_id.is_none() || self.active_id_allow_overlap)
            && self.nav_windowing_toggle_layer
            && self.is_nav_input_test(NavInput::KeyMenu, InputReadMode::Released)
            && self.is_mouse_pos_valid(None) == self.is_mouse_pos_valid(Some(self.io.mouse_pos_prev))
        {
            apply_toggle_layer = true;
        }

        // move the target window
        if let Some(target) = self.nav_windowing_target {
            if !self.windows[target.0].flags.contains(WindowFlags::NO_MOVE) {
                let mut move_delta = vec2(0.0, 0.0);
                if self.nav_input_source == InputSource::NavKeyboard && !self.io.key_shift {
                    move_delta = self.get_nav_input_amount_2d(NavDirSourceFlags::KEYBOARD, InputReadMode::Down, 0.0, 0.0);
                }
                if self.nav_input_source == InputSource::NavGamepad {
                    move_delta = self.get_nav_input_amount_2d(NavDirSourceFlags::PAD_LSTICK, InputReadMode::Down, 0.0, 0.0);
                }
                if move_delta.x != 0.0 || move_delta.y != 0.0 {
                    const NAV_MOVE_SPEED: f32 = 800.0;
                    let move_speed = (NAV_MOVE_SPEED * self.io.delta_time).floor();
                    let moving_window = self.windows[target.0].root_window;
                    let pos = self.windows[moving_window.0].pos;
                    self.set_window_pos_ex(moving_window, vec2(pos.x + move_delta.x * move_speed, pos.y + move_delta.y * move_speed), Cond::ALWAYS);
                    self.mark_window_settings_dirty(moving_window);
                    self.nav_disable_mouse_hover = true;
                }
            }
        }

        if let Some(focus) = apply_focus_window {
            let current_root = self.nav_window.map(|w| self.windows[w.0].root_window);
            if current_root != Some(focus) {
                self.clear_active_id();
                self.nav_disable_highlight = false;
                self.nav_disable_mouse_hover = true;
                let focus = self.nav_restore_last_child_nav_window(focus);
                self.close_popups_over_window(Some(focus), false);
                self.focus_window(Some(focus));
                if self.windows[focus.0].nav_last_ids[0].is_none() {
                    self.nav_init_window(focus, false);
                }
                // windows with only a menu layer get it selected directly
                if self.windows[focus.0].dc.nav_layers_active_mask == 1 << NavLayer::Menu.index() {
                    self.nav_layer = NavLayer::Menu;
                }
            }
            self.nav_windowing_target = None;
        }

        if apply_toggle_layer {
            if let Some(nav_window) = self.nav_window {
                // climb to the parent that has a menu layer
                let mut new_nav_window = nav_window;
                loop {
                    let w = &self.windows[new_nav_window.0];
                    match w.parent_window {
                        Some(parent)
                            if w.dc.nav_layers_active_mask & (1 << NavLayer::Menu.index()) == 0
                                && w.flags.is_child()
                                && !w.flags.intersects(WindowFlags::POPUP | WindowFlags::CHILD_MENU) =>
                        {
                            new_nav_window = parent
                        }
                        _ => break,
                    }
                }
                if new_nav_window != nav_window {
                    self.focus_window(Some(new_nav_window));
                    self.windows[new_nav_window.0].nav_last_child_nav_window = Some(nav_window);
                }
                self.nav_disable_highlight = false;
                self.nav_disable_mouse_hover = true;

                let has_menu_layer = self.windows[new_nav_window.0].dc.nav_layers_active_mask & (1 << NavLayer::Menu.index()) != 0;
                let new_layer = if has_menu_layer { self.nav_layer.toggle() } else { NavLayer::Main };
                if new_layer == NavLayer::Menu {
                    // entering the menu bar with Alt starts from its first item
                    self.windows[new_nav_window.0].nav_last_ids[NavLayer::Menu.index()] = Id::NONE;
                }
                self.nav_restore_layer(new_layer);
            }
        }
    }

    /// Wraps menu navigation around when the move request found nothing.
    pub(crate) fn nav_end_frame(&mut self) {
        let window = match self.nav_wrap_request_window {
            Some(w) => w,
            None => return,
        };
        let move_flags = self.nav_wrap_request_flags;
        let move_dir = match self.nav_move_dir {
            Some(d) => d,
            None => return,
        };
        if self.nav_window != Some(window) || !self.nav_move_request_but_no_result_yet() || self.nav_move_request_forward != NavForward::None || self.nav_layer != NavLayer::Main {
            return;
        }
        assert!(!move_flags.is_empty(), "wrap request without wrap flags");

        let (mut bb_rel, size_full, content_size, padding, scroll) = {
            let w = &self.windows[window.0];
            (w.nav_rect_rel[0], w.size_full, w.content_size, w.window_padding, w.scroll)
        };
        let mut clip_dir = move_dir;
        let wrap_x = move_flags.contains(NavMoveFlags::WRAP_X);
        let wrap_y = move_flags.contains(NavMoveFlags::WRAP_Y);
        let horizontal = move_flags.intersects(NavMoveFlags::WRAP_X | NavMoveFlags::LOOP_X);
        let vertical = move_flags.intersects(NavMoveFlags::WRAP_Y | NavMoveFlags::LOOP_Y);
        match move_dir {
            Dir::Left if horizontal => {
                let x = size_full.x.max(content_size.x + padding.x * 2.0) - scroll.x;
                bb_rel.min.x = x;
                bb_rel.max.x = x;
                if wrap_x {
                    bb_rel.translate_y(-bb_rel.height());
                    clip_dir = Dir::Up;
                }
            }
            Dir::Right if horizontal => {
                bb_rel.min.x = -scroll.x;
                bb_rel.max.x = -scroll.x;
                if wrap_x {
                    bb_rel.translate_y(bb_rel.height());
                    clip_dir = Dir::Down;
                }
            }
            Dir::Up if vertical => {
                let y = size_full.y.max(content_size.y + padding.y * 2.0) - scroll.y;
                bb_rel.min.y = y;
                bb_rel.max.y = y;
                if wrap_y {
                    bb_rel.translate_x(-bb_rel.width());
                    clip_dir = Dir::Left;
                }
            }
            Dir::Down if vertical => {
                bb_rel.min.y = -scroll.y;
                bb_rel.max.y = -scroll.y;
                if wrap_y {
                    bb_rel.translate_x(bb_rel.width());
                    clip_dir = Dir::Right;
                }
            }
            _ => return,
        }
        self.nav_move_request_forward(move_dir, clip_dir, bb_rel, move_flags);
    }

    /// Draws the navigation highlight around `bb` when `id` holds the navigation focus.
    pub(crate) fn render_nav_highlight(&mut self, bb: &Rect, id: Id, thin: bool) {
        if id != self.nav_id || self.nav_disable_highlight {
            return;
        }
        let widx = self.current_window_idx();
        let col = self.get_color(StyleColor::NavHighlight, 1.0);
        let rounding = self.style.frame_rounding;
        let w = &mut self.windows[widx.0];
        if w.dc.nav_hide_highlight_one_frame {
            return;
        }
        let mut display_rect = *bb;
        display_rect.clip_with(&w.clip_rect);
        if thin {
            w.draw_list.add_rect(display_rect.min, display_rect.max, col, rounding, 1.0);
            return;
        }
        const THICKNESS: f32 = 2.0;
        const DISTANCE: f32 = 3.0 + THICKNESS * 0.5;
        display_rect.expand(DISTANCE);
        let fully_visible = w.clip_rect.contains_rect(&display_rect);
        if !fully_visible {
            w.draw_list.push_clip_rect(display_rect.min, display_rect.max, false);
        }
        let half = THICKNESS * 0.5;
        w.draw_list.add_rect(vec2(display_rect.min.x + half, display_rect.min.y + half), vec2(display_rect.max.x - half, display_rect.max.y - half), col, rounding, THICKNESS);
        if !fully_visible {
            w.draw_list.pop_clip_rect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoring_context() -> (Context, WindowIdx) {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            ctx.set_next_window_pos(vec2(0.0, 0.0), Cond::ALWAYS, vec2(0.0, 0.0));
            ctx.set_next_window_size(vec2(400.0, 400.0), Cond::ALWAYS);
            ctx.window("Scoring", WindowFlags::empty(), |_| {});
        });
        let w = ctx.find_window_by_name("Scoring").unwrap();
        ctx.nav_window = Some(w);
        ctx.nav_layer = NavLayer::Main;
        ctx.nav_score_rect = Rect::from_coords(50.0, 100.0, 50.0, 120.0);
        (ctx, w)
    }

    fn set_dir(ctx: &mut Context, dir: Dir) {
        ctx.nav_move_dir = Some(dir);
        ctx.nav_move_clip_dir = Some(dir);
    }

    #[test]
    fn distance_interval() {
        assert_eq!(nav_score_item_dist_interval(0.0, 10.0, 20.0, 30.0), -10.0);
        assert_eq!(nav_score_item_dist_interval(40.0, 50.0, 20.0, 30.0), 10.0);
        assert_eq!(nav_score_item_dist_interval(0.0, 25.0, 20.0, 30.0), 0.0);
    }

    #[test]
    fn closer_candidate_wins() {
        let (mut ctx, w) = scoring_context();
        set_dir(&mut ctx, Dir::Right);
        let mut result = NavItemData::default();
        assert!(ctx.nav_score_item(w, &mut result, Rect::from_coords(200.0, 100.0, 250.0, 120.0)));
        assert!(ctx.nav_score_item(w, &mut result, Rect::from_coords(100.0, 100.0, 150.0, 120.0)));
        assert!(!ctx.nav_score_item(w, &mut result, Rect::from_coords(300.0, 100.0, 350.0, 120.0)));
        assert_eq!(result.dist_box, 50.0);
    }

    #[test]
    fn candidates_outside_the_quadrant_are_ignored() {
        let (mut ctx, w) = scoring_context();
        set_dir(&mut ctx, Dir::Right);
        let mut result = NavItemData::default();
        // straight below
        assert!(!ctx.nav_score_item(w, &mut result, Rect::from_coords(40.0, 200.0, 60.0, 220.0)));
        // behind
        assert!(!ctx.nav_score_item(w, &mut result, Rect::from_coords(0.0, 100.0, 20.0, 120.0)));
        assert_eq!(result.dist_box, f32::MAX);
    }

    #[test]
    fn ties_favour_submission_order() {
        let (mut ctx, w) = scoring_context();
        let twin = Rect::from_coords(100.0, 100.0, 150.0, 120.0);

        // moving right, the first of two identical candidates is kept
        set_dir(&mut ctx, Dir::Right);
        let mut result = NavItemData::default();
        assert!(ctx.nav_score_item(w, &mut result, twin));
        assert!(!ctx.nav_score_item(w, &mut result, twin));

        // moving left, the later one is considered closer
        ctx.nav_score_rect = Rect::from_coords(300.0, 100.0, 300.0, 120.0);
        set_dir(&mut ctx, Dir::Left);
        let mut result = NavItemData::default();
        assert!(ctx.nav_score_item(w, &mut result, twin));
        assert!(ctx.nav_score_item(w, &mut result, twin));
    }

    #[test]
    fn other_layer_is_not_scored() {
        let (mut ctx, w) = scoring_context();
        set_dir(&mut ctx, Dir::Right);
        ctx.nav_layer = NavLayer::Menu;
        let mut result = NavItemData::default();
        assert!(!ctx.nav_score_item(w, &mut result, Rect::from_coords(100.0, 100.0, 150.0, 120.0)));
    }

    fn buttons_frame(ctx: &mut Context) {
        ctx.frame(|ctx| {
            ctx.set_next_window_pos(vec2(10.0, 10.0), Cond::ALWAYS, vec2(0.0, 0.0));
            ctx.set_next_window_size(vec2(200.0, 200.0), Cond::ALWAYS);
            ctx.window("Nav", WindowFlags::empty(), |ctx| {
                ctx.button("One");
                ctx.button("Two");
                ctx.button("Three");
            });
        });
    }

    fn tap(ctx: &mut Context, key: Key) {
        ctx.io.key_down(key);
        buttons_frame(ctx);
        ctx.io.key_up(key);
        buttons_frame(ctx);
    }

    #[test]
    fn arrow_keys_walk_through_items() {
        let mut ctx = Context::new_headless();
        ctx.io.config_flags |= ConfigFlags::NAV_ENABLE_KEYBOARD;
        buttons_frame(&mut ctx);
        buttons_frame(&mut ctx);
        let w = ctx.find_window_by_name("Nav").unwrap();
        assert_eq!(ctx.get_focused_window(), Some(w));
        assert!(ctx.get_focus_id().is_none());

        // the first move lands on the first item
        tap(&mut ctx, Key::DownArrow);
        assert_eq!(ctx.get_focus_id(), ctx.get_window(w).get_id("One"));
        assert!(ctx.io.nav_visible);

        tap(&mut ctx, Key::DownArrow);
        assert_eq!(ctx.get_focus_id(), ctx.get_window(w).get_id("Two"));
        tap(&mut ctx, Key::DownArrow);
        assert_eq!(ctx.get_focus_id(), ctx.get_window(w).get_id("Three"));
        tap(&mut ctx, Key::UpArrow);
        assert_eq!(ctx.get_focus_id(), ctx.get_window(w).get_id("Two"));

        // escape clears the focus
        tap(&mut ctx, Key::Escape);
        assert!(ctx.get_focus_id().is_none());
    }

    #[test]
    fn tab_cycles_focus() {
        let mut ctx = Context::new_headless();
        ctx.io.config_flags |= ConfigFlags::NAV_ENABLE_KEYBOARD;
        buttons_frame(&mut ctx);
        buttons_frame(&mut ctx);
        let w = ctx.find_window_by_name("Nav").unwrap();
        tap(&mut ctx, Key::Tab);
        assert_eq!(ctx.get_focus_id(), ctx.get_window(w).get_id("One"));
        tap(&mut ctx, Key::Tab);
        assert_eq!(ctx.get_focus_id(), ctx.get_window(w).get_id("Two"));
    }

    #[test]
    fn input_amounts() {
        let mut ctx = Context::new_headless();
        ctx.io.nav_inputs[NavInput::DpadRight.index()] = 1.0;
        ctx.io.update_nav_input_durations();
        assert_eq!(ctx.get_nav_input_amount(NavInput::DpadRight, InputReadMode::Pressed), 1.0);
        let d = ctx.get_nav_input_amount_2d(NavDirSourceFlags::PAD_DPAD, InputReadMode::Down, 0.0, 0.0);
        assert_eq!((d.x, d.y), (1.0, 0.0));
        ctx.io.nav_inputs[NavInput::DpadRight.index()] = 0.0;
        ctx.io.update_nav_input_durations();
        assert_eq!(ctx.get_nav_input_amount(NavInput::DpadRight, InputReadMode::Released), 1.0);
    }
}
