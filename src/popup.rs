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
use crate::nav::{NavForward, NavMoveFlags};
use crate::window::{NextWindowDataFlags, PopupData};
use crate::*;

impl Context {
    /// Returns `true` when the popup `id` is open at the current begin level.
    ///
    /// `ANY_POPUP_LEVEL` searches the whole open stack; `ANY_POPUP_ID` ignores `id`.
    pub(crate) fn is_popup_open_id(&self, id: Id, flags: PopupFlags) -> bool {
        let level = self.begin_popup_stack.len();
        if flags.contains(PopupFlags::ANY_POPUP_ID) {
            assert!(id.is_none(), "ANY_POPUP_ID is used with an explicit id");
            if flags.contains(PopupFlags::ANY_POPUP_LEVEL) {
                !self.open_popup_stack.is_empty()
            } else {
                self.open_popup_stack.len() > level
            }
        } else if flags.contains(PopupFlags::ANY_POPUP_LEVEL) {
            self.open_popup_stack.iter().any(|p| p.popup_id == id)
        } else {
            self.open_popup_stack.len() > level && self.open_popup_stack[level].popup_id == id
        }
    }

    /// Returns `true` when the popup `str_id` of the current window is open.
    pub fn is_popup_open(&self, str_id: &str, flags: PopupFlags) -> bool {
        let id = if flags.contains(PopupFlags::ANY_POPUP_ID) { Id::NONE } else { self.get_id(str_id) };
        if flags.contains(PopupFlags::ANY_POPUP_LEVEL) && id.is_some() {
            panic!("ANY_POPUP_LEVEL requires ANY_POPUP_ID when a string id is passed");
        }
        self.is_popup_open_id(id, flags)
    }

    /// Returns the top-most modal popup that is open.
    pub fn get_top_most_popup_modal(&self) -> Option<WindowIdx> {
        self.open_popup_stack.iter().rev().filter_map(|p| p.window).find(|&w| self.windows[w.0].flags.is_modal())
    }

    /// Marks the popup `str_id` as open. Call `begin_popup` to submit its contents.
    pub fn open_popup(&mut self, str_id: &str, flags: PopupFlags) {
        let id = self.get_id(str_id);
        self.open_popup_ex(id, flags);
    }

    /// Opens the popup `id` at the current begin level.
    ///
    /// Popups above that level are closed first. Opening the popup that is already open at this
    /// level, in the same frame or the one after, keeps it as is.
    pub fn open_popup_ex(&mut self, id: Id, flags: PopupFlags) {
        let level = self.begin_popup_stack.len();
        if flags.contains(PopupFlags::NO_OPEN_OVER_EXISTING_POPUP) && self.is_popup_open_id(Id::NONE, PopupFlags::ANY_POPUP_ID) {
            return;
        }

        let parent = self.current_window_idx();
        let open_popup_pos = self.nav_calc_preferred_ref_pos();
        let popup_ref = PopupData {
            popup_id: id,
            window: None,
            source_window: self.nav_window,
            open_frame_count: self.frame_count,
            open_parent_id: self.windows[parent.0].id_stack.last().copied().unwrap_or(Id::NONE),
            open_popup_pos,
            open_mouse_pos: if self.is_mouse_pos_valid(None) { self.io.mouse_pos } else { open_popup_pos },
        };
        debug!("open popup {:?} at level {}", id, level);

        if self.open_popup_stack.len() < level + 1 {
            self.open_popup_stack.push(popup_ref);
        } else {
            let existing = &mut self.open_popup_stack[level];
            if existing.popup_id == id && existing.open_frame_count >= self.frame_count - 1 {
                existing.open_frame_count = popup_ref.open_frame_count;
            } else {
                self.close_popup_to_level(level, false);
                self.open_popup_stack.push(popup_ref);
            }
        }
    }

    /// Closes every popup that is not `ref_window` or one of its ancestors in the popup chain.
    ///
    /// `None` closes all popups.
    pub(crate) fn close_popups_over_window(&mut self, ref_window: Option<WindowIdx>, restore_focus_to_window_under_popup: bool) {
        if self.open_popup_stack.is_empty() {
            return;
        }

        let mut popup_count_to_keep = 0;
        if let Some(ref_window) = ref_window {
            let ref_root = self.windows[ref_window.0].root_window;
            while popup_count_to_keep < self.open_popup_stack.len() {
                let popup = self.open_popup_stack[popup_count_to_keep];
                let popup_window = match popup.window {
                    Some(w) => w,
                    None => {
                        popup_count_to_keep += 1;
                        continue;
                    }
                };
                if self.windows[popup_window.0].flags.is_child() {
                    popup_count_to_keep += 1;
                    continue;
                }

                // keep the popup if the reference window is it or lives above it
                let found = self.open_popup_stack[popup_count_to_keep..]
                    .iter()
                    .filter_map(|p| p.window)
                    .any(|w| self.windows[w.0].root_window == ref_root);
                if !found {
                    break;
                }
                popup_count_to_keep += 1;
            }
        }
        if popup_count_to_keep < self.open_popup_stack.len() {
            self.close_popup_to_level(popup_count_to_keep, restore_focus_to_window_under_popup);
        }
    }

    /// Truncates the open popup stack to `remaining` entries.
    pub(crate) fn close_popup_to_level(&mut self, remaining: usize, restore_focus_to_window_under_popup: bool) {
        assert!(remaining < self.open_popup_stack.len(), "closing popups to level {} with {} open", remaining, self.open_popup_stack.len());
        let focus_window = self.open_popup_stack[remaining].source_window;
        let popup_window = self.open_popup_stack[remaining].window;
        debug!("close popups down to level {}", remaining);
        self.open_popup_stack.truncate(remaining);

        if restore_focus_to_window_under_popup {
            match (focus_window, popup_window) {
                (Some(fw), Some(pw)) if !self.windows[fw.0].was_active => self.focus_top_most_window_under_one(Some(pw), None),
                (Some(fw), _) => {
                    let fw = if self.nav_layer == NavLayer::Main { self.nav_restore_last_child_nav_window(fw) } else { fw };
                    self.focus_window(Some(fw));
                }
                (None, Some(pw)) => self.focus_top_most_window_under_one(Some(pw), None),
                (None, None) => self.focus_window(None),
            }
        }
    }

    /// Closes the popup being submitted. Must be called between `begin_popup` and `end_popup`.
    ///
    /// Closing a menu closes its parent menus too, up to a modal.
    pub fn close_current_popup(&mut self) {
        let mut popup_idx = match self.begin_popup_stack.len().checked_sub(1) {
            Some(i) => i,
            None => return,
        };
        if popup_idx >= self.open_popup_stack.len() || self.begin_popup_stack[popup_idx].popup_id != self.open_popup_stack[popup_idx].popup_id {
            return;
        }

        while popup_idx > 0 {
            let popup_window = self.open_popup_stack[popup_idx].window;
            let parent_popup_window = self.open_popup_stack[popup_idx - 1].window;
            let close_parent = match popup_window {
                Some(pw) if self.windows[pw.0].flags.is_child_menu() => parent_popup_window.map_or(true, |p| !self.windows[p.0].flags.is_modal()),
                _ => false,
            };
            if !close_parent {
                break;
            }
            popup_idx -= 1;
        }
        self.close_popup_to_level(popup_idx, true);

        // the window that gets the focus back does not flash its nav highlight
        if let Some(nw) = self.nav_window {
            self.windows[nw.0].dc.nav_hide_highlight_one_frame = true;
        }
    }

    /// Begins the popup `id` when it is open. Pair a `true` return with [`Context::end_popup`].
    pub fn begin_popup_ex(&mut self, id: Id, flags: WindowFlags) -> bool {
        if !self.is_popup_open_id(id, PopupFlags::empty()) {
            self.next_window_data.clear_flags();
            return false;
        }

        // menus are recycled per depth, other popups per id
        let name = if flags.is_child_menu() { format!("##Menu_{:02}", self.begin_popup_stack.len()) } else { format!("##Popup_{:08x}", id.raw()) };
        let is_open = self.begin(&name, flags | WindowFlags::POPUP);
        if !is_open {
            self.end_popup();
        }
        is_open
    }

    /// Begins the popup `str_id` of the current window when it is open.
    pub fn begin_popup(&mut self, str_id: &str, flags: WindowFlags) -> bool {
        if self.open_popup_stack.len() <= self.begin_popup_stack.len() {
            self.next_window_data.clear_flags();
            return false;
        }
        let id = self.get_id(str_id);
        self.begin_popup_ex(id, flags | WindowFlags::ALWAYS_AUTO_RESIZE | WindowFlags::NO_TITLE_BAR | WindowFlags::NO_SAVED_SETTINGS)
    }

    /// Begins a modal popup titled `name`. With `p_open` a close button is shown; clearing it
    /// closes the modal.
    ///
    /// Modals are centered on the display the first time they appear unless a position was set.
    pub fn begin_popup_modal(&mut self, name: &str, p_open: Option<&mut bool>, flags: WindowFlags) -> bool {
        let id = self.get_id(name);
        if !self.is_popup_open_id(id, PopupFlags::empty()) {
            self.next_window_data.clear_flags();
            return false;
        }

        if !self.next_window_data.flags.contains(NextWindowDataFlags::HAS_POS) {
            let center = vec2_scale(self.io.display_size, 0.5);
            self.set_next_window_pos(center, Cond::APPEARING, vec2(0.5, 0.5));
        }

        let flags = flags | WindowFlags::POPUP | WindowFlags::MODAL | WindowFlags::NO_COLLAPSE;
        let (is_open, closed) = match p_open {
            Some(open) => {
                let is_open = self.begin_ex(name, Some(&mut *open), flags);
                (is_open, !*open)
            }
            None => (self.begin_ex(name, None, flags), false),
        };
        if !is_open || closed {
            self.end_popup();
            if is_open {
                self.close_popup_to_level(self.begin_popup_stack.len(), true);
            }
            return false;
        }
        true
    }

    /// Ends a popup started by one of the `begin_popup*` calls that returned `true`.
    pub fn end_popup(&mut self) {
        let idx = self.current_window_idx();
        assert!(self.windows[idx.0].flags.is_popup(), "end_popup() on a window that is not a popup");
        assert!(!self.begin_popup_stack.is_empty(), "end_popup() without begin_popup()");

        // menus and popups wrap around vertically
        if self.nav_window == Some(idx) {
            self.nav_move_request_try_wrapping(idx, NavMoveFlags::LOOP_Y);
        }

        let backup_within_end_child = self.within_end_child;
        if self.windows[idx.0].flags.is_child() {
            self.within_end_child = true;
        }
        self.end();
        self.within_end_child = backup_within_end_child;
    }

    /// Calls `f` inside the popup `str_id` when it is open.
    pub fn popup<R>(&mut self, str_id: &str, flags: WindowFlags, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !self.begin_popup(str_id, flags) {
            return None;
        }
        let res = f(self);
        self.end_popup();
        Some(res)
    }

    /// Calls `f` inside the modal popup `name` when it is open.
    pub fn popup_modal<R>(&mut self, name: &str, p_open: Option<&mut bool>, flags: WindowFlags, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !self.begin_popup_modal(name, p_open, flags) {
            return None;
        }
        let res = f(self);
        self.end_popup();
        Some(res)
    }

    fn context_popup_id(&self, str_id: Option<&str>) -> Id {
        let id = match str_id {
            Some(s) => self.get_id(s),
            None => self.current_window_ref().dc.last_item_id,
        };
        assert!(id.is_some(), "context popup on an item without an id: pass an explicit str_id");
        id
    }

    /// Opens the popup when the last item is clicked with the button in `popup_flags`.
    pub fn open_popup_on_item_click(&mut self, str_id: Option<&str>, popup_flags: PopupFlags) {
        let btn = popup_flags.mouse_button();
        if self.is_mouse_released(btn) && self.is_item_hovered(HoveredFlags::ALLOW_WHEN_BLOCKED_BY_POPUP) {
            let id = self.context_popup_id(str_id);
            self.open_popup_ex(id, popup_flags);
        }
    }

    /// Opens and begins a popup when the last item is clicked (right button by default).
    pub fn begin_popup_context_item(&mut self, str_id: Option<&str>, popup_flags: PopupFlags) -> bool {
        let id = self.context_popup_id(str_id);
        let btn = popup_flags.mouse_button();
        if self.is_mouse_released(btn) && self.is_item_hovered(HoveredFlags::ALLOW_WHEN_BLOCKED_BY_POPUP) {
            self.open_popup_ex(id, popup_flags);
        }
        self.begin_popup_ex(id, WindowFlags::ALWAYS_AUTO_RESIZE | WindowFlags::NO_TITLE_BAR | WindowFlags::NO_SAVED_SETTINGS)
    }

    /// Opens and begins a popup when the current window is clicked.
    pub fn begin_popup_context_window(&mut self, str_id: Option<&str>, popup_flags: PopupFlags) -> bool {
        let id = self.get_id(str_id.unwrap_or("window_context"));
        let btn = popup_flags.mouse_button();
        if self.is_mouse_released(btn)
            && self.is_window_hovered(HoveredFlags::ALLOW_WHEN_BLOCKED_BY_POPUP)
            && (!popup_flags.contains(PopupFlags::NO_OPEN_OVER_ITEMS) || !self.is_any_item_hovered())
        {
            self.open_popup_ex(id, popup_flags);
        }
        self.begin_popup_ex(id, WindowFlags::ALWAYS_AUTO_RESIZE | WindowFlags::NO_TITLE_BAR | WindowFlags::NO_SAVED_SETTINGS)
    }

    /// Opens and begins a popup when the void, outside every window, is clicked.
    pub fn begin_popup_context_void(&mut self, str_id: Option<&str>, popup_flags: PopupFlags) -> bool {
        let id = self.get_id(str_id.unwrap_or("void_context"));
        let btn = popup_flags.mouse_button();
        if self.is_mouse_released(btn) && !self.is_window_hovered(HoveredFlags::ANY_WINDOW) && self.get_top_most_popup_modal().is_none() {
            self.open_popup_ex(id, popup_flags);
        }
        self.begin_popup_ex(id, WindowFlags::ALWAYS_AUTO_RESIZE | WindowFlags::NO_TITLE_BAR | WindowFlags::NO_SAVED_SETTINGS)
    }

    // placement

    /// Display area popups are kept in, shrunk by the safe area padding.
    pub(crate) fn get_window_allowed_extent_rect(&self) -> Rect {
        let padding = self.style.display_safe_area_padding;
        let mut r_screen = Rect::from_min_size(vec2(0.0, 0.0), self.io.display_size);
        let shrink_x = if r_screen.width() > padding.x * 2.0 { -padding.x } else { 0.0 };
        let shrink_y = if r_screen.height() > padding.y * 2.0 { -padding.y } else { 0.0 };
        r_screen.expand_xy(vec2(shrink_x, shrink_y));
        r_screen
    }

    /// Finds a position for a window of `size` next to `ref_pos` that stays inside `r_outer` and
    /// does not cover `r_avoid`.
    ///
    /// The direction used last (`last_dir`) is tried first so a popup does not jump between
    /// sides from one frame to the next. `last_dir` is updated with the direction picked, or
    /// `None` when no side fits.
    pub fn find_best_window_pos_for_popup_ex(&self, ref_pos: Vec2f, size: Vec2f, last_dir: &mut Option<Dir>, r_outer: &Rect, r_avoid: &Rect, policy: PopupPositionPolicy) -> Vec2f {
        let base_pos_clamped = vec2_clamp(ref_pos, r_outer.min, vec2(r_outer.max.x - size.x, r_outer.max.y - size.y));

        let candidates = |order: [Dir; 4], last: Option<Dir>| last.into_iter().chain(order.into_iter().filter(move |&d| Some(d) != last));

        // combo boxes want an edge connected to the frame
        if policy == PopupPositionPolicy::ComboBox {
            for dir in candidates([Dir::Down, Dir::Right, Dir::Left, Dir::Up], *last_dir) {
                let pos = match dir {
                    Dir::Down => vec2(r_avoid.min.x, r_avoid.max.y),
                    Dir::Right => vec2(r_avoid.min.x, r_avoid.min.y - size.y),
                    Dir::Left => vec2(r_avoid.max.x - size.x, r_avoid.max.y),
                    Dir::Up => vec2(r_avoid.max.x - size.x, r_avoid.min.y - size.y),
                };
                if !r_outer.contains_rect(&Rect::from_min_size(pos, size)) {
                    continue;
                }
                *last_dir = Some(dir);
                return pos;
            }
        }

        for dir in candidates([Dir::Right, Dir::Down, Dir::Up, Dir::Left], *last_dir) {
            let avail_w = (if dir == Dir::Left { r_avoid.min.x } else { r_outer.max.x }) - (if dir == Dir::Right { r_avoid.max.x } else { r_outer.min.x });
            let avail_h = (if dir == Dir::Up { r_avoid.min.y } else { r_outer.max.y }) - (if dir == Dir::Down { r_avoid.max.y } else { r_outer.min.y });
            // a side without room on its axis is pointless, the other axis gives more space
            if avail_w < size.x && (dir == Dir::Left || dir == Dir::Right) {
                continue;
            }
            if avail_h < size.y && (dir == Dir::Up || dir == Dir::Down) {
                continue;
            }

            let x = match dir {
                Dir::Left => r_avoid.min.x - size.x,
                Dir::Right => r_avoid.max.x,
                _ => base_pos_clamped.x,
            };
            let y = match dir {
                Dir::Up => r_avoid.min.y - size.y,
                Dir::Down => r_avoid.max.y,
                _ => base_pos_clamped.y,
            };
            *last_dir = Some(dir);
            return vec2(x.max(r_outer.min.x), y.max(r_outer.min.y));
        }

        *last_dir = None;
        // tooltips stay off the cursor even when that hides part of them
        if policy == PopupPositionPolicy::Tooltip {
            return vec2(ref_pos.x + 2.0, ref_pos.y + 2.0);
        }
        vec2(
            ((ref_pos.x + size.x).min(r_outer.max.x) - size.x).max(r_outer.min.x),
            ((ref_pos.y + size.y).min(r_outer.max.y) - size.y).max(r_outer.min.y),
        )
    }

    /// Position of a popup, child menu or tooltip window, from its requested position.
    pub(crate) fn find_best_window_pos_for_popup(&mut self, idx: WindowIdx) -> Vec2f {
        let r_outer = self.get_window_allowed_extent_rect();
        let (flags, pos, size, mut last_dir) = {
            let w = &self.windows[idx.0];
            (w.flags, w.pos, w.size, w.auto_pos_last_direction)
        };

        let new_pos = if flags.is_child_menu() {
            // child menus open beside their parent, overlapping it by the inner spacing
            let parent = self.windows[idx.0].parent_window.unwrap_or(idx);
            let pw = &self.windows[parent.0];
            let horizontal_overlap = self.style.item_inner_spacing.x;
            let r_avoid = if pw.dc.menu_bar_appending {
                Rect::from_coords(-f32::MAX, pw.clip_rect.min.y, f32::MAX, pw.clip_rect.max.y)
            } else {
                Rect::from_coords(pw.pos.x + horizontal_overlap, -f32::MAX, pw.pos.x + pw.size.x - horizontal_overlap - pw.scrollbar_sizes.x, f32::MAX)
            };
            self.find_best_window_pos_for_popup_ex(pos, size, &mut last_dir, &r_outer, &r_avoid, PopupPositionPolicy::Default)
        } else if flags.is_popup() {
            let r_avoid = Rect::from_coords(pos.x - 1.0, pos.y - 1.0, pos.x + 1.0, pos.y + 1.0);
            self.find_best_window_pos_for_popup_ex(pos, size, &mut last_dir, &r_outer, &r_avoid, PopupPositionPolicy::Default)
        } else if flags.is_tooltip() {
            // tooltips follow the mouse, or the navigated item
            let ref_pos = self.nav_calc_preferred_ref_pos();
            let r_avoid = if !self.nav_disable_highlight && self.nav_disable_mouse_hover && !self.io.config_flags.contains(ConfigFlags::NAV_ENABLE_SET_MOUSE_POS) {
                Rect::from_coords(ref_pos.x - 16.0, ref_pos.y - 8.0, ref_pos.x + 16.0, ref_pos.y + 8.0)
            } else {
                Rect::from_coords(ref_pos.x - 16.0, ref_pos.y - 8.0, ref_pos.x + 24.0, ref_pos.y + 24.0)
            };
            let p = self.find_best_window_pos_for_popup_ex(ref_pos, size, &mut last_dir, &r_outer, &r_avoid, PopupPositionPolicy::Tooltip);
            if last_dir.is_none() {
                vec2(ref_pos.x + 2.0, ref_pos.y + 2.0)
            } else {
                p
            }
        } else {
            pos
        };
        self.windows[idx.0].auto_pos_last_direction = last_dir;
        new_pos
    }

    // tooltips

    fn begin_tooltip_ex(&mut self, extra_flags: WindowFlags, override_previous_tooltip: bool) {
        let mut override_previous_tooltip = override_previous_tooltip;
        if self.drag_drop_within_source || self.drag_drop_within_target {
            // drag previews stick to the cursor and let what is under them show through
            let tooltip_pos = vec2(self.io.mouse_pos.x + 16.0, self.io.mouse_pos.y + 8.0);
            self.set_next_window_pos(tooltip_pos, Cond::NONE, vec2(0.0, 0.0));
            let alpha = self.style.color(StyleColor::PopupBg).a as f32 / 255.0;
            self.set_next_window_bg_alpha(alpha * 0.60);
            override_previous_tooltip = true;
        }

        let mut window_name = format!("##Tooltip_{:02}", self.tooltip_override_count);
        if override_previous_tooltip {
            if let Some(prev) = self.find_window_by_name(&window_name) {
                if self.windows[prev.0].active {
                    // a window cannot be reset mid-frame, hide it and start a fresh one
                    let w = &mut self.windows[prev.0];
                    w.hidden = true;
                    w.hidden_frames_can_skip_items = 1;
                    self.tooltip_override_count += 1;
                    window_name = format!("##Tooltip_{:02}", self.tooltip_override_count);
                }
            }
        }

        let flags = WindowFlags::TOOLTIP
            | WindowFlags::NO_MOUSE_INPUTS
            | WindowFlags::NO_TITLE_BAR
            | WindowFlags::NO_MOVE
            | WindowFlags::NO_RESIZE
            | WindowFlags::NO_SAVED_SETTINGS
            | WindowFlags::ALWAYS_AUTO_RESIZE;
        self.begin(&window_name, flags | extra_flags);
    }

    /// Begins a tooltip window that follows the mouse. Always pair with [`Context::end_tooltip`].
    pub fn begin_tooltip(&mut self) { self.begin_tooltip_ex(WindowFlags::empty(), false) }

    /// Ends the tooltip started by [`Context::begin_tooltip`].
    pub fn end_tooltip(&mut self) {
        assert!(self.current_window_ref().flags.is_tooltip(), "end_tooltip() outside of a tooltip");
        self.end();
    }

    /// Calls `f` inside a tooltip window.
    pub fn tooltip<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_tooltip();
        let res = f(self);
        self.end_tooltip();
        res
    }

    /// Shows a text tooltip, replacing any tooltip submitted earlier in the frame.
    pub fn set_tooltip(&mut self, text: &str) {
        self.begin_tooltip_ex(WindowFlags::empty(), true);
        self.text(text);
        self.end_tooltip();
    }

    // combo boxes

    fn calc_max_popup_height_from_item_count(&self, items_count: i32) -> f32 {
        if items_count <= 0 {
            return f32::MAX;
        }
        (self.font_size + self.style.item_spacing.y) * items_count as f32 - self.style.item_spacing.y + self.style.window_padding.y * 2.0
    }

    /// Draws a combo box frame showing `preview_value` and begins its list popup when open.
    /// Pair a `true` return with [`Context::end_combo`].
    pub fn begin_combo(&mut self, label: &str, preview_value: &str, flags: ComboFlags) -> bool {
        let widx = self.current_window_idx();
        let backup_next_window_data_flags = self.next_window_data.flags;
        if self.windows[widx.0].skip_items {
            return false;
        }
        assert!(
            !flags.contains(ComboFlags::NO_ARROW_BUTTON | ComboFlags::NO_PREVIEW),
            "NO_ARROW_BUTTON and NO_PREVIEW are mutually exclusive"
        );

        let id = self.windows[widx.0].get_id(label);
        let style = self.style;
        let arrow_size = if flags.contains(ComboFlags::NO_ARROW_BUTTON) { 0.0 } else { self.get_frame_height() };
        let label_size = self.calc_text_size(label, true);
        let expected_w = self.calc_item_width();
        let w = if flags.contains(ComboFlags::NO_PREVIEW) { arrow_size } else { expected_w };
        let cursor = self.windows[widx.0].dc.cursor_pos;
        let frame_bb = Rect::from_min_size(cursor, vec2(w, label_size.y + style.frame_padding.y * 2.0));
        let label_w = if label_size.x > 0.0 { style.item_inner_spacing.x + label_size.x } else { 0.0 };
        let total_bb = Rect::new(frame_bb.min, vec2(frame_bb.max.x + label_w, frame_bb.max.y));
        self.item_size_rect(&total_bb, style.frame_padding.y);
        if !self.item_add(&total_bb, id, Some(&frame_bb)) {
            return false;
        }

        let (pressed, hovered, _held) = self.button_behavior(&frame_bb, id, ButtonFlags::empty());
        let popup_id = hash_str("##ComboPopup", id);
        let mut popup_open = self.is_popup_open_id(popup_id, PopupFlags::empty());
        if (pressed || self.nav_activate_id == id) && !popup_open {
            self.open_popup_ex(popup_id, PopupFlags::empty());
            popup_open = true;
        }

        let frame_col = self.get_color(if hovered { StyleColor::FrameBgHovered } else { StyleColor::FrameBg }, 1.0);
        let value_x2 = frame_bb.min.x.max(frame_bb.max.x - arrow_size);
        self.render_nav_highlight(&frame_bb, id, false);
        if !flags.contains(ComboFlags::NO_PREVIEW) {
            self.current_window_mut().draw_list.add_rect_filled(frame_bb.min, vec2(value_x2, frame_bb.max.y), frame_col, style.frame_rounding);
        }
        if !flags.contains(ComboFlags::NO_ARROW_BUTTON) {
            let bg_col = self.get_color(if popup_open || hovered { StyleColor::ButtonHovered } else { StyleColor::Button }, 1.0);
            let text_col = self.get_color(StyleColor::Text, 1.0);
            self.current_window_mut().draw_list.add_rect_filled(vec2(value_x2, frame_bb.min.y), frame_bb.max, bg_col, style.frame_rounding);
            if value_x2 + arrow_size - style.frame_padding.x <= frame_bb.max.x {
                self.render_arrow(vec2(value_x2 + style.frame_padding.y, frame_bb.min.y + style.frame_padding.y), text_col, Dir::Down, 1.0);
            }
        }
        self.render_frame_border(frame_bb.min, frame_bb.max, style.frame_rounding);
        if !flags.contains(ComboFlags::NO_PREVIEW) {
            let text_min = vec2(frame_bb.min.x + style.frame_padding.x, frame_bb.min.y + style.frame_padding.y);
            self.render_text_clipped(text_min, vec2(value_x2, frame_bb.max.y), preview_value, None, vec2(0.0, 0.0), None);
        }
        if label_size.x > 0.0 {
            self.render_text(vec2(frame_bb.max.x + style.item_inner_spacing.x, frame_bb.min.y + style.frame_padding.y), label, true);
        }

        if !popup_open {
            return false;
        }

        self.next_window_data.flags = backup_next_window_data_flags;
        if !self.is_popup_open_id(popup_id, PopupFlags::empty()) {
            self.next_window_data.clear_flags();
            return false;
        }

        // the list is at least as wide as the frame
        let w = frame_bb.width();
        if self.next_window_data.flags.contains(NextWindowDataFlags::HAS_SIZE_CONSTRAINT) {
            self.next_window_data.size_constraint_rect.min.x = self.next_window_data.size_constraint_rect.min.x.max(w);
        } else {
            let items = if flags.contains(ComboFlags::HEIGHT_SMALL) {
                4
            } else if flags.contains(ComboFlags::HEIGHT_LARGE) {
                20
            } else if flags.contains(ComboFlags::HEIGHT_LARGEST) {
                -1
            } else {
                8
            };
            let max_h = self.calc_max_popup_height_from_item_count(items);
            self.set_next_window_size_constraints(vec2(w, 0.0), vec2(f32::MAX, max_h), None);
        }

        let name = format!("##Combo_{:02}", self.begin_popup_stack.len());
        if let Some(popup_window) = self.find_window_by_name(&name) {
            if self.windows[popup_window.0].was_active {
                let size_expected = self.calc_window_expected_size(popup_window);
                let mut last_dir = Some(if flags.contains(ComboFlags::POPUP_ALIGN_LEFT) { Dir::Left } else { Dir::Down });
                let r_outer = self.get_window_allowed_extent_rect();
                let pos = self.find_best_window_pos_for_popup_ex(frame_bb.bl(), size_expected, &mut last_dir, &r_outer, &frame_bb, PopupPositionPolicy::ComboBox);
                self.windows[popup_window.0].auto_pos_last_direction = last_dir;
                self.set_next_window_pos(pos, Cond::NONE, vec2(0.0, 0.0));
            }
        }

        let window_flags = WindowFlags::ALWAYS_AUTO_RESIZE
            | WindowFlags::POPUP
            | WindowFlags::NO_TITLE_BAR
            | WindowFlags::NO_RESIZE
            | WindowFlags::NO_SAVED_SETTINGS
            | WindowFlags::NO_MOVE;
        // list entries line up with the preview text
        let padding = vec2(style.frame_padding.x, style.window_padding.y);
        let ret = self.with_style_var(StyleVar::WindowPadding, StyleVarValue::Vec2(padding), |ctx| ctx.begin(&name, window_flags));
        if !ret {
            self.end_popup();
            return false;
        }
        true
    }

    /// Ends a combo box list opened by [`Context::begin_combo`].
    pub fn end_combo(&mut self) { self.end_popup() }

    /// Calls `f` inside the list of the combo box `label` when it is open.
    pub fn combo<R>(&mut self, label: &str, preview_value: &str, flags: ComboFlags, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !self.begin_combo(label, preview_value, flags) {
            return None;
        }
        let res = f(self);
        self.end_combo();
        Some(res)
    }

    /// Combo box over `items`; returns `true` when `current_item` changed.
    pub fn combo_items(&mut self, label: &str, current_item: &mut usize, items: &[&str]) -> bool {
        let preview = items.get(*current_item).copied().unwrap_or("");
        let mut changed = false;
        self.combo(label, preview, ComboFlags::empty(), |ctx| {
            for (i, item) in items.iter().enumerate() {
                let selected = i == *current_item;
                ctx.push_id_usize(i);
                if ctx.selectable(item, selected, SelectableFlags::empty(), vec2(0.0, 0.0)) && !selected {
                    *current_item = i;
                    changed = true;
                }
                if selected {
                    ctx.set_item_default_focus();
                }
                ctx.pop_id();
            }
        });
        if changed {
            let id = self.current_window_ref().dc.last_item_id;
            self.mark_item_edited(id);
        }
        changed
    }

    // menus

    /// Starts appending to the menu bar of the current window (created with `WindowFlags::MENU_BAR`).
    pub fn begin_menu_bar(&mut self) -> bool {
        let widx = self.current_window_idx();
        if self.windows[widx.0].skip_items || !self.windows[widx.0].flags.has_menu_bar() {
            return false;
        }
        assert!(!self.windows[widx.0].dc.menu_bar_appending, "begin_menu_bar() called twice");

        self.begin_group();
        self.push_id("##menubar");

        // clip to the bar minus one rounding so long menus do not draw over the rounded corner
        let (bar_rect, clip_rect) = {
            let w = &self.windows[widx.0];
            let bar_rect = w.menu_bar_rect(self.font_size, &self.style);
            let mut clip_rect = Rect::from_coords(
                (bar_rect.min.x + w.window_border_size).round(),
                (bar_rect.min.y + w.window_border_size).round(),
                bar_rect.min.x.max(bar_rect.max.x - w.window_rounding.max(w.window_border_size)).round(),
                bar_rect.max.y.round(),
            );
            clip_rect.clip_with(&w.outer_rect_clipped);
            (bar_rect, clip_rect)
        };
        self.push_clip_rect(clip_rect.min, clip_rect.max, false);

        let w = &mut self.windows[widx.0];
        w.dc.cursor_pos = vec2(bar_rect.min.x + w.dc.menu_bar_offset.x, bar_rect.min.y + w.dc.menu_bar_offset.y);
        w.dc.cursor_max_pos = w.dc.cursor_pos;
        w.dc.layout_type = LayoutType::Horizontal;
        w.dc.nav_layer_current = NavLayer::Menu;
        w.dc.menu_bar_appending = true;
        self.align_text_to_frame_padding();
        true
    }

    /// Ends the menu bar started by [`Context::begin_menu_bar`].
    pub fn end_menu_bar(&mut self) {
        let widx = self.current_window_idx();
        if self.windows[widx.0].skip_items {
            return;
        }

        // a left/right move that failed inside a child menu moves to the sibling menu
        if self.nav_move_request_but_no_result_yet() && matches!(self.nav_move_dir, Some(Dir::Left) | Some(Dir::Right)) {
            if let Some(nav_window) = self.nav_window {
                if self.windows[nav_window.0].flags.is_child_menu() {
                    let mut nav_earliest_child = nav_window;
                    while let Some(p) = self.windows[nav_earliest_child.0].parent_window {
                        if !self.windows[p.0].flags.is_child_menu() {
                            break;
                        }
                        nav_earliest_child = p;
                    }
                    let ec = &self.windows[nav_earliest_child.0];
                    if ec.parent_window == Some(widx) && ec.dc.parent_layout_type == LayoutType::Horizontal && self.nav_move_request_forward == NavForward::None {
                        // take the focus back and replay the move on the next frame
                        let layer = NavLayer::Menu;
                        assert!(self.windows[widx.0].dc.nav_layers_active_mask_next & (1 << layer.index()) != 0);
                        self.focus_window(Some(widx));
                        let (last_id, rect_rel) = {
                            let w = &self.windows[widx.0];
                            (w.nav_last_ids[layer.index()], w.nav_rect_rel[layer.index()])
                        };
                        self.set_nav_id_with_rect_rel(last_id, layer, Id::NONE, rect_rel);
                        self.nav_layer = layer;
                        self.nav_disable_highlight = true;
                        self.nav_move_request_forward = NavForward::ForwardQueued;
                        self.nav_move_request_cancel();
                    }
                }
            }
        }

        assert!(self.windows[widx.0].flags.has_menu_bar());
        assert!(self.windows[widx.0].dc.menu_bar_appending, "end_menu_bar() without begin_menu_bar()");
        self.pop_clip_rect();
        self.pop_id();
        {
            let w = &mut self.windows[widx.0];
            let bar_min_x = w.menu_bar_rect(self.font_size, &self.style).min.x;
            w.dc.menu_bar_offset.x = w.dc.cursor_pos.x - bar_min_x;
        }
        if let Some(g) = self.group_stack.last_mut() {
            g.emit_item = false;
        }
        self.end_group();
        let w = &mut self.windows[widx.0];
        w.dc.layout_type = LayoutType::Vertical;
        w.dc.nav_layer_current = NavLayer::Main;
        w.dc.menu_bar_appending = false;
    }

    /// Calls `f` while appending to the current window's menu bar.
    pub fn menu_bar<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !self.begin_menu_bar() {
            return None;
        }
        let res = f(self);
        self.end_menu_bar();
        Some(res)
    }

    /// Draws a menu entry and begins its sub-menu when open. Pair a `true` return with
    /// [`Context::end_menu`].
    ///
    /// Menus open on click in a menu bar, then follow the mouse between siblings; inside another
    /// menu they open on hover.
    pub fn begin_menu(&mut self, label: &str, enabled: bool) -> bool {
        let widx = self.current_window_idx();
        if self.windows[widx.0].skip_items {
            return false;
        }

        let style = self.style;
        let id = self.windows[widx.0].get_id(label);
        let mut menu_is_open = self.is_popup_open_id(id, PopupFlags::empty());

        // sub-menus are child windows so the mouse can hover across the whole chain
        let mut flags = WindowFlags::CHILD_MENU
            | WindowFlags::ALWAYS_AUTO_RESIZE
            | WindowFlags::NO_MOVE
            | WindowFlags::NO_TITLE_BAR
            | WindowFlags::NO_SAVED_SETTINGS
            | WindowFlags::NO_NAV_FOCUS;
        if self.windows[widx.0].flags.intersects(WindowFlags::POPUP | WindowFlags::CHILD_MENU) {
            flags |= WindowFlags::CHILD_WINDOW;
        }

        // a second submission of the same menu appends to it
        if self.menus_id_submitted_this_frame.contains(&id) {
            if menu_is_open {
                menu_is_open = self.begin_popup_ex(id, flags);
            } else {
                self.next_window_data.clear_flags();
            }
            return menu_is_open;
        }
        self.menus_id_submitted_this_frame.push(id);

        let label_size = self.calc_text_size(label, true);
        let level = self.begin_popup_stack.len();
        let parent_id = self.windows[widx.0].id_stack.last().copied().unwrap_or(Id::NONE);
        let menuset_is_open = !self.windows[widx.0].flags.is_popup() && self.open_popup_stack.len() > level && self.open_popup_stack[level].open_parent_id == parent_id;
        let backed_nav_window = self.nav_window;
        if menuset_is_open {
            // lets the mouse hover the other menus of the set
            self.nav_window = Some(widx);
        }

        let selectable_flags = SelectableFlags::NO_HOLDING_ACTIVE_ID
            | SelectableFlags::SELECT_ON_CLICK
            | SelectableFlags::DONT_CLOSE_POPUPS
            | if enabled { SelectableFlags::empty() } else { SelectableFlags::DISABLED };
        let pos = self.windows[widx.0].dc.cursor_pos;
        let layout_type = self.windows[widx.0].dc.layout_type;
        let popup_pos;
        let pressed;
        if layout_type == LayoutType::Horizontal {
            // the final position of a child menu is picked by find_best_window_pos_for_popup
            let menu_bar_height = self.windows[widx.0].menu_bar_height(self.font_size, &style);
            popup_pos = vec2(pos.x - 1.0 - (style.item_spacing.x * 0.5).floor(), pos.y - style.frame_padding.y + menu_bar_height);
            self.current_window_mut().dc.cursor_pos.x += (style.item_spacing.x * 0.5).floor();
            let spacing = vec2(style.item_spacing.x * 2.0, style.item_spacing.y);
            pressed = self.with_style_var(StyleVar::ItemSpacing, StyleVarValue::Vec2(spacing), |ctx| {
                ctx.selectable(label, menu_is_open, selectable_flags, vec2(label_size.x, 0.0))
            });
            self.current_window_mut().dc.cursor_pos.x += (style.item_spacing.x * (-1.0 + 0.5)).floor();
        } else {
            popup_pos = vec2(pos.x, pos.y - style.window_padding.y);
            let arrow_w = (self.font_size * 1.20).floor();
            let min_w = self.current_window_mut().dc.menu_columns.decl_columns(label_size.x, 0.0, arrow_w);
            let extra_w = (self.get_content_region_avail().x - min_w).max(0.0);
            pressed = self.selectable(label, menu_is_open, selectable_flags | SelectableFlags::SPAN_AVAIL_WIDTH, vec2(min_w, 0.0));
            let text_col = self.get_color(if enabled { StyleColor::Text } else { StyleColor::TextDisabled }, 1.0);
            let arrow_x = self.windows[widx.0].dc.menu_columns.pos[2] + extra_w + self.font_size * 0.30;
            self.render_arrow(vec2(pos.x + arrow_x, pos.y), text_col, Dir::Right, 1.0);
        }

        let last_item_rect = self.windows[widx.0].dc.last_item_rect;
        let hovered = enabled && self.item_hoverable(&last_item_rect, id);
        if menuset_is_open {
            self.nav_window = backed_nav_window;
        }

        let mut want_open = false;
        let mut want_close = false;
        if layout_type == LayoutType::Vertical {
            // keep the sub-menu open while the mouse travels toward it
            let mut moving_toward_other_child_menu = false;
            let child_menu_window = if level < self.open_popup_stack.len() && self.open_popup_stack[level].source_window == Some(widx) {
                self.open_popup_stack[level].window
            } else {
                None
            };
            if let Some(child) = child_menu_window {
                if self.hovered_window == Some(widx) && !self.windows[widx.0].flags.has_menu_bar() {
                    let next_window_rect = self.windows[child.0].rect();
                    let child_on_right = self.windows[widx.0].pos.x < self.windows[child.0].pos.x;
                    let mut ta = vec2(self.io.mouse_pos.x - self.io.mouse_delta.x, self.io.mouse_pos.y - self.io.mouse_delta.y);
                    let mut tb = if child_on_right { next_window_rect.tl() } else { next_window_rect.tr() };
                    let mut tc = if child_on_right { next_window_rect.bl() } else { next_window_rect.br() };
                    let extra = ((ta.x - tb.x).abs() * 0.30).clamp(5.0, 30.0);
                    ta.x += if child_on_right { -0.5 } else { 0.5 };
                    tb.y = ta.y + ((tb.y - extra) - ta.y).max(-100.0);
                    tc.y = ta.y + ((tc.y + extra) - ta.y).min(100.0);
                    moving_toward_other_child_menu = triangle_contains_point(ta, tb, tc, self.io.mouse_pos);
                }
            }
            if menu_is_open
                && !hovered
                && self.hovered_window == Some(widx)
                && self.hovered_id_previous_frame.is_some()
                && self.hovered_id_previous_frame != id
                && !moving_toward_other_child_menu
            {
                want_close = true;
            }

            if !menu_is_open && hovered && (pressed || !moving_toward_other_child_menu) {
                want_open = true;
            }

            if self.nav_activate_id == id {
                want_close = menu_is_open;
                want_open = !menu_is_open;
            }
            if self.nav_id == id && self.nav_move_request && self.nav_move_dir == Some(Dir::Right) {
                want_open = true;
                self.nav_move_request_cancel();
            }
        } else if menu_is_open && pressed && menuset_is_open {
            // clicking an open menu of the bar closes it
            want_close = true;
            menu_is_open = false;
        } else if pressed || (hovered && menuset_is_open && !menu_is_open) {
            want_open = true;
        } else if self.nav_id == id && self.nav_move_request && self.nav_move_dir == Some(Dir::Down) {
            want_open = true;
            self.nav_move_request_cancel();
        }

        if !enabled {
            want_close = true;
        }
        if want_close && self.is_popup_open_id(id, PopupFlags::empty()) {
            self.close_popup_to_level(level, true);
        }

        if !menu_is_open && want_open && self.open_popup_stack.len() > level {
            // another menu of this level is open: close it and open this one next frame
            self.open_popup_ex(id, PopupFlags::empty());
            return false;
        }

        menu_is_open |= want_open;
        if want_open {
            self.open_popup_ex(id, PopupFlags::empty());
        }

        if menu_is_open {
            self.set_next_window_pos(popup_pos, Cond::ALWAYS, vec2(0.0, 0.0));
            menu_is_open = self.begin_popup_ex(id, flags);
        } else {
            self.next_window_data.clear_flags();
        }
        menu_is_open
    }

    /// Ends a menu started by [`Context::begin_menu`].
    pub fn end_menu(&mut self) {
        // a left move that failed in our child menu closes it
        let widx = self.current_window_idx();
        if let Some(nav_window) = self.nav_window {
            if self.windows[nav_window.0].parent_window == Some(widx)
                && self.nav_move_dir == Some(Dir::Left)
                && self.nav_move_request_but_no_result_yet()
                && self.windows[widx.0].dc.layout_type == LayoutType::Vertical
            {
                self.close_popup_to_level(self.begin_popup_stack.len(), true);
                self.nav_move_request_cancel();
            }
        }
        self.end_popup();
    }

    /// Calls `f` inside the menu `label` when it is open.
    pub fn menu<R>(&mut self, label: &str, enabled: bool, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !self.begin_menu(label, enabled) {
            return None;
        }
        let res = f(self);
        self.end_menu();
        Some(res)
    }

    /// Draws a menu entry with an optional shortcut hint and check mark. Returns `true` when
    /// activated; activation closes the menu chain.
    pub fn menu_item(&mut self, label: &str, shortcut: Option<&str>, selected: bool, enabled: bool) -> bool {
        let widx = self.current_window_idx();
        if self.windows[widx.0].skip_items {
            return false;
        }

        let style = self.style;
        let pos = self.windows[widx.0].dc.cursor_pos;
        let label_size = self.calc_text_size(label, true);
        let flags = SelectableFlags::SELECT_ON_RELEASE | SelectableFlags::SET_NAV_ID_ON_HOVER | if enabled { SelectableFlags::empty() } else { SelectableFlags::DISABLED };

        if self.windows[widx.0].dc.layout_type == LayoutType::Horizontal {
            // same spacing as begin_menu in a bar; no shortcut nor check mark there
            self.current_window_mut().dc.cursor_pos.x += (style.item_spacing.x * 0.5).floor();
            let spacing = vec2(style.item_spacing.x * 2.0, style.item_spacing.y);
            let pressed = self.with_style_var(StyleVar::ItemSpacing, StyleVarValue::Vec2(spacing), |ctx| ctx.selectable(label, false, flags, vec2(label_size.x, 0.0)));
            self.current_window_mut().dc.cursor_pos.x += (style.item_spacing.x * (-1.0 + 0.5)).floor();
            return pressed;
        }

        let shortcut_w = shortcut.map_or(0.0, |s| self.calc_text_size(s, false).x);
        let check_w = (self.font_size * 1.20).floor();
        let min_w = self.current_window_mut().dc.menu_columns.decl_columns(label_size.x, shortcut_w, check_w);
        let extra_w = (self.get_content_region_avail().x - min_w).max(0.0);
        let pressed = self.selectable(label, false, flags | SelectableFlags::SPAN_AVAIL_WIDTH, vec2(min_w, 0.0));
        let columns = self.windows[widx.0].dc.menu_columns;
        if let Some(shortcut) = shortcut.filter(|_| shortcut_w > 0.0) {
            let disabled = self.style.color(StyleColor::TextDisabled);
            self.with_style_color(StyleColor::Text, disabled, |ctx| ctx.render_text(vec2(pos.x + columns.pos[1] + extra_w, pos.y), shortcut, false));
        }
        if selected {
            let col = self.get_color(if enabled { StyleColor::Text } else { StyleColor::TextDisabled }, 1.0);
            let check_pos = vec2(pos.x + columns.pos[2] + extra_w + self.font_size * 0.40, pos.y + self.font_size * 0.134 * 0.5);
            self.render_check_mark(check_pos, col, self.font_size * 0.866);
        }
        pressed
    }

    /// [`Context::menu_item`] toggling `selected` when activated.
    pub fn menu_item_toggle(&mut self, label: &str, shortcut: Option<&str>, selected: &mut bool, enabled: bool) -> bool {
        if self.menu_item(label, shortcut, *selected, enabled) {
            *selected = !*selected;
            return true;
        }
        false
    }
}

fn triangle_contains_point(a: Vec2f, b: Vec2f, c: Vec2f, p: Vec2f) -> bool {
    let side = |p0: Vec2f, p1: Vec2f| (p1.x - p0.x) * (p.y - p0.y) - (p1.y - p0.y) * (p.x - p0.x) < 0.0;
    let b1 = side(a, b);
    let b2 = side(b, c);
    let b3 = side(c, a);
    b1 == b2 && b2 == b3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host<F: FnOnce(&mut Context)>(ctx: &mut Context, flags: WindowFlags, f: F) {
        ctx.frame(|ctx| {
            ctx.set_next_window_pos(vec2(10.0, 10.0), Cond::ALWAYS, vec2(0.0, 0.0));
            ctx.set_next_window_size(vec2(300.0, 200.0), Cond::ALWAYS);
            ctx.window("Host", flags, f);
        });
    }

    fn headless() -> Context {
        let mut ctx = Context::new_headless();
        ctx.io.mouse_move(20.0, 20.0);
        ctx
    }

    #[test]
    fn popup_opens_and_submits() {
        let mut ctx = headless();
        let mut shown = 0;
        for frame in 0..3 {
            host(&mut ctx, WindowFlags::empty(), |ctx| {
                if frame == 0 {
                    ctx.open_popup("menu", PopupFlags::empty());
                }
                if ctx.popup("menu", WindowFlags::empty(), |ctx| ctx.text("inside")).is_some() {
                    shown += 1;
                }
            });
        }
        assert_eq!(shown, 3);
        assert_eq!(ctx.open_popup_stack.len(), 1);
        assert!(ctx.open_popup_stack[0].window.is_some());
        assert!(ctx.begin_popup_stack.is_empty());
    }

    #[test]
    fn begin_popup_without_open_is_false() {
        let mut ctx = headless();
        host(&mut ctx, WindowFlags::empty(), |ctx| {
            assert!(!ctx.begin_popup("nothing", WindowFlags::empty()));
            assert!(!ctx.is_popup_open("nothing", PopupFlags::empty()));
        });
    }

    #[test]
    fn nested_popups_stack_by_level() {
        let mut ctx = headless();
        for frame in 0..3 {
            host(&mut ctx, WindowFlags::empty(), |ctx| {
                if frame == 0 {
                    ctx.open_popup("outer", PopupFlags::empty());
                }
                ctx.popup("outer", WindowFlags::empty(), |ctx| {
                    if frame == 1 {
                        ctx.open_popup("inner", PopupFlags::empty());
                    }
                    ctx.popup("inner", WindowFlags::empty(), |ctx| {
                        assert_eq!(ctx.begin_popup_stack.len(), 2);
                        assert!(ctx.is_popup_open_id(Id::NONE, PopupFlags::ANY_POPUP));
                    });
                });
            });
            assert!(ctx.begin_popup_stack.len() <= ctx.open_popup_stack.len());
        }
        assert_eq!(ctx.open_popup_stack.len(), 2);

        // closing the outer level drops the inner one too
        ctx.close_popup_to_level(0, false);
        assert!(ctx.open_popup_stack.is_empty());
    }

    #[test]
    fn reopening_in_the_same_frame_keeps_the_popup() {
        let mut ctx = headless();
        host(&mut ctx, WindowFlags::empty(), |ctx| {
            ctx.open_popup("p", PopupFlags::empty());
            let opened_at = ctx.open_popup_stack[0].open_frame_count;
            ctx.open_popup("p", PopupFlags::empty());
            assert_eq!(ctx.open_popup_stack.len(), 1);
            assert_eq!(ctx.open_popup_stack[0].open_frame_count, opened_at);
        });
    }

    #[test]
    fn opening_another_popup_replaces_the_level() {
        let mut ctx = headless();
        host(&mut ctx, WindowFlags::empty(), |ctx| {
            ctx.open_popup("a", PopupFlags::empty());
            ctx.open_popup("b", PopupFlags::empty());
            assert_eq!(ctx.open_popup_stack.len(), 1);
            assert!(ctx.is_popup_open("b", PopupFlags::empty()));
            assert!(!ctx.is_popup_open("a", PopupFlags::empty()));

            // refused while something is open at this level
            ctx.open_popup("c", PopupFlags::NO_OPEN_OVER_EXISTING_POPUP);
            assert!(ctx.is_popup_open("b", PopupFlags::empty()));
        });
    }

    #[test]
    fn click_in_the_void_closes_popups() {
        let mut ctx = headless();
        for frame in 0..3 {
            host(&mut ctx, WindowFlags::empty(), |ctx| {
                if frame == 0 {
                    ctx.open_popup("p", PopupFlags::empty());
                }
                ctx.popup("p", WindowFlags::empty(), |ctx| ctx.text("x"));
            });
        }
        assert_eq!(ctx.open_popup_stack.len(), 1);

        ctx.io.mouse_move(790.0, 590.0);
        ctx.io.mouse_down(MouseButton::Left);
        host(&mut ctx, WindowFlags::empty(), |ctx| {
            ctx.popup("p", WindowFlags::empty(), |ctx| ctx.text("x"));
        });
        assert!(ctx.open_popup_stack.is_empty());
    }

    #[test]
    fn close_current_popup_from_inside() {
        let mut ctx = headless();
        for frame in 0..3 {
            host(&mut ctx, WindowFlags::empty(), |ctx| {
                if frame == 0 {
                    ctx.open_popup("p", PopupFlags::empty());
                }
                ctx.popup("p", WindowFlags::empty(), |ctx| {
                    if frame == 1 {
                        ctx.close_current_popup();
                    }
                });
            });
        }
        assert!(ctx.open_popup_stack.is_empty());
    }

    #[test]
    fn modal_is_top_most_and_centered() {
        let mut ctx = headless();
        let mut modal = None;
        for frame in 0..3 {
            host(&mut ctx, WindowFlags::empty(), |ctx| {
                if frame == 0 {
                    ctx.open_popup("Confirm", PopupFlags::empty());
                }
                ctx.popup_modal("Confirm", None, WindowFlags::ALWAYS_AUTO_RESIZE, |ctx| {
                    ctx.text("Sure?");
                    modal = ctx.get_current_window();
                });
            });
        }
        let modal = modal.unwrap();
        assert_eq!(ctx.get_top_most_popup_modal(), Some(modal));
        let w = ctx.get_window(modal);
        let center = vec2(w.pos.x + w.size.x * 0.5, w.pos.y + w.size.y * 0.5);
        assert!((center.x - 400.0).abs() < 1.0);
        assert!((center.y - 300.0).abs() < 1.0);
    }

    #[test]
    fn modal_close_flag_closes_it() {
        let mut ctx = headless();
        let mut open = true;
        for frame in 0..3 {
            host(&mut ctx, WindowFlags::empty(), |ctx| {
                if frame == 0 {
                    ctx.open_popup("Modal", PopupFlags::empty());
                }
                if frame == 2 {
                    open = false;
                }
                ctx.popup_modal("Modal", Some(&mut open), WindowFlags::empty(), |_| {});
            });
        }
        assert!(ctx.open_popup_stack.is_empty());
    }

    #[test]
    fn default_placement_prefers_the_right() {
        let ctx = headless();
        let r_outer = Rect::from_coords(0.0, 0.0, 800.0, 600.0);
        let size = vec2(50.0, 50.0);

        let mut dir = None;
        let r_avoid = Rect::from_coords(99.0, 99.0, 101.0, 101.0);
        let pos = ctx.find_best_window_pos_for_popup_ex(vec2(100.0, 100.0), size, &mut dir, &r_outer, &r_avoid, PopupPositionPolicy::Default);
        assert_eq!(dir, Some(Dir::Right));
        assert_eq!((pos.x, pos.y), (101.0, 100.0));

        // no room on the right: goes below, clamped inside the display
        let mut dir = None;
        let r_avoid = Rect::from_coords(789.0, 99.0, 791.0, 101.0);
        let pos = ctx.find_best_window_pos_for_popup_ex(vec2(790.0, 100.0), size, &mut dir, &r_outer, &r_avoid, PopupPositionPolicy::Default);
        assert_eq!(dir, Some(Dir::Down));
        assert_eq!((pos.x, pos.y), (750.0, 101.0));
    }

    #[test]
    fn combo_placement_keeps_an_edge_on_the_frame() {
        let ctx = headless();
        let r_outer = Rect::from_coords(0.0, 0.0, 800.0, 600.0);
        let size = vec2(100.0, 50.0);

        let mut dir = None;
        let frame = Rect::from_coords(100.0, 100.0, 200.0, 120.0);
        let pos = ctx.find_best_window_pos_for_popup_ex(frame.bl(), size, &mut dir, &r_outer, &frame, PopupPositionPolicy::ComboBox);
        assert_eq!(dir, Some(Dir::Down));
        assert_eq!((pos.x, pos.y), (100.0, 120.0));

        // at the bottom of the display the list opens above
        let mut dir = None;
        let frame = Rect::from_coords(100.0, 580.0, 200.0, 600.0);
        let pos = ctx.find_best_window_pos_for_popup_ex(frame.bl(), size, &mut dir, &r_outer, &frame, PopupPositionPolicy::ComboBox);
        assert_eq!(dir, Some(Dir::Right));
        assert_eq!((pos.x, pos.y), (100.0, 530.0));
    }

    #[test]
    fn last_direction_is_tried_first() {
        let ctx = headless();
        let r_outer = Rect::from_coords(0.0, 0.0, 800.0, 600.0);
        let r_avoid = Rect::from_coords(399.0, 299.0, 401.0, 301.0);
        let mut dir = Some(Dir::Left);
        let pos = ctx.find_best_window_pos_for_popup_ex(vec2(400.0, 300.0), vec2(50.0, 50.0), &mut dir, &r_outer, &r_avoid, PopupPositionPolicy::Default);
        assert_eq!(dir, Some(Dir::Left));
        assert_eq!((pos.x, pos.y), (349.0, 300.0));
    }

    #[test]
    fn tooltip_without_room_sits_next_to_the_cursor() {
        let ctx = headless();
        let r_outer = Rect::from_coords(0.0, 0.0, 100.0, 100.0);
        let r_avoid = Rect::from_coords(34.0, 42.0, 74.0, 74.0);
        let mut dir = None;
        let pos = ctx.find_best_window_pos_for_popup_ex(vec2(50.0, 50.0), vec2(200.0, 200.0), &mut dir, &r_outer, &r_avoid, PopupPositionPolicy::Tooltip);
        assert_eq!(dir, None);
        assert_eq!((pos.x, pos.y), (52.0, 52.0));
    }

    #[test]
    fn set_tooltip_overrides_the_previous_one() {
        let mut ctx = headless();
        host(&mut ctx, WindowFlags::empty(), |ctx| {
            ctx.set_tooltip("first");
            ctx.set_tooltip("second");
        });
        assert!(ctx.find_window_by_name("##Tooltip_00").is_some());
        assert!(ctx.find_window_by_name("##Tooltip_01").is_some());
        let w = ctx.find_window_by_name("##Tooltip_00").unwrap();
        assert!(ctx.get_window(w).hidden);
    }

    #[test]
    fn menu_columns_line_up_on_the_widest_item() {
        let mut columns = crate::window::MenuColumns::default();
        columns.update(8.0, true);
        columns.decl_columns(40.0, 0.0, 12.0);
        columns.decl_columns(60.0, 30.0, 12.0);
        columns.update(8.0, false);
        assert_eq!(columns.pos, [0.0, 68.0, 106.0]);
        assert_eq!(columns.width, 118.0);
    }

    #[test]
    fn clicking_a_menu_bar_entry_opens_it() {
        let mut ctx = headless();
        let mut item_center = vec2(0.0, 0.0);
        let mut menu_id = Id::NONE;
        let frame = |ctx: &mut Context, item_center: &mut Vec2f, menu_id: &mut Id| {
            host(ctx, WindowFlags::MENU_BAR, |ctx| {
                ctx.menu_bar(|ctx| {
                    *menu_id = ctx.get_id("File");
                    ctx.menu("File", true, |ctx| {
                        ctx.menu_item("Open", Some("Ctrl+O"), false, true);
                    });
                    *item_center = ctx.current_window_ref().dc.last_item_rect.center();
                });
            });
        };
        frame(&mut ctx, &mut item_center, &mut menu_id);
        frame(&mut ctx, &mut item_center, &mut menu_id);
        assert!(ctx.open_popup_stack.is_empty());

        ctx.io.mouse_move(item_center.x, item_center.y);
        frame(&mut ctx, &mut item_center, &mut menu_id);
        ctx.io.mouse_down(MouseButton::Left);
        frame(&mut ctx, &mut item_center, &mut menu_id);
        ctx.io.mouse_up(MouseButton::Left);
        frame(&mut ctx, &mut item_center, &mut menu_id);
        assert_eq!(ctx.open_popup_stack.len(), 1);
        assert_eq!(ctx.open_popup_stack[0].popup_id, menu_id);
    }

    #[test]
    fn triangle_test() {
        let (a, b, c) = (vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(0.0, 10.0));
        assert!(triangle_contains_point(a, b, c, vec2(2.0, 2.0)));
        assert!(!triangle_contains_point(a, b, c, vec2(8.0, 8.0)));
    }
}
