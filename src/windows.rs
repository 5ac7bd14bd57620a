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
use crate::window::{NextWindowDataFlags, StackSizes};
use crate::*;

const WINDOW_DEFAULT_POS: Vec2f = Vec2f { x: 60.0, y: 60.0 };

impl Context {
    fn create_new_window(&mut self, name: &str, flags: WindowFlags) -> WindowIdx {
        let idx = WindowIdx(self.windows.len());
        let mut window = Window::new(name, idx);
        window.flags = flags;
        window.pos = WINDOW_DEFAULT_POS;
        let id = window.id;
        self.windows.push(window);
        self.windows_by_id.insert(id, idx);

        if !flags.contains(WindowFlags::NO_SAVED_SETTINGS) {
            if let Some(offset) = self.find_window_settings(id) {
                self.windows[idx.0].settings_offset = Some(offset);
                self.set_window_condition_allow_flags(idx, Cond::FIRST_USE_EVER, false);
                self.apply_window_settings(idx, offset);
            }
        }

        let w = &mut self.windows[idx.0];
        w.dc.cursor_start_pos = w.pos;
        w.dc.cursor_max_pos = w.pos;
        if flags.is_auto_resize() {
            w.auto_fit_frames_x = 2;
            w.auto_fit_frames_y = 2;
            w.auto_fit_only_grows = false;
        } else {
            if w.size.x <= 0.0 {
                w.auto_fit_frames_x = 2;
            }
            if w.size.y <= 0.0 {
                w.auto_fit_frames_y = 2;
            }
            w.auto_fit_only_grows = w.auto_fit_frames_x > 0 || w.auto_fit_frames_y > 0;
        }

        self.focus_order.push(idx);
        if flags.contains(WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS) {
            self.display_order.insert(0, idx);
        } else {
            self.display_order.push(idx);
        }
        debug!("created window '{}'", name);
        idx
    }

    fn set_window_condition_allow_flags(&mut self, idx: WindowIdx, flags: Cond, enabled: bool) {
        let w = &mut self.windows[idx.0];
        w.set_window_pos_allow_flags.set(flags, enabled);
        w.set_window_size_allow_flags.set(flags, enabled);
        w.set_window_collapsed_allow_flags.set(flags, enabled);
    }

    pub(crate) fn set_window_pos_ex(&mut self, idx: WindowIdx, pos: Vec2f, cond: Cond) {
        let w = &mut self.windows[idx.0];
        if !cond.is_empty() && !w.set_window_pos_allow_flags.intersects(cond) {
            return;
        }
        w.set_window_pos_allow_flags.remove(Cond::ONCE | Cond::FIRST_USE_EVER | Cond::APPEARING);
        w.set_window_pos_val = vec2(f32::MAX, f32::MAX);

        // keep the cursor consistent when moving a window that is being appended to
        let old_pos = w.pos;
        w.pos = vec2_floor(pos);
        let offset = vec2(w.pos.x - old_pos.x, w.pos.y - old_pos.y);
        for p in [&mut w.dc.cursor_pos, &mut w.dc.cursor_max_pos, &mut w.dc.ideal_max_pos, &mut w.dc.cursor_start_pos] {
            p.x += offset.x;
            p.y += offset.y;
        }
    }

    pub(crate) fn set_window_size_ex(&mut self, idx: WindowIdx, size: Vec2f, cond: Cond) {
        let w = &mut self.windows[idx.0];
        if !cond.is_empty() && !w.set_window_size_allow_flags.intersects(cond) {
            return;
        }
        w.set_window_size_allow_flags.remove(Cond::ONCE | Cond::FIRST_USE_EVER | Cond::APPEARING);

        // zero or negative means auto-fit on that axis
        if size.x > 0.0 {
            w.auto_fit_frames_x = 0;
            w.size_full.x = size.x.floor();
        } else {
            w.auto_fit_frames_x = 2;
            w.auto_fit_only_grows = false;
        }
        if size.y > 0.0 {
            w.auto_fit_frames_y = 0;
            w.size_full.y = size.y.floor();
        } else {
            w.auto_fit_frames_y = 2;
            w.auto_fit_only_grows = false;
        }
    }

    pub(crate) fn set_window_collapsed_ex(&mut self, idx: WindowIdx, collapsed: bool, cond: Cond) {
        let w = &mut self.windows[idx.0];
        if !cond.is_empty() && !w.set_window_collapsed_allow_flags.intersects(cond) {
            return;
        }
        w.set_window_collapsed_allow_flags.remove(Cond::ONCE | Cond::FIRST_USE_EVER | Cond::APPEARING);
        w.collapsed = collapsed;
    }

    fn update_window_parent_and_root_links(&mut self, idx: WindowIdx, flags: WindowFlags, parent: Option<WindowIdx>) {
        let (root, root_for_highlight) = match parent {
            Some(p) => {
                let pw = &self.windows[p.0];
                let root = if flags.is_child() && !flags.is_tooltip() { pw.root_window } else { idx };
                let highlight = if !flags.is_modal() && flags.intersects(WindowFlags::CHILD_WINDOW | WindowFlags::POPUP) { pw.root_window_for_title_bar_highlight } else { idx };
                (root, highlight)
            }
            None => (idx, idx),
        };
        let w = &mut self.windows[idx.0];
        w.parent_window = parent;
        w.root_window = root;
        w.root_window_for_title_bar_highlight = root_for_highlight;
        w.root_window_for_nav = idx;

        let mut nav_root = idx;
        while self.windows[nav_root.0].flags.contains(WindowFlags::NAV_FLATTENED) {
            match self.windows[nav_root.0].parent_window {
                Some(p) => nav_root = p,
                None => panic!("navigation-flattened window '{}' has no parent", self.windows[nav_root.0].name),
            }
        }
        self.windows[idx.0].root_window_for_nav = nav_root;
    }

    /// Content sizes measured from the cursor extents of the last submission.
    fn calc_window_content_sizes(&self, idx: WindowIdx) -> (Vec2f, Vec2f) {
        let w = &self.windows[idx.0];
        let preserve = (w.collapsed && w.auto_fit_frames_x <= 0 && w.auto_fit_frames_y <= 0)
            || (w.hidden && w.hidden_frames_cannot_skip_items == 0 && w.hidden_frames_can_skip_items > 0);
        if preserve {
            return (w.content_size, w.content_size_ideal);
        }
        let explicit = w.content_size_explicit;
        let start = w.dc.cursor_start_pos;
        let max = w.dc.cursor_max_pos;
        let ideal = vec2_max(w.dc.cursor_max_pos, w.dc.ideal_max_pos);
        let current = vec2(
            if explicit.x != 0.0 { explicit.x } else { (max.x - start.x).floor() },
            if explicit.y != 0.0 { explicit.y } else { (max.y - start.y).floor() },
        );
        let ideal = vec2(
            if explicit.x != 0.0 { explicit.x } else { (ideal.x - start.x).floor() },
            if explicit.y != 0.0 { explicit.y } else { (ideal.y - start.y).floor() },
        );
        (current, ideal)
    }

    fn decoration_up_height(&self, idx: WindowIdx) -> f32 {
        let w = &self.windows[idx.0];
        w.title_bar_height(self.font_size, &self.style) + w.menu_bar_height(self.font_size, &self.style)
    }

    fn calc_window_auto_fit_size(&mut self, idx: WindowIdx, size_contents: Vec2f) -> Vec2f {
        let flags = self.windows[idx.0].flags;
        let decoration_up_height = self.decoration_up_height(idx);
        let size_pad = vec2_scale(self.windows[idx.0].window_padding, 2.0);
        let size_desired = vec2(size_contents.x + size_pad.x, size_contents.y + size_pad.y + decoration_up_height);
        if flags.is_tooltip() {
            return size_desired;
        }

        let mut size_min = self.style.window_min_size;
        if flags.is_popup() || flags.is_child_menu() {
            size_min = vec2_min(size_min, vec2(4.0, 4.0));
        }
        let safe = self.style.display_safe_area_padding;
        let size_max = vec2_max(size_min, vec2(self.io.display_size.x - safe.x * 2.0, self.io.display_size.y - safe.y * 2.0));
        let mut size_auto_fit = vec2_clamp(size_desired, size_min, size_max);

        // grow the other axis when contents will not fit and a scrollbar appears
        let after_constraint = self.calc_window_size_after_constraint(idx, size_auto_fit);
        let will_have_scrollbar_x = (after_constraint.x - size_pad.x < size_contents.x
            && !flags.contains(WindowFlags::NO_SCROLLBAR)
            && flags.contains(WindowFlags::HORIZONTAL_SCROLLBAR))
            || flags.contains(WindowFlags::ALWAYS_HORIZONTAL_SCROLLBAR);
        let will_have_scrollbar_y = (after_constraint.y - size_pad.y - decoration_up_height < size_contents.y && !flags.contains(WindowFlags::NO_SCROLLBAR))
            || flags.contains(WindowFlags::ALWAYS_VERTICAL_SCROLLBAR);
        if will_have_scrollbar_x {
            size_auto_fit.y += self.style.scrollbar_size;
        }
        if will_have_scrollbar_y {
            size_auto_fit.x += self.style.scrollbar_size;
        }
        size_auto_fit
    }

    /// Applies the pending size constraints and the minimum window size to `size_desired`.
    pub(crate) fn calc_window_size_after_constraint(&mut self, idx: WindowIdx, size_desired: Vec2f) -> Vec2f {
        let mut new_size = size_desired;
        if self.next_window_data.flags.contains(NextWindowDataFlags::HAS_SIZE_CONSTRAINT) {
            // a negative bound keeps the current size on that axis
            let cr = self.next_window_data.size_constraint_rect;
            let w = &self.windows[idx.0];
            new_size.x = if cr.min.x >= 0.0 && cr.max.x >= 0.0 { new_size.x.max(cr.min.x).min(cr.max.x) } else { w.size_full.x };
            new_size.y = if cr.min.y >= 0.0 && cr.max.y >= 0.0 { new_size.y.max(cr.min.y).min(cr.max.y) } else { w.size_full.y };
            if let Some(cb) = self.next_window_data.size_callback.as_mut() {
                let mut data = SizeCallbackData { pos: w.pos, current_size: w.size_full, desired_size: new_size };
                cb(&mut data);
                new_size = data.desired_size;
            }
            new_size = vec2_floor(new_size);
        }

        let flags = self.windows[idx.0].flags;
        if !flags.intersects(WindowFlags::CHILD_WINDOW | WindowFlags::ALWAYS_AUTO_RESIZE) {
            let decoration_up_height = self.decoration_up_height(idx);
            new_size = vec2_max(new_size, self.style.window_min_size);
            new_size.y = new_size.y.max(decoration_up_height + (self.style.window_rounding - 1.0).max(0.0));
        }
        new_size
    }

    /// Size a window would take if it auto-fitted its last contents.
    pub fn calc_window_expected_size(&mut self, idx: WindowIdx) -> Vec2f {
        let (_, ideal) = self.calc_window_content_sizes(idx);
        let size_auto_fit = self.calc_window_auto_fit_size(idx, ideal);
        self.calc_window_size_after_constraint(idx, size_auto_fit)
    }

    fn stack_sizes(&self, idx: WindowIdx) -> StackSizes {
        StackSizes {
            id_stack: self.windows[idx.0].id_stack.len(),
            color_stack: self.color_stack.len(),
            style_var_stack: self.style_var_stack.len(),
            focus_scope_stack: self.focus_scope_stack.len(),
            group_stack: self.group_stack.len(),
            item_flags_stack: self.item_flags_stack.len(),
            begin_popup_stack: self.begin_popup_stack.len(),
        }
    }

    fn error_check_begin_end_compare_stacks_size(&self, idx: WindowIdx) {
        let w = &self.windows[idx.0];
        let on_begin = w.dc.stack_sizes_on_begin;
        let now = self.stack_sizes(idx);
        assert_eq!(on_begin.id_stack, now.id_stack, "push_id/pop_id mismatch in '{}'", w.name);
        assert_eq!(on_begin.group_stack, now.group_stack, "begin_group/end_group mismatch in '{}'", w.name);
        assert_eq!(on_begin.begin_popup_stack, now.begin_popup_stack, "begin_popup/end_popup or begin_menu/end_menu mismatch in '{}'", w.name);
        assert_eq!(on_begin.color_stack, now.color_stack, "push_style_color/pop_style_color mismatch in '{}'", w.name);
        assert_eq!(on_begin.style_var_stack, now.style_var_stack, "push_style_var/pop_style_var mismatch in '{}'", w.name);
        assert_eq!(on_begin.focus_scope_stack, now.focus_scope_stack, "push_focus_scope/pop_focus_scope mismatch in '{}'", w.name);
        assert_eq!(on_begin.item_flags_stack, now.item_flags_stack, "push_item_flag/pop_item_flag mismatch in '{}'", w.name);
    }

    /// Pushes a clip rectangle on the current window's draw list; items outside of it are culled.
    pub fn push_clip_rect(&mut self, min: Vec2f, max: Vec2f, intersect_with_current: bool) {
        let w = self.current_window_mut();
        w.draw_list.push_clip_rect(min, max, intersect_with_current);
        w.clip_rect = w.draw_list.current_clip_rect();
    }

    /// Pops the clip rectangle pushed with [`Context::push_clip_rect`].
    pub fn pop_clip_rect(&mut self) {
        let w = self.current_window_mut();
        w.draw_list.pop_clip_rect();
        w.clip_rect = w.draw_list.current_clip_rect();
    }

    /// Starts appending to the window `name`. Always pair with [`Context::end`], whatever the
    /// return value.
    ///
    /// Returns `false` when the window is collapsed or hidden and its contents can be skipped.
    pub fn begin(&mut self, name: &str, flags: WindowFlags) -> bool { self.begin_ex(name, None, flags) }

    /// [`Context::begin`] with a close button that clears `p_open` when clicked.
    ///
    /// # Panics
    /// Panics outside of a frame, on an empty name, or when a child window has no parent.
    pub fn begin_ex(&mut self, name: &str, mut p_open: Option<&mut bool>, flags: WindowFlags) -> bool {
        assert!(!name.is_empty(), "window name must not be empty");
        assert!(self.within_frame_scope, "begin() outside of new_frame()/end_frame()");
        assert!(self.frame_count_ended != self.frame_count, "begin() after end_frame()");

        let mut flags = flags;
        let (idx, window_just_created) = match self.find_window_by_name(name) {
            Some(idx) => (idx, false),
            None => (self.create_new_window(name, flags), true),
        };

        if flags.contains(WindowFlags::NO_INPUTS) {
            flags |= WindowFlags::NO_MOVE | WindowFlags::NO_RESIZE;
        }
        if flags.contains(WindowFlags::NAV_FLATTENED) {
            assert!(flags.is_child(), "NAV_FLATTENED only applies to child windows");
        }

        let current_frame = self.frame_count;
        let first_begin_of_the_frame = self.windows[idx.0].last_frame_active != current_frame;
        self.windows[idx.0].is_fallback_window = self.current_window_stack.is_empty() && self.within_frame_scope_with_implicit_window;

        // appearing
        let mut window_just_activated_by_user = self.windows[idx.0].last_frame_active < current_frame - 1;
        let window_just_appearing_after_hidden_for_resize = self.windows[idx.0].hidden_frames_cannot_skip_items > 0;
        if flags.is_popup() {
            assert!(self.begin_popup_stack.len() < self.open_popup_stack.len(), "popup window '{}' was not opened with open_popup()", name);
            let popup_ref = self.open_popup_stack[self.begin_popup_stack.len()];
            window_just_activated_by_user |= self.windows[idx.0].popup_id != popup_ref.popup_id;
            window_just_activated_by_user |= popup_ref.window != Some(idx);
        }
        let appearing = window_just_activated_by_user || window_just_appearing_after_hidden_for_resize;
        self.windows[idx.0].appearing = appearing;
        if appearing {
            self.set_window_condition_allow_flags(idx, Cond::APPEARING, true);
        }

        if first_begin_of_the_frame {
            let w = &mut self.windows[idx.0];
            w.flags = flags;
            w.last_frame_active = current_frame;
            w.last_time_active = self.time as f32;
            w.begin_order_within_parent = 0;
            w.begin_order_within_context = self.windows_active_count as i32;
            self.windows_active_count += 1;
        } else {
            flags = self.windows[idx.0].flags;
        }

        // the parent is latched on the first begin of the frame
        let parent_window_in_stack = self.current_window_stack.last().copied();
        let parent_window = if first_begin_of_the_frame {
            if flags.intersects(WindowFlags::CHILD_WINDOW | WindowFlags::POPUP) { parent_window_in_stack } else { None }
        } else {
            self.windows[idx.0].parent_window
        };
        assert!(parent_window.is_some() || !flags.is_child(), "child window '{}' has no parent", name);

        self.current_window_stack.push(idx);
        self.current_window = None;
        self.windows[idx.0].dc.stack_sizes_on_begin = self.stack_sizes(idx);
        if flags.is_popup() {
            let n = self.begin_popup_stack.len();
            self.open_popup_stack[n].window = Some(idx);
            let popup_ref = self.open_popup_stack[n];
            self.begin_popup_stack.push(popup_ref);
            self.windows[idx.0].popup_id = popup_ref.popup_id;
        }

        if window_just_appearing_after_hidden_for_resize && !flags.is_child() {
            self.windows[idx.0].nav_last_ids[0] = Id::NONE;
        }

        if first_begin_of_the_frame {
            self.update_window_parent_and_root_links(idx, flags, parent_window);
        }

        // consume set_next_window_*()
        let next_flags = self.next_window_data.flags;
        let mut window_pos_set_by_api = false;
        let mut window_size_x_set_by_api = false;
        let mut window_size_y_set_by_api = false;
        if next_flags.contains(NextWindowDataFlags::HAS_POS) {
            let cond = self.next_window_data.pos_cond;
            let pos = self.next_window_data.pos_val;
            let pivot = self.next_window_data.pos_pivot_val;
            window_pos_set_by_api = self.windows[idx.0].set_window_pos_allow_flags.intersects(cond);
            if window_pos_set_by_api && vec2_length_sqr(pivot) > 0.00001 {
                // resolved below, once the size is known
                let w = &mut self.windows[idx.0];
                w.set_window_pos_val = pos;
                w.set_window_pos_pivot = pivot;
                w.set_window_pos_allow_flags.remove(Cond::ONCE | Cond::FIRST_USE_EVER | Cond::APPEARING);
            } else {
                self.set_window_pos_ex(idx, pos, cond);
            }
        }
        if next_flags.contains(NextWindowDataFlags::HAS_SIZE) {
            let cond = self.next_window_data.size_cond;
            let size = self.next_window_data.size_val;
            let allowed = self.windows[idx.0].set_window_size_allow_flags.intersects(cond);
            window_size_x_set_by_api = allowed && size.x > 0.0;
            window_size_y_set_by_api = allowed && size.y > 0.0;
            self.set_window_size_ex(idx, size, cond);
        }
        if next_flags.contains(NextWindowDataFlags::HAS_SCROLL) {
            let scroll = self.next_window_data.scroll_val;
            let w = &mut self.windows[idx.0];
            if scroll.x >= 0.0 {
                w.scroll_target.x = scroll.x;
                w.scroll_target_center_ratio.x = 0.0;
            }
            if scroll.y >= 0.0 {
                w.scroll_target.y = scroll.y;
                w.scroll_target_center_ratio.y = 0.0;
            }
        }
        if next_flags.contains(NextWindowDataFlags::HAS_CONTENT_SIZE) {
            self.windows[idx.0].content_size_explicit = self.next_window_data.content_size_val;
        } else if first_begin_of_the_frame {
            self.windows[idx.0].content_size_explicit = vec2(0.0, 0.0);
        }
        if next_flags.contains(NextWindowDataFlags::HAS_COLLAPSED) {
            self.set_window_collapsed_ex(idx, self.next_window_data.collapsed_val, self.next_window_data.collapsed_cond);
        }
        if next_flags.contains(NextWindowDataFlags::HAS_FOCUS) {
            self.focus_window(Some(idx));
        }
        if appearing {
            self.set_window_condition_allow_flags(idx, Cond::APPEARING, false);
        }

        if first_begin_of_the_frame {
            self.begin_first_of_frame(
                idx,
                name,
                p_open.as_deref_mut(),
                parent_window,
                window_just_created,
                window_just_activated_by_user,
                window_pos_set_by_api,
                (window_size_x_set_by_api, window_size_y_set_by_api),
            );
        } else {
            self.current_window = Some(idx);
        }

        // inherit shared state
        let item_flags = self.item_flags_stack.last().copied().unwrap_or(ItemFlags::empty());
        let focus_scope = match parent_window {
            Some(p) if flags.is_child() => self.windows[p.0].dc.nav_focus_scope_id_current,
            _ => Id::NONE,
        };
        {
            let w = &mut self.windows[idx.0];
            w.dc.item_flags = item_flags;
            w.dc.nav_focus_scope_id_current = focus_scope;
        }

        let inner_clip_rect = self.windows[idx.0].inner_clip_rect;
        self.push_clip_rect(inner_clip_rect.min, inner_clip_rect.max, true);

        // cleared last so the implicit window stays hidden when nothing is appended to it
        let w = &mut self.windows[idx.0];
        w.write_accessed = false;
        w.begin_count += 1;
        self.next_window_data.clear_flags();

        if first_begin_of_the_frame {
            if flags.is_child() {
                assert!(flags.has_no_title_bar());
                let w = &mut self.windows[idx.0];
                if !flags.is_auto_resize()
                    && w.auto_fit_frames_x <= 0
                    && w.auto_fit_frames_y <= 0
                    && (w.outer_rect_clipped.min.x >= w.outer_rect_clipped.max.x || w.outer_rect_clipped.min.y >= w.outer_rect_clipped.max.y)
                {
                    w.hidden_frames_can_skip_items = 1;
                }
                if let Some(p) = parent_window {
                    let (p_collapsed, p_can_skip, p_cannot_skip) = {
                        let pw = &self.windows[p.0];
                        (pw.collapsed, pw.hidden_frames_can_skip_items, pw.hidden_frames_cannot_skip_items)
                    };
                    let w = &mut self.windows[idx.0];
                    if p_collapsed || p_can_skip > 0 {
                        w.hidden_frames_can_skip_items = 1;
                    }
                    if p_collapsed || p_cannot_skip > 0 {
                        w.hidden_frames_cannot_skip_items = 1;
                    }
                }
            }

            if self.style.alpha <= 0.0 {
                self.windows[idx.0].hidden_frames_can_skip_items = 1;
            }

            let w = &mut self.windows[idx.0];
            w.hidden = w.hidden_frames_can_skip_items > 0 || w.hidden_frames_cannot_skip_items > 0 || w.hidden_frames_for_render_only > 0;
            w.skip_items = (w.collapsed || !w.active || w.hidden) && w.auto_fit_frames_x <= 0 && w.auto_fit_frames_y <= 0 && w.hidden_frames_cannot_skip_items <= 0;
        }

        !self.windows[idx.0].skip_items
    }

    #[allow(clippy::too_many_arguments)]
    fn begin_first_of_frame(
        &mut self,
        idx: WindowIdx,
        name: &str,
        p_open: Option<&mut bool>,
        parent_window: Option<WindowIdx>,
        window_just_created: bool,
        window_just_activated_by_user: bool,
        window_pos_set_by_api: bool,
        size_set_by_api: (bool, bool),
    ) {
        let (window_size_x_set_by_api, window_size_y_set_by_api) = size_set_by_api;
        let flags = self.windows[idx.0].flags;
        let window_is_child_tooltip = flags.is_child() && flags.is_tooltip();

        {
            let w = &mut self.windows[idx.0];
            w.active = true;
            w.has_close_button = p_open.is_some();
            w.clip_rect = Rect::UNCLIPPED;
            w.id_stack.truncate(1);
            w.draw_list.reset();
            if w.memory_compacted {
                w.gc_awake_transient_buffers();
            }
        }

        // content sizes from the previous frame, hidden frames countdown
        let (content_size, content_size_ideal) = self.calc_window_content_sizes(idx);
        {
            let w = &mut self.windows[idx.0];
            w.content_size = content_size;
            w.content_size_ideal = content_size_ideal;
            if w.hidden_frames_can_skip_items > 0 {
                w.hidden_frames_can_skip_items -= 1;
            }
            if w.hidden_frames_cannot_skip_items > 0 {
                w.hidden_frames_cannot_skip_items -= 1;
            }
            if w.hidden_frames_for_render_only > 0 {
                w.hidden_frames_for_render_only -= 1;
            }

            // new windows stay hidden for one frame while they measure their contents
            if window_just_created && (!window_size_x_set_by_api || !window_size_y_set_by_api) {
                w.hidden_frames_cannot_skip_items = 1;
            }

            // popups and tooltips are recycled, hide them while they measure again
            if window_just_activated_by_user && flags.intersects(WindowFlags::POPUP | WindowFlags::TOOLTIP) {
                w.hidden_frames_cannot_skip_items = 1;
                if flags.is_auto_resize() {
                    if !window_size_x_set_by_api {
                        w.size.x = 0.0;
                        w.size_full.x = 0.0;
                    }
                    if !window_size_y_set_by_api {
                        w.size.y = 0.0;
                        w.size_full.y = 0.0;
                    }
                    w.content_size = vec2(0.0, 0.0);
                    w.content_size_ideal = vec2(0.0, 0.0);
                }
            }
        }

        self.current_window = Some(idx);

        // lock border size and padding for the frame
        {
            let style = &self.style;
            let w = &mut self.windows[idx.0];
            w.window_border_size = if flags.is_child() {
                style.child_border_size
            } else if flags.intersects(WindowFlags::POPUP | WindowFlags::TOOLTIP) && !flags.is_modal() {
                style.popup_border_size
            } else {
                style.window_border_size
            };
            w.window_padding = style.window_padding;
            if flags.is_child() && !flags.intersects(WindowFlags::ALWAYS_USE_WINDOW_PADDING | WindowFlags::POPUP) && w.window_border_size == 0.0 {
                w.window_padding = vec2(0.0, if flags.has_menu_bar() { style.window_padding.y } else { 0.0 });
            }
            let offset_min = self.next_window_data.menu_bar_offset_min_val;
            w.dc.menu_bar_offset = vec2(w.window_padding.x.max(style.item_spacing.x).max(offset_min.x), offset_min.y);
        }

        // collapse on title bar double click
        if !flags.has_no_title_bar() && !flags.contains(WindowFlags::NO_COLLAPSE) {
            let title_bar_rect = self.windows[idx.0].title_bar_rect(self.font_size, &self.style);
            if self.hovered_window == Some(idx)
                && self.hovered_id.is_none()
                && self.hovered_id_previous_frame.is_none()
                && self.is_mouse_hovering_rect(title_bar_rect.min, title_bar_rect.max, true)
                && self.io.mouse_double_clicked[0]
            {
                self.windows[idx.0].want_collapse_toggle = true;
            }
            if self.windows[idx.0].want_collapse_toggle {
                let w = &mut self.windows[idx.0];
                w.collapsed = !w.collapsed;
                self.mark_window_settings_dirty(idx);
                self.focus_window(Some(idx));
            }
        } else {
            self.windows[idx.0].collapsed = false;
        }
        self.windows[idx.0].want_collapse_toggle = false;

        // size
        let size_auto_fit = self.calc_window_auto_fit_size(idx, content_size_ideal);
        let mut use_current_size_for_scrollbar_x = window_just_created;
        let mut use_current_size_for_scrollbar_y = window_just_created;
        let collapsed = self.windows[idx.0].collapsed;
        if flags.is_auto_resize() && !collapsed {
            let w = &mut self.windows[idx.0];
            if !window_size_x_set_by_api {
                w.size_full.x = size_auto_fit.x;
                use_current_size_for_scrollbar_x = true;
            }
            if !window_size_y_set_by_api {
                w.size_full.y = size_auto_fit.y;
                use_current_size_for_scrollbar_y = true;
            }
        } else if self.windows[idx.0].auto_fit_frames_x > 0 || self.windows[idx.0].auto_fit_frames_y > 0 {
            // auto-fit may only grow the window during its first frames
            let w = &mut self.windows[idx.0];
            if !window_size_x_set_by_api && w.auto_fit_frames_x > 0 {
                w.size_full.x = if w.auto_fit_only_grows { w.size_full.x.max(size_auto_fit.x) } else { size_auto_fit.x };
                use_current_size_for_scrollbar_x = true;
            }
            if !window_size_y_set_by_api && w.auto_fit_frames_y > 0 {
                w.size_full.y = if w.auto_fit_only_grows { w.size_full.y.max(size_auto_fit.y) } else { size_auto_fit.y };
                use_current_size_for_scrollbar_y = true;
            }
            if !collapsed {
                self.mark_window_settings_dirty(idx);
            }
        }

        let size_full = self.windows[idx.0].size_full;
        let size_full = self.calc_window_size_after_constraint(idx, size_full);
        {
            let font_size = self.font_size;
            let style = &self.style;
            let w = &mut self.windows[idx.0];
            w.size_full = size_full;
            w.size = if w.collapsed && !flags.is_child() { w.title_bar_rect(font_size, style).size() } else { size_full };
        }
        let decoration_up_height = self.decoration_up_height(idx);

        // position
        if window_just_activated_by_user {
            self.windows[idx.0].auto_pos_last_direction = None;
            if flags.is_popup() && !flags.is_modal() && !window_pos_set_by_api {
                if let Some(popup) = self.begin_popup_stack.last() {
                    self.windows[idx.0].pos = popup.open_popup_pos;
                }
            }
        }

        if flags.is_child() {
            if let Some(parent) = parent_window {
                assert!(self.windows[parent.0].active, "child window '{}' submitted outside of its parent", name);
                let order = self.windows[parent.0].dc.child_windows.len();
                self.windows[parent.0].dc.child_windows.push(idx);
                self.windows[idx.0].begin_order_within_parent = order as i32;
                if !flags.is_popup() && !window_pos_set_by_api && !window_is_child_tooltip {
                    self.windows[idx.0].pos = self.windows[parent.0].dc.cursor_pos;
                }
            }
        }

        let window_pos_with_pivot = {
            let w = &self.windows[idx.0];
            w.set_window_pos_val.x != f32::MAX && w.hidden_frames_cannot_skip_items == 0
        };
        if window_pos_with_pivot {
            let w = &self.windows[idx.0];
            let target = vec2(w.set_window_pos_val.x - w.size.x * w.set_window_pos_pivot.x, w.set_window_pos_val.y - w.size.y * w.set_window_pos_pivot.y);
            self.set_window_pos_ex(idx, target, Cond::NONE);
        } else if flags.is_child_menu()
            || (flags.is_popup() && !window_pos_set_by_api && self.windows[idx.0].appearing)
            || (flags.is_tooltip() && !window_pos_set_by_api && !window_is_child_tooltip)
        {
            self.windows[idx.0].pos = self.find_best_window_pos_for_popup(idx);
        }

        // keep the window reachable inside the display, past the safe area padding
        let viewport_rect = Rect::from_min_size(vec2(0.0, 0.0), self.io.display_size);
        let visibility_padding = vec2_max(self.style.display_window_padding, self.style.display_safe_area_padding);
        let visibility_rect = Rect::from_coords(
            viewport_rect.min.x + visibility_padding.x,
            viewport_rect.min.y + visibility_padding.y,
            viewport_rect.max.x - visibility_padding.x,
            viewport_rect.max.y - visibility_padding.y,
        );
        {
            let w = &self.windows[idx.0];
            if !window_pos_set_by_api && !flags.is_child() && w.auto_fit_frames_x <= 0 && w.auto_fit_frames_y <= 0 && viewport_rect.width() > 0.0 && viewport_rect.height() > 0.0 {
                self.clamp_window_rect(idx, &visibility_rect);
            }
        }
        {
            let style = &self.style;
            let w = &mut self.windows[idx.0];
            w.pos = vec2_floor(w.pos);
            w.window_rounding = if flags.is_child() {
                style.child_rounding
            } else if flags.is_popup() && !flags.is_modal() {
                style.popup_rounding
            } else {
                style.window_rounding
            };
        }

        // new and reactivated windows are moved to the front
        let want_focus = window_just_activated_by_user && !flags.contains(WindowFlags::NO_FOCUS_ON_APPEARING) && (flags.is_popup() || !flags.intersects(WindowFlags::CHILD_WINDOW | WindowFlags::TOOLTIP));

        // manual resize
        let resize_grip_count = if self.io.config_windows_resize_from_edges { 2 } else { 1 };
        let resize_grip_draw_size = (self.font_size * 1.10).max(self.windows[idx.0].window_rounding + 1.0 + self.font_size * 0.2).floor();
        let mut resize_grip_col = [Color::default(); 4];
        let mut border_held = None;
        if !self.windows[idx.0].collapsed {
            let (auto_fit, held) = self.update_window_manual_resize(idx, size_auto_fit, resize_grip_count, &mut resize_grip_col, &visibility_rect);
            if auto_fit {
                use_current_size_for_scrollbar_x = true;
                use_current_size_for_scrollbar_y = true;
            }
            border_held = held;
        }
        self.windows[idx.0].resize_border_held = border_held;

        // scrollbars, decided from last frame's contents
        {
            let scrollbar_size = self.style.scrollbar_size;
            let w = &mut self.windows[idx.0];
            if !w.collapsed {
                let avail_size_from_current_frame = vec2(w.size_full.x, w.size_full.y - decoration_up_height);
                let inner = w.inner_rect.size();
                let avail_size_from_last_frame = vec2(inner.x + w.scrollbar_sizes.x, inner.y + w.scrollbar_sizes.y);
                let needed_size_from_last_frame = if window_just_created {
                    vec2(0.0, 0.0)
                } else {
                    vec2(w.content_size.x + w.window_padding.x * 2.0, w.content_size.y + w.window_padding.y * 2.0)
                };
                let size_x_for_scrollbars = if use_current_size_for_scrollbar_x { avail_size_from_current_frame.x } else { avail_size_from_last_frame.x };
                let size_y_for_scrollbars = if use_current_size_for_scrollbar_y { avail_size_from_current_frame.y } else { avail_size_from_last_frame.y };
                let no_scrollbar = flags.contains(WindowFlags::NO_SCROLLBAR);
                w.scrollbar_y = flags.contains(WindowFlags::ALWAYS_VERTICAL_SCROLLBAR) || (needed_size_from_last_frame.y > size_y_for_scrollbars && !no_scrollbar);
                w.scrollbar_x = flags.contains(WindowFlags::ALWAYS_HORIZONTAL_SCROLLBAR)
                    || (needed_size_from_last_frame.x > size_x_for_scrollbars - if w.scrollbar_y { scrollbar_size } else { 0.0 }
                        && !no_scrollbar
                        && flags.contains(WindowFlags::HORIZONTAL_SCROLLBAR));
                if w.scrollbar_x && !w.scrollbar_y {
                    w.scrollbar_y = needed_size_from_last_frame.y > size_y_for_scrollbars && !no_scrollbar;
                }
                w.scrollbar_sizes = vec2(if w.scrollbar_y { scrollbar_size } else { 0.0 }, if w.scrollbar_x { scrollbar_size } else { 0.0 });
            }
        }

        // rectangles not affected by scrolling
        let host_rect = match parent_window {
            Some(p) if flags.is_child() && !flags.is_popup() && !window_is_child_tooltip => self.windows[p.0].clip_rect,
            _ => viewport_rect,
        };
        let title_bar_rect = self.windows[idx.0].title_bar_rect(self.font_size, &self.style);
        {
            let frame_border_size = self.style.frame_border_size;
            let w = &mut self.windows[idx.0];
            w.outer_rect_clipped = w.rect();
            w.outer_rect_clipped.clip_with(&host_rect);

            w.inner_rect = Rect::from_coords(w.pos.x, w.pos.y + decoration_up_height, w.pos.x + w.size.x - w.scrollbar_sizes.x, w.pos.y + w.size.y - w.scrollbar_sizes.y);

            // slightly larger than the work rect; inverted when collapsed
            let top_border_size = if flags.has_menu_bar() || !flags.has_no_title_bar() { frame_border_size } else { w.window_border_size };
            let side = (w.window_padding.x * 0.5).floor().max(w.window_border_size);
            w.inner_clip_rect = Rect::from_coords(
                (0.5 + w.inner_rect.min.x + side).floor(),
                (0.5 + w.inner_rect.min.y + top_border_size).floor(),
                (0.5 + w.inner_rect.max.x - side).floor(),
                (0.5 + w.inner_rect.max.y - w.window_border_size).floor(),
            );
            w.inner_clip_rect.clip_with_full(&host_rect);
        }

        {
            let font_size = self.font_size;
            let w = &mut self.windows[idx.0];
            w.item_width_default = if w.size.x > 0.0 && !flags.is_tooltip() && !flags.is_auto_resize() { (w.size.x * 0.65).floor() } else { (font_size * 16.0).floor() };

            // lagging the maximum one frame behind the scrollbars lets bottom-right aligned items
            // fit without creating a scrollbar
            w.scroll_max.x = (w.content_size.x + w.window_padding.x * 2.0 - w.inner_rect.width()).max(0.0);
            w.scroll_max.y = (w.content_size.y + w.window_padding.y * 2.0 - w.inner_rect.height()).max(0.0);
        }
        let scroll = self.calc_next_scroll_from_scroll_target_and_clamp(idx);
        {
            let w = &mut self.windows[idx.0];
            w.scroll = scroll;
            w.scroll_target = vec2(f32::MAX, f32::MAX);
        }

        // drawing
        self.push_clip_rect(host_rect.min, host_rect.max, false);

        let dim_bg_for_modal = flags.is_modal() && self.get_top_most_popup_modal() == Some(idx) && self.windows[idx.0].hidden_frames_cannot_skip_items <= 0;
        let dim_bg_for_window_list = self.nav_windowing_target_anim.map(|t| self.windows[t.0].root_window) == Some(idx);
        if dim_bg_for_modal || dim_bg_for_window_list {
            let col = self.get_color(if dim_bg_for_modal { StyleColor::ModalWindowDimBg } else { StyleColor::NavWindowingDimBg }, self.dim_bg_ratio);
            self.windows[idx.0].draw_list.add_rect_filled(viewport_rect.min, viewport_rect.max, col, 0.0);
        }
        if dim_bg_for_window_list && self.nav_windowing_target_anim == Some(idx) {
            let bb = self.windows[idx.0].rect().expanded(self.font_size);
            if !bb.contains_rect(&viewport_rect) {
                let col = self.get_color(StyleColor::NavWindowingHighlight, self.nav_windowing_highlight_alpha * 0.25);
                self.windows[idx.0].draw_list.add_rect_filled(bb.min, bb.max, col, self.style.window_rounding);
            }
        }

        let title_bar_is_highlight = want_focus
            || self
                .nav_windowing_target
                .or(self.nav_window)
                .map(|h| self.windows[h.0].root_window_for_title_bar_highlight == self.windows[idx.0].root_window_for_title_bar_highlight)
                .unwrap_or(false);
        self.render_window_decorations(idx, &title_bar_rect, title_bar_is_highlight, resize_grip_count, &resize_grip_col, resize_grip_draw_size);

        if self.nav_windowing_target_anim == Some(idx) {
            let mut rounding = self.windows[idx.0].window_rounding.max(self.style.window_rounding);
            let mut bb = self.windows[idx.0].rect().expanded(self.font_size);
            if bb.contains_rect(&viewport_rect) {
                // fills the whole display, draw the highlight inward
                bb.expand(-self.font_size - 1.0);
                rounding = self.windows[idx.0].window_rounding;
            }
            let col = self.get_color(StyleColor::NavWindowingHighlight, self.nav_windowing_highlight_alpha);
            self.windows[idx.0].draw_list.add_rect(bb.min, bb.max, col, rounding, 3.0);
        }

        // rectangles affected by scrolling
        {
            let w = &mut self.windows[idx.0];
            let allow_scrollbar_x = !flags.contains(WindowFlags::NO_SCROLLBAR) && flags.contains(WindowFlags::HORIZONTAL_SCROLLBAR);
            let allow_scrollbar_y = !flags.contains(WindowFlags::NO_SCROLLBAR);
            let work_rect_size_x = if w.content_size_explicit.x != 0.0 {
                w.content_size_explicit.x
            } else {
                (if allow_scrollbar_x { w.content_size.x } else { 0.0 }).max(w.size.x - w.window_padding.x * 2.0 - w.scrollbar_sizes.x)
            };
            let work_rect_size_y = if w.content_size_explicit.y != 0.0 {
                w.content_size_explicit.y
            } else {
                (if allow_scrollbar_y { w.content_size.y } else { 0.0 }).max(w.size.y - w.window_padding.y * 2.0 - decoration_up_height - w.scrollbar_sizes.y)
            };
            let work_min = vec2(
                (w.inner_rect.min.x - w.scroll.x + w.window_padding.x.max(w.window_border_size)).floor(),
                (w.inner_rect.min.y - w.scroll.y + w.window_padding.y.max(w.window_border_size)).floor(),
            );
            w.work_rect = Rect::from_min_size(work_min, vec2(work_rect_size_x, work_rect_size_y));
            w.parent_work_rect = w.work_rect;

            let cr_min = vec2(w.pos.x - w.scroll.x + w.window_padding.x, w.pos.y - w.scroll.y + w.window_padding.y + decoration_up_height);
            let cr_size = vec2(
                if w.content_size_explicit.x != 0.0 { w.content_size_explicit.x } else { w.size.x - w.window_padding.x * 2.0 - w.scrollbar_sizes.x },
                if w.content_size_explicit.y != 0.0 { w.content_size_explicit.y } else { w.size.y - w.window_padding.y * 2.0 - decoration_up_height - w.scrollbar_sizes.y },
            );
            w.content_region_rect = Rect::from_min_size(cr_min, cr_size);
        }

        // layout state
        {
            let parent_layout_type = parent_window.map(|p| self.windows[p.0].dc.layout_type).unwrap_or(LayoutType::Vertical);
            let item_spacing_x = self.style.item_spacing.x;
            let w = &mut self.windows[idx.0];
            w.dc.indent = w.window_padding.x - w.scroll.x;
            w.dc.group_offset = 0.0;
            w.dc.columns_offset = 0.0;
            w.dc.cursor_start_pos = vec2(w.pos.x + w.dc.indent + w.dc.columns_offset, w.pos.y + decoration_up_height + w.window_padding.y - w.scroll.y);
            w.dc.cursor_pos = w.dc.cursor_start_pos;
            w.dc.cursor_pos_prev_line = w.dc.cursor_pos;
            w.dc.cursor_max_pos = w.dc.cursor_start_pos;
            w.dc.ideal_max_pos = w.dc.cursor_start_pos;
            w.dc.curr_line_size = vec2(0.0, 0.0);
            w.dc.prev_line_size = vec2(0.0, 0.0);
            w.dc.curr_line_text_base_offset = 0.0;
            w.dc.prev_line_text_base_offset = 0.0;

            w.dc.nav_layer_current = NavLayer::Main;
            w.dc.nav_layers_active_mask = w.dc.nav_layers_active_mask_next;
            w.dc.nav_layers_active_mask_next = 0;
            w.dc.nav_hide_highlight_one_frame = false;
            w.dc.nav_has_scroll = w.scroll_max.y > 0.0;

            w.dc.menu_bar_appending = false;
            w.dc.menu_columns.update(item_spacing_x, window_just_activated_by_user);
            w.dc.child_windows.clear();
            w.dc.layout_type = LayoutType::Vertical;
            w.dc.parent_layout_type = parent_layout_type;
            w.dc.focus_counter_regular = -1;
            w.dc.focus_counter_tab_stop = -1;

            w.dc.item_width = w.item_width_default;
            w.dc.text_wrap_pos = -1.0;
            w.dc.item_width_stack.clear();
            w.dc.text_wrap_pos_stack.clear();

            if w.auto_fit_frames_x > 0 {
                w.auto_fit_frames_x -= 1;
            }
            if w.auto_fit_frames_y > 0 {
                w.auto_fit_frames_y -= 1;
            }
        }

        // after the cursor is set up so the initial nav rectangle starts there
        if want_focus {
            self.focus_window(Some(idx));
            self.nav_init_window(idx, false);
        }

        if !flags.has_no_title_bar() {
            self.render_window_title_bar_contents(idx, &title_bar_rect, name, p_open);
        }

        // the title bar is the last item so item queries work right after begin()
        let hovered = self.is_mouse_hovering_rect(title_bar_rect.min, title_bar_rect.max, false);
        let w = &mut self.windows[idx.0];
        w.dc.last_item_id = w.move_id;
        w.dc.last_item_status_flags = if hovered { ItemStatusFlags::HOVERED_RECT } else { ItemStatusFlags::empty() };
        w.dc.last_item_rect = title_bar_rect;
    }

    fn window_bg_color_idx(flags: WindowFlags) -> StyleColor {
        if flags.intersects(WindowFlags::TOOLTIP | WindowFlags::POPUP) {
            StyleColor::PopupBg
        } else if flags.is_child() {
            StyleColor::ChildBg
        } else {
            StyleColor::WindowBg
        }
    }

    fn render_window_decorations(&mut self, idx: WindowIdx, title_bar_rect: &Rect, title_bar_is_highlight: bool, resize_grip_count: usize, resize_grip_col: &[Color; 4], resize_grip_draw_size: f32) {
        let flags = self.windows[idx.0].flags;
        let rounding = self.windows[idx.0].window_rounding;
        let border_size = self.windows[idx.0].window_border_size;

        if self.windows[idx.0].collapsed {
            let col = self.get_color(if title_bar_is_highlight && !self.nav_disable_highlight { StyleColor::TitleBgActive } else { StyleColor::TitleBgCollapsed }, 1.0);
            let border = self.get_color(StyleColor::Border, 1.0);
            let dl = &mut self.windows[idx.0].draw_list;
            dl.add_rect_filled(title_bar_rect.min, title_bar_rect.max, col, rounding);
            if border_size > 0.0 {
                dl.add_rect(title_bar_rect.min, title_bar_rect.max, border, rounding, border_size);
            }
            return;
        }

        if !flags.contains(WindowFlags::NO_BACKGROUND) {
            let mut bg_col = self.get_color(Self::window_bg_color_idx(flags), 1.0);
            if self.next_window_data.flags.contains(NextWindowDataFlags::HAS_BG_ALPHA) {
                bg_col.a = (self.next_window_data.bg_alpha_val.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
            }
            let title_bar_height = self.windows[idx.0].title_bar_height(self.font_size, &self.style);
            let w = &mut self.windows[idx.0];
            let (pos, size) = (w.pos, w.size);
            w.draw_list.add_rect_filled(vec2(pos.x, pos.y + title_bar_height), vec2(pos.x + size.x, pos.y + size.y), bg_col, rounding);
        }

        if !flags.has_no_title_bar() {
            let col = self.get_color(if title_bar_is_highlight { StyleColor::TitleBgActive } else { StyleColor::TitleBg }, 1.0);
            self.windows[idx.0].draw_list.add_rect_filled(title_bar_rect.min, title_bar_rect.max, col, rounding);
        }

        if flags.has_menu_bar() {
            let mut menu_bar_rect = self.windows[idx.0].menu_bar_rect(self.font_size, &self.style);
            let window_rect = self.windows[idx.0].rect();
            menu_bar_rect.clip_with(&window_rect);
            let col = self.get_color(StyleColor::MenuBarBg, 1.0);
            let border = self.get_color(StyleColor::Border, 1.0);
            let frame_border_size = self.style.frame_border_size;
            let dl = &mut self.windows[idx.0].draw_list;
            dl.add_rect_filled(
                vec2(menu_bar_rect.min.x + border_size, menu_bar_rect.min.y),
                vec2(menu_bar_rect.max.x - border_size, menu_bar_rect.max.y),
                col,
                if flags.has_no_title_bar() { rounding } else { 0.0 },
            );
            if frame_border_size > 0.0 && menu_bar_rect.max.y < window_rect.max.y {
                dl.add_line(menu_bar_rect.bl(), menu_bar_rect.br(), border, frame_border_size);
            }
        }

        if self.windows[idx.0].scrollbar_x {
            self.scrollbar(0);
        }
        if self.windows[idx.0].scrollbar_y {
            self.scrollbar(1);
        }

        if !flags.contains(WindowFlags::NO_RESIZE) {
            let w = &mut self.windows[idx.0];
            for (n, grip) in crate::resize::RESIZE_GRIP_DEF.iter().enumerate().take(resize_grip_count) {
                let corner = vec2(w.pos.x + w.size.x * grip.corner_pos_n.x, w.pos.y + w.size.y * grip.corner_pos_n.y);
                let (a, b) = if n & 1 == 1 { (vec2(border_size, resize_grip_draw_size), vec2(resize_grip_draw_size, border_size)) } else { (vec2(resize_grip_draw_size, border_size), vec2(border_size, resize_grip_draw_size)) };
                let p1 = vec2(corner.x + grip.inner_dir.x * a.x, corner.y + grip.inner_dir.y * a.y);
                let p2 = vec2(corner.x + grip.inner_dir.x * b.x, corner.y + grip.inner_dir.y * b.y);
                let p3 = vec2(corner.x + grip.inner_dir.x * (rounding + border_size), corner.y + grip.inner_dir.y * (rounding + border_size));
                w.draw_list.add_triangle_filled(p1, p2, p3, resize_grip_col[n]);
            }
        }

        self.render_window_outer_borders(idx);
    }

    fn render_window_outer_borders(&mut self, idx: WindowIdx) {
        let border = self.get_color(StyleColor::Border, 1.0);
        let held_col = self.get_color(StyleColor::ResizeGripActive, 1.0);
        let frame_border_size = self.style.frame_border_size;
        let title_bar_height = self.windows[idx.0].title_bar_height(self.font_size, &self.style);
        let w = &mut self.windows[idx.0];
        let rounding = w.window_rounding;
        let border_size = w.window_border_size;
        let rect = w.rect();
        if border_size > 0.0 && !w.flags.contains(WindowFlags::NO_BACKGROUND) {
            w.draw_list.add_rect(rect.min, rect.max, border, rounding, border_size);
        }
        if let Some(border_n) = w.resize_border_held {
            let r = crate::resize::get_resize_border_rect(&rect, border_n, rounding, 0.0);
            let (p1, p2) = match border_n {
                0 => (r.tl(), r.tr()),
                1 => (r.tr(), r.br()),
                2 => (r.bl(), r.br()),
                _ => (r.tl(), r.bl()),
            };
            w.draw_list.add_line(p1, p2, held_col, border_size.max(2.0));
        }
        if frame_border_size > 0.0 && !w.flags.has_no_title_bar() {
            let y = w.pos.y + title_bar_height - 1.0;
            w.draw_list.add_line(vec2(w.pos.x + border_size, y), vec2(w.pos.x + w.size.x - border_size, y), border, frame_border_size);
        }
    }

    fn render_window_title_bar_contents(&mut self, idx: WindowIdx, title_bar_rect: &Rect, name: &str, p_open: Option<&mut bool>) {
        let flags = self.windows[idx.0].flags;
        let has_close_button = p_open.is_some();
        let has_collapse_button = !flags.contains(WindowFlags::NO_COLLAPSE) && self.style.window_menu_button_position.is_some();

        // buttons live on the menu layer and never take default focus
        let item_flags_backup = self.windows[idx.0].dc.item_flags;
        self.windows[idx.0].dc.item_flags |= ItemFlags::NO_NAV_DEFAULT_FOCUS;
        self.windows[idx.0].dc.nav_layer_current = NavLayer::Menu;

        let frame_padding = self.style.frame_padding;
        let mut pad_l = frame_padding.x;
        let mut pad_r = frame_padding.x;
        let button_sz = self.font_size;
        let mut close_button_pos = vec2(0.0, 0.0);
        let mut collapse_button_pos = vec2(0.0, 0.0);
        if has_close_button {
            pad_r += button_sz;
            close_button_pos = vec2(title_bar_rect.max.x - pad_r - frame_padding.x, title_bar_rect.min.y);
        }
        if has_collapse_button && self.style.window_menu_button_position == Some(Dir::Right) {
            pad_r += button_sz;
            collapse_button_pos = vec2(title_bar_rect.max.x - pad_r - frame_padding.x, title_bar_rect.min.y);
        }
        if has_collapse_button && self.style.window_menu_button_position == Some(Dir::Left) {
            collapse_button_pos = vec2(title_bar_rect.min.x + pad_l - frame_padding.x, title_bar_rect.min.y);
            pad_l += button_sz;
        }

        // collapsing is deferred to the next frame, this one is already laid out
        if has_collapse_button {
            let id = self.windows[idx.0].get_id("#COLLAPSE");
            if self.collapse_button(id, collapse_button_pos) {
                self.windows[idx.0].want_collapse_toggle = true;
            }
        }
        if let Some(open) = p_open {
            let id = self.windows[idx.0].get_id("#CLOSE");
            if self.close_button(id, close_button_pos) {
                *open = false;
            }
        }

        self.windows[idx.0].dc.nav_layer_current = NavLayer::Main;
        self.windows[idx.0].dc.item_flags = item_flags_backup;

        let text_size = self.calc_text_size(name, true);
        let inner_spacing = self.style.item_inner_spacing.x;
        if pad_l > frame_padding.x {
            pad_l += inner_spacing;
        }
        if pad_r > frame_padding.x {
            pad_r += inner_spacing;
        }
        let align = self.style.window_title_align;
        if align.x > 0.0 && align.x < 1.0 {
            // centered titles ignore the buttons, left/right aligned ones avoid them
            let centerness = (1.0 - (align.x - 0.5).abs() * 2.0).clamp(0.0, 1.0);
            let pad_extend = pad_l.max(pad_r).min(title_bar_rect.width() - pad_l - pad_r - text_size.x);
            pad_l = pad_l.max(pad_extend * centerness);
            pad_r = pad_r.max(pad_extend * centerness);
        }
        let layout_r = Rect::from_coords(title_bar_rect.min.x + pad_l, title_bar_rect.min.y, title_bar_rect.max.x - pad_r, title_bar_rect.max.y);
        let clip_r = Rect::from_coords(layout_r.min.x, layout_r.min.y, layout_r.max.x + inner_spacing, layout_r.max.y);
        self.render_text_clipped(layout_r.min, layout_r.max, name, Some(text_size), align, Some(&clip_r));
    }

    /// Closes the window opened by [`Context::begin`].
    ///
    /// # Panics
    /// Panics when called more often than `begin`, on a child window (use
    /// [`Context::end_child`]) or when a push/pop pair inside the window is unbalanced.
    pub fn end(&mut self) {
        if self.current_window_stack.len() <= 1 && self.within_frame_scope_with_implicit_window {
            panic!("end() called too many times");
        }
        assert!(!self.current_window_stack.is_empty(), "end() without begin()");
        let idx = self.current_window_idx();
        let flags = self.windows[idx.0].flags;
        if flags.is_child() {
            assert!(self.within_end_child, "must call end_child() and not end() for '{}'", self.windows[idx.0].name);
        }

        self.pop_clip_rect();
        self.current_window_stack.pop();
        if flags.is_popup() {
            self.begin_popup_stack.pop();
        }
        self.error_check_begin_end_compare_stacks_size(idx);
        self.current_window = self.current_window_stack.last().copied();
    }

    /// Calls `f` inside the window `name` when it is visible; the window is always closed.
    pub fn window<R>(&mut self, name: &str, flags: WindowFlags, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        let res = if self.begin(name, flags) { Some(f(self)) } else { None };
        self.end();
        res
    }

    /// [`Context::window`] with a close button bound to `open`. Nothing is submitted while
    /// `open` is `false`.
    pub fn window_closable<R>(&mut self, name: &str, open: &mut bool, flags: WindowFlags, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !*open {
            return None;
        }
        let res = if self.begin_ex(name, Some(open), flags) { Some(f(self)) } else { None };
        self.end();
        res
    }

    /// Starts a child region inside the current window.
    ///
    /// A zero size on an axis uses the remaining space, a negative one the remaining space
    /// minus that amount.
    pub fn begin_child(&mut self, str_id: &str, size: Vec2f, border: bool, flags: WindowFlags) -> bool {
        let id = self.get_id(str_id);
        self.begin_child_ex(Some(str_id), id, size, border, flags)
    }

    /// [`Context::begin_child`] identified by a raw ID, for appending to the same child from
    /// different ID scopes.
    pub fn begin_child_id(&mut self, id: Id, size: Vec2f, border: bool, flags: WindowFlags) -> bool { self.begin_child_ex(None, id, size, border, flags) }

    fn begin_child_ex(&mut self, name: Option<&str>, id: Id, size_arg: Vec2f, border: bool, flags: WindowFlags) -> bool {
        let parent = self.current_window_idx();
        let mut flags = flags | WindowFlags::NO_TITLE_BAR | WindowFlags::NO_RESIZE | WindowFlags::NO_SAVED_SETTINGS | WindowFlags::CHILD_WINDOW;
        flags |= self.windows[parent.0].flags & WindowFlags::NO_MOVE;

        let content_avail = self.get_content_region_avail();
        let mut size = vec2_floor(size_arg);
        let auto_fit_axises = (if size.x == 0.0 { 1 << 0 } else { 0 }) | (if size.y == 0.0 { 1 << 1 } else { 0 });
        if size.x <= 0.0 {
            size.x = (content_avail.x + size.x).max(4.0);
        }
        if size.y <= 0.0 {
            size.y = (content_avail.y + size.y).max(4.0);
        }
        self.set_next_window_size(size, Cond::NONE);

        let title = match name {
            Some(name) => format!("{}/{}_{:08X}", self.windows[parent.0].name, name, id.raw()),
            None => format!("{}/{:08X}", self.windows[parent.0].name, id.raw()),
        };

        let backup_border_size = self.style.child_border_size;
        if !border {
            self.style.child_border_size = 0.0;
        }
        let ret = self.begin_ex(&title, None, flags);
        self.style.child_border_size = backup_border_size;

        let child = self.current_window_idx();
        {
            let cw = &mut self.windows[child.0];
            cw.child_id = id;
            cw.auto_fit_child_axises = auto_fit_axises;
        }

        // honor a set_next_window_pos() issued before begin_child()
        if self.windows[child.0].begin_count == 1 {
            let pos = self.windows[child.0].pos;
            self.windows[parent.0].dc.cursor_pos = pos;
        }

        // navigating into the child
        let cw = &self.windows[child.0];
        if self.nav_activate_id == id && !flags.contains(WindowFlags::NAV_FLATTENED) && (cw.dc.nav_layers_active_mask != 0 || cw.dc.nav_has_scroll) {
            self.focus_window(Some(child));
            self.nav_init_window(child, false);
            // steal the active id so the activation key does not press an item inside
            self.set_active_id(Id::new(id.raw().wrapping_add(1)), Some(child));
            self.active_id_source = InputSource::Nav;
        }
        ret
    }

    /// Closes a child region and submits it as an item of the parent window.
    ///
    /// # Panics
    /// Panics when the current window is not a child window.
    pub fn end_child(&mut self) {
        assert!(!self.within_end_child);
        let idx = self.current_window_idx();
        assert!(self.windows[idx.0].flags.is_child(), "end_child() on '{}' which is not a child window", self.windows[idx.0].name);

        self.within_end_child = true;
        if self.windows[idx.0].begin_count > 1 {
            self.end();
        } else {
            let (mut sz, axises, child_id, navigable, nav_layers_active_mask) = {
                let w = &self.windows[idx.0];
                let navigable = (w.dc.nav_layers_active_mask != 0 || w.dc.nav_has_scroll) && !w.flags.contains(WindowFlags::NAV_FLATTENED);
                (w.size, w.auto_fit_child_axises, w.child_id, navigable, w.dc.nav_layers_active_mask)
            };
            if axises & (1 << 0) != 0 {
                sz.x = sz.x.max(4.0);
            }
            if axises & (1 << 1) != 0 {
                sz.y = sz.y.max(4.0);
            }
            self.end();

            let parent = self.current_window_idx();
            let cursor = self.windows[parent.0].dc.cursor_pos;
            let bb = Rect::from_min_size(cursor, sz);
            self.item_size(sz, -1.0);
            if navigable {
                self.item_add(&bb, child_id, None);
                self.render_nav_highlight(&bb, child_id, false);

                // scroll-only children keep a highlight while browsed
                if nav_layers_active_mask == 0 && self.nav_window == Some(idx) {
                    let nav_id = self.nav_id;
                    self.render_nav_highlight(&bb.expanded(2.0), nav_id, true);
                }
            } else {
                self.item_add(&bb, Id::NONE, None);
            }
        }
        self.within_end_child = false;
    }

    /// Calls `f` inside a child region when it is visible; the region is always closed.
    pub fn child<R>(&mut self, str_id: &str, size: Vec2f, border: bool, flags: WindowFlags, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        let res = if self.begin_child(str_id, size, border, flags) { Some(f(self)) } else { None };
        self.end_child();
        res
    }

    /// Sets the position of the next window. `pivot` (0,0) anchors the upper-left corner,
    /// (0.5,0.5) centers the window on `pos`.
    pub fn set_next_window_pos(&mut self, pos: Vec2f, cond: Cond, pivot: Vec2f) {
        let nwd = &mut self.next_window_data;
        nwd.flags |= NextWindowDataFlags::HAS_POS;
        nwd.pos_val = pos;
        nwd.pos_pivot_val = pivot;
        nwd.pos_cond = cond.or_always();
    }

    /// Sets the size of the next window; zero on an axis auto-fits it.
    pub fn set_next_window_size(&mut self, size: Vec2f, cond: Cond) {
        let nwd = &mut self.next_window_data;
        nwd.flags |= NextWindowDataFlags::HAS_SIZE;
        nwd.size_val = size;
        nwd.size_cond = cond.or_always();
    }

    /// Constrains the size of the next window; a negative bound keeps the current size on
    /// that axis. `callback` may adjust the final size.
    pub fn set_next_window_size_constraints(&mut self, size_min: Vec2f, size_max: Vec2f, callback: Option<SizeCallback>) {
        let nwd = &mut self.next_window_data;
        nwd.flags |= NextWindowDataFlags::HAS_SIZE_CONSTRAINT;
        nwd.size_constraint_rect = Rect::new(size_min, size_max);
        nwd.size_callback = callback;
    }

    /// Sets the content size of the next window, excluding padding.
    pub fn set_next_window_content_size(&mut self, size: Vec2f) {
        self.next_window_data.flags |= NextWindowDataFlags::HAS_CONTENT_SIZE;
        self.next_window_data.content_size_val = vec2_floor(size);
    }

    /// Sets the scroll offset of the next window; a negative value leaves that axis alone.
    pub fn set_next_window_scroll(&mut self, scroll: Vec2f) {
        self.next_window_data.flags |= NextWindowDataFlags::HAS_SCROLL;
        self.next_window_data.scroll_val = scroll;
    }

    /// Sets the collapsed state of the next window.
    pub fn set_next_window_collapsed(&mut self, collapsed: bool, cond: Cond) {
        let nwd = &mut self.next_window_data;
        nwd.flags |= NextWindowDataFlags::HAS_COLLAPSED;
        nwd.collapsed_val = collapsed;
        nwd.collapsed_cond = cond.or_always();
    }

    /// Focuses the next window.
    pub fn set_next_window_focus(&mut self) { self.next_window_data.flags |= NextWindowDataFlags::HAS_FOCUS; }

    /// Overrides the background alpha of the next window.
    pub fn set_next_window_bg_alpha(&mut self, alpha: f32) {
        self.next_window_data.flags |= NextWindowDataFlags::HAS_BG_ALPHA;
        self.next_window_data.bg_alpha_val = alpha;
    }

    /// Moves the current window.
    pub fn set_window_pos(&mut self, pos: Vec2f, cond: Cond) {
        let idx = self.current_window_idx();
        self.set_window_pos_ex(idx, pos, cond);
    }

    /// Resizes the current window; zero on an axis auto-fits it.
    pub fn set_window_size(&mut self, size: Vec2f, cond: Cond) {
        let idx = self.current_window_idx();
        self.set_window_size_ex(idx, size, cond);
    }

    /// Collapses or expands the current window.
    pub fn set_window_collapsed(&mut self, collapsed: bool, cond: Cond) {
        let idx = self.current_window_idx();
        self.set_window_collapsed_ex(idx, collapsed, cond);
    }

    /// Focuses the current window.
    pub fn set_window_focus(&mut self) {
        let idx = self.current_window_idx();
        self.focus_window(Some(idx));
    }

    /// Moves the window `name`, if it exists.
    pub fn set_window_pos_by_name(&mut self, name: &str, pos: Vec2f, cond: Cond) {
        if let Some(idx) = self.find_window_by_name(name) {
            self.set_window_pos_ex(idx, pos, cond);
        }
    }

    /// Resizes the window `name`, if it exists.
    pub fn set_window_size_by_name(&mut self, name: &str, size: Vec2f, cond: Cond) {
        if let Some(idx) = self.find_window_by_name(name) {
            self.set_window_size_ex(idx, size, cond);
        }
    }

    /// Collapses or expands the window `name`, if it exists.
    pub fn set_window_collapsed_by_name(&mut self, name: &str, collapsed: bool, cond: Cond) {
        if let Some(idx) = self.find_window_by_name(name) {
            self.set_window_collapsed_ex(idx, collapsed, cond);
        }
    }

    /// Focuses the window `name`; `None` removes the focus from every window.
    pub fn set_window_focus_by_name(&mut self, name: Option<&str>) {
        match name {
            Some(name) => {
                if let Some(idx) = self.find_window_by_name(name) {
                    self.focus_window(Some(idx));
                }
            }
            None => self.focus_window(None),
        }
    }

    /// Returns `true` on the first frame of a window appearance.
    pub fn is_window_appearing(&self) -> bool { self.current_window_ref().appearing }

    /// Returns `true` when the current window is collapsed.
    pub fn is_window_collapsed(&self) -> bool { self.current_window_ref().collapsed }

    /// Returns `true` when the current window (or, depending on `flags`, its root or one of its
    /// children) has the focus.
    pub fn is_window_focused(&self, flags: FocusedFlags) -> bool {
        if flags.contains(FocusedFlags::ANY_WINDOW) {
            return self.nav_window.is_some();
        }
        let current = self.current_window_idx();
        let current_root = self.windows[current.0].root_window;
        let nav = match self.nav_window {
            Some(nav) => nav,
            None => return false,
        };
        let root_and_children = FocusedFlags::ROOT_WINDOW | FocusedFlags::CHILD_WINDOWS;
        if flags.contains(root_and_children) {
            self.windows[nav.0].root_window == current_root
        } else if flags.contains(FocusedFlags::ROOT_WINDOW) {
            nav == current_root
        } else if flags.contains(FocusedFlags::CHILD_WINDOWS) {
            self.is_window_child_of(nav, current)
        } else {
            nav == current
        }
    }

    /// Returns `true` when the current window (or, depending on `flags`, its root or one of its
    /// children) is hovered and reachable.
    pub fn is_window_hovered(&self, flags: HoveredFlags) -> bool {
        let hovered = match self.hovered_window {
            Some(h) => h,
            None => return false,
        };
        if !flags.contains(HoveredFlags::ANY_WINDOW) {
            let current = self.current_window_idx();
            let ok = if flags.contains(HoveredFlags::ROOT_AND_CHILD_WINDOWS) {
                self.hovered_root_window == Some(self.windows[current.0].root_window)
            } else if flags.contains(HoveredFlags::ROOT_WINDOW) {
                hovered == self.windows[current.0].root_window
            } else if flags.contains(HoveredFlags::CHILD_WINDOWS) {
                self.is_window_child_of(hovered, current)
            } else {
                hovered == current
            };
            if !ok {
                return false;
            }
        }
        if !self.is_window_content_hoverable(hovered, flags) {
            return false;
        }
        if !flags.contains(HoveredFlags::ALLOW_WHEN_BLOCKED_BY_ACTIVE_ITEM) && self.active_id.is_some() && !self.active_id_allow_overlap && self.active_id != self.windows[hovered.0].move_id {
            return false;
        }
        true
    }

    /// Returns `false` when a modal, or a popup unless `flags` allows it, blocks the window.
    pub(crate) fn is_window_content_hoverable(&self, idx: WindowIdx, flags: HoveredFlags) -> bool {
        if let Some(nav) = self.nav_window {
            let focused_root = self.windows[nav.0].root_window;
            let fr = &self.windows[focused_root.0];
            if fr.was_active && focused_root != self.windows[idx.0].root_window {
                if fr.flags.is_modal() {
                    return false;
                }
                if fr.flags.is_popup() && !flags.contains(HoveredFlags::ALLOW_WHEN_BLOCKED_BY_POPUP) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` when `idx` is `potential_parent` or one of its descendants.
    pub fn is_window_child_of(&self, idx: WindowIdx, potential_parent: WindowIdx) -> bool {
        if self.windows[idx.0].root_window == potential_parent {
            return true;
        }
        let mut cursor = Some(idx);
        while let Some(w) = cursor {
            if w == potential_parent {
                return true;
            }
            cursor = self.windows[w.0].parent_window;
        }
        false
    }

    /// Position of the current window.
    pub fn get_window_pos(&self) -> Vec2f { self.current_window_ref().pos }

    /// Size of the current window.
    pub fn get_window_size(&self) -> Vec2f { self.current_window_ref().size }

    /// Width of the current window.
    pub fn get_window_width(&self) -> f32 { self.current_window_ref().size.x }

    /// Height of the current window.
    pub fn get_window_height(&self) -> f32 { self.current_window_ref().size.y }

    /// Widget state of the current window, kept across frames.
    pub fn get_state_storage(&self) -> &Storage { self.current_window_ref().state_storage() }

    /// Mutable widget state of the current window.
    pub fn get_state_storage_mut(&mut self) -> &mut Storage { self.current_window_mut().state_storage_mut() }

    /// Gives the focus to `window` and brings its root to the front; `None` removes the focus.
    /// Popups that are not parents of the new focus are closed.
    pub fn focus_window(&mut self, window: Option<WindowIdx>) {
        if self.nav_window != window {
            self.nav_window = window;
            if window.is_some() && self.nav_disable_mouse_hover {
                self.nav_mouse_pos_dirty = true;
            }
            self.nav_init_request = false;
            self.nav_id = window.map(|w| self.windows[w.0].nav_last_ids[0]).unwrap_or(Id::NONE);
            self.nav_focus_scope_id = Id::NONE;
            self.nav_id_is_alive = false;
            self.nav_layer = NavLayer::Main;
        }

        self.close_popups_over_window(window, false);

        let front = window.map(|w| self.windows[w.0].root_window);

        // an active widget in another window loses its activation
        if self.active_id.is_some() && !self.active_id_no_clear_on_focus_loss {
            if let Some(active_window) = self.active_id_window {
                if Some(self.windows[active_window.0].root_window) != front {
                    self.clear_active_id();
                }
            }
        }

        let (window, front) = match (window, front) {
            (Some(w), Some(f)) => (w, f),
            _ => return,
        };
        self.bring_window_to_focus_front(front);
        if !(self.windows[window.0].flags | self.windows[front.0].flags).contains(WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS) {
            self.bring_window_to_display_front(front);
        }
    }

    /// Focuses the top-most window below `under_this_window` (or the top-most of all), skipping
    /// `ignore_window`, child windows and windows that take no input.
    pub fn focus_top_most_window_under_one(&mut self, under_this_window: Option<WindowIdx>, ignore_window: Option<WindowIdx>) {
        let mut start = self.focus_order.len();
        if let Some(under) = under_this_window {
            if let Some(i) = self.focus_order.iter().position(|&w| w == under) {
                start = i;
            }
        }
        let no_inputs = WindowFlags::NO_MOUSE_INPUTS | WindowFlags::NO_NAV_INPUTS;
        for i in (0..start).rev() {
            let idx = self.focus_order[i];
            let w = &self.windows[idx.0];
            if Some(idx) != ignore_window && w.was_active && !w.flags.is_child() && (w.flags & no_inputs) != no_inputs {
                let focus = self.nav_restore_last_child_nav_window(idx);
                self.focus_window(Some(focus));
                return;
            }
        }
        self.focus_window(None);
    }

    /// Moves `idx` to the end of the focus order.
    pub fn bring_window_to_focus_front(&mut self, idx: WindowIdx) {
        if self.focus_order.last() == Some(&idx) {
            return;
        }
        if let Some(i) = self.focus_order.iter().position(|&w| w == idx) {
            self.focus_order.remove(i);
            self.focus_order.push(idx);
        }
    }

    /// Moves `idx` to the front of the display order.
    pub fn bring_window_to_display_front(&mut self, idx: WindowIdx) {
        if let Some(&front) = self.display_order.last() {
            if front == idx || self.windows[front.0].root_window == idx {
                return;
            }
        }
        if let Some(i) = self.display_order.iter().position(|&w| w == idx) {
            self.display_order.remove(i);
            self.display_order.push(idx);
        }
    }

    /// Moves `idx` to the back of the display order.
    pub fn bring_window_to_display_back(&mut self, idx: WindowIdx) {
        if self.display_order.first() == Some(&idx) {
            return;
        }
        if let Some(i) = self.display_order.iter().position(|&w| w == idx) {
            self.display_order.remove(i);
            self.display_order.insert(0, idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(ctx: &mut Context, pos: Vec2f, size: Vec2f, cond: Cond) {
        ctx.set_next_window_pos(pos, cond, vec2(0.0, 0.0));
        ctx.set_next_window_size(size, cond);
    }

    #[test]
    fn content_size_and_position_persist() {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            place(ctx, vec2(10.0, 10.0), vec2(200.0, 100.0), Cond::FIRST_USE_EVER);
            ctx.window("W", WindowFlags::empty(), |ctx| ctx.dummy(vec2(50.0, 20.0)));
        });
        for _ in 0..2 {
            ctx.frame(|ctx| {
                ctx.window("W", WindowFlags::empty(), |ctx| ctx.dummy(vec2(50.0, 20.0)));
            });
        }
        let w = ctx.find_window_by_name("W").unwrap();
        let window = ctx.get_window(w);
        assert_eq!(window.content_size_ideal().x, 50.0);
        assert_eq!(window.content_size_ideal().y, 20.0);
        assert_eq!(window.pos().x, 10.0);
        assert_eq!(window.pos().y, 10.0);
        assert_eq!(window.size().x, 200.0);
        assert_eq!(window.size().y, 100.0);
    }

    #[test]
    fn state_storage_survives_frames() {
        let mut ctx = Context::new_headless();
        let key = hash_str("open", Id::NONE);
        ctx.frame(|ctx| {
            ctx.window("S", WindowFlags::empty(), |ctx| {
                assert_eq!(ctx.get_state_storage().get_int(key, -1), -1);
                ctx.get_state_storage_mut().set_int(key, 7);
            });
        });
        ctx.frame(|ctx| {
            ctx.window("S", WindowFlags::empty(), |ctx| {
                assert_eq!(ctx.get_state_storage().get_int(key, -1), 7);
                *ctx.get_state_storage_mut().get_int_mut(key, 0) += 1;
            });
        });
        ctx.frame(|ctx| {
            ctx.window("Other", WindowFlags::empty(), |ctx| assert_eq!(ctx.get_state_storage().get_int(key, -1), -1));
        });
        let w = ctx.find_window_by_name("S").unwrap();
        assert_eq!(ctx.get_window(w).state_storage().get_int(key, 0), 8);
    }

    #[test]
    fn first_use_ever_only_applies_once() {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            place(ctx, vec2(10.0, 10.0), vec2(200.0, 100.0), Cond::FIRST_USE_EVER);
            ctx.window("W", WindowFlags::empty(), |_| {});
        });
        ctx.frame(|ctx| {
            place(ctx, vec2(300.0, 300.0), vec2(50.0, 50.0), Cond::FIRST_USE_EVER);
            ctx.window("W", WindowFlags::empty(), |_| {});
        });
        let w = ctx.find_window_by_name("W").unwrap();
        assert_eq!(ctx.get_window(w).pos().x, 10.0);
        assert_eq!(ctx.get_window(w).size_full().x, 200.0);
    }

    #[test]
    fn new_auto_sized_window_is_hidden_for_one_frame() {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            ctx.window("Auto", WindowFlags::ALWAYS_AUTO_RESIZE, |ctx| ctx.dummy(vec2(120.0, 40.0)));
        });
        let w = ctx.find_window_by_name("Auto").unwrap();
        assert!(ctx.get_window(w).hidden);
        ctx.frame(|ctx| {
            ctx.window("Auto", WindowFlags::ALWAYS_AUTO_RESIZE, |ctx| ctx.dummy(vec2(120.0, 40.0)));
        });
        let window = ctx.get_window(w);
        assert!(!window.hidden);
        let padding = ctx.style.window_padding;
        assert_eq!(window.size().x, 120.0 + padding.x * 2.0);
        let title = ctx.get_frame_height();
        assert_eq!(window.size().y, 40.0 + padding.y * 2.0 + title);
    }

    #[test]
    fn size_constraints_and_callback() {
        let mut ctx = Context::new_headless();
        for _ in 0..2 {
            ctx.frame(|ctx| {
                ctx.set_next_window_size(vec2(500.0, 500.0), Cond::ALWAYS);
                ctx.set_next_window_size_constraints(
                    vec2(100.0, 100.0),
                    vec2(300.0, 400.0),
                    Some(Box::new(|data: &mut SizeCallbackData| {
                        data.desired_size.y = data.desired_size.x;
                    })),
                );
                ctx.window("C", WindowFlags::empty(), |_| {});
            });
        }
        let w = ctx.find_window_by_name("C").unwrap();
        assert_eq!(ctx.get_window(w).size().x, 300.0);
        assert_eq!(ctx.get_window(w).size().y, 300.0);
    }

    #[test]
    fn pivot_centers_the_window() {
        let mut ctx = Context::new_headless();
        for _ in 0..2 {
            ctx.frame(|ctx| {
                ctx.set_next_window_pos(vec2(400.0, 300.0), Cond::ALWAYS, vec2(0.5, 0.5));
                ctx.set_next_window_size(vec2(200.0, 100.0), Cond::ALWAYS);
                ctx.window("P", WindowFlags::empty(), |_| {});
            });
        }
        let w = ctx.find_window_by_name("P").unwrap();
        assert_eq!(ctx.get_window(w).pos().x, 300.0);
        assert_eq!(ctx.get_window(w).pos().y, 250.0);
    }

    #[test]
    fn child_names_and_links() {
        let mut ctx = Context::new_headless();
        let mut child_idx = None;
        ctx.frame(|ctx| {
            ctx.window("Parent", WindowFlags::empty(), |ctx| {
                ctx.child("list", vec2(0.0, 80.0), true, WindowFlags::empty(), |ctx| {
                    child_idx = ctx.get_current_window();
                });
            });
        });
        let parent = ctx.find_window_by_name("Parent").unwrap();
        let child = child_idx.unwrap();
        let cw = ctx.get_window(child);
        assert!(cw.name().starts_with("Parent/list_"));
        assert_eq!(cw.name().len(), "Parent/list_".len() + 8);
        assert_eq!(cw.parent(), Some(parent));
        assert_eq!(cw.root(), parent);
        assert!(cw.flags().is_child());
        assert!(ctx.is_window_child_of(child, parent));
        assert!(!ctx.is_window_child_of(parent, child));
    }

    #[test]
    #[should_panic(expected = "must call end_child()")]
    fn end_on_child_panics() {
        let mut ctx = Context::new_headless();
        ctx.new_frame();
        ctx.begin("P", WindowFlags::empty());
        ctx.begin_child("c", vec2(10.0, 10.0), false, WindowFlags::empty());
        ctx.end();
    }

    #[test]
    #[should_panic(expected = "end() called too many times")]
    fn extra_end_panics() {
        let mut ctx = Context::new_headless();
        ctx.new_frame();
        ctx.end();
    }

    #[test]
    fn collapsed_window_uses_title_bar_height() {
        let mut ctx = Context::new_headless();
        for _ in 0..2 {
            ctx.frame(|ctx| {
                place(ctx, vec2(50.0, 50.0), vec2(200.0, 200.0), Cond::ALWAYS);
                ctx.set_next_window_collapsed(true, Cond::ALWAYS);
                let visible = ctx.begin("Folded", WindowFlags::empty());
                assert!(!visible || ctx.is_window_collapsed());
                ctx.end();
            });
        }
        let w = ctx.find_window_by_name("Folded").unwrap();
        assert!(ctx.get_window(w).is_collapsed());
        assert_eq!(ctx.get_window(w).size().y, ctx.get_frame_height());
        assert_eq!(ctx.get_window(w).size_full().y, 200.0);
    }

    #[test]
    fn close_button_clears_open_flag() {
        let mut ctx = Context::new_headless();
        let mut open = true;
        let frame = |ctx: &mut Context, open: &mut bool| {
            ctx.frame(|ctx| {
                place(ctx, vec2(0.0, 0.0), vec2(200.0, 100.0), Cond::ALWAYS);
                ctx.window_closable("Closable", open, WindowFlags::empty(), |_| {});
            });
        };
        frame(&mut ctx, &mut open);
        frame(&mut ctx, &mut open);

        // close button sits at the right end of the title bar
        let fp = ctx.style.frame_padding;
        let x = 200.0 - fp.x * 2.0 - ctx.get_font_size() * 0.5;
        let y = fp.y + ctx.get_font_size() * 0.5;
        ctx.io.mouse_move(x, y);
        frame(&mut ctx, &mut open);
        ctx.io.mouse_down(MouseButton::Left);
        frame(&mut ctx, &mut open);
        ctx.io.mouse_up(MouseButton::Left);
        frame(&mut ctx, &mut open);
        assert!(!open);
    }

    #[test]
    fn focus_brings_to_front() {
        let mut ctx = Context::new_headless();
        for _ in 0..2 {
            ctx.frame(|ctx| {
                ctx.window("A", WindowFlags::empty(), |_| {});
                ctx.window("B", WindowFlags::empty(), |_| {});
            });
        }
        let a = ctx.find_window_by_name("A").unwrap();
        let b = ctx.find_window_by_name("B").unwrap();
        ctx.frame(|ctx| {
            ctx.window("A", WindowFlags::empty(), |_| {});
            ctx.window("B", WindowFlags::empty(), |_| {});
            ctx.focus_window(Some(a));
        });
        assert_eq!(ctx.get_focused_window(), Some(a));
        assert_eq!(ctx.display_order().last(), Some(&a));
        ctx.frame(|ctx| {
            ctx.window("B", WindowFlags::empty(), |ctx| {
                ctx.set_window_focus();
                assert!(ctx.is_window_focused(FocusedFlags::empty()));
            });
        });
        assert_eq!(ctx.get_focused_window(), Some(b));

        // a focused window that is no longer submitted hands the focus back
        ctx.frame(|ctx| { ctx.window("A", WindowFlags::empty(), |_| {}); });
        ctx.frame(|ctx| { ctx.window("A", WindowFlags::empty(), |_| {}); });
        assert_eq!(ctx.get_focused_window(), Some(a));
    }

    #[test]
    fn hovered_window_queries() {
        let mut ctx = Context::new_headless();
        ctx.io.mouse_move(60.0, 60.0);
        for _ in 0..3 {
            ctx.frame(|ctx| {
                place(ctx, vec2(20.0, 20.0), vec2(200.0, 200.0), Cond::ALWAYS);
                ctx.window("Outer", WindowFlags::empty(), |ctx| {
                    ctx.child("in", vec2(100.0, 100.0), true, WindowFlags::empty(), |ctx| {
                        ctx.dummy(vec2(10.0, 10.0));
                    });
                    if ctx.frame_count() > 1 {
                        assert!(!ctx.is_window_hovered(HoveredFlags::empty()));
                        assert!(ctx.is_window_hovered(HoveredFlags::CHILD_WINDOWS));
                        assert!(ctx.is_window_hovered(HoveredFlags::ROOT_AND_CHILD_WINDOWS));
                    }
                });
            });
        }
    }
}
