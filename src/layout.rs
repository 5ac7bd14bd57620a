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
use crate::window::{GroupData, NextItemDataFlags};
use crate::*;

impl Context {
    /// Advances the cursor past an item of `size`, folding the line height and text baseline.
    ///
    /// `text_baseline_y` is the offset of the item's text baseline from its top, or a negative
    /// value when the item has no text.
    pub fn item_size(&mut self, size: Vec2f, text_baseline_y: f32) {
        let spacing = self.style.item_spacing;
        let w = self.current_window_mut();
        if w.skip_items {
            return;
        }

        let offset_to_match_baseline_y = if text_baseline_y >= 0.0 { (w.dc.curr_line_text_base_offset - text_baseline_y).max(0.0) } else { 0.0 };
        let line_height = w.dc.curr_line_size.y.max(size.y + offset_to_match_baseline_y);

        w.dc.cursor_pos_prev_line = vec2(w.dc.cursor_pos.x + size.x, w.dc.cursor_pos.y);
        w.dc.cursor_pos.x = (w.pos.x + w.dc.indent + w.dc.columns_offset).floor();
        w.dc.cursor_pos.y = (w.dc.cursor_pos.y + line_height + spacing.y).floor();
        w.dc.cursor_max_pos.x = w.dc.cursor_max_pos.x.max(w.dc.cursor_pos_prev_line.x);
        w.dc.cursor_max_pos.y = w.dc.cursor_max_pos.y.max(w.dc.cursor_pos.y - spacing.y);
        w.dc.ideal_max_pos = vec2_max(w.dc.ideal_max_pos, w.dc.cursor_max_pos);

        w.dc.prev_line_size.y = line_height;
        w.dc.curr_line_size.y = 0.0;
        w.dc.prev_line_text_base_offset = w.dc.curr_line_text_base_offset.max(text_baseline_y);
        w.dc.curr_line_text_base_offset = 0.0;

        if w.dc.layout_type == LayoutType::Horizontal {
            self.same_line();
        }
    }

    /// [`Context::item_size`] for a rectangle.
    pub fn item_size_rect(&mut self, bb: &Rect, text_baseline_y: f32) { self.item_size(bb.size(), text_baseline_y) }

    /// Declares an item: registers it for navigation, records it as the last item and tests it
    /// against the clip rectangle.
    ///
    /// Returns `false` when the item is clipped and should not be drawn.
    pub fn item_add(&mut self, bb: &Rect, id: Id, nav_bb: Option<&Rect>) -> bool {
        let widx = self.current_window_idx();
        if id.is_some() {
            self.keep_alive_id(id);
            let layer = self.windows[widx.0].dc.nav_layer_current;
            self.windows[widx.0].dc.nav_layers_active_mask_next |= 1 << layer.index();
            if self.nav_id == id || self.nav_any_request {
                if let Some(nav_window) = self.nav_window {
                    let same_root = self.windows[nav_window.0].root_window_for_nav == self.windows[widx.0].root_window_for_nav;
                    let flattened = (self.windows[nav_window.0].flags | self.windows[widx.0].flags).contains(WindowFlags::NAV_FLATTENED);
                    if same_root && (widx == nav_window || flattened) {
                        let nav_bb = nav_bb.copied().unwrap_or(*bb);
                        self.nav_process_item(widx, &nav_bb, id);
                    }
                }
            }
        }

        let w = &mut self.windows[widx.0];
        w.dc.last_item_id = id;
        w.dc.last_item_rect = *bb;
        w.dc.last_item_status_flags = ItemStatusFlags::empty();
        self.next_item_data.flags = NextItemDataFlags::empty();

        if self.is_clipped_ex(bb, id) {
            return false;
        }
        if self.is_mouse_hovering_rect(bb.min, bb.max, true) {
            self.windows[widx.0].dc.last_item_status_flags |= ItemStatusFlags::HOVERED_RECT;
        }
        true
    }

    /// Returns `true` when `bb` is outside the clip rectangle of the current window; the active
    /// and navigated items are never clipped.
    pub fn is_clipped_ex(&self, bb: &Rect, id: Id) -> bool {
        let w = self.current_window_ref();
        !bb.overlaps(&w.clip_rect) && (id.is_none() || (id != self.active_id && id != self.nav_id))
    }

    /// Hover test used by widgets: sets the hovered ID when the mouse is over `bb` and nothing
    /// blocks the interaction.
    pub fn item_hoverable(&mut self, bb: &Rect, id: Id) -> bool {
        if self.hovered_id.is_some() && self.hovered_id != id && !self.hovered_id_allow_overlap {
            return false;
        }
        let widx = self.current_window_idx();
        if self.hovered_window != Some(widx) {
            return false;
        }
        if self.active_id.is_some() && self.active_id != id && !self.active_id_allow_overlap {
            return false;
        }
        if !self.is_mouse_hovering_rect(bb.min, bb.max, true) {
            return false;
        }
        if self.nav_disable_mouse_hover {
            return false;
        }
        if !self.is_window_content_hoverable(widx, HoveredFlags::empty()) {
            self.hovered_id_disabled = true;
            return false;
        }
        if id.is_some() {
            self.set_hovered_id(id);
        }
        if self.windows[widx.0].dc.item_flags.contains(ItemFlags::DISABLED) {
            if self.active_id == id {
                self.clear_active_id();
            }
            self.hovered_id_disabled = true;
            return false;
        }
        true
    }

    /// Places the next item on the same line as the previous one.
    pub fn same_line(&mut self) { self.same_line_ex(0.0, -1.0) }

    /// Places the next item on the same line, at `offset_from_start_x` from the window start
    /// when non zero, separated by `spacing_w` (the style spacing when negative).
    pub fn same_line_ex(&mut self, offset_from_start_x: f32, spacing_w: f32) {
        let item_spacing = self.style.item_spacing.x;
        let w = self.current_window_mut();
        if w.skip_items {
            return;
        }
        if offset_from_start_x != 0.0 {
            let spacing_w = spacing_w.max(0.0);
            w.dc.cursor_pos.x = w.pos.x - w.scroll.x + offset_from_start_x + spacing_w + w.dc.group_offset + w.dc.columns_offset;
        } else {
            let spacing_w = if spacing_w < 0.0 { item_spacing } else { spacing_w };
            w.dc.cursor_pos.x = w.dc.cursor_pos_prev_line.x + spacing_w;
        }
        w.dc.cursor_pos.y = w.dc.cursor_pos_prev_line.y;
        w.dc.curr_line_size = w.dc.prev_line_size;
        w.dc.curr_line_text_base_offset = w.dc.prev_line_text_base_offset;
    }

    /// Ends the current line, keeping a full text line of height when it was empty.
    pub fn new_line(&mut self) {
        let font_size = self.font_size;
        let w = self.current_window_mut();
        if w.skip_items {
            return;
        }
        let backup_layout_type = w.dc.layout_type;
        w.dc.layout_type = LayoutType::Vertical;
        let height = if w.dc.curr_line_size.y > 0.0 { 0.0 } else { font_size };
        self.item_size(vec2(0.0, height), -1.0);
        self.current_window_mut().dc.layout_type = backup_layout_type;
    }

    /// Adds vertical spacing.
    pub fn spacing(&mut self) {
        if self.current_window_ref().skip_items {
            return;
        }
        self.item_size(vec2(0.0, 0.0), -1.0);
    }

    /// Adds an empty item of `size`.
    pub fn dummy(&mut self, size: Vec2f) {
        let w = self.current_window_ref();
        if w.skip_items {
            return;
        }
        let bb = Rect::from_min_size(w.dc.cursor_pos, size);
        self.item_size(size, -1.0);
        self.item_add(&bb, Id::NONE, None);
    }

    /// Draws a separator line: horizontal in regular layouts, vertical in menu bars.
    pub fn separator(&mut self) {
        let col = self.get_color(StyleColor::Separator, 1.0);
        let in_group = !self.group_stack.is_empty();
        let w = self.current_window_ref();
        if w.skip_items {
            return;
        }
        if w.dc.layout_type == LayoutType::Horizontal {
            let y1 = w.dc.cursor_pos.y;
            let y2 = w.dc.cursor_pos.y + w.dc.curr_line_size.y;
            let bb = Rect::from_coords(w.dc.cursor_pos.x, y1, w.dc.cursor_pos.x + 1.0, y2);
            self.item_size(vec2(0.0, 0.0), -1.0);
            if self.item_add(&bb, Id::NONE, None) {
                self.get_window_draw_list().add_line(bb.min, vec2(bb.min.x, bb.max.y), col, 1.0);
            }
        } else {
            let x1 = if in_group { w.pos.x + w.dc.indent } else { w.pos.x };
            let x2 = w.pos.x + w.size.x;
            let bb = Rect::from_coords(x1, w.dc.cursor_pos.y, x2, w.dc.cursor_pos.y + 1.0);
            self.item_size(vec2(0.0, 0.0), -1.0);
            if self.item_add(&bb, Id::NONE, None) {
                self.get_window_draw_list().add_line(bb.min, vec2(bb.max.x, bb.min.y), col, 1.0);
            }
        }
    }

    /// Moves the content position right by `indent_w` (the style indent when 0).
    pub fn indent(&mut self, indent_w: f32) {
        let spacing = self.style.indent_spacing;
        let w = self.current_window_mut();
        w.dc.indent += if indent_w != 0.0 { indent_w } else { spacing };
        w.dc.cursor_pos.x = w.pos.x + w.dc.indent + w.dc.columns_offset;
    }

    /// Moves the content position back left by `indent_w` (the style indent when 0).
    pub fn unindent(&mut self, indent_w: f32) {
        let spacing = self.style.indent_spacing;
        let w = self.current_window_mut();
        w.dc.indent -= if indent_w != 0.0 { indent_w } else { spacing };
        w.dc.cursor_pos.x = w.pos.x + w.dc.indent + w.dc.columns_offset;
    }

    /// Starts laying out items as a single block that can be queried or placed as one item.
    pub fn begin_group(&mut self) {
        let widx = self.current_window_idx();
        let data = {
            let w = &self.windows[widx.0];
            GroupData {
                window_id: w.id,
                backup_cursor_pos: w.dc.cursor_pos,
                backup_cursor_max_pos: w.dc.cursor_max_pos,
                backup_indent: w.dc.indent,
                backup_group_offset: w.dc.group_offset,
                backup_curr_line_size: w.dc.curr_line_size,
                backup_curr_line_text_base_offset: w.dc.curr_line_text_base_offset,
                backup_active_id_is_alive: self.active_id_is_alive,
                backup_active_id_previous_frame_is_alive: self.active_id_previous_frame_is_alive,
                emit_item: true,
            }
        };
        self.group_stack.push(data);

        let w = &mut self.windows[widx.0];
        w.dc.group_offset = w.dc.cursor_pos.x - w.pos.x - w.dc.columns_offset;
        w.dc.indent = w.dc.group_offset;
        w.dc.cursor_max_pos = w.dc.cursor_pos;
        w.dc.curr_line_size = vec2(0.0, 0.0);
    }

    /// Closes the group opened by [`Context::begin_group`] and submits it as one item.
    ///
    /// # Panics
    /// Panics without a matching `begin_group` in the current window.
    pub fn end_group(&mut self) {
        let widx = self.current_window_idx();
        let data = match self.group_stack.last() {
            Some(d) => *d,
            None => panic!("end_group() without begin_group()"),
        };
        assert_eq!(data.window_id, self.windows[widx.0].id, "end_group() in the wrong window");

        let group_bb = {
            let w = &mut self.windows[widx.0];
            let group_bb = Rect::new(data.backup_cursor_pos, vec2_max(w.dc.cursor_max_pos, data.backup_cursor_pos));
            w.dc.cursor_pos = data.backup_cursor_pos;
            w.dc.cursor_max_pos = vec2_max(data.backup_cursor_max_pos, w.dc.cursor_max_pos);
            w.dc.indent = data.backup_indent;
            w.dc.group_offset = data.backup_group_offset;
            w.dc.curr_line_size = data.backup_curr_line_size;
            w.dc.curr_line_text_base_offset = data.backup_curr_line_text_base_offset;
            group_bb
        };
        if !data.emit_item {
            self.group_stack.pop();
            return;
        }

        {
            let w = &mut self.windows[widx.0];
            w.dc.curr_line_text_base_offset = w.dc.prev_line_text_base_offset.max(data.backup_curr_line_text_base_offset);
        }
        self.item_size(group_bb.size(), -1.0);
        self.item_add(&group_bb, Id::NONE, None);

        // the group stands for the item that became active inside of it
        let contains_curr_active_id = data.backup_active_id_is_alive != self.active_id && self.active_id_is_alive == self.active_id && self.active_id.is_some();
        let contains_prev_active_id = !data.backup_active_id_previous_frame_is_alive && self.active_id_previous_frame_is_alive;
        let w = &mut self.windows[widx.0];
        if contains_curr_active_id {
            w.dc.last_item_id = self.active_id;
        } else if contains_prev_active_id {
            w.dc.last_item_id = self.active_id_previous_frame;
        }
        w.dc.last_item_rect = group_bb;
        if contains_curr_active_id && self.active_id_has_been_edited_this_frame {
            w.dc.last_item_status_flags |= ItemStatusFlags::EDITED;
        }
        w.dc.last_item_status_flags |= ItemStatusFlags::HAS_DEACTIVATED;
        if contains_prev_active_id && self.active_id != self.active_id_previous_frame {
            w.dc.last_item_status_flags |= ItemStatusFlags::DEACTIVATED;
        }
        self.group_stack.pop();
    }

    /// Runs `f` inside a group.
    pub fn group<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_group();
        let res = f(self);
        self.end_group();
        res
    }

    /// Vertically aligns upcoming text to framed widgets on the same line.
    pub fn align_text_to_frame_padding(&mut self) {
        let height = self.font_size + self.style.frame_padding.y * 2.0;
        let pad = self.style.frame_padding.y;
        let w = self.current_window_mut();
        if w.skip_items {
            return;
        }
        w.dc.curr_line_size.y = w.dc.curr_line_size.y.max(height);
        w.dc.curr_line_text_base_offset = w.dc.curr_line_text_base_offset.max(pad);
    }

    // cursor

    /// Cursor position in window coordinates, scroll included.
    pub fn get_cursor_pos(&self) -> Vec2f {
        let w = self.current_window_ref();
        vec2(w.dc.cursor_pos.x - w.pos.x + w.scroll.x, w.dc.cursor_pos.y - w.pos.y + w.scroll.y)
    }

    /// Moves the cursor in window coordinates.
    pub fn set_cursor_pos(&mut self, local_pos: Vec2f) {
        let w = self.current_window_mut();
        w.dc.cursor_pos = vec2(w.pos.x - w.scroll.x + local_pos.x, w.pos.y - w.scroll.y + local_pos.y);
        w.dc.cursor_max_pos = vec2_max(w.dc.cursor_max_pos, w.dc.cursor_pos);
    }

    /// Moves the cursor horizontally in window coordinates.
    pub fn set_cursor_pos_x(&mut self, x: f32) {
        let w = self.current_window_mut();
        w.dc.cursor_pos.x = w.pos.x - w.scroll.x + x;
        w.dc.cursor_max_pos.x = w.dc.cursor_max_pos.x.max(w.dc.cursor_pos.x);
    }

    /// Moves the cursor vertically in window coordinates.
    pub fn set_cursor_pos_y(&mut self, y: f32) {
        let w = self.current_window_mut();
        w.dc.cursor_pos.y = w.pos.y - w.scroll.y + y;
        w.dc.cursor_max_pos.y = w.dc.cursor_max_pos.y.max(w.dc.cursor_pos.y);
    }

    /// Initial cursor position in window coordinates.
    pub fn get_cursor_start_pos(&self) -> Vec2f {
        let w = self.current_window_ref();
        vec2(w.dc.cursor_start_pos.x - w.pos.x, w.dc.cursor_start_pos.y - w.pos.y)
    }

    /// Cursor position in screen coordinates.
    pub fn get_cursor_screen_pos(&self) -> Vec2f { self.current_window_ref().dc.cursor_pos }

    /// Moves the cursor in screen coordinates.
    pub fn set_cursor_screen_pos(&mut self, pos: Vec2f) {
        let w = self.current_window_mut();
        w.dc.cursor_pos = pos;
        w.dc.cursor_max_pos = vec2_max(w.dc.cursor_max_pos, pos);
    }

    pub(crate) fn get_content_region_max_abs(&self) -> Vec2f { self.current_window_ref().content_region_rect.max }

    /// Space left from the cursor to the content region edge.
    pub fn get_content_region_avail(&self) -> Vec2f {
        let mx = self.get_content_region_max_abs();
        let cursor = self.current_window_ref().dc.cursor_pos;
        vec2(mx.x - cursor.x, mx.y - cursor.y)
    }

    /// Content region bottom-right corner in window coordinates.
    pub fn get_content_region_max(&self) -> Vec2f {
        let w = self.current_window_ref();
        vec2(w.content_region_rect.max.x - w.pos.x, w.content_region_rect.max.y - w.pos.y)
    }

    /// Content region top-left corner in window coordinates.
    pub fn get_window_content_region_min(&self) -> Vec2f {
        let w = self.current_window_ref();
        vec2(w.content_region_rect.min.x - w.pos.x, w.content_region_rect.min.y - w.pos.y)
    }

    /// Width of the content region.
    pub fn get_window_content_region_width(&self) -> f32 { self.current_window_ref().content_region_rect.width() }

    // item width

    /// Width of the next item: the next item width, then the pushed one. Negative widths are
    /// relative to the right edge of the content region.
    pub fn calc_item_width(&self) -> f32 {
        let w = self.current_window_ref();
        let mut width = if self.next_item_data.flags.contains(NextItemDataFlags::HAS_WIDTH) { self.next_item_data.width } else { w.dc.item_width };
        if width < 0.0 {
            let region_max_x = self.get_content_region_max_abs().x;
            width = (region_max_x - w.dc.cursor_pos.x + width).max(1.0);
        }
        width.floor()
    }

    /// Resolves a requested item size: 0 uses the default, negative values are relative to the
    /// right/bottom edge of the content region.
    pub fn calc_item_size(&self, size: Vec2f, default_w: f32, default_h: f32) -> Vec2f {
        let cursor = self.current_window_ref().dc.cursor_pos;
        let region_max = self.get_content_region_max_abs();
        let resolve = |s: f32, default: f32, region: f32, cur: f32| {
            if s == 0.0 {
                default
            } else if s < 0.0 {
                (region - cur + s).max(4.0)
            } else {
                s
            }
        };
        vec2(resolve(size.x, default_w, region_max.x, cursor.x), resolve(size.y, default_h, region_max.y, cursor.y))
    }

    /// Sets the width of the upcoming items (0 restores the window default).
    pub fn push_item_width(&mut self, item_width: f32) {
        let w = self.current_window_mut();
        w.dc.item_width_stack.push(w.dc.item_width);
        w.dc.item_width = if item_width == 0.0 { w.item_width_default } else { item_width };
        self.next_item_data.flags.remove(NextItemDataFlags::HAS_WIDTH);
    }

    /// Restores the previous item width.
    pub fn pop_item_width(&mut self) {
        let w = self.current_window_mut();
        match w.dc.item_width_stack.pop() {
            Some(width) => w.dc.item_width = width,
            None => panic!("pop_item_width() without push_item_width() in '{}'", w.name),
        }
    }

    /// Sets the width of the next item only.
    pub fn set_next_item_width(&mut self, item_width: f32) {
        self.next_item_data.flags |= NextItemDataFlags::HAS_WIDTH;
        self.next_item_data.width = item_width;
    }

    /// Wraps text at `wrap_local_pos_x` in window coordinates (0 wraps at the content edge,
    /// negative disables wrapping).
    pub fn push_text_wrap_pos(&mut self, wrap_local_pos_x: f32) {
        let w = self.current_window_mut();
        w.dc.text_wrap_pos_stack.push(w.dc.text_wrap_pos);
        w.dc.text_wrap_pos = wrap_local_pos_x;
    }

    /// Restores the previous wrap position.
    pub fn pop_text_wrap_pos(&mut self) {
        let w = self.current_window_mut();
        match w.dc.text_wrap_pos_stack.pop() {
            Some(pos) => w.dc.text_wrap_pos = pos,
            None => panic!("pop_text_wrap_pos() without push_text_wrap_pos() in '{}'", w.name),
        }
    }

    /// Enables or disables an item flag for the upcoming items.
    pub fn push_item_flag(&mut self, option: ItemFlags, enabled: bool) {
        let w = self.current_window_mut();
        let mut flags = w.dc.item_flags;
        flags.set(option, enabled);
        w.dc.item_flags = flags;
        self.item_flags_stack.push(flags);
    }

    /// Restores the previous item flags.
    pub fn pop_item_flag(&mut self) {
        assert!(self.item_flags_stack.len() > 1, "pop_item_flag() without push_item_flag()");
        self.item_flags_stack.pop();
        let flags = self.item_flags_stack.last().copied().unwrap_or(ItemFlags::empty());
        self.current_window_mut().dc.item_flags = flags;
    }

    // last item queries

    /// Returns `true` if the last item is hovered and not blocked by a popup or an active item.
    pub fn is_item_hovered(&self, flags: HoveredFlags) -> bool {
        let widx = self.current_window_idx();
        let w = &self.windows[widx.0];
        if self.nav_disable_mouse_hover && !self.nav_disable_highlight {
            return self.is_item_focused();
        }
        if !w.dc.last_item_status_flags.contains(ItemStatusFlags::HOVERED_RECT) {
            return false;
        }
        assert!(!flags.intersects(HoveredFlags::ROOT_WINDOW | HoveredFlags::CHILD_WINDOWS), "window flags passed to is_item_hovered()");
        if self.hovered_root_window != Some(w.root_window) && !flags.contains(HoveredFlags::ALLOW_WHEN_OVERLAPPED) {
            return false;
        }
        if !flags.contains(HoveredFlags::ALLOW_WHEN_BLOCKED_BY_ACTIVE_ITEM)
            && self.active_id.is_some()
            && self.active_id != w.dc.last_item_id
            && !self.active_id_allow_overlap
            && self.active_id != w.move_id
        {
            return false;
        }
        if !self.is_window_content_hoverable(widx, flags) {
            return false;
        }
        if w.dc.item_flags.contains(ItemFlags::DISABLED) && !flags.contains(HoveredFlags::ALLOW_WHEN_DISABLED) {
            return false;
        }
        // the title bar of a collapsed window stays the last item
        !(w.dc.last_item_id == w.move_id && w.write_accessed)
    }

    /// Returns `true` while the last item is held.
    pub fn is_item_active(&self) -> bool { self.active_id.is_some() && self.active_id == self.current_window_ref().dc.last_item_id }

    /// Returns `true` when the last item has the navigation focus.
    pub fn is_item_focused(&self) -> bool { self.nav_id.is_some() && self.nav_id == self.current_window_ref().dc.last_item_id }

    /// Returns `true` when the last item is hovered and `btn` was clicked.
    pub fn is_item_clicked(&self, btn: MouseButton) -> bool { self.is_mouse_clicked(btn, false) && self.is_item_hovered(HoveredFlags::empty()) }

    /// Returns `true` when the last item is not clipped.
    pub fn is_item_visible(&self) -> bool {
        let w = self.current_window_ref();
        w.clip_rect.overlaps(&w.dc.last_item_rect)
    }

    /// Returns `true` when the last item changed its value this frame.
    pub fn is_item_edited(&self) -> bool { self.current_window_ref().dc.last_item_status_flags.contains(ItemStatusFlags::EDITED) }

    /// Returns `true` on the frame the last item became active.
    pub fn is_item_activated(&self) -> bool {
        let last = self.current_window_ref().dc.last_item_id;
        self.active_id.is_some() && self.active_id == last && self.active_id_previous_frame != last
    }

    /// Returns `true` on the frame the last item stopped being active.
    pub fn is_item_deactivated(&self) -> bool {
        let w = self.current_window_ref();
        if w.dc.last_item_status_flags.contains(ItemStatusFlags::HAS_DEACTIVATED) {
            return w.dc.last_item_status_flags.contains(ItemStatusFlags::DEACTIVATED);
        }
        self.active_id_previous_frame == w.dc.last_item_id && self.active_id_previous_frame.is_some() && self.active_id != w.dc.last_item_id
    }

    /// Returns `true` on the frame the last item stopped being active after editing its value.
    pub fn is_item_deactivated_after_edit(&self) -> bool {
        self.is_item_deactivated() && (self.active_id_previous_frame_has_been_edited_before || (self.active_id.is_none() && self.active_id_has_been_edited_before))
    }

    /// Returns `true` when any item is hovered.
    pub fn is_any_item_hovered(&self) -> bool { self.hovered_id.is_some() || self.hovered_id_previous_frame.is_some() }

    /// Returns `true` when any item is active.
    pub fn is_any_item_active(&self) -> bool { self.active_id.is_some() }

    /// Returns `true` when any item has a visible navigation focus.
    pub fn is_any_item_focused(&self) -> bool { self.nav_id.is_some() && !self.nav_disable_highlight }

    /// Identifier of the last item.
    pub fn get_item_id(&self) -> Id { self.current_window_ref().dc.last_item_id }

    /// Upper-left corner of the last item, screen space.
    pub fn get_item_rect_min(&self) -> Vec2f { self.current_window_ref().dc.last_item_rect.min }

    /// Bottom-right corner of the last item, screen space.
    pub fn get_item_rect_max(&self) -> Vec2f { self.current_window_ref().dc.last_item_rect.max }

    /// Size of the last item.
    pub fn get_item_rect_size(&self) -> Vec2f { self.current_window_ref().dc.last_item_rect.size() }

    /// Lets items submitted later overlap the last one.
    pub fn set_item_allow_overlap(&mut self) {
        let id = self.current_window_ref().dc.last_item_id;
        if self.hovered_id == id {
            self.hovered_id_allow_overlap = true;
        }
        if self.active_id == id {
            self.active_id_allow_overlap = true;
        }
    }

    /// Returns `true` if a box of `size` at the cursor would be visible.
    pub fn is_rect_visible(&self, size: Vec2f) -> bool {
        let w = self.current_window_ref();
        w.clip_rect.overlaps(&Rect::from_min_size(w.dc.cursor_pos, size))
    }

    /// Returns `true` if the screen-space rectangle is visible.
    pub fn is_rect_visible_abs(&self, min: Vec2f, max: Vec2f) -> bool { self.current_window_ref().clip_rect.overlaps(&Rect::new(min, max)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_size_advances_line_by_line() {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            ctx.set_next_window_pos(vec2(0.0, 0.0), Cond::ALWAYS, vec2(0.0, 0.0));
            ctx.window("L", WindowFlags::empty(), |ctx| {
                let start = ctx.get_cursor_screen_pos();
                ctx.dummy(vec2(30.0, 10.0));
                let next = ctx.get_cursor_screen_pos();
                assert_eq!(next.x, start.x);
                assert_eq!(next.y, start.y + 10.0 + ctx.style.item_spacing.y);

                ctx.dummy(vec2(30.0, 10.0));
                ctx.same_line();
                let after_same_line = ctx.get_cursor_screen_pos();
                assert_eq!(after_same_line.x, start.x + 30.0 + ctx.style.item_spacing.x);
            });
        });
    }

    #[test]
    fn same_line_keeps_the_tallest_height() {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            ctx.window("L", WindowFlags::empty(), |ctx| {
                let start = ctx.get_cursor_screen_pos();
                ctx.dummy(vec2(10.0, 40.0));
                ctx.same_line();
                ctx.dummy(vec2(10.0, 10.0));
                assert_eq!(ctx.get_cursor_screen_pos().y, start.y + 40.0 + ctx.style.item_spacing.y);
            });
        });
    }

    #[test]
    fn groups_are_single_items() {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            ctx.window("G", WindowFlags::empty(), |ctx| {
                let start = ctx.get_cursor_screen_pos();
                ctx.group(|ctx| {
                    ctx.dummy(vec2(20.0, 10.0));
                    ctx.dummy(vec2(60.0, 10.0));
                });
                let size = ctx.get_item_rect_size();
                assert_eq!(size.x, 60.0);
                assert_eq!(size.y, 10.0 + ctx.style.item_spacing.y + 10.0);
                assert_eq!(ctx.get_item_rect_min().x, start.x);
                ctx.same_line();
                assert_eq!(ctx.get_cursor_screen_pos().x, start.x + 60.0 + ctx.style.item_spacing.x);
            });
        });
    }

    #[test]
    #[should_panic(expected = "end_group() without begin_group()")]
    fn unmatched_end_group_panics() {
        let mut ctx = Context::new_headless();
        ctx.new_frame();
        ctx.end_group();
    }

    #[test]
    fn indent_moves_the_cursor() {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            ctx.window("I", WindowFlags::empty(), |ctx| {
                let x = ctx.get_cursor_pos().x;
                ctx.indent(0.0);
                assert_eq!(ctx.get_cursor_pos().x, x + ctx.style.indent_spacing);
                ctx.unindent(0.0);
                assert_eq!(ctx.get_cursor_pos().x, x);
            });
        });
    }

    #[test]
    fn item_widths_stack() {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            ctx.window("W", WindowFlags::empty(), |ctx| {
                ctx.push_item_width(100.0);
                assert_eq!(ctx.calc_item_width(), 100.0);
                ctx.set_next_item_width(42.0);
                assert_eq!(ctx.calc_item_width(), 42.0);
                ctx.pop_item_width();
                let avail = ctx.get_content_region_avail().x;
                ctx.push_item_width(-10.0);
                assert_eq!(ctx.calc_item_width(), (avail - 10.0).floor());
                ctx.pop_item_width();
            });
        });
    }

    #[test]
    fn item_flags_stack_restores() {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            ctx.window("F", WindowFlags::empty(), |ctx| {
                ctx.push_item_flag(ItemFlags::DISABLED, true);
                ctx.push_item_flag(ItemFlags::NO_TAB_STOP, true);
                assert!(ctx.current_window_ref().dc.item_flags.contains(ItemFlags::DISABLED | ItemFlags::NO_TAB_STOP));
                ctx.pop_item_flag();
                assert_eq!(ctx.current_window_ref().dc.item_flags, ItemFlags::DISABLED);
                ctx.pop_item_flag();
                assert!(ctx.current_window_ref().dc.item_flags.is_empty());
            });
        });
    }

    #[test]
    fn clipped_items_are_not_visible() {
        let mut ctx = Context::new_headless();
        ctx.frame(|ctx| {
            ctx.set_next_window_size(vec2(100.0, 100.0), Cond::ALWAYS);
            ctx.window("C", WindowFlags::empty(), |ctx| {
                ctx.dummy(vec2(10.0, 10.0));
                assert!(ctx.is_item_visible());
                ctx.set_cursor_pos_y(1000.0);
                let pos = ctx.get_cursor_screen_pos();
                assert!(!ctx.item_add(&Rect::from_min_size(pos, vec2(10.0, 10.0)), Id::NONE, None));
                assert!(!ctx.is_rect_visible(vec2(10.0, 10.0)));
            });
        });
    }

    #[test]
    fn hovered_rect_is_recorded() {
        let mut ctx = Context::new_headless();
        for _ in 0..3 {
            ctx.io.mouse_move(25.0, 45.0);
            ctx.frame(|ctx| {
                ctx.set_next_window_pos(vec2(0.0, 0.0), Cond::ALWAYS, vec2(0.0, 0.0));
                ctx.set_next_window_size(vec2(200.0, 200.0), Cond::ALWAYS);
                ctx.window("H", WindowFlags::NO_TITLE_BAR, |ctx| {
                    ctx.set_cursor_screen_pos(vec2(20.0, 40.0));
                    let bb = Rect::from_min_size(vec2(20.0, 40.0), vec2(20.0, 20.0));
                    ctx.item_size_rect(&bb, -1.0);
                    ctx.item_add(&bb, Id::NONE, None);
                });
            });
        }
        let w = ctx.find_window_by_name("H").unwrap();
        assert!(ctx.get_window(w).dc.last_item_status_flags.contains(ItemStatusFlags::HOVERED_RECT));
        assert_eq!(ctx.get_hovered_window(), Some(w));
    }
}
