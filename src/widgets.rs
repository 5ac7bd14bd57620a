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
use crate::font::find_rendered_text_end;
use crate::io::calc_typematic_repeat_amount;
use crate::nav::InputReadMode;
use crate::*;

impl Context {
    // low level rendering helpers, all drawing into the current window

    /// Draws `text` at `pos` with the text color; `hide_text_after_hash` drops a `##` suffix.
    pub fn render_text(&mut self, pos: Vec2f, text: &str, hide_text_after_hash: bool) {
        let text = if hide_text_after_hash { find_rendered_text_end(text) } else { text };
        if text.is_empty() {
            return;
        }
        let size = self.font.calc_text_size(text);
        let col = self.get_color(StyleColor::Text, 1.0);
        self.current_window_mut().draw_list.add_text(pos, col, text, size);
    }

    /// Draws `text` aligned inside `pos_min..pos_max`, clipped to `clip_rect` (or to the box).
    ///
    /// `align` is 0..1 per axis; the text only moves when it fits in the box.
    pub fn render_text_clipped(&mut self, pos_min: Vec2f, pos_max: Vec2f, text: &str, text_size_if_known: Option<Vec2f>, align: Vec2f, clip_rect: Option<&Rect>) {
        let text = find_rendered_text_end(text);
        if text.is_empty() {
            return;
        }
        let text_size = text_size_if_known.unwrap_or_else(|| self.font.calc_text_size(text));

        let clip_min = clip_rect.map_or(pos_min, |r| r.min);
        let clip_max = clip_rect.map_or(pos_max, |r| r.max);
        let need_clipping = match clip_rect {
            Some(_) => pos_min.x + text_size.x >= clip_max.x || pos_min.y + text_size.y >= clip_max.y || pos_min.x < clip_min.x || pos_min.y < clip_min.y,
            None => pos_min.x + text_size.x >= clip_max.x || pos_min.y + text_size.y >= clip_max.y,
        };

        let mut pos = pos_min;
        if align.x > 0.0 {
            pos.x = pos.x.max(pos.x + (pos_max.x - pos.x - text_size.x) * align.x);
        }
        if align.y > 0.0 {
            pos.y = pos.y.max(pos.y + (pos_max.y - pos.y - text_size.y) * align.y);
        }

        let col = self.get_color(StyleColor::Text, 1.0);
        let dl = &mut self.current_window_mut().draw_list;
        if need_clipping {
            dl.push_clip_rect(clip_min, clip_max, true);
            dl.add_text(pos, col, text, text_size);
            dl.pop_clip_rect();
        } else {
            dl.add_text(pos, col, text, text_size);
        }
    }

    /// Filled frame with the style border.
    pub fn render_frame(&mut self, p_min: Vec2f, p_max: Vec2f, fill_col: Color, border: bool, rounding: f32) {
        self.current_window_mut().draw_list.add_rect_filled(p_min, p_max, fill_col, rounding);
        if border {
            self.render_frame_border(p_min, p_max, rounding);
        }
    }

    /// Border of a frame, drawn when `style.frame_border_size` is positive.
    pub fn render_frame_border(&mut self, p_min: Vec2f, p_max: Vec2f, rounding: f32) {
        let border_size = self.style.frame_border_size;
        if border_size <= 0.0 {
            return;
        }
        let shadow = self.get_color(StyleColor::BorderShadow, 1.0);
        let border = self.get_color(StyleColor::Border, 1.0);
        let dl = &mut self.current_window_mut().draw_list;
        dl.add_rect(vec2(p_min.x + 1.0, p_min.y + 1.0), vec2(p_max.x + 1.0, p_max.y + 1.0), shadow, rounding, border_size);
        dl.add_rect(p_min, p_max, border, rounding, border_size);
    }

    /// Triangle pointing toward `dir`, sized from the font.
    pub fn render_arrow(&mut self, pos: Vec2f, col: Color, dir: Dir, scale: f32) {
        let h = self.font_size;
        let mut r = h * 0.40 * scale;
        let center = vec2(pos.x + h * 0.50, pos.y + h * 0.50 * scale);
        let (a, b, c) = match dir {
            Dir::Up | Dir::Down => {
                if dir == Dir::Up {
                    r = -r;
                }
                (vec2(0.0, 0.750 * r), vec2(-0.866 * r, -0.750 * r), vec2(0.866 * r, -0.750 * r))
            }
            Dir::Left | Dir::Right => {
                if dir == Dir::Left {
                    r = -r;
                }
                (vec2(0.750 * r, 0.0), vec2(-0.750 * r, 0.866 * r), vec2(-0.750 * r, -0.866 * r))
            }
        };
        self.current_window_mut().draw_list.add_triangle_filled(
            vec2(center.x + a.x, center.y + a.y),
            vec2(center.x + b.x, center.y + b.y),
            vec2(center.x + c.x, center.y + c.y),
            col,
        );
    }

    /// Check mark fitting a `sz` square at `pos`.
    pub fn render_check_mark(&mut self, pos: Vec2f, col: Color, sz: f32) {
        let thickness = (sz / 5.0).max(1.0);
        let sz = sz - thickness * 0.5;
        let pos = vec2(pos.x + thickness * 0.25, pos.y + thickness * 0.25);
        let third = sz / 3.0;
        let bx = pos.x + third;
        let by = pos.y + sz - third * 0.5;
        let dl = &mut self.current_window_mut().draw_list;
        dl.add_line(vec2(bx - third, by - third), vec2(bx, by), col, thickness);
        dl.add_line(vec2(bx, by), vec2(bx + third * 2.0, by - third * 2.0), col, thickness);
    }

    // behaviour

    /// Shared interaction logic of every clickable item: hovering, activation by mouse or
    /// navigation, holding and the press policy selected by `flags`.
    ///
    /// Returns `(pressed, hovered, held)`.
    pub fn button_behavior(&mut self, bb: &Rect, id: Id, flags: ButtonFlags) -> (bool, bool, bool) {
        let widx = self.current_window_idx();
        let mut flags = flags;

        if flags.contains(ButtonFlags::DISABLED) {
            if self.active_id == id {
                self.clear_active_id();
            }
            return (false, false, false);
        }
        if !flags.intersects(ButtonFlags::MOUSE_BUTTON_MASK) {
            flags |= ButtonFlags::MOUSE_BUTTON_LEFT;
        }
        if !flags.intersects(ButtonFlags::PRESSED_ON_MASK) {
            flags |= ButtonFlags::PRESSED_ON_DEFAULT;
        }

        let backup_hovered_window = self.hovered_window;
        let flatten_hovered_children = flags.contains(ButtonFlags::FLATTEN_CHILDREN) && self.hovered_root_window == Some(widx);
        if flatten_hovered_children {
            self.hovered_window = Some(widx);
        }

        let mut pressed = false;
        let mut hovered = self.item_hoverable(bb, id);

        // the drag source does not report itself as hovered
        if hovered && self.drag_drop_active && self.drag_drop_payload.source_id == id && !self.drag_drop_source_flags.contains(DragDropFlags::SOURCE_NO_DISABLE_HOVER) {
            hovered = false;
        }

        // hovering long enough while dragging a payload presses the button
        if self.drag_drop_active
            && flags.contains(ButtonFlags::PRESSED_ON_DRAG_DROP_HOLD)
            && !self.drag_drop_source_flags.contains(DragDropFlags::SOURCE_NO_HOLD_TO_OPEN_OTHERS)
            && self.is_item_hovered(HoveredFlags::ALLOW_WHEN_BLOCKED_BY_ACTIVE_ITEM)
        {
            hovered = true;
            self.set_hovered_id(id);
            let t = self.hovered_id_timer + 0.0001;
            if calc_typematic_repeat_amount(t - self.io.delta_time, t, 0.70, 0.0) > 0 {
                pressed = true;
                self.drag_drop_hold_just_pressed_id = id;
                self.focus_window(Some(widx));
            }
        }

        if flatten_hovered_children {
            self.hovered_window = backup_hovered_window;
        }

        // overlapping items only react when nothing else was hovered last frame
        if hovered && flags.contains(ButtonFlags::ALLOW_ITEM_OVERLAP) && self.hovered_id_previous_frame != id && self.hovered_id_previous_frame.is_some() {
            hovered = false;
        }

        if hovered {
            if !flags.contains(ButtonFlags::NO_KEY_MODIFIERS) || (!self.io.key_ctrl && !self.io.key_shift && !self.io.key_alt) {
                let polled = |events: &[bool; MouseButton::COUNT]| {
                    [(ButtonFlags::MOUSE_BUTTON_LEFT, MouseButton::Left), (ButtonFlags::MOUSE_BUTTON_RIGHT, MouseButton::Right), (ButtonFlags::MOUSE_BUTTON_MIDDLE, MouseButton::Middle)]
                        .into_iter()
                        .find(|(f, b)| flags.contains(*f) && events[b.index()])
                        .map(|(_, b)| b)
                };
                let mouse_button_clicked = polled(&self.io.mouse_clicked);
                let mouse_button_released = polled(&self.io.mouse_released);

                if let Some(btn) = mouse_button_clicked {
                    if self.active_id != id {
                        if flags.intersects(ButtonFlags::PRESSED_ON_CLICK_RELEASE | ButtonFlags::PRESSED_ON_CLICK_RELEASE_ANYWHERE) {
                            self.set_active_id(id, Some(widx));
                            self.active_id_mouse_button = Some(btn);
                            if !flags.contains(ButtonFlags::NO_NAV_FOCUS) {
                                self.set_focus_id(id, widx);
                            }
                            self.focus_window(Some(widx));
                        }
                        if flags.contains(ButtonFlags::PRESSED_ON_CLICK) || (flags.contains(ButtonFlags::PRESSED_ON_DOUBLE_CLICK) && self.io.mouse_double_clicked[btn.index()]) {
                            pressed = true;
                            if flags.contains(ButtonFlags::NO_HOLDING_ACTIVE_ID) {
                                self.clear_active_id();
                            } else {
                                self.set_active_id(id, Some(widx));
                            }
                            self.active_id_mouse_button = Some(btn);
                            self.focus_window(Some(widx));
                        }
                    }
                }
                if let Some(btn) = mouse_button_released {
                    if flags.contains(ButtonFlags::PRESSED_ON_RELEASE) {
                        // repeat mode wins over the release
                        let has_repeated_at_least_once = flags.contains(ButtonFlags::REPEAT) && self.io.mouse_down_duration_prev[btn.index()] >= self.io.key_repeat_delay;
                        if !has_repeated_at_least_once {
                            pressed = true;
                        }
                        self.clear_active_id();
                    }
                }

                if self.active_id == id && flags.contains(ButtonFlags::REPEAT) {
                    if let Some(btn) = self.active_id_mouse_button {
                        if self.io.mouse_down_duration[btn.index()] > 0.0 && self.is_mouse_clicked(btn, true) {
                            pressed = true;
                        }
                    }
                }
            }
            if pressed {
                self.nav_disable_highlight = true;
            }
        }

        // a navigated item reports as hovered without touching hovered_id
        if self.nav_id == id
            && !self.nav_disable_highlight
            && self.nav_disable_mouse_hover
            && (self.active_id.is_none() || self.active_id == id || self.active_id == self.windows[widx.0].move_id)
            && !flags.contains(ButtonFlags::NO_HOVERED_ON_FOCUS)
        {
            hovered = true;
        }
        if self.nav_activate_down_id == id {
            let nav_activated_by_code = self.nav_activate_id == id;
            let mode = if flags.contains(ButtonFlags::REPEAT) { InputReadMode::Repeat } else { InputReadMode::Pressed };
            let nav_activated_by_inputs = self.is_nav_input_test(NavInput::Activate, mode);
            if nav_activated_by_code || nav_activated_by_inputs {
                pressed = true;
            }
            if nav_activated_by_code || nav_activated_by_inputs || self.active_id == id {
                // held like a mouse button until the activation input is released
                self.nav_activate_id = id;
                self.set_active_id(id, Some(widx));
                if (nav_activated_by_code || nav_activated_by_inputs) && !flags.contains(ButtonFlags::NO_NAV_FOCUS) {
                    self.set_focus_id(id, widx);
                }
            }
        }

        let mut held = false;
        if self.active_id == id {
            match self.active_id_source {
                InputSource::Mouse => {
                    if self.active_id_is_just_activated {
                        self.active_id_click_offset = vec2(self.io.mouse_pos.x - bb.min.x, self.io.mouse_pos.y - bb.min.y);
                    }
                    let btn = self.active_id_mouse_button.unwrap_or(MouseButton::Left);
                    if self.io.mouse_buttons[btn.index()] {
                        held = true;
                    } else {
                        let release_in = hovered && flags.contains(ButtonFlags::PRESSED_ON_CLICK_RELEASE);
                        let release_anywhere = flags.contains(ButtonFlags::PRESSED_ON_CLICK_RELEASE_ANYWHERE);
                        if (release_in || release_anywhere) && !self.drag_drop_active {
                            let is_double_click_release = flags.contains(ButtonFlags::PRESSED_ON_DOUBLE_CLICK) && self.io.mouse_down_was_double_click[btn.index()];
                            let is_repeating_already = flags.contains(ButtonFlags::REPEAT) && self.io.mouse_down_duration_prev[btn.index()] >= self.io.key_repeat_delay;
                            if !is_double_click_release && !is_repeating_already {
                                pressed = true;
                            }
                        }
                        self.clear_active_id();
                    }
                    if !flags.contains(ButtonFlags::NO_NAV_FOCUS) {
                        self.nav_disable_highlight = true;
                    }
                }
                InputSource::Nav | InputSource::NavKeyboard | InputSource::NavGamepad => {
                    if self.nav_activate_down_id != id {
                        self.clear_active_id();
                    }
                }
                InputSource::None => {}
            }
            if pressed {
                self.active_id_has_been_pressed_before = true;
            }
        }

        (pressed, hovered, held)
    }

    /// Registers `id` for TAB cycling and takes the focus when a TAB request lands on it.
    fn register_tab_stop(&mut self, widx: WindowIdx, id: Id) {
        if self.focusable_item_register(widx, id) {
            self.set_focus_id(id, widx);
            self.nav_disable_highlight = false;
        }
    }

    // widgets

    /// Text without formatting, on its own line.
    pub fn text(&mut self, text: &str) {
        let widx = self.current_window_idx();
        if self.windows[widx.0].skip_items {
            return;
        }
        let (cursor, base_offset) = {
            let dc = &self.windows[widx.0].dc;
            (dc.cursor_pos, dc.curr_line_text_base_offset)
        };
        let text_pos = vec2(cursor.x, cursor.y + base_offset);
        let text_size = self.calc_text_size(text, false);
        let bb = Rect::from_min_size(text_pos, text_size);
        self.item_size(text_size, 0.0);
        if !self.item_add(&bb, Id::NONE, None) {
            return;
        }
        let col = self.get_color(StyleColor::Text, 1.0);
        self.current_window_mut().draw_list.add_text(bb.min, col, text, text_size);
    }

    /// [`Context::text`] in `col`.
    pub fn text_colored(&mut self, col: Color, text: &str) { self.with_style_color(StyleColor::Text, col, |ctx| ctx.text(text)) }

    /// [`Context::text`] in the disabled color.
    pub fn text_disabled(&mut self, text: &str) {
        let col = self.style.color(StyleColor::TextDisabled);
        self.text_colored(col, text)
    }

    /// `value` followed by `label`, laid out like a framed widget.
    pub fn label_text(&mut self, label: &str, value: &str) {
        let widx = self.current_window_idx();
        if self.windows[widx.0].skip_items {
            return;
        }
        let style = self.style;
        let w = self.calc_item_width();
        let value_size = self.calc_text_size(value, false);
        let label_size = self.calc_text_size(label, true);
        let pos = self.windows[widx.0].dc.cursor_pos;
        let value_bb = Rect::from_min_size(pos, vec2(w, value_size.y + style.frame_padding.y * 2.0));
        let label_w = if label_size.x > 0.0 { style.item_inner_spacing.x + label_size.x } else { 0.0 };
        let total_bb = Rect::from_min_size(pos, vec2(w + label_w, value_size.y.max(label_size.y) + style.frame_padding.y * 2.0));
        self.item_size_rect(&total_bb, style.frame_padding.y);
        if !self.item_add(&total_bb, Id::NONE, None) {
            return;
        }
        let text_min = vec2(value_bb.min.x + style.frame_padding.x, value_bb.min.y + style.frame_padding.y);
        self.render_text_clipped(text_min, value_bb.max, value, Some(value_size), vec2(0.0, 0.5), None);
        if label_size.x > 0.0 {
            self.render_text(vec2(value_bb.max.x + style.item_inner_spacing.x, value_bb.min.y + style.frame_padding.y), label, true);
        }
    }

    /// Button with explicit `size` (zero uses the label size) and behaviour flags.
    pub fn button_ex(&mut self, label: &str, size_arg: Vec2f, flags: ButtonFlags) -> bool {
        let widx = self.current_window_idx();
        if self.windows[widx.0].skip_items {
            return false;
        }

        let style = self.style;
        let id = self.windows[widx.0].get_id(label);
        let label_size = self.calc_text_size(label, true);

        let mut pos = self.windows[widx.0].dc.cursor_pos;
        let base_offset = self.windows[widx.0].dc.curr_line_text_base_offset;
        if flags.contains(ButtonFlags::ALIGN_TEXT_BASE_LINE) && style.frame_padding.y < base_offset {
            pos.y += base_offset - style.frame_padding.y;
        }
        let size = self.calc_item_size(size_arg, label_size.x + style.frame_padding.x * 2.0, label_size.y + style.frame_padding.y * 2.0);
        let bb = Rect::from_min_size(pos, size);
        self.item_size(size, style.frame_padding.y);
        if !self.item_add(&bb, id, None) {
            return false;
        }
        self.register_tab_stop(widx, id);

        let mut flags = flags;
        if self.windows[widx.0].dc.item_flags.contains(ItemFlags::BUTTON_REPEAT) {
            flags |= ButtonFlags::REPEAT;
        }
        let (pressed, hovered, held) = self.button_behavior(&bb, id, flags);

        let col = self.get_color(
            if held && hovered {
                StyleColor::ButtonActive
            } else if hovered {
                StyleColor::ButtonHovered
            } else {
                StyleColor::Button
            },
            1.0,
        );
        self.render_nav_highlight(&bb, id, false);
        self.render_frame(bb.min, bb.max, col, true, style.frame_rounding);
        let text_min = vec2(bb.min.x + style.frame_padding.x, bb.min.y + style.frame_padding.y);
        let text_max = vec2(bb.max.x - style.frame_padding.x, bb.max.y - style.frame_padding.y);
        self.render_text_clipped(text_min, text_max, label, Some(label_size), style.button_text_align, Some(&bb));
        pressed
    }

    /// Button sized to its label. Returns `true` when clicked.
    pub fn button(&mut self, label: &str) -> bool { self.button_ex(label, vec2(0.0, 0.0), ButtonFlags::empty()) }

    /// Button without vertical frame padding, to embed within text.
    pub fn small_button(&mut self, label: &str) -> bool {
        self.with_style_var(StyleVar::FramePadding, StyleVarValue::Vec2(vec2(self.style.frame_padding.x, 0.0)), |ctx| {
            ctx.button_ex(label, vec2(0.0, 0.0), ButtonFlags::ALIGN_TEXT_BASE_LINE)
        })
    }

    /// Clickable area without any visual, for custom widgets.
    ///
    /// # Panics
    /// Panics when `size` is zero on an axis.
    pub fn invisible_button(&mut self, str_id: &str, size: Vec2f, flags: ButtonFlags) -> bool {
        let widx = self.current_window_idx();
        if self.windows[widx.0].skip_items {
            return false;
        }
        assert!(size.x != 0.0 && size.y != 0.0, "invisible_button() needs a non-zero size");

        let id = self.windows[widx.0].get_id(str_id);
        let size = self.calc_item_size(size, 0.0, 0.0);
        let bb = Rect::from_min_size(self.windows[widx.0].dc.cursor_pos, size);
        self.item_size(size, -1.0);
        if !self.item_add(&bb, id, None) {
            return false;
        }
        let (pressed, _, _) = self.button_behavior(&bb, id, flags);
        pressed
    }

    /// Square button showing an arrow.
    pub fn arrow_button(&mut self, str_id: &str, dir: Dir) -> bool {
        let sz = self.get_frame_height();
        self.arrow_button_ex(str_id, dir, vec2(sz, sz), ButtonFlags::empty())
    }

    /// [`Context::arrow_button`] with an explicit size and flags.
    pub fn arrow_button_ex(&mut self, str_id: &str, dir: Dir, size: Vec2f, flags: ButtonFlags) -> bool {
        let widx = self.current_window_idx();
        if self.windows[widx.0].skip_items {
            return false;
        }

        let id = self.windows[widx.0].get_id(str_id);
        let bb = Rect::from_min_size(self.windows[widx.0].dc.cursor_pos, size);
        let default_size = self.get_frame_height();
        self.item_size(size, if size.y >= default_size { self.style.frame_padding.y } else { -1.0 });
        if !self.item_add(&bb, id, None) {
            return false;
        }

        let mut flags = flags;
        if self.windows[widx.0].dc.item_flags.contains(ItemFlags::BUTTON_REPEAT) {
            flags |= ButtonFlags::REPEAT;
        }
        let (pressed, hovered, held) = self.button_behavior(&bb, id, flags);

        let bg_col = self.get_color(
            if held && hovered {
                StyleColor::ButtonActive
            } else if hovered {
                StyleColor::ButtonHovered
            } else {
                StyleColor::Button
            },
            1.0,
        );
        let text_col = self.get_color(StyleColor::Text, 1.0);
        self.render_nav_highlight(&bb, id, false);
        self.render_frame(bb.min, bb.max, bg_col, true, self.style.frame_rounding);
        let arrow_pos = vec2(bb.min.x + ((size.x - self.font_size) * 0.5).max(0.0), bb.min.y + ((size.y - self.font_size) * 0.5).max(0.0));
        self.render_arrow(arrow_pos, text_col, dir, 1.0);
        pressed
    }

    /// Check box bound to `v`. Returns `true` when toggled.
    pub fn checkbox(&mut self, label: &str, v: &mut bool) -> bool {
        let widx = self.current_window_idx();
        if self.windows[widx.0].skip_items {
            return false;
        }

        let style = self.style;
        let id = self.windows[widx.0].get_id(label);
        let label_size = self.calc_text_size(label, true);
        let square_sz = self.get_frame_height();
        let pos = self.windows[widx.0].dc.cursor_pos;
        let label_w = if label_size.x > 0.0 { style.item_inner_spacing.x + label_size.x } else { 0.0 };
        let total_bb = Rect::from_min_size(pos, vec2(square_sz + label_w, label_size.y + style.frame_padding.y * 2.0));
        self.item_size_rect(&total_bb, style.frame_padding.y);
        if !self.item_add(&total_bb, id, None) {
            return false;
        }
        self.register_tab_stop(widx, id);

        let (pressed, hovered, held) = self.button_behavior(&total_bb, id, ButtonFlags::empty());
        if pressed {
            *v = !*v;
            self.mark_item_edited(id);
        }

        let check_bb = Rect::from_min_size(pos, vec2(square_sz, square_sz));
        let frame_col = self.get_color(
            if held && hovered {
                StyleColor::FrameBgActive
            } else if hovered {
                StyleColor::FrameBgHovered
            } else {
                StyleColor::FrameBg
            },
            1.0,
        );
        self.render_nav_highlight(&total_bb, id, false);
        self.render_frame(check_bb.min, check_bb.max, frame_col, true, style.frame_rounding);
        if *v {
            let check_col = self.get_color(StyleColor::CheckMark, 1.0);
            let pad = (square_sz / 6.0).floor().max(1.0);
            self.render_check_mark(vec2(check_bb.min.x + pad, check_bb.min.y + pad), check_col, square_sz - pad * 2.0);
        }
        if label_size.x > 0.0 {
            self.render_text(vec2(check_bb.max.x + style.item_inner_spacing.x, check_bb.min.y + style.frame_padding.y), label, true);
        }
        pressed
    }

    /// Selectable row. `size` zero on an axis uses the label size, and the row spans the
    /// available width. Returns `true` when clicked; inside a popup the popup closes.
    pub fn selectable(&mut self, label: &str, selected: bool, flags: SelectableFlags, size_arg: Vec2f) -> bool {
        let widx = self.current_window_idx();
        if self.windows[widx.0].skip_items {
            return false;
        }

        let style = self.style;
        let id = self.windows[widx.0].get_id(label);
        let label_size = self.calc_text_size(label, true);
        let mut size = vec2(if size_arg.x != 0.0 { size_arg.x } else { label_size.x }, if size_arg.y != 0.0 { size_arg.y } else { label_size.y });
        let mut pos = self.windows[widx.0].dc.cursor_pos;
        pos.y += self.windows[widx.0].dc.curr_line_text_base_offset;
        self.item_size(size, 0.0);

        // the hit box spans the work rect even though only the label is laid out
        let min_x = pos.x;
        let max_x = self.windows[widx.0].work_rect.max.x;
        if size_arg.x == 0.0 || flags.contains(SelectableFlags::SPAN_AVAIL_WIDTH) {
            size.x = label_size.x.max(max_x - min_x);
        }
        let text_min = pos;
        let text_max = vec2(min_x + size.x, pos.y + size.y);

        // rows are packed without gaps: extend over half the item spacing
        let mut bb = Rect::from_coords(min_x, pos.y, text_max.x, text_max.y);
        if !flags.contains(SelectableFlags::NO_PAD_WITH_HALF_SPACING) {
            let spacing_l = (style.item_spacing.x * 0.5).floor();
            let spacing_u = (style.item_spacing.y * 0.5).floor();
            bb.min.x -= spacing_l;
            bb.min.y -= spacing_u;
            bb.max.x += style.item_spacing.x - spacing_l;
            bb.max.y += style.item_spacing.y - spacing_u;
        }

        let item_add = if flags.contains(SelectableFlags::DISABLED) {
            let backup_item_flags = self.windows[widx.0].dc.item_flags;
            self.windows[widx.0].dc.item_flags |= ItemFlags::DISABLED | ItemFlags::NO_NAV_DEFAULT_FOCUS;
            let added = self.item_add(&bb, id, None);
            self.windows[widx.0].dc.item_flags = backup_item_flags;
            added
        } else {
            self.item_add(&bb, id, None)
        };
        if !item_add {
            return false;
        }

        let mut button_flags = ButtonFlags::empty();
        if flags.contains(SelectableFlags::NO_HOLDING_ACTIVE_ID) {
            button_flags |= ButtonFlags::NO_HOLDING_ACTIVE_ID;
        }
        if flags.contains(SelectableFlags::SELECT_ON_CLICK) {
            button_flags |= ButtonFlags::PRESSED_ON_CLICK;
        }
        if flags.contains(SelectableFlags::SELECT_ON_RELEASE) {
            button_flags |= ButtonFlags::PRESSED_ON_RELEASE;
        }
        if flags.contains(SelectableFlags::DISABLED) {
            button_flags |= ButtonFlags::DISABLED;
        }
        if flags.contains(SelectableFlags::ALLOW_DOUBLE_CLICK) {
            button_flags |= ButtonFlags::PRESSED_ON_CLICK_RELEASE | ButtonFlags::PRESSED_ON_DOUBLE_CLICK;
        }
        if flags.contains(SelectableFlags::ALLOW_ITEM_OVERLAP) {
            button_flags |= ButtonFlags::ALLOW_ITEM_OVERLAP;
        }
        let selected = selected && !flags.contains(SelectableFlags::DISABLED);

        let (pressed, mut hovered, held) = self.button_behavior(&bb, id, button_flags);

        // clicking or hovering moves the nav focus so keyboard navigation resumes from here
        if pressed || (hovered && flags.contains(SelectableFlags::SET_NAV_ID_ON_HOVER)) {
            let dc = &self.windows[widx.0].dc;
            if !self.nav_disable_mouse_hover && self.nav_window == Some(widx) && self.nav_layer == dc.nav_layer_current {
                let (layer, scope) = (dc.nav_layer_current, dc.nav_focus_scope_id_current);
                self.nav_disable_highlight = true;
                self.set_nav_id(id, layer, scope);
            }
        }
        if pressed {
            self.mark_item_edited(id);
        }
        if flags.contains(SelectableFlags::ALLOW_ITEM_OVERLAP) {
            self.set_item_allow_overlap();
        }

        if held && flags.contains(SelectableFlags::DRAW_HOVERED_WHEN_HELD) {
            hovered = true;
        }
        if hovered || selected {
            let col = self.get_color(
                if held && hovered {
                    StyleColor::HeaderActive
                } else if hovered {
                    StyleColor::HeaderHovered
                } else {
                    StyleColor::Header
                },
                1.0,
            );
            self.render_frame(bb.min, bb.max, col, false, 0.0);
            self.render_nav_highlight(&bb, id, true);
        }

        if flags.contains(SelectableFlags::DISABLED) {
            let disabled = self.style.color(StyleColor::TextDisabled);
            self.with_style_color(StyleColor::Text, disabled, |ctx| {
                ctx.render_text_clipped(text_min, text_max, label, Some(label_size), style.selectable_text_align, Some(&bb))
            });
        } else {
            self.render_text_clipped(text_min, text_max, label, Some(label_size), style.selectable_text_align, Some(&bb));
        }

        if pressed
            && self.windows[widx.0].flags.is_popup()
            && !flags.contains(SelectableFlags::DONT_CLOSE_POPUPS)
            && !self.windows[widx.0].dc.item_flags.contains(ItemFlags::SELECTABLE_DONT_CLOSE_POPUP)
        {
            self.close_current_popup();
        }
        pressed
    }

    /// [`Context::selectable`] toggling `selected` when clicked.
    pub fn selectable_toggle(&mut self, label: &str, selected: &mut bool, flags: SelectableFlags, size: Vec2f) -> bool {
        if self.selectable(label, *selected, flags, size) {
            *selected = !*selected;
            return true;
        }
        false
    }

    // title bar buttons

    /// Collapse arrow of a title bar. Dragging it moves the window.
    pub(crate) fn collapse_button(&mut self, id: Id, pos: Vec2f) -> bool {
        let widx = self.current_window_idx();
        let fp = self.style.frame_padding;
        let bb = Rect::from_min_size(pos, vec2(self.font_size + fp.x * 2.0, self.font_size + fp.y * 2.0));
        self.item_add(&bb, id, None);
        let (pressed, hovered, held) = self.button_behavior(&bb, id, ButtonFlags::empty());

        let bg_col = self.get_color(
            if held && hovered {
                StyleColor::ButtonActive
            } else if hovered {
                StyleColor::ButtonHovered
            } else {
                StyleColor::Button
            },
            1.0,
        );
        let text_col = self.get_color(StyleColor::Text, 1.0);
        if hovered || held {
            let center = bb.center();
            let r = self.font_size * 0.5 + 1.0;
            self.current_window_mut().draw_list.add_rect_filled(vec2(center.x - r, center.y - r), vec2(center.x + r, center.y + r), bg_col, r);
        }
        let dir = if self.windows[widx.0].collapsed { Dir::Right } else { Dir::Down };
        self.render_arrow(vec2(bb.min.x + fp.x, bb.min.y + fp.y), text_col, dir, 1.0);

        // past the drag threshold the button hands over to a window move
        if self.is_item_active() && self.is_mouse_dragging(MouseButton::Left, -1.0) {
            self.start_mouse_moving_window(widx);
        }
        pressed
    }

    /// Close cross of a title bar.
    pub(crate) fn close_button(&mut self, id: Id, pos: Vec2f) -> bool {
        let widx = self.current_window_idx();
        let fp = self.style.frame_padding;
        let bb = Rect::from_min_size(pos, vec2(self.font_size + fp.x * 2.0, self.font_size + fp.y * 2.0));

        // shrink the hit box when the button covers most of a tiny window, so it can still be moved
        let mut bb_interact = bb;
        let area_to_visible_ratio = self.windows[widx.0].outer_rect_clipped.area() / bb.area();
        if area_to_visible_ratio < 1.5 {
            let s = bb_interact.size();
            bb_interact.expand_xy(vec2((s.x * -0.25).floor(), (s.y * -0.25).floor()));
        }

        // clipped close buttons still react, keeping Alt, Right, Activate usable
        let is_clipped = !self.item_add(&bb_interact, id, None);
        let (pressed, hovered, held) = self.button_behavior(&bb_interact, id, ButtonFlags::empty());
        if is_clipped {
            return pressed;
        }

        let col = self.get_color(if held { StyleColor::ButtonActive } else { StyleColor::ButtonHovered }, 1.0);
        let center = bb.center();
        if hovered {
            let r = (self.font_size * 0.5 + 1.0).max(2.0);
            self.current_window_mut().draw_list.add_rect_filled(vec2(center.x - r, center.y - r), vec2(center.x + r, center.y + r), col, r);
        }
        let cross_extent = self.font_size * 0.5 * 0.7071 - 1.0;
        let cross_col = self.get_color(StyleColor::Text, 1.0);
        let c = vec2(center.x - 0.5, center.y - 0.5);
        let dl = &mut self.current_window_mut().draw_list;
        dl.add_line(vec2(c.x + cross_extent, c.y + cross_extent), vec2(c.x - cross_extent, c.y - cross_extent), cross_col, 1.0);
        dl.add_line(vec2(c.x + cross_extent, c.y - cross_extent), vec2(c.x - cross_extent, c.y + cross_extent), cross_col, 1.0);
        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui<F: FnOnce(&mut Context)>(ctx: &mut Context, f: F) {
        ctx.frame(|ctx| {
            ctx.set_next_window_pos(vec2(10.0, 10.0), Cond::ALWAYS, vec2(0.0, 0.0));
            ctx.set_next_window_size(vec2(300.0, 200.0), Cond::ALWAYS);
            ctx.window("Widgets", WindowFlags::empty(), f);
        });
    }

    fn last_item_center(ctx: &Context) -> Vec2f { ctx.current_window_ref().dc.last_item_rect.center() }

    #[test]
    fn click_and_release_presses_a_button() {
        let mut ctx = Context::new_headless();
        let mut center = vec2(0.0, 0.0);
        ui(&mut ctx, |ctx| {
            ctx.button("Ok");
            center = last_item_center(ctx);
        });
        ctx.io.mouse_move(center.x, center.y);
        ui(&mut ctx, |ctx| assert!(!ctx.button("Ok")));

        ctx.io.mouse_down(MouseButton::Left);
        ui(&mut ctx, |ctx| {
            assert!(!ctx.button("Ok"));
            assert!(ctx.is_item_active());
        });

        ctx.io.mouse_up(MouseButton::Left);
        let mut pressed = false;
        ui(&mut ctx, |ctx| pressed = ctx.button("Ok"));
        assert!(pressed);
        assert!(ctx.get_active_id().is_none());
    }

    #[test]
    fn releasing_outside_does_not_press() {
        let mut ctx = Context::new_headless();
        let mut center = vec2(0.0, 0.0);
        ui(&mut ctx, |ctx| {
            ctx.button("Ok");
            center = last_item_center(ctx);
        });
        ctx.io.mouse_move(center.x, center.y);
        ui(&mut ctx, |ctx| {
            ctx.button("Ok");
        });
        ctx.io.mouse_down(MouseButton::Left);
        ui(&mut ctx, |ctx| {
            ctx.button("Ok");
        });
        ctx.io.mouse_move(center.x, 150.0);
        ui(&mut ctx, |ctx| {
            ctx.button("Ok");
        });
        ctx.io.mouse_up(MouseButton::Left);
        let mut pressed = true;
        ui(&mut ctx, |ctx| pressed = ctx.button("Ok"));
        assert!(!pressed);
    }

    #[test]
    fn checkbox_toggles_on_click() {
        let mut ctx = Context::new_headless();
        let mut value = false;
        let mut center = vec2(0.0, 0.0);
        ui(&mut ctx, |ctx| {
            ctx.checkbox("Enabled", &mut value);
            center = last_item_center(ctx);
        });
        ctx.io.mouse_move(center.x, center.y);
        ui(&mut ctx, |ctx| {
            ctx.checkbox("Enabled", &mut value);
        });
        ctx.io.mouse_down(MouseButton::Left);
        ui(&mut ctx, |ctx| {
            ctx.checkbox("Enabled", &mut value);
        });
        ctx.io.mouse_up(MouseButton::Left);
        let mut toggled = false;
        ui(&mut ctx, |ctx| {
            toggled = ctx.checkbox("Enabled", &mut value);
            assert!(ctx.is_item_edited());
        });
        assert!(toggled);
        assert!(value);
    }

    #[test]
    fn disabled_behavior_never_reacts() {
        let mut ctx = Context::new_headless();
        ui(&mut ctx, |ctx| {
            let bb = Rect::from_coords(20.0, 40.0, 80.0, 60.0);
            let id = ctx.get_id("disabled");
            assert_eq!(ctx.button_behavior(&bb, id, ButtonFlags::DISABLED), (false, false, false));
        });
    }

    #[test]
    fn items_stack_vertically() {
        let mut ctx = Context::new_headless();
        ui(&mut ctx, |ctx| {
            let y0 = ctx.get_cursor_screen_pos().y;
            ctx.text("first");
            let y1 = ctx.get_cursor_screen_pos().y;
            assert_eq!(y1, (y0 + ctx.get_text_line_height_with_spacing()).floor());
            ctx.button("second");
            let y2 = ctx.get_cursor_screen_pos().y;
            assert_eq!(y2, (y1 + ctx.get_frame_height_with_spacing()).floor());
        });
    }

    #[test]
    fn selectable_spans_the_work_rect() {
        let mut ctx = Context::new_headless();
        ui(&mut ctx, |ctx| {
            ctx.selectable("row", false, SelectableFlags::empty(), vec2(0.0, 0.0));
            let r = ctx.current_window_ref().dc.last_item_rect;
            let work = ctx.current_window_ref().work_rect;
            assert!(r.max.x >= work.max.x);
        });
    }

    #[test]
    fn selectable_in_popup_closes_it() {
        let mut ctx = Context::new_headless();
        let mut center = vec2(0.0, 0.0);
        let frame = |ctx: &mut Context, center: &mut Vec2f, open: bool| {
            ui(ctx, |ctx| {
                if open {
                    ctx.open_popup("list", PopupFlags::empty());
                }
                ctx.popup("list", WindowFlags::empty(), |ctx| {
                    ctx.selectable("pick", false, SelectableFlags::empty(), vec2(0.0, 0.0));
                    *center = last_item_center(ctx);
                });
            });
        };
        frame(&mut ctx, &mut center, true);
        frame(&mut ctx, &mut center, false);
        frame(&mut ctx, &mut center, false);
        assert_eq!(ctx.open_popup_stack.len(), 1);

        ctx.io.mouse_move(center.x, center.y);
        frame(&mut ctx, &mut center, false);
        ctx.io.mouse_down(MouseButton::Left);
        frame(&mut ctx, &mut center, false);
        ctx.io.mouse_up(MouseButton::Left);
        frame(&mut ctx, &mut center, false);
        assert!(ctx.open_popup_stack.is_empty());
    }

    #[test]
    fn clipped_text_stays_inside_the_box() {
        let mut ctx = Context::new_headless();
        ui(&mut ctx, |ctx| {
            let before = ctx.current_window_ref().draw_list.commands().len();
            ctx.render_text_clipped(vec2(20.0, 40.0), vec2(30.0, 60.0), "a long label##id", None, vec2(0.0, 0.0), None);
            let cmds = ctx.current_window_ref().draw_list.commands();
            assert_eq!(cmds.len(), before + 1);
            assert!(cmds[before].clip_rect.max.x <= 30.0);
        });
    }
}
