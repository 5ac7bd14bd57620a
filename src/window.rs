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
use crate::hash::{hash_i32, hash_usize};
use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Index of a window inside the context's window arena. Stable for the lifetime of the context.
pub struct WindowIdx(pub(crate) usize);

impl WindowIdx {
    /// Raw arena index.
    pub fn index(self) -> usize { self.0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub(crate) struct NextWindowDataFlags : u32 {
        const HAS_POS = 1 << 0;
        const HAS_SIZE = 1 << 1;
        const HAS_CONTENT_SIZE = 1 << 2;
        const HAS_COLLAPSED = 1 << 3;
        const HAS_SIZE_CONSTRAINT = 1 << 4;
        const HAS_FOCUS = 1 << 5;
        const HAS_BG_ALPHA = 1 << 6;
        const HAS_SCROLL = 1 << 7;
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub(crate) struct NextItemDataFlags : u32 {
        const HAS_WIDTH = 1 << 0;
    }
}

/// Data handed to a size constraint callback.
pub struct SizeCallbackData {
    /// Current window position.
    pub pos: Vec2f,
    /// Current window size.
    pub current_size: Vec2f,
    /// Size about to be applied; the callback may change it.
    pub desired_size: Vec2f,
}

/// Size constraint callback installed with `set_next_window_size_constraints`.
pub type SizeCallback = Box<dyn FnMut(&mut SizeCallbackData)>;

/// Values recorded by the `set_next_window_*` calls, consumed by the next `begin`.
pub(crate) struct NextWindowData {
    pub flags: NextWindowDataFlags,
    pub pos_cond: Cond,
    pub size_cond: Cond,
    pub collapsed_cond: Cond,
    pub pos_val: Vec2f,
    pub pos_pivot_val: Vec2f,
    pub size_val: Vec2f,
    pub content_size_val: Vec2f,
    pub scroll_val: Vec2f,
    pub collapsed_val: bool,
    pub size_constraint_rect: Rect,
    pub size_callback: Option<SizeCallback>,
    pub bg_alpha_val: f32,
    pub menu_bar_offset_min_val: Vec2f,
}

impl Default for NextWindowData {
    fn default() -> Self {
        Self {
            flags: NextWindowDataFlags::empty(),
            pos_cond: Cond::NONE,
            size_cond: Cond::NONE,
            collapsed_cond: Cond::NONE,
            pos_val: vec2(0.0, 0.0),
            pos_pivot_val: vec2(0.0, 0.0),
            size_val: vec2(0.0, 0.0),
            content_size_val: vec2(0.0, 0.0),
            scroll_val: vec2(0.0, 0.0),
            collapsed_val: false,
            size_constraint_rect: Rect::default(),
            size_callback: None,
            bg_alpha_val: f32::MAX,
            menu_bar_offset_min_val: vec2(0.0, 0.0),
        }
    }
}

impl NextWindowData {
    pub(crate) fn clear_flags(&mut self) { self.flags = NextWindowDataFlags::empty(); }
}

#[derive(Clone, Debug)]
pub(crate) struct NextItemData {
    pub flags: NextItemDataFlags,
    pub width: f32,
}

impl Default for NextItemData {
    fn default() -> Self {
        Self {
            flags: NextItemDataFlags::empty(),
            width: 0.0,
        }
    }
}

#[derive(Copy, Clone, Debug)]
/// Layout state saved by `begin_group` and restored by `end_group`.
pub(crate) struct GroupData {
    pub window_id: Id,
    pub backup_cursor_pos: Vec2f,
    pub backup_cursor_max_pos: Vec2f,
    pub backup_indent: f32,
    pub backup_group_offset: f32,
    pub backup_curr_line_size: Vec2f,
    pub backup_curr_line_text_base_offset: f32,
    pub backup_active_id_is_alive: Id,
    pub backup_active_id_previous_frame_is_alive: bool,
    pub emit_item: bool,
}

#[derive(Copy, Clone, Debug)]
/// One entry of the open popup stack.
pub(crate) struct PopupData {
    pub popup_id: Id,
    pub window: Option<WindowIdx>,
    pub source_window: Option<WindowIdx>,
    pub open_frame_count: i32,
    pub open_parent_id: Id,
    pub open_popup_pos: Vec2f,
    pub open_mouse_pos: Vec2f,
}

#[derive(Copy, Clone, Debug, Default)]
/// Column layout shared by the items of a menu: label, shortcut and check mark/arrow.
///
/// Widths declared during a frame are applied on the next one, so every item of a menu lines up
/// with the widest one.
pub(crate) struct MenuColumns {
    pub spacing: f32,
    pub width: f32,
    pub next_width: f32,
    pub pos: [f32; 3],
    pub next_widths: [f32; 3],
}

impl MenuColumns {
    pub fn update(&mut self, spacing: f32, clear: bool) {
        self.width = 0.0;
        self.next_width = 0.0;
        self.spacing = spacing;
        if clear {
            self.next_widths = [0.0; 3];
        }
        for i in 0..3 {
            if i > 0 && self.next_widths[i] > 0.0 {
                self.width += self.spacing;
            }
            self.pos[i] = self.width.floor();
            self.width += self.next_widths[i];
            self.next_widths[i] = 0.0;
        }
    }

    /// Declares the widths of one item and returns the width the item should span.
    pub fn decl_columns(&mut self, w0: f32, w1: f32, w2: f32) -> f32 {
        self.next_width = 0.0;
        for (i, w) in [w0, w1, w2].into_iter().enumerate() {
            self.next_widths[i] = self.next_widths[i].max(w);
            self.next_width += self.next_widths[i] + if i > 0 && self.next_widths[i] > 0.0 { self.spacing } else { 0.0 };
        }
        self.width.max(self.next_width)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Sizes of the context stacks, recorded at `begin` and checked at `end`.
pub(crate) struct StackSizes {
    pub id_stack: usize,
    pub color_stack: usize,
    pub style_var_stack: usize,
    pub focus_scope_stack: usize,
    pub group_stack: usize,
    pub item_flags_stack: usize,
    pub begin_popup_stack: usize,
}

#[derive(Clone, Debug)]
/// Per-frame layout state of a window: the cursor and everything items need to lay themselves out.
pub(crate) struct WindowTempData {
    pub cursor_pos: Vec2f,
    pub cursor_pos_prev_line: Vec2f,
    pub cursor_start_pos: Vec2f,
    pub cursor_max_pos: Vec2f,
    pub ideal_max_pos: Vec2f,
    pub curr_line_size: Vec2f,
    pub prev_line_size: Vec2f,
    pub curr_line_text_base_offset: f32,
    pub prev_line_text_base_offset: f32,
    pub indent: f32,
    pub columns_offset: f32,
    pub group_offset: f32,

    pub last_item_id: Id,
    pub last_item_status_flags: ItemStatusFlags,
    pub last_item_rect: Rect,
    pub last_item_display_rect: Rect,

    pub nav_layer_current: NavLayer,
    pub nav_layers_active_mask: u32,
    pub nav_layers_active_mask_next: u32,
    pub nav_focus_scope_id_current: Id,
    pub nav_hide_highlight_one_frame: bool,
    pub nav_has_scroll: bool,

    pub menu_bar_appending: bool,
    pub menu_bar_offset: Vec2f,
    pub menu_columns: MenuColumns,
    pub child_windows: Vec<WindowIdx>,
    pub layout_type: LayoutType,
    pub parent_layout_type: LayoutType,
    pub focus_counter_regular: i32,
    pub focus_counter_tab_stop: i32,

    pub item_flags: ItemFlags,
    pub item_width: f32,
    pub text_wrap_pos: f32,
    pub item_width_stack: Vec<f32>,
    pub text_wrap_pos_stack: Vec<f32>,
    pub stack_sizes_on_begin: StackSizes,
}

impl Default for WindowTempData {
    fn default() -> Self {
        Self {
            cursor_pos: vec2(0.0, 0.0),
            cursor_pos_prev_line: vec2(0.0, 0.0),
            cursor_start_pos: vec2(0.0, 0.0),
            cursor_max_pos: vec2(0.0, 0.0),
            ideal_max_pos: vec2(0.0, 0.0),
            curr_line_size: vec2(0.0, 0.0),
            prev_line_size: vec2(0.0, 0.0),
            curr_line_text_base_offset: 0.0,
            prev_line_text_base_offset: 0.0,
            indent: 0.0,
            columns_offset: 0.0,
            group_offset: 0.0,
            last_item_id: Id::NONE,
            last_item_status_flags: ItemStatusFlags::empty(),
            last_item_rect: Rect::default(),
            last_item_display_rect: Rect::default(),
            nav_layer_current: NavLayer::Main,
            nav_layers_active_mask: 0,
            nav_layers_active_mask_next: 0,
            nav_focus_scope_id_current: Id::NONE,
            nav_hide_highlight_one_frame: false,
            nav_has_scroll: false,
            menu_bar_appending: false,
            menu_bar_offset: vec2(0.0, 0.0),
            menu_columns: MenuColumns::default(),
            child_windows: Vec::new(),
            layout_type: LayoutType::Vertical,
            parent_layout_type: LayoutType::Vertical,
            focus_counter_regular: -1,
            focus_counter_tab_stop: -1,
            item_flags: ItemFlags::empty(),
            item_width: 0.0,
            text_wrap_pos: -1.0,
            item_width_stack: Vec::new(),
            text_wrap_pos_stack: Vec::new(),
            stack_sizes_on_begin: StackSizes::default(),
        }
    }
}

/// Retained state of a window.
///
/// Windows are created by the first `begin` with a new name and then live as long as the context;
/// when not submitted they are only hidden, so position, size, scroll and widget storage survive.
pub struct Window {
    pub(crate) name: String,
    pub(crate) id: Id,
    pub(crate) flags: WindowFlags,
    pub(crate) pos: Vec2f,
    pub(crate) size: Vec2f,
    pub(crate) size_full: Vec2f,
    pub(crate) content_size: Vec2f,
    pub(crate) content_size_ideal: Vec2f,
    pub(crate) content_size_explicit: Vec2f,
    pub(crate) window_padding: Vec2f,
    pub(crate) window_rounding: f32,
    pub(crate) window_border_size: f32,
    pub(crate) move_id: Id,
    pub(crate) child_id: Id,
    pub(crate) scroll: Vec2f,
    pub(crate) scroll_max: Vec2f,
    pub(crate) scroll_target: Vec2f,
    pub(crate) scroll_target_center_ratio: Vec2f,
    pub(crate) scroll_target_edge_snap_dist: Vec2f,
    pub(crate) scrollbar_sizes: Vec2f,
    pub(crate) scrollbar_x: bool,
    pub(crate) scrollbar_y: bool,
    pub(crate) active: bool,
    pub(crate) was_active: bool,
    pub(crate) write_accessed: bool,
    pub(crate) collapsed: bool,
    pub(crate) want_collapse_toggle: bool,
    pub(crate) skip_items: bool,
    pub(crate) appearing: bool,
    pub(crate) hidden: bool,
    pub(crate) is_fallback_window: bool,
    pub(crate) has_close_button: bool,
    pub(crate) resize_border_held: Option<usize>,
    pub(crate) begin_count: i32,
    pub(crate) begin_order_within_parent: i32,
    pub(crate) begin_order_within_context: i32,
    pub(crate) popup_id: Id,
    pub(crate) auto_fit_frames_x: i32,
    pub(crate) auto_fit_frames_y: i32,
    pub(crate) auto_fit_child_axises: u8,
    pub(crate) auto_fit_only_grows: bool,
    pub(crate) auto_pos_last_direction: Option<Dir>,
    pub(crate) hidden_frames_can_skip_items: i32,
    pub(crate) hidden_frames_cannot_skip_items: i32,
    pub(crate) hidden_frames_for_render_only: i32,
    pub(crate) set_window_pos_allow_flags: Cond,
    pub(crate) set_window_size_allow_flags: Cond,
    pub(crate) set_window_collapsed_allow_flags: Cond,
    pub(crate) set_window_pos_val: Vec2f,
    pub(crate) set_window_pos_pivot: Vec2f,

    pub(crate) id_stack: Vec<Id>,
    pub(crate) dc: WindowTempData,

    pub(crate) outer_rect_clipped: Rect,
    pub(crate) inner_rect: Rect,
    pub(crate) inner_clip_rect: Rect,
    pub(crate) work_rect: Rect,
    pub(crate) parent_work_rect: Rect,
    pub(crate) clip_rect: Rect,
    pub(crate) content_region_rect: Rect,

    pub(crate) last_frame_active: i32,
    pub(crate) last_time_active: f32,
    pub(crate) item_width_default: f32,
    pub(crate) state_storage: Storage,
    pub(crate) settings_offset: Option<usize>,

    pub(crate) draw_list: DrawList,
    pub(crate) parent_window: Option<WindowIdx>,
    pub(crate) root_window: WindowIdx,
    pub(crate) root_window_for_title_bar_highlight: WindowIdx,
    pub(crate) root_window_for_nav: WindowIdx,

    pub(crate) nav_last_child_nav_window: Option<WindowIdx>,
    pub(crate) nav_last_ids: [Id; NavLayer::COUNT],
    pub(crate) nav_rect_rel: [Rect; NavLayer::COUNT],

    pub(crate) memory_compacted: bool,
}

impl Window {
    pub(crate) fn new(name: &str, idx: WindowIdx) -> Self {
        let id = hash_str(name, Id::NONE);
        let all = Cond::ALWAYS | Cond::ONCE | Cond::FIRST_USE_EVER | Cond::APPEARING;
        Self {
            name: name.to_string(),
            id,
            flags: WindowFlags::empty(),
            pos: vec2(0.0, 0.0),
            size: vec2(0.0, 0.0),
            size_full: vec2(0.0, 0.0),
            content_size: vec2(0.0, 0.0),
            content_size_ideal: vec2(0.0, 0.0),
            content_size_explicit: vec2(0.0, 0.0),
            window_padding: vec2(0.0, 0.0),
            window_rounding: 0.0,
            window_border_size: 0.0,
            move_id: hash_str("#MOVE", id),
            child_id: Id::NONE,
            scroll: vec2(0.0, 0.0),
            scroll_max: vec2(0.0, 0.0),
            scroll_target: vec2(f32::MAX, f32::MAX),
            scroll_target_center_ratio: vec2(0.5, 0.5),
            scroll_target_edge_snap_dist: vec2(0.0, 0.0),
            scrollbar_sizes: vec2(0.0, 0.0),
            scrollbar_x: false,
            scrollbar_y: false,
            active: false,
            was_active: false,
            write_accessed: false,
            collapsed: false,
            want_collapse_toggle: false,
            skip_items: false,
            appearing: false,
            hidden: false,
            is_fallback_window: false,
            has_close_button: false,
            resize_border_held: None,
            begin_count: 0,
            begin_order_within_parent: -1,
            begin_order_within_context: -1,
            popup_id: Id::NONE,
            auto_fit_frames_x: -1,
            auto_fit_frames_y: -1,
            auto_fit_child_axises: 0,
            auto_fit_only_grows: false,
            auto_pos_last_direction: None,
            hidden_frames_can_skip_items: 0,
            hidden_frames_cannot_skip_items: 0,
            hidden_frames_for_render_only: 0,
            set_window_pos_allow_flags: all,
            set_window_size_allow_flags: all,
            set_window_collapsed_allow_flags: all,
            set_window_pos_val: vec2(f32::MAX, f32::MAX),
            set_window_pos_pivot: vec2(f32::MAX, f32::MAX),
            id_stack: vec![id],
            dc: WindowTempData::default(),
            outer_rect_clipped: Rect::default(),
            inner_rect: Rect::default(),
            inner_clip_rect: Rect::default(),
            work_rect: Rect::default(),
            parent_work_rect: Rect::default(),
            clip_rect: Rect::default(),
            content_region_rect: Rect::default(),
            last_frame_active: -1,
            last_time_active: -1.0,
            item_width_default: 0.0,
            state_storage: Storage::new(),
            settings_offset: None,
            draw_list: DrawList::new(name),
            parent_window: None,
            root_window: idx,
            root_window_for_title_bar_highlight: idx,
            root_window_for_nav: idx,
            nav_last_child_nav_window: None,
            nav_last_ids: [Id::NONE; NavLayer::COUNT],
            nav_rect_rel: [Rect::default(); NavLayer::COUNT],
            memory_compacted: false,
        }
    }

    /// Name passed to `begin`.
    pub fn name(&self) -> &str { &self.name }
    /// Hash of the name.
    pub fn id(&self) -> Id { self.id }
    /// Flags of the last `begin`.
    pub fn flags(&self) -> WindowFlags { self.flags }
    /// Upper-left corner in screen space.
    pub fn pos(&self) -> Vec2f { self.pos }
    /// Current size, the title bar height when collapsed.
    pub fn size(&self) -> Vec2f { self.size }
    /// Size when not collapsed.
    pub fn size_full(&self) -> Vec2f { self.size_full }
    /// Size of the contents submitted last frame, excluding padding.
    pub fn content_size(&self) -> Vec2f { self.content_size }
    /// Like [`Window::content_size`] but including items clipped out of view.
    pub fn content_size_ideal(&self) -> Vec2f { self.content_size_ideal }
    /// Scroll offset.
    pub fn scroll(&self) -> Vec2f { self.scroll }
    /// Maximum scroll offset.
    pub fn scroll_max(&self) -> Vec2f { self.scroll_max }
    /// Returns `true` if the window was submitted this frame.
    pub fn is_active(&self) -> bool { self.active }
    /// Returns `true` if collapsed to its title bar.
    pub fn is_collapsed(&self) -> bool { self.collapsed }
    /// Parent of a child window or popup.
    pub fn parent(&self) -> Option<WindowIdx> { self.parent_window }
    /// Root of the window hierarchy this window belongs to.
    pub fn root(&self) -> WindowIdx { self.root_window }
    /// Per-window widget storage.
    pub fn state_storage(&self) -> &Storage { &self.state_storage }
    /// Mutable per-window widget storage.
    pub fn state_storage_mut(&mut self) -> &mut Storage { &mut self.state_storage }
    /// Depth of the ID stack, including the window's own ID.
    pub fn id_stack_len(&self) -> usize { self.id_stack.len() }

    pub(crate) fn id_seed(&self) -> Id { self.id_stack.last().copied().unwrap_or(self.id) }

    /// Identifier of `label` in the current ID scope.
    pub fn get_id(&self, label: &str) -> Id { hash_str(label, self.id_seed()) }

    /// Identifier of an integer in the current ID scope.
    pub fn get_id_int(&self, n: i32) -> Id { hash_i32(n, self.id_seed()) }

    /// Identifier of an opaque handle in the current ID scope.
    pub fn get_id_usize(&self, n: usize) -> Id { hash_usize(n, self.id_seed()) }

    /// Identifier synthesized from a rectangle, for items that have none.
    ///
    /// The rectangle is taken relative to the window, so the identity changes whenever the item
    /// moves inside the window between frames.
    pub fn get_id_from_rect(&self, r_abs: &Rect) -> Id {
        let coords = [r_abs.min.x - self.pos.x, r_abs.min.y - self.pos.y, r_abs.max.x - self.pos.x, r_abs.max.y - self.pos.y];
        let mut bytes = [0u8; 16];
        for (i, c) in coords.iter().enumerate() {
            bytes[i * 4..i * 4 + 4].copy_from_slice(&c.to_le_bytes());
        }
        hash_data(&bytes, self.id_seed())
    }

    /// Full window rectangle.
    pub fn rect(&self) -> Rect { Rect::from_min_size(self.pos, self.size) }

    pub(crate) fn title_bar_height(&self, font_size: f32, style: &Style) -> f32 {
        if self.flags.has_no_title_bar() { 0.0 } else { font_size + style.frame_padding.y * 2.0 }
    }

    pub(crate) fn title_bar_rect(&self, font_size: f32, style: &Style) -> Rect {
        Rect::from_min_size(self.pos, vec2(self.size_full.x, self.title_bar_height(font_size, style)))
    }

    pub(crate) fn menu_bar_height(&self, font_size: f32, style: &Style) -> f32 {
        if self.flags.has_menu_bar() { self.dc.menu_bar_offset.y + font_size + style.frame_padding.y * 2.0 } else { 0.0 }
    }

    pub(crate) fn menu_bar_rect(&self, font_size: f32, style: &Style) -> Rect {
        let y1 = self.pos.y + self.title_bar_height(font_size, style);
        Rect::from_coords(self.pos.x, y1, self.pos.x + self.size_full.x, y1 + self.menu_bar_height(font_size, style))
    }

    /// Releases the transient buffers of an idle window.
    pub(crate) fn gc_compact_transient_buffers(&mut self) {
        self.memory_compacted = true;
        self.draw_list.compact();
        self.dc.child_windows = Vec::new();
        self.dc.item_width_stack = Vec::new();
        self.dc.text_wrap_pos_stack = Vec::new();
    }

    pub(crate) fn gc_awake_transient_buffers(&mut self) { self.memory_compacted = false; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_window_identity() {
        let w = Window::new("Hello", WindowIdx(3));
        assert_eq!(w.id(), hash_str("Hello", Id::NONE));
        assert_eq!(w.id_stack, vec![w.id]);
        assert_eq!(w.root_window, WindowIdx(3));
        assert_eq!(w.move_id, hash_str("#MOVE", w.id));
        assert!(w.set_window_pos_allow_flags.contains(Cond::FIRST_USE_EVER));
    }

    #[test]
    fn ids_are_scoped_by_the_stack_top() {
        let mut w = Window::new("W", WindowIdx(0));
        let a = w.get_id("button");
        w.id_stack.push(w.get_id("scope"));
        let b = w.get_id("button");
        assert_ne!(a, b);
        w.id_stack.pop();
        assert_eq!(w.get_id("button"), a);
        assert_ne!(w.get_id_int(1), w.get_id_int(2));
    }

    #[test]
    fn rect_ids_depend_on_relative_position() {
        let mut w = Window::new("W", WindowIdx(0));
        w.pos = vec2(100.0, 100.0);
        let r = Rect::from_coords(110.0, 110.0, 150.0, 130.0);
        let id = w.get_id_from_rect(&r);
        w.pos = vec2(200.0, 200.0);
        let moved = Rect::from_coords(210.0, 210.0, 250.0, 230.0);
        assert_eq!(w.get_id_from_rect(&moved), id);
        assert_ne!(w.get_id_from_rect(&r), id);
    }

    #[test]
    fn bar_heights() {
        let style = Style::default();
        let mut w = Window::new("W", WindowIdx(0));
        assert_eq!(w.title_bar_height(13.0, &style), 13.0 + style.frame_padding.y * 2.0);
        assert_eq!(w.menu_bar_height(13.0, &style), 0.0);
        w.flags = WindowFlags::NO_TITLE_BAR | WindowFlags::MENU_BAR;
        assert_eq!(w.title_bar_height(13.0, &style), 0.0);
        assert_eq!(w.menu_bar_height(13.0, &style), 13.0 + style.frame_padding.y * 2.0);
    }
}
