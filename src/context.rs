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
use std::collections::HashMap;

use crate::drag_drop::Payload;
use crate::nav::{NavForward, NavItemData, NavMoveFlags};
use crate::window::{GroupData, NextItemData, NextWindowData, PopupData};
use crate::*;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate version as a number: major * 10000 + minor * 100 + patch.
pub const VERSION_NUM: u32 = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Sizes of the structures shared between the host and the library.
pub struct DataLayout {
    /// Size of [`Io`].
    pub io: usize,
    /// Size of [`Style`].
    pub style: usize,
    /// Size of [`Vec2f`].
    pub vec2: usize,
    /// Size of [`Color`].
    pub color: usize,
    /// Size of [`DrawCmd`].
    pub draw_cmd: usize,
}

/// The data layout this library was compiled with.
pub const DATA_LAYOUT: DataLayout = DataLayout {
    io: std::mem::size_of::<Io>(),
    style: std::mem::size_of::<Style>(),
    vec2: std::mem::size_of::<Vec2f>(),
    color: std::mem::size_of::<Color>(),
    draw_cmd: std::mem::size_of::<DrawCmd>(),
};

const FRAMERATE_SAMPLES: usize = 120;

/// The whole retained state of the UI.
///
/// A context is driven once per frame: fill [`Context::io`], call [`Context::new_frame`], submit
/// windows and widgets, then call [`Context::render`] and hand the [`DrawData`] to a renderer.
/// Several contexts may coexist; none of them may be shared between threads.
pub struct Context {
    /// Input, configuration and outputs exchanged with the host.
    pub io: Io,
    /// Visual constants.
    pub style: Style,

    pub(crate) font: Box<dyn Font>,
    pub(crate) font_size: f32,

    pub(crate) initialized: bool,
    pub(crate) within_frame_scope: bool,
    pub(crate) within_frame_scope_with_implicit_window: bool,
    pub(crate) within_end_child: bool,
    pub(crate) time: f64,
    pub(crate) frame_count: i32,
    pub(crate) frame_count_ended: i32,
    pub(crate) frame_count_rendered: i32,

    // windows
    pub(crate) windows: Vec<Window>,
    pub(crate) windows_by_id: HashMap<Id, WindowIdx>,
    pub(crate) display_order: Vec<WindowIdx>,
    pub(crate) focus_order: Vec<WindowIdx>,
    pub(crate) current_window_stack: Vec<WindowIdx>,
    pub(crate) current_window: Option<WindowIdx>,
    pub(crate) windows_active_count: usize,
    pub(crate) hovered_window: Option<WindowIdx>,
    pub(crate) hovered_root_window: Option<WindowIdx>,
    pub(crate) hovered_window_under_moving_window: Option<WindowIdx>,
    pub(crate) moving_window: Option<WindowIdx>,
    pub(crate) wheeling_window: Option<WindowIdx>,
    pub(crate) wheeling_window_ref_mouse_pos: Vec2f,
    pub(crate) wheeling_window_timer: f32,
    pub(crate) scrollbar_click_delta_to_grab_center: f32,

    // item state
    pub(crate) hovered_id: Id,
    pub(crate) hovered_id_previous_frame: Id,
    pub(crate) hovered_id_allow_overlap: bool,
    pub(crate) hovered_id_disabled: bool,
    pub(crate) hovered_id_timer: f32,
    pub(crate) hovered_id_not_active_timer: f32,
    pub(crate) active_id: Id,
    pub(crate) active_id_is_alive: Id,
    pub(crate) active_id_timer: f32,
    pub(crate) active_id_is_just_activated: bool,
    pub(crate) active_id_allow_overlap: bool,
    pub(crate) active_id_no_clear_on_focus_loss: bool,
    pub(crate) active_id_has_been_pressed_before: bool,
    pub(crate) active_id_has_been_edited_before: bool,
    pub(crate) active_id_has_been_edited_this_frame: bool,
    pub(crate) active_id_click_offset: Vec2f,
    pub(crate) active_id_window: Option<WindowIdx>,
    pub(crate) active_id_source: InputSource,
    pub(crate) active_id_mouse_button: Option<MouseButton>,
    pub(crate) active_id_previous_frame: Id,
    pub(crate) active_id_previous_frame_is_alive: bool,
    pub(crate) active_id_previous_frame_has_been_edited_before: bool,
    pub(crate) active_id_previous_frame_window: Option<WindowIdx>,
    pub(crate) last_active_id: Id,
    pub(crate) last_active_id_timer: f32,

    pub(crate) next_window_data: NextWindowData,
    pub(crate) next_item_data: NextItemData,

    // stacks
    pub(crate) color_stack: Vec<(StyleColor, Color)>,
    pub(crate) style_var_stack: Vec<(StyleVar, StyleVarValue)>,
    pub(crate) item_flags_stack: Vec<ItemFlags>,
    pub(crate) focus_scope_stack: Vec<Id>,
    pub(crate) group_stack: Vec<GroupData>,
    pub(crate) open_popup_stack: Vec<PopupData>,
    pub(crate) begin_popup_stack: Vec<PopupData>,

    // navigation
    pub(crate) nav_window: Option<WindowIdx>,
    pub(crate) nav_id: Id,
    pub(crate) nav_focus_scope_id: Id,
    pub(crate) nav_activate_id: Id,
    pub(crate) nav_activate_down_id: Id,
    pub(crate) nav_activate_pressed_id: Id,
    pub(crate) nav_input_id: Id,
    pub(crate) nav_just_tabbed_id: Id,
    pub(crate) nav_just_moved_to_id: Id,
    pub(crate) nav_just_moved_to_focus_scope_id: Id,
    pub(crate) nav_just_moved_to_key_mods: KeyModFlags,
    pub(crate) nav_next_activate_id: Id,
    pub(crate) nav_input_source: InputSource,
    pub(crate) nav_score_rect: Rect,
    pub(crate) nav_layer: NavLayer,
    pub(crate) nav_id_tab_counter: i32,
    pub(crate) nav_id_is_alive: bool,
    pub(crate) nav_mouse_pos_dirty: bool,
    pub(crate) nav_disable_highlight: bool,
    pub(crate) nav_disable_mouse_hover: bool,
    pub(crate) nav_any_request: bool,
    pub(crate) nav_init_request: bool,
    pub(crate) nav_init_request_from_move: bool,
    pub(crate) nav_init_result_id: Id,
    pub(crate) nav_init_result_rect_rel: Rect,
    pub(crate) nav_move_request: bool,
    pub(crate) nav_move_request_flags: NavMoveFlags,
    pub(crate) nav_move_request_forward: NavForward,
    pub(crate) nav_move_request_key_mods: KeyModFlags,
    pub(crate) nav_move_dir: Option<Dir>,
    pub(crate) nav_move_dir_last: Option<Dir>,
    pub(crate) nav_move_clip_dir: Option<Dir>,
    pub(crate) nav_move_result_local: NavItemData,
    pub(crate) nav_move_result_local_visible_set: NavItemData,
    pub(crate) nav_move_result_other: NavItemData,
    pub(crate) nav_wrap_request_window: Option<WindowIdx>,
    pub(crate) nav_wrap_request_flags: NavMoveFlags,
    pub(crate) nav_windowing_target: Option<WindowIdx>,
    pub(crate) nav_windowing_target_anim: Option<WindowIdx>,
    pub(crate) nav_windowing_timer: f32,
    pub(crate) nav_windowing_highlight_alpha: f32,
    pub(crate) nav_windowing_toggle_layer: bool,

    // tab focus
    pub(crate) tab_focus_request_curr_window: Option<WindowIdx>,
    pub(crate) tab_focus_request_next_window: Option<WindowIdx>,
    pub(crate) tab_focus_request_curr_counter_regular: i32,
    pub(crate) tab_focus_request_curr_counter_tab_stop: i32,
    pub(crate) tab_focus_request_next_counter_regular: i32,
    pub(crate) tab_focus_request_next_counter_tab_stop: i32,
    pub(crate) tab_focus_pressed: bool,

    pub(crate) dim_bg_ratio: f32,
    pub(crate) mouse_cursor: Option<MouseCursor>,
    pub(crate) want_capture_mouse_next_frame: Option<bool>,
    pub(crate) want_capture_keyboard_next_frame: Option<bool>,
    pub(crate) want_text_input_next_frame: Option<bool>,

    // drag and drop
    pub(crate) drag_drop_active: bool,
    pub(crate) drag_drop_within_source: bool,
    pub(crate) drag_drop_within_target: bool,
    pub(crate) drag_drop_source_flags: DragDropFlags,
    pub(crate) drag_drop_source_frame_count: i32,
    pub(crate) drag_drop_mouse_button: Option<MouseButton>,
    pub(crate) drag_drop_payload: Payload,
    pub(crate) drag_drop_target_rect: Rect,
    pub(crate) drag_drop_target_id: Id,
    pub(crate) drag_drop_accept_flags: DragDropFlags,
    pub(crate) drag_drop_accept_id_curr_rect_surface: f32,
    pub(crate) drag_drop_accept_id_curr: Id,
    pub(crate) drag_drop_accept_id_prev: Id,
    pub(crate) drag_drop_accept_frame_count: i32,
    pub(crate) drag_drop_hold_just_pressed_id: Id,

    pub(crate) tooltip_override_count: i32,
    pub(crate) menus_id_submitted_this_frame: Vec<Id>,

    // settings
    pub(crate) settings_loaded: bool,
    pub(crate) settings_dirty_timer: f32,
    pub(crate) settings_handlers: Vec<Box<dyn SettingsHandler>>,
    pub(crate) settings_windows: Vec<WindowSettings>,

    // rendering
    pub(crate) draw_data: DrawData,
    pub(crate) background_draw_list: DrawList,
    pub(crate) foreground_draw_list: DrawList,

    // platform
    pub(crate) clipboard: Box<dyn Clipboard>,
    pub(crate) ime_handler: Option<Box<dyn ImeHandler>>,
    pub(crate) platform_ime_pos: Option<Vec2f>,
    pub(crate) platform_ime_last_pos: Option<Vec2f>,

    framerate_sec_per_frame: [f32; FRAMERATE_SAMPLES],
    framerate_sec_per_frame_idx: usize,
    framerate_sec_per_frame_accum: f32,
}

impl Context {
    /// Creates a context measuring text with `font`.
    pub fn new(font: Box<dyn Font>) -> Self {
        let font_size = font.get_size();
        let mut ctx = Self {
            io: Io::default(),
            style: Style::default(),
            font,
            font_size,
            initialized: true,
            within_frame_scope: false,
            within_frame_scope_with_implicit_window: false,
            within_end_child: false,
            time: 0.0,
            frame_count: 0,
            frame_count_ended: -1,
            frame_count_rendered: -1,

            windows: Vec::new(),
            windows_by_id: HashMap::new(),
            display_order: Vec::new(),
            focus_order: Vec::new(),
            current_window_stack: Vec::new(),
            current_window: None,
            windows_active_count: 0,
            hovered_window: None,
            hovered_root_window: None,
            hovered_window_under_moving_window: None,
            moving_window: None,
            wheeling_window: None,
            wheeling_window_ref_mouse_pos: vec2(0.0, 0.0),
            wheeling_window_timer: 0.0,
            scrollbar_click_delta_to_grab_center: 0.0,

            hovered_id: Id::NONE,
            hovered_id_previous_frame: Id::NONE,
            hovered_id_allow_overlap: false,
            hovered_id_disabled: false,
            hovered_id_timer: 0.0,
            hovered_id_not_active_timer: 0.0,
            active_id: Id::NONE,
            active_id_is_alive: Id::NONE,
            active_id_timer: 0.0,
            active_id_is_just_activated: false,
            active_id_allow_overlap: false,
            active_id_no_clear_on_focus_loss: false,
            active_id_has_been_pressed_before: false,
            active_id_has_been_edited_before: false,
            active_id_has_been_edited_this_frame: false,
            active_id_click_offset: vec2(-1.0, -1.0),
            active_id_window: None,
            active_id_source: InputSource::None,
            active_id_mouse_button: None,
            active_id_previous_frame: Id::NONE,
            active_id_previous_frame_is_alive: false,
            active_id_previous_frame_has_been_edited_before: false,
            active_id_previous_frame_window: None,
            last_active_id: Id::NONE,
            last_active_id_timer: 0.0,

            next_window_data: NextWindowData::default(),
            next_item_data: NextItemData::default(),

            color_stack: Vec::new(),
            style_var_stack: Vec::new(),
            item_flags_stack: Vec::new(),
            focus_scope_stack: Vec::new(),
            group_stack: Vec::new(),
            open_popup_stack: Vec::new(),
            begin_popup_stack: Vec::new(),

            nav_window: None,
            nav_id: Id::NONE,
            nav_focus_scope_id: Id::NONE,
            nav_activate_id: Id::NONE,
            nav_activate_down_id: Id::NONE,
            nav_activate_pressed_id: Id::NONE,
            nav_input_id: Id::NONE,
            nav_just_tabbed_id: Id::NONE,
            nav_just_moved_to_id: Id::NONE,
            nav_just_moved_to_focus_scope_id: Id::NONE,
            nav_just_moved_to_key_mods: KeyModFlags::empty(),
            nav_next_activate_id: Id::NONE,
            nav_input_source: InputSource::None,
            nav_score_rect: Rect::default(),
            nav_layer: NavLayer::Main,
            nav_id_tab_counter: i32::MAX,
            nav_id_is_alive: false,
            nav_mouse_pos_dirty: false,
            nav_disable_highlight: true,
            nav_disable_mouse_hover: false,
            nav_any_request: false,
            nav_init_request: false,
            nav_init_request_from_move: false,
            nav_init_result_id: Id::NONE,
            nav_init_result_rect_rel: Rect::default(),
            nav_move_request: false,
            nav_move_request_flags: NavMoveFlags::empty(),
            nav_move_request_forward: NavForward::None,
            nav_move_request_key_mods: KeyModFlags::empty(),
            nav_move_dir: None,
            nav_move_dir_last: None,
            nav_move_clip_dir: None,
            nav_move_result_local: NavItemData::default(),
            nav_move_result_local_visible_set: NavItemData::default(),
            nav_move_result_other: NavItemData::default(),
            nav_wrap_request_window: None,
            nav_wrap_request_flags: NavMoveFlags::empty(),
            nav_windowing_target: None,
            nav_windowing_target_anim: None,
            nav_windowing_timer: 0.0,
            nav_windowing_highlight_alpha: 0.0,
            nav_windowing_toggle_layer: false,

            tab_focus_request_curr_window: None,
            tab_focus_request_next_window: None,
            tab_focus_request_curr_counter_regular: i32::MAX,
            tab_focus_request_curr_counter_tab_stop: i32::MAX,
            tab_focus_request_next_counter_regular: i32::MAX,
            tab_focus_request_next_counter_tab_stop: i32::MAX,
            tab_focus_pressed: false,

            dim_bg_ratio: 0.0,
            mouse_cursor: Some(MouseCursor::Arrow),
            want_capture_mouse_next_frame: None,
            want_capture_keyboard_next_frame: None,
            want_text_input_next_frame: None,

            drag_drop_active: false,
            drag_drop_within_source: false,
            drag_drop_within_target: false,
            drag_drop_source_flags: DragDropFlags::empty(),
            drag_drop_source_frame_count: -1,
            drag_drop_mouse_button: None,
            drag_drop_payload: Payload::default(),
            drag_drop_target_rect: Rect::default(),
            drag_drop_target_id: Id::NONE,
            drag_drop_accept_flags: DragDropFlags::empty(),
            drag_drop_accept_id_curr_rect_surface: 0.0,
            drag_drop_accept_id_curr: Id::NONE,
            drag_drop_accept_id_prev: Id::NONE,
            drag_drop_accept_frame_count: -1,
            drag_drop_hold_just_pressed_id: Id::NONE,

            tooltip_override_count: 0,
            menus_id_submitted_this_frame: Vec::new(),

            settings_loaded: false,
            settings_dirty_timer: 0.0,
            settings_handlers: Vec::new(),
            settings_windows: Vec::new(),

            draw_data: DrawData::default(),
            background_draw_list: DrawList::new("##Background"),
            foreground_draw_list: DrawList::new("##Foreground"),

            clipboard: Box::new(MemoryClipboard::default()),
            ime_handler: None,
            platform_ime_pos: None,
            platform_ime_last_pos: None,

            framerate_sec_per_frame: [0.0; FRAMERATE_SAMPLES],
            framerate_sec_per_frame_idx: 0,
            framerate_sec_per_frame_accum: 0.0,
        };
        ctx.add_window_settings_handler();
        ctx
    }

    /// Saves the settings (when an ini file is configured) and releases every window.
    ///
    /// The context cannot be used for new frames afterwards.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        if self.settings_loaded {
            if let Some(path) = self.io.ini_filename.clone() {
                if let Err(e) = self.save_ini_settings_to_disk(&path) {
                    warn!("unable to save settings on shutdown: {}", e);
                }
            }
        }
        self.windows.clear();
        self.windows_by_id.clear();
        self.display_order.clear();
        self.focus_order.clear();
        self.current_window_stack.clear();
        self.current_window = None;
        self.hovered_window = None;
        self.hovered_root_window = None;
        self.hovered_window_under_moving_window = None;
        self.active_id_window = None;
        self.active_id_previous_frame_window = None;
        self.moving_window = None;
        self.wheeling_window = None;
        self.nav_window = None;
        self.nav_windowing_target = None;
        self.nav_windowing_target_anim = None;
        self.color_stack.clear();
        self.style_var_stack.clear();
        self.item_flags_stack.clear();
        self.focus_scope_stack.clear();
        self.group_stack.clear();
        self.open_popup_stack.clear();
        self.begin_popup_stack.clear();
        self.settings_windows.clear();
        self.settings_handlers.clear();
        self.draw_data.clear();
        self.initialized = false;
    }

    /// Number of frames started so far.
    pub fn frame_count(&self) -> i32 { self.frame_count }

    /// Seconds elapsed, accumulated from [`Io::delta_time`].
    pub fn time(&self) -> f64 { self.time }

    /// Returns `true` between [`Context::new_frame`] and [`Context::end_frame`].
    pub fn is_within_frame(&self) -> bool { self.within_frame_scope }

    /// Window being appended to.
    ///
    /// # Panics
    /// Panics outside of a `begin`/`end` pair.
    pub(crate) fn current_window_idx(&self) -> WindowIdx {
        match self.current_window {
            Some(w) => w,
            None => panic!("no current window: call new_frame() and begin() first"),
        }
    }

    pub(crate) fn current_window_ref(&self) -> &Window { &self.windows[self.current_window_idx().0] }

    pub(crate) fn current_window_mut(&mut self) -> &mut Window {
        let w = self.current_window_idx();
        let window = &mut self.windows[w.0];
        window.write_accessed = true;
        window
    }

    /// Window being appended to, `None` outside of a frame.
    pub fn get_current_window(&self) -> Option<WindowIdx> { self.current_window }

    /// Looks up a window by index.
    pub fn get_window(&self, idx: WindowIdx) -> &Window { &self.windows[idx.0] }

    /// Every window created so far, in creation order.
    pub fn windows(&self) -> impl Iterator<Item = (WindowIdx, &Window)> { self.windows.iter().enumerate().map(|(i, w)| (WindowIdx(i), w)) }

    /// Windows back to front.
    pub fn display_order(&self) -> &[WindowIdx] { &self.display_order }

    /// Finds a window by its ID.
    pub fn find_window_by_id(&self, id: Id) -> Option<WindowIdx> { self.windows_by_id.get(&id).copied() }

    /// Finds a window by its name.
    pub fn find_window_by_name(&self, name: &str) -> Option<WindowIdx> { self.find_window_by_id(hash_str(name, Id::NONE)) }

    /// Window under the mouse.
    pub fn get_hovered_window(&self) -> Option<WindowIdx> { self.hovered_window }

    /// Window owning the keyboard/gamepad focus.
    pub fn get_focused_window(&self) -> Option<WindowIdx> { self.nav_window }

    /// Window being dragged with the mouse.
    pub fn get_moving_window(&self) -> Option<WindowIdx> { self.moving_window }

    /// Identifier of the widget being interacted with.
    pub fn get_active_id(&self) -> Id { self.active_id }

    /// Identifier of the widget under the mouse.
    pub fn get_hovered_id(&self) -> Id { if self.hovered_id.is_some() { self.hovered_id } else { self.hovered_id_previous_frame } }

    /// Identifier of the widget with the navigation focus.
    pub fn get_focus_id(&self) -> Id { self.nav_id }

    /// Makes `id` the active widget.
    pub fn set_active_id(&mut self, id: Id, window: Option<WindowIdx>) {
        self.active_id_is_just_activated = self.active_id != id;
        if self.active_id_is_just_activated {
            self.active_id_timer = 0.0;
            self.active_id_has_been_pressed_before = false;
            self.active_id_has_been_edited_before = false;
            self.active_id_mouse_button = None;
            if id.is_some() {
                self.last_active_id = id;
                self.last_active_id_timer = 0.0;
            }
        }
        self.active_id = id;
        self.active_id_allow_overlap = false;
        self.active_id_no_clear_on_focus_loss = false;
        self.active_id_window = window;
        self.active_id_has_been_edited_this_frame = false;
        if id.is_some() {
            self.active_id_is_alive = id;
            self.active_id_source = if self.nav_activate_id == id || self.nav_input_id == id || self.nav_just_tabbed_id == id || self.nav_just_moved_to_id == id {
                self.nav_input_source
            } else {
                InputSource::Mouse
            };
        }
    }

    /// Releases the active widget.
    pub fn clear_active_id(&mut self) { self.set_active_id(Id::NONE, None); }

    /// Marks `id` as hovered this frame.
    pub fn set_hovered_id(&mut self, id: Id) {
        self.hovered_id = id;
        self.hovered_id_allow_overlap = false;
        if id.is_some() && self.hovered_id_previous_frame != id {
            self.hovered_id_timer = 0.0;
            self.hovered_id_not_active_timer = 0.0;
        }
    }

    /// Records that the value of the active widget changed.
    pub fn mark_item_edited(&mut self, id: Id) {
        assert!(self.active_id == id || self.active_id.is_none() || self.drag_drop_active, "mark_item_edited on an inactive item");
        self.active_id_has_been_edited_this_frame = true;
        self.active_id_has_been_edited_before = true;
        let w = self.current_window_idx();
        self.windows[w.0].dc.last_item_status_flags |= ItemStatusFlags::EDITED;
    }

    /// Starts a frame: derives input state, updates hovering, navigation and window moves,
    /// and opens the implicit "Debug##Default" window.
    ///
    /// # Panics
    /// Panics when the previous frame was not ended with [`Context::end_frame`] or
    /// [`Context::render`], or when [`Io`] is not configured sensibly.
    pub fn new_frame(&mut self) {
        assert!(self.initialized, "new_frame on a context that was shut down");
        self.error_check_new_frame_sanity_checks();

        self.update_settings();

        self.time += self.io.delta_time as f64;
        self.within_frame_scope = true;
        self.frame_count += 1;
        self.tooltip_override_count = 0;
        self.menus_id_submitted_this_frame.clear();
        self.windows_active_count = 0;

        // framerate over the last samples
        let idx = self.framerate_sec_per_frame_idx;
        self.framerate_sec_per_frame_accum += self.io.delta_time - self.framerate_sec_per_frame[idx];
        self.framerate_sec_per_frame[idx] = self.io.delta_time;
        self.framerate_sec_per_frame_idx = (idx + 1) % FRAMERATE_SAMPLES;
        self.io.framerate = if self.framerate_sec_per_frame_accum > 0.0 { 1.0 / (self.framerate_sec_per_frame_accum / FRAMERATE_SAMPLES as f32) } else { f32::MAX };

        self.font_size = self.font.get_size();
        let display_size = self.io.display_size;
        self.background_draw_list.reset();
        self.background_draw_list.push_clip_rect(vec2(0.0, 0.0), display_size, false);
        self.foreground_draw_list.reset();
        self.foreground_draw_list.push_clip_rect(vec2(0.0, 0.0), display_size, false);
        self.draw_data.clear();

        // a payload source that disappears keeps its id alive so the drag state stays consistent
        if self.drag_drop_active && self.drag_drop_payload.source_id == self.active_id {
            self.keep_alive_id(self.drag_drop_payload.source_id);
        }

        if self.hovered_id_previous_frame.is_none() {
            self.hovered_id_timer = 0.0;
        }
        if self.hovered_id_previous_frame.is_none() || (self.hovered_id.is_some() && self.active_id == self.hovered_id) {
            self.hovered_id_not_active_timer = 0.0;
        }
        if self.hovered_id.is_some() {
            self.hovered_id_timer += self.io.delta_time;
        }
        if self.hovered_id.is_some() && self.active_id != self.hovered_id {
            self.hovered_id_not_active_timer += self.io.delta_time;
        }
        self.hovered_id_previous_frame = self.hovered_id;
        self.hovered_id = Id::NONE;
        self.hovered_id_allow_overlap = false;
        self.hovered_id_disabled = false;

        // the active widget was not submitted last frame
        if self.active_id_is_alive != self.active_id && self.active_id_previous_frame == self.active_id && self.active_id.is_some() {
            self.clear_active_id();
        }
        if self.active_id.is_some() {
            self.active_id_timer += self.io.delta_time;
        }
        self.last_active_id_timer += self.io.delta_time;
        self.active_id_previous_frame = self.active_id;
        self.active_id_previous_frame_window = self.active_id_window;
        self.active_id_previous_frame_has_been_edited_before = self.active_id_has_been_edited_before;
        self.active_id_is_alive = Id::NONE;
        self.active_id_has_been_edited_this_frame = false;
        self.active_id_previous_frame_is_alive = false;
        self.active_id_is_just_activated = false;

        self.drag_drop_accept_id_prev = self.drag_drop_accept_id_curr;
        self.drag_drop_accept_id_curr = Id::NONE;
        self.drag_drop_accept_id_curr_rect_surface = f32::MAX;
        self.drag_drop_within_source = false;
        self.drag_drop_within_target = false;
        self.drag_drop_hold_just_pressed_id = Id::NONE;

        self.io.update_keyboard_inputs();
        self.nav_update();

        if self.io.config_flags.contains(ConfigFlags::NO_MOUSE) {
            self.io.mouse_pos = Io::mouse_pos_invalid();
            self.io.mouse_buttons = [false; MouseButton::COUNT];
        }
        if self.io.update_mouse_inputs(self.time) {
            self.nav_disable_mouse_hover = false;
        }

        self.update_hovered_window_and_capture_flags();
        self.update_mouse_moving_window_new_frame();

        if self.get_top_most_popup_modal().is_some() || (self.nav_windowing_target.is_some() && self.nav_windowing_highlight_alpha > 0.0) {
            self.dim_bg_ratio = (self.dim_bg_ratio + self.io.delta_time * 6.0).min(1.0);
        } else {
            self.dim_bg_ratio = (self.dim_bg_ratio - self.io.delta_time * 10.0).max(0.0);
        }

        self.mouse_cursor = Some(MouseCursor::Arrow);
        self.want_capture_mouse_next_frame = None;
        self.want_capture_keyboard_next_frame = None;
        self.want_text_input_next_frame = None;
        self.platform_ime_pos = None;

        self.update_mouse_wheel();
        self.update_tab_focus();

        // mark all windows as not visible and compact the ones that stayed idle
        let compact_start_time = if self.io.config_memory_compact_timer < 0.0 { -f32::MAX } else { self.time as f32 - self.io.config_memory_compact_timer };
        for window in self.windows.iter_mut() {
            window.was_active = window.active;
            window.begin_count = 0;
            window.active = false;
            window.write_accessed = false;
            if !window.was_active && !window.memory_compacted && window.last_time_active < compact_start_time {
                debug!("compacting transient buffers of idle window '{}'", window.name);
                window.gc_compact_transient_buffers();
            }
        }

        // closing the focused window gives focus back to the top-most remaining one
        if let Some(nav) = self.nav_window {
            if !self.windows[nav.0].was_active {
                self.focus_top_most_window_under_one(None, None);
            }
        }

        self.current_window_stack.clear();
        self.begin_popup_stack.clear();
        self.item_flags_stack.clear();
        self.item_flags_stack.push(ItemFlags::empty());
        self.close_popups_over_window(self.nav_window, false);

        self.within_frame_scope_with_implicit_window = true;
        self.set_next_window_size(vec2(400.0, 400.0), Cond::FIRST_USE_EVER);
        self.begin("Debug##Default", WindowFlags::empty());
        assert!(self.current_window_ref().is_fallback_window);
    }

    fn error_check_new_frame_sanity_checks(&self) {
        assert!(self.frame_count == 0 || self.frame_count_ended == self.frame_count, "forgot to call render() or end_frame() at the end of the previous frame");
        assert!(self.io.delta_time > 0.0 || self.frame_count == 0, "io.delta_time must be positive");
        assert!(self.io.display_size.x >= 0.0 && self.io.display_size.y >= 0.0, "io.display_size must not be negative");
        assert!(self.style.window_min_size.x >= 1.0 && self.style.window_min_size.y >= 1.0, "style.window_min_size must be at least 1");
        assert!(self.io.key_repeat_delay > 0.0 && self.io.key_repeat_rate > 0.0, "key repeat delay and rate must be positive");
    }

    fn error_check_end_frame_sanity_checks(&self) {
        assert!(!self.current_window_stack.is_empty(), "mismatched begin/end calls: end() or end_child() called too many times");
        if self.current_window_stack.len() != 1 {
            let w = self.current_window_ref();
            if w.flags.is_child() {
                panic!("missing end_child() for '{}'", w.name);
            } else {
                panic!("missing end() for '{}'", w.name);
            }
        }
        assert!(self.group_stack.is_empty(), "missing end_group()");
    }

    /// Pops every dangling scope down to the implicit window, reporting each fix to `log_callback`.
    ///
    /// Meant for interactive tools that run user scripts; missing `end` calls are not a condition
    /// that production code should rely on recovering from.
    pub fn error_check_end_frame_recover(&mut self, mut log_callback: Option<&mut dyn FnMut(&str)>) {
        let mut report = |msg: String| {
            warn!("{}", msg);
            if let Some(cb) = log_callback.as_mut() {
                cb(&msg);
            }
        };
        while let Some(w) = self.current_window {
            let name = self.windows[w.0].name.clone();
            let sizes = self.windows[w.0].dc.stack_sizes_on_begin;
            while self.group_stack.len() > sizes.group_stack {
                report(format!("recovered from missing end_group() in '{}'", name));
                self.end_group();
            }
            while self.windows[w.0].id_stack.len() > 1 {
                report(format!("recovered from missing pop_id() in '{}'", name));
                self.pop_id();
            }
            while self.color_stack.len() > sizes.color_stack {
                report(format!("recovered from missing pop_style_color() in '{}'", name));
                self.pop_style_color(1);
            }
            while self.style_var_stack.len() > sizes.style_var_stack {
                report(format!("recovered from missing pop_style_var() in '{}'", name));
                self.pop_style_var(1);
            }
            while self.focus_scope_stack.len() > sizes.focus_scope_stack {
                report(format!("recovered from missing pop_focus_scope() in '{}'", name));
                self.pop_focus_scope();
            }
            while self.item_flags_stack.len() > sizes.item_flags_stack {
                report(format!("recovered from missing pop_item_flag() in '{}'", name));
                self.pop_item_flag();
            }
            if self.current_window_stack.len() == 1 {
                assert!(self.windows[w.0].is_fallback_window);
                break;
            }
            if self.windows[w.0].flags.is_child() {
                report(format!("recovered from missing end_child() for '{}'", name));
                self.end_child();
            } else {
                report(format!("recovered from missing end() for '{}'", name));
                self.end();
            }
        }
    }

    /// Checks that the host was built against the same version and structure layout.
    pub fn debug_check_version_and_data_layout(&self, version: &str, layout: &DataLayout) -> bool {
        let mut ok = true;
        if version != VERSION {
            warn!("version mismatch: host built against {}, library is {}", version, VERSION);
            ok = false;
        }
        if *layout != DATA_LAYOUT {
            warn!("data layout mismatch: host {:?}, library {:?}", layout, DATA_LAYOUT);
            ok = false;
        }
        ok
    }

    fn update_hovered_window_and_capture_flags(&mut self) {
        self.find_hovered_window();

        // modal windows prevent hovering behind them
        let modal_window = self.get_top_most_popup_modal();
        if let (Some(modal), Some(hovered_root)) = (modal_window, self.hovered_root_window) {
            if !self.is_window_child_of(hovered_root, modal) {
                self.hovered_root_window = None;
                self.hovered_window = None;
            }
        }
        if self.io.config_flags.contains(ConfigFlags::NO_MOUSE) {
            self.hovered_root_window = None;
            self.hovered_window = None;
        }

        // a click that started outside of every window belongs to the application
        let mut mouse_earliest_button_down: Option<usize> = None;
        let mut mouse_any_down = false;
        for i in 0..MouseButton::COUNT {
            if self.io.mouse_clicked[i] {
                self.io.mouse_down_owned[i] = self.hovered_window.is_some() || !self.open_popup_stack.is_empty();
            }
            mouse_any_down |= self.io.mouse_buttons[i];
            if self.io.mouse_buttons[i] {
                match mouse_earliest_button_down {
                    Some(e) if self.io.mouse_clicked_time[e] <= self.io.mouse_clicked_time[i] => (),
                    _ => mouse_earliest_button_down = Some(i),
                }
            }
        }
        let mouse_avail = match mouse_earliest_button_down {
            Some(e) => self.io.mouse_down_owned[e],
            None => true,
        };
        let dragging_extern_payload = self.drag_drop_active && self.drag_drop_source_flags.contains(DragDropFlags::SOURCE_EXTERN);
        if !mouse_avail && !dragging_extern_payload {
            self.hovered_window = None;
            self.hovered_root_window = None;
        }

        self.io.want_capture_mouse = match self.want_capture_mouse_next_frame {
            Some(want) => want,
            None => (mouse_avail && (self.hovered_window.is_some() || mouse_any_down)) || !self.open_popup_stack.is_empty(),
        };
        self.io.want_capture_keyboard = match self.want_capture_keyboard_next_frame {
            Some(want) => want,
            None => self.active_id.is_some() || modal_window.is_some(),
        };
        if self.io.nav_active && self.io.config_flags.contains(ConfigFlags::NAV_ENABLE_KEYBOARD) && !self.io.config_flags.contains(ConfigFlags::NAV_NO_CAPTURE_KEYBOARD) {
            self.io.want_capture_keyboard = true;
        }
        self.io.want_text_input = self.want_text_input_next_frame.unwrap_or(false);
    }

    fn find_hovered_window(&mut self) {
        let mut hovered_window = None;
        let mut hovered_window_ignoring_moving_window = None;
        if let Some(moving) = self.moving_window {
            if !self.windows[moving.0].flags.contains(WindowFlags::NO_MOUSE_INPUTS) {
                hovered_window = Some(moving);
            }
        }
        let padding_regular = self.style.touch_extra_padding;
        let padding_for_resize_from_edges = if self.io.config_windows_resize_from_edges {
            vec2_max(padding_regular, vec2(crate::resize::RESIZE_FROM_EDGES_HALF_THICKNESS, crate::resize::RESIZE_FROM_EDGES_HALF_THICKNESS))
        } else {
            padding_regular
        };
        let moving_root = self.moving_window.map(|m| self.windows[m.0].root_window);
        for &idx in self.display_order.iter().rev() {
            let window = &self.windows[idx.0];
            if !window.active || window.hidden || window.flags.contains(WindowFlags::NO_MOUSE_INPUTS) {
                continue;
            }
            let mut bb = window.outer_rect_clipped;
            if window.flags.intersects(WindowFlags::CHILD_WINDOW | WindowFlags::NO_RESIZE | WindowFlags::ALWAYS_AUTO_RESIZE) {
                bb.expand_xy(padding_regular);
            } else {
                bb.expand_xy(padding_for_resize_from_edges);
            }
            if !bb.contains(self.io.mouse_pos) {
                continue;
            }
            if hovered_window.is_none() {
                hovered_window = Some(idx);
            }
            if hovered_window_ignoring_moving_window.is_none() && moving_root != Some(window.root_window) {
                hovered_window_ignoring_moving_window = Some(idx);
            }
            if hovered_window.is_some() && hovered_window_ignoring_moving_window.is_some() {
                break;
            }
        }
        self.hovered_window = hovered_window;
        self.hovered_root_window = hovered_window.map(|w| self.windows[w.0].root_window);
        self.hovered_window_under_moving_window = hovered_window_ignoring_moving_window;
    }

    /// Ends the frame: closes the implicit window, expires drag and drop, applies click focus and
    /// sorts windows so children follow their parents. Called by [`Context::render`] when needed.
    pub fn end_frame(&mut self) {
        assert!(self.initialized);
        if self.frame_count_ended == self.frame_count {
            return;
        }
        assert!(self.within_frame_scope, "end_frame() without new_frame()");

        self.error_check_end_frame_sanity_checks();
        self.update_ime_pos();

        // hide the implicit window if nothing was appended to it
        self.within_frame_scope_with_implicit_window = false;
        if let Some(w) = self.current_window {
            if !self.windows[w.0].write_accessed {
                self.windows[w.0].active = false;
            }
        }
        self.end();

        self.nav_end_frame();

        if self.drag_drop_active {
            let is_delivered = self.drag_drop_payload.delivery;
            let button_down = self.drag_drop_mouse_button.map(|b| self.is_mouse_down(b)).unwrap_or(false);
            let is_elapsed = self.drag_drop_payload.data_frame_count + 1 < self.frame_count
                && (!self.drag_drop_source_flags.contains(DragDropFlags::SOURCE_NO_AUTO_EXPIRE) || !button_down);
            if is_delivered || is_elapsed {
                self.clear_drag_drop();
            }
        }

        // fallback preview for sources that stopped submitting their own tooltip
        if self.drag_drop_active && self.drag_drop_source_frame_count < self.frame_count && !self.drag_drop_source_flags.contains(DragDropFlags::SOURCE_NO_PREVIEW_TOOLTIP) {
            self.drag_drop_within_source = true;
            self.set_tooltip("...");
            self.drag_drop_within_source = false;
        }

        self.within_frame_scope = false;
        self.frame_count_ended = self.frame_count;

        self.update_mouse_moving_window_end_frame();

        // children are displayed right after their parent
        let mut sorted = Vec::with_capacity(self.display_order.len());
        let order = self.display_order.clone();
        for idx in order {
            let window = &self.windows[idx.0];
            if window.active && window.flags.is_child() {
                continue;
            }
            self.add_window_to_sort_buffer(&mut sorted, idx);
        }
        assert_eq!(sorted.len(), self.display_order.len(), "window sort lost a window");
        self.display_order = sorted;
        self.io.metrics_active_windows = self.windows_active_count;

        self.io.epilogue();
    }

    fn add_window_to_sort_buffer(&self, out: &mut Vec<WindowIdx>, idx: WindowIdx) {
        out.push(idx);
        if !self.windows[idx.0].active {
            return;
        }
        let mut children = self.windows[idx.0].dc.child_windows.clone();
        children.sort_by_key(|c| {
            let f = self.windows[c.0].flags;
            (f.is_popup(), f.is_tooltip(), self.windows[c.0].begin_order_within_parent)
        });
        for child in children {
            if self.windows[child.0].active {
                self.add_window_to_sort_buffer(out, child);
            }
        }
    }

    pub(crate) fn is_window_active_and_visible(&self, idx: WindowIdx) -> bool { self.windows[idx.0].active && !self.windows[idx.0].hidden }

    fn collect_window_draw_lists(&self, idx: WindowIdx, out: &mut Vec<WindowIdx>) {
        out.push(idx);
        for &child in self.windows[idx.0].dc.child_windows.iter() {
            if self.is_window_active_and_visible(child) {
                self.collect_window_draw_lists(child, out);
            }
        }
    }

    /// Ends the frame if needed and gathers every visible draw list into [`DrawData`].
    pub fn render(&mut self) -> &DrawData {
        assert!(self.initialized);
        if self.frame_count_ended != self.frame_count {
            self.end_frame();
        }
        self.frame_count_rendered = self.frame_count;

        let top_most = self.nav_windowing_target.filter(|&t| !self.windows[t.0].flags.contains(WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS)).map(|t| self.windows[t.0].root_window);

        // regular windows (popups included) first, tooltips on top
        let mut layers: [Vec<WindowIdx>; 2] = [Vec::new(), Vec::new()];
        for &idx in self.display_order.iter() {
            let w = &self.windows[idx.0];
            if self.is_window_active_and_visible(idx) && !w.flags.is_child() && Some(idx) != top_most {
                let layer = if w.flags.is_tooltip() { 1 } else { 0 };
                self.collect_window_draw_lists(idx, &mut layers[layer]);
            }
        }
        if let Some(t) = top_most {
            if self.is_window_active_and_visible(t) {
                self.collect_window_draw_lists(t, &mut layers[0]);
            }
        }

        self.draw_data.clear();
        let background = std::mem::replace(&mut self.background_draw_list, DrawList::new("##Background"));
        self.draw_data.add_list(background);
        for idx in layers.iter().flatten() {
            let name = self.windows[idx.0].name.clone();
            let list = std::mem::replace(&mut self.windows[idx.0].draw_list, DrawList::new(&name));
            self.draw_data.add_list(list);
        }
        let foreground = std::mem::replace(&mut self.foreground_draw_list, DrawList::new("##Foreground"));
        self.draw_data.add_list(foreground);
        self.draw_data.display_pos = vec2(0.0, 0.0);
        self.draw_data.display_size = self.io.display_size;
        self.draw_data.valid = true;
        &self.draw_data
    }
}

impl Default for Context {
    fn default() -> Self { Self::new(Box::new(MonoFont::default())) }
}

impl Drop for Context {
    fn drop(&mut self) { self.shutdown(); }
}

#[cfg(test)]
impl Context {
    /// Context without an ini file, with a 800x600 display and 60Hz frames.
    pub(crate) fn new_headless() -> Self {
        let mut ctx = Context::default();
        ctx.io.ini_filename = None;
        ctx.io.display_size = vec2(800.0, 600.0);
        ctx.io.delta_time = 1.0 / 60.0;
        ctx
    }

    /// Runs one full frame around `f`.
    pub(crate) fn frame<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.new_frame();
        f(self);
        self.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_counters_advance() {
        let mut ctx = Context::new_headless();
        assert_eq!(ctx.frame_count(), 0);
        ctx.frame(|_| {});
        ctx.frame(|_| {});
        assert_eq!(ctx.frame_count(), 2);
        assert!(!ctx.is_within_frame());
        assert!(ctx.get_draw_data().valid);
    }

    #[test]
    #[should_panic(expected = "forgot to call render()")]
    fn new_frame_twice_panics() {
        let mut ctx = Context::new_headless();
        ctx.new_frame();
        ctx.new_frame();
    }

    #[test]
    fn implicit_window_is_hidden_when_unused() {
        let mut ctx = Context::new_headless();
        ctx.frame(|_| {});
        let w = ctx.find_window_by_name("Debug##Default").unwrap();
        assert!(ctx.get_window(w).is_fallback_window);
        assert!(!ctx.get_window(w).is_active());
        assert!(ctx.get_draw_data().lists.iter().all(|l| l.owner_name() != "Debug##Default"));
    }

    #[test]
    fn children_follow_parents_in_display_order() {
        let mut ctx = Context::new_headless();
        for _ in 0..2 {
            ctx.frame(|ctx| {
                ctx.window("A", WindowFlags::empty(), |ctx| {
                    ctx.child("inner", vec2(50.0, 50.0), true, WindowFlags::empty(), |_| {});
                });
                ctx.window("B", WindowFlags::empty(), |_| {});
            });
        }
        let order = ctx.display_order().to_vec();
        let a = ctx.find_window_by_name("A").unwrap();
        let pos_a = order.iter().position(|&w| w == a).unwrap();
        let child = order[pos_a + 1];
        assert_eq!(ctx.get_window(child).parent(), Some(a));
        assert_eq!(ctx.get_window(child).root(), a);
    }

    #[test]
    fn recover_pops_dangling_scopes() {
        let mut ctx = Context::new_headless();
        ctx.new_frame();
        ctx.begin("Broken", WindowFlags::empty());
        ctx.push_id("dangling");
        ctx.push_style_var(StyleVar::Alpha, StyleVarValue::Float(0.5));
        ctx.begin_child("kid", vec2(10.0, 10.0), false, WindowFlags::empty());
        let mut messages = Vec::new();
        let mut cb = |m: &str| messages.push(m.to_string());
        ctx.error_check_end_frame_recover(Some(&mut cb));
        assert_eq!(messages.len(), 4);
        assert_eq!(ctx.style.alpha, 1.0);
        ctx.render();
        assert!(ctx.get_draw_data().valid);
    }

    #[test]
    fn data_layout_check() {
        let ctx = Context::new_headless();
        assert!(ctx.debug_check_version_and_data_layout(VERSION, &DATA_LAYOUT));
        let mut other = DATA_LAYOUT;
        other.io += 4;
        assert!(!ctx.debug_check_version_and_data_layout(VERSION, &other));
        assert!(!ctx.debug_check_version_and_data_layout("0.0.0", &DATA_LAYOUT));
    }

    #[test]
    fn idle_windows_are_compacted() {
        let mut ctx = Context::new_headless();
        ctx.io.config_memory_compact_timer = 0.5;
        ctx.frame(|ctx| { ctx.window("Idle", WindowFlags::empty(), |ctx| ctx.text("x")); });
        let w = ctx.find_window_by_name("Idle").unwrap();
        for _ in 0..60 {
            ctx.frame(|_| {});
        }
        assert!(ctx.get_window(w).memory_compacted);
        ctx.frame(|ctx| { ctx.window("Idle", WindowFlags::empty(), |_| {}); });
        assert!(!ctx.get_window(w).memory_compacted);
    }
}
