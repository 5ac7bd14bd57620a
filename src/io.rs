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
use std::path::PathBuf;

use crate::*;

/// Sentinel stored in mouse positions when the mouse is unavailable.
pub(crate) const MOUSE_POS_INVALID: f32 = -f32::MAX;

#[derive(Clone, Debug)]
/// Frame input, configuration and output flags exchanged with the host.
///
/// The host writes the input section (through the `mouse_*`/`key_*` helpers or directly) before
/// [`Context::new_frame`] and reads the output section after building the UI. The derived section
/// is maintained by the context.
pub struct Io {
    /// Navigation, mouse and other global switches.
    pub config_flags: ConfigFlags,
    /// Display size in pixels.
    pub display_size: Vec2f,
    /// Seconds elapsed since the previous frame; must be positive.
    pub delta_time: f32,
    /// Settings file, `None` disables automatic load/save.
    pub ini_filename: Option<PathBuf>,
    /// Minimum number of seconds between two automatic settings saves.
    pub ini_saving_rate: f32,
    /// Maximum delay between the two clicks of a double-click, in seconds.
    pub mouse_double_click_time: f32,
    /// Maximum distance between the two clicks of a double-click, in pixels.
    pub mouse_double_click_max_dist: f32,
    /// Distance the mouse has to travel before a drag is recognized.
    pub mouse_drag_threshold: f32,
    /// Delay before a held key starts repeating, in seconds.
    pub key_repeat_delay: f32,
    /// Interval between two repeats of a held key, in seconds.
    pub key_repeat_rate: f32,
    /// Windows can be resized from their edges as well as the corner grips.
    pub config_windows_resize_from_edges: bool,
    /// Windows can only be moved by dragging their title bar.
    pub config_windows_move_from_title_bar_only: bool,
    /// Idle windows release their transient buffers after this many seconds; negative disables.
    pub config_memory_compact_timer: f32,

    /// Mouse position, [`Io::mouse_pos_invalid`] when unavailable.
    pub mouse_pos: Vec2f,
    /// Held state of each [`MouseButton`].
    pub mouse_buttons: [bool; MouseButton::COUNT],
    /// Vertical wheel delta accumulated this frame.
    pub mouse_wheel: f32,
    /// Horizontal wheel delta accumulated this frame.
    pub mouse_wheel_h: f32,
    /// Control held.
    pub key_ctrl: bool,
    /// Shift held.
    pub key_shift: bool,
    /// Alt held.
    pub key_alt: bool,
    /// Super/Cmd held.
    pub key_super: bool,
    /// Held state of each [`Key`].
    pub keys: [bool; Key::COUNT],
    /// Gamepad navigation inputs, 0..1; only the first [`NavInput::HOST_COUNT`] are host owned.
    pub nav_inputs: [f32; NavInput::COUNT],
    /// Characters typed this frame.
    pub input_characters: Vec<char>,

    /// Set when the UI wants exclusive use of the mouse.
    pub want_capture_mouse: bool,
    /// Set when the UI wants exclusive use of the keyboard.
    pub want_capture_keyboard: bool,
    /// Set when a text field is active.
    pub want_text_input: bool,
    /// Set when navigation asks the host to move the mouse to [`Io::mouse_pos`].
    pub want_set_mouse_pos: bool,
    /// Set when settings changed and no ini file is configured; the host should call
    /// `save_ini_settings_to_memory` and clear the flag.
    pub want_save_ini_settings: bool,
    /// Navigation is currently processing inputs.
    pub nav_active: bool,
    /// The navigation cursor is visible.
    pub nav_visible: bool,
    /// Frames per second averaged over the last 120 frames.
    pub framerate: f32,
    /// Windows submitted this frame.
    pub metrics_active_windows: usize,

    /// Mouse position of the previous frame.
    pub mouse_pos_prev: Vec2f,
    /// Mouse movement since the previous frame.
    pub mouse_delta: Vec2f,
    /// Buttons pressed this frame.
    pub mouse_clicked: [bool; MouseButton::COUNT],
    /// Buttons double-clicked this frame.
    pub mouse_double_clicked: [bool; MouseButton::COUNT],
    /// Buttons released this frame.
    pub mouse_released: [bool; MouseButton::COUNT],
    /// Position of the last press of each button.
    pub mouse_clicked_pos: [Vec2f; MouseButton::COUNT],
    /// Time of the last press of each button.
    pub mouse_clicked_time: [f64; MouseButton::COUNT],
    /// Buttons whose press started over a UI window.
    pub mouse_down_owned: [bool; MouseButton::COUNT],
    /// The current press of each button started with a double-click.
    pub mouse_down_was_double_click: [bool; MouseButton::COUNT],
    /// Seconds each button has been held, negative when released.
    pub mouse_down_duration: [f32; MouseButton::COUNT],
    /// Previous value of [`Io::mouse_down_duration`].
    pub mouse_down_duration_prev: [f32; MouseButton::COUNT],
    /// Squared maximum distance travelled from the press position.
    pub mouse_drag_max_distance_sqr: [f32; MouseButton::COUNT],
    /// Active modifiers as flags.
    pub key_mods: KeyModFlags,
    /// Seconds each key has been held, negative when released.
    pub keys_down_duration: [f32; Key::COUNT],
    /// Previous value of [`Io::keys_down_duration`].
    pub keys_down_duration_prev: [f32; Key::COUNT],
    /// Seconds each nav input has been held, negative when released.
    pub nav_inputs_down_duration: [f32; NavInput::COUNT],
    /// Previous value of [`Io::nav_inputs_down_duration`].
    pub nav_inputs_down_duration_prev: [f32; NavInput::COUNT],
}

impl Default for Io {
    fn default() -> Self {
        Self {
            config_flags: ConfigFlags::empty(),
            display_size: vec2(-1.0, -1.0),
            delta_time: 1.0 / 60.0,
            ini_filename: Some(PathBuf::from("anchor.ini")),
            ini_saving_rate: 5.0,
            mouse_double_click_time: 0.30,
            mouse_double_click_max_dist: 6.0,
            mouse_drag_threshold: 6.0,
            key_repeat_delay: 0.275,
            key_repeat_rate: 0.050,
            config_windows_resize_from_edges: true,
            config_windows_move_from_title_bar_only: false,
            config_memory_compact_timer: 60.0,

            mouse_pos: Io::mouse_pos_invalid(),
            mouse_buttons: [false; MouseButton::COUNT],
            mouse_wheel: 0.0,
            mouse_wheel_h: 0.0,
            key_ctrl: false,
            key_shift: false,
            key_alt: false,
            key_super: false,
            keys: [false; Key::COUNT],
            nav_inputs: [0.0; NavInput::COUNT],
            input_characters: Vec::new(),

            want_capture_mouse: false,
            want_capture_keyboard: false,
            want_text_input: false,
            want_set_mouse_pos: false,
            want_save_ini_settings: false,
            nav_active: false,
            nav_visible: false,
            framerate: 0.0,
            metrics_active_windows: 0,

            mouse_pos_prev: Io::mouse_pos_invalid(),
            mouse_delta: vec2(0.0, 0.0),
            mouse_clicked: [false; MouseButton::COUNT],
            mouse_double_clicked: [false; MouseButton::COUNT],
            mouse_released: [false; MouseButton::COUNT],
            mouse_clicked_pos: [vec2(0.0, 0.0); MouseButton::COUNT],
            mouse_clicked_time: [-f64::MAX; MouseButton::COUNT],
            mouse_down_owned: [false; MouseButton::COUNT],
            mouse_down_was_double_click: [false; MouseButton::COUNT],
            mouse_down_duration: [-1.0; MouseButton::COUNT],
            mouse_down_duration_prev: [-1.0; MouseButton::COUNT],
            mouse_drag_max_distance_sqr: [0.0; MouseButton::COUNT],
            key_mods: KeyModFlags::empty(),
            keys_down_duration: [-1.0; Key::COUNT],
            keys_down_duration_prev: [-1.0; Key::COUNT],
            nav_inputs_down_duration: [-1.0; NavInput::COUNT],
            nav_inputs_down_duration_prev: [-1.0; NavInput::COUNT],
        }
    }
}

/// Number of repeats a key held from `t0` to `t1` seconds produces.
pub(crate) fn calc_typematic_repeat_amount(t0: f32, t1: f32, repeat_delay: f32, repeat_rate: f32) -> i32 {
    if t1 == 0.0 {
        return 1;
    }
    if t0 >= t1 {
        return 0;
    }
    if repeat_rate <= 0.0 {
        return ((t0 < repeat_delay) && (t1 >= repeat_delay)) as i32;
    }
    let count_t0 = if t0 < repeat_delay { -1 } else { ((t0 - repeat_delay) / repeat_rate) as i32 };
    let count_t1 = if t1 < repeat_delay { -1 } else { ((t1 - repeat_delay) / repeat_rate) as i32 };
    count_t1 - count_t0
}

pub(crate) fn is_mouse_pos_valid(p: Vec2f) -> bool {
    const MOUSE_INVALID: f32 = -256000.0;
    p.x >= MOUSE_INVALID && p.y >= MOUSE_INVALID
}

impl Io {
    /// The value of [`Io::mouse_pos`] when the mouse is unavailable.
    pub fn mouse_pos_invalid() -> Vec2f { vec2(MOUSE_POS_INVALID, MOUSE_POS_INVALID) }

    /// Updates the current mouse pointer position.
    pub fn mouse_move(&mut self, x: f32, y: f32) { self.mouse_pos = vec2(x, y); }

    /// Marks the mouse as unavailable (pointer left the host window).
    pub fn mouse_leave(&mut self) { self.mouse_pos = Io::mouse_pos_invalid(); }

    /// Records that `btn` is held.
    pub fn mouse_down(&mut self, btn: MouseButton) { self.mouse_buttons[btn.index()] = true; }

    /// Records that `btn` was released.
    pub fn mouse_up(&mut self, btn: MouseButton) { self.mouse_buttons[btn.index()] = false; }

    /// Accumulates scroll wheel movement; positive `y` scrolls up.
    pub fn scroll(&mut self, x: f32, y: f32) {
        self.mouse_wheel_h += x;
        self.mouse_wheel += y;
    }

    /// Records that a key is held.
    pub fn key_down(&mut self, key: Key) { self.keys[key.index()] = true; }

    /// Records that a key was released.
    pub fn key_up(&mut self, key: Key) { self.keys[key.index()] = false; }

    /// Sets the modifier state.
    pub fn set_key_mods(&mut self, mods: KeyModFlags) {
        self.key_ctrl = mods.contains(KeyModFlags::CTRL);
        self.key_shift = mods.contains(KeyModFlags::SHIFT);
        self.key_alt = mods.contains(KeyModFlags::ALT);
        self.key_super = mods.contains(KeyModFlags::SUPER);
    }

    /// Sets a gamepad navigation input, `value` in 0..1.
    pub fn set_nav_input(&mut self, input: NavInput, value: f32) {
        assert!(input.index() < NavInput::HOST_COUNT, "{:?} is derived from the keyboard and cannot be set", input);
        self.nav_inputs[input.index()] = value;
    }

    /// Queues a typed character.
    pub fn add_input_character(&mut self, c: char) { self.input_characters.push(c); }

    /// Returns `true` if the mouse button is held.
    pub fn is_mouse_button_down(&self, btn: MouseButton) -> bool { self.mouse_buttons[btn.index()] }

    /// Derives clicks, double-clicks, releases and drag distances from the raw button state.
    /// Returns `true` when the mouse moved or a button was pressed.
    pub(crate) fn update_mouse_inputs(&mut self, time: f64) -> bool {
        let mut woke_mouse = false;
        if is_mouse_pos_valid(self.mouse_pos) {
            self.mouse_pos = vec2_floor(self.mouse_pos);
        }
        if is_mouse_pos_valid(self.mouse_pos) && is_mouse_pos_valid(self.mouse_pos_prev) {
            self.mouse_delta = self.mouse_pos - self.mouse_pos_prev;
        } else {
            self.mouse_delta = vec2(0.0, 0.0);
        }
        if self.mouse_delta.x != 0.0 || self.mouse_delta.y != 0.0 {
            woke_mouse = true;
        }
        self.mouse_pos_prev = self.mouse_pos;

        for i in 0..MouseButton::COUNT {
            let down = self.mouse_buttons[i];
            self.mouse_clicked[i] = down && self.mouse_down_duration[i] < 0.0;
            self.mouse_released[i] = !down && self.mouse_down_duration[i] >= 0.0;
            self.mouse_down_duration_prev[i] = self.mouse_down_duration[i];
            self.mouse_down_duration[i] = if down {
                if self.mouse_down_duration[i] < 0.0 { 0.0 } else { self.mouse_down_duration[i] + self.delta_time }
            } else {
                -1.0
            };
            self.mouse_double_clicked[i] = false;
            if self.mouse_clicked[i] {
                if ((time - self.mouse_clicked_time[i]) as f32) < self.mouse_double_click_time {
                    let delta_from_click = if is_mouse_pos_valid(self.mouse_pos) { self.mouse_pos - self.mouse_clicked_pos[i] } else { vec2(0.0, 0.0) };
                    if vec2_length_sqr(delta_from_click) < self.mouse_double_click_max_dist * self.mouse_double_click_max_dist {
                        self.mouse_double_clicked[i] = true;
                    }
                    // a third click must not register as another double-click
                    self.mouse_clicked_time[i] = -(self.mouse_double_click_time as f64) * 2.0;
                } else {
                    self.mouse_clicked_time[i] = time;
                }
                self.mouse_clicked_pos[i] = self.mouse_pos;
                self.mouse_down_was_double_click[i] = self.mouse_double_clicked[i];
                self.mouse_drag_max_distance_sqr[i] = 0.0;
                woke_mouse = true;
            } else if down {
                let delta_from_click = if is_mouse_pos_valid(self.mouse_pos) { self.mouse_pos - self.mouse_clicked_pos[i] } else { vec2(0.0, 0.0) };
                self.mouse_drag_max_distance_sqr[i] = self.mouse_drag_max_distance_sqr[i].max(vec2_length_sqr(delta_from_click));
            }
            if !down && !self.mouse_released[i] {
                self.mouse_down_was_double_click[i] = false;
            }
        }
        woke_mouse
    }

    pub(crate) fn update_keyboard_inputs(&mut self) {
        self.key_mods = KeyModFlags::empty();
        if self.key_ctrl {
            self.key_mods |= KeyModFlags::CTRL;
        }
        if self.key_shift {
            self.key_mods |= KeyModFlags::SHIFT;
        }
        if self.key_alt {
            self.key_mods |= KeyModFlags::ALT;
        }
        if self.key_super {
            self.key_mods |= KeyModFlags::SUPER;
        }
        self.keys_down_duration_prev = self.keys_down_duration;
        for i in 0..Key::COUNT {
            self.keys_down_duration[i] = if self.keys[i] {
                if self.keys_down_duration[i] < 0.0 { 0.0 } else { self.keys_down_duration[i] + self.delta_time }
            } else {
                -1.0
            };
        }
    }

    pub(crate) fn update_nav_input_durations(&mut self) {
        self.nav_inputs_down_duration_prev = self.nav_inputs_down_duration;
        for i in 0..NavInput::COUNT {
            self.nav_inputs_down_duration[i] = if self.nav_inputs[i] > 0.0 {
                if self.nav_inputs_down_duration[i] < 0.0 { 0.0 } else { self.nav_inputs_down_duration[i] + self.delta_time }
            } else {
                -1.0
            };
        }
    }

    /// Clears the per-frame input once the frame has consumed it.
    pub(crate) fn epilogue(&mut self) {
        self.mouse_wheel = 0.0;
        self.mouse_wheel_h = 0.0;
        self.input_characters.clear();
        self.nav_inputs = [0.0; NavInput::COUNT];
    }
}

impl Context {
    /// Returns `true` while `key` is held.
    pub fn is_key_down(&self, key: Key) -> bool { self.io.keys[key.index()] }

    /// Returns `true` when `key` was pressed this frame, or repeats when `repeat` is set.
    pub fn is_key_pressed(&self, key: Key, repeat: bool) -> bool {
        let t = self.io.keys_down_duration[key.index()];
        if t == 0.0 {
            return true;
        }
        if repeat && t > self.io.key_repeat_delay {
            return self.get_key_pressed_amount(key, self.io.key_repeat_delay, self.io.key_repeat_rate) > 0;
        }
        false
    }

    /// Returns `true` when `key` was released this frame.
    pub fn is_key_released(&self, key: Key) -> bool { self.io.keys_down_duration_prev[key.index()] >= 0.0 && !self.io.keys[key.index()] }

    /// Number of presses (including repeats) `key` produced this frame.
    pub fn get_key_pressed_amount(&self, key: Key, repeat_delay: f32, repeat_rate: f32) -> i32 {
        let t = self.io.keys_down_duration[key.index()];
        calc_typematic_repeat_amount(t - self.io.delta_time, t, repeat_delay, repeat_rate)
    }

    /// Returns `true` while `btn` is held.
    pub fn is_mouse_down(&self, btn: MouseButton) -> bool { self.io.mouse_buttons[btn.index()] }

    /// Returns `true` if any mouse button is held.
    pub fn is_any_mouse_down(&self) -> bool { self.io.mouse_buttons.iter().any(|&d| d) }

    /// Returns `true` when `btn` was pressed this frame, or repeats when `repeat` is set.
    pub fn is_mouse_clicked(&self, btn: MouseButton, repeat: bool) -> bool {
        let t = self.io.mouse_down_duration[btn.index()];
        if t == 0.0 {
            return true;
        }
        if repeat && t > self.io.key_repeat_delay {
            return calc_typematic_repeat_amount(t - self.io.delta_time, t, self.io.key_repeat_delay, self.io.key_repeat_rate) > 0;
        }
        false
    }

    /// Returns `true` when `btn` was released this frame.
    pub fn is_mouse_released(&self, btn: MouseButton) -> bool { self.io.mouse_released[btn.index()] }

    /// Returns `true` when `btn` was double-clicked this frame.
    pub fn is_mouse_double_clicked(&self, btn: MouseButton) -> bool { self.io.mouse_double_clicked[btn.index()] }

    /// Returns `true` while `btn` is held and the mouse travelled past `lock_threshold`
    /// (negative uses [`Io::mouse_drag_threshold`]).
    pub fn is_mouse_dragging(&self, btn: MouseButton, lock_threshold: f32) -> bool {
        if !self.io.mouse_buttons[btn.index()] {
            return false;
        }
        self.is_mouse_drag_past_threshold(btn, lock_threshold)
    }

    pub(crate) fn is_mouse_drag_past_threshold(&self, btn: MouseButton, lock_threshold: f32) -> bool {
        let threshold = if lock_threshold < 0.0 { self.io.mouse_drag_threshold } else { lock_threshold };
        self.io.mouse_drag_max_distance_sqr[btn.index()] >= threshold * threshold
    }

    /// Current mouse position.
    pub fn get_mouse_pos(&self) -> Vec2f { self.io.mouse_pos }

    /// Returns `true` if `pos` (or the current mouse position) is a real position.
    pub fn is_mouse_pos_valid(&self, pos: Option<Vec2f>) -> bool { is_mouse_pos_valid(pos.unwrap_or(self.io.mouse_pos)) }

    /// Distance dragged since `btn` was pressed, zero until past `lock_threshold`.
    pub fn get_mouse_drag_delta(&self, btn: MouseButton, lock_threshold: f32) -> Vec2f {
        let i = btn.index();
        if (self.io.mouse_buttons[i] || self.io.mouse_released[i])
            && self.is_mouse_drag_past_threshold(btn, lock_threshold)
            && is_mouse_pos_valid(self.io.mouse_pos)
            && is_mouse_pos_valid(self.io.mouse_clicked_pos[i])
        {
            return self.io.mouse_pos - self.io.mouse_clicked_pos[i];
        }
        vec2(0.0, 0.0)
    }

    /// Restarts the drag measurement of `btn` from the current position.
    pub fn reset_mouse_drag_delta(&mut self, btn: MouseButton) { self.io.mouse_clicked_pos[btn.index()] = self.io.mouse_pos; }

    /// Returns `true` if the mouse is inside `[r_min, r_max)`, optionally clipped by the current window.
    pub fn is_mouse_hovering_rect(&self, r_min: Vec2f, r_max: Vec2f, clip: bool) -> bool {
        let mut rect_clipped = Rect::new(r_min, r_max);
        if clip {
            if let Some(w) = self.current_window {
                rect_clipped.clip_with(&self.windows[w.0].clip_rect);
            }
        }
        let mut rect_for_touch = rect_clipped;
        rect_for_touch.expand_xy(self.style.touch_extra_padding);
        rect_for_touch.contains(self.io.mouse_pos)
    }

    /// Cursor shape requested for this frame.
    pub fn get_mouse_cursor(&self) -> Option<MouseCursor> { self.mouse_cursor }

    /// Requests a cursor shape for this frame.
    pub fn set_mouse_cursor(&mut self, cursor: Option<MouseCursor>) { self.mouse_cursor = cursor; }

    /// Forces [`Io::want_capture_keyboard`] for the next frame.
    pub fn capture_keyboard_from_app(&mut self, want: bool) { self.want_capture_keyboard_next_frame = Some(want); }

    /// Forces [`Io::want_capture_mouse`] for the next frame.
    pub fn capture_mouse_from_app(&mut self, want: bool) { self.want_capture_mouse_next_frame = Some(want); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typematic_repeat() {
        assert_eq!(calc_typematic_repeat_amount(0.0, 0.0, 0.5, 0.1), 1);
        assert_eq!(calc_typematic_repeat_amount(0.1, 0.2, 0.5, 0.1), 0);
        assert_eq!(calc_typematic_repeat_amount(0.45, 0.55, 0.5, 0.1), 1);
        assert_eq!(calc_typematic_repeat_amount(0.45, 0.55, 0.5, 0.0), 1);
        assert_eq!(calc_typematic_repeat_amount(0.55, 0.65, 0.5, 0.0), 0);
    }

    #[test]
    fn click_then_double_click() {
        let mut io = Io::default();
        io.delta_time = 0.016;
        io.mouse_move(10.0, 10.0);
        io.mouse_down(MouseButton::Left);
        io.update_mouse_inputs(1.0);
        assert!(io.mouse_clicked[0]);
        assert!(!io.mouse_double_clicked[0]);
        io.mouse_up(MouseButton::Left);
        io.update_mouse_inputs(1.05);
        assert!(io.mouse_released[0]);
        io.mouse_down(MouseButton::Left);
        io.update_mouse_inputs(1.1);
        assert!(io.mouse_double_clicked[0]);
        assert!(io.mouse_down_was_double_click[0]);
    }

    #[test]
    fn slow_second_click_is_not_double() {
        let mut io = Io::default();
        io.mouse_move(10.0, 10.0);
        io.mouse_down(MouseButton::Left);
        io.update_mouse_inputs(1.0);
        io.mouse_up(MouseButton::Left);
        io.update_mouse_inputs(1.1);
        io.mouse_down(MouseButton::Left);
        io.update_mouse_inputs(2.0);
        assert!(io.mouse_clicked[0]);
        assert!(!io.mouse_double_clicked[0]);
    }

    #[test]
    fn drag_distance_tracks_maximum() {
        let mut io = Io::default();
        io.mouse_move(0.0, 0.0);
        io.mouse_down(MouseButton::Right);
        io.update_mouse_inputs(0.0);
        io.mouse_move(3.0, 4.0);
        io.update_mouse_inputs(0.1);
        io.mouse_move(1.0, 0.0);
        io.update_mouse_inputs(0.2);
        assert_eq!(io.mouse_drag_max_distance_sqr[1], 25.0);
        assert_eq!(io.mouse_delta.x, -2.0);
    }

    #[test]
    fn key_durations() {
        let mut io = Io::default();
        io.delta_time = 0.1;
        io.key_down(Key::Tab);
        io.update_keyboard_inputs();
        assert_eq!(io.keys_down_duration[Key::Tab.index()], 0.0);
        io.update_keyboard_inputs();
        assert!((io.keys_down_duration[Key::Tab.index()] - 0.1).abs() < 1e-6);
        io.key_up(Key::Tab);
        io.update_keyboard_inputs();
        assert_eq!(io.keys_down_duration[Key::Tab.index()], -1.0);
        assert!(io.keys_down_duration_prev[Key::Tab.index()] > 0.0);
    }

    #[test]
    #[should_panic]
    fn keyboard_nav_inputs_are_not_host_owned() {
        let mut io = Io::default();
        io.set_nav_input(NavInput::KeyLeft, 1.0);
    }
}
