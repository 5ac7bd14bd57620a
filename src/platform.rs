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
//! Narrow interfaces to the host platform.
//!
//! The engine never talks to the OS; hosts implement these traits (or use the in-memory defaults)
//! and feed the results into [`Io`].

use std::time::Instant;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Outcome of a platform request.
pub enum Status {
    /// The request was honoured.
    Success,
    /// The request was refused.
    Failure,
}

impl Status {
    /// Returns `true` for [`Status::Success`].
    pub fn is_success(self) -> bool { self == Status::Success }
}

impl From<bool> for Status {
    fn from(ok: bool) -> Self { if ok { Status::Success } else { Status::Failure } }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Opaque handle of a host (OS) window.
pub struct OsWindowId(pub u64);

/// Bookkeeping of host windows: registration, activation and full-screen state.
pub trait PlatformWindowManager {
    /// Registers a window; fails if it is already known.
    fn add_window(&mut self, window: OsWindowId) -> Status;
    /// Unregisters a window; fails if it is unknown.
    fn remove_window(&mut self, window: OsWindowId) -> Status;
    /// Window receiving input.
    fn get_active_window(&self) -> Option<OsWindowId>;
    /// Makes a registered window active.
    fn set_active_window(&mut self, window: OsWindowId) -> Status;
    /// Switches `window` to full screen; fails if another window already is.
    fn begin_full_screen(&mut self, window: OsWindowId) -> Status;
    /// Leaves full screen, restoring the previously active window.
    fn end_full_screen(&mut self) -> Status;
}

#[derive(Clone, Debug, Default)]
/// Default [`PlatformWindowManager`] keeping the registration state in memory.
pub struct WindowManager {
    windows: Vec<OsWindowId>,
    active: Option<OsWindowId>,
    full_screen: Option<OsWindowId>,
    active_before_full_screen: Option<OsWindowId>,
}

impl WindowManager {
    /// Creates an empty manager.
    pub fn new() -> Self { Self::default() }

    /// Returns `true` if `window` is registered or is the full-screen window.
    pub fn is_window_found(&self, window: OsWindowId) -> bool { self.full_screen == Some(window) || self.windows.contains(&window) }

    /// Returns `true` while a window is full screen.
    pub fn is_full_screen(&self) -> bool { self.full_screen.is_some() }

    /// Registered windows in registration order.
    pub fn windows(&self) -> &[OsWindowId] { &self.windows }

    fn set_window_inactive(&mut self, window: OsWindowId) {
        if self.active == Some(window) {
            self.active = None;
        }
    }
}

impl PlatformWindowManager for WindowManager {
    fn add_window(&mut self, window: OsWindowId) -> Status {
        if self.is_window_found(window) {
            return Status::Failure;
        }
        self.windows.push(window);
        Status::Success
    }

    fn remove_window(&mut self, window: OsWindowId) -> Status {
        if self.full_screen == Some(window) {
            return self.end_full_screen();
        }
        match self.windows.iter().position(|w| *w == window) {
            Some(pos) => {
                self.set_window_inactive(window);
                self.windows.remove(pos);
                Status::Success
            }
            None => Status::Failure,
        }
    }

    fn get_active_window(&self) -> Option<OsWindowId> { self.active }

    fn set_active_window(&mut self, window: OsWindowId) -> Status {
        if self.active == Some(window) {
            return Status::Success;
        }
        if !self.is_window_found(window) {
            return Status::Failure;
        }
        self.active = Some(window);
        Status::Success
    }

    fn begin_full_screen(&mut self, window: OsWindowId) -> Status {
        if self.is_full_screen() {
            return Status::Failure;
        }
        self.full_screen = Some(window);
        self.active_before_full_screen = self.active;
        self.active = Some(window);
        Status::Success
    }

    fn end_full_screen(&mut self) -> Status {
        let window = match self.full_screen.take() {
            Some(window) => window,
            None => return Status::Failure,
        };
        self.set_window_inactive(window);
        if let Some(previous) = self.active_before_full_screen.take() {
            self.set_active_window(previous);
        }
        Status::Success
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Input event produced by the host event loop.
pub enum Event {
    /// The pointer moved.
    CursorMove {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// The pointer left the host window.
    CursorLeave,
    /// A mouse button was pressed.
    ButtonDown(MouseButton),
    /// A mouse button was released.
    ButtonUp(MouseButton),
    /// The wheel moved.
    Wheel {
        /// Horizontal delta.
        x: f32,
        /// Vertical delta.
        y: f32,
    },
    /// A key was pressed.
    KeyDown(Key),
    /// A key was released.
    KeyUp(Key),
    /// Modifier state changed.
    Modifiers(KeyModFlags),
    /// A character was typed.
    Char(char),
    /// The host window was resized.
    WindowSize {
        /// New width.
        width: f32,
        /// New height.
        height: f32,
    },
}

/// Receiver of host events.
pub trait EventConsumer {
    /// Handles `event`; returns `true` when it was consumed.
    fn process_event(&mut self, event: &Event) -> bool;
}

impl EventConsumer for Io {
    fn process_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::CursorMove { x, y } => self.mouse_move(x, y),
            Event::CursorLeave => self.mouse_leave(),
            Event::ButtonDown(btn) => self.mouse_down(btn),
            Event::ButtonUp(btn) => self.mouse_up(btn),
            Event::Wheel { x, y } => self.scroll(x, y),
            Event::KeyDown(key) => self.key_down(key),
            Event::KeyUp(key) => self.key_up(key),
            Event::Modifiers(mods) => self.set_key_mods(mods),
            Event::Char(c) => self.add_input_character(c),
            Event::WindowSize { width, height } => self.display_size = vec2(width, height),
        }
        true
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Registration handle returned by [`EventQueue::add_event_consumer`].
pub struct ConsumerHandle(usize);

#[derive(Default)]
/// Queue of pending host events and the consumers they are dispatched to.
pub struct EventQueue {
    events: Vec<Event>,
    consumers: Vec<(ConsumerHandle, Box<dyn EventConsumer>)>,
    next_handle: usize,
}

impl EventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self { Self::default() }

    /// Registers a consumer.
    pub fn add_event_consumer(&mut self, consumer: Box<dyn EventConsumer>) -> ConsumerHandle {
        let handle = ConsumerHandle(self.next_handle);
        self.next_handle += 1;
        self.consumers.push((handle, consumer));
        handle
    }

    /// Unregisters a consumer.
    pub fn remove_event_consumer(&mut self, handle: ConsumerHandle) -> Status {
        match self.consumers.iter().position(|(h, _)| *h == handle) {
            Some(pos) => {
                self.consumers.remove(pos);
                Status::Success
            }
            None => Status::Failure,
        }
    }

    /// Queues an event.
    pub fn push_event(&mut self, event: Event) { self.events.push(event); }

    /// Number of queued events.
    pub fn len(&self) -> usize { self.events.len() }

    /// Returns `true` when no event is queued.
    pub fn is_empty(&self) -> bool { self.events.is_empty() }

    /// Hands every queued event to every consumer, in registration order, then to `io`.
    pub fn dispatch_events(&mut self, io: &mut Io) {
        for event in self.events.drain(..) {
            for (_, consumer) in self.consumers.iter_mut() {
                consumer.process_event(&event);
            }
            io.process_event(&event);
        }
    }
}

/// Monotonic time source.
pub trait SystemClock {
    /// Milliseconds elapsed since an arbitrary fixed origin.
    fn get_milli_seconds(&self) -> u64;
}

/// Display geometry query.
pub trait DisplayInfo {
    /// Number of attached displays.
    fn get_num_displays(&self) -> u8;
    /// Size of the main display in pixels.
    fn get_main_display_dimensions(&self) -> (u32, u32);
}

#[derive(Clone, Debug)]
/// Clock and display provider for headless hosts and tests.
pub struct HeadlessSystem {
    start: Instant,
    display: (u32, u32),
}

impl HeadlessSystem {
    /// Creates a system reporting a single display of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            start: Instant::now(),
            display: (width, height),
        }
    }
}

impl SystemClock for HeadlessSystem {
    fn get_milli_seconds(&self) -> u64 { self.start.elapsed().as_millis() as u64 }
}

impl DisplayInfo for HeadlessSystem {
    fn get_num_displays(&self) -> u8 { 1 }
    fn get_main_display_dimensions(&self) -> (u32, u32) { self.display }
}

/// Text clipboard.
pub trait Clipboard {
    /// Current clipboard text; empty when unavailable.
    fn get_text(&mut self) -> String;
    /// Replaces the clipboard text.
    fn set_text(&mut self, text: &str);
}

#[derive(Clone, Debug, Default)]
/// Clipboard living in memory, private to the context.
pub struct MemoryClipboard {
    text: String,
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> String { self.text.clone() }
    fn set_text(&mut self, text: &str) { self.text = text.to_string(); }
}

/// Receives the position where the input method editor should show its candidate window.
pub trait ImeHandler {
    /// Called when the text cursor of the active text input moved.
    fn set_ime_pos(&mut self, pos: Vec2f);
}

impl Context {
    /// Installs the clipboard used by text widgets.
    pub fn set_clipboard(&mut self, clipboard: Box<dyn Clipboard>) { self.clipboard = clipboard; }

    /// Reads the clipboard text.
    pub fn get_clipboard_text(&mut self) -> String { self.clipboard.get_text() }

    /// Writes the clipboard text.
    pub fn set_clipboard_text(&mut self, text: &str) { self.clipboard.set_text(text); }

    /// Installs the IME position hook.
    pub fn set_ime_handler(&mut self, handler: Option<Box<dyn ImeHandler>>) { self.ime_handler = handler; }

    /// Requests the IME candidate window at `pos`; forwarded to the hook at the end of the frame.
    pub fn set_ime_pos(&mut self, pos: Vec2f) { self.platform_ime_pos = Some(pos); }

    pub(crate) fn update_ime_pos(&mut self) {
        if let (Some(pos), Some(handler)) = (self.platform_ime_pos, self.ime_handler.as_mut()) {
            let changed = match self.platform_ime_last_pos {
                Some(last) => (last.x - pos.x).abs() > 0.0001 || (last.y - pos.y).abs() > 0.0001,
                None => true,
            };
            if changed {
                handler.set_ime_pos(pos);
                self.platform_ime_last_pos = Some(pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn window_manager_registration() {
        let mut wm = WindowManager::new();
        let a = OsWindowId(1);
        let b = OsWindowId(2);
        assert!(wm.add_window(a).is_success());
        assert_eq!(wm.add_window(a), Status::Failure);
        assert_eq!(wm.set_active_window(b), Status::Failure);
        assert!(wm.add_window(b).is_success());
        assert!(wm.set_active_window(b).is_success());
        assert_eq!(wm.get_active_window(), Some(b));
        assert!(wm.remove_window(b).is_success());
        assert_eq!(wm.get_active_window(), None);
        assert_eq!(wm.remove_window(b), Status::Failure);
    }

    #[test]
    fn full_screen_restores_previous_active() {
        let mut wm = WindowManager::new();
        let a = OsWindowId(1);
        let fs = OsWindowId(9);
        wm.add_window(a);
        wm.set_active_window(a);
        assert!(wm.begin_full_screen(fs).is_success());
        assert_eq!(wm.get_active_window(), Some(fs));
        assert_eq!(wm.begin_full_screen(a), Status::Failure);
        assert!(wm.end_full_screen().is_success());
        assert_eq!(wm.get_active_window(), Some(a));
        assert_eq!(wm.end_full_screen(), Status::Failure);
    }

    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl EventConsumer for Recorder {
        fn process_event(&mut self, event: &Event) -> bool {
            self.0.borrow_mut().push(event.clone());
            false
        }
    }

    #[test]
    fn events_reach_consumers_and_io() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut queue = EventQueue::new();
        let handle = queue.add_event_consumer(Box::new(Recorder(seen.clone())));
        queue.push_event(Event::CursorMove { x: 5.0, y: 6.0 });
        queue.push_event(Event::ButtonDown(MouseButton::Left));
        queue.push_event(Event::Char('x'));
        let mut io = Io::default();
        queue.dispatch_events(&mut io);
        assert!(queue.is_empty());
        assert_eq!(seen.borrow().len(), 3);
        assert_eq!(io.mouse_pos.x, 5.0);
        assert!(io.is_mouse_button_down(MouseButton::Left));
        assert_eq!(io.input_characters, vec!['x']);
        assert!(queue.remove_event_consumer(handle).is_success());
        assert_eq!(queue.remove_event_consumer(handle), Status::Failure);
    }

    #[test]
    fn memory_clipboard_round_trip() {
        let mut ctx = Context::new(Box::new(MonoFont::default()));
        assert_eq!(ctx.get_clipboard_text(), "");
        ctx.set_clipboard_text("copied");
        assert_eq!(ctx.get_clipboard_text(), "copied");
    }

    #[test]
    fn headless_system_reports_display() {
        let sys = HeadlessSystem::new(1920, 1080);
        assert_eq!(sys.get_main_display_dimensions(), (1920, 1080));
        assert_eq!(sys.get_num_displays(), 1);
        let t0 = sys.get_milli_seconds();
        assert!(sys.get_milli_seconds() >= t0);
    }
}
