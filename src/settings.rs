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
use std::path::Path;

use crate::*;

/// Serializer for one category of persisted state, stored as `[TypeName][EntryName]` blocks of
/// `key=value` lines in the ini text.
///
/// Handlers receive the context they are registered in. While a callback runs the handler is
/// detached from the context, so it must not register or remove handlers itself.
pub trait SettingsHandler {
    /// Name used in the `[TypeName]` part of entry headers.
    fn type_name(&self) -> &str;

    /// Forgets every loaded entry. Called by [`Context::clear_ini_settings`].
    fn clear_all(&mut self, _ctx: &mut Context) {}

    /// Called before any line of a new ini text is read.
    fn read_init(&mut self, _ctx: &mut Context) {}

    /// Opens the entry `name`. Returning `false` skips the lines of the block.
    fn read_open(&mut self, ctx: &mut Context, name: &str) -> bool;

    /// One line of the entry opened last.
    fn read_line(&mut self, ctx: &mut Context, line: &str);

    /// Called once the whole text was read.
    fn apply_all(&mut self, _ctx: &mut Context) {}

    /// Appends every entry of this handler to `out`.
    fn write_all(&mut self, ctx: &mut Context, out: &mut String);
}

/// Persists window position, size and collapsed state.
#[derive(Default)]
struct WindowSettingsHandler {
    entry: Option<usize>,
}

fn parse_i16_pair(value: &str) -> Option<(i16, i16)> {
    let (x, y) = value.split_once(',')?;
    let x: i32 = x.trim().parse().ok()?;
    let y: i32 = y.trim().parse().ok()?;
    Some((x as i16, y as i16))
}

impl SettingsHandler for WindowSettingsHandler {
    fn type_name(&self) -> &str { "Window" }

    fn clear_all(&mut self, ctx: &mut Context) {
        for w in ctx.windows.iter_mut() {
            w.settings_offset = None;
        }
        ctx.settings_windows.clear();
        self.entry = None;
    }

    fn read_open(&mut self, ctx: &mut Context, name: &str) -> bool {
        let offset = ctx.find_or_create_window_settings(name);
        // a recycled entry starts over
        let s = &mut ctx.settings_windows[offset];
        let (id, name) = (s.id, std::mem::take(&mut s.name));
        *s = WindowSettings {
            name,
            id,
            want_apply: true,
            ..Default::default()
        };
        self.entry = Some(offset);
        true
    }

    fn read_line(&mut self, ctx: &mut Context, line: &str) {
        let Some(offset) = self.entry else { return };
        let s = &mut ctx.settings_windows[offset];
        match line.split_once('=') {
            Some(("Pos", v)) => {
                if let Some(pos) = parse_i16_pair(v) {
                    s.pos = pos;
                }
            }
            Some(("Size", v)) => {
                if let Some(size) = parse_i16_pair(v) {
                    s.size = size;
                }
            }
            Some(("Collapsed", v)) => {
                if let Ok(c) = v.trim().parse::<i32>() {
                    s.collapsed = c != 0;
                }
            }
            _ => {}
        }
    }

    fn apply_all(&mut self, ctx: &mut Context) {
        self.entry = None;
        for offset in 0..ctx.settings_windows.len() {
            if !ctx.settings_windows[offset].want_apply {
                continue;
            }
            if let Some(idx) = ctx.find_window_by_id(ctx.settings_windows[offset].id) {
                ctx.apply_window_settings(idx, offset);
            }
            ctx.settings_windows[offset].want_apply = false;
        }
    }

    fn write_all(&mut self, ctx: &mut Context, out: &mut String) {
        // refresh the records of live windows first
        for i in 0..ctx.windows.len() {
            if ctx.windows[i].flags.contains(WindowFlags::NO_SAVED_SETTINGS) {
                continue;
            }
            let offset = match ctx.windows[i].settings_offset {
                Some(offset) => offset,
                None => {
                    let name = ctx.windows[i].name.clone();
                    let offset = ctx.create_new_window_settings(&name);
                    ctx.windows[i].settings_offset = Some(offset);
                    offset
                }
            };
            let w = &ctx.windows[i];
            let s = &mut ctx.settings_windows[offset];
            assert_eq!(s.id, w.id, "window settings out of sync with '{}'", w.name);
            s.pos = (w.pos.x as i16, w.pos.y as i16);
            s.size = (w.size_full.x as i16, w.size_full.y as i16);
            s.collapsed = w.collapsed;
            s.want_apply = false;
        }

        for s in ctx.settings_windows.iter() {
            out.push_str(&format!("[{}][{}]\n", self.type_name(), s.name));
            out.push_str(&format!("Pos={},{}\n", s.pos.0, s.pos.1));
            out.push_str(&format!("Size={},{}\n", s.size.0, s.size.1));
            out.push_str(&format!("Collapsed={}\n", s.collapsed as i32));
            out.push('\n');
        }
    }
}

/// Splits `[Type][Name]`; the name may itself contain brackets.
fn parse_entry_header(line: &str) -> Option<(&str, &str)> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    let (type_name, rest) = inner.split_once(']')?;
    let name_start = rest.find('[')?;
    Some((type_name, &rest[name_start + 1..]))
}

impl Context {
    pub(crate) fn add_window_settings_handler(&mut self) { self.settings_handlers.push(Box::new(WindowSettingsHandler::default())); }

    /// Registers a handler for another category of persisted state.
    ///
    /// Fails when a handler with the same type name is already registered.
    pub fn add_settings_handler(&mut self, handler: Box<dyn SettingsHandler>) -> Result<()> {
        if self.find_settings_handler(handler.type_name()).is_some() {
            return Err(Error::Settings(format!("a handler for [{}] is already registered", handler.type_name())));
        }
        debug!("settings handler [{}] registered", handler.type_name());
        self.settings_handlers.push(handler);
        Ok(())
    }

    /// Unregisters and returns the handler for `type_name`.
    pub fn remove_settings_handler(&mut self, type_name: &str) -> Option<Box<dyn SettingsHandler>> {
        let i = self.find_settings_handler(type_name)?;
        Some(self.settings_handlers.remove(i))
    }

    pub(crate) fn find_settings_handler(&self, type_name: &str) -> Option<usize> { self.settings_handlers.iter().position(|h| h.type_name() == type_name) }

    fn with_settings_handlers(&mut self, mut f: impl FnMut(&mut Self, &mut dyn SettingsHandler)) {
        let mut handlers = std::mem::take(&mut self.settings_handlers);
        for h in handlers.iter_mut() {
            f(self, h.as_mut());
        }
        handlers.append(&mut self.settings_handlers);
        self.settings_handlers = handlers;
    }

    /// Loads the ini file on the first frame and saves it once the dirty timer runs out.
    pub(crate) fn update_settings(&mut self) {
        if !self.settings_loaded {
            if let Some(path) = self.io.ini_filename.clone() {
                match self.load_ini_settings_from_disk(&path) {
                    Ok(()) => {}
                    Err(Error::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                        debug!("no settings file at {}", path.display());
                    }
                    Err(e) => warn!("ignoring settings: {}", e),
                }
            }
            self.settings_loaded = true;
        }

        if self.settings_dirty_timer > 0.0 {
            self.settings_dirty_timer -= self.io.delta_time;
            if self.settings_dirty_timer <= 0.0 {
                match self.io.ini_filename.clone() {
                    Some(path) => {
                        if let Err(e) = self.save_ini_settings_to_disk(&path) {
                            warn!("unable to save settings: {}", e);
                        }
                    }
                    None => self.io.want_save_ini_settings = true,
                }
                self.settings_dirty_timer = 0.0;
            }
        }
    }

    /// Schedules a save in `io.ini_saving_rate` seconds, unless one is already pending.
    pub fn mark_ini_settings_dirty(&mut self) {
        if self.settings_dirty_timer <= 0.0 {
            self.settings_dirty_timer = self.io.ini_saving_rate;
        }
    }

    pub(crate) fn mark_window_settings_dirty(&mut self, idx: WindowIdx) {
        if !self.windows[idx.0].flags.contains(WindowFlags::NO_SAVED_SETTINGS) {
            self.mark_ini_settings_dirty();
        }
    }

    /// Drops every loaded entry of every handler.
    pub fn clear_ini_settings(&mut self) { self.with_settings_handlers(|ctx, h| h.clear_all(ctx)); }

    /// Reads ini text. Unknown sections and malformed lines are skipped.
    ///
    /// Window entries apply to live windows immediately and to the others when they are created.
    pub fn load_ini_settings_from_memory(&mut self, ini: &str) {
        self.with_settings_handlers(|ctx, h| h.read_init(ctx));

        let mut handlers = std::mem::take(&mut self.settings_handlers);
        let mut entry_handler: Option<usize> = None;
        let mut entries = 0;
        for line in ini.split(['\n', '\r']) {
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                let Some((type_name, name)) = parse_entry_header(line) else { continue };
                entry_handler = handlers.iter().position(|h| h.type_name() == type_name);
                if let Some(i) = entry_handler {
                    if handlers[i].read_open(self, name) {
                        entries += 1;
                    } else {
                        entry_handler = None;
                    }
                }
            } else if let Some(i) = entry_handler {
                handlers[i].read_line(self, line);
            }
        }
        handlers.append(&mut self.settings_handlers);
        self.settings_handlers = handlers;

        self.settings_loaded = true;
        self.with_settings_handlers(|ctx, h| h.apply_all(ctx));
        debug!("read {} settings entries", entries);
    }

    /// Writes every handler's entries as ini text and clears the dirty timer.
    pub fn save_ini_settings_to_memory(&mut self) -> String {
        self.settings_dirty_timer = 0.0;
        let mut out = String::new();
        self.with_settings_handlers(|ctx, h| h.write_all(ctx, &mut out));
        out
    }

    /// Reads an ini file.
    pub fn load_ini_settings_from_disk(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let ini = std::fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        self.load_ini_settings_from_memory(&ini);
        info!("settings loaded from {}", path.display());
        Ok(())
    }

    /// Writes the ini file.
    pub fn save_ini_settings_to_disk(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let ini = self.save_ini_settings_to_memory();
        std::fs::write(path, ini).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        info!("settings saved to {}", path.display());
        Ok(())
    }

    /// Persisted window records, live or not.
    pub fn window_settings(&self) -> &[WindowSettings] { &self.settings_windows }

    pub(crate) fn find_window_settings(&self, id: Id) -> Option<usize> { self.settings_windows.iter().position(|s| s.id == id) }

    pub(crate) fn create_new_window_settings(&mut self, name: &str) -> usize {
        // only the part from "###" on takes part in the id
        let name = match name.find("###") {
            Some(p) => &name[p..],
            None => name,
        };
        self.settings_windows.push(WindowSettings::new(name));
        self.settings_windows.len() - 1
    }

    fn find_or_create_window_settings(&mut self, name: &str) -> usize {
        match self.find_window_settings(hash_str(name, Id::NONE)) {
            Some(offset) => offset,
            None => self.create_new_window_settings(name),
        }
    }

    pub(crate) fn apply_window_settings(&mut self, idx: WindowIdx, offset: usize) {
        let s = &self.settings_windows[offset];
        let (pos, size, collapsed) = (s.pos, s.size, s.collapsed);
        let w = &mut self.windows[idx.0];
        w.pos = vec2(pos.0 as f32, pos.1 as f32);
        if size.0 > 0 && size.1 > 0 {
            w.size = vec2(size.0 as f32, size.1 as f32);
            w.size_full = w.size;
        }
        w.collapsed = collapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tool_window(ctx: &mut Context, flags: WindowFlags, place: bool) {
        ctx.frame(|ctx| {
            if place {
                ctx.set_next_window_pos(vec2(30.0, 40.0), Cond::ALWAYS, vec2(0.0, 0.0));
                ctx.set_next_window_size(vec2(200.0, 100.0), Cond::ALWAYS);
            }
            ctx.window("Tool", flags, |_| {});
        });
    }

    #[test]
    fn windows_are_written() {
        let mut ctx = Context::new_headless();
        tool_window(&mut ctx, WindowFlags::empty(), true);
        let ini = ctx.save_ini_settings_to_memory();
        assert!(ini.contains("[Window][Tool]\nPos=30,40\nSize=200,100\nCollapsed=0\n\n"), "{}", ini);
    }

    #[test]
    fn no_saved_settings_windows_are_skipped() {
        let mut ctx = Context::new_headless();
        tool_window(&mut ctx, WindowFlags::NO_SAVED_SETTINGS, true);
        assert!(!ctx.save_ini_settings_to_memory().contains("[Window][Tool]"));
    }

    #[test]
    fn loaded_settings_apply_on_creation() {
        let mut ctx = Context::new_headless();
        ctx.load_ini_settings_from_memory("[Window][Tool]\nPos=50,60\nSize=120,80\nCollapsed=1\n");
        tool_window(&mut ctx, WindowFlags::empty(), false);
        let idx = ctx.find_window_by_name("Tool").unwrap();
        let w = ctx.get_window(idx);
        assert_eq!((w.pos.x, w.pos.y), (50.0, 60.0));
        assert_eq!((w.size_full.x, w.size_full.y), (120.0, 80.0));
        assert!(w.collapsed);
    }

    #[test]
    fn loaded_settings_apply_to_live_windows() {
        let mut ctx = Context::new_headless();
        tool_window(&mut ctx, WindowFlags::empty(), false);
        ctx.load_ini_settings_from_memory("[Window][Tool]\nPos=70,80\n");
        let idx = ctx.find_window_by_name("Tool").unwrap();
        assert_eq!((ctx.get_window(idx).pos.x, ctx.get_window(idx).pos.y), (70.0, 80.0));
        assert!(!ctx.window_settings().iter().any(|s| s.want_apply));
    }

    #[test]
    fn parser_is_permissive() {
        let mut ctx = Context::new_headless();
        let ini = "; comment\r\n\
                   garbage before any section\n\
                   [Unknown][Thing]\nPos=1,1\n\
                   [Broken\n\
                   [Window][a[b]c]\r\nPos=5,6\nSize=oops\nCollapsed=\nNoise=3\n";
        ctx.load_ini_settings_from_memory(ini);
        let s = ctx.window_settings();
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].name, "a[b]c");
        assert_eq!(s[0].pos, (5, 6));
        assert_eq!(s[0].size, (0, 0));
        assert!(!s[0].collapsed);
    }

    #[test]
    fn entry_headers() {
        assert_eq!(parse_entry_header("[Window][Main]"), Some(("Window", "Main")));
        assert_eq!(parse_entry_header("[Window][]"), Some(("Window", "")));
        assert_eq!(parse_entry_header("[Window]"), None);
        assert_eq!(parse_entry_header("Window][x]"), None);
    }

    #[test]
    fn triple_hash_names_share_an_entry() {
        let mut ctx = Context::new_headless();
        let a = ctx.create_new_window_settings("Label A###Tool");
        assert_eq!(ctx.window_settings()[a].name, "###Tool");
        assert_eq!(ctx.find_window_settings(hash_str("Label B###Tool", Id::NONE)), Some(a));
    }

    #[derive(Default)]
    struct Log {
        lines: Vec<String>,
        applied: bool,
    }

    struct Recorder(Rc<RefCell<Log>>);

    impl SettingsHandler for Recorder {
        fn type_name(&self) -> &str { "Recorder" }
        fn read_open(&mut self, _ctx: &mut Context, name: &str) -> bool {
            self.0.borrow_mut().lines.push(format!("open {}", name));
            name != "skipped"
        }
        fn read_line(&mut self, _ctx: &mut Context, line: &str) { self.0.borrow_mut().lines.push(line.to_string()); }
        fn apply_all(&mut self, _ctx: &mut Context) { self.0.borrow_mut().applied = true; }
        fn write_all(&mut self, _ctx: &mut Context, out: &mut String) { out.push_str("[Recorder][state]\nvalue=1\n\n"); }
    }

    #[test]
    fn custom_handlers_take_part() {
        let mut ctx = Context::new_headless();
        let log = Rc::new(RefCell::new(Log::default()));
        ctx.add_settings_handler(Box::new(Recorder(log.clone()))).unwrap();
        assert!(matches!(ctx.add_settings_handler(Box::new(Recorder(log.clone()))), Err(Error::Settings(_))));

        ctx.load_ini_settings_from_memory("[Recorder][state]\nvalue=7\n[Recorder][skipped]\nhidden=1\n");
        assert_eq!(log.borrow().lines, vec!["open state", "value=7", "open skipped"]);
        assert!(log.borrow().applied);
        assert!(ctx.save_ini_settings_to_memory().contains("[Recorder][state]\nvalue=1\n"));

        assert!(ctx.remove_settings_handler("Recorder").is_some());
        assert!(!ctx.save_ini_settings_to_memory().contains("Recorder"));
    }

    #[test]
    fn clear_forgets_entries() {
        let mut ctx = Context::new_headless();
        tool_window(&mut ctx, WindowFlags::empty(), true);
        ctx.save_ini_settings_to_memory();
        assert!(!ctx.window_settings().is_empty());
        ctx.clear_ini_settings();
        assert!(ctx.window_settings().is_empty());
        assert!(ctx.windows().all(|(_, w)| w.settings_offset.is_none()));
    }

    #[test]
    fn dirty_settings_ask_the_host_to_save() {
        let mut ctx = Context::new_headless();
        ctx.io.ini_saving_rate = 0.04;
        ctx.frame(|_| {});
        ctx.mark_ini_settings_dirty();
        for _ in 0..2 {
            ctx.frame(|_| {});
            assert!(!ctx.io.want_save_ini_settings);
        }
        ctx.frame(|_| {});
        assert!(ctx.io.want_save_ini_settings);
    }

    #[test]
    fn disk_round_trip() {
        let path = std::env::temp_dir().join(format!("anchor-ui-settings-{}.ini", std::process::id()));
        let mut ctx = Context::new_headless();
        tool_window(&mut ctx, WindowFlags::empty(), true);
        ctx.save_ini_settings_to_disk(&path).unwrap();

        let mut other = Context::new_headless();
        other.load_ini_settings_from_disk(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let s = other.window_settings().iter().find(|s| s.name == "Tool").unwrap();
        assert_eq!((s.pos, s.size), ((30, 40), (200, 100)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut ctx = Context::new_headless();
        let err = ctx.load_ini_settings_from_disk("/nonexistent/anchor-ui.ini").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn first_frame_tolerates_a_missing_file() {
        let mut ctx = Context::new_headless();
        ctx.io.ini_filename = Some(std::env::temp_dir().join(format!("anchor-ui-missing-{}.ini", std::process::id())));
        ctx.frame(|_| {});
        assert!(ctx.settings_loaded);
        // nothing to write back on drop
        ctx.io.ini_filename = None;
    }
}
