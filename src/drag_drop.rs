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
use crate::*;

/// Payloads up to this many bytes are stored inline.
const PAYLOAD_LOCAL_CAPACITY: usize = 16;
/// Maximum length of a payload type tag, in bytes.
pub const PAYLOAD_TYPE_MAX_LEN: usize = 32;

#[derive(Clone, Debug)]
enum PayloadData {
    Local([u8; PAYLOAD_LOCAL_CAPACITY], usize),
    Heap(Vec<u8>),
}

impl Default for PayloadData {
    fn default() -> Self { PayloadData::Local([0; PAYLOAD_LOCAL_CAPACITY], 0) }
}

#[derive(Clone, Debug)]
/// Data carried by a drag and drop operation.
///
/// Payloads are copied in [`Context::set_drag_drop_payload`]; small ones live inline, larger
/// ones on the heap.
pub struct Payload {
    /// Id of the source item.
    pub source_id: Id,
    /// Id of the scope the source was submitted in.
    pub source_parent_id: Id,
    /// Frame the data was last submitted, -1 before the first submission.
    pub data_frame_count: i32,
    pub(crate) data_type: String,
    pub(crate) preview: bool,
    pub(crate) delivery: bool,
    data: PayloadData,
}

impl Default for Payload {
    fn default() -> Self {
        Self {
            source_id: Id::NONE,
            source_parent_id: Id::NONE,
            data_frame_count: -1,
            data_type: String::new(),
            preview: false,
            delivery: false,
            data: PayloadData::default(),
        }
    }
}

impl Payload {
    /// Resets to the empty payload.
    pub fn clear(&mut self) { *self = Self::default() }

    /// Returns `true` when the payload was tagged with `ty`.
    pub fn is_data_type(&self, ty: &str) -> bool { self.data_frame_count != -1 && self.data_type == ty }

    /// Type tag given to [`Context::set_drag_drop_payload`].
    pub fn data_type(&self) -> &str { &self.data_type }

    /// Payload bytes.
    pub fn data(&self) -> &[u8] {
        match &self.data {
            PayloadData::Local(buf, len) => &buf[..*len],
            PayloadData::Heap(v) => v,
        }
    }

    /// Number of payload bytes.
    pub fn data_size(&self) -> usize { self.data().len() }

    /// The target under the mouse accepted the payload last frame.
    pub fn is_preview(&self) -> bool { self.preview }

    /// The payload is being dropped on the target this frame.
    pub fn is_delivery(&self) -> bool { self.delivery }

    #[cfg(test)]
    pub(crate) fn is_stored_inline(&self) -> bool { matches!(self.data, PayloadData::Local(..)) }

    fn set_data(&mut self, bytes: &[u8]) {
        self.data = if bytes.len() > PAYLOAD_LOCAL_CAPACITY {
            PayloadData::Heap(bytes.to_vec())
        } else {
            let mut buf = [0; PAYLOAD_LOCAL_CAPACITY];
            buf[..bytes.len()].copy_from_slice(bytes);
            PayloadData::Local(buf, bytes.len())
        };
    }
}

impl Context {
    /// Ends any drag and drop operation and forgets its payload.
    pub fn clear_drag_drop(&mut self) {
        self.drag_drop_active = false;
        self.drag_drop_payload.clear();
        self.drag_drop_accept_flags = DragDropFlags::empty();
        self.drag_drop_accept_id_curr = Id::NONE;
        self.drag_drop_accept_id_prev = Id::NONE;
        self.drag_drop_accept_id_curr_rect_surface = f32::MAX;
        self.drag_drop_accept_frame_count = -1;
    }

    /// Makes the last item a drag source. Call right after submitting the item.
    ///
    /// Returns `true` while the item is being dragged; submit the payload with
    /// [`Context::set_drag_drop_payload`], optionally draw a preview, then call
    /// [`Context::end_drag_drop_source`].
    ///
    /// An item without id needs [`DragDropFlags::SOURCE_ALLOW_NULL_ID`]; its id is then derived
    /// from its rectangle, so moving it between frames cancels the drag.
    ///
    /// # Panics
    /// Panics when the last item has no id and `SOURCE_ALLOW_NULL_ID` is missing.
    pub fn begin_drag_drop_source(&mut self, flags: DragDropFlags) -> bool {
        let mouse_button = MouseButton::Left;
        let mut window = None;
        let source_id;
        let mut source_parent_id = Id::NONE;
        let source_drag_active;

        if !flags.contains(DragDropFlags::SOURCE_EXTERN) {
            let widx = self.current_window_idx();
            window = Some(widx);
            let mut id = self.windows[widx.0].dc.last_item_id;
            if id.is_some() && self.active_id != id {
                return false;
            }
            if !self.io.mouse_buttons[mouse_button.index()] {
                return false;
            }

            if id.is_none() {
                assert!(flags.contains(DragDropFlags::SOURCE_ALLOW_NULL_ID), "drag source without id, use SOURCE_ALLOW_NULL_ID");
                let w = &self.windows[widx.0];
                if !w.dc.last_item_status_flags.contains(ItemStatusFlags::HOVERED_RECT) && (self.active_id.is_none() || self.active_id_window != Some(widx)) {
                    return false;
                }
                let last_item_rect = w.dc.last_item_rect;
                id = w.get_id_from_rect(&last_item_rect);
                self.windows[widx.0].dc.last_item_id = id;
                let is_hovered = self.item_hoverable(&last_item_rect, id);
                if is_hovered && self.io.mouse_clicked[mouse_button.index()] {
                    self.set_active_id(id, Some(widx));
                    self.focus_window(Some(widx));
                }
                // keeps the item hovered on the release frame
                if self.active_id == id {
                    self.active_id_allow_overlap = is_hovered;
                }
            } else {
                self.active_id_allow_overlap = false;
            }
            if self.active_id != id {
                return false;
            }
            source_id = id;
            source_parent_id = self.windows[widx.0].id_seed();
            source_drag_active = self.is_mouse_dragging(mouse_button, -1.0);
        } else {
            source_id = hash_str("#SourceExtern", Id::NONE);
            source_drag_active = true;
        }

        if !source_drag_active {
            return false;
        }

        if !self.drag_drop_active {
            assert!(source_id.is_some());
            self.clear_drag_drop();
            self.drag_drop_payload.source_id = source_id;
            self.drag_drop_payload.source_parent_id = source_parent_id;
            self.drag_drop_active = true;
            self.drag_drop_source_flags = flags;
            self.drag_drop_mouse_button = Some(mouse_button);
            if source_id == self.active_id {
                self.active_id_no_clear_on_focus_loss = true;
            }
            debug!("drag started from {:?}", source_id);
        }
        self.drag_drop_source_frame_count = self.frame_count;
        self.drag_drop_within_source = true;

        if !flags.contains(DragDropFlags::SOURCE_NO_PREVIEW_TOOLTIP) {
            self.begin_tooltip();
            if self.drag_drop_accept_id_prev.is_some() && self.drag_drop_accept_flags.contains(DragDropFlags::ACCEPT_NO_PREVIEW_TOOLTIP) {
                let w = self.current_window_mut();
                w.skip_items = true;
                w.hidden_frames_can_skip_items = 1;
            }
        }

        if let Some(widx) = window {
            if !flags.contains(DragDropFlags::SOURCE_NO_DISABLE_HOVER) {
                self.windows[widx.0].dc.last_item_status_flags.remove(ItemStatusFlags::HOVERED_RECT);
            }
        }
        true
    }

    /// Ends a drag source begun by [`Context::begin_drag_drop_source`].
    pub fn end_drag_drop_source(&mut self) {
        assert!(self.drag_drop_active && self.drag_drop_within_source, "end_drag_drop_source() without a source");
        if !self.drag_drop_source_flags.contains(DragDropFlags::SOURCE_NO_PREVIEW_TOOLTIP) {
            self.end_tooltip();
        }
        // a source that never submitted a payload does not start a drag
        if self.drag_drop_payload.data_frame_count == -1 {
            self.clear_drag_drop();
        }
        self.drag_drop_within_source = false;
    }

    /// Submits the payload of the current source. The bytes are copied.
    ///
    /// With [`Cond::ONCE`] only the first submission of the drag is kept. Returns `true` when a
    /// target accepted the payload this frame or the last one.
    ///
    /// # Panics
    /// Panics outside a drag source or when `data_type` is [`PAYLOAD_TYPE_MAX_LEN`] bytes or longer.
    pub fn set_drag_drop_payload(&mut self, data_type: &str, data: &[u8], cond: Cond) -> bool {
        let cond = if cond.is_empty() { Cond::ALWAYS } else { cond };
        assert!(data_type.len() < PAYLOAD_TYPE_MAX_LEN, "payload type is limited to {} bytes", PAYLOAD_TYPE_MAX_LEN - 1);
        assert!(cond == Cond::ALWAYS || cond == Cond::ONCE);
        let payload = &mut self.drag_drop_payload;
        assert!(payload.source_id.is_some(), "set_drag_drop_payload() outside of a drag source");

        if cond == Cond::ALWAYS || payload.data_frame_count == -1 {
            payload.data_type = data_type.to_string();
            payload.set_data(data);
        }
        payload.data_frame_count = self.frame_count;

        self.drag_drop_accept_frame_count == self.frame_count || self.drag_drop_accept_frame_count == self.frame_count - 1
    }

    /// Makes the last item a drop target. Returns `true` while a payload hovers it; then call
    /// [`Context::accept_drag_drop_payload`] and [`Context::end_drag_drop_target`].
    pub fn begin_drag_drop_target(&mut self) -> bool {
        if !self.drag_drop_active {
            return false;
        }
        let widx = self.current_window_idx();
        if !self.windows[widx.0].dc.last_item_status_flags.contains(ItemStatusFlags::HOVERED_RECT) {
            return false;
        }
        match self.hovered_window_under_moving_window {
            Some(h) if self.windows[h.0].root_window == self.windows[widx.0].root_window => {}
            _ => return false,
        }

        let w = &self.windows[widx.0];
        let display_rect = if w.dc.last_item_status_flags.contains(ItemStatusFlags::HAS_DISPLAY_RECT) { w.dc.last_item_display_rect } else { w.dc.last_item_rect };
        let mut id = w.dc.last_item_id;
        if id.is_none() {
            id = w.get_id_from_rect(&display_rect);
        }
        if self.drag_drop_payload.source_id == id {
            return false;
        }

        assert!(!self.drag_drop_within_target, "nested drop targets");
        self.drag_drop_target_rect = display_rect;
        self.drag_drop_target_id = id;
        self.drag_drop_within_target = true;
        true
    }

    /// Drop target over an arbitrary rectangle with an explicit id.
    pub fn begin_drag_drop_target_custom(&mut self, bb: &Rect, id: Id) -> bool {
        if !self.drag_drop_active {
            return false;
        }
        let widx = self.current_window_idx();
        match self.hovered_window {
            Some(h) if self.windows[h.0].root_window == self.windows[widx.0].root_window => {}
            _ => return false,
        }
        assert!(id.is_some());
        if !self.is_mouse_hovering_rect(bb.min, bb.max, true) || id == self.drag_drop_payload.source_id {
            return false;
        }
        if self.windows[widx.0].skip_items {
            return false;
        }

        assert!(!self.drag_drop_within_target, "nested drop targets");
        self.drag_drop_target_rect = *bb;
        self.drag_drop_target_id = id;
        self.drag_drop_within_target = true;
        true
    }

    /// Accepts the payload when its type is `data_type`.
    ///
    /// The smallest target under the mouse wins. The payload is returned on the frame the mouse
    /// button is released over the target that accepted it the frame before, or every frame with
    /// [`DragDropFlags::ACCEPT_BEFORE_DELIVERY`].
    pub fn accept_drag_drop_payload(&mut self, data_type: &str, flags: DragDropFlags) -> Option<&Payload> {
        assert!(self.drag_drop_active && self.drag_drop_within_target, "accept_drag_drop_payload() outside of a drop target");
        if !self.drag_drop_payload.is_data_type(data_type) {
            return None;
        }

        let was_accepted_previously = self.drag_drop_accept_id_prev == self.drag_drop_target_id;
        let mut r = self.drag_drop_target_rect;
        let r_surface = r.area();
        if r_surface <= self.drag_drop_accept_id_curr_rect_surface {
            self.drag_drop_accept_flags = flags;
            self.drag_drop_accept_id_curr = self.drag_drop_target_id;
            self.drag_drop_accept_id_curr_rect_surface = r_surface;
        }

        self.drag_drop_payload.preview = was_accepted_previously;
        // the source may inhibit the highlight too
        let flags = flags | (self.drag_drop_source_flags & DragDropFlags::ACCEPT_NO_DRAW_DEFAULT_RECT);
        if !flags.contains(DragDropFlags::ACCEPT_NO_DRAW_DEFAULT_RECT) && was_accepted_previously {
            r.expand(3.5);
            let col = self.get_color(StyleColor::DragDropTarget, 1.0);
            let w = self.current_window_mut();
            let push_clip_rect = !w.clip_rect.contains_rect(&r);
            if push_clip_rect {
                w.draw_list.push_clip_rect(vec2(r.min.x - 1.0, r.min.y - 1.0), vec2(r.max.x + 1.0, r.max.y + 1.0), false);
            }
            w.draw_list.add_rect(r.min, r.max, col, 0.0, 2.0);
            if push_clip_rect {
                w.draw_list.pop_clip_rect();
            }
        }

        self.drag_drop_accept_frame_count = self.frame_count;
        let button_down = self.drag_drop_mouse_button.is_some_and(|b| self.io.mouse_buttons[b.index()]);
        self.drag_drop_payload.delivery = was_accepted_previously && !button_down;
        if !self.drag_drop_payload.delivery && !flags.contains(DragDropFlags::ACCEPT_BEFORE_DELIVERY) {
            return None;
        }
        Some(&self.drag_drop_payload)
    }

    /// Ends a drop target begun by [`Context::begin_drag_drop_target`].
    pub fn end_drag_drop_target(&mut self) {
        assert!(self.drag_drop_active && self.drag_drop_within_target, "end_drag_drop_target() without a target");
        self.drag_drop_within_target = false;
    }

    /// Payload being dragged, if any. Lets any item peek at it, e.g. to highlight.
    pub fn get_drag_drop_payload(&self) -> Option<&Payload> { if self.drag_drop_active { Some(&self.drag_drop_payload) } else { None } }

    /// Returns `true` while a drag and drop operation is in progress.
    pub fn is_drag_drop_active(&self) -> bool { self.drag_drop_active }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTERN: DragDropFlags = DragDropFlags::SOURCE_EXTERN.union(DragDropFlags::SOURCE_NO_PREVIEW_TOOLTIP);

    fn host<F: FnOnce(&mut Context)>(ctx: &mut Context, f: F) {
        ctx.frame(|ctx| {
            ctx.set_next_window_pos(vec2(10.0, 10.0), Cond::ALWAYS, vec2(0.0, 0.0));
            ctx.set_next_window_size(vec2(300.0, 200.0), Cond::ALWAYS);
            ctx.window("DnD", WindowFlags::empty(), f);
        });
    }

    /// A frame with a "src" button dragging `data` and a "dst" button accepting it.
    fn drag_frame(ctx: &mut Context, data: &[u8], centers: &mut [Vec2f; 2]) -> Option<Vec<u8>> {
        let mut delivered = None;
        host(ctx, |ctx| {
            ctx.button("src");
            centers[0] = ctx.current_window_ref().dc.last_item_rect.center();
            if ctx.begin_drag_drop_source(DragDropFlags::empty()) {
                ctx.set_drag_drop_payload("BYTES", data, Cond::ALWAYS);
                ctx.text("moving");
                ctx.end_drag_drop_source();
            }
            ctx.button("dst");
            centers[1] = ctx.current_window_ref().dc.last_item_rect.center();
            if ctx.begin_drag_drop_target() {
                if let Some(p) = ctx.accept_drag_drop_payload("BYTES", DragDropFlags::empty()) {
                    assert!(p.is_delivery());
                    delivered = Some(p.data().to_vec());
                }
                ctx.end_drag_drop_target();
            }
        });
        delivered
    }

    fn drag_between_buttons(data: &[u8]) -> (Option<Vec<u8>>, bool) {
        let mut ctx = Context::new_headless();
        let mut centers = [vec2(0.0, 0.0); 2];
        drag_frame(&mut ctx, data, &mut centers);

        ctx.io.mouse_move(centers[0].x, centers[0].y);
        assert!(drag_frame(&mut ctx, data, &mut centers).is_none());
        ctx.io.mouse_down(MouseButton::Left);
        assert!(drag_frame(&mut ctx, data, &mut centers).is_none());
        assert!(!ctx.is_drag_drop_active());

        ctx.io.mouse_move(centers[1].x, centers[1].y);
        assert!(drag_frame(&mut ctx, data, &mut centers).is_none());
        assert!(ctx.is_drag_drop_active());
        assert!(drag_frame(&mut ctx, data, &mut centers).is_none());
        let inline = ctx.get_drag_drop_payload().is_some_and(|p| p.is_stored_inline());

        ctx.io.mouse_up(MouseButton::Left);
        let delivered = drag_frame(&mut ctx, data, &mut centers);
        assert!(!ctx.is_drag_drop_active());
        (delivered, inline)
    }

    #[test]
    fn small_payload_is_delivered_inline() {
        let data: Vec<u8> = (0..8).collect();
        let (delivered, inline) = drag_between_buttons(&data);
        assert_eq!(delivered.as_deref(), Some(&data[..]));
        assert!(inline);
    }

    #[test]
    fn large_payload_is_delivered_from_the_heap() {
        let data: Vec<u8> = (0..64).map(|i| (i * 3) as u8).collect();
        let (delivered, inline) = drag_between_buttons(&data);
        assert_eq!(delivered.as_deref(), Some(&data[..]));
        assert!(!inline);
    }

    #[test]
    fn payload_storage_threshold() {
        let mut p = Payload::default();
        p.set_data(&[7; PAYLOAD_LOCAL_CAPACITY]);
        assert!(p.is_stored_inline());
        assert_eq!(p.data_size(), PAYLOAD_LOCAL_CAPACITY);
        p.set_data(&[7; PAYLOAD_LOCAL_CAPACITY + 1]);
        assert!(!p.is_stored_inline());
        assert_eq!(p.data_size(), PAYLOAD_LOCAL_CAPACITY + 1);
        p.clear();
        assert_eq!(p.data_size(), 0);
        assert_eq!(p.data_frame_count, -1);
    }

    #[test]
    fn payload_expires_after_the_source_stops() {
        let mut ctx = Context::new_headless();
        host(&mut ctx, |ctx| {
            assert!(ctx.begin_drag_drop_source(EXTERN));
            ctx.set_drag_drop_payload("FILES", b"a.txt", Cond::ALWAYS);
            ctx.end_drag_drop_source();
        });
        assert!(ctx.is_drag_drop_active());
        host(&mut ctx, |_| {});
        assert!(ctx.is_drag_drop_active());
        host(&mut ctx, |_| {});
        assert!(!ctx.is_drag_drop_active());
        assert!(ctx.get_drag_drop_payload().is_none());
    }

    #[test]
    fn no_auto_expire_lasts_until_release() {
        let mut ctx = Context::new_headless();
        ctx.io.mouse_move(400.0, 400.0);
        ctx.io.mouse_down(MouseButton::Left);
        host(&mut ctx, |ctx| {
            assert!(ctx.begin_drag_drop_source(EXTERN | DragDropFlags::SOURCE_NO_AUTO_EXPIRE));
            ctx.set_drag_drop_payload("FILES", b"a.txt", Cond::ALWAYS);
            ctx.end_drag_drop_source();
        });
        for _ in 0..4 {
            host(&mut ctx, |_| {});
            assert!(ctx.is_drag_drop_active());
        }
        ctx.io.mouse_up(MouseButton::Left);
        host(&mut ctx, |_| {});
        assert!(!ctx.is_drag_drop_active());
    }

    #[test]
    fn source_without_payload_does_not_drag() {
        let mut ctx = Context::new_headless();
        host(&mut ctx, |ctx| {
            assert!(ctx.begin_drag_drop_source(EXTERN));
            ctx.end_drag_drop_source();
        });
        assert!(!ctx.is_drag_drop_active());
    }

    #[test]
    fn once_keeps_the_first_submission() {
        let mut ctx = Context::new_headless();
        for data in [b"first", b"again"] {
            host(&mut ctx, |ctx| {
                assert!(ctx.begin_drag_drop_source(EXTERN));
                ctx.set_drag_drop_payload("TXT", data, Cond::ONCE);
                ctx.end_drag_drop_source();
            });
        }
        assert_eq!(ctx.get_drag_drop_payload().map(|p| p.data()), Some(&b"first"[..]));
    }

    #[test]
    fn smallest_target_wins() {
        let mut ctx = Context::new_headless();
        ctx.io.mouse_move(100.0, 100.0);
        host(&mut ctx, |_| {});
        let big = Rect::from_coords(20.0, 40.0, 300.0, 200.0);
        let small = Rect::from_coords(90.0, 90.0, 110.0, 110.0);
        let mut got = Vec::new();
        for _ in 0..2 {
            got.clear();
            host(&mut ctx, |ctx| {
                assert!(ctx.begin_drag_drop_source(EXTERN));
                ctx.set_drag_drop_payload("TXT", b"x", Cond::ALWAYS);
                ctx.end_drag_drop_source();
                for (name, r) in [("big", big), ("small", small)] {
                    let id = ctx.get_id(name);
                    if ctx.begin_drag_drop_target_custom(&r, id) {
                        if ctx.accept_drag_drop_payload("TXT", DragDropFlags::empty()).is_some() {
                            got.push(name);
                        }
                        ctx.end_drag_drop_target();
                    }
                }
                assert_eq!(ctx.drag_drop_accept_id_curr, ctx.get_id("small"));
            });
        }
        // the mouse is up: the small target accepted last frame and receives the drop
        assert_eq!(got, vec!["small"]);
        assert!(!ctx.is_drag_drop_active());
    }

    #[test]
    fn other_types_are_ignored() {
        let mut ctx = Context::new_headless();
        ctx.io.mouse_move(100.0, 100.0);
        let r = Rect::from_coords(20.0, 40.0, 300.0, 200.0);
        host(&mut ctx, |_| {});
        host(&mut ctx, |ctx| {
            assert!(ctx.begin_drag_drop_source(EXTERN));
            ctx.set_drag_drop_payload("TXT", b"x", Cond::ALWAYS);
            ctx.end_drag_drop_source();
            let id = ctx.get_id("target");
            assert!(ctx.begin_drag_drop_target_custom(&r, id));
            assert!(ctx.accept_drag_drop_payload("IMG", DragDropFlags::ACCEPT_BEFORE_DELIVERY).is_none());
            assert!(ctx.accept_drag_drop_payload("TXT", DragDropFlags::ACCEPT_PEEK_ONLY).is_some());
            ctx.end_drag_drop_target();
        });
    }
}
