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

#[derive(Clone, Debug)]
/// Primitive recorded into a [`DrawList`].
pub enum DrawCommand {
    /// Solid rectangle.
    RectFilled {
        /// Target rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        rounding: f32,
    },
    /// Rectangle outline.
    Rect {
        /// Target rectangle.
        rect: Rect,
        /// Stroke color.
        color: Color,
        /// Corner radius.
        rounding: f32,
        /// Stroke width.
        thickness: f32,
    },
    /// Line segment.
    Line {
        /// Start point.
        p1: Vec2f,
        /// End point.
        p2: Vec2f,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        thickness: f32,
    },
    /// Solid triangle.
    TriangleFilled {
        /// First vertex.
        p1: Vec2f,
        /// Second vertex.
        p2: Vec2f,
        /// Third vertex.
        p3: Vec2f,
        /// Fill color.
        color: Color,
    },
    /// Text run, already stripped of any hidden `##` suffix.
    Text {
        /// Top-left text position.
        pos: Vec2f,
        /// Text color.
        color: Color,
        /// UTF-8 string to render.
        text: String,
    },
}

#[derive(Clone, Debug)]
/// One recorded command with the clip rectangle and texture it must be rendered with.
pub struct DrawCmd {
    /// Scissor rectangle in screen space.
    pub clip_rect: Rect,
    /// Renderer texture the command samples from; 0 is the font atlas.
    pub texture_id: usize,
    /// The primitive.
    pub command: DrawCommand,
}

#[derive(PartialEq, Copy, Clone, Debug)]
enum Clip {
    None,
    Part,
    All,
}

#[derive(Clone, Debug, Default)]
/// Command recorder owned by each window.
pub struct DrawList {
    commands: Vec<DrawCmd>,
    clip_stack: Vec<Rect>,
    texture_stack: Vec<usize>,
    owner_name: String,
}

impl DrawList {
    /// Creates an empty list owned by `owner_name` (used for debugging only).
    pub fn new(owner_name: &str) -> Self {
        Self {
            owner_name: owner_name.to_string(),
            ..Default::default()
        }
    }

    /// Name of the window that recorded this list.
    pub fn owner_name(&self) -> &str { &self.owner_name }

    /// Recorded commands in submission order.
    pub fn commands(&self) -> &[DrawCmd] { &self.commands }

    /// Returns `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Drops every command and clip rectangle, keeping allocations.
    pub fn reset(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.texture_stack.clear();
    }

    /// Releases the allocations of an idle list.
    pub(crate) fn compact(&mut self) {
        self.commands = Vec::new();
        self.clip_stack = Vec::new();
        self.texture_stack = Vec::new();
    }

    /// Approximate number of bytes held by the list.
    pub fn capacity(&self) -> usize { self.commands.capacity() * std::mem::size_of::<DrawCmd>() }

    /// Current clip rectangle.
    pub fn current_clip_rect(&self) -> Rect { self.clip_stack.last().copied().unwrap_or(Rect::UNCLIPPED) }

    /// Pushes a clip rectangle, intersecting it with the current one when requested.
    pub fn push_clip_rect(&mut self, min: Vec2f, max: Vec2f, intersect_with_current: bool) {
        let mut cr = Rect::new(min, max);
        if intersect_with_current {
            let current = self.current_clip_rect();
            cr.min = vec2_max(cr.min, current.min);
            cr.max = vec2_min(cr.max, current.max);
        }
        cr.max = vec2_max(cr.min, cr.max);
        self.clip_stack.push(cr);
    }

    /// Pushes a clip rectangle covering everything.
    pub fn push_clip_rect_full_screen(&mut self) { self.clip_stack.push(Rect::UNCLIPPED); }

    /// Pops the last clip rectangle.
    pub fn pop_clip_rect(&mut self) {
        assert!(self.clip_stack.pop().is_some(), "pop_clip_rect on an empty clip stack ({})", self.owner_name);
    }

    /// Depth of the clip rectangle stack.
    pub fn clip_stack_len(&self) -> usize { self.clip_stack.len() }

    /// Pushes a texture used by subsequent commands.
    pub fn push_texture_id(&mut self, texture_id: usize) { self.texture_stack.push(texture_id); }

    /// Pops the last texture.
    pub fn pop_texture_id(&mut self) { self.texture_stack.pop(); }

    fn check_clip(&self, r: &Rect) -> Clip {
        let cr = self.current_clip_rect();
        if r.max.x < cr.min.x || r.min.x > cr.max.x || r.max.y < cr.min.y || r.min.y > cr.max.y {
            return Clip::All;
        }
        if cr.contains_rect(r) {
            return Clip::None;
        }
        Clip::Part
    }

    fn push_command(&mut self, bounds: Rect, command: DrawCommand) {
        if self.check_clip(&bounds) == Clip::All {
            return;
        }
        self.commands.push(DrawCmd {
            clip_rect: self.current_clip_rect(),
            texture_id: self.texture_stack.last().copied().unwrap_or(0),
            command,
        });
    }

    /// Records a solid rectangle.
    pub fn add_rect_filled(&mut self, min: Vec2f, max: Vec2f, color: Color, rounding: f32) {
        if color.is_transparent() {
            return;
        }
        let rect = Rect::new(min, max);
        self.push_command(rect, DrawCommand::RectFilled { rect, color, rounding });
    }

    /// Records a rectangle outline.
    pub fn add_rect(&mut self, min: Vec2f, max: Vec2f, color: Color, rounding: f32, thickness: f32) {
        if color.is_transparent() || thickness <= 0.0 {
            return;
        }
        let rect = Rect::new(min, max);
        self.push_command(rect, DrawCommand::Rect { rect, color, rounding, thickness });
    }

    /// Records a line segment.
    pub fn add_line(&mut self, p1: Vec2f, p2: Vec2f, color: Color, thickness: f32) {
        if color.is_transparent() {
            return;
        }
        let mut bounds = Rect::new(p1, p1);
        bounds.add_point(p2);
        self.push_command(bounds, DrawCommand::Line { p1, p2, color, thickness });
    }

    /// Records a solid triangle.
    pub fn add_triangle_filled(&mut self, p1: Vec2f, p2: Vec2f, p3: Vec2f, color: Color) {
        if color.is_transparent() {
            return;
        }
        let mut bounds = Rect::new(p1, p1);
        bounds.add_point(p2);
        bounds.add_point(p3);
        self.push_command(bounds, DrawCommand::TriangleFilled { p1, p2, p3, color });
    }

    /// Records a text run whose measured size is `size`.
    pub fn add_text(&mut self, pos: Vec2f, color: Color, text: &str, size: Vec2f) {
        if color.is_transparent() || text.is_empty() {
            return;
        }
        let bounds = Rect::from_min_size(pos, size);
        self.push_command(bounds, DrawCommand::Text { pos, color, text: text.to_string() });
    }
}

#[derive(Clone, Debug, Default)]
/// Everything produced by [`Context::render`], ready for a [`Renderer`].
pub struct DrawData {
    /// `true` once a frame has been rendered.
    pub valid: bool,
    /// Draw lists in back-to-front order.
    pub lists: Vec<DrawList>,
    /// Upper-left corner of the display.
    pub display_pos: Vec2f,
    /// Size of the display.
    pub display_size: Vec2f,
    /// Sum of the command counts of every list.
    pub total_cmd_count: usize,
}

impl DrawData {
    pub(crate) fn clear(&mut self) {
        self.valid = false;
        self.lists.clear();
        self.total_cmd_count = 0;
    }

    pub(crate) fn add_list(&mut self, list: DrawList) {
        if list.is_empty() {
            return;
        }
        self.total_cmd_count += list.commands.len();
        self.lists.push(list);
    }

    /// Iterates over every command of every list, back to front.
    pub fn iter_commands(&self) -> impl Iterator<Item = &DrawCmd> { self.lists.iter().flat_map(|l| l.commands.iter()) }
}

/// Trait implemented by render backends consuming [`DrawData`].
pub trait Renderer {
    /// Begins a new frame with the display size.
    fn begin(&mut self, display_size: Vec2f);
    /// Renders one command.
    fn draw(&mut self, cmd: &DrawCmd);
    /// Ends the frame, flushing any outstanding work.
    fn end(&mut self);
}

impl Context {
    /// Draw list of the current window.
    pub fn get_window_draw_list(&mut self) -> &mut DrawList {
        let w = self.current_window_idx();
        &mut self.windows[w.0].draw_list
    }

    /// Draw list rendered behind every window this frame.
    pub fn get_background_draw_list(&mut self) -> &mut DrawList { &mut self.background_draw_list }

    /// Draw list rendered in front of every window this frame.
    pub fn get_foreground_draw_list(&mut self) -> &mut DrawList { &mut self.foreground_draw_list }

    /// Output of the last [`Context::render`].
    pub fn get_draw_data(&self) -> &DrawData { &self.draw_data }

    /// Renders the frame and feeds every command to `renderer`.
    pub fn render_with<R: Renderer>(&mut self, renderer: &mut R) {
        self.render();
        renderer.begin(self.draw_data.display_size);
        for cmd in self.draw_data.iter_commands() {
            renderer.draw(cmd);
        }
        renderer.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_stack_intersects() {
        let mut dl = DrawList::new("test");
        dl.push_clip_rect(vec2(0.0, 0.0), vec2(100.0, 100.0), false);
        dl.push_clip_rect(vec2(50.0, 50.0), vec2(200.0, 200.0), true);
        let cr = dl.current_clip_rect();
        assert_eq!(cr.min.x, 50.0);
        assert_eq!(cr.max.x, 100.0);
        dl.pop_clip_rect();
        assert_eq!(dl.current_clip_rect().min.x, 0.0);
    }

    #[test]
    fn fully_clipped_commands_are_dropped() {
        let mut dl = DrawList::new("test");
        let white = color(255, 255, 255, 255);
        dl.push_clip_rect(vec2(0.0, 0.0), vec2(100.0, 100.0), false);
        dl.add_rect_filled(vec2(200.0, 200.0), vec2(300.0, 300.0), white, 0.0);
        assert!(dl.is_empty());
        dl.add_rect_filled(vec2(50.0, 50.0), vec2(150.0, 150.0), white, 0.0);
        assert_eq!(dl.commands().len(), 1);
        assert_eq!(dl.commands()[0].clip_rect.max.x, 100.0);
        dl.add_rect_filled(vec2(10.0, 10.0), vec2(20.0, 20.0), color(0, 0, 0, 0), 0.0);
        assert_eq!(dl.commands().len(), 1);
    }

    #[test]
    #[should_panic]
    fn unbalanced_clip_pop_panics() {
        let mut dl = DrawList::new("test");
        dl.pop_clip_rect();
    }

    struct CountingRenderer {
        frames: usize,
        commands: usize,
    }

    impl Renderer for CountingRenderer {
        fn begin(&mut self, _display_size: Vec2f) { self.frames += 1; }
        fn draw(&mut self, _cmd: &DrawCmd) { self.commands += 1; }
        fn end(&mut self) {}
    }

    #[test]
    fn renderer_receives_commands() {
        let mut ctx = Context::new(Box::new(MonoFont::default()));
        ctx.io.ini_filename = None;
        ctx.io.display_size = vec2(800.0, 600.0);
        ctx.io.delta_time = 1.0 / 60.0;
        let mut r = CountingRenderer { frames: 0, commands: 0 };
        // auto-sized windows stay hidden on their first frame
        for _ in 0..2 {
            r.commands = 0;
            ctx.new_frame();
            ctx.window("R", WindowFlags::empty(), |ctx| ctx.text("hello"));
            ctx.render_with(&mut r);
        }
        assert_eq!(r.frames, 2);
        assert!(r.commands > 0);
        assert_eq!(r.commands, ctx.get_draw_data().total_cmd_count);
    }
}
