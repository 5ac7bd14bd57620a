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

/// Text metrics provider.
///
/// Glyph rasterization lives with the renderer; the engine only needs sizes to lay out labels,
/// title bars and menus.
pub trait Font {
    /// Returns the font's display name.
    fn name(&self) -> &str;
    /// Returns the line height in pixels.
    fn get_size(&self) -> f32;
    /// Returns the horizontal advance of `c` in pixels.
    fn get_char_advance(&self, c: char) -> f32;

    /// Measures `text`, one line per `\n`.
    fn calc_text_size(&self, text: &str) -> Vec2f {
        let line_height = self.get_size();
        let mut size = vec2(0.0, 0.0);
        let mut line_width = 0.0f32;
        for c in text.chars() {
            if c == '\n' {
                size.x = size.x.max(line_width);
                size.y += line_height;
                line_width = 0.0;
                continue;
            }
            if c == '\r' {
                continue;
            }
            line_width += self.get_char_advance(c);
        }
        size.x = size.x.max(line_width);
        if line_width > 0.0 || size.y == 0.0 {
            size.y += line_height;
        }
        size
    }
}

#[derive(Clone, Debug)]
/// Fixed-advance font, the default metrics provider.
pub struct MonoFont {
    name: String,
    size: f32,
    advance: f32,
}

impl MonoFont {
    /// Creates a monospace font with the given line height and glyph advance.
    pub fn new(name: &str, size: f32, advance: f32) -> Self {
        Self {
            name: name.to_string(),
            size,
            advance,
        }
    }
}

impl Default for MonoFont {
    fn default() -> Self { Self::new("mono-13", 13.0, 7.0) }
}

impl Font for MonoFont {
    fn name(&self) -> &str { &self.name }
    fn get_size(&self) -> f32 { self.size }
    fn get_char_advance(&self, c: char) -> f32 {
        match c {
            '\t' => self.advance * 4.0,
            _ => self.advance,
        }
    }
}

/// Returns the part of `text` that is displayed: everything before a `##` marker.
pub(crate) fn find_rendered_text_end(text: &str) -> &str {
    match text.find("##") {
        Some(pos) => &text[..pos],
        None => text,
    }
}

impl Context {
    /// Line height of the current font.
    pub fn get_font_size(&self) -> f32 { self.font_size }

    /// Height of a line of text.
    pub fn get_text_line_height(&self) -> f32 { self.font_size }

    /// Distance between two lines of text.
    pub fn get_text_line_height_with_spacing(&self) -> f32 { self.font_size + self.style.item_spacing.y }

    /// Height of a framed widget.
    pub fn get_frame_height(&self) -> f32 { self.font_size + self.style.frame_padding.y * 2.0 }

    /// Distance between two framed widgets.
    pub fn get_frame_height_with_spacing(&self) -> f32 { self.font_size + self.style.frame_padding.y * 2.0 + self.style.item_spacing.y }

    /// Measures `text`, optionally ignoring anything after `##`.
    pub fn calc_text_size(&self, text: &str, hide_text_after_double_hash: bool) -> Vec2f {
        let text_display = if hide_text_after_double_hash { find_rendered_text_end(text) } else { text };
        if text_display.is_empty() {
            return vec2(0.0, self.font_size);
        }
        let size = self.font.calc_text_size(text_display);
        // round up so a label never gets clipped by sub-pixel error
        vec2((size.x + 0.95).floor(), size.y)
    }

    /// Name of the font in use.
    pub fn font_name(&self) -> &str { self.font.name() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_metrics() {
        let f = MonoFont::default();
        let s = f.calc_text_size("abc");
        assert_eq!(s.x, 21.0);
        assert_eq!(s.y, 13.0);
        let s = f.calc_text_size("ab\nabcd");
        assert_eq!(s.x, 28.0);
        assert_eq!(s.y, 26.0);
        let s = f.calc_text_size("abc\n");
        assert_eq!(s.y, 13.0);
        assert_eq!(f.calc_text_size("").y, 13.0);
    }

    #[test]
    fn double_hash_is_hidden() {
        assert_eq!(find_rendered_text_end("Label##hidden"), "Label");
        assert_eq!(find_rendered_text_end("Label###id"), "Label");
        assert_eq!(find_rendered_text_end("Plain"), "Plain");
        let ctx = Context::new(Box::new(MonoFont::default()));
        assert_eq!(ctx.calc_text_size("OK##button", true).x, 14.0);
        assert_eq!(ctx.calc_text_size("##only", true).x, 0.0);
    }
}
