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

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Returns a copy with the alpha channel multiplied by `mul`.
    pub fn scale_alpha(self, mul: f32) -> Color {
        let a = (self.a as f32 * mul.clamp(0.0, 1.0)).round() as u8;
        Color { a, ..self }
    }

    /// Returns `true` when fully transparent.
    pub fn is_transparent(&self) -> bool { self.a == 0 }
}

/// Convenience constructor for [`Color`].
pub const fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Identifiers for each of the built-in style colors.
pub enum StyleColor {
    /// Default text.
    Text = 0,
    /// Disabled text.
    TextDisabled,
    /// Background of regular windows.
    WindowBg,
    /// Background of child windows.
    ChildBg,
    /// Background of popups, menus and tooltips.
    PopupBg,
    /// Window and frame borders.
    Border,
    /// Shadow drawn under borders.
    BorderShadow,
    /// Background of frames (combo boxes).
    FrameBg,
    /// Hovered frame background.
    FrameBgHovered,
    /// Active frame background.
    FrameBgActive,
    /// Title bar of unfocused windows.
    TitleBg,
    /// Title bar of the focused window.
    TitleBgActive,
    /// Title bar of collapsed windows.
    TitleBgCollapsed,
    /// Menu bar background.
    MenuBarBg,
    /// Scrollbar track.
    ScrollbarBg,
    /// Scrollbar thumb.
    ScrollbarGrab,
    /// Hovered scrollbar thumb.
    ScrollbarGrabHovered,
    /// Dragged scrollbar thumb.
    ScrollbarGrabActive,
    /// Check marks and small arrows.
    CheckMark,
    /// Button.
    Button,
    /// Hovered button.
    ButtonHovered,
    /// Pressed button.
    ButtonActive,
    /// Selectable/menu item highlight.
    Header,
    /// Hovered header.
    HeaderHovered,
    /// Active header.
    HeaderActive,
    /// Separators.
    Separator,
    /// Resize grip.
    ResizeGrip,
    /// Hovered resize grip.
    ResizeGripHovered,
    /// Held resize grip.
    ResizeGripActive,
    /// Outline of an accepting drop target.
    DragDropTarget,
    /// Navigation focus rectangle.
    NavHighlight,
    /// Highlight of the window targeted by CTRL+TAB.
    NavWindowingHighlight,
    /// Screen dimming behind the CTRL+TAB overlay.
    NavWindowingDimBg,
    /// Screen dimming behind modal popups.
    ModalWindowDimBg,
}

impl StyleColor {
    /// Number of color entries in [`Style::colors`].
    pub const COUNT: usize = 34;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Style fields that can be temporarily overridden with `push_style_var`.
pub enum StyleVar {
    /// [`Style::alpha`], float.
    Alpha,
    /// [`Style::window_padding`], vector.
    WindowPadding,
    /// [`Style::window_rounding`], float.
    WindowRounding,
    /// [`Style::window_border_size`], float.
    WindowBorderSize,
    /// [`Style::window_min_size`], vector.
    WindowMinSize,
    /// [`Style::window_title_align`], vector.
    WindowTitleAlign,
    /// [`Style::child_rounding`], float.
    ChildRounding,
    /// [`Style::child_border_size`], float.
    ChildBorderSize,
    /// [`Style::popup_rounding`], float.
    PopupRounding,
    /// [`Style::popup_border_size`], float.
    PopupBorderSize,
    /// [`Style::frame_padding`], vector.
    FramePadding,
    /// [`Style::frame_rounding`], float.
    FrameRounding,
    /// [`Style::frame_border_size`], float.
    FrameBorderSize,
    /// [`Style::item_spacing`], vector.
    ItemSpacing,
    /// [`Style::item_inner_spacing`], vector.
    ItemInnerSpacing,
    /// [`Style::indent_spacing`], float.
    IndentSpacing,
    /// [`Style::scrollbar_size`], float.
    ScrollbarSize,
    /// [`Style::scrollbar_rounding`], float.
    ScrollbarRounding,
    /// [`Style::grab_min_size`], float.
    GrabMinSize,
    /// [`Style::button_text_align`], vector.
    ButtonTextAlign,
    /// [`Style::selectable_text_align`], vector.
    SelectableTextAlign,
}

#[derive(Copy, Clone, Debug)]
/// Value pushed for a [`StyleVar`]; its kind must match the field.
pub enum StyleVarValue {
    /// Scalar fields.
    Float(f32),
    /// Vector fields.
    Vec2(Vec2f),
}

enum StyleSlot<'a> {
    Float(&'a mut f32),
    Vec2(&'a mut Vec2f),
}

#[derive(Copy, Clone, Debug)]
/// Collection of visual constants that drive layout and decoration.
pub struct Style {
    /// Global alpha applied to every color.
    pub alpha: f32,
    /// Padding inside windows.
    pub window_padding: Vec2f,
    /// Corner radius of windows.
    pub window_rounding: f32,
    /// Border thickness of windows.
    pub window_border_size: f32,
    /// Minimum window size.
    pub window_min_size: Vec2f,
    /// Alignment of the title text, 0..1 per axis.
    pub window_title_align: Vec2f,
    /// Side of the collapse button, `None` hides it.
    pub window_menu_button_position: Option<Dir>,
    /// Corner radius of child windows.
    pub child_rounding: f32,
    /// Border thickness of child windows.
    pub child_border_size: f32,
    /// Corner radius of popups.
    pub popup_rounding: f32,
    /// Border thickness of popups and tooltips.
    pub popup_border_size: f32,
    /// Padding inside framed widgets.
    pub frame_padding: Vec2f,
    /// Corner radius of frames.
    pub frame_rounding: f32,
    /// Border thickness of frames.
    pub frame_border_size: f32,
    /// Spacing between items.
    pub item_spacing: Vec2f,
    /// Spacing between the elements of a composite widget.
    pub item_inner_spacing: Vec2f,
    /// Extra hit-test padding for touch screens.
    pub touch_extra_padding: Vec2f,
    /// Horizontal indentation of `indent`.
    pub indent_spacing: f32,
    /// Width of the vertical scrollbar and height of the horizontal one.
    pub scrollbar_size: f32,
    /// Corner radius of scrollbar thumbs.
    pub scrollbar_rounding: f32,
    /// Minimum length of scrollbar thumbs.
    pub grab_min_size: f32,
    /// Alignment of button labels.
    pub button_text_align: Vec2f,
    /// Alignment of selectable labels.
    pub selectable_text_align: Vec2f,
    /// Windows are kept at least this far inside the display.
    pub display_window_padding: Vec2f,
    /// Popups and tooltips keep this distance from the display edges.
    pub display_safe_area_padding: Vec2f,
    /// Palette of [`StyleColor`] entries.
    pub colors: [Color; StyleColor::COUNT],
}

impl Default for Style {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            window_padding: vec2(8.0, 8.0),
            window_rounding: 0.0,
            window_border_size: 1.0,
            window_min_size: vec2(32.0, 32.0),
            window_title_align: vec2(0.0, 0.5),
            window_menu_button_position: Some(Dir::Left),
            child_rounding: 0.0,
            child_border_size: 1.0,
            popup_rounding: 0.0,
            popup_border_size: 1.0,
            frame_padding: vec2(4.0, 3.0),
            frame_rounding: 0.0,
            frame_border_size: 0.0,
            item_spacing: vec2(8.0, 4.0),
            item_inner_spacing: vec2(4.0, 4.0),
            touch_extra_padding: vec2(0.0, 0.0),
            indent_spacing: 21.0,
            scrollbar_size: 14.0,
            scrollbar_rounding: 9.0,
            grab_min_size: 10.0,
            button_text_align: vec2(0.5, 0.5),
            selectable_text_align: vec2(0.0, 0.0),
            display_window_padding: vec2(19.0, 19.0),
            display_safe_area_padding: vec2(3.0, 3.0),
            colors: [
                color(255, 255, 255, 255),
                color(128, 128, 128, 255),
                color(15, 15, 15, 240),
                color(0, 0, 0, 0),
                color(20, 20, 20, 240),
                color(110, 110, 128, 128),
                color(0, 0, 0, 0),
                color(41, 74, 122, 138),
                color(66, 150, 250, 102),
                color(66, 150, 250, 171),
                color(10, 10, 10, 255),
                color(41, 74, 122, 255),
                color(0, 0, 0, 130),
                color(36, 36, 36, 255),
                color(5, 5, 5, 135),
                color(79, 79, 79, 255),
                color(105, 105, 105, 255),
                color(130, 130, 130, 255),
                color(66, 150, 250, 255),
                color(66, 150, 250, 102),
                color(66, 150, 250, 255),
                color(15, 135, 250, 255),
                color(66, 150, 250, 79),
                color(66, 150, 250, 204),
                color(66, 150, 250, 255),
                color(110, 110, 128, 128),
                color(66, 150, 250, 51),
                color(66, 150, 250, 171),
                color(66, 150, 250, 242),
                color(255, 255, 0, 230),
                color(66, 150, 250, 255),
                color(255, 255, 255, 179),
                color(204, 204, 204, 51),
                color(204, 204, 204, 89),
            ],
        }
    }
}

impl Style {
    fn slot(&mut self, var: StyleVar) -> StyleSlot<'_> {
        match var {
            StyleVar::Alpha => StyleSlot::Float(&mut self.alpha),
            StyleVar::WindowPadding => StyleSlot::Vec2(&mut self.window_padding),
            StyleVar::WindowRounding => StyleSlot::Float(&mut self.window_rounding),
            StyleVar::WindowBorderSize => StyleSlot::Float(&mut self.window_border_size),
            StyleVar::WindowMinSize => StyleSlot::Vec2(&mut self.window_min_size),
            StyleVar::WindowTitleAlign => StyleSlot::Vec2(&mut self.window_title_align),
            StyleVar::ChildRounding => StyleSlot::Float(&mut self.child_rounding),
            StyleVar::ChildBorderSize => StyleSlot::Float(&mut self.child_border_size),
            StyleVar::PopupRounding => StyleSlot::Float(&mut self.popup_rounding),
            StyleVar::PopupBorderSize => StyleSlot::Float(&mut self.popup_border_size),
            StyleVar::FramePadding => StyleSlot::Vec2(&mut self.frame_padding),
            StyleVar::FrameRounding => StyleSlot::Float(&mut self.frame_rounding),
            StyleVar::FrameBorderSize => StyleSlot::Float(&mut self.frame_border_size),
            StyleVar::ItemSpacing => StyleSlot::Vec2(&mut self.item_spacing),
            StyleVar::ItemInnerSpacing => StyleSlot::Vec2(&mut self.item_inner_spacing),
            StyleVar::IndentSpacing => StyleSlot::Float(&mut self.indent_spacing),
            StyleVar::ScrollbarSize => StyleSlot::Float(&mut self.scrollbar_size),
            StyleVar::ScrollbarRounding => StyleSlot::Float(&mut self.scrollbar_rounding),
            StyleVar::GrabMinSize => StyleSlot::Float(&mut self.grab_min_size),
            StyleVar::ButtonTextAlign => StyleSlot::Vec2(&mut self.button_text_align),
            StyleVar::SelectableTextAlign => StyleSlot::Vec2(&mut self.selectable_text_align),
        }
    }

    /// Swaps `value` into the field designated by `var` and returns the previous value.
    fn exchange(&mut self, var: StyleVar, value: StyleVarValue) -> StyleVarValue {
        match (self.slot(var), value) {
            (StyleSlot::Float(f), StyleVarValue::Float(v)) => StyleVarValue::Float(std::mem::replace(f, v)),
            (StyleSlot::Vec2(f), StyleVarValue::Vec2(v)) => StyleVarValue::Vec2(std::mem::replace(f, v)),
            _ => panic!("style var {:?} pushed with a value of the wrong kind", var),
        }
    }

    /// Returns the palette entry for `idx`.
    pub fn color(&self, idx: StyleColor) -> Color { self.colors[idx as usize] }
}

impl Context {
    /// Overrides a palette entry until the matching [`Context::pop_style_color`].
    pub fn push_style_color(&mut self, idx: StyleColor, col: Color) {
        let backup = self.style.colors[idx as usize];
        self.color_stack.push((idx, backup));
        self.style.colors[idx as usize] = col;
    }

    /// Restores the `count` most recently pushed palette entries.
    pub fn pop_style_color(&mut self, count: usize) {
        assert!(count <= self.color_stack.len(), "pop_style_color({}) with only {} pushed", count, self.color_stack.len());
        for _ in 0..count {
            if let Some((idx, backup)) = self.color_stack.pop() {
                self.style.colors[idx as usize] = backup;
            }
        }
    }

    /// Overrides a style field until the matching [`Context::pop_style_var`].
    ///
    /// Panics if the value kind does not match the field.
    pub fn push_style_var(&mut self, var: StyleVar, value: StyleVarValue) {
        let backup = self.style.exchange(var, value);
        self.style_var_stack.push((var, backup));
    }

    /// Restores the `count` most recently pushed style fields.
    pub fn pop_style_var(&mut self, count: usize) {
        assert!(count <= self.style_var_stack.len(), "pop_style_var({}) with only {} pushed", count, self.style_var_stack.len());
        for _ in 0..count {
            if let Some((var, backup)) = self.style_var_stack.pop() {
                self.style.exchange(var, backup);
            }
        }
    }

    /// Runs `f` with a style field overridden, restoring it afterwards.
    pub fn with_style_var<R>(&mut self, var: StyleVar, value: StyleVarValue, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_style_var(var, value);
        let res = f(self);
        self.pop_style_var(1);
        res
    }

    /// Runs `f` with a palette entry overridden, restoring it afterwards.
    pub fn with_style_color<R>(&mut self, idx: StyleColor, col: Color, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_style_color(idx, col);
        let res = f(self);
        self.pop_style_color(1);
        res
    }

    /// Palette entry with the global alpha and `alpha_mul` applied.
    pub fn get_color(&self, idx: StyleColor, alpha_mul: f32) -> Color { self.style.colors[idx as usize].scale_alpha(self.style.alpha * alpha_mul) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_var_stack_restores_values() {
        let mut ctx = Context::new(Box::new(MonoFont::default()));
        let before = ctx.style.window_padding;
        ctx.push_style_var(StyleVar::WindowPadding, StyleVarValue::Vec2(vec2(1.0, 2.0)));
        ctx.push_style_var(StyleVar::Alpha, StyleVarValue::Float(0.5));
        assert_eq!(ctx.style.window_padding.x, 1.0);
        assert_eq!(ctx.style.alpha, 0.5);
        ctx.pop_style_var(2);
        assert_eq!(ctx.style.window_padding.x, before.x);
        assert_eq!(ctx.style.window_padding.y, before.y);
        assert_eq!(ctx.style.alpha, 1.0);
    }

    #[test]
    #[should_panic]
    fn style_var_kind_mismatch_panics() {
        let mut ctx = Context::new(Box::new(MonoFont::default()));
        ctx.push_style_var(StyleVar::Alpha, StyleVarValue::Vec2(vec2(1.0, 1.0)));
    }

    #[test]
    fn scoped_color_is_restored() {
        let mut ctx = Context::new(Box::new(MonoFont::default()));
        let before = ctx.style.color(StyleColor::Text);
        let inside = ctx.with_style_color(StyleColor::Text, color(1, 2, 3, 4), |ctx| ctx.style.color(StyleColor::Text));
        assert_eq!(inside, color(1, 2, 3, 4));
        assert_eq!(ctx.style.color(StyleColor::Text), before);
    }

    #[test]
    fn alpha_scaling() {
        assert_eq!(color(10, 10, 10, 200).scale_alpha(0.5).a, 100);
        assert_eq!(color(10, 10, 10, 200).scale_alpha(2.0).a, 200);
    }
}
