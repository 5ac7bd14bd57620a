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
#![deny(missing_docs)]
//! `anchor-ui` is the retained-state engine behind an immediate-mode GUI.
//!
//! The crate keeps everything that has to survive between frames inside one explicit [`Context`]:
//! widget identity derived from an ID stack, windows with their layout cursor, scroll and size memory,
//! keyboard/gamepad navigation scoring, popup and drag-and-drop state machines, and ini settings
//! persistence. Text metrics come from a [`Font`] implementation and drawing is recorded into
//! [`DrawData`] for an external [`Renderer`], so the crate stays backend and platform agnostic.

mod context;
mod drag_drop;
mod draw_list;
mod error;
mod font;
mod geom;
mod hash;
mod id_stack;
mod io;
mod layout;
mod nav;
mod platform;
mod popup;
mod resize;
mod scrollbar;
mod settings;
mod storage;
mod style;
mod widgets;
mod window;
mod windows;

pub use context::{Context, DATA_LAYOUT, DataLayout, VERSION, VERSION_NUM};
pub use drag_drop::{PAYLOAD_TYPE_MAX_LEN, Payload};
pub use draw_list::{DrawCmd, DrawCommand, DrawData, DrawList, Renderer};
pub use error::{Error, Result};
pub use font::{Font, MonoFont};
pub use geom::*;
pub use hash::{hash_data, hash_str};
pub use io::Io;
pub use platform::*;
pub use settings::SettingsHandler;
pub use storage::{Storage, StorageValue, WindowSettings};
pub use style::{Color, Style, StyleColor, StyleVar, StyleVarValue, color};
pub use window::{SizeCallback, SizeCallbackData, Window, WindowIdx};
pub use rs_math3d::Vec2f;

use bitflags::*;
use log::{debug, info, warn};

#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
/// 32-bit identifier of a window or widget, derived from the ID stack.
pub struct Id(u32);

impl Id {
    /// The null identifier, never produced for a live item.
    pub const NONE: Id = Id(0);

    /// Wraps a raw hash value.
    pub const fn new(value: u32) -> Self { Self(value) }

    /// Returns the raw numeric value wrapped by this ID.
    pub fn raw(self) -> u32 { self.0 }

    /// Returns `true` for the null identifier.
    pub fn is_none(self) -> bool { self.0 == 0 }

    /// Returns `true` for any non-null identifier.
    pub fn is_some(self) -> bool { self.0 != 0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Options passed to `begin` and friends that control window behaviour.
    pub struct WindowFlags : u32 {
        /// Hides the title bar.
        const NO_TITLE_BAR = 1 << 0;
        /// Disables user resizing with the grips and borders.
        const NO_RESIZE = 1 << 1;
        /// Disables user moving the window.
        const NO_MOVE = 1 << 2;
        /// Hides scrollbars; scrolling through code or the wheel still works.
        const NO_SCROLLBAR = 1 << 3;
        /// Ignores the mouse wheel for vertical scrolling.
        const NO_SCROLL_WITH_MOUSE = 1 << 4;
        /// Disables collapsing by double-clicking the title bar.
        const NO_COLLAPSE = 1 << 5;
        /// Resizes the window to its content every frame.
        const ALWAYS_AUTO_RESIZE = 1 << 6;
        /// Skips drawing the background and border.
        const NO_BACKGROUND = 1 << 7;
        /// Never loads or saves settings for this window.
        const NO_SAVED_SETTINGS = 1 << 8;
        /// Disables mouse hit testing, clicks pass through.
        const NO_MOUSE_INPUTS = 1 << 9;
        /// Reserves and draws a menu bar.
        const MENU_BAR = 1 << 10;
        /// Allows the horizontal scrollbar to appear.
        const HORIZONTAL_SCROLLBAR = 1 << 11;
        /// Does not take focus when transitioning from hidden to visible.
        const NO_FOCUS_ON_APPEARING = 1 << 12;
        /// Does not move to the front when focused.
        const NO_BRING_TO_FRONT_ON_FOCUS = 1 << 13;
        /// Always shows the vertical scrollbar.
        const ALWAYS_VERTICAL_SCROLLBAR = 1 << 14;
        /// Always shows the horizontal scrollbar.
        const ALWAYS_HORIZONTAL_SCROLLBAR = 1 << 15;
        /// Child windows without a border still use the window padding.
        const ALWAYS_USE_WINDOW_PADDING = 1 << 16;
        /// Keyboard/gamepad navigation is disabled inside the window.
        const NO_NAV_INPUTS = 1 << 18;
        /// The window is skipped by focus cycling.
        const NO_NAV_FOCUS = 1 << 19;
        /// Navigation is disabled entirely.
        const NO_NAV = Self::NO_NAV_INPUTS.bits() | Self::NO_NAV_FOCUS.bits();
        /// No title bar, resize, scrollbars or collapsing.
        const NO_DECORATION = Self::NO_TITLE_BAR.bits() | Self::NO_RESIZE.bits() | Self::NO_SCROLLBAR.bits() | Self::NO_COLLAPSE.bits();
        /// Ignores mouse and navigation inputs.
        const NO_INPUTS = Self::NO_MOUSE_INPUTS.bits() | Self::NO_NAV_INPUTS.bits() | Self::NO_NAV_FOCUS.bits();
        /// Child window whose navigation is merged into its parent.
        const NAV_FLATTENED = 1 << 23;
        /// Set internally for child windows.
        const CHILD_WINDOW = 1 << 24;
        /// Set internally for tooltips.
        const TOOLTIP = 1 << 25;
        /// Set internally for popups.
        const POPUP = 1 << 26;
        /// Set internally for modal popups.
        const MODAL = 1 << 27;
        /// Set internally for menus nested inside another menu.
        const CHILD_MENU = 1 << 28;
    }
}

impl WindowFlags {
    /// Returns `true` for child windows.
    pub fn is_child(&self) -> bool { self.intersects(Self::CHILD_WINDOW) }
    /// Returns `true` for popups (including modals and menus).
    pub fn is_popup(&self) -> bool { self.intersects(Self::POPUP) }
    /// Returns `true` for modal popups.
    pub fn is_modal(&self) -> bool { self.intersects(Self::MODAL) }
    /// Returns `true` for tooltips.
    pub fn is_tooltip(&self) -> bool { self.intersects(Self::TOOLTIP) }
    /// Returns `true` for menus nested in another menu.
    pub fn is_child_menu(&self) -> bool { self.intersects(Self::CHILD_MENU) }
    /// Returns `true` if the title bar is hidden.
    pub fn has_no_title_bar(&self) -> bool { self.intersects(Self::NO_TITLE_BAR) }
    /// Returns `true` if the window auto-resizes every frame.
    pub fn is_auto_resize(&self) -> bool { self.intersects(Self::ALWAYS_AUTO_RESIZE) }
    /// Returns `true` if user resizing is disabled.
    pub fn is_fixed(&self) -> bool { self.intersects(Self::NO_RESIZE) }
    /// Returns `true` if the window reserves a menu bar.
    pub fn has_menu_bar(&self) -> bool { self.intersects(Self::MENU_BAR) }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Conditions for the `set_next_window_*`/`set_window_*` family.
    pub struct Cond : u32 {
        /// Same as `ALWAYS`.
        const NONE = 0;
        /// Applies the value unconditionally.
        const ALWAYS = 1 << 0;
        /// Applies once per runtime session.
        const ONCE = 1 << 1;
        /// Applies if the window has no persisted settings yet.
        const FIRST_USE_EVER = 1 << 2;
        /// Applies when the window reappears after being hidden.
        const APPEARING = 1 << 3;
    }
}

impl Cond {
    pub(crate) fn or_always(self) -> Self { if self.is_empty() { Self::ALWAYS } else { self } }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Options for `is_window_focused`.
    pub struct FocusedFlags : u32 {
        /// Also true when a child of the window is focused.
        const CHILD_WINDOWS = 1 << 0;
        /// Tests from the root window of the current hierarchy.
        const ROOT_WINDOW = 1 << 1;
        /// True if any window is focused.
        const ANY_WINDOW = 1 << 2;
        /// `ROOT_WINDOW | CHILD_WINDOWS`.
        const ROOT_AND_CHILD_WINDOWS = Self::ROOT_WINDOW.bits() | Self::CHILD_WINDOWS.bits();
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Options for `is_window_hovered` and `is_item_hovered`.
    pub struct HoveredFlags : u32 {
        /// Window only: also true when a child is hovered.
        const CHILD_WINDOWS = 1 << 0;
        /// Window only: tests from the root window.
        const ROOT_WINDOW = 1 << 1;
        /// Window only: true if any window is hovered.
        const ANY_WINDOW = 1 << 2;
        /// True even if a popup normally blocks access to this item/window.
        const ALLOW_WHEN_BLOCKED_BY_POPUP = 1 << 3;
        /// True even if an active item blocks access to this item/window.
        const ALLOW_WHEN_BLOCKED_BY_ACTIVE_ITEM = 1 << 5;
        /// Item only: true even if the position is obstructed by another window.
        const ALLOW_WHEN_OVERLAPPED = 1 << 6;
        /// Item only: true even if the item is disabled.
        const ALLOW_WHEN_DISABLED = 1 << 7;
        /// Pure rectangle test.
        const RECT_ONLY = Self::ALLOW_WHEN_BLOCKED_BY_POPUP.bits() | Self::ALLOW_WHEN_BLOCKED_BY_ACTIVE_ITEM.bits() | Self::ALLOW_WHEN_OVERLAPPED.bits();
        /// `ROOT_WINDOW | CHILD_WINDOWS`.
        const ROOT_AND_CHILD_WINDOWS = Self::ROOT_WINDOW.bits() | Self::CHILD_WINDOWS.bits();
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Options for the popup API.
    pub struct PopupFlags : u32 {
        /// Open on left mouse release (for context popups).
        const MOUSE_BUTTON_LEFT = 0;
        /// Open on right mouse release (default for context popups).
        const MOUSE_BUTTON_RIGHT = 1;
        /// Open on middle mouse release.
        const MOUSE_BUTTON_MIDDLE = 2;
        /// Mask of the mouse button bits.
        const MOUSE_BUTTON_MASK = 0x1F;
        /// Does not open when a popup is already open at the same level.
        const NO_OPEN_OVER_EXISTING_POPUP = 1 << 5;
        /// Context window popups only: ignore clicks over items.
        const NO_OPEN_OVER_ITEMS = 1 << 6;
        /// `is_popup_open`: ignores the ID and tests any popup.
        const ANY_POPUP_ID = 1 << 7;
        /// `is_popup_open`: searches the whole stack, not just the current level.
        const ANY_POPUP_LEVEL = 1 << 8;
        /// `ANY_POPUP_ID | ANY_POPUP_LEVEL`.
        const ANY_POPUP = Self::ANY_POPUP_ID.bits() | Self::ANY_POPUP_LEVEL.bits();
    }
}

impl PopupFlags {
    /// Mouse button encoded in the low bits.
    pub fn mouse_button(&self) -> MouseButton {
        match self.bits() & Self::MOUSE_BUTTON_MASK.bits() {
            1 => MouseButton::Right,
            2 => MouseButton::Middle,
            _ => MouseButton::Left,
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Options for drag and drop sources and targets.
    pub struct DragDropFlags : u32 {
        /// Source: no preview tooltip is shown while dragging.
        const SOURCE_NO_PREVIEW_TOOLTIP = 1 << 0;
        /// Source: the source item keeps reporting as hovered while dragging.
        const SOURCE_NO_DISABLE_HOVER = 1 << 1;
        /// Source: hovering tree nodes/headers while dragging does not open them.
        const SOURCE_NO_HOLD_TO_OPEN_OTHERS = 1 << 2;
        /// Source: allows items without an ID by synthesizing one from their rectangle.
        const SOURCE_ALLOW_NULL_ID = 1 << 3;
        /// Source: external source, mouse state is not queried.
        const SOURCE_EXTERN = 1 << 4;
        /// Source: the payload outlives the source submission until the mouse button is released.
        const SOURCE_NO_AUTO_EXPIRE = 1 << 5;
        /// Target: returns the payload before the mouse button is released.
        const ACCEPT_BEFORE_DELIVERY = 1 << 10;
        /// Target: does not draw the default highlight rectangle.
        const ACCEPT_NO_DRAW_DEFAULT_RECT = 1 << 11;
        /// Target: asks the source to hide its preview tooltip.
        const ACCEPT_NO_PREVIEW_TOOLTIP = 1 << 12;
        /// Target: peeks at the payload before delivery without highlighting.
        const ACCEPT_PEEK_ONLY = Self::ACCEPT_BEFORE_DELIVERY.bits() | Self::ACCEPT_NO_DRAW_DEFAULT_RECT.bits();
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Global configuration stored in [`Io::config_flags`].
    pub struct ConfigFlags : u32 {
        /// Keyboard navigation is enabled.
        const NAV_ENABLE_KEYBOARD = 1 << 0;
        /// Gamepad navigation is enabled (the host fills the nav inputs).
        const NAV_ENABLE_GAMEPAD = 1 << 1;
        /// Navigation may ask the host to move the mouse cursor.
        const NAV_ENABLE_SET_MOUSE_POS = 1 << 2;
        /// `want_capture_keyboard` is not raised while navigation is active.
        const NAV_NO_CAPTURE_KEYBOARD = 1 << 3;
        /// Mouse position and buttons are ignored.
        const NO_MOUSE = 1 << 4;
        /// The host should not change the mouse cursor.
        const NO_MOUSE_CURSOR_CHANGE = 1 << 5;
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Per-item behaviour flags pushed with `push_item_flag`.
    pub struct ItemFlags : u32 {
        /// Excluded from TAB focus cycling.
        const NO_TAB_STOP = 1 << 0;
        /// Buttons repeat while held.
        const BUTTON_REPEAT = 1 << 1;
        /// Disabled: no interaction.
        const DISABLED = 1 << 2;
        /// Excluded from directional navigation.
        const NO_NAV = 1 << 3;
        /// Never selected as the default focus of a window.
        const NO_NAV_DEFAULT_FOCUS = 1 << 4;
        /// Selectables do not close their parent popup.
        const SELECTABLE_DONT_CLOSE_POPUP = 1 << 5;
        /// Read-only widgets.
        const READ_ONLY = 1 << 7;
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Status of the last submitted item.
    pub struct ItemStatusFlags : u32 {
        /// Mouse position is within the item rectangle.
        const HOVERED_RECT = 1 << 0;
        /// The display rectangle differs from the layout rectangle.
        const HAS_DISPLAY_RECT = 1 << 1;
        /// The value was edited this frame.
        const EDITED = 1 << 2;
        /// A selectable changed its selection state.
        const TOGGLED_SELECTION = 1 << 3;
        /// A tree node changed its open state.
        const TOGGLED_OPEN = 1 << 4;
        /// The item reports its deactivation.
        const HAS_DEACTIVATED = 1 << 5;
        /// The item was deactivated this frame.
        const DEACTIVATED = 1 << 6;
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Options for `button_behavior` and buttons.
    pub struct ButtonFlags : u32 {
        /// Reacts to the left mouse button (default).
        const MOUSE_BUTTON_LEFT = 1 << 0;
        /// Reacts to the right mouse button.
        const MOUSE_BUTTON_RIGHT = 1 << 1;
        /// Reacts to the middle mouse button.
        const MOUSE_BUTTON_MIDDLE = 1 << 2;
        /// Mask of the mouse button bits.
        const MOUSE_BUTTON_MASK = Self::MOUSE_BUTTON_LEFT.bits() | Self::MOUSE_BUTTON_RIGHT.bits() | Self::MOUSE_BUTTON_MIDDLE.bits();
        /// Returns true on click (mouse down event).
        const PRESSED_ON_CLICK = 1 << 4;
        /// Returns true on click then release over the item (default).
        const PRESSED_ON_CLICK_RELEASE = 1 << 5;
        /// Returns true on click then release anywhere.
        const PRESSED_ON_CLICK_RELEASE_ANYWHERE = 1 << 6;
        /// Returns true on release even without a prior click on the item.
        const PRESSED_ON_RELEASE = 1 << 7;
        /// Returns true on double-click.
        const PRESSED_ON_DOUBLE_CLICK = 1 << 8;
        /// Returns true when hovered long enough while dragging a payload.
        const PRESSED_ON_DRAG_DROP_HOLD = 1 << 9;
        /// Holding the button repeats the press.
        const REPEAT = 1 << 10;
        /// Tests hovering against the root window instead of the child.
        const FLATTEN_CHILDREN = 1 << 11;
        /// Allows later items to overlap this one.
        const ALLOW_ITEM_OVERLAP = 1 << 12;
        /// Pressing does not close the parent popup.
        const DONT_CLOSE_POPUPS = 1 << 13;
        /// Disabled, never reacts.
        const DISABLED = 1 << 14;
        /// Aligns the button to the text baseline.
        const ALIGN_TEXT_BASE_LINE = 1 << 15;
        /// Does not react when a modifier key is held.
        const NO_KEY_MODIFIERS = 1 << 16;
        /// Does not keep the active id while held.
        const NO_HOLDING_ACTIVE_ID = 1 << 17;
        /// Does not move the nav focus on click.
        const NO_NAV_FOCUS = 1 << 18;
        /// Does not report as hovered when nav-focused.
        const NO_HOVERED_ON_FOCUS = 1 << 19;
        /// Default press policy.
        const PRESSED_ON_DEFAULT = Self::PRESSED_ON_CLICK_RELEASE.bits();
        /// Mask of the press policy bits.
        const PRESSED_ON_MASK = Self::PRESSED_ON_CLICK.bits() | Self::PRESSED_ON_CLICK_RELEASE.bits() | Self::PRESSED_ON_CLICK_RELEASE_ANYWHERE.bits() | Self::PRESSED_ON_RELEASE.bits() | Self::PRESSED_ON_DOUBLE_CLICK.bits() | Self::PRESSED_ON_DRAG_DROP_HOLD.bits();
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Options for `selectable` and menu items.
    pub struct SelectableFlags : u32 {
        /// Clicking does not close the parent popup.
        const DONT_CLOSE_POPUPS = 1 << 0;
        /// Also reports double-clicks.
        const ALLOW_DOUBLE_CLICK = 1 << 2;
        /// Cannot be selected, text is greyed out.
        const DISABLED = 1 << 3;
        /// Later items may overlap this one.
        const ALLOW_ITEM_OVERLAP = 1 << 4;
        /// Does not keep the active id while held.
        const NO_HOLDING_ACTIVE_ID = 1 << 20;
        /// Selects on mouse down.
        const SELECT_ON_CLICK = 1 << 22;
        /// Selects on mouse release.
        const SELECT_ON_RELEASE = 1 << 23;
        /// Spans the available width instead of the full content width.
        const SPAN_AVAIL_WIDTH = 1 << 24;
        /// Draws the hovered colour while held even when not hovered.
        const DRAW_HOVERED_WHEN_HELD = 1 << 25;
        /// Moves the nav focus when hovered.
        const SET_NAV_ID_ON_HOVER = 1 << 26;
        /// Does not pad the selection with half the item spacing.
        const NO_PAD_WITH_HALF_SPACING = 1 << 27;
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Options for `begin_combo`.
    pub struct ComboFlags : u32 {
        /// Aligns the popup toward the left.
        const POPUP_ALIGN_LEFT = 1 << 0;
        /// Shows about 4 items.
        const HEIGHT_SMALL = 1 << 1;
        /// Shows about 8 items (default).
        const HEIGHT_REGULAR = 1 << 2;
        /// Shows about 20 items.
        const HEIGHT_LARGE = 1 << 3;
        /// Shows as many items as fit.
        const HEIGHT_LARGEST = 1 << 4;
        /// Hides the arrow button.
        const NO_ARROW_BUTTON = 1 << 5;
        /// Shows only the arrow button.
        const NO_PREVIEW = 1 << 6;
        /// Mask of the height bits.
        const HEIGHT_MASK = Self::HEIGHT_SMALL.bits() | Self::HEIGHT_REGULAR.bits() | Self::HEIGHT_LARGE.bits() | Self::HEIGHT_LARGEST.bits();
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Keyboard modifiers currently held.
    pub struct KeyModFlags : u32 {
        /// Control.
        const CTRL = 1 << 0;
        /// Shift.
        const SHIFT = 1 << 1;
        /// Alt.
        const ALT = 1 << 2;
        /// Super/Cmd/Windows.
        const SUPER = 1 << 3;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Cardinal direction used by navigation and popup placement.
pub enum Dir {
    /// Toward negative x.
    Left = 0,
    /// Toward positive x.
    Right = 1,
    /// Toward negative y.
    Up = 2,
    /// Toward positive y.
    Down = 3,
}

impl Dir {
    /// Returns 0 for horizontal directions and 1 for vertical ones.
    pub fn axis(self) -> usize {
        match self {
            Dir::Left | Dir::Right => 0,
            Dir::Up | Dir::Down => 1,
        }
    }

    /// Returns the opposite direction.
    pub fn flip(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Mouse buttons tracked by [`Io`].
pub enum MouseButton {
    /// Primary button.
    Left = 0,
    /// Secondary button.
    Right = 1,
    /// Middle button.
    Middle = 2,
}

impl MouseButton {
    /// Number of tracked buttons.
    pub const COUNT: usize = 3;
    /// All tracked buttons in index order.
    pub const ALL: [MouseButton; Self::COUNT] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

    /// Returns the array index of the button.
    pub fn index(self) -> usize { self as usize }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Keys the engine reacts to; the host maps its own key codes onto these.
pub enum Key {
    /// Tab.
    Tab = 0,
    /// Left arrow.
    LeftArrow,
    /// Right arrow.
    RightArrow,
    /// Up arrow.
    UpArrow,
    /// Down arrow.
    DownArrow,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Insert.
    Insert,
    /// Delete.
    Delete,
    /// Backspace.
    Backspace,
    /// Space.
    Space,
    /// Enter/Return.
    Enter,
    /// Escape.
    Escape,
    /// Keypad enter.
    KeyPadEnter,
    /// A, for select-all shortcuts.
    A,
    /// C, for copy shortcuts.
    C,
    /// V, for paste shortcuts.
    V,
    /// X, for cut shortcuts.
    X,
    /// Y, for redo shortcuts.
    Y,
    /// Z, for undo shortcuts.
    Z,
}

impl Key {
    /// Number of keys.
    pub const COUNT: usize = 22;

    /// Returns the array index of the key.
    pub fn index(self) -> usize { self as usize }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Analog navigation inputs, filled by the host for gamepads and derived from keys for keyboards.
pub enum NavInput {
    /// Activate/open/toggle (gamepad A).
    Activate = 0,
    /// Cancel/close/exit (gamepad B).
    Cancel,
    /// Text input (gamepad Y).
    Input,
    /// Menu/windowing (gamepad X).
    Menu,
    /// D-pad left.
    DpadLeft,
    /// D-pad right.
    DpadRight,
    /// D-pad up.
    DpadUp,
    /// D-pad down.
    DpadDown,
    /// Left stick left.
    LStickLeft,
    /// Left stick right.
    LStickRight,
    /// Left stick up.
    LStickUp,
    /// Left stick down.
    LStickDown,
    /// Previous window (gamepad LB).
    FocusPrev,
    /// Next window (gamepad RB).
    FocusNext,
    /// Slower tweaks.
    TweakSlow,
    /// Faster tweaks.
    TweakFast,
    /// Alt key mapped from the keyboard.
    KeyMenu,
    /// Left arrow mapped from the keyboard.
    KeyLeft,
    /// Right arrow mapped from the keyboard.
    KeyRight,
    /// Up arrow mapped from the keyboard.
    KeyUp,
    /// Down arrow mapped from the keyboard.
    KeyDown,
}

impl NavInput {
    /// Number of navigation inputs.
    pub const COUNT: usize = 21;
    /// Number of inputs the host may set; the remaining ones are derived from the keyboard.
    pub const HOST_COUNT: usize = NavInput::KeyMenu as usize;

    /// Returns the array index of the input.
    pub fn index(self) -> usize { self as usize }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Mouse cursor shape requested by the UI.
pub enum MouseCursor {
    /// Default arrow.
    Arrow,
    /// Text input I-beam.
    TextInput,
    /// Move/resize in all directions.
    ResizeAll,
    /// Vertical resize.
    ResizeNS,
    /// Horizontal resize.
    ResizeEW,
    /// Bottom-left/top-right diagonal resize.
    ResizeNESW,
    /// Top-left/bottom-right diagonal resize.
    ResizeNWSE,
    /// Hand pointer.
    Hand,
    /// Interaction not allowed.
    NotAllowed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Source of the last interaction.
pub enum InputSource {
    /// No input yet.
    None,
    /// Mouse interaction.
    Mouse,
    /// Navigation interaction, unspecified device.
    Nav,
    /// Keyboard navigation.
    NavKeyboard,
    /// Gamepad navigation.
    NavGamepad,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Navigation layer of a window: its main body or its menu/title bar.
pub enum NavLayer {
    /// Main scrolling layer.
    Main = 0,
    /// Menu bar and title bar layer.
    Menu = 1,
}

impl NavLayer {
    /// Number of navigation layers.
    pub const COUNT: usize = 2;

    /// Returns the array index of the layer.
    pub fn index(self) -> usize { self as usize }

    /// Returns the other layer.
    pub fn toggle(self) -> NavLayer {
        match self {
            NavLayer::Main => NavLayer::Menu,
            NavLayer::Menu => NavLayer::Main,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Direction in which items are laid out.
pub enum LayoutType {
    /// Items flow left to right (menu bars).
    Horizontal,
    /// Items flow top to bottom.
    Vertical,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Placement policy used by [`Context::find_best_window_pos_for_popup_ex`].
pub enum PopupPositionPolicy {
    /// Right, down, up, left.
    Default,
    /// Down, right, left, up.
    ComboBox,
    /// Offset from the mouse cursor.
    Tooltip,
}
