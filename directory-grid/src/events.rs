use crate::core::{Key, Modifiers, MouseButton};

/// Input delivered to [`DirectoryGrid::handle_event`](crate::DirectoryGrid::handle_event).
///
/// Positions are in grid content coordinates (scroll offset already removed).
/// Events prefixed with `Editor` target the rename overlay and are ignored when
/// no rename is in progress.
#[derive(Clone, Debug, PartialEq)]
pub enum GridEvent {
    /// A completed click in the grid body.
    ///
    /// Any button closes the rename overlay, but only [`MouseButton::Left`]
    /// selects or activates. Hosts report right-click selection as
    /// [`GridEvent::ContextTrigger`].
    MouseClicked {
        /// Pointer position.
        position: [f32; 2],
        /// Button that clicked.
        button: MouseButton,
        /// 1 for a single click, 2 for a double click.
        click_count: u32,
        /// Modifier keys held.
        modifiers: Modifiers,
    },
    /// Context-menu gesture (usually a right press).
    ContextTrigger {
        /// Pointer position.
        position: [f32; 2],
    },
    /// Mouse pressed and started dragging over the grid.
    DragStarted {
        /// Pointer position.
        position: [f32; 2],
    },
    /// Pointer moved while dragging.
    DragOver {
        /// Pointer position.
        position: [f32; 2],
    },
    /// Mouse released after a drag.
    DragEnded,
    /// Key released while the grid has focus.
    KeyReleased(Key),
    /// Key pressed in the rename field.
    EditorKeyPressed(Key),
    /// Key released in the rename field.
    EditorKeyReleased(Key),
    /// Text of the rename field changed.
    EditorTextChanged(String),
    /// The rename field lost keyboard focus.
    EditorFocusLost,
    /// Mouse released over the icon on the rename overlay.
    EditorIconClicked {
        /// 1 for a single click, 2 for a double click.
        click_count: u32,
    },
}
