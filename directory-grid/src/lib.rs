#![deny(missing_docs)]
//! Wrapped grid of directory entries with in-place rename, for file chooser
//! dialogs.
//!
//! The crate is toolkit-agnostic: the host dialog feeds pointer/keyboard input
//! as [`GridEvent`]s, measures text through [`TextMetrics`], and receives
//! selection and activation callbacks through [`ChooserHost`]. Everything that
//! touches the disk goes through a [`FileSystemModel`]; [`StdFileSystemModel`]
//! is the `std::fs` implementation.
//!
//! Pieces:
//! - [`CellSizeCalculator`]: uniform cell size from the widest label
//! - [`GridLayout`]: vertical-wrap placement and hit testing
//! - [`SelectionController`]: single/multi selection with drag batching
//! - [`InlineRenameEditor`]: the rename overlay session
//! - [`DirectoryGrid`]: ties them together behind one `handle_event` entry point

mod cell_size;
mod config;
mod core;
mod events;
mod fs;
mod grid;
mod host;
mod layout;
#[cfg(feature = "tracing")]
pub mod logging;
mod model;
mod rename;
mod selection;
#[cfg(test)]
mod testing;

pub use cell_size::{CellGeometry, CellSizeCalculator, FixedAdvanceMetrics, TextMetrics};
pub use config::{DEFAULT_ICON_SIZE, GridConfig, HEIGHT_PADDING, Insets, Viewport, WIDTH_PADDING};
pub use core::{Entry, GridError, Key, Modifiers, MouseButton, Rect};
pub use events::GridEvent;
pub use fs::{FileSystemModel, Icon, StdFileSystemModel, invalid_file_name_reason};
pub use grid::DirectoryGrid;
pub use host::ChooserHost;
pub use layout::GridLayout;
pub use model::{EntryModel, ModelChange, VecEntryModel};
pub use rename::{EditSession, InlineRenameEditor, RenameOutcome};
pub use selection::SelectionController;
