//! Scripted session against a scratch directory: select, rename, reject a bad
//! name, then open a subdirectory. Run with `RUST_LOG=directory_grid=trace` to
//! see every transition.

use std::path::PathBuf;

use directory_grid::{
    ChooserHost, DirectoryGrid, Entry, FixedAdvanceMetrics, GridConfig, GridError, GridEvent, Key,
    Modifiers, MouseButton, StdFileSystemModel, VecEntryModel, Viewport, logging,
};
use tracing::info;

struct PrintingDialog;

impl ChooserHost for PrintingDialog {
    fn user_selected_entries(&mut self, entries: &[Entry]) {
        let names: Vec<String> = entries.iter().map(Entry::display_name).collect();
        info!(?names, "selection changed");
    }

    fn navigate_into(&mut self, entry: &Entry) {
        info!(%entry, "navigate into");
    }

    fn user_chose_entry(&mut self, entry: &Entry) {
        info!(%entry, "chose");
    }

    fn confirm_dialog(&mut self) {
        info!("confirm dialog");
    }

    fn set_status_text(&mut self, message: &str) {
        info!(message, "status");
    }

    fn reselect_and_reveal(&mut self, entry: &Entry) {
        info!(%entry, "reveal");
    }
}

fn scratch_dir() -> std::io::Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("directory-grid-demo-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(dir.join("projects"))?;
    std::fs::write(dir.join("notes.txt"), b"notes")?;
    std::fs::write(dir.join("todo.md"), b"- [ ] rename me")?;
    Ok(dir)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing_with_filter("directory_grid=trace,rename_walkthrough=info");

    let dir = scratch_dir()?;
    let model = VecEntryModel::from_entries(
        ["notes.txt", "projects", "todo.md"].map(|name| dir.join(name)),
    );
    let mut grid = DirectoryGrid::new(model, FixedAdvanceMetrics::default(), GridConfig::default())
        .with_viewport(Viewport::new(480.0, 120.0));
    let fs = StdFileSystemModel;
    let mut dialog = PrintingDialog;

    info!(cell = ?grid.cell_geometry(), rows = grid.layout().rows(), "grid ready");

    let todo = grid.cell_bounds(2).ok_or(GridError::NoEntryAtIndex { index: 2 })?;
    grid.handle_event(
        GridEvent::MouseClicked {
            position: [todo.pos[0] + 2.0, todo.pos[1] + 2.0],
            button: MouseButton::Left,
            click_count: 1,
            modifiers: Modifiers::default(),
        },
        &fs,
        &mut dialog,
    )?;

    grid.edit(&fs)?;
    grid.handle_event(GridEvent::EditorTextChanged("../escape".into()), &fs, &mut dialog)?;
    grid.handle_event(GridEvent::EditorKeyReleased(Key::Enter), &fs, &mut dialog)?;
    info!(still_editing = grid.is_editing(), "after rejected name");

    grid.handle_event(GridEvent::EditorTextChanged("done.md".into()), &fs, &mut dialog)?;
    grid.handle_event(GridEvent::EditorKeyReleased(Key::Enter), &fs, &mut dialog)?;
    info!(
        renamed = dir.join("done.md").exists(),
        reveal = ?grid.take_reveal_request(),
        "after rename"
    );

    let projects = grid.cell_bounds(1).ok_or(GridError::NoEntryAtIndex { index: 1 })?;
    grid.handle_event(
        GridEvent::MouseClicked {
            position: [projects.pos[0] + 2.0, projects.pos[1] + 2.0],
            button: MouseButton::Left,
            click_count: 2,
            modifiers: Modifiers::default(),
        },
        &fs,
        &mut dialog,
    )?;

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
