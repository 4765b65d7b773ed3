//! # Tarea
//!
//! A terminal task list manager written in Rust. Tasks carry a category,
//! priority, start date, optional due date and free-form tags; the
//! collection is persisted as JSON and can be snapshotted to a second
//! "cloud" slot for manual backup and restore.
//!
//! ## Features
//!
//! *   **Robust loading**: saved records are normalized field by field, so
//!     corrupted or foreign-schema data degrades to defaults instead of
//!     breaking the list.
//! *   **Filtering & search**: combine a free-text query (matched against
//!     text and tags) with status, category, priority and due-date filters.
//! *   **Overdue tracking**: tasks with a due date before today are
//!     highlighted until they are completed.
//! *   **Cloud snapshot**: a manual save/restore slot with a recorded sync
//!     timestamp. No network involved; the "cloud" is a second local slot.
//! *   **Data persistence**: stored in standard XDG data directories
//!     (JSON format).
//!
//! ## Usage
//!
//! ```bash
//! # Add a task
//! tarea add "Buy milk" --start 2026-03-01 --category Home --priority high --tags "urgent, shopping"
//!
//! # List pending tasks in a category
//! tarea list --status pending --category Home
//!
//! # Search text and tags, show only overdue
//! tarea list --search milk --due overdue
//!
//! # Complete / reopen a task
//! tarea toggle <ID>
//!
//! # Edit fields (unspecified fields are kept)
//! tarea edit <ID> --text "Buy oat milk" --priority low
//!
//! # Remove a task
//! tarea remove <ID>
//!
//! # Snapshot to the cloud slot and restore from it
//! tarea cloud save
//! tarea cloud sync
//! tarea cloud status
//! ```
//!
//! ## Data Storage
//!
//! Slots are saved in your local data directory:
//! *   Linux: `~/.local/share/tarea/`
//! *   macOS: `~/Library/Application Support/tarea/`
//! *   Windows: `%APPDATA%\tarea\`
//!
//! You can override the directory by setting the `TAREA_DIR` environment
//! variable. The primary slot is `tasks.json`; the cloud snapshot lives in
//! `cloud.json` with its timestamp in `last_sync.json`.

pub mod clock;
pub mod commands;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod storage;
pub mod store;
