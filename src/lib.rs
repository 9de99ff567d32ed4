//! powercells - grid viewport and hit-testing core
//!
//! The interaction engine of a minimal spreadsheet-style grid editor:
//! - Sparse per-axis size overrides over a dense default, clamped and persisted
//! - Scroll-follows-selection viewport per axis, partial-visibility policy
//! - Stateless pointer classification (input line, resize handles, cells)
//! - Drag-resize state machine committing through a SQLite sheet store
//!
//! Window plumbing, font rasterization, and drawing are external
//! collaborators: events come in through [`GridSession`]'s entry points and
//! rendering reads back through its accessors.
//!
//! # Usage
//!
//! ```no_run
//! use powercells::{GridSession, LayoutConfig};
//! use std::path::Path;
//!
//! let mut session = GridSession::open(
//!     LayoutConfig::default(),
//!     Path::new("sheet.db"),
//!     1024.0,
//!     768.0,
//! );
//! session.pointer_pressed(150.0, 100.0);
//! assert_eq!(session.active_index(powercells::Axis::Col), 1);
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod layout;
pub mod session;
pub mod storage;

pub use config::LayoutConfig;
pub use error::{PowercellsError, Result};
pub use layout::{Axis, AxisLayout, AxisViewport, SizeOverrides};
pub use session::{DragResize, GridSession, HitTarget, Key};
pub use storage::SqliteStore;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
