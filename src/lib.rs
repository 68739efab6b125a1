//! strand - a small terminal text editor
//!
//! The core of the crate is the in-memory text model and its incremental
//! syntax highlighting:
//! - [`row`]: one document line with its tab-expanded render form and the
//!   character-index / render-column coordinate mapping
//! - [`buffer`]: the ordered row store and its mutation operations
//! - [`syntax`]: static language profiles and the per-row highlight scan,
//!   with open-block-comment state carried across rows
//! - [`search`]: wrap-around incremental search with a transient highlight
//!   overlay
//!
//! Around that core sit thin terminal modules: [`terminal`] (raw mode),
//! [`view`] (frame composition), [`input`] (keypress dispatch and prompts),
//! and [`editor`] (the session object tying it all together).

pub mod buffer;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editor;
pub mod input;
pub mod row;
pub mod search;
pub mod syntax;
pub mod terminal;
pub mod tracing;
pub mod view;

// Re-export commonly used types
pub use buffer::{Buffer, BufferError};
pub use config::Config;
pub use editor::Editor;
pub use row::Row;
pub use search::{Direction, Search};
pub use syntax::Highlight;
