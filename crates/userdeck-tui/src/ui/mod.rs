//! Terminal UI module using ratatui.
//!
//! - `render`: Main frame rendering and layout
//! - `input`: Keyboard event handling
//! - `styles`: Color schemes and text styling
//! - `list`: The user list panel
//! - `detail`: The user detail panel

pub mod detail;
pub mod input;
pub mod list;
pub mod render;
pub mod styles;
