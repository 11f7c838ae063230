//! Shared command handler flows

pub mod list;

pub use list::{render_detail, run_list_command, run_view_command};
