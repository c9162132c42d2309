mod json;
mod text;

pub use json::JsonOutput;
pub use text::{format_all_entries, format_last_entry, LAST_ENTRY_LABEL};
