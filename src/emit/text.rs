pub const LAST_ENTRY_LABEL: &str = "Last Enum Entry:";

pub fn format_last_entry(entry: &str) -> String {
    format!("{} {}", LAST_ENTRY_LABEL, entry)
}

/// Every entry on its own line, then the summary line
pub fn format_all_entries(entries: &[String], last_entry: &str) -> String {
    let mut output = String::new();
    for entry in entries {
        output.push_str(entry);
        output.push('\n');
    }
    output.push_str(&format_last_entry(last_entry));
    output
}
