#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("permission denied") {
        suggestions.push(
            "Check that the data directory is writable, or set data_dir in config.toml".to_string(),
        );
    }

    if msg_lower.contains("no space left") || msg_lower.contains("disk full") {
        suggestions.push("Free some disk space; your lists are kept in memory until then".to_string());
    }

    if msg_lower.contains("read-only") {
        suggestions.push("Point data_dir in config.toml at a writable location".to_string());
    }

    if msg_lower.contains("at least 2 options") {
        suggestions.push("Give the list a title and fill in two or more option rows".to_string());
    }

    if msg_lower.contains("locked") {
        suggestions.push("Locked lists can still be edited, just not deleted".to_string());
    }

    suggestions
}
