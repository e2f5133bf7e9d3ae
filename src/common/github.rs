//! GitHub Actions workflow command helpers.
//!
//! Produces lines in workflow command format:
//! ::error file={name},title={title}::{message}

/// Annotation level of a workflow command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Notice,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Notice => "notice",
        }
    }
}

/// Build a single workflow command line (without trailing newline).
pub fn annotation(level: Level, file: Option<&str>, title: Option<&str>, message: &str) -> String {
    let mut props = Vec::new();
    if let Some(file) = file.filter(|f| !f.is_empty()) {
        props.push(format!("file={}", escape_property(file)));
    }
    if let Some(title) = title {
        props.push(format!("title={}", escape_property(title)));
    }

    if props.is_empty() {
        format!("::{}::{}", level.as_str(), escape_data(message))
    } else {
        format!("::{} {}::{}", level.as_str(), props.join(","), escape_data(message))
    }
}

/// Escape special characters in a command message.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape special characters in a command property value.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
