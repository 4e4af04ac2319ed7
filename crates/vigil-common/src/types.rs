use serde::{Deserialize, Serialize};

/// One verification problem reported by a check evaluator.
///
/// The `title` is the category label (e.g. `"Docker verification error"` or
/// a user-supplied notification title); `message` is the human-readable
/// detail and may embed newlines. Findings are immutable once created and
/// reporters receive them in evaluator insertion order.
///
/// # Examples
///
/// ```
/// use vigil_common::Finding;
///
/// let f = Finding::new("Docker verification error", "Docker container 'db' is not running");
/// assert_eq!(f.title, "Docker verification error");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub title: String,
    pub message: String,
}

impl Finding {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
