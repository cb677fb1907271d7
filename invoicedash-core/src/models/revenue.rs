use serde::{Deserialize, Serialize};

/// Monthly revenue reference row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revenue {
    /// Three-letter month label, e.g. "Jan"
    pub month: String,
    pub revenue: i32,
}
