use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category assigned when none is given.
pub const DEFAULT_CATEGORY: &str = "General";

/// Start date substituted when a persisted record carries none.
pub const DEFAULT_START_DATE: &str = "2024-01-01";

/// Task priority. Persisted with the original locale's tokens
/// (`alta`/`media`/`baja`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    #[serde(rename = "alta")]
    High,
    #[serde(rename = "media")]
    Medium,
    #[serde(rename = "baja")]
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    /// Parses a persisted token. Only the three exact tokens are accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "alta" => Some(Priority::High),
            "media" => Some(Priority::Medium),
            "baja" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Priority {
    type Err = String;

    /// Accepts both the English names and the persisted tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "alta" => Ok(Priority::High),
            "medium" | "media" => Ok(Priority::Medium),
            "low" | "baja" => Ok(Priority::Low),
            other => Err(format!(
                "invalid priority '{}'. Use high, medium or low.",
                other
            )),
        }
    }
}

/// Represents a single task in the task list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task, assigned at creation.
    pub id: u64,
    /// The task description. Never empty once stored.
    pub text: String,
    /// Whether the task has been completed.
    #[serde(default)]
    pub completed: bool,
    /// Timestamp when the task was created (ISO 8601). Immutable.
    pub created_at: String,
    /// The date the task is scheduled to start (YYYY-MM-DD).
    pub start_date: String,
    /// Category the task belongs to. Never empty; defaults to "General".
    pub category: String,
    /// Task priority.
    #[serde(default)]
    pub priority: Priority,
    /// Due date (YYYY-MM-DD). Empty string means no due date.
    #[serde(default)]
    pub due_date: String,
    /// Free-form tags, in input order. Not deduplicated.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    /// A task is overdue when it has a due date strictly before `today`
    /// and is not completed. Completed tasks are never overdue; neither
    /// are tasks whose due date does not parse.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.completed || self.due_date.is_empty() {
            return false;
        }
        match NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d") {
            Ok(due) => due < today,
            Err(_) => false,
        }
    }
}

/// Splits a comma-separated tags string into trimmed, non-empty tags.
/// Duplicates are kept.
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Trims a category, falling back to "General" when nothing remains.
pub fn normalize_category(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}
