use crate::models::{Priority, Task};
use chrono::NaiveDate;
use std::str::FromStr;

/// Status leg of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "completed" | "done" => Ok(StatusFilter::Completed),
            "pending" => Ok(StatusFilter::Pending),
            other => Err(format!(
                "invalid status '{}'. Use all, completed or pending.",
                other
            )),
        }
    }
}

/// Due-date leg of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DueFilter {
    #[default]
    All,
    WithDate,
    NoDate,
    Overdue,
}

impl FromStr for DueFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(DueFilter::All),
            "with-date" => Ok(DueFilter::WithDate),
            "no-date" => Ok(DueFilter::NoDate),
            "overdue" => Ok(DueFilter::Overdue),
            other => Err(format!(
                "invalid due filter '{}'. Use all, with-date, no-date or overdue.",
                other
            )),
        }
    }
}

/// Filter parameters for listing tasks. A task must pass every leg.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against text and tags.
    /// Empty matches everything.
    pub search: String,
    pub status: StatusFilter,
    /// `None` means all categories; `Some` is an exact,
    /// case-sensitive match.
    pub category: Option<String>,
    /// `None` means all priorities.
    pub priority: Option<Priority>,
    pub due: DueFilter,
}

impl TaskFilter {
    /// Whether `task` passes every leg of the filter. `today` anchors
    /// the overdue check.
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        let query = self.search.trim().to_lowercase();
        let search_ok = query.is_empty()
            || task.text.to_lowercase().contains(&query)
            || task.tags.iter().any(|t| t.to_lowercase().contains(&query));

        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Completed => task.completed,
            StatusFilter::Pending => !task.completed,
        };

        let category_ok = match &self.category {
            None => true,
            Some(c) => task.category == *c,
        };

        let priority_ok = match self.priority {
            None => true,
            Some(p) => task.priority == p,
        };

        let due_ok = match self.due {
            DueFilter::All => true,
            DueFilter::WithDate => !task.due_date.is_empty(),
            DueFilter::NoDate => task.due_date.is_empty(),
            DueFilter::Overdue => task.is_overdue(today),
        };

        search_ok && status_ok && category_ok && priority_ok && due_ok
    }
}
