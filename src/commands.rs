use crate::clock::SystemClock;
use crate::filter::{DueFilter, StatusFilter, TaskFilter};
use crate::models::Priority;
use crate::storage::FileStorage;
use crate::store::{TaskDraft, TaskStore};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

fn open_store() -> TaskStore<FileStorage, SystemClock> {
    TaskStore::load(FileStorage::new(), SystemClock)
}

/// Adds a new task.
pub fn cmd_add(
    text: String,
    category: Option<String>,
    start: String,
    due: Option<String>,
    priority: Option<String>,
    tags: Option<String>,
    silent: bool,
) {
    let priority = match priority {
        Some(p) => match p.parse::<Priority>() {
            Ok(p) => p,
            Err(e) => {
                if !silent { eprintln!("{}", e); }
                return;
            }
        },
        None => Priority::default(),
    };

    let mut store = open_store();
    let draft = TaskDraft {
        text,
        category: category.unwrap_or_default(),
        start_date: start,
        due_date: due.unwrap_or_default(),
        priority,
        tags: tags.unwrap_or_default(),
    };
    match store.add(draft) {
        Ok(id) => {
            if !silent { println!("Task added (id = {})", id); }
        }
        Err(e) => {
            if !silent { eprintln!("{}", e); }
        }
    }
}

/// Toggles a task's completed flag.
pub fn cmd_toggle(id: u64, silent: bool) {
    let mut store = open_store();
    match store.toggle(id) {
        Ok(true) => {
            let done = store.get(id).map(|t| t.completed).unwrap_or(false);
            if !silent {
                println!(
                    "Task {} marked as {}.",
                    id,
                    if done { "complete" } else { "pending" }
                );
            }
        }
        Ok(false) => {
            if !silent { eprintln!("Task {} not found.", id); }
        }
        Err(e) => {
            if !silent { eprintln!("{}", e); }
        }
    }
}

/// Edits a task. Unspecified fields keep their current values.
pub fn cmd_edit(
    id: u64,
    text: Option<String>,
    category: Option<String>,
    start: Option<String>,
    due: Option<String>,
    priority: Option<String>,
    tags: Option<String>,
    silent: bool,
) {
    let mut store = open_store();
    let Some(current) = store.get(id).cloned() else {
        if !silent { eprintln!("Task {} not found.", id); }
        return;
    };

    let priority = match priority {
        Some(p) => match p.parse::<Priority>() {
            Ok(p) => p,
            Err(e) => {
                if !silent { eprintln!("{}", e); }
                return;
            }
        },
        None => current.priority,
    };

    let draft = TaskDraft {
        text: text.unwrap_or(current.text),
        category: category.unwrap_or(current.category),
        start_date: start.unwrap_or(current.start_date),
        due_date: due.unwrap_or(current.due_date),
        priority,
        tags: tags.unwrap_or_else(|| current.tags.join(", ")),
    };

    match store.edit(id, draft) {
        Ok(true) => {
            if !silent { println!("Task {} updated.", id); }
        }
        Ok(false) => {
            if !silent { eprintln!("Task {} not found.", id); }
        }
        Err(e) => {
            if !silent { eprintln!("{}", e); }
        }
    }
}

/// Removes a task.
pub fn cmd_remove(id: u64, silent: bool) {
    let mut store = open_store();
    match store.remove(id) {
        Ok(true) => {
            if !silent { println!("Task {} removed.", id); }
        }
        Ok(false) => {
            if !silent { eprintln!("Task {} not found.", id); }
        }
        Err(e) => {
            if !silent { eprintln!("{}", e); }
        }
    }
}

/// Lists tasks passing the given filters in a formatted table.
pub fn cmd_list(
    search: Option<String>,
    status: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    due: Option<String>,
) {
    let status = match status.as_deref().map(str::parse::<StatusFilter>) {
        Some(Ok(s)) => s,
        Some(Err(e)) => {
            eprintln!("{}", e);
            return;
        }
        None => StatusFilter::All,
    };
    let due_filter = match due.as_deref().map(str::parse::<DueFilter>) {
        Some(Ok(d)) => d,
        Some(Err(e)) => {
            eprintln!("{}", e);
            return;
        }
        None => DueFilter::All,
    };
    let priority = match priority.as_deref().map(str::parse::<Priority>) {
        Some(Ok(p)) => Some(p),
        Some(Err(e)) => {
            eprintln!("{}", e);
            return;
        }
        None => None,
    };

    let filter = TaskFilter {
        search: search.unwrap_or_default(),
        status,
        category,
        priority,
        due: due_filter,
    };

    let store = open_store();
    let tasks = store.filtered(&filter);
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Task").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Priority").add_attribute(Attribute::Bold),
            Cell::new("Start").add_attribute(Attribute::Bold),
            Cell::new("Due").add_attribute(Attribute::Bold),
            Cell::new("Tags").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for t in tasks {
        let overdue = store.is_overdue(t);
        let due_cell = if t.due_date.is_empty() {
            Cell::new("-")
        } else if overdue {
            Cell::new(format!("{} (overdue)", t.due_date)).fg(Color::Red)
        } else {
            Cell::new(&t.due_date)
        };

        let priority_color = match t.priority {
            Priority::High => Color::Red,
            Priority::Medium => Color::Yellow,
            Priority::Low => Color::Green,
        };

        let status = if t.completed { "Done" } else { "Pending" };
        let status_color = if t.completed { Color::Green } else { Color::Yellow };

        table.add_row(vec![
            Cell::new(t.id),
            Cell::new(&t.text),
            Cell::new(&t.category),
            Cell::new(t.priority).fg(priority_color),
            Cell::new(&t.start_date),
            due_cell,
            Cell::new(t.tags.join(", ")),
            Cell::new(status).fg(status_color),
        ]);
    }

    println!("{table}");
}

/// Prints pending/completed/overdue counts.
pub fn cmd_stats() {
    let store = open_store();
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Pending", "Completed", "Overdue"]);
    table.add_row(vec![
        store.pending_count().to_string(),
        store.completed_count().to_string(),
        store.overdue_count().to_string(),
    ]);
    println!("{table}");
}

/// Prints the category filter options.
pub fn cmd_categories() {
    let store = open_store();
    for category in store.category_options() {
        println!("{}", category);
    }
}

/// Saves the current collection to the cloud slot.
pub fn cmd_cloud_save(silent: bool) {
    let mut store = open_store();
    match store.save_to_cloud() {
        Ok(stamp) => {
            if !silent { println!("Saved {} tasks to cloud at {}.", store.tasks().len(), stamp); }
        }
        Err(e) => {
            if !silent { eprintln!("{}", e); }
        }
    }
}

/// Replaces the local collection with the cloud snapshot.
pub fn cmd_cloud_sync(silent: bool) {
    let mut store = open_store();
    match store.sync_from_cloud() {
        Ok(count) => {
            if !silent { println!("Restored {} tasks from cloud.", count); }
        }
        Err(e) => {
            if !silent { eprintln!("{}", e); }
        }
    }
}

/// Prints the timestamp of the last cloud save.
pub fn cmd_cloud_status() {
    let store = open_store();
    match store.last_sync() {
        Some(stamp) => println!("Last cloud save: {}", stamp),
        None => println!("Never saved to cloud."),
    }
}
