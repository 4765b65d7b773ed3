use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use tarea::commands::*;

#[derive(Parser)]
#[command(name = "tarea")]
#[command(about = "Simple terminal task list manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task text (quoted if it has spaces)
        text: String,
        /// Category (defaults to General)
        #[arg(short, long)]
        category: Option<String>,
        /// Start date in YYYY-MM-DD
        #[arg(short, long)]
        start: String,
        /// Due date in YYYY-MM-DD
        #[arg(short, long)]
        due: Option<String>,
        /// Priority (high, medium, low)
        #[arg(short, long)]
        priority: Option<String>,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },
    /// List tasks, newest first
    List {
        /// Search text and tags (case-insensitive)
        #[arg(short = 'q', long)]
        search: Option<String>,
        /// Status filter (all, completed, pending)
        #[arg(short = 's', long)]
        status: Option<String>,
        /// Category filter (exact match)
        #[arg(short, long)]
        category: Option<String>,
        /// Priority filter (high, medium, low)
        #[arg(short, long)]
        priority: Option<String>,
        /// Due filter (all, with-date, no-date, overdue)
        #[arg(short, long)]
        due: Option<String>,
    },
    /// Toggle a task between pending and complete
    Toggle {
        id: u64,
    },
    /// Edit a task (unspecified fields are kept)
    Edit {
        id: u64,
        /// New task text
        #[arg(short = 'x', long)]
        text: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New start date
        #[arg(short, long)]
        start: Option<String>,
        /// New due date
        #[arg(short, long)]
        due: Option<String>,
        /// New priority
        #[arg(short, long)]
        priority: Option<String>,
        /// New comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },
    /// Remove a task
    Remove {
        id: u64,
    },
    /// Show pending/completed/overdue counts
    Stats,
    /// List category filter options
    Categories,
    /// Manage the cloud snapshot slot
    Cloud {
        #[command(subcommand)]
        command: CloudCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

#[derive(Subcommand)]
enum CloudCommands {
    /// Copy the current tasks to the cloud slot
    Save,
    /// Replace local tasks with the cloud snapshot
    Sync,
    /// Show the last cloud save timestamp
    Status,
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Add { text, category, start, due, priority, tags }) => {
            cmd_add(text, category, start, due, priority, tags, false)
        }
        Some(Commands::List { search, status, category, priority, due }) => {
            cmd_list(search, status, category, priority, due)
        }
        Some(Commands::Toggle { id }) => cmd_toggle(id, false),
        Some(Commands::Edit { id, text, category, start, due, priority, tags }) => {
            cmd_edit(id, text, category, start, due, priority, tags, false)
        }
        Some(Commands::Remove { id }) => cmd_remove(id, false),
        Some(Commands::Stats) => cmd_stats(),
        Some(Commands::Categories) => cmd_categories(),
        Some(Commands::Cloud { command }) => match command {
            CloudCommands::Save => cmd_cloud_save(false),
            CloudCommands::Sync => cmd_cloud_sync(false),
            CloudCommands::Status => cmd_cloud_status(),
        },
        Some(Commands::Completions { shell }) => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    return;
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "tarea", &mut io::stdout());
        }
        None => cmd_list(None, None, None, None, None),
    }
}
