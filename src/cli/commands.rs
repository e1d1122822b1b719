use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "slate", about = concat!("[#] slate v", env!("CARGO_PKG_VERSION"), " - your tasks, one slate"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory (default: ~/.slate)
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),
    /// List tasks, optionally filtered and sorted
    List(ListArgs),
    /// Show task details
    Show(ShowArgs),
    /// Edit a task's fields
    Edit(EditArgs),
    /// Toggle a task's completion
    Toggle(ToggleArgs),
    /// Delete a task
    Delete(DeleteArgs),
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: String,
    /// Description text
    #[arg(long, default_value = "")]
    pub desc: String,
    /// Priority (low, medium, high)
    #[arg(long, default_value = "medium")]
    pub priority: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New description
    #[arg(long)]
    pub desc: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
    /// New priority (low, medium, high)
    #[arg(long)]
    pub priority: Option<String>,
    /// New completion flag (true, false)
    #[arg(long)]
    pub completed: Option<bool>,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Task ID
    pub id: String,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Substring to search in title and description (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,
    /// Filter by priority (all, low, medium, high)
    #[arg(long)]
    pub priority: Option<String>,
    /// Filter by status (all, upcoming, overdue, completed)
    #[arg(long)]
    pub status: Option<String>,
    /// Priority sort direction (asc, desc)
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task ID
    pub id: String,
}
