use std::fs;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::storage::JsonFileStorage;
use crate::store::{StoreError, TaskDraft, TaskFields, TaskStore};

type CliResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CliResult {
    let json = cli.json;

    let data_dir = config_io::resolve_data_dir(cli.data_dir.as_deref());
    fs::create_dir_all(&data_dir)?;
    let config = config_io::read_config(&data_dir);

    let storage = JsonFileStorage::new(data_dir.join(&config.data_file));
    let mut store = TaskStore::open(storage)?;
    store.set_sort_order(config.default_sort);

    match cli.command {
        Commands::Add(args) => cmd_add(&mut store, args, json),
        Commands::List(args) => cmd_list(&mut store, args, json),
        Commands::Show(args) => cmd_show(&store, args, json),
        Commands::Edit(args) => cmd_edit(&mut store, args, json),
        Commands::Toggle(args) => cmd_toggle(&mut store, args, json),
        Commands::Delete(args) => cmd_delete(&mut store, args),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_id(s: &str) -> Result<Uuid, String> {
    Uuid::parse_str(s).map_err(|_| format!("invalid task id '{}'", s))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}' (expected YYYY-MM-DD)", s))
}

/// Persistence failures are non-fatal: the mutation is already committed in
/// memory, so report on stderr and keep the exit code clean.
fn note_save_failure<T>(result: Result<T, StoreError>) -> Result<Option<T>, StoreError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StoreError::Persistence(e)) => {
            eprintln!("warning: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(store: &mut TaskStore<JsonFileStorage>, args: AddArgs, json: bool) -> CliResult {
    let draft = TaskDraft {
        title: args.title,
        description: args.desc,
        due_date: Some(parse_date(&args.due)?),
        priority: parse_priority(&args.priority)?,
    };

    let Some(task) = note_save_failure(store.create(draft))? else {
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        println!("added {}", format_task_line(&task));
    }
    Ok(())
}

fn cmd_edit(store: &mut TaskStore<JsonFileStorage>, args: EditArgs, json: bool) -> CliResult {
    let id = parse_id(&args.id)?;
    let current = store.get(id).cloned().ok_or(StoreError::NotFound(id))?;

    // Overlay the provided flags on the current task, then replace all
    // mutable fields at once.
    let fields = TaskFields {
        title: args.title.unwrap_or(current.title),
        description: args.desc.unwrap_or(current.description),
        due_date: match args.due {
            Some(s) => parse_date(&s)?,
            None => current.due_date,
        },
        priority: match args.priority {
            Some(s) => parse_priority(&s)?,
            None => current.priority,
        },
        completed: args.completed.unwrap_or(current.completed),
    };

    let Some(task) = note_save_failure(store.update(id, fields))? else {
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        println!("updated {}", format_task_line(&task));
    }
    Ok(())
}

fn cmd_toggle(store: &mut TaskStore<JsonFileStorage>, args: ToggleArgs, json: bool) -> CliResult {
    let id = parse_id(&args.id)?;
    note_save_failure(store.toggle_completion(id))?;

    // Unknown ids are a silent no-op by design.
    if let Some(task) = store.get(id) {
        if json {
            println!("{}", serde_json::to_string_pretty(task)?);
        } else {
            println!("toggled {}", format_task_line(task));
        }
    }
    Ok(())
}

fn cmd_delete(store: &mut TaskStore<JsonFileStorage>, args: DeleteArgs) -> CliResult {
    let id = parse_id(&args.id)?;
    note_save_failure(store.delete(id))?;
    println!("deleted {}", id);
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &mut TaskStore<JsonFileStorage>, args: ListArgs, json: bool) -> CliResult {
    if let Some(search) = args.search {
        store.set_search_query(search);
    }
    if let Some(priority) = args.priority {
        store.set_priority_filter(parse_priority_filter(&priority)?);
    }
    if let Some(status) = args.status {
        store.set_status_filter(parse_status_filter(&status)?);
    }
    if let Some(sort) = args.sort {
        store.set_sort_order(parse_sort_order(&sort)?);
    }

    let visible = store.visible_tasks();
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else if visible.is_empty() {
        println!("no tasks");
    } else {
        for task in &visible {
            println!("{}", format_task_line(task));
        }
    }
    Ok(())
}

fn cmd_show(store: &TaskStore<JsonFileStorage>, args: ShowArgs, json: bool) -> CliResult {
    let id = parse_id(&args.id)?;
    let task = store.get(id).ok_or(StoreError::NotFound(id))?;
    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        for line in format_task_detail(task) {
            println!("{}", line);
        }
    }
    Ok(())
}
