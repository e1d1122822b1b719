use crate::model::task::{Priority, Status, Task};
use crate::model::view::{PriorityFilter, SortOrder, StatusFilter};

// ---------------------------------------------------------------------------
// Value parsing
// ---------------------------------------------------------------------------

/// Parse a priority string into Priority
pub fn parse_priority(s: &str) -> Result<Priority, String> {
    match s {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        _ => Err(format!(
            "unknown priority '{}' (expected: low, medium, high)",
            s
        )),
    }
}

/// Parse a priority filter string ("all" or a priority)
pub fn parse_priority_filter(s: &str) -> Result<PriorityFilter, String> {
    match s {
        "all" => Ok(PriorityFilter::All),
        _ => parse_priority(s).map(PriorityFilter::Only).map_err(|_| {
            format!(
                "unknown priority filter '{}' (expected: all, low, medium, high)",
                s
            )
        }),
    }
}

/// Parse a status filter string ("all" or a status)
pub fn parse_status_filter(s: &str) -> Result<StatusFilter, String> {
    match s {
        "all" => Ok(StatusFilter::All),
        "upcoming" => Ok(StatusFilter::Only(Status::Upcoming)),
        "overdue" => Ok(StatusFilter::Only(Status::Overdue)),
        "completed" => Ok(StatusFilter::Only(Status::Completed)),
        _ => Err(format!(
            "unknown status filter '{}' (expected: all, upcoming, overdue, completed)",
            s
        )),
    }
}

/// Parse a sort order string
pub fn parse_sort_order(s: &str) -> Result<SortOrder, String> {
    match s {
        "asc" => Ok(SortOrder::Asc),
        "desc" => Ok(SortOrder::Desc),
        _ => Err(format!("unknown sort order '{}' (expected: asc, desc)", s)),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn checkbox_char(task: &Task) -> char {
    if task.completed { 'x' } else { ' ' }
}

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    format!(
        "[{}] {}  {}  !{}  due:{}  ({})",
        checkbox_char(task),
        task.id,
        task.title,
        task.priority.label(),
        task.due_date,
        task.status.label(),
    )
}

/// Format detailed task view
pub fn format_task_detail(task: &Task) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("[{}] {}", checkbox_char(task), task.title));
    lines.push(format!("id: {}", task.id));
    lines.push(format!("due: {}", task.due_date));
    lines.push(format!("priority: {}", task.priority.label()));
    lines.push(format!("status: {}", task.status.label()));
    if !task.description.is_empty() {
        lines.push("description:".to_string());
        for line in task.description.lines() {
            lines.push(format!("  {}", line));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn sample() -> Task {
        Task {
            id: Uuid::nil(),
            title: "Water plants".into(),
            description: "front and back\nwindowsill too".into(),
            due_date: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            priority: Priority::High,
            completed: false,
            status: Status::Upcoming,
        }
    }

    #[test]
    fn line_includes_all_columns() {
        let line = format_task_line(&sample());
        assert_eq!(
            line,
            "[ ] 00000000-0000-0000-0000-000000000000  Water plants  !high  due:2025-06-20  (upcoming)"
        );
    }

    #[test]
    fn completed_task_shows_checked_box() {
        let mut task = sample();
        task.completed = true;
        task.status = Status::Completed;
        assert!(format_task_line(&task).starts_with("[x]"));
    }

    #[test]
    fn detail_indents_description_lines() {
        let lines = format_task_detail(&sample());
        assert!(lines.contains(&"description:".to_string()));
        assert!(lines.contains(&"  front and back".to_string()));
        assert!(lines.contains(&"  windowsill too".to_string()));
    }

    #[test]
    fn parse_helpers_accept_known_values() {
        assert_eq!(parse_priority("high").unwrap(), Priority::High);
        assert_eq!(parse_priority_filter("all").unwrap(), PriorityFilter::All);
        assert_eq!(
            parse_status_filter("overdue").unwrap(),
            StatusFilter::Only(Status::Overdue)
        );
        assert_eq!(parse_sort_order("desc").unwrap(), SortOrder::Desc);
    }

    #[test]
    fn parse_helpers_reject_unknown_values() {
        assert!(parse_priority("urgent").is_err());
        assert!(parse_priority_filter("urgent").is_err());
        assert!(parse_status_filter("done").is_err());
        assert!(parse_sort_order("up").is_err());
    }
}
