use serde::{Deserialize, Serialize};

use crate::model::task::{Priority, Status};

/// Priority filter: everything, or one level only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => p == priority,
        }
    }
}

/// Status filter: everything, or one status only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => s == status,
        }
    }
}

/// Direction of the priority sort applied to the visible list.
///
/// `Asc` orders Low, Medium, High; `Desc` orders High, Medium, Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Transient view state governing the displayed task subset.
///
/// Never persisted; resets to defaults on every process start.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Case-insensitive substring match over title and description
    pub search_query: String,
    pub priority_filter: PriorityFilter,
    pub status_filter: StatusFilter,
    pub sort_order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_everything() {
        let view = ViewState::default();
        assert_eq!(view.search_query, "");
        assert_eq!(view.priority_filter, PriorityFilter::All);
        assert_eq!(view.status_filter, StatusFilter::All);
        assert_eq!(view.sort_order, SortOrder::Asc);
    }

    #[test]
    fn priority_filter_matches() {
        assert!(PriorityFilter::All.matches(Priority::Low));
        assert!(PriorityFilter::Only(Priority::High).matches(Priority::High));
        assert!(!PriorityFilter::Only(Priority::High).matches(Priority::Low));
    }

    #[test]
    fn status_filter_matches() {
        assert!(StatusFilter::All.matches(Status::Overdue));
        assert!(StatusFilter::Only(Status::Completed).matches(Status::Completed));
        assert!(!StatusFilter::Only(Status::Completed).matches(Status::Upcoming));
    }
}
