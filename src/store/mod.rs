use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::io::storage::{StorageError, TaskStorage};
use crate::model::task::{Priority, Task, derive_status};
use crate::model::view::{PriorityFilter, SortOrder, StatusFilter, ViewState};

/// Error type for store commands
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid task: {0}")]
    Validation(String),
    #[error("task not found: {0}")]
    NotFound(Uuid),
    /// The write failed after the in-memory mutation was applied. The
    /// in-memory collection remains authoritative; callers treat this as
    /// a warning, not a rollback.
    #[error("could not persist tasks: {0}")]
    Persistence(#[from] StorageError),
}

/// Input for `create`. The due date stays optional here so the missing-field
/// check lives in the store rather than in every collaborator.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

/// Full replacement set for `update`: every mutable field of a task.
#[derive(Debug, Clone)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub completed: bool,
}

/// The task store: owns the task collection and the view state.
///
/// Tasks are kept in insertion order; sorting happens only on the snapshot
/// returned by [`visible_tasks`](TaskStore::visible_tasks). Every mutating
/// command re-derives affected statuses and writes the complete collection
/// through the storage adapter before returning.
pub struct TaskStore<S: TaskStorage> {
    tasks: Vec<Task>,
    view: ViewState,
    storage: S,
}

impl<S: TaskStorage> TaskStore<S> {
    /// Load the collection from storage. Statuses come back re-derived
    /// against the load-time clock.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let tasks = storage.load(Utc::now())?;
        Ok(TaskStore {
            tasks,
            view: ViewState::default(),
            storage,
        })
    }

    // -----------------------------------------------------------------------
    // Task commands
    // -----------------------------------------------------------------------

    /// Create a task and persist the collection. Rejects a blank title or a
    /// missing due date before touching any state.
    pub fn create(&mut self, draft: TaskDraft) -> Result<Task, StoreError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation("title must not be empty".into()));
        }
        let due_date = draft
            .due_date
            .ok_or_else(|| StoreError::Validation("due date is required".into()))?;

        let task = Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: draft.description,
            due_date,
            priority: draft.priority,
            completed: false,
            status: derive_status(false, due_date, Utc::now()),
        };
        self.tasks.push(task.clone());
        self.storage.save(&self.tasks)?;
        Ok(task)
    }

    /// Replace all mutable fields of the task with `id`, re-deriving status
    /// from the new `completed` and `due_date`. Unknown ids are an error and
    /// leave both memory and storage untouched.
    pub fn update(&mut self, id: Uuid, fields: TaskFields) -> Result<Task, StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        task.title = fields.title;
        task.description = fields.description;
        task.due_date = fields.due_date;
        task.priority = fields.priority;
        task.completed = fields.completed;
        task.refresh_status(Utc::now());

        let updated = task.clone();
        self.storage.save(&self.tasks)?;
        Ok(updated)
    }

    /// Remove the task with `id`. An unknown id is a no-op, not an error;
    /// the resulting collection is persisted either way.
    pub fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.tasks.retain(|t| t.id != id);
        self.storage.save(&self.tasks)?;
        Ok(())
    }

    /// Flip the `completed` flag of the task with `id` and re-derive its
    /// status. An unknown id is a no-op and skips the write.
    pub fn toggle_completion(&mut self, id: Uuid) -> Result<(), StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(());
        };
        task.completed = !task.completed;
        task.refresh_status(Utc::now());
        self.storage.save(&self.tasks)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // View-state commands (transient, never persisted)
    // -----------------------------------------------------------------------

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.view.search_query = query.into();
    }

    pub fn set_priority_filter(&mut self, filter: PriorityFilter) {
        self.view.priority_filter = filter;
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.view.status_filter = filter;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.view.sort_order = order;
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The full collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The displayed task list: the intersection of the three filter
    /// predicates, then a stable priority sort on a snapshot. The underlying
    /// collection keeps its insertion order.
    ///
    /// The sort compares ranks (High=1, Medium=2, Low=3) with `Asc` ranking
    /// b against a and `Desc` ranking a against b, so `Asc` yields
    /// Low → Medium → High and `Desc` yields High → Medium → Low.
    pub fn visible_tasks(&self) -> Vec<Task> {
        let query = self.view.search_query.to_lowercase();
        let mut visible: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| {
                let matches_search = query.is_empty()
                    || task.title.to_lowercase().contains(&query)
                    || task.description.to_lowercase().contains(&query);
                matches_search
                    && self.view.priority_filter.matches(task.priority)
                    && self.view.status_filter.matches(task.status)
            })
            .cloned()
            .collect();

        match self.view.sort_order {
            SortOrder::Asc => {
                visible.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
            }
            SortOrder::Desc => {
                visible.sort_by(|a, b| a.priority.rank().cmp(&b.priority.rank()));
            }
        }
        visible
    }
}
