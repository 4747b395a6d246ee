use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  warn
};

use crate::task::{
  Task,
  TaskId,
  TaskState
};
use crate::view::{
  RowView,
  ScreenStyle
};

/// A discrete UI event delivered by the
/// host.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(
  tag = "event",
  content = "value",
  rename_all = "snake_case"
)]
pub enum ScreenEvent {
  /// Full draft text after a keystroke.
  Input(String),
  AddPressed,
  /// Tap on the row currently at this
  /// position.
  Tap(usize)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
  Added {
    index: usize,
    id:    TaskId
  },
  /// Draft was blank after trimming;
  /// nothing changed.
  IgnoredBlank
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
  Completed {
    index: usize,
    id:    TaskId
  },
  /// The task left the list. `task.state`
  /// is `Removed`.
  Removed {
    index: usize,
    task:  Task
  },
  NoSuchTask
}

impl TapOutcome {
  pub fn changed(&self) -> bool {
    !matches!(self, TapOutcome::NoSuchTask)
  }
}

/// Serialize-only. A live list never holds
/// a `Removed` task.
#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  PartialEq,
  Eq,
)]
pub struct TaskListScreen {
  tasks: Vec<Task>,
  draft: String
}

impl TaskListScreen {
  /// Seeds the list in order. Every seed
  /// starts `Active`; the draft starts
  /// empty.
  pub fn new<I, S>(seed: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>
  {
    let tasks: Vec<Task> = seed
      .into_iter()
      .map(Task::new_active)
      .collect();
    debug!(
      seeded = tasks.len(),
      "created task list screen"
    );
    Self {
      tasks,
      draft: String::new()
    }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn draft(&self) -> &str {
    &self.draft
  }

  pub fn texts(&self) -> Vec<String> {
    self
      .tasks
      .iter()
      .map(|task| task.text.clone())
      .collect()
  }

  /// Completion flags, parallel to
  /// [`Self::texts`].
  pub fn completed_flags(
    &self
  ) -> Vec<bool> {
    self
      .tasks
      .iter()
      .map(Task::is_completed)
      .collect()
  }

  pub fn set_draft(
    &mut self,
    text: impl Into<String>
  ) {
    self.draft = text.into();
  }

  #[tracing::instrument(skip(self))]
  pub fn add_task(
    &mut self
  ) -> AddOutcome {
    let trimmed = self.draft.trim();
    if trimmed.is_empty() {
      debug!(
        draft = %self.draft,
        "ignored blank draft on add"
      );
      return AddOutcome::IgnoredBlank;
    }

    let task = Task::new_active(trimmed);
    let id = task.id;
    self.tasks.push(task);
    self.draft.clear();

    let index = self.tasks.len() - 1;
    debug!(index, %id, "added task");
    AddOutcome::Added { index, id }
  }

  /// Applies one tap to the task currently
  /// at `index`, deciding from its state
  /// before the tap.
  #[tracing::instrument(skip(self))]
  pub fn tap(
    &mut self,
    index: usize
  ) -> TapOutcome {
    let Some(task) =
      self.tasks.get_mut(index)
    else {
      warn!(
        index,
        len = self.tasks.len(),
        "tap on missing row ignored"
      );
      return TapOutcome::NoSuchTask;
    };

    if task.state.tapped()
      == TaskState::Completed
    {
      task.state = TaskState::Completed;
      debug!(index, id = %task.id, "completed task");
      return TapOutcome::Completed {
        index,
        id: task.id
      };
    }

    let mut removed =
      self.tasks.remove(index);
    removed.state = TaskState::Removed;
    debug!(index, id = %removed.id, "removed task");
    TapOutcome::Removed {
      index,
      task: removed
    }
  }

  /// Same as [`Self::tap`] but addressed by
  /// the task's stable id.
  pub fn tap_id(
    &mut self,
    id: TaskId
  ) -> TapOutcome {
    match self.position_of(id) {
      | Some(index) => self.tap(index),
      | None => {
        warn!(%id, "tap on unknown task id ignored");
        TapOutcome::NoSuchTask
      }
    }
  }

  pub fn position_of(
    &self,
    id: TaskId
  ) -> Option<usize> {
    self
      .tasks
      .iter()
      .position(|task| task.id == id)
  }

  /// Dispatches a host event. Returns true
  /// when the screen needs re-rendering.
  pub fn apply(
    &mut self,
    event: ScreenEvent
  ) -> bool {
    match event {
      | ScreenEvent::Input(text) => {
        let changed = self.draft != text;
        self.set_draft(text);
        changed
      }
      | ScreenEvent::AddPressed => {
        matches!(
          self.add_task(),
          AddOutcome::Added { .. }
        )
      }
      | ScreenEvent::Tap(index) => {
        self.tap(index).changed()
      }
    }
  }

  pub fn rows(
    &self,
    style: &ScreenStyle
  ) -> Vec<RowView> {
    self
      .tasks
      .iter()
      .enumerate()
      .map(|(index, task)| {
        RowView::from_task(
          index, task, style
        )
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn flags(
    screen: &TaskListScreen
  ) -> Vec<bool> {
    screen.completed_flags()
  }

  #[test]
  fn add_trims_and_clears_draft() {
    let mut screen =
      TaskListScreen::new(["Buy milk"]);
    screen.set_draft("  Walk dog \t");

    let outcome = screen.add_task();
    assert!(matches!(
      outcome,
      AddOutcome::Added { index: 1, .. }
    ));
    assert_eq!(
      screen.texts(),
      vec!["Buy milk", "Walk dog"]
    );
    assert_eq!(
      flags(&screen),
      vec![false, false]
    );
    assert_eq!(screen.draft(), "");
  }

  #[test]
  fn blank_add_keeps_draft_and_list() {
    let mut screen =
      TaskListScreen::new(
        Vec::<String>::new()
      );
    screen.set_draft("  ");

    assert_eq!(
      screen.add_task(),
      AddOutcome::IgnoredBlank
    );
    assert!(screen.is_empty());
    assert!(flags(&screen).is_empty());
    assert_eq!(screen.draft(), "  ");
  }

  #[test]
  fn duplicates_are_allowed() {
    let mut screen =
      TaskListScreen::new(["Buy milk"]);
    screen.set_draft("Buy milk");
    screen.add_task();
    assert_eq!(
      screen.texts(),
      vec!["Buy milk", "Buy milk"]
    );
  }

  #[test]
  fn first_tap_completes_second_removes()
  {
    let mut screen = TaskListScreen::new(
      ["Buy milk"]
    );
    screen.set_draft("Walk dog");
    screen.add_task();

    let outcome = screen.tap(1);
    assert!(matches!(
      outcome,
      TapOutcome::Completed { index: 1, .. }
    ));
    assert_eq!(
      flags(&screen),
      vec![false, true]
    );
    assert_eq!(
      screen.texts(),
      vec!["Buy milk", "Walk dog"]
    );

    let outcome = screen.tap(1);
    match outcome {
      | TapOutcome::Removed {
        index,
        task
      } => {
        assert_eq!(index, 1);
        assert_eq!(task.text, "Walk dog");
        assert_eq!(
          task.state,
          TaskState::Removed
        );
      }
      | other => {
        panic!("expected removal, got {other:?}")
      }
    }
    assert_eq!(
      screen.texts(),
      vec!["Buy milk"]
    );
    assert_eq!(flags(&screen), vec![false]);
  }

  #[test]
  fn removal_shifts_later_rows_down() {
    let mut screen = TaskListScreen::new([
      "a", "b", "c"
    ]);
    screen.tap(2);
    screen.tap(0);
    screen.tap(0);

    assert_eq!(
      screen.texts(),
      vec!["b", "c"]
    );
    assert_eq!(
      flags(&screen),
      vec![false, true]
    );

    // position 1 is now "c", already completed
    screen.tap(1);
    assert_eq!(screen.texts(), vec!["b"]);
  }

  #[test]
  fn tap_out_of_range_is_noop() {
    let mut screen =
      TaskListScreen::new(["only"]);
    let before = screen.clone();
    assert_eq!(
      screen.tap(5),
      TapOutcome::NoSuchTask
    );
    assert_eq!(screen, before);
  }

  #[test]
  fn tap_id_follows_task_across_removals()
  {
    let mut screen = TaskListScreen::new([
      "a", "b", "c"
    ]);
    let c = screen.tasks()[2].id;

    screen.tap(0);
    screen.tap(0);
    assert_eq!(screen.position_of(c), Some(1));

    assert!(matches!(
      screen.tap_id(c),
      TapOutcome::Completed { index: 1, .. }
    ));
    assert!(matches!(
      screen.tap_id(c),
      TapOutcome::Removed { index: 1, .. }
    ));
    assert_eq!(
      screen.tap_id(c),
      TapOutcome::NoSuchTask
    );
  }

  #[test]
  fn apply_reports_render_need() {
    let mut screen =
      TaskListScreen::new(["x"]);
    assert!(screen.apply(
      ScreenEvent::Input("y".to_string())
    ));
    assert!(!screen.apply(
      ScreenEvent::Input("y".to_string())
    ));
    assert!(
      screen.apply(ScreenEvent::AddPressed)
    );
    assert!(
      !screen.apply(ScreenEvent::AddPressed)
    );
    assert!(screen.apply(ScreenEvent::Tap(0)));
    assert!(!screen.apply(ScreenEvent::Tap(9)));
  }

  #[test]
  fn rows_carry_positional_keys() {
    let mut screen = TaskListScreen::new([
      "dup", "dup"
    ]);
    screen.tap(1);
    let rows =
      screen.rows(&ScreenStyle::default());
    let keys: Vec<_> = rows
      .iter()
      .map(|row| row.key.as_str())
      .collect();
    assert_eq!(keys, vec!["dup-0", "dup-1"]);
    assert!(!rows[0].strikethrough);
    assert!(rows[1].strikethrough);
  }

  #[test]
  fn live_list_never_holds_removed_tasks() {
    let mut screen = TaskListScreen::new([
      "a", "b"
    ]);
    screen.tap(0);
    screen.tap(0);
    screen.tap(0);

    let json = serde_json::to_value(&screen)
      .expect("serialize screen");
    let states: Vec<_> = json["tasks"]
      .as_array()
      .expect("task array")
      .iter()
      .map(|task| task["state"].clone())
      .collect();
    assert_eq!(states, vec!["completed"]);
  }

  #[test]
  fn events_use_tagged_json() {
    let json = serde_json::to_string(
      &ScreenEvent::Tap(3)
    )
    .expect("serialize event");
    assert_eq!(
      json,
      r#"{"event":"tap","value":3}"#
    );
    let back: ScreenEvent =
      serde_json::from_str(
        r#"{"event":"add_pressed"}"#
      )
      .expect("parse event");
    assert_eq!(back, ScreenEvent::AddPressed);
  }
}
