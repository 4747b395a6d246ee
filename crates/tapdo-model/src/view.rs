use serde::{
  Deserialize,
  Serialize
};

use crate::task::{
  Task,
  TaskId
};

/// Labels and colors a host uses when
/// drawing the screen.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(default)]
pub struct ScreenStyle {
  pub title:           String,
  pub placeholder:     String,
  pub add_label:       String,
  pub active_color:    String,
  pub completed_color: String
}

impl Default for ScreenStyle {
  fn default() -> Self {
    Self {
      title:           "Home".to_string(),
      placeholder:     "Enter your task"
        .to_string(),
      add_label:       "Add Task"
        .to_string(),
      active_color:    "black".to_string(),
      completed_color: "red".to_string()
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct RowView {
  /// `"{text}-{index}"`, good enough for
  /// list diffing but positional.
  pub key:           String,
  pub index:         usize,
  pub id:            TaskId,
  pub text:          String,
  pub completed:     bool,
  pub strikethrough: bool,
  pub color:         String
}

impl RowView {
  pub fn from_task(
    index: usize,
    task: &Task,
    style: &ScreenStyle
  ) -> Self {
    let completed = task.is_completed();
    let color = if completed {
      style.completed_color.clone()
    } else {
      style.active_color.clone()
    };

    Self {
      key: row_key(&task.text, index),
      index,
      id: task.id,
      text: task.text.clone(),
      completed,
      strikethrough: completed,
      color
    }
  }
}

pub fn row_key(
  text: &str,
  index: usize
) -> String {
  format!("{text}-{index}")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::task::TaskState;

  #[test]
  fn completed_rows_use_alternate_color()
  {
    let style = ScreenStyle::default();
    let mut task =
      Task::new_active("Walk dog");

    let row =
      RowView::from_task(1, &task, &style);
    assert_eq!(row.key, "Walk dog-1");
    assert_eq!(row.color, "black");
    assert!(!row.strikethrough);

    task.state = TaskState::Completed;
    let row =
      RowView::from_task(1, &task, &style);
    assert_eq!(row.color, "red");
    assert!(row.strikethrough);
    assert!(row.completed);
  }

  #[test]
  fn partial_style_fills_defaults() {
    let style: ScreenStyle =
      serde_json::from_str(
        r#"{"title":"Today"}"#
      )
      .expect("parse style");
    assert_eq!(style.title, "Today");
    assert_eq!(
      style.placeholder,
      "Enter your task"
    );
    assert_eq!(
      style.completed_color,
      "red"
    );
  }
}
