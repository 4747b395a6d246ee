use std::fmt;

use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
  Active,
  Completed,
  Removed
}

impl TaskState {
  /// Next state after a single tap.
  /// `Removed` is terminal.
  pub fn tapped(self) -> TaskState {
    match self {
      | TaskState::Active => {
        TaskState::Completed
      }
      | TaskState::Completed
      | TaskState::Removed => {
        TaskState::Removed
      }
    }
  }

  pub fn is_completed(self) -> bool {
    self == TaskState::Completed
  }
}

/// Stable identity of a task. Unlike its
/// position, it does not change when
/// earlier rows are removed.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }
}

impl Default for TaskId {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    self.0.fmt(f)
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
pub struct Task {
  pub id:    TaskId,
  pub text:  String,
  pub state: TaskState
}

impl Task {
  pub fn new_active(
    text: impl Into<String>
  ) -> Self {
    Self {
      id:    TaskId::new(),
      text:  text.into(),
      state: TaskState::Active
    }
  }

  pub fn is_completed(&self) -> bool {
    self.state.is_completed()
  }
}
