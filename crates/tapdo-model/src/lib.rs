//! State and event contract for the tapdo
//! task list screen.
//!
//! The screen owns an ordered list of
//! [`Task`] records and a draft string.
//! Hosts feed it [`ScreenEvent`]s and render
//! the [`RowView`]s it hands back.

pub mod screen;
pub mod task;
pub mod view;

pub use screen::{
  AddOutcome,
  ScreenEvent,
  TapOutcome,
  TaskListScreen
};
pub use task::{
  Task,
  TaskId,
  TaskState
};
pub use view::{
  RowView,
  ScreenStyle
};
