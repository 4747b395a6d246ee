use tapdo_model::RowView;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:   Vec<RowView>,
  pub on_tap: Callback<usize>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div class="task-list">
          {
              for props.rows.iter().cloned().map(|row| html! {
                  <TaskListRow
                      key={row.key.clone()}
                      row={row.clone()}
                      on_tap={props.on_tap.clone()}
                  />
              })
          }
      </div>
  }
}
