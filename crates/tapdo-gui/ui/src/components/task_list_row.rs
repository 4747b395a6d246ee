use tapdo_model::RowView;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:    RowView,
  pub on_tap: Callback<usize>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let index = props.row.index;
  let on_tap = props.on_tap.clone();
  let class = if props.row.strikethrough
  {
    "row done"
  } else {
    "row"
  };
  let style =
    format!("color:{};", props.row.color);

  html! {
      <div class={class} style={style} onclick={move |_| on_tap.emit(index)}>
          { &props.row.text }
      </div>
  }
}
