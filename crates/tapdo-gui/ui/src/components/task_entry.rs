use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskEntryProps {
  pub draft:       String,
  pub placeholder: String,
  pub add_label:   String,
  pub on_input:    Callback<String>,
  pub on_add:      Callback<()>
}

#[function_component(TaskEntry)]
pub fn task_entry(
  props: &TaskEntryProps
) -> Html {
  let oninput = {
    let on_input =
      props.on_input.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_input.emit(input.value());
      }
    )
  };
  let on_add = props.on_add.clone();

  html! {
      <div class="task-entry">
          <input
              id="taskInput"
              value={props.draft.clone()}
              placeholder={props.placeholder.clone()}
              {oninput}
          />
          <button class="btn" onclick={move |_| on_add.emit(())}>
              { props.add_label.clone() }
          </button>
      </div>
  }
}
