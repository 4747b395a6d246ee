mod seed;

use std::rc::Rc;

use tapdo_model::{
  ScreenEvent,
  ScreenStyle,
  TaskListScreen
};
use yew::{
  Callback,
  Html,
  Reducible,
  function_component,
  html,
  use_reducer
};

use crate::components::{
  TaskEntry,
  TaskList
};

#[derive(Clone, PartialEq)]
struct ScreenState {
  screen: TaskListScreen,
  style:  ScreenStyle
}

impl ScreenState {
  fn seeded() -> Self {
    let seed = seed::load_screen_seed();
    Self {
      screen: TaskListScreen::new(
        seed.seed
      ),
      style:  seed.style
    }
  }
}

impl Reducible for ScreenState {
  type Action = ScreenEvent;

  fn reduce(
    self: Rc<Self>,
    action: ScreenEvent
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    if next.screen.apply(action) {
      Rc::new(next)
    } else {
      self
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let state =
    use_reducer(ScreenState::seeded);

  let on_input = {
    let state = state.clone();
    Callback::from(move |text: String| {
      state.dispatch(
        ScreenEvent::Input(text)
      );
    })
  };

  let on_add = {
    let state = state.clone();
    Callback::from(move |_: ()| {
      state
        .dispatch(ScreenEvent::AddPressed);
    })
  };

  let on_tap = {
    let state = state.clone();
    Callback::from(move |index: usize| {
      tracing::debug!(
        index,
        "row tapped"
      );
      state
        .dispatch(ScreenEvent::Tap(index));
    })
  };

  let rows =
    state.screen.rows(&state.style);

  html! {
      <div class="screen">
          <div class="title">{ state.style.title.clone() }</div>
          <TaskEntry
              draft={state.screen.draft().to_string()}
              placeholder={state.style.placeholder.clone()}
              add_label={state.style.add_label.clone()}
              {on_input}
              {on_add}
          />
          <TaskList {rows} {on_tap} />
      </div>
  }
}
