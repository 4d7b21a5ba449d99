//! City input with the two primary actions.

use crate::state::UiState;
use dioxus::prelude::*;

/// Enter in the input behaves like the weather button. Both buttons are
/// disabled while the dashboard is busy.
#[component]
pub fn CityForm(
    busy: bool,
    on_weather: EventHandler<String>,
    on_plan: EventHandler<String>,
) -> Element {
    let mut state = use_context::<UiState>();

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            on_weather.call(state.city.read().clone());
        }
    };

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center; margin: 16px 0;",
            input {
                r#type: "text",
                placeholder: "City, e.g. Paris",
                value: "{state.city}",
                style: "flex: 1; padding: 8px 12px; border: 1px solid #2a3142; border-radius: 6px; background: #0f131c; color: #f4f6fb; font-size: 14px;",
                oninput: move |evt| state.city.set(evt.value()),
                onkeydown: handle_keydown,
            }
            button {
                disabled: busy,
                style: "padding: 8px 14px; border: none; border-radius: 6px; background: #3aa3ff; color: #fff; cursor: pointer;",
                onclick: move |_| on_weather.call(state.city.read().clone()),
                "Get weather"
            }
            button {
                disabled: busy,
                style: "padding: 8px 14px; border: none; border-radius: 6px; background: #6c5ce7; color: #fff; cursor: pointer;",
                onclick: move |_| on_plan.call(state.city.read().clone()),
                "Plan my day"
            }
        }
    }
}
