//! Компонент чекбокса в заголовке таблицы для выбора всех строк
//!
//! # Примеры
//!
//! ```text
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || selection.get().header_state(visible_ids()))
//!     on_change=Callback::new(move |check_all: bool| {
//!         if check_all {
//!             // Выбрать все
//!         } else {
//!             // Снять все
//!         }
//!     })
//! />
//! ```

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::shared::selection::CheckboxState;

/// Компонент чекбокса в заголовке таблицы
///
/// Показывает три состояния (unchecked, checked, indeterminate); клик
/// переключает между «выбрать все» и «снять все».
#[component]
pub fn TableHeaderCheckbox(
    /// Состояние, вычисленное из выбора и видимых строк
    #[prop(into)]
    state: Signal<CheckboxState>,

    /// Callback при изменении (true = выбрать все, false = снять все)
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate не задаётся атрибутом, только через DOM
    Effect::new(move |_| {
        let state = state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
