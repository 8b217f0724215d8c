use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - навигация по страницам
///
/// Страницы нумеруются с 1.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=is_first
                title="עמוד ראשון"
            >
                {icon("chevrons-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="עמוד קודם"
            >
                {icon("chevron-right")}
            </button>
            {move || {
                let current = current_page.get();
                (1..=total_pages.get().max(1))
                    .map(|page| {
                        view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=page == current
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="עמוד הבא"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=is_last
                title="עמוד אחרון"
            >
                {icon("chevrons-left")}
            </button>
        </div>
    }
}

/// Выбор количества строк на странице
#[component]
pub fn PageSizeSelect(
    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Available page size options
    options: Vec<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    view! {
        <label class="page-size-select">
            {label}
            <select
                class="page-size-select__field"
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    match raw.parse::<usize>() {
                        Ok(size) => on_page_size_change.run(size),
                        Err(e) => log::warn!("Ignoring page size {:?}: {}", raw, e),
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {options.into_iter().map(|size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
