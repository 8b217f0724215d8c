mod state;

use contracts::domain::a001_site::Site;
use contracts::enums::Region;
use futures::future::Abortable;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a001_site::api;
use crate::domain::a001_site::loader::SiteLoader;
use crate::shared::components::pagination_controls::{PageSizeSelect, PaginationControls};
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::config::{load_config, SiteListConfig};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, locale_compare, SearchInput, Searchable, Sortable};
pub use state::{create_state, SiteColumn, SiteListState, SiteTableView, ToolbarAction};

const TABLE_ID: &str = "a001-sites-table";

impl Searchable for Site {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.identifier, filter)
            || contains_ci(&self.display_name, filter)
            || contains_ci(self.region.label(), filter)
            || contains_ci(&self.kind, filter)
    }
}

// Список сортируется только по идентификатору
impl Sortable for Site {
    fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
        locale_compare(&self.identifier, &other.identifier)
    }
}

/// Ячейка строки: пикуд рисуется бейджем, остальные колонки текстом
fn site_cell(column: SiteColumn, site: &Site) -> AnyView {
    let text = column.text(site).to_string();
    let region = site.region;
    match column {
        SiteColumn::Region => view! {
            <TableCell>
                <TableCellLayout>
                    <Badge appearance=BadgeAppearance::Tint color=region_badge_color(region)>
                        {text}
                    </Badge>
                </TableCellLayout>
            </TableCell>
        }
        .into_any(),
        SiteColumn::Identifier => view! {
            <TableCell>
                <TableCellLayout truncate=true>
                    <span style="font-weight: 500;">{text}</span>
                </TableCellLayout>
            </TableCell>
        }
        .into_any(),
        _ => view! {
            <TableCell>
                <TableCellLayout truncate=true>{text}</TableCellLayout>
            </TableCell>
        }
        .into_any(),
    }
}

/// Цвет бейджа пикуда
pub fn region_badge_color(region: Region) -> BadgeColor {
    match region {
        Region::North => BadgeColor::Success,
        Region::Center => BadgeColor::Warning,
        Region::South => BadgeColor::Danger,
    }
}

/// Таблица площадок с поиском, пагинацией и множественным выбором
#[component]
pub fn SitesTable() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config.site_list,
        Err(e) => {
            log::error!("Failed to load site list config, using defaults: {}", e);
            SiteListConfig::default()
        }
    };
    let load_delay_ms = config.load_delay_ms;
    let page_size_options = config.page_size_options.clone();
    let state = create_state(config);

    let loader = SiteLoader::new();
    if let Some(registration) = loader.begin() {
        log::debug!("Site list load scheduled in {} ms", load_delay_ms);
        let in_flight = loader.clone();
        spawn_local(async move {
            let fetch = Abortable::new(api::fetch_sites(load_delay_ms), registration);
            let Ok(result) = fetch.await else {
                log::debug!("Site list load aborted before the timer fired");
                return;
            };
            let Some(result) = in_flight.deliver(result) else {
                log::debug!("Site list load discarded: view was torn down");
                return;
            };
            match result {
                Ok(sites) => {
                    log::info!("Loaded {} sites", sites.len());
                    state.try_update(|s| s.set_records(sites));
                }
                Err(e) => log::error!("Failed to load sites: {}", e),
            }
        });
    }

    on_cleanup(move || {
        if loader.cancel() {
            log::debug!("Site list load cancelled");
        }
    });

    let table_view = Memo::new(move |_| state.with(SiteListState::table_view));

    let search_text = Signal::derive(move || state.with(|s| s.search_text().to_string()));
    let header_state = Signal::derive(move || {
        state.with(|s| {
            let visible = s.filtered();
            s.selection()
                .header_state(visible.iter().map(|site| site.identifier.as_str()))
        })
    });

    let on_search = Callback::new(move |text: String| {
        state.update(|s| s.set_search_text(text));
    });

    let go_to_page = Callback::new(move |page: usize| {
        state.update(|s| s.set_page(page));
    });

    let change_page_size = Callback::new(move |size: usize| {
        state.update(|s| {
            if let Err(e) = s.set_page_size(size) {
                log::warn!("{}", e);
            }
        });
    });

    let toggle_all = Callback::new(move |check_all: bool| {
        state.update(|s| {
            if check_all {
                s.select_all();
            } else {
                s.clear_selection();
            }
        });
    });

    let toggle_selection = Callback::new(move |(id, checked): (String, bool)| {
        state.update(|s| s.toggle_selection(&id, checked));
    });

    let delete_selected = move |_: leptos::ev::MouseEvent| {
        state.update(|s| {
            let removed = s.remove_selected();
            log::info!("Deleted {} sites: {:?}", removed.len(), removed);
        });
    };

    // TODO: форма добавления площадки, когда появится источник данных с записью
    let add_site = move |_: leptos::ev::MouseEvent| {
        log::info!("Add site requested; adding sites is not available yet");
    };

    view! {
        <div class="sites-table" dir="rtl">
            <div class="sites-table__toolbar">
                <SearchInput value=search_text on_change=on_search />
                {move || match table_view.with(|v| v.action) {
                    ToolbarAction::Add => view! {
                        <Button appearance=ButtonAppearance::Primary on_click=add_site>
                            {icon("plus")}
                            " הוסף אתר"
                        </Button>
                    }.into_any(),
                    ToolbarAction::Delete => view! {
                        <Button class="button--destructive" on_click=delete_selected>
                            {icon("delete")}
                            " מחיקה"
                        </Button>
                    }.into_any(),
                }}
            </div>

            <div class="sites-table__meta">
                <span class="text-muted">
                    {move || format!("סך הכל {} אתרים", table_view.with(|v| v.total_records))}
                </span>
                <PageSizeSelect
                    label="מספר שורות לעמוד:"
                    page_size=Signal::derive(move || state.with(|s| s.page_size()))
                    options=page_size_options
                    on_page_size_change=change_page_size
                />
            </div>

            <div class="table-wrapper">
                <Table attr:id=TABLE_ID attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox state=header_state on_change=toggle_all />
                            {move || table_view.with(|v| v.columns)
                                .into_iter()
                                .map(|column| view! {
                                    <TableHeaderCell resizable=false>{column.header()}</TableHeaderCell>
                                })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || table_view.with(|v| v.rows.clone())
                            key=|site| site.identifier.clone()
                            children=move |site: Site| {
                                let id = site.identifier.clone();
                                let columns = table_view.with_untracked(|v| v.columns);
                                let checked = Signal::derive({
                                    let id = id.clone();
                                    move || state.with(|s| s.selection().contains(&id))
                                });
                                view! {
                                    <TableRow>
                                        <TableCellCheckbox
                                            item_id=id
                                            checked=checked
                                            on_change=toggle_selection
                                        />
                                        {columns
                                            .into_iter()
                                            .map(|column| site_cell(column, &site))
                                            .collect_view()}
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            <div class="sites-table__footer">
                <span class="text-muted">
                    {move || table_view.with(|v| v.selection_summary.clone())}
                </span>
                <PaginationControls
                    current_page=Signal::derive(move || table_view.with(|v| v.page))
                    total_pages=Signal::derive(move || table_view.with(|v| v.page_count))
                    on_page_change=go_to_page
                />
            </div>
        </div>
    }
}
