use contracts::domain::a001_site::Site;
use leptos::prelude::*;
use std::collections::HashSet;

use crate::shared::config::SiteListConfig;
use crate::shared::error::SiteListError;
use crate::shared::list_utils::{filter_list, page_count, paginate, sort_list};
use crate::shared::selection::Selection;

pub const SORT_FIELD: &str = "identifier";

/// Колонки таблицы площадок
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteColumn {
    Identifier,
    DisplayName,
    Region,
    Kind,
}

impl SiteColumn {
    pub const ALL: [SiteColumn; 4] = [
        SiteColumn::Identifier,
        SiteColumn::DisplayName,
        SiteColumn::Region,
        SiteColumn::Kind,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            SiteColumn::Identifier => "AMOS",
            SiteColumn::DisplayName => "תצוגה",
            SiteColumn::Region => "פיקוד",
            SiteColumn::Kind => "סוג",
        }
    }

    pub fn text<'a>(&self, site: &'a Site) -> &'a str {
        match self {
            SiteColumn::Identifier => &site.identifier,
            SiteColumn::DisplayName => &site.display_name,
            SiteColumn::Region => site.region.label(),
            SiteColumn::Kind => &site.kind,
        }
    }
}

/// Кнопка панели инструментов: «добавить» или «удалить выбранные»
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Add,
    Delete,
}

/// Всё, что нужно для отрисовки таблицы в текущем состоянии
#[derive(Debug, Clone, PartialEq)]
pub struct SiteTableView {
    pub columns: [SiteColumn; 4],
    pub rows: Vec<Site>,
    /// Всего записей (без учёта фильтра)
    pub total_records: usize,
    pub filtered_count: usize,
    pub page_count: usize,
    pub page: usize,
    pub selection_summary: String,
    pub action: ToolbarAction,
}

/// Состояние списка площадок.
///
/// Хранятся только исходные данные; отсортированный и отфильтрованный списки
/// и срез страницы вычисляются при каждом чтении.
#[derive(Clone, Debug)]
pub struct SiteListState {
    records: Vec<Site>,
    search_text: String,
    page_size: usize,
    /// Номер страницы, начиная с 1
    page: usize,
    selection: Selection,
    config: SiteListConfig,
}

impl Default for SiteListState {
    fn default() -> Self {
        Self::new(SiteListConfig::default())
    }
}

impl SiteListState {
    pub fn new(config: SiteListConfig) -> Self {
        Self {
            records: Vec::new(),
            search_text: String::new(),
            page_size: config.default_page_size,
            page: 1,
            selection: Selection::default(),
            config,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Заменяет коллекцию результатом загрузки.
    /// Повторные идентификаторы отбрасываются (остаётся первая запись).
    pub fn set_records(&mut self, records: Vec<Site>) {
        let mut seen = HashSet::new();
        self.records = records
            .into_iter()
            .filter(|site| {
                let fresh = seen.insert(site.identifier.clone());
                if !fresh {
                    let err = SiteListError::DuplicateIdentifier(site.identifier.clone());
                    log::warn!("Dropping site: {}", err);
                }
                fresh
            })
            .collect();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    /// Размер страницы вне допустимого набора отклоняется, прежнее значение сохраняется
    pub fn set_page_size(&mut self, size: usize) -> Result<(), SiteListError> {
        self.page_size = self.config.validate_page_size(size)?;
        self.page = 1;
        Ok(())
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    fn sorted(&self) -> Vec<Site> {
        let mut items = self.records.clone();
        sort_list(&mut items, SORT_FIELD, true);
        items
    }

    pub fn filtered(&self) -> Vec<Site> {
        filter_list(self.sorted(), &self.search_text)
    }

    pub fn select_all(&mut self) {
        self.selection.select_all();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn toggle_selection(&mut self, id: &str, checked: bool) {
        let visible = self.filtered();
        self.selection
            .toggle(id, checked, visible.iter().map(|s| s.identifier.as_str()));
    }

    fn action(&self) -> ToolbarAction {
        if self.selection.is_empty() {
            ToolbarAction::Add
        } else {
            ToolbarAction::Delete
        }
    }

    /// Удаляет выбранные площадки и возвращает их идентификаторы.
    ///
    /// При `All` удаляются все строки, видимые после фильтра.
    pub fn remove_selected(&mut self) -> Vec<String> {
        let removed: Vec<String> = match &self.selection {
            Selection::All => self.filtered().into_iter().map(|s| s.identifier).collect(),
            Selection::Explicit(ids) => self
                .records
                .iter()
                .filter(|s| ids.contains(&s.identifier))
                .map(|s| s.identifier.clone())
                .collect(),
        };

        self.records.retain(|s| !removed.contains(&s.identifier));
        if self.selection.is_all() {
            self.selection.clear();
        } else {
            self.selection.forget(removed.iter().map(String::as_str));
        }
        removed
    }

    pub fn table_view(&self) -> SiteTableView {
        let filtered = self.filtered();
        let filtered_count = filtered.len();
        SiteTableView {
            columns: SiteColumn::ALL,
            rows: paginate(&filtered, self.page, self.page_size).to_vec(),
            total_records: self.records.len(),
            filtered_count,
            page_count: page_count(filtered_count, self.page_size),
            page: self.page,
            selection_summary: self.selection.summary(filtered_count),
            action: self.action(),
        }
    }
}

pub fn create_state(config: SiteListConfig) -> RwSignal<SiteListState> {
    RwSignal::new(SiteListState::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_site::api::mock_sites;
    use contracts::enums::Region;

    fn loaded() -> SiteListState {
        let mut state = SiteListState::default();
        state.set_records(mock_sites());
        state
    }

    fn ids(sites: &[Site]) -> Vec<&str> {
        sites.iter().map(|s| s.identifier.as_str()).collect()
    }

    #[test]
    fn test_empty_before_load() {
        let state = SiteListState::default();
        let view = state.table_view();
        assert!(view.rows.is_empty());
        assert_eq!(view.page_count, 1);
        assert_eq!(view.total_records, 0);
        assert_eq!(view.action, ToolbarAction::Add);
    }

    #[test]
    fn test_sorted_by_identifier() {
        let state = loaded();
        let sorted = state.sorted();
        assert_eq!(
            ids(&sorted),
            vec![
                "AMOS-1", "AMOS-10", "AMOS-2", "AMOS-3", "AMOS-4", "AMOS-5", "AMOS-6", "AMOS-7",
                "AMOS-8", "AMOS-9"
            ]
        );
        for pair in sorted.windows(2) {
            assert!(pair[0].identifier < pair[1].identifier);
        }
    }

    #[test]
    fn test_first_and_second_page() {
        let mut state = loaded();
        assert_eq!(state.page_size(), 5);
        let view = state.table_view();
        assert_eq!(view.page_count, 2);
        assert_eq!(
            ids(&view.rows),
            vec!["AMOS-1", "AMOS-10", "AMOS-2", "AMOS-3", "AMOS-4"]
        );
        state.set_page(2);
        assert_eq!(
            ids(&state.table_view().rows),
            vec!["AMOS-5", "AMOS-6", "AMOS-7", "AMOS-8", "AMOS-9"]
        );
    }

    #[test]
    fn test_search_single_match() {
        let mut state = loaded();
        state.set_search_text("אתר 5");
        assert_eq!(ids(&state.filtered()), vec!["AMOS-5"]);
        assert_eq!(state.table_view().page_count, 1);

        state.set_page(2);
        let view = state.table_view();
        assert!(view.rows.is_empty());
        assert_eq!(view.page, 2);
    }

    #[test]
    fn test_search_matches_every_field() {
        let mut state = loaded();
        state.set_search_text("amos-1");
        assert_eq!(ids(&state.filtered()), vec!["AMOS-1", "AMOS-10"]);

        state.set_search_text(Region::South.label());
        assert_eq!(ids(&state.filtered()), vec!["AMOS-3", "AMOS-6", "AMOS-9"]);

        state.set_search_text("dus");
        assert_eq!(state.filtered().len(), 5);

        state.set_search_text("nothing");
        assert!(state.filtered().is_empty());
        assert_eq!(state.table_view().page_count, 1);
    }

    #[test]
    fn test_page_resets_on_search_and_page_size() {
        let mut state = loaded();
        state.set_page(2);
        state.set_search_text("");
        assert_eq!(state.page, 1);

        state.set_page(2);
        state.set_page_size(5).unwrap();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_size_fifteen() {
        let mut state = loaded();
        state.set_page_size(15).unwrap();
        let view = state.table_view();
        assert_eq!(view.page_count, 1);
        assert_eq!(view.rows.len(), 10);
    }

    #[test]
    fn test_invalid_page_size_keeps_previous() {
        let mut state = loaded();
        state.set_page_size(10).unwrap();
        state.set_page(2);
        assert!(matches!(
            state.set_page_size(0),
            Err(SiteListError::InvalidPageSize(0, _))
        ));
        assert!(state.set_page_size(7).is_err());
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_all_selection_follows_filter() {
        let mut state = loaded();
        state.select_all();
        let view = state.table_view();
        assert_eq!(state.selection().count(view.filtered_count), 10);
        assert_eq!(view.selection_summary, "כל האתרים המוגדרים נבחרו (10 מתוך 10)");
        assert_eq!(view.action, ToolbarAction::Delete);

        state.set_search_text("אתר 5");
        let view = state.table_view();
        assert_eq!(state.selection().count(view.filtered_count), 1);
        assert_eq!(view.selection_summary, "כל האתרים המוגדרים נבחרו (1 מתוך 1)");
    }

    #[test]
    fn test_explicit_selection_toggles_action() {
        let mut state = loaded();
        state.toggle_selection("AMOS-2", true);
        state.toggle_selection("AMOS-3", true);
        let view = state.table_view();
        assert_eq!(view.selection_summary, "2 מתוך 10 נבחרו");
        assert_eq!(view.action, ToolbarAction::Delete);

        state.clear_selection();
        assert_eq!(state.action(), ToolbarAction::Add);
    }

    #[test]
    fn test_explicit_selection_counts_hidden_rows() {
        let mut state = loaded();
        state.toggle_selection("AMOS-2", true);
        state.toggle_selection("AMOS-3", true);
        state.set_search_text("אתר 5");
        let view = state.table_view();
        assert_eq!(view.filtered_count, 1);
        assert_eq!(view.selection_summary, "2 מתוך 1 נבחרו");
        assert_eq!(view.action, ToolbarAction::Delete);
    }

    #[test]
    fn test_set_records_drops_duplicates() {
        let mut state = SiteListState::default();
        let mut sites = mock_sites();
        sites.push(Site::new("AMOS-1", "copy", Region::South, "DUS"));
        state.set_records(sites);
        assert_eq!(state.records.len(), 10);
        assert_eq!(state.records[0].display_name, "אתר 1");
    }

    #[test]
    fn test_remove_selected_cleans_selection() {
        let mut state = loaded();
        state.toggle_selection("AMOS-2", true);
        state.toggle_selection("AMOS-4", true);
        let removed = state.remove_selected();
        assert_eq!(removed, vec!["AMOS-2".to_string(), "AMOS-4".to_string()]);
        assert_eq!(state.records.len(), 8);
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_remove_all_respects_filter() {
        let mut state = loaded();
        state.set_search_text("BBU");
        state.select_all();
        let removed = state.remove_selected();
        assert_eq!(removed.len(), 5);
        state.set_search_text("");
        assert_eq!(state.records.len(), 5);
        assert!(state.records.iter().all(|s| s.kind == "DUS"));
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_columns() {
        let site = Site::new("AMOS-1", "אתר 1", Region::North, "BBU");
        let headers: Vec<_> = SiteColumn::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(headers, vec!["AMOS", "תצוגה", "פיקוד", "סוג"]);
        assert_eq!(SiteColumn::Region.text(&site), "צפון");

        let view = loaded().table_view();
        assert_eq!(view.columns, SiteColumn::ALL);
        let cells: Vec<_> = view.columns.iter().map(|c| c.text(&view.rows[0])).collect();
        assert_eq!(cells, vec!["AMOS-1", "אתר 1", "צפון", "BBU"]);
    }
}
