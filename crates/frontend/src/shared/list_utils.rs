/// Универсальные утилиты для работы со списками (поиск, сортировка, пагинация, UI компоненты)
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу.
    /// `filter` уже приведён к нижнему регистру.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Проверка вхождения без учёта регистра (`filter_lower` уже в нижнем регистре)
pub fn contains_ci(value: &str, filter_lower: &str) -> bool {
    value.to_lowercase().contains(filter_lower)
}

/// Сравнение строк в стиле `localeCompare`.
///
/// Сначала посимвольно без учёта регистра, при равенстве строчная буква идёт
/// раньше заглавной в первой позиции, где регистр различается.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }

    // Исходные символы сравниваются попарно, хотя после lowercase их позиции
    // могут разъехаться ('İ' даёт два символа). Порядок при этом остаётся
    // антисимметричным: решает первое расхождение исходных строк.
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        return match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => ca.cmp(&cb),
        };
    }
    a.cmp(b)
}

/// Сортирует список по указанному полю (стабильная сортировка)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Фильтрует список по поисковому запросу.
///
/// Пустой запрос возвращает список как есть, без прохода по элементам.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items;
    }

    let filter_lower = filter.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .collect()
}

/// Количество страниц, минимум одна (пустой список тоже занимает страницу)
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Срез страницы `page` (нумерация с 1). Страница за пределами списка пуста.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Поле поиска с кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "חיפוש...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <input
                type="search"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder={placeholder}
                prop:value=move || value.get()
                on:input=move |ev| {
                    ev.prevent_default();
                    on_change.run(event_target_value(&ev));
                }
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="נקה"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        code: &'static str,
        name: &'static str,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.code, filter) || contains_ci(self.name, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => locale_compare(self.name, other.name),
                _ => locale_compare(self.code, other.code),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { code: "b-2", name: "Beta" },
            Row { code: "A-10", name: "alpha" },
            Row { code: "a-1", name: "Gamma" },
        ]
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("AMOS-10", "AMOS-2"), Ordering::Less);
        assert_eq!(locale_compare("AMOS-9", "AMOS-10"), Ordering::Greater);
        assert_eq!(locale_compare("a", "B"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Ab", "ab"), Ordering::Greater);
        assert_eq!(locale_compare("amos", "amos"), Ordering::Equal);
        assert_eq!(locale_compare("amos", "amos-1"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_multi_char_lowercase() {
        // 'İ' в нижнем регистре совпадает с "i\u{307}"
        assert_eq!(locale_compare("İ", "i\u{307}"), Ordering::Greater);
        assert_eq!(locale_compare("i\u{307}", "İ"), Ordering::Less);
        assert_eq!(locale_compare("İx", "i\u{307}x"), Ordering::Greater);
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        sort_list(&mut items, "code", true);
        let codes: Vec<_> = items.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["a-1", "A-10", "b-2"]);

        sort_list(&mut items, "name", false);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Gamma", "Beta", "alpha"]);
    }

    #[test]
    fn test_filter_list_case_insensitive() {
        let found = filter_list(rows(), "ALP");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "A-10");

        let found = filter_list(rows(), "a-1");
        let codes: Vec<_> = found.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["A-10", "a-1"]);
    }

    #[test]
    fn test_filter_list_partition() {
        let all = rows();
        for filter in ["a", "B", "-1", "mm", "zzz", " "] {
            let kept = filter_list(all.clone(), filter);
            let lower = filter.to_lowercase();
            for row in &all {
                assert_eq!(kept.contains(row), row.matches_filter(&lower), "filter {filter:?}");
            }
        }
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(filter_list(rows(), ""), rows());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(10, 15), 1);
        assert_eq!(page_count(3, 0), 1);
        for total in 0..40 {
            for size in [5, 10, 15] {
                let expected = ((total + size - 1) / size).max(1);
                assert_eq!(page_count(total, size), expected);
            }
        }
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, 1, 5), &[1, 2, 3, 4, 5]);
        assert_eq!(paginate(&items, 3, 5), &[11, 12]);
        assert!(paginate(&items, 4, 5).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
        assert_eq!(paginate(&items, 1, 15).len(), 12);
        let empty: Vec<u32> = Vec::new();
        assert!(paginate(&empty, 1, 5).is_empty());
    }
}
