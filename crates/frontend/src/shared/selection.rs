//! Состояние выбора строк таблицы.
//!
//! `All` означает «выбраны все строки, видимые после фильтра», а не
//! конкретный набор ID: при смене фильтра он следует за видимыми строками.

use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Explicit(BTreeSet<String>),
}

/// Состояние чекбокса в заголовке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Explicit(BTreeSet::new())
    }
}

impl Selection {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// `All` никогда не считается пустым, даже если после фильтра строк нет
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::All => false,
            Selection::Explicit(ids) => ids.is_empty(),
        }
    }

    /// Количество выбранных для отображения; для `All` это число видимых строк
    pub fn count(&self, visible_total: usize) -> usize {
        match self {
            Selection::All => visible_total,
            Selection::Explicit(ids) => ids.len(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Explicit(ids) => ids.contains(id),
        }
    }

    pub fn select_all(&mut self) {
        *self = Selection::All;
    }

    pub fn clear(&mut self) {
        *self = Selection::default();
    }

    /// Переключает одну строку.
    ///
    /// Снятие отметки при `All` разворачивает выбор в явный набор видимых строк
    /// без снятой.
    pub fn toggle<'a>(
        &mut self,
        id: &str,
        checked: bool,
        visible_ids: impl IntoIterator<Item = &'a str>,
    ) {
        match self {
            Selection::All => {
                if !checked {
                    let rest = visible_ids
                        .into_iter()
                        .filter(|v| *v != id)
                        .map(str::to_string)
                        .collect();
                    *self = Selection::Explicit(rest);
                }
            }
            Selection::Explicit(ids) => {
                if checked {
                    ids.insert(id.to_string());
                } else {
                    ids.remove(id);
                }
            }
        }
    }

    /// Убирает удалённые ID из явного выбора
    pub fn forget<'a>(&mut self, removed: impl IntoIterator<Item = &'a str>) {
        if let Selection::Explicit(ids) = self {
            for id in removed {
                ids.remove(id);
            }
        }
    }

    /// Состояние чекбокса «выбрать все» для видимых строк
    pub fn header_state<'a>(&self, visible_ids: impl IntoIterator<Item = &'a str>) -> CheckboxState {
        let mut total = 0;
        let mut selected = 0;
        for id in visible_ids {
            total += 1;
            if self.contains(id) {
                selected += 1;
            }
        }

        if total == 0 && !self.is_all() {
            CheckboxState::Unchecked
        } else if self.is_all() || selected == total {
            CheckboxState::Checked
        } else if selected == 0 {
            CheckboxState::Unchecked
        } else {
            CheckboxState::Indeterminate
        }
    }

    /// Подпись под таблицей: «все N из N» или «K из N»
    pub fn summary(&self, visible_total: usize) -> String {
        match self {
            Selection::All => format!(
                "כל האתרים המוגדרים נבחרו ({} מתוך {})",
                visible_total, visible_total
            ),
            Selection::Explicit(ids) => format!("{} מתוך {} נבחרו", ids.len(), visible_total),
        }
    }
}
