//! SettingsCard — карточка раздела настроек поверх Thaw [`Card`].
//!
//! # Пример
//! ```text
//! <SettingsCard title="רשימת אתרים" description="בצע שינויים להגדרת אתרים.">
//!     <SitesTable />
//! </SettingsCard>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn SettingsCard(
    /// Заголовок карточки
    #[prop(into)]
    title: String,

    /// Пояснение под заголовком
    #[prop(optional, into)]
    description: MaybeProp<String>,

    /// Нижняя панель (кнопки)
    #[prop(optional, into)]
    footer: Option<ViewFn>,

    children: Children,
) -> impl IntoView {
    view! {
        <Card class="settings-card">
            <div class="settings-card__header">
                <h2 class="settings-card__title">{title}</h2>
                {move || description.get().map(|d| view! {
                    <p class="settings-card__description">{d}</p>
                })}
            </div>
            <div class="settings-card__content">
                {children()}
            </div>
            {footer.map(|footer| view! {
                <div class="settings-card__footer">{footer.run()}</div>
            })}
        </Card>
    }
}
