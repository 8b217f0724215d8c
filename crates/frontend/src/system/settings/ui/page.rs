use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use thaw::*;

use crate::domain::a001_site::ui::list::SitesTable;
use crate::shared::components::settings_card::SettingsCard;
use crate::system::settings::preferences::PrimaryMetric;
use crate::system::settings::tab::SettingsTab;

/// Страница настроек: вкладки «העדפות / ניהול / מתקדם»
#[component]
pub fn SettingsPage() -> impl IntoView {
    let query = use_query_map();
    let active = Memo::new(move |_| {
        let raw = query.with(|q| q.get("tab"));
        SettingsTab::from_query(raw.as_deref())
    });

    Effect::new(move |_| {
        log::debug!("Settings tab: {}", active.get().key());
    });

    view! {
        <div class="settings-page" dir="rtl">
            <main class="settings-page__main">
                <nav class="settings-tabs">
                    {SettingsTab::ALL
                        .into_iter()
                        .map(|tab| view! {
                            <span
                                class="settings-tabs__item"
                                class:settings-tabs__item--active=move || active.get() == tab
                            >
                                <A href=tab.href()>{tab.label()}</A>
                            </span>
                        })
                        .collect_view()}
                </nav>

                <div class="settings-tabs__content">
                    {move || match active.get() {
                        SettingsTab::Preferences => view! { <PreferencesCard /> }.into_any(),
                        SettingsTab::Management => view! { <ManagementCard /> }.into_any(),
                        SettingsTab::SiteList => view! {
                            <SettingsCard title="רשימת אתרים" description="בצע שינויים להגדרת אתרים.">
                                <SitesTable />
                            </SettingsCard>
                        }.into_any(),
                    }}
                </div>
            </main>
        </div>
    }
}

#[component]
fn PreferencesCard() -> impl IntoView {
    let metric = RwSignal::new(PrimaryMetric::default().code().to_string());

    // Предпочтение пока не сохраняется
    let save = move |_: leptos::ev::MouseEvent| {
        let code = metric.get_untracked();
        match PrimaryMetric::from_code(&code) {
            Some(m) => log::info!("Primary metric selected: {} ({})", m.code(), m.label()),
            None => log::warn!("Unknown primary metric {:?}", code),
        }
    };

    view! {
        <SettingsCard
            title="נתון עיקרי"
            description="בחירת הנתון המנחה בתצוגת המידע הראשית בלוח המחוונים ובמפה. העדפה זו נשמרת רק לחשבון זה."
            footer=move || view! {
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    "שמור שינויים"
                </Button>
            }
        >
            <Select value=metric>
                {PrimaryMetric::ALL
                    .into_iter()
                    .map(|m| view! { <option value=m.code()>{m.label()}</option> })
                    .collect_view()}
            </Select>
        </SettingsCard>
    }
}

#[component]
fn ManagementCard() -> impl IntoView {
    view! {
        <SettingsCard
            title="חשבונות"
            description="הוסף משתמשים או בצע שינויים בהרשאות קיימות."
        >
            <p class="text-muted">"ניהול משתמשים אינו זמין עדיין."</p>
        </SettingsCard>
    }
}
