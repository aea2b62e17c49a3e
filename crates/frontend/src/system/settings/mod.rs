//! Settings page: section navigation, general form, toggles and maintenance actions.
//!
//! Nothing here is persisted; every change only answers with a toast.

use crate::shared::components::PageHeader;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_toasts, ToastService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::shared::notification::NotificationKind;
use contracts::system::settings::{
    GeneralSettings, SettingsSection, SystemAction, ToggleSetting, CURRENCIES, SAVE_DELAY_MS,
    TIMEZONES, TOGGLE_TOAST_MS,
};
use leptos::prelude::*;
use std::collections::HashMap;
use thaw::*;

/// Lifetime of the "{field} updated" toasts
const FIELD_TOAST_MS: u32 = 2000;

fn field_updated(toasts: ToastService, label: &str) {
    toasts.notify_for(format!("{label} updated"), NotificationKind::Info, FIELD_TOAST_MS);
}

fn run_action(toasts: ToastService, action: SystemAction) {
    if let Some(question) = action.confirmation() {
        if !confirm(question) {
            return;
        }
    }
    let (message, kind) = action.start_message();
    toasts.notify(message, kind);
    log::info!("Settings action started: {}", action.label());
    toasts.notify_later(action.duration_ms(), action.done_message(), NotificationKind::Success);
}

fn save_all(toasts: ToastService) {
    toasts.notify("Saving all settings...", NotificationKind::Info);
    toasts.notify_later(SAVE_DELAY_MS, "Settings saved successfully", NotificationKind::Success);
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let toasts = use_toasts();
    let active = RwSignal::new(SettingsSection::General);
    let toggles = RwSignal::new(
        ToggleSetting::all()
            .iter()
            .map(|t| (*t, t.default_enabled()))
            .collect::<HashMap<_, _>>(),
    );

    view! {
        <PageFrame page_id="sys_settings--form" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Settings" subtitle="System preferences and maintenance">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| save_all(toasts)>
                    {icon("save")}
                    " Save All Settings"
                </Button>
            </PageHeader>

            <div class="settings">
                <nav class="settings__nav">
                    {SettingsSection::all()
                        .iter()
                        .copied()
                        .map(|section| {
                            view! {
                                <button
                                    class="settings__nav-item"
                                    class:settings__nav-item--active=move || active.get() == section
                                    on:click=move |_| active.set(section)
                                >
                                    {icon(section.icon_name())}
                                    <span>{section.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="settings__content">
                    {move || {
                        let section = active.get();
                        view! {
                            <section class="settings__section">
                                <h3 class="settings__title">{format!("{} Settings", section.label())}</h3>
                                {(section == SettingsSection::General).then(|| view! { <GeneralSettingsForm toasts=toasts /> })}
                                <ToggleList section=section toggles=toggles toasts=toasts />
                                <ActionList section=section toasts=toasts />
                            </section>
                        }
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn GeneralSettingsForm(toasts: ToastService) -> impl IntoView {
    let defaults = GeneralSettings::default();

    let text_field = move |label: &'static str, input_type: &'static str, value: String| {
        view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                <input
                    class="form__input"
                    type=input_type
                    value=value
                    on:change=move |_| field_updated(toasts, label)
                />
            </div>
        }
    };

    let select_field = move |label: &'static str, options: &'static [&'static str], value: String| {
        view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                <select class="form__select" on:change=move |_| field_updated(toasts, label)>
                    {options
                        .iter()
                        .map(|&opt| {
                            let selected = opt == value;
                            view! { <option value=opt selected=selected>{opt}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
        }
    };

    view! {
        <div class="form__grid">
            {text_field("Company Name", "text", defaults.company_name)}
            {text_field("Contact Email", "email", defaults.contact_email)}
            {select_field("Timezone", TIMEZONES, defaults.timezone)}
            {select_field("Currency", CURRENCIES, defaults.currency)}
            {text_field("Session Timeout (minutes)", "number", defaults.session_timeout_minutes.to_string())}
        </div>
    }
}

#[component]
fn ToggleList(
    section: SettingsSection,
    toggles: RwSignal<HashMap<ToggleSetting, bool>>,
    toasts: ToastService,
) -> impl IntoView {
    section
        .toggles()
        .into_iter()
        .map(|setting| {
            let checked = move || toggles.with(|t| t.get(&setting).copied().unwrap_or(false));
            let on_change = move |ev| {
                let enabled = event_target_checked(&ev);
                toggles.update(|t| {
                    t.insert(setting, enabled);
                });
                toasts.notify_for(setting.feedback(enabled), NotificationKind::Success, TOGGLE_TOAST_MS);
            };
            view! {
                <div class="settings__toggle">
                    <div>
                        <div class="settings__toggle-label">{setting.label()}</div>
                        <div class="settings__toggle-hint">{setting.description()}</div>
                    </div>
                    <label class="switch">
                        <input type="checkbox" prop:checked=checked on:change=on_change />
                        <span class="switch__slider"></span>
                    </label>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn ActionList(section: SettingsSection, toasts: ToastService) -> impl IntoView {
    let actions = section.actions();
    (!actions.is_empty()).then(|| {
        view! {
            <div class="settings__actions">
                {actions
                    .into_iter()
                    .map(|action| {
                        let appearance = if action.is_destructive() {
                            ButtonAppearance::Secondary
                        } else {
                            ButtonAppearance::Primary
                        };
                        view! {
                            <Button appearance=appearance on_click=move |_| run_action(toasts, action)>
                                {action.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    })
}
