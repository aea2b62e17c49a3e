use crate::shared::icons::icon;
use contracts::dashboards::d001_overview::dto::StatCard as StatCardData;
use leptos::prelude::*;

/// Dashboard counter card; `text` is the animated value.
#[component]
pub fn StatCard(
    card: StatCardData,
    #[prop(into)]
    text: Signal<String>,
    on_click: Callback<()>,
) -> impl IntoView {
    let style = format!("border-left-color: {};", card.accent);
    let icon_style = format!("color: {};", card.accent);

    view! {
        <div class="stat-card" style=style on:click=move |_| on_click.run(())>
            <div class="stat-card__icon" style=icon_style>
                {icon(card.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{card.title}</div>
                <div class="stat-card__value">{move || text.get()}</div>
            </div>
        </div>
    }
}
