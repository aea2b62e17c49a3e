use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Shown above a table while rows are checked.
#[component]
pub fn BulkActionsBar(
    #[prop(into)]
    count: Signal<usize>,

    on_delete: Callback<()>,

    on_export: Callback<()>,

    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || { count.get() > 0 }>
            <div class="bulk-actions">
                <span class="bulk-actions__count">
                    {move || format!("{} items selected", count.get())}
                </span>
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| on_export.run(())
                    >
                        {icon("download")}
                        " Export Selected"
                    </Button>
                    <button class="bulk-actions__delete" on:click=move |_| on_delete.run(())>
                        {icon("trash")}
                        " Delete Selected"
                    </button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| on_clear.run(())
                    >
                        "Clear Selection"
                    </Button>
                </Flex>
            </div>
        </Show>
    }
}
