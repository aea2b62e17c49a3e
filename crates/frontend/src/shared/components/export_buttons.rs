use crate::shared::icons::icon;
use contracts::shared::export::ExportFormat;
use leptos::prelude::*;
use thaw::*;

/// CSV / JSON / Print buttons in a list page header.
#[component]
pub fn ExportButtons(on_export: Callback<ExportFormat>, on_print: Callback<()>) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small class="export-buttons">
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                on_click=move |_| on_export.run(ExportFormat::Csv)
            >
                {icon("download")}
                " CSV"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                on_click=move |_| on_export.run(ExportFormat::Json)
            >
                {icon("download")}
                " JSON"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                on_click=move |_| on_print.run(())
            >
                {icon("printer")}
                " Print"
            </Button>
        </Flex>
    }
}
