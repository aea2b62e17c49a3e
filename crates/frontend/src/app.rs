use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notifications::{ToastHost, ToastService};
use crate::shared::stores::EntityStores;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    // Demo collections live for the whole session, logout does not reseed them.
    provide_context(EntityStores::seeded());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ModalHost />
            <ToastHost />
        </AuthProvider>
    }
}
