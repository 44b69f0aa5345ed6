//! Authenticated-area chrome: sidebar, navbar, and the routed page.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::ui::UiState;

#[component]
pub fn AppLayout() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.with(|u| u.sidebar_open);

    view! {
        <div class="app-shell" class:app-shell--collapsed=move || !open()>
            <Sidebar/>
            <div class="app-shell__main">
                <Navbar/>
                <main class="app-shell__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
