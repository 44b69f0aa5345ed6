//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::AppLayout;
use crate::components::toaster::Toaster;
use crate::pages::{
    advisor::AdvisorPage, alerts::AlertsPage, dashboard::DashboardPage, education::EducationPage, login::LoginPage,
    portfolio::PortfolioPage, prediction::PredictionPage, register::RegisterPage,
};
use crate::state::{auth::AuthState, chat::ChatState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing. The
/// persisted session is read in an effect so server and first client render
/// agree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(chat);

    Effect::new(move || auth.set(AuthState::restored()));

    view! {
        <Stylesheet id="leptos" href="/pkg/tradevision.css"/>
        <Title text="TradeVision"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("") view=AppLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("prediction") view=PredictionPage/>
                    <Route path=StaticSegment("portfolio") view=PortfolioPage/>
                    <Route path=StaticSegment("advisor") view=AdvisorPage/>
                    <Route path=StaticSegment("alerts") view=AlertsPage/>
                    <Route path=StaticSegment("education") view=EducationPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <Toaster/>
    }
}
