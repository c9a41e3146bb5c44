use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes},
    path,
};

use crate::components::layout::Layout;
use crate::pages;

/// HTML shell wrapping all pages (rendered server-side).
/// This is a plain function, NOT a #[component].
pub fn shell(_options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/favicon.svg" type="image/svg+xml"/>
                <link rel="stylesheet" href="/pkg/style.css"/>
                <MetaTags/>
            </head>
            <body class="bg-gray-900 text-gray-100 min-h-screen">
                <App/>
            </body>
        </html>
    }
}

/// Main application component with router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <pages::not_found::NotFound/> }>
                <ParentRoute path=path!("/") view=Layout>
                    <Route path=path!("") view=pages::overview::OverviewPage/>
                    <Route path=path!("gateways") view=pages::gateways::GatewaysPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
