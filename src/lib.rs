//! Client-side web application that renders a GitHub repository's metadata
//! and a paginated, filterable list of its issues.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub mod github;
pub mod home;
pub mod repository;
pub mod state;

use home::HomePage;
use repository::RepositoryPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found">
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/repository/:name") view=RepositoryPage />
            </Routes>
        </Router>
    }
}
