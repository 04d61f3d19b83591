use crate::layout::Shell;
use crate::pages::about::AboutPage;
use crate::pages::experience::ExperiencePage;
use crate::pages::expertise::ExpertisePage;
use crate::pages::hire_me::HireMePage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::work::WorkPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about-me") view=AboutPage />
                    <Route path=path!("/expertise") view=ExpertisePage />
                    <Route path=path!("/experience") view=ExperiencePage />
                    <Route path=path!("/work") view=WorkPage />
                    <Route path=path!("/hire-me") view=HireMePage />
                </Routes>
            </Shell>
        </Router>
    }
}
