//! Main App component with routing

use crate::api::session;
use crate::components::Sidebar;
use crate::pages::{
    Advocacy, AdvocacyAnalytics, ArticleEditor, ArticleStats, Dashboard, DoctorDetail, Doctors,
    Login, NotFound, PartnerCreate, PartnerDetail, PartnerEdit, Partners, Register, Users,
};
use crate::stores::{ArticlesStore, DoctorsStore, GrowthStore, PartnersStore, UsersStore};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::path;

/// Global application state: one store per backend resource.
#[derive(Clone, Copy)]
pub struct AppState {
    pub users: UsersStore,
    pub doctors: DoctorsStore,
    pub partners: PartnersStore,
    pub articles: ArticlesStore,
    pub growth: GrowthStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            users: UsersStore::new(),
            doctors: DoctorsStore::new(),
            partners: PartnersStore::new(),
            articles: ArticlesStore::new(),
            growth: GrowthStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Create global state
    let state = AppState::new();
    provide_context(state);

    view! {
        <Title text="Plan Am Well Admin" />
        <Router>
            <AppShell />
        </Router>
    }
}

/// Layout shell: sidebar for the admin area, bare layout for the auth
/// screens, and a client-side guard that sends unauthenticated visitors
/// to the login page.
#[component]
fn AppShell() -> impl IntoView {
    let location = use_location();
    let in_auth_area = Memo::new(move |_| location.pathname.get().starts_with("/auth"));

    let navigate = use_navigate();
    Effect::new(move |_| {
        if !in_auth_area.get() && !session::is_authenticated() {
            navigate("/auth/login", Default::default());
        }
    });

    view! {
        <div class="app-container">
            <Show when=move || !in_auth_area.get()>
                <Sidebar />
            </Show>
            <main class="main-content">
                <Routes fallback=NotFound>
                    <Route path=path!("/auth/login") view=Login />
                    <Route path=path!("/auth/register") view=Register />
                    <Route path=path!("/") view=Dashboard />
                    <Route path=path!("/users") view=Users />
                    <Route path=path!("/doctors") view=Doctors />
                    <Route path=path!("/doctors/:id") view=DoctorDetail />
                    <Route path=path!("/partners") view=Partners />
                    <Route path=path!("/partners/create") view=PartnerCreate />
                    <Route path=path!("/partners/:id") view=PartnerDetail />
                    <Route path=path!("/partners/:id/edit") view=PartnerEdit />
                    <Route path=path!("/advocacy") view=Advocacy />
                    <Route path=path!("/advocacy/create") view=ArticleEditor />
                    <Route path=path!("/advocacy/edit/:id") view=ArticleEditor />
                    <Route path=path!("/advocacy/analytics") view=AdvocacyAnalytics />
                    <Route path=path!("/advocacy/analytics/:id") view=ArticleStats />
                </Routes>
            </main>
        </div>
    }
}
