//! Root application component with routing and store providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::protected::Protected;
use crate::pages::{
    detail::MovieDetailPage, home::HomePage, popular::PopularPage, search::SearchPage,
    signin::SignInPage, wishlist::WishlistPage,
};
use crate::state::auth::provide_auth;
use crate::state::storage::shared_backend;
use crate::state::wishlist::provide_wishlist;

/// Root component.
///
/// Builds both stores against the shared durable backend, provides
/// their contexts, then mounts the router. Every route except
/// `/signin` requires a session; unknown paths fall back to home.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend = shared_backend();
    provide_auth(Rc::clone(&backend));
    provide_wishlist(backend);

    view! {
        <Title text="Reelist"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback=|| view! { <Protected><HomePage/></Protected> }>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Protected><HomePage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("popular")
                        view=|| view! { <Protected><PopularPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("search")
                        view=|| view! { <Protected><SearchPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("wishlist")
                        view=|| view! { <Protected><WishlistPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("movie"), ParamSegment("id"))
                        view=|| view! { <Protected><MovieDetailPage/></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
