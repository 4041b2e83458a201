//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::components::route_guard::{AuthRoute, ProtectedRoute};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    dashboard::DashboardPage, edit::EditPage, home::HomePage, login::LoginPage, media_detail::MediaDetailPage,
    post::PostPage, register::RegisterPage,
};
use crate::state::session::Session;
use crate::util::guard::HOME_PATH;

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
/// Provides the session and REST client to the tree and sets up routing.
/// The nav bar and footer frame every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::for_environment();
    let api = ApiClient::new(&ClientConfig::from_build_env(), session.clone());
    provide_context(session);
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/datahex.css"/>
        <Title text="DataHex"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=(StaticSegment("media"), ParamSegment("id")) view=MediaDetailPage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <AuthRoute><LoginPage/></AuthRoute> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <AuthRoute><RegisterPage/></AuthRoute> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("post")
                        view=|| view! { <ProtectedRoute><PostPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("edit"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><EditPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
