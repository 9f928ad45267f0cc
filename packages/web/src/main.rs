use api::{catalog, Advert};
use dioxus::prelude::*;

use ui::{AuthProvider, Navbar, ProtectedRoute};
use views::{AdDetail, Categories, CreateAd, Home, Login, MyAds, NotFound, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/categories?:q&:category")]
        Categories { q: String, category: String },
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/ads/:id")]
        AdDetail { id: u64 },
        #[layout(Protected)]
            #[route("/profile")]
            Profile {},
            #[route("/my-ads")]
            MyAds {},
            #[route("/create-ad")]
            CreateAd {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// The signed-in user's adverts, including ones created in this session.
#[derive(Clone, Copy)]
pub(crate) struct MyAdverts(pub Signal<Vec<Advert>>);

pub(crate) fn use_my_adverts() -> Signal<Vec<Advert>> {
    use_context::<MyAdverts>().0
}

fn main() {
    // `launch` installs the tracing subscriber (dioxus "logger" feature)
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| MyAdverts(Signal::new(catalog::my_ads())));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Navbar and page frame shared by every route.
#[component]
fn Shell() -> Element {
    let auth = ui::use_auth();
    let mut my_ads = use_my_adverts();

    // Adverts added in a session do not outlive it
    use_effect(move || {
        let state = auth.state();
        if !state.loading && !state.is_authenticated() {
            my_ads.set(catalog::my_ads());
        }
    });

    rsx! {
        Navbar {}
        main { class: "page",
            Outlet::<Route> {}
        }
        footer { class: "footer", "© Tirgus" }
    }
}

/// Layout for routes that need a signed-in user.
#[component]
fn Protected() -> Element {
    let route = use_route::<Route>();

    rsx! {
        ProtectedRoute { from: route.to_string(),
            Outlet::<Route> {}
        }
    }
}
