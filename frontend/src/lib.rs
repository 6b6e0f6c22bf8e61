use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use crate::components::common_toast::ToastProvider;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod profile_state;
pub mod pages {
    pub mod home;
    pub mod not_found;
    pub mod user_profile;
}

use pages::{home::Home, not_found::NotFound, user_profile::UserProfilePage};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/user/:user_id")]
    UserProfile { user_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="app-container">
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ToastProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::UserProfile { user_id } => {
            debug!("Rendering profile of user {}", user_id);
            html! { <UserProfilePage user_id={user_id} /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    Ok(())
}

// Entry point Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
