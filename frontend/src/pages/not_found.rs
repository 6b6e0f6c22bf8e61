use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page min-h-screen flex flex-col items-center justify-center">
            <h1 class="text-2xl font-bold">{"404 - Page Not Found"}</h1>
            <p class="text-gray-600 mt-2">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="mt-4 text-blue-600 hover:underline">{"Back to home"}</Link<Route>>
        </div>
    }
}
