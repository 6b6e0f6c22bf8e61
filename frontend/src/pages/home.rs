use crate::auth::current_user_id;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();
    let session_user_id = current_user_id();

    let on_view_profile = {
        let session_user_id = session_user_id.clone();
        Callback::from(move |_: MouseEvent| {
            if let (Some(navigator), Some(user_id)) = (navigator.as_ref(), session_user_id.clone()) {
                navigator.push(&Route::UserProfile { user_id });
            }
        })
    };

    html! {
        <div class="home-page min-h-screen flex flex-col items-center justify-center bg-gradient-to-br from-blue-50 via-white to-indigo-50">
            <h1 class="text-3xl sm:text-4xl font-bold text-gray-900 mb-6">{"Competition Portal"}</h1>
            <p class="text-lg text-gray-600 mb-8">{"Find teammates, join competitions and share what you learned."}</p>
            if session_user_id.is_some() {
                <button
                    onclick={on_view_profile}
                    class="px-8 py-3 text-lg font-semibold text-white bg-blue-600 rounded-xl shadow hover:bg-blue-700"
                >
                    {"👤 View my profile"}
                </button>
            }
        </div>
    }
}
