use crate::api::users::{get_profile_content, get_user_info, update_user_info};
use crate::auth::{current_user_id, is_own_profile};
use crate::components::article_card::ArticleCard;
use crate::components::common_toast::ToastContext;
use crate::components::profile::profile_tabs::{ProfileTab, ProfileTabs};
use crate::components::profile::sidebar::ProfileSidebar;
use crate::components::team_card::{TeamAction, TeamCard};
use crate::config::Config;
use crate::profile_state::{
    ProfileAction, ProfileState, RequestGeneration, CONTENT_FAILED_MESSAGE,
    TEAM_ACTION_UNAVAILABLE_MESSAGE, USER_MISSING_MESSAGE,
};
use crate::Route;
use compete_shared::{Result, UserDto};
use gloo_timers::callback::Timeout;
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserProfilePageProps {
    pub user_id: String,
}

#[function_component(UserProfilePage)]
pub fn user_profile_page(props: &UserProfilePageProps) -> Html {
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let navigator = use_navigator();
    let state = use_reducer(ProfileState::default);
    let current_tab = use_state(|| ProfileTab::Teams);
    // Pending redirect after a missing profile; dropped (cancelled) on unmount
    let redirect = use_mut_ref(|| None::<Timeout>);
    let generation = use_mut_ref(RequestGeneration::default);

    let editable = is_own_profile(&props.user_id, current_user_id().as_deref());

    // Profile and content load independently of each other
    {
        let dispatcher = state.dispatcher();
        let toast = toast.clone();
        let redirect = redirect.clone();
        let generation = generation.clone();
        use_effect_with(props.user_id.clone(), move |user_id| {
            let ticket = generation.borrow().begin();
            dispatcher.dispatch(ProfileAction::Reset);

            {
                let user_id = user_id.clone();
                let dispatcher = dispatcher.clone();
                let redirect = redirect.clone();
                let generation = generation.clone();
                spawn_local(async move {
                    let result = get_user_info(&user_id).await;
                    if !generation.borrow().is_current(ticket) {
                        debug!("Dropping stale profile response for user {}", user_id);
                        return;
                    }
                    match result {
                        Ok(user) => dispatcher.dispatch(ProfileAction::UserLoaded(user)),
                        Err(e) => {
                            error!("Failed to load user {}: {}", user_id, e);
                            dispatcher
                                .dispatch(ProfileAction::UserMissing(USER_MISSING_MESSAGE.to_string()));
                            toast.error(format!(
                                "Page not found, returning home in {} seconds...",
                                Config::REDIRECT_DELAY_MS / 1000
                            ));
                            let timeout = Timeout::new(Config::REDIRECT_DELAY_MS, move || {
                                if let Some(navigator) = navigator {
                                    navigator.push(&Route::Home);
                                }
                            });
                            *redirect.borrow_mut() = Some(timeout);
                        }
                    }
                });
            }

            {
                let user_id = user_id.clone();
                let generation = generation.clone();
                spawn_local(async move {
                    let result = get_profile_content(&user_id).await;
                    if !generation.borrow().is_current(ticket) {
                        debug!("Dropping stale teams/articles response for user {}", user_id);
                        return;
                    }
                    match result {
                        Ok(vm) => {
                            debug!(
                                "Profile {} has {} teams and {} articles",
                                user_id,
                                vm.teams.len(),
                                vm.articles.len()
                            );
                            dispatcher.dispatch(ProfileAction::ContentLoaded(vm));
                        }
                        Err(e) => {
                            error!("Failed to load teams/articles of {}: {}", user_id, e);
                            dispatcher.dispatch(ProfileAction::ContentFailed(
                                CONTENT_FAILED_MESSAGE.to_string(),
                            ));
                        }
                    }
                });
            }

            move || {
                generation.borrow().invalidate();
                redirect.borrow_mut().take();
            }
        });
    }

    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(ProfileAction::ToggleEdit))
    };

    let on_save = {
        let dispatcher = state.dispatcher();
        let toast = toast.clone();
        let user_id = props.user_id.clone();
        Callback::from(move |edited: UserDto| {
            let edited = match edited.validated() {
                Ok(user) => user,
                Err(e) => {
                    report_save(&dispatcher, &toast, Err(e));
                    return;
                }
            };

            let dispatcher = dispatcher.clone();
            let toast = toast.clone();
            let user_id = user_id.clone();
            spawn_local(async move {
                let result = update_user_info(&user_id, &edited).await;
                if let Err(e) = &result {
                    error!("Failed to save profile of {}: {}", user_id, e);
                }
                report_save(&dispatcher, &toast, result);
            });
        })
    };

    let on_team_action = {
        let toast = toast.clone();
        Callback::from(move |action: TeamAction| {
            debug!("Rejected team action on profile page: {:?}", action);
            toast.error(TEAM_ACTION_UNAVAILABLE_MESSAGE);
        })
    };

    let on_tab_click = {
        let current_tab = current_tab.clone();
        Callback::from(move |tab: ProfileTab| current_tab.set(tab))
    };

    if state.user_loading {
        return html! {
            <div class="min-h-screen flex flex-col items-center justify-center">
                {spinner()}
                <p class="mt-4 text-lg">{"Loading..."}</p>
            </div>
        };
    }

    if let Some(message) = state.user_error.as_ref() {
        return html! {
            <div class="min-h-screen flex flex-col items-center justify-center">
                <span class="text-red-500 text-8xl">{"✕"}</span>
                <h1 class="text-2xl font-bold mt-4">{message}</h1>
            </div>
        };
    }

    let Some(user) = state.user.clone() else {
        return html! {};
    };

    html! {
        <div class="min-h-screen p-4 md:p-8 mt-16">
            <div class="max-w-7xl mx-auto">
                <div class="flex flex-col lg:flex-row gap-8">
                    <div class="w-full lg:w-1/3">
                        <ProfileSidebar
                            user={user}
                            editable={editable}
                            editing={state.editing}
                            on_edit={on_edit}
                            on_save={on_save}
                        />
                        if let Some(message) = state.save_error.as_ref() {
                            <p class="mt-2 text-sm text-red-600 text-center">{message}</p>
                        }
                    </div>
                    <div class="flex-1">
                        <div class="bg-white shadow rounded-lg">
                            <ProfileTabs current_tab={*current_tab} on_tab_click={on_tab_click} />
                            <div class="p-4">
                                <div class="grid grid-cols-1 gap-4">
                                    {tab_panel(*current_tab, &state, &on_team_action)}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn report_save(dispatcher: &UseReducerDispatcher<ProfileState>, toast: &ToastContext, result: Result<UserDto>) {
    let action = ProfileAction::from_save(result);
    match &action {
        ProfileAction::SaveFailed(message) => toast.error(message.clone()),
        _ => toast.success("Profile saved!"),
    }
    dispatcher.dispatch(action);
}

fn tab_panel(tab: ProfileTab, state: &ProfileState, on_team_action: &Callback<TeamAction>) -> Html {
    if state.content_loading() {
        return spinner();
    }

    if let Some(message) = state.content_error() {
        return html! {
            <div class="p-4 bg-red-100 border border-red-400 text-red-700 rounded">{message}</div>
        };
    }

    let cards = match tab {
        ProfileTab::Teams => state
            .teams()
            .iter()
            .map(|team| {
                html! {
                    <TeamCard key={team.id()} team={team.clone()} on_action={on_team_action.clone()} />
                }
            })
            .collect::<Vec<Html>>(),
        ProfileTab::Articles => state
            .articles()
            .iter()
            .map(|article| {
                html! {
                    <ArticleCard key={article.id} article={article.clone()} is_author={true} />
                }
            })
            .collect::<Vec<Html>>(),
    };

    if cards.is_empty() {
        return html! {
            <div class="flex flex-col items-center justify-center h-64">
                <span class="text-gray-400 text-6xl mb-4">{"✕"}</span>
                <p class="text-center text-gray-500">{tab.empty_message()}</p>
            </div>
        };
    }

    cards.into_iter().collect::<Html>()
}

fn spinner() -> Html {
    html! {
        <div class="flex justify-center py-8">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600"></div>
        </div>
    }
}
