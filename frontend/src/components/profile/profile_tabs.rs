use yew::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ProfileTab {
    Teams,
    Articles,
}

impl ProfileTab {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Teams => "Teams",
            ProfileTab::Articles => "Articles",
        }
    }

    /// Message shown when the tab has nothing to list.
    pub fn empty_message(&self) -> &'static str {
        match self {
            ProfileTab::Teams => "This user has not joined any team!",
            ProfileTab::Articles => "This user has not published any article!",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfileTabsProps {
    pub current_tab: ProfileTab,
    pub on_tab_click: Callback<ProfileTab>,
}

#[function_component(ProfileTabs)]
pub fn profile_tabs(props: &ProfileTabsProps) -> Html {
    let tabs = [(ProfileTab::Teams, "👥"), (ProfileTab::Articles, "📝")];

    html! {
        <div class="border-b border-gray-200">
            <nav class="-mb-px flex">
                {tabs.iter().map(|(tab, icon)| {
                    let is_active = props.current_tab == *tab;
                    let tab = *tab;

                    html! {
                        <button
                            class={classes!(
                                "flex-1", "py-2", "px-1", "border-b-2", "font-medium", "text-sm",
                                if is_active {
                                    classes!("border-blue-500", "text-blue-600")
                                } else {
                                    classes!("border-transparent", "text-gray-500", "hover:text-gray-700", "hover:border-gray-300")
                                }
                            )}
                            onclick={props.on_tab_click.reform(move |_| tab)}
                        >
                            <span class="mr-2">{*icon}</span>
                            {tab.label()}
                        </button>
                    }
                }).collect::<Html>()}
            </nav>
        </div>
    }
}
