use compete_shared::{TeamMemberDto, TeamView};
use yew::prelude::*;

/// Everything a team card lets the viewer ask for. The profile page is
/// read-only for teams, so the page decides what to do with these.
#[derive(Clone, Debug, PartialEq)]
pub enum TeamAction {
    Join(i64),
    Leave(i64),
    Update(i64),
    Disband(i64),
    RemoveMember { team_id: i64, user_id: i64 },
}

impl TeamAction {
    pub fn team_id(&self) -> i64 {
        match self {
            TeamAction::Join(id)
            | TeamAction::Leave(id)
            | TeamAction::Update(id)
            | TeamAction::Disband(id) => *id,
            TeamAction::RemoveMember { team_id, .. } => *team_id,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamCardProps {
    pub team: TeamView,
    pub on_action: Callback<TeamAction>,
}

#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let team = &props.team;
    let team_id = team.id();
    let name = team.team.name.as_deref().unwrap_or("Unnamed team");

    let action_button = |label: &'static str, action: TeamAction, class: &'static str| {
        let onclick = props.on_action.reform(move |_: MouseEvent| action.clone());
        html! {
            <button {onclick} class={classes!("px-3", "py-1", "text-sm", "text-white", "rounded", class)}>
                {label}
            </button>
        }
    };

    html! {
        <div class="bg-white shadow rounded-lg p-4">
            <div class="flex items-center justify-between mb-2">
                <h3 class="text-lg font-semibold text-gray-900">{name}</h3>
                <span class="text-xs text-gray-500">{format!("{} members", team.members.len())}</span>
            </div>
            if let Some(description) = team.team.description.as_ref() {
                <p class="text-sm text-gray-600 mb-3">{description}</p>
            }
            if !team.requirements().is_empty() {
                <div class="mb-3">
                    <h4 class="text-sm font-medium text-gray-700 mb-1">{"Requirements"}</h4>
                    <ul class="list-disc list-inside text-sm text-gray-600">
                        {team.requirements().iter().map(|line| html! { <li>{line}</li> }).collect::<Html>()}
                    </ul>
                </div>
            }
            <div class="flex flex-wrap gap-2 mb-3">
                {team.members.iter().map(|member| member_chip(team_id, member, &props.on_action)).collect::<Html>()}
            </div>
            <div class="flex flex-wrap gap-2">
                {action_button("Join", TeamAction::Join(team_id), "bg-blue-600 hover:bg-blue-700")}
                {action_button("Leave", TeamAction::Leave(team_id), "bg-gray-600 hover:bg-gray-700")}
                {action_button("Edit", TeamAction::Update(team_id), "bg-indigo-600 hover:bg-indigo-700")}
                {action_button("Disband", TeamAction::Disband(team_id), "bg-red-600 hover:bg-red-700")}
            </div>
        </div>
    }
}

fn member_chip(team_id: i64, member: &TeamMemberDto, on_action: &Callback<TeamAction>) -> Html {
    let name = member.display_name().unwrap_or("Member").to_string();
    let on_remove = member.user_id().map(|user_id| {
        on_action.reform(move |_: MouseEvent| TeamAction::RemoveMember { team_id, user_id })
    });

    html! {
        <span class="inline-flex items-center px-2 py-1 bg-gray-100 rounded-full text-xs text-gray-700">
            if let Some(avatar) = member.avatar_url() {
                <img src={avatar.to_string()} alt={name.clone()} class="w-5 h-5 rounded-full mr-1" />
            }
            {name.clone()}
            if let Some(role) = member.role() {
                <span class="ml-1 text-gray-400">{format!("({})", role)}</span>
            }
            if let Some(onclick) = on_remove {
                <button {onclick} title="Remove member" class="ml-1 text-gray-400 hover:text-red-600">{"×"}</button>
            }
        </span>
    }
}
