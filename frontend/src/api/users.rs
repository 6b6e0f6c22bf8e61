use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_put, network_error, read_json};
use compete_shared::{
    load_profile_content, ArticleDto, ProfileViewModel, Result, SharedError, TeamMembershipDto,
    UserDto,
};
use gloo_net::http::Request;
use log::debug;

fn user_info_path(user_id: &str) -> String {
    format!("/api/user/info/{}", user_id)
}

fn user_update_path(user_id: &str) -> String {
    format!("/api/user/info/{}/update", user_id)
}

fn user_teams_path(user_id: &str) -> String {
    format!("/api/user/teams/{}", user_id)
}

fn user_articles_path(user_id: &str) -> String {
    format!("/api/user/articles/{}", user_id)
}

/// Public profile of a user. A missing user comes back as `SharedError::NotFound`.
pub async fn get_user_info(user_id: &str) -> Result<UserDto> {
    debug!("Fetching user info for {}", user_id);

    let response = Request::get(&api_url(&user_info_path(user_id)))
        .send()
        .await
        .map_err(|e| network_error("Failed to fetch user info", e))?;

    let user: UserDto = read_json(response, "user info").await?;
    debug!("Loaded profile of user {}", user.id);
    Ok(user)
}

/// Persists an edited profile and returns what the backend stored.
pub async fn update_user_info(user_id: &str, user: &UserDto) -> Result<UserDto> {
    debug!("Updating user info for {}", user_id);

    let response = authenticated_put(&api_url(&user_update_path(user_id)))
        .json(user)
        .map_err(|e| SharedError::Conversion(format!("Failed to serialize user: {}", e)))?
        .send()
        .await
        .map_err(|e| network_error("Failed to update user info", e))?;

    read_json(response, "user update").await
}

pub async fn get_user_teams(user_id: &str) -> Result<Vec<TeamMembershipDto>> {
    debug!("Fetching teams of user {}", user_id);

    let response = authenticated_get(&api_url(&user_teams_path(user_id)))
        .send()
        .await
        .map_err(|e| network_error("Failed to fetch user teams", e))?;

    read_json(response, "user teams").await
}

pub async fn get_user_articles(user_id: &str) -> Result<Vec<ArticleDto>> {
    debug!("Fetching articles of user {}", user_id);

    let response = authenticated_get(&api_url(&user_articles_path(user_id)))
        .send()
        .await
        .map_err(|e| network_error("Failed to fetch user articles", e))?;

    read_json(response, "user articles").await
}

/// Teams and articles fetched together; fails as a whole if either fails.
pub async fn get_profile_content(user_id: &str) -> Result<ProfileViewModel> {
    load_profile_content(get_user_teams(user_id), get_user_articles(user_id)).await
}
