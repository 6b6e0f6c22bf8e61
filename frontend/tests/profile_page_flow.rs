#[cfg(test)]
mod profile_page_flow {
    use compete_frontend::profile_state::{
        ContentState, ProfileAction, ProfileState, CONTENT_FAILED_MESSAGE, SAVE_FAILED_MESSAGE,
    };
    use compete_shared::{ProfileViewModelBuilder, SharedError, UserDto, UserField};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::rc::Rc;
    use yew::Reducible;

    fn reduce_all(actions: Vec<ProfileAction>) -> ProfileState {
        let mut state = Rc::new(ProfileState::default());
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    fn user_payload() -> serde_json::Value {
        json!({
            "id": 12,
            "name": "Zhang Wei",
            "email": "zhangwei@example.com",
            "avatar_url": "https://cdn.example.com/zw.png",
            "grade": "2021",
            "major": "Software Engineering",
            "role": "student"
        })
    }

    #[test]
    fn test_full_page_load() {
        let user: UserDto = serde_json::from_value(user_payload()).unwrap();
        let teams = json!([
            {"team": {"id": 3, "name": "Night Owls", "requirements": ["Frontend\nBackend"]},
             "members": [{"username": "zhangwei"}]}
        ]);
        let articles = json!([
            {"id": 1, "title": "Hello", "summary": "", "category": "news", "cover_image": "",
             "view_count": 3, "created_at": "2024-02-02T10:00:00"}
        ]);
        let vm = ProfileViewModelBuilder::from_json(&teams.to_string(), &articles.to_string()).unwrap();

        let state = reduce_all(vec![
            ProfileAction::UserLoaded(user.clone()),
            ProfileAction::ContentLoaded(vm),
        ]);

        assert_eq!(state.user, Some(user));
        assert_eq!(state.teams()[0].requirements(), &["Frontend", "Backend"]);
        assert_eq!(state.articles()[0].title, "Hello");
    }

    #[test]
    fn test_content_failure_does_not_touch_profile() {
        let user: UserDto = serde_json::from_value(user_payload()).unwrap();
        let failed = ProfileViewModelBuilder::from_responses(
            Err(SharedError::from_status(502, "bad gateway")),
            Ok(Vec::new()),
        );
        assert!(failed.is_err());

        let state = reduce_all(vec![
            ProfileAction::UserLoaded(user),
            ProfileAction::ContentFailed(CONTENT_FAILED_MESSAGE.to_string()),
        ]);

        assert!(state.user.is_some());
        assert_eq!(state.content, ContentState::Failed(CONTENT_FAILED_MESSAGE.to_string()));
        assert!(state.teams().is_empty());
    }

    #[test]
    fn test_invalid_edit_keeps_edit_mode() {
        let user: UserDto = serde_json::from_value(user_payload()).unwrap();
        let edited = user.with_field(UserField::Email, "broken");

        let state = reduce_all(vec![
            ProfileAction::UserLoaded(user.clone()),
            ProfileAction::ToggleEdit,
            ProfileAction::from_save(edited.validated()),
        ]);

        assert!(state.editing);
        assert_eq!(state.user, Some(user));
        assert!(state.save_error.is_some());
    }

    #[test]
    fn test_rejected_update_keeps_edit_mode() {
        let user: UserDto = serde_json::from_value(user_payload()).unwrap();

        let state = reduce_all(vec![
            ProfileAction::UserLoaded(user.clone()),
            ProfileAction::ToggleEdit,
            ProfileAction::from_save(Err(SharedError::from_status(500, "update failed"))),
        ]);

        assert!(state.editing);
        assert_eq!(state.user, Some(user));
        assert_eq!(state.save_error.as_deref(), Some(SAVE_FAILED_MESSAGE));
    }

    #[test]
    fn test_user_with_null_fields_still_loads() {
        let user: UserDto = serde_json::from_value(json!({
            "id": 12,
            "name": "Zhang Wei",
            "email": "zhangwei@example.com",
            "avatar_url": null,
            "grade": null,
            "major": null,
            "role": "student"
        }))
        .unwrap();

        let state = reduce_all(vec![ProfileAction::UserLoaded(user)]);
        assert_eq!(state.user_error, None);
        assert_eq!(state.user.map(|u| u.avatar_url), Some(String::new()));
    }

    #[test]
    fn test_saved_user_round_trips_as_update_body() {
        let user: UserDto = serde_json::from_value(user_payload()).unwrap();
        let edited = user.with_field(UserField::Major, "Data Science");
        let body = serde_json::to_value(&edited).unwrap();

        assert_eq!(body["major"], "Data Science");
        assert_eq!(body["id"], 12);
        assert_eq!(body["role"], "student");
    }
}
