use compete_shared::{ArticleDto, ProfileViewModel, SharedError, TeamView, UserDto};
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

pub const USER_MISSING_MESSAGE: &str = "User does not exist";
pub const CONTENT_FAILED_MESSAGE: &str = "Failed to load data, please try again later!";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save!";
pub const TEAM_ACTION_UNAVAILABLE_MESSAGE: &str = "This action is not available on this page!";

/// Teams and articles share one lifecycle: they load and fail together.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentState {
    Loading,
    Loaded(ProfileViewModel),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileState {
    pub user: Option<UserDto>,
    pub user_loading: bool,
    pub user_error: Option<String>,
    pub content: ContentState,
    pub editing: bool,
    /// Why the last save attempt failed; cleared by the next save or toggle.
    pub save_error: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            user: None,
            user_loading: true,
            user_error: None,
            content: ContentState::Loading,
            editing: false,
            save_error: None,
        }
    }
}

impl ProfileState {
    pub fn content_loading(&self) -> bool {
        matches!(self.content, ContentState::Loading)
    }

    pub fn content_error(&self) -> Option<&str> {
        match &self.content {
            ContentState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn teams(&self) -> &[TeamView] {
        match &self.content {
            ContentState::Loaded(vm) => &vm.teams,
            _ => &[],
        }
    }

    pub fn articles(&self) -> &[ArticleDto] {
        match &self.content {
            ContentState::Loaded(vm) => &vm.articles,
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProfileAction {
    /// Start over for a different user id.
    Reset,
    UserLoaded(UserDto),
    UserMissing(String),
    ContentLoaded(ProfileViewModel),
    ContentFailed(String),
    ToggleEdit,
    UserSaved(UserDto),
    /// Save was rejected (validation or backend); the form stays open.
    SaveFailed(String),
}

impl ProfileAction {
    /// Turns the outcome of a save into the action that records it.
    /// Validation messages are shown as is, other failures get a generic one.
    pub fn from_save(result: compete_shared::Result<UserDto>) -> Self {
        match result {
            Ok(user) => ProfileAction::UserSaved(user),
            Err(SharedError::Validation(message)) => ProfileAction::SaveFailed(message),
            Err(_) => ProfileAction::SaveFailed(SAVE_FAILED_MESSAGE.to_string()),
        }
    }
}

/// Numbers each round of profile requests. A response is applied only while
/// its round is still the current one, so a late answer for a previous user
/// id (or for an unmounted page) is dropped.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: Cell<u64>,
}

impl RequestGeneration {
    /// Starts a new round and returns its ticket.
    pub fn begin(&self) -> u64 {
        self.invalidate();
        self.current.get()
    }

    /// Ends the current round without starting one.
    pub fn invalidate(&self) {
        self.current.set(self.current.get().wrapping_add(1));
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current.get() == ticket
    }
}

impl Reducible for ProfileState {
    type Action = ProfileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ProfileAction::Reset => Rc::new(Self::default()),
            ProfileAction::UserLoaded(user) => Rc::new(Self {
                user: Some(user),
                user_loading: false,
                user_error: None,
                ..(*self).clone()
            }),
            ProfileAction::UserMissing(error) => Rc::new(Self {
                user: None,
                user_loading: false,
                user_error: Some(error),
                editing: false,
                ..(*self).clone()
            }),
            ProfileAction::ContentLoaded(vm) => Rc::new(Self {
                content: ContentState::Loaded(vm),
                ..(*self).clone()
            }),
            ProfileAction::ContentFailed(error) => Rc::new(Self {
                content: ContentState::Failed(error),
                ..(*self).clone()
            }),
            ProfileAction::ToggleEdit => Rc::new(Self {
                editing: !self.editing,
                save_error: None,
                ..(*self).clone()
            }),
            ProfileAction::UserSaved(user) => Rc::new(Self {
                user: Some(user),
                editing: false,
                save_error: None,
                ..(*self).clone()
            }),
            ProfileAction::SaveFailed(error) => Rc::new(Self {
                save_error: Some(error),
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compete_shared::ProfileViewModelBuilder;
    use pretty_assertions::assert_eq;

    fn user(name: &str) -> UserDto {
        UserDto {
            id: 5,
            name: name.to_string(),
            email: "user@example.com".to_string(),
            ..UserDto::default()
        }
    }

    fn apply(state: ProfileState, actions: Vec<ProfileAction>) -> ProfileState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ProfileState::default();
        assert!(state.user_loading);
        assert!(state.content_loading());
        assert!(state.teams().is_empty());
    }

    #[test]
    fn test_user_and_content_load_independently() {
        let vm = ProfileViewModelBuilder::from_json(
            r#"[{"team":{"id":1,"requirements":["a\nb"]},"members":[]}]"#,
            "[]",
        )
        .unwrap();
        let state = apply(
            ProfileState::default(),
            vec![
                ProfileAction::ContentLoaded(vm),
                ProfileAction::UserLoaded(user("Ann")),
            ],
        );
        assert!(!state.user_loading);
        assert_eq!(state.teams().len(), 1);
        assert_eq!(state.teams()[0].requirements(), &["a", "b"]);
    }

    #[test]
    fn test_content_failure_leaves_lists_empty() {
        let state = apply(
            ProfileState::default(),
            vec![ProfileAction::ContentFailed(CONTENT_FAILED_MESSAGE.to_string())],
        );
        assert!(!state.content_loading());
        assert_eq!(state.content_error(), Some(CONTENT_FAILED_MESSAGE));
        assert!(state.teams().is_empty());
        assert!(state.articles().is_empty());
    }

    #[test]
    fn test_user_missing_sets_error() {
        let state = apply(
            ProfileState::default(),
            vec![ProfileAction::UserMissing(USER_MISSING_MESSAGE.to_string())],
        );
        assert!(!state.user_loading);
        assert_eq!(state.user_error.as_deref(), Some(USER_MISSING_MESSAGE));
        assert_eq!(state.user, None);
    }

    #[test]
    fn test_save_leaves_edit_mode() {
        let state = apply(
            ProfileState::default(),
            vec![
                ProfileAction::UserLoaded(user("Ann")),
                ProfileAction::ToggleEdit,
                ProfileAction::UserSaved(user("Annie")),
            ],
        );
        assert!(!state.editing);
        assert_eq!(state.user.map(|u| u.name), Some("Annie".to_string()));
    }

    #[test]
    fn test_failed_save_stays_in_edit_mode() {
        let state = apply(
            ProfileState::default(),
            vec![
                ProfileAction::UserLoaded(user("Ann")),
                ProfileAction::ToggleEdit,
                ProfileAction::from_save(Err(SharedError::from_status(500, "db down"))),
            ],
        );
        assert!(state.editing);
        assert_eq!(state.user.map(|u| u.name), Some("Ann".to_string()));
        assert_eq!(state.save_error.as_deref(), Some(SAVE_FAILED_MESSAGE));
    }

    #[test]
    fn test_save_outcome_keeps_validation_message() {
        assert_eq!(
            ProfileAction::from_save(Err(SharedError::Validation("email: Invalid email format".to_string()))),
            ProfileAction::SaveFailed("email: Invalid email format".to_string())
        );
        assert_eq!(
            ProfileAction::from_save(Ok(user("Ann"))),
            ProfileAction::UserSaved(user("Ann"))
        );
    }

    #[test]
    fn test_successful_save_clears_previous_error() {
        let state = apply(
            ProfileState::default(),
            vec![
                ProfileAction::UserLoaded(user("Ann")),
                ProfileAction::ToggleEdit,
                ProfileAction::SaveFailed(SAVE_FAILED_MESSAGE.to_string()),
                ProfileAction::UserSaved(user("Annie")),
            ],
        );
        assert!(!state.editing);
        assert_eq!(state.save_error, None);
    }

    #[test]
    fn test_new_round_outdates_previous_ticket() {
        let generation = RequestGeneration::default();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_invalidate_outdates_every_ticket() {
        let generation = RequestGeneration::default();
        let ticket = generation.begin();
        generation.invalidate();
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn test_toggle_edit_twice_restores() {
        let state = apply(
            ProfileState::default(),
            vec![ProfileAction::ToggleEdit, ProfileAction::ToggleEdit],
        );
        assert!(!state.editing);
    }

    #[test]
    fn test_reset_returns_to_loading() {
        let state = apply(
            ProfileState::default(),
            vec![
                ProfileAction::UserLoaded(user("Ann")),
                ProfileAction::ContentFailed("x".to_string()),
                ProfileAction::Reset,
            ],
        );
        assert_eq!(state, ProfileState::default());
    }
}
