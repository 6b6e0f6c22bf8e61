#[cfg(test)]
mod tests {
    use crate::components::profile::profile_tabs::ProfileTab;
    use crate::Route;
    use yew_router::Routable;

    #[test]
    fn test_profile_route_path() {
        let route = Route::UserProfile {
            user_id: "42".to_string(),
        };
        assert_eq!(route.to_path(), "/user/42");
        assert_eq!(Route::Home.to_path(), "/");
    }

    #[test]
    fn test_profile_route_recognized() {
        assert_eq!(
            Route::recognize("/user/42"),
            Some(Route::UserProfile {
                user_id: "42".to_string()
            })
        );
    }

    #[test]
    fn test_tab_labels_and_empty_messages() {
        assert_eq!(ProfileTab::Teams.label(), "Teams");
        assert_eq!(ProfileTab::Articles.label(), "Articles");
        assert!(ProfileTab::Teams.empty_message().contains("team"));
        assert!(ProfileTab::Articles.empty_message().contains("article"));
    }
}
