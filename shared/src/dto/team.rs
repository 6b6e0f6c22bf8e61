use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Team object nested in each item of `/api/user/teams/{id}`.
///
/// Only the fields the page renders are typed; everything else the backend
/// sends is kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamDto {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text requirement lines; a single entry may span several lines.
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A team member exactly as the backend describes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TeamMemberDto(pub Value);

impl TeamMemberDto {
    pub fn display_name(&self) -> Option<&str> {
        ["name", "username"]
            .iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str))
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.0
            .get("avatar_url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Account id of the member (`user_id`, or `id` on older payloads).
    pub fn user_id(&self) -> Option<i64> {
        ["user_id", "id"]
            .iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_i64))
    }

    pub fn role(&self) -> Option<&str> {
        self.0.get("role").and_then(Value::as_str)
    }
}

/// One item of the user-teams response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMembershipDto {
    pub team: TeamDto,
    #[serde(default)]
    pub members: Vec<TeamMemberDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_keeps_unknown_fields() {
        let raw = json!({
            "id": 4,
            "name": "Rustaceans",
            "requirements": ["Knows Rust"],
            "competition_id": 12,
            "max_members": 5
        });
        let team: TeamDto = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(team.extra.get("competition_id"), Some(&json!(12)));
        assert_eq!(serde_json::to_value(&team).unwrap(), raw);
    }

    #[test]
    fn test_team_defaults_missing_requirements() {
        let team: TeamDto = serde_json::from_value(json!({"id": 1})).unwrap();
        assert!(team.requirements.is_empty());
        assert_eq!(team.name, None);
        assert_eq!(team.description, None);
    }

    #[test]
    fn test_member_helpers_read_without_changing() {
        let raw = json!({"user_id": 9, "username": "mei", "avatar_url": "", "role": "leader"});
        let member: TeamMemberDto = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(member.display_name(), Some("mei"));
        assert_eq!(member.user_id(), Some(9));
        assert_eq!(member.avatar_url(), None);
        assert_eq!(member.role(), Some("leader"));
        assert_eq!(member.0, raw);
    }

    #[test]
    fn test_member_prefers_name_over_username() {
        let member = TeamMemberDto(json!({"name": "Mei Lin", "username": "mei"}));
        assert_eq!(member.display_name(), Some("Mei Lin"));
    }
}
