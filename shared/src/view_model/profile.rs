use crate::dto::article::ArticleDto;
use crate::dto::team::{TeamDto, TeamMemberDto, TeamMembershipDto};
use crate::error::Result;
use log::debug;
use serde::Serialize;

/// A team ready for rendering: the backend's team object with its
/// requirements split into single lines, plus the member list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamView {
    #[serde(flatten)]
    pub team: TeamDto,
    pub members: Vec<TeamMemberDto>,
}

impl TeamView {
    pub fn id(&self) -> i64 {
        self.team.id
    }

    pub fn requirements(&self) -> &[String] {
        &self.team.requirements
    }
}

impl From<TeamMembershipDto> for TeamView {
    fn from(membership: TeamMembershipDto) -> Self {
        let TeamMembershipDto { mut team, members } = membership;
        team.requirements = flatten_requirements(&team.requirements);
        Self { team, members }
    }
}

/// Everything the teams and articles tabs render.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct ProfileViewModel {
    pub teams: Vec<TeamView>,
    pub articles: Vec<ArticleDto>,
}

impl ProfileViewModel {
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.articles.is_empty()
    }
}

/// Splits every requirement on `\n` and concatenates the pieces in order.
///
/// Blank pieces are kept, so the output always has exactly
/// `1 + newline count` entries per input string. A trailing `\r` is dropped
/// from each piece.
pub fn flatten_requirements<S: AsRef<str>>(requirements: &[S]) -> Vec<String> {
    requirements
        .iter()
        .flat_map(|requirement| requirement.as_ref().split('\n'))
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

pub struct ProfileViewModelBuilder;

impl ProfileViewModelBuilder {
    pub fn build(memberships: Vec<TeamMembershipDto>, articles: Vec<ArticleDto>) -> ProfileViewModel {
        let teams: Vec<TeamView> = memberships.into_iter().map(TeamView::from).collect();
        debug!(
            "Built profile view model: {} teams, {} articles",
            teams.len(),
            articles.len()
        );
        ProfileViewModel { teams, articles }
    }

    /// Builds from the raw response bodies. Either body failing to parse
    /// fails the whole build.
    pub fn from_json(teams_json: &str, articles_json: &str) -> Result<ProfileViewModel> {
        let memberships: Vec<TeamMembershipDto> = serde_json::from_str(teams_json)?;
        let articles: Vec<ArticleDto> = serde_json::from_str(articles_json)?;
        Ok(Self::build(memberships, articles))
    }

    /// Builds only when both fetches succeeded; the first error wins.
    pub fn from_responses(
        memberships: Result<Vec<TeamMembershipDto>>,
        articles: Result<Vec<ArticleDto>>,
    ) -> Result<ProfileViewModel> {
        Ok(Self::build(memberships?, articles?))
    }
}
