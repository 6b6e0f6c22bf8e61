use crate::dto::article::ArticleDto;
use crate::dto::team::TeamMembershipDto;
use crate::error::Result;
use crate::view_model::profile::{ProfileViewModel, ProfileViewModelBuilder};
use log::{debug, error};
use std::future::Future;

/// Runs the teams and articles requests concurrently and builds the view
/// model once both have succeeded.
///
/// The first failure aborts the join and is returned as is; nothing from the
/// other request is kept.
pub async fn load_profile_content<TF, AF>(teams: TF, articles: AF) -> Result<ProfileViewModel>
where
    TF: Future<Output = Result<Vec<TeamMembershipDto>>>,
    AF: Future<Output = Result<Vec<ArticleDto>>>,
{
    match futures::try_join!(teams, articles) {
        Ok((memberships, articles)) => {
            debug!(
                "Profile content fetched: {} memberships, {} articles",
                memberships.len(),
                articles.len()
            );
            Ok(ProfileViewModelBuilder::build(memberships, articles))
        }
        Err(e) => {
            error!("Failed to load profile content: {}", e);
            Err(e)
        }
    }
}
