pub mod dto {
    pub mod article;
    pub mod common;
    pub mod team;
    pub mod upload;
    pub mod user;
}

pub mod view_model {
    pub mod loader;
    pub mod profile;
}

pub mod error;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export DTOs
pub use dto::{
    article::ArticleDto,
    common::ErrorResponse,
    team::{TeamDto, TeamMemberDto, TeamMembershipDto},
    upload::{UploadImageResponse, UploadedImage},
    user::{UserDto, UserField},
};

// Re-export view models
pub use view_model::{
    loader::load_profile_content,
    profile::{flatten_requirements, ProfileViewModel, ProfileViewModelBuilder, TeamView},
};
