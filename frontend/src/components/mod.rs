pub mod profile {
    pub mod profile_tabs;
    pub mod sidebar;
}
pub mod article_card;
pub mod common_toast;
pub mod team_card;
