pub struct Config;

impl Config {
    /// Delay before a missing profile sends the viewer back home.
    pub const REDIRECT_DELAY_MS: u32 = 3000;

    /// Local storage key holding the bearer token of the signed-in user.
    pub const ACCESS_TOKEN_KEY: &'static str = "access_token";

    /// Local storage key holding the signed-in user's id.
    pub const USER_ID_KEY: &'static str = "id";

    pub fn api_base_url() -> String {
        // Baked in at build time (`API_BASE_URL=https://api.example.com trunk build`).
        // Unset means relative URLs, which works behind the dev proxy and nginx alike.
        option_env!("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_default()
    }
}
