pub mod upload;
pub mod users;
pub mod utils;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    join_url(&Config::api_base_url(), path)
}

fn join_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        // Use absolute URL
        format!("{}{}", base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_relative() {
        assert_eq!(join_url("", "/api/user/info/1"), "/api/user/info/1");
    }

    #[test]
    fn test_join_url_absolute() {
        assert_eq!(
            join_url("https://api.example.com", "/upload_image"),
            "https://api.example.com/upload_image"
        );
    }
}
