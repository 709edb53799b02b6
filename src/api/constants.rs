//! API constants for the Vercel REST API

/// Default API host
pub const API_BASE_URL: &str = "https://api.vercel.com";

/// Project environment variables API version
pub const ENV_API_VERSION: &str = "v10";

/// Environment variable holding the bearer credential
pub const TOKEN_ENV_VAR: &str = "VERCEL_TOKEN";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("vercel-env/", env!("CARGO_PKG_VERSION"));

/// Target identity the tool was written for
pub mod defaults {
    pub const PROJECT_ID: &str = "prj_Ng4vTArnI3mZHd6hx9hC1geVxUSr";
    pub const TEAM_ID: &str = "team_uLN1tg1sg1HmN9dV6n6PkfwI";
    pub const ENV_KEY: &str = "VITE_GEMINI_API_KEY";
}

/// Standard headers
pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// Build the project environment variables endpoint URL
pub fn project_env_endpoint(base_url: &str, project_id: &str, team_id: &str) -> String {
    format!(
        "{}/{}/projects/{}/env?teamId={}",
        base_url.trim_end_matches('/'),
        ENV_API_VERSION,
        urlencoding::encode(project_id),
        urlencoding::encode(team_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_embeds_ids_verbatim() {
        let url = project_env_endpoint(API_BASE_URL, defaults::PROJECT_ID, defaults::TEAM_ID);
        assert_eq!(
            url,
            "https://api.vercel.com/v10/projects/prj_Ng4vTArnI3mZHd6hx9hC1geVxUSr/env?teamId=team_uLN1tg1sg1HmN9dV6n6PkfwI"
        );
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        let url = project_env_endpoint("http://127.0.0.1:8080/", "prj_1", "team_1");
        assert_eq!(url, "http://127.0.0.1:8080/v10/projects/prj_1/env?teamId=team_1");
    }

    #[test]
    fn test_endpoint_encodes_reserved_characters() {
        let url = project_env_endpoint(API_BASE_URL, "a/b", "c&d");
        assert_eq!(url, "https://api.vercel.com/v10/projects/a%2Fb/env?teamId=c%26d");
    }
}
