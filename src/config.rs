// Runtime settings for both programs. Everything is a literal default;
// only the backend URL can be pointed elsewhere through `BACKEND_URL`.

/// Base URL used when `BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Admin account seeded by the backend for demo use.
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials {
            email: ADMIN_EMAIL.into(),
            password: ADMIN_PASSWORD.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend_url: String,
    pub credentials: Credentials,
}

impl Settings {
    /// Read `BACKEND_URL` from the environment, falling back to
    /// `DEFAULT_BACKEND_URL`.
    pub fn from_env() -> Self {
        Self::with_backend_url(std::env::var("BACKEND_URL").ok())
    }

    /// Build settings from an optional URL override. Blank overrides are
    /// ignored and a trailing slash is dropped so paths can be appended.
    pub fn with_backend_url(url: Option<String>) -> Self {
        let backend_url = url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.into());
        Settings {
            backend_url,
            credentials: Credentials::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_backend_url(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let s = Settings::default();
        assert_eq!(s.backend_url, "http://localhost:8001");
        assert_eq!(s.credentials.email, "admin@example.com");
        assert_eq!(s.credentials.password, "admin123");
    }

    #[test]
    fn override_drops_trailing_slash() {
        let s = Settings::with_backend_url(Some("https://demo.example.org/api/".into()));
        assert_eq!(s.backend_url, "https://demo.example.org/api");
    }

    #[test]
    fn blank_override_falls_back() {
        let s = Settings::with_backend_url(Some("   ".into()));
        assert_eq!(s.backend_url, DEFAULT_BACKEND_URL);
    }
}
