//! Login page configuration
//!
//! The page receives its configuration at construction instead of reading a
//! mutable global at submission time. Every option has a documented default,
//! so callers only override what they need.

/// Settings for the login page
#[derive(Debug, Clone, PartialEq)]
pub struct LoginConfig {
    /// POST target for the credential payload
    pub login_endpoint: String,
    /// Where the page navigates after a successful login
    pub success_redirect: String,
    /// How long the success modal stays on screen before navigating
    pub redirect_delay_ms: u32,
    /// How long an error banner stays visible before auto-hiding
    pub error_display_ms: u32,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            login_endpoint: "/api/auth/login".to_string(),
            success_redirect: "/sistema".to_string(),
            redirect_delay_ms: 1200,
            error_display_ms: 5000,
        }
    }
}

impl LoginConfig {
    /// Checks the configuration, collecting every violation
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.login_endpoint.trim().is_empty() {
            errors.push("login_endpoint must not be empty".to_string());
        }

        if self.success_redirect.trim().is_empty() {
            errors.push("success_redirect must not be empty".to_string());
        }

        if self.redirect_delay_ms == 0 {
            errors.push("redirect_delay_ms must be greater than 0".to_string());
        }

        if self.error_display_ms == 0 {
            errors.push("error_display_ms must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoginConfig::default();
        assert_eq!(config.login_endpoint, "/api/auth/login");
        assert_eq!(config.success_redirect, "/sistema");
        assert_eq!(config.redirect_delay_ms, 1200);
        assert_eq!(config.error_display_ms, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_keep_other_defaults() {
        let config = LoginConfig {
            login_endpoint: "https://auth.escola.br/login".to_string(),
            ..LoginConfig::default()
        };

        assert_eq!(config.login_endpoint, "https://auth.escola.br/login");
        assert_eq!(config.success_redirect, "/sistema");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_collects_all_violations() {
        let config = LoginConfig {
            login_endpoint: "  ".to_string(),
            success_redirect: String::new(),
            redirect_delay_ms: 0,
            error_display_ms: 5000,
        };

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
