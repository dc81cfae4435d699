//! QuickBooks Online environments.

use std::fmt;

/// The Intuit environment an app talks to.
///
/// Each environment has its own API host and its own OpenID discovery
/// document. Development keys only work against [`Environment::Sandbox`].
///
/// # Example
///
/// ```rust
/// use quickbooks_api::Environment;
///
/// assert_eq!(
///     Environment::Production.api_endpoint(),
///     "https://quickbooks.api.intuit.com"
/// );
/// assert_eq!(Environment::default(), Environment::Sandbox);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Live company files.
    Production,
    /// Sandbox company files.
    #[default]
    Sandbox,
}

impl Environment {
    /// Returns the accounting API host for this environment.
    #[must_use]
    pub const fn api_endpoint(self) -> &'static str {
        match self {
            Self::Production => "https://quickbooks.api.intuit.com",
            Self::Sandbox => "https://sandbox-quickbooks.api.intuit.com",
        }
    }

    /// Returns the OpenID discovery document URL for this environment.
    #[must_use]
    pub const fn discovery_url(self) -> &'static str {
        match self {
            Self::Production => "https://developer.api.intuit.com/.well-known/openid_configuration",
            Self::Sandbox => {
                "https://developer.api.intuit.com/.well-known/openid_sandbox_configuration"
            }
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Sandbox => f.write_str("sandbox"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_endpoints() {
        assert_eq!(
            Environment::Sandbox.api_endpoint(),
            "https://sandbox-quickbooks.api.intuit.com"
        );
        assert!(Environment::Sandbox
            .discovery_url()
            .ends_with("openid_sandbox_configuration"));
        assert!(Environment::Production
            .discovery_url()
            .ends_with("/openid_configuration"));
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Production.to_string(), "production");
        assert_eq!(Environment::Sandbox.to_string(), "sandbox");
    }
}
