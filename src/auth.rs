//! Delegated sign-in.
//!
//! Credentials are never handled here. Signing in means building the
//! redirect that hands the user to the external identity service, which
//! owns the rest of the flow.

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::{DesignerError, Result};

/// Identity providers offered on the sign-in page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    /// OAuth through GitHub
    GitHub,
    /// Magic link sent to an e-mail address
    Email(String),
}

impl Provider {
    /// Identifier used in the identity service's routes.
    pub fn id(&self) -> &'static str {
        match self {
            Provider::GitHub => "github",
            Provider::Email(_) => "email",
        }
    }
}

/// Where to send the browser next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub location: String,
}

/// Capability to start a sign-in with an external provider.
pub trait SignIn {
    /// Produce the redirect that starts the provider's flow.
    fn sign_in(&self, provider: &Provider) -> Result<Redirect>;
}

/// Sign-in through an identity service exposing
/// `/api/auth/signin/{provider}` routes.
#[derive(Debug, Clone)]
pub struct OAuthGateway {
    base_url: Url,
    callback_url: Option<String>,
}

impl OAuthGateway {
    /// Create a gateway for the service at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| DesignerError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DesignerError::InvalidUrl {
                url: base_url.to_string(),
                message: "not a base URL".to_string(),
            });
        }
        Ok(Self {
            base_url,
            callback_url: None,
        })
    }

    /// Set the page the provider returns to after signing in.
    pub fn with_callback(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }
}

impl SignIn for OAuthGateway {
    fn sign_in(&self, provider: &Provider) -> Result<Redirect> {
        if let Provider::Email(address) = provider {
            validate_email(address)?;
        }

        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "auth", "signin", provider.id()]);
        }

        {
            let mut query = url.query_pairs_mut();
            if let Some(callback) = &self.callback_url {
                query.append_pair("callbackUrl", callback);
            }
            if let Provider::Email(address) = provider {
                query.append_pair("email", address.trim());
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        debug!(provider = provider.id(), "sign-in redirect built");
        Ok(Redirect {
            location: url.into(),
        })
    }
}

/// Shape check only: one `@` with non-empty parts and no whitespace.
fn validate_email(address: &str) -> Result<()> {
    let address = address.trim();
    let valid = match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !address.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DesignerError::InvalidEmail {
            address: address.to_string(),
        })
    }
}
