//! Credential types and credential definitions.
//!
//! A plugin declares, per credential type it supports, an ordered list of
//! named variables the user must supply. The definition is the canonical
//! template: consumers that need a mutated view (e.g. example payloads)
//! must build their own projection instead of writing through it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::csp::Csp;
use crate::errors::DocsError;

/// The authentication shape a provider credential takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CredentialType {
    #[serde(rename = "variables")]
    Variables,
    #[serde(rename = "http_authentication")]
    HttpAuthentication,
    #[serde(rename = "api_key")]
    ApiKey,
    #[serde(rename = "oauth2")]
    OAuth2,
}

impl CredentialType {
    /// Every known credential type.
    pub const ALL: [CredentialType; 4] = [
        CredentialType::Variables,
        CredentialType::HttpAuthentication,
        CredentialType::ApiKey,
        CredentialType::OAuth2,
    ];

    /// The short code used on the wire and in artifact file names.
    pub fn to_value(self) -> &'static str {
        match self {
            CredentialType::Variables => "variables",
            CredentialType::HttpAuthentication => "http_authentication",
            CredentialType::ApiKey => "api_key",
            CredentialType::OAuth2 => "oauth2",
        }
    }
}

impl fmt::Display for CredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_value())
    }
}

impl FromStr for CredentialType {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CredentialType::ALL
            .into_iter()
            .find(|t| t.to_value() == s)
            .ok_or_else(|| DocsError::unknown_value("credential type", s))
    }
}

/// One field a user must supply when adding a credential.
///
/// `value` is empty in the canonical template; users fill it in when they
/// submit a credential. Field order is part of the observable payload shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialVariable {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub value: String,
}

impl CredentialVariable {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            value: String::new(),
        }
    }
}

/// One credential definition: the variable template a plugin declares for a
/// (provider, credential type) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialVariables {
    pub csp: Csp,
    #[serde(rename = "type")]
    pub credential_type: CredentialType,
    pub name: String,
    pub description: String,
    pub variables: Vec<CredentialVariable>,
}

impl CredentialVariables {
    pub fn new(
        csp: Csp,
        credential_type: CredentialType,
        name: impl Into<String>,
        description: impl Into<String>,
        variables: Vec<CredentialVariable>,
    ) -> Self {
        Self {
            csp,
            credential_type,
            name: name.into(),
            description: description.into(),
            variables,
        }
    }
}
