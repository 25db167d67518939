//! Error types for the documentation pipeline.
//!
//! Two failure classes are surfaced to callers: a requested (provider,
//! credential type) pair that no plugin declares, and a generation attempt
//! that could not produce the HTML artifact. Everything else the pipeline
//! hits is logged where it happens and deliberately not raised.

use crate::credential::CredentialType;
use crate::csp::Csp;

/// Result type used throughout the documentation pipeline.
pub type DocsResult<T> = Result<T, DocsError>;

/// Errors surfaced by the documentation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// No plugin declares a credential definition for the requested pair.
    #[error("no credential definition with type {credential_type} available for cloud service provider {csp}")]
    NoCredentialDefinition {
        csp: Csp,
        credential_type: CredentialType,
    },

    /// The artifact for the named file could not be generated.
    #[error("credential api file {file} generation failed: {message}")]
    Generation { file: String, message: String },

    /// A wire value did not match any variant of a closed enumeration.
    #[error("unknown {field} value: {value}")]
    UnknownValue { field: &'static str, value: String },
}

impl DocsError {
    pub fn no_credential_definition(csp: Csp, credential_type: CredentialType) -> Self {
        Self::NoCredentialDefinition {
            csp,
            credential_type,
        }
    }

    pub fn generation(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Generation {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn unknown_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_definition_names_both_identifiers() {
        let e = DocsError::no_credential_definition(Csp::Huawei, CredentialType::OAuth2);
        let msg = e.to_string();
        assert!(msg.contains("huawei"));
        assert!(msg.contains("oauth2"));
    }

    #[test]
    fn generation_names_the_file() {
        let e = DocsError::generation("huawei_variables_credentialApi.html", "spawn failed");
        assert!(e.to_string().contains("huawei_variables_credentialApi.html"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocsError>();
    }
}
