//! Artifact file-name scheme.
//!
//! Pure, total, deterministic: `<csp>_<type>_credentialApi<suffix>`.
//! Both identifiers come from closed enumerations, so the scheme is
//! collision-free across the full provider/type cross-product.

use credoc_core::{CredentialType, Csp};

/// Suffix of the transient synthesized document.
pub const JSON_SUFFIX: &str = ".json";

/// Suffix of the durable rendered document.
pub const HTML_SUFFIX: &str = ".html";

/// File name of the artifact for one (provider, credential type) pair.
pub fn credential_api_file_name(csp: Csp, credential_type: CredentialType, suffix: &str) -> String {
    format!(
        "{}_{}_credentialApi{}",
        csp.to_value(),
        credential_type.to_value(),
        suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn known_shape() {
        assert_eq!(
            credential_api_file_name(Csp::Huawei, CredentialType::Variables, HTML_SUFFIX),
            "huawei_variables_credentialApi.html"
        );
        assert_eq!(
            credential_api_file_name(Csp::FlexibleEngine, CredentialType::ApiKey, JSON_SUFFIX),
            "flexibleEngine_api_key_credentialApi.json"
        );
    }

    #[test]
    fn suffixes_never_collide() {
        for csp in Csp::ALL {
            for t in CredentialType::ALL {
                assert_ne!(
                    credential_api_file_name(csp, t, JSON_SUFFIX),
                    credential_api_file_name(csp, t, HTML_SUFFIX)
                );
            }
        }
    }

    #[test]
    fn collision_free_across_the_cross_product() {
        let mut seen = HashSet::new();
        for csp in Csp::ALL {
            for t in CredentialType::ALL {
                assert!(seen.insert(credential_api_file_name(csp, t, HTML_SUFFIX)));
            }
        }
        assert_eq!(seen.len(), Csp::ALL.len() * CredentialType::ALL.len());
    }
}
