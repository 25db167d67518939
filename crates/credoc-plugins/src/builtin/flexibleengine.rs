//! Flexible Engine integration.
//!
//! Flexible Engine shares the access key / secret key scheme of its
//! upstream platform.

use std::sync::Arc;

use credoc_core::{CredentialType, CredentialVariable, CredentialVariables, Csp};

use crate::plugin::CspPlugin;
use crate::registry::PluginRegistry;

pub struct FlexibleEnginePlugin;

impl CspPlugin for FlexibleEnginePlugin {
    fn csp(&self) -> Csp {
        Csp::FlexibleEngine
    }

    fn credential_definitions(&self) -> Vec<CredentialVariables> {
        vec![CredentialVariables::new(
            Csp::FlexibleEngine,
            CredentialType::Variables,
            "AK_SK",
            "Access key and secret key used to authenticate against Flexible Engine APIs.",
            vec![
                CredentialVariable::new("OS_ACCESS_KEY", "The access key."),
                CredentialVariable::new("OS_SECRET_KEY", "The security key."),
            ],
        )]
    }
}

/// Register the Flexible Engine integration.
pub fn register(registry: &mut PluginRegistry) {
    registry.register(Arc::new(FlexibleEnginePlugin));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_an_ak_sk_pair() {
        let defs = FlexibleEnginePlugin.credential_definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].csp, Csp::FlexibleEngine);
        assert_eq!(defs[0].variables.len(), 2);
    }
}
