//! Huawei Cloud integration.
//!
//! Huawei Cloud authenticates programmatic access with an access key /
//! secret key pair, exposed here as a `variables` credential definition.

use std::sync::Arc;

use credoc_core::{CredentialType, CredentialVariable, CredentialVariables, Csp};

use crate::plugin::CspPlugin;
use crate::registry::PluginRegistry;

pub struct HuaweiPlugin;

impl CspPlugin for HuaweiPlugin {
    fn csp(&self) -> Csp {
        Csp::Huawei
    }

    fn credential_definitions(&self) -> Vec<CredentialVariables> {
        vec![CredentialVariables::new(
            Csp::Huawei,
            CredentialType::Variables,
            "AK_SK",
            "Access key and secret key used to authenticate against Huawei Cloud APIs.",
            vec![
                CredentialVariable::new("HW_ACCESS_KEY", "The access key."),
                CredentialVariable::new("HW_SECRET_KEY", "The security key."),
            ],
        )]
    }
}

/// Register the Huawei Cloud integration.
pub fn register(registry: &mut PluginRegistry) {
    registry.register(Arc::new(HuaweiPlugin));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_an_ak_sk_pair() {
        let defs = HuaweiPlugin.credential_definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].credential_type, CredentialType::Variables);
        assert_eq!(defs[0].variables.len(), 2);
        assert!(defs[0].variables.iter().all(|v| v.value.is_empty()));
    }
}
