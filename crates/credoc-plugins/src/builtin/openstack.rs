//! OpenStack integration.
//!
//! OpenStack authenticates with scoped username/password credentials; the
//! scope (project and domain) travels as additional variables.

use std::sync::Arc;

use credoc_core::{CredentialType, CredentialVariable, CredentialVariables, Csp};

use crate::plugin::CspPlugin;
use crate::registry::PluginRegistry;

pub struct OpenstackPlugin;

impl CspPlugin for OpenstackPlugin {
    fn csp(&self) -> Csp {
        Csp::Openstack
    }

    fn credential_definitions(&self) -> Vec<CredentialVariables> {
        vec![CredentialVariables::new(
            Csp::Openstack,
            CredentialType::Variables,
            "USERNAME_PASSWORD",
            "Scoped username and password used to authenticate against the OpenStack identity service.",
            vec![
                CredentialVariable::new("OS_PROJECT_NAME", "The name of the project to scope to."),
                CredentialVariable::new("OS_USER_DOMAIN_NAME", "The domain of the user."),
                CredentialVariable::new("OS_USERNAME", "The name of the user."),
                CredentialVariable::new("OS_PASSWORD", "The password of the user."),
            ],
        )]
    }
}

/// Register the OpenStack integration.
pub fn register(registry: &mut PluginRegistry) {
    registry.register(Arc::new(OpenstackPlugin));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_scoped_password_variables() {
        let defs = OpenstackPlugin.credential_definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].credential_type, CredentialType::Variables);
        assert_eq!(defs[0].variables.len(), 4);
    }
}
