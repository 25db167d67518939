//! The provider integration trait.

use credoc_core::{Csp, CredentialVariables};

/// A cloud service provider integration.
///
/// The documentation pipeline only needs two things from an integration:
/// which provider it serves, and which credential definitions it declares.
/// The returned definitions are canonical templates; callers must not
/// mutate them (build a local copy if a mutated view is needed).
pub trait CspPlugin: Send + Sync {
    /// The provider this integration serves.
    fn csp(&self) -> Csp;

    /// The credential definitions this integration declares.
    ///
    /// May be empty for integrations that do not take credentials.
    fn credential_definitions(&self) -> Vec<CredentialVariables>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use credoc_core::{CredentialType, CredentialVariable};

    struct Fixed;

    impl CspPlugin for Fixed {
        fn csp(&self) -> Csp {
            Csp::Aws
        }

        fn credential_definitions(&self) -> Vec<CredentialVariables> {
            vec![CredentialVariables::new(
                Csp::Aws,
                CredentialType::Variables,
                "KEYS",
                "access keys",
                vec![CredentialVariable::new("ACCESS_KEY_ID", "Access key id")],
            )]
        }
    }

    #[test]
    fn plugin_is_object_safe() {
        let p: Box<dyn CspPlugin> = Box::new(Fixed);
        assert_eq!(p.csp(), Csp::Aws);
        assert_eq!(p.credential_definitions().len(), 1);
    }
}
