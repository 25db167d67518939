//! Cloud service provider enumeration.
//!
//! The set of providers is closed: every provider the orchestrator can talk
//! to has a variant here, and the wire value of a variant is the short code
//! used in artifact file names, request payloads and route paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DocsError;

/// A cloud service provider integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Csp {
    #[serde(rename = "aws")]
    Aws,
    #[serde(rename = "azure")]
    Azure,
    #[serde(rename = "alicloud")]
    Alicloud,
    #[serde(rename = "huawei")]
    Huawei,
    #[serde(rename = "openstack")]
    Openstack,
    #[serde(rename = "flexibleEngine")]
    FlexibleEngine,
}

impl Csp {
    /// Every known provider, in registry order.
    pub const ALL: [Csp; 6] = [
        Csp::Aws,
        Csp::Azure,
        Csp::Alicloud,
        Csp::Huawei,
        Csp::Openstack,
        Csp::FlexibleEngine,
    ];

    /// The short code used on the wire and in artifact file names.
    pub fn to_value(self) -> &'static str {
        match self {
            Csp::Aws => "aws",
            Csp::Azure => "azure",
            Csp::Alicloud => "alicloud",
            Csp::Huawei => "huawei",
            Csp::Openstack => "openstack",
            Csp::FlexibleEngine => "flexibleEngine",
        }
    }
}

impl fmt::Display for Csp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_value())
    }
}

impl FromStr for Csp {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Csp::ALL
            .into_iter()
            .find(|csp| csp.to_value() == s)
            .ok_or_else(|| DocsError::unknown_value("csp", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_round_trip() {
        for csp in Csp::ALL {
            assert_eq!(csp.to_value().parse::<Csp>().unwrap(), csp);
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert!("gcp".parse::<Csp>().is_err());
        assert!("Huawei".parse::<Csp>().is_err());
    }

    #[test]
    fn serde_uses_wire_values() {
        assert_eq!(serde_json::to_string(&Csp::FlexibleEngine).unwrap(), "\"flexibleEngine\"");
        let csp: Csp = serde_json::from_str("\"huawei\"").unwrap();
        assert_eq!(csp, Csp::Huawei);
    }
}
