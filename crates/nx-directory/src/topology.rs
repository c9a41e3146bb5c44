use serde::{Deserialize, Serialize};

use crate::presence::GatewayPresence;

/// The directory's view of the network, reduced to what the explorer
/// consumes: the gateway list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    #[serde(default)]
    pub gateways: Vec<GatewayPresence>,
}

impl Topology {
    /// Keep only gateways whose announced version is compatible with
    /// `expected`: same major and minor. Entries with unparseable
    /// versions are dropped.
    pub fn filter_system_version(self, expected: &str) -> Self {
        let Ok(expected) = semver::Version::parse(expected) else {
            tracing::warn!(version = expected, "Unparseable expected version, keeping nothing");
            return Self::default();
        };

        let gateways = self
            .gateways
            .into_iter()
            .filter(|gw| match semver::Version::parse(&gw.version) {
                Ok(v) => v.major == expected.major && v.minor == expected.minor,
                Err(_) => {
                    tracing::debug!(
                        identity = gw.identity_key,
                        version = gw.version,
                        "Gateway announces unparseable version, filtering out"
                    );
                    false
                }
            })
            .collect();

        Self { gateways }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(version: &str) -> GatewayPresence {
        GatewayPresence {
            location: "earth".into(),
            client_listener: "ws://gw.example:9000".into(),
            mixnet_listener: "gw.example:1789".into(),
            identity_key: format!("id-{version}"),
            sphinx_key: "abc".into(),
            registered_clients: vec![],
            last_seen: 0,
            version: version.into(),
        }
    }

    #[test]
    fn test_keeps_same_major_minor() {
        let topology = Topology {
            gateways: vec![gateway("0.8.0"), gateway("0.8.3"), gateway("0.9.0")],
        };
        let filtered = topology.filter_system_version("0.8.1");
        let versions: Vec<&str> = filtered.gateways.iter().map(|g| g.version.as_str()).collect();
        assert_eq!(versions, vec!["0.8.0", "0.8.3"]);
    }

    #[test]
    fn test_drops_unparseable_versions() {
        let topology = Topology {
            gateways: vec![gateway("0.8.0"), gateway("not-a-version")],
        };
        let filtered = topology.filter_system_version("0.8.0");
        assert_eq!(filtered.gateways.len(), 1);
    }

    #[test]
    fn test_unparseable_expected_keeps_nothing() {
        let topology = Topology {
            gateways: vec![gateway("0.8.0")],
        };
        let filtered = topology.filter_system_version("garbage");
        assert!(filtered.gateways.is_empty());
    }

    #[test]
    fn test_empty_topology_json() {
        let topology: Topology = serde_json::from_str("{}").unwrap();
        assert!(topology.gateways.is_empty());
    }
}
