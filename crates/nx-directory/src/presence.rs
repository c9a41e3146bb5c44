use serde::{Deserialize, Serialize};

/// A gateway's self-reported presence entry in the directory.
/// The directory API uses camelCase field names on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayPresence {
    pub location: String,
    pub client_listener: String,
    pub mixnet_listener: String,
    pub identity_key: String,
    pub sphinx_key: String,
    pub registered_clients: Vec<String>,
    pub last_seen: u64,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let presence = GatewayPresence {
            location: "earth".into(),
            client_listener: "ws://gateway.example:9000".into(),
            mixnet_listener: "gateway.example:1789".into(),
            identity_key: "def".into(),
            sphinx_key: "abc".into(),
            registered_clients: vec![],
            last_seen: 1234,
            version: "0.8.0".into(),
        };

        let json = serde_json::to_value(&presence).unwrap();
        assert_eq!(json["clientListener"], "ws://gateway.example:9000");
        assert_eq!(json["mixnetListener"], "gateway.example:1789");
        assert_eq!(json["identityKey"], "def");
        assert_eq!(json["sphinxKey"], "abc");
        assert_eq!(json["registeredClients"], serde_json::json!([]));
        assert_eq!(json["lastSeen"], 1234);
    }

    #[test]
    fn test_deserialize_directory_payload() {
        let json = r#"{
            "location": "earth",
            "clientListener": "ws://gateway.example:9000",
            "mixnetListener": "gateway.example:1789",
            "identityKey": "def",
            "sphinxKey": "abc",
            "registeredClients": ["client1"],
            "lastSeen": 42,
            "version": "0.8.0"
        }"#;
        let presence: GatewayPresence = serde_json::from_str(json).unwrap();
        assert_eq!(presence.client_listener, "ws://gateway.example:9000");
        assert_eq!(presence.registered_clients, vec!["client1".to_string()]);
        assert_eq!(presence.last_seen, 42);
    }
}
