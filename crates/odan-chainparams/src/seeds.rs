use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, ParamsError};

/// Peer bootstrap data. Injected at construction rather than compiled in;
/// each network only bakes its DNS seed hostnames.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedList {
    #[serde(default)]
    pub dns_seeds: Vec<String>,
    #[serde(default)]
    pub fixed_seeds: Vec<SocketAddr>,
}

impl SeedList {
    pub fn dns(hosts: &[&str]) -> Self {
        Self {
            dns_seeds: hosts.iter().map(|h| h.to_string()).collect(),
            fixed_seeds: Vec::new(),
        }
    }

    pub fn from_json(s: &str) -> Result<Self, ParamsError> {
        serde_json::from_str(s)
            .map_err(|e| ParamsError::new(ErrorCode::ParamsErrSeeds, format!("seed list: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_seed_list() {
        let s = SeedList::from_json(
            r#"{"dns_seeds":["seed.example.org"],"fixed_seeds":["10.0.0.1:13691","[::1]:13691"]}"#,
        )
        .unwrap();
        assert_eq!(s.dns_seeds, vec!["seed.example.org".to_string()]);
        assert_eq!(s.fixed_seeds.len(), 2);
        assert_eq!(s.fixed_seeds[0].port(), 13691);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let s = SeedList::from_json("{}").unwrap();
        assert_eq!(s, SeedList::default());
    }

    #[test]
    fn bad_address_rejected() {
        let err = SeedList::from_json(r#"{"fixed_seeds":["nope"]}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::ParamsErrSeeds);
    }
}
