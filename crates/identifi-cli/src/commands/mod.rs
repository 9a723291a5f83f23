pub mod card;
pub mod identicon;
pub mod init;
pub mod inspect;
pub mod search;

use anyhow::Context;
use std::path::Path;

use identifi_core::IdentifiConfig;
use identifi_identity::Identity;

/// Read one raw identity record from a JSON file and normalize it.
pub fn load_identity(path: &Path, config: &IdentifiConfig) -> anyhow::Result<Identity> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let identity = Identity::deserialize_with(&text, &config.unique_types())
        .with_context(|| format!("parsing identity record {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded identity record");
    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_identity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alice.json");
        std::fs::write(
            &path,
            r#"{"attrs": [{"name": "email", "val": "alice@x.org", "conf": 2, "ref": 0}]}"#,
        )
        .unwrap();
        let identity = load_identity(&path, &IdentifiConfig::default()).unwrap();
        assert_eq!(identity.verified("email"), Some("alice@x.org"));
    }

    #[test]
    fn test_load_identity_uses_configured_unique_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("al.json");
        std::fs::write(
            &path,
            r#"{"attrs": [{"name": "email", "val": "al@x.org"}, {"name": "nickname", "val": "al"}]}"#,
        )
        .unwrap();
        let mut config = IdentifiConfig::default();
        config.attributes.unique_types = vec!["nickname".into()];
        let identity = load_identity(&path, &config).unwrap();
        assert_eq!(identity.canonical_id().as_deref(), Some("nickname:al"));
    }

    #[test]
    fn test_load_identity_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_identity(&dir.path().join("none.json"), &IdentifiConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("reading"));
    }
}
