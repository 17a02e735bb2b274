use crate::domain::model::RegistryModel;
use crate::utils::error::{GenError, Result};
use std::collections::HashSet;

/// Parses a registry document. The whole document must be valid before
/// anything downstream runs.
pub fn decode(bytes: &[u8]) -> Result<RegistryModel> {
    let model: RegistryModel = serde_json::from_slice(bytes)?;
    check_records(&model)?;

    tracing::debug!(
        "Decoded {} services with {} rules",
        model.len(),
        model.rule_count()
    );

    Ok(model)
}

fn check_records(model: &RegistryModel) -> Result<()> {
    let mut seen = HashSet::with_capacity(model.blocked_services.len());
    for (index, service) in model.blocked_services.iter().enumerate() {
        if service.id.is_empty() {
            return Err(GenError::InvalidRecordError {
                index,
                reason: "service id is empty".to_string(),
            });
        }

        // Duplicates are kept as-is; sorting preserves first-seen order.
        if !seen.insert(service.id.as_str()) {
            tracing::warn!("Duplicate service id '{}' at index {}", service.id, index);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_document() {
        let doc = br#"{
            "blocked_services": [
                {"id": "b", "name": "B", "icon_svg": "<svg/>", "rules": ["z", "a"]},
                {"id": "a", "name": "A", "icon_svg": "", "rules": []}
            ]
        }"#;

        let model = decode(doc).unwrap();
        assert_eq!(model.len(), 2);
        assert_eq!(model.blocked_services[0].id, "b");
        assert_eq!(model.blocked_services[0].icon_svg, "<svg/>");
        assert_eq!(model.blocked_services[0].rules, vec!["z", "a"]);
        assert_eq!(model.blocked_services[1].name, "A");
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let doc = br#"{
            "blocked_services": [
                {"id": "x", "name": "X", "group": "social", "icon_svg": "", "rules": []}
            ],
            "groups": []
        }"#;

        let model = decode(doc).unwrap();
        assert_eq!(model.blocked_services[0].id, "x");
    }

    #[test]
    fn test_decode_defaults_icon_and_rules() {
        let model = decode(br#"{"blocked_services":[{"id":"x","name":"X"}]}"#).unwrap();
        assert_eq!(model.blocked_services[0].icon_svg, "");
        assert!(model.blocked_services[0].rules.is_empty());
    }

    #[test]
    fn test_decode_null_icon_and_rules_become_empty() {
        let model = decode(
            br#"{"blocked_services":[{"id":"x","name":"X","icon_svg":null,"rules":null}]}"#,
        )
        .unwrap();
        assert_eq!(model.blocked_services[0].icon_svg, "");
        assert!(model.blocked_services[0].rules.is_empty());
    }

    #[test]
    fn test_decode_null_id_is_rejected() {
        let result = decode(br#"{"blocked_services":[{"id":null,"name":"X"}]}"#);
        assert!(matches!(result, Err(GenError::DecodeError(_))));
    }

    #[test]
    fn test_decode_missing_container() {
        let result = decode(br#"{"services":[]}"#);
        assert!(matches!(result, Err(GenError::DecodeError(_))));
    }

    #[test]
    fn test_decode_missing_id() {
        let result = decode(br#"{"blocked_services":[{"name":"X","rules":[]}]}"#);
        assert!(matches!(result, Err(GenError::DecodeError(_))));
    }

    #[test]
    fn test_decode_empty_id() {
        let result = decode(
            br#"{"blocked_services":[{"id":"ok","name":"Ok"},{"id":"","name":"X"}]}"#,
        );
        match result {
            Err(GenError::InvalidRecordError { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidRecordError, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_not_json() {
        assert!(matches!(
            decode(b"<html>rate limited</html>"),
            Err(GenError::DecodeError(_))
        ));
        assert!(matches!(decode(b""), Err(GenError::DecodeError(_))));
    }

    #[test]
    fn test_decode_keeps_duplicate_ids() {
        let model = decode(
            br#"{"blocked_services":[{"id":"d","name":"First"},{"id":"d","name":"Second"}]}"#,
        )
        .unwrap();
        assert_eq!(model.len(), 2);
        assert_eq!(model.blocked_services[0].name, "First");
        assert_eq!(model.blocked_services[1].name, "Second");
    }
}
