//! Reshapes `tag_details` from `theme -> [tag entry]` into an ordered list of
//! `{theme, tags: [{name, metrics}]}` objects.

use crate::domain::model::{Record, RecordOutcome, TagObject, ThemeGroup};
use crate::utils::error::{RestructureError, Result};
use serde_json::{Map, Value};

pub const TAG_DETAILS_KEY: &str = "tag_details";
pub const TAG_NAME_KEY: &str = "tag_name";

/// Converts one `tag_details` mapping. Theme order and metric key order follow
/// the input mapping.
pub fn restructure_tag_details(tag_details: &Map<String, Value>) -> Result<Vec<ThemeGroup>> {
    tag_details
        .iter()
        .map(|(theme, entries)| -> Result<ThemeGroup> {
            let entries = entries.as_array().ok_or_else(|| {
                RestructureError::schema(
                    format!("{}.{}", TAG_DETAILS_KEY, theme),
                    format!("expected an array of tags, found {}", json_type(entries)),
                )
            })?;

            let tags = entries
                .iter()
                .enumerate()
                .map(|(index, entry)| restructure_tag(theme, index, entry))
                .collect::<Result<Vec<_>>>()?;

            Ok(ThemeGroup {
                theme: theme.clone(),
                tags,
            })
        })
        .collect()
}

fn restructure_tag(theme: &str, index: usize, entry: &Value) -> Result<TagObject> {
    let location = || format!("{}.{}[{}]", TAG_DETAILS_KEY, theme, index);

    let fields = entry.as_object().ok_or_else(|| {
        RestructureError::schema(
            location(),
            format!("expected a tag object, found {}", json_type(entry)),
        )
    })?;

    let name = fields
        .get(TAG_NAME_KEY)
        .cloned()
        .ok_or_else(|| RestructureError::MissingTagName {
            theme: theme.to_string(),
            index,
        })?;

    let metrics = fields
        .iter()
        .filter(|(key, _)| key.as_str() != TAG_NAME_KEY)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(TagObject { name, metrics })
}

/// Restructures a single comment record. Anything that is not an object, or
/// an object without `tag_details`, is returned as-is.
pub fn restructure_record(record: Record) -> Result<(Record, RecordOutcome)> {
    let mut fields = match record.data {
        Value::Object(fields) => fields,
        other => return Ok((Record::new(other), RecordOutcome::PassedThrough)),
    };

    let groups = match fields.get(TAG_DETAILS_KEY) {
        Some(Value::Object(details)) => restructure_tag_details(details)?,
        Some(other) => {
            return Err(RestructureError::schema(
                TAG_DETAILS_KEY,
                format!("expected an object keyed by theme, found {}", json_type(other)),
            ))
        }
        None => {
            return Ok((
                Record::new(Value::Object(fields)),
                RecordOutcome::PassedThrough,
            ))
        }
    };

    let outcome = RecordOutcome::Restructured {
        themes: groups.len(),
        tags: groups.iter().map(|group| group.tags.len()).sum(),
    };

    // 以 preserve_order 覆寫既有 key 時位置不變
    fields.insert(TAG_DETAILS_KEY.to_string(), serde_json::to_value(groups)?);

    Ok((Record::new(Value::Object(fields)), outcome))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_restructures_documented_example() {
        let record = Record::new(json!({
            "tag_details": {
                "ux": [{
                    "tag_name": "#HitRegistration",
                    "sentiment_score": 0.4,
                    "sentiment_label": "Mixed",
                    "keywords": ["命中注册"]
                }]
            }
        }));

        let (result, outcome) = restructure_record(record).unwrap();

        assert_eq!(
            result.data,
            json!({
                "tag_details": [{
                    "theme": "ux",
                    "tags": [{
                        "name": "#HitRegistration",
                        "metrics": {
                            "sentiment_score": 0.4,
                            "sentiment_label": "Mixed",
                            "keywords": ["命中注册"]
                        }
                    }]
                }]
            })
        );
        assert_eq!(outcome, RecordOutcome::Restructured { themes: 1, tags: 1 });
    }

    #[test]
    fn test_theme_and_metric_order_follow_input() {
        let details = as_map(json!({
            "story": [{"tag_name": "#Plot", "z_last": 1, "a_first": 2}],
            "ux": [],
            "risk": [{"tag_name": "#Cheating"}, {"tag_name": "#Toxicity", "weight": 3}]
        }));

        let groups = restructure_tag_details(&details).unwrap();

        let themes: Vec<&str> = groups.iter().map(|g| g.theme.as_str()).collect();
        assert_eq!(themes, vec!["story", "ux", "risk"]);

        let metric_keys: Vec<&str> = groups[0].tags[0].metrics.keys().map(String::as_str).collect();
        assert_eq!(metric_keys, vec!["z_last", "a_first"]);

        assert!(groups[1].tags.is_empty());

        let names: Vec<&Value> = groups[2].tags.iter().map(|t| &t.name).collect();
        assert_eq!(names, vec![&json!("#Cheating"), &json!("#Toxicity")]);
        assert!(groups[2].tags[0].metrics.is_empty());
    }

    #[test]
    fn test_metrics_keep_unknown_keys_and_nested_values() {
        let details = as_map(json!({
            "gameplay": [{
                "tag_name": "#Balance",
                "extra": {"nested": [1, 2, {"deep": null}]},
                "flag": true
            }]
        }));

        let groups = restructure_tag_details(&details).unwrap();
        let tag = &groups[0].tags[0];

        assert_eq!(tag.name, json!("#Balance"));
        assert!(!tag.metrics.contains_key("tag_name"));
        assert_eq!(tag.metrics.len(), 2);
        assert_eq!(tag.metrics["extra"], json!({"nested": [1, 2, {"deep": null}]}));
        assert_eq!(tag.metrics["flag"], json!(true));
    }

    #[test]
    fn test_empty_mapping_yields_empty_list() {
        let groups = restructure_tag_details(&Map::new()).unwrap();
        assert!(groups.is_empty());

        let (result, outcome) =
            restructure_record(Record::new(json!({"id": 7, "tag_details": {}}))).unwrap();
        assert_eq!(result.data, json!({"id": 7, "tag_details": []}));
        assert_eq!(outcome, RecordOutcome::Restructured { themes: 0, tags: 0 });
    }

    #[test]
    fn test_record_without_tag_details_passes_through() {
        let original = json!({"id": 1, "content": "好玩", "tags": ["a"]});
        let (result, outcome) = restructure_record(Record::new(original.clone())).unwrap();
        assert_eq!(result.data, original);
        assert_eq!(outcome, RecordOutcome::PassedThrough);

        let (result, outcome) = restructure_record(Record::new(json!("not an object"))).unwrap();
        assert_eq!(result.data, json!("not an object"));
        assert_eq!(outcome, RecordOutcome::PassedThrough);
    }

    #[test]
    fn test_other_record_fields_keep_their_position() {
        let record = Record::new(json!({
            "id": 1,
            "tag_details": {"ux": [{"tag_name": "#Lag"}]},
            "content": "卡顿"
        }));

        let (result, _) = restructure_record(record).unwrap();
        let keys: Vec<&str> = result
            .data
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["id", "tag_details", "content"]);
    }

    #[test]
    fn test_missing_tag_name_is_reported_with_location() {
        let details = as_map(json!({
            "ux": [{"tag_name": "#Ok"}, {"sentiment_score": 0.1}]
        }));

        match restructure_tag_details(&details) {
            Err(RestructureError::MissingTagName { theme, index }) => {
                assert_eq!(theme, "ux");
                assert_eq!(index, 1);
            }
            other => panic!("expected MissingTagName, got {:?}", other),
        }
    }

    #[test]
    fn test_schema_violations() {
        let not_array = as_map(json!({"ux": {"tag_name": "#Wrong"}}));
        assert!(matches!(
            restructure_tag_details(&not_array),
            Err(RestructureError::SchemaViolation { .. })
        ));

        let not_object = as_map(json!({"ux": ["#Wrong"]}));
        assert!(matches!(
            restructure_tag_details(&not_object),
            Err(RestructureError::SchemaViolation { .. })
        ));
    }

    #[test]
    fn test_non_string_tag_name_is_carried_through() {
        let record = Record::new(json!({
            "tag_details": {"ux": [
                {"tag_name": 42, "s": 1},
                {"tag_name": null},
                {"tag_name": true, "keywords": ["a"]}
            ]}
        }));

        let (result, outcome) = restructure_record(record).unwrap();

        assert_eq!(
            result.data,
            json!({
                "tag_details": [{
                    "theme": "ux",
                    "tags": [
                        {"name": 42, "metrics": {"s": 1}},
                        {"name": null, "metrics": {}},
                        {"name": true, "metrics": {"keywords": ["a"]}}
                    ]
                }]
            })
        );
        assert_eq!(outcome, RecordOutcome::Restructured { themes: 1, tags: 3 });
    }

    #[test]
    fn test_numbers_survive_read_and_write_unchanged() {
        let input = r##"[{"id":1,"tag_details":{"ux":[{"tag_name":"#A","big":123456789012345678901234567890,"precise":0.1000000000000000055511151231257827,"tiny":-2.5e-300,"score":0.4}]}}]"##;
        let expected = r##"[{"id":1,"tag_details":[{"theme":"ux","tags":[{"name":"#A","metrics":{"big":123456789012345678901234567890,"precise":0.1000000000000000055511151231257827,"tiny":-2.5e-300,"score":0.4}}]}]}]"##;

        let records: Vec<Record> = serde_json::from_str(input).unwrap();
        let processed = records
            .into_iter()
            .map(|record| restructure_record(record).map(|(record, _)| record))
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(serde_json::to_string(&processed).unwrap(), expected);
    }

    #[test]
    fn test_restructured_record_is_rejected_on_second_pass() {
        let record = Record::new(json!({"tag_details": {"ux": [{"tag_name": "#Lag"}]}}));
        let (once, _) = restructure_record(record).unwrap();

        let err = restructure_record(once).unwrap_err();
        match err {
            RestructureError::SchemaViolation { location, .. } => {
                assert_eq!(location, "tag_details")
            }
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }
}
