//! Parameter mapping and its query-string / JSON-body encodings.

use serde::Serialize;
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::error::TransportError;

/// Named request parameters.
pub type Params = Map<String, Value>;

/// Serialize a request form into a parameter mapping.
///
/// `null` entries are dropped so optional parameters are omitted rather
/// than sent as null. A unit form (`()`) yields an empty mapping.
pub fn to_params<T: Serialize + ?Sized>(form: &T) -> Result<Params, TransportError> {
    match serde_json::to_value(form).map_err(TransportError::Encode)? {
        Value::Object(map) => Ok(strip_nulls(map)),
        Value::Null => Ok(Params::new()),
        other => Err(TransportError::Encode(<serde_json::Error as serde::ser::Error>::custom(
            format!("request form must serialize to a JSON object, got {}", other),
        ))),
    }
}

pub fn strip_nulls(params: Params) -> Params {
    params.into_iter().filter(|(_, v)| !v.is_null()).collect()
}

/// Flatten parameters into query pairs. Strings go in verbatim, every other
/// value is JSON-encoded first (`true`, `5`, `[1,2]`).
pub fn encode_query(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.clone(), query_value(v)))
        .collect()
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// URL-encode query pairs (`application/x-www-form-urlencoded`).
pub fn query_string(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Parse a query string (leading `?` optional) back into pairs.
pub fn decode_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

/// Encode parameters as a JSON object body.
pub fn encode_body(params: &Params) -> Result<String, TransportError> {
    serde_json::to_string(params).map_err(TransportError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Form {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<i64>,
        page: Option<i64>,
    }

    #[test]
    fn test_to_params_drops_none_and_null() {
        let form = Form {
            name: "anime".to_string(),
            limit: None,
            page: None,
        };
        let params = to_params(&form).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params["name"], "anime");
    }

    #[test]
    fn test_to_params_unit_is_empty() {
        assert!(to_params(&()).unwrap().is_empty());
    }

    #[test]
    fn test_to_params_rejects_non_object() {
        let err = to_params(&42).unwrap_err();
        assert!(matches!(err, TransportError::Encode(_)));
    }

    #[test]
    fn test_encode_query_json_encodes_non_strings() {
        let params = json!({
            "q": "rust",
            "saved_only": true,
            "limit": 5,
            "discussion_languages": [1, 2],
        });
        let pairs: BTreeMap<String, String> = encode_query(params.as_object().unwrap())
            .into_iter()
            .collect();
        assert_eq!(pairs["q"], "rust");
        assert_eq!(pairs["saved_only"], "true");
        assert_eq!(pairs["limit"], "5");
        assert_eq!(pairs["discussion_languages"], "[1,2]");
    }

    #[test]
    fn test_query_round_trip_for_flat_strings() {
        let params = json!({
            "name": "anime",
            "q": "a&b=c d",
            "sort": "TopDay",
            "unicode": "café ☕",
        });
        let params = params.as_object().unwrap();
        let encoded = query_string(&encode_query(params));
        let decoded: Params = decode_query(&encoded)
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        assert_eq!(&decoded, params);
    }

    #[test]
    fn test_decode_query_accepts_leading_question_mark() {
        let pairs = decode_query("?name=anime&auth=abc123");
        assert_eq!(
            pairs,
            vec![
                ("name".to_string(), "anime".to_string()),
                ("auth".to_string(), "abc123".to_string()),
            ]
        );
    }

    #[test]
    fn test_encode_body_is_json_object() {
        let params = json!({"post_id": 7, "score": 1});
        let body = encode_body(params.as_object().unwrap()).unwrap();
        let back: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(back, params);
    }
}
