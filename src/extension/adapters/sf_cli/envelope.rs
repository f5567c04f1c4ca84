//! Decoding of the `sf --json` output envelope.

use crate::extension::{
    domain::{RecordFields, RecordId},
    ports::{GatewayError, GatewayResult, QueryResult},
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Envelope {
    status: i64,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl Envelope {
    fn parse(stdout: &[u8]) -> GatewayResult<Self> {
        serde_json::from_slice(stdout).map_err(|err| {
            GatewayError::MalformedResponse(format!("unreadable CLI output: {err}"))
        })
    }

    fn failure_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("CLI exited with status {}", self.status))
    }

    fn into_result(self) -> GatewayResult<Value> {
        self.result
            .ok_or_else(|| GatewayError::MalformedResponse("CLI output has no result".to_owned()))
    }
}

#[derive(Debug, Deserialize)]
struct CreateResult {
    #[serde(default)]
    id: Option<String>,
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    errors: Vec<Value>,
}

const fn default_success() -> bool {
    true
}

/// Decodes `sf data query --json` output.
///
/// # Errors
///
/// Returns [`GatewayError::Remote`] for a non-zero envelope status and
/// [`GatewayError::MalformedResponse`] when the output cannot be decoded.
pub fn decode_query_output(stdout: &[u8]) -> GatewayResult<QueryResult> {
    let envelope = Envelope::parse(stdout)?;
    if envelope.status != 0 {
        return Err(GatewayError::Remote(envelope.failure_message()));
    }
    serde_json::from_value(envelope.into_result()?)
        .map_err(|err| GatewayError::MalformedResponse(err.to_string()))
}

/// Decodes `sf data create record --json` output.
///
/// A failure status whose `name` is a store API error code (`DUPLICATE_VALUE`,
/// `FIELD_INTEGRITY_EXCEPTION`, ...) means the store refused the record. Any
/// other failure name (`NoOrgFound`, flag errors) comes from the CLI itself.
///
/// # Errors
///
/// Returns [`GatewayError::Rejected`] when the store refuses the record,
/// [`GatewayError::Remote`] for CLI failures, and
/// [`GatewayError::MalformedResponse`] when the output cannot be decoded.
pub fn decode_create_output(stdout: &[u8]) -> GatewayResult<RecordId> {
    let envelope = Envelope::parse(stdout)?;
    if envelope.status != 0 {
        let message = envelope.failure_message();
        return Err(match envelope.name {
            Some(code) if is_api_error_code(&code) => GatewayError::rejected(Some(code), message),
            _ => GatewayError::Remote(message),
        });
    }

    let created: CreateResult = serde_json::from_value(envelope.into_result()?)
        .map_err(|err| GatewayError::MalformedResponse(err.to_string()))?;
    if !created.success {
        let detail = created
            .errors
            .iter()
            .map(describe_save_error)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(GatewayError::rejected(None, detail));
    }

    let raw_id = created
        .id
        .ok_or_else(|| GatewayError::MalformedResponse("create result has no id".to_owned()))?;
    RecordId::new(raw_id).map_err(|err| GatewayError::MalformedResponse(err.to_string()))
}

/// Renders fields as the `--values` argument (`Field='value' ...`).
///
/// The CLI splits on whitespace outside quotes and does not unescape, so a
/// value is wrapped in single quotes, or in double quotes when it contains a
/// single quote.
///
/// # Errors
///
/// Returns [`GatewayError::Unencodable`] when a value holds both quote
/// characters or a control character.
pub fn values_argument(fields: &RecordFields) -> GatewayResult<String> {
    let pairs = fields
        .iter()
        .map(|(field, value)| quote_value(value).map(|quoted| format!("{field}={quoted}")))
        .collect::<GatewayResult<Vec<_>>>()?;
    Ok(pairs.join(" "))
}

fn quote_value(value: &str) -> GatewayResult<String> {
    if value.chars().any(char::is_control) {
        return Err(GatewayError::Unencodable(format!(
            "value {value:?} contains a control character"
        )));
    }
    match (value.contains('\''), value.contains('"')) {
        (false, _) => Ok(format!("'{value}'")),
        (true, false) => Ok(format!("\"{value}\"")),
        (true, true) => Err(GatewayError::Unencodable(format!(
            "value {value:?} contains both quote characters"
        ))),
    }
}

fn is_api_error_code(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn describe_save_error(error: &Value) -> String {
    error
        .get("message")
        .and_then(Value::as_str)
        .map_or_else(|| error.to_string(), ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::{decode_create_output, decode_query_output, values_argument};
    use crate::extension::{domain::RecordFields, ports::GatewayError};
    use rstest::rstest;

    #[test]
    fn query_envelope_decodes_records() {
        let stdout = br#"{
            "status": 0,
            "result": {
                "totalSize": 1,
                "done": true,
                "records": [
                    {"attributes": {"type": "ApexClass"}, "Id": "01p5e000000AbCdAAK"}
                ]
            }
        }"#;

        let result = decode_query_output(stdout).expect("decodes");

        assert_eq!(result.total_size(), 1);
        let id = result
            .records()
            .first()
            .and_then(|row| row.get("Id"))
            .and_then(|value| value.as_str());
        assert_eq!(id, Some("01p5e000000AbCdAAK"));
    }

    #[test]
    fn query_failure_status_is_remote_error() {
        let stdout = br#"{"status": 1, "name": "MALFORMED_QUERY", "message": "unexpected token"}"#;
        let result = decode_query_output(stdout);
        assert!(matches!(result, Err(GatewayError::Remote(message)) if message == "unexpected token"));
    }

    #[test]
    fn create_envelope_returns_id() {
        let stdout = br#"{"status": 0, "result": {"id": "0ZE5e000000AbCdGAK", "success": true, "errors": []}}"#;
        let id = decode_create_output(stdout).expect("decodes");
        assert_eq!(id.as_str(), "0ZE5e000000AbCdGAK");
    }

    #[rstest]
    #[case("DUPLICATE_DEVELOPER_NAME")]
    #[case("DUPLICATE_VALUE")]
    #[case("FIELD_INTEGRITY_EXCEPTION")]
    #[case("REQUIRED_FIELD_MISSING")]
    fn store_error_code_is_rejection(#[case] code: &str) {
        let stdout = format!(r#"{{"status": 1, "name": "{code}", "message": "refused"}}"#);
        let result = decode_create_output(stdout.as_bytes());
        assert!(matches!(
            result,
            Err(GatewayError::Rejected { error_code: Some(reported), message })
                if reported == code && message == "refused"
        ));
    }

    #[rstest]
    #[case(r#"{"status": 1, "name": "NoOrgFound", "message": "No authorization information found for bogus@example.com."}"#)]
    #[case(r#"{"status": 2, "name": "NonExistentFlagsError", "message": "Nonexistent flag: --bogus"}"#)]
    #[case(r#"{"status": 1, "message": "No authorization information found for bogus@example.com."}"#)]
    fn cli_failure_is_remote_error(#[case] stdout: &str) {
        let result = decode_create_output(stdout.as_bytes());
        assert!(matches!(result, Err(GatewayError::Remote(_))));
    }

    #[test]
    fn unsuccessful_save_is_rejection() {
        let stdout = br#"{"status": 0, "result": {"success": false, "errors": [{"message": "bad field"}]}}"#;
        let result = decode_create_output(stdout);
        assert!(matches!(
            result,
            Err(GatewayError::Rejected { message, .. }) if message == "bad field"
        ));
    }

    #[test]
    fn non_json_output_is_malformed() {
        let result = decode_query_output(b"command not found");
        assert!(matches!(result, Err(GatewayError::MalformedResponse(_))));
    }

    #[test]
    fn values_are_quoted_in_order() {
        let fields = RecordFields::new()
            .with("DeveloperName", "MyGateway")
            .with("MasterLabel", "My 'Gateway'")
            .with("ExtensionPointName", r#"Say "hi""#);
        assert_eq!(
            values_argument(&fields).expect("encodable"),
            r#"DeveloperName='MyGateway' MasterLabel="My 'Gateway'" ExtensionPointName='Say "hi"'"#
        );
    }

    #[rstest]
    #[case(r#"it's "quoted""#)]
    #[case("line\nbreak")]
    #[case("tab\there")]
    fn unencodable_values_are_refused(#[case] value: &str) {
        let fields = RecordFields::new().with("MasterLabel", value);
        assert!(matches!(
            values_argument(&fields),
            Err(GatewayError::Unencodable(_))
        ));
    }
}
