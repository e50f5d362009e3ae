//! XML response flattening and transcript scrubbing.

use std::collections::HashMap;

use common_utils::CustomResult;
use domain_types::errors::ConnectorError;
use error_stack::report;
use once_cell::sync::Lazy;
use quick_xml::{events::Event, Reader};
use regex::Regex;

const FILTERED: &str = "${1}[FILTERED]${2}";

static SCRUB_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["merchantKey", "number", "cvvNumber"]
        .iter()
        .filter_map(|element| {
            Regex::new(&format!("(?i)(<{element}>)[^<]*(</{element}>)")).ok()
        })
        .collect()
});

/// Redacts the merchant secret, card number and verification code elements
/// of a request/response transcript, keeping the surrounding tags. Matching
/// is case-insensitive.
pub fn scrub_transcript(transcript: &str) -> String {
    SCRUB_PATTERNS.iter().fold(transcript.to_string(), |acc, pattern| {
        pattern.replace_all(&acc, FILTERED).into_owned()
    })
}

/// Reduces a response document to a flat `normalized name -> text` mapping.
///
/// Walks the root's children recursively: an element with child elements
/// contributes nothing under its own name, only its leaves are recorded.
/// Sibling order is document order and repeated normalized names resolve
/// last-write-wins, so a later leaf overwrites an earlier one from any
/// branch.
pub fn flatten_xml_response(body: &[u8]) -> CustomResult<HashMap<String, String>, ConnectorError> {
    let document = std::str::from_utf8(body)
        .map_err(|_| report!(ConnectorError::ResponseDeserializationFailed))?;
    let mut reader = Reader::from_str(document.trim());
    let mut fields = HashMap::new();
    let mut inside_root = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if inside_root {
                    let name = start.name().as_ref().to_vec();
                    fields.extend(flatten_element(&mut reader, &name)?);
                } else {
                    inside_root = true;
                }
            }
            Ok(Event::Empty(empty)) => {
                if inside_root {
                    let name = String::from_utf8_lossy(empty.name().as_ref()).into_owned();
                    fields.insert(normalize_field_name(&name), String::new());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(_) => return Err(report!(ConnectorError::ResponseDeserializationFailed)),
        }
    }
    // a body without a root element is not a response document at all
    if !inside_root {
        return Err(report!(ConnectorError::ResponseDeserializationFailed));
    }
    Ok(fields)
}

/// Flattens one element subtree into a fresh mapping, merged by the caller.
/// Returns the single `name -> text` entry for a leaf, or the merged leaf
/// entries of every descendant otherwise.
fn flatten_element(
    reader: &mut Reader<&str>,
    name: &[u8],
) -> CustomResult<HashMap<String, String>, ConnectorError> {
    let mut children = HashMap::new();
    let mut text = String::new();
    let mut has_child_elements = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                has_child_elements = true;
                let child_name = start.name().as_ref().to_vec();
                children.extend(flatten_element(reader, &child_name)?);
            }
            Ok(Event::Empty(empty)) => {
                has_child_elements = true;
                let child_name = String::from_utf8_lossy(empty.name().as_ref()).into_owned();
                children.insert(normalize_field_name(&child_name), String::new());
            }
            Ok(Event::Text(value)) => {
                let value = value
                    .unescape()
                    .map_err(|_| report!(ConnectorError::ResponseDeserializationFailed))?;
                text.push_str(value.trim());
            }
            Ok(Event::CData(value)) => {
                text.push_str(&String::from_utf8_lossy(&value.into_inner()));
            }
            Ok(Event::End(end)) if end.name().as_ref() == name => break,
            Ok(Event::Eof) => {
                return Err(report!(ConnectorError::ResponseDeserializationFailed))
            }
            Ok(_) => {}
            Err(_) => return Err(report!(ConnectorError::ResponseDeserializationFailed)),
        }
    }
    if has_child_elements {
        Ok(children)
    } else {
        let name = String::from_utf8_lossy(name).into_owned();
        Ok(HashMap::from([(normalize_field_name(&name), text)]))
    }
}

/// Lower-cases and underscore-separates an element name: `orderID` becomes
/// `order_id`, `responseMessage` becomes `response_message`, hyphens become
/// underscores.
pub fn normalize_field_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut normalized = String::with_capacity(name.len() + 4);
    for (index, current) in chars.iter().enumerate() {
        if matches!(current, '-' | '.' | ':') {
            normalized.push('_');
            continue;
        }
        if current.is_uppercase() {
            let prev = index.checked_sub(1).and_then(|i| chars.get(i));
            let next = chars.get(index + 1);
            let at_boundary = match prev {
                None => false,
                Some(p) => {
                    p.is_lowercase()
                        || p.is_ascii_digit()
                        || (p.is_uppercase() && next.is_some_and(|n| n.is_lowercase()))
                }
            };
            if at_boundary && !normalized.ends_with('_') {
                normalized.push('_');
            }
            normalized.extend(current.to_lowercase());
        } else {
            normalized.push(*current);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_element_names() {
        assert_eq!(normalize_field_name("orderID"), "order_id");
        assert_eq!(normalize_field_name("responseMessage"), "response_message");
        assert_eq!(normalize_field_name("transactionID"), "transaction_id");
        assert_eq!(normalize_field_name("errorMsg"), "error_msg");
        assert_eq!(normalize_field_name("avsResponseCode"), "avs_response_code");
        assert_eq!(normalize_field_name("save-on-file"), "save_on_file");
        assert_eq!(normalize_field_name("token"), "token");
    }

    #[test]
    fn flattens_only_leaves() {
        let body = br#"<?xml version="1.0" encoding="UTF-8"?>
            <transaction-response>
                <authCode>555555</authCode>
                <orderID>ABC123</orderID>
                <transactionID>999888</transactionID>
                <responseCode>0</responseCode>
                <responseMessage>AUTHORIZED</responseMessage>
                <processor>
                    <code>A</code>
                    <message>APPROVED</message>
                </processor>
            </transaction-response>"#;
        let fields = flatten_xml_response(body).expect("flatten");
        assert_eq!(fields.get("order_id").map(String::as_str), Some("ABC123"));
        assert_eq!(fields.get("response_code").map(String::as_str), Some("0"));
        assert_eq!(fields.get("message").map(String::as_str), Some("APPROVED"));
        // parent elements contribute nothing under their own name
        assert!(!fields.contains_key("processor"));
        assert!(!fields.contains_key("transaction_response"));
    }

    #[test]
    fn duplicate_leaf_names_resolve_last_write_wins() {
        let body = br#"<root>
            <first><code>1</code></first>
            <second><code>2</code></second>
        </root>"#;
        let fields = flatten_xml_response(body).expect("flatten");
        assert_eq!(fields.get("code").map(String::as_str), Some("2"));
    }

    #[test]
    fn empty_elements_flatten_to_empty_text() {
        let body = br#"<root><errorMessage></errorMessage><avsResponseCode/></root>"#;
        let fields = flatten_xml_response(body).expect("flatten");
        assert_eq!(fields.get("error_message").map(String::as_str), Some(""));
        assert_eq!(fields.get("avs_response_code").map(String::as_str), Some(""));
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(flatten_xml_response(b"<root><unclosed>").is_err());
    }

    #[test]
    fn scrubs_sensitive_elements_case_insensitively() {
        let transcript = "<merchantKey>secret123</merchantKey>\
            <Number>4111111111111111</Number>\
            <CvvNumber>444</CvvNumber>";
        let scrubbed = scrub_transcript(transcript);
        assert_eq!(
            scrubbed,
            "<merchantKey>[FILTERED]</merchantKey>\
             <Number>[FILTERED]</Number>\
             <CvvNumber>[FILTERED]</CvvNumber>"
        );
    }

    #[test]
    fn scrubbing_preserves_everything_else() {
        let transcript = "<verification><merchantId>merchant1</merchantId>\
            <merchantKey>topsecret</merchantKey></verification>";
        let scrubbed = scrub_transcript(transcript);
        assert!(scrubbed.contains("<merchantId>merchant1</merchantId>"));
        assert!(!scrubbed.contains("topsecret"));
    }
}
