pub mod xml_utils;

pub use xml_utils::{flatten_xml_response, normalize_field_name, scrub_transcript};
