use wb_population::decode::{decode, normalize};
use wb_population::{DecodeError, Provider};

fn envelope(entries: &str) -> String {
    format!(
        r#"<wb:data page="1" pages="1" per_page="50" total="1" xmlns:wb="http://www.worldbank.org">{entries}</wb:data>"#
    )
}

#[test]
fn provider_renders_and_serializes_as_its_name() {
    assert_eq!(Provider::WorldBank.to_string(), "The World Bank");
    assert_eq!(
        serde_json::to_string(&Provider::WorldBank).unwrap(),
        r#""The World Bank""#
    );
    let p: Provider = serde_json::from_str(r#""The World Bank""#).unwrap();
    assert_eq!(p, Provider::WorldBank);
}

#[test]
fn missing_fields_decode_to_empty_values() {
    let xml = envelope("<wb:data><wb:date>1999</wb:date></wb:data>");
    let env = decode(xml.as_bytes()).unwrap();
    let e = &env.entries[0];
    assert_eq!(e.date, 1999);
    assert_eq!(e.value, 0);
    assert_eq!(e.indicator.id, "");
    assert_eq!(e.country.name, "");
    assert_eq!(e.countryiso3code, "");
    assert_eq!(e.decimal, 0);
}

#[test]
fn empty_value_element_decodes_to_zero() {
    let xml = envelope(
        r#"<wb:data><wb:date>2023</wb:date><wb:value /><wb:obs_status>NA</wb:obs_status></wb:data>"#,
    );
    let env = decode(xml.as_bytes()).unwrap();
    assert_eq!(env.entries[0].value, 0);
    assert_eq!(env.entries[0].obs_status, "NA");
}

#[test]
fn non_numeric_year_fails_the_whole_body() {
    let xml = envelope(
        "<wb:data><wb:date>2010</wb:date><wb:value>1</wb:value></wb:data>\
         <wb:data><wb:date>twenty-eleven</wb:date><wb:value>2</wb:value></wb:data>",
    );
    let err = decode(xml.as_bytes()).unwrap_err();
    assert!(matches!(err, DecodeError::Xml(_)), "{err:?}");
}

#[test]
fn envelope_without_entries_decodes_to_empty_history() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<wb:data page="0" pages="0" per_page="1000" total="0" xmlns:wb="http://www.worldbank.org"/>"#;
    let env = decode(xml.as_bytes()).unwrap();
    assert_eq!(env.total, 0);
    assert!(env.entries.is_empty());
    assert!(normalize(env).unwrap().is_empty());
}

#[test]
fn envelope_missing_its_reported_entries_is_rejected() {
    // `total="1"` but no `<wb:data>` child.
    let err = decode(envelope("").as_bytes()).unwrap_err();
    assert!(matches!(err, DecodeError::MissingEntries { total: 1 }), "{err:?}");
}

#[test]
fn namespace_prefix_does_not_matter() {
    let xml = r#"<x:data total="1" xmlns:x="http://www.worldbank.org"><x:data><x:date>2010</x:date><x:value>5</x:value></x:data></x:data>"#;
    let env = decode(xml.as_bytes()).unwrap();
    assert_eq!(env.entries.len(), 1);
    assert_eq!((env.entries[0].date, env.entries[0].value), (2010, 5));
}

#[test]
fn leading_byte_order_mark_is_accepted() {
    let mut body = b"\xEF\xBB\xBF".to_vec();
    body.extend_from_slice(envelope("<wb:data><wb:date>2010</wb:date></wb:data>").as_bytes());
    assert_eq!(decode(&body).unwrap().entries.len(), 1);
}

#[test]
fn content_after_the_root_element_is_rejected() {
    let one = "<wb:data><wb:date>2010</wb:date><wb:value>1</wb:value></wb:data>";
    let trailing = [
        format!("{}<oops", envelope(one)),
        format!("{}<wb:data total=\"0\"/>", envelope(one)),
        format!("{}garbage", envelope(one)),
    ];
    for body in &trailing {
        assert!(decode(body.as_bytes()).is_err(), "{body}");
    }
}

#[test]
fn unexpected_root_element_is_rejected() {
    let err = decode(b"<html><body>Service Unavailable</body></html>").unwrap_err();
    assert!(matches!(err, DecodeError::Malformed(_)), "{err:?}");
}

#[test]
fn empty_body_is_rejected() {
    assert!(matches!(decode(b""), Err(DecodeError::Malformed(_))));
}

#[test]
fn api_error_payload_is_surfaced() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<wb:error xmlns:wb="http://www.worldbank.org">
  <wb:message id="120" key="Invalid value">The provided parameter value is not valid</wb:message>
</wb:error>"#;
    match decode(xml.as_bytes()).unwrap_err() {
        DecodeError::Api { id, key, message } => {
            assert_eq!(id, "120");
            assert_eq!(key, "Invalid value");
            assert_eq!(message, "The provided parameter value is not valid");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}
