//! End-to-end `generate` behavior through the public API.

use mail_tracker::prelude::*;
use std::sync::Arc;

struct FixedIdSource;

impl TrackingIdSource for FixedIdSource {
    fn next_id(&self) -> TrackingId {
        TrackingId::new("trk_1700000000000_fixedfixedid")
    }
}

fn config() -> TrackingConfig {
    TrackingConfig::new("https://open.test/t", "https://click.test/t")
}

fn transform() -> TrackingTransform {
    TrackingTransform::with_id_source(config(), Arc::new(FixedIdSource))
}

#[test]
fn tracked_html_always_starts_with_hidden_pixel() {
    let t = transform();

    for body in ["", "plain text", "with a link http://a.com"] {
        let result = t.generate(&TrackingRequest::new(body, "u@e.com"));

        assert!(result.tracked_html.starts_with("<img src=\"https://open.test/t?id="));
        assert!(result.tracked_html.contains("style=\"display:none;\""));
    }
}

#[test]
fn empty_body_yields_pixel_only_result() {
    let result = transform().generate(&TrackingRequest::new("", "u@e.com"));

    assert_eq!(result.link_count, 0);
    assert!(result.tracked_html.ends_with(r#"alt="" />"#));
    assert!(!result.tracked_html.contains("<a href="));
}

#[test]
fn distinct_calls_produce_distinct_tracking_ids() {
    // Real id source here, not the fixed one.
    let t = TrackingTransform::new(config());
    let request = TrackingRequest::new("same body", "u@e.com");

    let first = t.generate(&request);
    let second = t.generate(&request);

    assert_ne!(first.tracking_id, second.tracking_id);
}

#[test]
fn multi_url_body_counts_and_wraps_each_occurrence() {
    let result = transform().generate(&TrackingRequest::new(
        "Visit http://a.com and http://b.com/page?x=1, thanks",
        "u@e.com",
    ));

    assert_eq!(result.link_count, 2);
    assert_eq!(result.tracked_html.matches("<a href=").count(), 2);
    // The comma after the second URL stays outside the anchor.
    assert!(result.tracked_html.contains("</a>, thanks"));
}

#[test]
fn signature_is_appended_verbatim_and_never_wrapped() {
    let signature = r#"<p>Jane Doe<br>https://corp.example/about</p>"#;

    let mut request = TrackingRequest::new("body with http://a.com inside", "u@e.com");
    request.signature_html = Some(signature.to_string());

    let result = transform().generate(&request);

    assert!(result.tracked_html.ends_with(signature));
    // Only the body link is wrapped; the signature URL is untouched.
    assert_eq!(result.tracked_html.matches("<a href=").count(), 1);
    assert_eq!(result.link_count, 1);
}

#[test]
fn plain_text_newlines_become_breaks() {
    let result = transform().generate(&TrackingRequest::new("one\ntwo\nthree", "u@e.com"));
    assert!(result.tracked_html.contains("one<br>two<br>three"));
}

#[test]
fn html_bodies_skip_newline_conversion() {
    let result = transform().generate(&TrackingRequest::new(
        "<html><p>one\ntwo</p></html>",
        "u@e.com",
    ));

    assert!(result.tracked_html.contains("one\ntwo"));
    assert!(!result.tracked_html.contains("<br>"));
}

#[test]
fn personalization_fills_placeholders_per_recipient() {
    let mut request = TrackingRequest::new(
        "Hi {{name}} at {{company}}, this went to {{email}}",
        "ada@acme.com",
    );
    request.recipient_name = Some("Ada".to_string());
    request.recipient_company = Some("Acme".to_string());

    let result = transform().generate(&request);

    assert!(result.tracked_html.contains("Hi Ada at Acme, this went to ada@acme.com"));
}

#[test]
fn result_serializes_for_persistence() {
    let result = transform().generate(&TrackingRequest::new("a body http://a.com", "u@e.com"));
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["tracking_id"], "trk_1700000000000_fixedfixedid");
    assert_eq!(value["link_count"], 1);
    assert!(value["tracked_html"].as_str().unwrap().starts_with("<img "));
}
