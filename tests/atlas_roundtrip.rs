//! Round-trip and scaling properties of the atlas document model.

mod common;

use common::SAMPLE_ATLAS_XML;
use sparrow_resizer::atlas::{AtlasDocument, FrameRect};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parse_collects_frame_rects() {
    let doc = AtlasDocument::parse(SAMPLE_ATLAS_XML).unwrap();

    assert_eq!(
        doc.frame_rects(),
        vec![FrameRect {
            x: 10.0,
            y: 5.0,
            width: 20.0,
            height: 10.0,
        }]
    );
}

#[test]
fn frame_rects_default_missing_attributes_to_zero() {
    let doc = AtlasDocument::parse(
        r#"<TextureAtlas width="32" height="32">
            <SubTexture x="5"/>
            <SubTexture y="7" width="abc" height="3"/>
        </TextureAtlas>"#,
    )
    .unwrap();

    assert_eq!(
        doc.frame_rects(),
        vec![
            FrameRect { x: 5.0, y: 0.0, width: 0.0, height: 0.0 },
            FrameRect { x: 0.0, y: 7.0, width: 0.0, height: 3.0 },
        ]
    );
}

#[test]
fn reparse_is_deterministic() {
    let first = AtlasDocument::parse(SAMPLE_ATLAS_XML).unwrap();
    let second = AtlasDocument::parse(SAMPLE_ATLAS_XML).unwrap();

    assert_eq!(first.frame_rects(), second.frame_rects());
    assert_eq!(first.to_xml().unwrap(), second.to_xml().unwrap());
}

#[test]
fn malformed_xml_is_rejected() {
    assert!(AtlasDocument::parse("<TextureAtlas><SubTexture></TextureAtlas>").is_err());
    assert!(AtlasDocument::parse("not xml at all <<<").is_err());
}

// ============================================================================
// Rescaling
// ============================================================================

#[test]
fn rescale_rounds_each_field_independently() {
    let mut doc = AtlasDocument::parse(SAMPLE_ATLAS_XML).unwrap();
    doc.rescale(0.5);

    let root = doc.root().unwrap();
    assert_eq!(root.attr("width"), Some("50"));
    assert_eq!(root.attr("height"), Some("25"));

    let sub = root.child_elements().next().unwrap();
    assert_eq!(sub.attr("x"), Some("5"));
    // 5 * 0.5 = 2.5 rounds away from zero.
    assert_eq!(sub.attr("y"), Some("3"));
    assert_eq!(sub.attr("width"), Some("10"));
    assert_eq!(sub.attr("height"), Some("5"));
    assert_eq!(sub.attr("frameX"), Some("0"));
    assert_eq!(sub.attr("frameY"), Some("0"));
    assert_eq!(sub.attr("frameWidth"), Some("10"));
    assert_eq!(sub.attr("frameHeight"), Some("5"));
}

#[test]
fn rescale_preserves_unknown_attributes_and_content() {
    let mut doc = AtlasDocument::parse(
        r#"<TextureAtlas imagePath="hero.png" width="100" height="50">
            <!-- exported by a packer -->
            <SubTexture name="walk0001" rotated="false" x="10" y="10" width="16" height="16"/>
        </TextureAtlas>"#,
    )
    .unwrap();
    doc.rescale(2.0);

    let xml = doc.to_xml().unwrap();
    assert!(xml.contains(r#"imagePath="hero.png""#));
    assert!(xml.contains(r#"name="walk0001""#));
    assert!(xml.contains(r#"rotated="false""#));
    assert!(xml.contains("exported by a packer"));
    assert!(xml.contains(r#"x="20""#));
    assert!(xml.contains(r#"width="200""#));
}

#[test]
fn rescale_does_not_create_missing_attributes() {
    let mut doc = AtlasDocument::parse(
        r#"<TextureAtlas width="64" height="64">
            <SubTexture x="8" y="8" width="16" height="16"/>
        </TextureAtlas>"#,
    )
    .unwrap();
    doc.rescale(0.5);

    let sub = doc.root().unwrap().child_elements().next().unwrap();
    assert_eq!(sub.attr("x"), Some("4"));
    assert_eq!(sub.attr("frameX"), None, "absent trim fields stay absent");
    assert!(!doc.to_xml().unwrap().contains("frameX"));
}

#[test]
fn rescale_compounds_on_repeated_application() {
    let mut doc = AtlasDocument::parse(SAMPLE_ATLAS_XML).unwrap();
    doc.rescale(0.5);
    doc.rescale(0.5);

    let root = doc.root().unwrap();
    assert_eq!(root.attr("width"), Some("25"));
    let sub = root.child_elements().next().unwrap();
    // 20 -> 10 -> 5
    assert_eq!(sub.attr("width"), Some("5"));
    // 5 -> 3 (2.5 rounded) -> 2 (1.5 rounded)
    assert_eq!(sub.attr("y"), Some("2"));
}

#[test]
fn rescaled_values_serialize_as_bare_integers() {
    let mut doc = AtlasDocument::parse(SAMPLE_ATLAS_XML).unwrap();
    doc.rescale(0.5);

    let xml = doc.to_xml().unwrap();
    assert!(xml.contains(r#"width="50""#), "no trailing fraction: {xml}");
    assert!(!xml.contains("50.0"), "no trailing fraction: {xml}");
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn serialization_starts_with_declaration() {
    let doc = AtlasDocument::parse(SAMPLE_ATLAS_XML).unwrap();
    let xml = doc.to_xml().unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0"?>"#));
}

#[test]
fn serialized_output_reparses_to_the_same_frames() {
    let doc = AtlasDocument::parse(SAMPLE_ATLAS_XML).unwrap();
    let reparsed = AtlasDocument::parse(&doc.to_xml().unwrap()).unwrap();
    assert_eq!(doc.frame_rects(), reparsed.frame_rects());
}

#[test]
fn escaped_attribute_values_survive_the_round_trip() {
    let doc = AtlasDocument::parse(
        r#"<TextureAtlas width="10" height="10">
            <SubTexture name="a &amp; b" x="1" y="2" width="3" height="4"/>
        </TextureAtlas>"#,
    )
    .unwrap();

    let sub = doc.root().unwrap().child_elements().next().unwrap();
    assert_eq!(sub.attr("name"), Some("a & b"));
    assert!(doc.to_xml().unwrap().contains("a &amp; b"));
}
