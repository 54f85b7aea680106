use serde_json::json;

use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn editor_data_default_is_empty() {
    let data = EditorData::default();
    assert!(data.background.is_none());
    assert!(data.layers.is_empty());
    assert!(data.composite.is_none());
}

#[test]
fn image_file_from_path_has_no_url() {
    let file = ImageFile::from_path("/tmp/bg.png");
    assert_eq!(file.path, "/tmp/bg.png");
    assert!(file.url.is_none());
    assert!(file.orig_name.is_none());
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn empty_payload_serializes_to_layers_only() {
    let value = serde_json::to_value(EditorData::default()).unwrap();
    assert_eq!(value, json!({ "layers": [] }));
}

#[test]
fn absent_optional_fields_are_omitted() {
    let value = serde_json::to_value(ImageFile::from_path("a.png")).unwrap();
    assert_eq!(value, json!({ "path": "a.png" }));
}

#[test]
fn full_payload_deserializes() {
    let data: EditorData = serde_json::from_value(json!({
        "background": { "path": "bg.png", "orig_name": "photo.png" },
        "layers": [{ "path": "layer0.png" }, { "path": "layer1.png" }],
        "composite": { "path": "out.png", "url": "https://host/out.png" },
    }))
    .unwrap();

    assert_eq!(data.background.as_ref().map(|f| f.path.as_str()), Some("bg.png"));
    assert_eq!(data.layers.len(), 2);
    assert_eq!(
        data.composite.and_then(|f| f.url),
        Some("https://host/out.png".to_owned())
    );
}

#[test]
fn missing_layers_field_defaults_to_empty() {
    let data: EditorData = serde_json::from_value(json!({})).unwrap();
    assert!(data.layers.is_empty());
}

// =============================================================
// Pathline strokes
// =============================================================

#[test]
fn pathline_serializes_points_and_radius() {
    let stroke = PathLine {
        points: vec![NativePixel::new(10, 20), NativePixel::new(11, 21)],
        radius: 4.5,
    };
    let value = serde_json::to_value(stroke).unwrap();
    assert_eq!(
        value,
        json!({
            "points": [{ "x": 10, "y": 20 }, { "x": 11, "y": 21 }],
            "radius": 4.5,
        })
    );
}

#[test]
fn pathline_deserializes_from_wire_form() {
    let stroke: PathLine = serde_json::from_value(json!({
        "points": [{ "x": 0, "y": 0 }],
        "radius": 20.0,
    }))
    .unwrap();
    assert_eq!(stroke.points, vec![NativePixel::new(0, 0)]);
    assert!((stroke.radius - 20.0).abs() < f64::EPSILON);
}
