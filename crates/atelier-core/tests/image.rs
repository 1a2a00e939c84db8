use atelier_core::error::CoreError;
use atelier_core::models::image::{ingest, media_type_for_extension, ImagePayload};

#[test]
fn data_uri_round_trip_is_byte_identical() {
    let bytes: Vec<u8> = (0..=255u8).collect();
    let payload = ImagePayload::new("image/png", bytes.clone());

    let uri = payload.to_data_uri();
    assert!(uri.starts_with("data:image/png;base64,"));

    let decoded = ImagePayload::from_data_uri(&uri).unwrap();
    assert_eq!(decoded.media_type, "image/png");
    assert_eq!(decoded.bytes, bytes);
}

#[test]
fn payload_serde_uses_data_uri_form() {
    let payload = ImagePayload::new("image/webp", vec![1, 2, 3]);
    let json = serde_json::to_string(&payload).unwrap();
    assert!(json.starts_with("\"data:image/webp;base64,"));

    let back: ImagePayload = serde_json::from_str(&json).unwrap();
    assert_eq!(back, payload);
}

#[test]
fn from_data_uri_rejects_malformed_input() {
    assert!(matches!(
        ImagePayload::from_data_uri("http://example.com/a.png"),
        Err(CoreError::InvalidDataUri(_))
    ));
    assert!(matches!(
        ImagePayload::from_data_uri("data:image/png;base64,@@@"),
        Err(CoreError::InvalidDataUri(_))
    ));
}

#[test]
fn ingest_prefers_declared_media_type() {
    let payload = ingest("portrait.png", Some("image/webp"), vec![9, 9]).unwrap();
    assert_eq!(payload.media_type, "image/webp");
}

#[test]
fn ingest_derives_type_from_extension() {
    let payload = ingest("sketch.JPG", None, vec![0]).unwrap();
    assert_eq!(payload.media_type, "image/jpeg");
}

#[test]
fn ingest_rejects_unsupported_types() {
    assert!(matches!(
        ingest("clip.gif", None, vec![0]),
        Err(CoreError::UnsupportedImageType(_))
    ));
    assert!(matches!(
        ingest("scan.png", Some("image/tiff"), vec![0]),
        Err(CoreError::UnsupportedImageType(_))
    ));
}

#[test]
fn ingest_falls_back_to_jpeg_without_extension_or_type() {
    let payload = ingest("portrait", None, vec![0]).unwrap();
    assert_eq!(payload.media_type, "image/jpeg");
}

#[test]
fn extension_mapping_covers_allowed_set() {
    assert_eq!(media_type_for_extension("jpg"), Some("image/jpeg"));
    assert_eq!(media_type_for_extension("jpeg"), Some("image/jpeg"));
    assert_eq!(media_type_for_extension("png"), Some("image/png"));
    assert_eq!(media_type_for_extension("webp"), Some("image/webp"));
    assert_eq!(media_type_for_extension("bmp"), None);
}
