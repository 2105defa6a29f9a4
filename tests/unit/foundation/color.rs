use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));

    let c: Rgba8 = serde_json::from_value(json!("#0000FF80")).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 255, 128));

    assert!(serde_json::from_value::<Rgba8>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<Rgba8>(json!("#gg0000")).is_err());
}

#[test]
fn parses_byte_arrays() {
    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgba8::rgba(1, 2, 3, 255));
    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3, 4])).unwrap();
    assert_eq!(c, Rgba8::rgba(1, 2, 3, 4));
    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
}

#[test]
fn hex_serialization_is_symmetric() {
    let c = Rgba8::rgba(0x16, 0x25, 0x56, 0xff);
    let v = serde_json::to_value(c).unwrap();
    assert_eq!(v, json!("#162556ff"));
    let back: Rgba8 = serde_json::from_value(v).unwrap();
    assert_eq!(back, c);
}

#[test]
fn lerp_hits_both_endpoints_exactly() {
    let white = Rgba8::rgb(255, 255, 255);
    let yellow = Rgba8::rgb(0xff, 0xdf, 0x20);
    assert_eq!(white.lerp(yellow, 0.0), white);
    assert_eq!(white.lerp(yellow, 1.0), yellow);
    assert_eq!(white.lerp(yellow, 2.0), yellow);

    let mid = white.lerp(Rgba8::rgb(55, 155, 255), 0.5);
    assert_eq!(mid, Rgba8::rgb(155, 205, 255));
}
