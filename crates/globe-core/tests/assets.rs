use globe_core::{decode_rgba, AssetError, DecodedImage, IconPlan, Marker, FRANCHISES};
use std::io::Cursor;

#[test]
fn each_icon_path_is_planned_once() {
    let markers = [
        Marker {
            name: "a",
            latitude: 0.0,
            longitude: 0.0,
            icon: "/logos/shared.png",
        },
        Marker {
            name: "b",
            latitude: 10.0,
            longitude: 10.0,
            icon: "/logos/other.png",
        },
        Marker {
            name: "c",
            latitude: 20.0,
            longitude: 20.0,
            icon: "/logos/shared.png",
        },
    ];
    let plan = IconPlan::for_markers(&markers);
    assert_eq!(plan.paths.as_slice(), &["/logos/shared.png", "/logos/other.png"]);
    assert_eq!(plan.slots, vec![0, 1, 0]);
}

#[test]
fn franchise_icons_are_distinct() {
    let plan = IconPlan::for_markers(FRANCHISES);
    assert_eq!(plan.paths.len(), FRANCHISES.len());
    assert_eq!(plan.slots, (0..FRANCHISES.len()).collect::<Vec<_>>());
}

#[test]
fn decodes_png_to_rgba() {
    let mut img = image::RgbaImage::new(2, 3);
    img.put_pixel(1, 2, image::Rgba([10, 20, 30, 40]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_rgba("/logos/test.png", &bytes).unwrap();
    assert_eq!((decoded.width, decoded.height), (2, 3));
    assert_eq!(decoded.rgba.len(), 2 * 3 * 4);
    let last = &decoded.rgba[decoded.rgba.len() - 4..];
    assert_eq!(last, &[10, 20, 30, 40]);
}

#[test]
fn garbage_bytes_report_decode_error() {
    let err = decode_rgba("/textures/missing.jpg", b"<html>404</html>").unwrap_err();
    assert!(matches!(err, AssetError::Decode { .. }));
    assert!(err.to_string().contains("/textures/missing.jpg"));
}

#[test]
fn solid_fallback_is_one_pixel() {
    let img = DecodedImage::solid([1, 2, 3, 4]);
    assert_eq!((img.width, img.height), (1, 1));
    assert_eq!(img.rgba, vec![1, 2, 3, 4]);
}
