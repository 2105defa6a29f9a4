use super::*;

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![10, 20, 30, 255, 64, 32, 0, 128],
        premultiplied: true,
    }
}

#[test]
fn pixel_reads_row_major() {
    let f = frame();
    assert_eq!(f.pixel(0, 0), Some([10, 20, 30, 255]));
    assert_eq!(f.pixel(1, 0), Some([64, 32, 0, 128]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn to_straight_unpremultiplies_translucent_pixels() {
    let s = frame().to_straight();
    assert!(!s.premultiplied);
    assert_eq!(s.pixel(0, 0), Some([10, 20, 30, 255]));
    assert_eq!(s.pixel(1, 0), Some([128, 64, 0, 128]));
    // Already straight: unchanged.
    assert_eq!(s.to_straight(), s);
}
