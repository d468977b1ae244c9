use super::*;

#[test]
fn zeros_has_expected_shape() {
    let m = Mask::zeros(4, 2, MASK_CHANNELS);
    assert_eq!(m.shape(), [1, 2, 4, 3]);
    assert_eq!(m.as_slice().len(), 24);
    assert_eq!(m.sum(), 0.0);
    assert_eq!(m.distinct_values(), vec![0.0]);
}

#[test]
fn get_is_bounds_checked() {
    let mut m = Mask::zeros(3, 2, 1);
    m.as_mut_slice()[5] = 1.0;
    assert_eq!(m.get(1, 2, 0), Some(1.0));
    assert_eq!(m.get(0, 0, 0), Some(0.0));
    assert_eq!(m.get(2, 0, 0), None);
    assert_eq!(m.get(0, 3, 0), None);
    assert_eq!(m.get(0, 0, 1), None);
}

#[test]
fn fingerprint_tracks_values_and_shape() {
    let a = Mask::zeros(4, 4, 1);
    let b = Mask::zeros(4, 4, 1);
    assert_eq!(a.fingerprint(), b.fingerprint());

    let c = Mask::zeros(2, 8, 1);
    assert_ne!(a.fingerprint(), c.fingerprint());

    let mut d = Mask::zeros(4, 4, 1);
    d.as_mut_slice()[5] = 0.5;
    assert_ne!(a.fingerprint(), d.fingerprint());
}

#[test]
fn rgb_export_quantizes_values() {
    let mut m = Mask::zeros(2, 1, 3);
    m.as_mut_slice()[3..6].copy_from_slice(&[1.0, 1.0, 1.0]);
    let img = m.to_rgb8().unwrap();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255]);
}

#[test]
fn single_channel_broadcasts_to_rgb() {
    let mut m = Mask::zeros(1, 1, 1);
    m.as_mut_slice()[0] = 0.5;
    let img = m.to_rgb8().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [128, 128, 128]);
    assert_eq!(m.to_luma8().unwrap().get_pixel(0, 0).0, [128]);
}

#[test]
fn unsupported_channel_counts_error() {
    assert!(Mask::zeros(1, 1, 0).to_rgb8().is_err());
    assert!(Mask::zeros(1, 1, 2).to_rgb8().is_err());
    assert!(Mask::zeros(1, 1, 0).to_luma8().is_err());
}

#[test]
fn byte_export_is_little_endian() {
    let mut m = Mask::zeros(1, 1, 1);
    m.as_mut_slice()[0] = 1.0;
    assert_eq!(m.to_le_bytes(), 1.0f32.to_le_bytes().to_vec());
}
