use super::*;

#[test]
fn band_centers_on_overlap_midpoint() {
    let grid = TileGrid::plan(2048, 1024, 128);
    let bands = locate(&grid, 64);
    assert_eq!(bands.len(), 2);

    assert_eq!(bands[0].center, 960);
    assert_eq!((bands[0].start, bands[0].end), (928, 992));

    assert_eq!(bands[1].center, 1472);
    assert_ne!(bands[1].center, 3 * grid.stride());
}

#[test]
fn exact_fit_grid_has_two_seams() {
    let grid = TileGrid::plan(2816, 1024, 128);
    let centers: Vec<_> = locate(&grid, 64).iter().map(|b| b.center).collect();
    assert_eq!(centers, vec![960, 1856]);
}

#[test]
fn zero_overlap_centers_on_boundary() {
    let grid = TileGrid::plan(2048, 1024, 0);
    let bands = locate(&grid, 64);
    assert_eq!(bands.len(), 1);
    assert_eq!(bands[0].center, 1024);
    assert_eq!((bands[0].start, bands[0].end), (992, 1056));
    assert!(bands[0].contains(1024));
    assert!(!bands[0].contains(991));
}

#[test]
fn single_tile_has_no_seams() {
    let grid = TileGrid::plan(512, 1024, 128);
    assert!(locate(&grid, 64).is_empty());
}

#[test]
fn odd_seam_width_floors_half_width() {
    let grid = TileGrid::plan(2048, 1024, 128);
    let bands = locate(&grid, 9);
    assert_eq!(bands[0].half_width, 4);
    assert_eq!(bands[0].width(), 8);
}

#[test]
fn zero_half_width_is_empty_band() {
    let grid = TileGrid::plan(2048, 1024, 128);
    let bands = locate_with_halfwidth(&grid, 0);
    assert!(bands.iter().all(|b| b.is_empty()));
}

#[test]
fn band_is_clamped_to_axis() {
    let a = TilePosition { start: 0, end: 64 };
    let b = TilePosition { start: 60, end: 70 };
    let band = SeamBand::between(a, b, 100, 70);
    assert_eq!(band.center, 62);
    assert_eq!((band.start, band.end), (0, 70));
    assert_eq!(band.distance(0), 62);
}
