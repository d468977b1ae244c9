use super::*;
use crate::raster::rasterizer::MaskMode;

#[test]
fn plan_records_contract_version() {
    let plan = plan_seams(&SeamMaskParams::default());
    assert_eq!(plan.grid_contract, GRID_CONTRACT_VERSION);
    assert_eq!(plan.layout.tile_count(), 9);
    assert_eq!(plan.bands(Axis::X).len(), 2);
    assert_eq!(plan.bands(Axis::Y).len(), 2);
}

#[test]
fn rectangular_tiles_plan_axes_independently() {
    let params = SeamMaskParams {
        image_width: 2048,
        image_height: 1024,
        tile_width: 1024,
        tile_height: 512,
        overlap: 0,
        ..SeamMaskParams::default()
    };
    let plan = plan_seams(&params);
    let xs: Vec<_> = plan.x_bands.iter().map(|b| b.center).collect();
    let ys: Vec<_> = plan.y_bands.iter().map(|b| b.center).collect();
    assert_eq!(xs, vec![1024]);
    assert_eq!(ys, vec![512]);
}

#[test]
fn plan_serializes_to_json() {
    let plan = plan_seams(&SeamMaskParams::default());
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["grid_contract"], 1);
    assert_eq!(json["x_bands"][0]["center"], 960);
    let back: SeamPlan = serde_json::from_value(json).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn render_plan_matches_generate() {
    let params = SeamMaskParams {
        mode: MaskMode::Gradient,
        ..SeamMaskParams::default()
    };
    let plan = plan_seams(&params);
    let a = render_plan(&plan, &params, RasterSettings::default());
    let b = generate(&params);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn out_of_range_inputs_do_not_panic() {
    let params = SeamMaskParams {
        image_width: 10,
        image_height: 3,
        tile_width: 0,
        tile_height: 2,
        overlap: 50,
        seam_width: 0,
        mode: MaskMode::Gradient,
    };
    let m = generate(&params);
    assert_eq!(m.shape(), [1, 3, 10, 3]);
    assert_eq!(m.sum(), 0.0);
}
