use super::*;

#[test]
fn rects_are_row_major() {
    let size = ImageSize::new(2048, 1024).unwrap();
    let layout = TileLayout::plan(size, 1024, 1024, 128);
    assert_eq!(layout.x.len(), 3);
    assert_eq!(layout.y.len(), 1);
    assert_eq!(layout.tile_count(), 3);

    let rects: Vec<_> = layout.rects().collect();
    assert_eq!(rects.len(), 3);
    assert_eq!((rects[0].row, rects[0].col), (0, 0));
    assert_eq!((rects[2].row, rects[2].col), (0, 2));
    assert_eq!(rects[2].x, TilePosition { start: 1024, end: 2048 });
    assert!(rects.iter().all(|r| r.size() == (1024, 1024)));
}

#[test]
fn rows_iterate_outer() {
    let size = ImageSize::new(1500, 1500).unwrap();
    let layout = TileLayout::plan(size, 1024, 1024, 0);
    let order: Vec<_> = layout.rects().map(|r| (r.row, r.col)).collect();
    assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(layout.axis(Axis::Y).tiles()[1].start, 476);
}
