use jetsim::resources::HeightMapGround;

/// A 1 km square sloping up along +x, 1 m per 10 m.
pub fn create_test_height_map() -> HeightMapGround {
    let columns = 11;
    let rows = 11;
    let heights = (0..rows)
        .flat_map(|_| (0..columns).map(|c| c as f64 * 10.0))
        .collect();

    HeightMapGround::new((0.0, 0.0), 100.0, columns, rows, heights)
        .expect("height map dimensions match")
}
