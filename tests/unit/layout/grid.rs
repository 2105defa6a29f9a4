use super::*;

fn params() -> GridParams {
    GridParams::default()
}

#[test]
fn concrete_500px_viewport_fits_three_columns() {
    let (layout, centers) = compute_grid(500.0, 7, &params()).unwrap();
    assert_eq!(layout.columns, 3);
    assert_eq!(layout.rows, 3);
    assert_eq!(centers.len(), 7);

    // 3 * 100 + 2 * 25 = 350 wide, centred in 500.
    assert_eq!(layout.grid_width(), 350.0);
    assert_eq!(layout.outer_padding_x, 75.0);
    assert_eq!(layout.canvas_width, 500.0);
    // 2 * 50 + 3 * 100 + 2 * 25
    assert_eq!(layout.canvas_height, 450.0);
}

#[test]
fn centers_are_assigned_row_major() {
    let (layout, centers) = compute_grid(500.0, 7, &params()).unwrap();
    assert_eq!(centers[0], Point::new(125.0, 100.0));
    assert_eq!(centers[1], Point::new(250.0, 100.0));
    assert_eq!(centers[2], Point::new(375.0, 100.0));
    assert_eq!(centers[3], Point::new(125.0, 225.0));
    assert_eq!(centers[6], Point::new(125.0, 350.0));

    assert_eq!(layout.cell_of(4), (1, 1));
    assert_eq!(layout.cell_rect(0), Rect::new(75.0, 50.0, 175.0, 150.0));
    for (i, c) in centers.iter().enumerate() {
        assert_eq!(*c, layout.center_of(i));
        assert_eq!(layout.cell_rect(i).center(), *c);
    }
}

#[test]
fn rows_is_exact_ceiling_for_many_inputs() {
    for width in [260.0, 300.0, 499.0, 500.0, 1024.0, 1920.0, 3840.0] {
        for count in [0usize, 1, 2, 5, 7, 100, 444] {
            let (layout, centers) = compute_grid(width, count, &params()).unwrap();
            assert!(layout.columns >= 1);
            assert_eq!(layout.rows, count.div_ceil(layout.columns));
            assert!(layout.columns * layout.rows >= count);
            assert_eq!(centers.len(), count);
            // Columns never exceed the available width unless clamped.
            let available = width - 100.0;
            if available >= 125.0 {
                assert!(layout.grid_width() <= available);
            }
        }
    }
}

#[test]
fn narrow_viewport_clamps_to_one_column() {
    let (layout, centers) = compute_grid(120.0, 3, &params()).unwrap();
    assert_eq!(layout.columns, 1);
    assert_eq!(layout.rows, 3);
    // A 100px column centred in 120px.
    assert_eq!(layout.outer_padding_x, 10.0);
    assert_eq!(centers[2], Point::new(60.0, 350.0));

    let (layout, _) = compute_grid(40.0, 1, &params()).unwrap();
    assert_eq!(layout.columns, 1);
    assert_eq!(layout.outer_padding_x, -30.0);
}

#[test]
fn empty_dataset_has_no_rows() {
    let (layout, centers) = compute_grid(800.0, 0, &params()).unwrap();
    assert_eq!(layout.rows, 0);
    assert!(centers.is_empty());
    assert_eq!(layout.canvas_height, 100.0);

    // The gutter count bottoms out at zero, whatever the padding.
    let wide_gutter = GridParams {
        padding: 80.0,
        ..params()
    };
    let (layout, _) = compute_grid(800.0, 0, &wide_gutter).unwrap();
    assert_eq!(layout.canvas_height, 2.0 * wide_gutter.outer_padding_y);
    let (layout, _) = compute_grid(800.0, 1, &wide_gutter).unwrap();
    assert_eq!(layout.canvas_height, 100.0 + 100.0);
}

#[test]
fn invalid_viewport_is_rejected() {
    assert!(compute_grid(0.0, 3, &params()).is_err());
    assert!(compute_grid(-10.0, 3, &params()).is_err());
    assert!(compute_grid(f64::NAN, 3, &params()).is_err());
}

#[test]
fn invalid_params_are_rejected() {
    let mut p = params();
    p.diameter = 0.0;
    assert!(compute_grid(500.0, 3, &p).is_err());
    let mut p = params();
    p.padding = -1.0;
    assert!(compute_grid(500.0, 3, &p).is_err());
}

#[test]
fn identical_inputs_give_identical_layouts() {
    let a = compute_grid(1337.0, 97, &params()).unwrap();
    let b = compute_grid(1337.0, 97, &params()).unwrap();
    assert_eq!(a.0, b.0);
    assert_eq!(a.1, b.1);
}

#[test]
fn custom_params_change_stride() {
    let p = GridParams {
        outer_padding_x: 10.0,
        outer_padding_y: 20.0,
        padding: 10.0,
        diameter: 40.0,
    };
    let (layout, centers) = compute_grid(220.0, 5, &p).unwrap();
    // available 200 / stride 50 = 4 columns, grid width 4*40 + 3*10 = 190.
    assert_eq!(layout.columns, 4);
    assert_eq!(layout.rows, 2);
    assert_eq!(layout.outer_padding_x, 15.0);
    assert_eq!(centers[4], Point::new(35.0, 90.0));
    assert_eq!(layout.canvas_height, 2.0 * 20.0 + 2.0 * 40.0 + 10.0);
}
