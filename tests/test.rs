use heat2d::{
    DiffusionStepper, Grid, GridSampler, HeatError, Point, RightEdgeBound, SurfaceFitter,
};

const TEST_STEPS: usize = 10;
const EPSILON: f64 = 1e-6;
const ALPHA: f64 = 5.0;
const DT: f64 = 0.1;

fn reference_points() -> Vec<Point> {
    vec![
        Point::new(0.0, 25.0, 240.0),
        Point::new(25.0, 0.0, 80.0),
        Point::new(49.0, 49.0, 192.0),
        Point::new(3.0, 1.0, 240.0),
    ]
}

/// Checks the whole outer ring, reporting the first offending cell.
fn assert_boundary_zero(grid: &Grid) {
    let (rows, cols) = (grid.rows(), grid.cols());
    for j in 0..cols {
        assert_eq!(grid[(0, j)], 0.0, "top boundary at (0, {j})");
        assert_eq!(grid[(rows - 1, j)], 0.0, "bottom boundary at ({}, {j})", rows - 1);
    }
    for i in 0..rows {
        assert_eq!(grid[(i, 0)], 0.0, "left boundary at ({i}, 0)");
        assert_eq!(grid[(i, cols - 1)], 0.0, "right boundary at ({i}, {})", cols - 1);
    }
}

fn uniform_interior(rows: usize, cols: usize, value: f64) -> Grid {
    let data: Vec<Vec<f64>> = (0..rows)
        .map(|i| {
            (0..cols)
                .map(|j| {
                    if i == 0 || j == 0 || i == rows - 1 || j == cols - 1 {
                        0.0
                    } else {
                        value
                    }
                })
                .collect::<Vec<f64>>()
        })
        .collect();
    Grid::from_rows(data).unwrap()
}

#[test]
fn test_reference_scenario() {
    let model = SurfaceFitter::fit(&reference_points()).unwrap();
    let grid = GridSampler::sample(&model, 50, 50).unwrap();

    assert_eq!(grid.rows(), 50);
    assert_eq!(grid.cols(), 50);
    assert_eq!(grid[(25, 0)], 0.0);
    assert!(grid[(1, 1)].is_finite());
    assert!((grid[(1, 1)] - 271.581_768_789_6).abs() < EPSILON);
    assert!((model.evaluate(0.0, 25.0) - 240.0).abs() < EPSILON);
}

#[test]
fn test_exact_interpolation() {
    let sets: Vec<Vec<Point>> = vec![
        vec![
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 2.0, 3.0),
            Point::new(2.0, 1.0, 5.0),
        ],
        reference_points(),
        vec![
            Point::new(1.0, 2.0, 10.0),
            Point::new(2.0, 5.0, 20.0),
            Point::new(3.0, 1.0, 5.0),
            Point::new(4.0, 4.0, 7.0),
            Point::new(5.0, 3.0, 1.0),
        ],
    ];

    for points in sets {
        let model = SurfaceFitter::fit(&points).unwrap();
        for p in &points {
            let z = model.evaluate(p.x(), p.y());
            assert!(
                (z - p.z()).abs() < EPSILON,
                "{} samples: model({}, {}) = {z}, expected {}",
                points.len(),
                p.x(),
                p.y(),
                p.z()
            );
        }
    }
}

#[test]
fn test_boundary_conditions() {
    let model = SurfaceFitter::fit(&reference_points()).unwrap();
    let grid = GridSampler::sample(&model, 30, 20).unwrap();
    assert_boundary_zero(&grid);

    let mut stepper = DiffusionStepper::new(grid, 0.5).unwrap();
    for _ in 0..TEST_STEPS {
        stepper.advance(DT);
        assert_boundary_zero(stepper.grid());
    }

    let mut stepper = stepper.with_right_edge(RightEdgeBound::ColumnCount);
    for _ in 0..TEST_STEPS {
        stepper.advance(DT);
        assert_boundary_zero(stepper.grid());
    }
}

#[test]
fn test_heat_flows_out_of_hot_interior() {
    let mut stepper = DiffusionStepper::new(uniform_interior(10, 10, 100.0), 1.0).unwrap();
    let before = stepper.grid().clone();
    stepper.advance(DT);

    // Cells next to the cold boundary lose heat, none gain it.
    for i in 1..9 {
        for j in 1..9 {
            let delta = stepper.grid()[(i, j)] - before[(i, j)];
            let touches_boundary = i == 1 || j == 1 || i == 8 || j == 8;
            if touches_boundary {
                assert!(delta < 0.0, "({i}, {j}) delta = {delta}");
            } else {
                assert_eq!(delta, 0.0, "({i}, {j}) delta = {delta}");
            }
        }
    }
    assert!(stepper.grid().interior_mean().unwrap() < 100.0);
}

#[test]
fn test_single_step_consistency() {
    let model = SurfaceFitter::fit(&reference_points()).unwrap();
    let grid = GridSampler::sample(&model, 50, 50).unwrap();

    let mut first = DiffusionStepper::new(grid.clone(), ALPHA).unwrap();
    let mut second = DiffusionStepper::new(grid, ALPHA).unwrap();
    for _ in 0..TEST_STEPS {
        first.advance(DT);
        second.advance(DT);
    }

    assert_eq!(first.grid(), second.grid(), "stepping is not deterministic");
}

#[test]
fn test_zero_size_interior_is_noop() {
    for (rows, cols) in [(2, 5), (5, 2), (2, 2)] {
        let grid = Grid::zeros(rows, cols);
        let mut stepper = DiffusionStepper::new(grid.clone(), ALPHA).unwrap();
        stepper.advance(DT);
        assert_eq!(stepper.grid(), &grid);
    }
}

#[test]
fn test_single_interior_cell() {
    // 3x3 has exactly one interior cell with no interior neighbours.
    let mut stepper = DiffusionStepper::new(uniform_interior(3, 3, 10.0), 1.0).unwrap();
    stepper.advance(0.5);
    assert!((stepper.grid()[(1, 1)] - (10.0 - 4.0 * 10.0 * 0.25)).abs() < 1e-12);
}

#[test]
fn test_fit_errors() {
    assert!(matches!(
        SurfaceFitter::fit(&[]),
        Err(HeatError::InvalidInput { .. })
    ));

    let duplicated = vec![
        Point::new(1.0, 1.0, 100.0),
        Point::new(1.0, 1.0, 100.0),
        Point::new(1.0, 49.0, 120.0),
        Point::new(45.0, 25.0, 100.0),
    ];
    assert!(matches!(
        SurfaceFitter::fit(&duplicated),
        Err(HeatError::SingularMatrix { size: 4 })
    ));
}
