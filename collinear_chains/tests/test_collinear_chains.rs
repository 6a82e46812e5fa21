use collinear_chains::{
    assert_fuzzy_eq, collinear_chains, collinear_chains_many,
    core::{
        math::{vec2, Vector2},
        traits::FuzzyEq,
    },
    points, Chain, ChainOptions, ChainStitcher, InputError, PathKind, PolygonEdges, StitchAction,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn square() -> Vec<Vector2<f64>> {
    points![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
}

fn run(polyline: &[Vector2<f64>], polygon: &[Vector2<f64>], epsilon: f64) -> Vec<Chain<f64>> {
    collinear_chains(polyline, polygon, &ChainOptions::with_epsilon(epsilon)).unwrap()
}

#[test]
fn segment_on_bottom_edge() {
    init_logging();
    let chains = run(&points![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)], &square(), 0.0);
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].points(), points![(0.0, 0.0), (5.0, 0.0)].as_slice());
}

#[test]
fn gap_splits_chain() {
    init_logging();
    let polyline = points![(0.0, 0.0), (3.0, 0.0), (3.0, 1.0), (6.0, 0.0), (9.0, 0.0)];
    let chains = run(&polyline, &square(), 0.0);
    assert_eq!(chains.len(), 2);
    assert_eq!(chains[0].points(), points![(0.0, 0.0), (3.0, 0.0)].as_slice());
    assert_eq!(chains[1].points(), points![(6.0, 0.0), (9.0, 0.0)].as_slice());
}

#[test]
fn consecutive_segments_merge_into_one_chain() {
    init_logging();
    let chains = run(&points![(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)], &square(), 0.0);
    assert_eq!(chains.len(), 1);
    // intermediate vertex is kept, chain runs end to end
    assert_eq!(
        chains[0].points(),
        points![(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)].as_slice()
    );
    assert_eq!(chains[0].first(), Some(vec2(0.0, 0.0)));
    assert_eq!(chains[0].last(), Some(vec2(10.0, 0.0)));
    assert_fuzzy_eq!(chains[0].path_length(), 10.0);
}

#[test]
fn duplicate_points_rejected() {
    init_logging();
    let opts = ChainOptions::new();
    let polyline = points![(0.0, 0.0), (5.0, 0.0), (5.0, 0.0), (5.0, 5.0)];
    let err = collinear_chains(&polyline, &square(), &opts).unwrap_err();
    assert_eq!(
        err,
        InputError::DuplicateConsecutivePoints {
            kind: PathKind::Polyline,
            index: 1
        }
    );
    assert!(err.to_string().contains("index 1"));

    let polygon = points![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (10.0, 10.0), (0.0, 10.0)];
    let polyline = points![(0.0, 0.0), (5.0, 0.0)];
    let err = collinear_chains(&polyline, &polygon, &opts).unwrap_err();
    assert_eq!(
        err,
        InputError::DuplicateConsecutivePoints {
            kind: PathKind::Polygon,
            index: 2
        }
    );
}

#[test]
fn explicitly_closed_inputs_rejected() {
    init_logging();
    let opts = ChainOptions::new();
    let mut closed = square();
    closed.push(vec2(0.0, 0.0));
    let err = collinear_chains(&points![(0.0, 0.0), (5.0, 0.0)], &closed, &opts).unwrap_err();
    assert_eq!(
        err,
        InputError::FirstLastIdentical {
            kind: PathKind::Polygon
        }
    );

    let ring = points![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)];
    let err = collinear_chains(&ring, &square(), &opts).unwrap_err();
    assert_eq!(
        err,
        InputError::FirstLastIdentical {
            kind: PathKind::Polyline
        }
    );
}

#[test]
fn invalid_epsilon_rejected() {
    let polyline = points![(0.0, 0.0), (5.0, 0.0)];
    for eps in [-1.0, f64::NAN, f64::INFINITY] {
        let err = collinear_chains(&polyline, &square(), &ChainOptions::with_epsilon(eps));
        assert!(matches!(err, Err(InputError::InvalidEpsilon { .. })));
    }
}

#[test]
fn walk_around_corner_stays_one_chain() {
    init_logging();
    let polyline = points![(5.0, 0.0), (10.0, 0.0), (10.0, 10.0), (4.0, 10.0)];
    let chains = run(&polyline, &square(), 0.0);
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].points(), polyline.as_slice());
}

#[test]
fn segment_clipped_to_polygon_edge() {
    init_logging();
    let chains = run(&points![(-5.0, 0.0), (15.0, 0.0)], &square(), 0.0);
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].points(), points![(0.0, 0.0), (10.0, 0.0)].as_slice());
}

#[test]
fn polyline_reversed_against_polygon_winding() {
    init_logging();
    let chains = run(&points![(8.0, 0.0), (2.0, 0.0), (2.0, 3.0)], &square(), 0.0);
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].points(), points![(8.0, 0.0), (2.0, 0.0)].as_slice());
}

#[test]
fn chain_extended_from_the_front() {
    init_logging();
    // edge 0 and edge 4 both lie on the x axis, edge 0 covers x in [-5, 3], edge 4 covers [0, 10]
    let polygon = points![
        (-5.0, 0.0),
        (3.0, 0.0),
        (3.0, 5.0),
        (0.0, 5.0),
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, -5.0)
    ];
    let polyline = points![(3.0, 0.0), (12.0, 0.0), (-5.0, 0.0)];

    let edges = PolygonEdges::new(&polygon);
    let (i1, interval1) = edges
        .first_overlap(polyline[0], polyline[1], 0.0)
        .unwrap();
    let (i2, interval2) = edges
        .first_overlap(polyline[1], polyline[2], 0.0)
        .unwrap();
    assert_eq!((i1, i2), (4, 0));

    let mut stitcher = ChainStitcher::new(0.0);
    assert_eq!(stitcher.push(Some(interval1)), StitchAction::Seeded);
    assert_eq!(stitcher.push(Some(interval2)), StitchAction::PrependEnd);

    let chains = run(&polyline, &polygon, 0.0);
    assert_eq!(chains.len(), 1);
    assert_eq!(
        chains[0].points(),
        points![(-5.0, 0.0), (3.0, 0.0), (10.0, 0.0)].as_slice()
    );
}

#[test]
fn first_polygon_edge_wins_over_longer_overlap() {
    init_logging();
    // bottom side split at x = 2, the polyline segment overlaps both pieces
    let polygon = points![(0.0, 0.0), (2.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    let chains = run(&points![(1.0, 0.0), (9.0, 0.0)], &polygon, 0.0);
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].points(), points![(1.0, 0.0), (2.0, 0.0)].as_slice());
}

#[test]
fn tolerance_picks_up_near_collinear_segments() {
    init_logging();
    let polyline = points![(1.0, 0.05), (9.0, -0.05), (9.0, 5.0)];
    assert!(run(&polyline, &square(), 0.0).is_empty());

    let chains = run(&polyline, &square(), 0.1);
    assert_eq!(chains.len(), 1);
    let pts = chains[0].points();
    assert_eq!(pts.len(), 2);
    // interval is expressed on the polygon edge
    assert_fuzzy_eq!(pts[0], vec2(1.0, 0.0));
    assert_fuzzy_eq!(pts[1], vec2(9.0, 0.0));
}

#[test]
fn tolerance_joins_nearly_touching_intervals() {
    init_logging();
    // bottom side has a narrow notch between x = 5 and x = 5.05
    let polygon = points![
        (0.0, 0.0),
        (5.0, 0.0),
        (5.0, -1.0),
        (5.05, -1.0),
        (5.05, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0)
    ];
    let polyline = points![(1.0, 0.0), (5.02, 0.0), (9.0, 0.0)];

    let chains = run(&polyline, &polygon, 0.0);
    assert_eq!(chains.len(), 2);
    assert_eq!(chains[0].points(), points![(1.0, 0.0), (5.0, 0.0)].as_slice());

    let chains = run(&polyline, &polygon, 0.1);
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].len(), 3);
    assert_eq!(chains[0].first(), Some(vec2(1.0, 0.0)));
}

#[test]
fn repeated_calls_are_identical() {
    init_logging();
    let polyline = points![
        (-2.0, 0.0),
        (4.0, 0.0),
        (4.0, 3.0),
        (10.0, 3.0),
        (10.0, 12.0),
        (6.0, 10.0),
        (1.0, 10.0)
    ];
    let first = run(&polyline, &square(), 0.5);
    for _ in 0..5 {
        assert_eq!(run(&polyline, &square(), 0.5), first);
    }
}

#[test]
fn batch_matches_single_calls() {
    init_logging();
    let polylines = vec![
        points![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)],
        points![(0.0, 0.0), (3.0, 0.0), (3.0, 1.0), (6.0, 0.0), (9.0, 0.0)],
        Vec::new(),
        points![(10.0, -2.0), (10.0, 4.0), (20.0, 4.0)],
    ];
    let opts = ChainOptions::new();
    let batch = collinear_chains_many(&polylines, &square(), &opts).unwrap();
    assert_eq!(batch.len(), polylines.len());
    for (pl, chains) in polylines.iter().zip(batch.iter()) {
        assert_eq!(&collinear_chains(pl, &square(), &opts).unwrap(), chains);
    }

    let single = collinear_chains_many(&polylines[1..2], &square(), &opts).unwrap();
    assert_eq!(single, vec![run(&polylines[1], &square(), 0.0)]);
}

#[test]
fn batch_reports_position_of_bad_polyline() {
    init_logging();
    let polylines = vec![
        points![(0.0, 0.0), (5.0, 0.0)],
        points![(0.0, 0.0), (5.0, 0.0)],
        points![(1.0, 1.0), (1.0, 1.0)],
    ];
    let err = collinear_chains_many(&polylines, &square(), &ChainOptions::new()).unwrap_err();
    assert_eq!(err.batch_position(), Some(2));
    assert_eq!(
        err.to_string(),
        "polyline 2 of batch: identical consecutive points in polyline at index 0"
    );
}

#[test]
fn single_precision_points() {
    init_logging();
    let polygon: Vec<Vector2<f32>> = square().iter().map(|p| p.cast().unwrap()).collect();
    let polyline = vec![vec2(0.0f32, 0.0), vec2(5.0, 0.0), vec2(5.0, 5.0)];
    let chains = collinear_chains(&polyline, &polygon, &ChainOptions::new()).unwrap();
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].points(), &[vec2(0.0f32, 0.0), vec2(5.0, 0.0)]);
}

#[test]
fn single_precision_input_computed_in_double_precision() {
    init_logging();
    let to_f32 = |pts: &[Vector2<f64>]| -> Vec<Vector2<f32>> {
        pts.iter().map(|&p| Vector2::narrow(p)).collect()
    };

    // long thin triangle, the polyline runs along its hypotenuse close to the f32 rounding limit
    let mut checked = 0;
    for n in 1..2000u32 {
        let k = f64::from(n * 4097);
        let polygon = points![(0.0, 0.0), (3.0 * k, k), (0.0, k)];
        let polyline = points![(21.0, 7.0), (3.0 * (k - 9.0), k - 9.0)];
        let exact = polygon
            .iter()
            .chain(polyline.iter())
            .all(|&p| Vector2::<f32>::narrow(p).widen() == p);
        if !exact {
            continue;
        }

        let opts = ChainOptions::<f32>::new();
        let opts64 = ChainOptions::<f64>::new();
        let single = collinear_chains(&to_f32(&polyline), &to_f32(&polygon), &opts).unwrap();
        let double: Vec<Chain<f32>> = collinear_chains(&polyline, &polygon, &opts64)
            .unwrap()
            .into_iter()
            .map(Chain::narrow)
            .collect();
        assert_eq!(single, double, "k = {k}");
        checked += 1;
    }

    assert!(checked > 1000);
}

#[test]
fn non_finite_points_rejected() {
    init_logging();
    let opts = ChainOptions::new();
    let polyline = points![(0.0, 0.0), (5.0, 0.0)];
    let polygon = points![(0.0, 0.0), (f64::NAN, 0.0), (10.0, 10.0)];
    let err = collinear_chains(&polyline, &polygon, &opts).unwrap_err();
    assert_eq!(
        err,
        InputError::NonFinitePoint {
            kind: PathKind::Polygon,
            index: 1
        }
    );
    assert_eq!(err.to_string(), "non-finite coordinate in polygon at index 1");

    let polylines = vec![polyline, points![(1.0, 1.0), (f64::INFINITY, 1.0)]];
    let err = collinear_chains_many(&polylines, &square(), &opts).unwrap_err();
    assert_eq!(err.batch_position(), Some(1));
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_batch_matches_sequential() {
    use collinear_chains::collinear_chains_many_par;

    init_logging();
    let polylines: Vec<Vec<Vector2<f64>>> = (0..64)
        .map(|i| {
            let x = (i % 10) as f64;
            points![(x, -1.0), (x, 0.0), (x + 3.0, 0.0), (x + 3.0, 4.0)]
        })
        .collect();
    let opts = ChainOptions::with_epsilon(1e-9);
    let seq = collinear_chains_many(&polylines, &square(), &opts).unwrap();
    let par = collinear_chains_many_par(&polylines, &square(), &opts).unwrap();
    assert_eq!(seq, par);
}
