mod common;

use common::{brute_force_nearest, random_points};
use voronoi_inc::geometry::dist_squared;
use voronoi_inc::{Point, VoronoiDiagram};

fn assert_nearest(diagram: &VoronoiDiagram, queries: &[Point]) {
    for &q in queries {
        let found = diagram.find_cell(q).expect("Diagram always has cells").generator();
        let expected = brute_force_nearest(diagram, q);
        assert!(
            dist_squared(&found, &q) <= dist_squared(&expected, &q) + 1e-9,
            "Query {} located {} but nearest generator is {}",
            q,
            found,
            expected
        );
    }
}

#[test]
fn test_find_cell_matches_brute_force() {
    let mut diagram = VoronoiDiagram::new(600.0).unwrap();
    diagram.insert_all(random_points(1, 20, 600.0));

    assert_nearest(&diagram, &random_points(2, 100, 600.0));
}

#[test]
fn test_find_cell_after_every_insertion() {
    let mut diagram = VoronoiDiagram::new(1000.0).unwrap();
    let queries = random_points(4, 50, 1000.0);

    for p in random_points(3, 80, 1000.0) {
        diagram.add_point(p);
        assert_nearest(&diagram, &queries);
    }
}

#[test]
fn test_find_cell_returns_inserted_site() {
    let mut diagram = VoronoiDiagram::new(600.0).unwrap();
    let points = random_points(9, 30, 600.0);
    diagram.insert_all(points.iter().copied());

    for cell in diagram.cells().iter().filter(|c| !c.is_sentinel()) {
        let found = diagram.find_cell(cell.generator()).unwrap();
        assert_eq!(found.id(), cell.id());
    }
}

#[test]
fn test_find_cell_outside_boundary() {
    let mut diagram = VoronoiDiagram::new(600.0).unwrap();
    assert!(diagram.add_point(Point::new(300.0, 300.0)));

    // Far outside the visible region the sentinels win.
    let found = diagram.find_cell(Point::new(300.0, -5000.0)).unwrap();
    assert!(found.is_sentinel());
    let found = diagram.find_cell(Point::new(320.0, 310.0)).unwrap();
    assert_eq!(found.id(), 3);
}
