#![cfg(feature = "serde")]

use voronoi_inc::{Cell, DiagramConfig, Point, VoronoiDiagram};

#[test]
fn test_cells_serialize_with_neighbors() {
    let mut diagram = VoronoiDiagram::new(600.0).unwrap();
    assert!(diagram.add_point(Point::new(300.0, 300.0)));

    let json = serde_json::to_value(diagram.cells()).unwrap();
    let cells = json.as_array().unwrap();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[3]["id"], 3);
    assert_eq!(cells[3]["generator"]["x"], 300.0);
    assert_eq!(cells[3]["borders"].as_array().unwrap().len(), 3);

    let restored: Vec<Cell> = serde_json::from_value(json).unwrap();
    assert_eq!(restored[3].borders(), diagram.cells()[3].borders());
}

#[test]
fn test_config_from_json() {
    let config: DiagramConfig = serde_json::from_str(
        r#"{ "size": 250.0, "epsilon": 1e-9, "super_factor": 4.0, "bisector_factor": 3.0, "init_factor": 4.0 }"#,
    )
    .unwrap();
    let diagram = VoronoiDiagram::with_config(config).unwrap();
    assert_eq!(diagram.size(), 250.0);
}
