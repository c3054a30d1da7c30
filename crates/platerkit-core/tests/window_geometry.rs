use platerkit_core::{DeferredQueue, Point, Size, WindowGeometry};

#[test]
fn test_geometry_without_maximized_field() {
    let json = r#"{"x":12,"y":34,"width":800,"height":600}"#;
    let geometry: WindowGeometry = serde_json::from_str(json).unwrap();
    assert_eq!(geometry.position(), Point::new(12, 34));
    assert_eq!(geometry.size(), Size::new(800, 600));
    assert!(!geometry.maximized);
}

#[test]
fn test_geometry_serializes_flat() {
    let geometry = WindowGeometry::new(Point::new(-5, 0), Size::new(760, 490)).with_maximized(true);
    let value = serde_json::to_value(geometry).unwrap();
    assert_eq!(value["x"], -5);
    assert_eq!(value["width"], 760);
    assert_eq!(value["maximized"], true);
}

#[test]
fn test_deferred_queue_runs_in_order_once() {
    let mut queue = DeferredQueue::new();
    queue.defer("select");
    queue.defer("refresh");
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.drain(), ["select", "refresh"]);
    assert!(queue.drain().is_empty());
}
