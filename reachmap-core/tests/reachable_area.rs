use geo::{Intersects, Point};
use reachmap_core::boundary::BoundaryMethod;
use reachmap_core::export::{map_feature_collection, read_nodes, write_nodes};
use reachmap_core::prelude::*;

fn example_response() -> UpstreamResponse {
    UpstreamResponse::from_records(&[
        RawNodeRecord::new("Example Station", 35.68, 139.77, 5, 0),
        RawNodeRecord::new("Example Bus Stop", 35.69, 139.78, 40, 2),
    ])
    .unwrap()
}

#[test]
fn example_station_survives_the_budget() {
    let classifier = KeywordClassifier::default();
    let buckets = DurationBuckets::default();
    let bounds = FilterBounds::new(Some(30), Some(1));

    let area = assemble_area(&example_response(), &classifier, &bounds, None);

    assert_eq!(area.nodes.len(), 1);
    let node = &area.nodes[0];
    assert_eq!(node.name, "Example Station");
    assert_eq!(node.category, NodeCategory::Station);
    assert_eq!(buckets.label_for(node.travel_time), "green");

    // two points are not enough for an outline
    assert!(area.boundary.is_empty());
    assert_eq!(area.boundary.method(), BoundaryMethod::Empty);
}

#[test]
fn bus_stop_is_classified_before_filtering() {
    let classifier = KeywordClassifier::default();
    let records: Vec<RawNodeRecord> = example_response().records().collect();
    let nodes = classify_records(&records, &classifier);
    assert_eq!(nodes[1].category, NodeCategory::BusStop);

    let all = filter_nodes(&nodes, &FilterBounds::unbounded());
    let names: Vec<&str> = all.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["Example Station", "Example Bus Stop"]);
}

#[test]
fn vendor_response_to_table_and_map() {
    let response = UpstreamResponse::from_json_str(
        r#"{
            "count": 6,
            "items": [
                {"name": "東京駅", "coord": {"lat": 35.6812, "lon": 139.7671}, "time": 15, "transit_count": 1, "node_id": "00006668"},
                {"name": "茅場町バス停", "coord": {"lat": 35.6815, "lon": 139.7780}, "time": 2, "transit_count": 0},
                {"name": "門前仲町駅", "coord": {"lat": 35.6719, "lon": 139.7955}, "time": 10, "transit_count": 0},
                {"name": "銀座駅", "coord": {"lat": 35.6715, "lon": 139.7650}, "time": 12, "transit_count": 1},
                {"name": "新木場駅", "coord": {"lat": 35.6459, "lon": 139.8270}, "time": 35, "transit_count": 1},
                {"name": "座標なし", "time": 4, "transit_count": 0}
            ],
            "unit": {"datum": "wgs84", "coord_unit": "degree"}
        }"#,
    )
    .unwrap();

    let area = assemble_area(
        &response,
        &KeywordClassifier::default(),
        &FilterBounds::new(Some(30), Some(1)),
        Coordinate::new(35.681_713_7, 139.777_779_7),
    );

    assert_eq!(area.rejected, 1);
    let times: Vec<u32> = area.nodes.iter().map(|n| n.travel_time).collect();
    assert_eq!(times, [2, 10, 12, 15]);
    assert_eq!(area.bus_stops().count(), 1);

    // all five located nodes, including the one over budget, are inside the outline
    assert_eq!(area.boundary.method(), BoundaryMethod::ConvexHull);
    let polygon = area.boundary.to_polygon();
    for (lat, lon) in [
        (35.6812, 139.7671),
        (35.6815, 139.7780),
        (35.6719, 139.7955),
        (35.6715, 139.7650),
        (35.6459, 139.8270),
    ] {
        assert!(polygon.intersects(&Point::new(lon, lat)));
    }

    let (stations, bus_stops) = area.split();
    let mut table = Vec::new();
    write_nodes(&mut table, &stations).unwrap();
    let reread = read_nodes(table.as_slice()).unwrap();
    assert_eq!(reread.len(), 3);
    assert_eq!(reread[0].name, "門前仲町駅");

    let mut empty_table = Vec::new();
    write_nodes(&mut empty_table, &[]).unwrap();
    assert!(read_nodes(empty_table.as_slice()).unwrap().is_empty());
    assert_eq!(bus_stops.len(), 1);

    let map = map_feature_collection(
        &area.nodes,
        &area.boundary,
        &DurationBuckets::default(),
        area.origin,
    )
    .unwrap();
    // origin + 4 markers + outline
    assert_eq!(map.features.len(), 6);
}

#[test]
fn mock_dataset_matches_budget() {
    let origin = Coordinate::new(35.681_713_7, 139.777_779_7).unwrap();
    let area = mock_area(origin, 10, Some(0));

    assert!(area.nodes.iter().all(|n| n.travel_time <= 10 && n.transfer_count == 0));
    assert!(area.nodes.windows(2).all(|w| w[0].travel_time <= w[1].travel_time));
    assert_eq!(area.boundary.method(), BoundaryMethod::Synthetic);
    assert_eq!(area.boundary.ring().first(), area.boundary.ring().last());
}
