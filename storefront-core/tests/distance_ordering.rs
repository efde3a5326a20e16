//! Distance ordering and radius filtering over shop listings.

use rstest::rstest;
use storefront_core::{
    Coordinate, Locatable, distance_km, is_within_radius, sort_by_distance,
};

#[derive(Debug, Clone, PartialEq)]
struct Shop {
    name: &'static str,
    location: Coordinate,
}

impl Locatable for Shop {
    fn coordinate(&self) -> Coordinate {
        self.location
    }
}

fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).expect("valid test coordinate")
}

fn shop(name: &'static str, latitude: f64, longitude: f64) -> Shop {
    Shop {
        name,
        location: coordinate(latitude, longitude),
    }
}

#[rstest]
fn hyderabad_to_mumbai_matches_known_distance() {
    let hyderabad = coordinate(17.385_044, 78.486_671);
    let mumbai = coordinate(19.076_09, 72.877_426);
    let distance = distance_km(hyderabad, mumbai).value();
    assert!(
        (617.0..=625.0).contains(&distance),
        "expected roughly 620 km, got {distance}"
    );
}

#[rstest]
fn orders_shops_nearest_first() {
    let reference = coordinate(17.0, 78.0);
    // Latitude offsets of 0.12, 0.03 and 0.07 degrees put the shops at
    // roughly 13, 3 and 8 km from the reference.
    let shops = vec![
        shop("far", 17.12, 78.0),
        shop("near", 17.03, 78.0),
        shop("mid", 17.07, 78.0),
    ];

    let ordered = sort_by_distance(shops, reference);

    let names: Vec<&str> = ordered.iter().map(|entry| entry.item.name).collect();
    assert_eq!(names, vec!["near", "mid", "far"]);
    assert!(ordered[0].distance.value() < ordered[1].distance.value());
    assert!(ordered[1].distance.value() < ordered[2].distance.value());
}

#[rstest]
fn attached_distances_match_the_kernel() {
    let reference = coordinate(17.0, 78.0);
    let listing = shop("corner", 17.03, 78.0);
    let expected = distance_km(reference, listing.location);

    let ordered = sort_by_distance(vec![listing], reference);

    assert_eq!(ordered[0].distance, expected);
}

#[rstest]
fn equidistant_shops_keep_their_original_order() {
    let reference = coordinate(17.0, 78.0);
    let shops = vec![
        shop("first", 17.05, 78.0),
        shop("second", 17.05, 78.0),
        shop("third", 17.05, 78.0),
    ];

    let ordered = sort_by_distance(shops, reference);

    let names: Vec<&str> = ordered.iter().map(|entry| entry.item.name).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[rstest]
#[case(3.4, true)]
#[case(3.0, false)]
fn radius_check_gates_delivery(#[case] radius_km: f64, #[case] expected: bool) {
    let user = coordinate(17.0, 78.0);
    // Roughly 3.3 km north of the user.
    let target = coordinate(17.03, 78.0);
    assert_eq!(is_within_radius(user, target, radius_km), expected);
}
