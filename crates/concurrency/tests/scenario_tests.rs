//! Single-threaded lot scenarios
//!
//! Deterministic walkthroughs of first-fit placement, full lots, fragmentation
//! and the pair-start boundary.

use std::sync::Arc;

use lotkeeper_concurrency::Lot;
use lotkeeper_core::{LotConfig, ReserveError, SpotRequirement, SpotState};

fn create_lot(capacity: usize) -> Arc<Lot> {
    Arc::new(Lot::new(capacity))
}

#[test]
fn test_first_fit_on_known_pattern() {
    // Build [X O X O O]
    let lot = create_lot(5);
    let mut a = lot.single_reservation();
    let mut b = lot.single_reservation();
    let mut c = lot.single_reservation();
    assert_eq!(a.request_spot(), Ok(0));
    assert_eq!(b.request_spot(), Ok(1));
    assert_eq!(c.request_spot(), Ok(2));
    b.yield_spot(1).unwrap();
    assert_eq!(lot.snapshot().to_string(), "X O X O O");

    assert_eq!(lot.find_single(), Some(1));
    assert_eq!(lot.find_adjacent_pair(), Some(3));

    // Requests land where the probes said
    let mut truck = lot.adjacent_reservation();
    assert_eq!(truck.request_spot(), Ok(3));
    assert_eq!(b.request_spot(), Ok(1));
    assert!(lot.snapshot().is_full());
}

#[test]
fn test_full_lot_rejects_extra_cars() {
    let lot = create_lot(3);
    let mut cars = Vec::new();
    let mut results = Vec::new();

    for _ in 0..5 {
        let mut car = lot.single_reservation();
        results.push(car.request_spot());
        cars.push(car);
    }

    let no_capacity = Err(ReserveError::NoCapacity {
        requirement: SpotRequirement::Single,
    });
    assert_eq!(results, vec![Ok(0), Ok(1), Ok(2), no_capacity, no_capacity]);

    let snapshot = lot.snapshot();
    assert_eq!(snapshot.occupied, 3);
    assert_eq!(snapshot.free, 0);
    assert_eq!(snapshot.to_string(), "X X X");
}

#[test]
fn test_fragmented_lot_rejects_truck() {
    let lot = create_lot(5);
    let mut cars: Vec<_> = (0..5).map(|_| lot.single_reservation()).collect();
    for car in cars.iter_mut() {
        car.request_spot().unwrap();
    }
    // Keep cars at 0, 2, 4
    cars[1].yield_spot(1).unwrap();
    cars[3].yield_spot(3).unwrap();

    let snapshot = lot.snapshot();
    assert_eq!(snapshot.to_string(), "X O X O X");
    assert_eq!(snapshot.free, 2);

    let mut truck = lot.adjacent_reservation();
    assert_eq!(
        truck.request_spot(),
        Err(ReserveError::NoCapacity {
            requirement: SpotRequirement::Adjacent
        })
    );
    assert!(!truck.is_held());
    assert_eq!(lot.snapshot(), snapshot);
}

#[test]
fn test_pair_start_boundary() {
    let lot = create_lot(5);
    let mut truck = lot.adjacent_reservation();

    assert_eq!(
        truck.yield_spot(4),
        Err(ReserveError::InvalidIndex {
            index: 4,
            requirement: SpotRequirement::Adjacent,
            capacity: 5,
        })
    );

    // Fill the lot so a truck parks at the last valid start
    let mut cars: Vec<_> = (0..3).map(|_| lot.single_reservation()).collect();
    for car in cars.iter_mut() {
        car.request_spot().unwrap();
    }
    assert_eq!(truck.request_spot(), Ok(3));
    assert_eq!(lot.snapshot().to_string(), "X X X X X");

    assert!(matches!(
        truck.yield_spot(4),
        Err(ReserveError::InvalidIndex { .. })
    ));
    assert_eq!(truck.yield_spot(3), Ok(()));
    assert_eq!(lot.snapshot().spot(4), Some(SpotState::Free));
}

#[test]
fn test_tiny_lots() {
    let empty = create_lot(0);
    let mut car = empty.single_reservation();
    let mut truck = empty.adjacent_reservation();
    assert!(matches!(
        car.request_spot(),
        Err(ReserveError::NoCapacity { .. })
    ));
    assert!(matches!(
        truck.request_spot(),
        Err(ReserveError::NoCapacity { .. })
    ));
    assert!(matches!(
        car.yield_spot(0),
        Err(ReserveError::InvalidIndex { .. })
    ));

    let one = create_lot(1);
    let mut car = one.single_reservation();
    let mut truck = one.adjacent_reservation();
    assert_eq!(
        truck.request_spot(),
        Err(ReserveError::NoCapacity {
            requirement: SpotRequirement::Adjacent
        })
    );
    assert_eq!(car.request_spot(), Ok(0));
    assert!(matches!(
        truck.yield_spot(0),
        Err(ReserveError::InvalidIndex { .. })
    ));
}

#[test]
fn test_basic_walkthrough() {
    let lot = create_lot(10);
    assert_eq!(lot.snapshot().to_string(), "O O O O O O O O O O");

    let mut car1 = lot.single_reservation();
    let mut truck1 = lot.adjacent_reservation();
    let mut car2 = lot.single_reservation();

    assert_eq!(car1.request_spot(), Ok(0));
    assert_eq!(truck1.request_spot(), Ok(1));
    assert_eq!(car2.request_spot(), Ok(3));
    assert_eq!(lot.snapshot().to_string(), "X X X X O O O O O O");

    car1.yield_held().unwrap();
    assert_eq!(lot.snapshot().to_string(), "O X X X O O O O O O");

    truck1.yield_held().unwrap();
    let snapshot = lot.snapshot();
    assert_eq!(snapshot.to_string(), "O O O X O O O O O O");
    assert_eq!(snapshot.occupied, 1);
    assert_eq!(snapshot.free, 9);
    assert_eq!(car2.to_string(), "single(parked at 3)");
}

#[test]
fn test_lot_from_config_text() {
    let config = LotConfig::from_toml_str("capacity = 4\nname = \"depot\"").unwrap();
    let lot = Arc::new(Lot::from_config(&config).unwrap());
    assert_eq!(lot.name(), Some("depot"));

    let mut trucks: Vec<_> = (0..3).map(|_| lot.adjacent_reservation()).collect();
    let results: Vec<_> = trucks.iter_mut().map(|t| t.request_spot().ok()).collect();
    assert_eq!(results, vec![Some(0), Some(2), None]);
}
