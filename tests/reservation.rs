use fake::{faker::name::en::Name, Fake};
use proptest::prelude::*;

use theater_booking::error::BookingError;
use theater_booking::models::{BookingStore, Seat, SeatGrid};
use theater_booking::services::ReservationEngine;

fn assert_consistent(engine: &ReservationEngine) {
    let grid = engine.grid();
    for row in 1..=grid.rows() {
        for number in 1..=grid.seats_per_row() {
            let seat = Seat::new(row, number);
            assert_eq!(
                grid.is_occupied(&seat).unwrap(),
                engine.store().holds(&seat),
                "grid and bookings disagree on {}",
                seat
            );
        }
    }
}

#[test]
fn create_marks_first_free_seat() {
    let mut engine = ReservationEngine::new(2, 2);

    let booking = engine.create_booking("X", &[1]).unwrap();

    assert_eq!(booking.seats, vec![Seat::new(1, 1)]);
    assert_eq!(
        engine.free_seats(),
        vec![Seat::new(1, 2), Seat::new(2, 1), Seat::new(2, 2)]
    );
    assert_consistent(&engine);
}

#[test]
fn cancel_ignores_case_and_frees_seats() {
    let mut engine = ReservationEngine::new(2, 2);
    engine.create_booking("X", &[1]).unwrap();

    let removed = engine.cancel_booking("x").unwrap();

    assert_eq!(removed.name, "X");
    assert!(engine.store().is_empty());
    assert_eq!(engine.free_seats().len(), 4);
    assert_consistent(&engine);
}

#[test]
fn full_hall_reports_zero_available() {
    let mut grid = SeatGrid::new(1, 1);
    grid.set_occupied(&Seat::new(1, 1), true).unwrap();
    let mut engine = ReservationEngine::from_parts(grid, BookingStore::new());

    assert_eq!(
        engine.create_booking("Y", &[1]),
        Err(BookingError::InsufficientSeats { available: 0 })
    );
}

#[test]
fn modify_unknown_booking_fails() {
    let mut engine = ReservationEngine::new(2, 2);
    assert_eq!(
        engine.modify_booking("missing", &[1]),
        Err(BookingError::BookingNotFound("missing".to_string()))
    );
}

#[test]
fn too_many_seats_leave_state_untouched() {
    let mut engine = ReservationEngine::new(1, 3);
    engine.create_booking("a", &[2]).unwrap();
    let before = engine.clone();

    assert_eq!(
        engine.create_booking("b", &[1, 2, 3]),
        Err(BookingError::InsufficientSeats { available: 2 })
    );
    assert_eq!(engine.grid(), before.grid());
    assert_eq!(engine.store(), before.store());
}

#[test]
fn invalid_index_leaves_state_untouched() {
    let mut engine = ReservationEngine::new(2, 2);
    let before = engine.clone();

    assert!(matches!(
        engine.create_booking("a", &[1, 5]),
        Err(BookingError::InvalidSelection(_))
    ));
    assert_eq!(engine.grid(), before.grid());
    assert!(engine.store().is_empty());
}

#[test]
fn duplicate_index_is_rejected() {
    let mut engine = ReservationEngine::new(2, 2);
    assert!(matches!(
        engine.create_booking("a", &[2, 2]),
        Err(BookingError::InvalidSelection(_))
    ));
    assert_eq!(engine.grid().occupied_count(), 0);
}

#[test]
fn modify_offers_only_seats_outside_the_booking() {
    // 1x3: бронь держит (1,1), в списке остаются (1,2) и (1,3)
    let mut engine = ReservationEngine::new(1, 3);
    engine.create_booking("anna", &[1]).unwrap();

    let modified = engine.modify_booking("ANNA", &[2]).unwrap();

    assert_eq!(modified.seats, vec![Seat::new(1, 3)]);
    assert_eq!(engine.store().all()[0].seats, vec![Seat::new(1, 3)]);
}

#[test]
fn modify_releases_old_seats_and_marks_new_ones() {
    let mut engine = ReservationEngine::new(2, 2);
    engine.create_booking("anna", &[1, 2]).unwrap();

    engine.modify_booking("Anna", &[1]).unwrap();

    assert!(!engine.grid().is_occupied(&Seat::new(1, 1)).unwrap());
    assert!(!engine.grid().is_occupied(&Seat::new(1, 2)).unwrap());
    assert!(engine.grid().is_occupied(&Seat::new(2, 1)).unwrap());
    assert_consistent(&engine);
}

#[test]
fn modify_with_no_free_seats_fails_and_keeps_booking() {
    let mut engine = ReservationEngine::new(1, 2);
    engine.create_booking("a", &[1, 2]).unwrap();

    assert_eq!(
        engine.modify_booking("a", &[1]),
        Err(BookingError::InsufficientSeats { available: 0 })
    );
    assert_eq!(engine.store().all()[0].seats.len(), 2);
    assert_consistent(&engine);
}

#[test]
fn cancel_keeps_seat_shared_with_another_booking() {
    // Такое возможно только из файла, собранного вручную
    let store = BookingStore::from(vec![
        theater_booking::models::Booking::new("a", vec![Seat::new(1, 1)]),
        theater_booking::models::Booking::new("b", vec![Seat::new(1, 1), Seat::new(1, 2)]),
    ]);
    let mut grid = SeatGrid::new(1, 2);
    grid.set_occupied(&Seat::new(1, 1), true).unwrap();
    grid.set_occupied(&Seat::new(1, 2), true).unwrap();
    let mut engine = ReservationEngine::from_parts(grid, store);

    engine.cancel_booking("a").unwrap();

    assert!(engine.grid().is_occupied(&Seat::new(1, 1)).unwrap());
    assert_consistent(&engine);
}

#[test]
fn cancel_unknown_booking_fails() {
    let mut engine = ReservationEngine::new(1, 1);
    assert!(matches!(
        engine.cancel_booking("nobody"),
        Err(BookingError::BookingNotFound(_))
    ));
}

#[test]
fn list_signals_no_bookings_when_empty() {
    let mut engine = ReservationEngine::new(2, 2);
    assert_eq!(engine.list_bookings(), Err(BookingError::NoBookings));

    engine.create_booking("first", &[1]).unwrap();
    engine.create_booking("second", &[1]).unwrap();

    let names: Vec<_> = engine.list_bookings().unwrap().iter().map(|b| b.name.clone()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn lookup_ignores_case_for_generated_names() {
    let mut engine = ReservationEngine::new(4, 4);
    for _ in 0..5 {
        let name: String = Name().fake();
        engine.create_booking(&name, &[1]).unwrap();

        let found = engine.store().find_by_name(&name.to_uppercase()).unwrap();
        assert!(found.name.eq_ignore_ascii_case(&name));
    }
}

#[test]
fn check_availability_returns_free_listing() {
    let engine = ReservationEngine::new(1, 2);
    assert_eq!(engine.check_availability(2).unwrap().len(), 2);
    assert_eq!(
        engine.check_availability(3),
        Err(BookingError::InsufficientSeats { available: 2 })
    );
}

#[derive(Debug, Clone)]
enum Op {
    Create(usize, Vec<usize>),
    Modify(usize, Vec<usize>),
    Cancel(usize),
}

const NAMES: [&str; 3] = ["anna", "Bob", "CARL"];

fn op() -> impl Strategy<Value = Op> {
    let selection = prop::collection::vec(1usize..12, 0..4);
    prop_oneof![
        (0..NAMES.len(), selection.clone()).prop_map(|(n, s)| Op::Create(n, s)),
        (0..NAMES.len(), selection).prop_map(|(n, s)| Op::Modify(n, s)),
        (0..NAMES.len()).prop_map(Op::Cancel),
    ]
}

proptest! {
    #[test]
    fn grid_mirrors_bookings_after_any_operations(ops in prop::collection::vec(op(), 1..40)) {
        let mut engine = ReservationEngine::new(3, 3);
        for op in ops {
            let before = engine.clone();
            let result = match op {
                Op::Create(n, s) => engine.create_booking(NAMES[n], &s).map(|_| ()),
                Op::Modify(n, s) => engine.modify_booking(&NAMES[n].to_uppercase(), &s).map(|_| ()),
                Op::Cancel(n) => engine.cancel_booking(&NAMES[n].to_lowercase()).map(|_| ()),
            };
            if result.is_err() {
                prop_assert_eq!(engine.grid(), before.grid());
                prop_assert_eq!(engine.store(), before.store());
            }
            assert_consistent(&engine);
        }
    }
}
