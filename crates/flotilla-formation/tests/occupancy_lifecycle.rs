//! End-to-end occupancy lifecycle: acquire a wing of units, release some,
//! and check that observers see the releases and compaction passes in order.

use flotilla_core::UnitId;
use flotilla_formation::{Formation, FormationEvent, GridConfig};
use std::cell::RefCell;
use std::rc::Rc;

fn three_wide() -> GridConfig {
    GridConfig {
        width: 3,
        depth: 1,
        spacing: 1.0,
        x_offset: 0.0,
        z_offset: 0.0,
    }
}

#[test]
fn release_emits_released_then_compacted() {
    let mut formation = Formation::new(three_wide());
    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let events = Rc::clone(&events);
        formation.subscribe(move |e| events.borrow_mut().push(*e));
    }

    let a = UnitId::next();
    let b = UnitId::next();
    let slot_a = formation.acquire_free_slot(a).unwrap();
    formation.acquire_free_slot(b).unwrap();

    formation.release(a);
    assert_eq!(
        *events.borrow(),
        vec![
            FormationEvent::Released { unit: a, slot: slot_a },
            FormationEvent::Compacted { moves: 1 },
        ]
    );
    // b shifted into the vacated front slot.
    assert_eq!(formation.find_slot_of(b), Some(slot_a));
}

#[test]
fn releasing_an_absent_unit_emits_nothing() {
    let mut formation = Formation::new(three_wide());
    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let events = Rc::clone(&events);
        formation.subscribe(move |e| events.borrow_mut().push(*e));
    }

    assert_eq!(formation.release(UnitId::next()), None);
    assert!(events.borrow().is_empty());
}

#[test]
fn unsubscribed_observer_misses_later_events() {
    let mut formation = Formation::new(three_wide());
    let count = Rc::new(RefCell::new(0usize));
    let id = {
        let count = Rc::clone(&count);
        formation.subscribe(move |_| *count.borrow_mut() += 1)
    };

    let unit = UnitId::next();
    formation.acquire_free_slot(unit).unwrap();
    formation.release(unit);
    let seen_before = *count.borrow();
    assert!(seen_before > 0);

    assert!(formation.unsubscribe(id));
    formation.recompute();
    assert_eq!(*count.borrow(), seen_before);
}

#[test]
fn rebuild_notifies_and_clears_the_wing() {
    let mut formation = Formation::new(three_wide());
    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let events = Rc::clone(&events);
        formation.subscribe(move |e| events.borrow_mut().push(*e));
    }

    formation.acquire_free_slot(UnitId::next()).unwrap();
    formation.rebuild();

    assert_eq!(formation.occupied_count(), 0);
    assert_eq!(
        *events.borrow(),
        vec![FormationEvent::Rebuilt { slot_count: 3 }]
    );
}

#[test]
fn wing_survives_attrition_in_order() {
    let mut formation = Formation::new(GridConfig {
        width: 3,
        depth: 2,
        ..three_wide()
    });
    let wing: Vec<UnitId> = (0..6).map(|_| UnitId::next()).collect();
    for &unit in &wing {
        formation.acquire_free_slot(unit).unwrap();
    }

    // Shoot down the middle of the formation.
    formation.release(wing[1]);
    formation.release(wing[3]);

    // Survivors hold the front four slots in their original relative order.
    let survivors: Vec<Option<UnitId>> =
        formation.slots().iter().map(|s| s.occupant).collect();
    assert_eq!(
        survivors,
        vec![
            Some(wing[0]),
            Some(wing[2]),
            Some(wing[4]),
            Some(wing[5]),
            None,
            None,
        ]
    );
}
