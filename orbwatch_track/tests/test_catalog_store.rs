/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

use std::sync::Arc;
use chrono::{TimeZone, Utc};
use orbwatch_common::cartesian3::Cartesian3;
use orbwatch_track::{
    CatalogStore, Category, CategoryCounts, DerivedState, ElementSet, MirrorOutcome, OrbwatchTrackError,
    PropagatedState, TrackedObject,
    elements::MeanElements,
};

fn object (id: u32, category: Category)->TrackedObject {
    let elements = ElementSet::format( &MeanElements {
        catalog_number: id,
        designator: "99025A".into(),
        epoch: Utc.with_ymd_and_hms( 2025, 6, 1, 0, 0, 0).unwrap(),
        inclination: 74.0,
        raan: 120.0,
        eccentricity: 0.01,
        arg_of_perigee: 45.0,
        mean_anomaly: 180.0,
        mean_motion: 14.2,
        element_set_number: 1,
        rev_number: 1,
    });
    TrackedObject::new( format!("OBJ-{id}"), category, elements)
}

fn state (x: f64)->DerivedState {
    DerivedState::Propagated( PropagatedState {
        scene: Cartesian3::new( x, 0.0, 0.0),
        latitude_deg: 10.0,
        longitude_deg: 20.0,
        altitude_km: 550.0,
        speed_km_s: 7.6,
    })
}

#[test]
fn test_replace () {
    let (writer, mirror, reader) = CatalogStore::new().split();
    assert!( reader.is_loading());
    assert_eq!( reader.generation(), 0);
    assert!( reader.catalog().is_empty());

    let gen1 = writer.replace_catalog( vec![
        object( 1, Category::Payload), object( 2, Category::Payload), object( 3, Category::Debris), object( 4, Category::Station)
    ]).unwrap();
    assert_eq!( gen1, 1);
    assert!( !reader.is_loading());
    assert_eq!( reader.counts(), CategoryCounts { payload: 2, debris: 1, station: 1 });
    assert_eq!( reader.counts().total(), 4);

    let catalog = reader.catalog();
    assert_eq!( catalog.len(), 4);
    assert_eq!( catalog.index_of(3), Some(2));
    assert_eq!( catalog.get(0).unwrap().catalog_id(), 1);
    assert_eq!( catalog.get_by_id(4).unwrap().category(), Category::Station);
    assert_eq!( catalog.get_by_id(4).unwrap().designator(), "99025A");

    writer.set_loading( true);
    let gen2 = writer.replace_catalog( vec![ object( 9, Category::Debris) ]).unwrap();
    assert_eq!( gen2, 2);
    assert!( !reader.is_loading());

    // old snapshot is still intact
    assert_eq!( catalog.len(), 4);
    let (new_catalog, counts) = reader.catalog_with_counts();
    assert_eq!( new_catalog.generation(), 2);
    assert_eq!( counts, new_catalog.counts());
}

#[test]
fn test_duplicate_id () {
    let (writer, mirror, reader) = CatalogStore::new().split();
    writer.replace_catalog( vec![ object( 1, Category::Payload) ]).unwrap();

    let res = writer.replace_catalog( vec![ object( 5, Category::Payload), object( 5, Category::Debris) ]);
    assert!( matches!( res, Err(OrbwatchTrackError::DuplicateCatalogId(5))));

    // store unchanged
    assert_eq!( reader.generation(), 1);
    assert_eq!( reader.catalog().len(), 1);
}

#[test]
fn test_selection_invalidated_on_replace () {
    let (writer, mirror, reader) = CatalogStore::new().split();
    writer.replace_catalog( vec![ object( 1, Category::Payload), object( 2, Category::Debris) ]).unwrap();

    assert!( writer.select_by_id(2));
    assert_eq!( mirror.selected_id(), Some(2));
    assert!( !writer.select_by_id(42));
    assert_eq!( mirror.selected_id(), Some(2)); // unchanged

    writer.replace_catalog( vec![ object( 1, Category::Payload), object( 2, Category::Debris) ]).unwrap();
    assert!( reader.selection().is_none());

    writer.select( Some( object( 1, Category::Payload)));
    writer.select( None);
    assert!( reader.selection().is_none());
}

#[test]
fn test_mirror_position () {
    let (writer, mirror, reader) = CatalogStore::new().split();
    let generation = writer.replace_catalog( vec![ object( 1, Category::Payload), object( 2, Category::Debris) ]).unwrap();
    writer.select_by_id(2);

    let snapshot = reader.catalog();
    assert_eq!( mirror.mirror_position( generation, 2, state(1.5)), MirrorOutcome::Applied);

    assert_eq!( reader.selection().unwrap().derived(), &state(1.5));
    assert_eq!( reader.derived_state(2), Some(state(1.5)));
    assert_eq!( reader.object(2).unwrap().derived(), &state(1.5));
    assert_eq!( reader.derived_state(42), None);

    // the catalog snapshot itself is not modified
    assert!( Arc::ptr_eq( &snapshot, &reader.catalog()));
    assert_eq!( snapshot.get_by_id(2).unwrap().derived(), &DerivedState::Unpropagated);

    // non-selected objects can be mirrored without touching the selection
    assert_eq!( mirror.mirror_position( generation, 1, state(2.0)), MirrorOutcome::Applied);
    assert_eq!( reader.selection().unwrap().derived(), &state(1.5));
}

#[test]
fn test_replace_resets_derived_state () {
    let (writer, mirror, reader) = CatalogStore::new().split();
    let gen1 = writer.replace_catalog( vec![ object( 1, Category::Payload), object( 2, Category::Debris) ]).unwrap();
    mirror.mirror_position( gen1, 2, state(3.0));

    // selecting picks up the last mirrored state
    assert!( writer.select_by_id(2));
    assert_eq!( reader.selection().unwrap().derived(), &state(3.0));

    writer.replace_catalog( vec![ object( 2, Category::Debris), object( 3, Category::Payload) ]).unwrap();
    assert_eq!( reader.derived_state(2), Some(DerivedState::Unpropagated));
    assert_eq!( reader.derived_state(3), Some(DerivedState::Unpropagated));
}

#[test]
fn test_reselect_after_replace () {
    let (writer, mirror, reader) = CatalogStore::new().split();
    let gen1 = writer.replace_catalog( vec![ object( 1, Category::Payload) ]).unwrap();
    writer.select_by_id(1);
    let (g, sel) = reader.selection_with_generation();
    assert_eq!( (g, sel.map(|o| o.catalog_id())), (gen1, Some(1)));

    let gen2 = writer.replace_catalog( vec![ object( 1, Category::Payload) ]).unwrap();
    assert_eq!( reader.selection_with_generation(), (gen2, None));

    // same id again, but a different selection
    writer.select_by_id(1);
    let (g, sel) = reader.selection_with_generation();
    assert_eq!( (g, sel.map(|o| o.catalog_id())), (gen2, Some(1)));
    assert_ne!( gen1, gen2);
}

#[test]
fn test_stale_generation () {
    let (writer, mirror, reader) = CatalogStore::new().split();
    let gen1 = writer.replace_catalog( vec![ object( 1, Category::Payload) ]).unwrap();
    let gen2 = writer.replace_catalog( vec![ object( 1, Category::Payload) ]).unwrap();
    writer.select_by_id(1);

    assert_eq!( mirror.mirror_position( gen1, 1, state(1.0)), MirrorOutcome::StaleGeneration);
    assert!( !reader.derived_state(1).unwrap().is_propagated());
    assert!( !reader.selection().unwrap().derived().is_propagated());

    assert_eq!( mirror.mirror_position( gen2, 1, state(1.0)), MirrorOutcome::Applied);
}

#[test]
fn test_select_unknown_object () {
    let (writer, mirror, reader) = CatalogStore::new().split();
    let generation = writer.replace_catalog( vec![ object( 1, Category::Payload) ]).unwrap();

    // accepted, but never updated
    writer.select( Some( object( 77, Category::Debris)));
    assert_eq!( mirror.selected_id(), Some(77));

    assert_eq!( mirror.mirror_position( generation, 77, state(1.0)), MirrorOutcome::UnknownObject);
    assert_eq!( reader.selection().unwrap().derived(), &DerivedState::Unpropagated);
}
