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

//! the catalog store, which holds the current catalog generation, category counts, loading flag and
//! selection.
//!
//! Access is split into typed handles so that each field group has exactly one writer path:
//!  - [`CatalogWriter`] for the ingestion side (catalog replacement, loading flag, selection)
//!  - [`CatalogMirror`] for the propagation scheduler (mirroring derived state)
//!  - [`CatalogReader`] for renderer and UI consumers (read only)
//!
//! Catalogs are immutable `Arc` snapshots. Replacement swaps the snapshot and its counts under one
//! write lock, hence readers either see the old catalog with its counts or the new ones.
//! Per-object derived state is not part of the snapshot. The store keeps it in a table indexed by
//! catalog index that is reset together with the catalog, so mirroring one object never touches
//! the (possibly shared) catalog

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, PoisonError};
use orbwatch_common::{info, debug};
use crate::{
    catalog::{Catalog, CategoryCounts, DerivedState, TrackedObject},
    errors::Result
};

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum MirrorOutcome {
    Applied,
    /// the write targeted a superseded catalog generation and was discarded
    StaleGeneration,
    /// no object with this id in the current catalog
    UnknownObject,
}

#[derive(Debug,Default)]
struct StoreState {
    catalog: Arc<Catalog>,
    derived: Vec<DerivedState>, // by catalog index of `catalog`
    counts: CategoryCounts,
    loading: bool,
    selection: Option<TrackedObject>,
}

impl StoreState {
    fn object (&self, catalog_id: u32)->Option<TrackedObject> {
        let idx = self.catalog.index_of(catalog_id)?;
        let mut o = self.catalog.get(idx)?.clone();
        o.set_derived( self.derived[idx]);
        Some(o)
    }
}

/// a store has to be split into its access handles before it can be used
#[derive(Debug,Default)]
pub struct CatalogStore {
    state: Arc<RwLock<StoreState>>,
}

impl CatalogStore {
    /// an empty store (generation 0) that is flagged as loading
    pub fn new ()->Self {
        let state = StoreState { loading: true, ..StoreState::default() };
        CatalogStore { state: Arc::new( RwLock::new(state)) }
    }

    pub fn split (self)->(CatalogWriter, CatalogMirror, CatalogReader) {
        let writer = CatalogWriter { state: self.state.clone() };
        let mirror = CatalogMirror { state: self.state.clone() };
        let reader = CatalogReader { state: self.state };
        (writer, mirror, reader)
    }
}

// we never leave the state inconsistent while holding the lock, so poisoning is not fatal
fn read_state (state: &RwLock<StoreState>)->RwLockReadGuard<'_,StoreState> {
    state.read().unwrap_or_else( PoisonError::into_inner)
}

fn write_state (state: &RwLock<StoreState>)->RwLockWriteGuard<'_,StoreState> {
    state.write().unwrap_or_else( PoisonError::into_inner)
}

/* #region writer ***************************************************************************************/

/// ingestion side handle
#[derive(Debug,Clone)]
pub struct CatalogWriter {
    state: Arc<RwLock<StoreState>>,
}

impl CatalogWriter {
    /// atomically swap in a new catalog, returning its generation. This recomputes the category counts,
    /// clears the loading flag and drops any previous selection.
    /// Fails without modifying the store if catalog ids are not unique
    pub fn replace_catalog (&self, objects: Vec<TrackedObject>)->Result<u64> {
        let mut state = write_state( &self.state);
        let generation = state.catalog.generation() + 1;
        let catalog = Catalog::new( generation, objects)?;
        let counts = catalog.counts();

        state.derived = vec![ DerivedState::Unpropagated; catalog.len() ];
        state.catalog = Arc::new(catalog);
        state.counts = counts;
        state.loading = false;
        state.selection = None;

        info!("catalog generation {} with {} objects (payload: {}, debris: {}, station: {})",
              generation, counts.total(), counts.payload, counts.debris, counts.station);
        Ok(generation)
    }

    pub fn set_loading (&self, is_loading: bool) {
        write_state( &self.state).loading = is_loading;
    }

    /// set or clear the selection. The object does not have to be in the current catalog, in which
    /// case it just never gets updated
    pub fn select (&self, selection: Option<TrackedObject>) {
        write_state( &self.state).selection = selection;
    }

    /// select by catalog id from the current catalog, returning false (and leaving the selection
    /// unchanged) if there is no such object. The selection starts out with the last mirrored state
    pub fn select_by_id (&self, catalog_id: u32)->bool {
        let mut state = write_state( &self.state);
        if let Some(o) = state.object(catalog_id) {
            state.selection = Some(o);
            true
        } else {
            false
        }
    }
}

/* #endregion writer */

/* #region mirror ***************************************************************************************/

/// scheduler side handle. There is only one of these per store
#[derive(Debug)]
pub struct CatalogMirror {
    state: Arc<RwLock<StoreState>>,
}

impl CatalogMirror {
    pub fn snapshot (&self)->Arc<Catalog> {
        read_state( &self.state).catalog.clone()
    }

    pub fn selected_id (&self)->Option<u32> {
        read_state( &self.state).selection.as_ref().map(|o| o.catalog_id())
    }

    /// update the derived state of one object (and of the selection if it refers to the same object).
    /// Writes for a generation other than the current one are discarded
    pub fn mirror_position (&self, generation: u64, catalog_id: u32, derived: DerivedState)->MirrorOutcome {
        let mut state = write_state( &self.state);

        if state.catalog.generation() != generation {
            debug!("discarding mirror of {} for stale generation {}", catalog_id, generation);
            return MirrorOutcome::StaleGeneration
        }

        let Some(idx) = state.catalog.index_of(catalog_id) else {
            return MirrorOutcome::UnknownObject
        };

        state.derived[idx] = derived;

        if let Some(sel) = state.selection.as_mut() {
            if sel.catalog_id() == catalog_id {
                sel.set_derived( derived);
            }
        }

        MirrorOutcome::Applied
    }
}

/* #endregion mirror */

/* #region reader ***************************************************************************************/

/// read-only handle for renderer and UI
#[derive(Debug,Clone)]
pub struct CatalogReader {
    state: Arc<RwLock<StoreState>>,
}

impl CatalogReader {
    pub fn catalog (&self)->Arc<Catalog> {
        read_state( &self.state).catalog.clone()
    }

    pub fn generation (&self)->u64 {
        read_state( &self.state).catalog.generation()
    }

    pub fn counts (&self)->CategoryCounts {
        read_state( &self.state).counts
    }

    /// catalog and counts from the same generation
    pub fn catalog_with_counts (&self)->(Arc<Catalog>,CategoryCounts) {
        let state = read_state( &self.state);
        (state.catalog.clone(), state.counts)
    }

    pub fn is_loading (&self)->bool {
        read_state( &self.state).loading
    }

    pub fn selection (&self)->Option<TrackedObject> {
        read_state( &self.state).selection.clone()
    }

    /// the selection together with the catalog generation it was made in. A selection of the same
    /// object in a replaced catalog has a different generation
    pub fn selection_with_generation (&self)->(u64,Option<TrackedObject>) {
        let state = read_state( &self.state);
        (state.catalog.generation(), state.selection.clone())
    }

    /// last mirrored state of an object in the current catalog
    pub fn derived_state (&self, catalog_id: u32)->Option<DerivedState> {
        let state = read_state( &self.state);
        state.catalog.index_of(catalog_id).map(|i| state.derived[i])
    }

    /// a copy of an object in the current catalog, including its last mirrored state
    pub fn object (&self, catalog_id: u32)->Option<TrackedObject> {
        read_state( &self.state).object(catalog_id)
    }
}

/* #endregion reader */
