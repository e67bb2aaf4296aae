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

//! the incremental propagation scheduler.
//!
//! Each [`PropagationScheduler::tick`] propagates at most `batch_size` objects, starting at the cursor
//! and proceeding in catalog index order. Once the cursor reaches the end of the catalog it wraps
//! around and the cycle counter is incremented. This bounds the per-tick cost independent of catalog
//! size, at the price of positions being up to `ceil(len / batch_size)` ticks old.
//!
//! Per-object propagation failures are counted and otherwise ignored - the slot keeps its last value
//! and the object is retried on the next cycle. There is no backoff for persistently failing objects.

use std::sync::Arc;
use chrono::{DateTime, Utc};
use orbwatch_common::{trace, debug, warn};
use crate::{
    catalog::{Catalog, DerivedState},
    catalog_store::{CatalogMirror, MirrorOutcome},
    position_buffer::{CategoryPalette, SharedPositionBuffer},
    projector::{PropagatedState, SceneProjection},
    propagator::Propagator,
};

pub const DEFAULT_BATCH_SIZE: usize = 200;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub struct SchedulerCursor {
    /// next catalog index to process
    pub next_index: usize,
    /// number of completed passes over the catalog
    pub cycle: u64,
}

/// what happened during one tick
#[derive(Debug,Clone,PartialEq,Default)]
pub struct TickReport {
    pub generation: u64,
    pub reallocated: bool,
    pub start: usize,
    pub end: usize,
    pub propagated: usize,
    pub failed: usize,
    pub skipped: usize,
    pub wrapped: bool,
    pub cycle: u64,
    pub mirrored: Option<MirrorOutcome>,
}

impl TickReport {
    pub fn batch_len (&self)->usize {
        self.end - self.start
    }
}

/// number of ticks it takes to visit every object of a catalog with `len` objects once
pub fn ticks_per_cycle (len: usize, batch_size: usize)->usize {
    len.div_ceil( batch_size.max(1))
}

pub struct PropagationScheduler<P: Propagator> {
    propagator: P,
    mirror: CatalogMirror,
    buffer: SharedPositionBuffer,
    projection: SceneProjection,
    palette: CategoryPalette,
    batch_size: usize,
    cursor: SchedulerCursor,
    generation: u64, // catalog generation the buffer and cursor refer to
}

impl<P: Propagator> PropagationScheduler<P> {
    pub fn new (propagator: P, mirror: CatalogMirror, buffer: SharedPositionBuffer, batch_size: usize)->Self {
        let batch_size = if batch_size == 0 {
            warn!("batch size 0 not supported, using 1");
            1
        } else {
            batch_size
        };
        let generation = buffer.read().generation();

        PropagationScheduler {
            propagator, mirror, buffer,
            projection: SceneProjection::default(),
            palette: CategoryPalette::default(),
            batch_size,
            cursor: SchedulerCursor::default(),
            generation,
        }
    }

    pub fn with_projection (mut self, projection: SceneProjection)->Self {
        self.projection = projection;
        self
    }

    pub fn with_palette (mut self, palette: CategoryPalette)->Self {
        self.palette = palette;
        self
    }

    pub fn cursor (&self)->SchedulerCursor { self.cursor }
    pub fn batch_size (&self)->usize { self.batch_size }
    pub fn propagator (&self)->&P { &self.propagator }

    /// a handle to the buffer this scheduler writes to
    pub fn buffer (&self)->SharedPositionBuffer { self.buffer.clone() }

    /// process the next batch of the current catalog at instant `now`
    pub fn tick (&mut self, now: DateTime<Utc>)->TickReport {
        let catalog = self.mirror.snapshot();
        let mut report = TickReport { generation: catalog.generation(), ..TickReport::default() };

        if catalog.generation() != self.generation || self.buffer.read().len() != catalog.len() {
            self.reallocate( &catalog);
            report.reallocated = true;
        }

        report.start = self.cursor.next_index;
        report.end = report.start;
        report.cycle = self.cursor.cycle;

        if catalog.is_empty() {
            return report
        }

        let selected = self.process_batch( &catalog, now, &mut report);
        drop(catalog); // no need to force a copy of the catalog when mirroring

        if let Some((catalog_id, state)) = selected {
            report.mirrored = Some( self.mirror.mirror_position( report.generation, catalog_id, DerivedState::Propagated(state)));
        }

        report
    }

    fn reallocate (&mut self, catalog: &Catalog) {
        debug!("reallocating position buffer for catalog generation {} ({} objects)", catalog.generation(), catalog.len());

        self.buffer.write().reallocate( catalog);
        self.cursor.next_index = 0;
        self.generation = catalog.generation();
        self.propagator.reset();
    }

    /// propagate `[cursor, batch_end)` and advance the cursor. Returns the selected object's state
    /// if it was part of this batch and propagated successfully
    fn process_batch (&mut self, catalog: &Catalog, now: DateTime<Utc>, report: &mut TickReport)->Option<(u32,PropagatedState)> {
        let selected_id = self.mirror.selected_id();
        let mut selected = None;

        let start = self.cursor.next_index;
        let end = start.saturating_add( self.batch_size).min( catalog.len());
        let objects = &catalog.objects()[start..end];

        {
            let mut buf = self.buffer.write();

            for (i, obj) in (start..end).zip( objects.iter()) {
                let elements = obj.elements();
                if elements.is_malformed() {
                    report.skipped += 1;
                    continue;
                }

                match self.propagator.propagate( elements, now) {
                    Ok(sv) => {
                        let state = self.projection.project( &sv, now);
                        buf.write( i, &state.scene, self.palette.color( obj.category()));
                        report.propagated += 1;

                        if selected_id == Some(obj.catalog_id()) {
                            selected = Some( (obj.catalog_id(), state) );
                        }
                    }
                    Err(e) => {
                        trace!("no update for {}: {}", obj.catalog_id(), e);
                        report.failed += 1;
                    }
                }
            }

            if report.propagated > 0 {
                buf.bump_version();
            }
        }

        report.end = end;
        if end >= catalog.len() {
            self.cursor.next_index = 0;
            self.cursor.cycle += 1;
            report.wrapped = true;
            trace!("completed propagation cycle {}", self.cursor.cycle);
        } else {
            self.cursor.next_index = end;
        }
        report.cycle = self.cursor.cycle;

        selected
    }
}
