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

//! incremental orbit propagation for large tracked-object catalogs.
//!
//! Data flow is catalog store -> propagation scheduler -> shared position buffer -> renderer, and
//! scheduler -> catalog store (selected object only) -> UI. The scheduler is driven by explicit
//! [`scheduler::PropagationScheduler::tick`] calls and processes a bounded batch of objects per tick.

pub mod errors;
pub mod elements;
pub mod propagator;
pub mod projector;
pub mod catalog;
pub mod catalog_store;
pub mod position_buffer;
pub mod scheduler;
pub mod path_sampler;
pub mod config;
pub mod loader;
pub mod hud;

pub use errors::{OrbwatchTrackError, Result};
pub use elements::ElementSet;
pub use propagator::{Propagator, Sgp4Propagator, StateVector};
pub use projector::{PropagatedState, SceneProjection};
pub use catalog::{Catalog, Category, CategoryCounts, DerivedState, TrackedObject};
pub use catalog_store::{CatalogStore, CatalogWriter, CatalogMirror, CatalogReader, MirrorOutcome};
pub use position_buffer::{PositionBuffer, SharedPositionBuffer, CategoryPalette, Rgb};
pub use scheduler::{PropagationScheduler, SchedulerCursor, TickReport};
pub use path_sampler::{OrbitPath, sample_orbit_path};
pub use config::TrackerConfig;
