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

use chrono::{DateTime, TimeDelta, Utc};
use orbwatch_common::{cartesian3::Cartesian3, trace};
use crate::{elements::ElementSet, projector::SceneProjection, propagator::Propagator};

pub const DEFAULT_PATH_STEPS: usize = 120;
pub const DEFAULT_PATH_PERIOD_MINUTES: f64 = 95.0;

/// sampled scene-space trajectory of one object over one (assumed) orbital period
#[derive(Debug,Clone,PartialEq,Default)]
pub struct OrbitPath {
    pub catalog_id: u32,
    pub start: DateTime<Utc>,
    pub points: Vec<Cartesian3>,
    pub omitted: usize, // number of instants for which propagation failed
}

impl OrbitPath {
    pub fn len (&self)->usize { self.points.len() }
    pub fn is_empty (&self)->bool { self.points.is_empty() }

    /// a polyline needs at least two points
    pub fn is_drawable (&self)->bool {
        self.points.len() >= 2
    }

    /// flat xyz f32 array as consumed by line renderers
    pub fn to_f32_vec (&self)->Vec<f32> {
        self.points.iter().flat_map(|p| p.to_f32_array()).collect()
    }
}

/// `steps+1` evenly spaced instants across `[start, start + period]`, the step being
/// `period_minutes * 60000 / steps` milliseconds (rounded to whole nanoseconds).
/// Instants outside of the representable time range are left out
pub fn sample_instants (start: DateTime<Utc>, steps: usize, period_minutes: f64)->Vec<DateTime<Utc>> {
    let steps = steps.max(1);
    let Some(step) = step_delta( period_minutes * 60e9 / steps as f64) else {
        return vec![start]
    };

    // offsets grow monotonically, once an instant is out of range all following ones are too
    (0..=steps).map_while(|i| {
        let offset = step.checked_mul( i32::try_from(i).ok()?)?;
        start.checked_add_signed( offset)
    }).collect()
}

fn step_delta (step_ns: f64)->Option<TimeDelta> {
    if step_ns.is_finite() && step_ns.abs() < i64::MAX as f64 {
        Some( TimeDelta::nanoseconds( step_ns.round() as i64))
    } else {
        None
    }
}

/// sample the orbit path of one object. Failed instants are omitted, which means the result can have
/// fewer than `steps+1` points (check [`OrbitPath::is_drawable`]).
/// This is O(steps) synchronous work and only meant to run on selection change
pub fn sample_orbit_path<P: Propagator> (propagator: &mut P, projection: &SceneProjection, elements: &ElementSet,
                                        start: DateTime<Utc>, steps: usize, period_minutes: f64)->OrbitPath {
    let mut path = OrbitPath { catalog_id: elements.catalog_number(), start, ..OrbitPath::default() };

    for t in sample_instants( start, steps, period_minutes) {
        match propagator.propagate( elements, t) {
            Ok(sv) => path.points.push( projection.project( &sv, t).scene),
            Err(e) => {
                trace!("omitting orbit path point at {}: {}", t, e);
                path.omitted += 1;
            }
        }
    }

    path
}
