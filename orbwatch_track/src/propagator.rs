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

use std::collections::HashMap;
use chrono::{DateTime, TimeZone, Utc};
use satkit::{Instant, TLE, sgp4::{sgp4, SGP4Error}};
use orbwatch_common::cartesian3::Cartesian3;
use crate::{elements::ElementSet, errors::{tle_error, propagation_error, OrbwatchTrackError, Result}};

/// inertial (TEME) position [km] and velocity [km/s] at a given instant
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct StateVector {
    pub position: Cartesian3,
    pub velocity: Cartesian3,
}

/// the point-in-time propagation primitive: element set + instant -> inertial state vector.
/// Implementations have to return in bounded time, failure is a normal result that callers treat
/// as "no update" for this instant. Propagators are allowed to keep (bounded) caches, which is
/// why `propagate` takes `&mut self`
pub trait Propagator {
    fn propagate (&mut self, elements: &ElementSet, t: DateTime<Utc>) -> Result<StateVector>;

    /// drop cached state, called when the catalog is replaced
    fn reset (&mut self) {}
}

/// SGP4 propagator based on satkit.
/// Parsed TLEs are cached per catalog number so that satkit only has to initialize the SGP4 record
/// once per object. The cache is keyed by catalog number and checked against the element lines,
/// hence its size is bounded by the catalog size
#[derive(Default)]
pub struct Sgp4Propagator {
    cache: HashMap<u32,(ElementSet,TLE)>,
}

impl Sgp4Propagator {
    pub fn new ()->Self {
        Sgp4Propagator { cache: HashMap::new() }
    }

    pub fn cached (&self)->usize {
        self.cache.len()
    }

    fn tle_for (&mut self, elements: &ElementSet) -> Result<&mut TLE> {
        let key = elements.catalog_number();
        let is_current = self.cache.get(&key).is_some_and(|(es,_)| es == elements);

        if !is_current {
            // note we don't cache failures - malformed sets are re-parsed (and rejected) on each attempt
            let tle = TLE::load_2line( elements.line1(), elements.line2())
                .map_err(|e| tle_error!("2 line satkit TLE import failed for {}: {:?}", key, e))?;
            self.cache.insert( key, (elements.clone(), tle));
        }

        self.cache.get_mut(&key).map(|(_,tle)| tle).ok_or( propagation_error!("no TLE for {}", key))
    }
}

impl Propagator for Sgp4Propagator {
    fn propagate (&mut self, elements: &ElementSet, t: DateTime<Utc>) -> Result<StateVector> {
        let tle = self.tle_for( elements)?;
        let times = [instant_from_datetime(t)];
        let (pteme, vteme, errs) = sgp4( tle, &times); // satkit returns meters and meters/sec

        if let Some(err) = errs.first() {
            if !matches!( err, SGP4Error::SGP4Success) {
                return Err( propagation_error!("sgp4 failed for {}: {:?}", elements.catalog_number(), err))
            }
        }

        let position = Cartesian3::new( pteme[(0,0)], pteme[(1,0)], pteme[(2,0)]) * 0.001;
        let velocity = Cartesian3::new( vteme[(0,0)], vteme[(1,0)], vteme[(2,0)]) * 0.001;

        if position.is_finite() && velocity.is_finite() && !position.is_zero() {
            Ok( StateVector { position, velocity } )
        } else {
            Err( propagation_error!("sgp4 returned invalid state for {}", elements.catalog_number()))
        }
    }

    fn reset (&mut self) {
        self.cache.clear();
    }
}

pub fn instant_from_datetime<Z> (dt: DateTime<Z>)->Instant where Z:TimeZone {
    Instant::from_unixtime( dt.timestamp_millis() as f64 / 1000.0)
}
