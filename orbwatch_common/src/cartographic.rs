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

//! geodetic (WGS84 ellipsoid) coordinates in radians and meters.
//! This is an internal computation format - use the `_deg` accessors for display

use crate::{atan2, sin, cos, sqrt, normalize_pi, cartesian3::Cartesian3,
    geo_constants::{EQATORIAL_EARTH_RADIUS, POLAR_EARTH_RADIUS, E_EARTH_SQUARED}
};

/// max number of latitude refinement steps. Convergence to 1e-12 rad normally takes less than 5
const MAX_ITERATIONS: usize = 20;
const LAT_EPSILON: f64 = 1e-12;

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Cartographic {
    pub longitude: f64, // radians [-π..π]
    pub latitude: f64,  // radians [-π/2..π/2]
    pub height: f64     // meters above ellipsoid
}

impl Cartographic {
    pub fn new (longitude:f64, latitude: f64, height: f64)->Self {
        Cartographic { longitude, latitude, height }
    }

    pub fn from_degrees (lon: f64, lat: f64, height: f64)->Self {
        Cartographic::new( lon.to_radians(), lat.to_radians(), height)
    }

    pub fn longitude_deg (&self)-> f64 { self.longitude.to_degrees() }
    pub fn latitude_deg (&self)-> f64 { self.latitude.to_degrees() }
    pub fn height_km (&self)-> f64 { self.height / 1000.0 }
}

impl From<&Cartesian3> for Cartographic {

    /// convert earth fixed cartesian coordinates (meters) to geodetic coordinates by fixed point
    /// iteration of the latitude. Iteration count is bounded so this always terminates
    fn from (p: &Cartesian3) -> Self {
        let a = EQATORIAL_EARTH_RADIUS;
        let r = sqrt( p.x*p.x + p.y*p.y);
        let longitude = normalize_pi( atan2( p.y, p.x));

        if r < 1.0 { // on (or very close to) the polar axis - avoid the cos(lat) division
            let latitude = if p.z < 0.0 { -crate::HALF_PI } else { crate::HALF_PI };
            return Cartographic::new( longitude, latitude, p.z.abs() - POLAR_EARTH_RADIUS)
        }

        let mut latitude = atan2( p.z, r);
        let mut c = 1.0;

        for _ in 0..MAX_ITERATIONS {
            let lat_last = latitude;
            let sin_lat = sin(latitude);
            c = 1.0 / sqrt( 1.0 - E_EARTH_SQUARED * sin_lat * sin_lat);
            latitude = atan2( p.z + a * c * E_EARTH_SQUARED * sin_lat, r);
            if (latitude - lat_last).abs() < LAT_EPSILON { break }
        }

        let height = r / cos(latitude) - a * c;
        Cartographic::new( longitude, latitude, height)
    }
}

impl From<Cartesian3> for Cartographic {
    fn from (p: Cartesian3) -> Self {
        Cartographic::from(&p)
    }
}

impl std::fmt::Display for Cartographic {
    fn fmt (&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ longitude: {}, latitude: {}, height: {} }}",
            self.longitude.to_degrees(), self.latitude.to_degrees(), self.height)
    }
}
