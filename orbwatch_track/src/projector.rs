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

//! the coordinate projector: inertial state vector -> renderer scene coordinates, geodetic
//! position and speed. Everything in here is a pure function of its arguments

use chrono::{DateTime, Utc};
use serde::{Serialize,Deserialize};
use orbwatch_common::{
    cartesian3::Cartesian3, cartographic::Cartographic, sin, cos, normalize_two_pi, TWO_PI,
    geo_constants::{MEAN_EARTH_RADIUS_KM, JD_UNIX_EPOCH, JD_J2000, MILLIS_PER_DAY}
};
use crate::propagator::StateVector;

/// the derived state of a successfully propagated object
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct PropagatedState {
    pub scene: Cartesian3,    // renderer coordinates, y is the polar axis
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,     // above ellipsoid
    pub speed_km_s: f64,      // norm of the inertial velocity
}

/// maps earth radius to scene units. The default normalizes the mean earth radius to 1
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct SceneProjection {
    pub earth_radius_km: f64,
    pub scale: f64,
}

impl Default for SceneProjection {
    fn default()->Self {
        SceneProjection::normalized( MEAN_EARTH_RADIUS_KM)
    }
}

impl SceneProjection {
    /// projection that maps the given earth radius to one scene unit
    pub fn normalized (earth_radius_km: f64)->Self {
        SceneProjection { earth_radius_km, scale: 1.0 / earth_radius_km }
    }

    pub fn project (&self, sv: &StateVector, t: DateTime<Utc>) -> PropagatedState {
        let ecef = sv.position.rotated_z( -gmst(t));
        let geo = Cartographic::from( ecef * 1000.0);

        let altitude_km = geo.height_km();
        let scene = self.to_scene( geo.latitude, geo.longitude, altitude_km);

        PropagatedState {
            scene,
            latitude_deg: geo.latitude_deg(),
            longitude_deg: geo.longitude_deg(),
            altitude_km,
            speed_km_s: sv.velocity.length(),
        }
    }

    /// spherical to cartesian with y as polar axis. Longitude is negated on z to match the
    /// handedness of the renderer frame - do not change
    pub fn to_scene (&self, lat: f64, lon: f64, altitude_km: f64) -> Cartesian3 {
        let r = (self.earth_radius_km + altitude_km) * self.scale;
        let cos_lat = cos(lat);

        Cartesian3::new(
            r * cos_lat * cos(lon),
            r * sin(lat),
            -r * cos_lat * sin(lon)
        )
    }
}

/// julian date (UTC used as UT1) for the given instant
pub fn julian_date (t: DateTime<Utc>)->f64 {
    t.timestamp_millis() as f64 / MILLIS_PER_DAY + JD_UNIX_EPOCH
}

/// greenwich mean sidereal time in radians [0..2π) (IAU-82 model, as used with SGP4/TEME)
pub fn gmst (t: DateTime<Utc>)->f64 {
    let tut1 = (julian_date(t) - JD_J2000) / 36525.0;
    let secs = -6.2e-6 * tut1 * tut1 * tut1
        + 0.093104 * tut1 * tut1
        + (876600.0 * 3600.0 + 8640184.812866) * tut1
        + 67310.54841;

    normalize_two_pi( (secs / 240.0).to_radians() % TWO_PI)
}
