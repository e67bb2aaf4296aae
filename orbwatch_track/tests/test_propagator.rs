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

use chrono::{TimeDelta, TimeZone, Utc};
use orbwatch_track::{ElementSet, Propagator, SceneProjection, Sgp4Propagator};

const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

#[test]
fn test_iss_sgp4 () {
    let elements = ElementSet::from_lines( ISS_LINE1, ISS_LINE2).unwrap();
    let mut propagator = Sgp4Propagator::new();
    let projection = SceneProjection::default();

    let epoch = Utc.with_ymd_and_hms( 2008, 9, 20, 12, 25, 40).unwrap();
    for minutes in [0i64, 30, 60, 90] {
        let t = epoch + TimeDelta::minutes(minutes);
        let sv = propagator.propagate( &elements, t).unwrap();
        let ps = projection.project( &sv, t);
        println!("{t}: r = {:.3} km, v = {:.4} km/s, lat = {:.4}, lon = {:.4}, alt = {:.1} km",
                 sv.position.length(), ps.speed_km_s, ps.latitude_deg, ps.longitude_deg, ps.altitude_km);

        assert!( (6600.0..6900.0).contains( &sv.position.length()));
        assert!( (7.5..7.9).contains( &ps.speed_km_s));
        assert!( (250.0..500.0).contains( &ps.altitude_km));
        assert!( ps.latitude_deg.abs() <= 51.7);
        assert!( (0.95..1.1).contains( &ps.scene.length()));
    }

    assert_eq!( propagator.cached(), 1);
    propagator.reset();
    assert_eq!( propagator.cached(), 0);
}

#[test]
fn test_repeatable () {
    let elements = ElementSet::from_lines( ISS_LINE1, ISS_LINE2).unwrap();
    let t = Utc.with_ymd_and_hms( 2008, 9, 20, 14, 0, 0).unwrap();

    let mut p1 = Sgp4Propagator::new();
    let a = p1.propagate( &elements, t).unwrap();
    let b = p1.propagate( &elements, t).unwrap(); // from cached TLE
    let c = Sgp4Propagator::new().propagate( &elements, t).unwrap();

    assert_eq!( a, b);
    assert_eq!( a, c);
}
