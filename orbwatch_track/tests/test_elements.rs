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

use chrono::{TimeZone, Utc};
use orbwatch_track::{ElementSet, OrbwatchTrackError, elements::{checksum, MeanElements, TLE_LINE_LEN}};

const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

#[test]
fn test_parse () {
    let es = ElementSet::from_lines( &format!("  {ISS_LINE1} "), ISS_LINE2).unwrap();
    println!("{es}");

    assert_eq!( es.line1(), ISS_LINE1); // trimmed
    assert_eq!( es.catalog_number(), 25544);
    assert_eq!( es.international_designator(), "98067A");
    assert_eq!( es.inclination_deg(), Some(51.6416));
    assert_eq!( es.mean_motion(), Some(15.72125391));
    assert!( (es.nominal_period_minutes().unwrap() - 91.596).abs() < 1e-3);
    assert!( es.checksum_ok());
    assert!( !es.is_malformed());

    assert_eq!( checksum(ISS_LINE1), 7);
}

#[test]
fn test_invalid () {
    let short = &ISS_LINE1[..60];
    let mismatched = ISS_LINE2.replacen( "25544", "25545", 1);

    for (l1,l2) in [ (ISS_LINE2, ISS_LINE1), (short, ISS_LINE2), (ISS_LINE1, mismatched.as_str()) ] {
        let res = ElementSet::from_lines( l1, l2);
        println!("{:?}", res);
        assert!( matches!( res, Err(OrbwatchTrackError::TleError(_))));
        assert!( ElementSet::unchecked( l1, l2).is_malformed());
    }
}

#[test]
fn test_wrong_checksum_accepted () {
    let l2 = format!("{}0", &ISS_LINE2[..TLE_LINE_LEN-1]);
    let es = ElementSet::from_lines( ISS_LINE1, &l2).unwrap();
    assert!( !es.checksum_ok());
}

#[test]
fn test_format () {
    let elems = MeanElements {
        catalog_number: 40123,
        designator: "20001A".into(),
        epoch: Utc.with_ymd_and_hms( 2024, 2, 29, 18, 0, 0).unwrap(),
        inclination: 97.4512,
        raan: 5.25,
        eccentricity: 0.0123456,
        arg_of_perigee: 300.0,
        mean_anomaly: 12.5,
        mean_motion: 15.12345678,
        element_set_number: 9993,
        rev_number: 1,
    };
    let es = ElementSet::format( &elems);
    println!("{es}");

    assert_eq!( es.line1().len(), TLE_LINE_LEN);
    assert_eq!( es.line2().len(), TLE_LINE_LEN);
    assert!( es.checksum_ok());
    assert!( !es.is_malformed());

    assert!( es.line1().contains(" 24060.75000000 ")); // leap year day 60, 18h
    assert!( es.line2().contains(" 0123456 "));
    assert_eq!( es.catalog_number(), 40123);
    assert_eq!( es.international_designator(), "20001A");
    assert_eq!( es.inclination_deg(), Some(97.4512));
    assert_eq!( es.mean_motion(), Some(15.12345678));
}
