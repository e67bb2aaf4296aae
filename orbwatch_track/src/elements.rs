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

//! the two-line element set that is the input of the propagation primitive.
//! We only check structure here (fixed column layout, matching catalog numbers) - the numeric
//! interpretation is left to the propagator

use std::fmt;
use chrono::{DateTime, Datelike, Timelike, Utc};
use crate::errors::{tle_error, OrbwatchTrackError, Result};

/// number of significant columns in each element set line (including checksum)
pub const TLE_LINE_LEN: usize = 69;

#[derive(Debug,Clone,PartialEq,Eq)]
pub struct ElementSet {
    line1: String,
    line2: String,
}

impl ElementSet {
    /// create a structurally validated element set
    pub fn from_lines (line1: &str, line2: &str) -> Result<Self> {
        let es = ElementSet::unchecked( line1, line2);
        es.check_structure()?;
        Ok(es)
    }

    /// create an element set without validation. Ingestion normally uses `from_lines`, this is for
    /// producers that defer validation - the scheduler skips malformed sets
    pub fn unchecked (line1: &str, line2: &str) -> Self {
        ElementSet { line1: line1.trim().to_string(), line2: line2.trim().to_string() }
    }

    /// create a checksummed element set from mean orbital elements (angles in degrees, mean motion in rev/day)
    pub fn format (elems: &MeanElements) -> Self {
        let line1 = format!("1 {:05}U {:<8} {} {:>10} {:>8} {:>8} 0 {:>4}",
            elems.catalog_number % 100_000,
            truncated( &elems.designator, 8),
            format_epoch( &elems.epoch),
            " .00000000", " 00000-0", " 00000-0",
            elems.element_set_number % 10_000
        );
        let line2 = format!("2 {:05} {:8.4} {:8.4} {:07} {:8.4} {:8.4} {:11.8}{:5}",
            elems.catalog_number % 100_000,
            elems.inclination,
            elems.raan,
            (elems.eccentricity.clamp(0.0, 0.9999999) * 1e7).round() as u32,
            elems.arg_of_perigee,
            elems.mean_anomaly,
            elems.mean_motion,
            elems.rev_number % 100_000
        );

        ElementSet {
            line1: with_checksum( line1),
            line2: with_checksum( line2),
        }
    }

    pub fn line1 (&self)->&str { &self.line1 }
    pub fn line2 (&self)->&str { &self.line2 }

    /// NORAD catalog number from line 1 (0 if unparsable)
    pub fn catalog_number (&self)->u32 {
        column_u32( &self.line1, 2, 7).unwrap_or(0)
    }

    /// international designator (launch year, number and piece), which might be empty
    pub fn international_designator (&self)->&str {
        self.line1.get(9..17).map(|s| s.trim()).unwrap_or("")
    }

    pub fn inclination_deg (&self)->Option<f64> {
        column_f64( &self.line2, 8, 16)
    }

    /// mean motion in revolutions per day
    pub fn mean_motion (&self)->Option<f64> {
        column_f64( &self.line2, 52, 63)
    }

    /// nominal orbital period in minutes derived from the mean motion
    pub fn nominal_period_minutes (&self)->Option<f64> {
        self.mean_motion().filter(|mm| *mm > 0.0).map(|mm| 1440.0 / mm)
    }

    /// do the checksum columns of both lines match their content.
    /// This is informational - synthetic and some published sets have wrong checksums
    pub fn checksum_ok (&self)->bool {
        checksum_matches( &self.line1) && checksum_matches( &self.line2)
    }

    pub fn is_malformed (&self)->bool {
        self.check_structure().is_err()
    }

    fn check_structure (&self)->Result<()> {
        if !self.line1.starts_with("1 ") { return Err( tle_error!("line 1 does not start with '1 ': {}", self.line1)) }
        if !self.line2.starts_with("2 ") { return Err( tle_error!("line 2 does not start with '2 ': {}", self.line2)) }
        if self.line1.len() < TLE_LINE_LEN { return Err( tle_error!("line 1 too short ({} columns)", self.line1.len())) }
        if self.line2.len() < TLE_LINE_LEN { return Err( tle_error!("line 2 too short ({} columns)", self.line2.len())) }

        let n1 = column_u32( &self.line1, 2, 7).ok_or( tle_error!("invalid catalog number in line 1: {}", self.line1))?;
        let n2 = column_u32( &self.line2, 2, 7).ok_or( tle_error!("invalid catalog number in line 2: {}", self.line2))?;
        if n1 != n2 { return Err( tle_error!("catalog number mismatch {} != {}", n1, n2)) }

        Ok(())
    }
}

impl fmt::Display for ElementSet {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.line1, self.line2)
    }
}

/// the subset of mean orbital elements we need to generate element sets
#[derive(Debug,Clone)]
pub struct MeanElements {
    pub catalog_number: u32,
    pub designator: String,
    pub epoch: DateTime<Utc>,
    pub inclination: f64,    // degrees
    pub raan: f64,           // degrees
    pub eccentricity: f64,   // [0..1)
    pub arg_of_perigee: f64, // degrees
    pub mean_anomaly: f64,   // degrees
    pub mean_motion: f64,    // rev/day
    pub element_set_number: u32,
    pub rev_number: u32,
}

/* #region helper functions *****************************************************************/

/// modulo-10 checksum over the first 68 columns: digits count with their value, '-' counts 1
pub fn checksum (line: &str)->u32 {
    line.bytes().take(TLE_LINE_LEN-1).fold( 0, |acc, b| {
        match b {
            b'0'..=b'9' => acc + (b - b'0') as u32,
            b'-' => acc + 1,
            _ => acc
        }
    }) % 10
}

fn checksum_matches (line: &str)->bool {
    line.as_bytes().get(TLE_LINE_LEN-1)
        .filter(|b| b.is_ascii_digit())
        .map_or( false, |b| (b - b'0') as u32 == checksum(line))
}

fn with_checksum (mut line: String)->String {
    line.truncate(TLE_LINE_LEN-1);
    while line.len() < TLE_LINE_LEN-1 { line.push(' ') }
    let cs = checksum(&line);
    line.push( char::from(b'0' + cs as u8));
    line
}

/// element set epoch format: 2-digit year and fractional day of year (1-based)
fn format_epoch (dt: &DateTime<Utc>)->String {
    let secs_of_day = dt.num_seconds_from_midnight() as f64 + dt.nanosecond() as f64 * 1e-9;
    let doy = dt.ordinal() as f64 + secs_of_day / 86400.0;
    format!("{:02}{:012.8}", dt.year() % 100, doy)
}

fn truncated (s: &str, max_len: usize)->&str {
    s.get(..max_len).unwrap_or(s)
}

fn column_u32 (line: &str, start: usize, end: usize)->Option<u32> {
    line.get(start..end).and_then(|s| s.trim().parse::<u32>().ok())
}

fn column_f64 (line: &str, start: usize, end: usize)->Option<f64> {
    line.get(start..end).and_then(|s| s.trim().parse::<f64>().ok())
}

/* #endregion helper functions */
