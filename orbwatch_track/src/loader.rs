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

//! catalog acquisition: TLE text parsing, concurrent source retrieval, synthetic fallback data,
//! down-sampling and de-duplication.
//! Acquisition does not retry failed sources - a source that fails is just not part of the catalog

use std::{collections::HashSet, fs, path::Path, sync::LazyLock, time::Duration};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use rand::{Rng, seq::SliceRandom};
use regex::Regex;
use reqwest::Client;
use orbwatch_common::{debug, info, warn};
use crate::{
    catalog::{Category, TrackedObject},
    config::{CatalogSource, SyntheticConfig, TrackerConfig},
    elements::{ElementSet, MeanElements},
    errors::Result,
};

pub const ISS_CATALOG_ID: u32 = 25544;

/// regex to extract element set lines from JSON (gp) responses. We don't parse the whole JSON structure
/// since all we need are the three lines
pub static TLE_LINES_RE: LazyLock<Regex> = LazyLock::new(||
    Regex::new( r#""TLE_LINE0": *"(.+?)",\s*"TLE_LINE1": *"(.+?)",\s*"TLE_LINE2": *"(.+?)""#).unwrap()
);

/* #region parsing **************************************************************************************/

/// parse three-line (name, line 1, line 2) element set text, or JSON records with TLE_LINE0..2 fields.
/// Groups that are not valid element sets are skipped
pub fn parse_tle_text (text: &str, category: Category)->Vec<TrackedObject> {
    let text = text.trim();
    if text.starts_with('[') || text.starts_with('{') {
        TLE_LINES_RE.captures_iter(text)
            .filter_map(|caps| to_tracked_object( &caps[1], &caps[2], &caps[3], category))
            .collect()
    } else {
        let lines: Vec<&str> = text.lines().map(|l| l.trim()).collect();
        lines.chunks_exact(3)
            .filter_map(|group| to_tracked_object( group[0], group[1], group[2], category))
            .collect()
    }
}

fn to_tracked_object (line0: &str, line1: &str, line2: &str, category: Category)->Option<TrackedObject> {
    if !line1.starts_with("1 ") || !line2.starts_with("2 ") {
        return None
    }

    match ElementSet::from_lines( line1, line2) {
        Ok(elements) => {
            let name = line0.trim().strip_prefix("0 ").unwrap_or( line0.trim());
            let category = if name.contains("ISS") { Category::Station } else { category };
            Some( TrackedObject::new( name, category, elements))
        }
        Err(e) => {
            debug!("skipping element set {}: {}", line0, e);
            None
        }
    }
}

/// read a local element set file
pub fn load_catalog_file (path: impl AsRef<Path>, category: Category)->Result<Vec<TrackedObject>> {
    let text = fs::read_to_string( path.as_ref())?;
    Ok( parse_tle_text( &text, category) )
}

/* #endregion parsing */

/* #region retrieval ************************************************************************************/

pub async fn fetch_source (client: &Client, source: &CatalogSource)->Result<Vec<TrackedObject>> {
    let response = client.get( &source.url).send().await?.error_for_status()?;
    let text = response.text().await?;
    Ok( parse_tle_text( &text, source.category) )
}

/// retrieve all sources concurrently. Failed sources are logged and skipped. The returned flag
/// indicates if any source succeeded
pub async fn fetch_catalog (client: &Client, sources: &[CatalogSource])->(Vec<TrackedObject>,bool) {
    let results = join_all( sources.iter().map(|src| fetch_source( client, src))).await;

    let mut objects = Vec::new();
    let mut any_success = false;
    for (src, res) in sources.iter().zip( results.into_iter()) {
        match res {
            Ok(mut list) => {
                debug!("retrieved {} element sets from {}", list.len(), src.url);
                objects.append( &mut list);
                any_success = true;
            }
            Err(e) => warn!("failed to retrieve {}: {}", src.url, e)
        }
    }

    (objects, any_success)
}

/// get a catalog from the configured sources, falling back to synthetic data if nothing (or not
/// enough) could be retrieved. The result is sampled down to `max_objects` and de-duplicated
pub async fn acquire_catalog (config: &TrackerConfig)->Result<Vec<TrackedObject>> {
    let client = Client::builder()
        .timeout( Duration::from_secs( config.request_timeout_secs))
        .build()?;

    let (fetched, any_success) = fetch_catalog( &client, &config.sources).await;
    Ok( finalize_catalog( fetched, any_success, config, Utc::now(), &mut rand::rng()) )
}

/// fallback, sampling and de-duplication of retrieved objects
pub fn finalize_catalog<R: Rng + ?Sized> (objects: Vec<TrackedObject>, any_success: bool, config: &TrackerConfig,
                                         now: DateTime<Utc>, rng: &mut R)->Vec<TrackedObject> {
    let objects = if !any_success || objects.len() < config.min_fetched {
        warn!("insufficient catalog data ({} objects), using synthetic element sets", objects.len());
        synthetic_catalog( &config.synthetic, now, rng)
    } else {
        info!("retrieved {} element sets", objects.len());
        objects
    };

    dedup_catalog( sample_catalog( objects, config.max_objects, rng))
}

/* #endregion retrieval */

/* #region post processing ******************************************************************************/

/// if there are more than `max` objects keep all stations and a random sample of the rest
pub fn sample_catalog<R: Rng + ?Sized> (objects: Vec<TrackedObject>, max: usize, rng: &mut R)->Vec<TrackedObject> {
    if objects.len() <= max {
        return objects
    }

    let (mut stations, mut others): (Vec<TrackedObject>,Vec<TrackedObject>) =
        objects.into_iter().partition(|o| o.category() == Category::Station);

    others.shuffle( rng);
    others.truncate( max.saturating_sub( stations.len()));
    stations.append( &mut others);
    stations
}

/// keep the first object for each catalog id, preserving order
pub fn dedup_catalog (objects: Vec<TrackedObject>)->Vec<TrackedObject> {
    let mut seen = HashSet::with_capacity( objects.len());
    objects.into_iter().filter(|o| seen.insert( o.catalog_id())).collect()
}

/* #endregion post processing */

/* #region synthetic data *******************************************************************************/

/// the ISS plus randomly generated payloads (ids 40000+) and debris (ids 50000+), all with epoch `now`
pub fn synthetic_catalog<R: Rng + ?Sized> (config: &SyntheticConfig, now: DateTime<Utc>, rng: &mut R)->Vec<TrackedObject> {
    let mut objects = Vec::with_capacity( 1 + config.payloads + config.debris);

    let iss = MeanElements {
        catalog_number: ISS_CATALOG_ID,
        designator: "98067A".to_string(),
        epoch: now,
        inclination: 51.64,
        raan: 208.9163,
        eccentricity: 0.0006703,
        arg_of_perigee: 274.4781,
        mean_anomaly: 85.5758,
        mean_motion: 15.4956,
        element_set_number: 999,
        rev_number: 0,
    };
    objects.push( TrackedObject::new( "ISS (ZARYA)", Category::Station, ElementSet::format(&iss)));

    for i in 0..config.payloads {
        let catalog_number = 40000 + i as u32;
        let elems = random_elements( rng, catalog_number, "20001A", now, 20.0..100.0, 0.02, 14.0..16.0, i);
        objects.push( TrackedObject::new( format!("SAT-{catalog_number}"), Category::Payload, ElementSet::format(&elems)));
    }

    for i in 0..config.debris {
        let catalog_number = 50000 + i as u32;
        let elems = random_elements( rng, catalog_number, "99025A", now, 30.0..100.0, 0.05, 13.5..16.0, i);
        objects.push( TrackedObject::new( format!("DEB-{catalog_number}"), Category::Debris, ElementSet::format(&elems)));
    }

    objects
}

fn random_elements<R: Rng + ?Sized> (rng: &mut R, catalog_number: u32, designator: &str, epoch: DateTime<Utc>,
                                    inclination: std::ops::Range<f64>, max_ecc: f64, mean_motion: std::ops::Range<f64>,
                                    i: usize)->MeanElements {
    MeanElements {
        catalog_number,
        designator: designator.to_string(),
        epoch,
        inclination: rng.random_range( inclination),
        raan: rng.random_range( 0.0..360.0),
        eccentricity: rng.random_range( 0.0..max_ecc),
        arg_of_perigee: rng.random_range( 0.0..360.0),
        mean_anomaly: rng.random_range( 0.0..360.0),
        mean_motion: rng.random_range( mean_motion),
        element_set_number: 9990 + (i % 10) as u32,
        rev_number: 1,
    }
}

/* #endregion synthetic data */
