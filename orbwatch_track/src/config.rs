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

use serde::{Serialize,Deserialize};
use crate::{
    catalog::Category,
    position_buffer::CategoryPalette,
    projector::SceneProjection,
    scheduler::DEFAULT_BATCH_SIZE,
    path_sampler::{DEFAULT_PATH_STEPS, DEFAULT_PATH_PERIOD_MINUTES},
};

const CELESTRAK_GP: &str = "https://celestrak.org/NORAD/elements/gp.php";

/// a TLE text source and the category its objects are assigned to
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CatalogSource {
    pub url: String,
    pub category: Category,
}

impl CatalogSource {
    pub fn celestrak_group (group: &str, category: Category)->Self {
        CatalogSource { url: format!("{CELESTRAK_GP}?GROUP={group}&FORMAT=tle"), category }
    }
}

/// size of the generated fallback catalog (which always includes the ISS)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct SyntheticConfig {
    pub payloads: usize,
    pub debris: usize,
}

impl Default for SyntheticConfig {
    fn default()->Self {
        SyntheticConfig { payloads: 600, debris: 400 }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub batch_size: usize,        // objects propagated per tick
    pub tick_interval_ms: u64,
    pub earth_radius_km: f64,     // maps to one scene unit

    pub path_steps: usize,
    pub path_period_minutes: f64,

    pub palette: CategoryPalette,

    pub sources: Vec<CatalogSource>,
    pub min_fetched: usize,       // below that we fall back to synthetic data
    pub max_objects: usize,       // larger catalogs are sampled down (stations are always kept)
    pub synthetic: SyntheticConfig,
    pub request_timeout_secs: u64,
}

impl TrackerConfig {
    pub fn projection (&self)->SceneProjection {
        SceneProjection::normalized( self.earth_radius_km)
    }
}

impl Default for TrackerConfig {
    fn default()->Self {
        TrackerConfig {
            batch_size: DEFAULT_BATCH_SIZE,
            tick_interval_ms: 16,
            earth_radius_km: 6371.0,
            path_steps: DEFAULT_PATH_STEPS,
            path_period_minutes: DEFAULT_PATH_PERIOD_MINUTES,
            palette: CategoryPalette::default(),
            sources: vec![
                CatalogSource::celestrak_group( "stations", Category::Station),
                CatalogSource::celestrak_group( "active", Category::Payload),
                CatalogSource::celestrak_group( "cosmos-2251-debris", Category::Debris),
            ],
            min_fetched: 10,
            max_objects: 1500,
            synthetic: SyntheticConfig::default(),
            request_timeout_secs: 30,
        }
    }
}
