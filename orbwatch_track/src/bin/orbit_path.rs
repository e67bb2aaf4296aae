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

use std::path::PathBuf;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use orbwatch_common::config::load_config_or_default;
use orbwatch_track::{Category, Sgp4Propagator, TrackerConfig, sample_orbit_path, loader::load_catalog_file};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "print the sampled orbit path of one object from a TLE file")]
pub struct Args {
    /// RON config file (built-in defaults if not set)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// number of steps (default from config)
    #[arg(short,long)]
    pub steps: Option<usize>,

    /// assumed orbital period in minutes (default from config)
    #[arg(short,long)]
    pub period: Option<f64>,

    /// start of the path (RFC 3339), defaults to now
    #[arg(long)]
    pub start: Option<DateTime<Utc>>,

    /// 3-line TLE file
    #[arg(short,long)]
    pub tle_file: PathBuf,

    /// catalog id of the object
    #[arg(short,long)]
    pub id: u32,
}

fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config: TrackerConfig = load_config_or_default( args.config.as_ref())?;

    let objects = load_catalog_file( &args.tle_file, Category::Payload)?;
    let obj = objects.iter().find(|o| o.catalog_id() == args.id)
        .ok_or_else(|| anyhow!("no object {} in {:?}", args.id, args.tle_file))?;

    let start = args.start.unwrap_or_else( Utc::now);
    let steps = args.steps.unwrap_or( config.path_steps);
    let period = args.period.unwrap_or( config.path_period_minutes);

    let path = sample_orbit_path( &mut Sgp4Propagator::new(), &config.projection(), obj.elements(), start, steps, period);

    println!("# {} ({}) from {} over {} min, {} points, {} omitted", obj.name(), obj.catalog_id(), start, period, path.len(), path.omitted);
    for p in &path.points {
        println!("{:.6} {:.6} {:.6}", p.x, p.y, p.z);
    }
    if !path.is_drawable() {
        eprintln!("path has less than 2 points");
    }

    Ok(())
}
