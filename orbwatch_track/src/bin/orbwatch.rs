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

use std::{path::PathBuf, time::Duration};
use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use orbwatch_common::{config::load_config_or_default, info, warn, error, debug};
use orbwatch_track::{
    CatalogStore, CatalogWriter, Category, PropagationScheduler, SceneProjection, SharedPositionBuffer,
    Sgp4Propagator, TrackerConfig, sample_orbit_path,
    hud::{format_utc, HudState, SelectionCard},
    loader::{acquire_catalog, finalize_catalog, load_catalog_file},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "propagate a tracked object catalog in bounded per-tick batches")]
pub struct Args {
    /// RON config file (built-in defaults if not set)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// read element sets from a local TLE file instead of the configured sources
    #[arg(short,long)]
    pub tle_file: Option<PathBuf>,

    /// catalog id of the object to select once the catalog is available
    #[arg(short,long)]
    pub select: Option<u32>,

    /// number of ticks to run (unlimited if not set)
    #[arg(short='n',long)]
    pub ticks: Option<u64>,

    /// print HUD and selection every N ticks
    #[arg(short,long, default_value_t = 60)]
    pub report_every: u64,

    /// print the effective configuration as RON and exit
    #[arg(long)]
    pub show_config: bool,
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))  // use RUST_LOG to override
        .init();

    let args = Args::parse();
    let config: TrackerConfig = load_config_or_default( args.config.as_ref())?;

    if args.show_config {
        println!("{}", ron::ser::to_string_pretty( &config, ron::ser::PrettyConfig::default())?);
        return Ok(())
    }

    let (writer, mirror, reader) = CatalogStore::new().split();
    let buffer = SharedPositionBuffer::new();
    let projection = config.projection();

    let mut scheduler = PropagationScheduler::new( Sgp4Propagator::new(), mirror, buffer.clone(), config.batch_size)
        .with_projection( projection)
        .with_palette( config.palette);

    tokio::spawn( acquire( writer, config.clone(), args.tle_file.clone(), args.select));

    let mut path_propagator = Sgp4Propagator::new();
    let mut last_selected: Option<(u64,u32)> = None;
    let report_every = args.report_every.max(1);
    let mut n_ticks = 0u64;

    let mut interval = tokio::time::interval( Duration::from_millis( config.tick_interval_ms.max(1)));
    loop {
        interval.tick().await;
        let now = Utc::now();
        let report = scheduler.tick( now);
        n_ticks += 1;

        // orbit path is only computed on selection change, never per tick. Re-selecting the same id
        // after a catalog replacement is a change since the element set might differ
        let (generation, selection) = reader.selection_with_generation();
        let selected = selection.as_ref().map(|o| (generation, o.catalog_id()));
        if selected != last_selected {
            if let Some(obj) = &selection {
                let path = sample_orbit_path( &mut path_propagator, &projection, obj.elements(), now,
                                              config.path_steps, config.path_period_minutes);
                if path.is_drawable() {
                    info!("orbit path for {}: {} points ({} omitted)", obj.catalog_id(), path.len(), path.omitted);
                } else {
                    warn!("no drawable orbit path for {}", obj.catalog_id());
                }
            }
            last_selected = selected;
        }

        if n_ticks % report_every == 0 {
            debug!("{:?}", report);
            println!("{} | {}", format_utc(now), HudState::from_reader( &reader));
            if let Some(card) = SelectionCard::from_reader( &reader) {
                println!("{card}");
            }
        }

        if args.ticks.is_some_and(|max| n_ticks >= max) {
            break;
        }
    }

    Ok(())
}

async fn acquire (writer: CatalogWriter, config: TrackerConfig, tle_file: Option<PathBuf>, select: Option<u32>) {
    writer.set_loading( true);

    let objects = if let Some(path) = tle_file {
        let (objects, ok) = match load_catalog_file( &path, Category::Payload) {
            Ok(objects) => (objects, true),
            Err(e) => {
                warn!("failed to read {:?}: {}", path, e);
                (Vec::new(), false)
            }
        };
        finalize_catalog( objects, ok, &config, Utc::now(), &mut rand::rng())
    } else {
        match acquire_catalog( &config).await {
            Ok(objects) => objects,
            Err(e) => {
                error!("catalog unavailable: {}", e);
                writer.set_loading( false);
                return
            }
        }
    };

    match writer.replace_catalog( objects) {
        Ok(_) => {
            if let Some(id) = select {
                if !writer.select_by_id( id) {
                    warn!("no object {} in catalog", id);
                }
            }
        }
        Err(e) => {
            error!("catalog rejected: {}", e);
            writer.set_loading( false);
        }
    }
}
