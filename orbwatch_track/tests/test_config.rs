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

use orbwatch_common::config::{config_from_str, load_config};
use orbwatch_track::{Category, CategoryPalette, Rgb, TrackerConfig};

#[test]
fn test_default_config_file () {
    let config: TrackerConfig = load_config( "configs/orbwatch.ron").unwrap();
    println!("{config:#?}");
    assert_eq!( config, TrackerConfig::default());
}

#[test]
fn test_defaults () {
    let config = TrackerConfig::default();
    assert_eq!( config.batch_size, 200);
    assert_eq!( config.path_steps, 120);
    assert_eq!( config.path_period_minutes, 95.0);
    assert_eq!( config.sources.len(), 3);
    assert_eq!( config.sources[0].category, Category::Station);

    let projection = config.projection();
    assert_eq!( projection.scale, 1.0 / 6371.0);
}

#[test]
fn test_partial_config () {
    let config: TrackerConfig = config_from_str( "inline", "( batch_size: 50, sources: [] )").unwrap();
    assert_eq!( config.batch_size, 50);
    assert!( config.sources.is_empty());
    assert_eq!( config.max_objects, 1500);
}

#[test]
fn test_palette () {
    let palette = CategoryPalette::default();
    assert_eq!( palette.color( Category::Payload).to_hex(), "#8ec8d4");
    assert_eq!( palette.color( Category::Debris).to_hex(), "#c4826a");
    assert_eq!( palette.color( Category::Station).to_hex(), "#d4cfc2");

    assert_eq!( Rgb::from_hex("#ffffff").unwrap(), Rgb([1.0, 1.0, 1.0]));
    assert!( Rgb::from_hex("#fff").is_err());
    assert!( Rgb::from_hex("#gg0000").is_err());

    let res = config_from_str::<TrackerConfig>( "inline", r##"( palette: ( payload: "red", debris: "#000000", station: "#000000" ) )"##);
    assert!( res.is_err());
}
