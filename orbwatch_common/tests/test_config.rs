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

use serde::Deserialize;
use orbwatch_common::config::{config_from_str, load_config, load_config_or_default, ConfigError};

#[derive(Debug,Deserialize,PartialEq)]
struct TestConfig {
    name: String,
    batch: usize,
}

impl Default for TestConfig {
    fn default()->Self { TestConfig { name: "default".into(), batch: 200 } }
}

#[test]
fn test_parse_ron () {
    let cfg: TestConfig = config_from_str( "inline", r#"( name: "foo", batch: 42 )"#).unwrap();
    assert_eq!( cfg, TestConfig{ name: "foo".into(), batch: 42 });
}

#[test]
fn test_parse_error () {
    let res: Result<TestConfig,ConfigError> = config_from_str( "inline", "( name: 42 )");
    assert!( matches!( res, Err(ConfigError::ParseError(..))));
}

#[test]
fn test_missing_file () {
    let res: Result<TestConfig,ConfigError> = load_config( "does/not/exist.ron");
    assert!( matches!( res, Err(ConfigError::IOError(..))));

    let cfg: TestConfig = load_config_or_default::<TestConfig,&str>( None).unwrap();
    assert_eq!( cfg.batch, 200);
}
