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

//! RON based configuration loading.
//! Config structs are plain serde types - tools that should also run without a config file use
//! [`load_config_or_default`] so that the `Default` impl carries the reference values

use std::{fs, path::Path};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error,Debug)]
pub enum ConfigError {
    #[error("IO error reading config {0}: {1}")]
    IOError( String, std::io::Error ),

    #[error("config parse error in {0}: {1}")]
    ParseError( String, ron::error::SpannedError ),
}

/// load a config struct from a RON file
pub fn load_config<C,P> (path: P) -> Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let path = path.as_ref();
    let pn = path.display().to_string();

    let data = fs::read_to_string(path).map_err(|e| ConfigError::IOError(pn.clone(), e))?;
    config_from_str( &pn, &data)
}

/// parse a config struct from a RON string. `origin` is only used for error messages
pub fn config_from_str<C> (origin: &str, data: &str) -> Result<C> where C: DeserializeOwned {
    ron::from_str(data).map_err(|e| ConfigError::ParseError(origin.to_string(), e))
}

/// load config from optional path, falling back to `C::default()` if there is none
pub fn load_config_or_default<C,P> (path: Option<P>) -> Result<C> where C: DeserializeOwned + Default, P: AsRef<Path> {
    match path {
        Some(path) => load_config(path),
        None => Ok( C::default() )
    }
}
