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

use std::f64::consts::{PI as STD_PI};

pub mod macros;
pub mod config;
pub mod geo_constants;
pub mod cartesian3;
pub mod cartographic;

// re-exported so that the logging macros resolve in crates that do not depend on tracing directly
pub use tracing;

// syntactic sugar - this is just more readable in many cases
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }
#[inline(always)] pub fn atan2(y:f64,x:f64) -> f64 { y.atan2(x) }
#[inline(always)] pub fn sqrt(x:f64) -> f64 { x.sqrt() }

pub const PI: f64 = STD_PI;
pub const HALF_PI: f64 = PI / 2.0;
pub const TWO_PI: f64 = PI * 2.0;

/// normalize radians into the [-π..π] range
#[inline]
pub fn normalize_pi (a: f64) -> f64 {
    let x = a % TWO_PI;
    if x < -PI { x + TWO_PI }
    else if x > PI { x - TWO_PI }
    else { x }
}

/// normalize radians into the [0..2π) range
#[inline]
pub fn normalize_two_pi (a: f64) -> f64 {
    let x = a % TWO_PI;
    if x < 0.0 { x + TWO_PI } else { x }
}
