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

use std::ops::Mul;
use serde::{Serialize,Deserialize};
use crate::{sin, cos};

/// a plain 3d vector without unit semantics. It is used for inertial (TEME) and earth fixed
/// state vectors (km, km/s) as well as for renderer scene coordinates (earth radius = 1)
#[derive(Debug,Clone,Copy,PartialEq,Default,Serialize,Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl Cartesian3 {
    pub fn new (x: f64, y: f64, z: f64)->Cartesian3 {
        Cartesian3{x,y,z}
    }

    pub fn is_zero (&self)->bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    pub fn is_finite (&self)->bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn dot (&self, p: &Cartesian3) -> f64 {
        (self.x * p.x) + (self.y * p.y) + (self.z * p.z)
    }

    pub fn length (&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// rotate around the z-axis by `angle` radians, i.e. rotate the coordinate frame by `-angle`.
    /// This is what turns inertial into earth fixed coordinates when called with the negated sidereal angle
    pub fn rotated_z (&self, angle: f64) -> Cartesian3 {
        let (s, c) = (sin(angle), cos(angle));
        Cartesian3 {
            x: c * self.x - s * self.y,
            y: s * self.x + c * self.y,
            z: self.z
        }
    }

    /// lossy conversion into renderer precision
    pub fn to_f32_array (&self) -> [f32;3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

impl std::fmt::Display for Cartesian3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

impl Mul<f64> for Cartesian3 {
    type Output = Self;

    fn mul (self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}
