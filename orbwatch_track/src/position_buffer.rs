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

//! the shared position/color buffer that is consumed by renderers.
//! The buffer is laid out for one catalog generation: slot `i` belongs to catalog index `i`, with
//! three f32 per slot in both `positions` and `colors`. Slots are zero until first written

use std::{collections::HashMap, fmt, sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, PoisonError}};
use serde::{Serialize,Deserialize};
use orbwatch_common::cartesian3::Cartesian3;
use crate::{catalog::{Catalog, Category}, errors::{op_failed, OrbwatchTrackError, Result}};

/* #region colors ***************************************************************************************/

/// linear RGB color with components in [0..1], serialized as "#rrggbb"
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(try_from="String", into="String")]
pub struct Rgb(pub [f32;3]);

impl Rgb {
    pub fn from_hex (s: &str)->Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err( op_failed!("not a #rrggbb color: {}", s))
        }

        let mut c = [0f32;3];
        for (i, v) in c.iter_mut().enumerate() {
            let b = u8::from_str_radix( &hex[i*2..i*2+2], 16).map_err(|_| op_failed!("invalid hex color {}", s))?;
            *v = b as f32 / 255.0;
        }
        Ok( Rgb(c) )
    }

    pub fn to_hex (&self)->String {
        let [r,g,b] = self.0.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = OrbwatchTrackError;
    fn try_from (s: String)->Result<Self> { Rgb::from_hex(&s) }
}

impl From<Rgb> for String {
    fn from (c: Rgb)->String { c.to_hex() }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct CategoryPalette {
    pub payload: Rgb,
    pub debris: Rgb,
    pub station: Rgb,
}

impl CategoryPalette {
    pub fn color (&self, category: Category)->Rgb {
        match category {
            Category::Payload => self.payload,
            Category::Debris => self.debris,
            Category::Station => self.station,
        }
    }
}

impl Default for CategoryPalette {
    fn default()->Self {
        CategoryPalette {
            payload: Rgb([0x8e as f32 / 255.0, 0xc8 as f32 / 255.0, 0xd4 as f32 / 255.0]),
            debris: Rgb([0xc4 as f32 / 255.0, 0x82 as f32 / 255.0, 0x6a as f32 / 255.0]),
            station: Rgb([0xd4 as f32 / 255.0, 0xcf as f32 / 255.0, 0xc2 as f32 / 255.0]),
        }
    }
}

/* #endregion colors */

/* #region buffer ***************************************************************************************/

#[derive(Debug,Clone,Default)]
pub struct PositionBuffer {
    generation: u64,
    version: u64,
    positions: Vec<f32>,
    colors: Vec<f32>,
    index: HashMap<u32,usize>,
}

impl PositionBuffer {
    pub fn new ()->Self {
        PositionBuffer::default()
    }

    /// number of slots (objects), not number of floats
    pub fn len (&self)->usize { self.positions.len() / 3 }
    pub fn is_empty (&self)->bool { self.positions.is_empty() }

    pub fn positions (&self)->&[f32] { &self.positions }
    pub fn colors (&self)->&[f32] { &self.colors }

    /// catalog generation this buffer is laid out for
    pub fn generation (&self)->u64 { self.generation }

    /// incremented each time a tick wrote to the buffer
    pub fn version (&self)->u64 { self.version }

    pub fn index_of (&self, catalog_id: u32)->Option<usize> {
        self.index.get(&catalog_id).copied()
    }

    pub fn position (&self, i: usize)->Option<[f32;3]> {
        self.positions.get(i*3..i*3+3).map(|s| [s[0], s[1], s[2]])
    }

    pub fn color (&self, i: usize)->Option<[f32;3]> {
        self.colors.get(i*3..i*3+3).map(|s| [s[0], s[1], s[2]])
    }

    pub fn is_written (&self, i: usize)->bool {
        self.position(i).is_some_and(|p| p != [0.0;3])
    }

    /// drop all slots and lay the buffer out for the given catalog
    pub(crate) fn reallocate (&mut self, catalog: &Catalog) {
        let n = catalog.len() * 3;
        self.positions = vec![0.0; n];
        self.colors = vec![0.0; n];
        self.index = catalog.iter().enumerate().map(|(i,o)| (o.catalog_id(), i)).collect();
        self.generation = catalog.generation();
        self.version += 1;
    }

    pub(crate) fn write (&mut self, i: usize, pos: &Cartesian3, color: Rgb) {
        let j = i*3;
        if j + 3 <= self.positions.len() {
            self.positions[j..j+3].copy_from_slice( &pos.to_f32_array());
            self.colors[j..j+3].copy_from_slice( &color.0);
        }
    }

    pub(crate) fn bump_version (&mut self) {
        self.version += 1;
    }
}

/// the buffer handle shared between the scheduler (single writer) and any number of readers.
/// Only the crate can obtain a write guard
#[derive(Debug,Clone,Default)]
pub struct SharedPositionBuffer(Arc<RwLock<PositionBuffer>>);

impl SharedPositionBuffer {
    pub fn new ()->Self {
        SharedPositionBuffer::default()
    }

    pub fn read (&self)->RwLockReadGuard<'_,PositionBuffer> {
        self.0.read().unwrap_or_else( PoisonError::into_inner)
    }

    pub(crate) fn write (&self)->RwLockWriteGuard<'_,PositionBuffer> {
        self.0.write().unwrap_or_else( PoisonError::into_inner)
    }
}

/* #endregion buffer */
