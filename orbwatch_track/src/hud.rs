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

//! derived UI state: HUD status line and selection card. These are pure functions of the catalog
//! store contents and carry no state of their own

use std::fmt;
use chrono::{DateTime, Utc};
use crate::{
    catalog::{Category, CategoryCounts, DerivedState, TrackedObject},
    catalog_store::CatalogReader,
};

pub fn format_utc (t: DateTime<Utc>)->String {
    t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// decimal with ',' thousands separators
fn group_thousands (n: usize)->String {
    let digits = n.to_string();
    let mut s = String::with_capacity( digits.len() + digits.len()/3);
    for (i,c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { s.push(',') }
        s.push(c);
    }
    s
}

#[derive(Debug,Clone,PartialEq)]
pub struct HudState {
    pub counts: CategoryCounts,
    pub loading: bool,
}

impl HudState {
    pub fn from_reader (reader: &CatalogReader)->Self {
        HudState { counts: reader.counts(), loading: reader.is_loading() }
    }

    pub fn total_tracked (&self)->usize {
        self.counts.total()
    }
}

impl fmt::Display for HudState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loading {
            write!(f, "ACQUIRING DATA...")
        } else {
            write!(f, "SATELLITES {} | DEBRIS {} | STATIONS {} | TOTAL TRACKED {}",
                group_thousands(self.counts.payload), group_thousands(self.counts.debris),
                group_thousands(self.counts.station), group_thousands(self.total_tracked()))
        }
    }
}

pub fn category_label (category: Category)->&'static str {
    match category {
        Category::Payload => "ACTIVE SATELLITE",
        Category::Debris => "SPACE DEBRIS",
        Category::Station => "SPACE STATION",
    }
}

/// display fields of the selected object. Position rows only exist once the object was propagated
#[derive(Debug,Clone,PartialEq)]
pub struct SelectionCard {
    pub label: &'static str,
    pub name: String,
    pub rows: Vec<(&'static str,String)>,
}

impl SelectionCard {
    pub fn from_object (obj: &TrackedObject)->Self {
        let designator = if obj.designator().is_empty() { "—" } else { obj.designator() };
        let mut rows = vec![
            ("NORAD ID", obj.catalog_id().to_string()),
            ("INTL DES", designator.to_string()),
        ];

        if let DerivedState::Propagated(s) = obj.derived() {
            rows.push( ("ALTITUDE", format!("{:.1} km", s.altitude_km)));
            rows.push( ("VELOCITY", format!("{:.2} km/s", s.speed_km_s)));
            rows.push( ("LATITUDE", format!("{:.4}°", s.latitude_deg)));
            rows.push( ("LONGITUDE", format!("{:.4}°", s.longitude_deg)));
        }

        SelectionCard { label: category_label( obj.category()), name: obj.name().to_string(), rows }
    }

    pub fn from_reader (reader: &CatalogReader)->Option<Self> {
        reader.selection().as_ref().map( SelectionCard::from_object)
    }

    pub fn value (&self, key: &str)->Option<&str> {
        self.rows.iter().find(|(k,_)| *k == key).map(|(_,v)| v.as_str())
    }
}

impl fmt::Display for SelectionCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.name)?;
        for (k,v) in &self.rows {
            write!(f, "\n  {:<10} {}", k, v)?;
        }
        Ok(())
    }
}
