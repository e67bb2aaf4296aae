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

//! the tracked object catalog: identity, category and the (optional) derived state of each object.
//! Objects inside a [`Catalog`] snapshot are never updated, their derived state is kept by the catalog store

use std::{collections::HashMap, fmt};
use serde::{Serialize,Deserialize};
use crate::{elements::ElementSet, projector::PropagatedState, errors::{OrbwatchTrackError, Result}};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
#[serde(rename_all="UPPERCASE")]
pub enum Category {
    Payload,
    Debris,
    Station,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Payload => write!(f, "PAYLOAD"),
            Category::Debris => write!(f, "DEBRIS"),
            Category::Station => write!(f, "STATION"),
        }
    }
}

/// an object that was never successfully propagated has no position, which we keep explicit
#[derive(Debug,Clone,Copy,PartialEq,Default)]
pub enum DerivedState {
    #[default]
    Unpropagated,
    Propagated(PropagatedState),
}

impl DerivedState {
    pub fn is_propagated (&self)->bool {
        matches!( self, DerivedState::Propagated(_))
    }

    pub fn state (&self)->Option<&PropagatedState> {
        match self {
            DerivedState::Propagated(s) => Some(s),
            DerivedState::Unpropagated => None
        }
    }
}

/// one orbiting body. Identity fields are fixed at ingestion, only the derived state changes
#[derive(Debug,Clone,PartialEq)]
pub struct TrackedObject {
    catalog_id: u32,
    name: String,
    category: Category,
    designator: String,
    elements: ElementSet,
    derived: DerivedState,
}

impl TrackedObject {
    /// catalog id and designator are taken from the element set
    pub fn new (name: impl ToString, category: Category, elements: ElementSet)->Self {
        TrackedObject {
            catalog_id: elements.catalog_number(),
            name: name.to_string(),
            category,
            designator: elements.international_designator().to_string(),
            elements,
            derived: DerivedState::Unpropagated,
        }
    }

    pub fn catalog_id (&self)->u32 { self.catalog_id }
    pub fn name (&self)->&str { &self.name }
    pub fn category (&self)->Category { self.category }
    pub fn designator (&self)->&str { &self.designator }
    pub fn elements (&self)->&ElementSet { &self.elements }
    pub fn derived (&self)->&DerivedState { &self.derived }

    pub fn with_category (mut self, category: Category)->Self {
        self.category = category;
        self
    }

    pub(crate) fn set_derived (&mut self, state: DerivedState) {
        self.derived = state;
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub struct CategoryCounts {
    pub payload: usize,
    pub debris: usize,
    pub station: usize,
}

impl CategoryCounts {
    pub fn from_objects<'a> (objects: impl IntoIterator<Item=&'a TrackedObject>)->Self {
        let mut counts = CategoryCounts::default();
        for o in objects {
            match o.category {
                Category::Payload => counts.payload += 1,
                Category::Debris => counts.debris += 1,
                Category::Station => counts.station += 1,
            }
        }
        counts
    }

    pub fn total (&self)->usize {
        self.payload + self.debris + self.station
    }
}

/// ordered, index-stable list of tracked objects for one catalog generation.
/// Catalog ids are unique, the id->index map is built once on construction
#[derive(Debug,Clone,Default)]
pub struct Catalog {
    generation: u64,
    objects: Vec<TrackedObject>,
    index: HashMap<u32,usize>,
}

impl Catalog {
    pub fn new (generation: u64, objects: Vec<TrackedObject>)->Result<Self> {
        let mut index = HashMap::with_capacity( objects.len());
        for (i,o) in objects.iter().enumerate() {
            if index.insert( o.catalog_id, i).is_some() {
                return Err( OrbwatchTrackError::DuplicateCatalogId( o.catalog_id))
            }
        }
        Ok( Catalog { generation, objects, index } )
    }

    pub fn generation (&self)->u64 { self.generation }
    pub fn len (&self)->usize { self.objects.len() }
    pub fn is_empty (&self)->bool { self.objects.is_empty() }
    pub fn objects (&self)->&[TrackedObject] { &self.objects }
    pub fn iter (&self)->impl Iterator<Item=&TrackedObject> { self.objects.iter() }

    pub fn get (&self, i: usize)->Option<&TrackedObject> {
        self.objects.get(i)
    }

    pub fn index_of (&self, catalog_id: u32)->Option<usize> {
        self.index.get(&catalog_id).copied()
    }

    pub fn get_by_id (&self, catalog_id: u32)->Option<&TrackedObject> {
        self.index_of(catalog_id).and_then(|i| self.objects.get(i))
    }

    pub fn counts (&self)->CategoryCounts {
        CategoryCounts::from_objects( &self.objects)
    }
}
