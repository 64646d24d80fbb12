// Copyright 2019-2021 Parity Technologies (UK) Ltd.
// This file is part of substrate-desub.
//
// substrate-desub is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// substrate-desub is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with substrate-desub.  If not, see <http://www.gnu.org/licenses/>.

use overlays_types::{TypeLookup, TypeSpec};
use serde::Serialize;
use std::collections::{btree_map, BTreeMap};

/// The merged type definitions of one chain at one spec version.
///
/// This is what gets handed to the codec. Definitions are kept ordered by
/// name, so two registries with the same contents iterate identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EffectiveRegistry {
	types: BTreeMap<String, TypeSpec>,
}

impl EffectiveRegistry {
	pub(crate) fn new(types: BTreeMap<String, TypeSpec>) -> Self {
		Self { types }
	}

	pub fn get(&self, ty: &str) -> Option<&TypeSpec> {
		self.types.get(ty)
	}

	pub fn contains(&self, ty: &str) -> bool {
		self.types.contains_key(ty)
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, TypeSpec> {
		self.types.iter()
	}

	/// Names of all defined types, in ascending order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.types.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

impl TypeLookup for EffectiveRegistry {
	fn get(&self, ty: &str) -> Option<&TypeSpec> {
		self.types.get(ty)
	}
}

impl<'a> IntoIterator for &'a EffectiveRegistry {
	type Item = (&'a String, &'a TypeSpec);
	type IntoIter = btree_map::Iter<'a, String, TypeSpec>;

	fn into_iter(self) -> Self::IntoIter {
		self.types.iter()
	}
}
