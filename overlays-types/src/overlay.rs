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

use crate::{ChainId, MalformedOverlay, Result, SpecVersion, TypeSpec};
use serde::Serialize;
use std::collections::BTreeMap;

/// Inclusive range of runtime spec versions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VersionRange {
	min: SpecVersion,
	/// `None` means the range has no upper bound.
	max: Option<SpecVersion>,
}

impl VersionRange {
	pub fn new(min: SpecVersion, max: Option<SpecVersion>) -> Result<Self> {
		match max {
			Some(max) if max < min => Err(MalformedOverlay::InvalidRange { min, max }),
			_ => Ok(Self { min, max }),
		}
	}

	/// All versions from `min` onwards.
	pub fn starting_at(min: SpecVersion) -> Self {
		Self { min, max: None }
	}

	/// Every version.
	pub fn all() -> Self {
		Self::starting_at(0)
	}

	pub fn min(&self) -> SpecVersion {
		self.min
	}

	pub fn max(&self) -> Option<SpecVersion> {
		self.max
	}

	pub fn contains(&self, version: SpecVersion) -> bool {
		version >= self.min && self.max.map_or(true, |max| version <= max)
	}
}

/// A partial set of type definitions, valid for a range of spec versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlay {
	range: VersionRange,
	/// Type Name -> Type
	types: BTreeMap<String, TypeSpec>,
}

impl Overlay {
	/// Construct an overlay from its definitions.
	///
	/// Fails if a type name is empty or appears more than once. The
	/// definitions themselves are validated when a chain is loaded.
	pub fn new<S, I>(range: VersionRange, types: I) -> Result<Self>
	where
		S: Into<String>,
		I: IntoIterator<Item = (S, TypeSpec)>,
	{
		let mut map = BTreeMap::new();
		for (name, spec) in types {
			let name = name.into();
			if name.is_empty() {
				return Err(MalformedOverlay::EmptyTypeName);
			}
			if map.contains_key(&name) {
				return Err(MalformedOverlay::DuplicateType(name));
			}
			map.insert(name, spec);
		}
		Ok(Self { range, types: map })
	}

	pub fn range(&self) -> &VersionRange {
		&self.range
	}

	pub fn applies_to(&self, version: SpecVersion) -> bool {
		self.range.contains(version)
	}

	pub fn get(&self, ty: &str) -> Option<&TypeSpec> {
		self.types.get(ty)
	}

	/// Iterate over the definitions, ordered by type name.
	pub fn types(&self) -> impl Iterator<Item = (&String, &TypeSpec)> {
		self.types.iter()
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	/// Check every definition in this overlay.
	pub fn validate(&self) -> Result<()> {
		self.types.iter().try_for_each(|(name, spec)| spec.validate(name))
	}
}

/// All overlays a chain publishes, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDefinition {
	chain_id: ChainId,
	overlays: Vec<Overlay>,
}

impl ChainDefinition {
	pub fn new<C: Into<ChainId>>(chain_id: C, overlays: Vec<Overlay>) -> Self {
		Self { chain_id: chain_id.into(), overlays }
	}

	pub fn chain_id(&self) -> &ChainId {
		&self.chain_id
	}

	/// The overlays, in the order they were declared.
	pub fn overlays(&self) -> &[Overlay] {
		&self.overlays
	}

	/// Check every overlay of this chain.
	pub fn validate(&self) -> Result<()> {
		self.overlays.iter().try_for_each(Overlay::validate)
	}
}
