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

//! Data model for versioned runtime type overlays.
//!
//! A chain publishes an ordered list of [`Overlay`]s, each a partial set of
//! type definitions valid for an inclusive [`VersionRange`] of runtime spec
//! versions. The types in here carry no resolution logic; they are the shape
//! both the loaders and the resolver agree on.

#![forbid(unsafe_code)]
mod error;
mod overlay;
pub mod regex;
mod type_spec;

pub use self::error::{MalformedOverlay, Result};
pub use self::overlay::{ChainDefinition, Overlay, VersionRange};
pub use self::type_spec::{Discriminant, EnumVariant, Primitive, StructField, TypeSpec};
pub use overlays_common::{ChainId, SpecVersion};

/// Anything that can hand out type definitions by name.
///
/// This is the seam consumed by a codec: it asks for a type when it needs to
/// decode a value of that type, and treats a `None` as a missing definition.
pub trait TypeLookup {
	/// Get the definition registered under `ty`.
	fn get(&self, ty: &str) -> Option<&TypeSpec>;

	/// Follow a chain of [`TypeSpec::Alias`] definitions until reaching one
	/// that is not an alias.
	///
	/// Returns `None` if a name along the chain is not defined, or if the
	/// aliases form a cycle.
	fn resolve_alias(&self, ty: &str) -> Option<&TypeSpec> {
		let mut current = self.get(ty)?;
		let mut seen = vec![ty];
		while let TypeSpec::Alias(next) = current {
			if seen.contains(&next.as_str()) {
				log::debug!("alias cycle detected while resolving {}", ty);
				return None;
			}
			seen.push(next.as_str());
			current = self.get(next)?;
		}
		Some(current)
	}
}

impl TypeLookup for std::collections::BTreeMap<String, TypeSpec> {
	fn get(&self, ty: &str) -> Option<&TypeSpec> {
		std::collections::BTreeMap::get(self, ty)
	}
}
