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

//! Merges applicable overlays into one registry.
//!
//! Overlays are applied strictly in the order given. Each definition replaces
//! any earlier definition of the same name as a whole: an overlay that
//! redefines `Keys` does not patch the fields of the previous `Keys`, it
//! swaps it out. Consequently the overlay declared last wins, whatever the
//! width of its range.
//!
//! Names referenced from inside a definition are not checked for existence.
//! A dangling reference surfaces only when a codec asks for the missing type.

use crate::EffectiveRegistry;
use overlays_types::{MalformedOverlay, Overlay};
use std::collections::BTreeMap;

/// Check the structural invariants of every overlay.
pub(crate) fn validate<'a, I>(overlays: I) -> Result<(), MalformedOverlay>
where
	I: IntoIterator<Item = &'a Overlay>,
{
	overlays.into_iter().try_for_each(Overlay::validate)
}

/// Build the effective registry from overlays that are already in merge order.
///
/// The overlays must have passed [`validate`] when their chain was loaded.
pub(crate) fn build<'a, I>(applicable: I) -> EffectiveRegistry
where
	I: IntoIterator<Item = &'a Overlay>,
{
	let mut types = BTreeMap::new();
	for overlay in applicable {
		for (name, spec) in overlay.types() {
			if types.insert(name.clone(), spec.clone()).is_some() {
				log::trace!("{} redefined by overlay starting at spec {}", name, overlay.range().min());
			}
		}
	}
	EffectiveRegistry::new(types)
}
