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

//! Holds the loaded chain definitions.

use crate::{builder, Error, Result};
use overlays_types::{ChainDefinition, ChainId};
use std::collections::HashMap;

/// chain id -> definition. Never mutated once the registry is built.
#[derive(Debug, Default)]
pub(crate) struct OverlayStore {
	chains: HashMap<ChainId, ChainDefinition>,
}

impl OverlayStore {
	/// Load every definition, failing on the first one that is rejected.
	pub(crate) fn load<I>(definitions: I) -> Result<Self>
	where
		I: IntoIterator<Item = ChainDefinition>,
	{
		let mut store = Self::default();
		for definition in definitions {
			store.insert(definition)?;
		}
		Ok(store)
	}

	/// Add one chain. The definition is checked as a whole and either added
	/// completely or not at all.
	pub(crate) fn insert(&mut self, definition: ChainDefinition) -> Result<()> {
		let chain = definition.chain_id();
		if chain.is_empty() {
			return Err(Error::EmptyChainId);
		}
		if self.chains.contains_key(chain) {
			return Err(Error::DuplicateChain(chain.clone()));
		}
		builder::validate(definition.overlays())
			.map_err(|source| Error::MalformedOverlay { chain: chain.clone(), source })?;

		log::debug!("Registered {} overlays for chain {}", definition.overlays().len(), chain);
		self.chains.insert(chain.clone(), definition);
		Ok(())
	}

	pub(crate) fn get(&self, chain: &str) -> Option<&ChainDefinition> {
		self.chains.get(chain)
	}

	pub(crate) fn contains(&self, chain: &str) -> bool {
		self.chains.contains_key(chain)
	}

	pub(crate) fn chains(&self) -> impl Iterator<Item = &ChainId> {
		self.chains.keys()
	}
}
