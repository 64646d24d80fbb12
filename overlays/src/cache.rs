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

//! Memoizes resolved registries per `(chain, spec version)`.
//!
//! Entries are never evicted: chain definitions cannot change while the cache
//! is alive, so a key always maps to the same registry. Replacing the
//! definitions requires clearing the whole cache.

use crate::EffectiveRegistry;
use overlays_types::{ChainId, SpecVersion};
use parking_lot::RwLock;
use std::{
	collections::HashMap,
	sync::{
		atomic::{AtomicU64, Ordering},
		Arc,
	},
};

/// Counters describing how the cache has been used.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
	/// Resolutions answered from the cache.
	pub hits: u64,
	/// Times a registry was built. Two threads missing the same key at once
	/// both build, so this can exceed `entries`.
	pub builds: u64,
	/// Cached `(chain, spec version)` pairs.
	pub entries: usize,
}

#[derive(Debug, Default)]
pub(crate) struct ResolutionCache {
	// chain -> spec version -> registry
	entries: RwLock<HashMap<ChainId, HashMap<SpecVersion, Arc<EffectiveRegistry>>>>,
	hits: AtomicU64,
	builds: AtomicU64,
}

impl ResolutionCache {
	/// Return the cached registry for `(chain, version)`, or build and cache it.
	///
	/// No lock is held while `build` runs. If another caller inserted the same
	/// key in the meantime, its registry is kept and returned; both are equal.
	pub(crate) fn get_or_build<F, E>(
		&self,
		chain: &ChainId,
		version: SpecVersion,
		build: F,
	) -> Result<Arc<EffectiveRegistry>, E>
	where
		F: FnOnce() -> Result<EffectiveRegistry, E>,
	{
		if let Some(registry) = self.get(chain.as_str(), version) {
			self.hits.fetch_add(1, Ordering::Relaxed);
			return Ok(registry);
		}

		log::trace!("Building registry for {} at spec {}", chain, version);
		let built = build()?;
		self.builds.fetch_add(1, Ordering::Relaxed);

		let mut entries = self.entries.write();
		let registry = entries.entry(chain.clone()).or_default().entry(version).or_insert_with(|| Arc::new(built));
		Ok(Arc::clone(registry))
	}

	fn get(&self, chain: &str, version: SpecVersion) -> Option<Arc<EffectiveRegistry>> {
		self.entries.read().get(chain)?.get(&version).cloned()
	}

	/// Drop every entry.
	pub(crate) fn clear(&self) {
		self.entries.write().clear();
	}

	pub(crate) fn stats(&self) -> CacheStats {
		CacheStats {
			hits: self.hits.load(Ordering::Relaxed),
			builds: self.builds.load(Ordering::Relaxed),
			entries: self.entries.read().values().map(HashMap::len).sum(),
		}
	}
}
