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

//! Resolve the type registry of a chain at a given runtime spec version.
//!
//! Chains change the shape of their on-wire types with runtime upgrades. Each
//! chain therefore publishes an ordered list of overlays, every overlay a set
//! of type definitions valid for a range of spec versions. [`TypeRegistry`]
//! merges the overlays that apply to a version into an [`EffectiveRegistry`]
//! a codec can decode with.
//!
//! ```ignore
//! let registry = TypeRegistry::default();
//! let types = registry.resolve("kulupu", 13)?;
//! assert_eq!(types.get("Address"), Some(&TypeSpec::alias("MultiAddress")));
//! ```
//!
//! Precedence between overlays is purely by declaration order: when two
//! applicable overlays define the same type, the one declared later wins, no
//! matter how narrow or wide either range is.

#![forbid(unsafe_code)]
mod builder;
mod cache;
mod error;
mod matcher;
mod registry;
mod store;

pub use self::cache::CacheStats;
pub use self::error::{Error, Result};
pub use self::registry::EffectiveRegistry;
pub use overlays_types::{
	ChainDefinition, ChainId, Discriminant, EnumVariant, MalformedOverlay, Overlay, Primitive, SpecVersion,
	StructField, TypeLookup, TypeSpec, VersionRange,
};

#[cfg(feature = "json")]
pub use overlays_json;

use self::{cache::ResolutionCache, store::OverlayStore};
use std::{fmt, sync::Arc};

/// Entry point for resolving chain type registries.
///
/// Safe to share between threads; resolutions are cached per
/// `(chain, spec version)` for the lifetime of the registry.
#[derive(Debug)]
pub struct TypeRegistry {
	store: OverlayStore,
	cache: ResolutionCache,
}

impl TypeRegistry {
	/// Construct the registry from chain definitions.
	///
	/// Fails if any chain is malformed, has an empty id, or is defined twice.
	pub fn new<I>(definitions: I) -> Result<Self>
	where
		I: IntoIterator<Item = ChainDefinition>,
	{
		Ok(Self { store: OverlayStore::load(definitions)?, cache: ResolutionCache::default() })
	}

	/// Construct the registry from every chain that can be loaded.
	///
	/// Rejected chains are left out entirely and their errors returned
	/// alongside the registry.
	pub fn load_partial<I>(definitions: I) -> (Self, Vec<Error>)
	where
		I: IntoIterator<Item = ChainDefinition>,
	{
		let mut store = OverlayStore::default();
		let mut rejected = Vec::new();
		for definition in definitions {
			if let Err(e) = store.insert(definition) {
				log::warn!("{}", e);
				rejected.push(e);
			}
		}
		(Self { store, cache: ResolutionCache::default() }, rejected)
	}

	/// Construct the registry from JSON chain documents.
	#[cfg(feature = "json")]
	pub fn from_json(json: &str) -> Result<Self> {
		Self::new(overlays_json::chains_from_json(json)?)
	}

	/// Construct the registry from every chain of a JSON file that can be
	/// loaded.
	///
	/// Fails only if the file itself cannot be read as chain documents.
	/// Rejected chains are returned alongside the registry.
	#[cfg(feature = "json")]
	pub fn load_partial_json(json: &str) -> Result<(Self, Vec<Error>)> {
		let mut definitions = Vec::new();
		let mut rejected = Vec::new();
		for outcome in overlays_json::chains_from_json_each(json)? {
			match outcome {
				Ok(definition) => definitions.push(definition),
				Err(e) => {
					log::warn!("{}", e);
					rejected.push(Error::from(e));
				}
			}
		}
		let (registry, mut invalid) = Self::load_partial(definitions);
		rejected.append(&mut invalid);
		Ok((registry, rejected))
	}

	/// Construct the registry from the definitions bundled with this crate.
	#[cfg(feature = "polkadot-js")]
	pub fn builtin() -> Result<Self> {
		Self::new(overlays_json::builtin::definitions()?)
	}

	/// Resolve the type registry of `chain` at spec `version`.
	///
	/// `version` may be any integer; values that are not a valid spec version
	/// (negative, or too large) fail with [`Error::InvalidVersion`].
	///
	/// Fails only with [`Error::InvalidVersion`] or [`Error::UnknownChain`]:
	/// chains are validated when loaded, not when resolved.
	///
	/// Definitions referenced from within the registry are not checked. A
	/// version no overlay applies to yields an empty registry.
	pub fn resolve<V>(&self, chain: &str, version: V) -> Result<Arc<EffectiveRegistry>>
	where
		V: TryInto<SpecVersion> + Copy + fmt::Display,
	{
		let spec: SpecVersion = version.try_into().map_err(|_| Error::InvalidVersion(version.to_string()))?;
		log::trace!("Resolving types of {} at spec {}", chain, spec);

		let definition = self.store.get(chain).ok_or_else(|| Error::UnknownChain(chain.into()))?;
		self.cache.get_or_build(definition.chain_id(), spec, || {
			let applicable = matcher::applicable(definition.overlays(), spec);
			log::trace!("{} of {} overlays apply", applicable.len(), definition.overlays().len());
			Ok(builder::build(applicable))
		})
	}

	pub fn has_chain(&self, chain: &str) -> bool {
		self.store.contains(chain)
	}

	/// Ids of all loaded chains, sorted.
	pub fn chains(&self) -> Vec<&ChainId> {
		let mut chains = self.store.chains().collect::<Vec<_>>();
		chains.sort();
		chains
	}

	/// Replace all chain definitions.
	///
	/// The cache is cleared as a whole. On error nothing changes.
	pub fn reload<I>(&mut self, definitions: I) -> Result<()>
	where
		I: IntoIterator<Item = ChainDefinition>,
	{
		self.store = OverlayStore::load(definitions)?;
		self.cache.clear();
		log::debug!("Reloaded chain definitions, cache cleared");
		Ok(())
	}

	pub fn cache_stats(&self) -> CacheStats {
		self.cache.stats()
	}
}

#[cfg(feature = "polkadot-js")]
impl Default for TypeRegistry {
	fn default() -> Self {
		Self::builtin().expect("Included definitions should not panic")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn overlay(min: SpecVersion, max: Option<SpecVersion>, types: Vec<(&str, TypeSpec)>) -> Overlay {
		Overlay::new(VersionRange::new(min, max).expect("valid range"), types).expect("valid overlay")
	}

	fn registry() -> TypeRegistry {
		let chain = ChainDefinition::new(
			"test",
			vec![overlay(0, None, vec![("A", TypeSpec::alias("X"))]), overlay(13, None, vec![("A", TypeSpec::alias("Y"))])],
		);
		TypeRegistry::new(vec![chain]).expect("valid definitions")
	}

	#[test]
	fn should_resolve_unbounded_then_bounded() -> Result<()> {
		let _ = pretty_env_logger::try_init();
		let registry = registry();
		assert_eq!(registry.resolve("test", 5)?.get("A"), Some(&TypeSpec::alias("X")));
		assert_eq!(registry.resolve("test", 13)?.get("A"), Some(&TypeSpec::alias("Y")));
		Ok(())
	}

	#[test]
	fn should_resolve_every_version_of_a_loaded_chain() -> Result<()> {
		let registry = registry();
		for version in 0..20u32 {
			registry.resolve("test", version)?;
		}
		assert_eq!(registry.cache_stats().builds, 20);
		Ok(())
	}

	#[test]
	fn should_fail_on_unknown_chain() {
		let registry = registry();
		assert!(matches!(registry.resolve("does-not-exist", 1), Err(Error::UnknownChain(c)) if c.as_str() == "does-not-exist"));
	}

	#[test]
	fn should_fail_on_invalid_version() {
		let registry = registry();
		assert!(matches!(registry.resolve("test", -1), Err(Error::InvalidVersion(v)) if v == "-1"));
		assert!(matches!(registry.resolve("test", u64::MAX), Err(Error::InvalidVersion(_))));
	}

	#[test]
	fn should_accept_any_integer_type() -> Result<()> {
		let registry = registry();
		let a = registry.resolve("test", 13u32)?;
		let b = registry.resolve("test", 13i64)?;
		assert!(Arc::ptr_eq(&a, &b));
		Ok(())
	}

	#[test]
	fn should_load_partial_definitions() {
		let bad = ChainDefinition::new(
			"bad",
			vec![overlay(0, None, vec![("S", TypeSpec::structure(vec![("f", TypeSpec::alias("u8")), ("f", TypeSpec::alias("u8"))]))])],
		);
		let good = ChainDefinition::new("good", vec![]);
		let (registry, rejected) = TypeRegistry::load_partial(vec![bad, good]);
		assert_eq!(rejected.len(), 1);
		assert!(matches!(&rejected[0], Error::MalformedOverlay { chain, .. } if chain.as_str() == "bad"));
		assert!(registry.has_chain("good"));
		assert!(!registry.has_chain("bad"));
	}

	#[test]
	fn should_clear_cache_on_reload() -> Result<()> {
		let mut registry = registry();
		registry.resolve("test", 13)?;
		assert_eq!(registry.cache_stats().entries, 1);

		let replacement = ChainDefinition::new("test", vec![overlay(0, None, vec![("A", TypeSpec::alias("Z"))])]);
		registry.reload(vec![replacement])?;
		assert_eq!(registry.cache_stats().entries, 0);
		assert_eq!(registry.resolve("test", 13)?.get("A"), Some(&TypeSpec::alias("Z")));
		Ok(())
	}

	#[test]
	fn should_keep_state_on_failed_reload() -> Result<()> {
		let mut registry = registry();
		registry.resolve("test", 13)?;
		let err = registry.reload(vec![ChainDefinition::new("x", vec![]), ChainDefinition::new("x", vec![])]);
		assert!(matches!(err, Err(Error::DuplicateChain(_))));
		assert!(registry.has_chain("test"));
		assert_eq!(registry.cache_stats().entries, 1);
		Ok(())
	}

	#[test]
	fn should_be_shareable_between_threads() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<TypeRegistry>();
	}
}
