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

//! Loads [`ChainDefinition`]s from JSON.
//!
//! Two document shapes are understood. A chain document:
//!
//! ```json
//! { "chainId": "kulupu",
//!   "overlays": [ { "minVersion": 0, "maxVersion": null, "types": { "Difficulty": "U256" } } ] }
//! ```
//!
//! and the polkadot-js apps-config shape, where the chain is named by the caller:
//!
//! ```json
//! { "types": [ { "minmax": [0, null], "types": { "Difficulty": "U256" } } ] }
//! ```
//!
//! A chain either loads completely or is rejected with the first problem found.
//! [`chains_from_json_each`] reports every chain of a file on its own.

#![forbid(unsafe_code)]
#[cfg(feature = "default_definitions")]
pub mod builtin;
mod error;
mod literal;

pub use self::error::{ChainError, Error, Result};

use self::literal::Entries;
use overlays_types::{ChainDefinition, ChainId, Overlay, SpecVersion, VersionRange};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ChainDocument {
	chain_id: ChainId,
	overlays: Vec<OverlayDocument>,
}

#[derive(Debug, Deserialize)]
struct PolkadotJsDocument {
	types: Vec<OverlayDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct OverlayDocument {
	#[serde(default)]
	min_version: Option<i64>,
	#[serde(default)]
	max_version: Option<i64>,
	/// `[min, max]` spec versions these overrides are relevant for, polkadot-js style
	#[serde(default)]
	minmax: Option<[Option<i64>; 2]>,
	#[serde(default)]
	types: Entries,
}

fn spec_version(v: i64) -> Result<SpecVersion, ChainError> {
	SpecVersion::try_from(v).map_err(|_| ChainError::InvalidVersion(v))
}

impl OverlayDocument {
	fn range(&self) -> Result<VersionRange, ChainError> {
		let (min, max) = match (self.minmax, self.min_version, self.max_version) {
			(Some(_), Some(_), _) | (Some(_), _, Some(_)) => return Err(ChainError::AmbiguousRange),
			// a missing lower bound covers every version from genesis
			(Some([min, max]), None, None) => (min.unwrap_or(0), max),
			(None, Some(min), max) => (min, max),
			(None, None, _) => return Err(ChainError::MissingRange),
		};
		let max = max.map(spec_version).transpose()?;
		Ok(VersionRange::new(spec_version(min)?, max)?)
	}

	fn into_overlay(self) -> Result<Overlay, ChainError> {
		let range = self.range()?;
		let types = self
			.types
			.0
			.iter()
			.map(|(name, literal)| Ok((name.clone(), literal::parse_type(name, literal)?)))
			.collect::<Result<Vec<_>, ChainError>>()?;
		Ok(Overlay::new(range, types)?)
	}
}

fn into_definition(chain: ChainId, overlays: Vec<OverlayDocument>) -> Result<ChainDefinition> {
	let overlays = overlays
		.into_iter()
		.map(OverlayDocument::into_overlay)
		.collect::<Result<Vec<_>, _>>()
		.map_err(|e| Error::chain(&chain, e))?;
	let definition = ChainDefinition::new(chain, overlays);
	definition.validate().map_err(|e| Error::chain(definition.chain_id(), e))?;
	log::debug!("Loaded {} overlays for {}", definition.overlays().len(), definition.chain_id());
	Ok(definition)
}

/// Parse a single chain document.
pub fn chain_from_json(json: &str) -> Result<ChainDefinition> {
	let doc: ChainDocument = serde_json::from_str(json)?;
	into_definition(doc.chain_id, doc.overlays)
}

/// Parse either one chain document or an array of them.
///
/// Fails on the first chain that is rejected.
pub fn chains_from_json(json: &str) -> Result<Vec<ChainDefinition>> {
	chains_from_json_each(json)?.into_iter().collect()
}

/// Parse either one chain document or an array of them, keeping the outcome
/// of every chain.
///
/// Only a document that is not valid JSON, or not shaped like chain documents,
/// fails as a whole. A chain that is rejected leaves the others untouched.
pub fn chains_from_json_each(json: &str) -> Result<Vec<Result<ChainDefinition>>> {
	let docs: Vec<ChainDocument> = if json.trim_start().starts_with('[') {
		serde_json::from_str(json)?
	} else {
		vec![serde_json::from_str(json)?]
	};
	Ok(docs.into_iter().map(|doc| into_definition(doc.chain_id, doc.overlays)).collect())
}

/// Parse a polkadot-js apps-config definition (`{ "types": [ ... ] }`) for `chain`.
pub fn chain_from_polkadot_js<C: Into<ChainId>>(chain: C, json: &str) -> Result<ChainDefinition> {
	let doc: PolkadotJsDocument = serde_json::from_str(json)?;
	into_definition(chain.into(), doc.types)
}
