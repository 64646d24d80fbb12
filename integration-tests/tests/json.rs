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

use crate::init_logger;
use overlays::{Error, TypeRegistry, TypeSpec};
use overlays_json::ChainError;
use overlays_types::MalformedOverlay;

const CHAINS: &str = r#"
[
	{
		"chainId": "alpha",
		"overlays": [
			{ "minVersion": 0, "types": { "Balance": "u64", "Address": "AccountId" } },
			{ "minVersion": 10, "maxVersion": 19, "types": { "Balance": "u128" } }
		]
	},
	{
		"chainId": "beta",
		"overlays": [
			{ "minVersion": 0, "types": { "Status": { "_enum": ["Active", "Retired"] } } }
		]
	}
]
"#;

#[test]
fn should_resolve_from_json_documents() -> anyhow::Result<()> {
	init_logger();
	let registry = TypeRegistry::from_json(CHAINS)?;
	assert!(registry.has_chain("alpha"));
	assert!(registry.has_chain("beta"));
	assert!(!registry.has_chain("Alpha"));

	assert_eq!(registry.resolve("alpha", 9)?.get("Balance"), Some(&TypeSpec::reference("u64")));
	assert_eq!(registry.resolve("alpha", 10)?.get("Balance"), Some(&TypeSpec::reference("u128")));
	assert_eq!(registry.resolve("alpha", 20)?.get("Balance"), Some(&TypeSpec::reference("u64")));
	assert_eq!(registry.resolve("beta", 0)?.get("Status"), Some(&TypeSpec::enumeration(vec![("Active", None), ("Retired", None)])));
	Ok(())
}

#[test]
fn should_serialize_resolved_registry() -> anyhow::Result<()> {
	let registry = TypeRegistry::from_json(CHAINS)?;
	let json = serde_json::to_value(&*registry.resolve("alpha", 10)?)?;
	assert_eq!(json["Address"], serde_json::json!({ "alias": "AccountId" }));
	assert_eq!(json["Balance"], serde_json::json!({ "primitive": "u128" }));
	Ok(())
}

#[test]
fn should_reject_duplicate_fields_in_full() {
	let json = r#"
	{
		"chainId": "gamma",
		"overlays": [
			{ "minVersion": 0, "types": { "Balance": "u64" } },
			{ "minVersion": 3, "types": { "Limit": { "daily": "Balance", "daily": "Balance" } } }
		]
	}
	"#;
	match TypeRegistry::from_json(json) {
		Err(Error::Json(overlays_json::Error::Chain { chain, source })) => {
			assert_eq!(chain.as_str(), "gamma");
			assert_eq!(
				source,
				ChainError::Malformed(MalformedOverlay::DuplicateField { ty: "Limit".into(), field: "daily".into() })
			);
		}
		other => panic!("expected a malformed chain, got {:?}", other),
	}
}

#[test]
fn should_serve_healthy_chains_of_a_partly_broken_file() -> anyhow::Result<()> {
	init_logger();
	let json = r#"
	[
		{ "chainId": "good", "overlays": [ { "minVersion": 0, "types": { "Balance": "u128" } } ] },
		{ "chainId": "bad", "overlays": [ { "minVersion": 0, "types": { "S": { "a": "u8", "a": "u8" } } } ] },
		{ "chainId": "good", "overlays": [] }
	]
	"#;
	assert!(TypeRegistry::from_json(json).is_err());

	let (registry, rejected) = TypeRegistry::load_partial_json(json)?;
	assert!(registry.has_chain("good"));
	assert!(!registry.has_chain("bad"));
	assert_eq!(registry.resolve("good", 1)?.get("Balance"), Some(&TypeSpec::reference("u128")));

	assert_eq!(rejected.len(), 2);
	assert!(matches!(&rejected[0], Error::Json(overlays_json::Error::Chain { chain, .. }) if chain.as_str() == "bad"));
	assert!(matches!(&rejected[1], Error::DuplicateChain(c) if c.as_str() == "good"));

	assert!(matches!(TypeRegistry::load_partial_json("{ not json"), Err(Error::Json(overlays_json::Error::Decode(_)))));
	Ok(())
}

#[test]
fn should_reject_duplicate_chains() {
	let json = r#"[{ "chainId": "alpha", "overlays": [] }, { "chainId": "alpha", "overlays": [] }]"#;
	assert!(matches!(TypeRegistry::from_json(json), Err(Error::DuplicateChain(c)) if c.as_str() == "alpha"));
}

#[test]
fn should_reload_definitions() -> anyhow::Result<()> {
	let mut registry = TypeRegistry::from_json(CHAINS)?;
	registry.resolve("alpha", 10)?;
	registry.resolve("beta", 10)?;
	assert_eq!(registry.cache_stats().entries, 2);

	let replacement = overlays_json::chains_from_json(
		r#"{ "chainId": "alpha", "overlays": [{ "minVersion": 0, "types": { "Balance": "u32" } }] }"#,
	)?;
	registry.reload(replacement)?;
	assert_eq!(registry.cache_stats().entries, 0);
	assert!(!registry.has_chain("beta"));
	assert_eq!(registry.resolve("alpha", 10)?.get("Balance"), Some(&TypeSpec::reference("u32")));
	Ok(())
}
