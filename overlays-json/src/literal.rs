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

//! Parses polkadot-js type literals into [`TypeSpec`]s.
//!
//! In polkadot-js definitions, a type is either a string (pointing at another
//! type or a primitive), or an _object_, which can be:
//! - Struct (no identifier)
//! - Enum (`_enum` identifier)
//! - Set (`_set` identifier, not supported)
//!
//! Objects are read into an ordered list of entries rather than a map so that
//! repeated keys are kept and reported, instead of the last one silently
//! winning.

use crate::error::ChainError;
use overlays_types::{regex, TypeSpec};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// A raw type literal, as written in a definitions file.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Literal {
	Reference(String),
	Object(Entries),
	Array(Vec<Literal>),
	Number(i64),
	Null,
}

/// Keys and values of a JSON object in declaration order, duplicates included.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Entries(pub Vec<(String, Literal)>);

impl Literal {
	fn kind(&self) -> &'static str {
		match self {
			Literal::Reference(_) => "string",
			Literal::Object(_) => "object",
			Literal::Array(_) => "array",
			Literal::Number(_) => "number",
			Literal::Null => "null",
		}
	}
}

impl<'de> Deserialize<'de> for Literal {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(LiteralVisitor)
	}
}

struct LiteralVisitor;

impl<'de> Visitor<'de> for LiteralVisitor {
	type Value = Literal;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a type name, a type object, an integer or null")
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<Literal, E> {
		Ok(Literal::Reference(v.to_string()))
	}

	fn visit_string<E: de::Error>(self, v: String) -> Result<Literal, E> {
		Ok(Literal::Reference(v))
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<Literal, E> {
		Ok(Literal::Number(v))
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<Literal, E> {
		i64::try_from(v).map(Literal::Number).map_err(|_| E::custom(format!("integer {} out of range", v)))
	}

	fn visit_unit<E: de::Error>(self) -> Result<Literal, E> {
		Ok(Literal::Null)
	}

	fn visit_none<E: de::Error>(self) -> Result<Literal, E> {
		Ok(Literal::Null)
	}

	fn visit_seq<A>(self, mut seq: A) -> Result<Literal, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut items = Vec::new();
		while let Some(item) = seq.next_element()? {
			items.push(item);
		}
		Ok(Literal::Array(items))
	}

	fn visit_map<V>(self, map: V) -> Result<Literal, V::Error>
	where
		V: MapAccess<'de>,
	{
		EntriesVisitor.visit_map(map).map(Literal::Object)
	}
}

impl<'de> Deserialize<'de> for Entries {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_map(EntriesVisitor)
	}
}

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
	type Value = Entries;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("map of types")
	}

	fn visit_map<V>(self, mut map: V) -> Result<Entries, V::Error>
	where
		V: MapAccess<'de>,
	{
		let mut entries = Vec::new();
		while let Some(key) = map.next_key::<String>()? {
			let val: Literal = map.next_value()?;
			entries.push((key, val));
		}
		Ok(Entries(entries))
	}
}

/// Convert the literal defining the type at `path` into a [`TypeSpec`].
pub(crate) fn parse_type(path: &str, literal: &Literal) -> Result<TypeSpec, ChainError> {
	match literal {
		Literal::Reference(s) => Ok(regex::parse(s)),
		Literal::Object(Entries(entries)) => match entries.as_slice() {
			[(key, value)] if key == "_enum" => parse_enum(path, value),
			[(key, _)] if key == "_set" => Err(ChainError::UnsupportedLiteral { ty: path.to_string(), found: "_set" }),
			_ => parse_struct(path, entries),
		},
		other => Err(ChainError::UnsupportedLiteral { ty: path.to_string(), found: other.kind() }),
	}
}

/// Parses a struct from its fields.
///
/// polkadot-js annotations `_alias` (javascript-side field renames) and
/// `_fallback` are dropped.
fn parse_struct(path: &str, entries: &[(String, Literal)]) -> Result<TypeSpec, ChainError> {
	let mut fields = Vec::with_capacity(entries.len());
	for (name, value) in entries {
		if name == "_alias" || name == "_fallback" {
			log::debug!("ignoring `{}` annotation on {}", name, path);
			continue;
		}
		if name == "_enum" || name == "_set" {
			return Err(ChainError::UnsupportedLiteral { ty: path.to_string(), found: "struct with reserved key" });
		}
		let ty = parse_type(&format!("{}.{}", path, name), value)?;
		fields.push((name.clone(), ty));
	}
	Ok(TypeSpec::structure(fields))
}

/// Process the value of an `_enum` key.
///
/// - an array of names is an enum of unit variants
/// - an object of name -> integer declares the discriminant of each variant
/// - an object of name -> type (or null) is an enum with values
fn parse_enum(path: &str, value: &Literal) -> Result<TypeSpec, ChainError> {
	match value {
		Literal::Array(names) => {
			let variants = names
				.iter()
				.map(|n| match n {
					Literal::Reference(name) => Ok((name.clone(), None::<TypeSpec>)),
					other => Err(ChainError::UnsupportedLiteral { ty: path.to_string(), found: other.kind() }),
				})
				.collect::<Result<Vec<_>, _>>()?;
			Ok(TypeSpec::enumeration(variants))
		}
		Literal::Object(Entries(entries)) if !entries.is_empty() && entries.iter().all(|(_, v)| matches!(v, Literal::Number(_))) => {
			let mut variants = Vec::with_capacity(entries.len());
			for (name, v) in entries {
				if let Literal::Number(n) = v {
					let index = u8::try_from(*n)
						.map_err(|_| ChainError::InvalidDiscriminant { ty: path.to_string(), value: *n })?;
					variants.push((name.clone(), index));
				}
			}
			Ok(TypeSpec::indexed_enum(variants))
		}
		Literal::Object(Entries(entries)) => {
			let mut variants = Vec::with_capacity(entries.len());
			for (name, v) in entries {
				let value = match v {
					Literal::Null => None,
					other => Some(parse_type(&format!("{}.{}", path, name), other)?),
				};
				variants.push((name.clone(), value));
			}
			Ok(TypeSpec::enumeration(variants))
		}
		other => Err(ChainError::UnsupportedLiteral { ty: path.to_string(), found: other.kind() }),
	}
}
