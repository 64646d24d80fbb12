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

//! Turns bare type references from definition files into [`TypeSpec`]s.
//!
//! Known scalar names and `[u8; N]` arrays become [`Primitive`]s, everything
//! else is kept as an [`TypeSpec::Alias`] for the codec to interpret.

use crate::{Primitive, TypeSpec};
use onig::Regex;
use phf::phf_map;

static PRIMITIVES: phf::Map<&'static str, Primitive> = phf_map! {
	"bool" => Primitive::Bool,
	"u8" => Primitive::U8,
	"u16" => Primitive::U16,
	"u32" => Primitive::U32,
	"u64" => Primitive::U64,
	"u128" => Primitive::U128,
	"u256" => Primitive::U256,
	"U8" => Primitive::U8,
	"U16" => Primitive::U16,
	"U32" => Primitive::U32,
	"U64" => Primitive::U64,
	"U128" => Primitive::U128,
	"U256" => Primitive::U256,
	"i8" => Primitive::I8,
	"i16" => Primitive::I16,
	"i32" => Primitive::I32,
	"i64" => Primitive::I64,
	"i128" => Primitive::I128,
	"i256" => Primitive::I256,
	"I8" => Primitive::I8,
	"I16" => Primitive::I16,
	"I32" => Primitive::I32,
	"I64" => Primitive::I64,
	"I128" => Primitive::I128,
	"I256" => Primitive::I256,
	"String" => Primitive::Str,
	"Text" => Primitive::Str,
	"Bytes" => Primitive::Bytes,
	"Vec<u8>" => Primitive::Bytes,
	"H160" => Primitive::H160,
	"H256" => Primitive::H256,
	"H512" => Primitive::H512,
	"Null" => Primitive::Null,
	"()" => Primitive::Null,
};

/// Matches a byte array like `[u8; 32]`, also in the `[u8; 32; H256]` form.
/// The length is the first capture group.
fn byte_array_decl() -> Regex {
	Regex::new(r"^\[u8;(\d+)(?:;\w*)?\]$").expect("Regex expression should be infallible; qed")
}

/// Look up a primitive by name. Whitespace inside the name is ignored.
pub fn primitive(s: &str) -> Option<Primitive> {
	let compact = s.split_whitespace().collect::<String>();
	if let Some(p) = PRIMITIVES.get(compact.as_str()) {
		return Some(*p);
	}
	if !compact.starts_with('[') {
		return None;
	}
	let caps = byte_array_decl().captures(&compact)?;
	let len = caps.at(1)?.parse::<u32>().ok()?;
	Some(Primitive::ByteArray(len))
}

/// Parse a bare type reference.
///
/// Never fails: a reference that is not a known primitive is an alias, and
/// whether its target exists is left to whoever consumes the registry.
pub fn parse(s: &str) -> TypeSpec {
	let s = s.trim();
	match primitive(s) {
		Some(p) => TypeSpec::Primitive(p),
		None => {
			log::trace!("{} is not a primitive, treating as alias", s);
			TypeSpec::Alias(s.to_string())
		}
	}
}
