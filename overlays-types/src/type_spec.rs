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

//! Closed set of type definitions a codec understands.

use crate::{MalformedOverlay, Result};
use serde::Serialize;
use std::{collections::HashSet, fmt};

/// A single type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeSpec {
	/// Rename of another named type, or a generic reference such as
	/// `Vec<AccountId>` that the codec interprets itself.
	Alias(String),
	/// Fields in binary layout order.
	Struct(Vec<StructField>),
	/// Variants in declaration order.
	Enum { variants: Vec<EnumVariant>, discriminant: Discriminant },
	/// Built-in scalar.
	Primitive(Primitive),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructField {
	pub name: String,
	pub ty: TypeSpec,
}

impl StructField {
	pub fn new<S: Into<String>>(name: S, ty: TypeSpec) -> Self {
		Self { name: name.into(), ty }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumVariant {
	pub name: String,
	/// `None` for unit variants.
	pub value: Option<TypeSpec>,
	/// Declared discriminant. Only present for [`Discriminant::Explicit`] enums.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub index: Option<u8>,
}

impl EnumVariant {
	pub fn new<S: Into<String>>(name: S, value: Option<TypeSpec>) -> Self {
		Self { name: name.into(), value, index: None }
	}

	pub fn indexed<S: Into<String>>(name: S, index: u8) -> Self {
		Self { name: name.into(), value: None, index: Some(index) }
	}
}

/// How an enum assigns discriminants to its variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Discriminant {
	/// The position of a variant is its discriminant.
	Positional,
	/// Every variant declares its own discriminant.
	Explicit,
}

/// Built-in scalars and fixed-shape byte types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Primitive {
	Bool,
	U8,
	U16,
	U32,
	U64,
	U128,
	U256,
	I8,
	I16,
	I32,
	I64,
	I128,
	I256,
	/// UTF-8 string
	Str,
	/// Variable length byte vector
	Bytes,
	/// Byte array of known length
	ByteArray(u32),
	H160,
	H256,
	H512,
	Null,
}

impl fmt::Display for Primitive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Primitive::Bool => write!(f, "bool"),
			Primitive::U8 => write!(f, "u8"),
			Primitive::U16 => write!(f, "u16"),
			Primitive::U32 => write!(f, "u32"),
			Primitive::U64 => write!(f, "u64"),
			Primitive::U128 => write!(f, "u128"),
			Primitive::U256 => write!(f, "u256"),
			Primitive::I8 => write!(f, "i8"),
			Primitive::I16 => write!(f, "i16"),
			Primitive::I32 => write!(f, "i32"),
			Primitive::I64 => write!(f, "i64"),
			Primitive::I128 => write!(f, "i128"),
			Primitive::I256 => write!(f, "i256"),
			Primitive::Str => write!(f, "String"),
			Primitive::Bytes => write!(f, "Bytes"),
			Primitive::ByteArray(len) => write!(f, "[u8; {}]", len),
			Primitive::H160 => write!(f, "H160"),
			Primitive::H256 => write!(f, "H256"),
			Primitive::H512 => write!(f, "H512"),
			Primitive::Null => write!(f, "Null"),
		}
	}
}

impl TypeSpec {
	pub fn alias<S: Into<String>>(target: S) -> Self {
		TypeSpec::Alias(target.into())
	}

	/// Parse a bare type reference, like `u32`, `[u8; 4]` or `AccountId`.
	pub fn reference(s: &str) -> Self {
		crate::regex::parse(s)
	}

	pub fn structure<S, I>(fields: I) -> Self
	where
		S: Into<String>,
		I: IntoIterator<Item = (S, TypeSpec)>,
	{
		TypeSpec::Struct(fields.into_iter().map(|(name, ty)| StructField::new(name, ty)).collect())
	}

	/// Enum with positional discriminants.
	pub fn enumeration<S, I>(variants: I) -> Self
	where
		S: Into<String>,
		I: IntoIterator<Item = (S, Option<TypeSpec>)>,
	{
		let variants = variants.into_iter().map(|(name, value)| EnumVariant::new(name, value)).collect();
		TypeSpec::Enum { variants, discriminant: Discriminant::Positional }
	}

	/// Enum of unit variants, each with a declared discriminant.
	pub fn indexed_enum<S, I>(variants: I) -> Self
	where
		S: Into<String>,
		I: IntoIterator<Item = (S, u8)>,
	{
		let variants = variants.into_iter().map(|(name, index)| EnumVariant::indexed(name, index)).collect();
		TypeSpec::Enum { variants, discriminant: Discriminant::Explicit }
	}

	/// Discriminant of the variant called `name`, if this is an enum that has it.
	pub fn discriminant_of(&self, name: &str) -> Option<u8> {
		match self {
			TypeSpec::Enum { variants, discriminant } => {
				let (position, variant) = variants.iter().enumerate().find(|(_, v)| v.name == name)?;
				match discriminant {
					Discriminant::Positional => u8::try_from(position).ok(),
					Discriminant::Explicit => variant.index,
				}
			}
			_ => None,
		}
	}

	/// Check the intrinsic invariants of this definition.
	///
	/// Only the shape of the definition itself is checked. Names referenced by
	/// aliases or fields are not looked up.
	pub fn validate(&self, ty: &str) -> Result<()> {
		match self {
			TypeSpec::Alias(_) | TypeSpec::Primitive(_) => Ok(()),
			TypeSpec::Struct(fields) => {
				let mut names = HashSet::new();
				for field in fields {
					if field.name.is_empty() {
						return Err(MalformedOverlay::EmptyMemberName { ty: ty.to_string() });
					}
					if !names.insert(field.name.as_str()) {
						return Err(MalformedOverlay::DuplicateField { ty: ty.to_string(), field: field.name.clone() });
					}
					field.ty.validate(&format!("{}.{}", ty, field.name))?;
				}
				Ok(())
			}
			TypeSpec::Enum { variants, discriminant } => {
				validate_discriminants(ty, variants, *discriminant)?;
				let mut names = HashSet::new();
				for variant in variants {
					if variant.name.is_empty() {
						return Err(MalformedOverlay::EmptyMemberName { ty: ty.to_string() });
					}
					if !names.insert(variant.name.as_str()) {
						return Err(MalformedOverlay::DuplicateVariant {
							ty: ty.to_string(),
							variant: variant.name.clone(),
						});
					}
					if let Some(value) = &variant.value {
						value.validate(&format!("{}.{}", ty, variant.name))?;
					}
				}
				Ok(())
			}
		}
	}
}

fn validate_discriminants(ty: &str, variants: &[EnumVariant], discriminant: Discriminant) -> Result<()> {
	match discriminant {
		Discriminant::Positional => {
			if variants.iter().any(|v| v.index.is_some()) {
				return Err(MalformedOverlay::MixedDiscriminants { ty: ty.to_string() });
			}
			if variants.len() > usize::from(u8::MAX) + 1 {
				return Err(MalformedOverlay::TooManyVariants { ty: ty.to_string(), count: variants.len() });
			}
		}
		Discriminant::Explicit => {
			let mut seen = HashSet::new();
			for variant in variants {
				let index = variant.index.ok_or_else(|| MalformedOverlay::MixedDiscriminants { ty: ty.to_string() })?;
				if !seen.insert(index) {
					return Err(MalformedOverlay::DuplicateDiscriminant { ty: ty.to_string(), index });
				}
			}
		}
	}
	Ok(())
}

impl From<Primitive> for TypeSpec {
	fn from(p: Primitive) -> TypeSpec {
		TypeSpec::Primitive(p)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn should_accept_well_formed_struct() -> Result<()> {
		let pending_swap = TypeSpec::structure(vec![
			("source", TypeSpec::alias("AccountId")),
			("action", TypeSpec::alias("SwapAction")),
			("endBlock", TypeSpec::alias("BlockNumber")),
		]);
		pending_swap.validate("PendingSwap")?;
		if let TypeSpec::Struct(fields) = &pending_swap {
			let names = fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
			assert_eq!(names, vec!["source", "action", "endBlock"]);
		} else {
			panic!("expected a struct");
		}
		Ok(())
	}

	#[test]
	fn should_reject_duplicate_field() {
		let ty = TypeSpec::structure(vec![("nonce", Primitive::U256.into()), ("nonce", Primitive::U256.into())]);
		assert_eq!(
			ty.validate("Account"),
			Err(MalformedOverlay::DuplicateField { ty: "Account".into(), field: "nonce".into() })
		);
	}

	#[test]
	fn should_reject_duplicate_field_in_nested_struct() {
		let inner = TypeSpec::structure(vec![("value", TypeSpec::alias("Balance")), ("value", Primitive::U8.into())]);
		let outer = TypeSpec::structure(vec![("action", inner)]);
		assert_eq!(
			outer.validate("PendingSwap"),
			Err(MalformedOverlay::DuplicateField { ty: "PendingSwap.action".into(), field: "value".into() })
		);
	}

	#[test]
	fn should_reject_duplicate_variant() {
		let ty = TypeSpec::enumeration(vec![
			("Nickname", Some(Primitive::Str.into())),
			("Ethereum", Some(Primitive::H160.into())),
			("Nickname", None),
		]);
		assert_eq!(
			ty.validate("AccountServiceEnum"),
			Err(MalformedOverlay::DuplicateVariant { ty: "AccountServiceEnum".into(), variant: "Nickname".into() })
		);
	}

	#[test]
	fn should_reject_duplicate_discriminant() {
		let ty = TypeSpec::indexed_enum(vec![("Any", 0), ("NonTransfer", 1), ("Staking", 1)]);
		assert_eq!(
			ty.validate("ProxyType"),
			Err(MalformedOverlay::DuplicateDiscriminant { ty: "ProxyType".into(), index: 1 })
		);
	}

	#[test]
	fn should_reject_empty_member_name() {
		let ty = TypeSpec::structure(vec![("", Primitive::Bool.into())]);
		assert_eq!(ty.validate("Flag"), Err(MalformedOverlay::EmptyMemberName { ty: "Flag".into() }));
	}

	#[test]
	fn should_reject_mixed_discriminants() {
		let mut variants = vec![EnumVariant::new("Fee", None), EnumVariant::new("Misc", None)];
		variants[1].index = Some(4);
		let ty = TypeSpec::Enum { variants, discriminant: Discriminant::Positional };
		assert_eq!(ty.validate("Reasons"), Err(MalformedOverlay::MixedDiscriminants { ty: "Reasons".into() }));
	}

	#[test]
	fn should_reject_too_many_positional_variants() {
		let ty = TypeSpec::enumeration((0..257).map(|i| (format!("V{}", i), None)));
		assert_eq!(ty.validate("Huge"), Err(MalformedOverlay::TooManyVariants { ty: "Huge".into(), count: 257 }));
	}

	#[test]
	fn should_compute_discriminants() {
		let positional = TypeSpec::enumeration(vec![("Fee", None), ("Misc", None), ("All", None)]);
		assert_eq!(positional.discriminant_of("All"), Some(2));
		assert_eq!(positional.discriminant_of("None"), None);

		let explicit = TypeSpec::indexed_enum(vec![("Any", 0), ("Governance", 2), ("Staking", 3)]);
		assert_eq!(explicit.discriminant_of("Governance"), Some(2));
		assert_eq!(TypeSpec::alias("Foo").discriminant_of("Foo"), None);
	}
}
