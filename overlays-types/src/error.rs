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

use crate::SpecVersion;
use thiserror::Error;

pub type Result<T, E = MalformedOverlay> = std::result::Result<T, E>;

/// A structural invariant of an overlay does not hold.
///
/// `ty` is the path of the offending definition, with nested inline types
/// joined by `.` (e.g. `PendingSwap.action`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedOverlay {
	#[error("type name must not be empty")]
	EmptyTypeName,
	#[error("type `{0}` is defined more than once in a single overlay")]
	DuplicateType(String),
	#[error("`{ty}` has a field or variant with an empty name")]
	EmptyMemberName { ty: String },
	#[error("struct `{ty}` declares field `{field}` more than once")]
	DuplicateField { ty: String, field: String },
	#[error("enum `{ty}` declares variant `{variant}` more than once")]
	DuplicateVariant { ty: String, variant: String },
	#[error("enum `{ty}` assigns discriminant {index} more than once")]
	DuplicateDiscriminant { ty: String, index: u8 },
	#[error("enum `{ty}` mixes explicit and positional discriminants")]
	MixedDiscriminants { ty: String },
	#[error("enum `{ty}` has {count} variants, but only 256 discriminants exist")]
	TooManyVariants { ty: String, count: usize },
	#[error("version range max {max} is below min {min}")]
	InvalidRange { min: SpecVersion, max: SpecVersion },
}
