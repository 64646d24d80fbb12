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

//! Common types shared by the overlay crates.

#![forbid(unsafe_code)]
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Spec Version type defined in the runtime of a chain.
pub type SpecVersion = u32;

/// Stable identifier of a chain, e.g. `kulupu`.
///
/// Opaque: compared byte-for-byte, never normalised.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct ChainId(String);

impl ChainId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<&str> for ChainId {
	fn from(s: &str) -> Self {
		Self(s.to_string())
	}
}

impl From<String> for ChainId {
	fn from(s: String) -> Self {
		Self(s)
	}
}

impl Borrow<str> for ChainId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for ChainId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
