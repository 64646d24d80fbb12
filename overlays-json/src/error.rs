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

use overlays_types::{ChainId, MalformedOverlay};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("Decode {0}")]
	Decode(#[from] serde_json::Error),
	#[error("definitions for chain `{chain}` rejected: {source}")]
	Chain {
		chain: ChainId,
		#[source]
		source: ChainError,
	},
}

/// Why a single chain document could not be loaded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
	#[error(transparent)]
	Malformed(#[from] MalformedOverlay),
	#[error("{0} is not a valid spec version")]
	InvalidVersion(i64),
	#[error("overlay has no version range")]
	MissingRange,
	#[error("overlay declares both `minmax` and `minVersion`/`maxVersion`")]
	AmbiguousRange,
	#[error("`{ty}` uses an unsupported literal: {found}")]
	UnsupportedLiteral { ty: String, found: &'static str },
	#[error("`{ty}` declares discriminant {value}, which does not fit in a u8")]
	InvalidDiscriminant { ty: String, value: i64 },
}

impl Error {
	pub(crate) fn chain(chain: &ChainId, source: impl Into<ChainError>) -> Self {
		Error::Chain { chain: chain.clone(), source: source.into() }
	}
}
