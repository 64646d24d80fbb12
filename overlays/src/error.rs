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
	#[error("No type overlays loaded for chain `{0}`")]
	UnknownChain(ChainId),
	#[error("`{0}` is not a valid spec version")]
	InvalidVersion(String),
	#[error("Chain `{chain}` has a malformed overlay: {source}")]
	MalformedOverlay {
		chain: ChainId,
		#[source]
		source: MalformedOverlay,
	},
	#[error("Chain `{0}` is defined more than once")]
	DuplicateChain(ChainId),
	#[error("Chain id must not be empty")]
	EmptyChainId,
	#[cfg(feature = "json")]
	#[error(transparent)]
	Json(#[from] overlays_json::Error),
}
