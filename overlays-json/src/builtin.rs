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

//! Type overlays of chains whose definitions ship with this crate.

use crate::{chain_from_polkadot_js, Result};
use overlays_types::ChainDefinition;

pub const CANVAS: &str = include_str!("./definitions/canvas.json");
pub const KULUPU: &str = include_str!("./definitions/kulupu.json");
pub const MATHCHAIN: &str = include_str!("./definitions/mathchain.json");

/// chain id -> polkadot-js definition
pub const CHAINS: &[(&str, &str)] = &[("canvas", CANVAS), ("kulupu", KULUPU), ("mathchain", MATHCHAIN)];

/// Load every built-in chain definition.
pub fn definitions() -> Result<Vec<ChainDefinition>> {
	CHAINS.iter().map(|(chain, json)| chain_from_polkadot_js(*chain, json)).collect()
}
