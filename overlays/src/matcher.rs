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

//! Selects the overlays of a chain that apply to a spec version.

use overlays_types::{Overlay, SpecVersion};

/// Overlays whose range contains `version`, in declaration order.
///
/// This is a stable filter: the order of the result is the order in which the
/// overlays are merged.
pub(crate) fn applicable(overlays: &[Overlay], version: SpecVersion) -> Vec<&Overlay> {
	overlays.iter().filter(|o| o.applies_to(version)).collect()
}
