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

use clap::Parser;
use overlays::TypeRegistry;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Print the type registry a chain uses at a spec version")]
struct Opts {
	/// JSON chain definitions to load instead of the built-in ones
	#[arg(long)]
	definitions: Option<PathBuf>,
	/// List the loaded chains and exit
	#[arg(long)]
	list: bool,
	/// Chain id, e.g. `kulupu`
	#[arg(required_unless_present = "list")]
	chain: Option<String>,
	/// Runtime spec version
	#[arg(allow_negative_numbers = true, required_unless_present = "list")]
	spec: Option<i64>,
}

fn main() -> Result<(), anyhow::Error> {
	let opts = Opts::parse();
	pretty_env_logger::init();

	let registry = match &opts.definitions {
		Some(path) => {
			let json = std::fs::read_to_string(path)?;
			TypeRegistry::from_json(&json)?
		}
		None => TypeRegistry::builtin()?,
	};

	if opts.list {
		for chain in registry.chains() {
			println!("{}", chain);
		}
		return Ok(());
	}

	let (chain, spec) = match (opts.chain, opts.spec) {
		(Some(chain), Some(spec)) => (chain, spec),
		_ => anyhow::bail!("A chain and a spec version are required"),
	};

	let types = registry.resolve(&chain, spec)?;
	log::info!("{} types for {} at spec {}", types.len(), chain, spec);
	println!("{}", serde_json::to_string_pretty(&*types)?);
	Ok(())
}
