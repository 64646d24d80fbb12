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

use crate::{init_logger, overlay, registry_of};
use std::{sync::Arc, thread};

#[test]
fn should_resolve_from_many_threads() {
	init_logger();
	let registry = registry_of(
		"chain",
		vec![overlay(0, None, &[("A", "X")]), overlay(13, None, &[("A", "Y")]), overlay(20, Some(29), &[("B", "u8")])],
	);

	let results = thread::scope(|s| {
		let handles = (0..8)
			.map(|i| {
				let registry = &registry;
				s.spawn(move || (0..40u32).map(|v| registry.resolve("chain", (v + i) % 40).expect("known chain")).collect::<Vec<_>>())
			})
			.collect::<Vec<_>>();
		handles.into_iter().map(|h| h.join().expect("resolver thread panicked")).collect::<Vec<_>>()
	});

	for v in 0..40u32 {
		let expected = registry.resolve("chain", v).expect("known chain");
		for (i, resolved) in results.iter().enumerate() {
			let got = &resolved[((v + 40 - i as u32) % 40) as usize];
			assert_eq!(got, &expected);
		}
	}

	let stats = registry.cache_stats();
	assert_eq!(stats.entries, 40);
	assert!(stats.builds >= 40);
}

#[test]
fn cached_entries_should_be_shared() {
	let registry = registry_of("chain", vec![overlay(0, None, &[("A", "X")])]);
	let (a, b) = thread::scope(|s| {
		let a = s.spawn(|| registry.resolve("chain", 7).expect("known chain"));
		let b = s.spawn(|| registry.resolve("chain", 7).expect("known chain"));
		(a.join().expect("thread panicked"), b.join().expect("thread panicked"))
	});
	assert_eq!(a, b);
	// first insert is kept, so later lookups all see the same value
	let c = registry.resolve("chain", 7).expect("known chain");
	assert!(Arc::ptr_eq(&c, &registry.resolve("chain", 7).expect("known chain")));
}
