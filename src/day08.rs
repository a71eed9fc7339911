// Copyright (c) 2025 advent24 contributors


type Pos = [isize; 2];

struct AntennaMap {
	frequencies: std::collections::HashMap<char, Vec<Pos>>,
	width: isize,
	height: isize,
}

impl AntennaMap {
	fn contains(&self, [x, y]: Pos) -> bool {
		x >= 0 && x < self.width && y >= 0 && y < self.height
	}

	fn antenna_pairs(&self) -> impl Iterator<Item = (Pos, Pos)> + '_ {
		use itertools::Itertools as _;
		self.frequencies.values()
			.flat_map(|antennas| antennas.iter().copied().tuple_combinations())
	}
}


fn input_map_from_str(s: &str) -> AntennaMap {
	s.parse().unwrap()
}


fn part1_impl(input_map: AntennaMap) -> usize {
	use std::collections::HashSet;
	let mut antinodes = HashSet::new();
	for ([x0, y0], [x1, y1]) in input_map.antenna_pairs() {
		let [dx, dy] = [x1 - x0, y1 - y0];
		for antinode in [[x1 + dx, y1 + dy], [x0 - dx, y0 - dy]] {
			if input_map.contains(antinode) { antinodes.insert(antinode); }
		}
	}
	antinodes.len()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_map_from_str(input))
}


fn part2_impl(input_map: AntennaMap) -> usize {
	use std::collections::HashSet;
	let mut antinodes = HashSet::new();
	for ([x0, y0], [x1, y1]) in input_map.antenna_pairs() {
		let [dx, dy] = [x1 - x0, y1 - y0];
		// Every in-bounds grid point in line with the pair, antennas included.
		for step in [[dx, dy], [-dx, -dy]] {
			let mut antinode = [x0, y0];
			while input_map.contains(antinode) {
				antinodes.insert(antinode);
				antinode = [antinode[0] + step[0], antinode[1] + step[1]];
			}
		}
	}
	antinodes.len()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_map_from_str(input))
}


mod parsing {
	use std::{collections::HashMap, str::FromStr};
	use super::AntennaMap;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum AntennaMapError {
		Empty,
		Width { line: usize, width: usize, len: usize },
	}

	impl FromStr for AntennaMap {
		type Err = AntennaMapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use AntennaMapError::*;
			let mut frequencies: HashMap<_, Vec<_>> = HashMap::new();
			let mut width = None;
			let mut height = 0;
			for (l, line) in s.lines().enumerate() {
				let width = *width.get_or_insert(line.len());
				if line.len() != width {
					return Err(Width { line: l + 1, width, len: line.len() })
				}
				for (c, chr) in line.chars().enumerate() {
					if chr != '.' {
						frequencies.entry(chr).or_default().push([c as isize, l as isize]);
					}
				}
				height += 1;
			}
			let width = width.filter(|&w| w > 0).ok_or(Empty)? as isize;
			Ok(AntennaMap { frequencies, width, height })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		............
		........0...
		.....0......
		.......0....
		....0.......
		......A.....
		............
		............
		........A...
		.........A..
		............
		............
	" };
	assert_eq!(part1_impl(input_map_from_str(INPUT)), 14);
	assert_eq!(part2_impl(input_map_from_str(INPUT)), 34);
}
