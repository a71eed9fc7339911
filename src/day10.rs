// Copyright (c) 2025 advent24 contributors


struct TopoMap {
	heights: Vec<u8>,
	width: usize,
}

impl TopoMap {
	fn adjacent_positions(&self, from_pos: usize) -> impl Iterator<Item = usize> {
		let (p, w, l) = (from_pos as isize, self.width as isize, self.heights.len() as isize);
		let x = p % w;
		[
			(x > 0).then(|| p - 1),
			(x < w - 1).then(|| p + 1),
			Some(p - w).filter(|&p| p >= 0),
			Some(p + w).filter(|&p| p < l),
		]
		.into_iter()
		.flatten()
		.map(|p| p as usize)
	}

	fn ascending_steps(&self, from_pos: usize) -> impl Iterator<Item = usize> + '_ {
		self.adjacent_positions(from_pos)
			.filter(move |&pos| self.heights[pos] == self.heights[from_pos] + 1)
	}

	fn trailheads(&self) -> impl Iterator<Item = usize> + '_ {
		self.heights.iter()
			.enumerate()
			.filter_map(|(pos, &height)| (height == 0).then_some(pos))
	}

	/// Number of height-9 positions reachable from `from_pos` by only ever
	/// stepping up by exactly one.
	fn score(&self, from_pos: usize) -> usize {
		use std::collections::HashSet;
		let mut stack = vec![from_pos];
		let mut seen = HashSet::from([from_pos]);
		let mut summits = 0;
		while let Some(pos) = stack.pop() {
			if self.heights[pos] == 9 {
				summits += 1;
				continue
			}
			for next in self.ascending_steps(pos) {
				if seen.insert(next) { stack.push(next) }
			}
		}
		summits
	}

	/// Number of distinct ascending trails from `from_pos` to any height-9
	/// position. The memo table is owned by the caller so one table can
	/// serve every trailhead of a map.
	fn rating(&self, from_pos: usize, trails: &mut std::collections::HashMap<usize, u64>) -> u64 {
		if self.heights[from_pos] == 9 { return 1 }
		if let Some(&known) = trails.get(&from_pos) { return known }
		let rating = self.ascending_steps(from_pos)
			.collect::<Vec<_>>()
			.into_iter()
			.map(|pos| self.rating(pos, trails))
			.sum::<u64>();
		trails.insert(from_pos, rating);
		rating
	}
}


fn input_map_from_str(s: &str) -> TopoMap {
	s.parse().unwrap()
}


fn part1_impl(input_map: TopoMap) -> usize {
	input_map.trailheads()
		.map(|pos| input_map.score(pos))
		.sum()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_map_from_str(input))
}


fn part2_impl(input_map: TopoMap) -> u64 {
	let mut trails = std::collections::HashMap::new();
	input_map.trailheads()
		.collect::<Vec<_>>()
		.into_iter()
		.map(|pos| input_map.rating(pos, &mut trails))
		.sum()
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_map_from_str(input))
}


mod parsing {
	use std::str::FromStr;
	use super::TopoMap;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum TopoMapError {
		Empty,
		Width { line: usize, width: usize, len: usize },
		Height { line: usize, column: usize, found: char },
	}

	impl FromStr for TopoMap {
		type Err = TopoMapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use TopoMapError::*;
			let mut heights = Vec::with_capacity(s.len());
			let mut width = None;
			for (l, line) in s.lines().enumerate() {
				let width = *width.get_or_insert(line.len());
				if line.len() != width {
					return Err(Width { line: l + 1, width, len: line.len() })
				}
				for (c, chr) in line.chars().enumerate() {
					heights.push(chr.to_digit(10)
						.map(|digit| digit as u8)
						.ok_or(Height { line: l + 1, column: c + 1, found: chr })?)
				}
			}
			let width = width.filter(|&w| w > 0).ok_or(Empty)?;
			Ok(TopoMap { heights, width })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		89010123
		78121874
		87430965
		96549874
		45678903
		32019012
		01329801
		10456732
	" };
	assert_eq!(part1_impl(input_map_from_str(INPUT)), 36);
	assert_eq!(part2_impl(input_map_from_str(INPUT)), 81);
}
