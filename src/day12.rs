// Copyright (c) 2025 advent24 contributors


struct Garden {
	crops: Vec<u8>,
	width: usize,
}

impl Garden {
	fn height(&self) -> usize {
		self.crops.len() / self.width
	}

	fn same_crop(&self, pos: usize, dx: isize, dy: isize) -> bool {
		let (x, y) = ((pos % self.width) as isize + dx, (pos / self.width) as isize + dy);
		x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height()
			&& self.crops[y as usize * self.width + x as usize] == self.crops[pos]
	}

	/// Union-find regions of equal adjacent crops; each position is unioned
	/// with its matching west & north neighbors in one pass.
	fn regions(&self) -> Regions {
		let mut regions = Regions { parent: (0..self.crops.len()).collect() };
		for pos in 0..self.crops.len() {
			if self.same_crop(pos, -1, 0) { regions.union(pos, pos - 1) }
			if self.same_crop(pos, 0, -1) { regions.union(pos, pos - self.width) }
		}
		regions
	}

	/// Perimeter contribution of one position: its fence segments.
	fn fences(&self, pos: usize) -> u64 {
		[(1, 0), (-1, 0), (0, 1), (0, -1)].into_iter()
			.filter(|&(dx, dy)| !self.same_crop(pos, dx, dy))
			.count() as u64
	}

	/// Corner contribution of one position. A region has as many sides as
	/// corners: a convex corner where both orthogonal neighbors differ, a
	/// concave one where both match but the diagonal between them differs.
	fn corners(&self, pos: usize) -> u64 {
		[(-1, 0, 0, -1), (0, -1, 1, 0), (1, 0, 0, 1), (0, 1, -1, 0)].into_iter()
			.filter(|&(dx0, dy0, dx1, dy1)| {
				let (side0, side1) = (self.same_crop(pos, dx0, dy0), self.same_crop(pos, dx1, dy1));
				!side0 && !side1
					|| side0 && side1 && !self.same_crop(pos, dx0 + dx1, dy0 + dy1)
			})
			.count() as u64
	}

	fn fencing_price(&self, per_position: impl Fn(&Self, usize) -> u64) -> u64 {
		use std::collections::HashMap;
		let mut regions = self.regions();
		let mut areas: HashMap<usize, u64> = HashMap::new();
		let mut totals: HashMap<usize, u64> = HashMap::new();
		for pos in 0..self.crops.len() {
			let root = regions.find(pos);
			*areas.entry(root).or_default() += 1;
			*totals.entry(root).or_default() += per_position(self, pos);
		}
		areas.into_iter()
			.map(|(root, area)| area * totals[&root])
			.sum()
	}
}

struct Regions {
	parent: Vec<usize>,
}

impl Regions {
	fn find(&mut self, pos: usize) -> usize {
		if self.parent[pos] != pos {
			let root = self.find(self.parent[pos]);
			self.parent[pos] = root;
		}
		self.parent[pos]
	}

	fn union(&mut self, pos0: usize, pos1: usize) {
		let (root0, root1) = (self.find(pos0), self.find(pos1));
		if root0 != root1 { self.parent[root1] = root0 }
	}
}


fn input_garden_from_str(s: &str) -> Garden {
	s.parse().unwrap()
}


fn part1_impl(input_garden: Garden) -> u64 {
	input_garden.fencing_price(Garden::fences)
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_garden_from_str(input))
}


fn part2_impl(input_garden: Garden) -> u64 {
	input_garden.fencing_price(Garden::corners)
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_garden_from_str(input))
}


mod parsing {
	use std::str::FromStr;
	use super::Garden;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GardenError {
		Empty,
		Width { line: usize, width: usize, len: usize },
		Crop { line: usize, column: usize, found: char },
	}

	impl FromStr for Garden {
		type Err = GardenError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use GardenError::*;
			let mut crops = Vec::with_capacity(s.len());
			let mut width = None;
			for (l, line) in s.lines().enumerate() {
				let width = *width.get_or_insert(line.len());
				if line.len() != width {
					return Err(Width { line: l + 1, width, len: line.len() })
				}
				for (c, chr) in line.chars().enumerate() {
					if !chr.is_ascii_uppercase() {
						return Err(Crop { line: l + 1, column: c + 1, found: chr })
					}
					crops.push(chr as u8);
				}
			}
			let width = width.filter(|&w| w > 0).ok_or(Empty)?;
			Ok(Garden { crops, width })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const SMALL: &str = indoc::indoc! { "
		AAAA
		BBCD
		BBCC
		EEEC
	" };

	const HOLES: &str = indoc::indoc! { "
		OOOOO
		OXOXO
		OOOOO
		OXOXO
		OOOOO
	" };

	const LARGE: &str = indoc::indoc! { "
		RRRRIICCFF
		RRRRIICCCF
		VVRRRCCFFF
		VVRCCCJFFF
		VVVVCJJCFE
		VVIVCCJJEE
		VVIIICJJEE
		MIIIIIJJEE
		MIIISIJEEE
		MMMISSJEEE
	" };

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_garden_from_str(SMALL)), 140);
		assert_eq!(part1_impl(input_garden_from_str(HOLES)), 772);
		assert_eq!(part1_impl(input_garden_from_str(LARGE)), 1930);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(input_garden_from_str(SMALL)), 80);
		assert_eq!(part2_impl(input_garden_from_str(HOLES)), 436);
		assert_eq!(part2_impl(input_garden_from_str(indoc::indoc! { "
			EEEEE
			EXXXX
			EEEEE
			EXXXX
			EEEEE
		" })), 236);
		assert_eq!(part2_impl(input_garden_from_str(indoc::indoc! { "
			AAAAAA
			AAABBA
			AAABBA
			ABBAAA
			ABBAAA
			AAAAAA
		" })), 368);
		assert_eq!(part2_impl(input_garden_from_str(LARGE)), 1206);
	}
}
