// Copyright (c) 2025 advent24 contributors


struct Grid {
	chars: Vec<u8>,
	width: usize,
}

impl Grid {
	fn height(&self) -> usize {
		self.chars.len() / self.width
	}

	fn get(&self, x: isize, y: isize) -> Option<u8> {
		(x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height())
			.then(|| self.chars[y as usize * self.width + x as usize])
	}

	fn word_at(&self, word: &[u8], x: isize, y: isize, [dx, dy]: [isize; 2]) -> bool {
		word.iter()
			.enumerate()
			.all(|(i, &chr)| self.get(x + i as isize * dx, y + i as isize * dy) == Some(chr))
	}
}


fn input_grid_from_str(s: &str) -> Grid {
	parsing::try_grid_from_str(s).unwrap()
}


fn part1_impl(input_grid: Grid) -> usize {
	use itertools::Itertools as _;
	const DIRS: [[isize; 2]; 8] =
		[[1, 0], [1, 1], [0, 1], [-1, 1], [-1, 0], [-1, -1], [0, -1], [1, -1]];
	(0..input_grid.width as isize).cartesian_product(0..input_grid.height() as isize)
		.map(|(x, y)| DIRS.iter()
			.filter(|&&dir| input_grid.word_at(b"XMAS", x, y, dir))
			.count())
		.sum()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_grid_from_str(input))
}


fn part2_impl(input_grid: Grid) -> usize {
	use itertools::Itertools as _;
	// Two `MAS`es crossing at their `A`, each read in either direction.
	(0..input_grid.width as isize).cartesian_product(0..input_grid.height() as isize)
		.filter(|&(x, y)| input_grid.get(x, y) == Some(b'A')
			&& (input_grid.word_at(b"MAS", x - 1, y - 1, [1, 1])
				|| input_grid.word_at(b"SAM", x - 1, y - 1, [1, 1]))
			&& (input_grid.word_at(b"MAS", x + 1, y - 1, [-1, 1])
				|| input_grid.word_at(b"SAM", x + 1, y - 1, [-1, 1])))
		.count()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_grid_from_str(input))
}


mod parsing {
	use super::Grid;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GridError {
		Empty,
		Width { line: usize, width: usize, len: usize },
	}

	pub(super) fn try_grid_from_str(s: &str) -> Result<Grid, GridError> {
		use GridError::*;
		let mut chars = Vec::with_capacity(s.len());
		let mut width = None;
		for (l, line) in s.lines().enumerate() {
			let width = *width.get_or_insert(line.len());
			if line.len() != width {
				return Err(Width { line: l + 1, width, len: line.len() })
			}
			chars.extend_from_slice(line.as_bytes());
		}
		let width = width.filter(|&w| w > 0).ok_or(Empty)?;
		Ok(Grid { chars, width })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		MMMSXXMASM
		MSAMXMSMSA
		AMXSXMAAMM
		MSAMASMSMX
		XMASAMXAMM
		XXAMMXXAMA
		SMSMSASXSS
		SAXAMASAAA
		MAMMMXMMMM
		MXMXAXMASX
	" };
	assert_eq!(part1_impl(input_grid_from_str(INPUT)), 18);
	assert_eq!(part2_impl(input_grid_from_str(INPUT)), 9);
}
