// Copyright (c) 2025 advent24 contributors


use crate::pathfinding::{self, Costs, Dir, Grid};

struct Maze {
	grid: Grid,
	start: usize,
	end: usize,
}

// Reindeer race scoring: a step forward is 1 point, a 90° turn is 1000.
const COSTS: Costs = Costs { step: 1, turn: 1000 };


fn input_maze_from_str(s: &str) -> Maze {
	s.parse().unwrap()
}


fn part1_impl(input_maze: Maze) -> u64 {
	pathfinding::shortest_cost(&input_maze.grid, input_maze.start, Dir::Right, input_maze.end, COSTS)
		.expect("No route from start to end")
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_maze_from_str(input))
}


fn part2_impl(input_maze: Maze) -> usize {
	pathfinding::optimal_cells(&input_maze.grid, input_maze.start, Dir::Right, input_maze.end, COSTS)
		.expect("No route from start to end")
		.len()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_maze_from_str(input))
}


mod parsing {
	use std::str::FromStr;
	use crate::pathfinding::{Cell, Grid};
	use super::Maze;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MazeError {
		Empty,
		Width { line: usize, width: usize, len: usize },
		Space { line: usize, column: usize, found: char },
		Duplicate { line: usize, column: usize, marker: char },
		Missing(char),
	}

	impl FromStr for Maze {
		type Err = MazeError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use MazeError::*;
			let mut cells = Vec::with_capacity(s.len());
			let mut width = None;
			let (mut start, mut end) = (None, None);
			for (l, line) in s.lines().enumerate() {
				let width = *width.get_or_insert(line.len());
				if line.len() != width {
					return Err(Width { line: l + 1, width, len: line.len() })
				}
				for (c, chr) in line.chars().enumerate() {
					cells.push(match chr {
						'.' => Cell::Open,
						'#' => Cell::Wall,
						'S' | 'E' => {
							let marker = if chr == 'S' { &mut start } else { &mut end };
							if marker.replace(cells.len()).is_some() {
								return Err(Duplicate { line: l + 1, column: c + 1, marker: chr })
							}
							Cell::Open
						}
						found => return Err(Space { line: l + 1, column: c + 1, found })
					})
				}
			}
			let width = width.filter(|&w| w > 0).ok_or(Empty)?;
			Ok(Maze {
				grid: Grid::from_cells(cells, width),
				start: start.ok_or(Missing('S'))?,
				end: end.ok_or(Missing('E'))?,
			})
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			###############
			#.......#....E#
			#.#.###.#.###.#
			#.....#.#...#.#
			#.###.#####.#.#
			#.#.#.......#.#
			#.#.#####.###.#
			#...........#.#
			###.#.#####.#.#
			#...#.....#.#.#
			#.#.#.###.#.#.#
			#.....#...#.#.#
			#.###.#.#.#.#.#
			#S..#.....#...#
			###############
		" },
		indoc::indoc! { "
			#################
			#...#...#...#..E#
			#.#.#.#.#.#.#.#.#
			#.#.#.#...#...#.#
			#.#.#.#.###.#.#.#
			#...#.#.#.....#.#
			#.#.#.#.#.#####.#
			#.#...#.#.#.....#
			#.#.#####.#.###.#
			#.#.#.......#...#
			#.#.###.#####.###
			#.#.#...#.....#.#
			#.#.#.#####.###.#
			#.#.#.........#.#
			#.#.#.#########.#
			#S#.............#
			#################
		" },
	];

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_maze_from_str(INPUTS[0])), 7036);
		assert_eq!(part1_impl(input_maze_from_str(INPUTS[1])), 11048);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(input_maze_from_str(INPUTS[0])), 45);
		assert_eq!(part2_impl(input_maze_from_str(INPUTS[1])), 64);
	}
}
