// Copyright (c) 2025 advent24 contributors


use crate::pathfinding::{self, Cell, Costs, Dir, Grid};

const COSTS: Costs = Costs { step: 1, turn: 0 };


fn corrupted_grid(bytes: &[[usize; 2]], size: usize) -> Grid {
	let mut grid = Grid::open(size, size);
	for &[x, y] in bytes {
		grid.set(y * size + x, Cell::Wall);
	}
	grid
}

fn shortest_path(bytes: &[[usize; 2]], size: usize) -> Option<u64> {
	pathfinding::shortest_cost(&corrupted_grid(bytes, size), 0, Dir::Right, size * size - 1, COSTS)
}

/// First byte whose fall cuts off the exit. Reachability only ever
/// degrades as bytes fall, so the cutoff is found by bisection.
fn first_blocking_byte(bytes: &[[usize; 2]], size: usize) -> Option<[usize; 2]> {
	let (mut passable, mut blocked) = (0, bytes.len());
	if shortest_path(&bytes[..blocked], size).is_some() { return None }
	while blocked - passable > 1 {
		let mid = (passable + blocked) / 2;
		if shortest_path(&bytes[..mid], size).is_some() {
			passable = mid;
		} else {
			blocked = mid;
		}
	}
	Some(bytes[blocked - 1])
}


fn input_bytes_from_str(s: &str) -> Vec<[usize; 2]> {
	parsing::try_bytes_from_str(s).unwrap()
}


fn part1_impl(input_bytes: Vec<[usize; 2]>, size: usize, fallen: usize) -> u64 {
	shortest_path(&input_bytes[..fallen.min(input_bytes.len())], size)
		.expect("No route to the exit")
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_bytes_from_str(input), 71, 1024)
}


fn part2_impl(input_bytes: Vec<[usize; 2]>, size: usize) -> String {
	let [x, y] = first_blocking_byte(&input_bytes, size)
		.expect("The exit is never cut off");
	format!("{x},{y}")
}

pub(crate) fn part2(input: &str) -> String {
	part2_impl(input_bytes_from_str(input), 71)
}


mod parsing {
	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct ByteError {
		line: usize,
	}

	pub(super) fn try_bytes_from_str(s: &str) -> Result<Vec<[usize; 2]>, ByteError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				let err = || ByteError { line: l + 1 };
				let (x, y) = line.split_once(',').ok_or_else(err)?;
				Ok([x.parse().map_err(|_| err())?, y.parse().map_err(|_| err())?])
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		5,4
		4,2
		4,5
		3,0
		2,1
		6,3
		2,4
		1,5
		0,6
		3,3
		2,6
		5,1
		1,2
		5,5
		2,5
		6,5
		1,4
		0,4
		6,4
		1,1
		6,1
		1,0
		0,5
		1,6
		2,0
	" };

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_bytes_from_str(INPUT), 7, 12), 22);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(input_bytes_from_str(INPUT), 7), "6,1");
	}
}
