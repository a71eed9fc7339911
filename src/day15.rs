// Copyright (c) 2025 advent24 contributors


#[derive(Clone, Copy, PartialEq, Eq)]
enum Space {
	Open,
	Wall,
	Box,
	BoxLeft,
	BoxRight,
}

#[derive(Clone, Copy)]
enum Move {
	Up,
	Down,
	Left,
	Right,
}

struct Warehouse {
	spaces: Vec<Space>,
	width: usize,
	robot: usize,
}

impl Warehouse {
	fn offset(&self, mov: Move) -> isize {
		match mov {
			Move::Up => -(self.width as isize),
			Move::Down => self.width as isize,
			Move::Left => -1,
			Move::Right => 1,
		}
	}

	/// Pushes the robot one step, shoving any chain (or, for wide boxes
	/// pushed vertically, tree) of boxes ahead of it, unless something in
	/// that tree is backed by a wall.
	fn push(&mut self, mov: Move) {
		use std::collections::HashSet;

		let offset = self.offset(mov);
		let vertical = matches!(mov, Move::Up | Move::Down);

		// Walls border the whole grid, so stepping can't leave it.
		let mut moving = vec![self.robot];
		let mut seen = HashSet::from([self.robot]);
		let mut next = 0;
		while next < moving.len() {
			let ahead = (moving[next] as isize + offset) as usize;
			next += 1;
			let partner = match self.spaces[ahead] {
				Space::Wall => return,
				Space::Open => continue,
				Space::Box => None,
				Space::BoxLeft => vertical.then(|| ahead + 1),
				Space::BoxRight => vertical.then(|| ahead - 1),
			};
			for pos in std::iter::once(ahead).chain(partner) {
				if seen.insert(pos) { moving.push(pos) }
			}
		}

		// Farthest first, so every cell moves into a vacated space.
		for &pos in moving.iter().rev() {
			let ahead = (pos as isize + offset) as usize;
			self.spaces[ahead] = self.spaces[pos];
			self.spaces[pos] = Space::Open;
		}
		self.robot = (self.robot as isize + offset) as usize;
	}

	/// Sum of the boxes' GPS coordinates (100 × row + column, wide boxes
	/// measured at their left half).
	fn gps(&self) -> u64 {
		self.spaces.iter()
			.enumerate()
			.filter(|(_, space)| matches!(space, Space::Box | Space::BoxLeft))
			.map(|(pos, _)| (100 * (pos / self.width) + pos % self.width) as u64)
			.sum()
	}
}

/// Doubles the warehouse's width: boxes become `[]`, the robot keeps a
/// single cell.
fn widened(s: &str) -> String {
	s.chars()
		.flat_map(|chr| match chr {
			'#' => ['#', '#'],
			'O' => ['[', ']'],
			'.' => ['.', '.'],
			'@' => ['@', '.'],
			chr => [chr, '\0'],
		})
		.filter(|&chr| chr != '\0')
		.collect()
}


fn input_warehouse_from_str(s: &str) -> (Warehouse, Vec<Move>) {
	parsing::try_warehouse_from_str(s).unwrap()
}


fn part1and2_impl((mut warehouse, moves): (Warehouse, Vec<Move>)) -> u64 {
	for mov in moves {
		warehouse.push(mov);
	}
	warehouse.gps()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1and2_impl(input_warehouse_from_str(input))
}

pub(crate) fn part2(input: &str) -> u64 {
	let (map, moves) = input.split_once("\n\n")
		.expect("Expected map & moves blocks");
	part1and2_impl(input_warehouse_from_str(&format!("{}\n\n{moves}", widened(map))))
}


mod parsing {
	use super::{Move, Space, Warehouse};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum WarehouseError {
		MissingMoves,
		Width { line: usize, width: usize, len: usize },
		UnknownSpace { line: usize, column: usize, found: char },
		DuplicateRobot { line: usize, column: usize },
		NoRobot,
		UnknownMove { offset: usize, found: char },
	}

	pub(super) fn try_warehouse_from_str(s: &str) -> Result<(Warehouse, Vec<Move>), WarehouseError> {
		use WarehouseError::*;

		let (map, moves) = s.split_once("\n\n").ok_or(MissingMoves)?;

		let mut spaces = Vec::with_capacity(map.len());
		let mut width = None;
		let mut robot = None;
		for (l, line) in map.lines().enumerate() {
			let width = *width.get_or_insert(line.len());
			if line.len() != width {
				return Err(Width { line: l + 1, width, len: line.len() })
			}
			for (c, chr) in line.chars().enumerate() {
				spaces.push(match chr {
					'.' => Space::Open,
					'#' => Space::Wall,
					'O' => Space::Box,
					'[' => Space::BoxLeft,
					']' => Space::BoxRight,
					'@' => if robot.replace(spaces.len()).is_some() {
						return Err(DuplicateRobot { line: l + 1, column: c + 1 })
					} else {
						Space::Open
					}
					found => return Err(UnknownSpace { line: l + 1, column: c + 1, found })
				})
			}
		}
		let robot = robot.ok_or(NoRobot)?;

		let moves = moves.chars()
			.filter(|chr| !chr.is_whitespace())
			.enumerate()
			.map(|(offset, chr)| match chr {
				'^' => Ok(Move::Up),
				'v' => Ok(Move::Down),
				'<' => Ok(Move::Left),
				'>' => Ok(Move::Right),
				found => Err(UnknownMove { offset, found }),
			})
			.collect::<Result<_, _>>()?;

		let width = width.unwrap_or(0);
		Ok((Warehouse { spaces, width, robot }, moves))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const SMALL: &str = indoc::indoc! { "
		########
		#..O.O.#
		##@.O..#
		#...O..#
		#.#.O..#
		#...O..#
		#......#
		########

		<^^>>>vv<v>>v<<
	" };

	const LARGE: &str = indoc::indoc! { "
		##########
		#..O..O.O#
		#......O.#
		#.OO..O.O#
		#..O@..O.#
		#O#..O...#
		#O..O..O.#
		#.OO.O.OO#
		#....O...#
		##########

		<vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
		vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
		><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
		<<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
		^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
		^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
		>^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
		<><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
		^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
		v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^
	" };

	#[test]
	fn part1() {
		assert_eq!(part1and2_impl(input_warehouse_from_str(SMALL)), 2028);
		assert_eq!(part1and2_impl(input_warehouse_from_str(LARGE)), 10092);
	}

	#[test]
	fn part2() {
		assert_eq!(super::part2(LARGE), 9021);
	}
}
