// Copyright (c) 2025 advent24 contributors


#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Heading {
	Up,
	Right,
	Down,
	Left,
}

impl Heading {
	fn turned_right(self) -> Self {
		use Heading::*;
		match self {
			Up => Right,
			Right => Down,
			Down => Left,
			Left => Up,
		}
	}
}

struct Lab {
	obstructions: Vec<bool>,
	width: usize,
	guard: usize,
}

enum Ahead {
	Exit,
	Obstructed,
	Open(usize),
}

enum Patrol {
	Exited(std::collections::HashSet<usize>),
	Looped,
}

impl Lab {
	fn ahead(&self, pos: usize, heading: Heading, extra_obstruction: Option<usize>) -> Ahead {
		let (x, y, w, h) = (pos % self.width, pos / self.width,
			self.width, self.obstructions.len() / self.width);
		let next = match heading {
			Heading::Up if y > 0 => pos - w,
			Heading::Right if x < w - 1 => pos + 1,
			Heading::Down if y < h - 1 => pos + w,
			Heading::Left if x > 0 => pos - 1,
			_ => return Ahead::Exit,
		};
		if self.obstructions[next] || extra_obstruction == Some(next) { Ahead::Obstructed }
		else { Ahead::Open(next) }
	}

	/// Walks the guard from her starting position until she either leaves
	/// the lab or revisits an obstruction facing the same way (a loop). The
	/// loop check need only consider turning points; a patrol that never
	/// turns cannot loop.
	fn patrol(&self, extra_obstruction: Option<usize>) -> Patrol {
		use std::collections::HashSet;

		let mut visited = HashSet::from([self.guard]);
		let mut turns = HashSet::new();
		let (mut pos, mut heading) = (self.guard, Heading::Up);
		loop {
			match self.ahead(pos, heading, extra_obstruction) {
				Ahead::Exit => return Patrol::Exited(visited),
				Ahead::Obstructed => {
					if !turns.insert((pos, heading)) { return Patrol::Looped }
					heading = heading.turned_right();
				}
				Ahead::Open(next) => {
					pos = next;
					visited.insert(pos);
				}
			}
		}
	}
}


fn input_lab_from_str(s: &str) -> Lab {
	s.parse().unwrap()
}


fn part1_impl(input_lab: Lab) -> usize {
	match input_lab.patrol(None) {
		Patrol::Exited(visited) => visited.len(),
		Patrol::Looped => panic!("Unobstructed patrol should exit the lab"),
	}
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_lab_from_str(input))
}


fn part2_impl(input_lab: Lab) -> usize {
	// Only positions on the unobstructed route can change the patrol.
	let Patrol::Exited(route) = input_lab.patrol(None)
		else { panic!("Unobstructed patrol should exit the lab") };
	route.into_iter()
		.filter(|&pos| pos != input_lab.guard
			&& matches!(input_lab.patrol(Some(pos)), Patrol::Looped))
		.count()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_lab_from_str(input))
}


mod parsing {
	use std::str::FromStr;
	use super::Lab;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum LabError {
		Empty,
		Width { line: usize, width: usize, len: usize },
		Space { line: usize, column: usize, found: char },
		DuplicateGuard { line: usize, column: usize },
		NoGuard,
	}

	impl FromStr for Lab {
		type Err = LabError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use LabError::*;
			let mut obstructions = Vec::with_capacity(s.len());
			let mut width = None;
			let mut guard = None;
			for (l, line) in s.lines().enumerate() {
				let width = *width.get_or_insert(line.len());
				if line.len() != width {
					return Err(Width { line: l + 1, width, len: line.len() })
				}
				for (c, chr) in line.chars().enumerate() {
					obstructions.push(match chr {
						'.' => false,
						'#' => true,
						'^' => if guard.replace(obstructions.len()).is_some() {
							return Err(DuplicateGuard { line: l + 1, column: c + 1 })
						} else {
							false
						}
						found => return Err(Space { line: l + 1, column: c + 1, found })
					})
				}
			}
			let width = width.filter(|&w| w > 0).ok_or(Empty)?;
			let guard = guard.ok_or(NoGuard)?;
			Ok(Lab { obstructions, width, guard })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		....#.....
		.........#
		..........
		..#.......
		.......#..
		..........
		.#..^.....
		........#.
		#.........
		......#...
	" };
	assert_eq!(part1_impl(input_lab_from_str(INPUT)), 41);
	assert_eq!(part2_impl(input_lab_from_str(INPUT)), 6);
}
