// Copyright (c) 2025 advent24 contributors


struct Robot {
	pos: [i64; 2],
	vel: [i64; 2],
}

impl Robot {
	/// Position after `steps`, wrapping around the room edges.
	fn pos_after(&self, steps: i64, [width, height]: [i64; 2]) -> [i64; 2] {
		use num_integer::Integer as _;
		[
			(self.pos[0] + steps * self.vel[0]).mod_floor(&width),
			(self.pos[1] + steps * self.vel[1]).mod_floor(&height),
		]
	}
}

fn safety_factor(robots: &[Robot], size: [i64; 2], steps: i64) -> u64 {
	let mid = [size[0] / 2, size[1] / 2];
	let mut quadrants = [0_u64; 4];
	for robot in robots {
		let pos = robot.pos_after(steps, size);
		if pos[0] == mid[0] || pos[1] == mid[1] { continue }
		quadrants[usize::from(pos[0] > mid[0]) + 2 * usize::from(pos[1] > mid[1])] += 1;
	}
	quadrants.into_iter().product()
}

/// First step at which some row holds robots in more than 20 distinct
/// cells — the telltale solid stretch of the Easter egg picture. The robot
/// positions repeat with period `width * height`, so if no such step
/// exists the search fails rather than spinning forever.
fn first_alignment(robots: &[Robot], size: [i64; 2]) -> i64 {
	use itertools::Itertools as _;
	(0..size[0] * size[1])
		.find(|&steps| robots.iter()
			.map(|robot| robot.pos_after(steps, size))
			.unique()
			.map(|[_, y]| y)
			.counts()
			.into_values()
			.any(|row_count| row_count > 20))
		.expect("No aligned frame within a full cycle")
}


fn input_robots_from_str(s: &str) -> Vec<Robot> {
	parsing::try_robots_from_str(s).unwrap()
}


fn part1_impl(input_robots: Vec<Robot>, size: [i64; 2]) -> u64 {
	safety_factor(&input_robots, size, 100)
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_robots_from_str(input), [101, 103])
}


pub(crate) fn part2(input: &str) -> i64 {
	first_alignment(&input_robots_from_str(input), [101, 103])
}


mod parsing {
	use super::Robot;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct RobotError {
		line: usize,
	}

	pub(super) fn try_robots_from_str(s: &str) -> Result<Vec<Robot>, RobotError> {
		let robot = regex::Regex::new(r"p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)").unwrap();
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				let caps = robot.captures(line).ok_or(RobotError { line: l + 1 })?;
				let number = |i: usize| caps[i].parse().map_err(|_| RobotError { line: l + 1 });
				Ok(Robot {
					pos: [number(1)?, number(2)?],
					vel: [number(3)?, number(4)?],
				})
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		p=0,4 v=3,-3
		p=6,3 v=-1,-3
		p=10,3 v=-1,2
		p=2,0 v=2,-1
		p=0,0 v=1,3
		p=3,0 v=-2,-2
		p=7,6 v=-1,-3
		p=3,0 v=-1,-2
		p=9,3 v=2,3
		p=7,3 v=-1,2
		p=2,4 v=2,-3
		p=9,5 v=-3,-3
	" };

	#[test]
	fn moves_wrap() {
		let robot = Robot { pos: [2, 4], vel: [2, -3] };
		assert_eq!(robot.pos_after(1, [11, 7]), [4, 1]);
		assert_eq!(robot.pos_after(2, [11, 7]), [6, 5]);
		assert_eq!(robot.pos_after(5, [11, 7]), [1, 3]);
	}

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_robots_from_str(INPUT), [11, 7]), 12);
	}

	#[test]
	fn part2() {
		// 21 robots spread over the rows that all drop into row 2 at step 3.
		let robots = (0..21)
			.map(|i| Robot { pos: [i, i % 7], vel: [0, (2 - i % 7) * 5 % 7] })
			.collect::<Vec<_>>();
		assert_eq!(first_alignment(&robots, [22, 7]), 3);
	}
}
