// Copyright (c) 2025 advent24 contributors


struct ClawMachine {
	button_a: [i64; 2],
	button_b: [i64; 2],
	prize: [i64; 2],
}

impl ClawMachine {
	/// Fewest tokens to win the prize (button A costs 3, button B costs 1),
	/// or `None` if the prize is unreachable. The two buttons set up a 2×2
	/// integer linear system with at most one solution, so "fewest" is
	/// really "the" solution, accepted only when it is integral and
	/// non-negative.
	fn tokens(&self) -> Option<i64> {
		let [ax, ay] = self.button_a;
		let [bx, by] = self.button_b;
		let [px, py] = self.prize;

		let det = ax * by - ay * bx;
		if det == 0 { return None }
		let (a, a_rem) = num_integer::div_rem(px * by - py * bx, det);
		let (b, b_rem) = num_integer::div_rem(ax * py - ay * px, det);
		(a_rem == 0 && b_rem == 0 && a >= 0 && b >= 0).then(|| 3 * a + b)
	}

	fn with_prize_offset(self, offset: i64) -> Self {
		ClawMachine { prize: [self.prize[0] + offset, self.prize[1] + offset], ..self }
	}
}

fn total_tokens(machines: impl IntoIterator<Item = ClawMachine>) -> i64 {
	machines.into_iter().filter_map(|machine| machine.tokens()).sum()
}


fn input_machines_from_str(s: &str) -> Vec<ClawMachine> {
	parsing::try_machines_from_str(s).unwrap()
}


fn part1_impl(input_machines: Vec<ClawMachine>) -> i64 {
	total_tokens(input_machines)
}

pub(crate) fn part1(input: &str) -> i64 {
	part1_impl(input_machines_from_str(input))
}


fn part2_impl(input_machines: Vec<ClawMachine>) -> i64 {
	total_tokens(input_machines.into_iter()
		.map(|machine| machine.with_prize_offset(10_000_000_000_000)))
}

pub(crate) fn part2(input: &str) -> i64 {
	part2_impl(input_machines_from_str(input))
}


mod parsing {
	use super::ClawMachine;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct MachineError {
		machine: usize,
	}

	pub(super) fn try_machines_from_str(s: &str) -> Result<Vec<ClawMachine>, MachineError> {
		let machine = regex::Regex::new(concat!(
			r"Button A: X\+(\d+), Y\+(\d+)\n",
			r"Button B: X\+(\d+), Y\+(\d+)\n",
			r"Prize: X=(\d+), Y=(\d+)",
		)).unwrap();
		s.split("\n\n")
			.enumerate()
			.map(|(m, block)| {
				let caps = machine.captures(block).ok_or(MachineError { machine: m + 1 })?;
				let number = |i: usize| caps[i].parse::<i64>().map_err(|_| MachineError { machine: m + 1 });
				Ok(ClawMachine {
					button_a: [number(1)?, number(2)?],
					button_b: [number(3)?, number(4)?],
					prize: [number(5)?, number(6)?],
				})
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Button A: X+94, Y+34
		Button B: X+22, Y+67
		Prize: X=8400, Y=5400

		Button A: X+26, Y+66
		Button B: X+67, Y+21
		Prize: X=12748, Y=12176

		Button A: X+17, Y+86
		Button B: X+84, Y+37
		Prize: X=7870, Y=6450

		Button A: X+69, Y+23
		Button B: X+27, Y+71
		Prize: X=18641, Y=10279
	" };

	#[test]
	fn part1() {
		let machines = input_machines_from_str(INPUT);
		let tokens = machines.iter().map(ClawMachine::tokens).collect::<Vec<_>>();
		assert_eq!(tokens, [Some(280), None, Some(200), None]);
		assert_eq!(part1_impl(machines), 480);
	}

	#[test]
	fn part2() {
		let solvable = input_machines_from_str(INPUT).into_iter()
			.map(|machine| machine.with_prize_offset(10_000_000_000_000).tokens().is_some())
			.collect::<Vec<_>>();
		assert_eq!(solvable, [false, true, false, true]);
	}
}
