// Copyright (c) 2025 advent24 contributors


struct Equation {
	target: u64,
	operands: Vec<u64>,
}

/// Whether some left-to-right chain of operators over `operands` yields
/// `target`. Works backwards from the target: the last operand can be
/// stripped off by inverting a `*` (exact division), a `||` (matching
/// digit suffix, when enabled), or a `+`.
fn solvable(target: u64, operands: &[u64], concat: bool) -> bool {
	let (&last, rest) = operands.split_last()
		.expect("Equations hold at least one operand");
	if rest.is_empty() { return target == last }

	if last > 0 {
		let (div, rem) = num_integer::div_rem(target, last);
		if rem == 0 && solvable(div, rest, concat) { return true }
	}

	if concat {
		let shift = 10u64.pow(last.checked_ilog10().map_or(1, |digits| digits + 1));
		let (div, rem) = num_integer::div_rem(target, shift);
		if rem == last && div > 0 && solvable(div, rest, concat) { return true }
	}

	target >= last && solvable(target - last, rest, concat)
}

fn total_calibration(equations: impl IntoIterator<Item = Equation>, concat: bool) -> u64 {
	equations.into_iter()
		.filter(|eq| solvable(eq.target, &eq.operands, concat))
		.map(|eq| eq.target)
		.sum()
}


fn input_equations_from_str(s: &str) -> Vec<Equation> {
	parsing::try_equations_from_str(s).unwrap()
}


fn part1_impl(input_equations: Vec<Equation>) -> u64 {
	total_calibration(input_equations, false)
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_equations_from_str(input))
}


fn part2_impl(input_equations: Vec<Equation>) -> u64 {
	total_calibration(input_equations, true)
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_equations_from_str(input))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Equation;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum EquationsError {
		MissingColon { line: usize },
		NoOperands { line: usize },
		Number { line: usize, source: ParseIntError },
	}

	pub(super) fn try_equations_from_str(s: &str) -> Result<Vec<Equation>, EquationsError> {
		use EquationsError::*;
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				let (target, operands) = line.split_once(": ")
					.ok_or(MissingColon { line: l + 1 })?;
				let target = target.parse()
					.map_err(|e| Number { line: l + 1, source: e })?;
				let operands = operands.split_whitespace()
					.map(|op| op.parse().map_err(|e| Number { line: l + 1, source: e }))
					.collect::<Result<Vec<_>, _>>()?;
				if operands.is_empty() { return Err(NoOperands { line: l + 1 }) }
				Ok(Equation { target, operands })
			})
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		190: 10 19
		3267: 81 40 27
		83: 17 5
		156: 15 6
		7290: 6 8 6 15
		161011: 16 10 13
		192: 17 8 14
		21037: 9 7 18 13
		292: 11 6 16 20
	" };
	assert!(solvable(292, &[11, 6, 16, 20], false));
	assert!(!solvable(156, &[15, 6], false));
	assert!(solvable(156, &[15, 6], true));
	assert_eq!(part1_impl(input_equations_from_str(INPUT)), 3749);
	assert_eq!(part2_impl(input_equations_from_str(INPUT)), 11387);
}
