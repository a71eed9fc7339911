// Copyright (c) 2025 advent24 contributors


fn input_lists_from_str(s: &str) -> (Vec<u64>, Vec<u64>) {
	parsing::try_lists_from_str(s).unwrap()
}


fn part1_impl((mut left, mut right): (Vec<u64>, Vec<u64>)) -> u64 {
	left.sort_unstable();
	right.sort_unstable();
	left.into_iter().zip(right).map(|(l, r)| l.abs_diff(r)).sum()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_lists_from_str(input))
}


fn part2_impl((left, right): (Vec<u64>, Vec<u64>)) -> u64 {
	use itertools::Itertools as _;
	let counts = right.into_iter().counts();
	left.into_iter()
		.map(|id| id * counts.get(&id).copied().unwrap_or(0) as u64)
		.sum()
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_lists_from_str(input))
}


mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ListsError {
		Format { line: usize },
		Id { line: usize, source: ParseIntError },
	}

	pub(super) fn try_lists_from_str(s: &str) -> Result<(Vec<u64>, Vec<u64>), ListsError> {
		use {itertools::Itertools as _, ListsError::*};
		let mut lists = (Vec::new(), Vec::new());
		for (l, line) in s.lines().enumerate() {
			let (left, right) = line.split_whitespace()
				.collect_tuple()
				.ok_or(Format { line: l + 1 })?;
			lists.0.push(left.parse().map_err(|e| Id { line: l + 1, source: e })?);
			lists.1.push(right.parse().map_err(|e| Id { line: l + 1, source: e })?);
		}
		Ok(lists)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		3   4
		4   3
		2   5
		1   3
		3   9
		3   3
	" };
	assert_eq!(part1_impl(input_lists_from_str(INPUT)), 11);
	assert_eq!(part2_impl(input_lists_from_str(INPUT)), 31);
}
