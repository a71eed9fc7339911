// Copyright (c) 2025 advent24 contributors


type Report = Vec<i64>;

fn input_reports_from_str(s: &str) -> Vec<Report> {
	parsing::try_reports_from_str(s).unwrap()
}


/// A report is safe when its levels are strictly monotonic with steps
/// of at most three.
fn is_safe(levels: impl Iterator<Item = i64> + Clone) -> bool {
	use itertools::Itertools as _;
	let mut deltas = levels.tuple_windows().map(|(prev, next)| next - prev);
	deltas.clone().all(|d| (1..=3).contains(&d)) || deltas.all(|d| (-3..=-1).contains(&d))
}

fn part1_impl(input_reports: Vec<Report>) -> usize {
	input_reports.iter()
		.filter(|report| is_safe(report.iter().copied()))
		.count()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_reports_from_str(input))
}


fn part2_impl(input_reports: Vec<Report>) -> usize {
	input_reports.iter()
		.filter(|report| is_safe(report.iter().copied())
			|| (0..report.len()).any(|skipped| is_safe(report.iter()
				.enumerate()
				.filter_map(|(i, &level)| (i != skipped).then_some(level)))))
		.count()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_reports_from_str(input))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Report;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct ReportsError {
		line: usize,
		source: ParseIntError,
	}

	pub(super) fn try_reports_from_str(s: &str) -> Result<Vec<Report>, ReportsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.split_whitespace()
				.map(|level| level.parse())
				.collect::<Result<_, _>>()
				.map_err(|e| ReportsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		7 6 4 2 1
		1 2 7 8 9
		9 7 6 2 1
		1 3 2 4 5
		8 6 4 4 1
		1 3 6 7 9
	" };
	assert_eq!(part1_impl(input_reports_from_str(INPUT)), 2);
	assert_eq!(part2_impl(input_reports_from_str(INPUT)), 4);
}
