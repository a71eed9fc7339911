// Copyright (c) 2025 advent24 contributors


type Page = u32;

struct PrintQueue {
	rules: Vec<(Page, Page)>,
	updates: Vec<Vec<Page>>,
}

impl PrintQueue {
	fn page_indices(update: &[Page]) -> std::collections::HashMap<Page, usize> {
		update.iter().enumerate().map(|(i, &page)| (page, i)).collect()
	}

	fn is_ordered(&self, update: &[Page]) -> bool {
		let indices = Self::page_indices(update);
		self.rules.iter().all(|(before, after)|
			match (indices.get(before), indices.get(after)) {
				(Some(b), Some(a)) => b < a,
				_ => true,
			})
	}

	/// Reorders an update by how often each page appears on the right-hand
	/// side of a rule relevant to this update: pages nothing must precede
	/// sort first.
	fn reordered(&self, update: &[Page]) -> Vec<Page> {
		use itertools::Itertools as _;
		let indices = Self::page_indices(update);
		let successor_counts = self.rules.iter()
			.filter(|(before, after)|
				indices.contains_key(before) && indices.contains_key(after))
			.map(|&(_, after)| after)
			.counts();
		let mut update = update.to_vec();
		update.sort_by_key(|page| successor_counts.get(page).copied().unwrap_or(0));
		update
	}
}

fn middle_page(update: &[Page]) -> u64 {
	update[update.len() / 2] as u64
}


fn input_queue_from_str(s: &str) -> PrintQueue {
	parsing::try_queue_from_str(s).unwrap()
}


fn part1_impl(input_queue: PrintQueue) -> u64 {
	input_queue.updates.iter()
		.filter(|update| input_queue.is_ordered(update))
		.map(|update| middle_page(update))
		.sum()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_queue_from_str(input))
}


fn part2_impl(input_queue: PrintQueue) -> u64 {
	input_queue.updates.iter()
		.filter(|update| !input_queue.is_ordered(update))
		.map(|update| middle_page(&input_queue.reordered(update)))
		.sum()
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_queue_from_str(input))
}


mod parsing {
	use std::num::ParseIntError;
	use super::PrintQueue;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum QueueError {
		MissingUpdates,
		Rule { line: usize },
		Page { line: usize, source: ParseIntError },
	}

	pub(super) fn try_queue_from_str(s: &str) -> Result<PrintQueue, QueueError> {
		use QueueError::*;
		let (rules, updates) = s.split_once("\n\n").ok_or(MissingUpdates)?;
		let num_rule_lines = rules.lines().count();
		let rules = rules.lines()
			.enumerate()
			.map(|(l, line)| {
				let (before, after) = line.split_once('|').ok_or(Rule { line: l + 1 })?;
				Ok((
					before.parse().map_err(|e| Page { line: l + 1, source: e })?,
					after.parse().map_err(|e| Page { line: l + 1, source: e })?,
				))
			})
			.collect::<Result<_, _>>()?;
		let updates = updates.lines()
			.enumerate()
			.map(|(l, line)| line.split(',')
				.map(|page| page.parse()
					.map_err(|e| Page { line: num_rule_lines + 2 + l, source: e }))
				.collect())
			.collect::<Result<_, _>>()?;
		Ok(PrintQueue { rules, updates })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		47|53
		97|13
		97|61
		97|47
		75|29
		61|13
		75|53
		29|13
		97|29
		53|29
		61|53
		97|53
		61|29
		47|13
		75|47
		97|75
		47|61
		75|61
		47|29
		75|13
		53|13

		75,47,61,53,29
		97,61,53,29,13
		75,29,13
		75,97,47,61,53
		61,13,29
		97,13,75,29,47
	" };

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_queue_from_str(INPUT)), 143);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(input_queue_from_str(INPUT)), 123);
	}
}
