// Copyright (c) 2025 advent24 contributors


struct Onsen {
	towels: Vec<String>,
	designs: Vec<String>,
}

/// Number of ways to compose `design` by concatenating towels, memoized
/// on suffix length since every suffix recurs across towel choices.
fn arrangements<'d>(design: &'d str, towels: &[String], counts: &mut std::collections::HashMap<&'d str, u64>) -> u64 {
	if design.is_empty() { return 1 }
	if let Some(&count) = counts.get(design) { return count }
	let count = towels.iter()
		.filter_map(|towel| design.strip_prefix(towel.as_str()))
		.map(|rest| arrangements(rest, towels, counts))
		.sum();
	counts.insert(design, count);
	count
}


fn input_onsen_from_str(s: &str) -> Onsen {
	parsing::try_onsen_from_str(s).unwrap()
}


fn part1_impl(input_onsen: Onsen) -> usize {
	input_onsen.designs.iter()
		.filter(|design| {
			let mut counts = std::collections::HashMap::new();
			arrangements(design, &input_onsen.towels, &mut counts) > 0
		})
		.count()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_onsen_from_str(input))
}


fn part2_impl(input_onsen: Onsen) -> u64 {
	input_onsen.designs.iter()
		.map(|design| {
			let mut counts = std::collections::HashMap::new();
			arrangements(design, &input_onsen.towels, &mut counts)
		})
		.sum()
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_onsen_from_str(input))
}


mod parsing {
	use super::Onsen;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum OnsenError {
		MissingDesigns,
		NoTowels,
	}

	pub(super) fn try_onsen_from_str(s: &str) -> Result<Onsen, OnsenError> {
		use OnsenError::*;
		let (towels, designs) = s.split_once("\n\n").ok_or(MissingDesigns)?;
		let towels = towels.trim_end()
			.split(", ")
			.filter(|towel| !towel.is_empty())
			.map(str::to_owned)
			.collect::<Vec<_>>();
		if towels.is_empty() { return Err(NoTowels) }
		let designs = designs.lines()
			.filter(|line| !line.is_empty())
			.map(str::to_owned)
			.collect();
		Ok(Onsen { towels, designs })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		r, wr, b, g, bwu, rb, gb, br

		brwrr
		bggr
		gbbr
		rrbgbr
		ubwu
		bwurrg
		brgr
		bbrgwb
	" };

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_onsen_from_str(INPUT)), 6);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(input_onsen_from_str(INPUT)), 16);
	}
}
