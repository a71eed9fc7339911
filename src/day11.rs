// Copyright (c) 2025 advent24 contributors


type Stones = std::collections::HashMap<u64, u64>;

/// One blink of a single stone: 0 becomes 1, an even number of digits
/// splits in half, anything else is multiplied by 2024.
fn blink(stone: u64) -> (u64, Option<u64>) {
	if stone == 0 { return (1, None) }
	let digits = stone.ilog10() + 1;
	if digits % 2 == 0 {
		let shift = 10u64.pow(digits / 2);
		(stone / shift, Some(stone % shift))
	} else {
		(stone * 2024, None)
	}
}

/// Stones with equal numbers evolve identically, so a whole blink is one
/// pass over the distinct numbers, carrying their counts along.
fn blink_all(stones: Stones) -> Stones {
	let mut blinked = Stones::with_capacity(stones.len() * 2);
	for (stone, count) in stones {
		let (left, right) = blink(stone);
		*blinked.entry(left).or_default() += count;
		if let Some(right) = right {
			*blinked.entry(right).or_default() += count;
		}
	}
	blinked
}

fn count_after_blinks(mut stones: Stones, blinks: usize) -> u64 {
	for _ in 0..blinks {
		stones = blink_all(stones);
	}
	stones.into_values().sum()
}


fn input_stones_from_str(s: &str) -> Stones {
	parsing::try_stones_from_str(s).unwrap()
}


fn part1_impl(input_stones: Stones) -> u64 {
	count_after_blinks(input_stones, 25)
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_stones_from_str(input))
}


fn part2_impl(input_stones: Stones) -> u64 {
	count_after_blinks(input_stones, 75)
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_stones_from_str(input))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Stones;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StonesError {
		Empty,
		Number { offset: usize, source: ParseIntError },
	}

	pub(super) fn try_stones_from_str(s: &str) -> Result<Stones, StonesError> {
		use StonesError::*;
		let mut stones = Stones::new();
		for (offset, number) in s.split_whitespace().enumerate() {
			let number = number.parse().map_err(|e| Number { offset, source: e })?;
			*stones.entry(number).or_default() += 1;
		}
		if stones.is_empty() { return Err(Empty) }
		Ok(stones)
	}
}


#[test]
fn tests() {
	assert_eq!(blink(0), (1, None));
	assert_eq!(blink(1000), (10, Some(0)));
	assert_eq!(blink(125), (253000, None));
	assert_eq!(count_after_blinks(input_stones_from_str("0 1 10 99 999"), 1), 7);
	assert_eq!(count_after_blinks(input_stones_from_str("125 17"), 6), 22);
	assert_eq!(part1_impl(input_stones_from_str("125 17")), 55312);
}
