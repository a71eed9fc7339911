// Copyright (c) 2025 advent24 contributors


fn part1_impl(input: &str) -> u64 {
	let instrs = regex::Regex::new(r"mul\((\d+),(\d+)\)").unwrap();
	instrs.captures_iter(input)
		.map(|instr| instr[1].parse::<u64>().unwrap() * instr[2].parse::<u64>().unwrap())
		.sum()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input)
}


fn part2_impl(input: &str) -> u64 {
	let instrs = regex::Regex::new(r"do\(\)|don't\(\)|mul\((\d+),(\d+)\)").unwrap();
	let mut enabled = true;
	let mut total = 0;
	for instr in instrs.captures_iter(input) {
		match &instr[0] {
			"do()" => enabled = true,
			"don't()" => enabled = false,
			_ => if enabled {
				total += instr[1].parse::<u64>().unwrap() * instr[2].parse::<u64>().unwrap()
			}
		}
	}
	total
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input)
}


#[test]
fn tests() {
	assert_eq!(part1_impl(
		"xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))"), 161);
	assert_eq!(part2_impl(
		"xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))"), 48);
}
