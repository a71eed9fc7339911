// Copyright (c) 2025 advent24 contributors


mod pathfinding;

macro_rules! days {
	( $( $num:literal ),+ $(,)? ) => { paste::paste! {
		$( mod [<day $num>]; )+

		fn run_day(day: u8, input: &str) -> Option<[String; 2]> {
			match day {
				$( $num => Some([
					[<day $num>]::part1(input).to_string(),
					[<day $num>]::part2(input).to_string(),
				]), )+
				_ => None,
			}
		}
	} }
}

days![01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19];


fn main() {
	use std::io::Read as _;

	let day = std::env::args().nth(1)
		.and_then(|arg| arg.parse().ok())
		.expect("Expected a day number (1-19) as the first argument");

	let mut input = String::new();
	std::io::stdin().read_to_string(&mut input)
		.expect("Could not read the puzzle input from stdin");

	let [part1, part2] = run_day(day, &input)
		.unwrap_or_else(|| panic!("Day {day} is not implemented"));
	println!("{part1}");
	println!("{part2}");
}
