// Copyright (c) 2025 advent24 contributors


#[derive(Clone)]
struct Computer {
	a: u64,
	b: u64,
	c: u64,
}

impl Computer {
	fn combo(&self, operand: u8) -> u64 {
		match operand {
			0..=3 => operand as u64,
			4 => self.a,
			5 => self.b,
			6 => self.c,
			_ => panic!("Reserved combo operand {operand}"),
		}
	}

	fn shifted_a(&self, operand: u8) -> u64 {
		// `A / 2^combo`; combo values beyond the register width shift
		// everything out.
		self.a.checked_shr(self.combo(operand).min(64) as u32).unwrap_or(0)
	}

	fn run(&mut self, program: &[u8]) -> Vec<u8> {
		let mut output = Vec::new();
		let mut ip = 0;
		while let Some((&opcode, &operand)) = program.get(ip).zip(program.get(ip + 1)) {
			match opcode {
				0 => self.a = self.shifted_a(operand),
				1 => self.b ^= operand as u64,
				2 => self.b = self.combo(operand) & 7,
				3 => if self.a != 0 {
					ip = operand as usize;
					continue
				}
				4 => self.b ^= self.c,
				5 => output.push((self.combo(operand) & 7) as u8),
				6 => self.b = self.shifted_a(operand),
				7 => self.c = self.shifted_a(operand),
				_ => panic!("Invalid opcode {opcode}"),
			}
			ip += 2;
		}
		output
	}
}

fn run_output(a: u64, program: &[u8]) -> Vec<u8> {
	Computer { a, b: 0, c: 0 }.run(program)
}

/// Smallest initial A for which the program outputs itself. The programs
/// in question shift A right by 3 once per loop iteration, so A is grown
/// three bits at a time, keeping every candidate whose run reproduces the
/// program's tail so far.
fn quine_a(program: &[u8]) -> Option<u64> {
	let mut candidates = vec![0_u64];
	for len in 1..=program.len() {
		let tail = &program[program.len() - len..];
		candidates = candidates.into_iter()
			.flat_map(|a| (0..8).map(move |bits| (a << 3) | bits))
			.filter(|&a| run_output(a, program) == tail)
			.collect();
	}
	candidates.into_iter().min()
}


fn input_computer_from_str(s: &str) -> (Computer, Vec<u8>) {
	parsing::try_computer_from_str(s).unwrap()
}


fn part1_impl((mut computer, program): (Computer, Vec<u8>)) -> String {
	use itertools::Itertools as _;
	computer.run(&program).iter().join(",")
}

pub(crate) fn part1(input: &str) -> String {
	part1_impl(input_computer_from_str(input))
}


fn part2_impl((_, program): (Computer, Vec<u8>)) -> u64 {
	quine_a(&program).expect("No quine exists for this program")
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_computer_from_str(input))
}


mod parsing {
	use super::Computer;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ComputerError {
		MissingRegister(char),
		MissingProgram,
		Number { found: String },
	}

	fn try_register_from_line(line: Option<&str>, name: char) -> Result<u64, ComputerError> {
		use ComputerError::*;
		let value = line
			.and_then(|line| line.strip_prefix("Register "))
			.and_then(|line| line.strip_prefix(name))
			.and_then(|line| line.strip_prefix(": "))
			.ok_or(MissingRegister(name))?;
		value.parse().map_err(|_| Number { found: value.to_owned() })
	}

	pub(super) fn try_computer_from_str(s: &str) -> Result<(Computer, Vec<u8>), ComputerError> {
		use ComputerError::*;
		let mut lines = s.lines();
		let computer = Computer {
			a: try_register_from_line(lines.next(), 'A')?,
			b: try_register_from_line(lines.next(), 'B')?,
			c: try_register_from_line(lines.next(), 'C')?,
		};
		let program = lines
			.find_map(|line| line.strip_prefix("Program: "))
			.ok_or(MissingProgram)?
			.split(',')
			.map(|n| n.parse().map_err(|_| Number { found: n.to_owned() }))
			.collect::<Result<_, _>>()?;
		Ok((computer, program))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn instructions() {
		let mut computer = Computer { a: 0, b: 0, c: 9 };
		computer.run(&[2, 6]);
		assert_eq!(computer.b, 1);

		let mut computer = Computer { a: 10, b: 0, c: 0 };
		assert_eq!(computer.run(&[5, 0, 5, 1, 5, 4]), [0, 1, 2]);

		let mut computer = Computer { a: 2024, b: 0, c: 0 };
		assert_eq!(computer.run(&[0, 1, 5, 4, 3, 0]), [4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]);
		assert_eq!(computer.a, 0);

		let mut computer = Computer { a: 0, b: 29, c: 0 };
		computer.run(&[1, 7]);
		assert_eq!(computer.b, 26);

		let mut computer = Computer { a: 0, b: 2024, c: 43690 };
		computer.run(&[4, 0]);
		assert_eq!(computer.b, 44354);
	}

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_computer_from_str(indoc::indoc! { "
			Register A: 729
			Register B: 0
			Register C: 0

			Program: 0,1,5,4,3,0
		" })), "4,6,3,5,6,3,5,2,1,0");
	}

	#[test]
	fn part2() {
		let program = [0, 3, 5, 4, 3, 0];
		assert_eq!(quine_a(&program), Some(117440));
		assert_eq!(run_output(117440, &program), program);
	}
}
