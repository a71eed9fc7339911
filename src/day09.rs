// Copyright (c) 2025 advent24 contributors


/// Alternating file & free-space extent lengths, starting with file ID 0.
struct DiskMap(Vec<u8>);

#[derive(Clone, Copy)]
struct Extent {
	start: usize,
	len: usize,
}

impl Extent {
	/// Sum of the positions covered by this extent.
	fn positions(&self) -> u64 {
		(self.len * self.start + self.len * self.len.saturating_sub(1) / 2) as u64
	}
}

impl DiskMap {
	/// Per-file extents, indexed by file ID.
	fn files(&self) -> Vec<Extent> {
		let mut start = 0;
		self.0.iter()
			.enumerate()
			.filter_map(|(i, &len)| {
				let len = len as usize;
				let extent = (i % 2 == 0).then_some(Extent { start, len });
				start += len;
				extent
			})
			.collect()
	}

	fn free_extents(files: &[Extent]) -> Vec<Extent> {
		files.windows(2)
			.map(|pair| Extent { start: pair[0].start + pair[0].len,
				len: pair[1].start - pair[0].start - pair[0].len })
			.filter(|gap| gap.len > 0)
			.collect()
	}
}


fn input_disk_map_from_str(s: &str) -> DiskMap {
	parsing::try_disk_map_from_str(s).unwrap()
}


fn part1_impl(input_disk_map: DiskMap) -> u64 {
	// Expand to individual blocks, then compact from the end into the
	// leftmost free block.
	let mut blocks = Vec::new();
	for (i, &len) in input_disk_map.0.iter().enumerate() {
		let id = (i % 2 == 0).then_some(i / 2);
		blocks.extend(std::iter::repeat(id).take(len as usize));
	}

	let (mut free, mut last) = (0, blocks.len());
	loop {
		while free < last && blocks[free].is_some() { free += 1 }
		while last > free && blocks[last - 1].is_none() { last -= 1 }
		if free + 1 >= last { break }
		blocks.swap(free, last - 1);
	}

	blocks.iter()
		.enumerate()
		.filter_map(|(pos, id)| id.map(|id| (pos * id) as u64))
		.sum()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_disk_map_from_str(input))
}


fn part2_impl(input_disk_map: DiskMap) -> u64 {
	let mut files = input_disk_map.files();
	let mut free = DiskMap::free_extents(&files);

	// Whole files only, highest ID first, into the first gap that fits;
	// gaps right of the file never qualify.
	for id in (0..files.len()).rev() {
		let file = files[id];
		for gap in free.iter_mut() {
			if gap.start > file.start { break }
			if gap.len >= file.len {
				files[id].start = gap.start;
				gap.start += file.len;
				gap.len -= file.len;
				break
			}
		}
	}

	files.iter()
		.enumerate()
		.map(|(id, file)| id as u64 * file.positions())
		.sum()
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_disk_map_from_str(input))
}


mod parsing {
	use super::DiskMap;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum DiskMapError {
		Empty,
		Digit { column: usize, found: char },
	}

	pub(super) fn try_disk_map_from_str(s: &str) -> Result<DiskMap, DiskMapError> {
		use DiskMapError::*;
		let digits = s.trim_end()
			.chars()
			.enumerate()
			.map(|(c, chr)| chr.to_digit(10)
				.map(|digit| digit as u8)
				.ok_or(Digit { column: c + 1, found: chr }))
			.collect::<Result<Vec<_>, _>>()?;
		if digits.is_empty() { return Err(Empty) }
		Ok(DiskMap(digits))
	}
}


#[test]
fn tests() {
	assert_eq!(part1_impl(input_disk_map_from_str("12345")), 60);
	assert_eq!(part1_impl(input_disk_map_from_str("2333133121414131402")), 1928);
	assert_eq!(part2_impl(input_disk_map_from_str("2333133121414131402")), 2858);
}
