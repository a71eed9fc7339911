// Copyright (c) 2025 advent24 contributors


#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cell {
	Open,
	Wall,
}

pub(crate) struct Grid {
	cells: Vec<Cell>,
	width: usize,
}

impl Grid {
	pub(crate) fn open(width: usize, height: usize) -> Self {
		assert!(width > 0 && height > 0);
		Grid { cells: vec![Cell::Open; width * height], width }
	}

	pub(crate) fn from_cells(cells: Vec<Cell>, width: usize) -> Self {
		assert!(width > 0 && !cells.is_empty() && cells.len() % width == 0);
		Grid { cells, width }
	}

	pub(crate) fn set(&mut self, pos: usize, cell: Cell) {
		self.cells[pos] = cell;
	}

	fn height(&self) -> usize {
		self.cells.len() / self.width
	}

	/// Position one step from `pos` in direction `dir`, unless that step
	/// would leave the grid or land on a wall.
	fn step(&self, pos: usize, dir: Dir) -> Option<usize> {
		let (x, y) = (pos % self.width, pos / self.width);
		let (x, y) = match dir {
			Dir::Up => (Some(x), y.checked_sub(1)),
			Dir::Down => (Some(x), (y + 1 < self.height()).then_some(y + 1)),
			Dir::Left => (x.checked_sub(1), Some(y)),
			Dir::Right => ((x + 1 < self.width).then_some(x + 1), Some(y)),
		};
		let pos = x.zip(y).map(|(x, y)| y * self.width + x)?;
		matches!(self.cells[pos], Cell::Open).then_some(pos)
	}
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Dir {
	Up,
	Right,
	Down,
	Left,
}

impl Dir {
	fn turns(self) -> [Dir; 2] {
		use Dir::*;
		match self {
			Up | Down => [Right, Left],
			Right | Left => [Down, Up],
		}
	}
}

#[derive(Clone, Copy)]
pub(crate) struct Costs {
	pub(crate) step: u64,
	pub(crate) turn: u64,
}

/// A search node: where the walker is and which way it is facing. Two
/// visits to the same position facing different ways are distinct nodes
/// whenever turning is not free.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct State {
	pos: usize,
	dir: Dir,
}

#[derive(PartialEq, Eq)]
struct Entry {
	cost: u64,
	state: State,
}

impl PartialOrd for Entry {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Entry {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.cost.cmp(&other.cost).reverse().then_with(|| self.state.cmp(&other.state))
	}
}

fn successors(grid: &Grid, state: State, cost: u64, costs: Costs) -> impl Iterator<Item = (State, u64)> {
	let forward = grid.step(state.pos, state.dir)
		.map(|pos| (State { pos, ..state }, cost + costs.step));
	let [cw, ccw] = state.dir.turns();
	forward.into_iter()
		.chain([cw, ccw].into_iter().map(move |dir| (State { dir, ..state }, cost + costs.turn)))
}

/// Minimum cost from `start` (facing `dir`) to `end` over any final
/// direction, or `None` if no path exists. Stepping forward costs
/// `costs.step`; rotating 90° in place costs `costs.turn`.
pub(crate) fn shortest_cost(grid: &Grid, start: usize, dir: Dir, end: usize, costs: Costs) -> Option<u64> {
	use std::collections::{BinaryHeap, HashMap, hash_map::Entry::*};

	let start = State { pos: start, dir };
	let mut frontier = BinaryHeap::from([Entry { cost: 0, state: start }]);
	let mut best = HashMap::from([(start, 0)]);

	while let Some(Entry { cost, state }) = frontier.pop() {
		// Stale entry; this state was since relaxed to a lower cost.
		if best.get(&state).map_or(true, |&c| cost > c) { continue }

		// Non-negative costs make the pop order monotonic, so the first
		// end pop is optimal.
		if state.pos == end { return Some(cost) }

		for (next, next_cost) in successors(grid, state, cost, costs) {
			match best.entry(next) {
				Vacant(entry) => {
					entry.insert(next_cost);
					frontier.push(Entry { cost: next_cost, state: next });
				}
				Occupied(mut entry) => if next_cost < *entry.get() {
					*entry.get_mut() = next_cost;
					frontier.push(Entry { cost: next_cost, state: next });
				}
			}
		}
	}

	None
}

/// All positions lying on at least one minimum-cost path from `start`
/// (facing `dir`) to `end`, or `None` if no path exists.
///
/// Runs the same search as [`shortest_cost`] but keeps, per state, the set
/// of predecessors achieving its best cost, then walks those sets backwards
/// from every optimal end state. Draining the frontier continues through
/// cost ties so that ends reached at the optimum via different directions
/// are all collected.
pub(crate) fn optimal_cells(grid: &Grid, start: usize, dir: Dir, end: usize, costs: Costs) -> Option<std::collections::HashSet<usize>> {
	use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque, hash_map::Entry::*};

	let start = State { pos: start, dir };
	let mut frontier = BinaryHeap::from([Entry { cost: 0, state: start }]);
	let mut best = HashMap::from([(start, 0)]);
	let mut backtrack: HashMap<State, HashSet<State>> = HashMap::new();

	let mut best_end_cost = None;
	let mut end_states = Vec::new();

	while let Some(Entry { cost, state }) = frontier.pop() {
		if best.get(&state).map_or(true, |&c| cost > c) { continue }
		if best_end_cost.map_or(false, |c| cost > c) { break }

		if state.pos == end {
			best_end_cost = Some(cost);
			end_states.push(state);
		}

		for (next, next_cost) in successors(grid, state, cost, costs) {
			match best.entry(next) {
				Vacant(entry) => {
					entry.insert(next_cost);
					backtrack.insert(next, HashSet::from([state]));
					frontier.push(Entry { cost: next_cost, state: next });
				}
				Occupied(mut entry) => if next_cost < *entry.get() {
					*entry.get_mut() = next_cost;
					backtrack.insert(next, HashSet::from([state]));
					frontier.push(Entry { cost: next_cost, state: next });
				} else if next_cost == *entry.get() {
					// Tie: the neighbor keeps its cost (and its place in the
					// frontier) and only gains a predecessor.
					backtrack.entry(next).or_default().insert(state);
				}
			}
		}
	}

	best_end_cost?;

	let mut seen = end_states.iter().copied().collect::<HashSet<_>>();
	let mut queue = VecDeque::from(end_states);
	while let Some(state) = queue.pop_front() {
		for &prev in backtrack.get(&state).into_iter().flatten() {
			if seen.insert(prev) { queue.push_back(prev) }
		}
	}

	Some(seen.into_iter().map(|state| state.pos).collect())
}


#[cfg(test)]
mod tests {
	use super::*;

	/// Parses `#`/`.` cells plus single `S` & `E` markers (both open).
	fn maze(s: &str) -> (Grid, usize, usize) {
		let (mut cells, mut width, mut start, mut end) = (Vec::new(), 0, None, None);
		for line in s.lines() {
			width = line.len();
			for chr in line.chars() {
				cells.push(match chr {
					'#' => Cell::Wall,
					'S' => { start = Some(cells.len()); Cell::Open }
					'E' => { end = Some(cells.len()); Cell::Open }
					_ => Cell::Open,
				})
			}
		}
		(Grid::from_cells(cells, width), start.unwrap(), end.unwrap())
	}

	const LABYRINTH: &str = indoc::indoc! { "
		###############
		#.......#....E#
		#.#.###.#.###.#
		#.....#.#...#.#
		#.###.#####.#.#
		#.#.#.......#.#
		#.#.#####.###.#
		#...........#.#
		###.#.#####.#.#
		#...#.....#.#.#
		#.#.#.###.#.#.#
		#.....#...#.#.#
		#.###.#.#.#.#.#
		#S..#.....#...#
		###############
	" };

	const LABYRINTH_VARIANT: &str = indoc::indoc! { "
		#################
		#...#...#...#..E#
		#.#.#.#.#.#.#.#.#
		#.#.#.#...#...#.#
		#.#.#.#.###.#.#.#
		#...#.#.#.....#.#
		#.#.#.#.#.#####.#
		#.#...#.#.#.....#
		#.#.#####.#.###.#
		#.#.#.......#...#
		#.#.###.#####.###
		#.#.#...#.....#.#
		#.#.#.#####.###.#
		#.#.#.........#.#
		#.#.#.#########.#
		#S#.............#
		#################
	" };

	const TURNING: Costs = Costs { step: 1, turn: 1000 };
	const PLAIN: Costs = Costs { step: 1, turn: 0 };

	#[test]
	fn labyrinths() {
		let (grid, start, end) = maze(LABYRINTH);
		assert_eq!(shortest_cost(&grid, start, Dir::Right, end, TURNING), Some(7036));
		assert_eq!(optimal_cells(&grid, start, Dir::Right, end, TURNING).unwrap().len(), 45);

		let (grid, start, end) = maze(LABYRINTH_VARIANT);
		assert_eq!(shortest_cost(&grid, start, Dir::Right, end, TURNING), Some(11048));
		assert_eq!(optimal_cells(&grid, start, Dir::Right, end, TURNING).unwrap().len(), 64);
	}

	#[test]
	fn zero_turn_cost_is_plain_shortest_path() {
		// No walls: the cost is the Manhattan distance.
		let grid = Grid::open(5, 5);
		assert_eq!(shortest_cost(&grid, 0, Dir::Right, 24, PLAIN), Some(8));

		let (grid, start, end) = maze(indoc::indoc! { "
			S..#...
			..#..#.
			....#..
			...#..#
			..#..#.
			.#..#..
			#.#...E
		" });
		assert_eq!(shortest_cost(&grid, start, Dir::Right, end, PLAIN), Some(22));
	}

	#[test]
	fn idempotent() {
		let (grid, start, end) = maze(LABYRINTH);
		let first = shortest_cost(&grid, start, Dir::Right, end, TURNING);
		assert_eq!(shortest_cost(&grid, start, Dir::Right, end, TURNING), first);
	}

	#[test]
	fn optimal_cells_include_endpoints() {
		let (grid, start, end) = maze(LABYRINTH);
		let cells = optimal_cells(&grid, start, Dir::Right, end, TURNING).unwrap();
		assert!(cells.contains(&start));
		assert!(cells.contains(&end));
	}

	#[test]
	fn cheaper_turns_never_shrink_the_optimal_set() {
		let (grid, start, end) = maze(LABYRINTH);
		let sizes = [1000, 1, 0].map(|turn|
			optimal_cells(&grid, start, Dir::Right, end, Costs { step: 1, turn }).unwrap().len());
		assert!(sizes[0] <= sizes[1] && sizes[1] <= sizes[2]);
	}

	#[test]
	fn walled_in_start() {
		let (grid, start, end) = maze(indoc::indoc! { "
			#####
			#S#E#
			#####
		" });
		assert_eq!(shortest_cost(&grid, start, Dir::Right, end, TURNING), None);
		assert_eq!(optimal_cells(&grid, start, Dir::Right, end, TURNING), None);

		let (grid, start, _) = maze("SE");
		assert_eq!(shortest_cost(&grid, start, Dir::Right, start, PLAIN), Some(0));
	}
}
