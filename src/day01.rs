// Copyright (c) 2025 Bastiaan Marinus van de Weerd


enum Direction { Left, Right }

struct Rotation {
	direction: Direction,
	steps: u64,
}


/// Combination-lock dial holding a value in `[0, SIZE)`.
struct Dial(u64);

impl Default for Dial {
	fn default() -> Self {
		Dial(Self::SIZE / 2)
	}
}

impl Dial {
	const SIZE: u64 = 100;

	/// Returns the number of times the dial crossed zero. Rotating leftward
	/// onto zero counts as a crossing; rotating leftward away from zero doesn't.
	fn rotate(&mut self, rotation: &Rotation) -> u64 {
		use num_integer::Integer as _;
		let offset = match rotation.direction {
			Direction::Left => -(rotation.steps as i64),
			Direction::Right => rotation.steps as i64,
		};
		let (wraps, value) = (self.0 as i64 + offset).div_mod_floor(&(Self::SIZE as i64));
		let crossings = wraps.unsigned_abs()
			+ u64::from(value == 0 && matches!(rotation.direction, Direction::Left))
			- u64::from(self.0 == 0 && matches!(rotation.direction, Direction::Left));
		self.0 = value as u64;
		crossings
	}
}


fn input_rotations_from_str(s: &str) -> impl AsRef<[Rotation]> {
	parsing::try_rotations_from_str(s).unwrap()
}

fn input_rotations() -> impl AsRef<[Rotation]> {
	input_rotations_from_str(include_str!("day01.txt"))
}


fn part1_impl(input_rotations: &[Rotation]) -> usize {
	let mut dial = Dial::default();
	input_rotations.iter()
		.filter(|rotation| { dial.rotate(rotation); dial.0 == 0 })
		.count()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_rotations().as_ref())
}


fn part2_impl(input_rotations: &[Rotation]) -> u64 {
	let mut dial = Dial::default();
	input_rotations.iter()
		.map(|rotation| dial.rotate(rotation))
		.sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_rotations().as_ref())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Direction, Rotation};

	#[derive(Debug)]
	pub(super) enum RotationError {
		Empty,
		Direction(char),
		Steps(ParseIntError),
	}

	impl FromStr for Rotation {
		type Err = RotationError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut chars = s.chars();
			let direction = match chars.next() {
				Some('L') => Direction::Left,
				Some('R') => Direction::Right,
				Some(found) => return Err(RotationError::Direction(found)),
				None => return Err(RotationError::Empty),
			};
			let steps = chars.as_str().parse()
				.map_err(RotationError::Steps)?;
			Ok(Rotation { direction, steps })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct RotationsError {
		line: usize,
		source: RotationError,
	}

	pub(super) fn try_rotations_from_str(s: &str) -> Result<impl AsRef<[Rotation]>, RotationsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| RotationsError { line: l + 1, source: e }))
			.collect::<Result<Vec<_>, _>>()
	}
}


#[test]
fn tests() {
	fn rotated(value: u64, rotation: &str) -> (u64, u64) {
		let mut dial = Dial(value);
		let crossings = dial.rotate(&rotation.parse().unwrap());
		(dial.0, crossings)
	}
	assert_eq!(rotated(10, "L5"), (5, 0));
	assert_eq!(rotated(10, "R5"), (15, 0));
	assert_eq!(rotated(95, "R10"), (5, 1));
	assert_eq!(rotated(5, "L10"), (95, 1));
	assert_eq!(rotated(0, "R100"), (0, 1));
	assert_eq!(rotated(0, "L100"), (0, 1));
	assert_eq!(rotated(10, "R205"), (15, 2));
	assert_eq!(rotated(95, "L210"), (85, 2));

	const INPUT: &str = indoc::indoc! { "
		L10
		R45
		L85
		R100
		L100
	" };
	assert_eq!(part1_impl(input_rotations_from_str(INPUT).as_ref()), 3);
	assert_eq!(part2_impl(input_rotations_from_str(INPUT).as_ref()), 3);
	assert_eq!(part1(), 2);
	assert_eq!(part2(), 615);
}
