// Copyright (c) 2025 Bastiaan Marinus van de Weerd


struct Range {
	from: u64,
	through: u64,
}


trait MaybeInvalidId: AsRef<[u8]> {
	fn has_repeated_half(&self) -> bool {
		let digits = self.as_ref();
		let half = digits.len() / 2;
		digits.len() % 2 == 0 && digits[..half] == digits[half..]
	}

	fn has_repeated_pattern(&self) -> bool {
		let digits = self.as_ref();
		(1..=digits.len() / 2)
			.filter(|size| digits.len() % size == 0)
			.any(|size| digits.chunks_exact(size).all(|chunk| chunk == &digits[..size]))
	}
}

impl MaybeInvalidId for String {}


fn input_ranges_from_str(s: &str) -> impl AsRef<[Range]> {
	parsing::try_ranges_from_str(s).unwrap()
}

fn input_ranges() -> impl AsRef<[Range]> {
	input_ranges_from_str(include_str!("day02.txt"))
}


fn sum_invalid_ids(input_ranges: &[Range], is_invalid: fn(&String) -> bool) -> u64 {
	input_ranges.iter()
		.flat_map(|range| range.from..=range.through)
		.filter(|id| is_invalid(&id.to_string()))
		.sum()
}

pub(crate) fn part1() -> u64 {
	sum_invalid_ids(input_ranges().as_ref(), |id| id.has_repeated_half())
}

pub(crate) fn part2() -> u64 {
	sum_invalid_ids(input_ranges().as_ref(), |id| id.has_repeated_pattern())
}


mod parsing {
	use std::{mem, num::ParseIntError, str::FromStr};
	use super::Range;

	#[derive(Debug)]
	pub(super) enum RangeError {
		Format,
		From(ParseIntError),
		Through(ParseIntError),
	}

	impl FromStr for Range {
		type Err = RangeError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (from, through) = s.split_once('-')
				.ok_or(RangeError::Format)?;
			let from = from.parse()
				.map_err(RangeError::From)?;
			let through = through.parse()
				.map_err(RangeError::Through)?;
			Ok(Range { from, through })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct RangesError {
		column: usize,
		source: RangeError,
	}

	pub(super) fn try_ranges_from_str(s: &str) -> Result<impl AsRef<[Range]>, RangesError> {
		s.lines()
			.next().into_iter().flat_map(|l| l.split(','))
			.scan(0, |c, range| {
				let c = mem::replace(c, *c + range.len() + 1);
				Some((c, range))
			})
			.map(|(c, range)| range.parse()
				.map_err(|e| RangesError { column: c + 1, source: e }))
			.collect::<Result<Vec<_>, _>>()
	}
}


#[test]
fn tests() {
	assert!("22".to_owned().has_repeated_half());
	assert!(!"3464".to_owned().has_repeated_half());
	assert!(!"103903".to_owned().has_repeated_half());
	assert!("1212".to_owned().has_repeated_half());
	assert!("123123".to_owned().has_repeated_half());
	assert!("22".to_owned().has_repeated_pattern());
	assert!("1212".to_owned().has_repeated_pattern());
	assert!("123123123".to_owned().has_repeated_pattern());
	assert!("7777777".to_owned().has_repeated_pattern());
	assert!("1212121212".to_owned().has_repeated_pattern());
	assert!(!"103903".to_owned().has_repeated_pattern());
	assert!(!"1234".to_owned().has_repeated_pattern());
	assert!(!"111222".to_owned().has_repeated_pattern());
	assert!(!"123456".to_owned().has_repeated_pattern());
	assert!(!"987654321".to_owned().has_repeated_pattern());

	const INPUT: &str = "11-22,95-115,1000-1300";
	assert_eq!(sum_invalid_ids(input_ranges_from_str(INPUT).as_ref(), |id| id.has_repeated_half()), 3465);
	assert_eq!(sum_invalid_ids(input_ranges_from_str(INPUT).as_ref(), |id| id.has_repeated_pattern()), 3576);
	assert_eq!(part1(), 21797776);
	assert_eq!(part2(), 24272521);
}
