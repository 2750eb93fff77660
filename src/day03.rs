// Copyright (c) 2025 Bastiaan Marinus van de Weerd


/// One battery bank; each element is a single battery's joltage rating in `[0, 9]`.
struct Bank(Vec<u8>);

impl AsRef<[u8]> for Bank {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}


#[derive(Debug, PartialEq, Eq)]
enum InvalidArgument {
	BatteryCount { count: usize, available: usize },
	JoltageRating { index: usize, rating: u8 },
}

/// Finds the largest number formable by concatenating the ratings of exactly
/// `count` batteries picked from `bank` in their original order.
///
/// Each output position scans a window that is bounded on the right such that
/// enough batteries remain to fill the positions after it, and takes the
/// leftmost occurrence of the window's maximum rating. A later equal rating
/// would only shrink the windows of subsequent positions, so the leftmost
/// occurrence is never worse and sometimes strictly better.
fn max_joltage(bank: &[u8], count: usize) -> Result<u64, InvalidArgument> {
	if count < 1 || count > bank.len() {
		return Err(InvalidArgument::BatteryCount { count, available: bank.len() })
	}
	if let Some((index, &rating)) = bank.iter().enumerate().find(|&(_, &rating)| rating > 9) {
		return Err(InvalidArgument::JoltageRating { index, rating })
	}

	let mut joltage = 0;
	let mut from = 0;
	for position in 0..count {
		let window = &bank[from..=bank.len() - count + position];
		let (offset, rating) = window.iter()
			.enumerate()
			.fold((0, window[0]), |max, (offset, &rating)|
				if rating > max.1 { (offset, rating) } else { max });
		joltage = joltage * 10 + rating as u64;
		from += offset + 1;
	}
	Ok(joltage)
}

#[cfg(test)]
fn max_joltage_brute(bank: &[u8], count: usize) -> u64 {
	use itertools::Itertools as _;
	bank.iter()
		.combinations(count)
		.map(|ratings| ratings.into_iter()
			.fold(0, |joltage, &rating| joltage * 10 + rating as u64))
		.max()
		.unwrap()
}


fn input_banks_from_str(s: &str) -> impl AsRef<[Bank]> {
	parsing::try_banks_from_str(s).unwrap()
}

fn input_banks() -> impl AsRef<[Bank]> {
	input_banks_from_str(include_str!("day03.txt"))
}


fn part1and2_impl(input_banks: &[Bank], count: usize) -> u64 {
	input_banks.iter()
		.map(|bank| max_joltage(bank.as_ref(), count).unwrap())
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1and2_impl(input_banks().as_ref(), 2)
}

pub(crate) fn part2() -> u64 {
	part1and2_impl(input_banks().as_ref(), 12)
}


mod parsing {
	use super::Bank;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct BankError {
		line: usize,
		column: usize,
		found: char,
	}

	pub(super) fn try_banks_from_str(s: &str) -> Result<impl AsRef<[Bank]>, BankError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.chars()
				.enumerate()
				.map(|(c, chr)| chr.to_digit(10)
					.map(|d| d as u8)
					.ok_or(BankError { line: l + 1, column: c + 1, found: chr }))
				.collect::<Result<Vec<_>, _>>()
				.map(Bank))
			.collect::<Result<Vec<_>, _>>()
	}
}


#[test]
fn tests() {
	assert_eq!(max_joltage(&[7], 1), Ok(7));
	assert_eq!(max_joltage(&[1, 2, 3, 4, 5], 2), Ok(45));
	assert_eq!(max_joltage(&[5, 4, 3, 2, 1], 2), Ok(54));
	assert_eq!(max_joltage(&[3, 1, 4, 1, 5], 2), Ok(45));
	assert_eq!(max_joltage(&[3, 1, 4, 1, 5], 5), Ok(31415));
	assert_eq!(max_joltage(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 1, 1, 1, 1, 1, 1], 12), Ok(987654321111));
	assert_eq!(max_joltage(&[2, 3, 4, 2, 3, 4, 2, 3, 4, 2, 3, 4, 2, 7, 8], 12), Ok(434234234278));
	assert_eq!(max_joltage(&[8, 1, 8, 1, 8, 1, 9, 1, 1, 1, 1, 2, 1, 1, 1], 12), Ok(888911112111));

	assert_eq!(max_joltage(&[1, 2, 3], 0), Err(InvalidArgument::BatteryCount { count: 0, available: 3 }));
	assert_eq!(max_joltage(&[1, 2, 3], 4), Err(InvalidArgument::BatteryCount { count: 4, available: 3 }));
	assert_eq!(max_joltage(&[1, 17, 3], 2), Err(InvalidArgument::JoltageRating { index: 1, rating: 17 }));

	for bank in [
		&[3, 1, 4, 1, 5, 9, 2, 6][..],
		&[2, 7, 1, 8, 2, 8, 1, 8][..],
		&[0, 0, 9, 0, 0, 9, 0, 0][..],
		&[5, 5, 5, 5, 5][..],
	] {
		for count in 1..=bank.len() {
			assert_eq!(max_joltage(bank, count), Ok(max_joltage_brute(bank, count)));
		}
	}

	const INPUT: &str = indoc::indoc! { "
		987654321111111
		818181911112111
	" };
	assert_eq!(part1and2_impl(input_banks_from_str(INPUT).as_ref(), 2), 190);
	assert_eq!(part1and2_impl(input_banks_from_str(INPUT).as_ref(), 12), 1876565433222);
	assert_eq!(part1(), 14664);
	assert_eq!(part2(), 143959634410465);
}
