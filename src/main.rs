// Copyright (c) 2025 Bastiaan Marinus van de Weerd


macro_rules! days {
	($($day:literal),+ $(,)?) => { paste::paste! {
		$(mod [<day $day>];)+

		fn main() {
			$(
				println!("Day {}, part 1: {}", $day, [<day $day>]::part1());
				println!("Day {}, part 2: {}", $day, [<day $day>]::part2());
			)+
		}
	} };
}

days!(01, 02, 03);
