/*!
# Benchmark: Checksum Engine
*/

use accuraterip::{
	ChecksumGenerator,
	TableOfContents,
	Time,
};
use brunch::{
	Bench,
	benches,
};



fn main() {
	let toc = TableOfContents::from_track_lengths(
		&[
			Time::from_msf(0, 3, 40), Time::from_msf(0, 4, 12), Time::from_msf(0, 3, 58),
			Time::from_msf(0, 5, 1),
		],
		None,
	).expect("Failed to build TOC.");

	let total = toc.total_length().samples() as usize;
	let left: Vec<i32> = (0..total as i32).map(|i| i.wrapping_mul(48_271) ^ i).collect();
	let right: Vec<i32> = (0..total as i32).map(|i| i.wrapping_mul(16_807) ^ i).collect();

	benches!(
		inline:
		Bench::new("ChecksumGenerator::new").run(|| ChecksumGenerator::new(&toc, None)),

		Bench::spacer(),

		Bench::new("ChecksumGenerator::process_samples (whole disc)").run(|| {
			let mut gen = ChecksumGenerator::new(&toc, None).unwrap();
			gen.process_samples(&left, &right).unwrap();
			gen
		}),
	);
}
