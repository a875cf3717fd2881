/*!
# Benchmark: `DiscId`
*/

use accuraterip::{
	DiscId,
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
			Time::from_msf(0, 5, 1), Time::from_msf(0, 4, 33), Time::from_msf(0, 3, 27),
			Time::from_msf(0, 4, 50), Time::from_msf(0, 3, 59), Time::from_msf(0, 4, 18),
			Time::from_msf(0, 3, 44), Time::from_msf(0, 5, 9),
		],
		None,
	).expect("Failed to build TOC.");
	let id = DiscId::from_toc(&toc);
	let stem = id.file_stem();

	benches!(
		inline:
		Bench::new("DiscId::from_toc").run(|| DiscId::from_toc(&toc)),
		Bench::new("DiscId::checksum_url").run(|| id.checksum_url()),

		Bench::spacer(),

		Bench::new("DiscId::decode").run(|| DiscId::decode(&stem)),
	);
}
