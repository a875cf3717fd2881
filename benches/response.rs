/*!
# Benchmark: Response Decoder
*/

use accuraterip::response::{
	decode,
	encode,
	DiscRecord,
	TrackRecord,
};
use brunch::{
	Bench,
	benches,
};



fn main() {
	let discs: Vec<DiscRecord> = (0..5_u32).map(|i| DiscRecord {
		disc_id_1: i,
		disc_id_2: i.wrapping_mul(7),
		cddb_id: i.wrapping_mul(13),
		tracks: (0..11_u32).map(|t| TrackRecord {
			confidence_count: 1,
			crc: t.wrapping_mul(i + 1),
			frame_450_crc: t.wrapping_mul(i + 2),
		}).collect(),
	}).collect();
	let bytes = encode(&discs);

	benches!(
		inline:
		Bench::new("response::encode").run(|| encode(&discs)),
		Bench::new("response::decode").run(|| decode(&bytes)),
	);
}
