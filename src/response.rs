/*!
# AccurateRip: Response Decoder
*/

use crate::AccurateRipError;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// # Track Record.
///
/// One track's confidence/checksum entry within a [`DiscRecord`].
pub struct TrackRecord {
	/// # Confidence Count.
	pub confidence_count: u8,

	/// # V1 CRC.
	pub crc: u32,

	/// # V1-Frame-450 CRC.
	pub frame_450_crc: u32,
}

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// # Disc Record.
///
/// One candidate pressing returned by the AccurateRip database for a given
/// disc-identity fingerprint, with one [`TrackRecord`] per track.
pub struct DiscRecord {
	/// # Disc Id 1.
	pub disc_id_1: u32,

	/// # Disc Id 2.
	pub disc_id_2: u32,

	/// # CDDB Id.
	pub cddb_id: u32,

	/// # Tracks.
	pub tracks: Vec<TrackRecord>,
}

/// # Header Size (Bytes).
const HEADER_LEN: usize = 13;

/// # Track Record Size (Bytes).
const TRACK_LEN: usize = 9;

/// # Decode AccurateRip Response.
///
/// Parses a binary AccurateRip database response — zero or more
/// concatenated disc blocks, each a 13-byte header followed by
/// `trackCount` 9-byte track records, all little-endian — into a vector of
/// [`DiscRecord`].
///
/// Reaching end-of-input exactly at a header boundary is not an error (it's
/// simply the end of the response); reaching it mid-header or mid-record
/// after a header has been read is [`AccurateRipError::ParseError`].
///
/// ## Errors
///
/// Returns [`AccurateRipError::ParseError`] if the input ends partway
/// through a header or a track record.
///
/// ## Examples
///
/// ```
/// use accuraterip::response::decode;
///
/// let bytes = [
///     0x02, 0xAA, 0xBB, 0xCC, 0xDD, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88,
///     0x01, 0xAA, 0xAA, 0xAA, 0xAA, 0xBB, 0xBB, 0xBB, 0xBB,
///     0x02, 0xCC, 0xCC, 0xCC, 0xCC, 0xDD, 0xDD, 0xDD, 0xDD,
/// ];
/// let discs = decode(&bytes).unwrap();
/// assert_eq!(discs.len(), 1);
/// assert_eq!(discs[0].disc_id_1, 0xDDCC_BBAA);
/// assert_eq!(discs[0].tracks.len(), 2);
/// ```
pub fn decode(mut src: &[u8]) -> Result<Vec<DiscRecord>, AccurateRipError> {
	let mut discs = Vec::new();

	while ! src.is_empty() {
		if src.len() < HEADER_LEN {
			return Err(AccurateRipError::ParseError(
				"failed to read disc header".to_owned()
			));
		}

		let track_count = src[0];
		let disc_id_1 = read_u32(&src[1..5]);
		let disc_id_2 = read_u32(&src[5..9]);
		let cddb_id = read_u32(&src[9..13]);
		src = &src[HEADER_LEN..];

		let mut tracks = Vec::with_capacity(usize::from(track_count));
		for _ in 0..track_count {
			if src.len() < TRACK_LEN {
				return Err(AccurateRipError::ParseError(
					"failed to read track info".to_owned()
				));
			}

			tracks.push(TrackRecord {
				confidence_count: src[0],
				crc: read_u32(&src[1..5]),
				frame_450_crc: read_u32(&src[5..9]),
			});
			src = &src[TRACK_LEN..];
		}

		discs.push(DiscRecord { disc_id_1, disc_id_2, cddb_id, tracks });
	}

	Ok(discs)
}

/// # Encode Disc Records.
///
/// The inverse of [`decode`]: renders a slice of [`DiscRecord`] back to the
/// AccurateRip wire format. Mainly useful for tests exercising the
/// round-trip property.
#[must_use]
pub fn encode(discs: &[DiscRecord]) -> Vec<u8> {
	let mut out = Vec::with_capacity(discs.iter().map(|d| HEADER_LEN + d.tracks.len() * TRACK_LEN).sum());
	for disc in discs {
		out.push(disc.tracks.len() as u8);
		out.extend_from_slice(&disc.disc_id_1.to_le_bytes());
		out.extend_from_slice(&disc.disc_id_2.to_le_bytes());
		out.extend_from_slice(&disc.cddb_id.to_le_bytes());

		for track in &disc.tracks {
			out.push(track.confidence_count);
			out.extend_from_slice(&track.crc.to_le_bytes());
			out.extend_from_slice(&track.frame_450_crc.to_le_bytes());
		}
	}
	out
}

/// # Read Little-Endian u32.
fn read_u32(src: &[u8]) -> u32 {
	u32::from_le_bytes([src[0], src[1], src[2], src[3]])
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_s5_scenario() {
		let bytes = [
			0x02, 0xAA, 0xBB, 0xCC, 0xDD, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88,
			0x01, 0xAA, 0xAA, 0xAA, 0xAA, 0xBB, 0xBB, 0xBB, 0xBB,
			0x02, 0xCC, 0xCC, 0xCC, 0xCC, 0xDD, 0xDD, 0xDD, 0xDD,
		];

		let discs = decode(&bytes).expect("valid response");
		assert_eq!(discs.len(), 1);

		let disc = &discs[0];
		assert_eq!(disc.disc_id_1, 0xDDCC_BBAA);
		assert_eq!(disc.disc_id_2, 0x4433_2211);
		assert_eq!(disc.cddb_id, 0x8877_6655);
		assert_eq!(disc.tracks.len(), 2);

		assert_eq!(disc.tracks[0].confidence_count, 1);
		assert_eq!(disc.tracks[0].crc, 0xAAAA_AAAA);
		assert_eq!(disc.tracks[0].frame_450_crc, 0xBBBB_BBBB);

		assert_eq!(disc.tracks[1].confidence_count, 2);
		assert_eq!(disc.tracks[1].crc, 0xCCCC_CCCC);
		assert_eq!(disc.tracks[1].frame_450_crc, 0xDDDD_DDDD);
	}

	#[test]
	fn t_empty_input() {
		assert_eq!(decode(&[]).unwrap(), Vec::new());
	}

	#[test]
	fn t_truncated_header() {
		let bytes = [0x01, 0xAA, 0xBB];
		assert!(decode(&bytes).is_err());
	}

	#[test]
	fn t_truncated_track() {
		let mut bytes = vec![0x01, 0xAA, 0xBB, 0xCC, 0xDD, 0x11, 0x22, 0x33, 0x44];
		bytes.extend_from_slice(&[0x01, 0xAA]);
		assert!(decode(&bytes).is_err());
	}

	#[test]
	fn t_round_trip() {
		// Invariant 5: encode then decode yields the same records.
		let discs = vec![
			DiscRecord {
				disc_id_1: 0x1234_5678,
				disc_id_2: 0x9abc_def0,
				cddb_id: 0x0011_2233,
				tracks: vec![
					TrackRecord { confidence_count: 5, crc: 0xdead_beef, frame_450_crc: 0xcafe_babe },
					TrackRecord { confidence_count: 3, crc: 0x1111_1111, frame_450_crc: 0x2222_2222 },
				],
			},
			DiscRecord {
				disc_id_1: 0x0000_0001,
				disc_id_2: 0x0000_0002,
				cddb_id: 0x0000_0003,
				tracks: vec![TrackRecord { confidence_count: 1, crc: 1, frame_450_crc: 2 }],
			},
		];

		let encoded = encode(&discs);
		let decoded = decode(&encoded).expect("valid response");
		assert_eq!(decoded, discs);
	}

	#[test]
	fn t_zero_track_disc() {
		let discs = vec![DiscRecord { disc_id_1: 1, disc_id_2: 2, cddb_id: 3, tracks: vec![] }];
		let encoded = encode(&discs);
		let decoded = decode(&encoded).unwrap();
		assert_eq!(decoded, discs);
	}
}
