/*!
# AccurateRip: Disc Identity
*/

use crate::{
	AccurateRipError,
	TableOfContents,
};
use dactyl::traits::HexToUnsigned;

/// # Samples Per Second.
const SAMPLES_PER_SECOND: i64 = crate::time::SAMPLES_PER_SECOND;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// # Disc Identity.
///
/// The three numeric fingerprints AccurateRip (and CDDB/freedb before it)
/// use to identify a disc's table of contents, plus the track count needed
/// to build a database request URL.
///
/// Build one with [`DiscId::from_toc`], or recover one from a previously
/// rendered id string with [`DiscId::decode`].
///
/// ## Examples
///
/// ```
/// use accuraterip::{DiscId, TableOfContents, Time};
///
/// let toc = TableOfContents::from_track_lengths(
///     &[Time::from_msf(0, 6, 0), Time::from_msf(0, 6, 0)],
///     None,
/// ).unwrap();
///
/// let id = DiscId::from_toc(&toc);
/// assert_eq!(id.disc_id_1(), 1350);
/// assert_eq!(id.disc_id_2(), 3601);
/// ```
pub struct DiscId {
	/// # Track Count.
	track_count: u8,

	/// # Disc Id 1.
	disc_id_1: u32,

	/// # Disc Id 2.
	disc_id_2: u32,

	/// # CDDB/freedb Id.
	cddb_id: u32,
}

impl From<&TableOfContents> for DiscId {
	fn from(toc: &TableOfContents) -> Self { Self::from_toc(toc) }
}

impl DiscId {
	#[must_use]
	/// # From Table of Contents.
	///
	/// Computes `discId1`, `discId2`, and `cddbId` from a [`TableOfContents`]'
	/// frame offsets. All arithmetic wraps on overflow, matching the
	/// reference algorithm; construction can never fail since every input
	/// invariant is already enforced by [`TableOfContents`].
	pub fn from_toc(toc: &TableOfContents) -> Self {
		let n = toc.track_count();
		let entries = toc.entries();
		let last = entries.len() - 1;

		// f_i for i = 1..=N+1 (tracks plus lead-out), in CD frames.
		let frames: Vec<i64> = (0..entries.len())
			.map(|i| toc.entry_frame(i))
			.collect();

		let mut disc_id_1: u32 = 0;
		let mut disc_id_2: u32 = 0;
		for (i, &f) in frames.iter().enumerate() {
			let fu = f as u32;
			disc_id_1 = disc_id_1.wrapping_add(fu);

			let w: u32 = if i == last { u32::from(n) + 1 } else { (i as u32) + 1 };
			disc_id_2 = disc_id_2.wrapping_add(fu.max(1).wrapping_mul(w));
		}

		let mut s: u32 = 0;
		for &f in &frames[..last] {
			s = s.wrapping_add(sum_digits((f.div_euclid(FRAMES_PER_SECOND_I64) + 2) as u32));
		}
		// T is whole seconds of total disc duration, derived from the raw
		// sample offsets (not the frame counts used above).
		let t: u32 = (
			toc.leadout().samples().div_euclid(SAMPLES_PER_SECOND)
			- entries[0].start_offset.samples().div_euclid(SAMPLES_PER_SECOND)
		) as u32;
		let cddb_id: u32 = ((s % 255) << 24) | (t << 8) | u32::from(n);

		Self { track_count: n, disc_id_1, disc_id_2, cddb_id }
	}

	#[must_use]
	/// # Decode.
	///
	/// Parses back a disc id string previously produced by concatenating
	/// `disc_id_1`/`disc_id_2`/`cddb_id` as 8-digit lowercase hex with a
	/// `-` separator and the track count as a leading 3-digit decimal
	/// (the shape embedded in [`DiscId::checksum_url`]'s file stem), e.g.
	/// `"002-00000546-00000e11-0700020c"`.
	///
	/// ## Errors
	///
	/// Returns [`AccurateRipError::ParseError`] if the string isn't shaped
	/// like `NNN-DDDDDDDD-DDDDDDDD-DDDDDDDD`.
	///
	/// ## Examples
	///
	/// ```
	/// use accuraterip::{DiscId, TableOfContents, Time};
	///
	/// let toc = TableOfContents::from_track_lengths(
	///     &[Time::from_msf(0, 6, 0), Time::from_msf(0, 6, 0)],
	///     None,
	/// ).unwrap();
	/// let id = DiscId::from_toc(&toc);
	///
	/// let stem = id.file_stem();
	/// let decoded = DiscId::decode(&stem).unwrap();
	/// assert_eq!(decoded, id);
	/// ```
	pub fn decode(src: &str) -> Result<Self, AccurateRipError> {
		let bad = || AccurateRipError::ParseError(format!(
			"{src:?} is not a valid disc id string (expected NNN-DDDDDDDD-DDDDDDDD-DDDDDDDD)",
		));

		let mut parts = src.split('-');
		let track_count: u8 = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
		let disc_id_1 = u32::htou(parts.next().ok_or_else(bad)?.as_bytes()).ok_or_else(bad)?;
		let disc_id_2 = u32::htou(parts.next().ok_or_else(bad)?.as_bytes()).ok_or_else(bad)?;
		let cddb_id = u32::htou(parts.next().ok_or_else(bad)?.as_bytes()).ok_or_else(bad)?;
		if parts.next().is_some() { return Err(bad()); }

		Ok(Self { track_count, disc_id_1, disc_id_2, cddb_id })
	}

	#[must_use]
	/// # Track Count.
	pub const fn track_count(&self) -> u8 { self.track_count }

	#[must_use]
	/// # Disc Id 1.
	pub const fn disc_id_1(&self) -> u32 { self.disc_id_1 }

	#[must_use]
	/// # Disc Id 2.
	pub const fn disc_id_2(&self) -> u32 { self.disc_id_2 }

	#[must_use]
	/// # CDDB/freedb Id.
	pub const fn cddb_id(&self) -> u32 { self.cddb_id }

	#[must_use]
	/// # File Stem.
	///
	/// Renders `NNN-D1-D2-C` (track count zero-padded to 3 digits, the
	/// three ids as 8-digit lowercase hex), the shape [`DiscId::decode`]
	/// expects and the tail of [`DiscId::checksum_url`].
	pub fn file_stem(&self) -> String {
		let count = dactyl::NiceU8::from(self.track_count);
		format!(
			"{}-{:08x}-{:08x}-{:08x}",
			// Safety: NiceU8's bytes are always ASCII decimal digits.
			std::str::from_utf8(count.as_bytes3()).unwrap_or("000"),
			self.disc_id_1, self.disc_id_2, self.cddb_id,
		)
	}

	#[must_use]
	/// # Checksum Database URL.
	///
	/// Builds the AccurateRip database request URL for this disc identity.
	///
	/// ## Examples
	///
	/// ```
	/// use accuraterip::{DiscId, TableOfContents, Time};
	///
	/// let toc = TableOfContents::from_track_lengths(
	///     &[Time::from_msf(0, 6, 0), Time::from_msf(0, 6, 0)],
	///     None,
	/// ).unwrap();
	/// let url = DiscId::from_toc(&toc).checksum_url();
	/// assert!(url.starts_with("http://www.accuraterip.com/accuraterip/"));
	/// ```
	pub fn checksum_url(&self) -> String {
		let d1 = self.disc_id_1;
		format!(
			"http://www.accuraterip.com/accuraterip/{:x}/{:x}/{:x}/dBAR-{}",
			nibble(d1, 0), nibble(d1, 1), nibble(d1, 2),
			self.file_stem_with_extension(),
		)
	}

	/// # File Stem + Extension.
	fn file_stem_with_extension(&self) -> String {
		format!("{}.bin", self.file_stem())
	}
}

/// Frames-per-second as `i64`, local alias to keep the arithmetic above
/// readable without importing the constant under two names.
const FRAMES_PER_SECOND_I64: i64 = crate::time::FRAMES_PER_SECOND;

/// # Decimal Digit Sum.
///
/// Sums the base-10 digits of `x` in a single pass, e.g.
/// `sum_digits(12345) == 1 + 2 + 3 + 4 + 5 == 15`.
fn sum_digits(x: u32) -> u32 {
	let mut buf = itoa::Buffer::new();
	buf.format(x).bytes().map(|b| u32::from(b ^ b'0')).sum()
}

/// # Hex Nibble.
///
/// Returns the `idx`-th hex digit of `v`, 0-indexed from the
/// least-significant nibble.
fn nibble(v: u32, idx: u32) -> u32 {
	(v >> (idx * 4)) & 0xF
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::Time;

	#[test]
	fn t_sum_digits() {
		assert_eq!(sum_digits(0), 0);
		assert_eq!(sum_digits(9), 9);
		assert_eq!(sum_digits(12345), 15);
		assert_eq!(sum_digits(2), 2);
	}

	#[test]
	fn t_s3_scenario() {
		// S3: two-track disc, tracks at offsets [0, 264600], lead-out at
		// 529200 (two 6-second tracks).
		let toc = TableOfContents::from_track_offsets(&[
			Time::from_samples(0),
			Time::from_samples(264_600),
			Time::from_samples(529_200),
		]).unwrap();

		let id = DiscId::from_toc(&toc);
		assert_eq!(id.disc_id_1(), 1350);
		assert_eq!(id.disc_id_2(), 3601);
		assert_eq!(id.track_count(), 2);

		// cddbId's T component is 12, N is 2.
		let t = (id.cddb_id() >> 8) & 0xFFFF;
		assert_eq!(t, 12);
		assert_eq!(id.cddb_id() & 0xFF, 2);
	}

	#[test]
	fn t_decode_round_trip() {
		let toc = TableOfContents::from_track_lengths(
			&[Time::from_msf(0, 6, 0), Time::from_msf(0, 8, 0)],
			None,
		).unwrap();
		let id = DiscId::from_toc(&toc);

		let stem = id.file_stem();
		let decoded = DiscId::decode(&stem).expect("valid stem");
		assert_eq!(decoded, id);
	}

	#[test]
	fn t_decode_bad_input() {
		assert!(DiscId::decode("not-a-valid-id").is_err());
		assert!(DiscId::decode("002-zzzzzzzz-00000000-00000000").is_err());
	}

	#[test]
	fn t_checksum_url_shape() {
		let toc = TableOfContents::from_track_lengths(
			&[Time::from_msf(0, 6, 0)],
			None,
		).unwrap();
		let id = DiscId::from_toc(&toc);
		let url = id.checksum_url();
		assert!(url.starts_with("http://www.accuraterip.com/accuraterip/"));
		assert!(url.ends_with(".bin"));
		assert!(url.contains(&id.file_stem()));
	}

	#[test]
	fn t_checksum_url_path_segments() {
		// disc_id_1 = 0x0002189a: the three path segments are its three
		// least-significant hex digits, a/9/8, per the teacher's
		// `AccurateRip::checksum_url` fixture — not the most-significant
		// ones.
		let id = DiscId::decode("001-0002189a-00000000-00000000").expect("valid disc id");
		assert_eq!(
			id.checksum_url(),
			"http://www.accuraterip.com/accuraterip/a/9/8/dBAR-001-0002189a-00000000-00000000.bin",
		);
	}

	#[test]
	fn t_determinism() {
		// Invariant 4: identical TOCs produce identical URLs.
		let toc_a = TableOfContents::from_track_lengths(&[Time::from_msf(0, 30, 0)], None).unwrap();
		let toc_b = TableOfContents::from_track_lengths(&[Time::from_msf(0, 30, 0)], None).unwrap();
		assert_eq!(DiscId::from_toc(&toc_a).checksum_url(), DiscId::from_toc(&toc_b).checksum_url());
	}
}
