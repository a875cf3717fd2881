/*!
# AccurateRip: Table of Contents
*/

use crate::{
	AccurateRipError,
	time::{
		SAMPLES_PER_FRAME,
		Time,
	},
};



/// # Lead-Out Track Number.
///
/// The sentinel track number given to a table of contents' final entry,
/// which marks the end of the audio rather than a real track.
pub const LEAD_OUT_TRACK: u8 = 0xAA;

/// # Maximum Real Tracks.
///
/// Red Book audio CDs support at most 99 tracks.
const MAX_TRACKS: usize = 99;

/// # Red Book Minimum Track Length.
const MIN_TRACK_LEN: Time = Time::from_samples(4 * crate::time::SAMPLES_PER_SECOND);



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// # Table of Contents Entry.
///
/// A single `(trackNumber, startOffset)` pair. The final entry of a
/// [`TableOfContents`] always carries [`LEAD_OUT_TRACK`] as its track
/// number.
pub struct TocEntry {
	/// # Track Number.
	///
	/// `1..=N` for real tracks, [`LEAD_OUT_TRACK`] for the sentinel final
	/// entry.
	pub track_number: u8,

	/// # Start Offset.
	pub start_offset: Time,
}



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// # Table of Contents.
///
/// An ordered, immutable sequence of [`TocEntry`] — one per real track, plus
/// a final lead-out sentinel — describing the track boundaries of a Red
/// Book audio CD.
///
/// Build one with [`TableOfContents::from_track_lengths`] (if you know how
/// long each track is) or [`TableOfContents::from_track_offsets`] (if you
/// know where each track, plus the lead-out, begins).
///
/// ## Examples
///
/// ```
/// use accuraterip::{TableOfContents, Time};
///
/// // Two six-second tracks.
/// let toc = TableOfContents::from_track_lengths(
///     &[Time::from_msf(0, 6, 0), Time::from_msf(0, 6, 0)],
///     None,
/// ).unwrap();
///
/// assert_eq!(toc.track_count(), 2);
/// assert_eq!(toc.leadout(), Time::from_msf(0, 12, 0));
/// ```
pub struct TableOfContents {
	/// # Entries.
	entries: Vec<TocEntry>,
}

impl TableOfContents {
	/// # From Track Lengths.
	///
	/// Builds a table of contents from the length of each real track, plus
	/// an optional offset for the very first track (defaulting to `0`,
	/// i.e. [`Time::zero`]).
	///
	/// ## Errors
	///
	/// Returns [`AccurateRipError::InvalidToc`] if there are no tracks or
	/// more than 99, if `first_offset` isn't frame-aligned, if any track
	/// length isn't frame-aligned, or if any track is shorter than the Red
	/// Book minimum of four seconds.
	///
	/// ## Examples
	///
	/// ```
	/// use accuraterip::{TableOfContents, Time};
	///
	/// let toc = TableOfContents::from_track_lengths(
	///     &[Time::from_msf(0, 6, 0)],
	///     None,
	/// ).unwrap();
	/// assert_eq!(toc.track_count(), 1);
	/// ```
	pub fn from_track_lengths(lengths: &[Time], first_offset: Option<Time>)
	-> Result<Self, AccurateRipError> {
		if lengths.is_empty() {
			return Err(AccurateRipError::InvalidToc(
				"at least one track is required".to_owned()
			));
		}
		if MAX_TRACKS < lengths.len() {
			return Err(AccurateRipError::InvalidToc(format!(
				"a disc can contain at most {MAX_TRACKS} tracks (found {})",
				lengths.len(),
			)));
		}

		let first_offset = first_offset.unwrap_or_else(Time::zero);
		if ! first_offset.is_frame_boundary() {
			return Err(AccurateRipError::InvalidToc(format!(
				"first track offset {} is not a frame boundary",
				first_offset.samples(),
			)));
		}

		let mut entries = Vec::with_capacity(lengths.len() + 1);
		entries.push(TocEntry { track_number: 1, start_offset: first_offset });

		for (i, &len) in lengths.iter().enumerate() {
			if ! len.is_frame_boundary() {
				return Err(AccurateRipError::InvalidToc(format!(
					"length {} of track {} is not a frame boundary",
					len.samples(), i + 1,
				)));
			}
			if len < MIN_TRACK_LEN {
				return Err(AccurateRipError::InvalidToc(format!(
					"track {} is {} samples long, less than the Red Book minimum of {}",
					i + 1, len.samples(), MIN_TRACK_LEN.samples(),
				)));
			}

			let prev = entries[entries.len() - 1];
			entries.push(TocEntry {
				track_number: prev.track_number + 1,
				start_offset: prev.start_offset + len,
			});
		}

		let last = entries.len() - 1;
		entries[last].track_number = LEAD_OUT_TRACK;

		Ok(Self { entries })
	}

	/// # From Track Offsets.
	///
	/// Builds a table of contents from the absolute start offset of each
	/// real track plus the lead-out, i.e. `N+1` offsets for `N` tracks. The
	/// final element is always treated as the lead-out.
	///
	/// ## Errors
	///
	/// Returns [`AccurateRipError::InvalidToc`] under the same conditions as
	/// [`TableOfContents::from_track_lengths`], plus when fewer than two
	/// offsets are given or the offsets are not strictly increasing.
	///
	/// ## Examples
	///
	/// ```
	/// use accuraterip::{TableOfContents, Time};
	///
	/// let toc = TableOfContents::from_track_offsets(&[
	///     Time::zero(),
	///     Time::from_msf(0, 6, 0),
	///     Time::from_msf(0, 12, 0),
	/// ]).unwrap();
	/// assert_eq!(toc.track_count(), 2);
	/// ```
	pub fn from_track_offsets(offsets: &[Time]) -> Result<Self, AccurateRipError> {
		if offsets.len() < 2 {
			return Err(AccurateRipError::InvalidToc(
				"at least 2 entries are required (one track plus the lead-out)".to_owned()
			));
		}

		let mut lengths = Vec::with_capacity(offsets.len() - 1);
		for pair in offsets.windows(2) {
			if pair[1] <= pair[0] {
				return Err(AccurateRipError::InvalidToc(format!(
					"offsets must be strictly increasing ({} does not precede {})",
					pair[0].samples(), pair[1].samples(),
				)));
			}
			lengths.push(pair[1] - pair[0]);
		}

		Self::from_track_lengths(&lengths, Some(offsets[0]))
	}

	#[must_use]
	/// # Entries.
	///
	/// Return every entry, real tracks followed by the lead-out sentinel.
	pub fn entries(&self) -> &[TocEntry] { &self.entries }

	#[must_use]
	/// # Number of Real Tracks.
	///
	/// ## Examples
	///
	/// ```
	/// use accuraterip::{TableOfContents, Time};
	///
	/// let toc = TableOfContents::from_track_lengths(
	///     &[Time::from_msf(0, 6, 0), Time::from_msf(0, 6, 0)],
	///     None,
	/// ).unwrap();
	/// assert_eq!(toc.track_count(), 2);
	/// ```
	pub fn track_count(&self) -> u8 {
		// Invariant: 1..=99 real tracks, enforced at construction.
		(self.entries.len() - 1) as u8
	}

	#[must_use]
	/// # Lead-Out.
	///
	/// The disc's total length, measured from the same origin as every
	/// other offset in this table of contents.
	pub fn leadout(&self) -> Time {
		self.entries[self.entries.len() - 1].start_offset
	}

	#[must_use]
	/// # Track Start.
	///
	/// Return the start offset of a real track (1-based).
	///
	/// ## Panics
	///
	/// Panics if `track` is `0` or greater than [`TableOfContents::track_count`].
	pub fn track_start(&self, track: u8) -> Time {
		assert!(track != 0 && track <= self.track_count(), "track out of range");
		self.entries[usize::from(track) - 1].start_offset
	}

	#[must_use]
	/// # Track Length.
	///
	/// Return the length of a real track (1-based) — the difference between
	/// its start offset and the next entry's (the next track's start, or the
	/// lead-out for the final track).
	///
	/// ## Panics
	///
	/// Panics if `track` is `0` or greater than [`TableOfContents::track_count`].
	pub fn track_length(&self, track: u8) -> Time {
		assert!(track != 0 && track <= self.track_count(), "track out of range");
		let idx = usize::from(track) - 1;
		self.entries[idx + 1].start_offset - self.entries[idx].start_offset
	}

	#[must_use]
	/// # Total Length.
	///
	/// The sum of every real track's length — equivalently, the lead-out
	/// minus the first track's start offset.
	///
	/// ## Examples
	///
	/// ```
	/// use accuraterip::{TableOfContents, Time};
	///
	/// let toc = TableOfContents::from_track_lengths(
	///     &[Time::from_msf(0, 6, 0), Time::from_msf(0, 10, 0)],
	///     None,
	/// ).unwrap();
	/// assert_eq!(toc.total_length(), Time::from_msf(0, 16, 0));
	/// ```
	pub fn total_length(&self) -> Time {
		self.leadout() - self.entries[0].start_offset
	}

	/// # Disc Frame (`Time / SAMPLES_PER_FRAME`).
	///
	/// Used by [`crate::identity`] for disc-identity computations, which
	/// operate on CD frames rather than raw samples.
	pub(crate) fn entry_frame(&self, idx: usize) -> i64 {
		self.entries[idx].start_offset.samples().div_euclid(SAMPLES_PER_FRAME)
	}
}
