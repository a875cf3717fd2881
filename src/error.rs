/*!
# AccurateRip: Errors
*/

use std::{
	error::Error,
	fmt,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Error Type.
///
/// All arithmetic performed by this crate is infallible — wrapping and made
/// impossible to overflow by construction — so the only way any of it can go
/// wrong is if the *inputs* are bad: a malformed table of contents, a
/// nonsensical offset window, a truncated AccurateRip response, too many
/// samples, or a query made before its answer is ready.
pub enum AccurateRipError {
	/// # Invalid Table of Contents.
	///
	/// Raised by [`TableOfContents`](crate::TableOfContents) construction
	/// when an invariant from the data model is violated: too few or too
	/// many entries, a non-frame-aligned offset, offsets out of order, or a
	/// track shorter than the Red Book's 4-second minimum.
	InvalidToc(String),

	/// # Invalid Offset Window.
	///
	/// Raised when the requested `(Δ_min, Δ_max)` window either has its
	/// endpoints reversed or exceeds the bound the 5-frame edge exclusion
	/// makes available.
	InvalidWindow(String),

	/// # Truncated AccurateRip Response.
	///
	/// Raised when the binary response blob ends partway through a header or
	/// track record.
	ParseError(String),

	/// # Too Many Samples.
	///
	/// Raised when a [`ChecksumGenerator::process_samples`](crate::ChecksumGenerator::process_samples)
	/// call would push the cumulative sample count past the total the table
	/// of contents indicates.
	ExcessInput {
		/// # Samples That Would Have Been Processed.
		processed: i64,

		/// # Samples The TOC Indicates.
		expected: i64,
	},

	/// # Result Queried Too Early.
	///
	/// Raised when a checksum is queried before every sample indicated by
	/// the table of contents has been processed.
	NotDone {
		/// # Samples Processed So Far.
		processed: i64,

		/// # Samples The TOC Indicates.
		expected: i64,
	},

	/// # Offset Outside Configured Window.
	OffsetOutOfRange {
		/// # Track Number.
		track: u8,

		/// # Requested Offset.
		offset: i32,

		/// # Minimum Configured Offset.
		min: i32,

		/// # Maximum Configured Offset.
		max: i32,
	},

	/// # Frame 450 Undefined For This Track.
	///
	/// Raised when a Frame 450 checksum is requested for a track shorter
	/// than 451 CD frames.
	FrameNotDefined {
		/// # Track Number.
		track: u8,
	},
}

impl fmt::Display for AccurateRipError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidToc(msg) => write!(f, "invalid table of contents: {msg}"),
			Self::InvalidWindow(msg) => write!(f, "invalid offset window: {msg}"),
			Self::ParseError(msg) => write!(f, "failed to parse AccurateRip response: {msg}"),
			Self::ExcessInput { processed, expected } => write!(
				f,
				"process_samples received {processed} total samples, but the table of contents only indicates {expected}",
			),
			Self::NotDone { processed, expected } => write!(
				f,
				"checksum queried after {processed} of {expected} expected samples were processed",
			),
			Self::OffsetOutOfRange { track, offset, min, max } => write!(
				f,
				"offset {offset} for track {track} is outside the configured window {min}..={max}",
			),
			Self::FrameNotDefined { track } => write!(
				f,
				"track {track} is shorter than 451 frames; no Frame 450 checksum is defined for it",
			),
		}
	}
}

impl Error for AccurateRipError {}
