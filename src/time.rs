/*!
# AccurateRip: Time
*/

use std::{
	fmt,
	iter::Sum,
	ops::{
		Add,
		AddAssign,
		Sub,
		SubAssign,
	},
};



/// # CD Frames Per Second.
///
/// A CD frame is 1/75 of a second of audio.
pub const FRAMES_PER_SECOND: i64 = 75;

/// # Samples Per CD Frame.
pub const SAMPLES_PER_FRAME: i64 = 588;

/// # Samples Per Second.
///
/// Red Book audio is 44.1kHz, stereo, 16-bit.
pub const SAMPLES_PER_SECOND: i64 = 44_100;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// # Time (In Samples).
///
/// This holds a signed count of stereo audio samples from some origin —
/// usually the start of a disc or track. It is the unit every table of
/// contents offset and track length is expressed in.
///
/// ## Examples
///
/// ```
/// use accuraterip::Time;
///
/// // Six seconds, expressed as minutes/seconds/frames…
/// let a = Time::from_msf(0, 6, 0);
///
/// // …or as a raw sample count.
/// let b = Time::from_samples(6 * 44_100);
///
/// assert_eq!(a, b);
/// assert!(a.is_frame_boundary());
/// ```
pub struct Time(i64);

impl Add for Time {
	type Output = Self;
	fn add(self, other: Self) -> Self { Self(self.0 + other.0) }
}

impl AddAssign for Time {
	fn add_assign(&mut self, other: Self) { self.0 += other.0; }
}

impl Sub for Time {
	type Output = Self;
	fn sub(self, other: Self) -> Self { Self(self.0 - other.0) }
}

impl SubAssign for Time {
	fn sub_assign(&mut self, other: Self) { self.0 -= other.0; }
}

impl Sum for Time {
	fn sum<I>(iter: I) -> Self
	where I: Iterator<Item = Self> {
		iter.fold(Self::default(), |a, b| a + b)
	}
}

impl fmt::Display for Time {
	/// # Display As MM:SS+FF.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (m, s, fr) = self.to_msf();
		write!(f, "{m:02}:{s:02}+{fr:02}")
	}
}

impl From<i64> for Time {
	fn from(src: i64) -> Self { Self(src) }
}

impl From<Time> for i64 {
	fn from(src: Time) -> Self { src.0 }
}

impl Time {
	#[must_use]
	/// # From Raw Sample Count.
	///
	/// ## Examples
	///
	/// ```
	/// use accuraterip::Time;
	///
	/// assert_eq!(Time::from_samples(588).samples(), 588);
	/// ```
	pub const fn from_samples(samples: i64) -> Self { Self(samples) }

	#[must_use]
	/// # From Minutes, Seconds, Frames.
	///
	/// Builds a [`Time`] the same way a cue sheet index does: `((m·60 + s)·75
	/// + f)·588` samples.
	///
	/// ## Examples
	///
	/// ```
	/// use accuraterip::Time;
	///
	/// assert_eq!(Time::from_msf(1, 2, 3).samples(), ((1 * 60 + 2) * 75 + 3) * 588);
	/// ```
	pub const fn from_msf(minutes: i64, seconds: i64, frames: i64) -> Self {
		Self(((minutes * 60 + seconds) * FRAMES_PER_SECOND + frames) * SAMPLES_PER_FRAME)
	}

	#[must_use]
	/// # Zero.
	pub const fn zero() -> Self { Self(0) }

	#[must_use]
	/// # Total Samples.
	pub const fn samples(self) -> i64 { self.0 }

	#[must_use]
	/// # Is Frame Boundary?
	///
	/// Returns `true` if this time lands exactly on a CD frame (i.e. is
	/// evenly divisible by [`SAMPLES_PER_FRAME`]).
	///
	/// ## Examples
	///
	/// ```
	/// use accuraterip::Time;
	///
	/// assert!(Time::from_samples(588).is_frame_boundary());
	/// assert!(! Time::from_samples(587).is_frame_boundary());
	/// ```
	pub const fn is_frame_boundary(self) -> bool { self.0 % SAMPLES_PER_FRAME == 0 }

	#[must_use]
	/// # To Minutes, Seconds, Frames.
	///
	/// The inverse of [`Time::from_msf`], via simple integer division. This
	/// is the representation a cue sheet would render for this time.
	///
	/// ## Examples
	///
	/// ```
	/// use accuraterip::Time;
	///
	/// assert_eq!(Time::from_msf(1, 2, 3).to_msf(), (1, 2, 3));
	/// ```
	pub const fn to_msf(self) -> (i64, i64, i64) {
		let frames = self.0.div_euclid(SAMPLES_PER_FRAME);
		let seconds = frames.div_euclid(FRAMES_PER_SECOND);
		let minutes = seconds.div_euclid(60);
		(
			minutes,
			seconds - minutes * 60,
			frames - seconds * FRAMES_PER_SECOND,
		)
	}
}
