/*!
# AccurateRip

AccurateRip is a streaming, allocation-light implementation of the
[AccurateRip](http://accuraterip.com/) CD-audio verification pipeline:
disc-identity fingerprinting, the binary database response format, and the
offset-searching checksum engine rippers use to tell a bit-perfect rip from
a drive with a quirky read offset.

This crate does not parse cue sheets, decode audio, or speak HTTP — it
consumes the data those layers produce ([`TableOfContents`], PCM sample
buffers, a response byte stream) and hands back disc identities, parsed
database records, and checksums.



## Examples

```
use accuraterip::{ChecksumGenerator, DiscId, TableOfContents, Time};

// A two-track disc, six seconds each.
let toc = TableOfContents::from_track_lengths(
    &[Time::from_msf(0, 6, 0), Time::from_msf(0, 6, 0)],
    None,
).unwrap();

// Disc identity, for building the database request URL.
let id = DiscId::from_toc(&toc);
assert!(id.checksum_url().starts_with("http://www.accuraterip.com/accuraterip/"));

// Feed it silence and read back the checksums.
let mut gen = ChecksumGenerator::new(&toc, None).unwrap();
let total = toc.total_length().samples() as usize;
gen.process_samples(&vec![0; total], &vec![0; total]).unwrap();
assert_eq!(gen.v1_checksum(1, 0).unwrap(), 0);
```



## De/Serialization

The optional `serde` crate feature derives `Serialize`/`Deserialize` for
every public data type ([`Time`], [`TableOfContents`], [`TocEntry`],
[`DiscId`], [`TrackRecord`], [`DiscRecord`]).
*/

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
	unsafe_code,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod checksum;
mod error;
mod identity;
pub mod response;
mod time;
mod toc;

pub use checksum::{
	ChecksumGenerator,
	DEFAULT_MAX_OFFSET,
	DEFAULT_MIN_OFFSET,
};
pub use error::AccurateRipError;
pub use identity::DiscId;
pub use response::{
	DiscRecord,
	TrackRecord,
};
pub use time::{
	FRAMES_PER_SECOND,
	SAMPLES_PER_FRAME,
	SAMPLES_PER_SECOND,
	Time,
};
pub use toc::{
	LEAD_OUT_TRACK,
	TableOfContents,
	TocEntry,
};
