pub mod constants;
pub mod corpus;
pub mod generator;
pub mod i18n;
pub mod interfaces;
pub mod runner;
pub(crate) mod string_util;

/// Dispatch from a runtime locale value to the `fake` crate's per-locale
/// types lives in a macro, the match would otherwise be written out by hand
/// for every locale.
mod macros;


pub use corpus::{CandidateRecord, CorpusReader};
pub use generator::{CorpusGenerator, FakeRsProvider, GeneratorConfig};
pub use i18n::RegionTag;
pub use interfaces::{FakerProvider, PhoneNumberFaker, PhoneNumberLibrary};
pub use runner::{PhoneNumberFormat, PhonenumberCrate, replay_corpus, replay_named};
