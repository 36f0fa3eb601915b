//! Replays the corpus in `data/` through the `phonenumber` crate.

use phonenumber_corpus_bench::{
    constants::{DEFAULT_CORPUS_DIR, DEFAULT_LIBRARY},
    replay_named,
    runner::ReplayError,
};

fn main() -> Result<(), ReplayError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    replay_named(DEFAULT_LIBRARY, DEFAULT_CORPUS_DIR)?;
    Ok(())
}
