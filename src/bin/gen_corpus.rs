//! Writes the synthetic phone number corpus into `data/`, one file per
//! locale, replacing whatever was there.

use phonenumber_corpus_bench::{
    CorpusGenerator, FakeRsProvider, GeneratorConfig, generator::GenerateError,
};

fn main() -> Result<(), GenerateError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    CorpusGenerator::new(FakeRsProvider::new(), GeneratorConfig::default()).run()?;
    Ok(())
}
