mod query;
mod server;

pub use query::{check, match_ingredients};
pub use server::serve;

use pantry_recipe::{Corpus, PrepareOptions};

use crate::Config;

/// Loads and prepares the configured corpus. Any failure here is fatal at startup.
pub fn load_corpus(config: &Config) -> anyhow::Result<Corpus> {
    let options = PrepareOptions {
        step_label: config.corpus.step_label.to_owned(),
    };

    Corpus::load(&config.corpus.path, &options)
        .map_err(|e| anyhow::anyhow!("cannot start without a recipe corpus: {e}"))
}
