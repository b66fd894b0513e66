//! Info command implementation.

use clap::Parser;

use super::VocabArgs;

/// Info command arguments.
#[derive(Parser)]
pub struct InfoCommand {
    #[command(flatten)]
    pub vocab: VocabArgs,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: InfoCommand) -> AnyhowResult<()> {
    let translator = cmd.vocab.translator()?;

    println!("Mode:            {}", translator.mode());
    println!("Vocabulary size: {}", translator.vocab_size());

    if let Some(vocab) = translator.vocabulary() {
        println!("Padding token:   {}", vocab.pad_token());
        println!("Prefix keys:     {}", vocab.prefixes().len());
    }

    Ok(())
}
