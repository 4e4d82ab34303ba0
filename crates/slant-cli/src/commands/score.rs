//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::error::Result;
use crate::output::Formatter;
use slant_analyzer::{score, Lexicon};

/// Execute the score command.
pub fn execute_score(args: ScoreArgs, lexicon: &Lexicon, formatter: &Formatter) -> Result<f64> {
    let sentence = args.sentence();
    let value = score(&sentence, lexicon);
    println!("{}", formatter.format_score(&sentence, value)?);
    Ok(value)
}
