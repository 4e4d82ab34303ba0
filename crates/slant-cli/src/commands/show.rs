//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::Formatter;
use slant_domain::Article;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, formatter: &Formatter) -> Result<Article> {
    let article = slant_store::load(&args.file)?;
    println!("{}", formatter.format_article(&article)?);
    Ok(article)
}
