use clap::Args;
use picomin_core::minify_cart;

use crate::io::cart;

#[derive(Args, Debug)]
pub struct MinifyArgs {
    /// Cart file to minify. Reads standard input when omitted or `-`.
    pub input: Option<String>,

    /// Write the minified cart here instead of standard output.
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: MinifyArgs) -> anyhow::Result<()> {
    let doc = cart::read_input(args.input.as_deref())?;
    let min = minify_cart(&doc)?;
    cart::write_output(args.out.as_deref(), &min)?;

    let saved = doc.len().saturating_sub(min.len());
    let pct = if doc.is_empty() {
        0.0
    } else {
        saved as f64 * 100.0 / doc.len() as f64
    };
    eprintln!(
        "minify ok: in_bytes={} out_bytes={} saved={} ({:.1}%)",
        doc.len(),
        min.len(),
        saved,
        pct
    );

    Ok(())
}
