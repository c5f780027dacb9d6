use std::io::{Read, Write};

use anyhow::Context;

/// Read the whole cart from a path, or from stdin when the path is absent
/// or `-`.
pub fn read_input(path: Option<&str>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(p) if p != "-" => std::fs::read(p).with_context(|| format!("read cart: {p}")),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("read cart from stdin")?;
            Ok(buf)
        }
    }
}

/// Write the minified cart to a path, or to stdout when no path is given.
pub fn write_output(path: Option<&str>, bytes: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(p) => std::fs::write(p, bytes).with_context(|| format!("write cart: {p}")),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes).context("write cart to stdout")?;
            stdout.flush().context("flush stdout")
        }
    }
}
