use std::io::{self, Write};

/// Writes the numbered list of discovered URLs
///
/// # Format
///
/// ```text
/// Links
/// -----
/// 001. https://www.example.com/
/// 002. https://www.iana.org/domains/example
///
/// ```
///
/// Numbering is 1-based and zero-padded to three digits; wider numbers are
/// printed in full.
pub fn write_link_listing<W: Write>(writer: &mut W, links: &[String]) -> io::Result<()> {
    writeln!(writer, "Links")?;
    writeln!(writer, "-----")?;
    for (i, link) in links.iter().enumerate() {
        writeln!(writer, "{:03}. {}", i + 1, link)?;
    }
    writeln!(writer)?;
    Ok(())
}
