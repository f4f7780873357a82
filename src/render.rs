//! C source emission for a generated [`Table`]

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::encode::literal;
use crate::gamma::{GAMMA, TABLE_SIZE};
use crate::table::Table;
use crate::Result;

/// Identifier of the emitted array.
pub const ARRAY_NAME: &str = "ws2812_tab";

/// Provenance named in the header. Kept stable so regenerated tables stay byte-identical
/// to ones already checked into firmware trees.
pub const GENERATOR: &str = "ws2812_tab.py";

/// Write the table as a C array initializer.
pub fn write_table<W: Write>(table: &Table, out: &mut W) -> io::Result<()> {
    writeln!(out, "// Generated by {GENERATOR}, gamma {GAMMA:.3}")?;
    writeln!(out, "//")?;
    writeln!(
        out,
        "static const uint32_t {ARRAY_NAME}[{TABLE_SIZE}][{}] = {{",
        crate::encode::WORDS
    )?;

    let last = table.len() - 1;
    for (i, entry) in table.entries().iter().enumerate() {
        let words = entry
            .words
            .iter()
            .map(|&w| literal(w))
            .collect::<Vec<_>>()
            .join(", ");
        // the last row pads where the comma would be, keeping the comments aligned
        let sep = if i == last { "   " } else { ",  " };
        log::trace!("row {i}: {words}");
        writeln!(out, "    {{  {words} }}{sep}{}", entry.comment())?;
    }

    writeln!(out, "}};")
}

/// Render the table into a string.
pub fn render(table: &Table) -> String {
    let mut buf = Vec::new();
    write_table(table, &mut buf).expect("writing to a Vec never fails");
    // only ascii is ever written
    String::from_utf8(buf).expect("rendered table is ascii")
}

/// Write `contents` to `path` unless the file already holds exactly that.
///
/// Returns whether the file was written.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<bool> {
    if is_current(path, contents)? {
        log::info!("{} is up to date", path.display());
        return Ok(false);
    }
    fs::write(path, contents)?;
    log::info!("wrote {}", path.display());
    Ok(true)
}

/// Whether the file at `path` holds exactly `contents`. A missing file is not current.
pub fn is_current(path: &Path, contents: &str) -> Result<bool> {
    Ok(read_existing(path)?.as_deref() == Some(contents.as_bytes()))
}

/// Raw bytes of the file at `path`, or `None` if it does not exist.
pub fn read_existing(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(existing) => Ok(Some(existing)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_footer() {
        let text = render(&Table::generate());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "// Generated by ws2812_tab.py, gamma 2.500");
        assert_eq!(lines[1], "//");
        assert_eq!(lines[2], "static const uint32_t ws2812_tab[256][2] = {");
        assert_eq!(lines[lines.len() - 1], "};");
        assert_eq!(lines.len(), 3 + 256 + 1);
        assert!(text.ends_with("};\n"));
    }

    #[test]
    fn first_and_last_rows() {
        let text = render(&Table::generate());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[3],
            "    {  0xffffffff, 0xffffffff },  //   0 ->   0: 00000000"
        );
        assert_eq!(
            lines[3 + 128],
            "    {  0xff00ffff, 0xff000000 },  // 128 ->  46: 00101110"
        );
        assert_eq!(
            lines[3 + 255],
            "    {  0x00000000, 0x00000000 }   // 255 -> 255: 11111111"
        );
    }

    #[test]
    fn comments_align() {
        let text = render(&Table::generate());
        let columns: Vec<usize> = text
            .lines()
            .filter(|l| l.starts_with("    {"))
            .map(|l| l.find("//").unwrap())
            .collect();
        assert!(columns.iter().all(|&c| c == columns[0]));
    }

    #[test]
    fn write_if_changed_skips_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ws2812_tab.h");
        let text = render(&Table::generate());

        assert!(!is_current(&path, &text).unwrap());
        assert!(write_if_changed(&path, &text).unwrap());
        assert!(is_current(&path, &text).unwrap());
        assert!(!write_if_changed(&path, &text).unwrap());
    }

    #[test]
    fn write_if_changed_overwrites_stale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ws2812_tab.h");
        let text = render(&Table::generate());
        fs::write(&path, text.replace("gamma 2.500", "gamma 2.200")).unwrap();

        assert!(!is_current(&path, &text).unwrap());
        assert!(write_if_changed(&path, &text).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn read_existing_keeps_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ws2812_tab.h");
        assert_eq!(read_existing(&path).unwrap(), None);

        fs::write(&path, [b'/', b'/', 0xff, b'\n']).unwrap();
        assert_eq!(read_existing(&path).unwrap(), Some(vec![b'/', b'/', 0xff, b'\n']));
    }
}
