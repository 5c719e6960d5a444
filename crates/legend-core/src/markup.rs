//! HTML rendering of a [`Legend`].
//!
//! [`LegendDocument`] implements `Display`, so the same code path fills a
//! `String` in tests and streams straight into the output file.

use std::fmt;

use crate::walker::{Legend, LegendCell, VariantSwatch};

/// Embedded stylesheet shared by every legend document.
pub const STYLESHEET: &str = "\
body {
    color: #e0e0e0;
    background-color: #101010;
}

.grid-container {
    display: grid;
    grid-gap: 1em;
}

.grid-cell {
    background-color: #ffffff;
    color: #000000;
    width: 26em;
    height: 6em;
}

.with-variants {
    height: 11em;
}

.color-swatch {
    display: block;
    width: 4em;
    height: 4em;
    margin-top: 1em;
    margin-left: 21em;
    box-shadow: 0.2em 0.2em #888888;
}

.name {
    float: left;
    margin-left: 0.5em;
    margin-top: 0.5em;
    font-size: 2em;
    max-width: 18em;
}

.variant-swatch {
    display: block;
    float: left;
    width: 2em;
    height: 2em;
    margin: 0.25em;
    box-shadow: 0.1em 0.1em #888888;
}

.new-row {
    clear: left;
    margin-left: 0.75em;
}
";

/// HTML-escapes text for element content and quoted attributes.
///
/// Both quote characters are escaped, so names like `Jack o'Lantern` are safe
/// in either attribute style.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

/// A complete legend page ready to be formatted.
pub struct LegendDocument<'a> {
    legend: &'a Legend,
    title: &'a str,
}

impl<'a> LegendDocument<'a> {
    /// Wraps `legend` with the page `title`.
    pub fn new(legend: &'a Legend, title: &'a str) -> Self {
        Self { legend, title }
    }
}

impl fmt::Display for LegendDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = Escaped(self.title);
        writeln!(f, "<html>")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<title>{title}</title>")?;
        writeln!(f, "<style>\n{STYLESHEET}</style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "<h1>{title}</h1>")?;
        write_section(f, "biomes", "Biomes", &self.legend.biomes)?;
        write_section(f, "blocks", "Blocks", &self.legend.blocks)?;
        writeln!(f, "</body></html>")
    }
}

/// Render the whole page into a `String`.
pub fn render_html(legend: &Legend, title: &str) -> String {
    LegendDocument::new(legend, title).to_string()
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    anchor: &str,
    heading: &str,
    cells: &[LegendCell],
) -> fmt::Result {
    writeln!(f, "<a name=\"{anchor}\"></a>")?;
    writeln!(f, "<h2>{heading}</h2>")?;
    writeln!(f, "<div class=\"grid-container\">")?;
    for cell in cells {
        write_cell(f, cell)?;
    }
    writeln!(f, "</div>")
}

fn write_cell(f: &mut fmt::Formatter<'_>, cell: &LegendCell) -> fmt::Result {
    let name = Escaped(&cell.name);
    if cell.has_variants() {
        writeln!(f, "<div class=\"grid-cell with-variants\">")?;
    } else {
        writeln!(f, "<div class=\"grid-cell\">")?;
    }
    writeln!(f, "    <div class=\"name\">{name}</div>")?;
    writeln!(
        f,
        "    <div class=\"color-swatch\" style=\"background-color: #{}\" title=\"{name}\">&nbsp;</div>",
        cell.color.hex()
    )?;
    for swatch in cell.variants.iter().flatten() {
        write_variant(f, swatch)?;
    }
    writeln!(f, "</div>")
}

fn write_variant(f: &mut fmt::Formatter<'_>, swatch: &VariantSwatch) -> fmt::Result {
    let class = if swatch.new_row {
        "variant-swatch new-row"
    } else {
        "variant-swatch"
    };
    writeln!(
        f,
        "    <div class=\"{class}\" style=\"background-color: #{}\" title=\"{}\">&nbsp;</div>",
        swatch.color.hex(),
        Escaped(&swatch.title)
    )
}
