//! Static HTML snapshot of a grid
//!
//! Produces a `<style>` block injecting the column count and theme as CSS
//! custom properties, followed by one element per cell.

use std::fmt::Write;

use crate::model::GridModel;
use crate::theme::Theme;

use super::display_value;

/// CSS class names applied to cell elements
pub mod class {
    pub const CELL: &str = "cell";
    pub const TOP_RIGHT: &str = "top-right";
    pub const BOTTOM_LEFT: &str = "bottom-left";
    pub const BOTTOM_RIGHT: &str = "bottom-right";
    pub const HIGHLIGHTED: &str = "highlighted";
}

/// CSS variable carrying the configured column count
pub const COLUMN_COUNT_VAR: &str = "gridColumnCount";

/// Render the full grid snapshot
pub fn render_markup(model: &GridModel, theme: &Theme) -> String {
    let mut out = css_variables(model.column_count(), theme);
    out.push('\n');
    out.push_str("<div id=\"grid-container\">\n");
    for (pos, value) in model.cells() {
        let _ = writeln!(
            out,
            "<div id=\"{}\" class=\"{}\"><span class=\"cell-value\">{}</span></div>",
            pos.id(),
            cell_classes(model, pos.x, pos.y).join(" "),
            escape_html(&display_value(value)),
        );
    }
    out.push_str("</div>\n");
    out
}

/// `<style>` block with the column count and every theme entry
///
/// A theme entry named `gridColumnCount` replaces the computed value.
pub fn css_variables(column_count: usize, theme: &Theme) -> String {
    let mut out = String::from("<style>:root {");
    if theme.get(COLUMN_COUNT_VAR).is_none() {
        let _ = write!(out, " --{}: {};", COLUMN_COUNT_VAR, column_count);
    }
    for (key, value) in theme.iter() {
        let _ = write!(out, " --{}: {};", key, escape_html(&value.to_string()));
    }
    out.push_str(" }</style>");
    out
}

/// Class list for the cell at `(x, y)`
///
/// Corner classes follow the full column width, so a short last row never
/// gets `bottom-right` and a single short row never gets `top-right`.
pub fn cell_classes(model: &GridModel, x: usize, y: usize) -> Vec<&'static str> {
    let last_column = model.column_count() - 1;
    let last_row = model.row_count().saturating_sub(1);

    let mut classes = vec![class::CELL];
    if y == 0 && x == last_column {
        classes.push(class::TOP_RIGHT);
    }
    if y == last_row && x == 0 {
        classes.push(class::BOTTOM_LEFT);
    }
    if y == last_row && x == last_column {
        classes.push(class::BOTTOM_RIGHT);
    }
    if model.cursor().x == x && model.cursor().y == y {
        classes.push(class::HIGHLIGHTED);
    }
    classes
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    fn grid(cells: usize, columns: usize) -> GridModel {
        GridModel::new(cells, columns, Vec::new()).unwrap()
    }

    #[test]
    fn test_css_variables_without_theme() {
        assert_eq!(
            css_variables(3, &Theme::new()),
            "<style>:root { --gridColumnCount: 3; }</style>"
        );
    }

    #[test]
    fn test_theme_can_override_column_count() {
        let mut theme = Theme::new();
        theme.insert(COLUMN_COUNT_VAR, "5");
        assert_eq!(
            css_variables(3, &theme),
            "<style>:root { --gridColumnCount: 5; }</style>"
        );
    }

    #[test]
    fn test_first_cell_highlighted() {
        let model = grid(4, 2);
        assert_eq!(cell_classes(&model, 0, 0), vec!["cell", "highlighted"]);
        assert_eq!(cell_classes(&model, 1, 0), vec!["cell", "top-right"]);
        assert_eq!(cell_classes(&model, 0, 1), vec!["cell", "bottom-left"]);
        assert_eq!(cell_classes(&model, 1, 1), vec!["cell", "bottom-right"]);
    }

    #[test]
    fn test_short_last_row_has_no_bottom_right() {
        let model = grid(5, 2);
        assert_eq!(cell_classes(&model, 0, 2), vec!["cell", "bottom-left"]);
        assert!(!render_markup(&model, &Theme::new()).contains("bottom-right"));
    }

    #[test]
    fn test_values_are_escaped() {
        let model = GridModel::new(1, 1, vec![Some(CellValue::text("<b>&</b>"))]).unwrap();
        let html = render_markup(&model, &Theme::new());
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
