#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

/// Render an aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .fold(header.len().max(MIN_COLUMN), usize::max)
        })
        .collect();
    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                let text = truncate(row.get(column).map_or("-", String::as_str), *width);
                let numeric = is_numeric(&text);
                let padded = pad(&text, *width, numeric);
                if options.color {
                    colorize(&text, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest column, one char at a time, until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(column, width)| **width > headers[*column].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(column, _)| column);
        let Some(column) = widest else {
            break;
        };
        widths[column] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap a padded cell in an ANSI color picked from its plain text.
fn colorize(text: &str, padded: String) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "processed" | "split" | "true" | "on_time" => "32",
        "skipped" | "partial" | "merged" => "33",
        "empty" | "false" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_to_widest_cell() {
        let rows = vec![
            vec!["ANA".to_string(), "processed".to_string()],
            vec!["DELA_CRUZ_JUAN".to_string(), "skipped".to_string()],
        ];
        let table = render_table(&["folder", "status"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "folder          status   ");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "ANA             processed");
        assert_eq!(lines[3], "DELA_CRUZ_JUAN  skipped  ");
    }

    #[test]
    fn numbers_are_right_aligned() {
        let rows = vec![vec!["merged".to_string(), "12".to_string()]];
        let table = render_table(&["state", "count"], &rows, PLAIN);
        assert!(table.lines().nth(2).unwrap().ends_with("    12"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec!["A_VERY_LONG_STUDENT_FOLDER_NAME".to_string(), "split".to_string()]];
        let options = TableOptions {
            max_width: Some(20),
            color: false,
        };
        let table = render_table(&["folder", "state"], &rows, options);
        let row = table.lines().nth(2).unwrap();
        assert!(row.contains('…'));
        assert_eq!(row.chars().count(), 20);
    }

    #[test]
    fn color_wraps_known_statuses() {
        let rows = vec![vec!["skipped".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_table(&["status"], &rows, options);
        assert!(table.contains("\u{1b}[33mskipped"));
    }
}
