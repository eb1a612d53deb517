/// Narrowest width any column is squeezed to.
const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

/// Terminal width from `COLUMNS`, ignored when implausibly small.
#[must_use]
pub fn terminal_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40)
}

/// Render an aligned text table. Numeric cells are right-aligned; cells
/// wider than their column are cut with `…`.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();
    if let Some(max_width) = max_width {
        shrink_to_fit(&mut widths, max_width);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_row(
        headers.iter().map(|header| (*header).to_string()),
        &widths,
    ));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join(GAP),
    );
    for row in rows {
        lines.push(join_row(row.iter().cloned(), &widths));
    }
    lines.join("\n")
}

fn join_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(value, width)| pad(&truncate(&value, *width), *width))
        .collect::<Vec<_>>()
        .join(GAP);
    line.trim_end().to_string()
}

/// Take one column at a time off the widest column until the row fits.
fn shrink_to_fit(widths: &mut [usize], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value
        .chars()
        .take(width.saturating_sub(1))
        .collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.chars().count());
    if is_numeric(value) {
        format!("{}{value}", " ".repeat(fill))
    } else {
        format!("{value}{}", " ".repeat(fill))
    }
}

fn is_numeric(value: &str) -> bool {
    value != "-"
        && !value.is_empty()
        && value.chars().all(|ch| ch.is_ascii_digit() || ch == '-')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::render;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    #[test]
    fn aligns_columns_and_numbers() {
        let table = render(
            &["path", "views"],
            &rows(&[&["/", "120"], &["/services", "7"]]),
            None,
        );
        assert_eq!(
            table,
            "path       views\n---------  -----\n/            120\n/services      7"
        );
    }

    #[test]
    fn truncates_to_max_width() {
        let table = render(
            &["title"],
            &rows(&[&["Occupational therapy for sensory processing"]]),
            Some(40),
        );
        let last = table.lines().last().unwrap();
        assert_eq!(last.chars().count(), 40);
        assert!(last.ends_with('…'));
    }
}
