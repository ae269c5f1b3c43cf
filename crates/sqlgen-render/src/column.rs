use sqlgen_core::ColumnDefinition;

pub(crate) const INDENT: &str = "  ";
pub(crate) const LINE_END: &str = ",\n";

/// Render one column as DDL lines, each ending in `",\n"`.
///
/// Raw definition lines take precedence over every other field of the column.
pub fn render_column(column: &ColumnDefinition, use_underscore_naming: bool) -> String {
    if let Some(lines) = column.raw_lines() {
        return render_raw_lines(lines);
    }

    let tag = column.type_tag();
    let mut out = String::from(INDENT);

    out.push('`');
    out.push_str(&column.display_name(use_underscore_naming));
    out.push('`');

    out.push(' ');
    out.push_str(tag.keyword());
    if tag.has_length() {
        out.push_str(&format!("({})", column.length));
    }
    if let Some(width) = tag.numeric_width() {
        out.push_str(&format!("({},{})", width, column.precision));
    }

    out.push_str(if column.nullable {
        " DEFAULT NULL"
    } else {
        " NOT NULL"
    });
    if column.auto_increment {
        out.push_str(" AUTO_INCREMENT");
    }

    out.push_str(" COMMENT '");
    out.push_str(column.comment.as_deref().unwrap_or_default());
    out.push('\'');

    out.push_str(LINE_END);
    out
}

/// Render verbatim definition lines: trimmed, commas removed, double quotes
/// turned into single quotes.
pub fn render_raw_lines(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        let cleaned = line.trim().replace(',', "").replace('"', "'");
        out.push_str(INDENT);
        out.push_str(&cleaned);
        out.push_str(LINE_END);
    }
    out
}
