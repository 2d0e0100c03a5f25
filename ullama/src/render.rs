use console::style;
use ullama_core::ResultItem;

const DESCRIPTION_WIDTH: usize = 76;

/// Formats a result list the way the launcher would show it: a numbered name
/// line, then the wrapped description.
pub fn render_items(items: &[ResultItem]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{} {}\n", style(format!("{:>2}.", i + 1)).dim(), style(&item.name).bold()));
        if !item.description.is_empty() {
            for line in textwrap::wrap(&item.description, DESCRIPTION_WIDTH) {
                out.push_str(&format!("    {}\n", line));
            }
        }
    }
    out
}

/// Labels used in the interactive selection prompt.
pub fn item_labels(items: &[ResultItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            if item.description.is_empty() {
                item.name.clone()
            } else {
                let first_line = item.description.lines().next().unwrap_or_default();
                format!("{}  {}", item.name, style(first_line).dim())
            }
        })
        .collect()
}
