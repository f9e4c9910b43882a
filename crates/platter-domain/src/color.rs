//! Tag color resolution.
//!
//! Tag colors arrive as hex strings (`#49B64E`) but are stored and served as
//! CSS color names. A hex value that does not correspond to a named color is
//! a validation failure, not a silent passthrough.

/// Subset of the CSS3 named colors that tag palettes draw from.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("#000000", "black"),
    ("#ffffff", "white"),
    ("#ff0000", "red"),
    ("#00ff00", "lime"),
    ("#0000ff", "blue"),
    ("#ffff00", "yellow"),
    ("#00ffff", "cyan"),
    ("#ff00ff", "magenta"),
    ("#808080", "gray"),
    ("#c0c0c0", "silver"),
    ("#800000", "maroon"),
    ("#808000", "olive"),
    ("#008000", "green"),
    ("#800080", "purple"),
    ("#008080", "teal"),
    ("#000080", "navy"),
    ("#ffa500", "orange"),
    ("#a52a2a", "brown"),
    ("#ffc0cb", "pink"),
    ("#ffd700", "gold"),
    ("#f0e68c", "khaki"),
    ("#e6e6fa", "lavender"),
    ("#4b0082", "indigo"),
    ("#ee82ee", "violet"),
    ("#fa8072", "salmon"),
    ("#ff7f50", "coral"),
    ("#40e0d0", "turquoise"),
    ("#dda0dd", "plum"),
    ("#f5f5dc", "beige"),
    ("#ffffe0", "lightyellow"),
    ("#90ee90", "lightgreen"),
    ("#add8e6", "lightblue"),
    ("#ff6347", "tomato"),
    ("#fffacd", "lemonchiffon"),
];

/// Resolve a hex color string to its CSS name.
///
/// Accepts `#rrggbb` and the shorthand `#rgb`, case-insensitive.
/// Returns `None` when the value is malformed or has no name.
pub fn hex_to_name(hex: &str) -> Option<&'static str> {
    let normalized = normalize(hex)?;
    NAMED_COLORS
        .iter()
        .find(|(h, _)| *h == normalized)
        .map(|(_, name)| *name)
}

fn normalize(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => Some(format!("#{}", digits.to_ascii_lowercase())),
        3 => {
            let expanded: String = digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_lowercase();
            Some(format!("#{expanded}"))
        }
        _ => None,
    }
}
