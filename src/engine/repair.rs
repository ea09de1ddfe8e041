/// UTF-8 sequences that were decoded as Windows-1252/Latin-1 and re-encoded,
/// paired with the character they stand for. Longest sequences first.
const MOJIBAKE: [(&str, &str); 11] = [
    ("â‚¬", "€"),
    ("â‚¤", "₤"),
    ("à¸¿", "฿"),
    ("â€™", "\u{2019}"),
    ("â€˜", "\u{2018}"),
    ("â€œ", "\u{201C}"),
    ("â€\u{9d}", "\u{201D}"),
    ("â€“", "\u{2013}"),
    ("â€”", "\u{2014}"),
    ("Â£", "£"),
    ("Â¥", "¥"),
];

/// Repair common encoding damage before tokenization.
///
/// Text without any of the known mojibake sequences comes back unchanged.
pub fn repair_text(text: &str) -> String {
    if !text.contains(['â', 'Â', 'à']) {
        return text.to_string();
    }

    let mut repaired = text.to_string();
    for (broken, fixed) in MOJIBAKE {
        repaired = repaired.replace(broken, fixed);
    }
    repaired
}
