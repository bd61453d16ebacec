use unicode_width::UnicodeWidthStr;

pub struct TextMetrics {
    pub char_width: f64,
    pub plate_padding: f64,
    pub min_plate_width: f64,
    pub plate_height: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 6.0,
            plate_padding: 8.0,
            min_plate_width: 60.0,
            plate_height: 20.0,
        }
    }
}

impl TextMetrics {
    pub fn text_width(&self, text: &str) -> f64 {
        let width = UnicodeWidthStr::width(text);
        width as f64 * self.char_width
    }

    /// Width of the background plate behind a connector label.
    pub fn label_plate_width(&self, label: &str) -> f64 {
        (self.text_width(label) + self.plate_padding * 2.0).max(self.min_plate_width)
    }
}

/// Shorten `name` to `max_len - 2` characters plus `...` when it is longer
/// than `max_len` characters.
///
/// Bounds below [`MIN_COLUMN_NAME_LENGTH`](crate::config::MIN_COLUMN_NAME_LENGTH)
/// yield a result longer than the bound; `DiagramConfig::validate` rejects them.
pub fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        return name.to_string();
    }
    let mut out: String = name.chars().take(max_len.saturating_sub(2)).collect();
    out.push_str("...");
    out
}
