use crate::element::AttributeMap;

/// Serializes an attribute map as `key="value"` pairs in map order.
///
/// Values are escaped for a double-quoted attribute context; null values
/// serialize as an empty string.
pub fn create_attributes_string(attributes: &AttributeMap) -> String {
    let mut out = String::new();

    for (name, value) in attributes {
        if !out.is_empty() {
            out.push(' ');
        }

        out.push_str(name);
        out.push_str("=\"");
        if let Some(value) = value {
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
        }
        out.push('"');
    }

    out
}
