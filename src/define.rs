//! Classification and rendering of parsed values into definition form.

/// How a key's value is rendered before registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Emitted as an escaped, double-quoted text literal.
    StringLiteral,
    /// `true`/`false` map to `1`/`0`, anything else stays a bare token.
    BooleanOrRaw,
}

// Keys whose values are text by nature: network credentials and the
// advertised device name. Everything else is numeric or boolean.
const STRING_KEYS: [&str; 5] = [
    "WIFI_SSID",
    "WIFI_PASSWORD",
    "AP_SSID",
    "AP_PASSWORD",
    "BLE_DEVICE_NAME",
];

pub fn kind_of(key: &str) -> ValueKind {
    if STRING_KEYS.contains(&key) {
        ValueKind::StringLiteral
    } else {
        ValueKind::BooleanOrRaw
    }
}

// Render a value into the form handed to the sink.
pub fn render_value(kind: ValueKind, value: &str) -> String {
    match kind {
        ValueKind::StringLiteral => format!("\\\"{value}\\\""),
        ValueKind::BooleanOrRaw => {
            if value.eq_ignore_ascii_case("true") {
                "1".to_string()
            } else if value.eq_ignore_ascii_case("false") {
                "0".to_string()
            } else {
                value.to_string()
            }
        }
    }
}
