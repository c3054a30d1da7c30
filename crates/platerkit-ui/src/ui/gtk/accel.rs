//! Translation of toolkit-neutral menu strings to GTK conventions.

/// `Ctrl+Shift+S` → `<Control><Shift>s`
pub fn gtk_accelerator(accelerator: &str) -> String {
    let mut parts: Vec<&str> = accelerator.split('+').map(str::trim).collect();
    let key = parts.pop().unwrap_or_default();

    let mut out = String::new();
    for modifier in parts {
        match modifier.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => out.push_str("<Control>"),
            "shift" => out.push_str("<Shift>"),
            "alt" => out.push_str("<Alt>"),
            "super" | "meta" | "cmd" => out.push_str("<Super>"),
            other => {
                tracing::warn!("Unknown accelerator modifier '{}'", other);
            }
        }
    }

    if key.chars().count() == 1 {
        out.push_str(&key.to_lowercase());
    } else {
        out.push_str(key);
    }
    out
}

/// `&File` → `_File`; literal underscores are escaped
pub fn gtk_mnemonic(label: &str) -> String {
    label.replace('_', "__").replace('&', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gtk_accelerator() {
        assert_eq!(gtk_accelerator("Ctrl+O"), "<Control>o");
        assert_eq!(gtk_accelerator("Ctrl+G"), "<Control>g");
        assert_eq!(gtk_accelerator("Ctrl+Shift+S"), "<Control><Shift>s");
        assert_eq!(gtk_accelerator("Alt+F4"), "<Alt>F4");
        assert_eq!(gtk_accelerator("F1"), "F1");
    }

    #[test]
    fn test_gtk_mnemonic() {
        assert_eq!(gtk_mnemonic("&File"), "_File");
        assert_eq!(gtk_mnemonic("Check for &Updates..."), "Check for _Updates...");
        assert_eq!(gtk_mnemonic("snake_case"), "snake__case");
    }
}
