//! Page skeleton and form widgets shared by every page.

use validator::ValidationErrors;

use crate::forms::Choice;

/// Escape text for HTML element and attribute content.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} · Car Catalog</title>
</head>
<body>
<nav><a href="/">Catalog</a> | <a href="/add_manufacturer">Add manufacturer</a> | <a href="/add_model">Add model</a> | <a href="/add_car">Add car</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// Error banner shown above a form.
pub fn notice(message: Option<&str>) -> String {
    message
        .map(|m| format!("<p class=\"error\">{}</p>\n", escape(m)))
        .unwrap_or_default()
}

fn field_errors(errors: Option<&ValidationErrors>, field: &str) -> String {
    let Some(errors) = errors else {
        return String::new();
    };

    let field_errors = errors.field_errors();
    let Some(list) = field_errors.get(field) else {
        return String::new();
    };

    let items: String = list
        .iter()
        .map(|error| {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value ({})", error.code));
            format!("<li>{}</li>", escape(&message))
        })
        .collect();

    format!(r#"<ul class="errors">{}</ul>"#, items)
}

pub fn text_input(
    name: &str,
    label: &str,
    value: Option<&str>,
    errors: Option<&ValidationErrors>,
) -> String {
    format!(
        r#"<p><label for="{name}">{label}</label> <input type="text" id="{name}" name="{name}" value="{value}">{errors}</p>
"#,
        name = name,
        label = escape(label),
        value = escape(value.unwrap_or("")),
        errors = field_errors(errors, name),
    )
}

/// Dropdown over dynamic choices. `blank` adds a leading empty option.
pub fn select(
    name: &str,
    label: &str,
    choices: &[Choice],
    selected: Option<&str>,
    blank: Option<&str>,
    errors: Option<&ValidationErrors>,
) -> String {
    let selected = selected.map(str::trim);
    let mut options = String::new();

    if let Some(blank_label) = blank {
        options.push_str(&format!(r#"<option value="">{}</option>"#, escape(blank_label)));
    }
    for choice in choices {
        let id = choice.id.to_string();
        let marker = if selected == Some(id.as_str()) { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            id,
            marker,
            escape(&choice.label)
        ));
    }

    format!(
        r#"<p><label for="{name}">{label}</label> <select id="{name}" name="{name}">{options}</select>{errors}</p>
"#,
        name = name,
        label = escape(label),
        options = options,
        errors = field_errors(errors, name),
    )
}

/// Yes/No dropdown with an empty "unknown" option.
pub fn bool_select(
    name: &str,
    label: &str,
    selected: Option<&str>,
    errors: Option<&ValidationErrors>,
) -> String {
    let current = selected.map(|s| s.trim().to_ascii_lowercase());
    let option = |value: &str, text: &str| {
        let marker = if current.as_deref() == Some(value) { " selected" } else { "" };
        format!(r#"<option value="{}"{}>{}</option>"#, value, marker, text)
    };

    format!(
        r#"<p><label for="{name}">{label}</label> <select id="{name}" name="{name}">{blank}{yes}{no}</select>{errors}</p>
"#,
        name = name,
        label = escape(label),
        blank = option("", "Unknown"),
        yes = option("true", "Yes"),
        no = option("false", "No"),
        errors = field_errors(errors, name),
    )
}

pub fn optional_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| escape(&v.to_string())).unwrap_or_default()
}

pub fn bool_cell(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#x27;y&#x27;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("Skoda"), "Skoda");
    }

    #[test]
    fn test_select_marks_current_choice() {
        let choices = vec![
            Choice {
                id: 1,
                label: "Skoda".into(),
            },
            Choice {
                id: 2,
                label: "Tatra".into(),
            },
        ];
        let html = select("manufacturer", "Manufacturer", &choices, Some("2"), Some("All"), None);
        assert!(html.contains(r#"<option value="">All</option>"#));
        assert!(html.contains(r#"<option value="2" selected>Tatra</option>"#));
        assert!(html.contains(r#"<option value="1">Skoda</option>"#));
    }

    #[test]
    fn test_text_input_shows_field_errors() {
        let mut error = ValidationError::new("required");
        error.message = Some("This field is required".into());
        let mut errors = ValidationErrors::new();
        errors.add("name", error);

        let html = text_input("name", "Name", None, Some(&errors));
        assert!(html.contains("This field is required"));

        let other = text_input("city", "City", Some("Brno"), Some(&errors));
        assert!(!other.contains("errors"));
        assert!(other.contains(r#"value="Brno""#));
    }

    #[test]
    fn test_bool_select() {
        let html = bool_select("is_active", "Is active", Some("True"), None);
        assert!(html.contains(r#"<option value="true" selected>Yes</option>"#));
        assert_eq!(bool_cell(Some(false)), "No");
        assert_eq!(bool_cell(None), "");
    }
}
