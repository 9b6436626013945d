/// Formats the registration line printed for each generated variant.
///
/// The line is meant to be pasted into the image gallery's catalog by hand;
/// nothing in this tool parses it back.
pub fn entry(base: &str, style: &str, file_name: &str) -> String {
    format!(
        r#"{{ name: "{} ({})", imageLink: "{file_name}" }},"#,
        title_case(base),
        title_case(style)
    )
}

/// Uppercases the first letter of every alphabetic run and lowercases the
/// rest of it: `logo` -> `Logo`, `logo2x` -> `Logo2X`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_single_words() {
        assert_eq!(title_case("logo"), "Logo");
        assert_eq!(title_case("cyan"), "Cyan");
        assert_eq!(title_case("BLACK"), "Black");
    }

    #[test]
    fn title_cases_every_alphabetic_run() {
        assert_eq!(title_case("logo2x"), "Logo2X");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn entry_matches_the_catalog_format() {
        assert_eq!(
            entry("logo", "cyan", "logo-cyan.svg"),
            r#"{ name: "Logo (Cyan)", imageLink: "logo-cyan.svg" },"#
        );
    }
}
