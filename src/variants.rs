use crate::palette::{self, Palette};

/// The two parts of a styled SVG filename, `<base>-<style>.svg`.
#[derive(Debug, PartialEq, Eq)]
pub struct SvgName<'a> {
    pub base: &'a str,
    pub style: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum NameError {
    #[error("'{0}' has no '-' between the base name and its style")]
    MissingStyle(String),
}

impl<'a> SvgName<'a> {
    /// Splits a filename into its base name and style name.
    ///
    /// The base is everything before the first `-`; the style is the segment
    /// after it, cut at the next `-` or `.`. `logo-black-2x.svg` parses to
    /// `{logo, black}`.
    pub fn parse(name: &'a str) -> Result<Self, NameError> {
        let Some((base, rest)) = name.split_once('-') else {
            return Err(NameError::MissingStyle(name.to_owned()));
        };
        let style = match rest.find(['-', '.']) {
            Some(end) => &rest[..end],
            None => rest,
        };
        Ok(Self { base, style })
    }
}

/// One recolored rendition of the source file, ready to be written.
pub struct Variant {
    pub style: &'static Palette,
    pub file_name: String,
    pub contents: String,
}

/// Recolors `template` once per palette other than `source`, in table order.
///
/// Substitution is plain whole-text string replacement: all occurrences of
/// `source.color1`, then all occurrences of `source.color2` over the result of
/// the first pass. A `color2` match introduced by the first pass gets replaced
/// as well.
pub fn render(template: &str, source: &'static Palette, base: &str) -> Vec<Variant> {
    palette::alternates(source)
        .map(|p| Variant {
            style: p,
            file_name: format!("{base}-{}.svg", p.name),
            contents: template
                .replace(source.color1, p.color1)
                .replace(source.color2, p.color2),
        })
        .collect()
}
