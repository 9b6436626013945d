/// A named pair of the two customizable colors inside a styled SVG.
///
/// `color1` and `color2` are six hex digits without a leading `#`, matched
/// case-sensitively against the file text.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub color1: &'static str,
    pub color2: &'static str,
}

/// Every style this tool knows about. Lookups preserve this order.
pub static TABLE: [Palette; 6] = [
    Palette {
        name: "black",
        color1: "2b2b2b",
        color2: "444444",
    },
    Palette {
        name: "cyan",
        color1: "00bfbf",
        color2: "9acee6",
    },
    Palette {
        name: "blue",
        color1: "9acee6",
        color2: "BF7E96",
    },
    Palette {
        name: "green",
        color1: "619E73",
        color2: "B1FFFF",
    },
    Palette {
        name: "purple",
        color1: "AF84A3",
        color2: "9acee6",
    },
    Palette {
        name: "red",
        color1: "d10c0c",
        color2: "BF7E96",
    },
];

#[derive(Debug, thiserror::Error)]
#[error("no palette is named '{0}'")]
pub struct UnknownStyle(String);

pub fn find(style: &str) -> Result<&'static Palette, UnknownStyle> {
    TABLE
        .iter()
        .find(|p| p.name == style)
        .ok_or_else(|| UnknownStyle(style.to_owned()))
}

/// All table entries except `source`, in table order.
pub fn alternates(source: &'static Palette) -> impl Iterator<Item = &'static Palette> {
    TABLE.iter().filter(move |p| p.name != source.name)
}
