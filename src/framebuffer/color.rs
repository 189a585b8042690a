//! Color representation and the named color table
use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};

/// A format-independent RGBA color.
///
/// Surfaces never store this type directly; it is packed into a
/// [`NativePixel`](super::NativePixel) by the surface's pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 255,
        }
    }

    /// `0xRRGGBB`, alpha dropped.
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Look up a named color. Case, spaces and underscores are ignored, so
    /// `"Light Sky Blue"`, `"light_sky_blue"` and `"LIGHTSKYBLUE"` all match.
    pub fn from_name(name: &str) -> Option<Color> {
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| names_match(candidate, name))
            .map(|(_, color)| *color)
    }

    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }
}

impl From<Rgb888> for Color {
    fn from(color: Rgb888) -> Self {
        Color::new(color.r(), color.g(), color.b())
    }
}

fn names_match(a: &str, b: &str) -> bool {
    let significant = |c: &char| *c != ' ' && *c != '_';
    let mut a = a.chars().filter(significant);
    let mut b = b.chars().filter(significant);
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x.eq_ignore_ascii_case(&y) => {}
            _ => return false,
        }
    }
}

macro_rules! named_colors {
    ($($ident:ident = $name:literal ($r:expr, $g:expr, $b:expr),)*) => {
        impl Color {
            $(pub const $ident: Color = Color::new($r, $g, $b);)*
        }

        /// Every named color, in alphabetical order of the display name.
        pub static NAMED_COLORS: &[(&str, Color)] = &[
            $(($name, Color::$ident),)*
        ];
    };
}

named_colors! {
    ALICE_BLUE = "Alice Blue" (0xF0, 0xF8, 0xFF),
    ANTIQUE_WHITE = "Antique White" (0xFA, 0xEB, 0xD7),
    AQUA = "Aqua" (0x00, 0xFF, 0xFF),
    AQUAMARINE = "Aquamarine" (0x7F, 0xFF, 0xD4),
    AZURE = "Azure" (0xF0, 0xFF, 0xFF),
    BEIGE = "Beige" (0xF5, 0xF5, 0xDC),
    BISQUE = "Bisque" (0xFF, 0xE4, 0xC4),
    BLACK = "Black" (0x00, 0x00, 0x00),
    BLANCHED_ALMOND = "Blanched Almond" (0xFF, 0xEB, 0xCD),
    BLUE = "Blue" (0x00, 0x00, 0xFF),
    BLUE_VIOLET = "Blue Violet" (0x8A, 0x2B, 0xE2),
    BROWN = "Brown" (0xA5, 0x2A, 0x2A),
    BURLYWOOD = "Burlywood" (0xDE, 0xB8, 0x87),
    CADET_BLUE = "Cadet Blue" (0x5F, 0x9E, 0xA0),
    CHARTREUSE = "Chartreuse" (0x7F, 0xFF, 0x00),
    CHOCOLATE = "Chocolate" (0xD2, 0x69, 0x1E),
    CORAL = "Coral" (0xFF, 0x7F, 0x50),
    CORNFLOWER_BLUE = "Cornflower Blue" (0x64, 0x95, 0xED),
    CORNSILK = "Cornsilk" (0xFF, 0xF8, 0xDC),
    CRIMSON = "Crimson" (0xDC, 0x14, 0x3C),
    CYAN = "Cyan" (0x00, 0xFF, 0xFF),
    DARK_BLUE = "Dark Blue" (0x00, 0x00, 0x8B),
    DARK_CYAN = "Dark Cyan" (0x00, 0x8B, 0x8B),
    DARK_GOLDENROD = "Dark Goldenrod" (0xB8, 0x86, 0x0B),
    DARK_GRAY = "Dark Gray" (0xA9, 0xA9, 0xA9),
    DARK_GREEN = "Dark Green" (0x00, 0x64, 0x00),
    DARK_KHAKI = "Dark Khaki" (0xBD, 0xB7, 0x6B),
    DARK_MAGENTA = "Dark Magenta" (0x8B, 0x00, 0x8B),
    DARK_OLIVE_GREEN = "Dark Olive Green" (0x55, 0x6B, 0x2F),
    DARK_ORANGE = "Dark Orange" (0xFF, 0x8C, 0x00),
    DARK_ORCHID = "Dark Orchid" (0x99, 0x32, 0xCC),
    DARK_RED = "Dark Red" (0x8B, 0x00, 0x00),
    DARK_SALMON = "Dark Salmon" (0xE9, 0x96, 0x7A),
    DARK_SEA_GREEN = "Dark Sea Green" (0x8F, 0xBC, 0x8F),
    DARK_SLATE_BLUE = "Dark Slate Blue" (0x48, 0x3D, 0x8B),
    DARK_SLATE_GRAY = "Dark Slate Gray" (0x2F, 0x4F, 0x4F),
    DARK_TURQUOISE = "Dark Turquoise" (0x00, 0xCE, 0xD1),
    DARK_VIOLET = "Dark Violet" (0x94, 0x00, 0xD3),
    DEEP_PINK = "Deep Pink" (0xFF, 0x14, 0x93),
    DEEP_SKY_BLUE = "Deep Sky Blue" (0x00, 0xBF, 0xFF),
    DIM_GRAY = "Dim Gray" (0x69, 0x69, 0x69),
    DODGER_BLUE = "Dodger Blue" (0x1E, 0x90, 0xFF),
    FIREBRICK = "Firebrick" (0xB2, 0x22, 0x22),
    FLORAL_WHITE = "Floral White" (0xFF, 0xFA, 0xF0),
    FOREST_GREEN = "Forest Green" (0x22, 0x8B, 0x22),
    FUCHSIA = "Fuchsia" (0xFF, 0x00, 0xFF),
    GAINSBORO = "Gainsboro" (0xDC, 0xDC, 0xDC),
    GHOST_WHITE = "Ghost White" (0xF8, 0xF8, 0xFF),
    GOLD = "Gold" (0xFF, 0xD7, 0x00),
    GOLDENROD = "Goldenrod" (0xDA, 0xA5, 0x20),
    GRAY = "Gray" (0xBE, 0xBE, 0xBE),
    WEB_GRAY = "Web Gray" (0x80, 0x80, 0x80),
    GREEN = "Green" (0x00, 0xFF, 0x00),
    WEB_GREEN = "Web Green" (0x00, 0x80, 0x00),
    GREEN_YELLOW = "Green Yellow" (0xAD, 0xFF, 0x2F),
    HONEYDEW = "Honeydew" (0xF0, 0xFF, 0xF0),
    HOT_PINK = "Hot Pink" (0xFF, 0x69, 0xB4),
    INDIAN_RED = "Indian Red" (0xCD, 0x5C, 0x5C),
    INDIGO = "Indigo" (0x4B, 0x00, 0x82),
    IVORY = "Ivory" (0xFF, 0xFF, 0xF0),
    KHAKI = "Khaki" (0xF0, 0xE6, 0x8C),
    LAVENDER = "Lavender" (0xE6, 0xE6, 0xFA),
    LAVENDER_BLUSH = "Lavender Blush" (0xFF, 0xF0, 0xF5),
    LAWN_GREEN = "Lawn Green" (0x7C, 0xFC, 0x00),
    LEMON_CHIFFON = "Lemon Chiffon" (0xFF, 0xFA, 0xCD),
    LIGHT_BLUE = "Light Blue" (0xAD, 0xD8, 0xE6),
    LIGHT_CORAL = "Light Coral" (0xF0, 0x80, 0x80),
    LIGHT_CYAN = "Light Cyan" (0xE0, 0xFF, 0xFF),
    LIGHT_GOLDENROD = "Light Goldenrod" (0xFA, 0xFA, 0xD2),
    LIGHT_GRAY = "Light Gray" (0xD3, 0xD3, 0xD3),
    LIGHT_GREEN = "Light Green" (0x90, 0xEE, 0x90),
    LIGHT_PINK = "Light Pink" (0xFF, 0xB6, 0xC1),
    LIGHT_SALMON = "Light Salmon" (0xFF, 0xA0, 0x7A),
    LIGHT_SEA_GREEN = "Light Sea Green" (0x20, 0xB2, 0xAA),
    LIGHT_SKY_BLUE = "Light Sky Blue" (0x87, 0xCE, 0xFA),
    LIGHT_SLATE_GRAY = "Light Slate Gray" (0x77, 0x88, 0x99),
    LIGHT_STEEL_BLUE = "Light Steel Blue" (0xB0, 0xC4, 0xDE),
    LIGHT_YELLOW = "Light Yellow" (0xFF, 0xFF, 0xE0),
    LIME = "Lime" (0x00, 0xFF, 0x00),
    LIME_GREEN = "Lime Green" (0x32, 0xCD, 0x32),
    LINEN = "Linen" (0xFA, 0xF0, 0xE6),
    MAGENTA = "Magenta" (0xFF, 0x00, 0xFF),
    MAROON = "Maroon" (0xB0, 0x30, 0x60),
    WEB_MAROON = "Web Maroon" (0x80, 0x00, 0x00),
    MEDIUM_AQUAMARINE = "Medium Aquamarine" (0x66, 0xCD, 0xAA),
    MEDIUM_BLUE = "Medium Blue" (0x00, 0x00, 0xCD),
    MEDIUM_ORCHID = "Medium Orchid" (0xBA, 0x55, 0xD3),
    MEDIUM_PURPLE = "Medium Purple" (0x93, 0x70, 0xDB),
    MEDIUM_SEA_GREEN = "Medium Sea Green" (0x3C, 0xB3, 0x71),
    MEDIUM_SLATE_BLUE = "Medium Slate Blue" (0x7B, 0x68, 0xEE),
    MEDIUM_SPRING_GREEN = "Medium Spring Green" (0x00, 0xFA, 0x9A),
    MEDIUM_TURQUOISE = "Medium Turquoise" (0x48, 0xD1, 0xCC),
    MEDIUM_VIOLET_RED = "Medium Violet Red" (0xC7, 0x15, 0x85),
    MIDNIGHT_BLUE = "Midnight Blue" (0x19, 0x19, 0x70),
    MINT_CREAM = "Mint Cream" (0xF5, 0xFF, 0xFA),
    MISTY_ROSE = "Misty Rose" (0xFF, 0xE4, 0xE1),
    MOCCASIN = "Moccasin" (0xFF, 0xE4, 0xB5),
    NAVAJO_WHITE = "Navajo White" (0xFF, 0xDE, 0xAD),
    NAVY_BLUE = "Navy Blue" (0x00, 0x00, 0x80),
    OLD_LACE = "Old Lace" (0xFD, 0xF5, 0xE6),
    OLIVE = "Olive" (0x80, 0x80, 0x00),
    OLIVE_DRAB = "Olive Drab" (0x6B, 0x8E, 0x23),
    ORANGE = "Orange" (0xFF, 0xA5, 0x00),
    ORANGE_RED = "Orange Red" (0xFF, 0x45, 0x00),
    ORCHID = "Orchid" (0xDA, 0x70, 0xD6),
    PALE_GOLDENROD = "Pale Goldenrod" (0xEE, 0xE8, 0xAA),
    PALE_GREEN = "Pale Green" (0x98, 0xFB, 0x98),
    PALE_TURQUOISE = "Pale Turquoise" (0xAF, 0xEE, 0xEE),
    PALE_VIOLET_RED = "Pale Violet Red" (0xDB, 0x70, 0x93),
    PAPAYA_WHIP = "Papaya Whip" (0xFF, 0xEF, 0xD5),
    PEACH_PUFF = "Peach Puff" (0xFF, 0xDA, 0xB9),
    PERU = "Peru" (0xCD, 0x85, 0x3F),
    PINK = "Pink" (0xFF, 0xC0, 0xCB),
    PLUM = "Plum" (0xDD, 0xA0, 0xDD),
    POWDER_BLUE = "Powder Blue" (0xB0, 0xE0, 0xE6),
    PURPLE = "Purple" (0xA0, 0x20, 0xF0),
    WEB_PURPLE = "Web Purple" (0x80, 0x00, 0x80),
    REBECCA_PURPLE = "Rebecca Purple" (0x66, 0x33, 0x99),
    RED = "Red" (0xFF, 0x00, 0x00),
    ROSY_BROWN = "Rosy Brown" (0xBC, 0x8F, 0x8F),
    ROYAL_BLUE = "Royal Blue" (0x41, 0x69, 0xE1),
    SADDLE_BROWN = "Saddle Brown" (0x8B, 0x45, 0x13),
    SALMON = "Salmon" (0xFA, 0x80, 0x72),
    SANDY_BROWN = "Sandy Brown" (0xF4, 0xA4, 0x60),
    SEA_GREEN = "Sea Green" (0x2E, 0x8B, 0x57),
    SEASHELL = "Seashell" (0xFF, 0xF5, 0xEE),
    SIENNA = "Sienna" (0xA0, 0x52, 0x2D),
    SILVER = "Silver" (0xC0, 0xC0, 0xC0),
    SKY_BLUE = "Sky Blue" (0x87, 0xCE, 0xEB),
    SLATE_BLUE = "Slate Blue" (0x6A, 0x5A, 0xCD),
    SLATE_GRAY = "Slate Gray" (0x70, 0x80, 0x90),
    SNOW = "Snow" (0xFF, 0xFA, 0xFA),
    SPRING_GREEN = "Spring Green" (0x00, 0xFF, 0x7F),
    STEEL_BLUE = "Steel Blue" (0x46, 0x82, 0xB4),
    TAN = "Tan" (0xD2, 0xB4, 0x8C),
    TEAL = "Teal" (0x00, 0x80, 0x80),
    THISTLE = "Thistle" (0xD8, 0xBF, 0xD8),
    TOMATO = "Tomato" (0xFF, 0x63, 0x47),
    TURQUOISE = "Turquoise" (0x40, 0xE0, 0xD0),
    VIOLET = "Violet" (0xEE, 0x82, 0xEE),
    WHEAT = "Wheat" (0xF5, 0xDE, 0xB3),
    WHITE = "White" (0xFF, 0xFF, 0xFF),
    WHITE_SMOKE = "White Smoke" (0xF5, 0xF5, 0xF5),
    YELLOW = "Yellow" (0xFF, 0xFF, 0x00),
    YELLOW_GREEN = "Yellow Green" (0x9A, 0xCD, 0x32),
}
