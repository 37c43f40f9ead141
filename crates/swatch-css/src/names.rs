//! Named-color dictionary and nearest-name lookup.
//!
//! [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
//!
//! The first block is the CSS named-color table (aliases such as `cyan` or
//! `grey` keep only their first spelling); the second block adds common
//! design vocabulary. Lookup order is table order, so an exact CSS match
//! always wins over a design name with the same value.

use crate::color::{ColorValue, UNKNOWN_NAME};

/// `(display name, red, green, blue)`
pub static NAMED_COLORS: &[(&str, u8, u8, u8)] = &[
    ("Alice Blue", 0xf0, 0xf8, 0xff),
    ("Antique White", 0xfa, 0xeb, 0xd7),
    ("Aqua", 0x00, 0xff, 0xff),
    ("Aquamarine", 0x7f, 0xff, 0xd4),
    ("Azure", 0xf0, 0xff, 0xff),
    ("Beige", 0xf5, 0xf5, 0xdc),
    ("Bisque", 0xff, 0xe4, 0xc4),
    ("Black", 0x00, 0x00, 0x00),
    ("Blanched Almond", 0xff, 0xeb, 0xcd),
    ("Blue", 0x00, 0x00, 0xff),
    ("Blue Violet", 0x8a, 0x2b, 0xe2),
    ("Brown", 0xa5, 0x2a, 0x2a),
    ("Burly Wood", 0xde, 0xb8, 0x87),
    ("Cadet Blue", 0x5f, 0x9e, 0xa0),
    ("Chartreuse", 0x7f, 0xff, 0x00),
    ("Chocolate", 0xd2, 0x69, 0x1e),
    ("Coral", 0xff, 0x7f, 0x50),
    ("Cornflower Blue", 0x64, 0x95, 0xed),
    ("Cornsilk", 0xff, 0xf8, 0xdc),
    ("Crimson", 0xdc, 0x14, 0x3c),
    ("Dark Blue", 0x00, 0x00, 0x8b),
    ("Dark Cyan", 0x00, 0x8b, 0x8b),
    ("Dark Goldenrod", 0xb8, 0x86, 0x0b),
    ("Dark Gray", 0xa9, 0xa9, 0xa9),
    ("Dark Green", 0x00, 0x64, 0x00),
    ("Dark Khaki", 0xbd, 0xb7, 0x6b),
    ("Dark Magenta", 0x8b, 0x00, 0x8b),
    ("Dark Olive Green", 0x55, 0x6b, 0x2f),
    ("Dark Orange", 0xff, 0x8c, 0x00),
    ("Dark Orchid", 0x99, 0x32, 0xcc),
    ("Dark Red", 0x8b, 0x00, 0x00),
    ("Dark Salmon", 0xe9, 0x96, 0x7a),
    ("Dark Sea Green", 0x8f, 0xbc, 0x8f),
    ("Dark Slate Blue", 0x48, 0x3d, 0x8b),
    ("Dark Slate Gray", 0x2f, 0x4f, 0x4f),
    ("Dark Turquoise", 0x00, 0xce, 0xd1),
    ("Dark Violet", 0x94, 0x00, 0xd3),
    ("Deep Pink", 0xff, 0x14, 0x93),
    ("Deep Sky Blue", 0x00, 0xbf, 0xff),
    ("Dim Gray", 0x69, 0x69, 0x69),
    ("Dodger Blue", 0x1e, 0x90, 0xff),
    ("Firebrick", 0xb2, 0x22, 0x22),
    ("Floral White", 0xff, 0xfa, 0xf0),
    ("Forest Green", 0x22, 0x8b, 0x22),
    ("Fuchsia", 0xff, 0x00, 0xff),
    ("Gainsboro", 0xdc, 0xdc, 0xdc),
    ("Ghost White", 0xf8, 0xf8, 0xff),
    ("Gold", 0xff, 0xd7, 0x00),
    ("Goldenrod", 0xda, 0xa5, 0x20),
    ("Gray", 0x80, 0x80, 0x80),
    ("Green", 0x00, 0x80, 0x00),
    ("Green Yellow", 0xad, 0xff, 0x2f),
    ("Honeydew", 0xf0, 0xff, 0xf0),
    ("Hot Pink", 0xff, 0x69, 0xb4),
    ("Indian Red", 0xcd, 0x5c, 0x5c),
    ("Indigo", 0x4b, 0x00, 0x82),
    ("Ivory", 0xff, 0xff, 0xf0),
    ("Khaki", 0xf0, 0xe6, 0x8c),
    ("Lavender", 0xe6, 0xe6, 0xfa),
    ("Lavender Blush", 0xff, 0xf0, 0xf5),
    ("Lawn Green", 0x7c, 0xfc, 0x00),
    ("Lemon Chiffon", 0xff, 0xfa, 0xcd),
    ("Light Blue", 0xad, 0xd8, 0xe6),
    ("Light Coral", 0xf0, 0x80, 0x80),
    ("Light Cyan", 0xe0, 0xff, 0xff),
    ("Light Goldenrod Yellow", 0xfa, 0xfa, 0xd2),
    ("Light Gray", 0xd3, 0xd3, 0xd3),
    ("Light Green", 0x90, 0xee, 0x90),
    ("Light Pink", 0xff, 0xb6, 0xc1),
    ("Light Salmon", 0xff, 0xa0, 0x7a),
    ("Light Sea Green", 0x20, 0xb2, 0xaa),
    ("Light Sky Blue", 0x87, 0xce, 0xfa),
    ("Light Slate Gray", 0x77, 0x88, 0x99),
    ("Light Steel Blue", 0xb0, 0xc4, 0xde),
    ("Light Yellow", 0xff, 0xff, 0xe0),
    ("Lime", 0x00, 0xff, 0x00),
    ("Lime Green", 0x32, 0xcd, 0x32),
    ("Linen", 0xfa, 0xf0, 0xe6),
    ("Maroon", 0x80, 0x00, 0x00),
    ("Medium Aquamarine", 0x66, 0xcd, 0xaa),
    ("Medium Blue", 0x00, 0x00, 0xcd),
    ("Medium Orchid", 0xba, 0x55, 0xd3),
    ("Medium Purple", 0x93, 0x70, 0xdb),
    ("Medium Sea Green", 0x3c, 0xb3, 0x71),
    ("Medium Slate Blue", 0x7b, 0x68, 0xee),
    ("Medium Spring Green", 0x00, 0xfa, 0x9a),
    ("Medium Turquoise", 0x48, 0xd1, 0xcc),
    ("Medium Violet Red", 0xc7, 0x15, 0x85),
    ("Midnight Blue", 0x19, 0x19, 0x70),
    ("Mint Cream", 0xf5, 0xff, 0xfa),
    ("Misty Rose", 0xff, 0xe4, 0xe1),
    ("Moccasin", 0xff, 0xe4, 0xb5),
    ("Navajo White", 0xff, 0xde, 0xad),
    ("Navy", 0x00, 0x00, 0x80),
    ("Old Lace", 0xfd, 0xf5, 0xe6),
    ("Olive", 0x80, 0x80, 0x00),
    ("Olive Drab", 0x6b, 0x8e, 0x23),
    ("Orange", 0xff, 0xa5, 0x00),
    ("Orange Red", 0xff, 0x45, 0x00),
    ("Orchid", 0xda, 0x70, 0xd6),
    ("Pale Goldenrod", 0xee, 0xe8, 0xaa),
    ("Pale Green", 0x98, 0xfb, 0x98),
    ("Pale Turquoise", 0xaf, 0xee, 0xee),
    ("Pale Violet Red", 0xdb, 0x70, 0x93),
    ("Papaya Whip", 0xff, 0xef, 0xd5),
    ("Peach Puff", 0xff, 0xda, 0xb9),
    ("Peru", 0xcd, 0x85, 0x3f),
    ("Pink", 0xff, 0xc0, 0xcb),
    ("Plum", 0xdd, 0xa0, 0xdd),
    ("Powder Blue", 0xb0, 0xe0, 0xe6),
    ("Purple", 0x80, 0x00, 0x80),
    ("Rebecca Purple", 0x66, 0x33, 0x99),
    ("Red", 0xff, 0x00, 0x00),
    ("Rosy Brown", 0xbc, 0x8f, 0x8f),
    ("Royal Blue", 0x41, 0x69, 0xe1),
    ("Saddle Brown", 0x8b, 0x45, 0x13),
    ("Salmon", 0xfa, 0x80, 0x72),
    ("Sandy Brown", 0xf4, 0xa4, 0x60),
    ("Sea Green", 0x2e, 0x8b, 0x57),
    ("Seashell", 0xff, 0xf5, 0xee),
    ("Sienna", 0xa0, 0x52, 0x2d),
    ("Silver", 0xc0, 0xc0, 0xc0),
    ("Sky Blue", 0x87, 0xce, 0xeb),
    ("Slate Blue", 0x6a, 0x5a, 0xcd),
    ("Slate Gray", 0x70, 0x80, 0x90),
    ("Snow", 0xff, 0xfa, 0xfa),
    ("Spring Green", 0x00, 0xff, 0x7f),
    ("Steel Blue", 0x46, 0x82, 0xb4),
    ("Tan", 0xd2, 0xb4, 0x8c),
    ("Teal", 0x00, 0x80, 0x80),
    ("Thistle", 0xd8, 0xbf, 0xd8),
    ("Tomato", 0xff, 0x63, 0x47),
    ("Turquoise", 0x40, 0xe0, 0xd0),
    ("Violet", 0xee, 0x82, 0xee),
    ("Wheat", 0xf5, 0xde, 0xb3),
    ("White", 0xff, 0xff, 0xff),
    ("White Smoke", 0xf5, 0xf5, 0xf5),
    ("Yellow", 0xff, 0xff, 0x00),
    ("Yellow Green", 0x9a, 0xcd, 0x32),
    // Design vocabulary
    ("Almond", 0xef, 0xde, 0xcd),
    ("Amber", 0xff, 0xbf, 0x00),
    ("Amethyst", 0x99, 0x66, 0xcc),
    ("Apricot", 0xfb, 0xce, 0xb1),
    ("Baby Blue", 0x89, 0xcf, 0xf0),
    ("Bone", 0xe3, 0xda, 0xc9),
    ("Brass", 0xb5, 0xa6, 0x42),
    ("Brick Red", 0xcb, 0x41, 0x54),
    ("Bronze", 0xcd, 0x7f, 0x32),
    ("Burgundy", 0x80, 0x00, 0x20),
    ("Canary", 0xff, 0xff, 0x99),
    ("Cardinal", 0xc4, 0x1e, 0x3a),
    ("Carmine", 0x96, 0x00, 0x18),
    ("Celadon", 0xac, 0xe1, 0xaf),
    ("Cerise", 0xde, 0x31, 0x63),
    ("Cerulean", 0x00, 0x7b, 0xa7),
    ("Champagne", 0xf7, 0xe7, 0xce),
    ("Charcoal", 0x36, 0x45, 0x4f),
    ("Cobalt", 0x00, 0x47, 0xab),
    ("Coffee", 0x6f, 0x4e, 0x37),
    ("Copper", 0xb8, 0x73, 0x33),
    ("Cream", 0xff, 0xfd, 0xd0),
    ("Denim", 0x15, 0x60, 0xbd),
    ("Ebony", 0x55, 0x5d, 0x50),
    ("Eggplant", 0x61, 0x40, 0x51),
    ("Electric Blue", 0x7d, 0xf9, 0xff),
    ("Emerald", 0x50, 0xc8, 0x78),
    ("Fern Green", 0x4f, 0x79, 0x42),
    ("Gunmetal", 0x2a, 0x34, 0x39),
    ("Hot Magenta", 0xff, 0x1d, 0xce),
    ("Jade", 0x00, 0xa8, 0x6b),
    ("Jet", 0x34, 0x34, 0x34),
    ("Kelly Green", 0x4c, 0xbb, 0x17),
    ("Lemon", 0xff, 0xf7, 0x00),
    ("Lilac", 0xc8, 0xa2, 0xc8),
    ("Mahogany", 0xc0, 0x40, 0x00),
    ("Marigold", 0xea, 0xa2, 0x21),
    ("Mauve", 0xe0, 0xb0, 0xff),
    ("Mint", 0x3e, 0xb4, 0x89),
    ("Moss Green", 0x8a, 0x9a, 0x5b),
    ("Mustard", 0xff, 0xdb, 0x58),
    ("Neon Green", 0x39, 0xff, 0x14),
    ("Ochre", 0xcc, 0x77, 0x22),
    ("Onyx", 0x35, 0x38, 0x39),
    ("Peach", 0xff, 0xe5, 0xb4),
    ("Pearl", 0xea, 0xe0, 0xc8),
    ("Periwinkle", 0xcc, 0xcc, 0xff),
    ("Pine Green", 0x01, 0x79, 0x6f),
    ("Platinum", 0xe5, 0xe4, 0xe2),
    ("Pumpkin", 0xff, 0x75, 0x18),
    ("Raspberry", 0xe3, 0x0b, 0x5c),
    ("Rose", 0xff, 0x00, 0x7f),
    ("Ruby", 0xe0, 0x11, 0x5f),
    ("Russet", 0x80, 0x46, 0x1b),
    ("Rust", 0xb7, 0x41, 0x0e),
    ("Saffron", 0xf4, 0xc4, 0x30),
    ("Sage", 0xbc, 0xb8, 0x8a),
    ("Sand", 0xc2, 0xb2, 0x80),
    ("Sapphire", 0x0f, 0x52, 0xba),
    ("Scarlet", 0xff, 0x24, 0x00),
    ("Sepia", 0x70, 0x42, 0x14),
    ("Tangerine", 0xf2, 0x85, 0x00),
    ("Taupe", 0x48, 0x3c, 0x32),
    ("Teal Blue", 0x36, 0x75, 0x88),
    ("Terracotta", 0xe2, 0x72, 0x5b),
    ("Ultramarine", 0x3f, 0x00, 0xff),
    ("Umber", 0x63, 0x51, 0x47),
    ("Vermilion", 0xe3, 0x42, 0x34),
    ("Wine", 0x72, 0x2f, 0x37),
];

/// Nearest dictionary name for a color string (`#rgb`, `#rrggbb`, `rgb()`).
///
/// Empty or unreadable input yields [`UNKNOWN_NAME`]; this never fails.
#[must_use]
pub fn nearest_name(hex: &str) -> String {
    ColorValue::parse(hex).map_or_else(
        || UNKNOWN_NAME.to_string(),
        |color| nearest_named(&color).to_string(),
    )
}

/// Nearest dictionary name for a parsed color.
///
/// An exact match wins outright; otherwise the entry with the smallest
/// squared RGB distance does, and ties go to the earlier entry.
#[must_use]
pub fn nearest_named(color: &ColorValue) -> &'static str {
    let entry = |&(name, r, g, b): &(&'static str, u8, u8, u8)| (name, ColorValue::rgb(r, g, b));

    if let Some((name, _)) = NAMED_COLORS
        .iter()
        .map(entry)
        .find(|(_, named)| named.r == color.r && named.g == color.g && named.b == color.b)
    {
        return name;
    }

    let mut best = UNKNOWN_NAME;
    let mut best_distance = u32::MAX;
    for (name, named) in NAMED_COLORS.iter().map(entry) {
        let distance = named.distance_squared(color);
        if distance < best_distance {
            best_distance = distance;
            best = name;
        }
    }
    best
}
