//! Scent categories
//!
//! The fixed set of 10 scent categories every note and perfume is
//! classified into, plus the curated exemplar notes that define each
//! category's semantic anchor.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of scent categories
pub const CATEGORY_COUNT: usize = 10;

/// One of the 10 fixed scent categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Floral,
    Fruity,
    Woody,
    Spicy,
    Citrus,
    Herbal,
    Sweet,
    Earthy,
    Aquatic,
    Gourmand,
}

impl Category {
    /// All categories in canonical order
    ///
    /// This order is the tie-break order for argmax classification and
    /// the row/column order of the compatibility matrix. It must not
    /// change.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Floral,
        Category::Fruity,
        Category::Woody,
        Category::Spicy,
        Category::Citrus,
        Category::Herbal,
        Category::Sweet,
        Category::Earthy,
        Category::Aquatic,
        Category::Gourmand,
    ];

    /// Position in canonical order
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name, as stored in data files
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Floral => "Floral",
            Category::Fruity => "Fruity",
            Category::Woody => "Woody",
            Category::Spicy => "Spicy",
            Category::Citrus => "Citrus",
            Category::Herbal => "Herbal",
            Category::Sweet => "Sweet",
            Category::Earthy => "Earthy",
            Category::Aquatic => "Aquatic",
            Category::Gourmand => "Gourmand",
        }
    }

    /// Curated exemplar notes anchoring this category's meaning
    ///
    /// Used only while building category representative vectors, never at
    /// scoring time.
    #[must_use]
    pub fn exemplar_notes(self) -> &'static [&'static str] {
        match self {
            Category::Floral => &[
                "rose", "jasmine", "lily", "lavender", "gardenia", "peony", "violet",
                "carnation", "orchid", "magnolia", "tuberose", "geranium", "freesia",
                "lilac", "cherry blossom", "orange blossom", "lotus", "ylang-ylang",
                "iris", "cotton flower", "daisy", "tulip", "palmarosa", "edelweiss",
            ],
            Category::Fruity => &[
                "apple", "strawberry", "peach", "pear", "raspberry", "blackberry",
                "mango", "pineapple", "apricot", "plum", "cherry", "melon", "fig",
                "pomegranate", "passion fruit", "guava", "coconut", "kiwi",
            ],
            Category::Woody => &[
                "cedar", "sandalwood", "pine", "oak", "vetiver", "patchouli",
                "rosewood", "agarwood (oud)", "cypress", "birch", "teak", "ebony",
                "mahogany", "juniper", "fir", "bamboo", "driftwood", "cashmere wood",
            ],
            Category::Spicy => &[
                "cinnamon", "pepper", "ginger", "cardamom", "clove", "nutmeg",
                "saffron", "cumin", "coriander", "anise", "star anise", "fennel",
                "caraway", "pimento", "allspice", "paprika", "chili",
            ],
            Category::Citrus => &[
                "lemon", "orange", "grapefruit", "lime", "bergamot", "tangerine",
                "mandarin", "yuzu", "pomelo", "citron", "kumquat", "clementine",
                "lemongrass", "kaffir lime", "neroli",
            ],
            Category::Herbal => &[
                "mint", "basil", "thyme", "rosemary", "sage", "chamomile", "dill",
                "oregano", "tarragon", "marjoram", "parsley", "bay leaf", "cilantro",
                "chervil", "fennel", "lemongrass", "verbena",
            ],
            Category::Sweet => &[
                "vanilla", "caramel", "honey", "chocolate", "sugar", "toffee",
                "marshmallow", "cotton candy", "maple syrup", "butterscotch",
                "licorice", "praline", "nougat", "marzipan", "meringue",
            ],
            Category::Earthy => &[
                "patchouli", "moss", "musk", "leather", "soil", "petrichor",
                "truffle", "beet", "vetiver", "hay", "tobacco", "oakmoss", "loam",
                "humus", "bark",
            ],
            Category::Aquatic => &[
                "sea salt", "marine", "ocean", "seaweed", "water lily", "lotus",
                "driftwood", "beach", "rain", "cucumber", "watermelon", "melon",
                "sea breeze", "ozone", "fresh water",
            ],
            Category::Gourmand => &[
                "coffee", "almond", "coconut", "praline", "licorice", "chocolate",
                "caramel", "vanilla", "hazelnut", "cinnamon", "milk", "cream",
                "butter", "bread", "popcorn", "honey", "maple syrup",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Case-insensitive parse from a display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
