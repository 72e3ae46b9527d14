//! Static category and characteristic catalogs.
//!
//! The catalogs are fixed at compile time: an ordered list of review
//! categories, each with its ordered items, and an ordered mapping
//! from item name to the characteristic labels selectable for it.
//! Every item named by a category has a characteristics entry; a unit
//! test enforces that invariant.

/// One review category with its ordered item names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    /// Display name of the category (e.g. `"Food"`).
    pub name: &'static str,
    /// Ordered item names offered under this category.
    pub items: &'static [&'static str],
}

const CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry {
        name: "Food",
        items: &["Appetizer", "Main Course", "Dessert"],
    },
    CategoryEntry {
        name: "Service",
        items: &["Waiter", "Host", "Manager"],
    },
    CategoryEntry {
        name: "Ambience",
        items: &["Lighting", "Music", "Decor"],
    },
    CategoryEntry {
        name: "Location",
        items: &["Accessibility", "Parking", "Surroundings"],
    },
];

const CHARACTERISTICS: &[(&str, &[&str])] = &[
    (
        "Appetizer",
        &[
            "Flavorful",
            "Well-presented",
            "Appropriate portion",
            "Innovative",
        ],
    ),
    (
        "Main Course",
        &[
            "Well-cooked",
            "Balanced flavors",
            "Fresh ingredients",
            "Satisfying portion",
        ],
    ),
    (
        "Dessert",
        &["Sweet", "Beautifully plated", "Texture variety", "Indulgent"],
    ),
    (
        "Waiter",
        &["Attentive", "Knowledgeable", "Friendly", "Efficient"],
    ),
    (
        "Host",
        &["Welcoming", "Organized", "Accommodating", "Professional"],
    ),
    (
        "Manager",
        &["Responsive", "Problem-solving", "Courteous", "Present"],
    ),
    (
        "Lighting",
        &[
            "Appropriate brightness",
            "Mood-setting",
            "Well-distributed",
            "Adjustable",
        ],
    ),
    (
        "Music",
        &[
            "Fitting genre",
            "Appropriate volume",
            "Enhances atmosphere",
            "Playlist variety",
        ],
    ),
    (
        "Decor",
        &["Cohesive theme", "Clean", "Comfortable", "Visually appealing"],
    ),
    (
        "Accessibility",
        &[
            "Wheelchair friendly",
            "Clear signage",
            "Easy navigation",
            "Accommodating facilities",
        ],
    ),
    (
        "Parking",
        &["Ample spaces", "Well-lit", "Easy to find", "Convenient"],
    ),
    (
        "Surroundings",
        &["Safe area", "Scenic", "Well-maintained", "Quiet"],
    ),
];

/// Returns the ordered list of categories with their items.
#[must_use]
pub const fn categories() -> &'static [CategoryEntry] {
    CATEGORIES
}

/// Returns the ordered item names for `category`, or `None` when the
/// category is not part of the catalog.
#[must_use]
pub fn items_for(category: &str) -> Option<&'static [&'static str]> {
    CATEGORIES
        .iter()
        .find(|entry| entry.name == category)
        .map(|entry| entry.items)
}

/// Returns the ordered characteristic labels for `item`, or `None`
/// when the item is not part of the catalog.
#[must_use]
pub fn characteristics_for(item: &str) -> Option<&'static [&'static str]> {
    CHARACTERISTICS
        .iter()
        .find(|(name, _)| *name == item)
        .map(|(_, labels)| *labels)
}
