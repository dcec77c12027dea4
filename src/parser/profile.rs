use clap::ValueEnum;

use super::cells::ColumnRule;
use super::normalize::FieldRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    /// Crockpot recipe table
    Crockpot,
    /// Vegetable item table
    Vegetable,
    /// Meat item table
    Meat,
}

impl Category {
    pub fn profile(self) -> &'static Profile {
        match self {
            Category::Crockpot => &CROCKPOT,
            Category::Vegetable => &VEGETABLE,
            Category::Meat => &MEAT,
        }
    }
}

/// How records with a `sources` column get one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// No sources column.
    None,
    /// Duplicate the name into `sources` right after it.
    CopyName,
    /// Rows lead with a source location; rows sharing a name merge.
    MergeByName,
}

/// Everything category-specific: the output header, the per-column
/// extraction rules, the per-field normalization rules, and how the
/// `sources` column is produced. One pipeline consumes all three profiles
/// uniformly.
pub struct Profile {
    pub category: &'static str,
    pub header: &'static [&'static str],
    pub columns: &'static [ColumnRule],
    pub rules: &'static [(&'static str, FieldRule)],
    pub sources: SourceMode,
}

pub static CROCKPOT: Profile = Profile {
    category: "crockpot",
    header: &[
        "name",
        "dlc",
        "health",
        "hunger",
        "sanity",
        "perish_time",
        "cook_time",
        "priority",
        "requirements",
        "filler_restrictions",
    ],
    columns: &[
        ColumnRule::Skip,         // recipe icon
        ColumnRule::Text,         // name
        ColumnRule::AnchorTitles, // dlc icons
        ColumnRule::Text,         // health
        ColumnRule::Text,         // hunger
        ColumnRule::Text,         // sanity
        ColumnRule::Text,         // perish time
        ColumnRule::Text,         // cook time
        ColumnRule::Text,         // priority
        ColumnRule::FilteredJoin, // requirements
        ColumnRule::FilteredJoin, // filler restrictions
    ],
    rules: &[
        ("dlc", FieldRule::SplitList),
        ("health", FieldRule::Float),
        ("hunger", FieldRule::Float),
        ("sanity", FieldRule::Float),
        ("requirements", FieldRule::QuantityStrict),
        ("filler_restrictions", FieldRule::QuantityLenient),
    ],
    sources: SourceMode::None,
};

pub static VEGETABLE: Profile = Profile {
    category: "vegetable",
    header: &["name", "sources", "cooked", "dried", "dlc", "value", "crockpot"],
    columns: &[
        ColumnRule::Skip,         // item icon
        ColumnRule::Text,         // name
        ColumnRule::Skip,         // cooked icon
        ColumnRule::Text,         // cooked
        ColumnRule::Skip,         // dried icon
        ColumnRule::Text,         // dried
        ColumnRule::AnchorTitles, // dlc
        ColumnRule::Float,        // value
        ColumnRule::YesNo,        // crockpot
    ],
    rules: &[],
    sources: SourceMode::CopyName,
};

pub static MEAT: Profile = Profile {
    category: "meat",
    header: &["name", "sources", "cooked", "dried", "dlc", "value", "crockpot"],
    columns: &[
        ColumnRule::Skip,         // source icon
        ColumnRule::Text,         // source location
        ColumnRule::Skip,         // item icon
        ColumnRule::Text,         // name
        ColumnRule::Skip,         // cooked icon
        ColumnRule::Text,         // cooked
        ColumnRule::Skip,         // dried icon
        ColumnRule::Text,         // dried
        ColumnRule::AnchorTitles, // dlc
        ColumnRule::Float,        // value
        ColumnRule::YesNo,        // crockpot
    ],
    rules: &[],
    sources: SourceMode::MergeByName,
};
