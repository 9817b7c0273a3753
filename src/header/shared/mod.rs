pub use self::preference::{Preference, PreferenceList};
pub use self::quality_item::{parse_quality, Term, DEFAULT_QUALITY};

mod preference;
mod quality_item;
