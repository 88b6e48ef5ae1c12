pub mod country;
pub mod overrides;
pub mod resource;
pub mod transliterate;

pub use country::{CountryLookup, StaticCountryTable};
pub use overrides::{InMemoryOverrideStore, OverrideStore, StoreError};
pub use resource::{
    DirectoryResourceProvider, InMemoryResourceProvider, ResourceError, ResourceProvider,
    SharedResourceData,
};
pub use transliterate::{Transliterator, WinAnsiTransliterator};
