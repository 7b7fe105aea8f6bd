pub mod resource;

pub use resource::{CARD_BACK, CardArt, CardArtManifest, MANIFEST_ENV};
