//! SEO metadata attached to finished content.

pub mod parsing;

pub use parsing::{SeoMetadata, SocialSnippets, parse_seo_metadata};
