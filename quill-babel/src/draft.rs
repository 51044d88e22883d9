//! The draft record: every field a writer fills in for one article.
//!
//! All fields are text at rest, including the ones that look numeric (`readTime`,
//! `views`, `likes`, `densityTarget`). Nothing here parses or validates them; that is
//! left to whoever consumes the values.
//!
//! Drafts are never edited in place by the pipeline. Updates go through [`with_field`],
//! which hands back a fresh record.

use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A snapshot of the editable article fields.
///
/// Serialized with the camelCase key names the editing form uses. Missing keys
/// deserialize to empty strings; unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BlogDraft {
    pub title: String,
    pub slug: String,
    pub intro_title: String,
    pub summary: String,
    /// Body text in the line-oriented markup (`## `, `### `, `- `).
    pub content: String,
    pub category: String,
    pub tags: String,
    pub read_time: String,
    pub views: String,
    pub likes: String,
    pub published_date: String,
    pub updated_date: String,
    pub author_name: String,
    pub author_image: String,
    pub image_urls: String,
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: String,
    pub density_target: String,
    pub recent_blogs: String,
    pub trending_news: String,
    pub newsletter_cta: String,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_text: String,
}

impl BlogDraft {
    /// The draft an empty editor starts from.
    ///
    /// `today` fills both date fields; callers supply it so the record stays a pure
    /// value.
    pub fn starter(today: &str) -> Self {
        BlogDraft {
            likes: "0".to_string(),
            views: "0".to_string(),
            read_time: "5".to_string(),
            density_target: "2".to_string(),
            category: "Technology".to_string(),
            published_date: today.to_string(),
            updated_date: today.to_string(),
            newsletter_cta: "Subscribe to our newsletter for more insights!".to_string(),
            cta_title: "Ready to Take Action?".to_string(),
            cta_description:
                "Explore more insights and elevate your knowledge with our curated resources."
                    .to_string(),
            cta_button_text: "Get Started".to_string(),
            ..BlogDraft::default()
        }
    }

    /// Read one field by key.
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Slug => &self.slug,
            DraftField::IntroTitle => &self.intro_title,
            DraftField::Summary => &self.summary,
            DraftField::Content => &self.content,
            DraftField::Category => &self.category,
            DraftField::Tags => &self.tags,
            DraftField::ReadTime => &self.read_time,
            DraftField::Views => &self.views,
            DraftField::Likes => &self.likes,
            DraftField::PublishedDate => &self.published_date,
            DraftField::UpdatedDate => &self.updated_date,
            DraftField::AuthorName => &self.author_name,
            DraftField::AuthorImage => &self.author_image,
            DraftField::ImageUrls => &self.image_urls,
            DraftField::MetaTitle => &self.meta_title,
            DraftField::MetaDescription => &self.meta_description,
            DraftField::Keywords => &self.keywords,
            DraftField::DensityTarget => &self.density_target,
            DraftField::RecentBlogs => &self.recent_blogs,
            DraftField::TrendingNews => &self.trending_news,
            DraftField::NewsletterCta => &self.newsletter_cta,
            DraftField::CtaTitle => &self.cta_title,
            DraftField::CtaDescription => &self.cta_description,
            DraftField::CtaButtonText => &self.cta_button_text,
        }
    }

    fn slot_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Slug => &mut self.slug,
            DraftField::IntroTitle => &mut self.intro_title,
            DraftField::Summary => &mut self.summary,
            DraftField::Content => &mut self.content,
            DraftField::Category => &mut self.category,
            DraftField::Tags => &mut self.tags,
            DraftField::ReadTime => &mut self.read_time,
            DraftField::Views => &mut self.views,
            DraftField::Likes => &mut self.likes,
            DraftField::PublishedDate => &mut self.published_date,
            DraftField::UpdatedDate => &mut self.updated_date,
            DraftField::AuthorName => &mut self.author_name,
            DraftField::AuthorImage => &mut self.author_image,
            DraftField::ImageUrls => &mut self.image_urls,
            DraftField::MetaTitle => &mut self.meta_title,
            DraftField::MetaDescription => &mut self.meta_description,
            DraftField::Keywords => &mut self.keywords,
            DraftField::DensityTarget => &mut self.density_target,
            DraftField::RecentBlogs => &mut self.recent_blogs,
            DraftField::TrendingNews => &mut self.trending_news,
            DraftField::NewsletterCta => &mut self.newsletter_cta,
            DraftField::CtaTitle => &mut self.cta_title,
            DraftField::CtaDescription => &mut self.cta_description,
            DraftField::CtaButtonText => &mut self.cta_button_text,
        }
    }

    /// Cover and gallery images, split from `imageUrls`.
    pub fn images(&self) -> Vec<String> {
        split_list(&self.image_urls)
    }

    /// Tags, split from `tags`.
    pub fn tag_list(&self) -> Vec<String> {
        split_list(&self.tags)
    }
}

/// Keys of [`BlogDraft`], named as they appear in serialized snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Slug,
    IntroTitle,
    Summary,
    Content,
    Category,
    Tags,
    ReadTime,
    Views,
    Likes,
    PublishedDate,
    UpdatedDate,
    AuthorName,
    AuthorImage,
    ImageUrls,
    MetaTitle,
    MetaDescription,
    Keywords,
    DensityTarget,
    RecentBlogs,
    TrendingNews,
    NewsletterCta,
    CtaTitle,
    CtaDescription,
    CtaButtonText,
}

impl DraftField {
    pub const ALL: [DraftField; 25] = [
        DraftField::Title,
        DraftField::Slug,
        DraftField::IntroTitle,
        DraftField::Summary,
        DraftField::Content,
        DraftField::Category,
        DraftField::Tags,
        DraftField::ReadTime,
        DraftField::Views,
        DraftField::Likes,
        DraftField::PublishedDate,
        DraftField::UpdatedDate,
        DraftField::AuthorName,
        DraftField::AuthorImage,
        DraftField::ImageUrls,
        DraftField::MetaTitle,
        DraftField::MetaDescription,
        DraftField::Keywords,
        DraftField::DensityTarget,
        DraftField::RecentBlogs,
        DraftField::TrendingNews,
        DraftField::NewsletterCta,
        DraftField::CtaTitle,
        DraftField::CtaDescription,
        DraftField::CtaButtonText,
    ];

    /// The serialized key name (camelCase).
    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Slug => "slug",
            DraftField::IntroTitle => "introTitle",
            DraftField::Summary => "summary",
            DraftField::Content => "content",
            DraftField::Category => "category",
            DraftField::Tags => "tags",
            DraftField::ReadTime => "readTime",
            DraftField::Views => "views",
            DraftField::Likes => "likes",
            DraftField::PublishedDate => "publishedDate",
            DraftField::UpdatedDate => "updatedDate",
            DraftField::AuthorName => "authorName",
            DraftField::AuthorImage => "authorImage",
            DraftField::ImageUrls => "imageUrls",
            DraftField::MetaTitle => "metaTitle",
            DraftField::MetaDescription => "metaDescription",
            DraftField::Keywords => "keywords",
            DraftField::DensityTarget => "densityTarget",
            DraftField::RecentBlogs => "recentBlogs",
            DraftField::TrendingNews => "trendingNews",
            DraftField::NewsletterCta => "newsletterCta",
            DraftField::CtaTitle => "ctaTitle",
            DraftField::CtaDescription => "ctaDescription",
            DraftField::CtaButtonText => "ctaButtonText",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| FormatError::ParseError(format!("Unknown draft field '{name}'")))
    }
}

/// Return a copy of `draft` with `field` set to `value`.
///
/// The input draft is left untouched.
pub fn with_field(draft: &BlogDraft, field: DraftField, value: impl Into<String>) -> BlogDraft {
    let mut next = draft.clone();
    *next.slot_mut(field) = value.into();
    next
}

/// Split a comma-delimited field into trimmed, non-empty entries.
///
/// Order and duplicates are kept. Text without a comma yields a single entry.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
