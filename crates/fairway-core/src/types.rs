//! Core data types for the Fairway Concierge toolkit
//!
//! These are the wire shapes exchanged with the backend. The backend owns
//! the source of truth for all of them; the client never holds an
//! authoritative copy.

use crate::i18n::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Partner identifier type (slug-like, immutable after creation)
pub type PartnerId = String;

/// A block of text available in several languages
///
/// `en` is the mandatory fallback; other languages may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Language, String>);

impl LocalizedText {
    /// Create an empty localized text block
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text for a language
    pub fn set(&mut self, language: Language, text: impl Into<String>) -> &mut Self {
        self.0.insert(language, text.into());
        self
    }

    /// Text for exactly this language, no fallback
    pub fn get(&self, language: Language) -> Option<&str> {
        self.0.get(&language).map(String::as_str)
    }

    /// Text for this language, falling back to English
    pub fn resolve(&self, language: Language) -> Option<&str> {
        self.get(language).or_else(|| self.get(Language::En))
    }

    /// True when no language carries any text
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Languages that carry text, in stable order
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(Language, String)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (Language, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A manageable listing: golf course, hotel, restaurant, beach club or café/bar
///
/// Type-specific attributes (holes, par, discount_percent, ...) live in the
/// flattened `attributes` bag; the partner-type descriptor says which keys
/// are editable for a given type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    /// Unique slug-like identifier, chosen at creation time and immutable after
    pub id: PartnerId,

    /// Display name
    pub name: String,

    /// City or area
    #[serde(default)]
    pub location: String,

    /// Full street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_address: Option<String>,

    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Localized description, `en` expected as fallback
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub description: LocalizedText,

    /// Localized deal text; absent for golf courses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<LocalizedText>,

    /// Type-specific attribute bag
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Partner {
    /// Read a type-specific attribute
    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }

    /// Read a type-specific attribute as a string
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(serde_json::Value::as_str)
    }

    /// Write a type-specific attribute
    pub fn set_attribute(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.attributes.insert(key.into(), value);
    }

    /// The `category` attribute, used by some partner types and by search
    pub fn category(&self) -> Option<&str> {
        self.attribute_str("category")
    }
}

/// Identity of the logged-in operator
///
/// Held only in memory for the lifetime of the process; a fresh start
/// re-queries the backend with ambient cookies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Avatar URL from the identity provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// A contact-form inquiry as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInquiry {
    /// Unique identifier
    pub id: String,
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Optional phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Sender country
    #[serde(default)]
    pub country: String,
    /// Inquiry category chosen on the form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inquiry_type: Option<String>,
    /// Free-form message
    pub message: String,
    /// When the inquiry was received
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting the public contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Optional phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Sender country
    pub country: String,
    /// Inquiry category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inquiry_type: Option<String>,
    /// Free-form message
    pub message: String,
}

/// A newsletter subscriber
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Unique identifier
    pub id: String,
    /// Subscriber name
    pub name: String,
    /// Subscriber email
    pub email: String,
    /// Subscriber country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Whether the subscription is active
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// When the subscription was created
    #[serde(default = "Utc::now")]
    pub subscribed_at: DateTime<Utc>,
}

/// Payload for signing up to the newsletter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeRequest {
    /// Subscriber name
    pub name: String,
    /// Subscriber email
    pub email: String,
    /// Subscriber country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A customer review
///
/// Reviews arrive through the public form and stay pending until an
/// operator approves them; `GET /reviews` only ever returns approved ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier
    pub id: String,
    /// Reviewer display name
    pub user_name: String,
    /// Reviewer country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Star rating, 1-5
    pub rating: u8,
    /// Review headline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Review body
    #[serde(default)]
    pub text: String,
    /// Course the reviewer played, if given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_played: Option<String>,
    /// External platform the review was imported from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Reviewer avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// When the review was submitted
    #[serde(default = "Utc::now")]
    pub submitted_at: DateTime<Utc>,
    /// Whether an operator has approved the review for public display
    #[serde(default)]
    pub approved: bool,
}

/// Aggregate rating statistics over the approved reviews
///
/// Served precomputed by the backend for the public rating widgets. The
/// distribution maps each star value to the number of reviews carrying it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewStats {
    /// Mean star rating, rounded by the backend
    #[serde(default)]
    pub average_rating: f64,
    /// Number of approved reviews
    #[serde(default)]
    pub total_reviews: u64,
    /// Review count per star value (1-5)
    #[serde(default)]
    pub rating_distribution: BTreeMap<u8, u64>,
}

/// Payload for submitting a new review through the public form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSubmission {
    /// Reviewer display name
    pub user_name: String,
    /// Reviewer country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Star rating, 1-5
    pub rating: u8,
    /// Review headline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Review body
    pub text: String,
    /// Course the reviewer played, if given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_played: Option<String>,
}

/// A partner offer shown on the public site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerOffer {
    /// Unique identifier
    pub id: String,
    /// Offer / partner name
    pub name: String,
    /// Offer category used for filtering (`hotel`, `restaurant`, ...)
    #[serde(rename = "type", default)]
    pub offer_type: String,
    /// City or area
    #[serde(default)]
    pub location: String,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Discount percentage, when the offer carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<i64>,
    /// Localized deal text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<LocalizedText>,
    /// Everything else the backend sends along
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// URL slug
    pub slug: String,
    /// Post title
    pub title: String,
    /// Post category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Short teaser text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Full post body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Header image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Publication timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

const fn default_true() -> bool {
    true
}
