//! Static registry of manageable partner types
//!
//! Each partner type the content manager can edit is described by one
//! descriptor: display name, REST collection path and the ordered set of
//! type-specific fields its edit form renders. Adding a partner type means
//! adding an enum variant and a descriptor here, nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The partner types manageable through the content manager
///
/// Using an enum instead of a string key makes an unknown type
/// unrepresentable: every `PartnerType` has a descriptor by construction,
/// and operator input is validated once at the `FromStr` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerType {
    /// Golf courses
    Golf,
    /// Hotels
    Hotels,
    /// Restaurants
    Restaurants,
    /// Beach clubs
    BeachClubs,
    /// Cafés and bars
    CafeBars,
}

/// Descriptor for one partner type: how it is displayed and where it lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnerTypeDescriptor {
    /// Registry key, matching the serialized form of [`PartnerType`]
    pub key: &'static str,
    /// Human-readable plural name
    pub display_name: &'static str,
    /// REST collection path relative to the API root
    pub collection_path: &'static str,
    /// Type-specific editable fields, in form order
    pub fields: &'static [&'static str],
    /// Whether listings of this type carry a localized deal text
    pub has_deal: bool,
}

const GOLF: PartnerTypeDescriptor = PartnerTypeDescriptor {
    key: "golf",
    display_name: "Golf Courses",
    collection_path: "/golf-courses",
    fields: &[
        "name",
        "location",
        "holes",
        "par",
        "price_from",
        "image",
        "booking_url",
    ],
    has_deal: false,
};

const HOTELS: PartnerTypeDescriptor = PartnerTypeDescriptor {
    key: "hotels",
    display_name: "Hotels",
    collection_path: "/hotels",
    fields: &[
        "name",
        "location",
        "category",
        "region",
        "discount_percent",
        "image",
        "contact_url",
    ],
    has_deal: true,
};

const RESTAURANTS: PartnerTypeDescriptor = PartnerTypeDescriptor {
    key: "restaurants",
    display_name: "Restaurants",
    collection_path: "/restaurants",
    fields: &[
        "name",
        "location",
        "cuisine_type",
        "michelin_stars",
        "discount_percent",
        "image",
        "contact_url",
    ],
    has_deal: true,
};

const BEACH_CLUBS: PartnerTypeDescriptor = PartnerTypeDescriptor {
    key: "beach_clubs",
    display_name: "Beach Clubs",
    collection_path: "/beach-clubs",
    fields: &[
        "name",
        "location",
        "nearest_golf",
        "distance_km",
        "discount_percent",
        "image",
        "contact_url",
    ],
    has_deal: true,
};

const CAFE_BARS: PartnerTypeDescriptor = PartnerTypeDescriptor {
    key: "cafe_bars",
    display_name: "Cafés & Bars",
    collection_path: "/cafe-bars",
    fields: &[
        "name",
        "location",
        "category",
        "specialty",
        "hours",
        "image",
        "contact_url",
    ],
    has_deal: true,
};

impl PartnerType {
    /// All partner types, in tab display order
    pub const ALL: [Self; 5] = [
        Self::Golf,
        Self::Hotels,
        Self::Restaurants,
        Self::BeachClubs,
        Self::CafeBars,
    ];

    /// The descriptor for this partner type
    pub const fn descriptor(self) -> &'static PartnerTypeDescriptor {
        match self {
            Self::Golf => &GOLF,
            Self::Hotels => &HOTELS,
            Self::Restaurants => &RESTAURANTS,
            Self::BeachClubs => &BEACH_CLUBS,
            Self::CafeBars => &CAFE_BARS,
        }
    }

    /// Registry key, e.g. `beach_clubs`
    pub const fn key(self) -> &'static str {
        self.descriptor().key
    }

    /// Human-readable plural name, e.g. `Beach Clubs`
    pub const fn display_name(self) -> &'static str {
        self.descriptor().display_name
    }

    /// REST collection path relative to the API root, e.g. `/beach-clubs`
    pub const fn collection_path(self) -> &'static str {
        self.descriptor().collection_path
    }
}

impl fmt::Display for PartnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PartnerType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "golf" | "golf-courses" => Ok(Self::Golf),
            "hotels" => Ok(Self::Hotels),
            "restaurants" => Ok(Self::Restaurants),
            "beach_clubs" | "beach-clubs" => Ok(Self::BeachClubs),
            "cafe_bars" | "cafe-bars" => Ok(Self::CafeBars),
            other => Err(crate::Error::Validation {
                field: "partner_type".to_string(),
                message: format!("unknown partner type: {other}"),
            }),
        }
    }
}
