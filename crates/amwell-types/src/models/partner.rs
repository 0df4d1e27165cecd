//! Partner organization model.

use serde::{Deserialize, Serialize};

use crate::cache::Keyed;

/// Kind of partner.
///
/// Older records use the wire value `corporate`; it is accepted on input
/// as an alias of [`Business`] and never emitted, so filters treat the
/// two as one value.
///
/// [`Business`]: PartnerType::Business
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PartnerType {
    #[default]
    Individual,
    #[serde(alias = "corporate")]
    Business,
}

impl PartnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerType::Individual => "individual",
            PartnerType::Business => "business",
        }
    }

    /// Capitalized form for badges.
    pub fn label(&self) -> &'static str {
        match self {
            PartnerType::Individual => "Individual",
            PartnerType::Business => "Business",
        }
    }
}

/// Partner image as the backend sends it: older responses carry a bare
/// URL string, newer uploads an object with `url` or `imageUrl`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PartnerImage {
    Url(String),
    Object {
        #[serde(default)]
        url: Option<String>,
        #[serde(default, rename = "imageUrl")]
        image_url: Option<String>,
    },
}

impl PartnerImage {
    /// The usable image URL, whichever field carries it.
    pub fn url(&self) -> Option<&str> {
        match self {
            PartnerImage::Url(url) => Some(url.as_str()),
            PartnerImage::Object { url, image_url } => {
                url.as_deref().or(image_url.as_deref()).filter(|u| !u.is_empty())
            }
        }
    }
}

/// A partner organization as returned by `/partners`.
///
/// One canonical shape: identity fields are required, everything else is
/// optional. The activity flag is the boolean `isActive`; the "status"
/// string some screens show is derived via [`Partner::status_label`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub partner_type: PartnerType,
    #[serde(default)]
    pub is_active: bool,

    // Contact
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub business_address: Option<String>,

    // Profile
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,

    // Media
    #[serde(default)]
    pub partner_image: Option<PartnerImage>,

    // Social
    #[serde(default)]
    pub social_links: Vec<String>,

    // Metadata
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Partner {
    /// Image to show for this partner: the uploaded image, else the
    /// legacy `logo` field.
    pub fn display_image(&self) -> Option<&str> {
        self.partner_image
            .as_ref()
            .and_then(|img| img.url())
            .or(self.logo.as_deref())
            .filter(|u| !u.is_empty())
    }

    /// Website to link: the `website` field, else the first social link.
    pub fn display_website(&self) -> Option<&str> {
        self.website
            .as_deref()
            .filter(|w| !w.is_empty())
            .or_else(|| self.social_links.first().map(String::as_str))
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

impl Keyed for Partner {
    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_corporate_reads_as_business() {
        let partner: Partner = serde_json::from_str(
            r#"{ "_id": "p1", "name": "Acme", "partnerType": "corporate", "isActive": true }"#,
        )
        .unwrap();
        assert_eq!(partner.partner_type, PartnerType::Business);

        // Never emitted back as "corporate".
        let json = serde_json::to_string(&partner).unwrap();
        assert!(json.contains(r#""partnerType":"business""#));
    }

    #[test]
    fn test_partner_image_variants() {
        let bare = PartnerImage::Url("https://cdn/x.png".into());
        assert_eq!(bare.url(), Some("https://cdn/x.png"));

        let object: PartnerImage =
            serde_json::from_str(r#"{ "imageUrl": "https://cdn/y.png" }"#).unwrap();
        assert_eq!(object.url(), Some("https://cdn/y.png"));

        let older: PartnerImage = serde_json::from_str(r#"{ "url": "https://cdn/z.png" }"#).unwrap();
        assert_eq!(older.url(), Some("https://cdn/z.png"));
    }

    #[test]
    fn test_display_fallbacks() {
        let partner: Partner = serde_json::from_str(
            r#"{
                "_id": "p2",
                "name": "Solo Care",
                "partnerType": "individual",
                "isActive": false,
                "socialLinks": ["https://instagram.com/solocare"]
            }"#,
        )
        .unwrap();

        assert_eq!(partner.display_image(), None);
        assert_eq!(partner.display_website(), Some("https://instagram.com/solocare"));
        assert_eq!(partner.status_label(), "Inactive");
    }
}
