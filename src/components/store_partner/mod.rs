mod view;

pub use view::StorePartnerStep;

use crate::environment::types::StoreBenchmark;
use crate::loc;

/// DOM id of the partner step that accepts focus
pub const PRESSABLE_FOCUS_ID: &str = "store-partner-pressable";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StorePartner {
    Pressable,
    Bluehost { partner_name: Option<&'static str> },
    Siteground,
}

impl StorePartner {
    pub fn for_bucket(bucket: StoreBenchmark) -> Self {
        match bucket {
            StoreBenchmark::Bluehost => StorePartner::Bluehost { partner_name: None },
            StoreBenchmark::BluehostWithWoo => StorePartner::Bluehost {
                partner_name: Some(loc!("Bluehost with WooCommerce")),
            },
            StoreBenchmark::Siteground => StorePartner::Siteground,
            StoreBenchmark::Pressable => StorePartner::Pressable,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StorePartner::Pressable => "Pressable",
            StorePartner::Bluehost { partner_name } => partner_name.unwrap_or("Bluehost"),
            StorePartner::Siteground => "SiteGround",
        }
    }

    pub fn pitch(&self) -> &'static str {
        match self {
            StorePartner::Pressable => loc!(
                "Pressable hosts your store with WooCommerce preinstalled and managed updates."
            ),
            StorePartner::Bluehost { .. } => {
                loc!("Bluehost gets your online store up and running in minutes.")
            }
            StorePartner::Siteground => {
                loc!("SiteGround sets up WordPress and WooCommerce for your store.")
            }
        }
    }

    pub fn signup_url(&self) -> &'static str {
        match self {
            StorePartner::Pressable => "https://pressable.com/wordpress-hosting/",
            StorePartner::Bluehost { partner_name: None } => {
                "https://www.bluehost.com/wordpress/wordpress-hosting"
            }
            StorePartner::Bluehost { .. } => "https://www.bluehost.com/wordpress/woocommerce-hosting",
            StorePartner::Siteground => "https://www.siteground.com/woocommerce-hosting.htm",
        }
    }

    /// Only the Pressable step exposes a focus handle
    pub fn focus_target(&self) -> Option<&'static str> {
        match self {
            StorePartner::Pressable => Some(PRESSABLE_FOCUS_ID),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_map_to_partners() {
        assert_eq!(
            StorePartner::for_bucket(StoreBenchmark::Bluehost),
            StorePartner::Bluehost { partner_name: None }
        );
        assert_eq!(
            StorePartner::for_bucket(StoreBenchmark::BluehostWithWoo),
            StorePartner::Bluehost {
                partner_name: Some("Bluehost with WooCommerce")
            }
        );
        assert_eq!(
            StorePartner::for_bucket(StoreBenchmark::Siteground),
            StorePartner::Siteground
        );
        assert_eq!(
            StorePartner::for_bucket(StoreBenchmark::Pressable),
            StorePartner::Pressable
        );
    }

    #[test]
    fn variant_label_overrides_name() {
        let partner = StorePartner::for_bucket(StoreBenchmark::BluehostWithWoo);
        assert_eq!(partner.name(), "Bluehost with WooCommerce");
        assert_eq!(
            StorePartner::for_bucket(StoreBenchmark::Bluehost).name(),
            "Bluehost"
        );
    }

    #[test]
    fn only_pressable_is_focusable() {
        assert_eq!(
            StorePartner::Pressable.focus_target(),
            Some(PRESSABLE_FOCUS_ID)
        );
        assert_eq!(StorePartner::Siteground.focus_target(), None);
        assert_eq!(
            StorePartner::Bluehost { partner_name: None }.focus_target(),
            None
        );
    }
}
