//! Request and response types for the server API.
//!
//! Field names follow the API's camelCase wire names. Every local instant is a
//! [`crate::KstDateTime`] and every local date a [`crate::KstDate`], so decoding
//! a response normalizes all temporal values to KST.

/// Declares a closed string enumeration of the API together with its wire
/// names, `as_str`, `Display` and a lenient `FromStr` (case-insensitive, `-`
/// accepted for `_`).
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::ParseEnumError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalized = value.trim().replace('-', "_");
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str().eq_ignore_ascii_case(&normalized))
                    .ok_or_else(|| crate::error::ParseEnumError {
                        kind: stringify!($name),
                        value: value.to_owned(),
                    })
            }
        }
    };
}

pub mod display;
pub mod member;
pub mod order;
pub mod products;

api_enum! {
    /// `Y` / `N` flag.
    YesNo { Yes => "Y", No => "N" }
}

impl YesNo {
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

api_enum! {
    SortDirection { Asc => "ASC", Desc => "DESC" }
}

api_enum! {
    ShippingAreaType {
        PartnerShippingArea => "PARTNER_SHIPPING_AREA",
        MallShippingArea => "MALL_SHIPPING_AREA",
    }
}
