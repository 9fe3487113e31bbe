//! # Domain Types
//!
//! The fixed menu of the order form and the tax rate applied to it.
//!
//! ## Menu
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Menu                                         │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CrustType     │   │   SizeOption    │   │    Topping      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Thin           │   │  Small    $8    │   │  Cheese         │       │
//! │  │  Regular        │   │  Medium   $12   │   │  Pepperoni      │       │
//! │  │  Deep-dish      │   │  Large    $16   │   │  Mushrooms      │       │
//! │  │                 │   │  Super    $20   │   │  Olives         │       │
//! │  │  (no price)     │   │  Large          │   │  Bacon          │       │
//! │  │  pick ≤ 1       │   │  pick = 1       │   │  Pineapple      │       │
//! │  └─────────────────┘   └─────────────────┘   │  $1 each, 0..6  │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every option has a `label()` the presentation layer puts on its widget,
//! and `ALL` lists the options in the order they appear on the form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 700 bps = 7%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Percentage without trailing zeros: `7%`, `7.5%`, `8.25%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}%", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

/// Lowercase with every non-alphanumeric dropped, so that `"Deep-dish"`,
/// `"DeepDish"` and `"deep_dish"` all compare equal.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_option<T: Copy + fmt::Debug>(
    kind: &'static str,
    all: &[T],
    label: impl Fn(T) -> &'static str,
    value: &str,
) -> Result<T, CoreError> {
    let wanted = normalize(value);
    if wanted.is_empty() {
        return Err(CoreError::UnknownOption {
            kind,
            value: value.to_string(),
        });
    }

    all.iter()
        .copied()
        .find(|option| {
            normalize(label(*option)) == wanted || normalize(&format!("{:?}", option)) == wanted
        })
        .ok_or_else(|| CoreError::UnknownOption {
            kind,
            value: value.to_string(),
        })
}

// =============================================================================
// Crust
// =============================================================================

/// Crust choice. Crust does not affect the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrustType {
    Thin,
    Regular,
    DeepDish,
}

impl CrustType {
    /// All crusts in form order.
    pub const ALL: [CrustType; 3] = [CrustType::Thin, CrustType::Regular, CrustType::DeepDish];

    /// Label shown on the radio button.
    pub const fn label(&self) -> &'static str {
        match self {
            CrustType::Thin => "Thin",
            CrustType::Regular => "Regular",
            CrustType::DeepDish => "Deep-dish",
        }
    }

    /// Label printed on the receipt, e.g. `Deep-dish Crust`.
    pub const fn receipt_label(&self) -> &'static str {
        match self {
            CrustType::Thin => "Thin Crust",
            CrustType::Regular => "Regular Crust",
            CrustType::DeepDish => "Deep-dish Crust",
        }
    }
}

impl fmt::Display for CrustType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CrustType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("crust", &CrustType::ALL, |c| c.label(), s)
    }
}

// =============================================================================
// Size
// =============================================================================

/// Pizza size. Exactly one is always active on the form.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SizeOption {
    /// First entry of the drop-down, selected at startup and after a clear.
    #[default]
    Small,
    Medium,
    Large,
    SuperLarge,
}

impl SizeOption {
    /// All sizes in drop-down order.
    pub const ALL: [SizeOption; 4] = [
        SizeOption::Small,
        SizeOption::Medium,
        SizeOption::Large,
        SizeOption::SuperLarge,
    ];

    /// Label shown in the drop-down and on the receipt.
    pub const fn label(&self) -> &'static str {
        match self {
            SizeOption::Small => "Small",
            SizeOption::Medium => "Medium",
            SizeOption::Large => "Large",
            SizeOption::SuperLarge => "Super Large",
        }
    }

    /// Base price of the pizza.
    ///
    /// ```rust
    /// use pizza_core::types::SizeOption;
    ///
    /// assert_eq!(SizeOption::Medium.price().cents(), 1200);
    /// ```
    pub const fn price(&self) -> Money {
        match self {
            SizeOption::Small => Money::from_major_minor(8, 0),
            SizeOption::Medium => Money::from_major_minor(12, 0),
            SizeOption::Large => Money::from_major_minor(16, 0),
            SizeOption::SuperLarge => Money::from_major_minor(20, 0),
        }
    }
}

impl fmt::Display for SizeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SizeOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("size", &SizeOption::ALL, |size| size.label(), s)
    }
}

// =============================================================================
// Topping
// =============================================================================

/// Topping. Any number may be selected, each at the same flat price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topping {
    Cheese,
    Pepperoni,
    Mushrooms,
    Olives,
    Bacon,
    Pineapple,
}

impl Topping {
    /// All toppings in form order. `Ord` follows the same order, which is
    /// what keeps receipt lines stable.
    pub const ALL: [Topping; 6] = [
        Topping::Cheese,
        Topping::Pepperoni,
        Topping::Mushrooms,
        Topping::Olives,
        Topping::Bacon,
        Topping::Pineapple,
    ];

    /// Label shown on the checkbox and on the receipt.
    pub const fn label(&self) -> &'static str {
        match self {
            Topping::Cheese => "Cheese",
            Topping::Pepperoni => "Pepperoni",
            Topping::Mushrooms => "Mushrooms",
            Topping::Olives => "Olives",
            Topping::Bacon => "Bacon",
            Topping::Pineapple => "Pineapple",
        }
    }

    /// Price of one topping.
    pub const fn price(&self) -> Money {
        crate::TOPPING_PRICE
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Topping {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("topping", &Topping::ALL, |t| t.label(), s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
