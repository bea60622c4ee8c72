//! Closed-form financial arithmetic for the calculator pages.
//!
//! Every function validates its inputs up front and returns
//! `Error::InvalidInput` for out-of-domain values; degenerate but
//! mathematically defined inputs (zero interest rate) take an exact
//! special case instead of an error. No public function returns
//! NaN or infinity.

pub mod emi;
pub mod gratuity;
pub mod interest;
pub mod sip;
pub mod swp;
pub mod tax;

mod validate;

pub use fincalc_core::{Error, Result};

pub mod prelude {
    pub use crate::emi::{self, EmiBreakdown, EmiPeriod};
    pub use crate::gratuity::{self, GratuityResult};
    pub use crate::interest;
    pub use crate::sip::{self, SipBreakdown};
    pub use crate::swp::{self, SwpPeriod, SwpResult};
    pub use crate::tax::{Regime, Slab, TaxBreakdown};
}
