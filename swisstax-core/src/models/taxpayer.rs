use serde::{Deserialize, Serialize};

use crate::models::status::{CivilStatus, Religion};

/// Personal circumstances of the taxpayer (and household).
///
/// `partner_religion` is only meaningful for married taxpayers; a differing
/// recognized denomination triggers the split church tax computation.
/// `children_in_childcare` is clamped to `children` at use sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerProfile {
    pub civil_status: CivilStatus,

    /// Canton code, e.g. "ZH".
    pub canton_code: String,

    /// Municipality identifier, e.g. "zh-zurich".
    pub municipality_id: String,

    pub religion: Religion,

    /// Religion of the spouse, if married.
    pub partner_religion: Option<Religion>,

    /// Number of dependent children.
    pub children: u32,

    /// Number of children in external childcare.
    pub children_in_childcare: u32,
}

impl TaxpayerProfile {
    /// Children in external childcare, never more than the total child count.
    pub fn effective_children_in_childcare(&self) -> u32 {
        self.children_in_childcare.min(self.children)
    }
}
