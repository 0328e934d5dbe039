use precifica_catalog::Product;
use precifica_core::pct_of;
use precifica_fiscal::Issuer;

use crate::real_cost::RealCost;

/// Per-unit real cost of a resold (outsourced) product: purchase price
/// minus the recoverable input-tax credit, with the credit forced to 0
/// when the issuer operates under the simplified regime.
pub fn purchase_real_cost(product: &Product, issuer: Issuer) -> RealCost {
    let tax_credit = if issuer.recovers_input_tax() {
        pct_of(product.purchase_price, product.purchase_icms_rate)
    } else {
        0.0
    };
    RealCost::new(product.purchase_price, tax_credit)
}
