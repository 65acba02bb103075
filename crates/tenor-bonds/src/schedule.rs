//! Cash-flow schedule generation.

use tenor_core::CashFlow;

use crate::error::{BondError, BondResult};

/// Generates the cash-flow schedule of a bullet bond.
///
/// Level coupons of `face * coupon_rate / coupons_per_year` are paid at
/// regular intervals, with the final payment pinned exactly at
/// `maturity_years` even when the maturity is not a whole number of
/// periods. The principal is bundled into the last coupon; when the
/// maturity rounds to zero coupon periods the schedule is a single
/// principal flow at maturity.
///
/// Negative coupon rates are permitted. Face value and maturity must be
/// positive and finite.
///
/// ```
/// use tenor_bonds::bullet_schedule;
///
/// let cfs = bullet_schedule(100.0, 0.05, 2, 2.0).unwrap();
/// assert_eq!(cfs.len(), 4);
/// assert_eq!(cfs[0].amount, 2.5);
/// assert_eq!(cfs[3].amount, 102.5);
/// ```
pub fn bullet_schedule(
    face: f64,
    coupon_rate: f64,
    coupons_per_year: u32,
    maturity_years: f64,
) -> BondResult<Vec<CashFlow>> {
    if !face.is_finite() {
        return Err(BondError::invalid_input("face value must be finite"));
    }
    if !coupon_rate.is_finite() {
        return Err(BondError::invalid_input("coupon rate must be finite"));
    }
    if !maturity_years.is_finite() {
        return Err(BondError::invalid_input("maturity must be finite"));
    }
    if maturity_years <= 0.0 {
        return Err(BondError::invalid_input("maturity must be positive"));
    }
    if coupons_per_year == 0 {
        return Err(BondError::invalid_input(
            "coupon frequency must be positive",
        ));
    }
    if face <= 0.0 {
        return Err(BondError::invalid_input("face value must be positive"));
    }

    let freq = f64::from(coupons_per_year);
    let coupon_amount = coupon_rate * face / freq;
    let time_step = 1.0 / freq;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_payments = (maturity_years * freq).round() as u64;

    let mut cash_flows = Vec::with_capacity(total_payments.max(1) as usize);
    for i in 1..=total_payments {
        let time = if i == total_payments {
            maturity_years
        } else {
            i as f64 * time_step
        };
        cash_flows.push(CashFlow::new(time, coupon_amount));
    }

    match cash_flows.last_mut() {
        Some(last) => last.amount += face,
        None => cash_flows.push(CashFlow::new(maturity_years, face)),
    }

    Ok(cash_flows)
}
