/// Split one payment across several bills, proportionally to each bill's
/// share of the combined principal.
///
/// Shares are computed in integer paise and the last bill absorbs the
/// rounding remainder, so the returned parts always sum to `payment`
/// exactly. A zero or negative combined principal degrades to an equal
/// split rather than dividing by zero.
pub fn allocate_receipt(amounts: &[f64], payment: f64) -> Vec<f64> {
    if amounts.is_empty() {
        return Vec::new();
    }

    let payment_paise = to_paise(payment);
    let total: f64 = amounts.iter().sum();
    let last = amounts.len() - 1;

    let mut shares = Vec::with_capacity(amounts.len());
    let mut allocated: i64 = 0;

    for (i, amount) in amounts.iter().enumerate() {
        let paise = if i == last {
            payment_paise - allocated
        } else if total > 0.0 {
            to_paise(payment * amount / total)
        } else {
            payment_paise / amounts.len() as i64
        };
        allocated += paise;
        shares.push(paise as f64 / 100.0);
    }

    shares
}

fn to_paise(value: f64) -> i64 {
    (value * 100.0).round() as i64
}
