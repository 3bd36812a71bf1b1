//! Fee calculation.

use crate::FeeError;

/// Computes the fee for a transaction from its gas amount and fee per gas.
///
/// A zero operand short-circuits to a zero fee before the sign of the other
/// operand is inspected, so `calculate_fee(-1.0, 0.0)` is `Ok(0.0)`. Otherwise
/// any negative operand is rejected.
pub fn calculate_fee(gas: f64, fee_per_gas: f64) -> Result<f64, FeeError> {
    if gas == 0.0 || fee_per_gas == 0.0 {
        return Ok(0.0);
    }

    if gas < 0.0 || fee_per_gas < 0.0 {
        return Err(FeeError::NegativeOperand { gas, fee_per_gas });
    }

    Ok(gas * fee_per_gas)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(-1.0, 0.0, 0.0)]
    #[case(0.0, 0.0, 0.0)]
    #[case(10.0, 0.0, 0.0)]
    #[case(0.0, -7.5, 0.0)]
    #[case(-0.0, 3.0, 0.0)]
    #[case(10.0, 10.0, 100.0)]
    #[case(20.0, 10.0, 200.0)]
    #[case(1.5, 2.5, 3.75)]
    fn fee_ok(#[case] gas: f64, #[case] fee_per_gas: f64, #[case] expected: f64) {
        assert_eq!(calculate_fee(gas, fee_per_gas), Ok(expected));
    }

    #[rstest]
    #[case(-10.0, 10.0)]
    #[case(10.0, -10.0)]
    #[case(-1.0, -1.0)]
    fn fee_negative_operand(#[case] gas: f64, #[case] fee_per_gas: f64) {
        assert_eq!(
            calculate_fee(gas, fee_per_gas),
            Err(FeeError::NegativeOperand { gas, fee_per_gas })
        );
    }

    #[test]
    fn zero_fee_is_positive_zero() {
        let fee = calculate_fee(-0.0, -5.0).unwrap();
        assert!(fee.is_sign_positive());
    }

    #[test]
    fn positive_fee_is_exact_product() {
        for (gas, fee_per_gas) in [(0.1, 0.2), (21000.0, 1.000_000_1), (1e-9, 3e9)] {
            assert_eq!(calculate_fee(gas, fee_per_gas).unwrap(), gas * fee_per_gas);
        }
    }
}
