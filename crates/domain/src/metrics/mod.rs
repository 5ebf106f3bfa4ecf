use bigdecimal::{BigDecimal, Zero};

pub mod methodology;
pub mod record;

pub use methodology::Methodology;
pub use record::{Dimensions, MetricsRecord};

/// Sums decimal values exactly. Precision is never lost, however many digits
/// the operands carry.
pub fn sum_exact<'a, I>(values: I) -> BigDecimal
where
    I: IntoIterator<Item = &'a BigDecimal>,
{
    values
        .into_iter()
        .fold(BigDecimal::zero(), |acc, value| acc + value)
}

/// Renders a decimal in plain notation without trailing fractional zeros
/// (`3.30` -> `3.3`).
pub fn render_decimal(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}
