//! Typed values bound to positional parameters.

use rust_decimal::Decimal;
use sqlx::postgres::PgArguments;
use sqlx::Arguments;

#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Text(String),
    Decimal(Decimal),
    Int(i32),
}

/// Encode parameters in order, `$1` first.
pub fn to_arguments(params: Vec<BindValue>) -> Result<PgArguments, sqlx::Error> {
    let mut args = PgArguments::default();
    for p in params {
        let added = match p {
            BindValue::Text(s) => args.add(s),
            BindValue::Decimal(d) => args.add(d),
            BindValue::Int(n) => args.add(n),
        };
        added.map_err(sqlx::Error::Encode)?;
    }
    Ok(args)
}
