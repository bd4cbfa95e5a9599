/// The `amount` attribute exactly as the table stored it.
#[derive(Clone, Debug, PartialEq)]
pub enum RawAmount {
    /// Numeric attribute (`N`), kept as its decimal string.
    Number(String),
    /// String attribute (`S`).
    Text(String),
    /// Any other attribute type, by name.
    Unsupported(String),
}

/// One item of the order table. Only `amount` feeds the report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderRecord {
    pub amount: Option<RawAmount>,
}

impl OrderRecord {
    pub fn new(amount: Option<RawAmount>) -> Self {
        Self { amount }
    }

    pub fn with_number(value: impl Into<String>) -> Self {
        Self::new(Some(RawAmount::Number(value.into())))
    }

    pub fn with_text(value: impl Into<String>) -> Self {
        Self::new(Some(RawAmount::Text(value.into())))
    }

    /// Amount as a float. A missing amount is `0.0`; anything that does not
    /// parse as a number is an error carrying the reason.
    pub fn amount(&self) -> Result<f64, String> {
        match &self.amount {
            None => Ok(0.0),
            Some(RawAmount::Number(raw)) | Some(RawAmount::Text(raw)) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("could not convert {raw:?} to a number")),
            Some(RawAmount::Unsupported(kind)) => {
                Err(format!("unsupported attribute type {kind}"))
            }
        }
    }
}
