use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaxSaleError>;

#[derive(Error, Debug)]
pub enum TaxSaleError {
    #[error("network error for {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("parse error: {reason}")]
    Parse { reason: String },

    #[error("write error for {target}: {reason}")]
    Write { target: String, reason: String },
}

impl TaxSaleError {
    pub fn network(url: impl Into<String>, reason: impl ToString) -> Self {
        TaxSaleError::Network {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(reason: impl ToString) -> Self {
        TaxSaleError::Parse {
            reason: reason.to_string(),
        }
    }

    pub fn write(target: impl Into<String>, reason: impl ToString) -> Self {
        TaxSaleError::Write {
            target: target.into(),
            reason: reason.to_string(),
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<reqwest::Error> for TaxSaleError {
    fn from(e: reqwest::Error) -> Self {
        let url = e
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".into());
        TaxSaleError::Network {
            url,
            reason: e.without_url().to_string(),
        }
    }
}
