//! Report Form Model
//!
//! Raw values as typed into the report form, and their validation into a
//! `NewItem`. The board itself never validates.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Category, ItemStatus, NewItem};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Report form state
#[derive(Debug, Clone, PartialEq)]
pub struct ReportForm {
    pub status: ItemStatus,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    /// `YYYY-MM-DD` as produced by a date input
    pub date: String,
    pub contact_name: String,
    pub contact_email: String,
    pub image_url: String,
}

impl ReportForm {
    /// Blank form dated `today`
    pub fn new(status: ItemStatus, today: NaiveDate) -> Self {
        Self {
            status,
            title: String::new(),
            description: String::new(),
            category: Category::Electronics,
            location: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            contact_name: String::new(),
            contact_email: String::new(),
            image_url: String::new(),
        }
    }

    pub fn validate(&self) -> Result<NewItem, ReportError> {
        let title = required("Title", &self.title)?;
        let description = required("Description", &self.description)?;
        let location = required("Location", &self.location)?;
        let date_raw = required("Date", &self.date)?;
        let contact_name = required("Your name", &self.contact_name)?;
        let contact_email = required("Your email", &self.contact_email)?;

        let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
            .map_err(|_| ReportError::InvalidDate(date_raw.clone()))?;

        if !looks_like_email(&contact_email) {
            return Err(ReportError::InvalidEmail(contact_email));
        }

        let image_url = Some(self.image_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Ok(NewItem {
            title,
            description,
            category: self.category,
            status: self.status,
            location,
            date,
            contact_email,
            contact_name,
            image_url,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ReportError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ReportError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !s.contains(char::is_whitespace)
        }
        None => false,
    }
}
