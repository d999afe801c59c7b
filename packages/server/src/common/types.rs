// Common types used across multiple domains and layers

use std::fmt;

/// Contact information published by an organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: Option<String>,
}

impl fmt::Display for ContactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)?;
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            write!(f, " / {}", phone)?;
        }
        Ok(())
    }
}
