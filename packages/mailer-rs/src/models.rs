use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct MailRequest<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct MailResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
