/// BitoPro API credentials. The email is part of the signed payload
/// (`identity`), not just account metadata.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(email: &str, api_key: &str, api_secret: &str) -> Self {
        Self {
            email: email.to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        }
    }
}
