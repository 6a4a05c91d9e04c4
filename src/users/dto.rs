use serde::Deserialize;
use serde_json::Value;

use super::repo_types::NewUser;
use crate::{
    error::AppError,
    validation::{is_valid_email, Validator},
};

/// Request body for signup. Fields stay raw JSON so wrong types reach the validator.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: Option<Value>,
    pub last_name: Option<Value>,
    pub email_address: Option<Value>,
    pub password: Option<Value>,
}

impl CreateUserRequest {
    pub fn validate(self) -> Result<NewUser, AppError> {
        let mut v = Validator::default();
        let first_name = v.required("firstName", self.first_name);
        let last_name = v.required("lastName", self.last_name);
        let email_address = v
            .required("emailAddress", self.email_address)
            .map(|e| e.trim().to_lowercase());
        let password = v.required("password", self.password);

        if let Some(email) = &email_address {
            if !is_valid_email(email) {
                v.push("Please provide a valid email address for \"emailAddress\"");
            }
        }

        match (first_name, last_name, email_address, password) {
            (Some(first_name), Some(last_name), Some(email_address), Some(password))
                if v.is_empty() =>
            {
                Ok(NewUser {
                    first_name: first_name.trim().to_string(),
                    last_name: last_name.trim().to_string(),
                    email_address,
                    password,
                })
            }
            _ => Err(v.into_error()),
        }
    }
}
