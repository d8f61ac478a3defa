use secrecy::{ExposeSecret, Secret};

use crate::domain::{
    account::AccountId,
    validation::{BLANK, PASSWORD_LENGTH, Rule, USERNAME_LENGTH, ValidationErrors, check_field},
};

/// Input for registering a new account. Every field is required.
#[derive(Debug, Clone)]
pub struct CreateAccountRequest {
    pub email: String,
    pub username: String,
    pub password: Secret<String>,
    pub repeat_password: Secret<String>,
}

impl CreateAccountRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_field(&mut errors, "email", &self.email, &[Rule::Required, Rule::Email]);
        check_field(
            &mut errors,
            "username",
            &self.username,
            &[Rule::Required, USERNAME_LENGTH, Rule::Alphanumeric],
        );
        check_field(
            &mut errors,
            "password",
            self.password.expose_secret(),
            &[Rule::Required, PASSWORD_LENGTH, Rule::Alphanumeric],
        );
        check_field(
            &mut errors,
            "repeatPassword",
            self.repeat_password.expose_secret(),
            &[Rule::Required, PASSWORD_LENGTH, Rule::Alphanumeric],
        );

        errors.into_result()
    }

    pub fn passwords_match(&self) -> bool {
        self.password.expose_secret() == self.repeat_password.expose_secret()
    }
}

/// Partial update of an account. `None` leaves a field unchanged;
/// `old_password` must be supplied for any update.
#[derive(Debug, Clone)]
pub struct UpdateAccountRequest {
    pub id: AccountId,
    pub email: Option<String>,
    pub username: Option<String>,
    pub old_password: Option<Secret<String>>,
    pub new_password: Option<Secret<String>>,
}

impl UpdateAccountRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(email) = &self.email {
            // A present but empty email is not an address.
            if email.is_empty() {
                errors.insert("email", Rule::Email.reason());
            } else {
                check_field(&mut errors, "email", email, &[Rule::Email]);
            }
        }
        if let Some(username) = &self.username {
            if username.is_empty() {
                errors.insert("username", USERNAME_LENGTH.reason());
            } else {
                check_field(
                    &mut errors,
                    "username",
                    username,
                    &[USERNAME_LENGTH, Rule::Alphanumeric],
                );
            }
        }
        match &self.old_password {
            None => errors.insert("oldPassword", BLANK),
            Some(old) => check_field(
                &mut errors,
                "oldPassword",
                old.expose_secret(),
                &[Rule::Required, Rule::Alphanumeric],
            ),
        }
        if let Some(new) = &self.new_password {
            if new.expose_secret().is_empty() {
                errors.insert("newPassword", PASSWORD_LENGTH.reason());
            } else {
                check_field(
                    &mut errors,
                    "newPassword",
                    new.expose_secret(),
                    &[PASSWORD_LENGTH, Rule::Alphanumeric],
                );
            }
        }

        errors.into_result()
    }
}
