//! Form Validation
//!
//! Local checks run before any request is sent. Raw field values come in as
//! strings exactly as typed.

use crate::models::{AppealCategory, AppealCreate, LoginRequest, RegisterRequest};

pub const TITLE_MIN_CHARS: usize = 5;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const PASSWORD_MIN_CHARS: usize = 6;

pub const TITLE_TOO_SHORT: &str = "Заголовок должен быть не менее 5 символов";
pub const DESCRIPTION_TOO_SHORT: &str = "Описание должно быть не менее 10 символов";
pub const NOT_A_NUMBER: &str = "Введите число";
pub const EMAIL_INVALID: &str = "Введите корректный email";
pub const PASSWORD_REQUIRED: &str = "Введите пароль";
pub const PASSWORD_TOO_SHORT: &str = "Пароль должен быть не менее 6 символов";
pub const FULL_NAME_REQUIRED: &str = "Введите имя";

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Empty means absent; otherwise must be a finite number (`,` accepted as decimal mark)
fn optional_number(value: &str) -> Result<Option<f64>, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .map(Some)
        .ok_or(NOT_A_NUMBER)
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !value.contains(char::is_whitespace),
        None => false,
    }
}

// ========================
// Appeal form
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppealForm {
    pub title: String,
    pub description: String,
    /// Wire value of the category, empty for automatic classification
    pub category: String,
    pub latitude: String,
    pub longitude: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppealFormErrors {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    pub latitude: Option<&'static str>,
    pub longitude: Option<&'static str>,
}

impl AppealFormErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl AppealForm {
    pub fn validate(&self) -> Result<AppealCreate, AppealFormErrors> {
        let mut errors = AppealFormErrors::default();

        if char_len(&self.title) < TITLE_MIN_CHARS {
            errors.title = Some(TITLE_TOO_SHORT);
        }
        if char_len(&self.description) < DESCRIPTION_MIN_CHARS {
            errors.description = Some(DESCRIPTION_TOO_SHORT);
        }
        let latitude = optional_number(&self.latitude).unwrap_or_else(|msg| {
            errors.latitude = Some(msg);
            None
        });
        let longitude = optional_number(&self.longitude).unwrap_or_else(|msg| {
            errors.longitude = Some(msg);
            None
        });

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(AppealCreate {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            // Unknown values fall back to automatic classification
            category: AppealCategory::from_value(self.category.trim()),
            latitude,
            longitude,
            address: optional_text(&self.address),
            images: Vec::new(),
        })
    }
}

// ========================
// Login form
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, LoginFormErrors> {
        let errors = LoginFormErrors {
            email: (!looks_like_email(&self.email)).then_some(EMAIL_INVALID),
            password: self.password.is_empty().then_some(PASSWORD_REQUIRED),
        };
        if errors != LoginFormErrors::default() {
            return Err(errors);
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

// ========================
// Register form
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterFormErrors {
    pub email: Option<&'static str>,
    pub full_name: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, RegisterFormErrors> {
        let errors = RegisterFormErrors {
            email: (!looks_like_email(&self.email)).then_some(EMAIL_INVALID),
            full_name: (char_len(&self.full_name) == 0).then_some(FULL_NAME_REQUIRED),
            password: (self.password.chars().count() < PASSWORD_MIN_CHARS).then_some(PASSWORD_TOO_SHORT),
        };
        if errors != RegisterFormErrors::default() {
            return Err(errors);
        }
        Ok(RegisterRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            full_name: self.full_name.trim().to_string(),
            phone: optional_text(&self.phone),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn appeal_form(title: &str, description: &str) -> AppealForm {
        AppealForm {
            title: title.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_four_char_title_is_rejected() {
        let errors = appeal_form("Яма!", "Большая яма у подъезда").validate().unwrap_err();
        assert_eq!(errors.title, Some(TITLE_TOO_SHORT));
        assert_eq!(errors.description, None);
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // 5 Cyrillic characters = 10 bytes
        assert!(appeal_form("Дорога", "Разбитый асфальт").validate().is_ok());
        let errors = appeal_form("  Ямы ", "Короткое").validate().unwrap_err();
        assert_eq!(errors.title, Some(TITLE_TOO_SHORT));
        assert_eq!(errors.description, Some(DESCRIPTION_TOO_SHORT));
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let form = AppealForm {
            title: " Не горит фонарь ".to_string(),
            description: "Во дворе дома 5 не горит фонарь".to_string(),
            category: "lighting".to_string(),
            latitude: "55,7558".to_string(),
            longitude: "37.6173".to_string(),
            address: "  ".to_string(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.title, "Не горит фонарь");
        assert_eq!(payload.category, Some(AppealCategory::Lighting));
        assert_eq!(payload.latitude, Some(55.7558));
        assert_eq!(payload.longitude, Some(37.6173));
        assert_eq!(payload.address, None);
    }

    #[test]
    fn test_automatic_category_is_omitted() {
        let payload = appeal_form("Мусор во дворе", "Контейнеры не вывозят неделю").validate().unwrap();
        assert_eq!(payload.category, None);
    }

    #[rstest]
    #[case("north")]
    #[case("NaN")]
    #[case("inf")]
    fn test_coordinates_must_be_numbers(#[case] raw: &str) {
        let mut form = appeal_form("Мусор во дворе", "Контейнеры не вывозят неделю");
        form.latitude = raw.to_string();
        assert_eq!(form.validate().unwrap_err().latitude, Some(NOT_A_NUMBER));
    }

    #[rstest]
    #[case("user@example.com", true)]
    #[case("user@", false)]
    #[case("@example.com", false)]
    #[case("user example.com", false)]
    #[case("us er@example.com", false)]
    fn test_email_shape(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(looks_like_email(email), valid);
    }

    #[test]
    fn test_login_form() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.email, Some(EMAIL_INVALID));
        assert_eq!(errors.password, Some(PASSWORD_REQUIRED));

        let request = LoginForm {
            email: " admin@glas.ru ".to_string(),
            password: "admin123".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(request.email, "admin@glas.ru");
    }

    #[test]
    fn test_register_form() {
        let form = RegisterForm {
            email: "test@example.com".to_string(),
            full_name: "Test User".to_string(),
            phone: String::new(),
            password: "12345".to_string(),
        };
        assert_eq!(form.validate().unwrap_err().password, Some(PASSWORD_TOO_SHORT));

        let form = RegisterForm {
            password: "testpass123".to_string(),
            ..form
        };
        let request = form.validate().unwrap();
        assert_eq!(request.phone, None);
        assert_eq!(request.full_name, "Test User");
    }
}
