//! 账号字段校验
//!
//! 用户名、邮箱、密码的格式与强度规则，注册和管理员建号共用。

use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("USERNAME_RE failed to compile"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("EMAIL_RE failed to compile")
});

// 整段小写比对，足以挡掉最常见的弱口令
const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "password1",
    "12345678",
    "123456789",
    "qwerty123",
    "admin123",
    "abcd1234",
];

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if !(5..=16).contains(&username.len()) {
        return Err("Username must be 5 to 16 characters long");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username may only use letters, numbers, underscores and hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email address is not valid");
    }
    Ok(())
}

/// 密码强度规则
///
/// 至少 8 位，且同时包含大写字母、小写字母和数字；
/// 与常见弱口令撞车的直接拒绝。
fn password_violations(password: &str) -> Vec<&'static str> {
    let mut violations = Vec::new();

    if password.len() < 8 {
        violations.push("Password needs at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push("Password needs an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push("Password needs a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push("Password needs a digit");
    }

    let lowered = password.to_ascii_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        violations.push("Password is too common, pick something stronger");
    }

    violations
}

pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let violations = password_violations(password);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("teacher01").is_ok());
        assert!(validate_username("li_ming-2024").is_ok());
        assert!(validate_username("abc").is_err());
        assert!(validate_username("a".repeat(17).as_str()).is_err());
        assert!(validate_username("bad name!").is_err());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("teacher@school.edu.cn").is_ok());
        assert!(validate_email("a.b+c@example.org").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("user@host").is_err());
    }

    #[test]
    fn test_password_accepts_strong() {
        assert!(validate_password_simple("StrongPass42").is_ok());
        assert!(validate_password_simple("MyP@ssw0rd").is_ok());
    }

    #[test]
    fn test_password_each_rule() {
        assert!(
            validate_password_simple("Ab1")
                .unwrap_err()
                .contains("at least 8 characters")
        );
        assert!(
            validate_password_simple("lowercase1")
                .unwrap_err()
                .contains("uppercase")
        );
        assert!(
            validate_password_simple("UPPERCASE1")
                .unwrap_err()
                .contains("lowercase")
        );
        assert!(
            validate_password_simple("NoDigitsHere")
                .unwrap_err()
                .contains("digit")
        );
    }

    #[test]
    fn test_password_rejects_common() {
        let err = validate_password_simple("Password1").unwrap_err();
        assert!(err.contains("too common"));
        // 大小写变体同样命中
        let err = validate_password_simple("Abcd1234").unwrap_err();
        assert!(err.contains("too common"));
    }
}
