use crate::config::AppConfig;
use crate::errors::ClassTrackError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 以配置的参数构建 Argon2id 哈希器
fn hasher() -> Result<Argon2<'static>, ClassTrackError> {
    let cfg = &AppConfig::get().argon2;
    let params = Params::new(cfg.memory_cost, cfg.time_cost, cfg.parallelism, None)
        .map_err(|e| ClassTrackError::validation(format!("Argon2 参数无效: {e}")))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// 生成随机盐并哈希密码
pub fn hash_password(password: &str) -> Result<String, ClassTrackError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ClassTrackError::validation(format!("密码哈希计算失败: {e}")))?;

    Ok(hash.to_string())
}

/// 验证密码，哈希串自带参数，无需再读配置
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(!verify_password("secret", "not-a-phc-string"));
    }
}
