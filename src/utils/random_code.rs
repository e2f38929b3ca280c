use rand::Rng;

// 去掉了易混淆的 0/O/1/I
const CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 生成指定长度的随机加入码
pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_code_length() {
        assert_eq!(generate_random_code(8).len(), 8);
        assert_eq!(generate_random_code(16).len(), 16);
    }

    #[test]
    fn test_generate_random_code_charset() {
        let code = generate_random_code(64);
        assert!(code.bytes().all(|b| CODE_CHARSET.contains(&b)));
    }
}
