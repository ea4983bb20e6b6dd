//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Hanjamo 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HanjamoConfig {
    /// 기본 발음 사전 경로 (없으면 사전 변환 없이 조합만 수행)
    #[serde(default)]
    pub dict_path: Option<PathBuf>,
}

/// 설정 파일 경로: ~/.config/hanjamo/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hanjamo").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> HanjamoConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| HanjamoConfig::default()),
        Err(_) => HanjamoConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &HanjamoConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HanjamoConfig::default();
        assert_eq!(config.dict_path, None);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = HanjamoConfig {
            dict_path: Some(PathBuf::from("/tmp/dict.txt")),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: HanjamoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.dict_path, Some(PathBuf::from("/tmp/dict.txt")));
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 dict_path가 없는 경우 기본값 사용
        let json = r#"{}"#;
        let config: HanjamoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.dict_path, None);
    }
}
