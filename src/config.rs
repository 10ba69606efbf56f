use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// 用户配置 (~/.config/guessing-game/config.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// tracing 过滤指令，`RUST_LOG` 优先
    pub log_level: String,
    /// 是否显示规则面板
    pub show_rules: bool,
    /// 固定随机种子，缺省时使用系统熵
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_rules: true,
            seed: None,
        }
    }
}

/// 获取配置目录路径
pub fn config_path() -> io::Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot locate config directory"))?
        .join("guessing-game");
    Ok(dir.join("config.toml"))
}

/// 从TOML文件加载配置，文件不存在时返回默认值
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

fn parse_config(content: &str) -> io::Result<Config> {
    toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = parse_config("seed = 1234\nshow_rules = false\n").unwrap();
        assert_eq!(config.seed, Some(1234));
        assert!(!config.show_rules);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_file_is_invalid_data() {
        let err = parse_config("seed = \"not a number\"").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("guessing-game-does-not-exist.toml");
        let config = load_config(&path).unwrap();
        assert_eq!(config, Config::default());
    }
}
